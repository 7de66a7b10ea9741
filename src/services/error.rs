use thiserror::Error;

use crate::store::StoreError;

/// Ways a user or exercise operation can fail.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("invalid username")]
    InvalidUsername,
    #[error("invalid user")]
    InvalidUser,
    #[error("invalid payload")]
    InvalidPayload,
    #[error("invalid date")]
    InvalidDate,
    #[error(transparent)]
    Store(#[from] StoreError),
}
