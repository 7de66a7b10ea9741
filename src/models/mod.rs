// Stored records, typed requests and shaped responses

pub mod date;
pub mod exercise;
pub mod fields;
pub mod user;

pub use date::*;
pub use exercise::*;
pub use user::*;
