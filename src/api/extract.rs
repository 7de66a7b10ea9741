use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts, HeaderValue, StatusCode},
    Form, Json,
};
use serde::de::DeserializeOwned;

use super::ApiError;

/// Request body accepted either as JSON or as an HTML form submission,
/// chosen by the `Content-Type` header. A request without a content type is
/// read as an (often empty) `application/x-www-form-urlencoded` body.
#[derive(Debug)]
pub struct Payload<T>(pub T);

/// Query string whose rejections use the same JSON envelope as every other
/// error, instead of axum's plain-text default.
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

fn is_json(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim_start().starts_with("application/json"))
        .unwrap_or(false)
}

fn malformed(status: StatusCode, message: String) -> ApiError {
    tracing::debug!(%status, %message, "Rejected request input");
    ApiError::Malformed(message)
}

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(mut request: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&request) {
            let Json(value) = Json::<T>::from_request(request, state)
                .await
                .map_err(|rejection| malformed(rejection.status(), rejection.body_text()))?;
            Ok(Payload(value))
        } else {
            request
                .headers_mut()
                .entry(CONTENT_TYPE)
                .or_insert(HeaderValue::from_static("application/x-www-form-urlencoded"));

            let Form(value) = Form::<T>::from_request(request, state)
                .await
                .map_err(|rejection| malformed(rejection.status(), rejection.body_text()))?;
            Ok(Payload(value))
        }
    }
}

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| malformed(rejection.status(), rejection.body_text()))?;
        Ok(QueryParams(value))
    }
}
