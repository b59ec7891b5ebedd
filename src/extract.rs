//! Extractors that report rejections as [Error] so that malformed requests get
//! the same JSON error body as every other API failure.

use axum::extract::{
    FromRequest, FromRequestParts,
    rejection::{JsonRejection, PathRejection},
};

use crate::Error;

/// Like [axum::Json], but a body that is not valid JSON or does not match `T`
/// is rejected with [Error::InvalidPayload] (422).
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

/// Like [axum::extract::Path], but a segment that does not parse as `T` is
/// rejected with [Error::InvalidPayload] (422).
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct ApiPath<T>(pub T);

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("rejected JSON body: {rejection}");
        Error::InvalidPayload(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("rejected path parameters: {rejection}");
        Error::InvalidPayload(rejection.body_text())
    }
}
