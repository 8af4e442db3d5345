use crate::error::Error;
use axum::extract::FromRequest;

///
/// `axum::Json` whose rejections are answered with the service error body
///
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);
