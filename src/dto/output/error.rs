use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Error {
    pub error: &'static str,
    pub details: String,
}
