use super::{Mail, MailError};
use axum::async_trait;

///
/// Gateway used to notify players and the operator
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailService: Send + Sync {
    ///
    /// Sends mail and waits until the gateway accepts it.
    /// Failed mails are not retried.
    ///
    async fn send(&self, mail: Mail) -> Result<(), MailError>;
}
