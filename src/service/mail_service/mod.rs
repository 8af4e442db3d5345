mod dto;
mod error;
mod mail_service;
mod smtp_mail_service;

pub use dto::{Mail, SmtpMailServiceConfig};
pub use error::*;
pub use mail_service::*;
pub use smtp_mail_service::*;
