use anyhow::anyhow;
use std::net::SocketAddr;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,
    /// Directives for the log file layer, `info` when empty
    pub log_file_filter: String,

    pub bind_address: SocketAddr,

    /// Prefix of owner links sent to the operator, trailing '/' is trimmed
    pub base_url: String,
    pub operator_email: String,

    pub max_http_content_len: usize,

    pub smtp_server: String,
    pub smtp_port: u16,
    /// Used as the sender address as well
    pub smtp_username: String,
    pub smtp_password: String,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("MINING_TICKETS_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("MINING_TICKETS_LOG_FILENAME")?;
        let log_file_filter = Self::env_var("MINING_TICKETS_LOG_FILE_FILTER").unwrap_or_default();
        let bind_address = Self::env_var("MINING_TICKETS_BIND_ADDRESS")?.parse()?;
        let base_url = Self::env_var("MINING_TICKETS_BASE_URL")?
            .trim_end_matches('/')
            .to_string();
        let operator_email = Self::env_var("MINING_TICKETS_OPERATOR_EMAIL")?;
        let max_http_content_len = Self::env_var("MINING_TICKETS_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let smtp_server = Self::env_var("MINING_TICKETS_SMTP_SERVER")?;
        let smtp_port = Self::env_var("MINING_TICKETS_SMTP_PORT")?.parse()?;
        let smtp_username = Self::env_var("MINING_TICKETS_SMTP_USERNAME")?;
        let smtp_password = Self::env_var("MINING_TICKETS_SMTP_PASSWORD")?;

        Ok(Self {
            log_directory,
            log_filename,
            log_file_filter,
            bind_address,
            base_url,
            operator_email,
            max_http_content_len,
            smtp_server,
            smtp_port,
            smtp_username,
            smtp_password,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
