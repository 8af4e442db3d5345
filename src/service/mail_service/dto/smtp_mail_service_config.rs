pub struct SmtpMailServiceConfig {
    pub server: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}
