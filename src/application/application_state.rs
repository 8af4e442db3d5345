use super::ApplicationEnv;
use crate::{
    repository::{RatingsRepositoryImpl, TicketsRepositoryImpl},
    service::{
        mail_service::{SmtpMailService, SmtpMailServiceConfig},
        ratings_service::{RatingsService, RatingsServiceImpl},
        tickets_service::{TicketsService, TicketsServiceConfig, TicketsServiceImpl},
    },
};
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub tickets_service: Arc<dyn TicketsService>,
    pub ratings_service: Arc<dyn RatingsService>,
}

pub fn create_state(env: &ApplicationEnv) -> anyhow::Result<ApplicationState> {
    tracing::info!("creating repositories");
    let tickets_repository = TicketsRepositoryImpl::new();
    let tickets_repository = Arc::new(tickets_repository);

    let ratings_repository = RatingsRepositoryImpl::new();
    let ratings_repository = Arc::new(ratings_repository);

    tracing::info!("creating services");
    let config = SmtpMailServiceConfig {
        server: env.smtp_server.clone(),
        port: env.smtp_port,
        username: env.smtp_username.clone(),
        password: env.smtp_password.clone(),
    };
    let mail_service = SmtpMailService::new(config)?;
    let mail_service = Arc::new(mail_service);

    let config = TicketsServiceConfig {
        base_url: env.base_url.clone(),
        operator_email: env.operator_email.clone(),
    };
    let tickets_service = TicketsServiceImpl::new(config, tickets_repository, mail_service);
    let tickets_service = Arc::new(tickets_service);

    let ratings_service = RatingsServiceImpl::new(ratings_repository);
    let ratings_service = Arc::new(ratings_service);

    Ok(ApplicationState {
        tickets_service,
        ratings_service,
    })
}
