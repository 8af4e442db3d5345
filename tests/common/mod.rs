use axum::{
    async_trait,
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use mining_tickets::{
    application::{create_application, create_middleware_with_body_limit, ApplicationState},
    repository::{RatingsRepositoryImpl, TicketsRepositoryImpl},
    service::{
        mail_service::{Mail, MailError, MailService},
        ratings_service::RatingsServiceImpl,
        tickets_service::{TicketsServiceConfig, TicketsServiceImpl},
    },
    ticket_link,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

pub const BASE_URL: &str = "https://tickets.example.com";
pub const OPERATOR_EMAIL: &str = "operator@example.com";
pub const MAX_HTTP_CONTENT_LEN: usize = 4096;

///
/// Keeps every mail instead of sending it
///
#[derive(Default)]
pub struct RecordingMailService {
    mails: Mutex<Vec<Mail>>,
    failing: bool,
}

impl RecordingMailService {
    pub fn failing() -> Self {
        Self {
            mails: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    pub fn mails(&self) -> Vec<Mail> {
        self.mails.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailService for RecordingMailService {
    async fn send(&self, mail: Mail) -> Result<(), MailError> {
        if self.failing {
            let err = "not an address".parse::<lettre::Address>().unwrap_err();
            return Err(MailError::Address(err));
        }

        self.mails.lock().unwrap().push(mail);
        Ok(())
    }
}

pub struct TestApplication {
    pub router: Router,
    pub mail_service: Arc<RecordingMailService>,
}

pub fn create_test_application() -> TestApplication {
    create_test_application_with_mail_service(RecordingMailService::default())
}

pub fn create_test_application_with_mail_service(
    mail_service: RecordingMailService,
) -> TestApplication {
    let mail_service = Arc::new(mail_service);

    let config = TicketsServiceConfig {
        base_url: BASE_URL.to_string(),
        operator_email: OPERATOR_EMAIL.to_string(),
    };
    let tickets_service = TicketsServiceImpl::new(
        config,
        Arc::new(TicketsRepositoryImpl::new()),
        mail_service.clone(),
    );
    let ratings_service = RatingsServiceImpl::new(Arc::new(RatingsRepositoryImpl::new()));

    let state = ApplicationState {
        tickets_service: Arc::new(tickets_service),
        ratings_service: Arc::new(ratings_service),
    };
    let router = create_application(
        state,
        create_middleware_with_body_limit(MAX_HTTP_CONTENT_LEN),
    );

    TestApplication {
        router,
        mail_service,
    }
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();

    (status, body)
}

pub async fn send_json(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(router, request).await;
    let value = serde_json::from_str::<Value>(&body).unwrap();

    (status, value)
}

///
/// Token is only shared with the operator, so it is taken from the alert mail
///
pub fn owner_token(mails: &[Mail]) -> String {
    let alert = mails
        .iter()
        .rev()
        .find(|mail| mail.to == OPERATOR_EMAIL)
        .expect("operator alert not sent");

    let prefix = format!("{BASE_URL}/ticket?");
    let start = alert.html.find(&prefix).expect("owner link missing") + prefix.len();
    alert.html[start..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

pub async fn create_ticket(application: &TestApplication, platform: &str) -> (Uuid, String) {
    let (status, _) = send_json(
        &application.router,
        post_json(
            "/api/ticket",
            serde_json::json!({
                "username": "Foo",
                "platform": platform,
                "areaSize": "32x32",
                "email": "a@b.com",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let token = owner_token(&application.mail_service.mails());
    let id = ticket_link::decode_ticket_id(&token).unwrap();

    (id, token)
}
