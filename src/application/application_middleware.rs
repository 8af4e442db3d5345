use super::ApplicationEnv;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

pub struct ApplicationMiddleware {
    pub body_limit: RequestBodyLimitLayer,
    pub cors: CorsLayer,
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
}

pub fn create_middleware(env: &ApplicationEnv) -> ApplicationMiddleware {
    create_middleware_with_body_limit(env.max_http_content_len)
}

pub fn create_middleware_with_body_limit(max_http_content_len: usize) -> ApplicationMiddleware {
    let body_limit = RequestBodyLimitLayer::new(max_http_content_len);

    // Front-end is served from a different origin
    let cors = CorsLayer::permissive();

    let trace = TraceLayer::new_for_http();

    ApplicationMiddleware {
        body_limit,
        cors,
        trace,
    }
}
