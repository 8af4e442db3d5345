use crate::{
    application::ApplicationState,
    dashboard,
    dto::{input, output},
    error::Error,
    service::{ratings_service::RatingsService, tickets_service::TicketsService},
    ticket_link,
};
use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/api/ticket", post(create_ticket))
        .route("/api/ticket/:id/message", post(send_ticket_message))
        .route("/api/ticket/:id/complete", post(complete_ticket))
        .route("/api/rating", post(create_rating))
        .route("/api/ratings", get(get_ratings))
        .route("/api/health", get(get_health))
        .route("/ticket", get(get_ticket_dashboard))
}

///
/// Ids that are not UUIDs can't belong to any ticket
///
fn parse_ticket_id(id: &str) -> Result<Uuid, Error> {
    Uuid::try_parse(id).map_err(|_| Error::TicketNotExist)
}

async fn create_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    input::JsonBody(ticket): input::JsonBody<input::Ticket>,
) -> Result<Json<output::Success>, Error> {
    tickets_service.create_ticket(ticket).await?;

    Ok(Json(output::Success::with_message(
        "Ticket created and confirmation sent!",
    )))
}

async fn get_ticket_dashboard(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    RawQuery(query): RawQuery,
) -> Response {
    let Some(token) = query.as_deref().and_then(ticket_link::token_from_query) else {
        return (StatusCode::BAD_REQUEST, "Invalid ticket link").into_response();
    };

    match tickets_service.find_ticket(token).await {
        Ok(ticket) => Html(dashboard::render(&ticket)).into_response(),
        Err(Error::TicketNotExist) => {
            (StatusCode::NOT_FOUND, "Ticket not found or expired").into_response()
        }
        Err(err) => err.into_response(),
    }
}

async fn send_ticket_message(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(id): Path<String>,
    input::JsonBody(message): input::JsonBody<input::TicketMessage>,
) -> Result<Json<output::Success>, Error> {
    let id = parse_ticket_id(&id)?;
    tickets_service.send_message(id, message).await?;

    Ok(Json(output::Success::ok()))
}

async fn complete_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(id): Path<String>,
) -> Result<Json<output::Success>, Error> {
    let id = parse_ticket_id(&id)?;
    tickets_service.complete_ticket(id).await?;

    Ok(Json(output::Success::ok()))
}

async fn create_rating(
    State(ratings_service): State<Arc<dyn RatingsService>>,
    input::JsonBody(rating): input::JsonBody<input::Rating>,
) -> Result<Json<output::Success>, Error> {
    ratings_service.submit_rating(rating).await?;

    Ok(Json(output::Success::ok()))
}

async fn get_ratings(
    State(ratings_service): State<Arc<dyn RatingsService>>,
) -> Json<output::RatingsSummary> {
    Json(ratings_service.ratings_summary().await)
}

async fn get_health(
    State(tickets_service): State<Arc<dyn TicketsService>>,
) -> Json<output::Health> {
    let tickets = tickets_service.count_tickets().await;

    Json(output::Health {
        status: "ok",
        tickets,
    })
}
