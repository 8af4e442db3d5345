//!
//! Owner links carry the ticket id re-encoded as URL-safe base64.
//! Anybody holding a link can decode it, it only keeps ids out of plain sight.
//!

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use uuid::Uuid;

const TICKET_ID_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub fn encode_ticket_id(id: Uuid) -> String {
    TICKET_ID_ENGINE.encode(id.hyphenated().to_string())
}

///
/// Inverse of [encode_ticket_id]
///
/// ### Returns
/// [None] when token is not base64, not UTF-8 or not an id
///
pub fn decode_ticket_id(token: &str) -> Option<Uuid> {
    let bytes = TICKET_ID_ENGINE.decode(token).ok()?;
    let text = String::from_utf8(bytes).ok()?;

    Uuid::try_parse(&text).ok()
}

pub fn owner_link(base_url: &str, id: Uuid) -> String {
    format!(
        "{}/ticket?{}",
        base_url.trim_end_matches('/'),
        encode_ticket_id(id)
    )
}

///
/// Dashboard links pass the token as a bare query key (`/ticket?<token>`).
/// Only the first key is used and anything after '=' is ignored.
///
pub fn token_from_query(query: &str) -> Option<&str> {
    let first = query.split('&').next()?;
    let token = first.split('=').next()?;

    match token.is_empty() {
        true => None,
        false => Some(token),
    }
}
