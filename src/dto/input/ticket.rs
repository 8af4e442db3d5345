use serde::Deserialize;

///
/// All fields are optional so missing ones are reported
/// by the service instead of the JSON extractor
///
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub username: Option<String>,
    pub platform: Option<String>,
    pub area_size: Option<String>,
    pub email: Option<String>,
}
