use catalog::EventSummary;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventResp {
    pub id: i64,
    pub image: String,
    pub address: String,
    pub event_start: String,
    pub event_end: String,
    pub title: String,
    pub status_id: i32,
}

impl From<&EventSummary> for EventResp {
    fn from(value: &EventSummary) -> Self {
        Self {
            id: value.id,
            image: value.image.clone(),
            address: value.address.clone(),
            event_start: value.event_start.clone(),
            event_end: value.event_end.clone(),
            title: value.title.clone(),
            status_id: value.status_id,
        }
    }
}
