use entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventStatsResp {
    pub event_id: i64,
    pub views: i64,
    pub shares: i64,
}

impl From<EventStatsEntity> for EventStatsResp {
    fn from(value: EventStatsEntity) -> Self {
        Self {
            event_id: value.event_id,
            views: value.views,
            shares: value.shares,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDailyStatsResp {
    pub event_id: i64,
    pub date: String,
    pub views: i64,
    pub shares: i64,
}

impl From<EventDailyStatsEntity> for EventDailyStatsResp {
    fn from(value: EventDailyStatsEntity) -> Self {
        Self {
            event_id: value.event_id,
            date: value.date.to_string(),
            views: value.views,
            shares: value.shares,
        }
    }
}
