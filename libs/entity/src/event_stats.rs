use chrono::NaiveDate;

#[derive(Debug, Default, PartialEq, Clone)]
pub struct EventStats {
    pub event_id: i64,
    pub views: i64,
    pub shares: i64,
}

#[derive(Debug, Default, PartialEq, Clone)]
pub struct EventDailyStats {
    pub event_id: i64,
    pub date: NaiveDate,
    pub views: i64,
    pub shares: i64,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter,
)]
pub enum Counter {
    #[strum(serialize = "views")]
    View,
    #[strum(serialize = "shares")]
    Share,
}
