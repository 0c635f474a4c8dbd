#[derive(Debug, Default, PartialEq, Clone)]
pub struct EventIntro {
    pub event_id: i64,
    pub content: Option<String>,
}
