pub mod prelude;

pub mod event;
pub mod event_detail;
pub mod event_title_page;
