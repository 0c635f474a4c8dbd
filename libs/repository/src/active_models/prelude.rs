pub use super::event::Entity as Event;
pub use super::event_detail::Entity as EventDetail;
pub use super::event_title_page::Entity as EventTitlePage;
