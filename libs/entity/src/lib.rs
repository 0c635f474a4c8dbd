pub mod cover_image;
pub mod event;
pub mod event_intro;
pub mod event_stats;

pub mod prelude {
    pub use crate::cover_image::CoverImage as CoverImageEntity;
    pub use crate::event::Event as EventEntity;
    pub use crate::event::EventStatus;
    pub use crate::event_intro::EventIntro as EventIntroEntity;
    pub use crate::event_stats::{
        Counter, EventDailyStats as EventDailyStatsEntity,
        EventStats as EventStatsEntity,
    };
}
