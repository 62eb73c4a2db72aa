pub mod page_header;
pub mod progress_bar;
pub mod stat_card;
pub mod status_badge;

pub use page_header::PageHeader;
pub use progress_bar::ProgressBar;
pub use stat_card::StatCard;
pub use status_badge::{badge_class, StatusBadge};
