pub mod d100_overview;

pub use d100_overview::ui::OverviewPage;
