pub mod dto;

pub use dto::{
    kpi_cards, overview_forecast, quick_actions, recent_alerts, KpiCard, QuickAction, RecentAlert,
    OVERVIEW_FORECAST_DAYS,
};
