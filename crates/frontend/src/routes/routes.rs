use crate::dashboards::d100_overview::ui::OverviewPage;
use crate::domain::a001_monitored_site::ui::map::MapPage;
use crate::domain::a002_sensor_station::ui::list::SensorsPage;
use crate::domain::a003_alert::ui::list::AlertsPage;
use crate::domain::a004_community_report::ui::CommunityPage;
use crate::domain::a006_risk_forecast::ui::RiskForecastPage;
use crate::layout::DashboardLayout;
use crate::system::pages::admin::AdminPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFound;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Dashboard entries of the sidebar menu, (path, label, icon)
pub const MENU_ITEMS: [(&str, &str, &str); 7] = [
    ("/overview", "Overview", "layout-dashboard"),
    ("/map", "Map View", "map"),
    ("/sensors", "Sensors", "activity"),
    ("/risk-forecast", "Risk Forecast", "trending-up"),
    ("/alerts", "Alerts & Dispatch", "bell"),
    ("/volunteers", "Community", "users"),
    ("/admin", "Admin Settings", "settings"),
];

/// Menu label of a dashboard path. Unknown paths have none.
pub fn menu_label(path: &str) -> Option<&'static str> {
    let path = path.trim_end_matches('/');
    MENU_ITEMS
        .iter()
        .find(|(p, _, _)| *p == path)
        .map(|(_, label, _)| *label)
}

/// Sidebar icon of a dashboard path, reused by the page header
pub fn menu_icon(path: &str) -> Option<&'static str> {
    let path = path.trim_end_matches('/');
    MENU_ITEMS
        .iter()
        .find(|(p, _, _)| *p == path)
        .map(|(_, _, icon_name)| *icon_name)
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=LoginPage />
                <Route
                    path=path!("/overview")
                    view=|| view! { <DashboardLayout><OverviewPage /></DashboardLayout> }
                />
                <Route
                    path=path!("/map")
                    view=|| view! { <DashboardLayout><MapPage /></DashboardLayout> }
                />
                <Route
                    path=path!("/sensors")
                    view=|| view! { <DashboardLayout><SensorsPage /></DashboardLayout> }
                />
                <Route
                    path=path!("/risk-forecast")
                    view=|| view! { <DashboardLayout><RiskForecastPage /></DashboardLayout> }
                />
                <Route
                    path=path!("/alerts")
                    view=|| view! { <DashboardLayout><AlertsPage /></DashboardLayout> }
                />
                <Route
                    path=path!("/volunteers")
                    view=|| view! { <DashboardLayout><CommunityPage /></DashboardLayout> }
                />
                <Route
                    path=path!("/admin")
                    view=|| view! { <DashboardLayout><AdminPage /></DashboardLayout> }
                />
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_covers_every_dashboard_route() {
        let paths: Vec<&str> = MENU_ITEMS.iter().map(|(p, _, _)| *p).collect();
        assert_eq!(
            paths,
            vec!["/overview", "/map", "/sensors", "/risk-forecast", "/alerts", "/volunteers", "/admin"]
        );
    }

    #[test]
    fn test_menu_label() {
        assert_eq!(menu_label("/alerts"), Some("Alerts & Dispatch"));
        assert_eq!(menu_label("/volunteers/"), Some("Community"));
        assert_eq!(menu_label("/"), None);
        assert_eq!(menu_label("/reports"), None);
    }

    #[test]
    fn test_menu_icon() {
        assert_eq!(menu_icon("/map"), Some("map"));
        assert_eq!(menu_icon("/admin/"), Some("settings"));
        assert_eq!(menu_icon("/"), None);
    }
}
