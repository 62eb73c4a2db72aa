use crate::shared::icons::icon;
use contracts::shared::classify::DisplayCategory;
use leptos::prelude::*;

fn card_class(category: DisplayCategory) -> &'static str {
    match category.base() {
        DisplayCategory::Success => "stat-card stat-card--success",
        DisplayCategory::Danger => "stat-card stat-card--error",
        DisplayCategory::Warning => "stat-card stat-card--warning",
        _ => "stat-card",
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Preformatted value
    #[prop(into)]
    value: String,
    /// Visual status
    category: DisplayCategory,
    /// Optional subtitle below the value
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class=card_class(category)>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}</div>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_class_follows_base_palette() {
        assert_eq!(card_class(DisplayCategory::Danger), "stat-card stat-card--error");
        assert_eq!(card_class(DisplayCategory::SensorOnline), "stat-card stat-card--success");
        assert_eq!(card_class(DisplayCategory::RiskMedium), "stat-card stat-card--warning");
        assert_eq!(card_class(DisplayCategory::Primary), "stat-card");
    }
}
