use contracts::shared::classify::{Classify, DisplayCategory};
use leptos::prelude::*;

/// CSS classes of a badge in the given palette slot
pub fn badge_class(category: DisplayCategory) -> String {
    format!("badge badge--{}", category.token())
}

/// Text CSS class (`text-danger`, `text-risk-high`)
pub fn text_class(category: DisplayCategory) -> String {
    format!("text-{}", category.token())
}

/// Pill coloured by the display category of a status value
#[component]
pub fn StatusBadge(
    #[prop(into)] category: DisplayCategory,
    #[prop(into)] label: String,
) -> impl IntoView {
    view! { <span class=badge_class(category)>{label}</span> }
}

/// Badge for any classified enum, labelled with `label`
pub fn classified_badge<T: Classify>(value: &T, label: impl Into<String>) -> impl IntoView {
    view! { <StatusBadge category=value.category() label=label.into() /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{RiskLevel, SiteStatus};

    #[test]
    fn test_badge_class_uses_palette_token() {
        assert_eq!(badge_class(SiteStatus::NeedsReview.category()), "badge badge--water-review");
        assert_eq!(badge_class(RiskLevel::High.category()), "badge badge--risk-high");
        assert_eq!(text_class(DisplayCategory::Muted), "text-muted");
    }
}
