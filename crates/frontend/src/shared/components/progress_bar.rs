use contracts::shared::classify::DisplayCategory;
use leptos::prelude::*;

/// Width style for a percentage, clamped to 0..=100
pub fn bar_width(percent: f64) -> String {
    format!("width: {:.0}%;", percent.clamp(0.0, 100.0))
}

#[component]
pub fn ProgressBar(
    #[prop(into)] percent: Signal<f64>,
    #[prop(optional)] category: DisplayCategory,
) -> impl IntoView {
    let fill_class = format!("progress__fill progress__fill--{}", category.token());
    view! {
        <div class="progress">
            <div class=fill_class style=move || bar_width(percent.get())></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_clamps() {
        assert_eq!(bar_width(89.0), "width: 89%;");
        assert_eq!(bar_width(140.0), "width: 100%;");
        assert_eq!(bar_width(-5.0), "width: 0%;");
    }
}
