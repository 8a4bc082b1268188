use crate::shared::icons::icon;
use crate::shared::number_format::format_thousands;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => {
            format!("{}{}", currency, format_thousands(val.round() as i64))
        }
        ValueFormat::Number { decimals } => {
            format!("{:.prec$}", val, prec = *decimals as usize)
        }
        ValueFormat::Percent { decimals } => {
            format!("{:.prec$}%", val, prec = *decimals as usize)
        }
        ValueFormat::Integer => format_thousands(val.round() as i64),
    }
}

/// Summary card: label, icon, one formatted value and an optional
/// subtitle underneath.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Primary numeric value (None = no data)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
    /// Visual status
    #[prop(into, optional)]
    status: Signal<IndicatorStatus>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let format_clone = format.clone();

    let status_class = move || match status.get() {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, &format_clone),
        None => "—".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_and_integer_formats() {
        let money = ValueFormat::Money { currency: "₹".to_string() };
        assert_eq!(format_value(25000.0, &money), "₹25,000");
        assert_eq!(format_value(21266.67, &money), "₹21,267");
        assert_eq!(format_value(3.0, &ValueFormat::Integer), "3");
    }

    #[test]
    fn percent_and_number_formats() {
        assert_eq!(format_value(94.42, &ValueFormat::Percent { decimals: 1 }), "94.4%");
        assert_eq!(format_value(8.5, &ValueFormat::Number { decimals: 1 }), "8.5");
    }
}
