use leptos::prelude::*;

/// Thin horizontal bar used by the breakdown cards.
#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<f64>) -> impl IntoView {
    view! {
        <div class="progress">
            <div
                class="progress__fill"
                style=move || format!("width: {:.1}%;", percent.get().clamp(0.0, 100.0))
            ></div>
        </div>
    }
}
