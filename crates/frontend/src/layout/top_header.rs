//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the brand title and the backend mode
//! badge (demo vs. live).

use crate::layout::global_context::AppGlobalContext;
use crate::shared::data::remote;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();
    let configured = remote::is_configured();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"ERP Operations Dashboard"</span>
            </div>

            <div class="top-header__actions">
                {if configured {
                    view! {
                        <span class="badge badge--live" title="Backend configured">
                            {icon("check-circle")}
                            "Live Data"
                        </span>
                    }.into_any()
                } else {
                    view! {
                        <span class="badge badge--demo" title="No backend configured, changes stay in memory">
                            {icon("database")}
                            "Demo Mode"
                        </span>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
