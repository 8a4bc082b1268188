use crate::shared::icons::icon;
use leptos::prelude::*;

/// Module page header: icon, title, subtitle and an action slot on the
/// right.
#[component]
pub fn PageHeader(
    title: String,
    subtitle: String,
    icon_name: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__heading">
                <div class="page-header__icon">{icon(&icon_name)}</div>
                <div>
                    <h2 class="page-header__title">{title}</h2>
                    <p class="page-header__subtitle">{subtitle}</p>
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
