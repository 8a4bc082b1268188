//! Application shell - root layout components.
//!
//! Contains `AppShell`, which wires the `Shell` layout (TopHeader +
//! Sidebar + tab area) together with the modal and toast hosts.

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::sidebar::Sidebar;
use crate::layout::tabs::strip::TabStrip;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::shared::modal_stack::ModalHost;
use crate::shared::toast::ToastHost;
use leptos::prelude::*;

/// Main application layout with Sidebar and Tabs.
///
/// Initializes router integration so the active tab is mirrored into the
/// URL (`?active=...`) and restored on load.
#[component]
pub fn AppShell() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <TabStrip />
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! {
                                <TabPage tab=tab tabs_store=tabs_store />
                            }
                        }
                    />
                }
                .into_any()
            }
        />
        <ModalHost />
        <ToastHost />
    }
}
