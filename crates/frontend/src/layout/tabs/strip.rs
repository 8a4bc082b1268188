//! Tab header strip: one clickable header per open tab, with a close
//! button.

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TabStrip() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="tabs__strip">
            <For
                each=move || ctx.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab: TabData| {
                    let key_for_activate = tab.key.clone();
                    let key_for_close = tab.key.clone();
                    let key_for_active_check = tab.key.clone();

                    view! {
                        <div
                            class="tabs__header"
                            class:tabs__header--active=move || {
                                ctx.active.get().as_ref() == Some(&key_for_active_check)
                            }
                            on:click=move |_| ctx.activate_tab(&key_for_activate)
                        >
                            <span class="tabs__header-title">{tab.title.clone()}</span>
                            <button
                                class="tabs__header-close"
                                title="Close tab"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    ctx.close_tab(&key_for_close);
                                }
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
