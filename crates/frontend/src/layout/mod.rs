pub mod global_context;
pub mod sidebar;
pub mod tabs;
pub mod top_header;

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |         Content              |
/// |   (Left)  |        (Center)              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                // Left sidebar - uses ctx.left_open for visibility
                <div
                    class="app-sidebar"
                    class:app-sidebar--hidden=move || !ctx.left_open.get()
                >
                    {left()}
                </div>

                // Main content area
                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
