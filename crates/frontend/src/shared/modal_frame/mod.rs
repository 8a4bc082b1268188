//! Modal overlay + surface. Overlay clicks close the modal; clicks on
//! the surface do not bubble up.

use leptos::prelude::*;

#[component]
pub fn ModalFrame(
    z_index: i32,
    on_close: Callback<()>,
    #[prop(optional)] modal_style: String,
    #[prop(optional)] modal_class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {};", z_index)
            on:click=move |_| on_close.run(())
        >
            <div
                class=format!("modal-surface {}", modal_class)
                style=modal_style
                on:click=|ev| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
