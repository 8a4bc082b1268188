//! Shared list helpers: sorting and the debounced search input.

use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen::JsCast;

/// Trait for row types that support column sorting.
pub trait Sortable {
    /// Compare two rows by the given column key.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list in place by the given column.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator for a column header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Search input with debounce and a clear button.
#[component]
pub fn SearchInput(
    /// Current filter value (for the active highlight)
    #[prop(into)]
    value: Signal<String>,
    /// Callback invoked after the debounce delay
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local input state (before the debounce fires)
    let (input_value, set_input_value) = signal(String::new());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Cancel the previous timer, if any
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            300,
        ) {
            Ok(timeout_id) => {
                closure.forget();
                debounce_timeout.set_value(Some(timeout_id));
            }
            Err(err) => log::error!("setTimeout failed: {err:?}"),
        }
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <input
                type="text"
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
