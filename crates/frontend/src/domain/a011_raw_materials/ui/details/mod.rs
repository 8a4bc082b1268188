use crate::shared::icons::icon;
use contracts::domain::a011_raw_materials::InwardForm;
use leptos::prelude::*;

pub const UNITS: [&str; 3] = ["kg", "liters", "pieces"];

/// "Record inward" dialog. An existing material name tops up its stock.
#[component]
pub fn InwardDetails(on_submit: Callback<InwardForm>, on_cancel: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(InwardForm::default());
    let error = RwSignal::new(None::<String>);

    let save = move |_| {
        let current = form.get();
        if let Err(message) = current.validate() {
            error.set(Some(message));
            return;
        }
        error.set(None);
        on_submit.run(current);
    };

    view! {
        <div class="details-container inward-details">
            <div class="details-header">
                <h3>{"Record Inward"}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="name">{"Material Name *"}</label>
                        <input
                            type="text"
                            id="name"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            placeholder="Existing name adds to stock"
                        />
                    </div>
                    <div class="form-group">
                        <label for="supplier">{"Supplier *"}</label>
                        <input
                            type="text"
                            id="supplier"
                            prop:value=move || form.get().supplier
                            on:input=move |ev| form.update(|f| f.supplier = event_target_value(&ev))
                            placeholder="Supplier name"
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="quantity">{"Quantity *"}</label>
                        <input
                            type="number"
                            id="quantity"
                            min="0"
                            step="0.1"
                            prop:value=move || form.get().quantity
                            on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="unit">{"Unit"}</label>
                        <select
                            id="unit"
                            prop:value=move || form.get().unit
                            on:change=move |ev| form.update(|f| f.unit = event_target_value(&ev))
                        >
                            <option value="">{"Select unit"}</option>
                            {UNITS.iter().copied().map(|u| view! { <option value=u>{u}</option> }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-group">
                    <label for="batch_no">{"Batch No"}</label>
                    <input
                        type="text"
                        id="batch_no"
                        prop:value=move || form.get().batch_no
                        on:input=move |ev| form.update(|f| f.batch_no = event_target_value(&ev))
                        placeholder="Auto-generated when blank"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=save>
                    {icon("save")}
                    {"Record Inward"}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
