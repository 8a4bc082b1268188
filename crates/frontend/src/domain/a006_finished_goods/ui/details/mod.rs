use crate::shared::icons::icon;
use contracts::domain::a006_finished_goods::ProductionForm;
use leptos::prelude::*;

/// "Record production" dialog. An existing product name tops up its
/// stock; a new name creates a row.
#[component]
pub fn ProductionDetails(
    on_submit: Callback<ProductionForm>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(ProductionForm::default());
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
        <div class="details-container production-details">
            <div class="details-header">
                <h3>{"Record Production"}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="product_name">{"Product Name *"}</label>
                        <input
                            type="text"
                            id="product_name"
                            prop:value=move || form.get().product_name
                            on:input=move |ev| form.update(|f| f.product_name = event_target_value(&ev))
                            placeholder="Existing name adds to stock"
                        />
                    </div>
                    <div class="form-group">
                        <label for="sku">{"SKU"}</label>
                        <input
                            type="text"
                            id="sku"
                            prop:value=move || form.get().sku
                            on:input=move |ev| form.update(|f| f.sku = event_target_value(&ev))
                            placeholder="Only used for new products"
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="quantity">{"Quantity *"}</label>
                        <input
                            type="number"
                            id="quantity"
                            min="1"
                            prop:value=move || form.get().quantity
                            on:input=move |ev| form.update(|f| f.quantity = event_target_value(&ev))
                        />
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

                <div class="form-group">
                    <label for="raw_materials">{"Raw Materials Used"}</label>
                    <textarea
                        id="raw_materials"
                        prop:value=move || form.get().raw_materials
                        on:input=move |ev| form.update(|f| f.raw_materials = event_target_value(&ev))
                        placeholder="e.g., RM-A: 50kg, RM-B: 20L"
                        rows="2"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=save>
                    {icon("save")}
                    {"Record Production"}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
