use crate::shared::icons::icon;
use contracts::domain::a008_products::{Product, ProductForm, PRODUCT_TYPES};
use leptos::prelude::*;

/// Product master create/edit dialog.
///
/// The duplicate-SKU check needs the current list, so it runs in the
/// list page's submit handler, not here.
#[component]
pub fn ProductDetails(
    record: Option<Product>,
    on_submit: Callback<ProductForm>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let initial = match record.as_ref() {
        Some(record) => ProductForm::from_record(record),
        None => ProductForm::default(),
    };
    let form = RwSignal::new(initial);
    let error = RwSignal::new(None::<String>);
    let is_edit = record.is_some();

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
        <div class="details-container product-details">
            <div class="details-header">
                <h3>{if is_edit { "Edit Product" } else { "Add Product" }}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="sku">{"SKU *"}</label>
                        <input
                            type="text"
                            id="sku"
                            prop:value=move || form.get().sku
                            on:input=move |ev| form.update(|f| f.sku = event_target_value(&ev))
                            placeholder="e.g., PA-001"
                        />
                    </div>
                    <div class="form-group">
                        <label for="name">{"Name *"}</label>
                        <input
                            type="text"
                            id="name"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            placeholder="Product name"
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="product_type">{"Type *"}</label>
                        <select
                            id="product_type"
                            prop:value=move || form.get().product_type
                            on:change=move |ev| form.update(|f| f.product_type = event_target_value(&ev))
                        >
                            <option value="">{"Select type"}</option>
                            {PRODUCT_TYPES.iter().copied().map(|t| view! { <option value=t>{t}</option> }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="category">{"Category"}</label>
                        <input
                            type="text"
                            id="category"
                            prop:value=move || form.get().category
                            on:input=move |ev| form.update(|f| f.category = event_target_value(&ev))
                            placeholder="e.g., Category A"
                        />
                    </div>
                </div>

                <div class="form-row form-row--thirds">
                    <div class="form-group">
                        <label for="min_stock">{"Min Stock"}</label>
                        <input
                            type="number"
                            id="min_stock"
                            min="0"
                            prop:value=move || form.get().min_stock
                            on:input=move |ev| form.update(|f| f.min_stock = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="reorder_level">{"Reorder Level"}</label>
                        <input
                            type="number"
                            id="reorder_level"
                            min="0"
                            prop:value=move || form.get().reorder_level
                            on:input=move |ev| form.update(|f| f.reorder_level = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="unit_price">{"Unit Price (₹)"}</label>
                        <input
                            type="number"
                            id="unit_price"
                            min="0"
                            step="0.01"
                            prop:value=move || form.get().unit_price
                            on:input=move |ev| form.update(|f| f.unit_price = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="raw_materials">{"Raw Materials"}</label>
                    <input
                        type="text"
                        id="raw_materials"
                        prop:value=move || form.get().raw_materials
                        on:input=move |ev| form.update(|f| f.raw_materials = event_target_value(&ev))
                        placeholder="e.g., RM-A: 2kg, RM-B: 1L"
                    />
                </div>

                <div class="form-group">
                    <label for="description">{"Description"}</label>
                    <textarea
                        id="description"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        placeholder="Optional description"
                        rows="2"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=save>
                    {icon("save")}
                    {if is_edit { "Update Product" } else { "Add Product" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
