use crate::shared::date_utils;
use crate::shared::icons::icon;
use contracts::domain::a010_performance::PerformanceForm;
use leptos::prelude::*;

/// Monthly SKU performance dialog.
#[component]
pub fn PerformanceDetails(
    on_submit: Callback<PerformanceForm>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(PerformanceForm {
        month: date_utils::current_month(),
        ..Default::default()
    });
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
        <div class="details-container performance-details">
            <div class="details-header">
                <h3>{"Add Performance Data"}</h3>
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
                        />
                    </div>
                    <div class="form-group">
                        <label for="sku">{"SKU *"}</label>
                        <input
                            type="text"
                            id="sku"
                            prop:value=move || form.get().sku
                            on:input=move |ev| form.update(|f| f.sku = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="month">{"Month *"}</label>
                        <input
                            type="month"
                            id="month"
                            prop:value=move || form.get().month
                            on:input=move |ev| form.update(|f| f.month = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="units">{"Units Sold *"}</label>
                        <input
                            type="number"
                            id="units"
                            min="1"
                            prop:value=move || form.get().units
                            on:input=move |ev| form.update(|f| f.units = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="sales">{"Sales (₹) *"}</label>
                        <input
                            type="number"
                            id="sales"
                            min="0"
                            prop:value=move || form.get().sales
                            on:input=move |ev| form.update(|f| f.sales = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="returns">{"Returns (₹)"}</label>
                        <input
                            type="number"
                            id="returns"
                            min="0"
                            prop:value=move || form.get().returns
                            on:input=move |ev| form.update(|f| f.returns = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="ad_spend">{"Ad Spend (₹)"}</label>
                        <input
                            type="number"
                            id="ad_spend"
                            min="0"
                            prop:value=move || form.get().ad_spend
                            on:input=move |ev| form.update(|f| f.ad_spend = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="cogs">{"COGS (₹)"}</label>
                        <input
                            type="number"
                            id="cogs"
                            min="0"
                            prop:value=move || form.get().cogs
                            on:input=move |ev| form.update(|f| f.cogs = event_target_value(&ev))
                        />
                    </div>
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=save>
                    {icon("save")}
                    {"Add Performance Data"}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
