use crate::shared::date_utils;
use crate::shared::icons::icon;
use contracts::domain::a009_profit_estimator::ProfitForm;
use leptos::prelude::*;

/// Daily profit estimate dialog.
#[component]
pub fn ProfitDetails(on_submit: Callback<ProfitForm>, on_cancel: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(ProfitForm {
        date: date_utils::today_iso(),
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
        <div class="details-container profit-details">
            <div class="details-header">
                <h3>{"Add Daily Estimate"}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="date">{"Date *"}</label>
                        <input
                            type="date"
                            id="date"
                            prop:value=move || form.get().date
                            on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="revenue">{"Revenue (₹) *"}</label>
                        <input
                            type="number"
                            id="revenue"
                            min="0"
                            step="0.01"
                            prop:value=move || form.get().revenue
                            on:input=move |ev| form.update(|f| f.revenue = event_target_value(&ev))
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
                        <label for="shipping">{"Shipping (₹)"}</label>
                        <input
                            type="number"
                            id="shipping"
                            min="0"
                            prop:value=move || form.get().shipping
                            on:input=move |ev| form.update(|f| f.shipping = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-row">
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
                    <div class="form-group">
                        <label for="other_expenses">{"Other Expenses (₹)"}</label>
                        <input
                            type="number"
                            id="other_expenses"
                            min="0"
                            prop:value=move || form.get().other_expenses
                            on:input=move |ev| form.update(|f| f.other_expenses = event_target_value(&ev))
                        />
                    </div>
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=save>
                    {icon("save")}
                    {"Add Estimate"}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
