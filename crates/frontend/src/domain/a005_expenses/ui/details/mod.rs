use crate::shared::icons::icon;
use contracts::domain::a005_expenses::{ExpenseForm, EXPENSE_CATEGORIES};
use leptos::prelude::*;

/// "Add expense" dialog. New entries are dated today and start pending.
#[component]
pub fn ExpenseDetails(on_submit: Callback<ExpenseForm>, on_cancel: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(ExpenseForm::default());
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
        <div class="details-container expense-details">
            <div class="details-header">
                <h3>{"Add Expense"}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="category">{"Category *"}</label>
                    <select
                        id="category"
                        prop:value=move || form.get().category
                        on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                    >
                        <option value="">{"Select category"}</option>
                        {EXPENSE_CATEGORIES.iter().copied().map(|c| view! { <option value=c>{c}</option> }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="description">{"Description *"}</label>
                    <input
                        type="text"
                        id="description"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        placeholder="What was this expense for?"
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="amount">{"Amount (₹) *"}</label>
                        <input
                            type="number"
                            id="amount"
                            min="0"
                            step="0.01"
                            prop:value=move || form.get().amount
                            on:input=move |ev| form.update(|f| f.amount = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="vendor">{"Vendor"}</label>
                        <input
                            type="text"
                            id="vendor"
                            prop:value=move || form.get().vendor
                            on:input=move |ev| form.update(|f| f.vendor = event_target_value(&ev))
                            placeholder="Optional vendor name"
                        />
                    </div>
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=save>
                    {icon("save")}
                    {"Add Expense"}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
