use super::view_model::AdSpendDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::a001_ad_spend::{AdPlatform, AdSpend, AdSpendForm};
use leptos::prelude::*;

#[component]
pub fn AdSpendDetails(
    record: Option<AdSpend>,
    on_submit: Callback<AdSpendForm>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = AdSpendDetailsViewModel::new(record.as_ref());

    view! {
        <div class="details-container ad-spend-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { "Edit Ad Spend" } else { "Add Ad Spend" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="date">{"Date *"}</label>
                        <input
                            type="date"
                            id="date"
                            prop:value=move || vm.form.get().date
                            on:input=move |ev| {
                                vm.form.update(|f| f.date = event_target_value(&ev));
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="amount">{"Amount (₹) *"}</label>
                        <input
                            type="number"
                            id="amount"
                            step="0.01"
                            min="0"
                            prop:value=move || vm.form.get().amount
                            on:input=move |ev| {
                                vm.form.update(|f| f.amount = event_target_value(&ev));
                            }
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="platform">{"Platform *"}</label>
                    <select
                        id="platform"
                        prop:value=move || {
                            vm.form.get().platform.map(|p| p.label().to_string()).unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| f.platform = AdPlatform::from_label(&value));
                        }
                    >
                        <option value="" disabled selected=move || vm.form.get().platform.is_none()>
                            {"Select platform"}
                        </option>
                        {AdPlatform::ALL.iter().map(|p| {
                            let label = p.label();
                            view! { <option value=label>{label}</option> }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="campaign">{"Campaign Name"}</label>
                    <input
                        type="text"
                        id="campaign"
                        prop:value=move || vm.form.get().campaign
                        on:input=move |ev| {
                            vm.form.update(|f| f.campaign = event_target_value(&ev));
                        }
                        placeholder="Optional campaign name"
                    />
                </div>

                <div class="form-group">
                    <label for="notes">{"Notes"}</label>
                    <textarea
                        id="notes"
                        prop:value=move || vm.form.get().notes
                        on:input=move |ev| {
                            vm.form.update(|f| f.notes = event_target_value(&ev));
                        }
                        placeholder="Optional notes"
                        rows="3"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| vm.save_command(on_submit)
                    disabled=move || !vm.is_form_valid()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Update Ad Spend" } else { "Add Ad Spend" }}
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    {icon("x")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
