use crate::shared::date_utils;
use crate::shared::icons::icon;
use contracts::domain::a003_call_center::{CallCenterEntry, CallCenterForm};
use leptos::prelude::*;

/// Daily call-center metrics dialog (create and edit).
#[component]
pub fn CallCenterDetails(
    record: Option<CallCenterEntry>,
    on_submit: Callback<CallCenterForm>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let initial = match record.as_ref() {
        Some(record) => CallCenterForm::from_record(record),
        None => CallCenterForm {
            date: date_utils::today_iso(),
            ..Default::default()
        },
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
        <div class="details-container call-center-details">
            <div class="details-header">
                <h3>{if is_edit { "Edit Daily Metrics" } else { "Add Daily Metrics" }}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="date">{"Date *"}</label>
                    <input
                        type="date"
                        id="date"
                        prop:value=move || form.get().date
                        on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="calls_received">{"Calls Received *"}</label>
                        <input
                            type="number"
                            id="calls_received"
                            min="0"
                            prop:value=move || form.get().calls_received
                            on:input=move |ev| form.update(|f| f.calls_received = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="calls_answered">{"Calls Answered *"}</label>
                        <input
                            type="number"
                            id="calls_answered"
                            min="0"
                            prop:value=move || form.get().calls_answered
                            on:input=move |ev| form.update(|f| f.calls_answered = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="ndr_received">{"NDR Received"}</label>
                        <input
                            type="number"
                            id="ndr_received"
                            min="0"
                            prop:value=move || form.get().ndr_received
                            on:input=move |ev| form.update(|f| f.ndr_received = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="ndr_resolved">{"NDR Resolved"}</label>
                        <input
                            type="number"
                            id="ndr_resolved"
                            min="0"
                            prop:value=move || form.get().ndr_resolved
                            on:input=move |ev| form.update(|f| f.ndr_resolved = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="avg_response_time">{"Avg Response Time (seconds)"}</label>
                    <input
                        type="number"
                        id="avg_response_time"
                        min="0"
                        step="0.1"
                        prop:value=move || form.get().avg_response_time
                        on:input=move |ev| form.update(|f| f.avg_response_time = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="notes">{"Notes"}</label>
                    <textarea
                        id="notes"
                        prop:value=move || form.get().notes
                        on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                        placeholder="Optional notes"
                        rows="3"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=save>
                    {icon("save")}
                    {if is_edit { "Update Metrics" } else { "Add Metrics" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
