use crate::shared::icons::icon;
use contracts::domain::a002_attendance::AttendanceForm;
use contracts::domain::a007_payroll::DEPARTMENTS;
use leptos::prelude::*;

/// "Mark attendance" dialog. The entry is dated today at submit.
#[component]
pub fn AttendanceDetails(
    on_submit: Callback<AttendanceForm>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(AttendanceForm::default());
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
        <div class="details-container attendance-details">
            <div class="details-header">
                <h3>{"Mark Attendance"}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="employee_id">{"Employee ID *"}</label>
                        <input
                            type="text"
                            id="employee_id"
                            prop:value=move || form.get().employee_id
                            on:input=move |ev| form.update(|f| f.employee_id = event_target_value(&ev))
                            placeholder="e.g., EMP001"
                        />
                    </div>
                    <div class="form-group">
                        <label for="employee_name">{"Employee Name *"}</label>
                        <input
                            type="text"
                            id="employee_name"
                            prop:value=move || form.get().employee_name
                            on:input=move |ev| form.update(|f| f.employee_name = event_target_value(&ev))
                            placeholder="Full name"
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="department">{"Department"}</label>
                    <select
                        id="department"
                        prop:value=move || form.get().department
                        on:change=move |ev| form.update(|f| f.department = event_target_value(&ev))
                    >
                        <option value="">{"Select department"}</option>
                        {DEPARTMENTS.iter().copied().map(|d| view! { <option value=d>{d}</option> }).collect_view()}
                    </select>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="punch_in">{"Punch In *"}</label>
                        <input
                            type="time"
                            id="punch_in"
                            prop:value=move || form.get().punch_in
                            on:input=move |ev| form.update(|f| f.punch_in = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="punch_out">{"Punch Out"}</label>
                        <input
                            type="time"
                            id="punch_out"
                            prop:value=move || form.get().punch_out
                            on:input=move |ev| form.update(|f| f.punch_out = event_target_value(&ev))
                        />
                    </div>
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=save>
                    {icon("save")}
                    {"Mark Attendance"}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
