use crate::shared::icons::icon;
use contracts::domain::a007_payroll::{PayrollEntry, PayrollForm, DEPARTMENTS};
use leptos::prelude::*;

/// Payroll create/edit dialog.
#[component]
pub fn PayrollDetails(
    record: Option<PayrollEntry>,
    on_submit: Callback<PayrollForm>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let initial = match record.as_ref() {
        Some(record) => PayrollForm::from_record(record),
        None => PayrollForm::default(),
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
        <div class="details-container payroll-details">
            <div class="details-header">
                <h3>{if is_edit { "Edit Employee Payroll" } else { "Add Employee to Payroll" }}</h3>
                <p class="details-header__subtitle">
                    {if is_edit {
                        "Update employee payroll information"
                    } else {
                        "Enter employee details for payroll calculation"
                    }}
                </p>
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
                    <label for="department">{"Department *"}</label>
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
                        <label for="base_salary">{"Base Salary (₹) *"}</label>
                        <input
                            type="number"
                            id="base_salary"
                            min="0"
                            prop:value=move || form.get().base_salary
                            on:input=move |ev| form.update(|f| f.base_salary = event_target_value(&ev))
                            placeholder="Monthly salary"
                        />
                    </div>
                    <div class="form-group">
                        <label for="deductions">{"Deductions (₹)"}</label>
                        <input
                            type="number"
                            id="deductions"
                            min="0"
                            prop:value=move || form.get().deductions
                            on:input=move |ev| form.update(|f| f.deductions = event_target_value(&ev))
                            placeholder="Total deductions"
                        />
                    </div>
                </div>

                <div class="form-row form-row--thirds">
                    <div class="form-group">
                        <label for="days_worked">{"Days Worked"}</label>
                        <input
                            type="number"
                            id="days_worked"
                            min="0"
                            max="31"
                            prop:value=move || form.get().days_worked
                            on:input=move |ev| form.update(|f| f.days_worked = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="total_days">{"Total Days"}</label>
                        <input
                            type="number"
                            id="total_days"
                            min="1"
                            prop:value=move || form.get().total_days
                            on:input=move |ev| form.update(|f| f.total_days = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="overtime_hours">{"Overtime Hours"}</label>
                        <input
                            type="number"
                            id="overtime_hours"
                            min="0"
                            prop:value=move || form.get().overtime_hours
                            on:input=move |ev| form.update(|f| f.overtime_hours = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="overtime_rate">{"Overtime Rate (₹/hour)"}</label>
                    <input
                        type="number"
                        id="overtime_rate"
                        min="0"
                        prop:value=move || form.get().overtime_rate
                        on:input=move |ev| form.update(|f| f.overtime_rate = event_target_value(&ev))
                        placeholder="Rate per hour"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=save>
                    {icon("save")}
                    {if is_edit { "Update Employee" } else { "Add Employee" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
