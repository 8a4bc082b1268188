use crate::shared::icons::icon;
use contracts::domain::a007_payroll::DEPARTMENTS;
use contracts::domain::a012_staff::StaffForm;
use leptos::prelude::*;

/// "Add employee" dialog.
///
/// The duplicate employee-id check needs the directory, so it runs in
/// the list page's submit handler.
#[component]
pub fn StaffDetails(on_submit: Callback<StaffForm>, on_cancel: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(StaffForm::default());
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
        <div class="details-container staff-details">
            <div class="details-header">
                <h3>{"Add Employee"}</h3>
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
                            placeholder="e.g., EMP005"
                        />
                    </div>
                    <div class="form-group">
                        <label for="name">{"Full Name *"}</label>
                        <input
                            type="text"
                            id="name"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="role">{"Role *"}</label>
                        <input
                            type="text"
                            id="role"
                            prop:value=move || form.get().role
                            on:input=move |ev| form.update(|f| f.role = event_target_value(&ev))
                            placeholder="e.g., Production Manager"
                        />
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
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="salary">{"Salary (₹/month)"}</label>
                        <input
                            type="number"
                            id="salary"
                            min="0"
                            prop:value=move || form.get().salary
                            on:input=move |ev| form.update(|f| f.salary = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="phone">{"Phone"}</label>
                        <input
                            type="tel"
                            id="phone"
                            prop:value=move || form.get().phone
                            on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                            placeholder="+91 ..."
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input
                        type="email"
                        id="email"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        placeholder="Generated from the employee ID when blank"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=save>
                    {icon("save")}
                    {"Add Employee"}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
