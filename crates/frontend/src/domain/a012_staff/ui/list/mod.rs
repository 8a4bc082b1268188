use crate::domain::a012_staff::ui::details::StaffDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::remote;
use crate::shared::date_utils;
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, sort_list, SearchInput, Sortable};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::format_money;
use crate::shared::toast::ToastService;
use contracts::domain::a012_staff::{
    active_count, demo_records, department_stats, performance_stats, PerformanceRating,
    StaffForm, StaffMember, StaffStatus,
};
use contracts::domain::common::RecordId;
use contracts::shared::indicators::ValueFormat;
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen_futures::spawn_local;

const TABLE: &str = "staff";

impl Sortable for StaffMember {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "employee_id" => self.employee_id.cmp(&other.employee_id),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "department" => self.department.to_lowercase().cmp(&other.department.to_lowercase()),
            "join_date" => self.join_date.cmp(&other.join_date),
            "salary" => self.salary.total_cmp(&other.salary),
            _ => Ordering::Equal,
        }
    }
}

fn rating_badge_class(rating: PerformanceRating) -> &'static str {
    match rating {
        PerformanceRating::Excellent => "badge badge--success",
        PerformanceRating::Good => "badge badge--outline",
        PerformanceRating::NeedsImprovement => "badge badge--warning",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn StaffList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (items, set_items) = signal::<Vec<StaffMember>>(demo_records());
    let (search, set_search) = signal(String::new());
    let (sort_field, set_sort_field) = signal("employee_id".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    if remote::is_configured() {
        spawn_local(async move {
            match remote::fetch_rows::<StaffMember>(TABLE).await {
                Ok(rows) => set_items.set(rows),
                Err(e) => {
                    log::error!("Error fetching {TABLE}: {e}");
                    toasts.error("Failed to load staff directory");
                }
            }
        });
    }

    let toggle_sort = move |field: &'static str| {
        move |_| {
            if sort_field.get() == field {
                set_sort_ascending.update(|v| *v = !*v);
            } else {
                set_sort_field.set(field.to_string());
                set_sort_ascending.set(true);
            }
        }
    };

    let filtered = move || {
        let needle = search.get().trim().to_lowercase();
        let mut list: Vec<StaffMember> = items
            .get()
            .into_iter()
            .filter(|member| {
                needle.is_empty()
                    || member.name.to_lowercase().contains(&needle)
                    || member.employee_id.to_lowercase().contains(&needle)
                    || member.role.to_lowercase().contains(&needle)
                    || member.department.to_lowercase().contains(&needle)
            })
            .collect();
        sort_list(&mut list, &sort_field.get(), sort_ascending.get());
        list
    };

    let handle_submit = move |form: StaffForm| {
        if let Err(e) = form.check_unique_employee_id(&items.get_untracked()) {
            toasts.error(e);
            return;
        }
        match form.build(date_utils::today()) {
            Ok(member) => {
                let for_remote = member.clone();
                set_items.update(|list| list.push(member));
                toasts.success("Employee added successfully");
                spawn_local(async move {
                    if let Err(e) = remote::insert_row(TABLE, &for_remote).await {
                        log::error!("Error creating {TABLE}: {e}");
                        toasts.error("Failed to save employee");
                    }
                });
            }
            Err(e) => toasts.error(e),
        }
    };

    let open_details_modal = move || {
        modal_stack.push_with_frame(
            Some("max-width: min(680px, 95vw); width: min(680px, 95vw);".to_string()),
            Some("staff-modal".to_string()),
            move |handle| {
                view! {
                    <StaffDetails
                        on_submit=Callback::new({
                            let handle = handle.clone();
                            move |form| {
                                handle_submit(form);
                                handle.close();
                            }
                        })
                        on_cancel=Callback::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        })
                    />
                }
                .into_any()
            },
        );
    };

    let handle_delete = move |id: RecordId| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Remove this employee from the directory?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        set_items.update(|list| list.retain(|r| r.id != id));
        toasts.success("Employee removed successfully");
        spawn_local(async move {
            if let Err(e) = remote::delete_row(TABLE, id.as_str()).await {
                log::error!("Error deleting {TABLE}: {e}");
            }
        });
    };

    let handle_export = move |_| {
        let filename = format!("staff-directory-{}.csv", date_utils::today_iso());
        match download_csv(&filtered(), &filename) {
            Ok(()) => toasts.success("Staff directory exported successfully"),
            Err(e) => toasts.error(e),
        }
    };

    view! {
        <div class="content">
            <PageHeader
                title="Staff Management".to_string()
                subtitle="Employee directory and performance".to_string()
                icon_name="users".to_string()
            >
                <button class="button button--secondary" on:click=handle_export>
                    {icon("download")}
                    {"Export"}
                </button>
                <button class="button button--primary" on:click=move |_| open_details_modal()>
                    {icon("plus")}
                    {"Add Employee"}
                </button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total Staff".to_string()
                    icon_name="users".to_string()
                    value=Signal::derive(move || Some(items.get().len() as f64))
                    format=ValueFormat::Integer
                    subtitle=Signal::derive(move || {
                        Some(format!("{} active", active_count(&items.get())))
                    })
                />
                <StatCard
                    label="Departments".to_string()
                    icon_name="layers".to_string()
                    value=Signal::derive(move || Some(department_stats(&items.get()).len() as f64))
                    format=ValueFormat::Integer
                    subtitle=Signal::derive(|| Some("Active departments".to_string()))
                />
                <StatCard
                    label="Monthly Salaries".to_string()
                    icon_name="dollar-sign".to_string()
                    value=Signal::derive(move || {
                        Some(items.get().iter().map(|m| m.salary).sum::<f64>())
                    })
                    format=ValueFormat::rupees()
                    subtitle=Signal::derive(|| Some("Directory total".to_string()))
                />
            </div>

            <div class="filter-panel">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |value| set_search.set(value))
                    placeholder="Search by name, ID, role or department...".to_string()
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("employee_id")>
                                "Employee"
                                <span>{move || get_sort_indicator(&sort_field.get(), "employee_id", sort_ascending.get())}</span>
                            </th>
                            <th class="table__header-cell">{"Role"}</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("department")>
                                "Department"
                                <span>{move || get_sort_indicator(&sort_field.get(), "department", sort_ascending.get())}</span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("join_date")>
                                "Join Date"
                                <span>{move || get_sort_indicator(&sort_field.get(), "join_date", sort_ascending.get())}</span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("salary")>
                                "Salary"
                                <span>{move || get_sort_indicator(&sort_field.get(), "salary", sort_ascending.get())}</span>
                            </th>
                            <th class="table__header-cell">{"Contact"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                            <th class="table__header-cell">{"Performance"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || filtered().into_iter().map(|member| {
                            let id_for_delete = member.id.clone();
                            let status_class = match member.status {
                                StaffStatus::Active => "badge badge--success",
                                StaffStatus::Inactive => "badge badge--warning",
                            };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        <div>
                                            <p class="table__cell-primary">{member.name.clone()}</p>
                                            <p class="table__cell-secondary">{member.employee_id.clone()}</p>
                                        </div>
                                    </td>
                                    <td class="table__cell">{member.role.clone()}</td>
                                    <td class="table__cell">{member.department.clone()}</td>
                                    <td class="table__cell">{date_utils::format_date(member.join_date)}</td>
                                    <td class="table__cell table__cell--number">{format_money(member.salary)}</td>
                                    <td class="table__cell">
                                        <div>
                                            <p class="table__cell-secondary">{member.email.clone()}</p>
                                            <p class="table__cell-secondary">{member.phone.clone()}</p>
                                        </div>
                                    </td>
                                    <td class="table__cell">
                                        <span class=status_class>{member.status.label()}</span>
                                    </td>
                                    <td class="table__cell">
                                        <span class=rating_badge_class(member.performance)>{member.performance.label()}</span>
                                    </td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--icon"
                                            title="Remove"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                handle_delete(id_for_delete.clone());
                                            }
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            // Department head counts
            <div class="card">
                <div class="card__header">
                    <h3>{"Department Overview"}</h3>
                    <p>{"Head count per department and rating"}</p>
                </div>
                <div class="card__body">
                    {move || department_stats(&items.get()).into_iter().map(|(department, count)| {
                        view! {
                            <div class="breakdown-row">
                                <div class="breakdown-row__labels">
                                    <span>{department}</span>
                                    <span>{format!("{} employees", count)}</span>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                    {move || performance_stats(&items.get()).into_iter().map(|(rating, count)| {
                        view! {
                            <div class="breakdown-row">
                                <div class="breakdown-row__labels">
                                    <span class=rating_badge_class(rating)>{rating.label()}</span>
                                    <span>{count}</span>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
