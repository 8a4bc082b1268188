use crate::domain::a002_attendance::ui::details::AttendanceDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::remote;
use crate::shared::date_utils;
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::format_quantity;
use crate::shared::toast::ToastService;
use contracts::domain::a002_attendance::{
    day_stats, demo_records, AttendanceEntry, AttendanceStatus,
};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const TABLE: &str = "attendance";

fn status_badge_class(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => "badge badge--success",
        AttendanceStatus::Absent => "badge badge--error",
        AttendanceStatus::HalfDay => "badge badge--warning",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AttendanceList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (items, set_items) = signal::<Vec<AttendanceEntry>>(demo_records());

    if remote::is_configured() {
        spawn_local(async move {
            match remote::fetch_rows::<AttendanceEntry>(TABLE).await {
                Ok(rows) => set_items.set(rows),
                Err(e) => {
                    log::error!("Error fetching {TABLE}: {e}");
                    toasts.error("Failed to load attendance data");
                }
            }
        });
    }

    // Today's stats fall back to the seed date so demo data shows up.
    let stats = Memo::new(move |_| {
        let list = items.get();
        let today = date_utils::today();
        let stats = day_stats(&list, today);
        if stats.present + stats.absent == 0 {
            if let Some(latest) = list.iter().map(|e| e.date).max() {
                return day_stats(&list, latest);
            }
        }
        stats
    });

    let handle_submit = move |form: contracts::domain::a002_attendance::AttendanceForm| {
        match form.build(date_utils::today()) {
            Ok(entry) => {
                let name = entry.employee_name.clone();
                let for_remote = entry.clone();
                set_items.update(|list| list.insert(0, entry));
                toasts.success(format!("Attendance marked for {}", name));
                spawn_local(async move {
                    if let Err(e) = remote::insert_row(TABLE, &for_remote).await {
                        log::error!("Error creating {TABLE}: {e}");
                        toasts.error("Failed to save attendance");
                    }
                });
            }
            Err(e) => toasts.error(e),
        }
    };

    let open_details_modal = move || {
        modal_stack.push_with_frame(
            Some("max-width: min(560px, 95vw); width: min(560px, 95vw);".to_string()),
            Some("attendance-modal".to_string()),
            move |handle| {
                view! {
                    <AttendanceDetails
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

    let handle_export = move |_| {
        let filename = format!("attendance-{}.csv", date_utils::today_iso());
        match download_csv(&items.get(), &filename) {
            Ok(()) => toasts.success("Attendance data exported successfully"),
            Err(e) => toasts.error(e),
        }
    };

    // Newest first, then by employee id for stable grouping per day.
    let sorted_items = move || {
        let mut list = items.get();
        list.sort_by(|a, b| b.date.cmp(&a.date).then(a.employee_id.cmp(&b.employee_id)));
        list
    };

    view! {
        <div class="content">
            <PageHeader
                title="Attendance".to_string()
                subtitle="Daily punch-in/punch-out tracking".to_string()
                icon_name="calendar".to_string()
            >
                <button class="button button--secondary" on:click=handle_export>
                    {icon("download")}
                    {"Export"}
                </button>
                <button class="button button--primary" on:click=move |_| open_details_modal()>
                    {icon("plus")}
                    {"Mark Attendance"}
                </button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Present".to_string()
                    icon_name="check-circle".to_string()
                    value=Signal::derive(move || Some(stats.get().present as f64))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Good)
                    subtitle=Signal::derive(|| Some("Including half days".to_string()))
                />
                <StatCard
                    label="Absent".to_string()
                    icon_name="alert-triangle".to_string()
                    value=Signal::derive(move || Some(stats.get().absent as f64))
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if stats.get().absent > 0 { IndicatorStatus::Warning } else { IndicatorStatus::Neutral }
                    })
                    subtitle=Signal::derive(|| Some("No punch-in recorded".to_string()))
                />
                <StatCard
                    label="Total Hours".to_string()
                    icon_name="activity".to_string()
                    value=Signal::derive(move || Some(stats.get().total_hours))
                    format=ValueFormat::Number { decimals: 1 }
                    subtitle=Signal::derive(|| Some("Worked today".to_string()))
                />
                <StatCard
                    label="Attendance Rate".to_string()
                    icon_name="users".to_string()
                    value=Signal::derive(move || Some(stats.get().attendance_rate))
                    format=ValueFormat::Percent { decimals: 1 }
                    subtitle=Signal::derive(|| Some("Present share".to_string()))
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Employee"}</th>
                            <th class="table__header-cell">{"Department"}</th>
                            <th class="table__header-cell">{"Date"}</th>
                            <th class="table__header-cell">{"Punch In"}</th>
                            <th class="table__header-cell">{"Punch Out"}</th>
                            <th class="table__header-cell">{"Hours"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|entry| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        <div>
                                            <p class="table__cell-primary">{entry.employee_name.clone()}</p>
                                            <p class="table__cell-secondary">{entry.employee_id.clone()}</p>
                                        </div>
                                    </td>
                                    <td class="table__cell">{entry.department.clone()}</td>
                                    <td class="table__cell">{date_utils::format_date(entry.date)}</td>
                                    <td class="table__cell">{entry.punch_in.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell">{entry.punch_out.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="table__cell table__cell--number">{format_quantity(entry.hours_worked)}</td>
                                    <td class="table__cell">
                                        <span class=status_badge_class(entry.status)>{entry.status.label()}</span>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
