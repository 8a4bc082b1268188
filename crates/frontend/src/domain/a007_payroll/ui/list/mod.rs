use crate::domain::a007_payroll::ui::details::PayrollDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::remote;
use crate::shared::date_utils;
use crate::shared::export::{download_csv, download_csv_text};
use crate::shared::icons::icon;
use crate::shared::ledger::LedgerService;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::{format_money, format_percent};
use crate::shared::toast::ToastService;
use contracts::domain::a007_payroll::{
    demo_records, department_breakdown, recalculate_all, summarize, tax_report, PayrollEntry,
    PayrollForm,
};
use contracts::domain::common::RecordId;
use contracts::shared::export::escape_cell;
use contracts::shared::indicators::ValueFormat;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const TABLE: &str = "payroll";

#[component]
#[allow(non_snake_case)]
pub fn PayrollList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let ledger = use_context::<LedgerService>().expect("LedgerService not found in context");

    let (items, set_items) = signal::<Vec<PayrollEntry>>(demo_records());

    if remote::is_configured() {
        spawn_local(async move {
            match remote::fetch_rows::<PayrollEntry>(TABLE).await {
                Ok(mut rows) => {
                    recalculate_all(&mut rows);
                    set_items.set(rows);
                }
                Err(e) => {
                    log::error!("Error fetching {TABLE}: {e}");
                    toasts.error("Failed to load payroll data");
                }
            }
        });
    }

    let summary = Memo::new(move |_| summarize(&items.get()));

    let handle_recalculate = move |_| {
        set_items.update(|list| recalculate_all(list));
        toasts.success("Payroll recalculated");
    };

    let handle_submit = move |form: PayrollForm| match form.id.clone() {
        Some(id) => {
            let mut updated: Option<PayrollEntry> = None;
            set_items.update(|list| {
                if let Some(record) = list.iter_mut().find(|r| r.id == id) {
                    match form.apply(record) {
                        Ok(()) => updated = Some(record.clone()),
                        Err(e) => toasts.error(e),
                    }
                }
            });
            if let Some(record) = updated {
                toasts.success("Employee payroll updated successfully");
                spawn_local(async move {
                    if let Err(e) = remote::update_row(TABLE, record.id.as_str(), &record).await {
                        log::error!("Error updating {TABLE}: {e}");
                        toasts.error("Failed to save payroll");
                    }
                });
            }
        }
        None => match form.build() {
            Ok(entry) => {
                ledger.add_payroll_expense(
                    date_utils::today(),
                    entry.net_salary,
                    &entry.employee_name,
                    &entry.department,
                );
                let for_remote = entry.clone();
                set_items.update(|list| list.push(entry));
                toasts.success("Employee added to payroll successfully");
                spawn_local(async move {
                    if let Err(e) = remote::insert_row(TABLE, &for_remote).await {
                        log::error!("Error creating {TABLE}: {e}");
                        toasts.error("Failed to save payroll");
                    }
                });
            }
            Err(e) => toasts.error(e),
        },
    };

    let open_details_modal = move |record: Option<PayrollEntry>| {
        let record = StoredValue::new(record);
        modal_stack.push_with_frame(
            Some("max-width: min(680px, 95vw); width: min(680px, 95vw);".to_string()),
            Some("payroll-modal".to_string()),
            move |handle| {
                view! {
                    <PayrollDetails
                        record=record.get_value()
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

    let handle_edit = move |id: RecordId| {
        let record = items.get().into_iter().find(|r| r.id == id);
        if record.is_some() {
            open_details_modal(record);
        }
    };

    let export_salary_slips = move |_| {
        let filename = format!("salary-slips-{}.csv", date_utils::today_iso());
        match download_csv(&items.get(), &filename) {
            Ok(()) => toasts.success("Salary slips exported successfully"),
            Err(e) => toasts.error(e),
        }
    };

    let export_tax_reports = move |_| {
        let report = tax_report(&items.get());
        let filename = format!("tax-reports-{}.csv", date_utils::today_iso());
        match download_csv(&report, &filename) {
            Ok(()) => toasts.success("Tax reports generated and exported successfully"),
            Err(e) => toasts.error(e),
        }
    };

    let export_payroll_summary = move |_| {
        let s = summary.get_untracked();
        let rows = [
            ("Metric", "Value".to_string()),
            ("Total Employees", s.employees.to_string()),
            ("Total Payroll", s.total_payroll.to_string()),
            ("Average Salary", s.average_salary.to_string()),
            ("Report Generated", date_utils::today_iso()),
        ];
        let content = rows
            .iter()
            .map(|(metric, value)| format!("{},{}", escape_cell(metric), escape_cell(value)))
            .collect::<Vec<_>>()
            .join("\n");
        let filename = format!("payroll-summary-{}.csv", date_utils::today_iso());
        match download_csv_text(&content, &filename) {
            Ok(()) => toasts.success("Payroll summary exported successfully"),
            Err(e) => toasts.error(e),
        }
    };

    view! {
        <div class="content">
            <PageHeader
                title="Payroll Management".to_string()
                subtitle="Calculate and manage employee salaries".to_string()
                icon_name="dollar-sign".to_string()
            >
                <button class="button button--secondary" on:click=handle_recalculate>
                    {icon("calculator")}
                    {"Recalculate"}
                </button>
                <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                    {icon("plus")}
                    {"Add Employee"}
                </button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total Employees".to_string()
                    icon_name="users".to_string()
                    value=Signal::derive(move || Some(summary.get().employees as f64))
                    format=ValueFormat::Integer
                    subtitle=Signal::derive(|| Some("Active employees".to_string()))
                />
                <StatCard
                    label="Total Payroll".to_string()
                    icon_name="dollar-sign".to_string()
                    value=Signal::derive(move || Some(summary.get().total_payroll))
                    format=ValueFormat::rupees()
                    subtitle=Signal::derive(|| Some("This month's total".to_string()))
                />
                <StatCard
                    label="Average Salary".to_string()
                    icon_name="calculator".to_string()
                    value=Signal::derive(move || Some(summary.get().average_salary))
                    format=ValueFormat::rupees()
                    subtitle=Signal::derive(|| Some("Per employee".to_string()))
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Employee"}</th>
                            <th class="table__header-cell">{"Department"}</th>
                            <th class="table__header-cell">{"Base Salary"}</th>
                            <th class="table__header-cell">{"Days Worked"}</th>
                            <th class="table__header-cell">{"Overtime"}</th>
                            <th class="table__header-cell">{"Gross Salary"}</th>
                            <th class="table__header-cell">{"Deductions"}</th>
                            <th class="table__header-cell">{"Net Salary"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|entry| {
                            let id_for_edit = entry.id.clone();
                            view! {
                                <tr class="table__row" on:click=move |_| handle_edit(id_for_edit.clone())>
                                    <td class="table__cell">
                                        <div>
                                            <p class="table__cell-primary">{entry.employee_name.clone()}</p>
                                            <p class="table__cell-secondary">{entry.employee_id.clone()}</p>
                                        </div>
                                    </td>
                                    <td class="table__cell">{entry.department.clone()}</td>
                                    <td class="table__cell table__cell--number">{format_money(entry.base_salary)}</td>
                                    <td class="table__cell">{format!("{}/{}", entry.days_worked, entry.total_days)}</td>
                                    <td class="table__cell">{format!("{}h @ ₹{}", entry.overtime_hours, entry.overtime_rate)}</td>
                                    <td class="table__cell table__cell--number">{format_money(entry.gross_salary)}</td>
                                    <td class="table__cell table__cell--number">{format_money(entry.deductions)}</td>
                                    <td class="table__cell table__cell--number table__cell-primary">{format_money(entry.net_salary)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="card-grid">
                // Department breakdown
                <div class="card">
                    <div class="card__header">
                        <h3>{"Payroll Breakdown"}</h3>
                        <p>{"Department-wise salary distribution"}</p>
                    </div>
                    <div class="card__body">
                        {move || department_breakdown(&items.get()).into_iter().map(|share| {
                            view! {
                                <div class="breakdown-row">
                                    <div class="breakdown-row__labels">
                                        <span>{share.department.clone()}</span>
                                        <span>{format_money(share.total_net)}</span>
                                    </div>
                                    <p class="breakdown-row__hint">
                                        {format!(
                                            "{} employees · {}",
                                            share.employees,
                                            format_percent(share.share)
                                        )}
                                    </p>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>

                // Quick actions
                <div class="card">
                    <div class="card__header">
                        <h3>{"Payroll Actions"}</h3>
                        <p>{"Quick actions for payroll processing"}</p>
                    </div>
                    <div class="card__body card__body--actions">
                        <button class="button button--secondary button--block" on:click=export_salary_slips>
                            {icon("file-text")}
                            {"Export Salary Slips"}
                        </button>
                        <button class="button button--secondary button--block" on:click=export_tax_reports>
                            {icon("receipt")}
                            {"Generate Tax Reports"}
                        </button>
                        <button class="button button--secondary button--block" on:click=export_payroll_summary>
                            {icon("download")}
                            {"Export Payroll Summary"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
