use crate::domain::a005_expenses::ui::details::ExpenseDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::remote;
use crate::shared::date_utils;
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use crate::shared::ledger::LedgerService;
use crate::shared::list_utils::{get_sort_indicator, sort_list, Sortable};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::{format_money, format_percent};
use crate::shared::toast::ToastService;
use contracts::domain::a005_expenses::{
    category_totals, demo_records, pending_count, total_expenses, Expense, ExpenseForm,
    ExpenseStatus,
};
use contracts::domain::common::RecordId;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen_futures::spawn_local;

const TABLE: &str = "expenses";

impl Sortable for Expense {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "date" => self.date.cmp(&other.date),
            "category" => self.category.to_lowercase().cmp(&other.category.to_lowercase()),
            "amount" => self.amount.total_cmp(&other.amount),
            "vendor" => self.vendor.to_lowercase().cmp(&other.vendor.to_lowercase()),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ExpensesList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let ledger = use_context::<LedgerService>().expect("LedgerService not found in context");

    let (items, set_items) = signal::<Vec<Expense>>(demo_records());
    let (sort_field, set_sort_field) = signal("date".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);

    if remote::is_configured() {
        spawn_local(async move {
            match remote::fetch_rows::<Expense>(TABLE).await {
                Ok(rows) => set_items.set(rows),
                Err(e) => {
                    log::error!("Error fetching {TABLE}: {e}");
                    toasts.error("Failed to load expenses");
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

    let sorted_items = move || {
        let mut list = items.get();
        sort_list(&mut list, &sort_field.get(), sort_ascending.get());
        list
    };

    let handle_submit = move |form: ExpenseForm| match form.build(date_utils::today()) {
        Ok(expense) => {
            ledger.add_expense_entry(
                expense.date,
                expense.amount,
                &expense.category,
                &expense.description,
            );
            let message = format!("Expense of {} added successfully", format_money(expense.amount));
            let for_remote = expense.clone();
            set_items.update(|list| list.insert(0, expense));
            toasts.success(message);
            spawn_local(async move {
                if let Err(e) = remote::insert_row(TABLE, &for_remote).await {
                    log::error!("Error creating {TABLE}: {e}");
                    toasts.error("Failed to save expense");
                }
            });
        }
        Err(e) => toasts.error(e),
    };

    let open_details_modal = move || {
        modal_stack.push_with_frame(
            Some("max-width: min(560px, 95vw); width: min(560px, 95vw);".to_string()),
            Some("expense-modal".to_string()),
            move |handle| {
                view! {
                    <ExpenseDetails
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
                w.confirm_with_message("Are you sure you want to delete this expense?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        set_items.update(|list| list.retain(|r| r.id != id));
        toasts.success("Expense deleted successfully");
        spawn_local(async move {
            if let Err(e) = remote::delete_row(TABLE, id.as_str()).await {
                log::error!("Error deleting {TABLE}: {e}");
            }
        });
    };

    let handle_export = move |_| {
        let filename = format!("expenses-{}.csv", date_utils::today_iso());
        match download_csv(&sorted_items(), &filename) {
            Ok(()) => toasts.success("Expenses exported successfully"),
            Err(e) => toasts.error(e),
        }
    };

    view! {
        <div class="content">
            <PageHeader
                title="Expenses".to_string()
                subtitle="Track operational spending by category".to_string()
                icon_name="receipt".to_string()
            >
                <button class="button button--secondary" on:click=handle_export>
                    {icon("download")}
                    {"Export"}
                </button>
                <button class="button button--primary" on:click=move |_| open_details_modal()>
                    {icon("plus")}
                    {"Add Expense"}
                </button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total Expenses".to_string()
                    icon_name="dollar-sign".to_string()
                    value=Signal::derive(move || Some(total_expenses(&items.get())))
                    format=ValueFormat::rupees()
                    subtitle=Signal::derive(|| Some("All recorded expenses".to_string()))
                />
                <StatCard
                    label="Pending Approvals".to_string()
                    icon_name="alert-triangle".to_string()
                    value=Signal::derive(move || Some(pending_count(&items.get()) as f64))
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if pending_count(&items.get()) > 0 {
                            IndicatorStatus::Warning
                        } else {
                            IndicatorStatus::Good
                        }
                    })
                    subtitle=Signal::derive(|| Some("Awaiting payment".to_string()))
                />
                <StatCard
                    label="Categories".to_string()
                    icon_name="layers".to_string()
                    value=Signal::derive(move || Some(category_totals(&items.get()).len() as f64))
                    format=ValueFormat::Integer
                    subtitle=Signal::derive(|| Some("In use".to_string()))
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("date")>
                                "Date"
                                <span>{move || get_sort_indicator(&sort_field.get(), "date", sort_ascending.get())}</span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("category")>
                                "Category"
                                <span>{move || get_sort_indicator(&sort_field.get(), "category", sort_ascending.get())}</span>
                            </th>
                            <th class="table__header-cell">{"Description"}</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("amount")>
                                "Amount"
                                <span>{move || get_sort_indicator(&sort_field.get(), "amount", sort_ascending.get())}</span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("vendor")>
                                "Vendor"
                                <span>{move || get_sort_indicator(&sort_field.get(), "vendor", sort_ascending.get())}</span>
                            </th>
                            <th class="table__header-cell">{"Status"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|expense| {
                            let id_for_delete = expense.id.clone();
                            let status_class = match expense.status {
                                ExpenseStatus::Paid => "badge badge--success",
                                ExpenseStatus::Pending => "badge badge--warning",
                            };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{date_utils::format_date(expense.date)}</td>
                                    <td class="table__cell">{expense.category.clone()}</td>
                                    <td class="table__cell table__cell--truncate">{expense.description.clone()}</td>
                                    <td class="table__cell table__cell--number">{format_money(expense.amount)}</td>
                                    <td class="table__cell">{expense.vendor.clone()}</td>
                                    <td class="table__cell">
                                        <span class=status_class>{expense.status.label()}</span>
                                    </td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--icon"
                                            title="Delete"
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

            // Category breakdown
            <div class="card">
                <div class="card__header">
                    <h3>{"Category Breakdown"}</h3>
                    <p>{"Spending distribution by category"}</p>
                </div>
                <div class="card__body">
                    {move || {
                        let list = items.get();
                        let total = total_expenses(&list);
                        category_totals(&list).into_iter().map(|(category, amount)| {
                            let percent = if total > 0.0 { amount / total * 100.0 } else { 0.0 };
                            view! {
                                <div class="breakdown-row">
                                    <div class="breakdown-row__labels">
                                        <span>{category}</span>
                                        <span>{format_money(amount)}</span>
                                    </div>
                                    <ProgressBar percent=Signal::derive(move || percent) />
                                    <p class="breakdown-row__hint">
                                        {format!("{} of total", format_percent(percent))}
                                    </p>
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}
