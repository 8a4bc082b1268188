use crate::domain::a010_performance::ui::details::PerformanceDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::remote;
use crate::shared::date_utils;
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::format_money;
use crate::shared::toast::ToastService;
use contracts::domain::a010_performance::{
    best_performer, demo_records, distinct_months, distinct_skus, filter_reports, summarize,
    worst_performer, PerformanceEntry, PerformanceForm,
};
use contracts::shared::indicators::ValueFormat;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const TABLE: &str = "performance_reports";

fn margin_badge(net_margin: f64) -> (&'static str, &'static str) {
    if net_margin > 20_000.0 {
        ("badge badge--success", "Excellent")
    } else if net_margin > 10_000.0 {
        ("badge badge--outline", "Good")
    } else {
        ("badge badge--warning", "Needs Attention")
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PerformanceList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (items, set_items) = signal::<Vec<PerformanceEntry>>(demo_records());
    let (month_filter, set_month_filter) = signal::<Option<String>>(None);
    let (sku_filter, set_sku_filter) = signal::<Option<String>>(None);

    if remote::is_configured() {
        spawn_local(async move {
            match remote::fetch_rows::<PerformanceEntry>(TABLE).await {
                Ok(rows) => set_items.set(rows),
                Err(e) => {
                    log::error!("Error fetching {TABLE}: {e}");
                    toasts.error("Failed to load performance data");
                }
            }
        });
    }

    let filtered = move || {
        filter_reports(
            &items.get(),
            month_filter.get().as_deref(),
            sku_filter.get().as_deref(),
        )
    };

    let summary = Memo::new(move |_| summarize(&filtered()));

    let handle_submit = move |form: PerformanceForm| match form.build() {
        Ok(entry) => {
            let for_remote = entry.clone();
            set_items.update(|list| list.insert(0, entry));
            toasts.success("Performance data added successfully");
            spawn_local(async move {
                if let Err(e) = remote::insert_row(TABLE, &for_remote).await {
                    log::error!("Error creating {TABLE}: {e}");
                    toasts.error("Failed to save performance data");
                }
            });
        }
        Err(e) => toasts.error(e),
    };

    let open_details_modal = move || {
        modal_stack.push_with_frame(
            Some("max-width: min(680px, 95vw); width: min(680px, 95vw);".to_string()),
            Some("performance-modal".to_string()),
            move |handle| {
                view! {
                    <PerformanceDetails
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
        let month = month_filter.get().unwrap_or_else(|| "all".to_string());
        let filename = format!("performance-report-{}.csv", month);
        match download_csv(&filtered(), &filename) {
            Ok(()) => toasts.success("Performance report exported successfully"),
            Err(e) => toasts.error(e),
        }
    };

    view! {
        <div class="content">
            <PageHeader
                title="Performance Reports".to_string()
                subtitle="Monthly product-level sales performance".to_string()
                icon_name="pie-chart".to_string()
            >
                <button class="button button--secondary" on:click=handle_export>
                    {icon("download")}
                    {"Export"}
                </button>
                <button class="button button--primary" on:click=move |_| open_details_modal()>
                    {icon("plus")}
                    {"Add Data"}
                </button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total Sales".to_string()
                    icon_name="trending-up".to_string()
                    value=Signal::derive(move || Some(summary.get().total_sales))
                    format=ValueFormat::rupees()
                    subtitle=Signal::derive(move || {
                        Some(format!("{} margin", crate::shared::number_format::format_percent(summary.get().margin_rate)))
                    })
                />
                <StatCard
                    label="Net Margin".to_string()
                    icon_name="dollar-sign".to_string()
                    value=Signal::derive(move || Some(summary.get().total_net_margin))
                    format=ValueFormat::rupees()
                    subtitle=Signal::derive(|| Some("After returns, ads, COGS".to_string()))
                />
                <StatCard
                    label="Returns".to_string()
                    icon_name="alert-triangle".to_string()
                    value=Signal::derive(move || Some(summary.get().total_returns))
                    format=ValueFormat::rupees()
                    subtitle=Signal::derive(move || {
                        Some(format!("{} return rate", crate::shared::number_format::format_percent(summary.get().return_rate)))
                    })
                />
                <StatCard
                    label="Ad Spend".to_string()
                    icon_name="bar-chart".to_string()
                    value=Signal::derive(move || Some(summary.get().total_ad_spend))
                    format=ValueFormat::rupees()
                    subtitle=Signal::derive(|| Some("Attributed to SKUs".to_string()))
                />
            </div>

            // Filters
            <div class="filter-panel">
                <select
                    class="filter-panel__select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_month_filter.set(if value == "all" { None } else { Some(value) });
                    }
                >
                    <option value="all">{"All Months"}</option>
                    {move || distinct_months(&items.get()).into_iter().map(|month| {
                        let label = date_utils::format_month(&month);
                        view! { <option value=month.clone()>{label}</option> }
                    }).collect_view()}
                </select>
                <select
                    class="filter-panel__select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_sku_filter.set(if value == "all" { None } else { Some(value) });
                    }
                >
                    <option value="all">{"All Products"}</option>
                    {move || distinct_skus(&items.get()).into_iter().map(|sku| {
                        view! { <option value=sku.clone()>{sku.clone()}</option> }
                    }).collect_view()}
                </select>
            </div>

            // Best / worst performer cards
            <div class="card-grid">
                {move || best_performer(&filtered()).cloned().map(|best| view! {
                    <div class="card card--highlight-success">
                        <div class="card__header">
                            <h3>{"Best Performer"}</h3>
                            <p>{format!("{} ({})", best.product_name, best.sku)}</p>
                        </div>
                        <div class="card__body">
                            <span class="card__metric">{format_money(best.net_margin)}</span>
                            <p class="breakdown-row__hint">{"Net margin"}</p>
                        </div>
                    </div>
                })}
                {move || worst_performer(&filtered()).cloned().map(|worst| view! {
                    <div class="card card--highlight-error">
                        <div class="card__header">
                            <h3>{"Worst Performer"}</h3>
                            <p>{format!("{} ({})", worst.product_name, worst.sku)}</p>
                        </div>
                        <div class="card__body">
                            <span class="card__metric">{format_money(worst.net_margin)}</span>
                            <p class="breakdown-row__hint">{"Net margin"}</p>
                        </div>
                    </div>
                })}
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Product"}</th>
                            <th class="table__header-cell">{"Month"}</th>
                            <th class="table__header-cell">{"Sales"}</th>
                            <th class="table__header-cell">{"Returns"}</th>
                            <th class="table__header-cell">{"Ad Spend"}</th>
                            <th class="table__header-cell">{"COGS"}</th>
                            <th class="table__header-cell">{"Net Margin"}</th>
                            <th class="table__header-cell">{"Units"}</th>
                            <th class="table__header-cell">{"Rating"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || filtered().into_iter().map(|entry| {
                            let (badge_class, badge_label) = margin_badge(entry.net_margin);
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        <div>
                                            <p class="table__cell-primary">{entry.product_name.clone()}</p>
                                            <p class="table__cell-secondary">{entry.sku.clone()}</p>
                                        </div>
                                    </td>
                                    <td class="table__cell">{date_utils::format_month(&entry.month)}</td>
                                    <td class="table__cell table__cell--number">{format_money(entry.sales)}</td>
                                    <td class="table__cell table__cell--number">{format_money(entry.returns)}</td>
                                    <td class="table__cell table__cell--number">{format_money(entry.ad_spend)}</td>
                                    <td class="table__cell table__cell--number">{format_money(entry.cogs)}</td>
                                    <td class="table__cell table__cell--number table__cell-primary">{format_money(entry.net_margin)}</td>
                                    <td class="table__cell table__cell--number">{entry.units}</td>
                                    <td class="table__cell">
                                        <span class=badge_class>{badge_label}</span>
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
