use crate::domain::a009_profit_estimator::ui::details::ProfitDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::remote;
use crate::shared::date_utils;
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use crate::shared::ledger::LedgerService;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::format_money;
use crate::shared::toast::ToastService;
use contracts::domain::a009_profit_estimator::{
    demo_records, profit_band, summarize, ProfitBand, ProfitEntry, ProfitForm,
};
use contracts::domain::common::RecordId;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const TABLE: &str = "profit_estimator";

fn band_badge_class(band: ProfitBand) -> &'static str {
    match band {
        ProfitBand::Excellent | ProfitBand::Good => "badge badge--success",
        ProfitBand::Profitable => "badge badge--outline",
        ProfitBand::MinorLoss | ProfitBand::MajorLoss => "badge badge--error",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProfitEstimatorList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let ledger = use_context::<LedgerService>().expect("LedgerService not found in context");

    let (items, set_items) = signal::<Vec<ProfitEntry>>(demo_records());

    if remote::is_configured() {
        spawn_local(async move {
            match remote::fetch_rows::<ProfitEntry>(TABLE).await {
                Ok(rows) => set_items.set(rows),
                Err(e) => {
                    log::error!("Error fetching {TABLE}: {e}");
                    toasts.error("Failed to load profit data");
                }
            }
        });
    }

    let summary = Memo::new(move |_| summarize(&items.get()));

    let handle_submit = move |form: ProfitForm| match form.build() {
        Ok(entry) => {
            ledger.add_profit_estimator_revenue(entry.date, entry.revenue);
            let profit = entry.estimated_profit;
            let message = format!(
                "Profit estimate added: {} of {}",
                if profit >= 0.0 { "Profit" } else { "Loss" },
                format_money(profit.abs())
            );
            let for_remote = entry.clone();
            set_items.update(|list| list.insert(0, entry));
            toasts.success(message);
            spawn_local(async move {
                if let Err(e) = remote::insert_row(TABLE, &for_remote).await {
                    log::error!("Error creating {TABLE}: {e}");
                    toasts.error("Failed to save profit data");
                }
            });
        }
        Err(e) => toasts.error(e),
    };

    let open_details_modal = move || {
        modal_stack.push_with_frame(
            Some("max-width: min(560px, 95vw); width: min(560px, 95vw);".to_string()),
            Some("profit-modal".to_string()),
            move |handle| {
                view! {
                    <ProfitDetails
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
                w.confirm_with_message("Delete this profit estimate?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        set_items.update(|list| list.retain(|r| r.id != id));
        toasts.success("Profit estimate deleted successfully");
        spawn_local(async move {
            if let Err(e) = remote::delete_row(TABLE, id.as_str()).await {
                log::error!("Error deleting {TABLE}: {e}");
            }
        });
    };

    let handle_export = move |_| {
        let filename = format!("profit-estimates-{}.csv", date_utils::today_iso());
        match download_csv(&items.get(), &filename) {
            Ok(()) => toasts.success("Profit estimates exported successfully"),
            Err(e) => toasts.error(e),
        }
    };

    let sorted_items = move || {
        let mut list = items.get();
        list.sort_by(|a, b| b.date.cmp(&a.date));
        list
    };

    view! {
        <div class="content">
            <PageHeader
                title="Profit Estimator".to_string()
                subtitle="Track daily profit/loss with expense analysis".to_string()
                icon_name="bar-chart".to_string()
            >
                <button class="button button--secondary" on:click=handle_export>
                    {icon("download")}
                    {"Export"}
                </button>
                <button class="button button--primary" on:click=move |_| open_details_modal()>
                    {icon("plus")}
                    {"Add Estimate"}
                </button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total Revenue".to_string()
                    icon_name="trending-up".to_string()
                    value=Signal::derive(move || Some(summary.get().total_revenue))
                    format=ValueFormat::rupees()
                    subtitle=Signal::derive(|| Some("Across recorded days".to_string()))
                />
                <StatCard
                    label="Total Expenses".to_string()
                    icon_name="receipt".to_string()
                    value=Signal::derive(move || Some(summary.get().total_expenses))
                    format=ValueFormat::rupees()
                    subtitle=Signal::derive(|| Some("Ads, shipping, COGS, other".to_string()))
                />
                <StatCard
                    label="Estimated Profit".to_string()
                    icon_name="dollar-sign".to_string()
                    value=Signal::derive(move || Some(summary.get().total_profit))
                    format=ValueFormat::rupees()
                    status=Signal::derive(move || {
                        if summary.get().total_profit >= 0.0 {
                            IndicatorStatus::Good
                        } else {
                            IndicatorStatus::Bad
                        }
                    })
                    subtitle=Signal::derive(move || {
                        Some(format!("Avg {} per day", format_money(summary.get().avg_daily_profit)))
                    })
                />
                <StatCard
                    label="Profitable Days".to_string()
                    icon_name="check-circle".to_string()
                    value=Signal::derive(move || Some(summary.get().profitable_days as f64))
                    format=ValueFormat::Integer
                    subtitle=Signal::derive(move || {
                        Some(format!("Of {} recorded", items.get().len()))
                    })
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Date"}</th>
                            <th class="table__header-cell">{"Revenue"}</th>
                            <th class="table__header-cell">{"Ad Spend"}</th>
                            <th class="table__header-cell">{"Shipping"}</th>
                            <th class="table__header-cell">{"COGS"}</th>
                            <th class="table__header-cell">{"Other"}</th>
                            <th class="table__header-cell">{"Est. Profit"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|entry| {
                            let id_for_delete = entry.id.clone();
                            let band = profit_band(entry.estimated_profit);
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{date_utils::format_date(entry.date)}</td>
                                    <td class="table__cell table__cell--number">{format_money(entry.revenue)}</td>
                                    <td class="table__cell table__cell--number">{format_money(entry.ad_spend)}</td>
                                    <td class="table__cell table__cell--number">{format_money(entry.shipping)}</td>
                                    <td class="table__cell table__cell--number">{format_money(entry.cogs)}</td>
                                    <td class="table__cell table__cell--number">{format_money(entry.other_expenses)}</td>
                                    <td class="table__cell table__cell--number table__cell-primary">
                                        {format_money(entry.estimated_profit)}
                                    </td>
                                    <td class="table__cell">
                                        <span class=band_badge_class(band)>{band.label()}</span>
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
        </div>
    }
}
