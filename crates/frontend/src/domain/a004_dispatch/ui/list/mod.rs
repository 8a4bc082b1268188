use crate::domain::a004_dispatch::ui::details::DispatchDetails;
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
use contracts::domain::a004_dispatch::{
    channel_stats, demo_records, dispatches_on, total_revenue, DispatchEntry, DispatchForm,
    DispatchStatus,
};
use contracts::shared::indicators::ValueFormat;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const TABLE: &str = "dispatch_log";

fn status_badge_class(status: DispatchStatus) -> &'static str {
    match status {
        DispatchStatus::Packed => "badge badge--warning",
        DispatchStatus::Shipped => "badge badge--outline",
        DispatchStatus::Delivered => "badge badge--success",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn DispatchList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let ledger = use_context::<LedgerService>().expect("LedgerService not found in context");

    let (items, set_items) = signal::<Vec<DispatchEntry>>(demo_records());

    if remote::is_configured() {
        spawn_local(async move {
            match remote::fetch_rows::<DispatchEntry>(TABLE).await {
                Ok(rows) => set_items.set(rows),
                Err(e) => {
                    log::error!("Error fetching {TABLE}: {e}");
                    toasts.error("Failed to load dispatch log");
                }
            }
        });
    }

    let handle_submit = move |form: DispatchForm| {
        let sequence = items.get_untracked().len() + 1;
        match form.build(date_utils::today(), sequence) {
            Ok(entry) => {
                ledger.add_dispatch_revenue(entry.date, entry.revenue, &entry.product, &entry.channel);
                let message =
                    format!("Dispatch created for {} units of {}", entry.quantity, entry.product);
                let for_remote = entry.clone();
                set_items.update(|list| list.insert(0, entry));
                toasts.success(message);
                spawn_local(async move {
                    if let Err(e) = remote::insert_row(TABLE, &for_remote).await {
                        log::error!("Error creating {TABLE}: {e}");
                        toasts.error("Failed to save dispatch");
                    }
                });
            }
            Err(e) => toasts.error(e),
        }
    };

    let open_details_modal = move || {
        modal_stack.push_with_frame(
            Some("max-width: min(560px, 95vw); width: min(560px, 95vw);".to_string()),
            Some("dispatch-modal".to_string()),
            move |handle| {
                view! {
                    <DispatchDetails
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
        let filename = format!("dispatch-log-{}.csv", date_utils::today_iso());
        match download_csv(&items.get(), &filename) {
            Ok(()) => toasts.success("Dispatch log exported successfully"),
            Err(e) => toasts.error(e),
        }
    };

    let sorted_items = move || {
        let mut list = items.get();
        list.sort_by(|a, b| b.date.cmp(&a.date).then(a.order_no.cmp(&b.order_no)));
        list
    };

    view! {
        <div class="content">
            <PageHeader
                title="Dispatch Log".to_string()
                subtitle="Outbound shipments per sales channel".to_string()
                icon_name="truck".to_string()
            >
                <button class="button button--secondary" on:click=handle_export>
                    {icon("download")}
                    {"Export"}
                </button>
                <button class="button button--primary" on:click=move |_| open_details_modal()>
                    {icon("plus")}
                    {"New Dispatch"}
                </button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Today's Dispatches".to_string()
                    icon_name="truck".to_string()
                    value=Signal::derive(move || {
                        Some(dispatches_on(&items.get(), date_utils::today()) as f64)
                    })
                    format=ValueFormat::Integer
                    subtitle=Signal::derive(|| Some("Created today".to_string()))
                />
                <StatCard
                    label="Total Revenue".to_string()
                    icon_name="dollar-sign".to_string()
                    value=Signal::derive(move || Some(total_revenue(&items.get())))
                    format=ValueFormat::rupees()
                    subtitle=Signal::derive(|| Some("Across all channels".to_string()))
                />
                <StatCard
                    label="Orders".to_string()
                    icon_name="file-text".to_string()
                    value=Signal::derive(move || Some(items.get().len() as f64))
                    format=ValueFormat::Integer
                    subtitle=Signal::derive(|| Some("In the log".to_string()))
                />
                <StatCard
                    label="Channels".to_string()
                    icon_name="layers".to_string()
                    value=Signal::derive(move || Some(channel_stats(&items.get()).len() as f64))
                    format=ValueFormat::Integer
                    subtitle=Signal::derive(|| Some("With bookings".to_string()))
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Date"}</th>
                            <th class="table__header-cell">{"Order No"}</th>
                            <th class="table__header-cell">{"Product"}</th>
                            <th class="table__header-cell">{"Quantity"}</th>
                            <th class="table__header-cell">{"Channel"}</th>
                            <th class="table__header-cell">{"Revenue"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|entry| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{date_utils::format_date(entry.date)}</td>
                                    <td class="table__cell">{entry.order_no.clone()}</td>
                                    <td class="table__cell">{entry.product.clone()}</td>
                                    <td class="table__cell table__cell--number">{entry.quantity}</td>
                                    <td class="table__cell">{entry.channel.clone()}</td>
                                    <td class="table__cell table__cell--number">{format_money(entry.revenue)}</td>
                                    <td class="table__cell">
                                        <span class=status_badge_class(entry.status)>{entry.status.label()}</span>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            // Channel performance
            <div class="card">
                <div class="card__header">
                    <h3>{"Channel Performance"}</h3>
                    <p>{"Orders and revenue per sales channel"}</p>
                </div>
                <div class="card__body">
                    {move || channel_stats(&items.get()).into_iter().map(|stats| {
                        view! {
                            <div class="breakdown-row">
                                <div class="breakdown-row__labels">
                                    <span>{stats.channel.clone()}</span>
                                    <span>{format_money(stats.revenue)}</span>
                                </div>
                                <p class="breakdown-row__hint">
                                    {format!("{} orders", stats.orders)}
                                </p>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
