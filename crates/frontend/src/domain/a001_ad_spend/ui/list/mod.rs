pub mod state;

use self::state::create_state;
use crate::domain::a001_ad_spend::ui::details::AdSpendDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::progress_bar::ProgressBar;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::remote;
use crate::shared::date_utils;
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use crate::shared::ledger::LedgerService;
use crate::shared::list_utils::{get_sort_indicator, sort_list, SearchInput, Sortable};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::{format_money, format_percent};
use crate::shared::toast::ToastService;
use contracts::domain::a001_ad_spend::{
    demo_records, filter_spends, summarize, AdPlatform, AdSpend, AdSpendForm, DateRange,
};
use contracts::domain::common::RecordId;
use contracts::shared::indicators::ValueFormat;
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen_futures::spawn_local;

const TABLE: &str = "ad_spend";

impl Sortable for AdSpend {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "date" => self.date.cmp(&other.date),
            "platform" => self.platform.label().cmp(other.platform.label()),
            "campaign" => self
                .campaign
                .as_deref()
                .unwrap_or_default()
                .to_lowercase()
                .cmp(&other.campaign.as_deref().unwrap_or_default().to_lowercase()),
            "amount" => self.amount.total_cmp(&other.amount),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AdSpendList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let ledger = use_context::<LedgerService>().expect("LedgerService not found in context");

    let (items, set_items) = signal::<Vec<AdSpend>>(demo_records());
    let state = create_state();
    let (search, set_search) = signal(String::new());
    let (platform_filter, set_platform_filter) = signal::<Option<AdPlatform>>(None);
    let (range_filter, set_range_filter) = signal(DateRange::All);

    // Replace the demo seed with backend rows when configured.
    if remote::is_configured() {
        spawn_local(async move {
            match remote::fetch_rows::<AdSpend>(TABLE).await {
                Ok(rows) => set_items.set(rows),
                Err(e) => {
                    log::error!("Error fetching {TABLE}: {e}");
                    toasts.error("Failed to load ad spend data");
                }
            }
        });
    }

    let filtered = move || {
        filter_spends(
            &items.get(),
            &search.get(),
            platform_filter.get(),
            range_filter.get(),
            date_utils::today(),
        )
    };

    let sorted_items = move || {
        let mut list = filtered();
        let s = state.get();
        sort_list(&mut list, &s.sort_field, s.sort_ascending);
        list
    };

    let summary = Memo::new(move |_| summarize(&filtered()));

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let handle_submit = move |form: AdSpendForm| {
        match form.id.clone() {
            // Edit: apply in place and push the update to the backend.
            Some(id) => {
                let mut updated: Option<AdSpend> = None;
                set_items.update(|list| {
                    if let Some(record) = list.iter_mut().find(|r| r.id == id) {
                        match form.apply(record) {
                            Ok(()) => updated = Some(record.clone()),
                            Err(e) => toasts.error(e),
                        }
                    }
                });
                if let Some(record) = updated {
                    toasts.success("Ad spend updated successfully");
                    spawn_local(async move {
                        if let Err(e) = remote::update_row(TABLE, record.id.as_str(), &record).await
                        {
                            log::error!("Error updating {TABLE}: {e}");
                            toasts.error("Failed to save ad spend");
                        }
                    });
                }
            }
            // Create: prepend, book the marketing expense, insert remotely.
            None => match form.build() {
                Ok(record) => {
                    ledger.add_ad_spend_expense(
                        record.date,
                        record.amount,
                        record.platform.label(),
                        record.campaign.as_deref(),
                    );
                    let for_remote = record.clone();
                    set_items.update(|list| list.insert(0, record));
                    toasts.success("Ad spend added successfully");
                    spawn_local(async move {
                        if let Err(e) = remote::insert_row(TABLE, &for_remote).await {
                            log::error!("Error creating {TABLE}: {e}");
                            toasts.error("Failed to save ad spend");
                        }
                    });
                }
                Err(e) => toasts.error(e),
            },
        }
    };

    let open_details_modal = move |record: Option<AdSpend>| {
        let record = StoredValue::new(record);
        modal_stack.push_with_frame(
            Some("max-width: min(560px, 95vw); width: min(560px, 95vw);".to_string()),
            Some("ad-spend-modal".to_string()),
            move |handle| {
                view! {
                    <AdSpendDetails
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

    let handle_delete = move |id: RecordId| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure you want to delete this ad spend record?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        set_items.update(|list| list.retain(|r| r.id != id));
        toasts.success("Ad spend deleted successfully");
        spawn_local(async move {
            if let Err(e) = remote::delete_row(TABLE, id.as_str()).await {
                log::error!("Error deleting {TABLE}: {e}");
            }
        });
    };

    let handle_export = move |_| {
        let filename = format!("ad-spend-{}.csv", date_utils::today_iso());
        match download_csv(&sorted_items(), &filename) {
            Ok(()) => toasts.success("Ad spend data exported successfully"),
            Err(e) => toasts.error(e),
        }
    };

    view! {
        <div class="content">
            <PageHeader
                title="Ad Spend Tracker".to_string()
                subtitle="Track advertising spend across platforms".to_string()
                icon_name="trending-up".to_string()
            >
                <button class="button button--secondary" on:click=handle_export>
                    {icon("download")}
                    {"Export"}
                </button>
                <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                    {icon("plus")}
                    {"Add Ad Spend"}
                </button>
            </PageHeader>

            // Analytics cards
            <div class="stat-grid">
                <StatCard
                    label="Total Spend".to_string()
                    icon_name="dollar-sign".to_string()
                    value=Signal::derive(move || Some(summary.get().total))
                    format=ValueFormat::rupees()
                    subtitle=Signal::derive(|| Some("Across all platforms".to_string()))
                />
                <StatCard
                    label="Records".to_string()
                    icon_name="file-text".to_string()
                    value=Signal::derive(move || Some(summary.get().records as f64))
                    format=ValueFormat::Integer
                    subtitle=Signal::derive(|| Some("Matching current filters".to_string()))
                />
                <StatCard
                    label="Avg per Record".to_string()
                    icon_name="bar-chart".to_string()
                    value=Signal::derive(move || Some(summary.get().average))
                    format=ValueFormat::rupees()
                    subtitle=Signal::derive(|| Some("Average spend".to_string()))
                />
                <StatCard
                    label="Top Platform".to_string()
                    icon_name="trending-up".to_string()
                    value=Signal::derive(move || {
                        summary.get().by_platform.first().map(|(_, amount)| *amount)
                    })
                    format=ValueFormat::rupees()
                    subtitle=Signal::derive(move || {
                        summary.get().top_platform.map(|p| p.label().to_string())
                    })
                />
            </div>

            // Filters
            <div class="filter-panel">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |value| set_search.set(value))
                    placeholder="Search campaigns, platforms...".to_string()
                />
                <select
                    class="filter-panel__select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_platform_filter.set(AdPlatform::from_label(&value));
                    }
                >
                    <option value="all">{"All Platforms"}</option>
                    {AdPlatform::ALL.iter().map(|p| {
                        let label = p.label();
                        view! { <option value=label>{label}</option> }
                    }).collect_view()}
                </select>
                <select
                    class="filter-panel__select"
                    on:change=move |ev| {
                        let range = match event_target_value(&ev).as_str() {
                            "today" => DateRange::Today,
                            "week" => DateRange::Last7Days,
                            "month" => DateRange::Last30Days,
                            _ => DateRange::All,
                        };
                        set_range_filter.set(range);
                    }
                >
                    <option value="all">{"All Time"}</option>
                    <option value="today">{"Today"}</option>
                    <option value="week">{"Last 7 Days"}</option>
                    <option value="month">{"Last 30 Days"}</option>
                </select>
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("date")>
                                "Date"
                                <span>{move || get_sort_indicator(&state.get().sort_field, "date", state.get().sort_ascending)}</span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("platform")>
                                "Platform"
                                <span>{move || get_sort_indicator(&state.get().sort_field, "platform", state.get().sort_ascending)}</span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("campaign")>
                                "Campaign"
                                <span>{move || get_sort_indicator(&state.get().sort_field, "campaign", state.get().sort_ascending)}</span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("amount")>
                                "Amount"
                                <span>{move || get_sort_indicator(&state.get().sort_field, "amount", state.get().sort_ascending)}</span>
                            </th>
                            <th class="table__header-cell">{"Notes"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|record| {
                            let id_for_edit = record.id.clone();
                            let id_for_delete = record.id.clone();
                            view! {
                                <tr class="table__row" on:click=move |_| handle_edit(id_for_edit.clone())>
                                    <td class="table__cell">{date_utils::format_date(record.date)}</td>
                                    <td class="table__cell">
                                        <span class="badge badge--outline">{record.platform.label()}</span>
                                    </td>
                                    <td class="table__cell">{record.campaign.clone().unwrap_or_else(|| "—".to_string())}</td>
                                    <td class="table__cell table__cell--number">{format_money(record.amount)}</td>
                                    <td class="table__cell table__cell--truncate">{record.notes.clone().unwrap_or_else(|| "—".to_string())}</td>
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
                {move || filtered().is_empty().then(|| view! {
                    <div class="table-empty">{"No ad spend records found."}</div>
                })}
            </div>

            // Platform breakdown
            <div class="card">
                <div class="card__header">
                    <h3>{"Platform Breakdown"}</h3>
                    <p>{"Ad spend distribution across platforms"}</p>
                </div>
                <div class="card__body">
                    {move || {
                        let s = summary.get();
                        let total = s.total;
                        s.by_platform.into_iter().map(|(platform, amount)| {
                            let percent = if total > 0.0 { amount / total * 100.0 } else { 0.0 };
                            view! {
                                <div class="breakdown-row">
                                    <div class="breakdown-row__labels">
                                        <span>{platform.label()}</span>
                                        <span>{format_money(amount)}</span>
                                    </div>
                                    <ProgressBar percent=Signal::derive(move || percent) />
                                    <p class="breakdown-row__hint">
                                        {format!("{} of total spend", format_percent(percent))}
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
