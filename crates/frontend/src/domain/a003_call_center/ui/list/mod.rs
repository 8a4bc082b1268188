use crate::domain::a003_call_center::ui::details::CallCenterDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::remote;
use crate::shared::date_utils;
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;
use contracts::domain::a003_call_center::{
    demo_records, summarize, CallCenterEntry, CallCenterForm,
};
use contracts::domain::common::RecordId;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const TABLE: &str = "call_center";

#[component]
#[allow(non_snake_case)]
pub fn CallCenterList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (items, set_items) = signal::<Vec<CallCenterEntry>>(demo_records());

    if remote::is_configured() {
        spawn_local(async move {
            match remote::fetch_rows::<CallCenterEntry>(TABLE).await {
                Ok(rows) => set_items.set(rows),
                Err(e) => {
                    log::error!("Error fetching {TABLE}: {e}");
                    toasts.error("Failed to load call center data");
                }
            }
        });
    }

    let summary = Memo::new(move |_| summarize(&items.get()));

    let handle_submit = move |form: CallCenterForm| match form.id.clone() {
        Some(id) => {
            let mut updated: Option<CallCenterEntry> = None;
            set_items.update(|list| {
                if let Some(record) = list.iter_mut().find(|r| r.id == id) {
                    match form.apply(record) {
                        Ok(()) => updated = Some(record.clone()),
                        Err(e) => toasts.error(e),
                    }
                }
            });
            if let Some(record) = updated {
                toasts.success("Call center data updated successfully");
                spawn_local(async move {
                    if let Err(e) = remote::update_row(TABLE, record.id.as_str(), &record).await {
                        log::error!("Error updating {TABLE}: {e}");
                        toasts.error("Failed to save call center data");
                    }
                });
            }
        }
        None => match form.build() {
            Ok(record) => {
                let for_remote = record.clone();
                set_items.update(|list| list.insert(0, record));
                toasts.success("Call center data added successfully");
                spawn_local(async move {
                    if let Err(e) = remote::insert_row(TABLE, &for_remote).await {
                        log::error!("Error creating {TABLE}: {e}");
                        toasts.error("Failed to save call center data");
                    }
                });
            }
            Err(e) => toasts.error(e),
        },
    };

    let open_details_modal = move |record: Option<CallCenterEntry>| {
        let record = StoredValue::new(record);
        modal_stack.push_with_frame(
            Some("max-width: min(560px, 95vw); width: min(560px, 95vw);".to_string()),
            Some("call-center-modal".to_string()),
            move |handle| {
                view! {
                    <CallCenterDetails
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
                w.confirm_with_message("Delete this day's call center metrics?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        set_items.update(|list| list.retain(|r| r.id != id));
        toasts.success("Call center data deleted successfully");
        spawn_local(async move {
            if let Err(e) = remote::delete_row(TABLE, id.as_str()).await {
                log::error!("Error deleting {TABLE}: {e}");
            }
        });
    };

    let handle_export = move |_| {
        let filename = format!("call-center-data-{}.csv", date_utils::today_iso());
        match download_csv(&items.get(), &filename) {
            Ok(()) => toasts.success("Call center data exported successfully"),
            Err(e) => toasts.error(e),
        }
    };

    // Newest day first.
    let sorted_items = move || {
        let mut list = items.get();
        list.sort_by(|a, b| b.date.cmp(&a.date));
        list
    };

    view! {
        <div class="content">
            <PageHeader
                title="Call Center Tracker".to_string()
                subtitle="Monitor team productivity and customer service metrics".to_string()
                icon_name="phone".to_string()
            >
                <button class="button button--secondary" on:click=handle_export>
                    {icon("download")}
                    {"Export"}
                </button>
                <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                    {icon("plus")}
                    {"Add Daily Data"}
                </button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Calls Received".to_string()
                    icon_name="phone".to_string()
                    value=Signal::derive(move || Some(summary.get().calls_received as f64))
                    format=ValueFormat::Integer
                    subtitle=Signal::derive(move || {
                        Some(format!("{} missed", summary.get().missed_calls))
                    })
                />
                <StatCard
                    label="Answer Rate".to_string()
                    icon_name="check-circle".to_string()
                    value=Signal::derive(move || Some(summary.get().answer_rate))
                    format=ValueFormat::Percent { decimals: 1 }
                    status=Signal::derive(move || {
                        if summary.get().answer_rate >= 90.0 {
                            IndicatorStatus::Good
                        } else {
                            IndicatorStatus::Warning
                        }
                    })
                    subtitle=Signal::derive(move || {
                        Some(format!("{} answered", summary.get().calls_answered))
                    })
                />
                <StatCard
                    label="NDR Resolution".to_string()
                    icon_name="activity".to_string()
                    value=Signal::derive(move || Some(summary.get().ndr_resolution_rate))
                    format=ValueFormat::Percent { decimals: 1 }
                    subtitle=Signal::derive(move || {
                        let s = summary.get();
                        Some(format!("{} of {} cases", s.ndr_resolved, s.ndr_received))
                    })
                />
                <StatCard
                    label="Avg Response Time".to_string()
                    icon_name="bar-chart".to_string()
                    value=Signal::derive(move || Some(summary.get().avg_response_time))
                    format=ValueFormat::Number { decimals: 1 }
                    subtitle=Signal::derive(|| Some("Seconds to pick up".to_string()))
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Date"}</th>
                            <th class="table__header-cell">{"Received"}</th>
                            <th class="table__header-cell">{"Answered"}</th>
                            <th class="table__header-cell">{"NDR Received"}</th>
                            <th class="table__header-cell">{"NDR Resolved"}</th>
                            <th class="table__header-cell">{"Avg Response"}</th>
                            <th class="table__header-cell">{"Notes"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|entry| {
                            let id_for_edit = entry.id.clone();
                            let id_for_delete = entry.id.clone();
                            view! {
                                <tr class="table__row" on:click=move |_| handle_edit(id_for_edit.clone())>
                                    <td class="table__cell">{date_utils::format_date(entry.date)}</td>
                                    <td class="table__cell table__cell--number">{entry.calls_received}</td>
                                    <td class="table__cell table__cell--number">{entry.calls_answered}</td>
                                    <td class="table__cell table__cell--number">{entry.ndr_received}</td>
                                    <td class="table__cell table__cell--number">{entry.ndr_resolved}</td>
                                    <td class="table__cell table__cell--number">{format!("{:.1}s", entry.avg_response_time)}</td>
                                    <td class="table__cell table__cell--truncate">{entry.notes.clone().unwrap_or_else(|| "—".to_string())}</td>
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
