use crate::domain::a011_raw_materials::ui::details::InwardDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::remote;
use crate::shared::date_utils;
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use crate::shared::ledger::LedgerService;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::format_quantity;
use crate::shared::toast::ToastService;
use contracts::domain::a011_raw_materials::{
    demo_records, low_stock_count, record_inward, total_estimated_value, InwardForm,
    InwardOutcome, RawMaterial,
};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const TABLE: &str = "raw_materials";

#[component]
#[allow(non_snake_case)]
pub fn RawMaterialsList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let ledger = use_context::<LedgerService>().expect("LedgerService not found in context");

    let (items, set_items) = signal::<Vec<RawMaterial>>(demo_records());

    if remote::is_configured() {
        spawn_local(async move {
            match remote::fetch_rows::<RawMaterial>(TABLE).await {
                Ok(rows) => set_items.set(rows),
                Err(e) => {
                    log::error!("Error fetching {TABLE}: {e}");
                    toasts.error("Failed to load raw materials");
                }
            }
        });
    }

    let handle_submit = move |form: InwardForm| {
        let name = form.name.trim().to_string();
        let quantity_label = format!("{} {}", form.quantity, form.unit);
        let mut result: Option<Result<InwardOutcome, String>> = None;
        let mut touched: Option<RawMaterial> = None;
        set_items.update(|list| {
            result = Some(record_inward(list, &form, date_utils::today()));
            if matches!(result, Some(Ok(_))) {
                touched = list
                    .iter()
                    .find(|m| m.name.to_lowercase() == name.to_lowercase())
                    .cloned();
            }
        });
        let outcome = match result {
            Some(Ok(outcome)) => {
                match outcome {
                    InwardOutcome::Restocked => {
                        toasts.success(format!("Updated {} stock by {}", name, quantity_label))
                    }
                    InwardOutcome::Created => {
                        toasts.success(format!("Added {} to inventory", name))
                    }
                }
                outcome
            }
            Some(Err(e)) => {
                toasts.error(e);
                return;
            }
            None => return,
        };
        if let Some(material) = touched {
            // Book the purchase into the shared ledger at the estimated
            // unit price.
            let quantity: f64 = form.quantity.trim().parse().unwrap_or(0.0);
            let unit_price = match material.unit.as_str() {
                "kg" => 100.0,
                "liters" => 80.0,
                _ => 50.0,
            };
            ledger.add_raw_material_expense(
                date_utils::today(),
                quantity * unit_price,
                &material.name,
                &material.supplier,
            );
            spawn_local(async move {
                let result = match outcome {
                    InwardOutcome::Restocked => {
                        remote::update_row(TABLE, material.id.as_str(), &material).await
                    }
                    InwardOutcome::Created => remote::insert_row(TABLE, &material).await,
                };
                if let Err(e) = result {
                    log::error!("Error saving {TABLE}: {e}");
                    toasts.error("Failed to save raw materials");
                }
            });
        }
    };

    let open_details_modal = move || {
        modal_stack.push_with_frame(
            Some("max-width: min(560px, 95vw); width: min(560px, 95vw);".to_string()),
            Some("inward-modal".to_string()),
            move |handle| {
                view! {
                    <InwardDetails
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
        let filename = format!("raw-materials-{}.csv", date_utils::today_iso());
        match download_csv(&items.get(), &filename) {
            Ok(()) => toasts.success("Raw materials exported successfully"),
            Err(e) => toasts.error(e),
        }
    };

    view! {
        <div class="content">
            <PageHeader
                title="Raw Materials".to_string()
                subtitle="Inward stock and reorder levels".to_string()
                icon_name="layers".to_string()
            >
                <button class="button button--secondary" on:click=handle_export>
                    {icon("download")}
                    {"Export"}
                </button>
                <button class="button button--primary" on:click=move |_| open_details_modal()>
                    {icon("plus")}
                    {"Record Inward"}
                </button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total Materials".to_string()
                    icon_name="layers".to_string()
                    value=Signal::derive(move || Some(items.get().len() as f64))
                    format=ValueFormat::Integer
                    subtitle=Signal::derive(|| Some("Tracked materials".to_string()))
                />
                <StatCard
                    label="Low Stock".to_string()
                    icon_name="alert-triangle".to_string()
                    value=Signal::derive(move || Some(low_stock_count(&items.get()) as f64))
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if low_stock_count(&items.get()) > 0 {
                            IndicatorStatus::Warning
                        } else {
                            IndicatorStatus::Good
                        }
                    })
                    subtitle=Signal::derive(|| Some("Below reorder level".to_string()))
                />
                <StatCard
                    label="Total Value".to_string()
                    icon_name="dollar-sign".to_string()
                    value=Signal::derive(move || Some(total_estimated_value(&items.get())))
                    format=ValueFormat::rupees()
                    subtitle=Signal::derive(|| Some("Estimated stock value".to_string()))
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Material"}</th>
                            <th class="table__header-cell">{"Supplier"}</th>
                            <th class="table__header-cell">{"Current Stock"}</th>
                            <th class="table__header-cell">{"Reorder Level"}</th>
                            <th class="table__header-cell">{"Last Inward"}</th>
                            <th class="table__header-cell">{"Batch No"}</th>
                            <th class="table__header-cell">{"Stock Level"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|material| {
                            let low = material.is_low_stock();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell-primary">{material.name.clone()}</td>
                                    <td class="table__cell">{material.supplier.clone()}</td>
                                    <td class="table__cell table__cell--number">
                                        {format!("{} {}", format_quantity(material.current_stock), material.unit)}
                                    </td>
                                    <td class="table__cell table__cell--number">
                                        {format!("{} {}", format_quantity(material.reorder_level), material.unit)}
                                    </td>
                                    <td class="table__cell">{date_utils::format_date(material.last_inward)}</td>
                                    <td class="table__cell">{material.batch_no.clone()}</td>
                                    <td class="table__cell">
                                        {if low {
                                            view! { <span class="badge badge--warning">{"Reorder"}</span> }.into_any()
                                        } else {
                                            view! { <span class="badge badge--success">{"OK"}</span> }.into_any()
                                        }}
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
