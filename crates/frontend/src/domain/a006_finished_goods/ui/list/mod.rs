use crate::domain::a006_finished_goods::ui::details::ProductionDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::remote;
use crate::shared::date_utils;
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;
use contracts::domain::a006_finished_goods::{
    demo_records, low_stock_count, record_production, total_units, FinishedGood, ProductionForm,
    ProductionOutcome,
};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const TABLE: &str = "finished_goods";

#[component]
#[allow(non_snake_case)]
pub fn FinishedGoodsList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (items, set_items) = signal::<Vec<FinishedGood>>(demo_records());

    if remote::is_configured() {
        spawn_local(async move {
            match remote::fetch_rows::<FinishedGood>(TABLE).await {
                Ok(rows) => set_items.set(rows),
                Err(e) => {
                    log::error!("Error fetching {TABLE}: {e}");
                    toasts.error("Failed to load finished goods");
                }
            }
        });
    }

    let handle_submit = move |form: ProductionForm| {
        let quantity = form.quantity.clone();
        let name = form.product_name.clone();
        let mut result: Option<Result<ProductionOutcome, String>> = None;
        let mut touched: Option<FinishedGood> = None;
        set_items.update(|list| {
            result = Some(record_production(list, &form, date_utils::today()));
            if matches!(result, Some(Ok(_))) {
                touched = list
                    .iter()
                    .find(|p| p.name.to_lowercase() == name.trim().to_lowercase())
                    .cloned();
            }
        });
        let outcome = match result {
            Some(Ok(outcome)) => {
                match outcome {
                    ProductionOutcome::Restocked => {
                        toasts.success(format!("Added {} units to {}", quantity, name))
                    }
                    ProductionOutcome::Created => {
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
        if let Some(record) = touched {
            spawn_local(async move {
                let result = match outcome {
                    ProductionOutcome::Restocked => {
                        remote::update_row(TABLE, record.id.as_str(), &record).await
                    }
                    ProductionOutcome::Created => remote::insert_row(TABLE, &record).await,
                };
                if let Err(e) = result {
                    log::error!("Error saving {TABLE}: {e}");
                    toasts.error("Failed to save finished goods");
                }
            });
        }
    };

    let open_details_modal = move || {
        modal_stack.push_with_frame(
            Some("max-width: min(560px, 95vw); width: min(560px, 95vw);".to_string()),
            Some("production-modal".to_string()),
            move |handle| {
                view! {
                    <ProductionDetails
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
        let filename = format!("finished-goods-{}.csv", date_utils::today_iso());
        match download_csv(&items.get(), &filename) {
            Ok(()) => toasts.success("Finished goods exported successfully"),
            Err(e) => toasts.error(e),
        }
    };

    view! {
        <div class="content">
            <PageHeader
                title="Finished Goods".to_string()
                subtitle="Production output and on-hand stock".to_string()
                icon_name="package".to_string()
            >
                <button class="button button--secondary" on:click=handle_export>
                    {icon("download")}
                    {"Export"}
                </button>
                <button class="button button--primary" on:click=move |_| open_details_modal()>
                    {icon("plus")}
                    {"Record Production"}
                </button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total Production".to_string()
                    icon_name="package".to_string()
                    value=Signal::derive(move || Some(total_units(&items.get()) as f64))
                    format=ValueFormat::Integer
                    subtitle=Signal::derive(|| Some("Units in stock".to_string()))
                />
                <StatCard
                    label="Products".to_string()
                    icon_name="layers".to_string()
                    value=Signal::derive(move || Some(items.get().len() as f64))
                    format=ValueFormat::Integer
                    subtitle=Signal::derive(|| Some("Distinct SKUs".to_string()))
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
                    subtitle=Signal::derive(|| Some("Below minimum".to_string()))
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Product"}</th>
                            <th class="table__header-cell">{"SKU"}</th>
                            <th class="table__header-cell">{"Current Stock"}</th>
                            <th class="table__header-cell">{"Min Stock"}</th>
                            <th class="table__header-cell">{"Manufactured"}</th>
                            <th class="table__header-cell">{"Batch No"}</th>
                            <th class="table__header-cell">{"Raw Materials Used"}</th>
                            <th class="table__header-cell">{"Stock Level"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|product| {
                            let low = product.is_low_stock();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell-primary">{product.name.clone()}</td>
                                    <td class="table__cell">{product.sku.clone()}</td>
                                    <td class="table__cell table__cell--number">{product.current_stock}</td>
                                    <td class="table__cell table__cell--number">{product.min_stock}</td>
                                    <td class="table__cell">{date_utils::format_date(product.manufactured)}</td>
                                    <td class="table__cell">{product.batch_no.clone()}</td>
                                    <td class="table__cell table__cell--truncate">{product.raw_materials_used.clone()}</td>
                                    <td class="table__cell">
                                        {if low {
                                            view! { <span class="badge badge--warning">{"Low Stock"}</span> }.into_any()
                                        } else {
                                            view! { <span class="badge badge--success">{"In Stock"}</span> }.into_any()
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
