use crate::domain::a008_products::ui::details::ProductDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::remote;
use crate::shared::date_utils;
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, sort_list, SearchInput, Sortable};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::format_money;
use crate::shared::toast::ToastService;
use contracts::domain::a008_products::{
    demo_records, summarize, Product, ProductForm, ProductStatus,
};
use contracts::domain::common::RecordId;
use contracts::shared::indicators::ValueFormat;
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen_futures::spawn_local;

const TABLE: &str = "products";

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "sku" => self.sku.to_lowercase().cmp(&other.sku.to_lowercase()),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "category" => self.category.to_lowercase().cmp(&other.category.to_lowercase()),
            "unit_price" => self.unit_price.total_cmp(&other.unit_price),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductsList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let (items, set_items) = signal::<Vec<Product>>(demo_records());
    let (search, set_search) = signal(String::new());
    let (sort_field, set_sort_field) = signal("sku".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    if remote::is_configured() {
        spawn_local(async move {
            match remote::fetch_rows::<Product>(TABLE).await {
                Ok(rows) => set_items.set(rows),
                Err(e) => {
                    log::error!("Error fetching {TABLE}: {e}");
                    toasts.error("Failed to load products");
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

    let filtered = move || {
        let needle = search.get().trim().to_lowercase();
        let mut list: Vec<Product> = items
            .get()
            .into_iter()
            .filter(|p| {
                needle.is_empty()
                    || p.sku.to_lowercase().contains(&needle)
                    || p.name.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .collect();
        sort_list(&mut list, &sort_field.get(), sort_ascending.get());
        list
    };

    let summary = Memo::new(move |_| summarize(&items.get()));

    let handle_submit = move |form: ProductForm| {
        // Reject duplicate SKUs before touching the list.
        if let Err(e) = form.check_unique_sku(&items.get_untracked()) {
            toasts.error(e);
            return;
        }
        match form.id.clone() {
            Some(id) => {
                let mut updated: Option<Product> = None;
                set_items.update(|list| {
                    if let Some(record) = list.iter_mut().find(|r| r.id == id) {
                        match form.apply(record) {
                            Ok(()) => updated = Some(record.clone()),
                            Err(e) => toasts.error(e),
                        }
                    }
                });
                if let Some(record) = updated {
                    toasts.success("Product updated successfully");
                    spawn_local(async move {
                        if let Err(e) = remote::update_row(TABLE, record.id.as_str(), &record).await
                        {
                            log::error!("Error updating {TABLE}: {e}");
                            toasts.error("Failed to save product");
                        }
                    });
                }
            }
            None => match form.build() {
                Ok(record) => {
                    let for_remote = record.clone();
                    set_items.update(|list| list.push(record));
                    toasts.success("Product added successfully");
                    spawn_local(async move {
                        if let Err(e) = remote::insert_row(TABLE, &for_remote).await {
                            log::error!("Error creating {TABLE}: {e}");
                            toasts.error("Failed to save product");
                        }
                    });
                }
                Err(e) => toasts.error(e),
            },
        }
    };

    let open_details_modal = move |record: Option<Product>| {
        let record = StoredValue::new(record);
        modal_stack.push_with_frame(
            Some("max-width: min(680px, 95vw); width: min(680px, 95vw);".to_string()),
            Some("product-modal".to_string()),
            move |handle| {
                view! {
                    <ProductDetails
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
                w.confirm_with_message("Are you sure you want to delete this product?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        set_items.update(|list| list.retain(|r| r.id != id));
        toasts.success("Product deleted successfully");
        spawn_local(async move {
            if let Err(e) = remote::delete_row(TABLE, id.as_str()).await {
                log::error!("Error deleting {TABLE}: {e}");
            }
        });
    };

    let handle_export = move |_| {
        let filename = format!("products-{}.csv", date_utils::today_iso());
        match download_csv(&filtered(), &filename) {
            Ok(()) => toasts.success("Products exported successfully"),
            Err(e) => toasts.error(e),
        }
    };

    view! {
        <div class="content">
            <PageHeader
                title="Product Master".to_string()
                subtitle="Master data for sellable products".to_string()
                icon_name="shopping-cart".to_string()
            >
                <button class="button button--secondary" on:click=handle_export>
                    {icon("download")}
                    {"Export"}
                </button>
                <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                    {icon("plus")}
                    {"Add Product"}
                </button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Products".to_string()
                    icon_name="package".to_string()
                    value=Signal::derive(move || Some(summary.get().products as f64))
                    format=ValueFormat::Integer
                    subtitle=Signal::derive(|| Some("In the master list".to_string()))
                />
                <StatCard
                    label="Categories".to_string()
                    icon_name="layers".to_string()
                    value=Signal::derive(move || Some(summary.get().categories as f64))
                    format=ValueFormat::Integer
                    subtitle=Signal::derive(|| Some("Active categories".to_string()))
                />
                <StatCard
                    label="Average Price".to_string()
                    icon_name="dollar-sign".to_string()
                    value=Signal::derive(move || Some(summary.get().average_price))
                    format=ValueFormat::rupees()
                    subtitle=Signal::derive(|| Some("Per product".to_string()))
                />
            </div>

            <div class="filter-panel">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |value| set_search.set(value))
                    placeholder="Search by SKU, name or category...".to_string()
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("sku")>
                                "SKU"
                                <span>{move || get_sort_indicator(&sort_field.get(), "sku", sort_ascending.get())}</span>
                            </th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("name")>
                                "Name"
                                <span>{move || get_sort_indicator(&sort_field.get(), "name", sort_ascending.get())}</span>
                            </th>
                            <th class="table__header-cell">{"Type"}</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("category")>
                                "Category"
                                <span>{move || get_sort_indicator(&sort_field.get(), "category", sort_ascending.get())}</span>
                            </th>
                            <th class="table__header-cell">{"Min Stock"}</th>
                            <th class="table__header-cell">{"Reorder Level"}</th>
                            <th class="table__header-cell table__header-cell--sortable" on:click=toggle_sort("unit_price")>
                                "Unit Price"
                                <span>{move || get_sort_indicator(&sort_field.get(), "unit_price", sort_ascending.get())}</span>
                            </th>
                            <th class="table__header-cell">{"Status"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || filtered().into_iter().map(|product| {
                            let id_for_edit = product.id.clone();
                            let id_for_delete = product.id.clone();
                            let status_class = match product.status {
                                ProductStatus::Active => "badge badge--success",
                                ProductStatus::Inactive => "badge badge--warning",
                                ProductStatus::Discontinued => "badge badge--error",
                            };
                            view! {
                                <tr class="table__row" on:click=move |_| handle_edit(id_for_edit.clone())>
                                    <td class="table__cell">{product.sku.clone()}</td>
                                    <td class="table__cell table__cell-primary">{product.name.clone()}</td>
                                    <td class="table__cell">{product.product_type.clone()}</td>
                                    <td class="table__cell">{product.category.clone()}</td>
                                    <td class="table__cell table__cell--number">{product.min_stock}</td>
                                    <td class="table__cell table__cell--number">{product.reorder_level}</td>
                                    <td class="table__cell table__cell--number">{format_money(product.unit_price)}</td>
                                    <td class="table__cell">
                                        <span class=status_class>{product.status.label()}</span>
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
