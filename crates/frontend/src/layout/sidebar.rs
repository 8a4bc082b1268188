//! Sidebar component with collapsible menu groups.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "bar-chart",
            items: vec![("d400_overview", tab_label_for_key("d400_overview"), "home")],
        },
        MenuGroup {
            id: "inventory",
            label: "Inventory",
            icon: "package",
            items: vec![
                ("a011_raw_materials", tab_label_for_key("a011_raw_materials"), "layers"),
                ("a006_finished_goods", tab_label_for_key("a006_finished_goods"), "package"),
                ("a008_products", tab_label_for_key("a008_products"), "shopping-cart"),
            ],
        },
        MenuGroup {
            id: "operations",
            label: "Operations",
            icon: "truck",
            items: vec![
                ("a004_dispatch", tab_label_for_key("a004_dispatch"), "truck"),
                ("a012_staff", tab_label_for_key("a012_staff"), "users"),
                ("a002_attendance", tab_label_for_key("a002_attendance"), "calendar"),
                ("a007_payroll", tab_label_for_key("a007_payroll"), "dollar-sign"),
            ],
        },
        MenuGroup {
            id: "business_intelligence",
            label: "Business Intelligence",
            icon: "activity",
            items: vec![
                ("a001_ad_spend", tab_label_for_key("a001_ad_spend"), "trending-up"),
                ("a003_call_center", tab_label_for_key("a003_call_center"), "phone"),
                ("a009_profit_estimator", tab_label_for_key("a009_profit_estimator"), "bar-chart"),
                ("a010_performance", tab_label_for_key("a010_performance"), "pie-chart"),
            ],
        },
        MenuGroup {
            id: "finance",
            label: "Finance",
            icon: "receipt",
            items: vec![("a005_expenses", tab_label_for_key("a005_expenses"), "receipt")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // All groups start expanded; the dashboard is one click away.
    let expanded_groups = RwSignal::new(vec![
        "dashboards".to_string(),
        "inventory".to_string(),
        "operations".to_string(),
        "business_intelligence".to_string(),
        "finance".to_string(),
    ]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                    let group_id = group.id.to_string();

                    let group_id_for_exp = group_id.clone();
                    let group_id_for_click = group_id.clone();

                    view! {
                        <div>
                            // Group header
                            <div
                                class="app-sidebar__item app-sidebar__item--group"
                                on:click=move |_| {
                                    let gid = group_id_for_click.clone();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded={
                                        let gid_exp = group_id_for_exp.clone();
                                        move || expanded_groups.get().contains(&gid_exp)
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            // Children
                            {
                                let gid_show = group_id.clone();
                                let items_stored = StoredValue::new(group.items.clone());
                                view! {
                                    <Show when=move || expanded_groups.get().contains(&gid_show)>
                                        <div class="app-sidebar__children">
                                            {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                                let item_id = StoredValue::new(id.to_string());
                                                view! {
                                                    <div
                                                        class="app-sidebar__item"
                                                        class:app-sidebar__item--active=move || {
                                                            let iid = item_id.get_value();
                                                            ctx.active.get().as_ref().map(|a| a == &iid).unwrap_or(false)
                                                        }
                                                        on:click=move |_| {
                                                            ctx.open_tab(id, label);
                                                        }
                                                    >
                                                        <div class="app-sidebar__item-content">
                                                            {icon(icon_name)}
                                                            <span>{label}</span>
                                                        </div>
                                                    </div>
                                                }
                                            }).collect_view()}
                                        </div>
                                    </Show>
                                }
                            }
                        </div>
                    }
                }).collect_view()}
        </div>
    }
}
