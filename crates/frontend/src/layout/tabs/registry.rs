//! Tab content registry - the single source of truth for mapping
//! tab.key -> View.

use crate::dashboards::d400_overview::OverviewDashboard;
use crate::domain::a001_ad_spend::ui::list::AdSpendList;
use crate::domain::a002_attendance::ui::list::AttendanceList;
use crate::domain::a003_call_center::ui::list::CallCenterList;
use crate::domain::a004_dispatch::ui::list::DispatchList;
use crate::domain::a005_expenses::ui::list::ExpensesList;
use crate::domain::a006_finished_goods::ui::list::FinishedGoodsList;
use crate::domain::a007_payroll::ui::list::PayrollList;
use crate::domain::a008_products::ui::list::ProductsList;
use crate::domain::a009_profit_estimator::ui::list::ProfitEstimatorList;
use crate::domain::a010_performance::ui::list::PerformanceList;
use crate::domain::a011_raw_materials::ui::list::RawMaterialsList;
use crate::domain::a012_staff::ui::list::StaffList;
use leptos::logging::log;
use leptos::prelude::*;

/// Render the content of a tab by its key.
///
/// Details dialogs are opened through the modal stack, so every module
/// contributes exactly one list page here.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Dashboards (d400)
        // ═══════════════════════════════════════════════════════════════════
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Modules (a001-a012)
        // ═══════════════════════════════════════════════════════════════════
        "a001_ad_spend" => view! { <AdSpendList /> }.into_any(),
        "a002_attendance" => view! { <AttendanceList /> }.into_any(),
        "a003_call_center" => view! { <CallCenterList /> }.into_any(),
        "a004_dispatch" => view! { <DispatchList /> }.into_any(),
        "a005_expenses" => view! { <ExpensesList /> }.into_any(),
        "a006_finished_goods" => view! { <FinishedGoodsList /> }.into_any(),
        "a007_payroll" => view! { <PayrollList /> }.into_any(),
        "a008_products" => view! { <ProductsList /> }.into_any(),
        "a009_profit_estimator" => view! { <ProfitEstimatorList /> }.into_any(),
        "a010_performance" => view! { <PerformanceList /> }.into_any(),
        "a011_raw_materials" => view! { <RawMaterialsList /> }.into_any(),
        "a012_staff" => view! { <StaffList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Unknown / Fallback
        // ═══════════════════════════════════════════════════════════════════
        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
