//! Tab labels - the single source of truth for tab titles.

/// Readable tab title for the given key. Fallback: the key itself.
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        // ── Dashboards ────────────────────────────────────────────────────
        "d400_overview" => "Dashboard",

        // ── Modules (a001-a012) ───────────────────────────────────────────
        "a001_ad_spend" => "Ad Spend Tracker",
        "a002_attendance" => "Attendance",
        "a003_call_center" => "Call Center",
        "a004_dispatch" => "Dispatch Log",
        "a005_expenses" => "Expenses",
        "a006_finished_goods" => "Finished Goods",
        "a007_payroll" => "Payroll",
        "a008_products" => "Product Master",
        "a009_profit_estimator" => "Profit Estimator",
        "a010_performance" => "Performance Reports",
        "a011_raw_materials" => "Raw Materials",
        "a012_staff" => "Staff Management",

        other => other,
    }
}
