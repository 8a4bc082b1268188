//! Overview dashboard (d400).
//!
//! Headline figures come from the shared aggregation ledger; while the
//! ledger is still empty (fresh demo session) the cards fall back to a
//! static demo snapshot, mirroring how the modules seed demo records.

use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils;
use crate::shared::icons::icon;
use crate::shared::ledger::LedgerService;
use crate::shared::number_format::format_money;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::shared::ledger::DashboardSummary;
use leptos::prelude::*;

fn demo_summary() -> DashboardSummary {
    DashboardSummary {
        today_expenses: 0.0,
        today_revenues: 0.0,
        monthly_expenses: 85_000.0,
        monthly_revenues: 125_000.0,
        total_expenses: 85_000.0,
        total_revenues: 125_000.0,
        net_profit: 40_000.0,
    }
}

struct DemoActivity {
    description: &'static str,
    timestamp: &'static str,
    status: IndicatorStatus,
}

fn demo_activities() -> Vec<DemoActivity> {
    vec![
        DemoActivity {
            description: "New order received - ₹15,000",
            timestamp: "2 hours ago",
            status: IndicatorStatus::Good,
        },
        DemoActivity {
            description: "Low stock alert for Product Beta",
            timestamp: "4 hours ago",
            status: IndicatorStatus::Warning,
        },
        DemoActivity {
            description: "New employee onboarded",
            timestamp: "1 day ago",
            status: IndicatorStatus::Good,
        },
    ]
}

/// (month, revenue, expenses) for the demo trend bars.
const DEMO_MONTHLY: [(&str, f64, f64); 3] = [
    ("Jan", 120_000.0, 80_000.0),
    ("Feb", 135_000.0, 85_000.0),
    ("Mar", 125_000.0, 85_000.0),
];

#[component]
#[allow(non_snake_case)]
pub fn OverviewDashboard() -> impl IntoView {
    let ledger = use_context::<LedgerService>().expect("LedgerService not found in context");

    let summary = Memo::new(move |_| {
        if ledger.entry_count() == 0 {
            demo_summary()
        } else {
            ledger.summary(date_utils::today())
        }
    });

    let is_demo = move || ledger.entry_count() == 0;

    view! {
        <div class="content">
            <div class="page-header">
                <div class="page-header__heading">
                    <div class="page-header__icon">{icon("home")}</div>
                    <div>
                        <h2 class="page-header__title">{"Dashboard"}</h2>
                        <p class="page-header__subtitle">
                            {move || if is_demo() {
                                "Demo snapshot - figures update as modules record data"
                            } else {
                                "Cross-module figures from the shared ledger"
                            }}
                        </p>
                    </div>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Total Revenue".to_string()
                    icon_name="trending-up".to_string()
                    value=Signal::derive(move || Some(summary.get().total_revenues))
                    format=ValueFormat::rupees()
                    status=Signal::derive(|| IndicatorStatus::Good)
                    subtitle=Signal::derive(move || {
                        Some(format!("{} this month", format_money(summary.get().monthly_revenues)))
                    })
                />
                <StatCard
                    label="Total Expenses".to_string()
                    icon_name="receipt".to_string()
                    value=Signal::derive(move || Some(summary.get().total_expenses))
                    format=ValueFormat::rupees()
                    subtitle=Signal::derive(move || {
                        Some(format!("{} this month", format_money(summary.get().monthly_expenses)))
                    })
                />
                <StatCard
                    label="Net Profit".to_string()
                    icon_name="dollar-sign".to_string()
                    value=Signal::derive(move || Some(summary.get().net_profit))
                    format=ValueFormat::rupees()
                    status=Signal::derive(move || {
                        if summary.get().net_profit >= 0.0 {
                            IndicatorStatus::Good
                        } else {
                            IndicatorStatus::Bad
                        }
                    })
                    subtitle=Signal::derive(|| Some("Revenue minus expenses".to_string()))
                />
                <StatCard
                    label="Today".to_string()
                    icon_name="calendar".to_string()
                    value=Signal::derive(move || {
                        let s = summary.get();
                        Some(s.today_revenues - s.today_expenses)
                    })
                    format=ValueFormat::rupees()
                    subtitle=Signal::derive(move || {
                        let s = summary.get();
                        Some(format!(
                            "{} in, {} out",
                            format_money(s.today_revenues),
                            format_money(s.today_expenses)
                        ))
                    })
                />
            </div>

            <div class="card-grid">
                // Recent activity (demo feed)
                <div class="card">
                    <div class="card__header">
                        <h3>{"Recent Activity"}</h3>
                        <p>{"Latest events across modules"}</p>
                    </div>
                    <div class="card__body">
                        {demo_activities().into_iter().map(|activity| {
                            let icon_name = match activity.status {
                                IndicatorStatus::Warning => "alert-triangle",
                                _ => "check-circle",
                            };
                            view! {
                                <div class="activity-row">
                                    <span class="activity-row__icon">{icon(icon_name)}</span>
                                    <div>
                                        <p class="table__cell-primary">{activity.description}</p>
                                        <p class="table__cell-secondary">{activity.timestamp}</p>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>

                // Monthly performance bars
                <div class="card">
                    <div class="card__header">
                        <h3>{"Monthly Performance"}</h3>
                        <p>{"Revenue vs. expenses"}</p>
                    </div>
                    <div class="card__body">
                        {DEMO_MONTHLY.iter().map(|(month, revenue, expenses)| {
                            let max = 150_000.0;
                            let revenue_pct = revenue / max * 100.0;
                            let expenses_pct = expenses / max * 100.0;
                            view! {
                                <div class="breakdown-row">
                                    <div class="breakdown-row__labels">
                                        <span>{*month}</span>
                                        <span>{format!(
                                            "{} / {}",
                                            format_money(*revenue),
                                            format_money(*expenses)
                                        )}</span>
                                    </div>
                                    <div class="progress">
                                        <div class="progress__fill progress__fill--revenue"
                                            style=format!("width: {:.1}%;", revenue_pct)></div>
                                    </div>
                                    <div class="progress">
                                        <div class="progress__fill progress__fill--expense"
                                            style=format!("width: {:.1}%;", expenses_pct)></div>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
