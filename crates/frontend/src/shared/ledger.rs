//! Reactive wrapper around the shared aggregation ledger.
//!
//! Holds the `contracts` ledger in a signal, mirrors its two entry
//! lists to localStorage and offers the per-module booking helpers.

use chrono::NaiveDate;
use contracts::shared::ledger::{
    DashboardSummary, ExpenseSource, Ledger, RevenueSource, SharedExpense, SharedRevenue,
};
use leptos::prelude::*;

use crate::shared::storage;

/// Shared aggregation ledger service, provided at the app root.
#[derive(Clone, Copy)]
pub struct LedgerService {
    ledger: RwSignal<Ledger>,
}

impl LedgerService {
    /// Restore the ledger from localStorage (empty on first run).
    pub fn load() -> Self {
        let ledger = Ledger {
            expenses: storage::get_json::<Vec<SharedExpense>>(
                storage::SHARED_EXPENSES_KEY,
                Vec::new(),
            ),
            revenues: storage::get_json::<Vec<SharedRevenue>>(
                storage::SHARED_REVENUES_KEY,
                Vec::new(),
            ),
        };
        Self {
            ledger: RwSignal::new(ledger),
        }
    }

    fn persist(&self) {
        self.ledger.with_untracked(|ledger| {
            storage::set_json(storage::SHARED_EXPENSES_KEY, &ledger.expenses);
            storage::set_json(storage::SHARED_REVENUES_KEY, &ledger.revenues);
        });
    }

    /// Reactive dashboard summary relative to the given day.
    pub fn summary(&self, today: NaiveDate) -> DashboardSummary {
        self.ledger.with(|ledger| ledger.dashboard_summary(today))
    }

    pub fn entry_count(&self) -> usize {
        self.ledger
            .with(|ledger| ledger.expenses.len() + ledger.revenues.len())
    }

    pub fn clear(&self) {
        self.ledger.update(|ledger| ledger.clear());
        storage::remove(storage::SHARED_EXPENSES_KEY);
        storage::remove(storage::SHARED_REVENUES_KEY);
    }

    // ------------------------------------------------------------------
    // Booking helpers used by the modules on successful create
    // ------------------------------------------------------------------

    pub fn add_ad_spend_expense(
        &self,
        date: NaiveDate,
        amount: f64,
        platform: &str,
        campaign: Option<&str>,
    ) {
        let description = match campaign {
            Some(campaign) => format!("Ad spend on {} - {}", platform, campaign),
            None => format!("Ad spend on {}", platform),
        };
        self.ledger.update(|ledger| {
            ledger.add_expense(date, "Marketing", amount, description, ExpenseSource::AdSpend);
        });
        self.persist();
    }

    pub fn add_expense_entry(&self, date: NaiveDate, amount: f64, category: &str, description: &str) {
        self.ledger.update(|ledger| {
            ledger.add_expense(date, category, amount, description, ExpenseSource::Expenses);
        });
        self.persist();
    }

    pub fn add_payroll_expense(&self, date: NaiveDate, amount: f64, employee: &str, department: &str) {
        self.ledger.update(|ledger| {
            ledger.add_expense(
                date,
                "Salary",
                amount,
                format!("Salary for {} ({})", employee, department),
                ExpenseSource::Payroll,
            );
        });
        self.persist();
    }

    pub fn add_raw_material_expense(
        &self,
        date: NaiveDate,
        amount: f64,
        material: &str,
        supplier: &str,
    ) {
        self.ledger.update(|ledger| {
            ledger.add_expense(
                date,
                "Raw Materials",
                amount,
                format!("Purchase of {} from {}", material, supplier),
                ExpenseSource::RawMaterials,
            );
        });
        self.persist();
    }

    pub fn add_dispatch_revenue(&self, date: NaiveDate, amount: f64, product: &str, channel: &str) {
        self.ledger.update(|ledger| {
            ledger.add_revenue(
                date,
                amount,
                format!("Sale of {} via {}", product, channel),
                RevenueSource::Dispatch,
            );
        });
        self.persist();
    }

    pub fn add_profit_estimator_revenue(&self, date: NaiveDate, amount: f64) {
        self.ledger.update(|ledger| {
            ledger.add_revenue(
                date,
                amount,
                "Daily revenue from profit estimator",
                RevenueSource::ProfitEstimator,
            );
        });
        self.persist();
    }
}
