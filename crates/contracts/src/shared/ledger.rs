//! Shared aggregation ledger.
//!
//! A single in-memory store that accumulates cross-module expense and
//! revenue entries for the overview dashboard. Append-only ordering is
//! the only invariant; every query is a linear scan.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::common::RecordId;

/// Module that booked a shared expense entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseSource {
    AdSpend,
    Expenses,
    RawMaterials,
    Payroll,
}

/// Module that booked a shared revenue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueSource {
    Dispatch,
    ProfitEstimator,
    CallCenter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedExpense {
    pub id: RecordId,
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub source: ExpenseSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedRevenue {
    pub id: RecordId,
    pub date: NaiveDate,
    pub amount: f64,
    pub description: String,
    pub source: RevenueSource,
}

/// Aggregate figures for the overview dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub today_expenses: f64,
    pub today_revenues: f64,
    pub monthly_expenses: f64,
    pub monthly_revenues: f64,
    pub total_expenses: f64,
    pub total_revenues: f64,
    pub net_profit: f64,
}

/// Append-only lists of tagged expense/revenue entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    pub expenses: Vec<SharedExpense>,
    pub revenues: Vec<SharedRevenue>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense entry; the id is assigned here.
    pub fn add_expense(
        &mut self,
        date: NaiveDate,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
        source: ExpenseSource,
    ) -> RecordId {
        let id = RecordId::generate();
        self.expenses.push(SharedExpense {
            id: id.clone(),
            date,
            category: category.into(),
            amount,
            description: description.into(),
            source,
        });
        id
    }

    /// Append a revenue entry; the id is assigned here.
    pub fn add_revenue(
        &mut self,
        date: NaiveDate,
        amount: f64,
        description: impl Into<String>,
        source: RevenueSource,
    ) -> RecordId {
        let id = RecordId::generate();
        self.revenues.push(SharedRevenue {
            id: id.clone(),
            date,
            amount,
            description: description.into(),
            source,
        });
        id
    }

    pub fn expenses_for_date(&self, date: NaiveDate) -> Vec<&SharedExpense> {
        self.expenses.iter().filter(|e| e.date == date).collect()
    }

    pub fn revenues_for_date(&self, date: NaiveDate) -> Vec<&SharedRevenue> {
        self.revenues.iter().filter(|r| r.date == date).collect()
    }

    pub fn expenses_by_source(&self, source: ExpenseSource) -> Vec<&SharedExpense> {
        self.expenses.iter().filter(|e| e.source == source).collect()
    }

    pub fn revenues_by_source(&self, source: RevenueSource) -> Vec<&SharedRevenue> {
        self.revenues.iter().filter(|r| r.source == source).collect()
    }

    /// Total expenses over an optional inclusive date range.
    pub fn total_expenses(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> f64 {
        self.expenses
            .iter()
            .filter(|e| in_range(e.date, from, to))
            .map(|e| e.amount)
            .sum()
    }

    /// Total revenues over an optional inclusive date range.
    pub fn total_revenues(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> f64 {
        self.revenues
            .iter()
            .filter(|r| in_range(r.date, from, to))
            .map(|r| r.amount)
            .sum()
    }

    pub fn net_profit(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> f64 {
        self.total_revenues(from, to) - self.total_expenses(from, to)
    }

    pub fn has_data_for_date(&self, date: NaiveDate) -> bool {
        self.expenses.iter().any(|e| e.date == date) || self.revenues.iter().any(|r| r.date == date)
    }

    /// Summary for the overview dashboard, relative to the given day.
    pub fn dashboard_summary(&self, today: NaiveDate) -> DashboardSummary {
        let (month_start, month_end) = month_bounds(today);
        DashboardSummary {
            today_expenses: self.total_expenses(Some(today), Some(today)),
            today_revenues: self.total_revenues(Some(today), Some(today)),
            monthly_expenses: self.total_expenses(Some(month_start), Some(month_end)),
            monthly_revenues: self.total_revenues(Some(month_start), Some(month_end)),
            total_expenses: self.total_expenses(None, None),
            total_revenues: self.total_revenues(None, None),
            net_profit: self.net_profit(None, None),
        }
    }

    pub fn clear(&mut self) {
        self.expenses.clear();
        self.revenues.clear();
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

fn in_range(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    if let Some(from) = from {
        if date < from {
            return false;
        }
    }
    if let Some(to) = to {
        if date > to {
            return false;
        }
    }
    true
}

fn month_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(day.year(), day.month(), 1).unwrap_or(day);
    let end = if day.month() == 12 {
        NaiveDate::from_ymd_opt(day.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(day.year(), day.month() + 1, 1)
    }
    .and_then(|next| next.pred_opt())
    .unwrap_or(day);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn seeded() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_expense(
            d("2024-01-15"),
            "Marketing",
            1500.0,
            "Ad spend on Meta",
            ExpenseSource::AdSpend,
        );
        ledger.add_expense(
            d("2024-01-16"),
            "Salary",
            25000.0,
            "Salary for John Doe (Production)",
            ExpenseSource::Payroll,
        );
        ledger.add_revenue(
            d("2024-01-15"),
            12500.0,
            "Sale of Product Alpha via Amazon",
            RevenueSource::Dispatch,
        );
        ledger.add_revenue(
            d("2024-01-16"),
            45000.0,
            "Daily revenue from profit estimator",
            RevenueSource::ProfitEstimator,
        );
        ledger
    }

    #[test]
    fn totals_respect_date_range() {
        let ledger = seeded();
        assert_eq!(ledger.total_expenses(None, None), 26500.0);
        assert_eq!(
            ledger.total_expenses(Some(d("2024-01-16")), Some(d("2024-01-16"))),
            25000.0
        );
        assert_eq!(
            ledger.total_revenues(Some(d("2024-01-01")), Some(d("2024-01-15"))),
            12500.0
        );
    }

    #[test]
    fn net_profit_is_revenue_minus_expense() {
        let ledger = seeded();
        assert_eq!(ledger.net_profit(None, None), 57500.0 - 26500.0);
    }

    #[test]
    fn source_filters_select_matching_entries() {
        let ledger = seeded();
        assert_eq!(ledger.expenses_by_source(ExpenseSource::Payroll).len(), 1);
        assert_eq!(ledger.expenses_by_source(ExpenseSource::RawMaterials).len(), 0);
        assert_eq!(ledger.revenues_by_source(RevenueSource::Dispatch).len(), 1);
    }

    #[test]
    fn date_lookups_and_presence() {
        let ledger = seeded();
        assert_eq!(ledger.expenses_for_date(d("2024-01-15")).len(), 1);
        assert!(ledger.has_data_for_date(d("2024-01-16")));
        assert!(!ledger.has_data_for_date(d("2024-02-01")));
    }

    #[test]
    fn dashboard_summary_splits_today_month_and_total() {
        let ledger = seeded();
        let summary = ledger.dashboard_summary(d("2024-01-16"));
        assert_eq!(summary.today_expenses, 25000.0);
        assert_eq!(summary.today_revenues, 45000.0);
        assert_eq!(summary.monthly_expenses, 26500.0);
        assert_eq!(summary.monthly_revenues, 57500.0);
        assert_eq!(summary.net_profit, 31000.0);
    }

    #[test]
    fn december_month_bounds_do_not_overflow() {
        let (start, end) = month_bounds(d("2024-12-15"));
        assert_eq!(start, d("2024-12-01"));
        assert_eq!(end, d("2024-12-31"));
    }

    #[test]
    fn json_round_trip_preserves_entries() {
        let ledger = seeded();
        let restored = Ledger::from_json(&ledger.to_json()).unwrap();
        assert_eq!(restored.expenses.len(), 2);
        assert_eq!(restored.revenues.len(), 2);
        assert_eq!(restored.total_expenses(None, None), 26500.0);
    }
}
