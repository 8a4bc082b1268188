use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::forms::{parse_date, parse_f64_or_zero, parse_positive_f64};
use crate::domain::common::{EntityMetadata, RecordId};
use crate::shared::export::CsvExportable;

// ============================================================================
// Record
// ============================================================================

/// Daily revenue vs. cost snapshot.
///
/// `estimated_profit` is derived: revenue minus the four cost buckets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitEntry {
    pub id: RecordId,
    pub date: NaiveDate,
    pub revenue: f64,
    pub ad_spend: f64,
    pub shipping: f64,
    pub cogs: f64,
    pub other_expenses: f64,
    pub estimated_profit: f64,
    #[serde(flatten)]
    pub meta: EntityMetadata,
}

impl ProfitEntry {
    pub fn total_costs(&self) -> f64 {
        self.ad_spend + self.shipping + self.cogs + self.other_expenses
    }

    pub fn recalculate(&mut self) {
        self.estimated_profit = self.revenue - self.total_costs();
    }
}

impl CsvExportable for ProfitEntry {
    fn headers() -> Vec<&'static str> {
        vec!["Date", "Revenue", "Ad Spend", "Shipping", "COGS", "Other Expenses", "Estimated Profit"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.date.to_string(),
            self.revenue.to_string(),
            self.ad_spend.to_string(),
            self.shipping.to_string(),
            self.cogs.to_string(),
            self.other_expenses.to_string(),
            self.estimated_profit.to_string(),
        ]
    }
}

/// Badge band for the table's status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitBand {
    Excellent,
    Good,
    Profitable,
    MinorLoss,
    MajorLoss,
}

impl ProfitBand {
    pub fn label(&self) -> &'static str {
        match self {
            ProfitBand::Excellent => "Excellent",
            ProfitBand::Good => "Good",
            ProfitBand::Profitable => "Profitable",
            ProfitBand::MinorLoss => "Minor Loss",
            ProfitBand::MajorLoss => "Major Loss",
        }
    }
}

pub fn profit_band(profit: f64) -> ProfitBand {
    if profit > 10_000.0 {
        ProfitBand::Excellent
    } else if profit > 5_000.0 {
        ProfitBand::Good
    } else if profit > 0.0 {
        ProfitBand::Profitable
    } else if profit > -5_000.0 {
        ProfitBand::MinorLoss
    } else {
        ProfitBand::MajorLoss
    }
}

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfitForm {
    pub date: String,
    pub revenue: String,
    pub ad_spend: String,
    pub shipping: String,
    pub cogs: String,
    pub other_expenses: String,
}

impl ProfitForm {
    pub fn validate(&self) -> Result<(), String> {
        parse_date(&self.date, "Date")?;
        parse_positive_f64(&self.revenue, "Revenue")?;
        parse_f64_or_zero(&self.ad_spend, "Ad spend")?;
        parse_f64_or_zero(&self.shipping, "Shipping")?;
        parse_f64_or_zero(&self.cogs, "COGS")?;
        parse_f64_or_zero(&self.other_expenses, "Other expenses")?;
        Ok(())
    }

    pub fn build(&self) -> Result<ProfitEntry, String> {
        self.validate()?;
        let mut entry = ProfitEntry {
            id: RecordId::generate(),
            date: parse_date(&self.date, "Date")?,
            revenue: parse_positive_f64(&self.revenue, "Revenue")?,
            ad_spend: parse_f64_or_zero(&self.ad_spend, "Ad spend")?,
            shipping: parse_f64_or_zero(&self.shipping, "Shipping")?,
            cogs: parse_f64_or_zero(&self.cogs, "COGS")?,
            other_expenses: parse_f64_or_zero(&self.other_expenses, "Other expenses")?,
            estimated_profit: 0.0,
            meta: EntityMetadata::new(),
        };
        entry.recalculate();
        Ok(entry)
    }
}

// ============================================================================
// Summary
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ProfitSummary {
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub total_profit: f64,
    pub profitable_days: usize,
    pub avg_daily_profit: f64,
}

pub fn summarize(items: &[ProfitEntry]) -> ProfitSummary {
    let total_revenue: f64 = items.iter().map(|e| e.revenue).sum();
    let total_expenses: f64 = items.iter().map(|e| e.total_costs()).sum();
    let total_profit: f64 = items.iter().map(|e| e.estimated_profit).sum();
    ProfitSummary {
        total_revenue,
        total_expenses,
        total_profit,
        profitable_days: items.iter().filter(|e| e.estimated_profit > 0.0).count(),
        avg_daily_profit: if items.is_empty() {
            0.0
        } else {
            total_profit / items.len() as f64
        },
    }
}

// ============================================================================
// Demo seeds
// ============================================================================

pub fn demo_records() -> Vec<ProfitEntry> {
    fn seed(
        id: &str,
        date: &str,
        revenue: f64,
        ad_spend: f64,
        shipping: f64,
        cogs: f64,
        other_expenses: f64,
    ) -> ProfitEntry {
        let mut entry = ProfitEntry {
            id: RecordId::new(id),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("seed date"),
            revenue,
            ad_spend,
            shipping,
            cogs,
            other_expenses,
            estimated_profit: 0.0,
            meta: EntityMetadata::new(),
        };
        entry.recalculate();
        entry
    }

    vec![
        seed("1", "2024-01-16", 45000.0, 8000.0, 3200.0, 22000.0, 1500.0),
        seed("2", "2024-01-15", 38000.0, 6500.0, 2800.0, 19000.0, 1200.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimated_profit_is_revenue_minus_costs() {
        let items = demo_records();
        assert_eq!(items[0].estimated_profit, 10300.0);
        assert_eq!(items[1].estimated_profit, 8500.0);
    }

    #[test]
    fn revenue_must_be_positive() {
        let mut form = ProfitForm {
            date: "2024-01-17".to_string(),
            revenue: "41000".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
        form.revenue = "0".to_string();
        assert!(form.validate().is_err());
        form.revenue = String::new();
        assert!(form.validate().is_err());
    }

    #[test]
    fn blank_cost_fields_default_to_zero() {
        let form = ProfitForm {
            date: "2024-01-17".to_string(),
            revenue: "41000".to_string(),
            cogs: "20000".to_string(),
            ..Default::default()
        };
        let entry = form.build().unwrap();
        assert_eq!(entry.ad_spend, 0.0);
        assert_eq!(entry.estimated_profit, 21000.0);
    }

    #[test]
    fn profit_bands() {
        assert_eq!(profit_band(10300.0), ProfitBand::Excellent);
        assert_eq!(profit_band(8500.0), ProfitBand::Good);
        assert_eq!(profit_band(100.0), ProfitBand::Profitable);
        assert_eq!(profit_band(-1000.0), ProfitBand::MinorLoss);
        assert_eq!(profit_band(-9000.0), ProfitBand::MajorLoss);
    }

    #[test]
    fn summary_matches_demo_data() {
        let summary = summarize(&demo_records());
        assert_eq!(summary.total_revenue, 83000.0);
        assert_eq!(summary.total_expenses, 64200.0);
        assert_eq!(summary.total_profit, 18800.0);
        assert_eq!(summary.profitable_days, 2);
        assert_eq!(summary.avg_daily_profit, 9400.0);
    }
}
