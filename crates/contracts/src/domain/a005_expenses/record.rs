use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::forms::{optional_text, parse_positive_f64, require_text};
use crate::domain::common::{EntityMetadata, RecordId};
use crate::shared::export::CsvExportable;

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseStatus {
    Pending,
    Paid,
}

impl ExpenseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseStatus::Pending => "Pending",
            ExpenseStatus::Paid => "Paid",
        }
    }
}

/// Expense categories offered by the dialog. Free-typed values from the
/// remote backend are preserved as `Other`-like plain strings, so the
/// category stays a `String` on the record itself.
pub const EXPENSE_CATEGORIES: [&str; 6] =
    ["Raw Materials", "Salary", "Marketing", "Courier", "Utilities", "Maintenance"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: RecordId,
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub vendor: String,
    pub status: ExpenseStatus,
    #[serde(flatten)]
    pub meta: EntityMetadata,
}

impl CsvExportable for Expense {
    fn headers() -> Vec<&'static str> {
        vec!["Date", "Category", "Description", "Amount", "Vendor", "Status"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.date.to_string(),
            self.category.clone(),
            self.description.clone(),
            self.amount.to_string(),
            self.vendor.clone(),
            self.status.label().to_string(),
        ]
    }
}

// ============================================================================
// Form
// ============================================================================

/// "Add expense" dialog state. New entries are dated today and start as
/// `Pending`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseForm {
    pub category: String,
    pub description: String,
    pub amount: String,
    pub vendor: String,
}

impl ExpenseForm {
    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.category, "Category")?;
        require_text(&self.description, "Description")?;
        parse_positive_f64(&self.amount, "Amount")?;
        Ok(())
    }

    pub fn build(&self, date: NaiveDate) -> Result<Expense, String> {
        self.validate()?;
        Ok(Expense {
            id: RecordId::generate(),
            date,
            category: require_text(&self.category, "Category")?,
            description: require_text(&self.description, "Description")?,
            amount: parse_positive_f64(&self.amount, "Amount")?,
            vendor: optional_text(&self.vendor).unwrap_or_else(|| "Not specified".to_string()),
            status: ExpenseStatus::Pending,
            meta: EntityMetadata::new(),
        })
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Per-category totals, insertion-ordered.
pub fn category_totals(items: &[Expense]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for expense in items {
        match totals.iter_mut().find(|(c, _)| *c == expense.category) {
            Some((_, sum)) => *sum += expense.amount,
            None => totals.push((expense.category.clone(), expense.amount)),
        }
    }
    totals
}

pub fn total_expenses(items: &[Expense]) -> f64 {
    items.iter().map(|e| e.amount).sum()
}

pub fn pending_count(items: &[Expense]) -> usize {
    items
        .iter()
        .filter(|e| e.status == ExpenseStatus::Pending)
        .count()
}

// ============================================================================
// Demo seeds
// ============================================================================

pub fn demo_records() -> Vec<Expense> {
    fn seed(
        id: &str,
        date: &str,
        category: &str,
        description: &str,
        amount: f64,
        vendor: &str,
        status: ExpenseStatus,
    ) -> Expense {
        Expense {
            id: RecordId::new(id),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("seed date"),
            category: category.to_string(),
            description: description.to_string(),
            amount,
            vendor: vendor.to_string(),
            status,
            meta: EntityMetadata::new(),
        }
    }

    vec![
        seed("1", "2024-01-16", "Raw Materials", "Chemical B purchase", 25000.0, "ChemCorp Ltd", ExpenseStatus::Paid),
        seed("2", "2024-01-15", "Salary", "Monthly payroll", 180000.0, "Internal", ExpenseStatus::Paid),
        seed("3", "2024-01-14", "Marketing", "Digital advertising", 15000.0, "AdTech Solutions", ExpenseStatus::Pending),
        seed("4", "2024-01-13", "Courier", "Shipping charges", 8500.0, "FastShip Logistics", ExpenseStatus::Paid),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_requires_category_description_amount() {
        let mut form = ExpenseForm {
            category: "Courier".to_string(),
            description: "Shipping charges".to_string(),
            amount: "950".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
        form.amount = "-1".to_string();
        assert!(form.validate().is_err());
        form.amount = "950".to_string();
        form.description = String::new();
        assert!(form.validate().is_err());
    }

    #[test]
    fn build_defaults_vendor_and_pending_status() {
        let form = ExpenseForm {
            category: "Utilities".to_string(),
            description: "Electricity bill".to_string(),
            amount: "4200".to_string(),
            vendor: String::new(),
        };
        let date = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        let expense = form.build(date).unwrap();
        assert_eq!(expense.vendor, "Not specified");
        assert_eq!(expense.status, ExpenseStatus::Pending);
        assert_eq!(expense.date, date);
    }

    #[test]
    fn category_totals_accumulate_in_order() {
        let totals = category_totals(&demo_records());
        assert_eq!(totals[0], ("Raw Materials".to_string(), 25000.0));
        assert_eq!(totals.len(), 4);
    }

    #[test]
    fn totals_and_pending_count() {
        let items = demo_records();
        assert_eq!(total_expenses(&items), 228500.0);
        assert_eq!(pending_count(&items), 1);
    }
}
