use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::forms::{optional_text, parse_positive_u32, require_text};
use crate::domain::common::{EntityMetadata, RecordId};
use crate::shared::export::CsvExportable;

// ============================================================================
// Record
// ============================================================================

/// Default minimum stock for products created through the production form.
pub const DEFAULT_MIN_STOCK: u32 = 100;

/// One finished product with its on-hand stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishedGood {
    pub id: RecordId,
    pub name: String,
    pub sku: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub manufactured: NaiveDate,
    pub batch_no: String,
    pub raw_materials_used: String,
    #[serde(flatten)]
    pub meta: EntityMetadata,
}

impl FinishedGood {
    pub fn is_low_stock(&self) -> bool {
        self.current_stock < self.min_stock
    }
}

impl CsvExportable for FinishedGood {
    fn headers() -> Vec<&'static str> {
        vec![
            "Product",
            "SKU",
            "Current Stock",
            "Min Stock",
            "Manufactured",
            "Batch No",
            "Raw Materials Used",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.sku.clone(),
            self.current_stock.to_string(),
            self.min_stock.to_string(),
            self.manufactured.to_string(),
            self.batch_no.clone(),
            self.raw_materials_used.clone(),
        ]
    }
}

/// `FG007-2024` style batch number.
pub fn generate_batch_no(sequence: usize, year: i32) -> String {
    format!("FG{:03}-{}", sequence, year)
}

// ============================================================================
// Form
// ============================================================================

/// "Record production" dialog state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductionForm {
    pub product_name: String,
    pub sku: String,
    pub quantity: String,
    pub batch_no: String,
    pub raw_materials: String,
}

impl ProductionForm {
    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.product_name, "Product name")?;
        parse_positive_u32(&self.quantity, "Quantity")?;
        Ok(())
    }
}

/// Outcome of recording production: either an existing product was
/// topped up or a new row was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductionOutcome {
    Restocked,
    Created,
}

/// Record a production run. Matches on product name case-insensitively;
/// an existing product gets its stock incremented and manufacture
/// date/batch refreshed, otherwise a new row is appended.
pub fn record_production(
    items: &mut Vec<FinishedGood>,
    form: &ProductionForm,
    date: NaiveDate,
) -> Result<ProductionOutcome, String> {
    form.validate()?;
    let name = require_text(&form.product_name, "Product name")?;
    let quantity = parse_positive_u32(&form.quantity, "Quantity")?;

    if let Some(existing) = items
        .iter_mut()
        .find(|p| p.name.to_lowercase() == name.to_lowercase())
    {
        existing.current_stock += quantity;
        existing.manufactured = date;
        if let Some(batch) = optional_text(&form.batch_no) {
            existing.batch_no = batch;
        }
        if let Some(raw) = optional_text(&form.raw_materials) {
            existing.raw_materials_used = raw;
        }
        existing.meta.touch();
        return Ok(ProductionOutcome::Restocked);
    }

    let sequence = items.len() + 1;
    let id = RecordId::generate();
    items.push(FinishedGood {
        sku: optional_text(&form.sku).unwrap_or_else(|| format!("SKU-{}", id.as_str())),
        id,
        name,
        current_stock: quantity,
        min_stock: DEFAULT_MIN_STOCK,
        manufactured: date,
        batch_no: optional_text(&form.batch_no)
            .unwrap_or_else(|| generate_batch_no(sequence, chrono::Datelike::year(&date))),
        raw_materials_used: optional_text(&form.raw_materials)
            .unwrap_or_else(|| "Not specified".to_string()),
        meta: EntityMetadata::new(),
    });
    Ok(ProductionOutcome::Created)
}

// ============================================================================
// Summary
// ============================================================================

pub fn low_stock_count(items: &[FinishedGood]) -> usize {
    items.iter().filter(|p| p.is_low_stock()).count()
}

pub fn total_units(items: &[FinishedGood]) -> u32 {
    items.iter().map(|p| p.current_stock).sum()
}

// ============================================================================
// Demo seeds
// ============================================================================

pub fn demo_records() -> Vec<FinishedGood> {
    fn seed(
        id: &str,
        name: &str,
        sku: &str,
        current_stock: u32,
        min_stock: u32,
        manufactured: &str,
        batch_no: &str,
        raw_materials_used: &str,
    ) -> FinishedGood {
        FinishedGood {
            id: RecordId::new(id),
            name: name.to_string(),
            sku: sku.to_string(),
            current_stock,
            min_stock,
            manufactured: NaiveDate::parse_from_str(manufactured, "%Y-%m-%d").expect("seed date"),
            batch_no: batch_no.to_string(),
            raw_materials_used: raw_materials_used.to_string(),
            meta: EntityMetadata::new(),
        }
    }

    vec![
        seed("1", "Product Alpha", "PA-001", 150, 100, "2024-01-15", "FG001-2024", "RM-A: 50kg, RM-B: 20L"),
        seed("2", "Product Beta", "PB-002", 75, 100, "2024-01-14", "FG002-2024", "RM-A: 30kg, RM-C: 15kg"),
        seed("3", "Product Gamma", "PG-003", 200, 80, "2024-01-16", "FG003-2024", "RM-B: 40L, RM-D: 25kg"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn production_for_known_name_restocks_case_insensitively() {
        let mut items = demo_records();
        let form = ProductionForm {
            product_name: "product alpha".to_string(),
            quantity: "50".to_string(),
            batch_no: "FG009-2024".to_string(),
            ..Default::default()
        };
        let outcome = record_production(&mut items, &form, d("2024-01-20")).unwrap();
        assert_eq!(outcome, ProductionOutcome::Restocked);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].current_stock, 200);
        assert_eq!(items[0].manufactured, d("2024-01-20"));
        assert_eq!(items[0].batch_no, "FG009-2024");
    }

    #[test]
    fn production_for_new_name_creates_row_with_defaults() {
        let mut items = demo_records();
        let form = ProductionForm {
            product_name: "Product Delta".to_string(),
            quantity: "40".to_string(),
            ..Default::default()
        };
        let outcome = record_production(&mut items, &form, d("2024-01-20")).unwrap();
        assert_eq!(outcome, ProductionOutcome::Created);
        assert_eq!(items.len(), 4);
        let delta = &items[3];
        assert_eq!(delta.current_stock, 40);
        assert_eq!(delta.min_stock, DEFAULT_MIN_STOCK);
        assert_eq!(delta.batch_no, "FG004-2024");
        assert_eq!(delta.raw_materials_used, "Not specified");
    }

    #[test]
    fn production_requires_name_and_positive_quantity() {
        let mut items = demo_records();
        let form = ProductionForm {
            product_name: String::new(),
            quantity: "10".to_string(),
            ..Default::default()
        };
        assert!(record_production(&mut items, &form, d("2024-01-20")).is_err());

        let form = ProductionForm {
            product_name: "Product Alpha".to_string(),
            quantity: "0".to_string(),
            ..Default::default()
        };
        assert!(record_production(&mut items, &form, d("2024-01-20")).is_err());
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn stock_summaries() {
        let items = demo_records();
        assert_eq!(low_stock_count(&items), 1);
        assert_eq!(total_units(&items), 425);
        assert!(items[1].is_low_stock());
        assert!(!items[0].is_low_stock());
    }
}
