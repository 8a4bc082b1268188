use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::forms::{optional_text, parse_positive_f64, require_text};
use crate::domain::common::{EntityMetadata, RecordId};
use crate::shared::export::CsvExportable;

// ============================================================================
// Record
// ============================================================================

/// Default reorder level for materials created through the inward form.
pub const DEFAULT_REORDER_LEVEL: f64 = 100.0;

/// One raw material with its on-hand stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMaterial {
    pub id: RecordId,
    pub name: String,
    pub supplier: String,
    pub current_stock: f64,
    pub reorder_level: f64,
    /// Unit of measure, e.g. "kg", "liters", "pieces".
    pub unit: String,
    pub last_inward: NaiveDate,
    pub batch_no: String,
    #[serde(flatten)]
    pub meta: EntityMetadata,
}

impl RawMaterial {
    pub fn is_low_stock(&self) -> bool {
        self.current_stock < self.reorder_level
    }

    /// Rough stock valuation used by the summary card.
    pub fn estimated_value(&self) -> f64 {
        let unit_price = match self.unit.as_str() {
            "kg" => 100.0,
            "liters" => 80.0,
            _ => 50.0,
        };
        self.current_stock * unit_price
    }
}

impl CsvExportable for RawMaterial {
    fn headers() -> Vec<&'static str> {
        vec!["Material", "Supplier", "Current Stock", "Unit", "Reorder Level", "Last Inward", "Batch No"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.supplier.clone(),
            self.current_stock.to_string(),
            self.unit.clone(),
            self.reorder_level.to_string(),
            self.last_inward.to_string(),
            self.batch_no.clone(),
        ]
    }
}

/// `RM007-2024` style batch number.
pub fn generate_batch_no(sequence: usize, year: i32) -> String {
    format!("RM{:03}-{}", sequence, year)
}

// ============================================================================
// Form
// ============================================================================

/// "Record inward" dialog state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InwardForm {
    pub name: String,
    pub supplier: String,
    pub quantity: String,
    pub unit: String,
    pub batch_no: String,
}

impl InwardForm {
    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.name, "Material name")?;
        require_text(&self.supplier, "Supplier")?;
        parse_positive_f64(&self.quantity, "Quantity")?;
        Ok(())
    }
}

/// Outcome of an inward: existing material topped up or a new row added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InwardOutcome {
    Restocked,
    Created,
}

/// Record an inward. Matches on material name case-insensitively; an
/// existing material gets its stock incremented and supplier/batch
/// refreshed, otherwise a new row with the default reorder level is
/// appended.
pub fn record_inward(
    items: &mut Vec<RawMaterial>,
    form: &InwardForm,
    date: NaiveDate,
) -> Result<InwardOutcome, String> {
    form.validate()?;
    let name = require_text(&form.name, "Material name")?;
    let supplier = require_text(&form.supplier, "Supplier")?;
    let quantity = parse_positive_f64(&form.quantity, "Quantity")?;

    if let Some(existing) = items
        .iter_mut()
        .find(|m| m.name.to_lowercase() == name.to_lowercase())
    {
        existing.current_stock += quantity;
        existing.last_inward = date;
        existing.supplier = supplier;
        if let Some(batch) = optional_text(&form.batch_no) {
            existing.batch_no = batch;
        }
        existing.meta.touch();
        return Ok(InwardOutcome::Restocked);
    }

    let sequence = items.len() + 1;
    items.push(RawMaterial {
        id: RecordId::generate(),
        name,
        supplier,
        current_stock: quantity,
        reorder_level: DEFAULT_REORDER_LEVEL,
        unit: optional_text(&form.unit).unwrap_or_else(|| "units".to_string()),
        last_inward: date,
        batch_no: optional_text(&form.batch_no)
            .unwrap_or_else(|| generate_batch_no(sequence, chrono::Datelike::year(&date))),
        meta: EntityMetadata::new(),
    });
    Ok(InwardOutcome::Created)
}

// ============================================================================
// Summary
// ============================================================================

pub fn low_stock_count(items: &[RawMaterial]) -> usize {
    items.iter().filter(|m| m.is_low_stock()).count()
}

pub fn total_estimated_value(items: &[RawMaterial]) -> f64 {
    items.iter().map(|m| m.estimated_value()).sum()
}

// ============================================================================
// Demo seeds
// ============================================================================

pub fn demo_records() -> Vec<RawMaterial> {
    fn seed(
        id: &str,
        name: &str,
        supplier: &str,
        current_stock: f64,
        reorder_level: f64,
        unit: &str,
        last_inward: &str,
        batch_no: &str,
    ) -> RawMaterial {
        RawMaterial {
            id: RecordId::new(id),
            name: name.to_string(),
            supplier: supplier.to_string(),
            current_stock,
            reorder_level,
            unit: unit.to_string(),
            last_inward: NaiveDate::parse_from_str(last_inward, "%Y-%m-%d").expect("seed date"),
            batch_no: batch_no.to_string(),
            meta: EntityMetadata::new(),
        }
    }

    vec![
        seed("1", "Raw Material A", "Supplier ABC", 50.0, 100.0, "kg", "2024-01-15", "RM001-2024"),
        seed("2", "Chemical B", "ChemCorp Ltd", 200.0, 150.0, "liters", "2024-01-10", "CH002-2024"),
        seed("3", "Packaging Material", "PackPro Industries", 75.0, 200.0, "pieces", "2024-01-12", "PK003-2024"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn inward_for_known_material_restocks() {
        let mut items = demo_records();
        let form = InwardForm {
            name: "chemical b".to_string(),
            supplier: "ChemCorp Ltd".to_string(),
            quantity: "25".to_string(),
            ..Default::default()
        };
        let outcome = record_inward(&mut items, &form, d("2024-01-20")).unwrap();
        assert_eq!(outcome, InwardOutcome::Restocked);
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].current_stock, 225.0);
        assert_eq!(items[1].last_inward, d("2024-01-20"));
    }

    #[test]
    fn inward_for_new_material_creates_row_with_defaults() {
        let mut items = demo_records();
        let form = InwardForm {
            name: "Solvent C".to_string(),
            supplier: "ChemCorp Ltd".to_string(),
            quantity: "60".to_string(),
            unit: String::new(),
            batch_no: String::new(),
        };
        let outcome = record_inward(&mut items, &form, d("2024-01-20")).unwrap();
        assert_eq!(outcome, InwardOutcome::Created);
        let solvent = &items[3];
        assert_eq!(solvent.reorder_level, DEFAULT_REORDER_LEVEL);
        assert_eq!(solvent.unit, "units");
        assert_eq!(solvent.batch_no, "RM004-2024");
    }

    #[test]
    fn inward_requires_name_supplier_positive_quantity() {
        let mut items = demo_records();
        let form = InwardForm {
            name: "Solvent C".to_string(),
            supplier: String::new(),
            quantity: "60".to_string(),
            ..Default::default()
        };
        assert!(record_inward(&mut items, &form, d("2024-01-20")).is_err());

        let form = InwardForm {
            name: "Solvent C".to_string(),
            supplier: "ChemCorp Ltd".to_string(),
            quantity: "-5".to_string(),
            ..Default::default()
        };
        assert!(record_inward(&mut items, &form, d("2024-01-20")).is_err());
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn valuation_uses_per_unit_prices() {
        let items = demo_records();
        // 50 kg * 100 + 200 L * 80 + 75 pcs * 50
        assert_eq!(total_estimated_value(&items), 5000.0 + 16000.0 + 3750.0);
        assert_eq!(low_stock_count(&items), 2);
    }
}
