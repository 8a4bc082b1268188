use serde::{Deserialize, Serialize};

use crate::domain::common::forms::{optional_text, parse_f64_or_zero, parse_u32_or_zero, require_text};
use crate::domain::common::{EntityMetadata, RecordId};
use crate::shared::export::CsvExportable;

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    Active,
    Inactive,
    Discontinued,
}

impl ProductStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::Inactive => "Inactive",
            ProductStatus::Discontinued => "Discontinued",
        }
    }
}

pub const PRODUCT_TYPES: [&str; 3] = ["Finished Good", "Semi-Finished", "Raw Material"];

/// Master-data row for one sellable product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub sku: String,
    pub name: String,
    pub product_type: String,
    pub category: String,
    pub min_stock: u32,
    pub reorder_level: u32,
    /// Free-text recipe note, e.g. "RM-A: 2kg, RM-B: 1L".
    pub raw_materials: String,
    pub unit_price: f64,
    pub description: String,
    pub status: ProductStatus,
    #[serde(flatten)]
    pub meta: EntityMetadata,
}

impl CsvExportable for Product {
    fn headers() -> Vec<&'static str> {
        vec![
            "SKU",
            "Name",
            "Type",
            "Category",
            "Min Stock",
            "Reorder Level",
            "Unit Price",
            "Status",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.sku.clone(),
            self.name.clone(),
            self.product_type.clone(),
            self.category.clone(),
            self.min_stock.to_string(),
            self.reorder_level.to_string(),
            self.unit_price.to_string(),
            self.status.label().to_string(),
        ]
    }
}

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductForm {
    pub id: Option<RecordId>,
    pub sku: String,
    pub name: String,
    pub product_type: String,
    pub category: String,
    pub min_stock: String,
    pub reorder_level: String,
    pub raw_materials: String,
    pub unit_price: String,
    pub description: String,
}

impl ProductForm {
    pub fn from_record(record: &Product) -> Self {
        Self {
            id: Some(record.id.clone()),
            sku: record.sku.clone(),
            name: record.name.clone(),
            product_type: record.product_type.clone(),
            category: record.category.clone(),
            min_stock: record.min_stock.to_string(),
            reorder_level: record.reorder_level.to_string(),
            raw_materials: record.raw_materials.clone(),
            unit_price: record.unit_price.to_string(),
            description: record.description.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.sku, "SKU")?;
        require_text(&self.name, "Name")?;
        require_text(&self.product_type, "Product type")?;
        parse_u32_or_zero(&self.min_stock, "Min stock")?;
        parse_u32_or_zero(&self.reorder_level, "Reorder level")?;
        parse_f64_or_zero(&self.unit_price, "Unit price")?;
        Ok(())
    }

    /// Duplicate-SKU check against the current list, skipping the record
    /// being edited.
    pub fn check_unique_sku(&self, items: &[Product]) -> Result<(), String> {
        let sku = self.sku.trim().to_lowercase();
        let clash = items.iter().any(|p| {
            p.sku.to_lowercase() == sku && Some(&p.id) != self.id.as_ref()
        });
        if clash {
            return Err("SKU already exists. Please use a different SKU.".to_string());
        }
        Ok(())
    }

    pub fn build(&self) -> Result<Product, String> {
        self.validate()?;
        Ok(Product {
            id: RecordId::generate(),
            sku: require_text(&self.sku, "SKU")?,
            name: require_text(&self.name, "Name")?,
            product_type: require_text(&self.product_type, "Product type")?,
            category: optional_text(&self.category).unwrap_or_else(|| "Uncategorized".to_string()),
            min_stock: parse_u32_or_zero(&self.min_stock, "Min stock")?,
            reorder_level: parse_u32_or_zero(&self.reorder_level, "Reorder level")?,
            raw_materials: self.raw_materials.trim().to_string(),
            unit_price: parse_f64_or_zero(&self.unit_price, "Unit price")?,
            description: self.description.trim().to_string(),
            status: ProductStatus::Active,
            meta: EntityMetadata::new(),
        })
    }

    pub fn apply(&self, record: &mut Product) -> Result<(), String> {
        self.validate()?;
        record.sku = require_text(&self.sku, "SKU")?;
        record.name = require_text(&self.name, "Name")?;
        record.product_type = require_text(&self.product_type, "Product type")?;
        record.category = optional_text(&self.category).unwrap_or_else(|| "Uncategorized".to_string());
        record.min_stock = parse_u32_or_zero(&self.min_stock, "Min stock")?;
        record.reorder_level = parse_u32_or_zero(&self.reorder_level, "Reorder level")?;
        record.raw_materials = self.raw_materials.trim().to_string();
        record.unit_price = parse_f64_or_zero(&self.unit_price, "Unit price")?;
        record.description = self.description.trim().to_string();
        record.meta.touch();
        Ok(())
    }
}

// ============================================================================
// Summary
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub products: usize,
    pub categories: usize,
    /// Rounded mean unit price.
    pub average_price: f64,
}

pub fn summarize(items: &[Product]) -> ProductSummary {
    let mut categories: Vec<&str> = items.iter().map(|p| p.category.as_str()).collect();
    categories.sort_unstable();
    categories.dedup();

    ProductSummary {
        products: items.len(),
        categories: categories.len(),
        average_price: if items.is_empty() {
            0.0
        } else {
            (items.iter().map(|p| p.unit_price).sum::<f64>() / items.len() as f64).round()
        },
    }
}

// ============================================================================
// Demo seeds
// ============================================================================

pub fn demo_records() -> Vec<Product> {
    fn seed(
        id: &str,
        sku: &str,
        name: &str,
        category: &str,
        min_stock: u32,
        reorder_level: u32,
        raw_materials: &str,
        unit_price: f64,
        description: &str,
    ) -> Product {
        Product {
            id: RecordId::new(id),
            sku: sku.to_string(),
            name: name.to_string(),
            product_type: "Finished Good".to_string(),
            category: category.to_string(),
            min_stock,
            reorder_level,
            raw_materials: raw_materials.to_string(),
            unit_price,
            description: description.to_string(),
            status: ProductStatus::Active,
            meta: EntityMetadata::new(),
        }
    }

    vec![
        seed("1", "PA-001", "Product Alpha", "Category A", 100, 150, "RM-A: 2kg, RM-B: 1L", 500.0, "High-quality product for premium market"),
        seed("2", "PB-002", "Product Beta", "Category B", 80, 120, "RM-A: 1.5kg, RM-C: 0.5kg", 350.0, "Standard product for general market"),
        seed("3", "PG-003", "Product Gamma", "Category A", 60, 100, "RM-B: 2L, RM-D: 1kg", 750.0, "Premium product with advanced features"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_sku_is_rejected_case_insensitively() {
        let items = demo_records();
        let form = ProductForm {
            sku: "pa-001".to_string(),
            name: "Clone".to_string(),
            product_type: "Finished Good".to_string(),
            ..Default::default()
        };
        assert!(form.check_unique_sku(&items).is_err());
    }

    #[test]
    fn editing_a_record_does_not_clash_with_itself() {
        let items = demo_records();
        let mut form = ProductForm::from_record(&items[0]);
        assert!(form.check_unique_sku(&items).is_ok());
        // but taking another row's SKU still clashes
        form.sku = "PB-002".to_string();
        assert!(form.check_unique_sku(&items).is_err());
    }

    #[test]
    fn form_requires_sku_name_type() {
        let mut form = ProductForm {
            sku: "PD-004".to_string(),
            name: "Product Delta".to_string(),
            product_type: "Finished Good".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
        form.product_type = String::new();
        assert!(form.validate().is_err());
    }

    #[test]
    fn build_defaults_category_and_active_status() {
        let form = ProductForm {
            sku: "PD-004".to_string(),
            name: "Product Delta".to_string(),
            product_type: "Finished Good".to_string(),
            unit_price: "275".to_string(),
            ..Default::default()
        };
        let product = form.build().unwrap();
        assert_eq!(product.category, "Uncategorized");
        assert_eq!(product.status, ProductStatus::Active);
        assert_eq!(product.unit_price, 275.0);
    }

    #[test]
    fn summary_counts_distinct_categories_and_average_price() {
        let summary = summarize(&demo_records());
        assert_eq!(summary.products, 3);
        assert_eq!(summary.categories, 2);
        assert_eq!(summary.average_price, ((500.0 + 350.0 + 750.0) / 3.0_f64).round());
    }
}
