use serde::{Deserialize, Serialize};

use crate::domain::common::forms::{parse_f64_or_zero, parse_positive_f64, parse_positive_u32, require_text};
use crate::domain::common::{EntityMetadata, RecordId};
use crate::shared::export::CsvExportable;

// ============================================================================
// Record
// ============================================================================

/// Monthly sales performance of one SKU.
///
/// `net_margin` is derived: sales minus returns, ad spend and COGS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceEntry {
    pub id: RecordId,
    pub product_name: String,
    pub sku: String,
    /// Reporting month, `YYYY-MM`.
    pub month: String,
    pub sales: f64,
    pub returns: f64,
    pub ad_spend: f64,
    pub cogs: f64,
    pub net_margin: f64,
    pub units: u32,
    #[serde(flatten)]
    pub meta: EntityMetadata,
}

impl PerformanceEntry {
    pub fn recalculate(&mut self) {
        self.net_margin = self.sales - self.returns - self.ad_spend - self.cogs;
    }
}

impl CsvExportable for PerformanceEntry {
    fn headers() -> Vec<&'static str> {
        vec![
            "Product Name",
            "SKU",
            "Month",
            "Sales",
            "Returns",
            "Ad Spend",
            "COGS",
            "Net Margin",
            "Units",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.product_name.clone(),
            self.sku.clone(),
            self.month.clone(),
            self.sales.to_string(),
            self.returns.to_string(),
            self.ad_spend.to_string(),
            self.cogs.to_string(),
            self.net_margin.to_string(),
            self.units.to_string(),
        ]
    }
}

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceForm {
    pub product_name: String,
    pub sku: String,
    pub month: String,
    pub sales: String,
    pub returns: String,
    pub ad_spend: String,
    pub cogs: String,
    pub units: String,
}

impl PerformanceForm {
    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.product_name, "Product name")?;
        require_text(&self.sku, "SKU")?;
        parse_month(&self.month)?;
        parse_positive_f64(&self.sales, "Sales")?;
        parse_f64_or_zero(&self.returns, "Returns")?;
        parse_f64_or_zero(&self.ad_spend, "Ad spend")?;
        parse_f64_or_zero(&self.cogs, "COGS")?;
        parse_positive_u32(&self.units, "Units")?;
        Ok(())
    }

    pub fn build(&self) -> Result<PerformanceEntry, String> {
        self.validate()?;
        let mut entry = PerformanceEntry {
            id: RecordId::generate(),
            product_name: require_text(&self.product_name, "Product name")?,
            sku: require_text(&self.sku, "SKU")?,
            month: parse_month(&self.month)?,
            sales: parse_positive_f64(&self.sales, "Sales")?,
            returns: parse_f64_or_zero(&self.returns, "Returns")?,
            ad_spend: parse_f64_or_zero(&self.ad_spend, "Ad spend")?,
            cogs: parse_f64_or_zero(&self.cogs, "COGS")?,
            net_margin: 0.0,
            units: parse_positive_u32(&self.units, "Units")?,
            meta: EntityMetadata::new(),
        };
        entry.recalculate();
        Ok(entry)
    }
}

fn parse_month(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Month is required".to_string());
    }
    let valid = trimmed.len() == 7
        && trimmed.as_bytes()[4] == b'-'
        && trimmed[..4].chars().all(|c| c.is_ascii_digit())
        && trimmed[5..].chars().all(|c| c.is_ascii_digit())
        && matches!(trimmed[5..].parse::<u8>(), Ok(1..=12));
    if !valid {
        return Err("Month must be in YYYY-MM format".to_string());
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// Filtering & summary
// ============================================================================

/// Filter by month and SKU; `None` means "all".
pub fn filter_reports(
    items: &[PerformanceEntry],
    month: Option<&str>,
    sku: Option<&str>,
) -> Vec<PerformanceEntry> {
    items
        .iter()
        .filter(|e| month.map(|m| e.month == m).unwrap_or(true))
        .filter(|e| sku.map(|s| e.sku == s).unwrap_or(true))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSummary {
    pub total_sales: f64,
    pub total_returns: f64,
    pub total_ad_spend: f64,
    pub total_net_margin: f64,
    /// Returns share of sales, percent.
    pub return_rate: f64,
    /// Net margin share of sales, percent.
    pub margin_rate: f64,
}

pub fn summarize(items: &[PerformanceEntry]) -> PerformanceSummary {
    let total_sales: f64 = items.iter().map(|e| e.sales).sum();
    let total_returns: f64 = items.iter().map(|e| e.returns).sum();
    let total_net_margin: f64 = items.iter().map(|e| e.net_margin).sum();
    PerformanceSummary {
        total_sales,
        total_returns,
        total_ad_spend: items.iter().map(|e| e.ad_spend).sum(),
        total_net_margin,
        return_rate: if total_sales > 0.0 {
            total_returns / total_sales * 100.0
        } else {
            0.0
        },
        margin_rate: if total_sales > 0.0 {
            total_net_margin / total_sales * 100.0
        } else {
            0.0
        },
    }
}

/// Entry with the highest net margin.
pub fn best_performer(items: &[PerformanceEntry]) -> Option<&PerformanceEntry> {
    items
        .iter()
        .max_by(|a, b| a.net_margin.total_cmp(&b.net_margin))
}

/// Entry with the lowest net margin.
pub fn worst_performer(items: &[PerformanceEntry]) -> Option<&PerformanceEntry> {
    items
        .iter()
        .min_by(|a, b| a.net_margin.total_cmp(&b.net_margin))
}

/// Distinct months, sorted ascending.
pub fn distinct_months(items: &[PerformanceEntry]) -> Vec<String> {
    let mut months: Vec<String> = items.iter().map(|e| e.month.clone()).collect();
    months.sort();
    months.dedup();
    months
}

/// Distinct SKUs, in first-seen order.
pub fn distinct_skus(items: &[PerformanceEntry]) -> Vec<String> {
    let mut skus: Vec<String> = Vec::new();
    for entry in items {
        if !skus.contains(&entry.sku) {
            skus.push(entry.sku.clone());
        }
    }
    skus
}

// ============================================================================
// Demo seeds
// ============================================================================

pub fn demo_records() -> Vec<PerformanceEntry> {
    fn seed(
        id: &str,
        product_name: &str,
        sku: &str,
        month: &str,
        sales: f64,
        returns: f64,
        ad_spend: f64,
        cogs: f64,
        units: u32,
    ) -> PerformanceEntry {
        let mut entry = PerformanceEntry {
            id: RecordId::new(id),
            product_name: product_name.to_string(),
            sku: sku.to_string(),
            month: month.to_string(),
            sales,
            returns,
            ad_spend,
            cogs,
            net_margin: 0.0,
            units,
            meta: EntityMetadata::new(),
        };
        entry.recalculate();
        entry
    }

    vec![
        seed("1", "Premium Headphones", "PH-001", "2024-01", 85000.0, 4200.0, 12000.0, 42000.0, 170),
        seed("2", "Wireless Mouse", "WM-002", "2024-01", 32000.0, 1600.0, 4800.0, 16000.0, 160),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_margin_formula() {
        let items = demo_records();
        assert_eq!(items[0].net_margin, 26800.0);
        assert_eq!(items[1].net_margin, 9600.0);
    }

    #[test]
    fn month_format_is_validated() {
        assert!(parse_month("2024-01").is_ok());
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("2024/01").is_err());
        assert!(parse_month("Jan 2024").is_err());
        assert!(parse_month("").is_err());
    }

    #[test]
    fn sales_and_units_must_be_positive() {
        let mut form = PerformanceForm {
            product_name: "Premium Headphones".to_string(),
            sku: "PH-001".to_string(),
            month: "2024-02".to_string(),
            sales: "90000".to_string(),
            units: "180".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
        form.units = "0".to_string();
        assert!(form.validate().is_err());
        form.units = "180".to_string();
        form.sales = "0".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn filters_by_month_and_sku() {
        let items = demo_records();
        assert_eq!(filter_reports(&items, Some("2024-01"), None).len(), 2);
        assert_eq!(filter_reports(&items, Some("2024-02"), None).len(), 0);
        let mouse = filter_reports(&items, None, Some("WM-002"));
        assert_eq!(mouse.len(), 1);
        assert_eq!(mouse[0].product_name, "Wireless Mouse");
    }

    #[test]
    fn summary_rates() {
        let summary = summarize(&demo_records());
        assert_eq!(summary.total_sales, 117000.0);
        assert_eq!(summary.total_net_margin, 36400.0);
        assert!((summary.return_rate - 5800.0 / 117000.0 * 100.0).abs() < 1e-9);
        assert!((summary.margin_rate - 36400.0 / 117000.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn best_and_worst_performers() {
        let items = demo_records();
        assert_eq!(best_performer(&items).unwrap().sku, "PH-001");
        assert_eq!(worst_performer(&items).unwrap().sku, "WM-002");
        assert!(best_performer(&[]).is_none());
    }

    #[test]
    fn distinct_helpers() {
        let items = demo_records();
        assert_eq!(distinct_months(&items), vec!["2024-01".to_string()]);
        assert_eq!(distinct_skus(&items), vec!["PH-001".to_string(), "WM-002".to_string()]);
    }
}
