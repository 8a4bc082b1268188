use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::forms::{optional_text, parse_positive_u32, require_text};
use crate::domain::common::{EntityMetadata, RecordId};
use crate::shared::export::CsvExportable;

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchStatus {
    Packed,
    Shipped,
    Delivered,
}

impl DispatchStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DispatchStatus::Packed => "Packed",
            DispatchStatus::Shipped => "Shipped",
            DispatchStatus::Delivered => "Delivered",
        }
    }
}

/// One outbound shipment booked against a sales channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchEntry {
    pub id: RecordId,
    pub date: NaiveDate,
    pub order_no: String,
    pub product: String,
    pub quantity: u32,
    pub channel: String,
    pub revenue: f64,
    pub status: DispatchStatus,
    #[serde(flatten)]
    pub meta: EntityMetadata,
}

impl CsvExportable for DispatchEntry {
    fn headers() -> Vec<&'static str> {
        vec!["Date", "Order No", "Product", "Quantity", "Channel", "Revenue", "Status"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.date.to_string(),
            self.order_no.clone(),
            self.product.clone(),
            self.quantity.to_string(),
            self.channel.clone(),
            self.revenue.to_string(),
            self.status.label().to_string(),
        ]
    }
}

/// Fallback price per unit when the form leaves revenue blank.
pub const DEFAULT_UNIT_REVENUE: f64 = 500.0;

/// `AMZ-007` style order number from the channel prefix and a sequence.
pub fn generate_order_no(channel: &str, sequence: usize) -> String {
    let prefix: String = channel
        .chars()
        .filter(|c| c.is_alphanumeric())
        .take(3)
        .collect::<String>()
        .to_uppercase();
    let prefix = if prefix.is_empty() { "ORD".to_string() } else { prefix };
    format!("{}-{:03}", prefix, sequence)
}

// ============================================================================
// Form
// ============================================================================

/// "New dispatch" dialog state. Date and status are assigned at submit
/// (today / `Packed`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatchForm {
    pub product: String,
    pub quantity: String,
    pub channel: String,
    pub revenue: String,
    pub order_no: String,
}

impl DispatchForm {
    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.product, "Product")?;
        parse_positive_u32(&self.quantity, "Quantity")?;
        require_text(&self.channel, "Channel")?;
        if !self.revenue.trim().is_empty() {
            let revenue: f64 = self
                .revenue
                .trim()
                .parse()
                .map_err(|_| "Revenue must be a number".to_string())?;
            if revenue < 0.0 {
                return Err("Revenue cannot be negative".to_string());
            }
        }
        Ok(())
    }

    /// Build the entry; `sequence` numbers the auto order id when the
    /// field was left blank.
    pub fn build(&self, date: NaiveDate, sequence: usize) -> Result<DispatchEntry, String> {
        self.validate()?;
        let channel = require_text(&self.channel, "Channel")?;
        let quantity = parse_positive_u32(&self.quantity, "Quantity")?;
        let revenue = match optional_text(&self.revenue) {
            Some(raw) => raw
                .parse()
                .map_err(|_| "Revenue must be a number".to_string())?,
            None => quantity as f64 * DEFAULT_UNIT_REVENUE,
        };
        let order_no = optional_text(&self.order_no)
            .unwrap_or_else(|| generate_order_no(&channel, sequence));

        Ok(DispatchEntry {
            id: RecordId::generate(),
            date,
            order_no,
            product: require_text(&self.product, "Product")?,
            quantity,
            channel,
            revenue,
            status: DispatchStatus::Packed,
            meta: EntityMetadata::new(),
        })
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Orders and revenue accumulated per sales channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelStats {
    pub channel: String,
    pub orders: usize,
    pub revenue: f64,
}

pub fn channel_stats(items: &[DispatchEntry]) -> Vec<ChannelStats> {
    let mut stats: Vec<ChannelStats> = Vec::new();
    for entry in items {
        match stats.iter_mut().find(|s| s.channel == entry.channel) {
            Some(s) => {
                s.orders += 1;
                s.revenue += entry.revenue;
            }
            None => stats.push(ChannelStats {
                channel: entry.channel.clone(),
                orders: 1,
                revenue: entry.revenue,
            }),
        }
    }
    stats
}

pub fn dispatches_on(items: &[DispatchEntry], date: NaiveDate) -> usize {
    items.iter().filter(|d| d.date == date).count()
}

pub fn total_revenue(items: &[DispatchEntry]) -> f64 {
    items.iter().map(|d| d.revenue).sum()
}

// ============================================================================
// Demo seeds
// ============================================================================

pub fn demo_records() -> Vec<DispatchEntry> {
    fn seed(
        id: &str,
        date: &str,
        product: &str,
        quantity: u32,
        channel: &str,
        revenue: f64,
        order_no: &str,
        status: DispatchStatus,
    ) -> DispatchEntry {
        DispatchEntry {
            id: RecordId::new(id),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("seed date"),
            order_no: order_no.to_string(),
            product: product.to_string(),
            quantity,
            channel: channel.to_string(),
            revenue,
            status,
            meta: EntityMetadata::new(),
        }
    }

    vec![
        seed("1", "2024-01-16", "Product Alpha", 25, "Amazon", 12500.0, "AMZ-001", DispatchStatus::Shipped),
        seed("2", "2024-01-16", "Product Beta", 15, "Website", 9000.0, "WEB-002", DispatchStatus::Packed),
        seed("3", "2024-01-15", "Product Gamma", 30, "Flipkart", 18000.0, "FK-003", DispatchStatus::Delivered),
        seed("4", "2024-01-15", "Product Alpha", 20, "1MG", 10000.0, "1MG-004", DispatchStatus::Shipped),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn order_no_uses_channel_prefix() {
        assert_eq!(generate_order_no("Amazon", 5), "AMA-005");
        assert_eq!(generate_order_no("1MG", 12), "1MG-012");
        assert_eq!(generate_order_no("", 3), "ORD-003");
    }

    #[test]
    fn form_requires_product_quantity_channel() {
        let mut form = DispatchForm {
            product: "Product Alpha".to_string(),
            quantity: "10".to_string(),
            channel: "Amazon".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
        form.quantity = "0".to_string();
        assert!(form.validate().is_err());
        form.quantity = "10".to_string();
        form.channel = " ".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn blank_revenue_defaults_to_quantity_times_unit_price() {
        let form = DispatchForm {
            product: "Product Beta".to_string(),
            quantity: "8".to_string(),
            channel: "Website".to_string(),
            ..Default::default()
        };
        let entry = form.build(d("2024-01-17"), 5).unwrap();
        assert_eq!(entry.revenue, 4000.0);
        assert_eq!(entry.order_no, "WEB-005");
        assert_eq!(entry.status, DispatchStatus::Packed);
    }

    #[test]
    fn explicit_revenue_and_order_no_are_kept() {
        let form = DispatchForm {
            product: "Product Beta".to_string(),
            quantity: "8".to_string(),
            channel: "Website".to_string(),
            revenue: "5200".to_string(),
            order_no: "WEB-777".to_string(),
        };
        let entry = form.build(d("2024-01-17"), 5).unwrap();
        assert_eq!(entry.revenue, 5200.0);
        assert_eq!(entry.order_no, "WEB-777");
    }

    #[test]
    fn channel_stats_accumulate_orders_and_revenue() {
        let stats = channel_stats(&demo_records());
        assert_eq!(stats.len(), 4);
        let amazon = stats.iter().find(|s| s.channel == "Amazon").unwrap();
        assert_eq!(amazon.orders, 1);
        assert_eq!(amazon.revenue, 12500.0);
    }

    #[test]
    fn totals_and_per_day_counts() {
        let items = demo_records();
        assert_eq!(total_revenue(&items), 49500.0);
        assert_eq!(dispatches_on(&items, d("2024-01-16")), 2);
        assert_eq!(dispatches_on(&items, d("2024-02-01")), 0);
    }
}
