use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::forms::{optional_text, parse_date, parse_positive_f64};
use crate::domain::common::{EntityMetadata, RecordId};
use crate::shared::export::CsvExportable;

// ============================================================================
// Record
// ============================================================================

/// Advertising platform the spend was booked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdPlatform {
    Meta,
    #[serde(rename = "Google Ads")]
    GoogleAds,
    #[serde(rename = "Amazon Ads")]
    AmazonAds,
}

impl AdPlatform {
    pub const ALL: [AdPlatform; 3] = [AdPlatform::Meta, AdPlatform::GoogleAds, AdPlatform::AmazonAds];

    pub fn label(&self) -> &'static str {
        match self {
            AdPlatform::Meta => "Meta",
            AdPlatform::GoogleAds => "Google Ads",
            AdPlatform::AmazonAds => "Amazon Ads",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.label() == label)
    }
}

/// One advertising spend entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdSpend {
    pub id: RecordId,
    pub date: NaiveDate,
    pub platform: AdPlatform,
    pub amount: f64,
    pub campaign: Option<String>,
    pub notes: Option<String>,
    #[serde(flatten)]
    pub meta: EntityMetadata,
}

impl CsvExportable for AdSpend {
    fn headers() -> Vec<&'static str> {
        vec!["Date", "Platform", "Campaign", "Amount", "Notes"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.date.to_string(),
            self.platform.label().to_string(),
            self.campaign.clone().unwrap_or_default(),
            self.amount.to_string(),
            self.notes.clone().unwrap_or_default(),
        ]
    }
}

// ============================================================================
// Form
// ============================================================================

/// Create/edit dialog state for an ad spend entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdSpendForm {
    pub id: Option<RecordId>,
    pub date: String,
    pub platform: Option<AdPlatform>,
    pub amount: String,
    pub campaign: String,
    pub notes: String,
}

impl AdSpendForm {
    pub fn from_record(record: &AdSpend) -> Self {
        Self {
            id: Some(record.id.clone()),
            date: record.date.to_string(),
            platform: Some(record.platform),
            amount: record.amount.to_string(),
            campaign: record.campaign.clone().unwrap_or_default(),
            notes: record.notes.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        parse_date(&self.date, "Date")?;
        if self.platform.is_none() {
            return Err("Platform is required".to_string());
        }
        parse_positive_f64(&self.amount, "Amount")?;
        Ok(())
    }

    /// Build a new record with a freshly assigned id.
    pub fn build(&self) -> Result<AdSpend, String> {
        Ok(AdSpend {
            id: RecordId::generate(),
            date: parse_date(&self.date, "Date")?,
            platform: self.platform.ok_or("Platform is required")?,
            amount: parse_positive_f64(&self.amount, "Amount")?,
            campaign: optional_text(&self.campaign),
            notes: optional_text(&self.notes),
            meta: EntityMetadata::new(),
        })
    }

    /// Apply the form to an existing record, refreshing `updated_at`.
    pub fn apply(&self, record: &mut AdSpend) -> Result<(), String> {
        record.date = parse_date(&self.date, "Date")?;
        record.platform = self.platform.ok_or("Platform is required")?;
        record.amount = parse_positive_f64(&self.amount, "Amount")?;
        record.campaign = optional_text(&self.campaign);
        record.notes = optional_text(&self.notes);
        record.meta.touch();
        Ok(())
    }
}

// ============================================================================
// Filtering & summary
// ============================================================================

/// Date window applied on top of the text/platform filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateRange {
    #[default]
    All,
    Today,
    Last7Days,
    Last30Days,
}

impl DateRange {
    fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            DateRange::All => None,
            DateRange::Today => Some(today),
            DateRange::Last7Days => today.checked_sub_days(chrono::Days::new(7)),
            DateRange::Last30Days => today.checked_sub_days(chrono::Days::new(30)),
        }
    }
}

/// Apply search text, platform filter and date window.
pub fn filter_spends(
    items: &[AdSpend],
    search: &str,
    platform: Option<AdPlatform>,
    range: DateRange,
    today: NaiveDate,
) -> Vec<AdSpend> {
    let needle = search.trim().to_lowercase();
    let cutoff = range.cutoff(today);
    items
        .iter()
        .filter(|spend| {
            let matches_search = needle.is_empty()
                || spend
                    .campaign
                    .as_deref()
                    .map(|c| c.to_lowercase().contains(&needle))
                    .unwrap_or(false)
                || spend.platform.label().to_lowercase().contains(&needle)
                || spend
                    .notes
                    .as_deref()
                    .map(|n| n.to_lowercase().contains(&needle))
                    .unwrap_or(false);
            let matches_platform = platform.map(|p| spend.platform == p).unwrap_or(true);
            let matches_date = cutoff.map(|c| spend.date >= c).unwrap_or(true);
            matches_search && matches_platform && matches_date
        })
        .cloned()
        .collect()
}

/// Derived figures for the analytics cards.
#[derive(Debug, Clone, PartialEq)]
pub struct AdSpendSummary {
    pub total: f64,
    pub records: usize,
    pub average: f64,
    pub top_platform: Option<AdPlatform>,
    /// Per-platform totals, highest first.
    pub by_platform: Vec<(AdPlatform, f64)>,
}

pub fn summarize(items: &[AdSpend]) -> AdSpendSummary {
    let total: f64 = items.iter().map(|s| s.amount).sum();
    let mut by_platform: Vec<(AdPlatform, f64)> = Vec::new();
    for spend in items {
        match by_platform.iter_mut().find(|(p, _)| *p == spend.platform) {
            Some((_, sum)) => *sum += spend.amount,
            None => by_platform.push((spend.platform, spend.amount)),
        }
    }
    by_platform.sort_by(|a, b| b.1.total_cmp(&a.1));

    AdSpendSummary {
        total,
        records: items.len(),
        average: if items.is_empty() {
            0.0
        } else {
            total / items.len() as f64
        },
        top_platform: by_platform.first().map(|(p, _)| *p),
        by_platform,
    }
}

// ============================================================================
// Demo seeds
// ============================================================================

pub fn demo_records() -> Vec<AdSpend> {
    fn seed(id: &str, date: &str, platform: AdPlatform, amount: f64, campaign: &str, notes: &str) -> AdSpend {
        AdSpend {
            id: RecordId::new(id),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("seed date"),
            platform,
            amount,
            campaign: Some(campaign.to_string()),
            notes: Some(notes.to_string()),
            meta: EntityMetadata::new(),
        }
    }

    vec![
        seed(
            "1",
            "2024-01-15",
            AdPlatform::Meta,
            1500.0,
            "Winter Sale Campaign",
            "High performing campaign with good ROAS",
        ),
        seed(
            "2",
            "2024-01-16",
            AdPlatform::GoogleAds,
            2200.0,
            "Search Campaign - Electronics",
            "Good conversion rate on electronics keywords",
        ),
        seed(
            "3",
            "2024-01-17",
            AdPlatform::AmazonAds,
            800.0,
            "Product Listing Ads",
            "Boosting product visibility",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn form_requires_date_platform_and_positive_amount() {
        let mut form = AdSpendForm {
            date: "2024-01-20".to_string(),
            platform: Some(AdPlatform::Meta),
            amount: "1200.50".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());

        form.amount = "0".to_string();
        assert!(form.validate().is_err());
        form.amount = "abc".to_string();
        assert!(form.validate().is_err());
        form.amount = "100".to_string();
        form.platform = None;
        assert!(form.validate().is_err());
        form.platform = Some(AdPlatform::Meta);
        form.date = String::new();
        assert!(form.validate().is_err());
    }

    #[test]
    fn build_trims_optional_fields_to_none() {
        let form = AdSpendForm {
            date: "2024-01-20".to_string(),
            platform: Some(AdPlatform::GoogleAds),
            amount: "300".to_string(),
            campaign: "  ".to_string(),
            notes: "keyword test".to_string(),
            ..Default::default()
        };
        let record = form.build().unwrap();
        assert_eq!(record.campaign, None);
        assert_eq!(record.notes.as_deref(), Some("keyword test"));
    }

    #[test]
    fn apply_overwrites_and_touches() {
        let mut record = demo_records().remove(0);
        let form = AdSpendForm {
            id: Some(record.id.clone()),
            date: "2024-02-01".to_string(),
            platform: Some(AdPlatform::AmazonAds),
            amount: "999".to_string(),
            campaign: "Republic Day".to_string(),
            notes: String::new(),
        };
        form.apply(&mut record).unwrap();
        assert_eq!(record.date, d("2024-02-01"));
        assert_eq!(record.platform, AdPlatform::AmazonAds);
        assert_eq!(record.amount, 999.0);
        assert_eq!(record.notes, None);
    }

    #[test]
    fn filters_combine_search_platform_and_range() {
        let items = demo_records();
        let today = d("2024-01-17");

        let by_search = filter_spends(&items, "electronics", None, DateRange::All, today);
        assert_eq!(by_search.len(), 1);
        assert_eq!(by_search[0].platform, AdPlatform::GoogleAds);

        let by_platform = filter_spends(&items, "", Some(AdPlatform::Meta), DateRange::All, today);
        assert_eq!(by_platform.len(), 1);

        let by_today = filter_spends(&items, "", None, DateRange::Today, today);
        assert_eq!(by_today.len(), 1);
        assert_eq!(by_today[0].date, today);

        let by_week = filter_spends(&items, "", None, DateRange::Last7Days, today);
        assert_eq!(by_week.len(), 3);
    }

    #[test]
    fn summary_totals_and_top_platform() {
        let summary = summarize(&demo_records());
        assert_eq!(summary.total, 4500.0);
        assert_eq!(summary.records, 3);
        assert_eq!(summary.average, 1500.0);
        assert_eq!(summary.top_platform, Some(AdPlatform::GoogleAds));
        assert_eq!(summary.by_platform[0], (AdPlatform::GoogleAds, 2200.0));
    }

    #[test]
    fn empty_summary_is_zeroed() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.top_platform, None);
    }

    #[test]
    fn platform_label_round_trip() {
        for p in AdPlatform::ALL {
            assert_eq!(AdPlatform::from_label(p.label()), Some(p));
        }
        assert_eq!(AdPlatform::from_label("TikTok"), None);
    }
}
