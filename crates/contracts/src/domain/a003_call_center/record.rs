use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::forms::{optional_text, parse_date, parse_f64_or_zero, parse_u32_or_zero};
use crate::domain::common::{EntityMetadata, RecordId};
use crate::shared::export::CsvExportable;

// ============================================================================
// Record
// ============================================================================

/// Daily call-center volume and NDR (non-delivery report) follow-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallCenterEntry {
    pub id: RecordId,
    pub date: NaiveDate,
    pub calls_received: u32,
    pub calls_answered: u32,
    pub ndr_received: u32,
    pub ndr_resolved: u32,
    /// Mean time to pick up, in seconds.
    pub avg_response_time: f64,
    pub notes: Option<String>,
    #[serde(flatten)]
    pub meta: EntityMetadata,
}

impl CsvExportable for CallCenterEntry {
    fn headers() -> Vec<&'static str> {
        vec![
            "Date",
            "Calls Received",
            "Calls Answered",
            "NDR Received",
            "NDR Resolved",
            "Avg Response Time",
            "Notes",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.date.to_string(),
            self.calls_received.to_string(),
            self.calls_answered.to_string(),
            self.ndr_received.to_string(),
            self.ndr_resolved.to_string(),
            self.avg_response_time.to_string(),
            self.notes.clone().unwrap_or_default(),
        ]
    }
}

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallCenterForm {
    pub id: Option<RecordId>,
    pub date: String,
    pub calls_received: String,
    pub calls_answered: String,
    pub ndr_received: String,
    pub ndr_resolved: String,
    pub avg_response_time: String,
    pub notes: String,
}

impl CallCenterForm {
    pub fn from_record(record: &CallCenterEntry) -> Self {
        Self {
            id: Some(record.id.clone()),
            date: record.date.to_string(),
            calls_received: record.calls_received.to_string(),
            calls_answered: record.calls_answered.to_string(),
            ndr_received: record.ndr_received.to_string(),
            ndr_resolved: record.ndr_resolved.to_string(),
            avg_response_time: record.avg_response_time.to_string(),
            notes: record.notes.clone().unwrap_or_default(),
        }
    }

    /// Required fields plus the two cross-field invariants:
    /// answered ≤ received and NDR resolved ≤ NDR received.
    pub fn validate(&self) -> Result<(), String> {
        parse_date(&self.date, "Date")?;
        if self.calls_received.trim().is_empty() || self.calls_answered.trim().is_empty() {
            return Err("Calls received and calls answered are required".to_string());
        }
        let received = parse_u32_or_zero(&self.calls_received, "Calls received")?;
        let answered = parse_u32_or_zero(&self.calls_answered, "Calls answered")?;
        let ndr_received = parse_u32_or_zero(&self.ndr_received, "NDR received")?;
        let ndr_resolved = parse_u32_or_zero(&self.ndr_resolved, "NDR resolved")?;
        parse_f64_or_zero(&self.avg_response_time, "Average response time")?;

        if answered > received {
            return Err("Calls answered cannot exceed calls received".to_string());
        }
        if ndr_resolved > ndr_received {
            return Err("NDR resolved cannot exceed NDR received".to_string());
        }
        Ok(())
    }

    pub fn build(&self) -> Result<CallCenterEntry, String> {
        self.validate()?;
        Ok(CallCenterEntry {
            id: RecordId::generate(),
            date: parse_date(&self.date, "Date")?,
            calls_received: parse_u32_or_zero(&self.calls_received, "Calls received")?,
            calls_answered: parse_u32_or_zero(&self.calls_answered, "Calls answered")?,
            ndr_received: parse_u32_or_zero(&self.ndr_received, "NDR received")?,
            ndr_resolved: parse_u32_or_zero(&self.ndr_resolved, "NDR resolved")?,
            avg_response_time: parse_f64_or_zero(&self.avg_response_time, "Average response time")?,
            notes: optional_text(&self.notes),
            meta: EntityMetadata::new(),
        })
    }

    pub fn apply(&self, record: &mut CallCenterEntry) -> Result<(), String> {
        self.validate()?;
        record.date = parse_date(&self.date, "Date")?;
        record.calls_received = parse_u32_or_zero(&self.calls_received, "Calls received")?;
        record.calls_answered = parse_u32_or_zero(&self.calls_answered, "Calls answered")?;
        record.ndr_received = parse_u32_or_zero(&self.ndr_received, "NDR received")?;
        record.ndr_resolved = parse_u32_or_zero(&self.ndr_resolved, "NDR resolved")?;
        record.avg_response_time = parse_f64_or_zero(&self.avg_response_time, "Average response time")?;
        record.notes = optional_text(&self.notes);
        record.meta.touch();
        Ok(())
    }
}

// ============================================================================
// Summary
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CallCenterSummary {
    pub calls_received: u32,
    pub calls_answered: u32,
    pub missed_calls: u32,
    pub ndr_received: u32,
    pub ndr_resolved: u32,
    /// Answered share of received calls, percent.
    pub answer_rate: f64,
    /// Resolved share of received NDR cases, percent.
    pub ndr_resolution_rate: f64,
    /// Mean of the per-day average response times, seconds.
    pub avg_response_time: f64,
}

pub fn summarize(items: &[CallCenterEntry]) -> CallCenterSummary {
    let calls_received: u32 = items.iter().map(|e| e.calls_received).sum();
    let calls_answered: u32 = items.iter().map(|e| e.calls_answered).sum();
    let ndr_received: u32 = items.iter().map(|e| e.ndr_received).sum();
    let ndr_resolved: u32 = items.iter().map(|e| e.ndr_resolved).sum();

    CallCenterSummary {
        calls_received,
        calls_answered,
        missed_calls: calls_received.saturating_sub(calls_answered),
        ndr_received,
        ndr_resolved,
        answer_rate: rate(calls_answered, calls_received),
        ndr_resolution_rate: rate(ndr_resolved, ndr_received),
        avg_response_time: if items.is_empty() {
            0.0
        } else {
            items.iter().map(|e| e.avg_response_time).sum::<f64>() / items.len() as f64
        },
    }
}

fn rate(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

// ============================================================================
// Demo seeds
// ============================================================================

pub fn demo_records() -> Vec<CallCenterEntry> {
    fn seed(
        id: &str,
        date: &str,
        calls_received: u32,
        calls_answered: u32,
        ndr_received: u32,
        ndr_resolved: u32,
        avg_response_time: f64,
        notes: &str,
    ) -> CallCenterEntry {
        CallCenterEntry {
            id: RecordId::new(id),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("seed date"),
            calls_received,
            calls_answered,
            ndr_received,
            ndr_resolved,
            avg_response_time,
            notes: Some(notes.to_string()),
            meta: EntityMetadata::new(),
        }
    }

    vec![
        seed("1", "2024-01-16", 120, 115, 18, 15, 32.0, "Good performance day"),
        seed("2", "2024-01-15", 95, 88, 12, 10, 28.0, "Lower volume day"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CallCenterForm {
        CallCenterForm {
            date: "2024-01-17".to_string(),
            calls_received: "100".to_string(),
            calls_answered: "90".to_string(),
            ndr_received: "10".to_string(),
            ndr_resolved: "8".to_string(),
            avg_response_time: "30".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn answered_cannot_exceed_received() {
        let mut form = valid_form();
        assert!(form.validate().is_ok());
        form.calls_answered = "101".to_string();
        assert_eq!(
            form.validate().unwrap_err(),
            "Calls answered cannot exceed calls received"
        );
    }

    #[test]
    fn ndr_resolved_cannot_exceed_ndr_received() {
        let mut form = valid_form();
        form.ndr_resolved = "11".to_string();
        assert_eq!(
            form.validate().unwrap_err(),
            "NDR resolved cannot exceed NDR received"
        );
    }

    #[test]
    fn received_and_answered_are_required() {
        let mut form = valid_form();
        form.calls_answered = String::new();
        assert!(form.validate().is_err());
    }

    #[test]
    fn optional_counters_default_to_zero() {
        let mut form = valid_form();
        form.ndr_received = String::new();
        form.ndr_resolved = String::new();
        form.avg_response_time = String::new();
        let entry = form.build().unwrap();
        assert_eq!(entry.ndr_received, 0);
        assert_eq!(entry.ndr_resolved, 0);
        assert_eq!(entry.avg_response_time, 0.0);
    }

    #[test]
    fn summary_rates_match_demo_data() {
        let summary = summarize(&demo_records());
        assert_eq!(summary.calls_received, 215);
        assert_eq!(summary.calls_answered, 203);
        assert_eq!(summary.missed_calls, 12);
        assert!((summary.answer_rate - 203.0 / 215.0 * 100.0).abs() < 1e-9);
        assert!((summary.ndr_resolution_rate - 25.0 / 30.0 * 100.0).abs() < 1e-9);
        assert_eq!(summary.avg_response_time, 30.0);
    }

    #[test]
    fn empty_summary_has_zero_rates() {
        let summary = summarize(&[]);
        assert_eq!(summary.answer_rate, 0.0);
        assert_eq!(summary.ndr_resolution_rate, 0.0);
        assert_eq!(summary.avg_response_time, 0.0);
    }
}
