use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::common::forms::{optional_text, require_text};
use crate::domain::common::{EntityMetadata, RecordId};
use crate::shared::export::CsvExportable;

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    HalfDay,
}

impl AttendanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::HalfDay => "Half Day",
        }
    }
}

/// One punch-in/punch-out entry for an employee and a day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub id: RecordId,
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub date: NaiveDate,
    /// `HH:MM`, absent employees have neither punch.
    pub punch_in: Option<String>,
    pub punch_out: Option<String>,
    /// Derived from the punch pair, rounded to one decimal.
    pub hours_worked: f64,
    pub status: AttendanceStatus,
    #[serde(flatten)]
    pub meta: EntityMetadata,
}

impl CsvExportable for AttendanceEntry {
    fn headers() -> Vec<&'static str> {
        vec![
            "Employee ID",
            "Employee Name",
            "Department",
            "Date",
            "Punch In",
            "Punch Out",
            "Hours Worked",
            "Status",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.employee_id.clone(),
            self.employee_name.clone(),
            self.department.clone(),
            self.date.to_string(),
            self.punch_in.clone().unwrap_or_else(|| "-".to_string()),
            self.punch_out.clone().unwrap_or_else(|| "-".to_string()),
            self.hours_worked.to_string(),
            self.status.label().to_string(),
        ]
    }
}

// ============================================================================
// Derived fields
// ============================================================================

/// Hours between two `HH:MM` punches, rounded to one decimal.
///
/// Returns 0 when either punch is missing or out-of-order.
pub fn hours_between(punch_in: Option<&str>, punch_out: Option<&str>) -> f64 {
    let (Some(start), Some(end)) = (punch_in, punch_out) else {
        return 0.0;
    };
    let Ok(start) = NaiveTime::parse_from_str(start.trim(), "%H:%M") else {
        return 0.0;
    };
    let Ok(end) = NaiveTime::parse_from_str(end.trim(), "%H:%M") else {
        return 0.0;
    };
    let minutes = (end - start).num_minutes();
    if minutes <= 0 {
        return 0.0;
    }
    (minutes as f64 / 60.0 * 10.0).round() / 10.0
}

/// Status derived from the punch pair: no punch-in means absent, a full
/// shift (8 h+) is present, 4 h+ counts as a half day.
pub fn derive_status(punch_in: Option<&str>, hours: f64) -> AttendanceStatus {
    if punch_in.is_none() {
        return AttendanceStatus::Absent;
    }
    if hours >= 8.0 {
        AttendanceStatus::Present
    } else if hours >= 4.0 {
        AttendanceStatus::HalfDay
    } else {
        AttendanceStatus::Present
    }
}

// ============================================================================
// Form
// ============================================================================

/// "Mark attendance" dialog state. The date is always "today" at submit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceForm {
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub punch_in: String,
    pub punch_out: String,
}

impl AttendanceForm {
    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.employee_id, "Employee ID")?;
        require_text(&self.employee_name, "Employee name")?;
        require_text(&self.punch_in, "Punch in time")?;
        if NaiveTime::parse_from_str(self.punch_in.trim(), "%H:%M").is_err() {
            return Err("Punch in time must be in HH:MM format".to_string());
        }
        if !self.punch_out.trim().is_empty()
            && NaiveTime::parse_from_str(self.punch_out.trim(), "%H:%M").is_err()
        {
            return Err("Punch out time must be in HH:MM format".to_string());
        }
        Ok(())
    }

    pub fn build(&self, date: NaiveDate) -> Result<AttendanceEntry, String> {
        self.validate()?;
        let punch_in = optional_text(&self.punch_in);
        let punch_out = optional_text(&self.punch_out);
        let hours = hours_between(punch_in.as_deref(), punch_out.as_deref());
        Ok(AttendanceEntry {
            id: RecordId::generate(),
            employee_id: require_text(&self.employee_id, "Employee ID")?,
            employee_name: require_text(&self.employee_name, "Employee name")?,
            department: optional_text(&self.department).unwrap_or_else(|| "General".to_string()),
            date,
            status: derive_status(punch_in.as_deref(), hours),
            punch_in,
            punch_out,
            hours_worked: hours,
            meta: EntityMetadata::new(),
        })
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Today's headline numbers for the attendance page.
#[derive(Debug, Clone, PartialEq)]
pub struct DayStats {
    pub present: usize,
    pub absent: usize,
    pub total_hours: f64,
    /// Present share of today's records, in percent.
    pub attendance_rate: f64,
}

pub fn day_stats(items: &[AttendanceEntry], date: NaiveDate) -> DayStats {
    let todays: Vec<&AttendanceEntry> = items.iter().filter(|e| e.date == date).collect();
    let present = todays
        .iter()
        .filter(|e| matches!(e.status, AttendanceStatus::Present | AttendanceStatus::HalfDay))
        .count();
    let absent = todays
        .iter()
        .filter(|e| e.status == AttendanceStatus::Absent)
        .count();
    let total_hours = todays.iter().map(|e| e.hours_worked).sum();
    let attendance_rate = if todays.is_empty() {
        0.0
    } else {
        present as f64 / todays.len() as f64 * 100.0
    };
    DayStats {
        present,
        absent,
        total_hours,
        attendance_rate,
    }
}

// ============================================================================
// Demo seeds
// ============================================================================

pub fn demo_records() -> Vec<AttendanceEntry> {
    fn seed(
        id: &str,
        employee_id: &str,
        employee_name: &str,
        department: &str,
        punch_in: Option<&str>,
        punch_out: Option<&str>,
        status: AttendanceStatus,
    ) -> AttendanceEntry {
        let punch_in = punch_in.map(str::to_string);
        let punch_out = punch_out.map(str::to_string);
        let hours = hours_between(punch_in.as_deref(), punch_out.as_deref());
        AttendanceEntry {
            id: RecordId::new(id),
            employee_id: employee_id.to_string(),
            employee_name: employee_name.to_string(),
            department: department.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 16).expect("seed date"),
            punch_in,
            punch_out,
            hours_worked: hours,
            status,
            meta: EntityMetadata::new(),
        }
    }

    vec![
        seed("1", "EMP001", "John Doe", "Production", Some("09:00"), Some("18:00"), AttendanceStatus::Present),
        seed("2", "EMP002", "Jane Smith", "Quality Control", Some("09:15"), Some("17:45"), AttendanceStatus::Present),
        seed("3", "EMP003", "Mike Johnson", "Packaging", None, None, AttendanceStatus::Absent),
        seed("4", "EMP004", "Sarah Wilson", "Administration", Some("09:30"), Some("13:30"), AttendanceStatus::HalfDay),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_are_rounded_to_one_decimal() {
        assert_eq!(hours_between(Some("09:00"), Some("18:00")), 9.0);
        assert_eq!(hours_between(Some("09:15"), Some("17:45")), 8.5);
        assert_eq!(hours_between(Some("09:10"), Some("17:30")), 8.3);
    }

    #[test]
    fn missing_or_reversed_punches_give_zero_hours() {
        assert_eq!(hours_between(None, Some("18:00")), 0.0);
        assert_eq!(hours_between(Some("09:00"), None), 0.0);
        assert_eq!(hours_between(Some("18:00"), Some("09:00")), 0.0);
        assert_eq!(hours_between(Some("9am"), Some("18:00")), 0.0);
    }

    #[test]
    fn status_derivation_bands() {
        assert_eq!(derive_status(None, 0.0), AttendanceStatus::Absent);
        assert_eq!(derive_status(Some("09:00"), 9.0), AttendanceStatus::Present);
        assert_eq!(derive_status(Some("09:30"), 4.0), AttendanceStatus::HalfDay);
        assert_eq!(derive_status(Some("09:30"), 2.0), AttendanceStatus::Present);
    }

    #[test]
    fn form_requires_id_name_and_valid_punch_in() {
        let mut form = AttendanceForm {
            employee_id: "EMP005".to_string(),
            employee_name: "Asha Rao".to_string(),
            punch_in: "09:05".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());

        form.punch_in = "nine".to_string();
        assert!(form.validate().is_err());
        form.punch_in = String::new();
        assert!(form.validate().is_err());
        form.punch_in = "09:05".to_string();
        form.employee_name = String::new();
        assert!(form.validate().is_err());
    }

    #[test]
    fn build_derives_hours_status_and_default_department() {
        let form = AttendanceForm {
            employee_id: "EMP005".to_string(),
            employee_name: "Asha Rao".to_string(),
            department: "  ".to_string(),
            punch_in: "09:00".to_string(),
            punch_out: "13:30".to_string(),
        };
        let date = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        let entry = form.build(date).unwrap();
        assert_eq!(entry.hours_worked, 4.5);
        assert_eq!(entry.status, AttendanceStatus::HalfDay);
        assert_eq!(entry.department, "General");
        assert_eq!(entry.date, date);
    }

    #[test]
    fn day_stats_count_only_the_given_date() {
        let items = demo_records();
        let stats = day_stats(&items, NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
        assert_eq!(stats.present, 3);
        assert_eq!(stats.absent, 1);
        assert_eq!(stats.total_hours, 9.0 + 8.5 + 4.0);
        assert_eq!(stats.attendance_rate, 75.0);

        let empty = day_stats(&items, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(empty.present, 0);
        assert_eq!(empty.attendance_rate, 0.0);
    }
}
