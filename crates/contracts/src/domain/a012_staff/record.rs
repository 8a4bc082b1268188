use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::forms::{optional_text, parse_f64_or_zero, require_text, validate_email};
use crate::domain::common::{EntityMetadata, RecordId};
use crate::shared::export::CsvExportable;

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffStatus {
    Active,
    Inactive,
}

impl StaffStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StaffStatus::Active => "Active",
            StaffStatus::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceRating {
    Excellent,
    Good,
    NeedsImprovement,
}

impl PerformanceRating {
    pub fn label(&self) -> &'static str {
        match self {
            PerformanceRating::Excellent => "Excellent",
            PerformanceRating::Good => "Good",
            PerformanceRating::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// One employee in the staff directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: RecordId,
    pub employee_id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub join_date: NaiveDate,
    pub salary: f64,
    pub email: String,
    pub phone: String,
    pub status: StaffStatus,
    pub performance: PerformanceRating,
    #[serde(flatten)]
    pub meta: EntityMetadata,
}

impl CsvExportable for StaffMember {
    fn headers() -> Vec<&'static str> {
        vec![
            "Employee ID",
            "Name",
            "Role",
            "Department",
            "Join Date",
            "Salary",
            "Email",
            "Phone",
            "Status",
            "Performance",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.employee_id.clone(),
            self.name.clone(),
            self.role.clone(),
            self.department.clone(),
            self.join_date.to_string(),
            self.salary.to_string(),
            self.email.clone(),
            self.phone.clone(),
            self.status.label().to_string(),
            self.performance.label().to_string(),
        ]
    }
}

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffForm {
    pub employee_id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub salary: String,
    pub email: String,
    pub phone: String,
}

impl StaffForm {
    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.employee_id, "Employee ID")?;
        require_text(&self.name, "Name")?;
        require_text(&self.role, "Role")?;
        parse_f64_or_zero(&self.salary, "Salary")?;
        if !self.email.trim().is_empty() {
            validate_email(&self.email)?;
        }
        Ok(())
    }

    /// Duplicate employee-id check against the directory.
    pub fn check_unique_employee_id(&self, items: &[StaffMember]) -> Result<(), String> {
        let id = self.employee_id.trim().to_lowercase();
        if items.iter().any(|s| s.employee_id.to_lowercase() == id) {
            return Err("Employee ID already exists. Please use a different ID.".to_string());
        }
        Ok(())
    }

    /// Build the member; blanks get directory defaults (department
    /// "General", a generated company email, "Not provided" phone).
    pub fn build(&self, join_date: NaiveDate) -> Result<StaffMember, String> {
        self.validate()?;
        let employee_id = require_text(&self.employee_id, "Employee ID")?;
        Ok(StaffMember {
            id: RecordId::generate(),
            email: optional_text(&self.email)
                .unwrap_or_else(|| format!("{}@dbrl.com", employee_id.to_lowercase())),
            employee_id,
            name: require_text(&self.name, "Name")?,
            role: require_text(&self.role, "Role")?,
            department: optional_text(&self.department).unwrap_or_else(|| "General".to_string()),
            join_date,
            salary: parse_f64_or_zero(&self.salary, "Salary")?,
            phone: optional_text(&self.phone).unwrap_or_else(|| "Not provided".to_string()),
            status: StaffStatus::Active,
            performance: PerformanceRating::Good,
            meta: EntityMetadata::new(),
        })
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Head counts per department, insertion-ordered.
pub fn department_stats(items: &[StaffMember]) -> Vec<(String, usize)> {
    let mut stats: Vec<(String, usize)> = Vec::new();
    for member in items {
        match stats.iter_mut().find(|(d, _)| *d == member.department) {
            Some((_, count)) => *count += 1,
            None => stats.push((member.department.clone(), 1)),
        }
    }
    stats
}

/// Head counts per performance rating.
pub fn performance_stats(items: &[StaffMember]) -> Vec<(PerformanceRating, usize)> {
    let mut stats: Vec<(PerformanceRating, usize)> = Vec::new();
    for member in items {
        match stats.iter_mut().find(|(p, _)| *p == member.performance) {
            Some((_, count)) => *count += 1,
            None => stats.push((member.performance, 1)),
        }
    }
    stats
}

pub fn active_count(items: &[StaffMember]) -> usize {
    items
        .iter()
        .filter(|s| s.status == StaffStatus::Active)
        .count()
}

// ============================================================================
// Demo seeds
// ============================================================================

pub fn demo_records() -> Vec<StaffMember> {
    fn seed(
        id: &str,
        employee_id: &str,
        name: &str,
        role: &str,
        department: &str,
        join_date: &str,
        salary: f64,
        email: &str,
        phone: &str,
        performance: PerformanceRating,
    ) -> StaffMember {
        StaffMember {
            id: RecordId::new(id),
            employee_id: employee_id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            department: department.to_string(),
            join_date: NaiveDate::parse_from_str(join_date, "%Y-%m-%d").expect("seed date"),
            salary,
            email: email.to_string(),
            phone: phone.to_string(),
            status: StaffStatus::Active,
            performance,
            meta: EntityMetadata::new(),
        }
    }

    vec![
        seed("1", "EMP001", "John Doe", "Production Manager", "Production", "2023-01-15", 45000.0, "john.doe@dbrl.com", "+91 9876543210", PerformanceRating::Excellent),
        seed("2", "EMP002", "Jane Smith", "Quality Control Specialist", "Quality Control", "2023-03-20", 35000.0, "jane.smith@dbrl.com", "+91 9876543211", PerformanceRating::Good),
        seed("3", "EMP003", "Mike Johnson", "Packaging Supervisor", "Packaging", "2023-06-10", 30000.0, "mike.johnson@dbrl.com", "+91 9876543212", PerformanceRating::Good),
        seed("4", "EMP004", "Sarah Wilson", "HR Executive", "Administration", "2023-02-28", 40000.0, "sarah.wilson@dbrl.com", "+91 9876543213", PerformanceRating::Excellent),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn duplicate_employee_id_is_rejected() {
        let items = demo_records();
        let form = StaffForm {
            employee_id: "emp001".to_string(),
            name: "Someone Else".to_string(),
            role: "Operator".to_string(),
            ..Default::default()
        };
        assert!(form.check_unique_employee_id(&items).is_err());
    }

    #[test]
    fn invalid_email_blocks_submission() {
        let mut form = StaffForm {
            employee_id: "EMP005".to_string(),
            name: "Asha Rao".to_string(),
            role: "Operator".to_string(),
            email: "asha.rao".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_err());
        form.email = "asha.rao@dbrl.com".to_string();
        assert!(form.validate().is_ok());
        form.email = String::new();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn build_fills_directory_defaults() {
        let form = StaffForm {
            employee_id: "EMP005".to_string(),
            name: "Asha Rao".to_string(),
            role: "Operator".to_string(),
            ..Default::default()
        };
        let member = form.build(d("2024-01-17")).unwrap();
        assert_eq!(member.department, "General");
        assert_eq!(member.email, "emp005@dbrl.com");
        assert_eq!(member.phone, "Not provided");
        assert_eq!(member.status, StaffStatus::Active);
        assert_eq!(member.performance, PerformanceRating::Good);
        assert_eq!(member.salary, 0.0);
    }

    #[test]
    fn department_and_performance_breakdowns() {
        let items = demo_records();
        let departments = department_stats(&items);
        assert_eq!(departments.len(), 4);
        assert_eq!(departments[0], ("Production".to_string(), 1));

        let ratings = performance_stats(&items);
        assert_eq!(ratings.len(), 2);
        let excellent = ratings
            .iter()
            .find(|(p, _)| *p == PerformanceRating::Excellent)
            .unwrap();
        assert_eq!(excellent.1, 2);

        assert_eq!(active_count(&items), 4);
    }
}
