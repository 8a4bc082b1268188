use serde::{Deserialize, Serialize};

use crate::domain::common::forms::{
    parse_f64_or_zero, parse_positive_f64, parse_u32_or_zero, require_text,
};
use crate::domain::common::{EntityMetadata, RecordId};
use crate::shared::export::CsvExportable;

// ============================================================================
// Record
// ============================================================================

pub const DEPARTMENTS: [&str; 6] = [
    "Production",
    "Quality Control",
    "Packaging",
    "Administration",
    "Sales",
    "Marketing",
];

/// One employee's monthly payroll line.
///
/// `gross_salary`/`net_salary` are derived; call [`PayrollEntry::recalculate`]
/// (or [`recalculate_all`]) after any input field changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollEntry {
    pub id: RecordId,
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub base_salary: f64,
    pub days_worked: u32,
    pub total_days: u32,
    pub overtime_hours: u32,
    pub overtime_rate: f64,
    pub deductions: f64,
    pub gross_salary: f64,
    pub net_salary: f64,
    #[serde(flatten)]
    pub meta: EntityMetadata,
}

impl PayrollEntry {
    /// Recompute the derived salary fields:
    /// earned = base / total_days × days_worked, plus overtime, minus
    /// deductions; both results rounded to whole rupees.
    pub fn recalculate(&mut self) {
        let total_days = if self.total_days == 0 { 30 } else { self.total_days };
        let daily_salary = self.base_salary / total_days as f64;
        let earned_salary = daily_salary * self.days_worked as f64;
        let overtime_pay = self.overtime_hours as f64 * self.overtime_rate;
        let gross = earned_salary + overtime_pay;
        self.gross_salary = gross.round();
        self.net_salary = (gross - self.deductions).round();
    }
}

pub fn recalculate_all(items: &mut [PayrollEntry]) {
    for entry in items {
        entry.recalculate();
    }
}

impl CsvExportable for PayrollEntry {
    fn headers() -> Vec<&'static str> {
        vec![
            "Employee ID",
            "Employee Name",
            "Department",
            "Base Salary",
            "Days Worked",
            "Overtime Hours",
            "Gross Salary",
            "Deductions",
            "Net Salary",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.employee_id.clone(),
            self.employee_name.clone(),
            self.department.clone(),
            self.base_salary.to_string(),
            format!("{}/{}", self.days_worked, self.total_days),
            self.overtime_hours.to_string(),
            self.gross_salary.to_string(),
            self.deductions.to_string(),
            self.net_salary.to_string(),
        ]
    }
}

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollForm {
    pub id: Option<RecordId>,
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub base_salary: String,
    pub days_worked: String,
    pub total_days: String,
    pub overtime_hours: String,
    pub overtime_rate: String,
    pub deductions: String,
}

impl Default for PayrollForm {
    fn default() -> Self {
        Self {
            id: None,
            employee_id: String::new(),
            employee_name: String::new(),
            department: String::new(),
            base_salary: String::new(),
            days_worked: String::new(),
            total_days: "30".to_string(),
            overtime_hours: String::new(),
            overtime_rate: String::new(),
            deductions: String::new(),
        }
    }
}

impl PayrollForm {
    pub fn from_record(record: &PayrollEntry) -> Self {
        Self {
            id: Some(record.id.clone()),
            employee_id: record.employee_id.clone(),
            employee_name: record.employee_name.clone(),
            department: record.department.clone(),
            base_salary: record.base_salary.to_string(),
            days_worked: record.days_worked.to_string(),
            total_days: record.total_days.to_string(),
            overtime_hours: record.overtime_hours.to_string(),
            overtime_rate: record.overtime_rate.to_string(),
            deductions: record.deductions.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.employee_id, "Employee ID")?;
        require_text(&self.employee_name, "Employee name")?;
        require_text(&self.department, "Department")?;
        parse_positive_f64(&self.base_salary, "Base salary")?;
        let days_worked = parse_u32_or_zero(&self.days_worked, "Days worked")?;
        if days_worked > 31 {
            return Err("Days worked cannot exceed 31".to_string());
        }
        parse_u32_or_zero(&self.total_days, "Total days")?;
        parse_u32_or_zero(&self.overtime_hours, "Overtime hours")?;
        parse_f64_or_zero(&self.overtime_rate, "Overtime rate")?;
        parse_f64_or_zero(&self.deductions, "Deductions")?;
        Ok(())
    }

    pub fn build(&self) -> Result<PayrollEntry, String> {
        self.validate()?;
        let mut entry = PayrollEntry {
            id: RecordId::generate(),
            employee_id: require_text(&self.employee_id, "Employee ID")?,
            employee_name: require_text(&self.employee_name, "Employee name")?,
            department: require_text(&self.department, "Department")?,
            base_salary: parse_positive_f64(&self.base_salary, "Base salary")?,
            days_worked: parse_u32_or_zero(&self.days_worked, "Days worked")?,
            total_days: parse_total_days(&self.total_days)?,
            overtime_hours: parse_u32_or_zero(&self.overtime_hours, "Overtime hours")?,
            overtime_rate: parse_f64_or_zero(&self.overtime_rate, "Overtime rate")?,
            deductions: parse_f64_or_zero(&self.deductions, "Deductions")?,
            gross_salary: 0.0,
            net_salary: 0.0,
            meta: EntityMetadata::new(),
        };
        entry.recalculate();
        Ok(entry)
    }

    pub fn apply(&self, record: &mut PayrollEntry) -> Result<(), String> {
        self.validate()?;
        record.employee_id = require_text(&self.employee_id, "Employee ID")?;
        record.employee_name = require_text(&self.employee_name, "Employee name")?;
        record.department = require_text(&self.department, "Department")?;
        record.base_salary = parse_positive_f64(&self.base_salary, "Base salary")?;
        record.days_worked = parse_u32_or_zero(&self.days_worked, "Days worked")?;
        record.total_days = parse_total_days(&self.total_days)?;
        record.overtime_hours = parse_u32_or_zero(&self.overtime_hours, "Overtime hours")?;
        record.overtime_rate = parse_f64_or_zero(&self.overtime_rate, "Overtime rate")?;
        record.deductions = parse_f64_or_zero(&self.deductions, "Deductions")?;
        record.recalculate();
        record.meta.touch();
        Ok(())
    }
}

fn parse_total_days(raw: &str) -> Result<u32, String> {
    let value = parse_u32_or_zero(raw, "Total days")?;
    Ok(if value == 0 { 30 } else { value })
}

// ============================================================================
// Summary & reports
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PayrollSummary {
    pub employees: usize,
    /// Sum of net salaries.
    pub total_payroll: f64,
    /// Rounded net salary per employee.
    pub average_salary: f64,
}

pub fn summarize(items: &[PayrollEntry]) -> PayrollSummary {
    let total: f64 = items.iter().map(|e| e.net_salary).sum();
    PayrollSummary {
        employees: items.len(),
        total_payroll: total,
        average_salary: if items.is_empty() || total <= 0.0 {
            0.0
        } else {
            (total / items.len() as f64).round()
        },
    }
}

/// Department slice of the payroll breakdown card.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentShare {
    pub department: String,
    pub employees: usize,
    pub total_net: f64,
    /// Share of the total payroll, percent.
    pub share: f64,
}

pub fn department_breakdown(items: &[PayrollEntry]) -> Vec<DepartmentShare> {
    let total: f64 = items.iter().map(|e| e.net_salary).sum();
    let mut shares: Vec<DepartmentShare> = Vec::new();
    for entry in items {
        match shares.iter_mut().find(|s| s.department == entry.department) {
            Some(s) => {
                s.employees += 1;
                s.total_net += entry.net_salary;
            }
            None => shares.push(DepartmentShare {
                department: entry.department.clone(),
                employees: 1,
                total_net: entry.net_salary,
                share: 0.0,
            }),
        }
    }
    for share in &mut shares {
        share.share = if total == 0.0 {
            0.0
        } else {
            share.total_net / total * 100.0
        };
    }
    shares
}

/// Basic income-tax exemption used by the estimated tax report.
pub const BASIC_EXEMPTION: f64 = 250_000.0;
/// Flat rate applied above the exemption.
pub const FLAT_TAX_RATE: f64 = 0.10;

/// One line of the estimated tax report CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxReportLine {
    pub employee_id: String,
    pub employee_name: String,
    pub annual_salary: f64,
    pub taxable_income: f64,
    pub estimated_tax: f64,
}

impl CsvExportable for TaxReportLine {
    fn headers() -> Vec<&'static str> {
        vec!["Employee ID", "Employee Name", "Annual Salary", "Taxable Income", "Estimated Tax"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.employee_id.clone(),
            self.employee_name.clone(),
            self.annual_salary.to_string(),
            self.taxable_income.to_string(),
            self.estimated_tax.to_string(),
        ]
    }
}

/// Annualise net salaries and apply the flat estimate above the basic
/// exemption.
pub fn tax_report(items: &[PayrollEntry]) -> Vec<TaxReportLine> {
    items
        .iter()
        .map(|entry| {
            let annual = entry.net_salary * 12.0;
            let taxable = (annual - BASIC_EXEMPTION).max(0.0);
            TaxReportLine {
                employee_id: entry.employee_id.clone(),
                employee_name: entry.employee_name.clone(),
                annual_salary: annual,
                taxable_income: taxable,
                estimated_tax: (taxable * FLAT_TAX_RATE).round(),
            }
        })
        .collect()
}

// ============================================================================
// Demo seeds
// ============================================================================

pub fn demo_records() -> Vec<PayrollEntry> {
    fn seed(
        id: &str,
        employee_id: &str,
        employee_name: &str,
        department: &str,
        base_salary: f64,
        days_worked: u32,
        overtime_hours: u32,
        overtime_rate: f64,
        deductions: f64,
    ) -> PayrollEntry {
        let mut entry = PayrollEntry {
            id: RecordId::new(id),
            employee_id: employee_id.to_string(),
            employee_name: employee_name.to_string(),
            department: department.to_string(),
            base_salary,
            days_worked,
            total_days: 30,
            overtime_hours,
            overtime_rate,
            deductions,
            gross_salary: 0.0,
            net_salary: 0.0,
            meta: EntityMetadata::new(),
        };
        entry.recalculate();
        entry
    }

    vec![
        seed("1", "EMP001", "John Doe", "Production", 25000.0, 26, 8, 200.0, 2000.0),
        seed("2", "EMP002", "Jane Smith", "Quality Control", 30000.0, 28, 4, 250.0, 2500.0),
        seed("3", "EMP003", "Mike Johnson", "Packaging", 22000.0, 24, 0, 180.0, 1800.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_formula_matches_hand_computation() {
        let mut entry = demo_records().remove(0);
        entry.recalculate();
        // 25000 / 30 * 26 + 8 * 200 = 21666.67 + 1600 = 23266.67
        assert_eq!(entry.gross_salary, 23267.0);
        assert_eq!(entry.net_salary, 21267.0);
    }

    #[test]
    fn zero_total_days_falls_back_to_thirty() {
        let mut entry = demo_records().remove(2);
        entry.total_days = 0;
        entry.recalculate();
        // 22000 / 30 * 24 = 17600
        assert_eq!(entry.gross_salary, 17600.0);
        assert_eq!(entry.net_salary, 15800.0);
    }

    #[test]
    fn form_validation_rules() {
        let mut form = PayrollForm {
            employee_id: "EMP009".to_string(),
            employee_name: "Ravi Kumar".to_string(),
            department: "Sales".to_string(),
            base_salary: "28000".to_string(),
            days_worked: "26".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());

        form.days_worked = "32".to_string();
        assert!(form.validate().is_err());
        form.days_worked = "26".to_string();
        form.base_salary = "0".to_string();
        assert!(form.validate().is_err());
        form.base_salary = "28000".to_string();
        form.department = String::new();
        assert!(form.validate().is_err());
    }

    #[test]
    fn build_computes_salaries_immediately() {
        let form = PayrollForm {
            employee_id: "EMP009".to_string(),
            employee_name: "Ravi Kumar".to_string(),
            department: "Sales".to_string(),
            base_salary: "30000".to_string(),
            days_worked: "30".to_string(),
            total_days: "30".to_string(),
            overtime_hours: "2".to_string(),
            overtime_rate: "100".to_string(),
            deductions: "500".to_string(),
            ..Default::default()
        };
        let entry = form.build().unwrap();
        assert_eq!(entry.gross_salary, 30200.0);
        assert_eq!(entry.net_salary, 29700.0);
    }

    #[test]
    fn summary_totals_and_average() {
        let items = demo_records();
        let summary = summarize(&items);
        assert_eq!(summary.employees, 3);
        let expected_total: f64 = items.iter().map(|e| e.net_salary).sum();
        assert_eq!(summary.total_payroll, expected_total);
        assert_eq!(summary.average_salary, (expected_total / 3.0).round());
    }

    #[test]
    fn department_shares_sum_to_hundred_percent() {
        let shares = department_breakdown(&demo_records());
        assert_eq!(shares.len(), 3);
        let total_share: f64 = shares.iter().map(|s| s.share).sum();
        assert!((total_share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn tax_report_applies_exemption_and_flat_rate() {
        let mut entry = demo_records().remove(0);
        entry.net_salary = 30000.0;
        let report = tax_report(&[entry]);
        assert_eq!(report[0].annual_salary, 360000.0);
        assert_eq!(report[0].taxable_income, 110000.0);
        assert_eq!(report[0].estimated_tax, 11000.0);
    }

    #[test]
    fn tax_report_never_goes_negative() {
        let mut entry = demo_records().remove(2);
        entry.net_salary = 15000.0;
        let report = tax_report(&[entry]);
        assert_eq!(report[0].taxable_income, 0.0);
        assert_eq!(report[0].estimated_tax, 0.0);
    }
}
