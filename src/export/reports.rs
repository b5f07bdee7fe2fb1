//! Report document builders: invoice, prescription, lab report, staff
//! report.
//!
//! Documents are built as structured data and rendered to a plain-text
//! artifact for download; the visual layout of the generated file is not
//! part of the contract, the content is.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use std::fmt::Write as _;

use crate::net::types::{Bill, LabTest, Prescription, StaffMember};

pub const HOSPITAL_NAME: &str = "Hopewell Hospital";
pub const HOSPITAL_ADDRESS: &str = "123 Health St, Wellness City";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportTable {
    pub title: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub meta: Vec<(String, String)>,
    pub tables: Vec<ReportTable>,
    pub summary: Vec<(String, String)>,
}

impl ReportDocument {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_owned(),
            ..Self::default()
        }
    }

    fn meta(mut self, label: &str, value: impl Into<String>) -> Self {
        self.meta.push((label.to_owned(), value.into()));
        self
    }

    fn summary_line(mut self, label: &str, value: impl Into<String>) -> Self {
        self.summary.push((label.to_owned(), value.into()));
        self
    }

    /// Render to the downloadable text artifact.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{HOSPITAL_NAME} — {HOSPITAL_ADDRESS}");
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "{}", "=".repeat(self.title.len().max(8)));
        for (label, value) in &self.meta {
            let _ = writeln!(out, "{label}: {value}");
        }
        for table in &self.tables {
            out.push('\n');
            if let Some(title) = &table.title {
                let _ = writeln!(out, "## {title}");
            }
            let _ = writeln!(out, "{}", table.headers.join(" | "));
            for row in &table.rows {
                let _ = writeln!(out, "{}", row.join(" | "));
            }
        }
        if !self.summary.is_empty() {
            out.push('\n');
            for (label, value) in &self.summary {
                let _ = writeln!(out, "{label}: {value}");
            }
        }
        out
    }
}

fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

fn person_or_deleted(person: Option<String>) -> String {
    person.unwrap_or_else(|| "Record deleted".to_owned())
}

/// Invoice for a bill: line items, payment history, and totals.
pub fn invoice_document(bill: &Bill) -> ReportDocument {
    let patient = bill.patient.as_ref();
    // Last six characters of the bill id, as on the printed invoice.
    let tail = bill.id.len().saturating_sub(6);
    let invoice_no = bill.id.get(tail..).unwrap_or(&bill.id).to_uppercase();

    let mut doc = ReportDocument::new("INVOICE")
        .meta(
            "Bill To",
            person_or_deleted(patient.map(|p| p.full_name())),
        )
        .meta(
            "Patient UHID",
            person_or_deleted(patient.map(|p| p.uhid.clone())),
        )
        .meta("Invoice #", invoice_no);
    if let Some(created) = &bill.created_at {
        doc = doc.meta("Date", created.clone());
    }

    doc.tables.push(ReportTable {
        title: Some("Charges".to_owned()),
        headers: ["Description", "Category", "Quantity", "Unit Cost", "Total"]
            .map(str::to_owned)
            .to_vec(),
        rows: bill
            .line_items
            .iter()
            .map(|item| {
                vec![
                    item.description.clone(),
                    item.service
                        .as_ref()
                        .map_or_else(|| "-".to_owned(), |s| s.category.clone()),
                    format!("{}", item.quantity),
                    money(item.cost),
                    money(item.cost * item.quantity),
                ]
            })
            .collect(),
    });

    doc.tables.push(ReportTable {
        title: Some("Payment History".to_owned()),
        headers: ["Date", "Payment Method", "Recorded By", "Amount Paid"]
            .map(str::to_owned)
            .to_vec(),
        rows: bill
            .payment_history
            .iter()
            .map(|p| {
                vec![
                    p.payment_date.clone(),
                    p.payment_method.clone(),
                    person_or_deleted(p.recorded_by.as_ref().map(|r| r.full_name())),
                    money(p.amount),
                ]
            })
            .collect(),
    });

    doc.summary_line("Subtotal", money(bill.total_amount))
        .summary_line("Amount Paid", money(bill.amount_paid))
        .summary_line("Balance Due", money(bill.balance_due()))
}

/// Prescription slip with the medication table.
pub fn prescription_document(prescription: &Prescription) -> ReportDocument {
    let mut doc = ReportDocument::new("PRESCRIPTION")
        .meta(
            "Patient",
            person_or_deleted(prescription.patient.as_ref().map(|p| p.full_name())),
        )
        .meta(
            "Prescribed By",
            person_or_deleted(
                prescription
                    .doctor
                    .as_ref()
                    .map(|d| format!("Dr. {}", d.full_name())),
            ),
        );
    if let Some(created) = &prescription.created_at {
        doc = doc.meta("Date", created.clone());
    }

    doc.tables.push(ReportTable {
        title: None,
        headers: ["Medication", "Dosage", "Frequency", "Duration"]
            .map(str::to_owned)
            .to_vec(),
        rows: prescription
            .medications
            .iter()
            .map(|m| {
                vec![
                    m.name.clone(),
                    m.dosage.clone(),
                    m.frequency.clone(),
                    m.duration.clone(),
                ]
            })
            .collect(),
    });
    doc
}

/// Completed lab test report.
pub fn lab_report_document(test: &LabTest) -> ReportDocument {
    let mut doc = ReportDocument::new("LAB REPORT")
        .meta(
            "Patient",
            person_or_deleted(test.patient.as_ref().map(|p| p.full_name())),
        )
        .meta(
            "Ordered By",
            person_or_deleted(test.doctor.as_ref().map(|d| format!("Dr. {}", d.full_name()))),
        )
        .meta("Test", test.test_name.clone());
    if let Some(completed) = &test.completed_at {
        doc = doc.meta("Completed", completed.clone());
    }
    doc.summary_line(
        "Result",
        test.result.clone().unwrap_or_else(|| "Pending".to_owned()),
    )
}

/// HR profile report for one staff member.
pub fn staff_report_document(staff: &StaffMember) -> ReportDocument {
    let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "N/A".to_owned());
    ReportDocument::new("STAFF REPORT")
        .meta("Name", staff.full_name())
        .meta("Role", staff.role.as_str())
        .meta("Email", staff.email.clone())
        .meta("Phone", opt(&staff.phone))
        .meta("Joining Date", opt(&staff.joining_date))
        .meta("Blood Group", opt(&staff.blood_group))
        .meta("Specialization", opt(&staff.specialization))
        .meta("Qualifications", opt(&staff.qualifications))
}
