use super::*;
use crate::net::types::{
    LabTestStatus, LineItem, Medication, Patient, Payment, PersonRef, Prescription,
    PrescriptionStatus, Role, ServiceItem,
};

fn sample_bill() -> Bill {
    Bill {
        id: "64af0123deadbeef".to_owned(),
        patient: Some(Patient {
            id: "p1".to_owned(),
            uhid: "UH-1001".to_owned(),
            first_name: "Ravi".to_owned(),
            last_name: "Kumar".to_owned(),
            date_of_birth: None,
            gender: None,
            phone: None,
            has_portal_account: false,
        }),
        line_items: vec![LineItem {
            id: "li1".to_owned(),
            description: "X-Ray".to_owned(),
            quantity: 2.0,
            cost: 75.0,
            service: Some(ServiceItem {
                id: "svc1".to_owned(),
                name: "Radiology".to_owned(),
                category: "Imaging".to_owned(),
                cost: 75.0,
            }),
        }],
        payment_history: vec![Payment {
            amount: 100.0,
            payment_method: "Cash".to_owned(),
            payment_date: "2026-08-20".to_owned(),
            recorded_by: None,
        }],
        total_amount: 150.0,
        amount_paid: 100.0,
        status: "Partially Paid".to_owned(),
        created_at: Some("2026-08-19".to_owned()),
    }
}

#[test]
fn invoice_carries_totals_and_line_items() {
    let doc = invoice_document(&sample_bill());
    assert_eq!(doc.title, "INVOICE");
    assert!(doc.meta.contains(&("Bill To".to_owned(), "Ravi Kumar".to_owned())));
    assert!(doc.meta.contains(&("Invoice #".to_owned(), "ADBEEF".to_owned())));

    let charges = &doc.tables[0];
    assert_eq!(charges.rows[0][0], "X-Ray");
    assert_eq!(charges.rows[0][4], "$150.00");

    assert!(doc.summary.contains(&("Subtotal".to_owned(), "$150.00".to_owned())));
    assert!(doc.summary.contains(&("Amount Paid".to_owned(), "$100.00".to_owned())));
    assert!(doc.summary.contains(&("Balance Due".to_owned(), "$50.00".to_owned())));
}

#[test]
fn invoice_marks_deleted_patient_and_recorder() {
    let mut bill = sample_bill();
    bill.patient = None;
    let doc = invoice_document(&bill);
    assert!(doc.meta.contains(&("Bill To".to_owned(), "Record deleted".to_owned())));
    // recorded_by was already None in the sample
    assert_eq!(doc.tables[1].rows[0][2], "Record deleted");
}

#[test]
fn rendered_invoice_contains_hospital_header() {
    let text = invoice_document(&sample_bill()).render_text();
    assert!(text.starts_with(HOSPITAL_NAME));
    assert!(text.contains("Balance Due: $50.00"));
    assert!(text.contains("X-Ray | Imaging | 2 | $75.00 | $150.00"));
}

#[test]
fn prescription_lists_all_medications() {
    let prescription = Prescription {
        id: "rx1".to_owned(),
        patient: Some(PersonRef {
            id: "p1".to_owned(),
            first_name: "Ravi".to_owned(),
            last_name: "Kumar".to_owned(),
            uhid: Some("UH-1001".to_owned()),
            role: None,
        }),
        doctor: Some(PersonRef {
            id: "d1".to_owned(),
            first_name: "Asha".to_owned(),
            last_name: "Verma".to_owned(),
            uhid: None,
            role: Some(Role::Doctor),
        }),
        medications: vec![
            Medication {
                name: "Paracetamol".to_owned(),
                dosage: "500mg".to_owned(),
                frequency: "TID".to_owned(),
                duration: "5 days".to_owned(),
            },
            Medication {
                name: "Amoxicillin".to_owned(),
                dosage: "250mg".to_owned(),
                frequency: "BID".to_owned(),
                duration: "7 days".to_owned(),
            },
        ],
        status: PrescriptionStatus::Pending,
        created_at: Some("2026-08-21".to_owned()),
    };

    let doc = prescription_document(&prescription);
    assert!(doc.meta.contains(&("Prescribed By".to_owned(), "Dr. Asha Verma".to_owned())));
    assert_eq!(doc.tables[0].rows.len(), 2);
    assert_eq!(doc.tables[0].rows[1][0], "Amoxicillin");
}

#[test]
fn lab_report_shows_result_or_pending() {
    let mut test = LabTest {
        id: "lt1".to_owned(),
        patient: None,
        doctor: None,
        test_name: "CBC".to_owned(),
        status: LabTestStatus::Completed,
        result: Some("Within normal limits".to_owned()),
        created_at: None,
        completed_at: Some("2026-08-22".to_owned()),
    };
    let doc = lab_report_document(&test);
    assert!(doc.summary.contains(&("Result".to_owned(), "Within normal limits".to_owned())));
    assert!(doc.meta.contains(&("Patient".to_owned(), "Record deleted".to_owned())));

    test.result = None;
    let doc = lab_report_document(&test);
    assert!(doc.summary.contains(&("Result".to_owned(), "Pending".to_owned())));
}
