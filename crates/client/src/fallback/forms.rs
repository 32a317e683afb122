//! Embedded form catalog.

use domain::models::form::FormItem;

fn form(
    id: &str,
    title: &str,
    category: &str,
    template_type: &str,
    field_count: u32,
    version: &str,
) -> FormItem {
    FormItem {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        template_type: template_type.to_string(),
        field_count,
        version: version.to_string(),
    }
}

/// The embedded form catalog.
pub fn dataset() -> Vec<FormItem> {
    vec![
        form(
            "FORM-001",
            "Work Permit Application",
            "Permits",
            "AcroForm",
            24,
            "2.1",
        ),
        form(
            "FORM-002",
            "Tree Protection Permit",
            "Permits",
            "AcroForm",
            18,
            "1.4",
        ),
        form(
            "FORM-003",
            "Change Order Request",
            "Change Orders",
            "AcroForm",
            31,
            "3.0",
        ),
        form(
            "FORM-004",
            "Daily Inspection Checklist",
            "Inspections",
            "XFA",
            42,
            "1.0",
        ),
        form(
            "FORM-005",
            "Final Inspection Report",
            "Inspections",
            "AcroForm",
            37,
            "2.3",
        ),
        form(
            "FORM-006",
            "Sidewalk Closure Permit",
            "Permits",
            "AcroForm",
            16,
            "1.1",
        ),
        form(
            "FORM-007",
            "Substantial Completion Certificate",
            "Closeout",
            "AcroForm",
            21,
            "1.8",
        ),
        form(
            "FORM-008",
            "Payment Requisition Cover Sheet",
            "Payments",
            "AcroForm",
            27,
            "2.0",
        ),
    ]
}

/// Template PDF filename for a catalog entry.
pub fn pdf_filename(form_id: &str) -> String {
    match form_id {
        "FORM-001" => "work_permit_application.pdf".to_string(),
        "FORM-002" => "tree_protection_permit.pdf".to_string(),
        "FORM-003" => "change_order_request.pdf".to_string(),
        "FORM-004" => "daily_inspection_checklist.pdf".to_string(),
        "FORM-005" => "final_inspection_report.pdf".to_string(),
        "FORM-006" => "sidewalk_closure_permit.pdf".to_string(),
        "FORM-007" => "substantial_completion_certificate.pdf".to_string(),
        "FORM-008" => "payment_requisition_cover.pdf".to_string(),
        other => format!("{}.pdf", other.to_lowercase()),
    }
}
