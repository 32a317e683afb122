//! Project-aware fallback mapping generator.
//!
//! When the mapping endpoint is unreachable the generator builds field
//! mappings from the selected project's own record, so the degraded preview
//! shows that project's contract number, contractor and resident engineer
//! rather than generic placeholders.

use chrono::Utc;
use domain::models::mapping::{FieldDataType, FormMapping, MappingField, MappingFields};
use domain::models::project::Project;

use super::forms::pdf_filename;

/// Derives the comptroller contract number from a project id.
///
/// `P-2024-001` becomes `C-024001`: the digits of the id, last six, zero
/// padded.
pub fn contract_number_for(project_id: &str) -> String {
    let digits: String = project_id.chars().filter(char::is_ascii_digit).collect();
    let tail = &digits[digits.len().saturating_sub(6)..];
    format!("C-{:0>6}", tail)
}

fn field(
    map_id: String,
    label: &str,
    value: String,
    source_column: &str,
    data_type: FieldDataType,
) -> MappingField {
    MappingField {
        map_id,
        label: label.to_string(),
        value,
        source_column: source_column.to_string(),
        data_type,
    }
}

/// Builds mappings for the requested forms in the context of a project.
pub fn mappings_for(form_ids: &[String], project: Option<&Project>) -> Vec<FormMapping> {
    form_ids
        .iter()
        .map(|form_id| {
            let mut fields = Vec::new();
            let mut push = |label: &str, value: String, source: &str, dt: FieldDataType| {
                let map_id = format!("{}-f{:02}", form_id, fields.len() + 1);
                fields.push(field(map_id, label, value, source, dt));
            };

            match project {
                Some(p) => {
                    push("ContractNo", contract_number_for(&p.id), "id", FieldDataType::Text);
                    push("ParkName", p.park_name.clone(), "park_name", FieldDataType::Text);
                    push(
                        "ProjectDescription",
                        p.description.clone(),
                        "description",
                        FieldDataType::Text,
                    );
                    push(
                        "Contractor",
                        p.contractor.clone(),
                        "contractor",
                        FieldDataType::Text,
                    );
                    push(
                        "ResidentEngineer",
                        p.resident_engineer.clone(),
                        "resident_engineer",
                        FieldDataType::Text,
                    );
                    push(
                        "ContractAmount",
                        format!("{:.2}", p.funding_amount),
                        "funding_amount",
                        FieldDataType::Currency,
                    );
                }
                None => {
                    push("ContractNo", "TBD".to_string(), "", FieldDataType::Text);
                    push("ParkName", "TBD".to_string(), "", FieldDataType::Text);
                    push("ProjectDescription", String::new(), "", FieldDataType::Text);
                    push("Contractor", "TBD".to_string(), "", FieldDataType::Text);
                    push("ResidentEngineer", "TBD".to_string(), "", FieldDataType::Text);
                    push("ContractAmount", "0.00".to_string(), "", FieldDataType::Currency);
                }
            }
            push(
                "PreparedDate",
                Utc::now().format("%Y-%m-%d").to_string(),
                "",
                FieldDataType::Date,
            );

            FormMapping {
                form_id: form_id.clone(),
                pdf_filename: pdf_filename(form_id),
                fields: MappingFields::from(fields),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::projects;

    #[test]
    fn test_contract_number_derivation() {
        assert_eq!(contract_number_for("P-2024-001"), "C-024001");
        assert_eq!(contract_number_for("P-2023-112"), "C-023112");
        assert_eq!(contract_number_for("P-7"), "C-000007");
    }

    #[test]
    fn test_mappings_reflect_the_selected_project() {
        let catalog = projects::dataset();
        let project_a = &catalog[0];
        let project_b = &catalog[2];
        let forms = vec!["FORM-003".to_string()];

        let a = mappings_for(&forms, Some(project_a));
        let b = mappings_for(&forms, Some(project_b));

        assert_ne!(
            a[0].fields.value_of("ContractNo"),
            b[0].fields.value_of("ContractNo")
        );
        assert_ne!(
            a[0].fields.value_of("ResidentEngineer"),
            b[0].fields.value_of("ResidentEngineer")
        );
        assert_eq!(a[0].fields.value_of("ContractNo"), Some("C-024001"));
    }

    #[test]
    fn test_mappings_without_project_are_placeholders() {
        let forms = vec!["FORM-001".to_string()];
        let mappings = mappings_for(&forms, None);
        assert_eq!(mappings[0].fields.value_of("ContractNo"), Some("TBD"));
        assert_eq!(mappings[0].pdf_filename, "work_permit_application.pdf");
    }

    #[test]
    fn test_one_mapping_per_requested_form() {
        let forms = vec!["FORM-001".to_string(), "FORM-005".to_string()];
        let mappings = mappings_for(&forms, None);
        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings[1].form_id, "FORM-005");
    }
}
