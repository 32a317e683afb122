//! Form field mapping models.
//!
//! A mapping is produced per (form, project) pair and determines the values
//! written into the filled PDF. The `fields` payload arrives in one of two
//! shapes: the current ordered array of typed entries, or the legacy flat
//! `label -> value` object. Both are normalized into the canonical typed
//! array at the deserialization boundary so no downstream consumer ever
//! branches on shape.

use serde::de::{Deserialize, Deserializer};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Data type of a mapped PDF field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldDataType {
    #[default]
    Text,
    Number,
    Date,
    Currency,
}

impl FromStr for FieldDataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(FieldDataType::Text),
            "number" => Ok(FieldDataType::Number),
            "date" => Ok(FieldDataType::Date),
            "currency" => Ok(FieldDataType::Currency),
            _ => Err(format!("Unknown field data type: {}", s)),
        }
    }
}

impl std::fmt::Display for FieldDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldDataType::Text => write!(f, "text"),
            FieldDataType::Number => write!(f, "number"),
            FieldDataType::Date => write!(f, "date"),
            FieldDataType::Currency => write!(f, "currency"),
        }
    }
}

/// One entry in a form field mapping.
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingField {
    pub map_id: String,
    /// PDF field label, e.g. `ContractNo`.
    pub label: String,
    /// Value to write into the PDF field.
    pub value: String,
    /// Source column in the project record this value came from.
    #[serde(default)]
    pub source_column: String,
    #[serde(default)]
    pub data_type: FieldDataType,
}

/// Canonical ordered field list, normalized from either wire shape.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MappingFields(pub Vec<MappingField>);

impl MappingFields {
    pub fn iter(&self) -> std::slice::Iter<'_, MappingField> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up a field value by label.
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

impl From<Vec<MappingField>> for MappingFields {
    fn from(fields: Vec<MappingField>) -> Self {
        Self(fields)
    }
}

/// Either wire shape of the `fields` payload.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawFields {
    Typed(Vec<MappingField>),
    /// Legacy flat object. BTreeMap keeps label ordering deterministic.
    Legacy(BTreeMap<String, JsonValue>),
}

impl<'de> Deserialize<'de> for MappingFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawFields::deserialize(deserializer)?;
        Ok(match raw {
            RawFields::Typed(fields) => MappingFields(fields),
            RawFields::Legacy(map) => MappingFields(
                map.into_iter()
                    .enumerate()
                    .map(|(idx, (label, value))| MappingField {
                        map_id: format!("legacy-{:02}", idx + 1),
                        label,
                        value: stringify(value),
                        source_column: String::new(),
                        data_type: FieldDataType::Text,
                    })
                    .collect(),
            ),
        })
    }
}

fn stringify(value: JsonValue) -> String {
    match value {
        JsonValue::String(s) => s,
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

/// Field mapping for one form, in the context of one project.
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormMapping {
    pub form_id: String,
    pub pdf_filename: String,
    pub fields: MappingFields,
}

/// Request body for `POST /cfg/form_field_mappings`.
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingRequest {
    pub form_ids: Vec<String>,
    pub project_id: Option<String>,
}

/// Response body for `POST /cfg/form_field_mappings`.
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingResponse {
    pub mappings: Vec<FormMapping>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_shape_preserves_order() {
        let json = r#"[
            {"mapId":"m2","label":"ParkName","value":"Riverside Park","sourceColumn":"park_name","dataType":"text"},
            {"mapId":"m1","label":"ContractNo","value":"C-024017","sourceColumn":"id","dataType":"text"}
        ]"#;
        let fields: MappingFields = serde_json::from_str(json).unwrap();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.0[0].label, "ParkName");
        assert_eq!(fields.0[1].label, "ContractNo");
        assert_eq!(fields.0[1].source_column, "id");
    }

    #[test]
    fn test_legacy_shape_normalizes_to_array() {
        let json = r#"{"ParkName":"Riverside Park","ContractNo":"C-024017","Amount":2450000}"#;
        let fields: MappingFields = serde_json::from_str(json).unwrap();

        // Legacy entries come out ordered by label.
        assert_eq!(fields.len(), 3);
        assert_eq!(fields.0[0].label, "Amount");
        assert_eq!(fields.0[0].value, "2450000");
        assert_eq!(fields.0[1].label, "ContractNo");
        assert_eq!(fields.0[2].label, "ParkName");
        assert_eq!(fields.0[0].map_id, "legacy-01");
        assert_eq!(fields.0[0].data_type, FieldDataType::Text);
        assert_eq!(fields.0[0].source_column, "");
    }

    #[test]
    fn test_legacy_null_value_becomes_empty() {
        let json = r#"{"Remarks":null}"#;
        let fields: MappingFields = serde_json::from_str(json).unwrap();
        assert_eq!(fields.0[0].value, "");
    }

    #[test]
    fn test_value_of() {
        let json = r#"{"ContractNo":"C-024017"}"#;
        let fields: MappingFields = serde_json::from_str(json).unwrap();
        assert_eq!(fields.value_of("ContractNo"), Some("C-024017"));
        assert_eq!(fields.value_of("Missing"), None);
    }

    #[test]
    fn test_serializes_as_typed_array() {
        let json = r#"{"ContractNo":"C-024017"}"#;
        let fields: MappingFields = serde_json::from_str(json).unwrap();
        let out = serde_json::to_string(&fields).unwrap();
        assert!(out.starts_with('['));
        assert!(out.contains("\"mapId\""));
    }

    #[test]
    fn test_form_mapping_with_either_shape() {
        let json = r#"{"formId":"FORM-003","pdfFilename":"change_order.pdf",
            "fields":{"ContractNo":"C-024017"}}"#;
        let mapping: FormMapping = serde_json::from_str(json).unwrap();
        assert_eq!(mapping.form_id, "FORM-003");
        assert_eq!(mapping.fields.len(), 1);
    }

    #[test]
    fn test_field_data_type_round_trip() {
        assert_eq!(
            FieldDataType::from_str("currency").unwrap(),
            FieldDataType::Currency
        );
        assert_eq!(FieldDataType::Date.to_string(), "date");
        assert!(FieldDataType::from_str("blob").is_err());
    }
}
