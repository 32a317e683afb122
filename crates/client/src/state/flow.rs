//! Form generation flow state.
//!
//! Tracks the wizard's selections across its three steps: the chosen
//! project, the checked forms, and any per-field value overrides made on
//! the preview. Clones share state so the shell and the guard see the same
//! flow.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use domain::models::project::Project;

#[derive(Default)]
struct FlowInner {
    selected_project: Option<Project>,
    selected_forms: Vec<String>,
    /// form id -> (field label -> overridden value)
    field_edits: HashMap<String, HashMap<String, String>>,
}

#[derive(Clone, Default)]
pub struct FormFlowState {
    inner: Arc<RwLock<FlowInner>>,
}

impl FormFlowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_project(&self, project: Project) {
        if let Ok(mut inner) = self.inner.write() {
            inner.selected_project = Some(project);
        }
    }

    pub fn selected_project(&self) -> Option<Project> {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.selected_project.clone())
    }

    /// Checks or unchecks a form. Unchecking also drops its field edits.
    pub fn toggle_form(&self, form_id: &str) {
        if let Ok(mut inner) = self.inner.write() {
            if let Some(pos) = inner.selected_forms.iter().position(|f| f == form_id) {
                inner.selected_forms.remove(pos);
                inner.field_edits.remove(form_id);
            } else {
                inner.selected_forms.push(form_id.to_string());
            }
        }
    }

    pub fn selected_forms(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|inner| inner.selected_forms.clone())
            .unwrap_or_default()
    }

    /// Records a preview-step override for one field of one form.
    pub fn edit_field(&self, form_id: &str, label: &str, value: &str) {
        if let Ok(mut inner) = self.inner.write() {
            inner
                .field_edits
                .entry(form_id.to_string())
                .or_default()
                .insert(label.to_string(), value.to_string());
        }
    }

    pub fn field_edit(&self, form_id: &str, label: &str) -> Option<String> {
        self.inner.read().ok().and_then(|inner| {
            inner
                .field_edits
                .get(form_id)
                .and_then(|edits| edits.get(label).cloned())
        })
    }

    /// Whether leaving the flow would lose work.
    pub fn is_dirty(&self) -> bool {
        self.inner
            .read()
            .map(|inner| {
                inner.selected_project.is_some()
                    || !inner.selected_forms.is_empty()
                    || !inner.field_edits.is_empty()
            })
            .unwrap_or(false)
    }

    /// Wipes all selections and edits.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            *inner = FlowInner::default();
        }
    }
}
