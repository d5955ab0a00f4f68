//! Contract for the REST-backed grid panel kind.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell never looks inside grid rows. It only guarantees that a grid
//! descriptor is well formed before the panel registry accepts it, and it
//! knows how to turn a record into the add/edit/remove URLs the grid calls.
//! Record bodies are opaque JSON objects.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder substituted with the record id in URL patterns.
pub const ID_PLACEHOLDER: &str = "{0}";

/// One visible grid column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridColumn {
    pub header: String,
    /// Record field rendered in this column.
    pub data_index: String,
    pub width: u32,
}

impl GridColumn {
    #[must_use]
    pub fn new(header: &str, data_index: &str, width: u32) -> Self {
        Self { header: header.to_owned(), data_index: data_index.to_owned(), width }
    }
}

/// Everything a REST-backed grid needs to load and mutate its records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestGridConfig {
    /// URL the record list is loaded from.
    pub store_url: String,
    pub columns: Vec<GridColumn>,
    /// Record field holding the identity substituted into URL patterns.
    pub id_field: String,
    /// Record field matched by the search box.
    pub search_field: String,
    /// Identity of the edit form the grid opens for a record.
    pub edit_form_id: String,
    pub add_url: String,
    pub edit_url_pattern: String,
    pub remove_url_pattern: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid store url is empty")]
    MissingStore,
    #[error("grid has no columns")]
    NoColumns,
    #[error("grid {0} is empty")]
    MissingField(&'static str),
    #[error("grid {0} has no {{0}} placeholder")]
    MissingPlaceholder(&'static str),
    #[error("record has no usable `{0}` value")]
    MissingRecordId(String),
}

impl RestGridConfig {
    /// Grid over the server's groups collection.
    #[must_use]
    pub fn groups(rest_url: &str) -> Self {
        Self {
            store_url: format!("{rest_url}groups.json"),
            columns: vec![
                GridColumn::new("Name", "name", 200),
                GridColumn::new("Description", "description", 300),
                GridColumn::new("Type", "type", 80),
            ],
            id_field: "name".to_owned(),
            search_field: "name".to_owned(),
            edit_form_id: "groupEditForm".to_owned(),
            add_url: format!("{rest_url}groups.json"),
            edit_url_pattern: format!("{rest_url}groups/{ID_PLACEHOLDER}.json"),
            remove_url_pattern: format!("{rest_url}groups/{ID_PLACEHOLDER}.json"),
        }
    }

    /// Check the grid can actually perform every operation it exposes.
    ///
    /// # Errors
    ///
    /// Returns the first [`GridError`] found.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.store_url.trim().is_empty() {
            return Err(GridError::MissingStore);
        }
        if self.columns.is_empty() {
            return Err(GridError::NoColumns);
        }
        let required = [
            ("id field", &self.id_field),
            ("search field", &self.search_field),
            ("edit form id", &self.edit_form_id),
            ("add url", &self.add_url),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(GridError::MissingField(name));
            }
        }
        if !self.edit_url_pattern.contains(ID_PLACEHOLDER) {
            return Err(GridError::MissingPlaceholder("edit url pattern"));
        }
        if !self.remove_url_pattern.contains(ID_PLACEHOLDER) {
            return Err(GridError::MissingPlaceholder("remove url pattern"));
        }
        Ok(())
    }

    /// Identity of `record` read from the id field.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::MissingRecordId`] if the field is absent, empty,
    /// or neither a string nor a number.
    pub fn record_id(&self, record: &Value) -> Result<String, GridError> {
        let id = match record.get(&self.id_field) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        id.filter(|id| !id.is_empty())
            .ok_or_else(|| GridError::MissingRecordId(self.id_field.clone()))
    }

    /// URL the edit operation sends `record` to.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::MissingRecordId`] if the record has no id.
    pub fn edit_url(&self, record: &Value) -> Result<String, GridError> {
        Ok(expand_pattern(&self.edit_url_pattern, &self.record_id(record)?))
    }

    /// URL the remove operation targets for `record`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::MissingRecordId`] if the record has no id.
    pub fn remove_url(&self, record: &Value) -> Result<String, GridError> {
        Ok(expand_pattern(&self.remove_url_pattern, &self.record_id(record)?))
    }

    /// Case-insensitive substring match against the search field.
    /// An empty query matches every record.
    #[must_use]
    pub fn matches_search(&self, record: &Value, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        field_text(record, &self.search_field)
            .is_some_and(|text| text.to_lowercase().contains(&query.to_lowercase()))
    }

    /// Records passing [`Self::matches_search`], in their original order.
    #[must_use]
    pub fn filter<'a>(&self, records: &'a [Value], query: &str) -> Vec<&'a Value> {
        records.iter().filter(|r| self.matches_search(r, query)).collect()
    }

    /// Display text for one cell.
    #[must_use]
    pub fn cell_text(record: &Value, column: &GridColumn) -> String {
        field_text(record, &column.data_index).unwrap_or_default()
    }
}

/// Whether a draft creates a new record or replaces an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftMode {
    Add,
    Edit,
}

/// Editable copy of a record shown in the grid's edit form.
///
/// Only the grid's column fields are editable; every other field of the
/// original record is carried through unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordDraft {
    pub mode: DraftMode,
    base: Value,
    fields: Vec<(String, String)>,
}

impl RecordDraft {
    /// Empty draft for the add operation.
    #[must_use]
    pub fn for_new(config: &RestGridConfig) -> Self {
        let fields = config.columns.iter().map(|c| (c.data_index.clone(), String::new())).collect();
        Self { mode: DraftMode::Add, base: Value::Object(serde_json::Map::new()), fields }
    }

    /// Draft prefilled from `record` for the edit operation.
    #[must_use]
    pub fn for_record(config: &RestGridConfig, record: &Value) -> Self {
        let fields = config
            .columns
            .iter()
            .map(|c| (c.data_index.clone(), RestGridConfig::cell_text(record, c)))
            .collect();
        Self { mode: DraftMode::Edit, base: record.clone(), fields }
    }

    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    #[must_use]
    pub fn value(&self, field: &str) -> Option<&str> {
        self.fields.iter().find(|(name, _)| name == field).map(|(_, v)| v.as_str())
    }

    /// Set an editable field. Unknown fields are ignored.
    pub fn set(&mut self, field: &str, value: &str) {
        if let Some((_, slot)) = self.fields.iter_mut().find(|(name, _)| name == field) {
            value.clone_into(slot);
        }
    }

    /// The record to send: the original merged with the edited fields.
    #[must_use]
    pub fn to_record(&self) -> Value {
        let mut map = match &self.base {
            Value::Object(map) => map.clone(),
            _ => serde_json::Map::new(),
        };
        for (name, value) in &self.fields {
            map.insert(name.clone(), Value::String(value.clone()));
        }
        Value::Object(map)
    }
}

fn field_text(record: &Value, field: &str) -> Option<String> {
    match record.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn expand_pattern(pattern: &str, id: &str) -> String {
    pattern.replace(ID_PLACEHOLDER, &urlencoding::encode(id))
}
