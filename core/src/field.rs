use std::collections::BTreeMap;
use std::fmt;

use futures_signals::signal::Mutable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    CurrentPassword,
    NewPassword,
    Title,
    Content,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::CurrentPassword => "currentPassword",
            Field::NewPassword => "newPassword",
            Field::Title => "title",
            Field::Content => "content",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a form's inputs. Fields that were never set read as "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues(BTreeMap<Field, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or("")
    }
}

impl<S: Into<String>> FromIterator<(Field, S)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (Field, S)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(field, value)| (field, value.into())).collect())
    }
}

/// Field name to message. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Returns true when an error was present for `field`.
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

/// Live, per-keystroke input values. Inputs bind to the `Mutable` of their field.
pub struct FieldStore {
    fields: BTreeMap<Field, Mutable<String>>,
}

impl FieldStore {
    pub fn new(fields: &[Field]) -> Self {
        Self {
            fields: fields.iter().map(|field| (*field, Mutable::new(String::new()))).collect(),
        }
    }

    pub fn field(&self, field: Field) -> Mutable<String> {
        match self.fields.get(&field) {
            Some(value) => value.clone(),
            None => {
                log::warn!("Field {} is not part of this form", field);
                Mutable::new(String::new())
            }
        }
    }

    pub fn set(&self, field: Field, value: impl Into<String>) {
        if let Some(mutable) = self.fields.get(&field) {
            mutable.set_neq(value.into());
        }
    }

    pub fn snapshot(&self) -> FormValues {
        self.fields
            .iter()
            .map(|(field, value)| (*field, value.get_cloned()))
            .collect()
    }

    pub fn clear(&self) {
        for value in self.fields.values() {
            value.set_neq(String::new());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_read_as_empty() {
        let values = FormValues::new().with(Field::Email, "a@b.co");
        assert_eq!(values.get(Field::Email), "a@b.co");
        assert_eq!(values.get(Field::Password), "");
    }

    #[test]
    fn store_snapshot_tracks_edits() {
        let store = FieldStore::new(&[Field::Email, Field::Password]);
        store.field(Field::Email).set("me@site.dev".to_string());
        store.set(Field::Password, "hunter22");
        store.set(Field::Title, "ignored");

        let values = store.snapshot();
        assert_eq!(values.get(Field::Email), "me@site.dev");
        assert_eq!(values.get(Field::Password), "hunter22");
        assert_eq!(values.get(Field::Title), "");

        store.clear();
        assert_eq!(store.snapshot().get(Field::Email), "");
    }

    #[test]
    fn clearing_an_error_reports_presence() {
        let mut errors = ValidationErrors::default();
        errors.insert(Field::Name, "Name is required");
        assert!(errors.clear(Field::Name));
        assert!(!errors.clear(Field::Name));
        assert!(errors.is_empty());
    }

    #[test]
    fn values_serialize_with_camel_case_names() {
        let values = FormValues::new().with(Field::ConfirmPassword, "x");
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"{"confirmPassword":"x"}"#);
    }
}
