//! # Submission Snapshots
//!
//! A [`SubmissionRecord`] is the immutable flat key/value snapshot of a
//! [`FieldSet`](crate::field::FieldSet), produced immediately before a
//! write and owned solely by the write call that consumes it. On the wire
//! it is a flat JSON object whose keys appear in screen order.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::field::{FieldSet, StudentField};

/// An immutable snapshot of the enrollment fields, ready to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    entries: Vec<(&'static str, String)>,
}

impl SubmissionRecord {
    pub(crate) fn from_field_set(fields: &FieldSet) -> Self {
        Self {
            entries: StudentField::ALL
                .iter()
                .map(|field| (field.key(), fields.get(*field).to_string()))
                .collect(),
        }
    }

    /// Iterate the record's key/value pairs in screen order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Look up a value by document key.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

// Serialized by hand to keep screen order on the wire; a map keyed by
// field name would alphabetize.
impl Serialize for SubmissionRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> FieldSet {
        let mut fields = FieldSet::new();
        fields.set(StudentField::Nome, "Maria da Silva");
        fields.set(StudentField::Matricula, "2024001");
        fields.set(StudentField::Turma, "3B");
        fields.set(StudentField::Cpf, "123.456.789-01");
        fields.set(StudentField::Rg, "12.345.678-9");
        fields.set(StudentField::Telefone, "(11) 91234-5678");
        fields.set(StudentField::DataNascimento, "01/02/2008");
        fields.set(StudentField::Sexo, "F");
        fields
    }

    #[test]
    fn snapshot_carries_raw_values() {
        let record = sample_fields().snapshot();
        assert_eq!(record.value("cpf"), Some("12345678901"));
        assert_eq!(record.value("telefone"), Some("11912345678"));
        assert_eq!(record.value("dataNascimento"), Some("01022008"));
        assert_eq!(record.value("nome"), Some("Maria da Silva"));
    }

    #[test]
    fn snapshot_submits_empty_fields_as_is() {
        let record = FieldSet::new().snapshot();
        for field in StudentField::ALL {
            assert_eq!(record.value(field.key()), Some(""));
        }
    }

    #[test]
    fn snapshot_is_detached_from_later_edits() {
        let mut fields = sample_fields();
        let record = fields.snapshot();
        fields.set(StudentField::Nome, "Outra Pessoa");
        assert_eq!(record.value("nome"), Some("Maria da Silva"));
    }

    #[test]
    fn serializes_as_flat_object_in_screen_order() {
        let record = sample_fields().snapshot();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            "{\"nome\":\"Maria da Silva\",\"matricula\":\"2024001\",\
             \"turma\":\"3B\",\"cpf\":\"12345678901\",\"rg\":\"123456789\",\
             \"telefone\":\"11912345678\",\"dataNascimento\":\"01022008\",\
             \"sexo\":\"F\"}"
        );
    }

    #[test]
    fn unknown_key_yields_none() {
        let record = FieldSet::new().snapshot();
        assert_eq!(record.value("email"), None);
    }
}
