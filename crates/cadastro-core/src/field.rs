//! # Student Field Catalog
//!
//! The eight fields of the enrollment screen, in screen order, plus the
//! mutable per-session [`FieldSet`] that backs them.
//!
//! Each field knows its document key (the key written to the backend),
//! its display label, and its optional [`MaskPattern`]. Only the numeric
//! fields (CPF, RG, phone, birth date) carry a mask.

use serde::{Deserialize, Serialize};

use crate::mask::MaskPattern;
use crate::record::SubmissionRecord;

/// A field on the student enrollment screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudentField {
    /// Student name. Free text.
    Nome,
    /// Registration number. Free text.
    Matricula,
    /// Class group. Free text.
    Turma,
    /// CPF, the national tax identifier. Masked, 11 digits.
    Cpf,
    /// RG, the national registry identifier. Masked, 9 digits.
    Rg,
    /// Mobile phone. Masked, 11 digits.
    Telefone,
    /// Birth date, day first. Masked, 8 digits.
    DataNascimento,
    /// Sex. Free text.
    Sexo,
}

impl StudentField {
    /// Every field, in the order it appears on screen and in the
    /// submitted document.
    pub const ALL: [StudentField; 8] = [
        StudentField::Nome,
        StudentField::Matricula,
        StudentField::Turma,
        StudentField::Cpf,
        StudentField::Rg,
        StudentField::Telefone,
        StudentField::DataNascimento,
        StudentField::Sexo,
    ];

    /// The key under which this field is written to the backend document.
    pub const fn key(self) -> &'static str {
        match self {
            StudentField::Nome => "nome",
            StudentField::Matricula => "matricula",
            StudentField::Turma => "turma",
            StudentField::Cpf => "cpf",
            StudentField::Rg => "rg",
            StudentField::Telefone => "telefone",
            StudentField::DataNascimento => "dataNascimento",
            StudentField::Sexo => "sexo",
        }
    }

    /// The label shown next to the field on screen.
    pub const fn label(self) -> &'static str {
        match self {
            StudentField::Nome => "Nome",
            StudentField::Matricula => "Matricula",
            StudentField::Turma => "Turma",
            StudentField::Cpf => "CPF",
            StudentField::Rg => "RG",
            StudentField::Telefone => "Telefone",
            StudentField::DataNascimento => "Data Nasc.",
            StudentField::Sexo => "Sexo",
        }
    }

    /// The mask applied to this field, if it is numeric.
    pub const fn mask(self) -> Option<MaskPattern> {
        match self {
            StudentField::Cpf => Some(MaskPattern::CPF),
            StudentField::Rg => Some(MaskPattern::RG),
            StudentField::Telefone => Some(MaskPattern::TELEFONE),
            StudentField::DataNascimento => Some(MaskPattern::DATA_NASCIMENTO),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for StudentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The mutable field state of one enrollment screen session.
///
/// Created empty at screen start, mutated on every keystroke, never
/// persisted. Invariant: masked fields hold digits only — [`FieldSet::set`]
/// strips separators before storing, so partial mask characters cannot
/// survive in held state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldSet {
    values: [String; StudentField::ALL.len()],
}

impl FieldSet {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw (unmasked) value of a field.
    pub fn get(&self, field: StudentField) -> &str {
        &self.values[field.index()]
    }

    /// Store user input for a field.
    ///
    /// For masked fields the input is stripped to digits first; digits
    /// beyond the field's slot count are kept here and dropped only at
    /// display time. Free-text fields are stored verbatim.
    pub fn set(&mut self, field: StudentField, input: &str) {
        self.values[field.index()] = match field.mask() {
            Some(mask) => mask.strip(input),
            None => input.to_string(),
        };
    }

    /// The display form of a field: masked render for numeric fields,
    /// the raw value for free text.
    pub fn display_value(&self, field: StudentField) -> String {
        match field.mask() {
            Some(mask) => mask.apply(self.get(field)),
            None => self.get(field).to_string(),
        }
    }

    /// Reset every field to the empty screen-start state.
    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }

    /// Take an immutable snapshot for submission.
    ///
    /// The snapshot carries the exact field contents — no filtering, no
    /// trimming, no required-field validation. Empty fields are submitted
    /// as empty strings.
    pub fn snapshot(&self) -> SubmissionRecord {
        SubmissionRecord::from_field_set(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_field_set_is_empty() {
        let fields = FieldSet::new();
        for field in StudentField::ALL {
            assert_eq!(fields.get(field), "");
        }
    }

    #[test]
    fn masked_field_stores_digits_only() {
        let mut fields = FieldSet::new();
        fields.set(StudentField::Cpf, "123.456.789-01");
        assert_eq!(fields.get(StudentField::Cpf), "12345678901");
    }

    #[test]
    fn free_text_field_stores_verbatim() {
        let mut fields = FieldSet::new();
        fields.set(StudentField::Nome, "  Maria da Silva ");
        assert_eq!(fields.get(StudentField::Nome), "  Maria da Silva ");
    }

    #[test]
    fn display_value_renders_mask() {
        let mut fields = FieldSet::new();
        fields.set(StudentField::Telefone, "11912345678");
        assert_eq!(fields.display_value(StudentField::Telefone), "(11) 91234-5678");
        fields.set(StudentField::Sexo, "F");
        assert_eq!(fields.display_value(StudentField::Sexo), "F");
    }

    #[test]
    fn set_accepts_partially_masked_keystroke_echo() {
        // The rendering surface hands back its own masked output plus one
        // keystroke; the stored state must stay raw either way.
        let mut fields = FieldSet::new();
        fields.set(StudentField::DataNascimento, "12/3");
        assert_eq!(fields.get(StudentField::DataNascimento), "123");
        assert_eq!(fields.display_value(StudentField::DataNascimento), "12/3");
    }

    #[test]
    fn clear_restores_screen_start_state() {
        let mut fields = FieldSet::new();
        fields.set(StudentField::Nome, "Ana");
        fields.set(StudentField::Cpf, "12345678901");
        fields.clear();
        assert_eq!(fields, FieldSet::new());
    }

    #[test]
    fn keys_and_labels_are_fixed() {
        assert_eq!(StudentField::DataNascimento.key(), "dataNascimento");
        assert_eq!(StudentField::DataNascimento.label(), "Data Nasc.");
        assert_eq!(StudentField::Nome.mask(), None);
        assert!(StudentField::Rg.mask().is_some());
    }
}
