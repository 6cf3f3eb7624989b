//! # Form Session
//!
//! Owns the field state of one enrollment screen as a plain owned
//! [`FieldSet`] mutated through explicit setters, with the rendering
//! surface subscribing to changes via a registered callback. No state
//! lives in ambient UI framework primitives.
//!
//! Data flow is unidirectional: the surface feeds raw keystrokes in
//! through [`FormSession::set`], and reads display text back out of the
//! observed [`FieldSet`]. Field values live only as long as the session.

use cadastro_core::{FieldSet, StudentField, SubmissionRecord};

/// Callback invoked after every accepted field update. Receives the field
/// that changed and a view of the full post-update state.
pub type ChangeObserver = Box<dyn FnMut(StudentField, &FieldSet) + Send>;

/// The mutable state of one enrollment screen session.
pub struct FormSession {
    fields: FieldSet,
    observer: Option<ChangeObserver>,
}

impl FormSession {
    /// Start a session with every field empty.
    pub fn new() -> Self {
        Self {
            fields: FieldSet::new(),
            observer: None,
        }
    }

    /// Register the change observer, replacing any previous one.
    pub fn observe(&mut self, observer: impl FnMut(StudentField, &FieldSet) + Send + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Apply one keystroke's worth of input to a field.
    ///
    /// Masked fields are stripped to raw digits before storage, so the
    /// surface may echo back its own masked rendering without corrupting
    /// held state. The observer fires after the update.
    pub fn set(&mut self, field: StudentField, input: &str) {
        self.fields.set(field, input);
        if let Some(observer) = &mut self.observer {
            observer(field, &self.fields);
        }
    }

    /// The raw (unmasked) value of a field.
    pub fn raw(&self, field: StudentField) -> &str {
        self.fields.get(field)
    }

    /// The display text for a field, masked where applicable.
    pub fn display(&self, field: StudentField) -> String {
        self.fields.display_value(field)
    }

    /// A view of the full field state.
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Snapshot the current state for submission.
    pub fn snapshot(&self) -> SubmissionRecord {
        self.fields.snapshot()
    }

    /// Clear every field back to the screen-start state. Does not fire
    /// the observer: the surface initiated the reset and already knows.
    pub fn reset(&mut self) {
        self.fields.clear();
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

// Manual Debug: the observer is an opaque closure.
impl std::fmt::Debug for FormSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSession")
            .field("fields", &self.fields)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
