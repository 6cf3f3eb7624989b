//! # Digit Mask Engine
//!
//! Pure transforms between the raw (digits-only) and display forms of a
//! numeric field. A mask pattern is a template string where `#` marks a
//! digit slot and every other character is a literal separator inserted
//! around digits.
//!
//! Both directions are stateless and cheap enough to run on every
//! keystroke without debouncing. "Digit" means ASCII `0-9` only; there is
//! no locale-specific digit handling.
//!
//! ## Truncation boundary
//!
//! A separator is only emitted once a digit past it is emitted. Applying
//! `##/##/####` to `"123"` yields `"12/3"`, not `"12/3/"` — and applying
//! any pattern to an empty input yields `""`, even when the pattern opens
//! with a literal (the phone mask starts with `(`).

use std::fmt;

/// Apply a digit mask to a raw input string.
///
/// Every non-digit character of `value` is stripped first, then `pattern`
/// is walked left to right: each `#` consumes and emits the next stripped
/// digit, each literal is emitted in place. Emission stops as soon as the
/// digits are exhausted, so no literal ever trails the last digit. Digits
/// beyond the pattern's `#` slots are silently dropped.
pub fn apply_mask(value: &str, pattern: &str) -> String {
    let mut digits = value.chars().filter(char::is_ascii_digit);
    let mut masked = String::with_capacity(pattern.len());
    // Literals are held back until the next digit lands, so a run of
    // separators never dangles past the final digit.
    let mut pending = String::new();

    for slot in pattern.chars() {
        if slot == '#' {
            match digits.next() {
                Some(digit) => {
                    masked.push_str(&pending);
                    pending.clear();
                    masked.push(digit);
                }
                None => break,
            }
        } else {
            pending.push(slot);
        }
    }

    masked
}

/// Strip a digit mask, returning the digits of `value` in order.
///
/// Idempotent: stripping an already-raw value is a no-op.
pub fn remove_mask(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// A fixed digit-mask template, known at compile time.
///
/// `#` marks a digit slot; any other character is a literal separator.
/// Patterns are never user-supplied — each masked field on the enrollment
/// screen carries one of the associated constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaskPattern(&'static str);

impl MaskPattern {
    /// CPF (Cadastro de Pessoas Físicas): `###.###.###-##`.
    pub const CPF: MaskPattern = MaskPattern("###.###.###-##");

    /// RG (Registro Geral): `##.###.###-#`.
    pub const RG: MaskPattern = MaskPattern("##.###.###-#");

    /// Mobile phone with area code: `(##) #####-####`.
    pub const TELEFONE: MaskPattern = MaskPattern("(##) #####-####");

    /// Birth date, day first: `##/##/####`.
    pub const DATA_NASCIMENTO: MaskPattern = MaskPattern("##/##/####");

    /// Wrap a template string as a mask pattern.
    pub const fn new(pattern: &'static str) -> Self {
        Self(pattern)
    }

    /// The underlying template string.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Render a raw value through this pattern. See [`apply_mask`].
    pub fn apply(&self, value: &str) -> String {
        apply_mask(value, self.0)
    }

    /// Strip this pattern (or any stray non-digits) from a display value.
    /// See [`remove_mask`].
    pub fn strip(&self, value: &str) -> String {
        remove_mask(value)
    }

    /// Number of `#` digit slots in the pattern.
    pub fn digit_slots(&self) -> usize {
        self.0.chars().filter(|c| *c == '#').count()
    }
}

impl fmt::Display for MaskPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
