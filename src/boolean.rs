//! Church booleans.
//!
//! In the untyped model a boolean is a two-argument function that returns one
//! argument unchanged: `TRUE = t => f => t`, `FALSE = t => f => f`. The tagged
//! [`Boolean`] keeps exactly that behavior through [`Boolean::select`] while
//! letting the compiler reject anything that is not a boolean.
//!
//! The operators are written purely as selections — none of them inspects a
//! variant directly.

/// A value that selects between two continuations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boolean {
    True,
    False,
}

impl Boolean {
    /// Selection: `TRUE` returns the first argument, `FALSE` the second.
    ///
    /// # Examples
    /// ```
    /// use church_encodings::Boolean;
    /// assert_eq!(Boolean::True.select('t', 'f'), 't');
    /// assert_eq!(Boolean::False.select('t', 'f'), 'f');
    /// ```
    pub fn select<T>(self, true_part: T, false_part: T) -> T {
        match self {
            Boolean::True => true_part,
            Boolean::False => false_part,
        }
    }

    /// Lazy selection: only the chosen continuation is evaluated.
    ///
    /// This is what selection already meant in the untyped model, where the
    /// two arms were unapplied functions; in Rust the laziness has to be
    /// spelled out with closures.
    pub fn branch<T>(self, true_part: impl FnOnce() -> T, false_part: impl FnOnce() -> T) -> T {
        match self {
            Boolean::True => true_part(),
            Boolean::False => false_part(),
        }
    }
}

/// `NOT(b) = b(FALSE)(TRUE)`.
pub fn not(value: Boolean) -> Boolean {
    value.select(Boolean::False, Boolean::True)
}

/// `AND(b1)(b2) = b1(b2)(FALSE)`.
pub fn and(first: Boolean, second: Boolean) -> Boolean {
    first.select(second, Boolean::False)
}

/// `OR(b1)(b2) = b1(TRUE)(b2)`.
pub fn or(first: Boolean, second: Boolean) -> Boolean {
    first.select(Boolean::True, second)
}

/// `XOR(b1)(b2) = b1(NOT(b2))(b2)`.
pub fn xor(first: Boolean, second: Boolean) -> Boolean {
    first.select(not(second), second)
}
