//! Reification: collapsing encoded values back into host primitives.
//!
//! This module is the only place where the model touches `i64`, `u64`, `bool`
//! or `String`. A magnitude is observed by handing it a counting transform; a
//! boolean by handing it the two host truth values. The inverse "abstraction"
//! functions ([`magnitude_of`], [`from_integer`]) live here too, because they
//! are the other half of the same boundary.
//!
//! Everything here is pure: reifying a value never changes it.

use crate::boolean::Boolean;
use crate::combinator::fix;
use crate::magnitude::{self, Magnitude};
use crate::number::{number, Division, Number};

/// Host view of a [`Division`]: the quotient's sign, and the two magnitudes
/// as host integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivResult {
    pub is_positive: bool,
    pub quotient: u64,
    pub remainder: u64,
}

/// `to_integer(m) = m(incr)(0)` — counts how many times the magnitude applies
/// its transform.
///
/// # Examples
/// ```
/// use church_encodings::reify;
/// assert_eq!(reify::magnitude(&reify::magnitude_of(7)), 7);
/// ```
pub fn magnitude(qty: &Magnitude) -> u64 {
    qty.apply(|n| n + 1, 0)
}

/// Reifies a magnitude as a run of `'+'` characters — the unary cost made
/// visible.
pub fn to_plus_string(qty: &Magnitude) -> String {
    qty.apply(|acc: String| acc + "+", String::new())
}

/// `to_boolean(b) = b(true)(false)`.
pub fn to_boolean(value: Boolean) -> bool {
    value.select(true, false)
}

/// Combines a number's sign and magnitude into a signed host integer.
pub fn to_integer(num: &Number) -> i64 {
    let mag = magnitude(num.abs()) as i64;
    to_boolean(num.sign()).then_some(mag).unwrap_or(-mag)
}

/// The number's sign as a host boolean; `true` means >= 0.
pub fn sign(num: &Number) -> bool {
    to_boolean(num.sign())
}

/// Same as [`sign`]; both names are part of the surface.
pub fn is_pos(num: &Number) -> bool {
    sign(num)
}

/// The number's magnitude as a host integer, sign discarded.
pub fn abs(num: &Number) -> u64 {
    magnitude(num.abs())
}

/// Collapses a [`Division`] into host primitives.
pub fn div_result(division: &Division) -> DivResult {
    DivResult {
        is_positive: to_boolean(division.is_positive),
        quotient: magnitude(&division.quotient),
        remainder: magnitude(&division.remainder),
    }
}

/// Abstraction: builds the Church numeral for a host count by taking that
/// many successors of zero, driven through the fixed-point combinator like
/// every other recursion in the crate.
pub fn magnitude_of(count: u64) -> Magnitude {
    fix(
        &|next, (qty, n): (Magnitude, u64)| {
            if n == 0 {
                qty
            } else {
                next((magnitude::succ(&qty), n - 1))
            }
        },
        (Magnitude::zero(), count),
    )
}

/// Abstraction: builds the encoded number for a signed host integer.
pub fn from_integer(value: i64) -> Number {
    let is_positive = if value < 0 {
        Boolean::False
    } else {
        Boolean::True
    };
    number(is_positive, magnitude_of(value.unsigned_abs()))
}
