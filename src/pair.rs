//! Pairs as selection targets.
//!
//! The untyped model builds a pair as `PAIR(h)(t) = fn => fn(h)(t)` and reads
//! it back by handing it a boolean selector: `HEAD(p) = p(TRUE)`,
//! `TAIL(p) = p(FALSE)`. The tagged [`Pair`] keeps the two values in creation
//! order and, when both sides have the same type, still supports selection by
//! a [`Boolean`].
//!
//! Pairs are immutable once constructed; "changing" one always means building
//! a new pair.

use crate::boolean::Boolean;

/// Two values held in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair<H, T> {
    head: H,
    tail: T,
}

/// `PAIR(h)(t)` — the pair constructor.
///
/// # Examples
/// ```
/// use church_encodings::pair::pair;
/// let p = pair(1, 'a');
/// assert_eq!(*p.head(), 1);
/// assert_eq!(*p.tail(), 'a');
/// ```
pub fn pair<H, T>(head: H, tail: T) -> Pair<H, T> {
    Pair { head, tail }
}

impl<H, T> Pair<H, T> {
    /// `HEAD(p)` — the first held value.
    pub fn head(&self) -> &H {
        &self.head
    }

    /// `TAIL(p)` — the second held value.
    pub fn tail(&self) -> &T {
        &self.tail
    }

    /// Takes the pair apart, giving up ownership of both values.
    pub fn into_parts(self) -> (H, T) {
        (self.head, self.tail)
    }
}

impl<V> Pair<V, V> {
    /// Church-style selection: the pair applied to a boolean selector yields
    /// the head for `TRUE` and the tail for `FALSE`.
    pub fn select(self, selector: Boolean) -> V {
        selector.select(self.head, self.tail)
    }
}
