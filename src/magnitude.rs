//! Unsigned Church numerals.
//!
//! A magnitude represents a non-negative integer *n* as "the thing that
//! applies a transform *n* times": `ZERO = transform => start => start`,
//! `SUCC(m) = transform => start => transform(m(transform)(start))`. The
//! tagged [`Magnitude`] is the unary chain those functions trace out, and
//! [`Magnitude::apply`] is the application that defines it.
//!
//! Every arithmetic operation below is written in terms of `apply` alone —
//! none of them counts, matches or measures the chain, because in the model
//! there is nothing else a numeral can do but iterate. This is intentionally
//! unary and linear-cost.
//!
//! Two magnitudes are equal exactly when they apply their transform the same
//! number of times; the only way to observe that is to reify with a counting
//! transform (see [`crate::reify::magnitude`]).

use std::rc::Rc;

use crate::boolean::{self, Boolean};
use crate::pair::{pair, Pair};

/// A non-negative quantity, represented in unary.
#[derive(Clone)]
pub enum Magnitude {
    Zero,
    Succ(Rc<Magnitude>),
}

impl Magnitude {
    /// `ZERO_MAGNITUDE` — applies the transform no times at all.
    pub fn zero() -> Magnitude {
        Magnitude::Zero
    }

    /// `UNIT_MAGNITUDE` — applies the transform exactly once.
    pub fn unit() -> Magnitude {
        succ(&Magnitude::Zero)
    }

    /// Applies `transform` to `start` exactly *n* times, where *n* is the
    /// represented value. This is the numeral's defining behavior and the
    /// only sanctioned way to consume one.
    ///
    /// # Examples
    /// ```
    /// use church_encodings::magnitude::{succ, Magnitude};
    /// let two = succ(&succ(&Magnitude::zero()));
    /// // Increment 5 twice.
    /// assert_eq!(two.apply(|n: i64| n + 1, 5), 7);
    /// // Or build a string instead: the numeral does not care.
    /// assert_eq!(two.apply(|acc: String| acc + "+", String::new()), "++");
    /// ```
    pub fn apply<T>(&self, transform: impl Fn(T) -> T, start: T) -> T {
        let mut value = start;
        let mut remaining = self;
        while let Magnitude::Succ(inner) = remaining {
            value = transform(value);
            remaining = inner;
        }
        value
    }
}

/// `SUCC(m)` — one more application of the transform.
pub fn succ(qty: &Magnitude) -> Magnitude {
    Magnitude::Succ(Rc::new(qty.clone()))
}

/// `PRED(m)` — one fewer application, flooring at zero.
///
/// A magnitude carries no count to decrement, so the predecessor runs the
/// numeral's own iteration over a *pair* of magnitudes starting at
/// `(ZERO, ZERO)`, each step replacing `(prev, count)` with
/// `(count, SUCC(count))`. After *n* steps the first component holds *n − 1*,
/// one step behind. `pred(ZERO)` is `ZERO` by convention; the signed layer
/// owns the crossing into negative numbers.
pub fn pred(qty: &Magnitude) -> Magnitude {
    let (previous, _) = qty
        .apply(
            |shifted: Pair<Magnitude, Magnitude>| {
                let count = shifted.tail().clone();
                pair(count.clone(), succ(&count))
            },
            pair(Magnitude::zero(), Magnitude::zero()),
        )
        .into_parts();
    previous
}

/// `ADD(a)(b) = a(SUCC)(b)` — apply the successor `a` times starting from `b`.
pub fn add(qty1: &Magnitude, qty2: &Magnitude) -> Magnitude {
    qty1.apply(|sum| succ(&sum), qty2.clone())
}

/// `SUBTRACT(a)(b) = b(PRED)(a)` — apply the predecessor `b` times starting
/// from `a`. Saturates at zero when `b > a`; a magnitude cannot go negative.
pub fn subtract(qty1: &Magnitude, qty2: &Magnitude) -> Magnitude {
    qty2.apply(|difference| pred(&difference), qty1.clone())
}

/// `MULTIPLY(a)(b) = a(ADD(b))(ZERO)` — apply "add `b`" `a` times.
pub fn multiply(qty1: &Magnitude, qty2: &Magnitude) -> Magnitude {
    qty1.apply(|product| add(qty2, &product), Magnitude::zero())
}

/// `POWER(a)(b) = b(MULTIPLY(a))(ONE)` — apply "multiply by `a`" `b` times.
pub fn power(qty1: &Magnitude, qty2: &Magnitude) -> Magnitude {
    qty2.apply(|result| multiply(qty1, &result), Magnitude::unit())
}

/// `IS_ZERO(m) = m(_ => FALSE)(TRUE)` — if the transform runs even once it
/// forces `FALSE`; only a zero magnitude lets the start value survive.
pub fn is_zero(qty: &Magnitude) -> Boolean {
    qty.apply(|_| Boolean::False, Boolean::True)
}

/// `IS_LTE(a)(b)` — true when `a − b` saturates to zero.
pub fn is_lte(qty1: &Magnitude, qty2: &Magnitude) -> Boolean {
    is_zero(&subtract(qty1, qty2))
}

/// `IS_LT(a)(b) = NOT(IS_LTE(b)(a))`.
pub fn is_lt(qty1: &Magnitude, qty2: &Magnitude) -> Boolean {
    boolean::not(is_lte(qty2, qty1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reify::{magnitude, magnitude_of, to_boolean};

    #[test]
    fn test_zero_and_unit() {
        assert_eq!(magnitude(&Magnitude::zero()), 0);
        assert_eq!(magnitude(&Magnitude::unit()), 1);
    }

    #[test]
    fn test_succ_counts_up() {
        let mut qty = Magnitude::zero();
        for expected in 1..=10 {
            qty = succ(&qty);
            assert_eq!(magnitude(&qty), expected);
        }
    }

    #[test]
    fn test_pred_counts_down() {
        assert_eq!(magnitude(&pred(&magnitude_of(10))), 9);
        assert_eq!(magnitude(&pred(&Magnitude::unit())), 0);
        // pred floors at zero rather than going negative
        assert_eq!(magnitude(&pred(&Magnitude::zero())), 0);
    }

    #[test]
    fn test_add_matches_host_addition() {
        for a in 0..=12 {
            for b in 0..=12 {
                assert_eq!(magnitude(&add(&magnitude_of(a), &magnitude_of(b))), a + b);
            }
        }
    }

    #[test]
    fn test_subtract_saturates_at_zero() {
        for a in 0..=12 {
            for b in 0..=12 {
                assert_eq!(
                    magnitude(&subtract(&magnitude_of(a), &magnitude_of(b))),
                    a.saturating_sub(b)
                );
            }
        }
    }

    #[test]
    fn test_multiply_matches_host_multiplication() {
        for a in 0..=12 {
            for b in 0..=12 {
                assert_eq!(
                    magnitude(&multiply(&magnitude_of(a), &magnitude_of(b))),
                    a * b
                );
            }
        }
    }

    #[test]
    fn test_power() {
        assert_eq!(magnitude(&power(&magnitude_of(2), &magnitude_of(5))), 32);
        assert_eq!(magnitude(&power(&magnitude_of(3), &magnitude_of(3))), 27);
        // anything to the zeroth power is one, including zero
        assert_eq!(magnitude(&power(&magnitude_of(0), &magnitude_of(0))), 1);
        assert_eq!(magnitude(&power(&magnitude_of(7), &magnitude_of(0))), 1);
    }

    #[test]
    fn test_is_zero() {
        assert!(to_boolean(is_zero(&Magnitude::zero())));
        assert!(!to_boolean(is_zero(&Magnitude::unit())));
        assert!(!to_boolean(is_zero(&magnitude_of(5))));
    }

    #[test]
    fn test_ordering_predicates() {
        for a in 0..=8 {
            for b in 0..=8 {
                let (qa, qb) = (magnitude_of(a), magnitude_of(b));
                assert_eq!(to_boolean(is_lte(&qa, &qb)), a <= b);
                assert_eq!(to_boolean(is_lt(&qa, &qb)), a < b);
            }
        }
    }
}
