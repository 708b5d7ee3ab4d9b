//! Signed integers in sign/magnitude form.
//!
//! A number is the pair `NUMBER(isPositive)(magnitude)`: an abstract boolean
//! sign and an unsigned Church numeral. Zero is canonically positive, but a
//! zero-magnitude result may come out of an operation carrying either sign —
//! the two encodings denote the same integer and callers must not read the
//! sign bit of a zero.
//!
//! Every operation is a case analysis on signs, with the actual work delegated
//! to the magnitude layer. Division is the one recursive operation and runs
//! through the fixed-point combinator.

use crate::boolean::{self, Boolean};
use crate::combinator::fix;
use crate::magnitude::{self, Magnitude};
use crate::pair::{pair, Pair};
use crate::reify::to_boolean;

/// A signed integer: an `isPositive` flag and a non-negative magnitude.
#[derive(Clone)]
pub struct Number {
    sign: Boolean,
    magnitude: Magnitude,
}

/// Quotient and remainder of a signed division, still in encoded form.
///
/// The sign applies to the quotient; the remainder is always non-negative
/// and strictly smaller than the divisor's magnitude.
#[derive(Clone)]
pub struct Division {
    pub is_positive: Boolean,
    pub quotient: Magnitude,
    pub remainder: Magnitude,
}

/// `NUMBER(isPositive)(magnitude)` — the number constructor.
pub fn number(is_positive: Boolean, magnitude: Magnitude) -> Number {
    Number {
        sign: is_positive,
        magnitude,
    }
}

impl Number {
    /// `SIGN(n)` — the abstract sign; `TRUE` means the number is >= 0.
    pub fn sign(&self) -> Boolean {
        self.sign
    }

    /// `ABS(n)` — the magnitude, with the sign stripped away.
    pub fn abs(&self) -> &Magnitude {
        &self.magnitude
    }
}

/// `IS_POS(n)` — just the sign bit.
pub fn is_pos(num: &Number) -> Boolean {
    num.sign()
}

/// `IS_ZERO(n)` — true when the magnitude is zero, whatever the sign.
pub fn is_zero(num: &Number) -> Boolean {
    magnitude::is_zero(num.abs())
}

/// True when the magnitude is exactly one: not zero, and its predecessor is.
fn has_unit_magnitude(num: &Number) -> Boolean {
    boolean::and(
        boolean::not(magnitude::is_zero(num.abs())),
        magnitude::is_zero(&magnitude::pred(num.abs())),
    )
}

/// `IS_ONE(n)` — unit magnitude, whatever the sign.
pub fn is_one(num: &Number) -> Boolean {
    has_unit_magnitude(num)
}

/// `IS_MINUS_ONE(n)` — negative sign and unit magnitude.
pub fn is_minus_one(num: &Number) -> Boolean {
    boolean::and(boolean::not(is_pos(num)), has_unit_magnitude(num))
}

/// Magnitude-only ordering: true when `|n1| <= |n2|`.
///
/// This is not a general signed comparison — it ignores the signs entirely
/// and is meaningful only where the caller has already normalized them, as
/// the opposite-sign branches of [`add`] do.
pub fn is_lte(num1: &Number, num2: &Number) -> Boolean {
    magnitude::is_lte(num1.abs(), num2.abs())
}

/// Flips the sign, leaving the magnitude alone. Negating a zero yields the
/// non-canonical negative zero, which reifies to the same integer.
pub fn negate(num: &Number) -> Number {
    number(boolean::not(num.sign()), num.abs().clone())
}

/// The canonical zero: positive sign, zero magnitude.
pub fn zero() -> Number {
    number(Boolean::True, Magnitude::zero())
}

/// `SUCC(n)` — one step towards positive infinity.
///
/// Four cases: a non-negative number grows its magnitude; minus one becomes
/// the canonical zero; any other negative number shrinks its magnitude.
pub fn succ(num: &Number) -> Number {
    is_pos(num).branch(
        || number(Boolean::True, magnitude::succ(num.abs())),
        || {
            is_minus_one(num).branch(zero, || {
                number(Boolean::False, magnitude::pred(num.abs()))
            })
        },
    )
}

/// `PRED(n)` — one step towards negative infinity.
///
/// Four cases: zero becomes minus one; a positive number shrinks its
/// magnitude; a negative number grows it.
pub fn pred(num: &Number) -> Number {
    is_zero(num).branch(
        || number(Boolean::False, Magnitude::unit()),
        || {
            is_pos(num).branch(
                || number(Boolean::True, magnitude::pred(num.abs())),
                || number(Boolean::False, magnitude::succ(num.abs())),
            )
        },
    )
}

/// `ADD(n1)(n2)` — case analysis on the two signs.
///
/// Same-sign operands sum their magnitudes and keep the common sign.
/// Opposite-sign operands subtract the smaller magnitude from the larger and
/// take the sign of the operand whose magnitude is larger; equal magnitudes
/// cancel to the canonical positive zero.
pub fn add(num1: &Number, num2: &Number) -> Number {
    let (qty1, qty2) = (num1.abs(), num2.abs());
    is_pos(num1).branch(
        || {
            is_pos(num2).branch(
                || number(Boolean::True, magnitude::add(qty1, qty2)),
                || {
                    magnitude::is_lte(qty2, qty1).branch(
                        || number(Boolean::True, magnitude::subtract(qty1, qty2)),
                        || number(Boolean::False, magnitude::subtract(qty2, qty1)),
                    )
                },
            )
        },
        || {
            is_pos(num2).branch(
                || {
                    magnitude::is_lte(qty1, qty2).branch(
                        || number(Boolean::True, magnitude::subtract(qty2, qty1)),
                        || number(Boolean::False, magnitude::subtract(qty1, qty2)),
                    )
                },
                || number(Boolean::False, magnitude::add(qty1, qty2)),
            )
        },
    )
}

/// `SUBTRACT(n1)(n2) = ADD(n1)(−n2)` — subtraction is addition of the
/// negation.
pub fn subtract(num1: &Number, num2: &Number) -> Number {
    add(num1, &negate(num2))
}

/// `MULTIPLY(n1)(n2)` — the sign is true iff the operand signs agree
/// (not-xor); the magnitude is the product of the magnitudes.
pub fn multiply(num1: &Number, num2: &Number) -> Number {
    number(
        boolean::not(boolean::xor(num1.sign(), num2.sign())),
        magnitude::multiply(num1.abs(), num2.abs()),
    )
}

/// `DIV(n1)(n2)` — quotient and remainder by repeated subtraction.
///
/// The magnitude loop starts from `(count = ZERO, remainder = |n1|)` and,
/// while the divisor's magnitude is still `<=` the remainder, replaces the
/// state with `(SUCC(count), remainder − |n2|)`; the recursion is driven by
/// the fixed-point combinator. The quotient's sign is not-xor of the operand
/// signs.
///
/// The remainder follows the Euclidean convention, `0 <= r < |n2|`, so that
/// `n1 == n2 * q + r` always holds: a negative dividend with a non-zero raw
/// remainder bumps the quotient magnitude by one and takes `|n2| − r` as the
/// remainder.
///
/// # Panics
///
/// Panics if the divisor's magnitude is zero. Unguarded, the loop condition
/// would hold forever and the recursion would never terminate, so the hazard
/// is checked before the loop is entered.
pub fn div(num1: &Number, num2: &Number) -> Division {
    assert!(
        !to_boolean(magnitude::is_zero(num2.abs())),
        "cannot divide by a zero magnitude"
    );

    let divisor = num2.abs();
    let (count, raw_remainder) = fix(
        &|div_next, state: Pair<Magnitude, Magnitude>| {
            let (count, remainder) = state.into_parts();
            magnitude::is_lte(divisor, &remainder).branch(
                || {
                    div_next(pair(
                        magnitude::succ(&count),
                        magnitude::subtract(&remainder, divisor),
                    ))
                },
                || pair(count.clone(), remainder.clone()),
            )
        },
        pair(Magnitude::zero(), num1.abs().clone()),
    )
    .into_parts();

    // The loop divides the absolute values; a negative dividend that did not
    // divide evenly still owes one more divisor step to keep the remainder
    // non-negative.
    let (quotient, remainder) = is_pos(num1).branch(
        || (count.clone(), raw_remainder.clone()),
        || {
            magnitude::is_zero(&raw_remainder).branch(
                || (count.clone(), raw_remainder.clone()),
                || {
                    (
                        magnitude::succ(&count),
                        magnitude::subtract(divisor, &raw_remainder),
                    )
                },
            )
        },
    );

    Division {
        is_positive: boolean::not(boolean::xor(num1.sign(), num2.sign())),
        quotient,
        remainder,
    }
}

/// `ONE` through `TEN` and their negative counterparts: each value is the
/// successor (or predecessor) of the one before it.
pub fn one() -> Number {
    succ(&zero())
}
pub fn two() -> Number {
    succ(&one())
}
pub fn three() -> Number {
    succ(&two())
}
pub fn four() -> Number {
    succ(&three())
}
pub fn five() -> Number {
    succ(&four())
}
pub fn six() -> Number {
    succ(&five())
}
pub fn seven() -> Number {
    succ(&six())
}
pub fn eight() -> Number {
    succ(&seven())
}
pub fn nine() -> Number {
    succ(&eight())
}
pub fn ten() -> Number {
    succ(&nine())
}

pub fn minus_one() -> Number {
    pred(&zero())
}
pub fn minus_two() -> Number {
    pred(&minus_one())
}
pub fn minus_three() -> Number {
    pred(&minus_two())
}
pub fn minus_four() -> Number {
    pred(&minus_three())
}
pub fn minus_five() -> Number {
    pred(&minus_four())
}
pub fn minus_six() -> Number {
    pred(&minus_five())
}
pub fn minus_seven() -> Number {
    pred(&minus_six())
}
pub fn minus_eight() -> Number {
    pred(&minus_seven())
}
pub fn minus_nine() -> Number {
    pred(&minus_eight())
}
pub fn minus_ten() -> Number {
    pred(&minus_nine())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reify::{from_integer, to_boolean, to_integer};

    #[test]
    fn test_prebuilt_numbers() {
        assert_eq!(to_integer(&zero()), 0);
        assert_eq!(to_integer(&one()), 1);
        assert_eq!(to_integer(&ten()), 10);
        assert_eq!(to_integer(&minus_one()), -1);
        assert_eq!(to_integer(&minus_ten()), -10);
    }

    #[test]
    fn test_succ_and_pred_walk_the_number_line() {
        let mut num = from_integer(-5);
        for expected in -4..=5 {
            num = succ(&num);
            assert_eq!(to_integer(&num), expected);
        }
        for expected in (-5..=4).rev() {
            num = pred(&num);
            assert_eq!(to_integer(&num), expected);
        }
    }

    #[test]
    fn test_succ_of_minus_one_is_canonical_zero() {
        let result = succ(&minus_one());
        assert_eq!(to_integer(&result), 0);
        assert!(to_boolean(result.sign()));
    }

    #[test]
    fn test_pred_of_one_is_canonical_zero() {
        let result = pred(&one());
        assert_eq!(to_integer(&result), 0);
        assert!(to_boolean(result.sign()));
    }

    #[test]
    fn test_add_over_all_sign_combinations() {
        for a in -50..=50 {
            for b in -50..=50 {
                assert_eq!(
                    to_integer(&add(&from_integer(a), &from_integer(b))),
                    a + b,
                    "{a} + {b}"
                );
            }
        }
    }

    #[test]
    fn test_subtract() {
        for a in -50..=50 {
            for b in -50..=50 {
                assert_eq!(
                    to_integer(&subtract(&from_integer(a), &from_integer(b))),
                    a - b,
                    "{a} - {b}"
                );
            }
        }
    }

    #[test]
    fn test_multiply() {
        for a in -20..=20 {
            for b in -20..=20 {
                assert_eq!(
                    to_integer(&multiply(&from_integer(a), &from_integer(b))),
                    a * b,
                    "{a} * {b}"
                );
            }
        }
    }

    #[test]
    fn test_multiply_minus_three_by_four() {
        assert_eq!(to_integer(&multiply(&minus_three(), &four())), -12);
    }

    #[test]
    fn test_div_seventeen_by_five() {
        let result = div(&from_integer(17), &five());
        assert!(to_boolean(result.is_positive));
        assert_eq!(crate::reify::magnitude(&result.quotient), 3);
        assert_eq!(crate::reify::magnitude(&result.remainder), 2);
    }

    #[test]
    fn test_div_satisfies_euclidean_property() {
        for a in -50..=50 {
            for b in (-20..=20).filter(|&b| b != 0) {
                let result = div(&from_integer(a), &from_integer(b));
                let q = to_boolean(result.is_positive)
                    .then_some(1)
                    .unwrap_or(-1)
                    * crate::reify::magnitude(&result.quotient) as i64;
                let r = crate::reify::magnitude(&result.remainder) as i64;
                assert_eq!(a, b * q + r, "{a} div {b}: q = {q}, r = {r}");
                assert!(r >= 0 && r < b.abs(), "{a} div {b}: r = {r}");
            }
        }
    }

    #[test]
    #[should_panic(expected = "zero magnitude")]
    fn test_div_by_zero_fails_fast() {
        div(&five(), &zero());
    }

    #[test]
    fn test_predicates() {
        assert!(to_boolean(is_zero(&zero())));
        assert!(to_boolean(is_zero(&negate(&zero()))));
        assert!(!to_boolean(is_zero(&one())));
        assert!(to_boolean(is_one(&one())));
        assert!(!to_boolean(is_one(&two())));
        assert!(to_boolean(is_minus_one(&minus_one())));
        assert!(!to_boolean(is_minus_one(&one())));
        assert!(to_boolean(is_pos(&three())));
        assert!(!to_boolean(is_pos(&minus_three())));
    }

    #[test]
    fn test_is_lte_compares_magnitudes_only() {
        assert!(to_boolean(is_lte(&two(), &minus_three())));
        assert!(!to_boolean(is_lte(&minus_three(), &two())));
        assert!(to_boolean(is_lte(&minus_two(), &two())));
    }
}
