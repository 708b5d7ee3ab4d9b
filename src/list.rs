//! Lists as pair chains.
//!
//! A list is either the empty terminator or a pair whose head is an element
//! and whose tail is itself a list. The untyped model terminates chains with
//! the sentinel `EMPTY = PAIR(null)(null)`; the tagged [`List`] absorbs that
//! sentinel into an explicit `Empty` variant, so a malformed chain cannot be
//! expressed at all.
//!
//! All traversal goes through the fixed-point combinator — `reverse`, `map`
//! and `reduce` are step functions handed to `fix`, never functions that
//! call themselves by name. Lists are
//! logically immutable: every operation builds a new chain, sharing tails
//! where it can.

use im::Vector;
use std::rc::Rc;

use crate::boolean::Boolean;
use crate::combinator::fix;
use crate::magnitude::{self, Magnitude};
use crate::pair::{pair, Pair};

/// A right-nested chain of pairs, terminated by `Empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum List<T> {
    Empty,
    Cons(Rc<Pair<T, List<T>>>),
}

/// Prepends an element, building a new chain in O(1).
///
/// # Examples
/// ```
/// use church_encodings::list::{cons, List};
/// let lst = cons(1, cons(2, List::Empty));
/// assert_eq!(lst.head(), Some(&1));
/// ```
pub fn cons<T>(head: T, tail: List<T>) -> List<T> {
    List::Cons(Rc::new(pair(head, tail)))
}

impl<T> List<T> {
    /// `IS_EMPTY` — recognizes the terminator, as an abstract boolean.
    pub fn is_empty(&self) -> Boolean {
        match self {
            List::Empty => Boolean::True,
            List::Cons(_) => Boolean::False,
        }
    }

    /// The first element, or `None` for the empty list.
    pub fn head(&self) -> Option<&T> {
        match self {
            List::Empty => None,
            List::Cons(cell) => Some(cell.head()),
        }
    }

    /// Everything after the first element, or `None` for the empty list.
    pub fn tail(&self) -> Option<&List<T>> {
        match self {
            List::Empty => None,
            List::Cons(cell) => Some(cell.tail()),
        }
    }
}

/// Reverses a list by prepending into a fresh accumulator chain.
pub fn reverse<T: Clone>(list: &List<T>) -> List<T> {
    fix(
        &|next_rev, (new_list, old_list): (List<T>, List<T>)| match old_list {
            List::Empty => new_list,
            List::Cons(cell) => next_rev((cons(cell.head().clone(), new_list), cell.tail().clone())),
        },
        (List::Empty, list.clone()),
    )
}

/// Applies `transform` to every element, preserving order.
///
/// Each step prepends in O(1), which builds the result backwards; a single
/// [`reverse`] at the end restores the original order.
///
/// # Examples
/// ```
/// use church_encodings::list;
/// let doubled = list::map(|x| x * 2, &list::from_slice(&[1, 2, 3]));
/// assert_eq!(list::to_vec(&doubled), vec![2, 4, 6]);
/// ```
pub fn map<T: Clone, U: Clone>(transform: impl Fn(&T) -> U, list: &List<T>) -> List<U> {
    let backwards = fix(
        &|next_map, (new_list, old_list): (List<U>, List<T>)| match old_list {
            List::Empty => new_list,
            List::Cons(cell) => {
                next_map((cons(transform(cell.head()), new_list), cell.tail().clone()))
            }
        },
        (List::Empty, list.clone()),
    );
    reverse(&backwards)
}

/// Strict left fold: threads `combine(acc, element)` through the chain in
/// original order. Reducing the empty list yields the seed accumulator.
pub fn reduce<T: Clone, A>(list: &List<T>, combine: impl Fn(A, &T) -> A, acc: A) -> A {
    fix(
        &|next_reduce, (acc, rest): (A, List<T>)| match rest {
            List::Empty => acc,
            List::Cons(cell) => next_reduce((combine(acc, cell.head()), cell.tail().clone())),
        },
        (acc, list.clone()),
    )
}

/// `FOLDL` is another name for [`reduce`].
pub fn fold_left<T: Clone, A>(list: &List<T>, combine: impl Fn(A, &T) -> A, acc: A) -> A {
    reduce(list, combine, acc)
}

/// `FOLDR` — a right fold is a left fold over the reversed chain.
pub fn fold_right<T: Clone, A>(list: &List<T>, combine: impl Fn(A, &T) -> A, acc: A) -> A {
    reduce(&reverse(list), combine, acc)
}

/// List length as an abstract magnitude: one successor per element.
pub fn count<T: Clone>(list: &List<T>) -> Magnitude {
    reduce(list, |acc, _| magnitude::succ(&acc), Magnitude::zero())
}

/// Converts a host string to a list of characters, preserving order.
///
/// Works from the back of the string forwards so that each element is an O(1)
/// prepend.
pub fn from_text(text: &str) -> List<char> {
    fix(
        &|next, (list, rest): (List<char>, &str)| match rest.char_indices().next_back() {
            None => list,
            Some((index, ch)) => next((cons(ch, list), &rest[..index])),
        },
        (List::Empty, text),
    )
}

/// Collapses a list of characters back into a host string, preserving order.
pub fn to_text(list: &List<char>) -> String {
    reduce(
        list,
        |mut acc: String, ch| {
            acc.push(*ch);
            acc
        },
        String::new(),
    )
}

/// Converts a host indexed sequence to a list, preserving index order.
pub fn from_slice<T: Clone>(items: &[T]) -> List<T> {
    fix(
        &|next, (list, rest): (List<T>, &[T])| match rest.split_last() {
            None => list,
            Some((last, front)) => next((cons(last.clone(), list), front)),
        },
        (List::Empty, items),
    )
}

/// Collapses a list into an immutable ordered sequence.
///
/// The chain is folded into a persistent [`im::Vector`]; a host `Vec` is only
/// materialized at the final boundary by [`to_vec`].
pub fn to_vector<T: Clone>(list: &List<T>) -> Vector<T> {
    reduce(
        list,
        |mut acc: Vector<T>, item| {
            acc.push_back(item.clone());
            acc
        },
        Vector::new(),
    )
}

/// Collapses a list into a host `Vec`.
pub fn to_vec<T: Clone>(list: &List<T>) -> Vec<T> {
    to_vector(list).into_iter().collect()
}
