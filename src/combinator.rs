//! Basic combinators: identity, composition, and the fixed-point combinator.
//!
//! The fixed-point combinator is the only recursion primitive in the whole
//! encoding: division, list traversal and the host-sequence conversions are
//! all expressed as [`fix`] applied to a step function, never as a function
//! calling itself by name.
//!
//! Self-application `U(f) = f(f)` has no standalone Rust type (a function
//! type cannot take itself as an argument), so it lives inside [`fix`] as the
//! `Gen` wrapper struct: `Gen::self_apply` is `f(f)` with the knot tied
//! through the struct.

/// `IDENTITY(x) = x`.
pub fn identity<T>(value: T) -> T {
    value
}

/// `compose(f)(g) = x => g(f(x))` — applies `first`, then `second`.
///
/// # Examples
/// ```
/// use church_encodings::combinator::compose;
/// let double_then_add5 = compose(|x| x * 2, |x| x + 5);
/// assert_eq!(double_then_add5(10), 25);
/// ```
pub fn compose<A, B, C>(first: impl Fn(A) -> B, second: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |value| second(first(value))
}

/// The fixed-point (Y) combinator.
///
/// `rec_fn` is a generator that receives "the function to call for the
/// recursive step" as its first argument. `fix(rec_fn, arg)` behaves like the
/// infinite unrolling of `rec_fn` calling itself, applied to `arg`.
/// Termination is the caller's obligation: the recursive calls must be on a
/// strictly decreasing measure of the argument, otherwise evaluation
/// overflows the stack like any other runaway recursion.
///
/// Multiple recursion arguments are threaded as a tuple.
///
/// # Examples
/// ```
/// use church_encodings::combinator::fix;
///
/// let factorial = |n: u64| fix(&|next, n| if n < 2 { 1 } else { n * next(n - 1) }, n);
/// assert_eq!(factorial(5), 120);
/// ```
pub fn fix<Arg, Out>(rec_fn: &dyn Fn(&dyn Fn(Arg) -> Out, Arg) -> Out, arg: Arg) -> Out {
    struct Gen<'g, Arg, Out>(&'g dyn Fn(&Gen<'g, Arg, Out>, Arg) -> Out);

    impl<Arg, Out> Gen<'_, Arg, Out> {
        // U(f) = f(f)
        fn self_apply(&self, arg: Arg) -> Out {
            (self.0)(self, arg)
        }
    }

    Gen(&|gen: &Gen<'_, Arg, Out>, arg| rec_fn(&|x| gen.self_apply(x), arg)).self_apply(arg)
}
