use crate::{
    any::Any,
    generate::Generate,
    lazy::Lazy,
    primitive::{Full, Unit},
    same::Same,
};
use core::ops;

/// A generator for the full range of `T`.
pub const fn number<T>() -> Full<T>
where
    Full<T>: Generate<Item = T>,
{
    Full::NEW
}

/// A generator for the non-negative range of `T`.
pub fn positive<T: Default>() -> ops::RangeFrom<T>
where
    ops::RangeFrom<T>: Generate<Item = T>,
{
    T::default()..
}

/// A generator for the non-positive range of `T`.
pub fn negative<T: Default>() -> ops::RangeToInclusive<T>
where
    ops::RangeToInclusive<T>: Generate<Item = T>,
{
    ..=T::default()
}

/// A generator for ascii letters.
pub fn letter() -> impl Generate<Item = char> {
    one_of(['a'..='z', 'A'..='Z'])
}

/// A generator for ascii digits.
pub fn digit() -> impl Generate<Item = char> {
    '0'..='9'
}

/// A generator for ascii characters.
pub fn ascii() -> impl Generate<Item = char> {
    0 as char..127 as char
}

/// A generator for the unit interval `[0.0, 1.0)` of `T`.
pub const fn unit<T>() -> Unit<T>
where
    Unit<T>: Generate<Item = T>,
{
    Unit::NEW
}

/// A generator that clones `value` on every draw.
pub const fn same<T>(value: T) -> Same<T> {
    Same(value)
}

/// A generator that chooses uniformly between `generators` on every draw.
///
/// # Panics
///
/// Panics if `generators` is empty.
pub fn one_of<G: Generate, const N: usize>(generators: [G; N]) -> Any<[G; N]> {
    assert!(N > 0, "`one_of` requires at least one generator");
    Any(generators)
}

/// A generator that calls `generate` on every draw. Draws rank as small as
/// possible.
pub fn with<T, F: Fn() -> T>(generate: F) -> impl Generate<Item = T> {
    ().map(move |_| generate())
}

/// A generator built by `generate` on first use, which allows recursive
/// definitions.
pub const fn lazy<G: Generate, F: Fn() -> G>(generate: F) -> Lazy<G, F> {
    Lazy::new(generate)
}
