use crate::{
    generate::{FullGenerate, Generate},
    random::Pcg,
    size::Size,
};
use core::array;

/// A generator that draws a fixed number of items from the same generator.
///
/// Constructed by [`Generate::array`].
#[derive(Clone, Debug)]
pub struct Array<G: ?Sized, const N: usize>(pub(crate) G);

impl<G: Generate + ?Sized, const N: usize> Generate for Array<G, N> {
    type Item = [G::Item; N];

    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        let mut parts = Vec::with_capacity(N);
        let items = array::from_fn(|_| {
            let (item, size) = self.0.generate(random);
            parts.push(size);
            item
        });
        (items, Size::with(0, parts))
    }
}

impl<G: FullGenerate, const N: usize> FullGenerate for [G; N] {
    type Item = [G::Item; N];
    type Generator = [G::Generator; N];

    fn generator() -> Self::Generator {
        array::from_fn(|_| G::generator())
    }
}

impl<G: Generate, const N: usize> Generate for [G; N] {
    type Item = [G::Item; N];

    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        let mut parts = Vec::with_capacity(N);
        let items = array::from_fn(|index| {
            let (item, size) = self[index].generate(random);
            parts.push(size);
            item
        });
        (items, Size::with(0, parts))
    }
}
