use crate::{generate::Generate, random::Pcg, size::Size};

/// A generator that applies a function to the items of another generator.
///
/// Constructed by [`Generate::map`].
#[derive(Debug, Clone)]
pub struct Map<T: ?Sized, F>(pub(crate) F, pub(crate) T);

impl<G: Generate + ?Sized, T, F: Fn(G::Item) -> T> Generate for Map<G, F> {
    type Item = T;

    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        let (item, size) = self.1.generate(random);
        (self.0(item), size)
    }
}
