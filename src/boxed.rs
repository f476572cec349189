use crate::{generate::Generate, random::Pcg, size::Size};

/// A generator with its concrete type erased.
///
/// Constructed by [`Generate::boxed`]. Erasure keeps recursive generator
/// definitions finite.
pub struct Boxed<T>(Box<dyn Generate<Item = T>>);

impl<T> Boxed<T> {
    pub(crate) fn new<G: Generate<Item = T> + 'static>(generate: G) -> Self {
        Self(Box::new(generate))
    }
}

impl<T> Generate for Boxed<T> {
    type Item = T;

    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        self.0.generate(random)
    }
}
