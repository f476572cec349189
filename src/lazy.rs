use crate::{generate::Generate, random::Pcg, size::Size};
use std::sync::OnceLock;

/// A generator built on first use, which allows recursive definitions.
///
/// Constructed by [`lazy`](crate::lazy).
pub struct Lazy<T, F>(OnceLock<T>, F);

impl<G: Generate, F: Fn() -> G> Lazy<G, F> {
    pub const fn new(generate: F) -> Self {
        Self(OnceLock::new(), generate)
    }
}

impl<G: Generate, F: Fn() -> G> Generate for Lazy<G, F> {
    type Item = G::Item;

    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        self.0.get_or_init(|| self.1()).generate(random)
    }
}

#[rustversion::since(1.80)]
#[allow(clippy::incompatible_msrv)]
impl<G: Generate, F: FnOnce() -> G> Generate for core::cell::LazyCell<G, F> {
    type Item = G::Item;

    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        Self::force(self).generate(random)
    }
}

#[rustversion::since(1.80)]
#[allow(clippy::incompatible_msrv)]
impl<G: Generate, F: FnOnce() -> G> Generate for std::sync::LazyLock<G, F> {
    type Item = G::Item;

    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        Self::force(self).generate(random)
    }
}
