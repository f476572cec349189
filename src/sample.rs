//! A utility for generating random values from a generator without running
//! checks.
use crate::{
    generate::Generate,
    random::{Pcg, Seed},
};
use core::iter;

/// An infinite iterator of random items drawn from a generator.
///
/// This struct is created by the [`Sample::samples`] and
/// [`Sample::samples_with`] methods.
#[derive(Debug, Clone)]
pub struct Samples<G: ?Sized> {
    random: Pcg,
    generator: G,
}

/// An extension trait, implemented for all [`Generate`] types, that provides
/// methods for drawing items outside of a check.
pub trait Sample: Generate {
    /// Creates an iterator of items drawn from a freshly seeded sequence.
    fn samples(self) -> Samples<Self>
    where
        Self: Sized,
    {
        Samples {
            random: Pcg::new(),
            generator: self,
        }
    }

    /// Creates an iterator of items drawn from the sequence that `seed`
    /// identifies. Two iterators with the same seed yield the same items.
    fn samples_with(self, seed: Seed) -> Samples<Self>
    where
        Self: Sized,
    {
        Samples {
            random: Pcg::from_seed(seed),
            generator: self,
        }
    }

    /// Draws a single item, advancing `random`.
    fn sample(&self, random: &mut Pcg) -> Self::Item {
        let (item, _) = self.generate(random);
        item
    }
}

impl<G: Generate + ?Sized> Sample for G {}

impl<G: ?Sized> Samples<G> {
    /// The seed of the next item this iterator will yield.
    pub const fn seed(&self) -> Seed {
        self.random.seed()
    }
}

impl<G: Generate> Iterator for Samples<G> {
    type Item = G::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let (item, _) = self.generator.generate(&mut self.random);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<G: Generate> iter::FusedIterator for Samples<G> {}
