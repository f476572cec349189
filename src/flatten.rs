use crate::{generate::Generate, random::Pcg, size::Size};

/// A generator that draws an outer generator's item and then draws from it.
///
/// Constructed by [`Generate::flatten`] and [`Generate::flat_map`].
#[derive(Debug, Clone)]
pub struct Flatten<G: ?Sized>(pub(crate) G);

impl<G: Generate + ?Sized> Generate for Flatten<G>
where
    G::Item: Generate,
{
    type Item = <G::Item as Generate>::Item;

    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        let (inner, outer) = self.0.generate(random);
        let (item, size) = inner.generate(random);
        (item, Size::with(outer.magnitude(), vec![size]))
    }
}
