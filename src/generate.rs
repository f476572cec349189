use crate::{
    any::Any,
    array::Array,
    boxed::Boxed,
    collect::{Collect, COLLECTS},
    flatten::Flatten,
    map::Map,
    random::Pcg,
    size::Size,
    utility::tuples,
};
use core::ops;

/// Associates a type with its canonical generator such that `T::generator()`
/// produces arbitrary values of `T`.
///
/// Implemented for primitives, tuples, arrays, `Option`, `Result`, `String`
/// and the common standard collections.
pub trait FullGenerate {
    type Item;
    type Generator: Generate<Item = Self::Item>;
    fn generator() -> Self::Generator;
}

/// A recipe for drawing random values together with the [`Size`] that ranks
/// them as counterexample candidates.
///
/// A generator is pure: it holds no mutable state, so the same instance may
/// be used concurrently with distinct [`Pcg`] sources and replays identical
/// values from identical seeds.
pub trait Generate {
    type Item;

    /// Draws one item and the size that ranks it, where smaller sizes mean
    /// simpler items.
    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size);

    /// Transforms generated items while preserving their size.
    ///
    /// # Examples
    /// ```
    /// use recheck::*;
    ///
    /// let generator = Generate::map(0..100i32, |value| value * 2);
    /// let mut random = random::Pcg::new();
    /// let (item, _) = generator.generate(&mut random);
    /// assert!(item % 2 == 0 && item < 200);
    /// ```
    fn map<T, F: Fn(Self::Item) -> T>(self, map: F) -> Map<Self, F>
    where
        Self: Sized,
    {
        Map(map, self)
    }

    /// Generates with a generator built from a generated item.
    ///
    /// The resulting size wraps the inner draw's size under the outer draw's
    /// magnitude, so simpler outer draws dominate the ranking.
    fn flat_map<G: Generate, F: Fn(Self::Item) -> G>(self, map: F) -> Flatten<Map<Self, F>>
    where
        Self: Sized,
    {
        Flatten(self.map(map))
    }

    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: Generate,
    {
        Flatten(self)
    }

    /// Chooses uniformly between the generators in a collection or tuple of
    /// generators.
    fn any(self) -> Any<Self>
    where
        Self: Sized,
    {
        Any(self)
    }

    /// Generates arrays of `N` generated items.
    fn array<const N: usize>(self) -> Array<Self, N>
    where
        Self: Sized,
    {
        Array(self)
    }

    /// Generates collections of generated items with a length drawn below
    /// [`COLLECTS`].
    fn collect<F: FromIterator<Self::Item>>(self) -> Collect<Self, ops::Range<usize>, F>
    where
        Self: Sized,
    {
        self.collect_with(0..COLLECTS)
    }

    /// Generates collections of generated items with a length drawn from
    /// `count`.
    fn collect_with<C: Generate<Item = usize>, F: FromIterator<Self::Item>>(
        self,
        count: C,
    ) -> Collect<Self, C, F>
    where
        Self: Sized,
    {
        Collect::new(self, count)
    }

    /// Erases the generator's type, which allows recursive definitions.
    ///
    /// # Examples
    /// ```
    /// use recheck::*;
    ///
    /// #[derive(Debug)]
    /// enum Node {
    ///     Leaf,
    ///     Branch(Box<Node>, Box<Node>),
    /// }
    ///
    /// fn node() -> impl Generate<Item = Node> {
    ///     lazy(|| {
    ///         [
    ///             any::Weight::new(3, with(|| Node::Leaf).boxed()),
    ///             any::Weight::new(
    ///                 1,
    ///                 (node(), node())
    ///                     .map(|(left, right)| Node::Branch(Box::new(left), Box::new(right)))
    ///                     .boxed(),
    ///             ),
    ///         ]
    ///     })
    /// }
    ///
    /// let mut random = random::Pcg::new();
    /// node().generate(&mut random);
    /// ```
    fn boxed(self) -> Boxed<Self::Item>
    where
        Self: Sized + 'static,
    {
        Boxed::new(self)
    }
}

impl<G: Generate + ?Sized> Generate for &G {
    type Item = G::Item;
    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        (**self).generate(random)
    }
}

impl<G: Generate + ?Sized> Generate for &mut G {
    type Item = G::Item;
    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        (**self).generate(random)
    }
}

macro_rules! tuple {
    ($n:ident, $c:tt) => {
        impl FullGenerate for () {
            type Item = ();
            type Generator = ();
            fn generator() -> Self::Generator {}
        }

        impl Generate for () {
            type Item = ();
            fn generate(&self, _random: &mut Pcg) -> (Self::Item, Size) {
                ((), Size::new(0))
            }
        }
    };
    ($n:ident, $c:tt $(, $ps:ident, $ts:ident, $is:tt)+) => {
        impl<$($ts: FullGenerate,)*> FullGenerate for ($($ts,)*) {
            type Item = ($($ts::Item,)*);
            type Generator = ($($ts::Generator,)*);

            fn generator() -> Self::Generator {
                ($($ts::generator(),)*)
            }
        }

        impl<$($ts: Generate,)*> Generate for ($($ts,)*) {
            type Item = ($($ts::Item,)*);

            fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
                $(let $ps = self.$is.generate(random);)*
                (($($ps.0,)*), Size::with(0, vec![$($ps.1,)*]))
            }
        }
    };
}

tuples!(tuple);
