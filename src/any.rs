use crate::{generate::Generate, random::Pcg, size::Size, utility::tuples};
use ref_cast::RefCast;
use std::{rc::Rc, sync::Arc};

/// A generator that chooses one of the generators it wraps for each draw.
///
/// Constructed by [`Generate::any`] and [`one_of`](crate::one_of). The draw
/// ranks by the chosen index, so earlier alternatives count as smaller.
#[repr(transparent)]
#[derive(Clone, Debug, RefCast)]
pub struct Any<G: ?Sized>(pub(crate) G);

/// A generator paired with a draw weight.
///
/// Collections and tuples of weights choose between their generators with
/// probability proportional to the weights.
#[derive(Clone, Copy, Debug)]
pub struct Weight<T: ?Sized> {
    weight: u32,
    value: T,
}

impl<T> Weight<T> {
    /// Pairs `value` with a weight.
    ///
    /// # Panics
    ///
    /// Panics if the weight is zero.
    pub const fn new(weight: u32, value: T) -> Self {
        assert!(weight > 0, "weights must be positive");
        Self { weight, value }
    }

    pub const fn weight(&self) -> u32 {
        self.weight
    }

    pub const fn value(&self) -> &T {
        &self.value
    }
}

impl<T: ?Sized, U: AsRef<T> + ?Sized> AsRef<T> for Any<U> {
    fn as_ref(&self) -> &T {
        self.0.as_ref()
    }
}

impl<G: ?Sized> Generate for Any<&G>
where
    Any<G>: Generate,
{
    type Item = <Any<G> as Generate>::Item;

    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        Any::ref_cast(self.0).generate(random)
    }
}

impl<G: ?Sized> Generate for Any<&mut G>
where
    Any<G>: Generate,
{
    type Item = <Any<G> as Generate>::Item;

    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        Any::ref_cast(self.0).generate(random)
    }
}

const fn as_slice<T>(slice: &[T]) -> &[T] {
    slice
}

fn indexed<G: Generate>(generators: &[G], random: &mut Pcg) -> (G::Item, Size) {
    assert!(
        !generators.is_empty(),
        "`any` requires at least one generator"
    );
    let index = random.next64_below(generators.len() as u64) as usize;
    let (item, size) = generators[index].generate(random);
    (item, Size::with(index as u64, vec![size]))
}

fn weighted<G: Generate>(weights: &[Weight<G>], random: &mut Pcg) -> (G::Item, Size) {
    assert!(!weights.is_empty(), "`any` requires at least one generator");
    let total = weights
        .iter()
        .map(|weight| weight.weight() as u64)
        .sum::<u64>();
    let mut draw = random.next64_below(total);
    for (index, weight) in weights.iter().enumerate() {
        if draw < weight.weight() as u64 {
            let (item, size) = weight.value().generate(random);
            return (item, Size::with(index as u64, vec![size]));
        }
        draw -= weight.weight() as u64;
    }
    unreachable!("the draw is below the total of the weights");
}

macro_rules! pointer {
    ($t: ident) => {
        impl<G: ?Sized> Generate for Any<$t<G>>
        where
            Any<G>: Generate,
        {
            type Item = <Any<G> as Generate>::Item;

            fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
                Any::ref_cast(self.0.as_ref()).generate(random)
            }
        }
    };
}

pointer!(Box);
pointer!(Rc);
pointer!(Arc);

macro_rules! slice {
    ($t: ty, $i: ident, [$($n: ident)?]) => {
        impl<G: Generate $(, const $n: usize)?> Generate for $t {
            type Item = G::Item;

            fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
                $i(as_slice(self.as_ref()), random)
            }
        }
    };
}

slice!(Any<[G]>, indexed, []);
slice!(Any<[G; N]>, indexed, [N]);
slice!(Any<Vec<G>>, indexed, []);
slice!([Weight<G>], weighted, []);
slice!([Weight<G>; N], weighted, [N]);
slice!(Vec<Weight<G>>, weighted, []);

macro_rules! tuple {
    ($n:ident, $c:tt) => {};
    ($n:ident, $c:tt $(, $ps:ident, $ts:ident, $is:tt)+) => {
        impl<$($ts: Generate,)*> Generate for orn::$n::Or<$($ts,)*> {
            type Item = orn::$n::Or<$($ts::Item,)*>;

            fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
                match self {
                    $(Self::$ts(generator) => {
                        let (item, size) = generator.generate(random);
                        (orn::$n::Or::$ts(item), size)
                    })*
                }
            }
        }

        impl<$($ts: Generate,)*> Generate for Any<($($ts,)*)> {
            type Item = orn::$n::Or<$($ts::Item,)*>;

            fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
                match random.next_below($c) {
                    $($is => {
                        let (item, size) = self.0.$is.generate(random);
                        (orn::$n::Or::$ts(item), Size::with($is, vec![size]))
                    })*
                    _ => unreachable!(),
                }
            }
        }

        impl<$($ts: Generate,)*> Generate for ($(Weight<$ts>,)*) {
            type Item = orn::$n::Or<$($ts::Item,)*>;

            fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
                let total = 0 $(+ self.$is.weight() as u64)*;
                let mut _draw = random.next64_below(total);
                $(
                    if _draw < self.$is.weight() as u64 {
                        let (item, size) = self.$is.value().generate(random);
                        return (orn::$n::Or::$ts(item), Size::with($is, vec![size]));
                    }
                    _draw -= self.$is.weight() as u64;
                )*
                unreachable!("the draw is below the total of the weights");
            }
        }
    };
}

tuples!(tuple);
