use crate::{
    generate::{FullGenerate, Generate},
    random::Pcg,
    size::Size,
};
use core::{iter, marker::PhantomData, ops};
use std::{
    collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque},
    hash::{BuildHasher, Hash},
    rc::Rc,
    sync::Arc,
};

/// Default exclusive bound on the length of generated collections.
pub const COLLECTS: usize = 256;

/// A generator that draws a count and then that many items, gathered in a
/// collection.
///
/// Constructed by [`Generate::collect`] and [`Generate::collect_with`]. The
/// size's magnitude comes from the count draw, so shorter collections always
/// rank below longer ones and smaller elements break ties.
#[derive(Debug, Default)]
pub struct Collect<G: ?Sized, C, F: ?Sized> {
    _collection: PhantomData<F>,
    count: C,
    element: G,
}

impl<G: Generate, C: Generate<Item = usize>, F: FromIterator<G::Item>> Collect<G, C, F> {
    pub const fn new(element: G, count: C) -> Self {
        Self {
            _collection: PhantomData,
            count,
            element,
        }
    }
}

impl<G: Clone, C: Clone, F> Clone for Collect<G, C, F> {
    fn clone(&self) -> Self {
        Self {
            _collection: PhantomData,
            count: self.count.clone(),
            element: self.element.clone(),
        }
    }
}

impl<G: Generate + ?Sized, C: Generate<Item = usize>, F: FromIterator<G::Item>> Generate
    for Collect<G, C, F>
{
    type Item = F;

    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        let (count, at) = self.count.generate(random);
        let mut parts = Vec::with_capacity(count);
        let items = iter::repeat_with(|| {
            let (item, part) = self.element.generate(random);
            parts.push(part);
            item
        })
        .take(count)
        .collect();
        (items, Size::with(at.magnitude(), parts))
    }
}

macro_rules! canonical {
    ($t:ty, $f:ty) => {
        impl<G: FullGenerate> FullGenerate for $t {
            type Item = $f;
            type Generator = Collect<G::Generator, ops::Range<usize>, Self::Item>;

            fn generator() -> Self::Generator {
                G::generator().collect()
            }
        }
    };
}

macro_rules! sequence {
    ($t:ty, $f:ty) => {
        canonical!($t, $f);

        impl<G: Generate> Generate for $t {
            type Item = $f;

            fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
                let mut parts = Vec::with_capacity(self.len());
                let items = self
                    .iter()
                    .map(|generator| {
                        let (item, size) = generator.generate(random);
                        parts.push(size);
                        item
                    })
                    .collect();
                (items, Size::with(0, parts))
            }
        }
    };
}

macro_rules! frozen {
    ($t:ty, $f:ty) => {
        canonical!($t, $f);

        impl<G: Generate> Generate for $t {
            type Item = $f;

            fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
                let mut parts = Vec::with_capacity(self.len());
                let items = self
                    .iter()
                    .map(|generator| {
                        let (item, size) = generator.generate(random);
                        parts.push(size);
                        item
                    })
                    .collect::<Vec<_>>();
                (items.into(), Size::with(0, parts))
            }
        }
    };
}

sequence!(Vec<G>, Vec<G::Item>);
sequence!(VecDeque<G>, VecDeque<G::Item>);
sequence!(LinkedList<G>, LinkedList<G::Item>);
frozen!(Box<[G]>, Box<[G::Item]>);
frozen!(Rc<[G]>, Rc<[G::Item]>);
frozen!(Arc<[G]>, Arc<[G::Item]>);

impl FullGenerate for String {
    type Item = Self;
    type Generator = Collect<<char as FullGenerate>::Generator, ops::Range<usize>, Self::Item>;

    fn generator() -> Self::Generator {
        char::generator().collect()
    }
}

impl Generate for String {
    type Item = Self;

    fn generate(&self, _: &mut Pcg) -> (Self::Item, Size) {
        (self.clone(), Size::new(0))
    }
}

impl<K: FullGenerate, V: FullGenerate> FullGenerate for BTreeMap<K, V>
where
    K::Item: Ord,
{
    type Item = BTreeMap<K::Item, V::Item>;
    type Generator = Collect<<(K, V) as FullGenerate>::Generator, ops::Range<usize>, Self::Item>;

    fn generator() -> Self::Generator {
        <(K, V)>::generator().collect()
    }
}

impl<G: FullGenerate> FullGenerate for BTreeSet<G>
where
    G::Item: Ord,
{
    type Item = BTreeSet<G::Item>;
    type Generator = Collect<G::Generator, ops::Range<usize>, Self::Item>;

    fn generator() -> Self::Generator {
        G::generator().collect()
    }
}

impl<K: FullGenerate, V: FullGenerate, S: BuildHasher + Default> FullGenerate for HashMap<K, V, S>
where
    K::Item: Eq + Hash,
{
    type Item = HashMap<K::Item, V::Item, S>;
    type Generator = Collect<<(K, V) as FullGenerate>::Generator, ops::Range<usize>, Self::Item>;

    fn generator() -> Self::Generator {
        <(K, V)>::generator().collect()
    }
}

impl<G: FullGenerate, S: BuildHasher + Default> FullGenerate for HashSet<G, S>
where
    G::Item: Eq + Hash,
{
    type Item = HashSet<G::Item, S>;
    type Generator = Collect<G::Generator, ops::Range<usize>, Self::Item>;

    fn generator() -> Self::Generator {
        G::generator().collect()
    }
}

impl<G: FullGenerate> FullGenerate for BinaryHeap<G>
where
    G::Item: Ord,
{
    type Item = BinaryHeap<G::Item>;
    type Generator = Collect<G::Generator, ops::Range<usize>, Self::Item>;

    fn generator() -> Self::Generator {
        G::generator().collect()
    }
}
