use crate::{
    generate::{FullGenerate, Generate},
    random::Pcg,
    size::Size,
};

pub mod option {
    use super::*;

    /// Draws `None` or an item of the wrapped generator with equal
    /// probability. `None` ranks smaller than any `Some` draw.
    #[derive(Clone, Debug)]
    pub struct Generator<G>(pub(crate) G);

    impl<G: FullGenerate> FullGenerate for Option<G> {
        type Item = Option<G::Item>;
        type Generator = Generator<G::Generator>;

        fn generator() -> Self::Generator {
            Generator(G::generator())
        }
    }

    impl<G: Generate> Generate for Generator<G> {
        type Item = Option<G::Item>;

        fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
            if random.next_below(2) == 1 {
                let (item, size) = self.0.generate(random);
                (Some(item), Size::with(1, vec![size]))
            } else {
                (None, Size::new(0))
            }
        }
    }

    impl<G: Generate> Generate for Option<G> {
        type Item = Option<G::Item>;

        fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
            match self {
                Some(generate) => {
                    let (item, size) = generate.generate(random);
                    (Some(item), size)
                }
                None => (None, Size::new(0)),
            }
        }
    }
}

pub mod result {
    use super::*;

    /// Draws `Ok` or `Err` items with equal probability. `Ok` draws rank
    /// smaller than `Err` draws.
    #[derive(Clone, Debug)]
    pub struct Generator<T, E>(pub(crate) T, pub(crate) E);

    impl<T: FullGenerate, E: FullGenerate> FullGenerate for Result<T, E> {
        type Item = Result<T::Item, E::Item>;
        type Generator = Generator<T::Generator, E::Generator>;

        fn generator() -> Self::Generator {
            Generator(T::generator(), E::generator())
        }
    }

    impl<T: Generate, E: Generate> Generate for Generator<T, E> {
        type Item = Result<T::Item, E::Item>;

        fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
            if random.next_below(2) == 0 {
                let (item, size) = self.0.generate(random);
                (Ok(item), Size::with(0, vec![size]))
            } else {
                let (item, size) = self.1.generate(random);
                (Err(item), Size::with(1, vec![size]))
            }
        }
    }

    impl<T: Generate, E: Generate> Generate for Result<T, E> {
        type Item = Result<T::Item, E::Item>;

        fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
            match self {
                Ok(generate) => {
                    let (item, size) = generate.generate(random);
                    (Ok(item), size)
                }
                Err(generate) => {
                    let (item, size) = generate.generate(random);
                    (Err(item), size)
                }
            }
        }
    }
}
