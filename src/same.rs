use crate::{generate::Generate, random::Pcg, size::Size};

/// A generator that clones the same value on every draw.
///
/// Constructed by [`same`](crate::same). Constant draws always rank as small
/// as possible.
#[derive(Debug, Clone)]
pub struct Same<T: ?Sized>(pub T);

impl<T: Clone> Generate for Same<T> {
    type Item = T;

    fn generate(&self, _: &mut Pcg) -> (Self::Item, Size) {
        (self.0.clone(), Size::new(0))
    }
}

macro_rules! constant {
    ($($t:ty),*) => {
        $(
            impl Generate for $t {
                type Item = $t;

                fn generate(&self, _: &mut Pcg) -> (Self::Item, Size) {
                    (*self, Size::new(0))
                }
            }
        )*
    };
}

constant!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
