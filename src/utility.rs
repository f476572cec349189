use core::any::Any;
use std::borrow::Cow;

/// Extracts the message of a panic payload when it carries one.
pub(crate) fn cast(error: Box<dyn Any + Send + 'static>) -> Option<Cow<'static, str>> {
    if let Some(message) = error.downcast_ref::<&'static str>() {
        return Some(Cow::Borrowed(message));
    }
    match error.downcast::<String>() {
        Ok(message) => Some(Cow::Owned(*message)),
        Err(error) => match error.downcast::<Box<str>>() {
            Ok(message) => Some(Cow::Owned(message.into_string())),
            Err(_) => None,
        },
    }
}

macro_rules! floating {
    ($t:ident, $b:ident) => {
        pub(crate) mod $t {
            const SIGN_MASK: $b = 1 << ($b::BITS - 1);

            /// Copied from '<https://doc.rust-lang.org/src/core/num/>' to
            /// keep supporting lower rust versions.
            #[inline]
            pub const fn next_down(value: $t) -> $t {
                let bits = value.to_bits();
                if value.is_nan() || bits == $t::NEG_INFINITY.to_bits() {
                    return value;
                }

                let abs = bits & !SIGN_MASK;
                let next_bits = if abs == 0 {
                    SIGN_MASK | 1
                } else if bits == abs {
                    bits - 1
                } else {
                    bits + 1
                };

                $t::from_bits(next_bits)
            }
        }
    };
}

floating!(f32, u32);
floating!(f64, u64);

macro_rules! tuples {
    ($m:ident) => {
        $m!(or0, 0);
        $m!(or1, 1, p0, T0, 0);
        $m!(or2, 2, p0, T0, 0, p1, T1, 1);
        $m!(or3, 3, p0, T0, 0, p1, T1, 1, p2, T2, 2);
        $m!(or4, 4, p0, T0, 0, p1, T1, 1, p2, T2, 2, p3, T3, 3);
        $m!(
            or5, 5, p0, T0, 0, p1, T1, 1, p2, T2, 2, p3, T3, 3, p4, T4, 4
        );
        $m!(
            or6, 6, p0, T0, 0, p1, T1, 1, p2, T2, 2, p3, T3, 3, p4, T4, 4, p5, T5, 5
        );
        $m!(
            or7, 7, p0, T0, 0, p1, T1, 1, p2, T2, 2, p3, T3, 3, p4, T4, 4, p5, T5, 5, p6, T6, 6
        );
        $m!(
            or8, 8, p0, T0, 0, p1, T1, 1, p2, T2, 2, p3, T3, 3, p4, T4, 4, p5, T5, 5, p6, T6, 6,
            p7, T7, 7
        );
        $m!(
            or9, 9, p0, T0, 0, p1, T1, 1, p2, T2, 2, p3, T3, 3, p4, T4, 4, p5, T5, 5, p6, T6, 6,
            p7, T7, 7, p8, T8, 8
        );
    };
}

pub(crate) use tuples;
