use crate::{
    generate::{FullGenerate, Generate},
    random::Pcg,
    size::Size,
    utility,
};
use core::{marker::PhantomData, ops};

/// Generates over the whole domain of `T`.
#[derive(Clone, Copy, Debug)]
pub struct Full<T: ?Sized>(PhantomData<T>);

/// Generates floating point values on the unit interval `[0, 1)` with a
/// fixed 52 bit (f64) or 23 bit (f32) mantissa, uniformly spaced.
#[derive(Clone, Copy, Debug)]
pub struct Unit<T: ?Sized>(PhantomData<T>);

/// An inclusive range of values; the conversions from the standard range
/// types panic on empty ranges since there is nothing to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range<T> {
    pub(crate) start: T,
    pub(crate) end: T,
}

impl<T: ?Sized> Full<T> {
    pub(crate) const NEW: Self = Self(PhantomData);
}

impl<T: ?Sized> Unit<T> {
    pub(crate) const NEW: Self = Self(PhantomData);
}

/// Values near zero map to small magnitudes regardless of sign.
pub(crate) const fn zigzag64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

pub(crate) const fn zigzag128(value: i128) -> u64 {
    magnitude128(((value << 1) ^ (value >> 127)) as u128)
}

pub(crate) const fn magnitude64(value: u64) -> u64 {
    value
}

pub(crate) const fn magnitude128(value: u128) -> u64 {
    if value > u64::MAX as u128 {
        u64::MAX
    } else {
        value as u64
    }
}

/// A uniform draw in `0..=span`.
fn draw32(random: &mut Pcg, span: u32) -> u32 {
    if span == u32::MAX {
        random.next()
    } else {
        random.next_below(span + 1)
    }
}

fn draw64(random: &mut Pcg, span: u64) -> u64 {
    if span == u64::MAX {
        random.next64()
    } else {
        random.next64_below(span + 1)
    }
}

fn next128(random: &mut Pcg) -> u128 {
    (random.next64() as u128) << 64 | random.next64() as u128
}

fn draw128(random: &mut Pcg, span: u128) -> u128 {
    if span == u128::MAX {
        next128(random)
    } else {
        let bound = span + 1;
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let raw = next128(random);
            if raw >= threshold {
                break raw % bound;
            }
        }
    }
}

impl Generate for Full<bool> {
    type Item = bool;

    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        let bit = random.next_below(2);
        (bit == 1, Size::new(bit as u64))
    }
}

impl FullGenerate for bool {
    type Item = bool;
    type Generator = Full<bool>;
    fn generator() -> Self::Generator {
        Full::NEW
    }
}

macro_rules! integer {
    ($t:ident, $u:ident, $d:ident, $w:ident, $z:ident) => {
        impl Range<$t> {
            fn draw(&self, random: &mut Pcg) -> $t {
                let span = self.end.wrapping_sub(self.start) as $u;
                self.start.wrapping_add($d(random, span as _) as $u as $t)
            }
        }

        impl Generate for Range<$t> {
            type Item = $t;

            fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
                let value = self.draw(random);
                (value, Size::new($z(value as $w)))
            }
        }

        impl Generate for Full<$t> {
            type Item = $t;

            fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
                Range { start: $t::MIN, end: $t::MAX }.generate(random)
            }
        }

        impl FullGenerate for $t {
            type Item = $t;
            type Generator = Full<$t>;
            fn generator() -> Self::Generator {
                Full::NEW
            }
        }

        impl From<ops::Range<$t>> for Range<$t> {
            fn from(range: ops::Range<$t>) -> Self {
                assert!(range.start < range.end, "range `{range:?}` is empty");
                Self { start: range.start, end: range.end - 1 }
            }
        }

        impl From<ops::RangeInclusive<$t>> for Range<$t> {
            fn from(range: ops::RangeInclusive<$t>) -> Self {
                assert!(range.start() <= range.end(), "range `{range:?}` is empty");
                Self { start: *range.start(), end: *range.end() }
            }
        }

        impl From<ops::RangeFrom<$t>> for Range<$t> {
            fn from(range: ops::RangeFrom<$t>) -> Self {
                Self { start: range.start, end: $t::MAX }
            }
        }

        impl From<ops::RangeTo<$t>> for Range<$t> {
            fn from(range: ops::RangeTo<$t>) -> Self {
                assert!(range.end > $t::MIN, "range `{range:?}` is empty");
                Self { start: $t::MIN, end: range.end - 1 }
            }
        }

        impl From<ops::RangeToInclusive<$t>> for Range<$t> {
            fn from(range: ops::RangeToInclusive<$t>) -> Self {
                Self { start: $t::MIN, end: range.end }
            }
        }

        impl Generate for ops::Range<$t> {
            type Item = $t;
            fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
                Range::from(self.clone()).generate(random)
            }
        }

        impl Generate for ops::RangeInclusive<$t> {
            type Item = $t;
            fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
                Range::from(self.clone()).generate(random)
            }
        }

        impl Generate for ops::RangeFrom<$t> {
            type Item = $t;
            fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
                Range::from(self.clone()).generate(random)
            }
        }

        impl Generate for ops::RangeTo<$t> {
            type Item = $t;
            fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
                Range::from(*self).generate(random)
            }
        }

        impl Generate for ops::RangeToInclusive<$t> {
            type Item = $t;
            fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
                Range::from(*self).generate(random)
            }
        }
    };
}

integer!(i8, u8, draw32, i64, zigzag64);
integer!(i16, u16, draw32, i64, zigzag64);
integer!(i32, u32, draw32, i64, zigzag64);
integer!(i64, u64, draw64, i64, zigzag64);
integer!(i128, u128, draw128, i128, zigzag128);
integer!(isize, usize, draw64, i64, zigzag64);
integer!(u8, u8, draw32, u64, magnitude64);
integer!(u16, u16, draw32, u64, magnitude64);
integer!(u32, u32, draw32, u64, magnitude64);
integer!(u64, u64, draw64, u64, magnitude64);
integer!(u128, u128, draw128, u128, magnitude128);
integer!(usize, usize, draw64, u64, magnitude64);

/// Width of the surrogate block `0xD800..=0xDFFF` that `char` can never
/// hold.
const GAP: u32 = 0x800;

const fn previous(value: u32) -> u32 {
    if value == 0xE000 {
        0xD7FF
    } else {
        value - 1
    }
}

impl Range<char> {
    fn draw(&self, random: &mut Pcg) -> (char, u32) {
        let start = self.start as u32;
        let end = self.end as u32;
        let gap = start < 0xD800 && end > 0xDFFF;
        let span = end - start - if gap { GAP } else { 0 };
        let offset = draw32(random, span);
        let mut value = start + offset;
        if gap && value >= 0xD800 {
            value += GAP;
        }
        match char::from_u32(value) {
            Some(value) => (value, offset),
            None => (char::REPLACEMENT_CHARACTER, offset),
        }
    }
}

impl Generate for Range<char> {
    type Item = char;

    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        let (value, offset) = self.draw(random);
        (value, Size::new(offset as u64))
    }
}

impl Generate for Full<char> {
    type Item = char;

    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        Range { start: '\0', end: char::MAX }.generate(random)
    }
}

impl FullGenerate for char {
    type Item = char;
    type Generator = Full<char>;
    fn generator() -> Self::Generator {
        Full::NEW
    }
}

impl From<ops::Range<char>> for Range<char> {
    fn from(range: ops::Range<char>) -> Self {
        assert!(range.start < range.end, "range `{range:?}` is empty");
        let end = previous(range.end as u32);
        match char::from_u32(end) {
            Some(end) => Self { start: range.start, end },
            None => Self { start: range.start, end: range.start },
        }
    }
}

impl From<ops::RangeInclusive<char>> for Range<char> {
    fn from(range: ops::RangeInclusive<char>) -> Self {
        assert!(range.start() <= range.end(), "range `{range:?}` is empty");
        Self { start: *range.start(), end: *range.end() }
    }
}

impl From<ops::RangeFrom<char>> for Range<char> {
    fn from(range: ops::RangeFrom<char>) -> Self {
        Self { start: range.start, end: char::MAX }
    }
}

impl From<ops::RangeTo<char>> for Range<char> {
    fn from(range: ops::RangeTo<char>) -> Self {
        assert!(range.end > '\0', "range `{range:?}` is empty");
        let end = previous(range.end as u32);
        match char::from_u32(end) {
            Some(end) => Self { start: '\0', end },
            None => Self { start: '\0', end: '\0' },
        }
    }
}

impl From<ops::RangeToInclusive<char>> for Range<char> {
    fn from(range: ops::RangeToInclusive<char>) -> Self {
        Self { start: '\0', end: range.end }
    }
}

impl Generate for ops::Range<char> {
    type Item = char;
    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        Range::from(self.clone()).generate(random)
    }
}

impl Generate for ops::RangeInclusive<char> {
    type Item = char;
    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        Range::from(self.clone()).generate(random)
    }
}

impl Generate for ops::RangeFrom<char> {
    type Item = char;
    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        Range::from(self.clone()).generate(random)
    }
}

impl Generate for ops::RangeTo<char> {
    type Item = char;
    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        Range::from(*self).generate(random)
    }
}

impl Generate for ops::RangeToInclusive<char> {
    type Item = char;
    fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
        Range::from(*self).generate(random)
    }
}

macro_rules! floating {
    ($t:ident, $b:ident, $d:ident, $s:expr) => {
        impl Generate for Unit<$t> {
            type Item = $t;

            fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
                let bits = random.$d() >> $s;
                (bits as $t / ((1 as $b) << ($b::BITS - $s)) as $t, Size::new(bits as u64))
            }
        }

        impl FullGenerate for $t {
            type Item = $t;
            type Generator = Unit<$t>;
            fn generator() -> Self::Generator {
                Unit::NEW
            }
        }

        impl Generate for ops::Range<$t> {
            type Item = $t;

            fn generate(&self, random: &mut Pcg) -> (Self::Item, Size) {
                let span = self.end - self.start;
                assert!(
                    span > 0.0 && span.is_finite(),
                    "range `{self:?}` requires a finite positive span"
                );
                let bits = random.$d() >> $s;
                let unit = bits as $t / ((1 as $b) << ($b::BITS - $s)) as $t;
                let value = self.start + unit * span;
                // Rounding may land on the excluded end bound.
                let value = if value >= self.end {
                    utility::$t::next_down(self.end)
                } else {
                    value
                };
                (value, Size::new(bits as u64))
            }
        }
    };
}

floating!(f32, u32, next, 9);
floating!(f64, u64, next64, 12);
