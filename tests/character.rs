pub mod common;
use common::*;
use recheck::same::Same;
use std::{
    collections::{LinkedList, VecDeque},
    rc::Rc,
    sync::Arc,
};

#[test]
#[should_panic]
fn empty_range() {
    char::generator()
        .flat_map(|value| value..value)
        .check(COUNT, |_| true)
        .unwrap();
}

#[test]
fn is_same() -> Result {
    char::generator()
        .flat_map(|value| (value, Same(value)))
        .check(COUNT, |&(left, right)| left == right)?;
    Ok(())
}

#[test]
fn is_ascii() -> Result {
    ascii().check(COUNT, |value| value.is_ascii())?;
    Ok(())
}

#[test]
fn is_digit() -> Result {
    digit().check(COUNT, |value| value.is_ascii_digit())?;
    Ok(())
}

#[test]
fn is_alphabetic() -> Result {
    letter().check(COUNT, |value| value.is_ascii_alphabetic())?;
    Ok(())
}

#[test]
fn full_does_not_panic() -> Result {
    char::generator().check(COUNT, |_| true)?;
    Ok(())
}

#[test]
fn stays_in_a_range_that_spans_the_surrogates() -> Result {
    let range = '\u{D000}'..='\u{E800}';
    range
        .clone()
        .check(COUNT, |value| range.contains(value))?;
    let mut below = false;
    let mut above = false;
    for value in range.clone().samples().take(COUNT) {
        below |= (value as u32) < 0xD800;
        above |= (value as u32) > 0xDFFF;
    }
    assert!(below && above);
    Ok(())
}

#[test]
fn ranks_by_the_offset_from_the_range_start() {
    let mut random = Pcg::new();
    for _ in 0..COUNT {
        let (value, size) = ('a'..='z').generate(&mut random);
        assert_eq!(size, Size::new(value as u64 - 'a' as u64));
    }
}

#[test]
fn the_surrogate_gap_does_not_count_toward_the_size() {
    let range = '\u{D000}'..='\u{E800}';
    let mut random = Pcg::new();
    for _ in 0..COUNT {
        let (value, size) = range.generate(&mut random);
        let gap = if (value as u32) > 0xDFFF { 0x800 } else { 0 };
        assert_eq!(size, Size::new(value as u64 - 0xD000 - gap));
    }
}

macro_rules! collection {
    ($m:ident, $t:ty $(, $i:ident)?) => {
        mod $m {
            use super::*;

            #[test]
            fn has_same_count() -> Result {
                Generate::flat_map(0..COUNT, |count| (count, char::generator().collect_with::<_, $t>(count)))
                    .check(COUNT, |(count, value)| value $(.$i())? .count() == *count)?;
                Ok(())
            }

            #[test]
            fn is_ascii() -> Result {
                ascii().collect::<$t>().check(COUNT, |value| value $(.$i())? .all(|value| value.is_ascii()))?;
                Ok(())
            }

            #[test]
            fn is_digit() -> Result {
                digit().collect::<$t>().check(COUNT, |value| value $(.$i())? .all(|value| value.is_ascii_digit()))?;
                Ok(())
            }

            #[test]
            fn is_alphabetic() -> Result {
                letter().collect::<$t>().check(COUNT, |value| value $(.$i())? .all(|value| value.is_ascii_alphabetic()))?;
                Ok(())
            }
        }
    };
}

collection!(string, String, chars);
collection!(vec_char, Vec<char>, into_iter);
collection!(vecdeque_char, VecDeque<char>, into_iter);
collection!(linked_list, LinkedList<char>, into_iter);
collection!(box_char, Box<[char]>, into_iter);
collection!(rc_char, Rc<[char]>, into_iter);
collection!(arc_char, Arc<[char]>, into_iter);
