pub mod common;
use common::*;

#[test]
fn samples_true() {
    assert!(bool::generator().samples().take(100).any(|value| value));
}

#[test]
fn samples_false() {
    assert!(bool::generator().samples().take(100).any(|value| !value));
}

#[test]
fn is_constant() -> Result {
    bool::generator()
        .flat_map(|value| (value, same(value)))
        .check(COUNT, |&(left, right)| left == right)?;
    Ok(())
}

#[test]
fn sizes_rank_false_below_true() {
    let mut random = Pcg::new();
    let generator = bool::generator();
    for _ in 0..COUNT {
        let (value, size) = generator.generate(&mut random);
        assert_eq!(size.magnitude(), value as u64);
        assert!(size.parts().is_empty());
    }
}

#[test]
fn reports_false_when_everything_fails() {
    let fail = bool::generator().check(COUNT, |_| false).unwrap_err();
    assert!(!fail.item);
    assert_eq!(fail.size, Size::new(0));
    assert_eq!(fail.cause, Cause::Disprove(()));
}
