pub mod common;
use common::*;

const SEED: Seed = Seed::new(54, 0x185706b82c2e03f8);

#[test]
fn matches_the_reference_stream() {
    let mut random = Pcg::from_seed(SEED);
    assert_eq!(random.next(), 0x7b47f409);
    assert_eq!(random.next(), 0xba1d3330);
    assert_eq!(random.next(), 0x83d2f293);
    assert_eq!(random.next(), 0xbfa4784b);
}

#[test]
fn advances_the_state_once_per_draw() {
    let mut random = Pcg::from_seed(SEED);
    random.next();
    assert_eq!(random.seed().state(), 0x2b47fed88766bb05);
    assert_eq!(random.seed().stream(), SEED.stream());
}

#[test]
fn joins_two_draws_high_word_first() {
    let mut random = Pcg::from_seed(SEED);
    assert_eq!(random.next64(), 0x7b47f409ba1d3330);
}

#[test]
fn bounded_draws_match_the_reference_stream() {
    let mut random = Pcg::from_seed(SEED);
    let draws = [(); 8].map(|_| random.next_below(10));
    assert_eq!(draws, [7, 4, 5, 5, 6, 5, 5, 4]);
    let mut random = Pcg::from_seed(SEED);
    let draws = [(); 4].map(|_| random.next64_below(1000));
    assert_eq!(draws, [536, 635, 821, 394]);
}

#[test]
fn bounded_draws_stay_below_the_bound() {
    let mut random = Pcg::new();
    for bound in [1, 2, 3, 10, 1000, u32::MAX] {
        for _ in 0..1000 {
            assert!(random.next_below(bound) < bound);
            assert!(random.next64_below(bound as u64) < bound as u64);
        }
    }
}

#[test]
fn replays_the_same_draws_from_a_capture() {
    let mut random = Pcg::new();
    for _ in 0..17 {
        random.next();
    }
    let seed = random.seed();
    assert_eq!(Pcg::from_seed(seed).seed(), seed);
    let mut replay = Pcg::from_seed(seed);
    let draws = [(); 8].map(|_| replay.next64());
    assert_eq!([(); 8].map(|_| random.next64()), draws);
}

#[test]
fn fresh_generators_draw_distinct_streams() {
    let left = Pcg::new();
    let right = Pcg::new();
    assert_ne!(left.seed().stream(), right.seed().stream());
}

#[test]
fn token_formats_stream_then_state() {
    assert_eq!(SEED.to_string(), "36185706b82c2e03f8");
    assert_eq!(Seed::new(0xabc, 7).to_string(), "abc0000000000000007");
    assert_eq!(Seed::new(0, 1).to_string(), "00000000000000001");
}

#[test]
fn token_parses_back_without_loss() -> Result {
    assert_eq!("36185706b82c2e03f8".parse::<Seed>()?, SEED);
    for seed in [Seed::new(0, 0), Seed::new(0xabc, 7), Seed::new(u64::MAX, u64::MAX)] {
        assert_eq!(seed.to_string().parse::<Seed>()?, seed);
    }
    Ok(())
}

#[test]
fn short_tokens_are_incomplete() {
    assert_eq!("".parse::<Seed>(), Err(ParseSeedError::Incomplete));
    assert_eq!("123".parse::<Seed>(), Err(ParseSeedError::Incomplete));
    assert_eq!(
        "0123456789abcdef".parse::<Seed>(),
        Err(ParseSeedError::Incomplete)
    );
}

#[test]
fn malformed_tokens_are_rejected() {
    assert!(matches!(
        "g6185706b82c2e03f8".parse::<Seed>(),
        Err(ParseSeedError::Digit(_))
    ));
    assert!("🦀".repeat(17).parse::<Seed>().is_err());
}

#[test]
fn unit_draws_use_the_high_mantissa_bits() {
    let mut random = Pcg::from_seed(SEED);
    let (value, size) = unit::<f64>().generate(&mut random);
    assert_eq!(value, 0x7b47f409ba1d3u64 as f64 / (1u64 << 52) as f64);
    assert_eq!(size, Size::new(0x7b47f409ba1d3));
}
