pub mod common;
use common::*;

#[test]
fn yields_exactly_the_taken_count() {
    for count in [0, 1, 17, 100] {
        assert_eq!(number::<u64>().samples().take(count).count(), count);
    }
}

#[test]
fn restarts_from_the_same_seed() {
    let seed = Seed::new(9, 1234);
    let left: Vec<u64> = number::<u64>().samples_with(seed).take(100).collect();
    let right: Vec<u64> = number::<u64>().samples_with(seed).take(100).collect();
    assert_eq!(left, right);
}

#[test]
fn fresh_iterators_draw_distinct_streams() {
    let left: Vec<u64> = number::<u64>().samples().take(10).collect();
    let right: Vec<u64> = number::<u64>().samples().take(10).collect();
    assert_ne!(left, right);
}

#[test]
fn the_seed_names_the_next_item() {
    let mut samples = number::<u64>().samples();
    for _ in 0..10 {
        let seed = samples.seed();
        let item = samples.next().unwrap();
        assert_eq!(number::<u64>().samples_with(seed).next().unwrap(), item);
    }
}

#[test]
fn sample_advances_the_generator() {
    let mut random = Pcg::new();
    let seed = random.seed();
    let first = number::<u64>().sample(&mut random);
    let second = number::<u64>().sample(&mut random);
    assert_ne!(random.seed(), seed);
    let mut replay = Pcg::from_seed(seed);
    assert_eq!(number::<u64>().sample(&mut replay), first);
    assert_eq!(number::<u64>().sample(&mut replay), second);
}
