use crate::{
    generate::Generate,
    prove::Prove,
    random::{Pcg, Seed},
    size::Size,
    utility,
};
use core::{fmt, num::NonZeroUsize, panic::AssertUnwindSafe, time::Duration};
use std::{
    borrow::Cow,
    error,
    panic::catch_unwind,
    sync::{
        atomic::{AtomicU64, AtomicUsize, Ordering},
        Mutex,
    },
    thread,
    time::Instant,
};

/// Default number of draws of a check.
pub const COUNT: usize = 100;

/// Configures a counterexample search.
///
/// This struct is created by the [`Check::checker`] method.
#[derive(Clone, Debug)]
pub struct Checker<G: ?Sized> {
    /// The number of draws of the search.
    ///
    /// Defaults to [`COUNT`].
    pub count: usize,
    /// A seed whose draw is replayed before the randomized draws begin.
    ///
    /// Defaults to `None`.
    pub seed: Option<Seed>,
    /// The number of threads the draws are distributed over.
    ///
    /// Defaults to the available parallelism.
    pub threads: usize,
    /// A budget that replaces the draw count; when it is set, draws are
    /// claimed until the budget runs out.
    ///
    /// Defaults to `None`.
    pub time: Option<Duration>,
    /// The generator that provides the items under check.
    pub generator: G,
}

/// An extension trait, implemented for all [`Generate`] types, that checks a
/// property against generated items and reports the smallest failing item.
pub trait Check: Generate {
    /// Creates a [`Checker`] for this generator.
    fn checker(self) -> Checker<Self>
    where
        Self: Sized,
    {
        Checker::new(self)
    }

    /// Checks the property `check` against `count` generated items.
    ///
    /// On failure, the returned [`Fail`] holds the smallest failing item
    /// observed over the whole run and a seed that replays it.
    fn check<P, F>(&self, count: usize, check: F) -> Result<(), Fail<Self::Item, P::Error>>
    where
        P: Prove,
        F: Fn(&Self::Item) -> P + Sync,
        Self: Sync,
        Self::Item: Send,
        P::Error: Send,
    {
        let mut checker = Checker::new(self);
        checker.count = count;
        checker.check(check)
    }
}

impl<G: Generate + ?Sized> Check for G {}

/// The smallest failing draw of a check.
#[derive(Clone, Debug)]
pub struct Fail<T, E> {
    /// The failing item.
    pub item: T,
    /// Replays exactly the draw that produced [`Fail::item`].
    pub seed: Seed,
    /// The rank of the failing draw.
    pub size: Size,
    /// The number of times a smaller failing draw replaced the reported one.
    pub shrinks: usize,
    /// The number of draws of the whole run.
    pub total: usize,
    /// What failed the draw.
    pub cause: Cause<E>,
}

/// What failed a draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cause<E> {
    /// The property returned an error for the item.
    Disprove(E),
    /// The property panicked, with the panic message when it carries one.
    Panic(Option<Cow<'static, str>>),
}

impl<T, E: fmt::Debug> Fail<T, E> {
    pub fn message(&self) -> Cow<'static, str> {
        match &self.cause {
            Cause::Disprove(error) => format!("{error:?}").into(),
            Cause::Panic(Some(message)) => message.clone(),
            Cause::Panic(None) => "panicked".into(),
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Display for Fail<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "check failed for item `{:?}` after {} draws and {} shrink{} (replay with `RECHECK_SEED={}`): {}",
            self.item,
            self.total,
            self.shrinks,
            if self.shrinks == 1 { "" } else { "s" },
            self.seed,
            self.message(),
        )
    }
}

impl<T: fmt::Debug, E: fmt::Debug> error::Error for Fail<T, E> {}

struct Best<T, E> {
    seed: Seed,
    size: Size,
    item: T,
    cause: Cause<E>,
}

struct Search<T, E> {
    best: Mutex<Option<Best<T, E>>>,
    /// Root magnitude of the retained best, or `u64::MAX` before a failure.
    magnitude: AtomicU64,
    shrinks: AtomicUsize,
    total: AtomicUsize,
}

impl<G> Checker<G> {
    pub fn new(generator: G) -> Self {
        Self {
            count: COUNT,
            seed: None,
            threads: thread::available_parallelism().map_or(1, NonZeroUsize::get),
            time: None,
            generator,
        }
    }

    /// Applies the `RECHECK_*` environment overrides.
    pub fn env(mut self) -> Self {
        environment::update(&mut self);
        self
    }
}

impl<G: Generate + ?Sized> Checker<G> {
    /// Checks the property `check` against the configured number of draws.
    ///
    /// When a seed is configured, its draw runs first and a failure of that
    /// draw is recorded before any randomized draw competes with it. The
    /// remaining draws always exhaust the configured budget, and the smallest
    /// failing one is reported.
    pub fn check<P, F>(&self, check: F) -> Result<(), Fail<G::Item, P::Error>>
    where
        P: Prove,
        F: Fn(&G::Item) -> P + Sync,
        G: Sync,
        G::Item: Send,
        P::Error: Send,
    {
        assert!(self.threads > 0, "a check requires at least one thread");
        assert!(self.count > 0, "a check requires at least one draw");

        let search = Search {
            best: Mutex::new(None),
            magnitude: AtomicU64::new(u64::MAX),
            shrinks: AtomicUsize::new(0),
            total: AtomicUsize::new(0),
        };
        let remaining = AtomicUsize::new(self.count);
        let deadline = self.time.map(|time| Instant::now() + time);

        let mut random = match self.seed {
            Some(seed) => Pcg::from_seed(seed),
            None => Pcg::new(),
        };
        // The replayed draw runs before any other so that its failure is in
        // place when the randomized draws start to compete.
        if self.seed.is_some() && claim(&remaining, deadline) {
            draw(&self.generator, &mut random, &search, &check);
        }

        if self.threads == 1 {
            work(
                &self.generator,
                &mut random,
                &search,
                &remaining,
                deadline,
                &check,
            );
        } else {
            thread::scope(|scope| {
                for _ in 1..self.threads {
                    scope.spawn(|| {
                        let mut random = Pcg::new();
                        work(
                            &self.generator,
                            &mut random,
                            &search,
                            &remaining,
                            deadline,
                            &check,
                        );
                    });
                }
                work(
                    &self.generator,
                    &mut random,
                    &search,
                    &remaining,
                    deadline,
                    &check,
                );
            });
        }

        let best = match search.best.into_inner() {
            Ok(best) => best,
            Err(poison) => poison.into_inner(),
        };
        match best {
            Some(Best {
                seed,
                size,
                item,
                cause,
            }) => Err(Fail {
                item,
                seed,
                size,
                shrinks: search.shrinks.load(Ordering::Relaxed),
                total: search.total.load(Ordering::Relaxed),
                cause,
            }),
            None => Ok(()),
        }
    }
}

fn claim(remaining: &AtomicUsize, deadline: Option<Instant>) -> bool {
    match deadline {
        Some(deadline) => Instant::now() < deadline,
        None => remaining
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |count| {
                count.checked_sub(1)
            })
            .is_ok(),
    }
}

fn work<G: Generate + ?Sized, P: Prove, F: Fn(&G::Item) -> P>(
    generator: &G,
    random: &mut Pcg,
    search: &Search<G::Item, P::Error>,
    remaining: &AtomicUsize,
    deadline: Option<Instant>,
    check: &F,
) {
    while claim(remaining, deadline) {
        draw(generator, random, search, check);
    }
}

fn draw<G: Generate + ?Sized, P: Prove, F: Fn(&G::Item) -> P>(
    generator: &G,
    random: &mut Pcg,
    search: &Search<G::Item, P::Error>,
    check: &F,
) {
    let seed = random.seed();
    let (item, size) = generator.generate(random);
    search.total.fetch_add(1, Ordering::Relaxed);
    // Racy filter; a draw whose root magnitude is above the retained best's
    // cannot rank below it, so its property run is skipped.
    if size.magnitude() > search.magnitude.load(Ordering::Relaxed) {
        return;
    }
    let Some(cause) = handle(&item, check) else {
        return;
    };
    let mut best = match search.best.lock() {
        Ok(best) => best,
        Err(poison) => poison.into_inner(),
    };
    match &*best {
        Some(current) if size >= current.size => {}
        Some(_) => {
            search.shrinks.fetch_add(1, Ordering::Relaxed);
            search.magnitude.store(size.magnitude(), Ordering::Relaxed);
            *best = Some(Best {
                seed,
                size,
                item,
                cause,
            });
        }
        None => {
            search.magnitude.store(size.magnitude(), Ordering::Relaxed);
            *best = Some(Best {
                seed,
                size,
                item,
                cause,
            });
        }
    }
}

fn handle<T, P: Prove, F: Fn(&T) -> P>(item: &T, check: &F) -> Option<Cause<P::Error>> {
    match catch_unwind(AssertUnwindSafe(|| check(item).prove())) {
        Ok(Ok(_)) => None,
        Ok(Err(error)) => Some(Cause::Disprove(error)),
        Err(error) => Some(Cause::Panic(utility::cast(error))),
    }
}

#[doc(hidden)]
pub mod environment {
    use super::Checker;
    use crate::random::Seed;
    use std::{env, str::FromStr};

    pub fn count() -> Option<usize> {
        parse("RECHECK_COUNT")
    }

    pub fn seed() -> Option<Seed> {
        parse("RECHECK_SEED")
    }

    pub(super) fn update<G: ?Sized>(checker: &mut Checker<G>) {
        if let Some(count) = count() {
            checker.count = count;
        }
        if let Some(seed) = seed() {
            checker.seed = Some(seed);
        }
    }

    fn parse<T: FromStr>(key: &str) -> Option<T> {
        match env::var(key) {
            Ok(value) => value.parse().ok(),
            Err(_) => None,
        }
    }
}
