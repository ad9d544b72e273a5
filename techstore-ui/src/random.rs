//! Injected random source for the flag and experiment stubs
//!
//! Components never reach for ambient randomness. They read a
//! [`RandomSource`] from context, so the app can seed it from entropy and
//! tests can seed it with a fixed value.

use dioxus::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a seedable generator. Clones draw from the same stream.
#[derive(Clone, Debug)]
pub struct RandomSource(Rc<RefCell<StdRng>>);

impl RandomSource {
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_rng(&mut rand::rng()))
    }

    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self(Rc::new(RefCell::new(rng)))
    }

    /// Run `f` with exclusive access to the generator
    pub fn with<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        f(&mut self.0.borrow_mut())
    }
}

/// Random source from context, falling back to a fresh entropy-seeded one
pub fn use_random_source() -> RandomSource {
    use_hook(|| try_consume_context::<RandomSource>().unwrap_or_else(RandomSource::from_entropy))
}
