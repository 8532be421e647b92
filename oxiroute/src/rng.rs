use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Coin flips with `f32` chances, as stored
/// in [`EngineConfig`](crate::EngineConfig).
///
/// A chance of `0.0` never succeeds and a
/// chance of `1.0` always does.
pub(crate) trait Bernoulli {
    fn chance(&mut self, chance: f32) -> bool;
}

impl<R: Rng + ?Sized> Bernoulli for R {
    fn chance(&mut self, chance: f32) -> bool {
        self.gen::<f32>() < chance
    }
}

/// Returns the master generator of a run, seeded
/// if a seed was configured and from entropy otherwise.
pub(crate) fn master(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Derives an independent generator for one sub-population,
/// so that parallel stepping stays reproducible under a seed.
pub(crate) fn derive(master: &mut StdRng) -> StdRng {
    StdRng::seed_from_u64(master.gen())
}
