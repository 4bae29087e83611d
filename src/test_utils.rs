use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::common::config::KeyGenConfig;
use crate::common::keypair::KeyPairGenerator;

/// Deterministic RNG so test keys are reproducible
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Smaller keys for tests that only care about structure, not size
pub fn small_config() -> KeyGenConfig {
    KeyGenConfig {
        bits: 1024,
        ..Default::default()
    }
}

/// Creates a generator over `small_config` seeded with `seed`
pub fn small_generator(seed: u64) -> KeyPairGenerator<StdRng> {
    KeyPairGenerator::new(seeded_rng(seed), small_config()).unwrap()
}
