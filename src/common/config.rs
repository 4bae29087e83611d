use std::path::PathBuf;

use crate::common::error::{DatasetError, Result};

pub const DEFAULT_COUNT: usize = 100;
pub const DEFAULT_OUTPUT_PATH: &str = "./rsa_key_dataset.csv";
pub const DEFAULT_KEY_BITS: usize = 2048;
pub const DEFAULT_PUBLIC_EXPONENT: u64 = 65537;

/// Smallest modulus we agree to generate
pub const MIN_KEY_BITS: usize = 512;

/// Largest public exponent the `rsa` crate accepts (2^33 - 1)
pub const MAX_PUBLIC_EXPONENT: u64 = (1 << 33) - 1;

/// Parameters held constant across every key in a dataset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyGenConfig {
    pub bits: usize,
    pub public_exponent: u64,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            bits: DEFAULT_KEY_BITS,
            public_exponent: DEFAULT_PUBLIC_EXPONENT,
        }
    }
}

impl KeyGenConfig {
    pub fn validate(&self) -> Result<()> {
        if self.bits < MIN_KEY_BITS {
            return Err(DatasetError::Config(format!(
                "key size {} is below the minimum of {} bits",
                self.bits, MIN_KEY_BITS
            )));
        }
        if self.public_exponent < 3 || self.public_exponent % 2 == 0 {
            return Err(DatasetError::Config(format!(
                "public exponent {} must be odd and at least 3",
                self.public_exponent
            )));
        }
        if self.public_exponent > MAX_PUBLIC_EXPONENT {
            return Err(DatasetError::Config(format!(
                "public exponent {} exceeds the maximum of {}",
                self.public_exponent, MAX_PUBLIC_EXPONENT
            )));
        }
        Ok(())
    }
}

/// Settings for one dataset run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetConfig {
    pub count: usize,
    pub output_path: PathBuf,
    pub key: KeyGenConfig,
    /// Seed for a reproducible run; the OS RNG is used when absent
    pub seed: Option<u64>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            key: KeyGenConfig::default(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_defaults_match_reference_run() {
        let config = DatasetConfig::default();
        assert_eq!(config.count, 100);
        assert_eq!(config.output_path, PathBuf::from("./rsa_key_dataset.csv"));
        assert_eq!(config.key.bits, 2048);
        assert_eq!(config.key.public_exponent, 65537);
        assert!(config.seed.is_none());
        assert!(config.key.validate().is_ok());
    }

    #[test]
    fn test_rejects_small_modulus() {
        let config = KeyGenConfig { bits: 256, ..Default::default() };
        assert_matches!(config.validate(), Err(DatasetError::Config(_)));
    }

    #[test]
    fn test_rejects_bad_exponent() {
        for public_exponent in [0, 1, 2, 65536] {
            let config = KeyGenConfig { public_exponent, ..Default::default() };
            assert_matches!(config.validate(), Err(DatasetError::Config(_)));
        }
        let config = KeyGenConfig { public_exponent: 3, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_oversized_exponent() {
        let config = KeyGenConfig { public_exponent: (1 << 33) + 1, ..Default::default() };
        assert_matches!(config.validate(), Err(DatasetError::Config(_)));
        assert_eq!(config.validate().unwrap_err().phase(), "configuration");

        let config = KeyGenConfig { public_exponent: MAX_PUBLIC_EXPONENT, ..Default::default() };
        assert!(config.validate().is_ok());
    }
}
