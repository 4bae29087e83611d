use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::pkcs8::EncodePublicKey;
use rsa::rand_core::CryptoRngCore;
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use tracing::{debug, info};

use crate::common::config::KeyGenConfig;
use crate::common::error::Result;
use crate::common::types::KeyPair;

/// Progress is reported at `info` every this many rows
pub const PROGRESS_INTERVAL: usize = 10;

/// Produces DER-encoded RSA key pairs from an owned random source
pub struct KeyPairGenerator<R> {
    rng: R,
    config: KeyGenConfig,
    exponent: BigUint,
}

impl<R: CryptoRngCore> KeyPairGenerator<R> {
    pub fn new(rng: R, config: KeyGenConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rng,
            config,
            exponent: BigUint::from(config.public_exponent),
        })
    }

    pub fn config(&self) -> &KeyGenConfig {
        &self.config
    }

    /// Generate one key pair and encode both halves
    pub fn generate(&mut self) -> Result<KeyPair> {
        // Prime search; the only step that can fail for a valid config
        let private_key = RsaPrivateKey::new_with_exp(&mut self.rng, self.config.bits, &self.exponent)?;
        let public_key = RsaPublicKey::from(&private_key);

        // Private half as PKCS#1, public half wrapped in SubjectPublicKeyInfo
        let private = private_key.to_pkcs1_der()?.as_bytes().to_vec();
        let public = public_key.to_public_key_der()?.into_vec();

        Ok(KeyPair { private, public })
    }

    /// Lazily generate `count` key pairs, stopping after the first failure
    pub fn pairs(&mut self, count: usize) -> KeyPairs<'_, R> {
        KeyPairs {
            generator: self,
            produced: 0,
            remaining: count,
        }
    }
}

/// Iterator returned by [`KeyPairGenerator::pairs`]
pub struct KeyPairs<'a, R> {
    generator: &'a mut KeyPairGenerator<R>,
    produced: usize,
    remaining: usize,
}

impl<R: CryptoRngCore> Iterator for KeyPairs<'_, R> {
    type Item = Result<KeyPair>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let result = self.generator.generate();
        match &result {
            Ok(_) => {
                self.remaining -= 1;
                self.produced += 1;
                if reports_progress(self.produced, self.remaining) {
                    info!(row = self.produced, remaining = self.remaining, "generated key pairs");
                } else {
                    debug!(row = self.produced, remaining = self.remaining, "generated key pair");
                }
            }
            // Fuse: nothing is generated after a failure
            Err(_) => self.remaining = 0,
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

/// Every `PROGRESS_INTERVAL`-th row and the final row are logged at `info`
fn reports_progress(produced: usize, remaining: usize) -> bool {
    remaining == 0 || produced % PROGRESS_INTERVAL == 0
}
