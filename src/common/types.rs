use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::common::error::Result;

/// Column names of the persisted dataset, in order
pub const COLUMNS: [&str; 2] = ["private", "public"];

/// One dataset row: both halves of an RSA key pair as DER
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    /// PKCS#1 `RSAPrivateKey`, unencrypted
    pub private: Vec<u8>,
    /// X.509 `SubjectPublicKeyInfo`
    pub public: Vec<u8>,
}

impl KeyPair {
    /// Parse the private half back into a key
    pub fn private_key(&self) -> Result<RsaPrivateKey> {
        Ok(RsaPrivateKey::from_pkcs1_der(&self.private)?)
    }

    /// Parse the public half back into a key
    pub fn public_key(&self) -> Result<RsaPublicKey> {
        Ok(RsaPublicKey::from_public_key_der(&self.public)?)
    }
}
