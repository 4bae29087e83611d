pub mod codec;
pub mod config;
pub mod dataset;
pub mod error;
pub mod keypair;
pub mod types;
