use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use rand::rngs::{OsRng, StdRng};
use rand::SeedableRng;
use rsa::rand_core::CryptoRngCore;
use tempfile::NamedTempFile;
use tracing::info;

use crate::common::codec;
use crate::common::config::DatasetConfig;
use crate::common::error::{DatasetError, Result};
use crate::common::keypair::KeyPairGenerator;
use crate::common::types::KeyPair;

/// Ordered, fixed-schema collection of generated key pairs
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    rows: Vec<KeyPair>,
}

impl Dataset {
    /// Collect every pair in order. The first error aborts the build.
    pub fn build<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<KeyPair>>,
    {
        let rows = pairs.into_iter().collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[KeyPair] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the dataset as CSV, replacing whatever is at `path`.
    ///
    /// Rows go to a temporary file next to `path` which is renamed into
    /// place once complete, so a failed write never leaves a partial file.
    pub fn persist(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // Stage in the destination directory so the rename stays on one filesystem
        let mut file = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(file.as_file_mut());
            writeln!(writer, "{}", codec::header())?;
            for pair in &self.rows {
                writeln!(writer, "{}", codec::format_row(pair))?;
            }
            writer.flush()?;
        }
        file.as_file().sync_all()?;

        // Replace whatever is at `path`
        file.persist(path).map_err(|e| e.error)?;

        info!(rows = self.rows.len(), path = %path.display(), "dataset written");
        Ok(())
    }

    /// Read back a file written by [`Dataset::persist`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let mut lines = reader.lines();

        let header = lines.next().transpose()?.ok_or_else(|| DatasetError::Parse {
            line: 1,
            reason: "missing header".to_string(),
        })?;
        if header.trim_end_matches('\r') != codec::header() {
            return Err(DatasetError::Parse {
                line: 1,
                reason: format!("unexpected header {:?}", header),
            });
        }

        // Data rows start on line 2
        let mut rows = Vec::new();
        for (index, line) in lines.enumerate() {
            let line = line?;
            rows.push(codec::parse_row(line.trim_end_matches('\r'), index + 2)?);
        }
        Ok(Self { rows })
    }
}

/// Generate `config.count` pairs and persist them to `config.output_path`.
/// Returns the number of rows written.
pub fn generate_dataset(config: &DatasetConfig) -> Result<usize> {
    match config.seed {
        Some(seed) => write_dataset(StdRng::seed_from_u64(seed), config),
        None => write_dataset(OsRng, config),
    }
}

fn write_dataset<R: CryptoRngCore>(rng: R, config: &DatasetConfig) -> Result<usize> {
    let mut generator = KeyPairGenerator::new(rng, config.key)?;
    info!(
        count = config.count,
        bits = generator.config().bits,
        public_exponent = generator.config().public_exponent,
        seeded = config.seed.is_some(),
        "generating RSA key pairs"
    );

    // Nothing touches the filesystem until every pair exists
    let dataset = Dataset::build(generator.pairs(config.count))?;
    dataset.persist(&config.output_path)?;
    Ok(dataset.len())
}
