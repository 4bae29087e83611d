//! Text form of dataset rows.
//!
//! Binary fields are written as padded standard base64. The alphabet has no
//! `,`, `"` or line breaks, so fields are never quoted.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::common::error::{DatasetError, Result};
use crate::common::types::{KeyPair, COLUMNS};

pub const DELIMITER: &str = ",";

pub fn encode_field(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

pub fn decode_field(field: &str) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    BASE64.decode(field)
}

pub fn header() -> String {
    COLUMNS.join(DELIMITER)
}

pub fn format_row(pair: &KeyPair) -> String {
    format!("{}{}{}", encode_field(&pair.private), DELIMITER, encode_field(&pair.public))
}

/// Parse one data row; `line` is the 1-based line number used in errors
pub fn parse_row(row: &str, line: usize) -> Result<KeyPair> {
    let parse_err = |reason: String| DatasetError::Parse { line, reason };

    let fields: Vec<&str> = row.split(DELIMITER).collect();
    if fields.len() != COLUMNS.len() {
        return Err(parse_err(format!("expected {} fields, found {}", COLUMNS.len(), fields.len())));
    }

    let private = decode_field(fields[0]).map_err(|e| parse_err(format!("private: {}", e)))?;
    let public = decode_field(fields[1]).map_err(|e| parse_err(format!("public: {}", e)))?;
    Ok(KeyPair { private, public })
}
