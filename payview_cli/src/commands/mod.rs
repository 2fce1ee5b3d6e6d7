pub mod body;
pub mod log;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read a payload from a file, or stdin when no file is given.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    let bytes = match file {
        Some(path) => fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Input is not valid UTF-8, invalid sequences replaced");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    })
}
