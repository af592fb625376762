//! Configuration Module
//!
//! Run modes and the settings for a single conversion pass.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;

use crate::cache::DEFAULT_CAPACITY;
use crate::error::{ConvertError, Result};

// == Mode ==
/// Conversion mode selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    CompressCached,
    CompressNoncached,
    DecompressCached,
    DecompressNoncached,
}

impl Mode {
    /// Whether lines are memoized during the pass.
    pub fn is_cached(self) -> bool {
        matches!(self, Mode::CompressCached | Mode::DecompressCached)
    }

    pub fn is_decompress(self) -> bool {
        matches!(self, Mode::DecompressCached | Mode::DecompressNoncached)
    }

    /// Human label used in the timing summary.
    pub fn label(self) -> &'static str {
        match self {
            Mode::CompressCached => "Cached conversion",
            Mode::CompressNoncached => "Non-cached conversion",
            Mode::DecompressCached => "Cached decompression",
            Mode::DecompressNoncached => "Non-cached decompression",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::CompressCached => "compress-cached",
            Mode::CompressNoncached => "compress-noncached",
            Mode::DecompressCached => "decompress-cached",
            Mode::DecompressNoncached => "decompress-noncached",
        };
        f.write_str(name)
    }
}

// == Direction ==
/// Which codec operation is applied to each payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Binary digits to hex
    BinToHex,
    /// Hex to binary digits
    HexToBin,
}

// == Config ==
/// Settings for one conversion pass.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub input: PathBuf,
    pub output: PathBuf,
    /// Maximum cached lines; only used by cached modes
    pub cache_size: usize,
    /// Make `decompress-*` modes decode hex instead of re-encoding
    pub invert_decompress: bool,
}

impl Config {
    /// Creates a config with the default cache size.
    pub fn new(mode: Mode, input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            input: input.into(),
            output: output.into(),
            cache_size: DEFAULT_CAPACITY,
            invert_decompress: false,
        }
    }

    pub fn with_cache_size(mut self, cache_size: usize) -> Self {
        self.cache_size = cache_size;
        self
    }

    pub fn with_invert_decompress(mut self, invert: bool) -> Self {
        self.invert_decompress = invert;
        self
    }

    // == Direction ==
    /// Resolves the codec direction for this run.
    ///
    /// Every mode encodes unless `invert_decompress` is set, in which case
    /// the decompress modes decode.
    pub fn direction(&self) -> Direction {
        if self.invert_decompress && self.mode.is_decompress() {
            Direction::HexToBin
        } else {
            Direction::BinToHex
        }
    }

    // == Validate ==
    /// Rejects settings that would destroy the input before it is read.
    ///
    /// Paths are compared after resolving `.`, `..` and symlinks, so an
    /// aliased spelling of the input is caught too.
    pub fn validate(&self) -> Result<()> {
        if resolve(&self.input) == resolve(&self.output) {
            return Err(ConvertError::Usage(format!(
                "input and output must be different files (both are {})",
                self.input.display()
            )));
        }
        Ok(())
    }
}

/// Canonical form of `path`, going through its parent when the file does
/// not exist yet. Unresolvable paths are returned as given.
fn resolve(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }

    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            parent
                .canonicalize()
                .map(|dir| dir.join(name))
                .unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}
