//! Line Pipeline
//!
//! Streams records from input to output, transforming each payload and
//! memoizing whole lines when a cache is attached.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, trace, warn};

use crate::cache::{CacheStats, CacheStore};
use crate::codec;
use crate::config::{Config, Direction};
use crate::error::{ConvertError, FormatError, Result};
use crate::models::{Record, RunReport};

// == Pipeline ==
/// Single-pass line transformer with an optional memo cache.
///
/// The cache is keyed on the raw input line, so only byte-identical repeated
/// lines are served from it.
#[derive(Debug)]
pub struct Pipeline {
    direction: Direction,
    cache: Option<CacheStore>,
}

impl Pipeline {
    // == Constructor ==
    pub fn new(direction: Direction, cache: Option<CacheStore>) -> Self {
        Self { direction, cache }
    }

    /// Builds a pipeline for `config`, with a cache only in cached modes.
    pub fn from_config(config: &Config) -> Self {
        let cache = if config.mode.is_cached() {
            if config.cache_size == 0 {
                warn!("Cache size is 0, every line will be converted");
            }
            Some(CacheStore::new(config.cache_size))
        } else {
            None
        };
        Self::new(config.direction(), cache)
    }

    // == Transform Line ==
    /// Produces the output line for one newline-stripped input line.
    ///
    /// Cache hits are returned as stored. On a miss the record is parsed,
    /// its payload converted, and the result cached.
    pub fn transform_line(&mut self, line: &str) -> std::result::Result<String, FormatError> {
        if let Some(cache) = self.cache.as_mut() {
            if let Some(hit) = cache.lookup(line) {
                return Ok(hit);
            }
        }

        let record = Record::parse(line)?;
        let payload = match self.direction {
            Direction::BinToHex => codec::encode(record.payload)?,
            Direction::HexToBin => codec::decode(record.payload)?,
        };
        let converted = record.with_payload(&payload);

        if let Some(cache) = self.cache.as_mut() {
            trace!(size = record.size, "Caching converted line");
            cache.set(line.to_string(), converted.clone());
        }

        Ok(converted)
    }

    // == Run ==
    /// Converts every line of `reader` into `writer` and flushes it.
    ///
    /// `input` and `output` only label errors. Lines are read as bytes and
    /// a trailing `\n` or `\r\n` is stripped; bytes that are not UTF-8 are a
    /// malformed record, not a read failure. Stops at the first failure;
    /// lines before it have already been written. Returns the line count.
    pub fn run<R, W>(&mut self, mut reader: R, writer: &mut W, input: &Path, output: &Path) -> Result<u64>
    where
        R: BufRead,
        W: Write,
    {
        let write_error = |source| ConvertError::Write {
            path: output.to_path_buf(),
            source,
        };

        let mut buf = Vec::new();
        let mut count = 0u64;
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| ConvertError::Read {
                    path: input.to_path_buf(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            let line_number = count as usize + 1;

            let converted = strip_newline(&buf)
                .and_then(|line| self.transform_line(line))
                .map_err(|source| ConvertError::Format {
                    line: line_number,
                    source,
                })?;

            writeln!(writer, "{}", converted).map_err(write_error)?;
            count += 1;
        }

        writer.flush().map_err(write_error)?;
        Ok(count)
    }

    // == Cache Stats ==
    /// Returns cache statistics, or None when running uncached.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(CacheStore::stats)
    }
}

/// Drops the line terminator and checks the rest is UTF-8.
fn strip_newline(buf: &[u8]) -> std::result::Result<&str, FormatError> {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    Ok(std::str::from_utf8(line)?)
}

// == Convert File ==
/// Runs one full conversion pass from `config.input` to `config.output`.
///
/// Both files are closed on every return path. The returned report carries
/// the elapsed wall-clock time; nothing is printed here.
pub fn convert_file(config: &Config) -> Result<RunReport> {
    config.validate()?;

    let started_at = Utc::now();
    let start = Instant::now();
    info!(
        mode = %config.mode,
        input = %config.input.display(),
        output = %config.output.display(),
        cache_size = config.cache_size,
        "Starting conversion"
    );

    let input = File::open(&config.input).map_err(|source| ConvertError::Open {
        path: config.input.clone(),
        source,
    })?;
    let output = File::create(&config.output).map_err(|source| ConvertError::Open {
        path: config.output.clone(),
        source,
    })?;

    let reader = BufReader::new(input);
    let mut writer = BufWriter::new(output);
    let mut pipeline = Pipeline::from_config(config);
    let lines = pipeline.run(reader, &mut writer, &config.input, &config.output)?;
    drop(writer);

    let elapsed = start.elapsed();
    let cache = pipeline.cache_stats();
    if let Some(stats) = &cache {
        debug!(hit_rate = stats.hit_rate(), "Cache summary");
    }

    let report = RunReport {
        mode: config.mode,
        direction: config.direction(),
        lines,
        started_at,
        elapsed_secs: elapsed.as_secs_f64(),
        cache,
    };

    info!(
        lines = report.lines,
        hits = report.cache.as_ref().map_or(0, |c| c.hits),
        misses = report.cache.as_ref().map_or(0, |c| c.misses),
        evictions = report.cache.as_ref().map_or(0, |c| c.evictions),
        elapsed_secs = report.elapsed_secs,
        "Conversion complete"
    );

    Ok(report)
}
