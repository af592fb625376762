//! Hexline - A line-oriented binary-to-hex record converter
//!
//! Rewrites `<size>:<binary-digits>` lines as `<size>:<HEX>`, optionally
//! memoizing whole lines in a bounded FIFO cache.

pub mod cache;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;

pub use config::{Config, Direction, Mode};
pub use error::{ConvertError, FormatError};
pub use pipeline::{convert_file, Pipeline};
