//! HURDAT2 Reader Library
//!
//! A Rust library for decoding NOAA HURDAT2 tropical cyclone track files,
//! the fixed-width text format behind the Atlantic and Northeast/Central
//! Pacific best-track archives.
//!
//! This library provides tools for:
//! - Classifying lines as storm headers or six-hourly observations
//! - Decoding storm identity, date/time, position, wind, pressure and stage
//! - Classifying wind speeds on the Saffir-Simpson scale
//! - Streaming a line source while tracking the current storm
//!
//! The library performs no file I/O of its own; callers supply lines or a
//! [`std::io::BufRead`] source.

pub mod classifier;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod reader;
pub mod record;

// Re-export commonly used types
pub use classifier::{SaffirSimpson, WindClassifier};
pub use config::ReaderConfig;
pub use error::{HurdatError, Result};
pub use models::{
    Basin, Category, Hemisphere, Landfall, Observation, ObservationTime, RecordKind, Stage,
    StormHeader,
};
pub use reader::{ReadStats, TrackReader, TrackRecord};
