// THEORY:
// This file is the main entry point for the `thorax_vision` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the
// public API that will be exposed to external consumers (batch labeling
// tools, notebook bindings).
//
// The primary goal is to export the `LabelingPipeline` and its associated
// data structures (`PipelineConfig`, `Report`, etc.) as the clean, high-level
// interface for the labeling engine, while the internal modules
// (`core_modules`) stay encapsulated behind it. Loading volumes and tables
// from disk is deliberately left to collaborating crates; everything here
// operates on in-memory data.

pub mod core_modules;
pub mod error;
pub mod pipeline;

pub use crate::core_modules::feature_table::{FeatureRow, FeatureTable};
pub use crate::core_modules::geometry::VolumeHeader;
pub use crate::core_modules::label_volume::LabelVolume;
pub use crate::core_modules::reader_point::{PointFilter, ReaderPoint};
pub use crate::error::{LabelError, Result};
pub use crate::pipeline::{LabelingPipeline, PipelineConfig, Report};
