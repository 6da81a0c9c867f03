// THEORY:
// This file is the entry point for the `contrast_visualizer` library crate.
// It exposes the `ContrastPipeline` (and its `ContrastConfig`) as the high-level
// interface: hand it an image, get back a grayscale map where each pixel's
// brightness encodes the WCAG contrast ratio between that pixel and the average
// color around it.
//
// The `core_modules` stay public for callers that want the individual stages
// (luminance caches, contrast engine, gray mapper) without the file I/O.

pub mod core_modules;
pub mod error;
pub mod pipeline;

pub use error::{ContrastError, Result};
pub use pipeline::{ContrastConfig, ContrastPipeline, derive_output_path};
