//! Pipeline stages that turn fetched series into display-ready tables.
//!
//! Modules include:
//! - `normalize`: one tagged row per observation, order preserved
//! - `reshape`: concatenate company/peer tables and unpivot the four score columns
//! - `filter`: the optional date-floor post-filter
//! - `chart`: per-dimension line series for chart renderers
/// Per-dimension chart series extracted from a long table.
pub mod chart;
/// Date-floor filtering shared by both table shapes.
pub mod filter;
/// The Normalizer stage.
pub mod normalize;
/// The Reshaper stage.
pub mod reshape;
