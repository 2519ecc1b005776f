//! Transformation module.
//!
//! This module turns parsed rows into a renderable graph:
//! - Aggregator: records to one summed flow per (source, target)
//! - Colors: random node colors
//! - Pipeline: Main formatting pipeline

pub mod aggregator;
pub mod colors;
pub mod pipeline;

pub use aggregator::{aggregate_flows, AggregatedFlows};
pub use colors::{assign_colors, ColorAssigner};
pub use pipeline::*;
