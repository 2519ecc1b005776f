//! Domain models for the Sankey formatting pipeline.
//!
//! This module contains the core data structures used throughout the pipeline:
//!
//! - [`FlowRecord`] - One accepted CSV row (source, weight, target)
//! - [`FlowKey`] - The (source, target) pair flows are aggregated on
//! - [`NodeSet`] - Insertion-ordered set of node names
//! - [`HexColor`] - Validated `#rrggbb` color
//! - [`ColorAssignment`] - One color per node
//! - [`FlowColors`] - Optional per-flow color overrides

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

// =============================================================================
// Flow Records
// =============================================================================

/// A single flow read from the input.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowRecord {
    pub source: String,
    pub target: String,
    pub weight: f64,
    /// 1-based line in the input file (0 when built in memory).
    pub line: u64,
}

impl FlowRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
            line: 0,
        }
    }

    pub fn at_line(mut self, line: u64) -> Self {
        self.line = line;
        self
    }

    pub fn key(&self) -> FlowKey {
        FlowKey::new(&self.source, &self.target)
    }
}

/// Aggregation key: a directed (source, target) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlowKey {
    pub source: String,
    pub target: String,
}

impl FlowKey {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

// =============================================================================
// Node Set
// =============================================================================

/// Distinct node names, kept in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl NodeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. Returns `false` if it was already present.
    pub fn insert(&mut self, node: &str) -> bool {
        if self.seen.contains(node) {
            return false;
        }
        self.seen.insert(node.to_string());
        self.order.push(node.to_string());
        true
    }

    pub fn contains(&self, node: &str) -> bool {
        self.seen.contains(node)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Nodes of `self` followed by the nodes of `other` not already present.
    pub fn union(&self, other: &NodeSet) -> NodeSet {
        let mut merged = self.clone();
        for node in other.iter() {
            merged.insert(node);
        }
        merged
    }
}

impl<'a> FromIterator<&'a str> for NodeSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = NodeSet::new();
        for node in iter {
            set.insert(node);
        }
        set
    }
}

// =============================================================================
// Colors
// =============================================================================

/// An RGB color rendered as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(u32);

impl HexColor {
    /// Largest 24-bit RGB value.
    pub const MAX: u32 = 0xFF_FFFF;

    /// Build from a 24-bit value. Higher bits are dropped.
    pub fn from_rgb(rgb: u32) -> Self {
        Self(rgb & Self::MAX)
    }

    pub fn rgb(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for HexColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor(s.to_string());
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        u32::from_str_radix(digits, 16)
            .map(HexColor)
            .map_err(|_| invalid())
    }
}

/// One color per node, in the order nodes were assigned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorAssignment {
    entries: Vec<(String, HexColor)>,
    index: HashMap<String, usize>,
}

impl ColorAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color of a node, replacing any earlier one.
    pub fn set(&mut self, node: &str, color: HexColor) {
        match self.index.get(node) {
            Some(&i) => self.entries[i].1 = color,
            None => {
                self.index.insert(node.to_string(), self.entries.len());
                self.entries.push((node.to_string(), color));
            }
        }
    }

    pub fn get(&self, node: &str) -> Option<HexColor> {
        self.index.get(node).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, HexColor)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), *c))
    }
}

/// Per-flow color overrides, looked up by exact (source, target) pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowColors {
    colors: HashMap<FlowKey, HexColor>,
}

impl FlowColors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source: &str, target: &str, color: HexColor) {
        self.colors.insert(FlowKey::new(source, target), color);
    }

    pub fn get(&self, key: &FlowKey) -> Option<HexColor> {
        self.colors.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_set_keeps_first_appearance() {
        let mut nodes = NodeSet::new();
        assert!(nodes.insert("B"));
        assert!(nodes.insert("A"));
        assert!(!nodes.insert("B"));

        assert_eq!(nodes.iter().collect::<Vec<_>>(), vec!["B", "A"]);
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn test_node_set_union() {
        let sources: NodeSet = ["A", "B"].into_iter().collect();
        let targets: NodeSet = ["X", "A"].into_iter().collect();

        let all = sources.union(&targets);
        assert_eq!(all.iter().collect::<Vec<_>>(), vec!["A", "B", "X"]);
    }

    #[test]
    fn test_hex_color_display_pads() {
        assert_eq!(HexColor::from_rgb(0x1a2b).to_string(), "#001a2b");
        assert_eq!(HexColor::from_rgb(0xFFFFFF).to_string(), "#ffffff");
        assert_eq!(HexColor::from_rgb(0x1_000_000).to_string(), "#000000");
    }

    #[test]
    fn test_hex_color_parse() {
        let color: HexColor = "#FF0000".parse().unwrap();
        assert_eq!(color.rgb(), 0xFF0000);
        assert_eq!(color.to_string(), "#ff0000");

        assert!("FF0000".parse::<HexColor>().is_err());
        assert!("#F00".parse::<HexColor>().is_err());
        assert!("#GG0000".parse::<HexColor>().is_err());
        assert!("#+f0000".parse::<HexColor>().is_err());
    }

    #[test]
    fn test_color_assignment_overwrite() {
        let mut colors = ColorAssignment::new();
        colors.set("A", HexColor::from_rgb(1));
        colors.set("B", HexColor::from_rgb(2));
        colors.set("A", HexColor::from_rgb(3));

        assert_eq!(colors.len(), 2);
        assert_eq!(colors.get("A"), Some(HexColor::from_rgb(3)));
        assert_eq!(colors.iter().next().map(|(n, _)| n), Some("A"));
    }

    #[test]
    fn test_flow_colors_exact_pair() {
        let mut overrides = FlowColors::new();
        overrides.insert("A", "X", HexColor::from_rgb(0xFF0000));

        assert!(overrides.get(&FlowKey::new("A", "X")).is_some());
        assert!(overrides.get(&FlowKey::new("X", "A")).is_none());
    }
}
