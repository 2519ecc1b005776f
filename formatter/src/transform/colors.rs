//! Node color assignment.
//!
//! Every node gets a color drawn uniformly from the 24-bit RGB space.
//! Pass a seed to get the same colors on every run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{ColorAssignment, HexColor, NodeSet};

/// Assign a random color to each node using the given generator.
pub fn assign_colors<R: Rng>(nodes: &NodeSet, rng: &mut R) -> ColorAssignment {
    let mut colors = ColorAssignment::new();
    for node in nodes.iter() {
        colors.set(node, random_color(rng));
    }
    colors
}

/// A single uniformly distributed color.
pub fn random_color<R: Rng>(rng: &mut R) -> HexColor {
    HexColor::from_rgb(rng.gen_range(0..=HexColor::MAX))
}

/// Owns the random source used for node colors.
pub struct ColorAssigner {
    rng: StdRng,
}

impl ColorAssigner {
    /// Seeded when `seed` is given, system entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn assign(&mut self, nodes: &NodeSet) -> ColorAssignment {
        assign_colors(nodes, &mut self.rng)
    }
}

impl Default for ColorAssigner {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes() -> NodeSet {
        ["Coal", "Gas", "Power", "Heat"].into_iter().collect()
    }

    #[test]
    fn test_every_node_colored_once() {
        let colors = ColorAssigner::default().assign(&nodes());

        assert_eq!(colors.len(), 4);
        for node in nodes().iter() {
            assert!(colors.get(node).is_some(), "{node} has no color");
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let first = ColorAssigner::new(Some(42)).assign(&nodes());
        let second = ColorAssigner::new(Some(42)).assign(&nodes());
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = ColorAssigner::new(Some(1)).assign(&nodes());
        let second = ColorAssigner::new(Some(2)).assign(&nodes());
        assert_ne!(first, second);
    }

    #[test]
    fn test_color_format() {
        let colors = ColorAssigner::new(Some(7)).assign(&nodes());

        for (_, color) in colors.iter() {
            let text = color.to_string();
            assert_eq!(text.len(), 7);
            assert!(text.starts_with('#'));
            assert!(text[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_empty_node_set() {
        let colors = ColorAssigner::new(Some(0)).assign(&NodeSet::new());
        assert!(colors.is_empty());
    }
}
