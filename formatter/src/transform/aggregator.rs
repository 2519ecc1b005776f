//! Aggregate flow records into one weighted flow per (source, target) pair.
//!
//! # Architecture
//!
//! ```text
//! CSV Input (records)            →  Aggregated flows
//! ┌────────────────────────┐       ┌─────────────────────────┐
//! │ A  10.0  X             │       │ A → X   15.0            │
//! │ A   5.0  X             │  →    ├─────────────────────────┤
//! │ B   3.0  Y             │       │ B → Y    3.0            │
//! └────────────────────────┘       └─────────────────────────┘
//! ```
//!
//! Pairs keep the order in which they first appeared, so rendering the same
//! input twice produces the same text.

use std::collections::HashMap;

use crate::models::{FlowKey, FlowRecord, NodeSet};

/// Summed weight per (source, target) pair, in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedFlows {
    flows: Vec<(FlowKey, f64)>,
    index: HashMap<FlowKey, usize>,
}

impl AggregatedFlows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-fold already summed pairs. Repeated keys are summed again.
    pub fn from_totals<I>(totals: I) -> Self
    where
        I: IntoIterator<Item = (FlowKey, f64)>,
    {
        let mut flows = Self::new();
        for (key, weight) in totals {
            flows.add_key(key, weight);
        }
        flows
    }

    /// Add `weight` to the (source, target) pair.
    pub fn add(&mut self, source: &str, target: &str, weight: f64) {
        self.add_key(FlowKey::new(source, target), weight);
    }

    fn add_key(&mut self, key: FlowKey, weight: f64) {
        match self.index.get(&key) {
            Some(&i) => self.flows[i].1 += weight,
            None => {
                self.index.insert(key.clone(), self.flows.len());
                self.flows.push((key, weight));
            }
        }
    }

    pub fn get(&self, source: &str, target: &str) -> Option<f64> {
        self.index
            .get(&FlowKey::new(source, target))
            .map(|&i| self.flows[i].1)
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FlowKey, f64)> {
        self.flows.iter().map(|(k, w)| (k, *w))
    }

    /// Sum over all pairs.
    pub fn total_weight(&self) -> f64 {
        self.flows.iter().map(|(_, w)| w).sum()
    }

    /// All sources, then all targets not already seen.
    pub fn nodes(&self) -> NodeSet {
        let sources: NodeSet = self.flows.iter().map(|(k, _)| k.source.as_str()).collect();
        let targets: NodeSet = self.flows.iter().map(|(k, _)| k.target.as_str()).collect();
        sources.union(&targets)
    }
}

/// Fold flow records into [`AggregatedFlows`].
pub fn aggregate_flows<'a, I>(records: I) -> AggregatedFlows
where
    I: IntoIterator<Item = &'a FlowRecord>,
{
    let mut flows = AggregatedFlows::new();
    for record in records {
        flows.add(&record.source, &record.target, record.weight);
    }
    flows
}
