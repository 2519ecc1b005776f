//! SankeyMATIC flow text.
//!
//! One `source [weight] target` line per aggregated flow, followed by one
//! `:node color` line per colored node, wrapped in the comment boilerplate
//! SankeyMATIC shows in its own input box.

use std::fmt::Write;

use crate::models::{ColorAssignment, FlowColors};
use crate::transform::aggregator::AggregatedFlows;

const FLOWS_HEADER: &str = "// Enter Flows between Nodes, like this:\n";
const NODES_HEADER: &str = "\n// You can set a Node's color, like this:\n";
const FOOTER: &str = "\n// Use the controls below to customize\n// your diagram's appearance...";

/// Render aggregated flows as SankeyMATIC input.
pub fn render_sankeymatic(
    flows: &AggregatedFlows,
    node_colors: Option<&ColorAssignment>,
    flow_colors: &FlowColors,
) -> String {
    let mut out = String::from(FLOWS_HEADER);

    for (key, weight) in flows.iter() {
        // Writing into a String cannot fail.
        let _ = write!(out, "{} [{:.2}] {}", key.source, weight, key.target);
        if let Some(color) = flow_colors.get(key) {
            let _ = write!(out, " {}", color);
        }
        out.push('\n');
    }

    out.push_str(NODES_HEADER);

    if let Some(colors) = node_colors {
        for (node, color) in colors.iter() {
            let _ = writeln!(out, ":{} {}", node, color);
        }
    }

    out.push_str(FOOTER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FlowRecord, HexColor};
    use crate::transform::aggregator::aggregate_flows;

    fn example_flows() -> AggregatedFlows {
        aggregate_flows(&vec![
            FlowRecord::new("A", "X", 10.0),
            FlowRecord::new("A", "X", 5.0),
            FlowRecord::new("B", "Y", 3.0),
        ])
    }

    #[test]
    fn test_flow_lines() {
        let text = render_sankeymatic(&example_flows(), None, &FlowColors::new());
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines.contains(&"A [15.00] X"));
        assert!(lines.contains(&"B [3.00] Y"));
    }

    #[test]
    fn test_exact_layout() {
        let mut colors = ColorAssignment::new();
        colors.set("A", HexColor::from_rgb(0x1a2b3c));

        let text = render_sankeymatic(&example_flows(), Some(&colors), &FlowColors::new());

        assert_eq!(
            text,
            "// Enter Flows between Nodes, like this:\n\
             A [15.00] X\n\
             B [3.00] Y\n\
             \n\
             // You can set a Node's color, like this:\n\
             :A #1a2b3c\n\
             \n\
             // Use the controls below to customize\n\
             // your diagram's appearance..."
        );
    }

    #[test]
    fn test_flow_color_override_exact_pair() {
        let mut overrides = FlowColors::new();
        overrides.insert("A", "X", HexColor::from_rgb(0xff0000));
        overrides.insert("Y", "B", HexColor::from_rgb(0x00ff00));

        let text = render_sankeymatic(&example_flows(), None, &overrides);

        assert!(text.contains("A [15.00] X #ff0000\n"));
        assert!(text.contains("B [3.00] Y\n"));
    }

    #[test]
    fn test_two_decimal_rounding() {
        let flows = aggregate_flows(&vec![FlowRecord::new("A", "B", 1.0 / 3.0)]);
        let text = render_sankeymatic(&flows, None, &FlowColors::new());
        assert!(text.contains("A [0.33] B\n"));
    }

    #[test]
    fn test_empty_graph_is_boilerplate_only() {
        let text = render_sankeymatic(&AggregatedFlows::new(), None, &FlowColors::new());
        assert_eq!(text, format!("{FLOWS_HEADER}{NODES_HEADER}{FOOTER}"));
    }
}
