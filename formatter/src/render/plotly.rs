//! Python code for a plotly Sankey diagram.
//!
//! Same recipe as the R snippet: read the CSV with pandas, sum the value
//! column per (source, target), index the nodes and hand everything to
//! `go.Sankey`. Column names are emitted as quoted pandas labels.

use super::ColumnNames;

/// Generate Python code for a Sankey diagram using plotly.
pub fn render_plotly(file_path: &str, columns: &ColumnNames) -> String {
    format!(
        r#"
import pandas as pd
import plotly.graph_objects as go

# Read the CSV file
data = pd.read_csv('{file_path}')

# Aggregate weights by source and target
aggregated_data = data.groupby(['{source_col}', '{target_col}']).agg({{'{value_col}': 'sum'}}).reset_index()

# Create a unique list of nodes
nodes = list(pd.concat([aggregated_data['{source_col}'], aggregated_data['{target_col}']]).unique())
node_indices = {{node: i for i, node in enumerate(nodes)}}

# Map source and target to indices
aggregated_data['source'] = aggregated_data['{source_col}'].map(node_indices)
aggregated_data['target'] = aggregated_data['{target_col}'].map(node_indices)

# Create the Sankey diagram
fig = go.Figure(data=[go.Sankey(
    node=dict(
        pad=15,
        thickness=20,
        line=dict(color='black', width=0.5),
        label=nodes
    ),
    link=dict(
        source=aggregated_data['source'],
        target=aggregated_data['target'],
        value=aggregated_data['{value_col}']
    )
)])

fig.update_layout(title_text="Sankey Diagram", font_size=10)
fig.show()
"#,
        file_path = file_path,
        source_col = columns.source,
        target_col = columns.target,
        value_col = columns.value,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_columns() {
        let code = render_plotly("data/flows.csv", &ColumnNames::default());

        assert!(code.contains("data = pd.read_csv('data/flows.csv')"));
        assert!(code.contains(
            "data.groupby(['Engine', 'Species']).agg({'Weight': 'sum'}).reset_index()"
        ));
        assert!(code.contains("node_indices = {node: i for i, node in enumerate(nodes)}"));
        assert!(code.contains("value=aggregated_data['Weight']"));
        assert!(code.trim_end().ends_with("fig.show()"));
    }

    #[test]
    fn test_custom_columns() {
        let columns = ColumnNames::new("From", "To", "Amount");
        let code = render_plotly("x.csv", &columns);

        assert!(code.contains("aggregated_data['From'].map(node_indices)"));
        assert!(code.contains("aggregated_data['To'].map(node_indices)"));
        assert!(code.contains("{'Amount': 'sum'}"));
        assert!(!code.contains("Species"));
    }

    #[test]
    fn test_path_substituted_verbatim() {
        let code = render_plotly("/tmp/my flows.csv", &ColumnNames::default());
        assert!(code.contains("pd.read_csv('/tmp/my flows.csv')"));
    }
}
