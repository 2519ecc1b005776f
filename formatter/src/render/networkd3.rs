//! R code for a networkD3 Sankey diagram.
//!
//! The snippet re-reads the CSV itself (readr + dplyr), so only the file
//! path and the column names are substituted. Nothing from the parsed data
//! is baked in.

use super::ColumnNames;

/// Generate R code for a Sankey diagram using networkD3.
pub fn render_networkd3(file_path: &str, columns: &ColumnNames) -> String {
    format!(
        r#"
library(networkD3)
library(dplyr)
library(readr)

# Path to your CSV file
csv_file_path <- '{file_path}'

# Read the CSV file
data <- read_csv(csv_file_path)

# Aggregate weights by source and target
aggregated_data <- data %>%
  group_by({source_col}, {target_col}) %>%
  summarise(Weight = sum({value_col})) %>%
  ungroup()

# Create a unique list of nodes
nodes <- unique(c(aggregated_data${source_col}, aggregated_data${target_col}))
nodes_df <- data.frame(name = nodes)

# Map source and target to indices
aggregated_data <- aggregated_data %>%
  mutate(source = match({source_col}, nodes_df$name) - 1,
         target = match({target_col}, nodes_df$name) - 1)

# Create the Sankey diagram
sankey <- sankeyNetwork(
  Links = aggregated_data,
  Nodes = nodes_df,
  Source = "source",
  Target = "target",
  Value = "Weight",
  NodeID = "name",
  units = "Weight"
)

# Display the Sankey diagram
print(sankey)
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
        let code = render_networkd3("data/flows.csv", &ColumnNames::default());

        assert!(code.contains("csv_file_path <- 'data/flows.csv'"));
        assert!(code.contains("group_by(Engine, Species)"));
        assert!(code.contains("summarise(Weight = sum(Weight))"));
        assert!(code.contains("unique(c(aggregated_data$Engine, aggregated_data$Species))"));
        assert!(code.contains("match(Engine, nodes_df$name) - 1"));
        assert!(code.trim_end().ends_with("print(sankey)"));
    }

    #[test]
    fn test_custom_columns() {
        let columns = ColumnNames::new("From", "To", "Amount");
        let code = render_networkd3("x.csv", &columns);

        assert!(code.contains("group_by(From, To)"));
        assert!(code.contains("sum(Amount)"));
        assert!(code.contains("match(To, nodes_df$name) - 1"));
        assert!(!code.contains("Engine"));
    }

    #[test]
    fn test_template_is_independent_of_data() {
        let a = render_networkd3("same.csv", &ColumnNames::default());
        let b = render_networkd3("same.csv", &ColumnNames::default());
        assert_eq!(a, b);
        assert!(a.starts_with("\nlibrary(networkD3)\n"));
    }
}
