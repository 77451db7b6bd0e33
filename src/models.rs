use std::collections::HashMap;

use serde::Serialize;

/// A spreadsheet loaded into memory: one header row plus data rows, every
/// cell stringified. Empty cells are empty strings.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Index of a column by header name (exact match).
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Append a column: header plus one value per row. `values` must be
    /// row-aligned with `rows`.
    pub fn push_column(&mut self, header: &str, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        self.headers.push(header.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
    }
}

/// Statistics for one normalization run.
#[derive(Debug, Serialize)]
pub struct Summary {
    /// Rows processed.
    pub rows: usize,
    /// Cells that produced at least one lemma.
    pub normalized: usize,
    /// Cells that reduced to nothing (empty input, or only units/numbers).
    pub empty: usize,
    /// Number of distinct lemmas across the whole run.
    pub distinct_ingredients: usize,
    /// Most frequent lemmas, descending by cell count.
    pub top_ingredients: Vec<IngredientCount>,
}

#[derive(Debug, Serialize)]
pub struct IngredientCount {
    pub name: String,
    pub count: usize,
}

impl Summary {
    /// Tally a run from the computed column. Each lemma is counted once per
    /// cell it appears in.
    pub fn tally(normalized_cells: &[String], top: usize) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut empty = 0;

        for cell in normalized_cells {
            if cell.is_empty() {
                empty += 1;
                continue;
            }
            for lemma in cell.split(", ") {
                *counts.entry(lemma.to_string()).or_insert(0) += 1;
            }
        }

        let distinct_ingredients = counts.len();
        let mut pairs: Vec<(String, usize)> = counts.into_iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let top_ingredients = pairs
            .into_iter()
            .take(top)
            .map(|(name, count)| IngredientCount { name, count })
            .collect();

        Summary {
            rows: normalized_cells.len(),
            normalized: normalized_cells.len() - empty,
            empty,
            distinct_ingredients,
            top_ingredients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index() {
        let sheet = Sheet {
            headers: vec!["name".into(), "ingredients".into()],
            rows: vec![],
        };
        assert_eq!(sheet.column_index("ingredients"), Some(1));
        assert_eq!(sheet.column_index("missing"), None);
    }

    #[test]
    fn test_push_column_alignment() {
        let mut sheet = Sheet {
            headers: vec!["ingredients".into()],
            rows: vec![vec!["мука".into()], vec!["сахар".into()]],
        };
        sheet.push_column("normalized_ingredients", vec!["мука".into(), "сахар".into()]);
        assert_eq!(sheet.headers.len(), 2);
        assert_eq!(sheet.rows[0], vec!["мука", "мука"]);
        assert_eq!(sheet.rows[1], vec!["сахар", "сахар"]);
    }

    #[test]
    fn test_tally_counts_and_order() {
        let cells = vec![
            "сахар, мука".to_string(),
            "сахар".to_string(),
            String::new(),
        ];
        let summary = Summary::tally(&cells, 10);
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.normalized, 2);
        assert_eq!(summary.empty, 1);
        assert_eq!(summary.distinct_ingredients, 2);
        assert_eq!(summary.top_ingredients[0].name, "сахар");
        assert_eq!(summary.top_ingredients[0].count, 2);
        assert_eq!(summary.top_ingredients[1].name, "мука");
    }

    #[test]
    fn test_tally_top_truncation() {
        let cells = vec!["соль, перец, мука".to_string()];
        let summary = Summary::tally(&cells, 2);
        assert_eq!(summary.distinct_ingredients, 3);
        assert_eq!(summary.top_ingredients.len(), 2);
    }
}
