use std::fmt::Write;

use brandrec_core::category::CategoryTable;
use brandrec_core::{BrandrecError, Recommendation};
use serde::Serialize;

/// Numbered brands with percentages, one per line.
pub fn render_table(rec: &Recommendation) -> String {
    let width = rec.iter().map(|b| b.label.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (rank, brand) in rec.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {:<width$}  {:>6.2}%",
            rank + 1,
            brand.label,
            brand.probability * 100.0,
        );
    }
    out
}

/// Every table with its labels and codes.
pub fn render_categories(tables: &[&CategoryTable]) -> String {
    let mut out = String::new();
    for table in tables {
        let _ = writeln!(out, "{}:", table.field());
        for &(label, code) in table.entries() {
            let _ = writeln!(out, "  {code}  {label}");
        }
    }
    out
}

/// One line of `batch` output.
#[derive(Debug, Serialize)]
pub struct BatchLine<'a> {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    recommendation: Option<&'a Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<BatchError>,
}

#[derive(Debug, Serialize)]
struct BatchError {
    code: &'static str,
    message: String,
}

impl<'a> BatchLine<'a> {
    pub fn new(index: usize, result: &'a Result<Recommendation, BrandrecError>) -> Self {
        match result {
            Ok(rec) => Self {
                index,
                recommendation: Some(rec),
                error: None,
            },
            Err(e) => Self {
                index,
                recommendation: None,
                error: Some(BatchError {
                    code: e.error_code(),
                    message: e.to_string(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandrec_core::category::all_tables;
    use brandrec_core::BrandScore;

    #[test]
    fn table_lists_brands_in_rank_order() {
        let rec = Recommendation::new(vec![
            BrandScore {
                label: "SAMSUNG".into(),
                probability: 0.5,
            },
            BrandScore {
                label: "Vu".into(),
                probability: 0.125,
            },
        ]);
        let table = render_table(&rec);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines, ["1. SAMSUNG   50.00%", "2. Vu        12.50%"]);
    }

    #[test]
    fn categories_list_every_label() {
        let text = render_categories(&all_tables());
        assert!(text.contains("operating_system:"));
        assert!(text.contains("  3  WebOS"));
        assert!(text.contains("  7  100 W Speaker Output"));
        assert!(text.contains("  2  Full HD"));
    }
}
