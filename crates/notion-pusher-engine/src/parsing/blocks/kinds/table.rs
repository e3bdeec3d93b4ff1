use regex::Regex;
use std::sync::OnceLock;

use crate::parsing::{
    blocks::types::{Row, Table},
    inline::tokenize,
    noise::FULLWIDTH_PIPE,
};

/// Turns a buffered run of `|` lines into one [`Table`].
pub struct TableBuilder;

impl TableBuilder {
    pub const PIPE: char = '|';

    /// Whether a normalized, trimmed line belongs to a table.
    pub fn is_row(text: &str) -> bool {
        text.starts_with(Self::PIPE)
    }

    /// Whether a row is layout only: whitespace, pipes, colons and dashes,
    /// in either ASCII or full-width form.
    pub fn is_separator(row: &str) -> bool {
        static SEPARATOR: OnceLock<Regex> = OnceLock::new();
        let re = SEPARATOR.get_or_init(|| {
            Regex::new(r"^[\s|\x{FF5C}:\-\x{FF0D}]+$").expect("Invalid table separator regex")
        });
        re.is_match(row)
    }

    /// Splits a row on `|`, dropping the empty edge cells produced by a
    /// leading or trailing pipe.
    pub fn split_cells(row: &str) -> Vec<&str> {
        let trimmed = row.trim();
        let mut cells: Vec<&str> = trimmed.split(Self::PIPE).map(str::trim).collect();
        if trimmed.starts_with(Self::PIPE) && cells.first().is_some_and(|c| c.is_empty()) {
            cells.remove(0);
        }
        if trimmed.ends_with(Self::PIPE) && cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        cells
    }

    /// Builds a table, or `None` when no row survives separator filtering.
    ///
    /// Every row is padded with empty cells to the widest row's width.
    pub fn build<S: AsRef<str>>(rows: &[S]) -> Option<Table> {
        let parsed: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.as_ref().replace(FULLWIDTH_PIPE, "|"))
            .filter(|row| !Self::is_separator(row))
            .map(|row| Self::split_cells(&row).into_iter().map(String::from).collect())
            .collect();

        let column_count = parsed.iter().map(Vec::len).max()?;
        if column_count == 0 {
            return None;
        }

        let rows = parsed
            .into_iter()
            .map(|mut cells| {
                cells.resize(column_count, String::new());
                Row {
                    cells: cells.iter().map(|c| tokenize(c)).collect(),
                }
            })
            .collect();

        Some(Table { column_count, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::Run;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn plain(table: &Table) -> Vec<Vec<String>> {
        table
            .rows
            .iter()
            .map(|r| {
                r.cells
                    .iter()
                    .map(|c| c.iter().map(Run::plain_text).collect::<String>())
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    #[rstest]
    #[case("|---|---|")]
    #[case("| :--- | ---: |")]
    #[case("|   |   |")]
    #[case("｜－－｜")]
    #[case("|－－|")]
    fn separator_rows(#[case] row: &str) {
        assert!(TableBuilder::is_separator(row));
    }

    #[test]
    fn data_row_is_not_separator() {
        assert!(!TableBuilder::is_separator("| a | - |"));
    }

    #[test]
    fn simple_table() {
        let table = TableBuilder::build(&["| A | B |", "|---|---|", "| 1 | 2 |"]).unwrap();
        assert_eq!(table.column_count, 2);
        assert_eq!(
            plain(&table),
            vec![vec!["A".to_string(), "B".into()], vec!["1".into(), "2".into()]]
        );
    }

    #[test]
    fn short_rows_are_padded() {
        let table = TableBuilder::build(&["| a | b | c |", "| d |"]).unwrap();
        assert_eq!(table.column_count, 3);
        assert!(table.rows.iter().all(|r| r.cells.len() == 3));
        assert_eq!(table.rows[1].cells[1], Vec::<Run>::new());
    }

    #[test]
    fn fullwidth_pipes_are_normalized() {
        let table = TableBuilder::build(&["｜ 名前 ｜ 値 ｜"]).unwrap();
        assert_eq!(
            plain(&table),
            vec![vec!["名前".to_string(), "値".to_string()]]
        );
    }

    #[test]
    fn fullwidth_separator_is_dropped() {
        let rows = ["｜ k ｜ v ｜", "｜－－｜－－｜", "｜ a ｜ 1 ｜"];
        let table = TableBuilder::build(&rows).unwrap();
        assert_eq!(table.column_count, 2);
        assert_eq!(
            plain(&table),
            vec![vec!["k".to_string(), "v".into()], vec!["a".into(), "1".into()]]
        );
    }

    #[test]
    fn interior_empty_cells_are_kept() {
        let table = TableBuilder::build(&["| a || c |"]).unwrap();
        assert_eq!(table.column_count, 3);
    }

    #[test]
    fn only_separators_yield_nothing() {
        assert_eq!(TableBuilder::build(&["|---|---|", "| :-: |"]), None);
        assert_eq!(TableBuilder::build::<&str>(&[]), None);
    }

    #[test]
    fn cells_are_tokenized() {
        let table = TableBuilder::build(&["| **x** | $y$ |"]).unwrap();
        assert_eq!(
            table.rows[0].cells,
            vec![
                vec![Run::Bold(vec![Run::text("x")])],
                vec![Run::Equation("y".into())]
            ]
        );
    }
}
