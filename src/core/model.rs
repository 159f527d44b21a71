// StatusBoard - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use crate::util::error::EditError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

// =============================================================================
// Cell values
// =============================================================================

/// chrono format for a date-only cell (time is midnight).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// chrono format for a date cell with a time component.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single dynamically-typed cell.
///
/// Tagged once at the parse boundary (CSV read, spreadsheet upload,
/// command-line edit) and carried typed through the pipeline. Converted to
/// text only for search, category counts, keyword matching and CSV output.
#[derive(Debug, Clone)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
    Missing,
}

impl CellValue {
    /// Infer a typed value from raw text.
    ///
    /// Empty -> Missing. A Number or Date is produced only when its `Display`
    /// form is exactly `raw` (`150000`, `12.99`, `2026-01-15`,
    /// `2026-01-15 08:30:00`); anything else, including `007`, `1e3`, `+5`
    /// and `2026-1-5`, stays Text. Text written by this crate therefore reads
    /// back as the same value.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return CellValue::Missing;
        }
        let typed = if let Ok(n) = raw.parse::<f64>() {
            n.is_finite().then_some(CellValue::Number(n))
        } else if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT) {
            Some(CellValue::Date(ndt))
        } else {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .map(|nd| CellValue::Date(nd.and_time(NaiveTime::MIN)))
        };
        match typed {
            Some(value) if value.to_string() == raw => value,
            _ => CellValue::Text(raw.to_string()),
        }
    }

    /// Returns true for the Missing variant.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Numeric value, if this cell is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text form used for search and keyword matching. Missing is empty.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Short type label for data-information listings.
    pub fn kind_label(&self) -> &'static str {
        match self {
            CellValue::Text(_) => "text",
            CellValue::Number(_) => "number",
            CellValue::Date(_) => "date",
            CellValue::Missing => "missing",
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            CellValue::Date(d) => {
                if d.time() == NaiveTime::MIN {
                    write!(f, "{}", d.format(DATE_FORMAT))
                } else {
                    write!(f, "{}", d.format(DATETIME_FORMAT))
                }
            }
            CellValue::Missing => Ok(()),
        }
    }
}

// Manual Eq/Hash so values can be used in sets for category filters.
// Floats compare by bit pattern; NaN never reaches a cell (see `parse`).

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => a == b,
            (CellValue::Number(a), CellValue::Number(b)) => a.to_bits() == b.to_bits(),
            (CellValue::Date(a), CellValue::Date(b)) => a == b,
            (CellValue::Missing, CellValue::Missing) => true,
            _ => false,
        }
    }
}

impl Eq for CellValue {}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::Text(s) => s.hash(state),
            CellValue::Number(n) => n.to_bits().hash(state),
            CellValue::Date(d) => d.hash(state),
            CellValue::Missing => {}
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

// =============================================================================
// Column kinds
// =============================================================================

/// Derived classification of a whole column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnKind {
    /// Every non-missing cell is a number.
    Numeric,
    /// Every non-missing cell is a date.
    Date,
    /// Mixed or textual values.
    Text,
    /// No values at all.
    Empty,
}

impl ColumnKind {
    /// Returns all variants in display order.
    pub fn all() -> &'static [ColumnKind] {
        &[
            ColumnKind::Numeric,
            ColumnKind::Date,
            ColumnKind::Text,
            ColumnKind::Empty,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Date => "date",
            ColumnKind::Text => "text",
            ColumnKind::Empty => "empty",
        }
    }

    /// Classify a sequence of cells.
    pub fn classify<'a>(cells: impl IntoIterator<Item = &'a CellValue>) -> Self {
        let mut kind = ColumnKind::Empty;
        for cell in cells {
            let this = match cell {
                CellValue::Missing => continue,
                CellValue::Number(_) => ColumnKind::Numeric,
                CellValue::Date(_) => ColumnKind::Date,
                CellValue::Text(_) => return ColumnKind::Text,
            };
            kind = match kind {
                ColumnKind::Empty => this,
                k if k == this => k,
                _ => return ColumnKind::Text,
            };
        }
        kind
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// One rectangular table: ordered named columns, insertion-ordered rows.
///
/// Every row has exactly `columns.len()` cells. There is no key and no
/// uniqueness constraint on rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    /// Build a dataset, padding short rows with Missing and dropping cells
    /// beyond the header width. Column names are made unique.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let columns = dedupe_column_names(columns);
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Missing);
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// A dataset with no columns and no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows and no columns.
    ///
    /// A header-only dataset is not empty: it still has a schema to show.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty()
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at (row, column index).
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Iterate over one column's cells, top to bottom.
    pub fn column_values(&self, col: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().filter_map(move |r| r.get(col))
    }

    /// Kind of the named column, or None if it does not exist.
    pub fn column_kind(&self, name: &str) -> Option<ColumnKind> {
        self.column_index(name)
            .map(|idx| ColumnKind::classify(self.column_values(idx)))
    }

    /// Kinds of every column, in column order.
    pub fn column_kinds(&self) -> Vec<(String, ColumnKind)> {
        (0..self.columns.len())
            .map(|idx| {
                (
                    self.columns[idx].clone(),
                    ColumnKind::classify(self.column_values(idx)),
                )
            })
            .collect()
    }

    /// Concatenate `other`'s rows after this dataset's rows.
    ///
    /// Columns are unioned by name: this dataset's columns first in their
    /// order, then `other`'s new columns in first-appearance order. Cells a
    /// row has no column for are Missing.
    pub fn concat(&self, other: &Dataset) -> Dataset {
        let mut columns = self.columns.clone();
        for name in &other.columns {
            if !columns.contains(name) {
                columns.push(name.clone());
            }
        }
        let width = columns.len();

        let mut rows: Vec<Vec<CellValue>> = Vec::with_capacity(self.len() + other.len());
        for row in &self.rows {
            let mut padded = row.clone();
            padded.resize(width, CellValue::Missing);
            rows.push(padded);
        }

        let positions: HashMap<&str, usize> = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), i))
            .collect();
        for row in &other.rows {
            let mut mapped = vec![CellValue::Missing; width];
            for (name, value) in other.columns.iter().zip(row) {
                if let Some(&pos) = positions.get(name.as_str()) {
                    mapped[pos] = value.clone();
                }
            }
            rows.push(mapped);
        }

        Dataset { columns, rows }
    }

    // -------------------------------------------------------------------------
    // Grid edits
    // -------------------------------------------------------------------------

    /// Replace one cell.
    pub fn set_cell(&mut self, row: usize, column: &str, value: CellValue) -> Result<(), EditError> {
        let col = self.require_column(column)?;
        let rows = self.rows.len();
        let target = self
            .rows
            .get_mut(row)
            .ok_or(EditError::RowOutOfRange { row, rows })?;
        target[col] = value;
        Ok(())
    }

    /// Append a row. Unlisted columns are Missing.
    pub fn push_row(&mut self, values: Vec<(String, CellValue)>) -> Result<(), EditError> {
        let mut row = vec![CellValue::Missing; self.columns.len()];
        for (column, value) in values {
            let col = self.require_column(&column)?;
            row[col] = value;
        }
        self.rows.push(row);
        Ok(())
    }

    /// Remove a row, returning its cells.
    pub fn remove_row(&mut self, row: usize) -> Result<Vec<CellValue>, EditError> {
        if row >= self.rows.len() {
            return Err(EditError::RowOutOfRange {
                row,
                rows: self.rows.len(),
            });
        }
        Ok(self.rows.remove(row))
    }

    fn require_column(&self, column: &str) -> Result<usize, EditError> {
        self.column_index(column)
            .ok_or_else(|| EditError::UnknownColumn {
                column: column.to_string(),
            })
    }
}

/// Make header names unique and non-blank.
///
/// Blank names become `Unnamed: <index>`; repeats of an earlier name get
/// `.1`, `.2`, ... suffixes.
pub fn dedupe_column_names(columns: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut taken: HashSet<String> = HashSet::with_capacity(columns.len());
    let mut out: Vec<String> = Vec::with_capacity(columns.len());
    for (idx, name) in columns.into_iter().enumerate() {
        let base = if name.trim().is_empty() {
            format!("{}{idx}", constants::UNNAMED_COLUMN_PREFIX)
        } else {
            name
        };
        let mut candidate = base.clone();
        while taken.contains(&candidate) {
            let n = seen.entry(base.clone()).or_insert(0);
            *n += 1;
            candidate = format!("{base}.{n}");
        }
        taken.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

// =============================================================================
// Page selection (presentation shell)
// =============================================================================

/// The four pages of the dashboard shell.
///
/// The shell dispatches on this; nothing in `core` branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Upload,
    Edit,
    Dashboard,
    ViewAll,
}

impl Page {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Page::Upload => "Upload Data",
            Page::Edit => "Edit Data",
            Page::Dashboard => "Dashboard",
            Page::ViewAll => "View All Data",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_infers_cell_types() {
        assert_eq!(CellValue::parse(""), CellValue::Missing);
        assert_eq!(CellValue::parse("65"), CellValue::Number(65.0));
        assert_eq!(CellValue::parse("29.99"), CellValue::Number(29.99));
        assert_eq!(CellValue::parse("In Progress"), text("In Progress"));
        let d = CellValue::parse("2026-01-15");
        assert!(matches!(d, CellValue::Date(_)));
        assert_eq!(d.to_string(), "2026-01-15");
    }

    #[test]
    fn test_parse_rejects_non_finite_numbers() {
        assert_eq!(CellValue::parse("NaN"), text("NaN"));
        assert_eq!(CellValue::parse("inf"), text("inf"));
    }

    #[test]
    fn test_parse_keeps_non_canonical_text() {
        for raw in ["007", "1e3", "+5", "1.50", "-0", "2026-1-5", "2026-01-15 00:00:00"] {
            assert_eq!(CellValue::parse(raw), text(raw), "raw {raw:?}");
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for raw in ["150000", "12.99", "-3", "2025-12-10", "2025-12-10 08:30:00", "INV-1001"] {
            let v = CellValue::parse(raw);
            assert_eq!(v.to_string(), raw, "display of {v:?}");
            assert_eq!(CellValue::parse(&v.to_string()), v);
        }
    }

    #[test]
    fn test_classify_columns() {
        let nums = [CellValue::Number(1.0), CellValue::Missing, CellValue::Number(2.5)];
        assert_eq!(ColumnKind::classify(&nums), ColumnKind::Numeric);

        let mixed = [CellValue::Number(1.0), CellValue::parse("2026-01-01")];
        assert_eq!(ColumnKind::classify(&mixed), ColumnKind::Text);

        let texts = [text("a"), CellValue::Missing];
        assert_eq!(ColumnKind::classify(&texts), ColumnKind::Text);

        assert_eq!(ColumnKind::classify(&[CellValue::Missing]), ColumnKind::Empty);
    }

    #[test]
    fn test_new_pads_short_rows() {
        let ds = Dataset::new(cols(&["A", "B"]), vec![vec![text("x")]]);
        assert_eq!(ds.rows()[0], vec![text("x"), CellValue::Missing]);
    }

    #[test]
    fn test_dedupe_column_names() {
        let names = dedupe_column_names(cols(&["Name", "Name", "", "Name"]));
        assert_eq!(names, cols(&["Name", "Name.1", "Unnamed: 2", "Name.2"]));
    }

    #[test]
    fn test_concat_unions_columns_by_name() {
        let a = Dataset::new(cols(&["ID", "Status"]), vec![vec![text("1"), text("Done")]]);
        let b = Dataset::new(
            cols(&["Status", "Owner"]),
            vec![vec![text("Pending"), text("Mike")]],
        );
        let c = a.concat(&b);
        assert_eq!(c.columns(), &cols(&["ID", "Status", "Owner"])[..]);
        assert_eq!(c.rows()[0], vec![text("1"), text("Done"), CellValue::Missing]);
        assert_eq!(c.rows()[1], vec![CellValue::Missing, text("Pending"), text("Mike")]);
    }

    #[test]
    fn test_concat_with_empty_keeps_other() {
        let b = Dataset::new(cols(&["X"]), vec![vec![text("1")], vec![text("2")]]);
        let c = Dataset::empty().concat(&b);
        assert_eq!(c, b);
    }

    #[test]
    fn test_grid_edits() {
        let mut ds = Dataset::new(cols(&["Task", "Status"]), vec![vec![text("a"), text("New")]]);
        ds.set_cell(0, "Status", text("Done")).unwrap();
        assert_eq!(ds.cell(0, 1), Some(&text("Done")));

        ds.push_row(vec![("Task".to_string(), text("b"))]).unwrap();
        assert_eq!(ds.rows()[1], vec![text("b"), CellValue::Missing]);

        let removed = ds.remove_row(0).unwrap();
        assert_eq!(removed[0], text("a"));
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn test_grid_edit_errors() {
        let mut ds = Dataset::new(cols(&["Task"]), vec![]);
        assert!(matches!(
            ds.set_cell(0, "Task", CellValue::Missing),
            Err(EditError::RowOutOfRange { row: 0, rows: 0 })
        ));
        assert!(matches!(
            ds.push_row(vec![("Nope".to_string(), CellValue::Missing)]),
            Err(EditError::UnknownColumn { .. })
        ));
        assert!(ds.remove_row(3).is_err());
    }

    #[test]
    fn test_header_only_dataset_is_not_empty() {
        let ds = Dataset::new(cols(&["A"]), vec![]);
        assert!(!ds.is_empty());
        assert_eq!(ds.len(), 0);
        assert!(Dataset::empty().is_empty());
    }
}
