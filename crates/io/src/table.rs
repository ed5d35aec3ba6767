//! Owned column table read from disk.

use crate::error::IoError;

/// Named `f64` columns of equal length, in the order they were requested.
///
/// Missing values are stored as NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesTable {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl SeriesTable {
    /// Builds a table from `(name, values)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if column lengths differ or a name
    /// repeats.
    pub fn new(columns: Vec<(String, Vec<f64>)>) -> Result<Self, IoError> {
        let mut mismatches: Vec<String> = Vec::new();
        let expected = columns.first().map_or(0, |(_, v)| v.len());

        for (i, (name, values)) in columns.iter().enumerate() {
            if values.len() != expected {
                mismatches.push(format!(
                    "column '{name}' length {} != {expected}",
                    values.len()
                ));
            }
            if columns[..i].iter().any(|(other, _)| other == name) {
                mismatches.push(format!("column '{name}' requested twice"));
            }
        }

        if !mismatches.is_empty() {
            return Err(IoError::Validation {
                count: mismatches.len(),
                details: mismatches.join("; "),
            });
        }

        let (names, columns) = columns.into_iter().unzip();
        Ok(Self { names, columns })
    }

    /// Returns the values of column `name`, if present.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
    }

    /// Column names in table order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// All columns in table order.
    pub fn columns(&self) -> &[Vec<f64>] {
        &self.columns
    }

    /// Number of rows (0 for a table without columns).
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        let t = SeriesTable::new(vec![
            ("x".to_string(), vec![1.0, 2.0]),
            ("y".to_string(), vec![3.0, 4.0]),
        ])
        .unwrap();
        assert_eq!(t.column("y"), Some(&[3.0, 4.0][..]));
        assert_eq!(t.column("z"), None);
        assert_eq!(t.n_rows(), 2);
        assert_eq!(t.names(), &["x".to_string(), "y".to_string()]);
        assert_eq!(t.columns().len(), 2);
    }

    #[test]
    fn empty_table() {
        let t = SeriesTable::new(Vec::new()).unwrap();
        assert_eq!(t.n_rows(), 0);
        assert!(t.columns().is_empty());
    }

    #[test]
    fn rejects_ragged_and_duplicate_columns() {
        let err = SeriesTable::new(vec![
            ("x".to_string(), vec![1.0, 2.0]),
            ("y".to_string(), vec![3.0]),
            ("x".to_string(), vec![5.0, 6.0]),
        ])
        .unwrap_err();
        match err {
            IoError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert!(details.contains("'y' length 1"));
                assert!(details.contains("requested twice"));
            }
            other => panic!("expected Validation error, got {other:?}"),
        }
    }
}
