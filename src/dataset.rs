use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView1};
use std::hash::Hash;

/// A validated rows-by-columns table whose last column is the class label.
///
/// Columns `0..n_attributes()` are candidate splitting attributes. The table
/// is immutable once constructed; every statistic borrows it.
#[derive(Clone, Debug)]
pub struct Dataset<V> {
    table: Array2<V>,
}

impl<V: Eq + Hash> Dataset<V> {
    /// Wraps an existing table, rejecting shapes that cannot carry at least
    /// one row and one attribute column plus the label column.
    pub fn new(table: Array2<V>) -> Result<Self> {
        if table.nrows() == 0 {
            return Err(Error::InvalidInput(
                "dataset must contain at least one row".to_string(),
            ));
        }
        if table.ncols() < 2 {
            return Err(Error::InvalidInput(format!(
                "dataset must have at least 2 columns (one attribute plus the label), got {}",
                table.ncols()
            )));
        }
        Ok(Self { table })
    }

    /// Builds a dataset from row vectors, detecting ragged input.
    ///
    /// `Array2` cannot represent a ragged table, so the check happens here
    /// while the rows are flattened into one buffer.
    pub fn from_rows(rows: Vec<Vec<V>>) -> Result<Self> {
        let n_rows = rows.len();
        if n_rows == 0 {
            return Err(Error::InvalidInput(
                "dataset must contain at least one row".to_string(),
            ));
        }

        let n_cols = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(Error::InvalidInput(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
        }

        let flat: Vec<V> = rows.into_iter().flatten().collect();
        let table = Array2::from_shape_vec((n_rows, n_cols), flat)
            .map_err(|e| Error::InvalidInput(e.to_string()))?;
        Self::new(table)
    }

    pub fn n_rows(&self) -> usize {
        self.table.nrows()
    }

    /// Number of candidate attributes (all columns except the label).
    pub fn n_attributes(&self) -> usize {
        self.table.ncols() - 1
    }

    /// View of the label column (the last column).
    pub fn labels(&self) -> ArrayView1<'_, V> {
        self.table.column(self.table.ncols() - 1)
    }

    /// View of an attribute column, checked against the attribute range.
    pub fn attribute(&self, index: usize) -> Result<ArrayView1<'_, V>> {
        if index >= self.n_attributes() {
            return Err(Error::IndexOutOfRange {
                index,
                n_attributes: self.n_attributes(),
            });
        }
        Ok(self.table.column(index))
    }

    /// Iterates `(index, column)` over all attribute columns in ascending
    /// index order.
    pub fn attribute_columns(&self) -> impl Iterator<Item = (usize, ArrayView1<'_, V>)> {
        (0..self.n_attributes()).map(|i| (i, self.table.column(i)))
    }
}
