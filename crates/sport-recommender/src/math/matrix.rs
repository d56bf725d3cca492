use std::error::Error;
use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Deserializer, Serialize};

use crate::math::vector::Array1;

/// Row-major dense matrix; rows are samples, columns are features.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Array2<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(ShapeError {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Stack equally sized rows. An empty iterator yields a `0 x cols` matrix.
    pub fn from_rows<I, R>(cols: usize, rows: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
        T: Clone,
    {
        let mut data = Vec::new();
        let mut nrows = 0;
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(ShapeError {
                    rows: nrows + 1,
                    cols,
                    len: data.len() + row.len(),
                });
            }
            data.extend_from_slice(row);
            nrows += 1;
        }
        Self::from_shape_vec((nrows, cols), data)
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |row| self.row_slice(row))
    }

    pub fn column(&self, col: usize) -> Array1<T>
    where
        T: Clone,
    {
        assert!(col < self.cols, "column index out of bounds");
        (0..self.rows).map(|row| self[(row, col)].clone()).collect()
    }
}

impl<T> Index<(usize, usize)> for Array2<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Array2<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

#[derive(Deserialize)]
struct RawArray2<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

// Re-check the shape so a hand-edited artifact cannot produce out-of-bounds rows.
impl<'de, T> Deserialize<'de> for Array2<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawArray2::<T>::deserialize(deserializer)?;
        Array2::from_shape_vec((raw.rows, raw.cols), raw.data).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone)]
pub struct ShapeError {
    rows: usize,
    cols: usize,
    len: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid shape ({}, {}) for buffer of length {}",
            self.rows, self.cols, self.len
        )
    }
}

impl Error for ShapeError {}
