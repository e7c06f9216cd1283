//! # Cells
//!
//! A [`Cell`] is the smallest unit of table content. It keeps the *kind* of the
//! value it was built from (integer, number, text) so presenters can decide on
//! alignment, but it never reformats the value: the text a cell shows is exactly
//! the `Display` form of the field it came from.

use serde::Serialize;
use std::fmt::{self, Display};

/// The typed value held by a [`Cell`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(v) => write!(f, "{}", v),
            CellValue::Number(v) => write!(f, "{}", v),
            CellValue::Text(v) => f.write_str(v),
        }
    }
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cell {
    value: CellValue,
}

impl Cell {
    pub fn new(value: impl Into<CellValue>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &CellValue {
        &self.value
    }

    /// Returns `true` for integer and number cells.
    pub fn is_numeric(&self) -> bool {
        matches!(self.value, CellValue::Integer(_) | CellValue::Number(_))
    }

    /// Display text of the cell.
    pub fn text(&self) -> String {
        self.value.to_string()
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Integer(v)
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Integer(i64::from(v))
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

macro_rules! cell_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Cell {
                fn from(v: $ty) -> Self {
                    Cell::new(v)
                }
            }
        )*
    };
}

cell_from!(i64, u32, f64, String, &str);

impl From<CellValue> for Cell {
    fn from(value: CellValue) -> Self {
        Cell { value }
    }
}
