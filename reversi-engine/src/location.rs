//! Code for working with [`Location`]s on the board.
//!
//! Columns are named like spreadsheet columns: "A" to "Z", then "AA", "AB", ...

use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};

const LETTERS: usize = 26;

/// A zero-based `(column, row)` coordinate on the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Location {
    col: usize,
    row: usize,
}

impl Location {
    /// Construct a Location from column and row coordinates.
    #[inline]
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row
    }

    /// Get the column and row coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.col, self.row)
    }
}

/// The name of column `col`: "A" for 0, "Z" for 25, "AA" for 26.
pub(crate) fn column_name(col: usize) -> String {
    let mut letters = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        n -= 1;
        letters.push((b'A' + (n % LETTERS) as u8) as char);
        n /= LETTERS;
    }
    letters.iter().rev().collect()
}

/// Convert this [`Location`] into string notation ("C4" for column 2, row 3).
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&column_name(self.col))?;
        write!(f, "{}", self.row + 1)
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from column letters and a 1-indexed row ("A4", "b12", "AB30").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .ok_or(ParseLocationError)?;
        let (col_str, row_str) = s.split_at(split);
        if col_str.is_empty() || !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseLocationError);
        }

        let mut col_number: usize = 0;
        for c in col_str.chars() {
            let digit = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
            col_number = col_number
                .checked_mul(LETTERS)
                .and_then(|n| n.checked_add(digit))
                .ok_or(ParseLocationError)?;
        }

        let row: usize = row_str.parse().or(Err(ParseLocationError))?;
        if row == 0 {
            return Err(ParseLocationError);
        }

        Ok(Self::new(col_number - 1, row - 1))
    }
}
