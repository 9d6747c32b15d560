//! Miscellaneous project utilities.

use crate::location::column_name;
use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format `width * height` characters into a pretty grid, row-major.
/// `piece_iter` must yield exactly `width * height` items.
pub fn format_grid<T: Iterator<Item = char>>(
    mut piece_iter: T,
    width: usize,
    height: usize,
    f: &mut Formatter,
) -> fmt::Result {
    // Row labels are right-aligned to the widest row number, and every cell is
    // as wide as the widest column name.
    let label_width = height.to_string().len();
    let cell_width = column_name(width.saturating_sub(1)).len();

    write!(f, "{:1$} ", "", label_width + 1)?;
    for col in 0..width {
        write!(f, "{:1$} ", column_name(col), cell_width)?;
    }

    for row in 0..height {
        write!(f, "\n {:>1$} ", row + 1, label_width)?;
        for _ in 0..width {
            write!(f, "{:1$} ", piece_iter.next().ok_or(fmt::Error)?, cell_width)?;
        }
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Display;

    struct Grid(Vec<char>, usize, usize);

    impl Display for Grid {
        fn fmt(&self, f: &mut Formatter) -> fmt::Result {
            format_grid(self.0.iter().copied(), self.1, self.2, f)
        }
    }

    #[test]
    fn format_small_grid() {
        let grid = Grid(vec!['.', '#', 'O', '.'], 2, 2);
        assert_eq!(grid.to_string(), "   A B \n 1 . # \n 2 O . ");
    }

    #[test]
    fn format_grid_past_column_z() {
        let rendered = Grid(vec!['.'; 28 * 2], 28, 2).to_string();
        let header = rendered.lines().next().unwrap();
        assert!(header.starts_with("   A  B  C  "));
        assert!(header.ends_with("Y  Z  AA AB "));
        assert!(rendered.ends_with(&format!("\n 2 {}", ".  ".repeat(28))));
    }

    #[test]
    fn format_grid_wrong_length() {
        use std::fmt::Write;
        let mut out = String::new();
        assert!(write!(out, "{}", Grid(vec!['.'; 3], 2, 2)).is_err());
        out.clear();
        assert!(write!(out, "{}", Grid(vec!['.'; 5], 2, 2)).is_err());
    }
}
