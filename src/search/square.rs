use std::fmt;

/// Completed n-by-n word square, exposed as its row words
///
/// Immutable once yielded by the search. Column words are derived by reading
/// the grid top to bottom; the search only emits squares where every column
/// is also a lexicon word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Square {
    rows: Vec<String>,
}

impl Square {
    pub(crate) const fn new(rows: Vec<String>) -> Self {
        Self { rows }
    }

    /// Row words, top to bottom
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Side length of the square
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Column words left to right, each read top to bottom
    pub fn columns(&self) -> Vec<String> {
        (0..self.rows.len())
            .map(|col| {
                self.rows
                    .iter()
                    .filter_map(|row| row.as_bytes().get(col).copied())
                    .map(char::from)
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}
