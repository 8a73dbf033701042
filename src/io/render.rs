//! Text-grid rendering of found squares
//!
//! Squares are laid out in bands of `columns` squares, each band framed by
//! dash borders, with every square's rows stacked inside its cell.

use crate::search::Square;

/// Render squares as a bordered text grid, `columns` squares per band
///
/// Returns an empty string when there are no squares. A final partial band
/// is framed to its own width.
pub fn render_grid(squares: &[Square], columns: usize) -> String {
    let Some(first) = squares.first() else {
        return String::new();
    };
    if columns == 0 {
        return String::new();
    }
    let size = first.size();

    let mut out = String::new();
    let border = |count: usize| "-".repeat((size + 3) * count + 1);

    out.push_str(&border(squares.len().min(columns)));
    out.push('\n');
    for band in squares.chunks(columns) {
        for line in 0..size {
            out.push('|');
            for square in band {
                let word = square.rows().get(line).map_or("", String::as_str);
                out.push(' ');
                out.push_str(word);
                out.push_str(" |");
            }
            out.push('\n');
        }
        out.push_str(&border(band.len()));
        out.push('\n');
    }
    out
}
