use crate::lexicon::Lexicon;
use crate::search::square::Square;
use bitvec::prelude::*;
use std::iter::FusedIterator;
use std::ops::Range;

/// Which of the two word lists receives the next placement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Row,
    Column,
}

/// One placement slot on the search stack
///
/// Holds the candidate id range still to try and the id tentatively placed
/// by the most recent visit, so the placement can be undone before the next
/// sibling candidate is tried.
#[derive(Debug)]
struct Frame {
    axis: Axis,
    candidates: Range<usize>,
    placed: Option<usize>,
}

/// Lazy depth-first search over completions of a seeded word square
///
/// Rows and columns are extended alternately so the partial grid stays
/// square; each placement is constrained to the prefix read off the letters
/// the perpendicular words have already fixed. Placements are undone on
/// backtrack, so sibling branches never observe a partially committed square.
///
/// The iterator is deterministic for a fixed lexicon and seed pair:
/// candidates are tried in sorted lexicon order at every depth. Exhausting
/// without a result is the normal "no solution from these seeds" outcome.
pub struct SquareSearch<'a> {
    lexicon: &'a Lexicon,
    size: usize,
    babbage: bool,
    rows: Vec<usize>,
    columns: Vec<usize>,
    used: BitVec,
    stack: Vec<Frame>,
    seeded_complete: bool,
    exhausted: bool,
}

/// Lazily search for every completed square consistent with two seed words
///
/// `seed_row` anchors row zero and `seed_col` column zero. The returned
/// iterator may be abandoned after any number of results; a fresh call
/// re-runs the search from scratch. Seeds that cannot anchor any square
/// (absent from the lexicon, disagreeing on the shared corner letter, or
/// duplicated where reuse is forbidden) exhaust immediately.
///
/// With `babbage` set, row words equal column words by construction; both
/// seeds must then name the same word.
pub fn find_squares<'a>(
    lexicon: &'a Lexicon,
    seed_row: &str,
    seed_col: &str,
    babbage: bool,
) -> SquareSearch<'a> {
    SquareSearch::new(lexicon, seed_row, seed_col, babbage)
}

impl<'a> SquareSearch<'a> {
    fn new(lexicon: &'a Lexicon, seed_row: &str, seed_col: &str, babbage: bool) -> Self {
        let size = lexicon.word_len();
        let mut search = Self {
            lexicon,
            size,
            babbage,
            rows: Vec::with_capacity(size),
            columns: Vec::with_capacity(size),
            used: bitvec![0; lexicon.len()],
            stack: Vec::with_capacity(2 * size),
            seeded_complete: false,
            exhausted: true,
        };

        if size == 0 {
            return search;
        }
        let (Some(row_id), Some(col_id)) =
            (lexicon.position(seed_row), lexicon.position(seed_col))
        else {
            return search;
        };
        // Both seeds claim the top-left cell
        if seed_row.as_bytes().first() != seed_col.as_bytes().first() {
            return search;
        }

        if babbage {
            // Row zero is column zero by construction
            if row_id != col_id {
                return search;
            }
            search.rows.push(row_id);
            search.used.set(row_id, true);
        } else {
            // A 1x1 square reads the same across and down, so the shared
            // word is not a reuse violation there
            if row_id == col_id && size > 1 {
                return search;
            }
            search.rows.push(row_id);
            search.columns.push(col_id);
            search.used.set(row_id, true);
            search.used.set(col_id, true);
        }

        search.exhausted = false;
        if search.complete() {
            search.seeded_complete = true;
        } else {
            let frame = search.next_frame();
            search.stack.push(frame);
        }
        search
    }

    /// True when both lists hold a full complement of words
    fn complete(&self) -> bool {
        self.rows.len() == self.size && (self.babbage || self.columns.len() == self.size)
    }

    /// Build the frame for the next unfilled slot
    ///
    /// The required prefix is the letter at the receiving list's current
    /// depth of every fixed perpendicular word; in the Babbage variant the
    /// row list constrains itself.
    fn next_frame(&self) -> Frame {
        let axis = if self.babbage || self.rows.len() == self.columns.len() {
            Axis::Row
        } else {
            Axis::Column
        };
        let (depth, sources) = match axis {
            Axis::Row => {
                let sources = if self.babbage { &self.rows } else { &self.columns };
                (self.rows.len(), sources)
            }
            Axis::Column => (self.columns.len(), &self.rows),
        };
        let prefix: String = sources
            .iter()
            .filter_map(|&id| self.lexicon.letter(id, depth))
            .map(char::from)
            .collect();
        Frame {
            axis,
            candidates: self.lexicon.prefix_range(&prefix),
            placed: None,
        }
    }

    /// Copy the current row words out as an immutable square
    fn snapshot(&self) -> Square {
        let rows = self
            .rows
            .iter()
            .filter_map(|&id| self.lexicon.word(id))
            .map(str::to_owned)
            .collect();
        Square::new(rows)
    }
}

impl Iterator for SquareSearch<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.exhausted {
            return None;
        }
        if self.seeded_complete {
            // 1x1 case: the seed square is the only result
            self.seeded_complete = false;
            self.exhausted = true;
            return Some(self.snapshot());
        }

        loop {
            let Some(frame) = self.stack.last_mut() else {
                self.exhausted = true;
                return None;
            };

            // Undo the placement committed by the previous visit to this
            // frame before trying its next candidate
            if let Some(id) = frame.placed.take() {
                match frame.axis {
                    Axis::Row => {
                        self.rows.pop();
                    }
                    Axis::Column => {
                        self.columns.pop();
                    }
                }
                self.used.set(id, false);
            }

            let mut chosen = None;
            for id in frame.candidates.by_ref() {
                // No word appears twice within one square
                if self.used.get(id).as_deref() != Some(&true) {
                    chosen = Some(id);
                    break;
                }
            }
            let Some(id) = chosen else {
                self.stack.pop();
                continue;
            };

            frame.placed = Some(id);
            let axis = frame.axis;
            match axis {
                Axis::Row => self.rows.push(id),
                Axis::Column => self.columns.push(id),
            }
            self.used.set(id, true);

            if self.complete() {
                // Resumes from this frame's next candidate on the next call
                return Some(self.snapshot());
            }
            let descend = self.next_frame();
            self.stack.push(descend);
        }
    }
}

impl FusedIterator for SquareSearch<'_> {}
