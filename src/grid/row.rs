//! Plain-text row binding.
//!
//! [`TextRowBinder`] is the concrete [`RowBinder`](crate::grid::RowBinder)
//! used by the demo binary and the tests: each row is a single formatted
//! line with fixed-width ID and kind columns, the display price, and the
//! image URL.

use crate::domain::Listing;
use crate::grid::adapter::RowBinder;

/// A single rendered grid line.
#[derive(Debug, Clone)]
pub struct TextRow {
    /// Creation order of this row, for distinguishing recycled rows from
    /// recreated ones.
    pub serial: usize,

    /// The formatted line, empty until first bound.
    pub line: String,
}

/// Binder rendering listings as fixed-width text lines.
#[derive(Debug, Default)]
pub struct TextRowBinder {
    created: usize,
}

impl TextRowBinder {
    /// Creates a binder with no rows yet produced.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows created so far.
    #[must_use]
    pub fn created(&self) -> usize {
        self.created
    }
}

impl RowBinder for TextRowBinder {
    type Row = TextRow;

    fn create_row(&mut self) -> TextRow {
        let serial = self.created;
        self.created += 1;
        TextRow {
            serial,
            line: String::new(),
        }
    }

    fn bind_row(&mut self, row: &mut TextRow, listing: &Listing) {
        row.line = format!(
            "{:<8} {:<4} {:>14}  {}",
            listing.id,
            listing.kind,
            listing.display_price(),
            listing.img_src
        );
    }
}
