//! Row lifecycle management and tap routing.
//!
//! [`GridAdapter`] owns the currently displayed listing collection and one
//! visual row per listing. [`set_items`](GridAdapter::set_items) diffs the
//! new collection against the previous one and applies the resulting script:
//! removed rows are dropped, moved rows are recycled, inserted rows are
//! created through the [`RowBinder`], and changed rows are rebound.

use std::collections::HashMap;

use crate::domain::Listing;
use crate::grid::diff::{diff, ListingDiff, RowOp};

/// Creates and populates visual rows for listings.
///
/// This is the create/bind seam of the adapter: the adapter decides *when* a
/// row is created, recycled or rebound, the binder decides *what* a row is
/// and how a listing's display attributes land in it.
pub trait RowBinder {
    /// The visual row container this binder produces.
    type Row;

    /// Constructs a new, empty row.
    fn create_row(&mut self) -> Self::Row;

    /// Populates `row` with `listing`'s display attributes.
    fn bind_row(&mut self, row: &mut Self::Row, listing: &Listing);
}

/// List presentation adapter binding listing collections to rows.
///
/// Row taps are routed synchronously to the caller-supplied handler with the
/// tapped listing; the handler is typically the overview controller's
/// [`on_select`](crate::overview::OverviewController::on_select).
///
/// # Example
///
/// ```rust
/// use marsgrid::domain::Listing;
/// use marsgrid::grid::{GridAdapter, TextRowBinder};
///
/// let mut adapter = GridAdapter::new(TextRowBinder::new(), |listing: &Listing| {
///     println!("navigate to {}", listing.id);
/// });
/// let ops = adapter.set_items(vec![Listing {
///     id: "424906".to_string(),
///     img_src: "http://example.test/a.jpg".to_string(),
///     kind: "rent".to_string(),
///     price: 1500.0,
/// }]);
/// assert_eq!(ops.len(), 1);
/// adapter.tap(0);
/// ```
pub struct GridAdapter<B: RowBinder> {
    binder: B,
    items: Vec<Listing>,
    rows: Vec<B::Row>,
    on_row_tapped: Box<dyn Fn(&Listing)>,
}

impl<B: RowBinder> GridAdapter<B> {
    /// Creates an empty adapter with the given binder and tap handler.
    pub fn new(binder: B, on_row_tapped: impl Fn(&Listing) + 'static) -> Self {
        Self {
            binder,
            items: Vec::new(),
            rows: Vec::new(),
            on_row_tapped: Box::new(on_row_tapped),
        }
    }

    /// Replaces the displayed collection, applying a minimal row diff.
    ///
    /// Returns the applied script (see [`RowOp`] for index semantics). An
    /// identical collection returns an empty script and touches no row.
    pub fn set_items(&mut self, new_items: Vec<Listing>) -> Vec<RowOp> {
        let ops = diff(&self.items, &new_items, &ListingDiff);
        tracing::debug!(
            previous = self.items.len(),
            next = new_items.len(),
            ops = ops.len(),
            "applying row diff"
        );

        // Phase 1: extract removed rows, keeping move sources for recycling.
        let mut extractions: Vec<(usize, bool)> = ops
            .iter()
            .filter_map(|op| match op {
                RowOp::Remove { index } => Some((*index, false)),
                RowOp::Move { from, .. } => Some((*from, true)),
                _ => None,
            })
            .collect();
        extractions.sort_by(|a, b| b.0.cmp(&a.0));
        let mut recycled: HashMap<usize, B::Row> = HashMap::new();
        for (index, keep) in extractions {
            let row = self.rows.remove(index);
            if keep {
                recycled.insert(index, row);
            }
        }

        // Phase 2: insert created and recycled rows at their final indices.
        let mut insertions: Vec<(usize, Option<usize>)> = ops
            .iter()
            .filter_map(|op| match op {
                RowOp::Insert { index } => Some((*index, None)),
                RowOp::Move { from, to } => Some((*to, Some(*from))),
                _ => None,
            })
            .collect();
        insertions.sort_by_key(|(target, _)| *target);
        for (target, source) in insertions {
            let mut row = source
                .and_then(|from| recycled.remove(&from))
                .unwrap_or_else(|| self.binder.create_row());
            self.binder.bind_row(&mut row, &new_items[target]);
            self.rows.insert(target, row);
        }

        // Phase 3: rebind rows whose content changed in place.
        for op in &ops {
            if let RowOp::Update { index } = op {
                self.binder.bind_row(&mut self.rows[*index], &new_items[*index]);
            }
        }

        self.items = new_items;
        ops
    }

    /// The currently displayed collection.
    #[must_use]
    pub fn items(&self) -> &[Listing] {
        &self.items
    }

    /// The current rows, in display order.
    #[must_use]
    pub fn rows(&self) -> &[B::Row] {
        &self.rows
    }

    /// Number of displayed rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the grid is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reports a tap on the row at `index`.
    ///
    /// Invokes the tap handler synchronously with the corresponding listing.
    /// Out-of-range taps are ignored.
    pub fn tap(&self, index: usize) {
        if let Some(listing) = self.items.get(index) {
            (self.on_row_tapped)(listing);
        }
    }
}
