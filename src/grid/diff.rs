//! Minimal edit-script computation between two item collections.
//!
//! [`diff`] produces the row operations needed to transform one ordered
//! collection into another, pairing items via an [`ItemDiff`] policy. The
//! pairing predicate (`items_same`) drives a longest-common-subsequence
//! match; paired items whose `contents_same` check fails become updates, and
//! a removal/insertion of mutually `items_same` items folds into a move so
//! the adapter can recycle the row instead of recreating it.
//!
//! # Operation order
//!
//! The returned script has a fixed application contract:
//!
//! 1. [`RowOp::Remove`] ops first, in descending pre-removal indices. A
//!    [`RowOp::Move`]'s `from` index is also a pre-removal index and its row
//!    is extracted during this phase.
//! 2. [`RowOp::Insert`] and [`RowOp::Move`] ops next, in ascending target
//!    indices into the final collection.
//! 3. [`RowOp::Update`] ops last, with final-collection indices.
//!
//! Identical input collections produce an empty script.

use crate::domain::Listing;

/// Item identity and change predicates driving the diff.
///
/// The names follow the conventional recycler-list contract:
/// `items_same` decides whether two records represent the same row (pairing),
/// `contents_same` decides whether a paired row needs rebinding.
pub trait ItemDiff<T> {
    /// Whether `old` and `new` represent the same row.
    fn items_same(&self, old: &T, new: &T) -> bool;

    /// Whether a row paired by [`items_same`](Self::items_same) still
    /// displays the same content.
    fn contents_same(&self, old: &T, new: &T) -> bool;
}

/// The diff policy for [`Listing`] rows.
///
/// The predicates are intentionally swapped relative to conventional usage:
/// `items_same` is full structural equality and `contents_same` compares
/// only `id`. The
/// practical consequence is that any field change recreates the row
/// (remove + insert) rather than updating it in place; pure reorders still
/// fold into moves because reordered records remain structurally equal.
///
/// A conventional policy would invert the pair (pair by `id`, rebind on any
/// field change); callers wanting that behavior can supply their own
/// [`ItemDiff`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingDiff;

impl ItemDiff<Listing> for ListingDiff {
    fn items_same(&self, old: &Listing, new: &Listing) -> bool {
        old == new
    }

    fn contents_same(&self, old: &Listing, new: &Listing) -> bool {
        old.id == new.id
    }
}

/// One step of a row edit script. See the module docs for the application
/// contract and index semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOp {
    /// Remove the row at `index` (pre-removal index).
    Remove {
        /// Index into the row list before any removal of this script.
        index: usize,
    },

    /// Insert a freshly created row at `index`.
    Insert {
        /// Index into the final row list.
        index: usize,
    },

    /// Recycle the row extracted at `from` by reinserting it at `to`.
    Move {
        /// Pre-removal index the row is extracted from during phase 1.
        from: usize,
        /// Final-collection index the row is reinserted at during phase 2.
        to: usize,
    },

    /// Rebind the row at `index` with the new item's content.
    Update {
        /// Index into the final row list.
        index: usize,
    },
}

impl RowOp {
    fn phase2_target(&self) -> Option<usize> {
        match self {
            Self::Insert { index } => Some(*index),
            Self::Move { to, .. } => Some(*to),
            _ => None,
        }
    }
}

/// Computes the edit script transforming `old` into `new` under `policy`.
pub fn diff<T>(old: &[T], new: &[T], policy: &impl ItemDiff<T>) -> Vec<RowOp> {
    let pairs = lcs_pairs(old, new, policy);

    let mut matched_old = vec![false; old.len()];
    let mut matched_new = vec![false; new.len()];
    for &(i, j) in &pairs {
        matched_old[i] = true;
        matched_new[j] = true;
    }

    let mut removals: Vec<usize> = (0..old.len()).filter(|&i| !matched_old[i]).collect();
    let insertions: Vec<usize> = (0..new.len()).filter(|&j| !matched_new[j]).collect();

    // Fold removal/insertion pairs of mutually same items into moves.
    let mut moves: Vec<(usize, usize)> = Vec::new();
    let mut plain_inserts: Vec<usize> = Vec::new();
    for j in insertions {
        match removals
            .iter()
            .position(|&i| policy.items_same(&old[i], &new[j]))
        {
            Some(slot) => {
                let i = removals.remove(slot);
                moves.push((i, j));
            }
            None => plain_inserts.push(j),
        }
    }

    let mut ops = Vec::new();
    for &i in removals.iter().rev() {
        ops.push(RowOp::Remove { index: i });
    }

    let mut phase2: Vec<RowOp> = plain_inserts
        .iter()
        .map(|&j| RowOp::Insert { index: j })
        .chain(moves.iter().map(|&(i, j)| RowOp::Move { from: i, to: j }))
        .collect();
    phase2.sort_by_key(|op| op.phase2_target());
    ops.extend(phase2);

    for &(i, j) in &pairs {
        if !policy.contents_same(&old[i], &new[j]) {
            ops.push(RowOp::Update { index: j });
        }
    }
    for &(i, j) in &moves {
        if !policy.contents_same(&old[i], &new[j]) {
            ops.push(RowOp::Update { index: j });
        }
    }

    ops
}

/// Longest common subsequence over `items_same`, returned as matched
/// `(old_index, new_index)` pairs in ascending order.
fn lcs_pairs<T>(old: &[T], new: &[T], policy: &impl ItemDiff<T>) -> Vec<(usize, usize)> {
    let n = old.len();
    let m = new.len();
    // table[i][j] = LCS length of old[i..] and new[j..]
    let mut table = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            table[i][j] = if policy.items_same(&old[i], &new[j]) {
                table[i + 1][j + 1] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }

    let mut pairs = Vec::with_capacity(table[0][0]);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if policy.items_same(&old[i], &new[j]) && table[i][j] == table[i + 1][j + 1] + 1 {
            pairs.push((i, j));
            i += 1;
            j += 1;
        } else if table[i + 1][j] >= table[i][j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, kind: &str, price: f64) -> Listing {
        Listing {
            id: id.to_string(),
            img_src: format!("http://mars.test/{id}.jpg"),
            kind: kind.to_string(),
            price,
        }
    }

    /// Conventional recycler-list policy: pair by id, rebind on field change.
    struct IdDiff;

    impl ItemDiff<Listing> for IdDiff {
        fn items_same(&self, old: &Listing, new: &Listing) -> bool {
            old.id == new.id
        }

        fn contents_same(&self, old: &Listing, new: &Listing) -> bool {
            old == new
        }
    }

    #[test]
    fn identical_collections_produce_no_ops() {
        let items = vec![listing("1", "rent", 100.0), listing("2", "buy", 200.0)];
        assert!(diff(&items, &items, &ListingDiff).is_empty());
        assert!(diff(&items, &items, &IdDiff).is_empty());
    }

    #[test]
    fn populating_an_empty_list_inserts_in_order() {
        let new = vec![listing("1", "rent", 100.0), listing("2", "buy", 200.0)];
        assert_eq!(
            diff(&[], &new, &ListingDiff),
            vec![RowOp::Insert { index: 0 }, RowOp::Insert { index: 1 }]
        );
    }

    #[test]
    fn clearing_removes_in_descending_order() {
        let old = vec![listing("1", "rent", 100.0), listing("2", "buy", 200.0)];
        assert_eq!(
            diff(&old, &[], &ListingDiff),
            vec![RowOp::Remove { index: 1 }, RowOp::Remove { index: 0 }]
        );
    }

    #[test]
    fn middle_removal_is_minimal() {
        let a = listing("1", "rent", 100.0);
        let b = listing("2", "buy", 200.0);
        let c = listing("3", "buy", 300.0);
        let old = vec![a.clone(), b, c.clone()];
        let new = vec![a, c];
        assert_eq!(diff(&old, &new, &ListingDiff), vec![RowOp::Remove { index: 1 }]);
    }

    #[test]
    fn reorder_folds_into_a_move() {
        let a = listing("1", "rent", 100.0);
        let b = listing("2", "buy", 200.0);
        let c = listing("3", "buy", 300.0);
        let old = vec![a.clone(), b.clone(), c.clone()];
        let new = vec![c, a, b];
        // Structural equality still pairs reordered records, so the listing
        // policy recycles here too.
        assert_eq!(
            diff(&old, &new, &ListingDiff),
            vec![RowOp::Move { from: 2, to: 0 }]
        );
    }

    #[test]
    fn conventional_policy_updates_changed_rows_in_place() {
        let old = vec![listing("1", "rent", 100.0), listing("2", "buy", 200.0)];
        let new = vec![listing("1", "rent", 100.0), listing("2", "buy", 250.0)];
        assert_eq!(diff(&old, &new, &IdDiff), vec![RowOp::Update { index: 1 }]);
    }

    #[test]
    fn listing_policy_recreates_changed_rows() {
        // Under the inverted predicates a price change fails the pairing
        // test, so the row is torn down and recreated instead of updated.
        let old = vec![listing("1", "rent", 100.0), listing("2", "buy", 200.0)];
        let new = vec![listing("1", "rent", 100.0), listing("2", "buy", 250.0)];
        assert_eq!(
            diff(&old, &new, &ListingDiff),
            vec![RowOp::Remove { index: 1 }, RowOp::Insert { index: 1 }]
        );
    }

    #[test]
    fn listing_predicates_are_the_inverted_pair() {
        let base = listing("1", "rent", 100.0);
        let id_changed = listing("9", "rent", 100.0);
        let price_changed = listing("1", "rent", 150.0);
        let policy = ListingDiff;

        // Only the identifier differs: not the "same item" (full equality
        // fails) and "contents differ" (the content check compares only id).
        assert!(!policy.items_same(&base, &id_changed));
        assert!(!policy.contents_same(&base, &id_changed));

        // Same id, different price: content check passes regardless.
        assert!(!policy.items_same(&base, &price_changed));
        assert!(policy.contents_same(&base, &price_changed));

        assert!(policy.items_same(&base, &base.clone()));
    }

    #[test]
    fn moved_and_changed_row_gets_an_update() {
        let old = vec![listing("1", "rent", 100.0), listing("2", "buy", 200.0)];
        let new = vec![listing("2", "buy", 250.0), listing("1", "rent", 100.0)];
        // The anchor match keeps id "2" paired in place (it moves to the
        // front together with its price change), so id "1" is the record
        // that folds into a move.
        let ops = diff(&old, &new, &IdDiff);
        assert!(ops.contains(&RowOp::Move { from: 0, to: 1 }));
        assert!(ops.contains(&RowOp::Update { index: 0 }));
    }
}
