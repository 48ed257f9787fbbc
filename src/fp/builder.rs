use std::collections::HashMap;

use super::tree::FpTree;

/// Builds a tree from weighted item paths, or `None` when no item reaches
/// `minsup`.
///
/// The top-level call passes one path per transaction with weight 1;
/// conditional calls pass a pattern base whose weights carry the occurrence
/// counts of the originating nodes. Items below `minsup` are dropped before
/// insertion: by anti-monotonicity they cannot appear in any frequent
/// itemset of this tree.
///
/// Every path is reordered by (descending weighted count, ascending item)
/// before insertion. Applying the identical ordering on every conditional
/// rebuild keeps the path sharing maximal and the output deterministic.
pub fn build_tree(paths: &[(Vec<usize>, usize)], minsup: usize) -> Option<FpTree> {
    let mut item_counts: HashMap<usize, usize> = HashMap::new();
    for (path, count) in paths {
        for &item in path {
            *item_counts.entry(item).or_insert(0) += count;
        }
    }
    item_counts.retain(|_, count| *count >= minsup);

    if item_counts.is_empty() {
        return None;
    }

    let mut tree = FpTree::new();
    for (path, count) in paths {
        let mut ordered: Vec<usize> = path
            .iter()
            .copied()
            .filter(|item| item_counts.contains_key(item))
            .collect();
        ordered.sort_unstable_by(|a, b| item_counts[b].cmp(&item_counts[a]).then(a.cmp(b)));

        if !ordered.is_empty() {
            tree.insert_path(&ordered, *count);
        }
    }

    Some(tree)
}
