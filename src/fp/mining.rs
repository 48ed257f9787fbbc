use itertools::Itertools;

use super::builder::build_tree;
use super::tree::FpTree;
use crate::dataset::TransactionStore;
use crate::itemsets::FrequentItemsets;

/// Mines every itemset with support >= `minsup`.
///
/// For `minsup >= 1` the result is the same set of (itemset, support) pairs
/// as [`crate::apriori::mine`].
pub fn mine(store: &TransactionStore, minsup: usize) -> FrequentItemsets {
    let paths: Vec<(Vec<usize>, usize)> = store
        .transactions()
        .iter()
        .map(|t| (t.iter().copied().sorted_unstable().collect(), 1))
        .collect();

    let mut frequent = FrequentItemsets::new();
    if let Some(tree) = build_tree(&paths, minsup) {
        mine_tree(&tree, minsup, &[], &mut frequent);
    }
    frequent
}

/// Recursively mines one tree, emitting `prefix ∪ {item}` for every header
/// item whose chain support meets `minsup`, then descending into that item's
/// conditional tree.
///
/// Header items are visited in ascending id order; this fixes the emission
/// order only, the canonical sorter owns the final ordering. Recursion
/// terminates because each conditional pattern base drops at least the
/// current item, so the item universe strictly shrinks.
fn mine_tree(tree: &FpTree, minsup: usize, prefix: &[usize], out: &mut FrequentItemsets) {
    let items: Vec<usize> = tree.header_table.keys().copied().sorted_unstable().collect();

    for item in items {
        let support = tree.item_support(item);
        if support < minsup {
            continue;
        }

        let mut itemset = prefix.to_vec();
        itemset.push(item);
        itemset.sort_unstable();
        out.push(itemset.clone(), support);

        let pattern_base = tree.prefix_paths(item);
        if let Some(conditional) = build_tree(&pattern_base, minsup) {
            mine_tree(&conditional, minsup, &itemset, out);
        }
    }
}
