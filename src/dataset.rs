use std::collections::{BTreeSet, HashSet};
use std::ops::Range;

/// An immutable collection of transactions over interned item labels.
///
/// Labels are interned in ascending string order, so item ids compare the
/// same way the labels do. All mining runs on ids; labels are mapped back
/// only at the presentation boundary.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    labels: Vec<String>,
    transactions: Vec<HashSet<usize>>,
}

impl TransactionStore {
    pub fn new<I, T, S>(input: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw: Vec<Vec<String>> = input
            .into_iter()
            .map(|t| t.into_iter().map(Into::into).collect())
            .collect();

        let labels: Vec<String> = raw
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        let transactions = raw
            .iter()
            .map(|t| {
                t.iter()
                    // binary search cannot fail: every label was interned above
                    .filter_map(|label| labels.binary_search(label).ok())
                    .collect()
            })
            .collect();

        Self { labels, transactions }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Number of distinct items across all transactions.
    pub fn num_items(&self) -> usize {
        self.labels.len()
    }

    /// The item universe, in ascending label order.
    pub fn items(&self) -> Range<usize> {
        0..self.labels.len()
    }

    pub fn label(&self, item: usize) -> &str {
        &self.labels[item]
    }

    /// Maps an id itemset back to its labels, preserving order.
    pub fn labels_of(&self, itemset: &[usize]) -> Vec<String> {
        itemset.iter().map(|&i| self.labels[i].clone()).collect()
    }

    pub fn transactions(&self) -> &[HashSet<usize>] {
        &self.transactions
    }

    /// Count of transactions containing `itemset` as a subset.
    ///
    /// Linear scan, O(|transactions| * |itemset|). Callers that need the
    /// same itemset's support repeatedly should cache the result.
    pub fn support(&self, itemset: &[usize]) -> usize {
        self.transactions
            .iter()
            .filter(|t| itemset.iter().all(|item| t.contains(item)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interns_labels_in_sorted_order() {
        let store = TransactionStore::new(vec![vec!["milk", "bread"], vec!["eggs", "bread"]]);
        assert_eq!(store.num_items(), 3);
        assert_eq!(store.label(0), "bread");
        assert_eq!(store.label(1), "eggs");
        assert_eq!(store.label(2), "milk");
    }

    #[test]
    fn deduplicates_items_within_a_transaction() {
        let store = TransactionStore::new(vec![vec!["a", "a", "b"]]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.transactions()[0].len(), 2);
        assert_eq!(store.support(&[0]), 1);
    }

    #[test]
    fn support_counts_superset_transactions() {
        let store = TransactionStore::new(vec![
            vec!["a", "b"],
            vec!["a", "b", "c"],
            vec!["a"],
            vec!["b", "c"],
        ]);
        // ids: a=0, b=1, c=2
        assert_eq!(store.support(&[0]), 3);
        assert_eq!(store.support(&[1]), 3);
        assert_eq!(store.support(&[2]), 2);
        assert_eq!(store.support(&[0, 1]), 2);
        assert_eq!(store.support(&[0, 2]), 1);
        assert_eq!(store.support(&[0, 1, 2]), 1);
        assert_eq!(store.support(&[]), 4);
    }

    #[test]
    fn empty_store() {
        let store = TransactionStore::new(Vec::<Vec<String>>::new());
        assert!(store.is_empty());
        assert_eq!(store.num_items(), 0);
        assert_eq!(store.support(&[]), 0);
    }
}
