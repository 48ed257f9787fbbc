/// Accumulates (itemset, support) pairs produced by a miner.
///
/// Itemsets are stored in ascending id order; entries are append-only and
/// never mutated after being recorded.
#[derive(Debug, Clone, Default)]
pub struct FrequentItemsets {
    entries: Vec<(Vec<usize>, usize)>,
}

impl FrequentItemsets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut itemset: Vec<usize>, support: usize) {
        itemset.sort_unstable();
        itemset.dedup();
        self.entries.push((itemset, support));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[usize], usize)> {
        self.entries.iter().map(|(itemset, support)| (itemset.as_slice(), *support))
    }
}
