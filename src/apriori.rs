//! Levelwise (Apriori-style) frequent itemset miner.
//!
//! Candidates at level k are all k-combinations of the full item universe,
//! filtered by minimum support. Enumeration is in ascending id order, so
//! the output order is reproducible run to run.

use itertools::Itertools;

use crate::dataset::TransactionStore;
use crate::itemsets::FrequentItemsets;

/// Mines every itemset with support >= `minsup`.
///
/// Anti-monotonicity terminates the loop: once a level produces no frequent
/// itemset, no larger itemset can be frequent either.
pub fn mine(store: &TransactionStore, minsup: usize) -> FrequentItemsets {
    let universe: Vec<usize> = store.items().collect();
    let mut frequent = FrequentItemsets::new();

    let mut level: Vec<Vec<usize>> = universe
        .iter()
        .map(|&item| vec![item])
        .filter(|itemset| {
            let support = store.support(itemset);
            if support >= minsup {
                frequent.push(itemset.clone(), support);
                return true;
            }
            false
        })
        .collect();

    let mut k = 2;
    while !level.is_empty() {
        level = universe
            .iter()
            .copied()
            .combinations(k)
            .filter(|itemset| {
                let support = store.support(itemset);
                if support >= minsup {
                    frequent.push(itemset.clone(), support);
                    return true;
                }
                false
            })
            .collect();
        k += 1;
    }

    frequent
}
