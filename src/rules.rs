//! Association rule generation from mined frequent itemsets.

use std::collections::HashMap;

use itertools::Itertools;

use crate::dataset::TransactionStore;
use crate::error::Error;
use crate::itemsets::FrequentItemsets;

/// Antecedent and consequent are disjoint, non-empty, and their union is a
/// frequent itemset. Both hold ascending item ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: Vec<usize>,
    pub consequent: Vec<usize>,
    pub confidence: f64,
}

/// Emits every rule with confidence >= `minconf` derivable from the mined
/// itemsets.
///
/// For each itemset of size > 1, every non-empty proper subset becomes an
/// antecedent and the complement the consequent. The itemset's own support
/// is taken from the mined pair; antecedent supports are looked up among the
/// mined itemsets (every antecedent of a frequent itemset is itself frequent
/// by anti-monotonicity), falling back to a counter scan when the caller
/// passed a partial list.
pub fn generate(
    frequent: &FrequentItemsets,
    store: &TransactionStore,
    minconf: f64,
) -> Result<Vec<Rule>, Error> {
    if !(0.0..=1.0).contains(&minconf) {
        return Err(Error::InvalidThreshold(minconf));
    }

    let support_index: HashMap<&[usize], usize> = frequent.iter().collect();

    let mut rules = Vec::new();
    for (itemset, support) in frequent.iter() {
        if itemset.len() < 2 {
            continue;
        }

        for size in 1..itemset.len() {
            for antecedent in itemset.iter().copied().combinations(size) {
                let consequent: Vec<usize> = itemset
                    .iter()
                    .copied()
                    .filter(|item| !antecedent.contains(item))
                    .collect();

                let antecedent_support = support_index
                    .get(antecedent.as_slice())
                    .copied()
                    .unwrap_or_else(|| store.support(&antecedent));
                if antecedent_support == 0 {
                    return Err(Error::ZeroSupportAntecedent(
                        store.labels_of(&antecedent).join(", "),
                    ));
                }

                let confidence = support as f64 / antecedent_support as f64;
                if confidence >= minconf {
                    rules.push(Rule {
                        antecedent,
                        consequent,
                        confidence,
                    });
                }
            }
        }
    }

    Ok(rules)
}
