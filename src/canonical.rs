//! Canonical ordering of mined itemsets and rules.
//!
//! The orderings here are the externally observable contract: itemsets by
//! (size, lexicographic item sequence), rules by (antecedent size,
//! antecedent, consequent size, consequent). Both sorts are idempotent.

use std::fmt;

use crate::dataset::TransactionStore;
use crate::itemsets::FrequentItemsets;
use crate::rules::Rule;

/// A frequent itemset resolved to labels, items in ascending label order.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsetEntry {
    pub items: Vec<String>,
    pub support: usize,
}

/// A rule resolved to labels, both sides in ascending label order.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleEntry {
    pub antecedent: Vec<String>,
    pub consequent: Vec<String>,
    pub confidence: f64,
}

impl fmt::Display for ItemsetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] (support: {})", self.items.join(", "), self.support)
    }
}

impl fmt::Display for RuleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] => [{}] (confidence: {:.2})",
            self.antecedent.join(", "),
            self.consequent.join(", "),
            self.confidence
        )
    }
}

/// Resolves mined itemsets to labels and sorts them canonically.
pub fn canonical_itemsets(
    frequent: &FrequentItemsets,
    store: &TransactionStore,
) -> Vec<ItemsetEntry> {
    let mut entries: Vec<ItemsetEntry> = frequent
        .iter()
        .map(|(itemset, support)| ItemsetEntry {
            // ids ascend in label order, so the label sequence is ordered too
            items: store.labels_of(itemset),
            support,
        })
        .collect();
    sort_itemset_entries(&mut entries);
    entries
}

/// Resolves rules to labels and sorts them canonically.
pub fn canonical_rules(rules: &[Rule], store: &TransactionStore) -> Vec<RuleEntry> {
    let mut entries: Vec<RuleEntry> = rules
        .iter()
        .map(|rule| RuleEntry {
            antecedent: store.labels_of(&rule.antecedent),
            consequent: store.labels_of(&rule.consequent),
            confidence: rule.confidence,
        })
        .collect();
    sort_rule_entries(&mut entries);
    entries
}

pub fn sort_itemset_entries(entries: &mut [ItemsetEntry]) {
    entries.sort_by(|a, b| {
        a.items
            .len()
            .cmp(&b.items.len())
            .then_with(|| a.items.cmp(&b.items))
    });
}

pub fn sort_rule_entries(entries: &mut [RuleEntry]) {
    entries.sort_by(|a, b| {
        a.antecedent
            .len()
            .cmp(&b.antecedent.len())
            .then_with(|| a.antecedent.cmp(&b.antecedent))
            .then_with(|| a.consequent.len().cmp(&b.consequent.len()))
            .then_with(|| a.consequent.cmp(&b.consequent))
    });
}
