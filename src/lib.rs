//! Frequent itemset mining and association rule generation.
//!
//! Two miners produce the same set of frequent itemsets from a
//! [`TransactionStore`]: a levelwise Apriori-style miner ([`apriori`]) and a
//! compressed-tree FP-Growth-style miner ([`fp`]). Rule generation
//! ([`rules`]) and canonical ordering ([`canonical`]) are shared downstream
//! stages.
//!
//! ```
//! use freqmine::{apriori, canonical, rules, TransactionStore};
//!
//! let store = TransactionStore::new(vec![
//!     vec!["bread", "milk"],
//!     vec!["bread", "milk", "eggs"],
//!     vec!["bread"],
//!     vec!["milk", "eggs"],
//! ]);
//! let frequent = apriori::mine(&store, 2);
//! let rules = rules::generate(&frequent, &store, 0.5).unwrap();
//! for entry in canonical::canonical_rules(&rules, &store) {
//!     println!("{entry}");
//! }
//! ```

pub mod apriori;
pub mod canonical;
pub mod dataset;
pub mod error;
pub mod fp;
pub mod itemsets;
pub mod rules;

pub use canonical::{ItemsetEntry, RuleEntry};
pub use dataset::TransactionStore;
pub use error::Error;
pub use itemsets::FrequentItemsets;
pub use rules::Rule;
