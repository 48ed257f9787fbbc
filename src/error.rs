use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Minimum confidence must lie in [0, 1].
    #[error("minimum confidence must lie in [0, 1], got {0}")]
    InvalidThreshold(f64),

    /// An antecedent with zero support was encountered during rule
    /// generation. Unreachable when the itemsets were mined with
    /// minsup >= 1; reported instead of dividing by zero otherwise.
    #[error("antecedent {{{0}}} has zero support; itemsets must be mined with a minimum support of at least 1")]
    ZeroSupportAntecedent(String),
}
