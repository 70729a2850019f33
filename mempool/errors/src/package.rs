use thiserror::Error;

/// A package-level, non-contextual policy violation: the package itself is
/// malformed, independently of the validity of any member transaction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackageRuleError {
    #[error("package has {0} transactions, more than the maximum allowed of {1}")]
    TooManyTransactions(usize, usize),

    #[error("package virtual size of {0} is larger than the maximum allowed of {1}")]
    PackageTooLarge(u64, u64),

    #[error("package transactions are not topologically sorted")]
    NotSorted,

    #[error("package contains duplicate transactions")]
    ContainsDuplicates,
}

impl PackageRuleError {
    /// Machine-stable reject reason reported verbatim to the caller.
    pub fn reject_reason(&self) -> &'static str {
        match self {
            PackageRuleError::TooManyTransactions(..) => "package-too-many-transactions",
            PackageRuleError::PackageTooLarge(..) => "package-too-large",
            PackageRuleError::NotSorted => "package-not-sorted",
            PackageRuleError::ContainsDuplicates => "package-contains-duplicates",
        }
    }
}

pub type PackageResult<T> = std::result::Result<T, PackageRuleError>;
