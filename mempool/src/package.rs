use crate::{
    errors::{PackageResult, PackageRuleError, RuleResult},
    mempool::model::map::TransactionIdSet,
};
use arbor_consensus_core::{
    mass::transaction_virtual_size,
    tx::{Transaction, TransactionId},
};
use itertools::Itertools;
use std::{collections::HashMap, sync::Arc};

/// Maximum number of transactions allowed in a package.
pub const MAX_PACKAGE_TRANSACTION_COUNT: usize = 50;

/// Maximum aggregate virtual size allowed for a package: 101 kvB.
pub const MAX_PACKAGE_VIRTUAL_SIZE: u64 = 101_000;

/// An ordered collection of transactions evaluated as a unit, typically a
/// fee-paying child together with its unconfirmed parents.
///
/// The ordering is part of the data: parents must appear before any child
/// spending their outputs. This is enforced by [`check_package`], not
/// self-maintained. A package is an ephemeral, caller-owned value built per
/// validation attempt.
pub type Package = Vec<Arc<Transaction>>;

/// The overall outcome of one package validation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageValidationState {
    /// The package is well formed and every member was accepted
    Valid,
    /// The package itself is malformed; no member was evaluated
    PolicyViolation(PackageRuleError),
    /// The package is well formed but at least one member was rejected.
    /// The specific causes are recorded in the per-transaction results.
    MemberFailure,
}

impl PackageValidationState {
    pub fn is_valid(&self) -> bool {
        matches!(self, PackageValidationState::Valid)
    }

    /// Machine-stable reject reason, `None` when valid.
    pub fn reject_reason(&self) -> Option<&'static str> {
        match self {
            PackageValidationState::Valid => None,
            PackageValidationState::PolicyViolation(err) => Some(err.reject_reason()),
            PackageValidationState::MemberFailure => Some("transaction failed"),
        }
    }
}

/// Acceptance data derived for an individually valid package member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxAcceptanceMetrics {
    /// Effective virtual size used for fee-rate calculations
    pub virtual_size: u64,
    /// The fee paid by the transaction itself
    pub fee: u64,
    /// Aggregate fee of all accepted members of the same evaluation, the
    /// numerator of the joint (child-pays-for-parent) package fee rate
    pub package_fee: u64,
}

/// The result of a package acceptance attempt: the overall package state plus
/// one entry per actually-evaluated member, keyed by transaction id.
#[derive(Debug, Clone)]
pub struct PackageAcceptResult {
    pub state: PackageValidationState,
    pub tx_results: HashMap<TransactionId, RuleResult<TxAcceptanceMetrics>>,
}

impl PackageAcceptResult {
    pub(crate) fn rejected(err: PackageRuleError) -> Self {
        Self { state: PackageValidationState::PolicyViolation(err), tx_results: HashMap::new() }
    }
}

/// Checks that a package is structurally sane, with no access to chain state
/// and no side effects: bounded member count, bounded aggregate virtual size,
/// topological ordering (no member spends the output of a later member) and
/// distinct transaction ids. The first failed check wins.
///
/// The aggregate size bound only applies to packages of more than one
/// transaction; for a lone transaction the policy violation is better reported
/// on the individual transaction size.
///
/// Inter-transaction consistency beyond ordering, e.g. connectivity of the
/// dependency graph, is intentionally not verified here; see
/// [`is_child_with_parents`] for the canonical-shape predicate.
pub fn check_package(package: &[Arc<Transaction>]) -> PackageResult<()> {
    if package.len() > MAX_PACKAGE_TRANSACTION_COUNT {
        return Err(PackageRuleError::TooManyTransactions(package.len(), MAX_PACKAGE_TRANSACTION_COUNT));
    }

    if package.len() > 1 {
        let mut package_size = 0u64;
        for transaction in package.iter() {
            package_size += transaction_virtual_size(transaction);
            if package_size > MAX_PACKAGE_VIRTUAL_SIZE {
                return Err(PackageRuleError::PackageTooLarge(package_size, MAX_PACKAGE_VIRTUAL_SIZE));
            }
        }
    }

    // No member may spend the output of a member appearing later in the sequence
    let mut later_ids: TransactionIdSet = package.iter().map(|tx| tx.id()).collect();
    for transaction in package.iter() {
        later_ids.remove(&transaction.id());
        if transaction.inputs.iter().any(|input| later_ids.contains(&input.previous_outpoint.transaction_id)) {
            return Err(PackageRuleError::NotSorted);
        }
    }

    if !package.iter().map(|tx| tx.id()).all_unique() {
        return Err(PackageRuleError::ContainsDuplicates);
    }

    Ok(())
}

/// Returns true iff the package has the canonical "child with its unconfirmed
/// parents" shape: the last member is the sole child and every other member is
/// directly referenced by at least one of the child's inputs. Callers use this
/// to decide whether joint (child-pays-for-parent) fee evaluation applies.
///
/// This is a pure structural predicate, decoupled from [`check_package`]: in
/// particular it does not detect unsorted parents, so reordering the non-last
/// members never affects its value.
pub fn is_child_with_parents(package: &[Arc<Transaction>]) -> bool {
    let Some((child, parents)) = package.split_last() else {
        return false;
    };
    // The child must have at least one parent present in the package
    if parents.is_empty() {
        return false;
    }
    let referenced_ids: TransactionIdSet = child.inputs.iter().map(|input| input.previous_outpoint.transaction_id).collect();
    parents.iter().all(|parent| referenced_ids.contains(&parent.id()))
}
