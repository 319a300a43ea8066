//! Statement balance math and status derivation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of a reconcile transaction line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileLineKind {
    /// Money into the account.
    Deposit,
    /// Cheque or expense out of the account.
    ChequeExpense,
}

/// A reconcile transaction line as the engine sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileLine {
    /// Line kind.
    pub kind: ReconcileLineKind,
    /// Payment (outgoing) amount.
    pub payment_amount: Decimal,
    /// Deposit (incoming) amount.
    pub deposit_amount: Decimal,
    /// Whether the line has been confirmed against the bank statement.
    pub is_cleared: bool,
}

/// The fixed balances of a reconcile statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementBalances {
    /// Beginning balance, carried from the prior statement.
    pub beginning_balance: Decimal,
    /// Stated ending balance for the period.
    pub ending_balance: Decimal,
}

/// Reconciliation status.
///
/// Only `Pending` and `Completed` are ever derived. `Discrepancy` exists in
/// the stored enum but no rule produces it; it is kept so existing rows and
/// API consumers keep their vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReconciliationStatus {
    /// Difference outstanding.
    Pending,
    /// Cleared balance matches the stated ending balance.
    Completed,
    /// Declared but never derived.
    Discrepancy,
}

/// Absolute difference below which a statement counts as reconciled.
#[must_use]
pub fn completion_tolerance() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

/// Beginning balance for a new statement: the prior statement's ending
/// balance, or zero when the account has no earlier statement.
#[must_use]
pub fn beginning_balance(prior_ending: Option<Decimal>) -> Decimal {
    prior_ending.unwrap_or(Decimal::ZERO)
}

/// Cleared balance: beginning balance minus cleared payments plus cleared
/// deposits. Uncleared lines do not count.
#[must_use]
pub fn cleared_balance(balances: &StatementBalances, lines: &[ReconcileLine]) -> Decimal {
    let cleared = lines.iter().filter(|line| line.is_cleared);
    let payments: Decimal = cleared.clone().map(|line| line.payment_amount).sum();
    let deposits: Decimal = cleared.map(|line| line.deposit_amount).sum();
    balances.beginning_balance - payments + deposits
}

/// Difference between the stated ending balance and the cleared balance.
#[must_use]
pub fn difference(balances: &StatementBalances, lines: &[ReconcileLine]) -> Decimal {
    balances.ending_balance - cleared_balance(balances, lines)
}

/// Derives the reconciliation status from the current difference.
#[must_use]
pub fn derive_status(diff: Decimal) -> ReconciliationStatus {
    if diff.abs() < completion_tolerance() {
        ReconciliationStatus::Completed
    } else {
        ReconciliationStatus::Pending
    }
}
