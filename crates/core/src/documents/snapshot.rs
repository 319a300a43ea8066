//! Pre-mutation amount snapshots.
//!
//! Deltas are always computed from an explicit snapshot of the document's
//! persisted amounts, captured before the mutation is written. The snapshot
//! is a plain value passed into the adapter; nothing is ever re-read after
//! the write. For a brand-new document, or when the prior read fails (for
//! instance a concurrent delete), the snapshot defaults to zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of a single-amount document (invoice, payment, expense, bill,
/// check).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountSnapshot {
    /// The previously persisted amount.
    pub amount: Decimal,
}

impl AmountSnapshot {
    /// Snapshot of an existing amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Zero snapshot for new documents or failed prior reads.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
        }
    }

    /// Snapshot from an optional prior amount, defaulting to zero.
    #[must_use]
    pub fn from_prior(prior: Option<Decimal>) -> Self {
        Self {
            amount: prior.unwrap_or(Decimal::ZERO),
        }
    }
}

/// Snapshot of a bank transaction's withdrawal/deposit pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSnapshot {
    /// The previously persisted withdrawal amount.
    pub withdrawal: Decimal,
    /// The previously persisted deposit amount.
    pub deposit: Decimal,
}

impl FlowSnapshot {
    /// Snapshot of existing withdrawal/deposit amounts.
    #[must_use]
    pub const fn new(withdrawal: Decimal, deposit: Decimal) -> Self {
        Self {
            withdrawal,
            deposit,
        }
    }

    /// Zero snapshot for new documents or failed prior reads.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            withdrawal: Decimal::ZERO,
            deposit: Decimal::ZERO,
        }
    }

    /// Net contribution: deposit minus withdrawal.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.deposit - self.withdrawal
    }
}

/// Snapshot of a journal line's debit/credit pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSnapshot {
    /// The previously persisted debit amount.
    pub debit: Decimal,
    /// The previously persisted credit amount.
    pub credit: Decimal,
}

impl SplitSnapshot {
    /// Snapshot of existing debit/credit amounts.
    #[must_use]
    pub const fn new(debit: Decimal, credit: Decimal) -> Self {
        Self { debit, credit }
    }

    /// Zero snapshot for new documents or failed prior reads.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            debit: Decimal::ZERO,
            credit: Decimal::ZERO,
        }
    }

    /// Net contribution: debit minus credit.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.debit - self.credit
    }
}
