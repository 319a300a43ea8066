//! Balance adapter for bank transactions.
//!
//! A bank transaction posts a raw `deposit - withdrawal` delta against its
//! single account. The normal side of the account is not consulted.

use rust_decimal::Decimal;

use ledgerkit_shared::types::AccountId;

use super::posting::{BalancePlan, Posting};
use super::snapshot::FlowSnapshot;

/// The fields of a bank transaction the adapter reads.
#[derive(Debug, Clone, Copy)]
pub struct BankTransactionView {
    /// The linked account, if any.
    pub account: Option<AccountId>,
    /// Withdrawal amount.
    pub withdrawal: Decimal,
    /// Deposit amount.
    pub deposit: Decimal,
}

impl BankTransactionView {
    fn net(&self) -> Decimal {
        self.deposit - self.withdrawal
    }
}

/// Captures the pre-mutation snapshot for an existing transaction.
#[must_use]
pub fn capture(view: &BankTransactionView) -> FlowSnapshot {
    FlowSnapshot::new(view.withdrawal, view.deposit)
}

/// Postings after a create or update. Pass [`FlowSnapshot::zero`] for a
/// brand-new transaction.
#[must_use]
pub fn on_saved(view: &BankTransactionView, previous: &FlowSnapshot) -> BalancePlan {
    let net_delta = view.net() - previous.net();
    BalancePlan::from_postings(vec![Posting::raw(view.account, net_delta)])
}

/// Postings reversing the transaction's current contribution before delete.
#[must_use]
pub fn on_deleted(view: &BankTransactionView) -> BalancePlan {
    BalancePlan::from_postings(vec![Posting::raw(view.account, -view.net())])
}
