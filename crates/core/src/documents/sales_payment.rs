//! Balance adapter for sales payments.
//!
//! A payment credits the linked invoice's debit (receivable) account,
//! reducing the outstanding receivable. The receivable account is resolved
//! through the invoice by the caller; a payment with no invoice, or an
//! invoice with no receivable account, posts nothing.

use rust_decimal::Decimal;

use ledgerkit_shared::types::AccountId;

use super::posting::{BalancePlan, Posting};
use super::snapshot::AmountSnapshot;

/// The fields of a sales payment the adapter reads.
#[derive(Debug, Clone, Copy)]
pub struct SalesPaymentView {
    /// Payment amount.
    pub amount: Decimal,
    /// The linked invoice's debit (receivable) account, if resolvable.
    pub receivable_account: Option<AccountId>,
}

/// Captures the pre-mutation snapshot for an existing payment.
#[must_use]
pub fn capture(view: &SalesPaymentView) -> AmountSnapshot {
    AmountSnapshot::new(view.amount)
}

/// Postings after a create or update. Pass [`AmountSnapshot::zero`] for a
/// brand-new payment.
#[must_use]
pub fn on_saved(view: &SalesPaymentView, previous: &AmountSnapshot) -> BalancePlan {
    let net_delta = view.amount - previous.amount;
    BalancePlan::from_postings(vec![Posting::credit(view.receivable_account, net_delta)])
}

/// Postings restoring the receivable before delete.
#[must_use]
pub fn on_deleted(view: &SalesPaymentView) -> BalancePlan {
    BalancePlan::from_postings(vec![Posting::credit(view.receivable_account, -view.amount)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::posting::PostingMode;
    use crate::ledger::{EntrySide, NormalSide, apply_normal_balance_delta};
    use rust_decimal_macros::dec;

    #[test]
    fn test_payment_reduces_receivable() {
        let view = SalesPaymentView {
            amount: dec!(100),
            receivable_account: Some(AccountId::new()),
        };
        let plan = on_saved(&view, &AmountSnapshot::zero());
        assert_eq!(plan.postings.len(), 1);
        assert_eq!(plan.postings[0].mode, PostingMode::Normal(EntrySide::Credit));

        // Receivable is debit-normal, so a credit of 100 lowers it by 100.
        let balance =
            apply_normal_balance_delta(dec!(400), NormalSide::Debit, EntrySide::Credit, dec!(100));
        assert_eq!(balance, dec!(300));
    }

    #[test]
    fn test_update_nets_against_snapshot() {
        let view = SalesPaymentView {
            amount: dec!(80),
            receivable_account: Some(AccountId::new()),
        };
        let plan = on_saved(&view, &AmountSnapshot::new(dec!(50)));
        assert_eq!(plan.postings[0].amount, dec!(30));
    }

    #[test]
    fn test_delete_restores_receivable() {
        let view = SalesPaymentView {
            amount: dec!(100),
            receivable_account: Some(AccountId::new()),
        };
        let plan = on_deleted(&view);
        // Credit of -100 on a debit-normal account raises it by 100.
        assert_eq!(plan.postings[0].amount, dec!(-100));
    }

    #[test]
    fn test_unlinked_invoice_posts_nothing_effective() {
        let view = SalesPaymentView {
            amount: dec!(100),
            receivable_account: None,
        };
        let plan = on_saved(&view, &AmountSnapshot::zero());
        assert!(plan.postings[0].account.is_none());
    }
}
