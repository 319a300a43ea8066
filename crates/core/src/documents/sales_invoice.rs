//! Balance adapter for sales invoices.
//!
//! An invoice debits its debit account (the receivable) and credits its
//! credit account (the revenue side) with the same net delta.

use rust_decimal::Decimal;

use ledgerkit_shared::types::AccountId;

use super::posting::{BalancePlan, Posting};
use super::snapshot::AmountSnapshot;

/// The fields of a sales invoice the adapter reads.
#[derive(Debug, Clone, Copy)]
pub struct SalesInvoiceView {
    /// Invoice amount.
    pub amount: Decimal,
    /// Debit-side (receivable) account, if linked.
    pub debit_account: Option<AccountId>,
    /// Credit-side (revenue) account, if linked.
    pub credit_account: Option<AccountId>,
}

/// Captures the pre-mutation snapshot for an existing invoice.
#[must_use]
pub fn capture(view: &SalesInvoiceView) -> AmountSnapshot {
    AmountSnapshot::new(view.amount)
}

/// Postings after a create or update. Pass [`AmountSnapshot::zero`] for a
/// brand-new invoice.
#[must_use]
pub fn on_saved(view: &SalesInvoiceView, previous: &AmountSnapshot) -> BalancePlan {
    let net_delta = view.amount - previous.amount;
    BalancePlan::from_postings(vec![
        Posting::debit(view.debit_account, net_delta),
        Posting::credit(view.credit_account, net_delta),
    ])
}

/// Postings reversing the invoice's current contribution before delete.
#[must_use]
pub fn on_deleted(view: &SalesInvoiceView) -> BalancePlan {
    BalancePlan::from_postings(vec![
        Posting::debit(view.debit_account, -view.amount),
        Posting::credit(view.credit_account, -view.amount),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{EntrySide, NormalSide, apply_normal_balance_delta};
    use crate::documents::posting::PostingMode;
    use rust_decimal_macros::dec;

    fn view(amount: Decimal) -> SalesInvoiceView {
        SalesInvoiceView {
            amount,
            debit_account: Some(AccountId::new()),
            credit_account: Some(AccountId::new()),
        }
    }

    #[test]
    fn test_create_debits_and_credits_full_amount() {
        let plan = on_saved(&view(dec!(250)), &AmountSnapshot::zero());
        assert_eq!(plan.postings.len(), 2);
        assert_eq!(plan.postings[0].mode, PostingMode::Normal(EntrySide::Debit));
        assert_eq!(plan.postings[0].amount, dec!(250));
        assert_eq!(plan.postings[1].mode, PostingMode::Normal(EntrySide::Credit));
        assert_eq!(plan.postings[1].amount, dec!(250));
    }

    #[test]
    fn test_update_nets_against_snapshot() {
        let plan = on_saved(&view(dec!(150)), &AmountSnapshot::new(dec!(100)));
        assert_eq!(plan.postings[0].amount, dec!(50));
        assert_eq!(plan.postings[1].amount, dec!(50));
    }

    #[test]
    fn test_delete_reverses_creation() {
        // Receivable is debit-normal: creation raised it by the amount,
        // deletion must bring it back down.
        let v = view(dec!(90));
        let created = on_saved(&v, &AmountSnapshot::zero());
        let deleted = on_deleted(&v);

        let mut balance = dec!(0);
        for posting in created.postings.iter().chain(&deleted.postings) {
            if posting.account == v.debit_account {
                let PostingMode::Normal(side) = posting.mode else {
                    panic!("invoice postings are normal-balance entries");
                };
                balance =
                    apply_normal_balance_delta(balance, NormalSide::Debit, side, posting.amount);
            }
        }
        assert_eq!(balance, dec!(0));
    }

    #[test]
    fn test_unlinked_legs_pass_through() {
        let v = SalesInvoiceView {
            amount: dec!(10),
            debit_account: None,
            credit_account: Some(AccountId::new()),
        };
        let plan = on_saved(&v, &AmountSnapshot::zero());
        assert!(plan.postings[0].account.is_none());
        assert!(plan.postings[1].account.is_some());
    }
}
