//! Balance adapter for expenses.
//!
//! An expense posts a raw positive delta against its linked account.

use rust_decimal::Decimal;

use ledgerkit_shared::types::AccountId;

use super::posting::{BalancePlan, Posting};
use super::snapshot::AmountSnapshot;

/// The fields of an expense the adapter reads.
#[derive(Debug, Clone, Copy)]
pub struct ExpenseView {
    /// Expense amount.
    pub amount: Decimal,
    /// Linked expense account, if any.
    pub account: Option<AccountId>,
}

/// Captures the pre-mutation snapshot for an existing expense.
#[must_use]
pub fn capture(view: &ExpenseView) -> AmountSnapshot {
    AmountSnapshot::new(view.amount)
}

/// Postings after a create or update. Pass [`AmountSnapshot::zero`] for a
/// brand-new expense.
#[must_use]
pub fn on_saved(view: &ExpenseView, previous: &AmountSnapshot) -> BalancePlan {
    let net_delta = view.amount - previous.amount;
    BalancePlan::from_postings(vec![Posting::raw(view.account, net_delta)])
}

/// Postings reversing the expense's current contribution before delete.
#[must_use]
pub fn on_deleted(view: &ExpenseView) -> BalancePlan {
    BalancePlan::from_postings(vec![Posting::raw(view.account, -view.amount)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::posting::PostingMode;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_update_delete_roundtrip() {
        let view = ExpenseView {
            amount: dec!(60),
            account: Some(AccountId::new()),
        };

        let created = on_saved(&view, &AmountSnapshot::zero());
        assert_eq!(created.postings[0].amount, dec!(60));
        assert_eq!(created.postings[0].mode, PostingMode::Raw);

        let raised = ExpenseView {
            amount: dec!(90),
            ..view
        };
        let updated = on_saved(&raised, &capture(&view));
        assert_eq!(updated.postings[0].amount, dec!(30));

        let deleted = on_deleted(&raised);
        assert_eq!(deleted.postings[0].amount, dec!(-90));

        // Net effect of create + update + delete is zero.
        let total: Decimal = [&created, &updated, &deleted]
            .iter()
            .map(|p| p.postings[0].amount)
            .sum();
        assert_eq!(total, dec!(0));
    }
}
