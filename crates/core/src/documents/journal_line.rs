//! Balance adapter for journal entry lines.
//!
//! A journal line posts a raw `debit - credit` delta against its single
//! account, without consulting the account's normal side.

use rust_decimal::Decimal;

use ledgerkit_shared::types::AccountId;

use super::posting::{BalancePlan, Posting};
use super::snapshot::SplitSnapshot;

/// The fields of a journal entry line the adapter reads.
#[derive(Debug, Clone, Copy)]
pub struct JournalLineView {
    /// Linked account, if any.
    pub account: Option<AccountId>,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
}

impl JournalLineView {
    fn net(&self) -> Decimal {
        self.debit - self.credit
    }
}

/// Captures the pre-mutation snapshot for an existing line.
#[must_use]
pub fn capture(view: &JournalLineView) -> SplitSnapshot {
    SplitSnapshot::new(view.debit, view.credit)
}

/// Postings after a create or update. Pass [`SplitSnapshot::zero`] for a
/// brand-new line.
#[must_use]
pub fn on_saved(view: &JournalLineView, previous: &SplitSnapshot) -> BalancePlan {
    let net_delta = view.net() - previous.net();
    BalancePlan::from_postings(vec![Posting::raw(view.account, net_delta)])
}

/// Postings reversing the line's current contribution before delete.
#[must_use]
pub fn on_deleted(view: &JournalLineView) -> BalancePlan {
    BalancePlan::from_postings(vec![Posting::raw(view.account, -view.net())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn line(debit: Decimal, credit: Decimal) -> JournalLineView {
        JournalLineView {
            account: Some(AccountId::new()),
            debit,
            credit,
        }
    }

    #[test]
    fn test_create_posts_debit_minus_credit() {
        let plan = on_saved(&line(dec!(120), dec!(20)), &SplitSnapshot::zero());
        assert_eq!(plan.postings[0].amount, dec!(100));
    }

    #[test]
    fn test_update_nets_against_snapshot() {
        let previous = SplitSnapshot::new(dec!(120), dec!(20));
        let plan = on_saved(&line(dec!(70), dec!(0)), &previous);
        // Net went from +100 to +70.
        assert_eq!(plan.postings[0].amount, dec!(-30));
    }

    #[test]
    fn test_delete_reverses_net() {
        let plan = on_deleted(&line(dec!(0), dec!(45)));
        assert_eq!(plan.postings[0].amount, dec!(45));
    }
}
