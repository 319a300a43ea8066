//! Balance adapter for checks.
//!
//! A check posts two raw legs: it decreases the bank account and increases
//! the pay-to account by the same net delta. On creation it synthesizes one
//! bank transaction against the bank account, as a withdrawal or deposit
//! depending on the check's direction.
//!
//! Deletion reverses both legs, restoring the bank and the pay-to account
//! to their pre-creation balances.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use ledgerkit_shared::types::{AccountId, PartyId};

use super::posting::{BalancePlan, BankFeedDraft, FlowDirection, Posting};
use super::snapshot::AmountSnapshot;

/// The fields of a check the adapter reads.
#[derive(Debug, Clone)]
pub struct CheckView {
    /// Check amount.
    pub amount: Decimal,
    /// The bank account the check draws on, if linked.
    pub bank_account: Option<AccountId>,
    /// The account the check pays into, if linked.
    pub pay_to: Option<AccountId>,
    /// Whether the check represents a withdrawal or a deposit.
    pub direction: FlowDirection,
    /// Check date, used for the synthesized bank transaction.
    pub date: NaiveDate,
    /// Vendor, used as the synthesized transaction's payee.
    pub vendor: Option<PartyId>,
    /// Check number.
    pub check_number: String,
    /// Optional memo.
    pub memo: Option<String>,
}

impl CheckView {
    fn feed_description(&self) -> String {
        self.memo
            .clone()
            .unwrap_or_else(|| format!("Check #{}", self.check_number))
    }
}

/// Captures the pre-mutation snapshot for an existing check.
#[must_use]
pub fn capture(view: &CheckView) -> AmountSnapshot {
    AmountSnapshot::new(view.amount)
}

/// Postings after a create or update. The synthesized bank transaction is
/// only attached when `created` is true.
#[must_use]
pub fn on_saved(view: &CheckView, previous: &AmountSnapshot, created: bool) -> BalancePlan {
    let net_delta = view.amount - previous.amount;
    let mut plan = BalancePlan::from_postings(vec![
        Posting::raw(view.bank_account, -net_delta),
        Posting::raw(view.pay_to, net_delta),
    ]);

    if created {
        plan.bank_feed = Some(BankFeedDraft::from_direction(
            view.bank_account,
            view.date,
            view.vendor,
            view.feed_description(),
            view.direction,
            view.amount,
        ));
    }

    plan
}

/// Postings reversing both legs of the check before delete.
#[must_use]
pub fn on_deleted(view: &CheckView) -> BalancePlan {
    BalancePlan::from_postings(vec![
        Posting::raw(view.bank_account, view.amount),
        Posting::raw(view.pay_to, -view.amount),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn check(amount: Decimal) -> CheckView {
        CheckView {
            amount,
            bank_account: Some(AccountId::new()),
            pay_to: Some(AccountId::new()),
            direction: FlowDirection::Withdrawal,
            date: NaiveDate::from_ymd_opt(2026, 5, 2).unwrap(),
            vendor: None,
            check_number: "1007".to_string(),
            memo: None,
        }
    }

    #[test]
    fn test_create_moves_money_between_legs() {
        let view = check(dec!(200));
        let plan = on_saved(&view, &AmountSnapshot::zero(), true);

        assert_eq!(plan.postings[0].account, view.bank_account);
        assert_eq!(plan.postings[0].amount, dec!(-200));
        assert_eq!(plan.postings[1].account, view.pay_to);
        assert_eq!(plan.postings[1].amount, dec!(200));

        let feed = plan.bank_feed.unwrap();
        assert_eq!(feed.account, view.bank_account);
        assert_eq!(feed.withdrawal, dec!(200));
        assert_eq!(feed.description, "Check #1007");
    }

    #[test]
    fn test_update_nets_delta() {
        let view = check(dec!(250));
        let plan = on_saved(&view, &AmountSnapshot::new(dec!(200)), false);

        assert_eq!(plan.postings[0].amount, dec!(-50));
        assert_eq!(plan.postings[1].amount, dec!(50));
        assert!(plan.bank_feed.is_none());
    }

    #[test]
    fn test_delete_restores_both_accounts() {
        let view = check(dec!(200));
        let created = on_saved(&view, &AmountSnapshot::zero(), false);
        let deleted = on_deleted(&view);

        let bank_total: Decimal = created
            .postings
            .iter()
            .chain(&deleted.postings)
            .filter(|p| p.account == view.bank_account)
            .map(|p| p.amount)
            .sum();
        let pay_to_total: Decimal = created
            .postings
            .iter()
            .chain(&deleted.postings)
            .filter(|p| p.account == view.pay_to)
            .map(|p| p.amount)
            .sum();

        assert_eq!(bank_total, dec!(0));
        assert_eq!(pay_to_total, dec!(0));
    }
}
