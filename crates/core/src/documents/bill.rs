//! Balance adapter for vendor bills.
//!
//! A bill debits its debit account (expense/asset side) and credits its
//! credit account (payable side) with the same net delta. On creation it
//! also synthesizes one bank transaction against the credit account, as a
//! withdrawal or deposit depending on the bill's direction.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use ledgerkit_shared::types::{AccountId, PartyId};

use super::posting::{BalancePlan, BankFeedDraft, FlowDirection, Posting};
use super::snapshot::AmountSnapshot;

/// The fields of a bill the adapter reads.
#[derive(Debug, Clone)]
pub struct BillView {
    /// Bill amount.
    pub amount: Decimal,
    /// Debit-side account, if linked.
    pub debit_account: Option<AccountId>,
    /// Credit-side (payable) account, if linked.
    pub credit_account: Option<AccountId>,
    /// Whether the bill represents a withdrawal or a deposit.
    pub direction: FlowDirection,
    /// Bill date, used for the synthesized bank transaction.
    pub bill_date: NaiveDate,
    /// Vendor, used as the synthesized transaction's payee.
    pub vendor: Option<PartyId>,
    /// Bill reference number.
    pub reference: String,
    /// Optional memo.
    pub memo: Option<String>,
}

impl BillView {
    fn feed_description(&self) -> String {
        self.memo
            .clone()
            .unwrap_or_else(|| format!("Bill {}", self.reference))
    }
}

/// Captures the pre-mutation snapshot for an existing bill.
#[must_use]
pub fn capture(view: &BillView) -> AmountSnapshot {
    AmountSnapshot::new(view.amount)
}

/// Postings after a create or update. The synthesized bank transaction is
/// only attached when `created` is true.
#[must_use]
pub fn on_saved(view: &BillView, previous: &AmountSnapshot, created: bool) -> BalancePlan {
    let net_delta = view.amount - previous.amount;
    let mut plan = BalancePlan::from_postings(vec![
        Posting::debit(view.debit_account, net_delta),
        Posting::credit(view.credit_account, net_delta),
    ]);

    if created {
        plan.bank_feed = Some(BankFeedDraft::from_direction(
            view.credit_account,
            view.bill_date,
            view.vendor,
            view.feed_description(),
            view.direction,
            view.amount,
        ));
    }

    plan
}

/// Postings reversing the bill's current contribution before delete.
#[must_use]
pub fn on_deleted(view: &BillView) -> BalancePlan {
    BalancePlan::from_postings(vec![
        Posting::debit(view.debit_account, -view.amount),
        Posting::credit(view.credit_account, -view.amount),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bill(amount: Decimal, direction: FlowDirection) -> BillView {
        BillView {
            amount,
            debit_account: Some(AccountId::new()),
            credit_account: Some(AccountId::new()),
            direction,
            bill_date: NaiveDate::from_ymd_opt(2026, 4, 12).unwrap(),
            vendor: Some(PartyId::new()),
            reference: "B-1042".to_string(),
            memo: None,
        }
    }

    #[test]
    fn test_create_synthesizes_withdrawal_feed() {
        let view = bill(dec!(300), FlowDirection::Withdrawal);
        let plan = on_saved(&view, &AmountSnapshot::zero(), true);

        assert_eq!(plan.postings.len(), 2);
        assert_eq!(plan.postings[0].amount, dec!(300));
        assert_eq!(plan.postings[1].amount, dec!(300));

        let feed = plan.bank_feed.expect("creation synthesizes a bank feed");
        assert_eq!(feed.account, view.credit_account);
        assert_eq!(feed.withdrawal, dec!(300));
        assert_eq!(feed.deposit, dec!(0));
        assert_eq!(feed.payee, view.vendor);
        assert_eq!(feed.description, "Bill B-1042");
    }

    #[test]
    fn test_create_synthesizes_deposit_feed() {
        let view = bill(dec!(120), FlowDirection::Deposit);
        let plan = on_saved(&view, &AmountSnapshot::zero(), true);

        let feed = plan.bank_feed.unwrap();
        assert_eq!(feed.withdrawal, dec!(0));
        assert_eq!(feed.deposit, dec!(120));
    }

    #[test]
    fn test_memo_overrides_feed_description() {
        let mut view = bill(dec!(50), FlowDirection::Withdrawal);
        view.memo = Some("April hosting".to_string());
        let plan = on_saved(&view, &AmountSnapshot::zero(), true);
        assert_eq!(plan.bank_feed.unwrap().description, "April hosting");
    }

    #[test]
    fn test_update_nets_delta_and_skips_feed() {
        // Amount 100 -> 150 must net to +50, not +150 or +250.
        let view = bill(dec!(150), FlowDirection::Withdrawal);
        let plan = on_saved(&view, &AmountSnapshot::new(dec!(100)), false);

        assert_eq!(plan.postings[0].amount, dec!(50));
        assert_eq!(plan.postings[1].amount, dec!(50));
        assert!(plan.bank_feed.is_none());
    }

    #[test]
    fn test_delete_negates_current_amount() {
        let view = bill(dec!(150), FlowDirection::Withdrawal);
        let plan = on_deleted(&view);

        assert_eq!(plan.postings[0].amount, dec!(-150));
        assert_eq!(plan.postings[1].amount, dec!(-150));
        assert!(plan.bank_feed.is_none());
    }
}
