//! Balance plan types produced by the document adapters.

use chrono::NaiveDate;
use ledgerkit_shared::types::{AccountId, PartyId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::EntrySide;

/// How a posting's amount is applied to the target account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostingMode {
    /// Signed delta added directly to the balance.
    Raw,
    /// Debit/credit entry interpreted against the account's normal side.
    Normal(EntrySide),
}

/// A single account leg of a balance plan.
///
/// `account` is optional because many documents allow unlinked legs; the
/// apply step skips those without failing the rest of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// Target account, if linked.
    pub account: Option<AccountId>,
    /// Signed amount. For `Normal` postings the sign flips again when the
    /// entry side opposes the account's normal side.
    pub amount: Decimal,
    /// Raw or normal-balance application.
    pub mode: PostingMode,
}

impl Posting {
    /// Raw signed delta against an account.
    #[must_use]
    pub const fn raw(account: Option<AccountId>, amount: Decimal) -> Self {
        Self {
            account,
            amount,
            mode: PostingMode::Raw,
        }
    }

    /// Debit entry against an account.
    #[must_use]
    pub const fn debit(account: Option<AccountId>, amount: Decimal) -> Self {
        Self {
            account,
            amount,
            mode: PostingMode::Normal(EntrySide::Debit),
        }
    }

    /// Credit entry against an account.
    #[must_use]
    pub const fn credit(account: Option<AccountId>, amount: Decimal) -> Self {
        Self {
            account,
            amount,
            mode: PostingMode::Normal(EntrySide::Credit),
        }
    }
}

/// Direction of a money flow for bills, checks, and their synthesized bank
/// transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowDirection {
    /// Money leaves the account.
    Withdrawal,
    /// Money enters the account.
    Deposit,
}

/// A bank transaction to be created alongside a document mutation.
///
/// Bills and checks synthesize one of these on creation; it goes through the
/// regular bank-transaction create path, so its own raw delta is applied to
/// the target account as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankFeedDraft {
    /// Target account for the synthesized transaction.
    pub account: Option<AccountId>,
    /// Transaction date (the source document's date).
    pub date: NaiveDate,
    /// Payee party, if any.
    pub payee: Option<PartyId>,
    /// Human-readable description.
    pub description: String,
    /// Withdrawal amount (zero for deposits).
    pub withdrawal: Decimal,
    /// Deposit amount (zero for withdrawals).
    pub deposit: Decimal,
}

impl BankFeedDraft {
    /// Builds a draft with the amount placed on the side given by
    /// `direction`. Status is assigned by the persistence layer (`pending`).
    #[must_use]
    pub fn from_direction(
        account: Option<AccountId>,
        date: NaiveDate,
        payee: Option<PartyId>,
        description: String,
        direction: FlowDirection,
        amount: Decimal,
    ) -> Self {
        let (withdrawal, deposit) = match direction {
            FlowDirection::Withdrawal => (amount, Decimal::ZERO),
            FlowDirection::Deposit => (Decimal::ZERO, amount),
        };
        Self {
            account,
            date,
            payee,
            description,
            withdrawal,
            deposit,
        }
    }
}

/// The full effect of one document mutation on the ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancePlan {
    /// Account legs to apply, in order.
    pub postings: Vec<Posting>,
    /// Bank transaction to synthesize, if any.
    pub bank_feed: Option<BankFeedDraft>,
}

impl BalancePlan {
    /// A plan with postings only.
    #[must_use]
    pub const fn from_postings(postings: Vec<Posting>) -> Self {
        Self {
            postings,
            bank_feed: None,
        }
    }

    /// True if the plan changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty() && self.bank_feed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_posting_constructors() {
        let account = Some(AccountId::new());
        assert_eq!(Posting::raw(account, dec!(10)).mode, PostingMode::Raw);
        assert_eq!(
            Posting::debit(account, dec!(10)).mode,
            PostingMode::Normal(EntrySide::Debit)
        );
        assert_eq!(
            Posting::credit(account, dec!(10)).mode,
            PostingMode::Normal(EntrySide::Credit)
        );
    }

    #[test]
    fn test_bank_feed_draft_direction() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        let withdrawal = BankFeedDraft::from_direction(
            None,
            date,
            None,
            "Bill B-1".to_string(),
            FlowDirection::Withdrawal,
            dec!(300),
        );
        assert_eq!(withdrawal.withdrawal, dec!(300));
        assert_eq!(withdrawal.deposit, dec!(0));

        let deposit = BankFeedDraft::from_direction(
            None,
            date,
            None,
            "Bill B-2".to_string(),
            FlowDirection::Deposit,
            dec!(120),
        );
        assert_eq!(deposit.withdrawal, dec!(0));
        assert_eq!(deposit.deposit, dec!(120));
    }

    #[test]
    fn test_empty_plan() {
        assert!(BalancePlan::default().is_empty());
        assert!(!BalancePlan::from_postings(vec![Posting::raw(None, dec!(1))]).is_empty());
    }
}
