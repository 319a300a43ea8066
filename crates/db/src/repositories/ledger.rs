//! The ledger apply step: posts balance plan legs to account rows.
//!
//! Runs inside the caller's database transaction. The account row is locked
//! `FOR UPDATE` before the read-modify-write, so concurrent postings against
//! the same account serialize on the row lock.

use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseTransaction, DbErr, EntityTrait, QuerySelect, Set};

use ledgerkit_core::documents::{Posting, PostingMode};
use ledgerkit_core::ledger::{NormalSide, apply_normal_balance_delta, apply_raw_delta};

use crate::entities::{accounts, sea_orm_active_enums::AccountSide};

/// Applies every leg of a plan in order. Legs without a resolvable account
/// are skipped; the rest still run.
pub(crate) async fn apply_postings(
    txn: &DatabaseTransaction,
    postings: &[Posting],
) -> Result<(), DbErr> {
    for posting in postings {
        apply_posting(txn, posting).await?;
    }
    Ok(())
}

/// Applies one posting leg to its account row.
///
/// A missing account (unlinked leg, or a row deleted out from under the
/// document) is not an error: the leg is skipped with a trace signal and the
/// caller's transaction continues. Store failures propagate and roll the
/// whole unit of work back.
pub(crate) async fn apply_posting(
    txn: &DatabaseTransaction,
    posting: &Posting,
) -> Result<(), DbErr> {
    let Some(account_id) = posting.account else {
        tracing::trace!("posting has no linked account, leg skipped");
        return Ok(());
    };

    let account = accounts::Entity::find_by_id(account_id.into_inner())
        .lock_exclusive()
        .one(txn)
        .await?;
    let Some(account) = account else {
        tracing::warn!(account_id = %account_id, "target account not found, leg skipped");
        return Ok(());
    };

    let new_balance = next_balance(account.balance, &account.normal_side, posting);
    tracing::debug!(
        account_id = %account_id,
        old_balance = %account.balance,
        new_balance = %new_balance,
        "applying posting"
    );

    let mut active: accounts::ActiveModel = account.into();
    active.balance = Set(new_balance);
    active.updated_at = Set(chrono::Utc::now().into());
    active.update(txn).await?;

    Ok(())
}

/// Pure balance computation for one posting leg.
#[must_use]
pub fn next_balance(balance: Decimal, side: &AccountSide, posting: &Posting) -> Decimal {
    match posting.mode {
        PostingMode::Raw => apply_raw_delta(balance, posting.amount),
        PostingMode::Normal(entry) => {
            apply_normal_balance_delta(balance, NormalSide::from(side.clone()), entry, posting.amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerkit_shared::types::AccountId;
    use rust_decimal_macros::dec;

    #[test]
    fn test_raw_posting_ignores_account_side() {
        let posting = Posting::raw(Some(AccountId::new()), dec!(300));
        assert_eq!(
            next_balance(dec!(0), &AccountSide::Debit, &posting),
            dec!(300)
        );
        assert_eq!(
            next_balance(dec!(0), &AccountSide::Credit, &posting),
            dec!(300)
        );
    }

    #[test]
    fn test_debit_posting_respects_normal_side() {
        let posting = Posting::debit(Some(AccountId::new()), dec!(100));
        assert_eq!(
            next_balance(dec!(50), &AccountSide::Debit, &posting),
            dec!(150)
        );
        assert_eq!(
            next_balance(dec!(50), &AccountSide::Credit, &posting),
            dec!(-50)
        );
    }

    #[test]
    fn test_credit_posting_respects_normal_side() {
        let posting = Posting::credit(Some(AccountId::new()), dec!(100));
        assert_eq!(
            next_balance(dec!(50), &AccountSide::Debit, &posting),
            dec!(-50)
        );
        assert_eq!(
            next_balance(dec!(50), &AccountSide::Credit, &posting),
            dec!(150)
        );
    }

    #[test]
    fn test_negated_posting_reverses() {
        let forward = Posting::debit(Some(AccountId::new()), dec!(75));
        let reverse = Posting::debit(forward.account, dec!(-75));

        let after = next_balance(dec!(20), &AccountSide::Credit, &forward);
        let restored = next_balance(after, &AccountSide::Credit, &reverse);
        assert_eq!(restored, dec!(20));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn posting_strategy() -> impl Strategy<Value = Posting> {
            (-1_000_000i64..1_000_000, 0u8..3).prop_map(|(amount, mode)| {
                let account = Some(AccountId::new());
                let amount = Decimal::new(amount, 2);
                match mode {
                    0 => Posting::raw(account, amount),
                    1 => Posting::debit(account, amount),
                    _ => Posting::credit(account, amount),
                }
            })
        }

        fn side_strategy() -> impl Strategy<Value = AccountSide> {
            prop_oneof![Just(AccountSide::Debit), Just(AccountSide::Credit)]
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            /// Applying a posting and then its negation restores the balance,
            /// for every mode and account side.
            #[test]
            fn prop_negated_posting_roundtrips(
                balance in -1_000_000i64..1_000_000,
                posting in posting_strategy(),
                side in side_strategy(),
            ) {
                let balance = Decimal::new(balance, 2);
                let negated = Posting {
                    amount: -posting.amount,
                    ..posting.clone()
                };
                let after = next_balance(balance, &side, &posting);
                prop_assert_eq!(next_balance(after, &side, &negated), balance);
            }

            /// A debit and a credit of the same amount cancel out on any
            /// account side.
            #[test]
            fn prop_debit_credit_cancel(
                balance in -1_000_000i64..1_000_000,
                amount in 0i64..1_000_000,
                side in side_strategy(),
            ) {
                let balance = Decimal::new(balance, 2);
                let amount = Decimal::new(amount, 2);
                let account = Some(AccountId::new());

                let after_debit = next_balance(balance, &side, &Posting::debit(account, amount));
                let after_both =
                    next_balance(after_debit, &side, &Posting::credit(account, amount));
                prop_assert_eq!(after_both, balance);
            }
        }
    }
}
