//! Account balance calculations.
//!
//! An account has a normal side, debit or credit. A debit entry increases a
//! debit-normal account and decreases a credit-normal one; a credit entry
//! does the opposite. Asset and expense accounts are debit-normal; liability
//! and revenue accounts are credit-normal.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The side on which an account's balance naturally increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalSide {
    /// Debit-normal accounts (assets, expenses).
    Debit,
    /// Credit-normal accounts (liabilities, revenue).
    Credit,
}

impl NormalSide {
    /// Determines the normal side from a free-form account type string.
    /// Unknown values default to debit-normal.
    #[must_use]
    pub fn from_account_type(account_type: &str) -> Self {
        match account_type.to_lowercase().as_str() {
            "credit" | "liability" | "equity" | "revenue" => Self::Credit,
            _ => Self::Debit,
        }
    }
}

/// Whether an entry posts on the debit or the credit side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySide {
    /// Debit entry.
    Debit,
    /// Credit entry.
    Credit,
}

/// Computes the signed balance change for an entry of `amount` posted on
/// `entry` side against an account whose normal side is `normal`.
///
/// The balance increases when the entry side matches the normal side and
/// decreases otherwise.
#[must_use]
pub fn normal_balance_delta(normal: NormalSide, entry: EntrySide, amount: Decimal) -> Decimal {
    let matches = matches!(
        (normal, entry),
        (NormalSide::Debit, EntrySide::Debit) | (NormalSide::Credit, EntrySide::Credit)
    );
    if matches { amount } else { -amount }
}

/// Applies a debit/credit entry to `balance` under the normal-balance rule.
#[must_use]
pub fn apply_normal_balance_delta(
    balance: Decimal,
    normal: NormalSide,
    entry: EntrySide,
    amount: Decimal,
) -> Decimal {
    balance + normal_balance_delta(normal, entry, amount)
}

/// Applies a raw signed delta to `balance`, ignoring the account's normal
/// side. Used by the bank-transaction and journal-line adapters, which
/// compute their own sign from withdrawal/deposit or debit/credit fields.
#[must_use]
pub fn apply_raw_delta(balance: Decimal, delta: Decimal) -> Decimal {
    balance + delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn amount_strategy() -> impl Strategy<Value = Decimal> {
        (0i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
    }

    fn delta_strategy() -> impl Strategy<Value = Decimal> {
        (-1_000_000i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
    }

    fn normal_side_strategy() -> impl Strategy<Value = NormalSide> {
        prop_oneof![Just(NormalSide::Debit), Just(NormalSide::Credit)]
    }

    fn entry_side_strategy() -> impl Strategy<Value = EntrySide> {
        prop_oneof![Just(EntrySide::Debit), Just(EntrySide::Credit)]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// A debit on a debit-normal account increases the balance by the
        /// amount; a credit decreases it by the amount. Symmetric for
        /// credit-normal accounts.
        #[test]
        fn prop_matching_side_increases(
            normal in normal_side_strategy(),
            amount in amount_strategy(),
        ) {
            let matching = match normal {
                NormalSide::Debit => EntrySide::Debit,
                NormalSide::Credit => EntrySide::Credit,
            };
            let opposite = match normal {
                NormalSide::Debit => EntrySide::Credit,
                NormalSide::Credit => EntrySide::Debit,
            };

            prop_assert_eq!(normal_balance_delta(normal, matching, amount), amount);
            prop_assert_eq!(normal_balance_delta(normal, opposite, amount), -amount);
        }

        /// Applying an entry and then the same entry negated returns the
        /// balance to its starting value.
        #[test]
        fn prop_apply_then_reverse_roundtrips(
            balance in delta_strategy(),
            normal in normal_side_strategy(),
            entry in entry_side_strategy(),
            amount in amount_strategy(),
        ) {
            let applied = apply_normal_balance_delta(balance, normal, entry, amount);
            let reversed = apply_normal_balance_delta(applied, normal, entry, -amount);
            prop_assert_eq!(reversed, balance);
        }

        /// The raw variant is plain addition, independent of any side.
        #[test]
        fn prop_raw_delta_is_addition(
            balance in delta_strategy(),
            delta in delta_strategy(),
        ) {
            prop_assert_eq!(apply_raw_delta(balance, delta), balance + delta);
            prop_assert_eq!(apply_raw_delta(apply_raw_delta(balance, delta), -delta), balance);
        }

        /// Splitting an amount across two entries of the same side nets the
        /// same as one combined entry.
        #[test]
        fn prop_delta_is_linear_in_amount(
            normal in normal_side_strategy(),
            entry in entry_side_strategy(),
            a in amount_strategy(),
            b in amount_strategy(),
        ) {
            prop_assert_eq!(
                normal_balance_delta(normal, entry, a) + normal_balance_delta(normal, entry, b),
                normal_balance_delta(normal, entry, a + b)
            );
        }
    }

    #[test]
    fn test_debit_normal_rules() {
        assert_eq!(
            normal_balance_delta(NormalSide::Debit, EntrySide::Debit, dec!(100)),
            dec!(100)
        );
        assert_eq!(
            normal_balance_delta(NormalSide::Debit, EntrySide::Credit, dec!(100)),
            dec!(-100)
        );
    }

    #[test]
    fn test_credit_normal_rules() {
        assert_eq!(
            normal_balance_delta(NormalSide::Credit, EntrySide::Credit, dec!(40)),
            dec!(40)
        );
        assert_eq!(
            normal_balance_delta(NormalSide::Credit, EntrySide::Debit, dec!(40)),
            dec!(-40)
        );
    }

    #[test]
    fn test_apply_normal_balance_delta() {
        let balance = apply_normal_balance_delta(dec!(500), NormalSide::Debit, EntrySide::Debit, dec!(250));
        assert_eq!(balance, dec!(750));

        let balance = apply_normal_balance_delta(balance, NormalSide::Debit, EntrySide::Credit, dec!(50));
        assert_eq!(balance, dec!(700));
    }

    #[test]
    fn test_apply_raw_delta() {
        assert_eq!(apply_raw_delta(dec!(100), dec!(-30)), dec!(70));
        assert_eq!(apply_raw_delta(dec!(0), dec!(500)), dec!(500));
    }

    #[test]
    fn test_normal_side_from_account_type() {
        assert_eq!(NormalSide::from_account_type("debit"), NormalSide::Debit);
        assert_eq!(NormalSide::from_account_type("credit"), NormalSide::Credit);
        assert_eq!(NormalSide::from_account_type("asset"), NormalSide::Debit);
        assert_eq!(NormalSide::from_account_type("Revenue"), NormalSide::Credit);
        // Unknown values fall back to debit-normal
        assert_eq!(NormalSide::from_account_type("other"), NormalSide::Debit);
    }
}
