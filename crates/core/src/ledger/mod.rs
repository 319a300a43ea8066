//! Account balance rules.
//!
//! Every financial document in the system ultimately lands on an account
//! balance through one of two operations:
//! - `apply_normal_balance_delta` - debit/credit entries interpreted against
//!   the account's normal side
//! - `apply_raw_delta` - a signed delta added directly to the balance
//!
//! The two operations are deliberately distinct: bank transactions and
//! journal-entry lines post raw deltas, while invoice/bill style documents
//! post debit/credit entries.

pub mod balance;

pub use balance::{
    EntrySide, NormalSide, apply_normal_balance_delta, apply_raw_delta, normal_balance_delta,
};
