//! Bank statement reconciliation.
//!
//! A reconcile statement fixes a period's beginning and ending balance for
//! one account; reconcile transaction lines are marked cleared against it.
//! The engine derives a cleared balance, the difference to the stated ending
//! balance, and from that the reconciliation status.

pub mod statement;

pub use statement::{
    ReconcileLine, ReconcileLineKind, ReconciliationStatus, StatementBalances, beginning_balance,
    cleared_balance, completion_tolerance, derive_status, difference,
};
