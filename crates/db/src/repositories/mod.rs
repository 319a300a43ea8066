//! Repository abstractions for data access.
//!
//! Every document mutation and its ledger side effects run inside one
//! database transaction: either all of {document write, balance updates,
//! synthesized bank transaction} commit, or none do.

pub mod account;
pub mod documents;
pub mod ledger;
pub mod reconcile;

pub use account::{AccountError, AccountRepository, CreateAccountInput};
pub use documents::{DocumentError, DocumentRepository};
pub use reconcile::{ReconcileError, ReconcileRepository};
