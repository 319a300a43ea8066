//! Document balance adapters.
//!
//! Each financial document variant has an adapter that turns a mutation into
//! a [`BalancePlan`]: the set of account postings implied by the change, plus
//! (for bills and checks on creation) a synthesized bank-feed transaction.
//!
//! Every adapter follows the same three-phase contract:
//! 1. **Capture** - the caller snapshots the document's persisted amount
//!    fields before writing the mutation (zero for a brand-new document, and
//!    zero whenever the prior read fails).
//! 2. **Apply** - `on_saved(view, &snapshot, ..)` produces postings for the
//!    net delta between the new amounts and the snapshot.
//! 3. **Reverse** - `on_deleted(view)` produces the negation of the
//!    document's current contribution on the same legs.
//!
//! A `None` account on any leg means that leg is skipped by the apply step;
//! the remaining legs still post.

pub mod bank_transaction;
pub mod bill;
pub mod check;
pub mod expense;
pub mod journal_line;
pub mod posting;
pub mod sales_invoice;
pub mod sales_payment;
pub mod snapshot;
pub mod unlinked;

pub use posting::{BalancePlan, BankFeedDraft, FlowDirection, Posting, PostingMode};
pub use snapshot::{AmountSnapshot, FlowSnapshot, SplitSnapshot};
