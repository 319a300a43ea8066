//! Shared domain types.

pub mod id;

pub use id::{
    AccountGroupId, AccountId, BankTransactionId, BillId, CheckId, DocumentId, ExpenseId,
    JournalEntryId, JournalEntryLineId, PartyId, ReconcileStatementId, ReconcileTransactionId,
    ReconciliationId, SalesInvoiceId, SalesPaymentId,
};
