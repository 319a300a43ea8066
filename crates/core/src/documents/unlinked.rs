//! No-op adapters for document kinds without account linkage.
//!
//! These document kinds exist as resource records but carry no account
//! references, so their capture/apply/reverse phases intentionally do
//! nothing: unimplemented by design, not a bug. Linking them to accounts
//! would be a schema change, not a ledger change.

use super::posting::BalancePlan;

/// Document kinds with no ledger contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlinkedDocument {
    /// Purchase-side invoice (no debit/credit account fields).
    PurchaseInvoice,
    /// Purchase payment (no bank account field).
    PurchasePayment,
    /// Purchase refund.
    PurchaseRefund,
    /// Sales refund (no bank account field).
    SalesRefund,
    /// Inventory receiving voucher.
    InventoryReceivingVoucher,
    /// Stock export.
    StockExport,
    /// Loss adjustment.
    LossAdjustment,
    /// Asset depreciation (assets are not linked to accounts).
    Depreciation,
    /// Manufacturing order.
    ManufacturingOrder,
}

/// Always an empty plan.
#[must_use]
pub fn on_saved(_kind: UnlinkedDocument) -> BalancePlan {
    BalancePlan::default()
}

/// Always an empty plan.
#[must_use]
pub fn on_deleted(_kind: UnlinkedDocument) -> BalancePlan {
    BalancePlan::default()
}
