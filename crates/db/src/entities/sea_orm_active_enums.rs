//! Postgres enum mappings shared by the entities.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use ledgerkit_core::documents::FlowDirection as CoreFlowDirection;
use ledgerkit_core::ledger::NormalSide;
use ledgerkit_core::reconcile::{ReconcileLineKind, ReconciliationStatus as CoreStatus};

/// The side on which an account's balance naturally increases.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "account_side")]
#[serde(rename_all = "lowercase")]
pub enum AccountSide {
    /// Debit-normal account.
    #[sea_orm(string_value = "debit")]
    Debit,
    /// Credit-normal account.
    #[sea_orm(string_value = "credit")]
    Credit,
}

impl From<AccountSide> for NormalSide {
    fn from(side: AccountSide) -> Self {
        match side {
            AccountSide::Debit => Self::Debit,
            AccountSide::Credit => Self::Credit,
        }
    }
}

/// Account lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "account_status")]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Account accepts postings.
    #[sea_orm(string_value = "active")]
    Active,
    /// Account is retired.
    #[sea_orm(string_value = "inactive")]
    Inactive,
}

/// Kind of party.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "party_kind")]
#[serde(rename_all = "lowercase")]
pub enum PartyKind {
    /// A customer.
    #[sea_orm(string_value = "customer")]
    Customer,
    /// A vendor.
    #[sea_orm(string_value = "vendor")]
    Vendor,
    /// A staff member.
    #[sea_orm(string_value = "staff")]
    Staff,
}

/// Direction of a bill or check money flow.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "flow_direction")]
#[serde(rename_all = "lowercase")]
pub enum FlowDirection {
    /// Money leaves the account.
    #[sea_orm(string_value = "withdrawal")]
    Withdrawal,
    /// Money enters the account.
    #[sea_orm(string_value = "deposit")]
    Deposit,
}

impl From<FlowDirection> for CoreFlowDirection {
    fn from(direction: FlowDirection) -> Self {
        match direction {
            FlowDirection::Withdrawal => Self::Withdrawal,
            FlowDirection::Deposit => Self::Deposit,
        }
    }
}

/// Kind of a reconcile transaction line.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(
    rs_type = "String",
    db_type = "Enum",
    enum_name = "reconcile_transaction_kind"
)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileTransactionKind {
    /// Money into the account.
    #[sea_orm(string_value = "deposit")]
    Deposit,
    /// Cheque or expense out of the account.
    #[sea_orm(string_value = "cheque_expense")]
    ChequeExpense,
}

impl From<ReconcileTransactionKind> for ReconcileLineKind {
    fn from(kind: ReconcileTransactionKind) -> Self {
        match kind {
            ReconcileTransactionKind::Deposit => Self::Deposit,
            ReconcileTransactionKind::ChequeExpense => Self::ChequeExpense,
        }
    }
}

/// Reconciliation status. `discrepancy` is part of the stored vocabulary but
/// no rule ever derives it.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "reconciliation_status")]
#[serde(rename_all = "lowercase")]
pub enum ReconciliationStatus {
    /// Difference outstanding.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Statement reconciled.
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Declared but never derived.
    #[sea_orm(string_value = "discrepancy")]
    Discrepancy,
}

impl From<CoreStatus> for ReconciliationStatus {
    fn from(status: CoreStatus) -> Self {
        match status {
            CoreStatus::Pending => Self::Pending,
            CoreStatus::Completed => Self::Completed,
            CoreStatus::Discrepancy => Self::Discrepancy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_side_maps_to_normal_side() {
        assert_eq!(NormalSide::from(AccountSide::Debit), NormalSide::Debit);
        assert_eq!(NormalSide::from(AccountSide::Credit), NormalSide::Credit);
    }

    #[test]
    fn test_flow_direction_maps_to_core() {
        assert_eq!(
            CoreFlowDirection::from(FlowDirection::Withdrawal),
            CoreFlowDirection::Withdrawal
        );
        assert_eq!(
            CoreFlowDirection::from(FlowDirection::Deposit),
            CoreFlowDirection::Deposit
        );
    }

    #[test]
    fn test_reconcile_kind_maps_to_core() {
        assert_eq!(
            ReconcileLineKind::from(ReconcileTransactionKind::Deposit),
            ReconcileLineKind::Deposit
        );
        assert_eq!(
            ReconcileLineKind::from(ReconcileTransactionKind::ChequeExpense),
            ReconcileLineKind::ChequeExpense
        );
    }

    #[test]
    fn test_status_roundtrip_from_core() {
        assert_eq!(
            ReconciliationStatus::from(CoreStatus::Pending),
            ReconciliationStatus::Pending
        );
        assert_eq!(
            ReconciliationStatus::from(CoreStatus::Completed),
            ReconciliationStatus::Completed
        );
        assert_eq!(
            ReconciliationStatus::from(CoreStatus::Discrepancy),
            ReconciliationStatus::Discrepancy
        );
    }
}
