//! Reconciliation repository.
//!
//! Statements fix a period's balances for one account; transaction lines are
//! cleared against them. Every line mutation recomputes the owning
//! statement's derived state within the same database transaction.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use ledgerkit_core::reconcile::{
    ReconcileLine, StatementBalances, beginning_balance, cleared_balance, derive_status, difference,
};

use crate::entities::{
    reconcile_statements, reconcile_transactions, reconciliations,
    sea_orm_active_enums::{ReconcileTransactionKind, ReconciliationStatus},
};

/// Error types for reconciliation operations.
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    /// Statement not found.
    #[error("Reconcile statement not found: {0}")]
    StatementNotFound(Uuid),

    /// Transaction line not found.
    #[error("Reconcile transaction not found: {0}")]
    TransactionNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a reconcile transaction line.
#[derive(Debug, Clone)]
pub struct CreateReconcileTransactionInput {
    /// Owning statement.
    pub statement_id: Uuid,
    /// Line kind.
    pub kind: ReconcileTransactionKind,
    /// Payment (outgoing) amount.
    pub payment_amount: Decimal,
    /// Deposit (incoming) amount.
    pub deposit_amount: Decimal,
    /// Whether the line is cleared.
    pub is_cleared: bool,
}

/// Partial update of a reconcile transaction line.
#[derive(Debug, Clone, Default)]
pub struct UpdateReconcileTransactionInput {
    /// New kind.
    pub kind: Option<ReconcileTransactionKind>,
    /// New payment amount.
    pub payment_amount: Option<Decimal>,
    /// New deposit amount.
    pub deposit_amount: Option<Decimal>,
    /// New cleared flag.
    pub is_cleared: Option<bool>,
}

/// Derived state of a statement, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementSummary {
    /// Beginning balance minus cleared payments plus cleared deposits.
    pub cleared_balance: Decimal,
    /// Stated ending balance minus the cleared balance.
    pub difference: Decimal,
}

/// Reconciliation repository.
#[derive(Debug, Clone)]
pub struct ReconcileRepository {
    db: DatabaseConnection,
}

impl ReconcileRepository {
    /// Creates a new reconciliation repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a statement for an account.
    ///
    /// The beginning balance is derived from the most recent prior statement
    /// for the same account, ordered by `ending_date` (not creation order),
    /// or zero when none exists. It is fixed at creation and never user-set.
    pub async fn create_statement(
        &self,
        account_id: Uuid,
        ending_balance: Decimal,
        ending_date: NaiveDate,
    ) -> Result<reconcile_statements::Model, ReconcileError> {
        let txn = self.db.begin().await?;

        let prior = reconcile_statements::Entity::find()
            .filter(reconcile_statements::Column::AccountId.eq(account_id))
            .filter(reconcile_statements::Column::EndingDate.lt(ending_date))
            .order_by_desc(reconcile_statements::Column::EndingDate)
            .one(&txn)
            .await?;

        let now = Utc::now().into();
        let statement = reconcile_statements::ActiveModel {
            id: Set(Uuid::new_v4()),
            account_id: Set(account_id),
            beginning_balance: Set(beginning_balance(prior.map(|p| p.ending_balance))),
            ending_balance: Set(ending_balance),
            ending_date: Set(ending_date),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(statement)
    }

    /// Creates the one-to-one reconciliation record for a statement, with
    /// status `pending`.
    pub async fn create_reconciliation(
        &self,
        statement_id: Uuid,
        adjustment_amount: Decimal,
    ) -> Result<reconciliations::Model, ReconcileError> {
        let txn = self.db.begin().await?;

        // Verify the statement exists so the one-to-one link is never dangling.
        reconcile_statements::Entity::find_by_id(statement_id)
            .one(&txn)
            .await?
            .ok_or(ReconcileError::StatementNotFound(statement_id))?;

        let now = Utc::now().into();
        let reconciliation = reconciliations::ActiveModel {
            id: Set(Uuid::new_v4()),
            statement_id: Set(statement_id),
            status: Set(ReconciliationStatus::Pending),
            adjustment_amount: Set(adjustment_amount),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        // Pick up lines that may already exist for the statement.
        recompute_in(&txn, statement_id).await?;

        txn.commit().await?;
        Ok(reconciliation)
    }

    /// Adds a transaction line and recomputes the statement.
    pub async fn add_transaction(
        &self,
        input: CreateReconcileTransactionInput,
    ) -> Result<reconcile_transactions::Model, ReconcileError> {
        let txn = self.db.begin().await?;

        reconcile_statements::Entity::find_by_id(input.statement_id)
            .one(&txn)
            .await?
            .ok_or(ReconcileError::StatementNotFound(input.statement_id))?;

        let now = Utc::now().into();
        let line = reconcile_transactions::ActiveModel {
            id: Set(Uuid::new_v4()),
            statement_id: Set(input.statement_id),
            kind: Set(input.kind),
            payment_amount: Set(input.payment_amount),
            deposit_amount: Set(input.deposit_amount),
            is_cleared: Set(input.is_cleared),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        recompute_in(&txn, line.statement_id).await?;

        txn.commit().await?;
        Ok(line)
    }

    /// Updates a transaction line and recomputes the statement.
    pub async fn update_transaction(
        &self,
        id: Uuid,
        input: UpdateReconcileTransactionInput,
    ) -> Result<reconcile_transactions::Model, ReconcileError> {
        let txn = self.db.begin().await?;

        let line = reconcile_transactions::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(ReconcileError::TransactionNotFound(id))?;
        let statement_id = line.statement_id;

        let mut active: reconcile_transactions::ActiveModel = line.into();
        if let Some(kind) = input.kind {
            active.kind = Set(kind);
        }
        if let Some(payment_amount) = input.payment_amount {
            active.payment_amount = Set(payment_amount);
        }
        if let Some(deposit_amount) = input.deposit_amount {
            active.deposit_amount = Set(deposit_amount);
        }
        if let Some(is_cleared) = input.is_cleared {
            active.is_cleared = Set(is_cleared);
        }
        active.updated_at = Set(Utc::now().into());
        let updated = active.update(&txn).await?;

        recompute_in(&txn, statement_id).await?;

        txn.commit().await?;
        Ok(updated)
    }

    /// Deletes a transaction line and recomputes the statement.
    pub async fn delete_transaction(&self, id: Uuid) -> Result<(), ReconcileError> {
        let txn = self.db.begin().await?;

        let line = reconcile_transactions::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(ReconcileError::TransactionNotFound(id))?;
        let statement_id = line.statement_id;

        line.delete(&txn).await?;
        recompute_in(&txn, statement_id).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Recomputes a statement's derived state and reconciliation status.
    pub async fn recompute(&self, statement_id: Uuid) -> Result<(), ReconcileError> {
        let txn = self.db.begin().await?;
        recompute_in(&txn, statement_id).await?;
        txn.commit().await?;
        Ok(())
    }

    /// Returns the statement's current cleared balance and difference.
    pub async fn statement_summary(
        &self,
        statement_id: Uuid,
    ) -> Result<StatementSummary, ReconcileError> {
        let statement = reconcile_statements::Entity::find_by_id(statement_id)
            .one(&self.db)
            .await?
            .ok_or(ReconcileError::StatementNotFound(statement_id))?;

        let lines = reconcile_transactions::Entity::find()
            .filter(reconcile_transactions::Column::StatementId.eq(statement_id))
            .all(&self.db)
            .await?;
        let lines: Vec<ReconcileLine> = lines.iter().map(to_line).collect();

        let balances = statement_balances(&statement);
        Ok(StatementSummary {
            cleared_balance: cleared_balance(&balances, &lines),
            difference: difference(&balances, &lines),
        })
    }

    /// Returns the reconciliation record for a statement, if created.
    pub async fn find_reconciliation(
        &self,
        statement_id: Uuid,
    ) -> Result<Option<reconciliations::Model>, ReconcileError> {
        let reconciliation = reconciliations::Entity::find()
            .filter(reconciliations::Column::StatementId.eq(statement_id))
            .one(&self.db)
            .await?;
        Ok(reconciliation)
    }
}

/// Recomputes the statement's difference and pushes the derived status onto
/// its reconciliation.
///
/// A statement without a reconciliation is skipped silently; the record is
/// created separately by the caller and picks up the current state then. The
/// statement row itself is re-saved even though none of its own fields
/// changed, so readers relying on its freshness observe the recomputation.
async fn recompute_in(txn: &DatabaseTransaction, statement_id: Uuid) -> Result<(), ReconcileError> {
    let statement = reconcile_statements::Entity::find_by_id(statement_id)
        .lock_exclusive()
        .one(txn)
        .await?
        .ok_or(ReconcileError::StatementNotFound(statement_id))?;

    let lines = reconcile_transactions::Entity::find()
        .filter(reconcile_transactions::Column::StatementId.eq(statement_id))
        .all(txn)
        .await?;
    let lines: Vec<ReconcileLine> = lines.iter().map(to_line).collect();

    let diff = difference(&statement_balances(&statement), &lines);
    let status = ReconciliationStatus::from(derive_status(diff));

    let reconciliation = reconciliations::Entity::find()
        .filter(reconciliations::Column::StatementId.eq(statement_id))
        .one(txn)
        .await?;
    match reconciliation {
        Some(reconciliation) => {
            let mut active: reconciliations::ActiveModel = reconciliation.into();
            active.status = Set(status);
            active.updated_at = Set(Utc::now().into());
            active.update(txn).await?;
        }
        None => {
            tracing::debug!(statement_id = %statement_id, "no reconciliation yet, recompute skipped");
        }
    }

    let mut active: reconcile_statements::ActiveModel = statement.into();
    active.updated_at = Set(Utc::now().into());
    active.update(txn).await?;

    Ok(())
}

/// Maps a stored transaction line to the engine's view of it.
#[must_use]
pub fn to_line(model: &reconcile_transactions::Model) -> ReconcileLine {
    ReconcileLine {
        kind: model.kind.clone().into(),
        payment_amount: model.payment_amount,
        deposit_amount: model.deposit_amount,
        is_cleared: model.is_cleared,
    }
}

fn statement_balances(statement: &reconcile_statements::Model) -> StatementBalances {
    StatementBalances {
        beginning_balance: statement.beginning_balance,
        ending_balance: statement.ending_balance,
    }
}
