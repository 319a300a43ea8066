//! Account repository.
//!
//! Accounts are created administratively and mutated exclusively through the
//! ledger apply step; this repository exposes creation plus read access to
//! the running balance.

use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use uuid::Uuid;

use crate::entities::{
    accounts,
    sea_orm_active_enums::{AccountSide, AccountStatus},
};

/// Error types for account operations.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// Account not found.
    #[error("Account not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating an account.
#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    /// Account name.
    pub name: Option<String>,
    /// Account number.
    pub number: Option<String>,
    /// Parent grouping, if any.
    pub account_group_id: Option<Uuid>,
    /// The side on which the balance naturally increases.
    pub normal_side: AccountSide,
    /// Free-form classification (income, expense, ...).
    pub detail_type: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Bank name for bank accounts.
    pub bank_name: Option<String>,
    /// Opening balance.
    pub balance: Decimal,
}

/// Account repository.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DatabaseConnection,
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create_account(
        &self,
        input: CreateAccountInput,
    ) -> Result<accounts::Model, AccountError> {
        let now = chrono::Utc::now().into();
        let account = accounts::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            number: Set(input.number),
            account_group_id: Set(input.account_group_id),
            normal_side: Set(input.normal_side),
            detail_type: Set(input.detail_type),
            description: Set(input.description),
            bank_name: Set(input.bank_name),
            balance: Set(input.balance),
            status: Set(AccountStatus::Active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let account = account.insert(&self.db).await?;
        Ok(account)
    }

    /// Finds an account by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn find_account_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<accounts::Model>, AccountError> {
        let account = accounts::Entity::find_by_id(id).one(&self.db).await?;
        Ok(account)
    }

    /// Returns the account's current running balance.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the account does not exist.
    pub async fn get_balance(&self, id: Uuid) -> Result<Decimal, AccountError> {
        let account = accounts::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AccountError::NotFound(id))?;

        Ok(account.balance)
    }

    /// Deactivates an account.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the account does not exist.
    pub async fn deactivate_account(&self, id: Uuid) -> Result<(), AccountError> {
        let account = accounts::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AccountError::NotFound(id))?;

        let mut active: accounts::ActiveModel = account.into();
        active.status = Set(AccountStatus::Inactive);
        active.updated_at = Set(chrono::Utc::now().into());
        active.update(&self.db).await?;

        Ok(())
    }
}
