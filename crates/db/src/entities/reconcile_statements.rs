//! `SeaORM` Entity for the reconcile_statements table.
//!
//! `beginning_balance` is derived at creation from the prior statement for
//! the same account (ordered by `ending_date`) and never user-set.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "reconcile_statements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub account_id: Uuid,
    pub beginning_balance: Decimal,
    pub ending_balance: Decimal,
    pub ending_date: Date,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::AccountId",
        to = "super::accounts::Column::Id"
    )]
    Accounts,
    #[sea_orm(has_many = "super::reconcile_transactions::Entity")]
    ReconcileTransactions,
    #[sea_orm(has_one = "super::reconciliations::Entity")]
    Reconciliations,
}

impl Related<super::reconcile_transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReconcileTransactions.def()
    }
}

impl Related<super::reconciliations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reconciliations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
