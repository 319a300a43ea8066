//! `SeaORM` Entity for the accounts table.
//!
//! The `balance` column is mutated exclusively through the ledger apply step.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{AccountSide, AccountStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: Option<String>,
    pub number: Option<String>,
    pub account_group_id: Option<Uuid>,
    pub normal_side: AccountSide,
    pub detail_type: Option<String>,
    pub description: Option<String>,
    pub bank_name: Option<String>,
    pub balance: Decimal,
    pub status: AccountStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account_groups::Entity",
        from = "Column::AccountGroupId",
        to = "super::account_groups::Column::Id"
    )]
    AccountGroups,
}

impl Related<super::account_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccountGroups.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
