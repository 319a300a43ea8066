//! `SeaORM` Entity for the bills table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::FlowDirection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "bills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub bill_date: Date,
    pub reference: String,
    pub memo: Option<String>,
    pub due_date: Date,
    pub debit_account_id: Option<Uuid>,
    pub credit_account_id: Option<Uuid>,
    pub amount: Decimal,
    pub direction: FlowDirection,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::DebitAccountId",
        to = "super::accounts::Column::Id"
    )]
    DebitAccount,
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::CreditAccountId",
        to = "super::accounts::Column::Id"
    )]
    CreditAccount,
    #[sea_orm(
        belongs_to = "super::parties::Entity",
        from = "Column::VendorId",
        to = "super::parties::Column::Id"
    )]
    Vendor,
}

impl ActiveModelBehavior for ActiveModel {}
