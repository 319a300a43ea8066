//! `SeaORM` Entity for the checks table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::FlowDirection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "checks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub bank_account_id: Option<Uuid>,
    pub check_number: String,
    pub pay_to_account_id: Option<Uuid>,
    pub amount: Decimal,
    pub memo: Option<String>,
    pub date: Date,
    pub vendor_id: Option<Uuid>,
    pub direction: FlowDirection,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::BankAccountId",
        to = "super::accounts::Column::Id"
    )]
    BankAccount,
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::PayToAccountId",
        to = "super::accounts::Column::Id"
    )]
    PayToAccount,
    #[sea_orm(
        belongs_to = "super::parties::Entity",
        from = "Column::VendorId",
        to = "super::parties::Column::Id"
    )]
    Vendor,
}

impl ActiveModelBehavior for ActiveModel {}
