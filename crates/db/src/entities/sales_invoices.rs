//! `SeaORM` Entity for the sales_invoices table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "sales_invoices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub date: Date,
    pub amount: Decimal,
    pub customer_id: Option<Uuid>,
    pub status: String,
    pub debit_account_id: Option<Uuid>,
    pub credit_account_id: Option<Uuid>,
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
        from = "Column::CustomerId",
        to = "super::parties::Column::Id"
    )]
    Customer,
    #[sea_orm(has_many = "super::sales_payments::Entity")]
    SalesPayments,
}

impl Related<super::sales_payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SalesPayments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
