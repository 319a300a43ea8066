//! `SeaORM` Entity for the sales_payments table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "sales_payments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub date: Date,
    pub amount: Decimal,
    pub payment_mode: String,
    pub invoice_id: Option<Uuid>,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sales_invoices::Entity",
        from = "Column::InvoiceId",
        to = "super::sales_invoices::Column::Id"
    )]
    SalesInvoices,
}

impl Related<super::sales_invoices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SalesInvoices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
