//! `SeaORM` Entity for the reconcile_transactions table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ReconcileTransactionKind;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "reconcile_transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub statement_id: Uuid,
    pub kind: ReconcileTransactionKind,
    pub payment_amount: Decimal,
    pub deposit_amount: Decimal,
    pub is_cleared: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reconcile_statements::Entity",
        from = "Column::StatementId",
        to = "super::reconcile_statements::Column::Id"
    )]
    ReconcileStatements,
}

impl Related<super::reconcile_statements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReconcileStatements.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
