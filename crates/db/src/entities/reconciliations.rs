//! `SeaORM` Entity for the reconciliations table.
//!
//! One-to-one with a reconcile statement; `status` is recomputed from the
//! statement's difference on every reconcile-transaction mutation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::ReconciliationStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "reconciliations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub statement_id: Uuid,
    pub status: ReconciliationStatus,
    pub adjustment_amount: Decimal,
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
