use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::EventType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "app_analytics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub event_type: EventType,
    pub user_id: Option<Uuid>,
    pub device_id: Uuid,
    pub path: Option<String>,
    #[sea_orm(column_type = "Json", nullable)]
    pub meta: Option<Json>,
    pub timestamp: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
