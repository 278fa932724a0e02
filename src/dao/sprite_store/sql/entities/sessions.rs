use sea_orm::entity::prelude::*;

/// Row of the `sessions` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    /// Opaque token handed to the client in a cookie.
    #[sea_orm(primary_key, auto_increment = false)]
    pub token: Uuid,
    /// User the session authenticates.
    pub user_id: Uuid,
    /// Creation timestamp.
    pub created_at: TimeDateTimeWithTimeZone,
    /// Expiry instant.
    pub expires_at: TimeDateTimeWithTimeZone,
}

/// Relations of the `sessions` table.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// User the session authenticates.
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
