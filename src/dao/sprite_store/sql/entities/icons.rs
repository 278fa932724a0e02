use sea_orm::entity::prelude::*;

/// Row of the `icons` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "icons")]
pub struct Model {
    /// Stable identifier.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Display name, reused as the symbol id at assembly time.
    #[sea_orm(column_type = "Text")]
    pub name: String,
    /// Standalone SVG markup.
    #[sea_orm(column_type = "Text")]
    pub svg: String,
    /// Parent sprite.
    pub sprite_id: Uuid,
    /// Uploading user.
    pub user_id: Uuid,
    /// Creation timestamp; drives upload ordering.
    pub created_at: TimeDateTimeWithTimeZone,
}

/// Relations of the `icons` table.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Parent sprite.
    #[sea_orm(
        belongs_to = "super::sprites::Entity",
        from = "Column::SpriteId",
        to = "super::sprites::Column::Id"
    )]
    Sprites,
    /// Uploading user.
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
}

impl Related<super::sprites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sprites.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
