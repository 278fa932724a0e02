use sea_orm::entity::prelude::*;

/// Row of the `favourites` table; unique per `(user_id, sprite_id)`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "favourites")]
pub struct Model {
    /// Stable identifier.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// User placing the mark.
    pub user_id: Uuid,
    /// Sprite being favourited.
    pub sprite_id: Uuid,
    /// Creation timestamp.
    pub created_at: TimeDateTimeWithTimeZone,
}

/// Relations of the `favourites` table.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// User placing the mark.
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
    /// Sprite being favourited.
    #[sea_orm(
        belongs_to = "super::sprites::Entity",
        from = "Column::SpriteId",
        to = "super::sprites::Column::Id"
    )]
    Sprites,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::sprites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sprites.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
