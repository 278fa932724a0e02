use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Row of the `sprites` table. Tags live in a JSON text column.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sprites")]
pub struct Model {
    /// Stable identifier.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Display name of the collection.
    #[sea_orm(column_type = "Text")]
    pub name: String,
    /// Free-form description.
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Category label.
    #[sea_orm(column_type = "Text")]
    pub category: String,
    /// Tag vocabulary, serialized as a JSON array.
    #[sea_orm(column_type = "Text")]
    pub tags: TagList,
    /// Download counter.
    pub download_count: i64,
    /// Owning user.
    pub user_id: Uuid,
    /// Creation timestamp.
    pub created_at: TimeDateTimeWithTimeZone,
    /// Last metadata update.
    pub updated_at: TimeDateTimeWithTimeZone,
}

/// JSON-backed tag list column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct TagList(pub Vec<String>);

/// Relations of the `sprites` table.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning user.
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
    /// Icons of this sprite.
    #[sea_orm(has_many = "super::icons::Entity")]
    Icons,
    /// Favourite marks on this sprite.
    #[sea_orm(has_many = "super::favourites::Entity")]
    Favourites,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::icons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Icons.def()
    }
}

impl Related<super::favourites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favourites.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
