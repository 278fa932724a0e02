use sea_orm::entity::prelude::*;

/// Row of the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Stable identifier.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Unique login handle.
    #[sea_orm(column_type = "Text")]
    pub username: String,
    /// Unique contact address.
    #[sea_orm(column_type = "Text")]
    pub email: String,
    /// Name shown next to sprites and icons.
    #[sea_orm(column_type = "Text")]
    pub display_name: String,
    /// Argon2 PHC hash.
    #[sea_orm(column_type = "Text")]
    pub password_hash: String,
    /// Account creation timestamp.
    pub created_at: TimeDateTimeWithTimeZone,
}

/// Relations of the `users` table.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Sprites owned by this user.
    #[sea_orm(has_many = "super::sprites::Entity")]
    Sprites,
    /// Icons uploaded by this user.
    #[sea_orm(has_many = "super::icons::Entity")]
    Icons,
    /// Favourite marks placed by this user.
    #[sea_orm(has_many = "super::favourites::Entity")]
    Favourites,
    /// Sessions issued to this user.
    #[sea_orm(has_many = "super::sessions::Entity")]
    Sessions,
}

impl Related<super::sprites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sprites.def()
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

impl Related<super::sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
