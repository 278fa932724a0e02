//! Baseline schema: users, sprites, icons, favourites, sessions.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Username).text().not_null())
                    .col(ColumnDef::new(Users::Email).text().not_null())
                    .col(ColumnDef::new(Users::DisplayName).text().not_null())
                    .col(ColumnDef::new(Users::PasswordHash).text().not_null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_username")
                    .table(Users::Table)
                    .col(Users::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sprites::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sprites::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Sprites::Name).text().not_null())
                    .col(ColumnDef::new(Sprites::Description).text().not_null())
                    .col(ColumnDef::new(Sprites::Category).text().not_null())
                    .col(ColumnDef::new(Sprites::Tags).text().not_null())
                    .col(
                        ColumnDef::new(Sprites::DownloadCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Sprites::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Sprites::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sprites::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sprites_user")
                            .from(Sprites::Table, Sprites::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sprites_category")
                    .table(Sprites::Table)
                    .col(Sprites::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sprites_created_at")
                    .table(Sprites::Table)
                    .col(Sprites::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Icons::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Icons::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Icons::Name).text().not_null())
                    .col(ColumnDef::new(Icons::Svg).text().not_null())
                    .col(ColumnDef::new(Icons::SpriteId).uuid().not_null())
                    .col(ColumnDef::new(Icons::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Icons::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_icons_sprite")
                            .from(Icons::Table, Icons::SpriteId)
                            .to(Sprites::Table, Sprites::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_icons_user")
                            .from(Icons::Table, Icons::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_icons_sprite_id")
                    .table(Icons::Table)
                    .col(Icons::SpriteId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Favourites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Favourites::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Favourites::UserId).uuid().not_null())
                    .col(ColumnDef::new(Favourites::SpriteId).uuid().not_null())
                    .col(
                        ColumnDef::new(Favourites::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favourites_user")
                            .from(Favourites::Table, Favourites::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favourites_sprite")
                            .from(Favourites::Table, Favourites::SpriteId)
                            .to(Sprites::Table, Sprites::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_favourites_user_sprite")
                    .table(Favourites::Table)
                    .col(Favourites::UserId)
                    .col(Favourites::SpriteId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sessions::Token)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sessions::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Sessions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sessions::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sessions_user")
                            .from(Sessions::Table, Sessions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sessions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Favourites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Icons::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sprites::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    DisplayName,
    PasswordHash,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Sprites {
    Table,
    Id,
    Name,
    Description,
    Category,
    Tags,
    DownloadCount,
    UserId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Icons {
    Table,
    Id,
    Name,
    Svg,
    SpriteId,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Favourites {
    Table,
    Id,
    UserId,
    SpriteId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Sessions {
    Table,
    Token,
    UserId,
    CreatedAt,
    ExpiresAt,
}
