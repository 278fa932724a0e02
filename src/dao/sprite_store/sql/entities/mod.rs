//! ORM entity definitions mirroring the migration baseline schema.

pub mod favourites;
pub mod icons;
pub mod sessions;
pub mod sprites;
pub mod users;
