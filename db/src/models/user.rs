use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Represents a user in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Stored role text. Use [`Model::role`] for the typed view.
    pub role: String,
}

/// Platform-wide role of a user.
///
/// Stored as `STUDENT`, `PROF` or `ADMIN`. Parsing is exact: any other stored
/// value has no `Role` and is denied by every access check.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Prof,
    Admin,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a new user with the given role.
    pub async fn create<C>(db: &C, name: &str, role: Role) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        Self::create_with_role_text(db, name, role.as_ref()).await
    }

    /// Inserts a user with raw role text, bypassing the typed `Role`.
    ///
    /// Exists so that records written by other tools (or corrupted ones) can be
    /// reproduced; the analytics layer treats unknown roles as having no access.
    pub async fn create_with_role_text<C>(db: &C, name: &str, role: &str) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        ActiveModel {
            name: Set(name.to_owned()),
            role: Set(role.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Typed role, `None` when the stored text is not a known role.
    pub fn role(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}
