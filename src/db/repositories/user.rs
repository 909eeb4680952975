use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::users::{self, Role};

/// User data returned from the repository (without the stored hash).
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub role: Role,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            role: model.role,
        }
    }
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Insert a new user row and return its generated id.
    /// No duplicate-email check is performed.
    pub async fn create(&self, email: &str, password_hash: &str, role: Role) -> Result<i32> {
        let active = users::ActiveModel {
            email: Set(email.to_string()),
            password: Set(password_hash.to_string()),
            role: Set(role),
            ..Default::default()
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert user")?;

        Ok(model.id)
    }

    pub async fn get(&self, id: i32) -> Result<Option<User>> {
        let user = users::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query user by ID")?;

        Ok(user.map(User::from))
    }

    pub async fn exists(&self, id: i32) -> Result<bool> {
        let user = users::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query user by ID")?;

        Ok(user.is_some())
    }

    /// Overwrite email and role. The stored password is never touched here.
    pub async fn update(&self, id: i32, email: &str, role: Role) -> Result<()> {
        let user = users::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query user for update")?
            .ok_or_else(|| anyhow::anyhow!("No user found with id {id}"))?;

        let mut active: users::ActiveModel = user.into();
        active.email = Set(email.to_string());
        active.role = Set(role);
        active
            .update(&self.conn)
            .await
            .context("Failed to update user")?;

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        users::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete user")?;

        Ok(())
    }

    /// Look up a user matching both the email and the exact stored password
    /// value. The login path passes an unsalted SHA-256 hex digest here; rows
    /// created through the API store an Argon2 hash in the same column, so
    /// those credentials never match.
    pub async fn find_by_credentials(
        &self,
        email: &str,
        password_digest: &str,
    ) -> Result<Option<User>> {
        let user = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .filter(users::Column::Password.eq(password_digest))
            .one(&self.conn)
            .await
            .context("Failed to query user by credentials")?;

        Ok(user.map(User::from))
    }
}
