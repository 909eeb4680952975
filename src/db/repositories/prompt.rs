use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use crate::entities::prompts;

pub struct PromptRepository {
    conn: DatabaseConnection,
}

impl PromptRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Persist an original/refined pair for a user, returning the new row id.
    pub async fn create(&self, user_id: i32, content: &str, refined: &str) -> Result<i32> {
        let active = prompts::ActiveModel {
            content: Set(content.to_string()),
            refined: Set(refined.to_string()),
            user_id: Set(user_id),
            ..Default::default()
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert prompt")?;

        Ok(model.id)
    }

    pub async fn count_for_user(&self, user_id: i32) -> Result<u64> {
        let count = prompts::Entity::find()
            .filter(prompts::Column::UserId.eq(user_id))
            .count(&self.conn)
            .await
            .context("Failed to count prompts for user")?;

        Ok(count)
    }
}
