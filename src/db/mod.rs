use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

use crate::entities::users::Role;
pub use repositories::user::User;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn prompt_repo(&self) -> repositories::prompt::PromptRepository {
        repositories::prompt::PromptRepository::new(self.conn.clone())
    }

    pub async fn create_user(&self, email: &str, password_hash: &str, role: Role) -> Result<i32> {
        self.user_repo().create(email, password_hash, role).await
    }

    pub async fn get_user(&self, id: i32) -> Result<Option<User>> {
        self.user_repo().get(id).await
    }

    pub async fn user_exists(&self, id: i32) -> Result<bool> {
        self.user_repo().exists(id).await
    }

    pub async fn update_user(&self, id: i32, email: &str, role: Role) -> Result<()> {
        self.user_repo().update(id, email, role).await
    }

    pub async fn delete_user(&self, id: i32) -> Result<()> {
        self.user_repo().delete(id).await
    }

    pub async fn find_user_by_credentials(
        &self,
        email: &str,
        password_digest: &str,
    ) -> Result<Option<User>> {
        self.user_repo()
            .find_by_credentials(email, password_digest)
            .await
    }

    pub async fn record_prompt(&self, user_id: i32, content: &str, refined: &str) -> Result<i32> {
        self.prompt_repo().create(user_id, content, refined).await
    }

    pub async fn prompt_count_for_user(&self, user_id: i32) -> Result<u64> {
        self.prompt_repo().count_for_user(user_id).await
    }
}
