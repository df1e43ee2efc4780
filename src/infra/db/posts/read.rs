use async_trait::async_trait;

use crate::application::repos::{PostsRepo, RepoError};
use crate::domain::entities::{PostRecord, UserId};
use crate::infra::db::{PostgresRepositories, map_sqlx_error};

use super::types::{POST_COLUMNS, PostRow};

#[async_trait]
impl PostsRepo for PostgresRepositories {
    async fn find_for_owner(
        &self,
        user_id: UserId,
        slug: &str,
    ) -> Result<Option<PostRecord>, RepoError> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE user_id = $1 AND slug = $2");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(user_id.0)
            .bind(slug)
            .fetch_optional(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(PostRecord::from))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostRecord>, RepoError> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE slug = $1");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug)
            .fetch_optional(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(PostRecord::from))
    }
}
