use async_trait::async_trait;
use time::OffsetDateTime;

use crate::application::repos::{PostsWriteRepo, RepoError, UpdatePostParams};
use crate::infra::db::{PostgresRepositories, map_sqlx_error};

#[async_trait]
impl PostsWriteRepo for PostgresRepositories {
    async fn update_post(&self, params: UpdatePostParams) -> Result<(), RepoError> {
        let UpdatePostParams {
            slug,
            title,
            markdown,
        } = params;

        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $2,
                markdown = $3,
                updated_at = $4
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .bind(title)
        .bind(markdown)
        .bind(OffsetDateTime::now_utc())
        .execute(self.pool())
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
