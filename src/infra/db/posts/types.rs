use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::entities::{PostRecord, UserId};

pub(super) const POST_COLUMNS: &str = "slug, user_id, title, markdown, created_at, updated_at";

#[derive(sqlx::FromRow)]
pub(crate) struct PostRow {
    pub(crate) slug: String,
    pub(crate) user_id: Uuid,
    pub(crate) title: String,
    pub(crate) markdown: String,
    pub(crate) created_at: OffsetDateTime,
    pub(crate) updated_at: OffsetDateTime,
}

impl From<PostRow> for PostRecord {
    fn from(row: PostRow) -> Self {
        Self {
            slug: row.slug,
            user_id: UserId(row.user_id),
            title: row.title,
            markdown: row.markdown,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
