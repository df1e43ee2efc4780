use metrics::counter;
use tracing::info;

use crate::application::repos::UpdatePostParams;
use crate::domain::entities::UserId;

use super::service::AdminPostService;
use super::types::{AdminPostError, UpdatePostCommand};

impl AdminPostService {
    /// Persist new content for the post identified by `command.slug`.
    pub async fn update_post(
        &self,
        actor: UserId,
        command: UpdatePostCommand,
    ) -> Result<(), AdminPostError> {
        let UpdatePostCommand {
            slug,
            title,
            markdown,
        } = command;

        self.writer
            .update_post(UpdatePostParams {
                slug: slug.clone(),
                title,
                markdown,
            })
            .await?;

        counter!("post_editor_post_update_total").increment(1);
        info!(
            target = "post_editor::admin::posts",
            actor = %actor,
            slug = %slug,
            "post updated"
        );

        Ok(())
    }
}
