use std::sync::Arc;

use crate::application::{admin::posts::AdminPostService, session::SessionService};
use crate::config::EditorSettings;

#[derive(Clone)]
pub struct AdminState {
    pub posts: Arc<AdminPostService>,
    pub sessions: Arc<SessionService>,
    pub editor: Arc<EditorSettings>,
}
