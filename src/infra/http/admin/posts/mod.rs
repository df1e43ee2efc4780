mod errors;
mod forms;
mod handlers;

pub(super) use handlers::{admin_post_edit, admin_post_preview, admin_post_update};
