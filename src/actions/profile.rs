//! Profile edits and avatar upload.
//!
//! Both actions refresh the display fields cached in the session so the
//! navigation chrome picks up the new name or picture without a reload.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::Serialize;

use super::{ActionError, ActionOutcome, ActionResult, decode_entity, required};
use crate::net::api::ApiClient;
use crate::net::endpoints;
use crate::net::http::FormPart;
use crate::net::types::UserProfile;
use crate::state::session::Session;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfilePayload<'a> {
    first_name: &'a str,
    last_name: &'a str,
    bio: &'a str,
}

/// # Errors
///
/// `Validation` for a blank first name; `Api` when the update is rejected.
pub async fn update_profile(client: &ApiClient, draft: &ProfileDraft) -> ActionResult<UserProfile> {
    let first_name = required(&draft.first_name, "First name is required.")?;
    let payload = ProfilePayload { first_name: &first_name, last_name: draft.last_name.trim(), bio: draft.bio.trim() };
    let body = client.put_json(endpoints::PROFILE_UPDATE, &payload).await?;
    let profile: UserProfile = decode_entity(body, "user")?;
    Ok(profile_changed(client.session(), profile))
}

/// An avatar image read from the file picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// # Errors
///
/// `Validation` for empty or non-image files; `Api` when the upload fails.
pub async fn upload_avatar(client: &ApiClient, upload: AvatarUpload) -> ActionResult<UserProfile> {
    if upload.bytes.is_empty() {
        return Err(ActionError::validation("The selected file is empty."));
    }
    if !upload.content_type.trim().to_ascii_lowercase().starts_with("image/") {
        return Err(ActionError::validation("Please choose an image file."));
    }
    let part = FormPart::File {
        name: "avatar".to_owned(),
        file_name: upload.file_name,
        content_type: upload.content_type,
        bytes: upload.bytes,
    };
    let body = client.post_multipart(endpoints::AVATAR_UPLOAD, vec![part]).await?;
    let profile: UserProfile = decode_entity(body, "user")?;
    Ok(profile_changed(client.session(), profile))
}

fn profile_changed(session: &Session, profile: UserProfile) -> ActionOutcome<UserProfile> {
    let summary = profile.summary();
    session.set_display(Some(summary.display_name().as_str()), summary.avatar.as_deref());
    let id = profile.id.clone();
    ActionOutcome::new(profile).affecting([
        endpoints::current_user(),
        endpoints::user(&id),
        endpoints::user_posts(&id),
    ])
}
