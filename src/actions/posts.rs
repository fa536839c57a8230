//! Post composer, likes, comments, and deletion.
//!
//! A post is text, media, or both. Text-only posts go out as JSON; a post
//! with media goes out as multipart with the file under a field named after
//! its media kind (`image`, `video`, `audio`) and a `type` field saying
//! whether it is a feed post or a reel.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use serde::Serialize;

use super::{ActionError, ActionOutcome, ActionResult, decode_entity, required};
use crate::net::api::ApiClient;
use crate::net::endpoints;
use crate::net::http::FormPart;
use crate::net::types::{Comment, Post};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

impl MediaKind {
    /// Multipart field the backend expects the file under.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }

    pub fn accepts(self, content_type: &str) -> bool {
        content_type
            .trim()
            .to_ascii_lowercase()
            .starts_with(&format!("{}/", self.field_name()))
    }

    /// Kind implied by a MIME type, if it is one we upload.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        [Self::Image, Self::Video, Self::Audio]
            .into_iter()
            .find(|kind| kind.accepts(content_type))
    }
}

/// A file picked in the composer, already read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaUpload {
    pub kind: MediaKind,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl MediaUpload {
    fn into_part(self) -> FormPart {
        FormPart::File {
            name: self.kind.field_name().to_owned(),
            file_name: self.file_name,
            content_type: self.content_type,
            bytes: self.bytes,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PostKind {
    #[default]
    Post,
    Reel,
}

impl PostKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Reel => "reel",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub content: String,
    pub kind: PostKind,
    pub media: Option<MediaUpload>,
}

/// Check a draft before anything is sent.
///
/// # Errors
///
/// `Validation` when the draft is empty, when the file does not match the
/// chosen media kind, or when a reel has no video.
pub fn validate_post(draft: &PostDraft) -> Result<(), ActionError> {
    if draft.content.trim().is_empty() && draft.media.is_none() {
        return Err(ActionError::validation("Write something or attach a file."));
    }
    if let Some(media) = &draft.media {
        if media.bytes.is_empty() {
            return Err(ActionError::validation("The selected file is empty."));
        }
        if !media.kind.accepts(&media.content_type) {
            return Err(ActionError::Validation(format!(
                "Please choose a valid {} file.",
                media.kind.field_name()
            )));
        }
    }
    if draft.kind == PostKind::Reel && !matches!(&draft.media, Some(m) if m.kind == MediaKind::Video) {
        return Err(ActionError::validation("Reels need a video."));
    }
    Ok(())
}

#[derive(Serialize)]
struct TextPostPayload<'a> {
    content: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Publish a post or reel.
///
/// # Errors
///
/// `Validation` per [`validate_post`]; `Api` when the upload is rejected.
pub async fn create_post(client: &ApiClient, draft: PostDraft) -> ActionResult<Post> {
    validate_post(&draft)?;
    let content = draft.content.trim().to_owned();
    let kind = draft.kind.as_str();
    let body = match draft.media {
        Some(media) => {
            let parts = vec![
                FormPart::text("content", content),
                FormPart::text("type", kind),
                media.into_part(),
            ];
            client.post_multipart(endpoints::POSTS, parts).await?
        }
        None => {
            client
                .post_json(endpoints::POSTS, &TextPostPayload { content: &content, kind })
                .await?
        }
    };
    let post: Post = decode_entity(body, "post")?;
    leptos::logging::log!("created {kind} {}", post.id);
    Ok(ActionOutcome::new(post).affecting(feed_keys(client)))
}

/// Like a post, or unlike it if already liked. The backend toggles.
///
/// # Errors
///
/// `Api` when the request fails.
pub async fn toggle_like(client: &ApiClient, post_id: &str) -> ActionResult<()> {
    client.post_empty(&endpoints::post_like(post_id)).await?;
    Ok(ActionOutcome::new(()).affecting(feed_keys(client)))
}

#[derive(Serialize)]
struct CommentPayload<'a> {
    content: &'a str,
}

/// # Errors
///
/// `Validation` for a blank comment; `Api` when the request fails.
pub async fn add_comment(client: &ApiClient, post_id: &str, content: &str) -> ActionResult<Comment> {
    let content = required(content, "Comment cannot be empty.")?;
    let key = endpoints::post_comments(post_id);
    let body = client.post_json(key.as_str(), &CommentPayload { content: &content }).await?;
    let comment = decode_entity(body, "comment")?;
    Ok(ActionOutcome::new(comment)
        .affecting([key])
        .affecting(feed_keys(client)))
}

/// # Errors
///
/// `Api` when the request fails, including 403 for someone else's post.
pub async fn delete_post(client: &ApiClient, post_id: &str) -> ActionResult<()> {
    client.delete(&endpoints::post(post_id)).await?;
    Ok(ActionOutcome::new(()).affecting(feed_keys(client)))
}

/// Lists a post can appear in: the first feed page, reels, and the signed-in
/// user's own posts.
fn feed_keys(client: &ApiClient) -> Vec<endpoints::ResourceKey> {
    let mut keys = vec![endpoints::feed(1), endpoints::reels()];
    if let Some(user_id) = client.session().user_id() {
        keys.push(endpoints::user_posts(&user_id));
    }
    keys
}
