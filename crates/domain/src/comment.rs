//! Comment — a sub-record embedded in a [`Place`](crate::place::Place).
//!
//! Comments have no collection of their own: they are created, changed and
//! removed through their owning place, and stored only when that place is
//! saved.

use serde::{Deserialize, Serialize};

use crate::error::CastError;
use crate::fields::Fields;
use crate::id::CommentId;
use crate::time::{Timestamp, now};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub body: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Comment {
    /// New comment with a fresh identifier.
    #[must_use]
    pub fn new(input: CommentInput) -> Self {
        let created_at = now();
        Self {
            id: CommentId::new(),
            title: input.title,
            body: input.body,
            created_at,
            updated_at: created_at,
        }
    }

    /// Overwrite `title` and `body` with the supplied values.
    ///
    /// Fields not supplied keep their current value.
    pub fn overwrite(&mut self, input: CommentInput) {
        if input.is_empty() {
            return;
        }
        if let Some(title) = input.title {
            self.title = Some(title);
        }
        if let Some(body) = input.body {
            self.body = Some(body);
        }
        self.updated_at = now();
    }
}

/// Fields supplied for creating or updating a [`Comment`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentInput {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl CommentInput {
    /// Cast a `comment` payload.
    ///
    /// # Errors
    ///
    /// Returns [`CastError`] when `title` or `body` is not a string.
    pub fn from_fields(fields: &Fields) -> Result<Self, CastError> {
        Ok(Self {
            title: fields.text("title")?,
            body: fields.text("body")?,
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_assign_fresh_id_to_each_comment() {
        let a = Comment::new(CommentInput::default().title("a"));
        let b = Comment::new(CommentInput::default().title("a"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn should_overwrite_supplied_fields_only() {
        let mut comment = Comment::new(CommentInput::default().title("Nice").body("Great view"));
        comment.overwrite(CommentInput::default().body("Crowded"));
        assert_eq!(comment.title.as_deref(), Some("Nice"));
        assert_eq!(comment.body.as_deref(), Some("Crowded"));
    }

    #[test]
    fn should_not_touch_timestamp_when_nothing_supplied() {
        let mut comment = Comment::new(CommentInput::default().title("Nice"));
        let before = comment.clone();
        comment.overwrite(CommentInput::default());
        assert_eq!(comment, before);
    }

    #[test]
    fn should_omit_absent_fields_in_json() {
        let comment = Comment::new(CommentInput::default().title("Only title"));
        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["title"], "Only title");
        assert!(json.get("body").is_none());
        assert!(json.get("createdAt").is_some());
    }
}
