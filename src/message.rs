use serde::{Deserialize, Serialize};

/// Who authored a message. The view only distinguishes these two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Label shown beside the message body.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "You:",
            Role::Assistant => "AI:",
        }
    }
}

/// A message in a conversation. Owned by the parent controller; the view
/// reads it and proposes changes through `MessageIntent`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Color scheme selected by the enclosing application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    pub fn css_class(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

/// A state change the view asks its parent to perform. The view never
/// mutates the message itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageIntent {
    Delete,
    Edit(String),
    Regenerate,
}

/// Text an edit submission should carry: the trimmed draft, or the original
/// content untouched when trimming leaves nothing.
pub fn resolve_edit(draft: &str, original: &str) -> String {
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        original.to_string()
    } else {
        trimmed.to_string()
    }
}
