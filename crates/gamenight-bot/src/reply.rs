//! Presentation-free reply values handed to the chat platform shell.

use serde::Serialize;

/// Accent color for result cards.
pub const ACCENT_COLOR: u32 = 0x206694;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub thumbnail_url: Option<String>,
    pub image_url: Option<String>,
}

impl Card {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            color: ACCENT_COLOR,
            thumbnail_url: None,
            image_url: None,
        }
    }

    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// A reply produced by a command: plain text or a structured card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Reply {
    Text(String),
    Card(Card),
}

impl Reply {
    pub fn text(message: impl Into<String>) -> Self {
        Self::Text(message.into())
    }

    /// Standard message for any failed remote call.
    pub fn transient_failure() -> Self {
        Self::Text("Trouble reaching the Steam API, please try again later.".into())
    }
}
