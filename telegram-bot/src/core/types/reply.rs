//! Outgoing reply model: text, how Telegram should parse it, and optional pager buttons.

/// Parse mode for the reply body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Plain,
    Html,
}

/// One inline keyboard button: label and callback data sent back when pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerButton {
    pub label: String,
    pub data: String,
}

impl PagerButton {
    pub fn new(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: data.into(),
        }
    }
}

/// Inline keyboard rows attached to a paginated reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagerControls {
    pub rows: Vec<Vec<PagerButton>>,
}

impl PagerControls {
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.is_empty())
    }
}

/// Reply body handed to [`crate::Bot::send_reply`] / [`crate::Bot::edit_reply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub format: TextFormat,
    pub controls: Option<PagerControls>,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Plain,
            controls: None,
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Html,
            controls: None,
        }
    }

    /// Attaches pager controls; empty controls are dropped so no blank keyboard is sent.
    pub fn with_controls(mut self, controls: PagerControls) -> Self {
        self.controls = if controls.is_empty() { None } else { Some(controls) };
        self
    }
}
