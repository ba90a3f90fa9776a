//! Incremental HTML projection of the widget.
//!
//! Produces self-contained markup in the same spirit as the rest of the
//! product's UI surfaces: no external resources, everything derivable from
//! the message store and widget state. The transcript grows append-only;
//! each call to `render` adds the new message nodes and re-stamps the shell
//! around the accumulated transcript.

use tracing::debug;

use lekha_core::types::{ConnectionStatus, Message, Position, Role, Source, WidgetState};

use crate::Render;

/// Builds the embeddable widget markup incrementally.
pub struct HtmlRender {
    position: Position,
    theme: String,
    transcript: String,
    state: WidgetState,
    /// `data-latest` scroll anchor: id of the newest transcript entry.
    latest: Option<String>,
    focus_requested: bool,
}

impl HtmlRender {
    /// Create a renderer anchored at `position` with a theme label.
    ///
    /// The theme is sanitized into a CSS class suffix; anything outside
    /// `[a-zA-Z0-9-]` is dropped.
    pub fn new(position: Position, theme: &str) -> Self {
        let theme: String = theme
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect();
        Self {
            position,
            theme,
            transcript: String::new(),
            state: WidgetState::default(),
            latest: None,
            focus_requested: false,
        }
    }

    /// The accumulated transcript markup (message nodes only).
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// The full embeddable markup: launcher, panel, transcript, composer.
    pub fn page(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "<div class=\"lekha-widget lekha-pos-{} lekha-theme-{}\">\n",
            self.position.css_suffix(),
            self.theme
        ));
        out.push_str(
            "<button class=\"lekha-launcher\" type=\"button\" aria-label=\"Open assistant\">&#128172;</button>\n",
        );

        let hidden = if self.state.is_open { "" } else { " hidden" };
        out.push_str(&format!("<div class=\"lekha-panel\"{}>\n", hidden));

        out.push_str(&format!(
            "<div class=\"lekha-header\"><span class=\"lekha-status lekha-status-{}\"></span>Assistant</div>\n",
            connection_css(self.state.connection)
        ));

        let anchor = self.latest.as_deref().unwrap_or("");
        out.push_str(&format!(
            "<div class=\"lekha-transcript\" data-latest=\"{}\">\n{}</div>\n",
            anchor, self.transcript
        ));

        if self.state.is_loading {
            out.push_str("<div class=\"lekha-typing\">Assistant is typing&#8230;</div>\n");
        }

        let disabled = if self.state.is_loading { " disabled" } else { "" };
        out.push_str(&format!(
            "<form class=\"lekha-composer\"><input class=\"lekha-input\" type=\"text\" \
             placeholder=\"Ask a question\"{disabled}><button class=\"lekha-send\" \
             type=\"submit\"{disabled}>Send</button></form>\n"
        ));

        out.push_str("</div>\n</div>\n");
        out
    }

    /// Whether `focus_input` was requested since the last call to this
    /// method. Reading clears the flag.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    fn push_message(&mut self, message: &Message) {
        let role_class = match message.role {
            Role::User => "lekha-msg-user",
            Role::Assistant => "lekha-msg-assistant",
        };
        self.transcript.push_str(&format!(
            "<div class=\"lekha-msg {}\" data-id=\"{}\">\n<div class=\"lekha-msg-content\">{}</div>\n",
            role_class,
            message.id,
            escape_html(&message.content)
        ));

        if !message.sources.is_empty() {
            self.transcript.push_str("<ul class=\"lekha-sources\">\n");
            for source in &message.sources {
                match source {
                    Source::Web { title, url } => self.transcript.push_str(&format!(
                        "<li class=\"lekha-source-web\"><a href=\"{}\" target=\"_blank\" \
                         rel=\"noopener\">{}</a></li>\n",
                        escape_html(url),
                        escape_html(title)
                    )),
                    Source::Document { label } => self.transcript.push_str(&format!(
                        "<li class=\"lekha-source-doc\">{}</li>\n",
                        escape_html(label)
                    )),
                }
            }
            self.transcript.push_str("</ul>\n");
        }

        self.transcript.push_str("</div>\n");
        self.latest = Some(message.id.to_string());
    }
}

impl Render for HtmlRender {
    fn render(&mut self, delta: &[Message], state: &WidgetState) {
        for message in delta {
            self.push_message(message);
        }
        self.state = *state;
        debug!(appended = delta.len(), is_open = state.is_open, "Rendered");
    }

    fn focus_input(&mut self) {
        self.focus_requested = true;
    }
}

fn connection_css(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Online => "online",
        ConnectionStatus::Offline => "offline",
        ConnectionStatus::Connecting => "connecting",
    }
}

/// Escape text for safe inclusion in HTML body and attribute positions.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// =============================================================================
// Tests
// =============================================================================
