//! Terminal projection of the widget for the interactive driver.

use lekha_core::types::{ConnectionStatus, Message, Role, Source, WidgetState};
use lekha_render::Render;

/// Prints transcript deltas and connection changes to stdout.
#[derive(Debug, Default)]
pub struct ConsoleRender {
    last: Option<WidgetState>,
}

impl ConsoleRender {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Render for ConsoleRender {
    fn render(&mut self, delta: &[Message], state: &WidgetState) {
        for message in delta {
            match message.role {
                Role::User => println!("you> {}", message.content),
                Role::Assistant => {
                    println!("assistant> {}", message.content);
                    for source in &message.sources {
                        match source {
                            Source::Web { title, url } => {
                                println!("   source: {} <{}>", title, url)
                            }
                            Source::Document { label } => println!("   source: {}", label),
                        }
                    }
                }
            }
        }

        let connection_changed = self
            .last
            .map_or(true, |prev| prev.connection != state.connection);
        if connection_changed {
            println!("[connection: {}]", connection_label(state.connection));
        }
        self.last = Some(*state);
    }
}

/// Human-readable connection label for the status line.
pub fn connection_label(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Online => "online",
        ConnectionStatus::Offline => "offline",
        ConnectionStatus::Connecting => "connecting",
    }
}
