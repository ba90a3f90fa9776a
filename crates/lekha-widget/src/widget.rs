//! The widget controller: wires session, store, state machine, network
//! client, and renderer, and owns the send-flow discipline.

use std::time::Duration;

use tracing::{info, warn};

use lekha_client::{ChatRequest, ClientError, HttpKnowledgeService, KnowledgeService};
use lekha_core::config::LekhaConfig;
use lekha_core::types::{Message, Source, WidgetState};
use lekha_render::Render;

use crate::error::WidgetError;
use crate::session::Session;
use crate::state::StateController;
use crate::store::MessageStore;

/// Outcome of a send attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// The exchange completed and an assistant reply was appended.
    Delivered,
    /// The exchange completed with a failure notice appended.
    Failed,
    /// Admission control rejected the attempt; nothing changed.
    Rejected,
}

/// One conversational widget instance.
///
/// Built by an explicit factory: one call, one controller. A host embeds at
/// most one widget per page; that precondition lives with the host, not in
/// hidden global state. All methods take `&mut self`, so state transitions
/// are serialized by construction; the loading guard additionally protects
/// against host-level re-entrancy while a chat call is awaited.
pub struct Widget {
    session: Session,
    store: MessageStore,
    controller: StateController,
    service: Box<dyn KnowledgeService>,
    renderer: Box<dyn Render>,
}

impl Widget {
    /// Construct a widget over an arbitrary service and renderer.
    pub fn new(
        config: &LekhaConfig,
        service: Box<dyn KnowledgeService>,
        renderer: Box<dyn Render>,
    ) -> Self {
        let session = Session::resolve(&config.session);
        info!(session_id = %session.id, "Widget constructed");
        Self {
            session,
            store: MessageStore::new(),
            controller: StateController::new(config.api.web_search_enabled),
            service,
            renderer,
        }
    }

    /// Construct a widget wired to the production HTTP client.
    pub fn with_http(
        config: &LekhaConfig,
        renderer: Box<dyn Render>,
    ) -> Result<Self, WidgetError> {
        let service = HttpKnowledgeService::new(
            config.api.base_url.clone(),
            Duration::from_secs(config.api.timeout_secs),
        )?;
        Ok(Self::new(config, Box::new(service), renderer))
    }

    /// Initial health probe. Run once after construction; afterwards the
    /// status refreshes on every completed exchange.
    pub async fn startup(&mut self) {
        let status = self.service.health().await;
        self.controller.set_connection(status);
        self.renderer.render(&[], self.controller.state());
    }

    pub fn state(&self) -> &WidgetState {
        self.controller.state()
    }

    pub fn session_id(&self) -> &str {
        &self.session.id
    }

    /// The transcript in display order.
    pub fn transcript(&self) -> &[Message] {
        self.store.all()
    }

    /// Flip panel visibility; opening also requests input focus.
    pub fn toggle(&mut self) {
        if self.controller.toggle() {
            self.renderer.focus_input();
        }
        self.renderer.render(&[], self.controller.state());
    }

    pub fn open(&mut self) {
        self.controller.open();
        self.renderer.focus_input();
        self.renderer.render(&[], self.controller.state());
    }

    pub fn close(&mut self) {
        self.controller.close();
        self.renderer.render(&[], self.controller.state());
    }

    /// Escape key: closes the panel only when it is open.
    pub fn escape(&mut self) {
        if self.controller.escape() {
            self.renderer.render(&[], self.controller.state());
        }
    }

    /// Preference for subsequent chat requests; stored messages and any
    /// in-flight request are untouched.
    pub fn set_web_search_enabled(&mut self, enabled: bool) {
        self.controller.set_web_search_enabled(enabled);
        self.renderer.render(&[], self.controller.state());
    }

    /// Send a message through the full exchange discipline.
    ///
    /// Admission guard, append + render the user message, one chat call,
    /// append the assistant reply or a single failure notice, follow-up
    /// health probe, release the guard, render. Both settle paths run the
    /// same tail, so the loading flag cannot stay stuck and assistant
    /// messages always land in send order.
    pub async fn send(&mut self, candidate: &str) -> SendOutcome {
        let Some(message) = self.controller.begin_request(candidate) else {
            return SendOutcome::Rejected;
        };

        let user = Message::user(message.clone());
        self.store.append(user.clone());
        self.renderer.render(&[user], self.controller.state());

        let request = ChatRequest {
            message,
            web_search_enabled: self.controller.state().web_search_enabled,
            session_id: self.session.id.clone(),
        };

        let (reply, outcome) = match self.service.chat(request).await {
            Ok(reply) => {
                let sources: Vec<Source> =
                    reply.sources().iter().map(|s| s.to_source()).collect();
                (
                    Message::assistant(reply.response, sources),
                    SendOutcome::Delivered,
                )
            }
            Err(err) => {
                warn!(error = %err, "Chat exchange failed");
                (
                    Message::assistant(failure_notice(&err), Vec::new()),
                    SendOutcome::Failed,
                )
            }
        };

        self.store.append(reply.clone());

        // Connection status converges after every exchange, success or not.
        let status = self.service.health().await;
        self.controller.set_connection(status);

        self.controller.end_request();
        self.renderer.render(&[reply], self.controller.state());
        outcome
    }
}

/// Compose the transcript notice for a failed exchange. The server's
/// `detail` text is used verbatim when the error carries one.
fn failure_notice(err: &ClientError) -> String {
    format!(
        "Sorry, something went wrong: {}. Please try again.",
        err.detail()
    )
}
