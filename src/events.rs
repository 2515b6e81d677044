//! Typed widget event publication
//!
//! Replaces the string-named `ready`/`afterRender`/`afterError` callback hooks
//! with enumerated event variants and explicit observer registration.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Rendering context delivered with `AfterRender` and `AfterError`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RenderContext {
    pub controller: Option<String>,
    pub form_name: String,
}

/// Events emitted by the widget over its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    /// The widget finished its initial load.
    Ready,
    /// A view finished rendering.
    AfterRender(RenderContext),
    /// A view surfaced an error to the user.
    AfterError(RenderContext, Value),
}

impl WidgetEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Ready => EventKind::Ready,
            Self::AfterRender(_) => EventKind::AfterRender,
            Self::AfterError(_, _) => EventKind::AfterError,
        }
    }
}

/// Discriminant used for subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Ready,
    AfterRender,
    AfterError,
}

type Handler = Box<dyn Fn(&WidgetEvent) + Send + Sync>;

/// Observer registry for widget events.
///
/// Handlers for a kind run in registration order.
#[derive(Default)]
pub struct EventBus {
    handlers: HashMap<EventKind, Vec<Handler>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one event kind.
    pub fn on<F>(&mut self, kind: EventKind, handler: F)
    where
        F: Fn(&WidgetEvent) + Send + Sync + 'static,
    {
        self.handlers.entry(kind).or_default().push(Box::new(handler));
    }

    /// Deliver an event to its subscribers, returning how many ran.
    pub fn emit(&self, event: &WidgetEvent) -> usize {
        let Some(handlers) = self.handlers.get(&event.kind()) else {
            tracing::debug!("No handlers registered for {:?}", event.kind());
            return 0;
        };
        for handler in handlers {
            handler(event);
        }
        handlers.len()
    }
}
