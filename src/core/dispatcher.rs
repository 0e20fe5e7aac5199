/// Command dispatcher
///
/// Turns one raw input line into a response. Total over every string:
/// unknown input degrades to a suggestion or a generic hint.

use crate::error::Result;
use crate::intelligence::SuggestionEngine;
use crate::registry::{Color, Effect, Line, Registry, Response};
use std::sync::Arc;
use tracing::debug;

/// Resolves input against the registry
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<Registry>,
    suggestions: SuggestionEngine,
}

impl Dispatcher {
    pub fn new(registry: Arc<Registry>) -> Self {
        let suggestions = SuggestionEngine::new(registry.names().to_vec());
        Self {
            registry,
            suggestions,
        }
    }

    /// Dispatcher over the built-in vocabulary
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Arc::new(Registry::builtin()?)))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Dispatch a raw input line
    pub fn dispatch(&self, raw: &str) -> Response {
        let normalized = raw.trim().to_lowercase();

        if let Some(entry) = self.registry.lookup(&normalized) {
            debug!(command = entry.name, input = %normalized, "dispatching");
            return Response {
                lines: entry.lines.clone(),
                effect: entry.effect,
            };
        }

        let suggestion = self.suggestions.suggest(&normalized);
        debug!(input = %normalized, ?suggestion, "command not found");

        Response {
            lines: Self::not_found(raw, suggestion),
            effect: Effect::None,
        }
    }

    // `raw` goes in as plain text: nothing the user types is ever styled
    fn not_found(raw: &str, suggestion: Option<&str>) -> Vec<Line> {
        let mut header = Line::blank();
        header.push(None, "Command not found: ").push(None, raw);

        match suggestion {
            Some(name) => {
                let mut hint = Line::blank();
                hint.push(Some(Color::Yellow), "Did you mean:")
                    .push(None, " ")
                    .push(Some(Color::Cyan), name);

                vec![
                    header,
                    hint,
                    Line::blank(),
                    Line::plain("Type 'help' to see all available commands"),
                    Line::blank(),
                ]
            }
            None => vec![
                header,
                Line::plain("Type 'help' to see available commands"),
                Line::blank(),
                Line::plain("💡 Pro tip: Even Google can't find that command!"),
                Line::blank(),
            ],
        }
    }
}
