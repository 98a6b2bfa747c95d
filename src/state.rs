use std::sync::Arc;

use crate::gemini::GenerateText;

/// Shared, read-only state for all request handlers.
///
/// `generator` stays `None` for the whole process lifetime when no API
/// key was present at startup; configuration is never retried.
#[derive(Clone)]
pub struct AppState {
    generator: Option<Arc<dyn GenerateText>>,
    key_present: bool,
}

impl AppState {
    pub fn new(generator: Option<Arc<dyn GenerateText>>, key_present: bool) -> Self {
        Self {
            generator,
            key_present,
        }
    }

    pub fn generator(&self) -> Option<&Arc<dyn GenerateText>> {
        self.generator.as_ref()
    }

    /// Whether a client handle was constructed at startup.
    pub fn configured(&self) -> bool {
        self.generator.is_some()
    }

    /// Whether the API key was present at startup. Tracked separately
    /// from `configured` so the status endpoint can report both checks.
    pub const fn ready(&self) -> bool {
        self.key_present
    }
}
