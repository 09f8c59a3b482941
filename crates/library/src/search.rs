//! The debounced search box shared by the library and search screens.

use bookshelf_asyncutils::Debouncer;
use bookshelf_config::SearchConfig;
use tokio::sync::watch;

/// Text typed into a search field, plus the query actually in effect.
///
/// Typing is debounced: the query only changes once the text has been left
/// alone for the configured delay. Clearing the field takes effect at once.
/// Must be used inside a tokio runtime.
pub struct SearchBox {
    text: String,
    query: Debouncer<String>,
}

impl SearchBox {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            text: String::new(),
            query: Debouncer::new(String::new(), config.debounce()),
        }
    }

    /// What the user has typed so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The committed query.
    pub fn query(&self) -> String {
        self.query.current()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if self.text.trim().is_empty() {
            self.query.commit_now(String::new());
        } else {
            self.query.push(self.text.clone());
        }
    }

    pub fn clear(&mut self) {
        self.set_text(String::new());
    }

    /// `true` while typed text is waiting out the debounce delay.
    pub fn is_settling(&self) -> bool {
        self.query.is_pending()
    }

    /// Notified each time a query is committed.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.query.subscribe()
    }
}
