use serde::{Deserialize, Serialize};

/// Only the most recent exchanges are kept around for display.
const MAX_EXCHANGES: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    pub user: String,
    pub reply: String,
    pub intent: String,
}

/// Conversation history owned by the presentation layer; the turn
/// handler itself is stateless across turns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub history: Vec<Exchange>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, user: &str, reply: &str, intent: &str) {
        self.history.push(Exchange {
            user: user.to_string(),
            reply: reply.to_string(),
            intent: intent.to_string(),
        });
        if self.history.len() > MAX_EXCHANGES {
            let excess = self.history.len() - MAX_EXCHANGES;
            self.history.drain(..excess);
        }
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
