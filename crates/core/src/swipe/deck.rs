//! Ordered opportunity deck and its forward-only cursor.

use serde::Serialize;

use crate::opportunities::Opportunity;

/// Position in the deck. `0 <= current_index <= length`; only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckCursor {
    pub current_index: usize,
    pub length: usize,
}

impl DeckCursor {
    pub fn new(length: usize) -> Self {
        Self {
            current_index: 0,
            length,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.length
    }

    pub fn remaining(&self) -> usize {
        self.length.saturating_sub(self.current_index)
    }

    /// Moves forward by one. Returns false (and stays put) when exhausted.
    pub fn advance(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        self.current_index += 1;
        true
    }
}

/// The session's opportunities in fixed order plus the cursor into them.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    opportunities: Vec<Opportunity>,
    cursor: DeckCursor,
    /// Bumped on every refresh so late responses can tell decks apart.
    generation: u64,
}

impl Deck {
    pub fn new(opportunities: Vec<Opportunity>) -> Self {
        let cursor = DeckCursor::new(opportunities.len());
        Self {
            opportunities,
            cursor,
            generation: 0,
        }
    }

    pub fn current(&self) -> Option<&Opportunity> {
        self.opportunities.get(self.cursor.current_index)
    }

    /// Card after the current one, for the stacked preview.
    pub fn next(&self) -> Option<&Opportunity> {
        self.opportunities.get(self.cursor.current_index + 1)
    }

    pub fn cursor(&self) -> DeckCursor {
        self.cursor
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_exhausted()
    }

    pub fn advance(&mut self) -> bool {
        self.cursor.advance()
    }

    /// True when `opportunity_id` is the current card of deck `generation`
    /// at `index`.
    pub fn is_current(&self, generation: u64, index: usize, opportunity_id: &str) -> bool {
        self.generation == generation
            && self.cursor.current_index == index
            && self.current().map(|o| o.id == opportunity_id).unwrap_or(false)
    }

    /// Replaces the deck with a fresh listing and starts from the top.
    pub fn replace(&mut self, opportunities: Vec<Opportunity>) {
        self.cursor = DeckCursor::new(opportunities.len());
        self.opportunities = opportunities;
        self.generation += 1;
    }

    pub fn len(&self) -> usize {
        self.opportunities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opportunities.is_empty()
    }
}
