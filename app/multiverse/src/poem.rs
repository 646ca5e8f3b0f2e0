//! Poem source for the Fate universe.
//!
//! The host owns the actual text-generation call; this side owns the
//! contract: resolution never fails observably, and without a credential no
//! request ever leaves the page.

/// Shown whenever the generation service is unavailable, unconfigured, or
/// returns nothing.
pub const FALLBACK_VERSE: &str = "In every universe, the stars align,\n\
To say that you are wholly mine.\n\
Across the void, my soul takes flight,\n\
To find you, my eternal light.";

/// The prompt forwarded to the text-generation service, parameterized only
/// by the confirmed name.
pub fn prompt_for(name: &str) -> String {
    format!(
        "Write a very short, deeply romantic, cosmic-themed poem (max 4 lines) \
         for a girl named {name}. It should be about destiny, timelines, and \
         eternal love. Do not use a title."
    )
}

/// How a [`PoemSource::begin`] call resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoemRequest {
    /// The verse is already available (credential absent — fallback).
    Ready,
    /// The request was handed to the host; a delivery will follow.
    Forwarded,
}

/// State of one poem resolution.
#[derive(Debug, Clone, Default)]
pub struct PoemSource {
    credentialed: bool,
    pending: bool,
    text: Option<String>,
}

impl PoemSource {
    pub fn new(credentialed: bool) -> Self {
        Self {
            credentialed,
            pending: false,
            text: None,
        }
    }

    /// Start resolving the verse.
    ///
    /// Without a credential this short-circuits to the fallback — no
    /// request reaches the host at all.
    pub fn begin(&mut self) -> PoemRequest {
        if !self.credentialed {
            self.text = Some(FALLBACK_VERSE.to_owned());
            self.pending = false;
            PoemRequest::Ready
        } else {
            self.pending = true;
            PoemRequest::Forwarded
        }
    }

    /// Accept the host's response. A blank body (service failure, empty
    /// completion) resolves to the fallback verse. Returns true when a
    /// pending request was resolved by this delivery.
    pub fn deliver(&mut self, body: &str) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;
        self.text = Some(if body.trim().is_empty() {
            FALLBACK_VERSE.to_owned()
        } else {
            body.to_owned()
        });
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// The resolved verse, if resolution finished.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
