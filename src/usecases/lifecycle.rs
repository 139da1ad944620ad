//! Deck lifecycle: transition defaults up front, save and present at the end.

use crate::domain::{DeckError, TransitionDefaults};
use crate::ports::DeckPort;
use std::sync::Arc;
use tracing::warn;

/// Owns the deck for the duration of a run. Construction applies the master
/// transition defaults, before any slide or layout exists; `finish` persists
/// the document and raises the host best-effort.
pub struct DeckSession {
    deck: Arc<dyn DeckPort>,
}

impl DeckSession {
    pub async fn initialize(
        deck: Arc<dyn DeckPort>,
        defaults: &TransitionDefaults,
    ) -> Result<Self, DeckError> {
        deck.apply_transition(defaults).await?;
        Ok(Self { deck })
    }

    pub fn deck(&self) -> Arc<dyn DeckPort> {
        Arc::clone(&self.deck)
    }

    /// Save the deck, then make the host visible. A present failure is logged
    /// and swallowed; a save failure is fatal and nothing is written.
    pub async fn finish(&self) -> Result<(), DeckError> {
        self.deck.save().await?;
        if let Err(e) = self.deck.present().await {
            warn!(error = %e, "could not present deck");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::deck::JsonDeck;

    #[tokio::test]
    async fn initialize_applies_transition_once_before_any_slide() {
        let dir = tempfile::tempdir().unwrap();
        let deck = Arc::new(JsonDeck::create(dir.path().join("deck.json")));
        let session =
            DeckSession::initialize(Arc::clone(&deck) as Arc<dyn DeckPort>, &Default::default())
                .await
                .unwrap();

        let doc = deck.snapshot().await;
        assert!(doc.master_transition.is_some());
        assert!(doc.slides.is_empty());
        drop(session);
    }

    #[tokio::test]
    async fn finish_persists_the_deck_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        let deck = Arc::new(JsonDeck::create(&path));
        let session =
            DeckSession::initialize(Arc::clone(&deck) as Arc<dyn DeckPort>, &Default::default())
                .await
                .unwrap();

        assert!(!path.exists());
        session.finish().await.unwrap();
        assert!(path.exists());
    }
}
