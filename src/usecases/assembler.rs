//! Slide assembly: append a slide, style and fill its placeholder, animate.

use crate::domain::{DeckError, EntryAnimation, TextStyle};
use crate::ports::{DeckPort, LayoutRef, SlideRef};
use std::sync::Arc;
use tracing::debug;

/// Assembles one slide per call against a prepared layout. The style and
/// animation are fixed at construction and applied identically to every slide.
pub struct SlideAssembler {
    deck: Arc<dyn DeckPort>,
    style: TextStyle,
    animation: EntryAnimation,
}

impl SlideAssembler {
    pub fn new(deck: Arc<dyn DeckPort>) -> Self {
        Self {
            deck,
            style: TextStyle::default(),
            animation: EntryAnimation::default(),
        }
    }

    /// Append a slide using `layout`, set `text` verbatim on the layout's
    /// placeholder, apply styling and the fade-in by-character animation.
    pub async fn assemble(&self, layout: LayoutRef, text: &str) -> Result<SlideRef, DeckError> {
        let preview: String = text.chars().take(10).collect();
        debug!(text = %preview, "adding animated text slide");

        let slide = self.deck.add_slide(layout).await?;
        self.deck
            .set_slide_text(slide, layout.placeholder, text, &self.style)
            .await?;
        self.deck
            .animate_slide_text(slide, layout.placeholder, &self.animation)
            .await?;
        Ok(slide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::deck::JsonDeck;

    #[tokio::test]
    async fn assemble_produces_one_styled_animated_slide() {
        let dir = tempfile::tempdir().unwrap();
        let deck = Arc::new(JsonDeck::create(dir.path().join("deck.json")));
        let layout = deck.add_layout(None).await.unwrap();

        let assembler = SlideAssembler::new(Arc::clone(&deck) as Arc<dyn DeckPort>);
        let slide = assembler.assemble(layout, "Behold, a virgin").await.unwrap();
        assert_eq!(slide, SlideRef(0));

        let doc = deck.snapshot().await;
        let shape = doc.slides[0].text_shape.as_ref().unwrap();
        assert_eq!(shape.text, "Behold, a virgin");
        assert_eq!(shape.style, TextStyle::default());
        let anim = shape.animation.as_ref().unwrap();
        assert_eq!(anim.text_unit_effect, "by-character");
        assert!(anim.animate);
        assert!(anim.advance_mode.is_none());
    }

    #[tokio::test]
    async fn empty_text_is_set_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let deck = Arc::new(JsonDeck::create(dir.path().join("deck.json")));
        let layout = deck.add_layout(None).await.unwrap();

        let assembler = SlideAssembler::new(Arc::clone(&deck) as Arc<dyn DeckPort>);
        assembler.assemble(layout, "").await.unwrap();

        let doc = deck.snapshot().await;
        assert_eq!(doc.slides[0].text_shape.as_ref().unwrap().text, "");
    }
}
