//! Implements DeckPort as a JSON document on disk.
//!
//! One deck per instance. The in-memory document is only written by `save`,
//! using the write-replace pattern (temp file, sync, atomic rename) so a crash
//! mid-write never corrupts an existing deck file.

use super::document::{
    DeckDocument, LayoutDoc, LayoutFill, PlaceholderBox, SlideDoc, TextShapeDoc,
};
use crate::domain::{DeckError, EntryAnimation, TextStyle, TransitionDefaults};
use crate::ports::{DeckPort, LayoutRef, PlaceholderRef, SlideRef};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// JSON file-based deck host.
#[derive(Debug)]
pub struct JsonDeck {
    path: PathBuf,
    doc: tokio::sync::RwLock<DeckDocument>,
}

impl JsonDeck {
    /// Start a blank deck targeting `path`. Nothing is written until `save`.
    pub fn create(path: impl AsRef<Path>) -> Self {
        info!(path = %path.as_ref().display(), "initializing presentation");
        Self {
            path: path.as_ref().to_path_buf(),
            doc: tokio::sync::RwLock::new(DeckDocument::default()),
        }
    }

    /// Open an existing deck file. Fails if the file is missing or corrupt.
    pub async fn open_existing(path: impl AsRef<Path>) -> Result<Self, DeckError> {
        let path = path.as_ref();
        info!(path = %path.display(), "opening presentation");
        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| DeckError::Host(format!("open {}: {}", path.display(), e)))?;
        let doc: DeckDocument = serde_json::from_str(&raw)
            .map_err(|e| DeckError::Host(format!("parse {}: {}", path.display(), e)))?;
        Ok(Self {
            path: path.to_path_buf(),
            doc: tokio::sync::RwLock::new(doc),
        })
    }

    /// Clone of the current in-memory document. Test/inspection hook.
    pub async fn snapshot(&self) -> DeckDocument {
        self.doc.read().await.clone()
    }
}

#[async_trait::async_trait]
impl DeckPort for JsonDeck {
    async fn apply_transition(&self, defaults: &TransitionDefaults) -> Result<(), DeckError> {
        info!("creating slide transitions");
        let mut doc = self.doc.write().await;
        doc.master_transition = Some(defaults.clone());
        Ok(())
    }

    async fn add_layout(&self, background: Option<&Path>) -> Result<LayoutRef, DeckError> {
        let fill = match background {
            Some(image) => {
                info!(background = %image.display(), "creating custom layout");
                // The image must be readable now; a broken path is fatal to
                // this layout, not deferred to save time.
                fs::metadata(image)
                    .await
                    .map_err(|e| {
                        DeckError::LayoutAsset(format!("{}: {}", image.display(), e))
                    })
                    .and_then(|m| {
                        if m.is_file() {
                            Ok(())
                        } else {
                            Err(DeckError::LayoutAsset(format!(
                                "{}: not a file",
                                image.display()
                            )))
                        }
                    })?;
                LayoutFill::Image {
                    path: image.to_path_buf(),
                }
            }
            None => {
                info!("creating custom layout with solid fill");
                LayoutFill::Solid { color_rgb: 0x000000 }
            }
        };

        let mut doc = self.doc.write().await;
        doc.layouts.push(LayoutDoc {
            follow_master_background: false,
            fill,
            placeholder: PlaceholderBox::default(),
        });
        let layout_index = doc.layouts.len() - 1;
        Ok(LayoutRef {
            layout_index,
            // Single text box per layout; its identity is the shape slot.
            placeholder: PlaceholderRef(0),
        })
    }

    async fn add_slide(&self, layout: LayoutRef) -> Result<SlideRef, DeckError> {
        let mut doc = self.doc.write().await;
        if layout.layout_index >= doc.layouts.len() {
            return Err(DeckError::Host(format!(
                "layout {} does not exist",
                layout.layout_index
            )));
        }
        doc.slides.push(SlideDoc {
            layout_index: layout.layout_index,
            text_shape: None,
        });
        Ok(SlideRef(doc.slides.len() - 1))
    }

    async fn set_slide_text(
        &self,
        slide: SlideRef,
        placeholder: PlaceholderRef,
        text: &str,
        style: &TextStyle,
    ) -> Result<(), DeckError> {
        if placeholder != PlaceholderRef(0) {
            return Err(DeckError::Host(format!(
                "placeholder shape {} not found",
                placeholder.0
            )));
        }
        let mut doc = self.doc.write().await;
        let slide_doc = doc
            .slides
            .get_mut(slide.0)
            .ok_or_else(|| DeckError::Host(format!("slide {} does not exist", slide.0)))?;
        slide_doc.text_shape = Some(TextShapeDoc {
            text: text.to_owned(),
            style: style.clone(),
            animation: None,
        });
        Ok(())
    }

    async fn animate_slide_text(
        &self,
        slide: SlideRef,
        placeholder: PlaceholderRef,
        animation: &EntryAnimation,
    ) -> Result<(), DeckError> {
        if placeholder != PlaceholderRef(0) {
            return Err(DeckError::Host(format!(
                "placeholder shape {} not found",
                placeholder.0
            )));
        }
        let mut doc = self.doc.write().await;
        let shape = doc
            .slides
            .get_mut(slide.0)
            .and_then(|s| s.text_shape.as_mut())
            .ok_or_else(|| {
                DeckError::Host(format!("slide {} has no text shape to animate", slide.0))
            })?;
        shape.animation = Some(animation.clone());
        Ok(())
    }

    async fn save(&self) -> Result<(), DeckError> {
        info!(path = %self.path.display(), "saving presentation");
        let doc = self.doc.read().await;
        let json = serde_json::to_string_pretty(&*doc)
            .map_err(|e| DeckError::Persist(e.to_string()))?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DeckError::Persist(format!("create temp file: {}", e)))?;
        f.write_all(json.as_bytes())
            .await
            .map_err(|e| DeckError::Persist(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DeckError::Persist(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DeckError::Persist(format!("atomic rename failed: {}", e)))?;
        Ok(())
    }

    async fn present(&self) -> Result<(), DeckError> {
        // This host has no window to raise; the saved file is the deliverable.
        info!(path = %self.path.display(), "presentation ready");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_in(dir: &tempfile::TempDir) -> JsonDeck {
        JsonDeck::create(dir.path().join("deck.json"))
    }

    #[tokio::test]
    async fn transition_defaults_land_on_the_master() {
        let dir = tempfile::tempdir().unwrap();
        let deck = deck_in(&dir);
        deck.apply_transition(&TransitionDefaults::default())
            .await
            .unwrap();
        let doc = deck.snapshot().await;
        let t = doc.master_transition.unwrap();
        assert_eq!(t.entry_effect, "fade-smoothly");
        assert_eq!(t.duration_secs, 3.5);
        assert!(t.advance_on_time);
        assert_eq!(t.advance_time_secs, 8.0);
    }

    #[tokio::test]
    async fn solid_layout_has_black_fill_and_fixed_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let deck = deck_in(&dir);
        let layout = deck.add_layout(None).await.unwrap();
        let doc = deck.snapshot().await;
        let l = &doc.layouts[layout.layout_index];
        assert!(!l.follow_master_background);
        assert_eq!(l.fill, LayoutFill::Solid { color_rgb: 0x000000 });
        assert_eq!(l.placeholder, PlaceholderBox::default());
        assert_eq!(l.placeholder.left, 200.0);
        assert_eq!(l.placeholder.width, 200.0);
    }

    #[tokio::test]
    async fn identical_backgrounds_still_get_distinct_layouts() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("bg.jpg");
        std::fs::write(&image, b"jpg").unwrap();
        let deck = deck_in(&dir);

        let a = deck.add_layout(Some(&image)).await.unwrap();
        let b = deck.add_layout(Some(&image)).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(deck.snapshot().await.layouts.len(), 2);
    }

    #[tokio::test]
    async fn unreadable_background_is_layout_asset_error() {
        let dir = tempfile::tempdir().unwrap();
        let deck = deck_in(&dir);
        let err = deck
            .add_layout(Some(&dir.path().join("missing.jpg")))
            .await
            .unwrap_err();
        assert!(matches!(err, DeckError::LayoutAsset(_)));
    }

    #[tokio::test]
    async fn slides_append_in_order_with_text_and_animation() {
        let dir = tempfile::tempdir().unwrap();
        let deck = deck_in(&dir);
        let layout = deck.add_layout(None).await.unwrap();

        let first = deck.add_slide(layout).await.unwrap();
        let second = deck.add_slide(layout).await.unwrap();
        assert_eq!(first, SlideRef(0));
        assert_eq!(second, SlideRef(1));

        deck.set_slide_text(first, layout.placeholder, "For unto us", &TextStyle::default())
            .await
            .unwrap();
        deck.animate_slide_text(first, layout.placeholder, &EntryAnimation::default())
            .await
            .unwrap();

        let doc = deck.snapshot().await;
        let shape = doc.slides[0].text_shape.as_ref().unwrap();
        assert_eq!(shape.text, "For unto us");
        assert_eq!(shape.style.font_name, "Georgia");
        assert_eq!(shape.animation.as_ref().unwrap().entry_effect, "fade");
        assert!(doc.slides[1].text_shape.is_none());
    }

    #[tokio::test]
    async fn wrong_placeholder_is_shape_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let deck = deck_in(&dir);
        let layout = deck.add_layout(None).await.unwrap();
        let slide = deck.add_slide(layout).await.unwrap();
        let err = deck
            .set_slide_text(slide, PlaceholderRef(1), "text", &TextStyle::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DeckError::Host(_)));
    }

    #[tokio::test]
    async fn save_then_reopen_round_trips_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        let deck = JsonDeck::create(&path);
        deck.apply_transition(&TransitionDefaults::default())
            .await
            .unwrap();
        let layout = deck.add_layout(None).await.unwrap();
        let slide = deck.add_slide(layout).await.unwrap();
        deck.set_slide_text(slide, layout.placeholder, "text", &TextStyle::default())
            .await
            .unwrap();
        deck.save().await.unwrap();

        let reopened = JsonDeck::open_existing(&path).await.unwrap();
        let doc = reopened.snapshot().await;
        assert_eq!(doc.slides.len(), 1);
        assert_eq!(doc.layouts.len(), 1);
        assert!(doc.master_transition.is_some());
    }

    #[tokio::test]
    async fn open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonDeck::open_existing(dir.path().join("absent.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, DeckError::Host(_)));
    }
}
