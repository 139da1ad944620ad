//! Main traversal logic: catalogue -> resolve -> layout -> slide.
//!
//! Depth-first over the first `max_prophecies` top-level entries:
//! - OT reference: resolved text gets an image slide; unresolved is skipped.
//! - Each fulfillment label gets a solid-fill slide with the label verbatim,
//!   then each NT reference gets an image slide when it resolves.
//!
//! Resolution failure is a per-reference skip. Every other error aborts the
//! remaining traversal; slides already appended stay in the in-memory deck.

use crate::domain::{Corpus, DeckError, ProphecyCatalogue, ResolvedPassage};
use crate::ports::{DeckPort, ImagePort, ScripturePort};
use crate::usecases::SlideAssembler;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Traversal orchestrator. Threads image selection and layout creation per
/// slide; all state accumulates in the deck.
pub struct CatalogueWalker {
    scripture: Arc<dyn ScripturePort>,
    images: Arc<dyn ImagePort>,
    deck: Arc<dyn DeckPort>,
    assembler: SlideAssembler,
    images_dir: PathBuf,
    max_prophecies: usize,
}

impl CatalogueWalker {
    pub fn new(
        scripture: Arc<dyn ScripturePort>,
        images: Arc<dyn ImagePort>,
        deck: Arc<dyn DeckPort>,
        images_dir: PathBuf,
        max_prophecies: usize,
    ) -> Self {
        let assembler = SlideAssembler::new(Arc::clone(&deck));
        Self {
            scripture,
            images,
            deck,
            assembler,
            images_dir,
            max_prophecies,
        }
    }

    /// Walk the catalogue and append one slide per resolved passage plus one
    /// per fulfillment label. Runs strictly sequentially; slide order is the
    /// traversal order.
    pub async fn walk(&self, catalogue: &ProphecyCatalogue) -> Result<WalkStats, DeckError> {
        let mut stats = WalkStats::default();

        for (ot_ref, group) in catalogue.iter().take(self.max_prophecies) {
            match self.resolve(ot_ref).await? {
                Some(passage) => {
                    self.add_image_slide(&passage.text).await?;
                    stats.slides_added += 1;
                }
                None => {
                    debug!(reference = %ot_ref, "unresolved, skipping");
                    stats.references_skipped += 1;
                }
            }

            for (label, nt_refs) in &group.fulfillments {
                // The label itself is the slide text, verbatim, on solid fill.
                let layout = self.deck.add_layout(None).await?;
                self.assembler.assemble(layout, label).await?;
                stats.slides_added += 1;

                for nt_ref in nt_refs {
                    match self.resolve(nt_ref).await? {
                        Some(passage) => {
                            self.add_image_slide(&passage.text).await?;
                            stats.slides_added += 1;
                        }
                        None => {
                            debug!(reference = %nt_ref, "unresolved, skipping");
                            stats.references_skipped += 1;
                        }
                    }
                }
            }
        }

        info!(
            slides = stats.slides_added,
            skipped = stats.references_skipped,
            "catalogue walk complete"
        );
        Ok(stats)
    }

    /// Resolve a citation against the primary corpus. `None` covers both an
    /// unparseable citation and a reference absent from the corpus.
    async fn resolve(&self, citation: &str) -> Result<Option<ResolvedPassage>, DeckError> {
        let Some(reference) = self.scripture.try_parse(citation).await else {
            return Ok(None);
        };
        let text = self.scripture.lookup(&reference, Corpus::Kjv).await?;
        Ok(text
            .filter(|t| !t.is_empty())
            .map(|text| ResolvedPassage { reference, text }))
    }

    /// One slide with a freshly picked random background. The image is picked
    /// before any layout is built, so an empty directory fails first.
    async fn add_image_slide(&self, text: &str) -> Result<(), DeckError> {
        let image = self.images.pick_random(&self.images_dir).await?;
        let layout = self.deck.add_layout(Some(&image)).await?;
        self.assembler.assemble(layout, text).await?;
        Ok(())
    }
}

/// Result of a catalogue walk.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub slides_added: usize,
    pub references_skipped: usize,
}
