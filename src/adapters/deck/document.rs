//! Serialized deck document model.
//!
//! This is the JSON shape `JsonDeck` persists: master transition defaults plus
//! append-only layout and slide lists. Indices into `layouts` are the layout
//! handles; a slide points at its layout by index.

use crate::domain::{EntryAnimation, TextStyle, TransitionDefaults};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_transition: Option<TransitionDefaults>,
    #[serde(default)]
    pub layouts: Vec<LayoutDoc>,
    #[serde(default)]
    pub slides: Vec<SlideDoc>,
}

/// A custom layout. Always carries exactly one placeholder text box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutDoc {
    pub follow_master_background: bool,
    pub fill: LayoutFill,
    pub placeholder: PlaceholderBox,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LayoutFill {
    Image { path: PathBuf },
    Solid { color_rgb: u32 },
}

/// Placeholder geometry in points. Fixed at 200x200 offset (200, 200).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for PlaceholderBox {
    fn default() -> Self {
        Self {
            left: 200.0,
            top: 200.0,
            width: 200.0,
            height: 200.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideDoc {
    pub layout_index: usize,
    /// Populated by the assembler; `None` only between append and text set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_shape: Option<TextShapeDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextShapeDoc {
    pub text: String,
    pub style: TextStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<EntryAnimation>,
}
