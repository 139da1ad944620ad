//! Domain entities. Pure data structures for the core business.
//!
//! No host/IO types here — these are mapped from adapters.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The full nested dataset: OT reference -> fulfillment groupings -> NT references.
///
/// Source key order is the traversal order, so the JSON object is kept as an
/// ordered pair list instead of a map (serde's default map targets re-sort keys).
/// Read-only after load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProphecyCatalogue {
    pub prophecies: Vec<(String, FulfillmentGroup)>,
}

impl ProphecyCatalogue {
    pub fn len(&self) -> usize {
        self.prophecies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prophecies.is_empty()
    }

    /// Iterate (OT reference, group) pairs in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, FulfillmentGroup)> {
        self.prophecies.iter()
    }
}

/// Per-prophecy mapping of thematic labels to NT reference lists, in stored
/// order. Duplicate references are allowed and resolved independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FulfillmentGroup {
    pub fulfillments: Vec<(String, Vec<String>)>,
}

impl<'de> Deserialize<'de> for ProphecyCatalogue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogueVisitor;

        impl<'de> Visitor<'de> for CatalogueVisitor {
            type Value = ProphecyCatalogue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of OT reference to fulfillment group")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut prophecies = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, FulfillmentGroup>()? {
                    prophecies.push(entry);
                }
                Ok(ProphecyCatalogue { prophecies })
            }
        }

        deserializer.deserialize_map(CatalogueVisitor)
    }
}

impl<'de> Deserialize<'de> for FulfillmentGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GroupVisitor;

        impl<'de> Visitor<'de> for GroupVisitor {
            type Value = FulfillmentGroup;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of fulfillment label to NT reference list")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut fulfillments = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Vec<String>>()? {
                    fulfillments.push(entry);
                }
                Ok(FulfillmentGroup { fulfillments })
            }
        }

        deserializer.deserialize_map(GroupVisitor)
    }
}

/// A citation normalized by the resolver's parse step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalReference(pub String);

impl fmt::Display for CanonicalReference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text corpus selector. Only `Kjv` is used by the active walk; the Hebrew and
/// Greek corpora are wired in the resolver but never invoked by the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corpus {
    Kjv,
    Tanach,
    GreekNt,
}

/// A reference paired with its resolved display text. Transient — exists only
/// during traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPassage {
    pub reference: CanonicalReference,
    pub text: String,
}

/// Deck-wide slide show transition defaults. Applied to the master exactly
/// once, before any slide or layout exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionDefaults {
    pub entry_effect: String,
    pub duration_secs: f32,
    pub advance_on_time: bool,
    pub advance_time_secs: f32,
}

impl Default for TransitionDefaults {
    fn default() -> Self {
        Self {
            entry_effect: "fade-smoothly".into(),
            duration_secs: 3.5,
            advance_on_time: true,
            advance_time_secs: 8.0,
        }
    }
}

/// Fixed text styling, identical for every slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub auto_size_to_fit: bool,
    pub vertical_anchor: VerticalAnchor,
    pub horizontal_anchor: HorizontalAnchor,
    pub paragraph_alignment: ParagraphAlignment,
    pub line_spacing: f32,
    pub font_name: String,
    pub font_size_pt: f32,
    pub font_color_rgb: u32,
    pub shadow: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            auto_size_to_fit: true,
            vertical_anchor: VerticalAnchor::Top,
            horizontal_anchor: HorizontalAnchor::Center,
            paragraph_alignment: ParagraphAlignment::Center,
            line_spacing: 1.0,
            font_name: "Georgia".into(),
            font_size_pt: 32.0,
            font_color_rgb: 0xFFFFFF,
            shadow: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAnchor {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAnchor {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphAlignment {
    Left,
    Center,
    Right,
}

/// Fixed entry animation for the slide text. Timing and advance mode stay
/// unset (host defaults), so they are absent here rather than defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryAnimation {
    pub entry_effect: String,
    pub text_unit_effect: String,
    pub animate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance_time_secs: Option<f32>,
}

impl Default for EntryAnimation {
    fn default() -> Self {
        Self {
            entry_effect: "fade".into(),
            text_unit_effect: "by-character".into(),
            animate: true,
            advance_mode: None,
            advance_time_secs: None,
        }
    }
}
