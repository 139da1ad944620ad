//! Implements ScripturePort from JSON corpus files.
//!
//! Each corpus is a flat JSON object of reference -> passage text. Keys are
//! normalized at load time with the same rules `try_parse` applies, so a
//! catalogue citation and a corpus key meet in one canonical form.
//!
//! The KJV corpus is the primary one and the only corpus the active pipeline
//! queries; Tanach and Greek NT corpora can be wired but nothing invokes them.

use crate::domain::{CanonicalReference, Corpus, DeckError};
use crate::ports::ScripturePort;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Corpus-file backed resolver.
#[derive(Debug)]
pub struct JsonCorpusResolver {
    kjv: HashMap<String, String>,
    tanach: Option<HashMap<String, String>>,
    greek_nt: Option<HashMap<String, String>>,
}

impl JsonCorpusResolver {
    /// Load the KJV corpus (required) and the secondary corpora when
    /// configured.
    pub async fn load(
        kjv_path: &Path,
        tanach_path: Option<&Path>,
        greek_nt_path: Option<&Path>,
    ) -> Result<Self, DeckError> {
        let kjv = read_corpus(kjv_path).await?;
        info!(path = %kjv_path.display(), verses = kjv.len(), "KJV corpus loaded");

        let tanach = match tanach_path {
            Some(p) => Some(read_corpus(p).await?),
            None => None,
        };
        let greek_nt = match greek_nt_path {
            Some(p) => Some(read_corpus(p).await?),
            None => None,
        };

        Ok(Self {
            kjv,
            tanach,
            greek_nt,
        })
    }
}

async fn read_corpus(path: &Path) -> Result<HashMap<String, String>, DeckError> {
    let raw = fs::read_to_string(path)
        .await
        .map_err(|e| DeckError::Corpus(format!("read {}: {}", path.display(), e)))?;
    let entries: HashMap<String, String> = serde_json::from_str(&raw)
        .map_err(|e| DeckError::Corpus(format!("parse {}: {}", path.display(), e)))?;
    // Re-key under the canonical citation form; entries that don't parse as
    // citations are unreachable and dropped.
    Ok(entries
        .into_iter()
        .filter_map(|(k, v)| parse_reference(&k).map(|r| (r.0, v)))
        .collect())
}

/// Normalize a free-text citation into `Book C:V[-V]` form, or `None` when the
/// text does not have that shape. Book names keep their given casing; internal
/// whitespace collapses to single spaces; a trailing period after the book
/// token is dropped ("Gen. 3:15" -> "Gen 3:15").
pub(crate) fn parse_reference(text: &str) -> Option<CanonicalReference> {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    let locator = tokens.pop()?;
    if tokens.is_empty() {
        return None;
    }

    let (chapter, verses) = locator.split_once(':')?;
    if chapter.is_empty() || !chapter.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let verse_ok = match verses.split_once('-') {
        Some((a, b)) => is_verse_number(a) && is_verse_number(b),
        None => is_verse_number(verses),
    };
    if !verse_ok {
        return None;
    }

    // Book part: optional ordinal ("1".."3") followed by alphabetic words.
    let mut book = Vec::with_capacity(tokens.len());
    for (i, tok) in tokens.iter().enumerate() {
        let tok = tok.strip_suffix('.').unwrap_or(tok);
        if tok.is_empty() {
            return None;
        }
        let ordinal = i == 0 && matches!(tok, "1" | "2" | "3");
        if !ordinal && !tok.chars().all(|c| c.is_alphabetic()) {
            return None;
        }
        book.push(tok);
    }

    Some(CanonicalReference(format!(
        "{} {}:{}",
        book.join(" "),
        chapter,
        verses
    )))
}

fn is_verse_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[async_trait::async_trait]
impl ScripturePort for JsonCorpusResolver {
    async fn try_parse(&self, text: &str) -> Option<CanonicalReference> {
        parse_reference(text)
    }

    async fn lookup(
        &self,
        reference: &CanonicalReference,
        corpus: Corpus,
    ) -> Result<Option<String>, DeckError> {
        let table = match corpus {
            Corpus::Kjv => Some(&self.kjv),
            Corpus::Tanach => self.tanach.as_ref(),
            Corpus::GreekNt => self.greek_nt.as_ref(),
        };
        Ok(table.and_then(|t| t.get(&reference.0).cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_ranged_citations() {
        assert_eq!(
            parse_reference("Gen 3:15").unwrap().0,
            "Gen 3:15".to_string()
        );
        assert_eq!(
            parse_reference("Matt 1:22-23").unwrap().0,
            "Matt 1:22-23".to_string()
        );
        assert_eq!(
            parse_reference("  1  Cor   15:3 ").unwrap().0,
            "1 Cor 15:3".to_string()
        );
        assert_eq!(parse_reference("Gen. 3:15").unwrap().0, "Gen 3:15");
    }

    #[test]
    fn rejects_citations_without_chapter_verse_shape() {
        assert!(parse_reference("").is_none());
        assert!(parse_reference("Genesis").is_none());
        assert!(parse_reference("3:15").is_none());
        assert!(parse_reference("Gen three:15").is_none());
        assert!(parse_reference("Gen 3:").is_none());
        assert!(parse_reference("Gen 3:15-").is_none());
    }

    #[tokio::test]
    async fn lookup_hits_and_misses() {
        let dir = tempfile::tempdir().unwrap();
        let kjv = dir.path().join("kjv.json");
        std::fs::write(
            &kjv,
            r#"{"Gen 3:15": "And I will put enmity between thee and the woman..."}"#,
        )
        .unwrap();

        let resolver = JsonCorpusResolver::load(&kjv, None, None).await.unwrap();
        let reference = resolver.try_parse("Gen 3:15").await.unwrap();
        let text = resolver.lookup(&reference, Corpus::Kjv).await.unwrap();
        assert!(text.unwrap().starts_with("And I will put enmity"));

        let missing = resolver.try_parse("Rev 22:21").await.unwrap();
        assert!(resolver.lookup(&missing, Corpus::Kjv).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unconfigured_secondary_corpus_resolves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let kjv = dir.path().join("kjv.json");
        std::fs::write(&kjv, r#"{"Gen 3:15": "text"}"#).unwrap();

        let resolver = JsonCorpusResolver::load(&kjv, None, None).await.unwrap();
        let reference = resolver.try_parse("Gen 3:15").await.unwrap();
        assert!(resolver
            .lookup(&reference, Corpus::Tanach)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn missing_corpus_file_is_corpus_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonCorpusResolver::load(&dir.path().join("absent.json"), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DeckError::Corpus(_)));
    }
}
