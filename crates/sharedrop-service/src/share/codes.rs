//! Human-friendly share code generation.

use std::path::Path;
use std::sync::Arc;

use sharedrop_core::error::{AppError, ErrorKind};
use sharedrop_core::result::AppResult;

/// Picks share codes uniformly at random from a fixed vocabulary.
///
/// The vocabulary is normalized once at construction (trimmed,
/// lower-cased, blanks and duplicates dropped) and is never empty.
/// Uniqueness is not guaranteed; see [`CodeRegistry`](super::CodeRegistry)
/// for how collisions are handled.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    words: Arc<[String]>,
}

impl CodeGenerator {
    /// Build a generator from an in-memory word list.
    pub fn from_words<I, S>(words: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| normalize_code(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        words.sort_unstable();
        words.dedup();

        if words.is_empty() {
            return Err(AppError::configuration("Share code vocabulary is empty"));
        }

        Ok(Self {
            words: words.into(),
        })
    }

    /// Load a newline-separated vocabulary from disk.
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to read word list '{}'", path.display()),
                e,
            )
        })?;

        let generator = Self::from_words(raw.lines())?;
        tracing::info!(
            path = %path.display(),
            words = generator.len(),
            "Loaded share code vocabulary"
        );
        Ok(generator)
    }

    /// Draw one word.
    pub fn generate(&self) -> String {
        let index = rand::random_range(0..self.words.len());
        self.words[index].clone()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; an empty vocabulary is rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` is part of the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }
}

/// Canonical form of a user-supplied code.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase()
}
