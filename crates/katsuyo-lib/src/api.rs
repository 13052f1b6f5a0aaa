//! Request boundary types and the conjugation entry point.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::conjugate::{self, ConjugationEntry, ConjugationTable, Form, VerbClass};
use crate::english::EnglishConjugator;
use crate::kana;

/// Error raised by a word store backend.
#[derive(Debug, Error)]
pub enum WordStoreError {
    #[error("word store unavailable")]
    Unavailable,
    #[error("lookup failed: {0}")]
    Lookup(String),
}

/// A stored word with its part-of-speech labels and definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub parts_of_speech: String,
    pub definitions: String,
}

/// Backing word store consulted by the request boundary.
///
/// Implementations match on the dictionary form or its phonetic reading. A
/// single synchronous read with no side effects; failures degrade to the
/// verb-ending heuristic instead of blocking the request.
pub trait WordStore {
    fn lookup(&self, word: &str) -> Result<Option<Word>, WordStoreError>;
}

/// In-memory word store.
#[derive(Debug, Default, Clone)]
pub struct MemoryWordStore {
    words: HashMap<String, Word>,
}

impl MemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: impl Into<String>, parts_of_speech: impl Into<String>, definitions: impl Into<String>) {
        self.words.insert(
            word.into(),
            Word {
                parts_of_speech: parts_of_speech.into(),
                definitions: definitions.into(),
            },
        );
    }
}

impl WordStore for MemoryWordStore {
    fn lookup(&self, word: &str) -> Result<Option<Word>, WordStoreError> {
        Ok(self.words.get(word).cloned())
    }
}

/// An incoming conjugation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConjugateRequest {
    pub verb: String,
    #[serde(default)]
    pub negative: bool,
    #[serde(default)]
    pub polite: bool,
}

/// The assembled response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConjugateResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub verb: String,
    #[serde(default)]
    pub verb_type: String,
    #[serde(default)]
    pub conjugations: Option<Conjugations>,
}

impl ConjugateResponse {
    fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
            verb: String::new(),
            verb_type: String::new(),
            conjugations: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conjugations {
    pub tenses: Tenses,
    pub voice: VoiceForms,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenses {
    pub time: TimeForms,
    pub aspect: AspectForms,
    pub mood: MoodForms,
    pub modals: ModalForms,
    pub desire: DesireForms,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeForms {
    pub present: ConjugationEntry,
    pub past: ConjugationEntry,
    pub future: ConjugationEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectForms {
    pub simple: ConjugationEntry,
    pub progressive: ConjugationEntry,
    pub perfect: ConjugationEntry,
    pub perfect_progressive: ConjugationEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodForms {
    pub indicative: ConjugationEntry,
    pub subjunctive: ConjugationEntry,
    pub conditional: ConjugationEntry,
    pub imperative: ConjugationEntry,
    pub volitional: ConjugationEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalForms {
    pub potential: ConjugationEntry,
    pub causative: ConjugationEntry,
    pub deontic: ConjugationEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesireForms {
    pub subject: ConjugationEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceForms {
    pub active: ConjugationEntry,
    pub passive: ConjugationEntry,
}

impl From<ConjugationTable> for Conjugations {
    fn from(table: ConjugationTable) -> Self {
        let get = |form: Form| table.get(form).cloned().unwrap_or_default();

        Conjugations {
            tenses: Tenses {
                time: TimeForms {
                    present: get(Form::Present),
                    past: get(Form::Past),
                    future: get(Form::Future),
                },
                aspect: AspectForms {
                    simple: get(Form::Simple),
                    progressive: get(Form::Progressive),
                    perfect: get(Form::Perfect),
                    perfect_progressive: get(Form::PerfectProgressive),
                },
                mood: MoodForms {
                    indicative: get(Form::Indicative),
                    subjunctive: get(Form::Subjunctive),
                    conditional: get(Form::Conditional),
                    imperative: get(Form::Imperative),
                    volitional: get(Form::Volitional),
                },
                modals: ModalForms {
                    potential: get(Form::Potential),
                    causative: get(Form::Causative),
                    deontic: get(Form::Deontic),
                },
                desire: DesireForms {
                    subject: get(Form::Desire),
                },
            },
            voice: VoiceForms {
                active: get(Form::Active),
                passive: get(Form::Passive),
            },
        }
    }
}

/// Handle a conjugation request against the given word store.
///
/// The engine itself is total; only boundary validation produces an invalid
/// response.
pub fn handle<S>(store: &S, request: &ConjugateRequest) -> ConjugateResponse
where
    S: WordStore + ?Sized,
{
    let verb = request.verb.trim();

    if verb.is_empty() {
        return ConjugateResponse::invalid("Verb cannot be empty");
    }

    if !kana::is_japanese(verb) {
        return ConjugateResponse::invalid("Input must be in Japanese");
    }

    let definition = match store.lookup(verb) {
        Ok(Some(word)) => {
            if !word.parts_of_speech.to_lowercase().contains("verb") {
                return ConjugateResponse::invalid("Word not found in database or is not a verb");
            }

            Some(word.definitions)
        }
        Ok(None) => {
            // Unknown words with a plausible verb ending are still accepted.
            if !kana::has_verb_ending(verb) {
                return ConjugateResponse::invalid("Word not found in database or is not a verb");
            }

            None
        }
        Err(error) => {
            tracing::warn!(%error, "word store lookup failed");

            if !kana::has_verb_ending(verb) {
                return ConjugateResponse::invalid(format!("Failed to validate verb: {error}"));
            }

            None
        }
    };

    let english = definition.as_deref().and_then(EnglishConjugator::from_definition);

    match &english {
        Some(conjugator) => tracing::debug!(verb, base = conjugator.base(), "conjugating with definition"),
        None => tracing::debug!(verb, "conjugating without definition"),
    }

    let class = VerbClass::classify(verb);
    let mut table = conjugate::generate(verb, class, english.as_ref());

    if request.negative || request.polite {
        table = conjugate::apply_modifiers(&table, verb, class, request.negative, request.polite);
    }

    ConjugateResponse {
        valid: true,
        error: None,
        verb: verb.to_owned(),
        verb_type: class.name().to_owned(),
        conjugations: Some(table.into()),
    }
}
