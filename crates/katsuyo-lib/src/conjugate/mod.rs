//! Verb classification and the conjugation table data model.

pub mod godan;

mod generate;
pub use self::generate::generate;

mod modifier;
pub use self::modifier::apply_modifiers;


use fixed_map::{Key, Map};
use serde::{Deserialize, Serialize};

/// The conjugation class of a Japanese verb.
///
/// Determined once per request and immutable afterwards; every later table
/// lookup dispatches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerbClass {
    Ichidan,
    Godan,
    IrregularSuru,
    IrregularKuru,
}

/// Kana in the い-row and え-row across all consonant columns. A verb ending
/// in る whose second-to-last mora is one of these conjugates as ichidan.
static ICHIDAN_MORAE: &[char] = &[
    'い', 'き', 'ぎ', 'し', 'じ', 'ち', 'に', 'ひ', 'び', 'ぴ', 'み', 'り', 'え', 'け', 'げ',
    'せ', 'ぜ', 'て', 'で', 'ね', 'へ', 'べ', 'ぺ', 'め', 'れ',
];

impl VerbClass {
    /// Classify a dictionary-form verb.
    ///
    /// Total and deterministic: garbage input still receives a best-effort
    /// class. Whether the input is a real verb is the request boundary's
    /// concern, not ours.
    pub fn classify(verb: &str) -> VerbClass {
        match verb {
            "する" | "為る" => return VerbClass::IrregularSuru,
            "来る" | "くる" => return VerbClass::IrregularKuru,
            _ => {}
        }

        let mut it = verb.chars();

        if it.next_back() != Some('る') {
            return VerbClass::Godan;
        }

        match it.next_back() {
            Some(c) if ICHIDAN_MORAE.contains(&c) => VerbClass::Ichidan,
            _ => VerbClass::Godan,
        }
    }

    /// The label reported to callers.
    pub fn name(&self) -> &'static str {
        match self {
            VerbClass::Ichidan => "ichidan",
            VerbClass::Godan => "godan",
            VerbClass::IrregularSuru => "irregular (する)",
            VerbClass::IrregularKuru => "irregular (来る)",
        }
    }

    /// Test if this is one of the two irregular classes.
    pub fn is_irregular(&self) -> bool {
        matches!(self, VerbClass::IrregularSuru | VerbClass::IrregularKuru)
    }
}

/// Category groups for the conjugated forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Time,
    Aspect,
    Mood,
    Modal,
    Desire,
    Voice,
}

/// The closed set of conjugated forms. Never extended at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Key, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Form {
    Present,
    Past,
    Future,
    Simple,
    Progressive,
    Perfect,
    PerfectProgressive,
    Indicative,
    Subjunctive,
    Conditional,
    Imperative,
    Volitional,
    Potential,
    Causative,
    Deontic,
    Desire,
    Active,
    Passive,
}

impl Form {
    pub const ALL: [Form; 18] = [
        Form::Present,
        Form::Past,
        Form::Future,
        Form::Simple,
        Form::Progressive,
        Form::Perfect,
        Form::PerfectProgressive,
        Form::Indicative,
        Form::Subjunctive,
        Form::Conditional,
        Form::Imperative,
        Form::Volitional,
        Form::Potential,
        Form::Causative,
        Form::Deontic,
        Form::Desire,
        Form::Active,
        Form::Passive,
    ];

    /// The category group this form belongs to.
    pub fn category(&self) -> Category {
        match self {
            Form::Present | Form::Past | Form::Future => Category::Time,
            Form::Simple | Form::Progressive | Form::Perfect | Form::PerfectProgressive => {
                Category::Aspect
            }
            Form::Indicative
            | Form::Subjunctive
            | Form::Conditional
            | Form::Imperative
            | Form::Volitional => Category::Mood,
            Form::Potential | Form::Causative | Form::Deontic => Category::Modal,
            Form::Desire => Category::Desire,
            Form::Active | Form::Passive => Category::Voice,
        }
    }

    /// The name of the form inside its category.
    pub fn name(&self) -> &'static str {
        match self {
            Form::Present => "present",
            Form::Past => "past",
            Form::Future => "future",
            Form::Simple => "simple",
            Form::Progressive => "progressive",
            Form::Perfect => "perfect",
            Form::PerfectProgressive => "perfect_progressive",
            Form::Indicative => "indicative",
            Form::Subjunctive => "subjunctive",
            Form::Conditional => "conditional",
            Form::Imperative => "imperative",
            Form::Volitional => "volitional",
            Form::Potential => "potential",
            Form::Causative => "causative",
            Form::Deontic => "deontic",
            Form::Desire => "subject",
            Form::Active => "active",
            Form::Passive => "passive",
        }
    }
}

/// A single conjugated form with its paired English phrase.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugationEntry {
    pub english: String,
    pub japanese: String,
    #[serde(default)]
    pub alts: Vec<String>,
}

impl ConjugationEntry {
    pub fn new(english: impl Into<String>, japanese: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            japanese: japanese.into(),
            alts: Vec::new(),
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alts.push(alt.into());
        self
    }
}

/// The full per-request table of conjugated forms.
///
/// Built fresh for every request. Applying modifiers produces a new table
/// rather than mutating this one in place.
#[derive(Debug, Clone)]
pub struct ConjugationTable {
    entries: Map<Form, ConjugationEntry>,
}

impl Default for ConjugationTable {
    fn default() -> Self {
        Self { entries: Map::new() }
    }
}

impl PartialEq for ConjugationTable {
    fn eq(&self, other: &Self) -> bool {
        Form::ALL.iter().all(|&form| self.get(form) == other.get(form))
    }
}

impl ConjugationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, form: Form, entry: ConjugationEntry) {
        self.entries.insert(form, entry);
    }

    pub fn get(&self, form: Form) -> Option<&ConjugationEntry> {
        self.entries.get(form)
    }

    /// Iterate over all forms in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Form, &ConjugationEntry)> + '_ {
        self.entries.iter()
    }
}
