//! English verb conjugation from free-text dictionary definitions.

mod irregular;
pub use self::irregular::IrregularVerb;

#[cfg(test)]
mod tests;

use crate::conjugate::Form;

/// Derives English phrasing for a verb whose base form was extracted from a
/// dictionary definition. Read-only after construction.
#[derive(Debug, Clone)]
pub struct EnglishConjugator {
    base: String,
    irregular: Option<&'static IrregularVerb>,
}

impl EnglishConjugator {
    /// Extract a base verb from a free-text definition.
    ///
    /// Returns `None` for definitions that do not yield a plausible verb
    /// token; callers then fall back to [`fallback_phrase`].
    pub fn from_definition(definition: &str) -> Option<EnglishConjugator> {
        let base = extract_base_verb(definition)?;
        let irregular = irregular::lookup(&base);
        tracing::debug!(base, irregular = irregular.is_some(), "extracted base verb");
        Some(EnglishConjugator { base, irregular })
    }

    /// The extracted base verb.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn is_irregular(&self) -> bool {
        self.irregular.is_some()
    }

    /// Simple past.
    pub fn past(&self) -> String {
        match self.irregular {
            Some(verb) => verb.past.to_owned(),
            None => regular_past(&self.base),
        }
    }

    /// Past participle. Identical to the simple past for regular verbs.
    pub fn past_participle(&self) -> String {
        match self.irregular {
            Some(verb) => verb.past_participle.to_owned(),
            None => regular_past(&self.base),
        }
    }

    /// Third-person singular present.
    pub fn present_third(&self) -> String {
        match self.irregular {
            Some(verb) => verb.present_third.to_owned(),
            None => regular_present_third(&self.base),
        }
    }

    /// Gerund / present participle.
    pub fn gerund(&self) -> String {
        match self.irregular {
            Some(verb) => verb.gerund.to_owned(),
            None => regular_gerund(&self.base),
        }
    }

    /// The English phrase for a given conjugated form.
    pub fn phrase(&self, form: Form) -> String {
        match form {
            Form::Present | Form::Simple | Form::Indicative | Form::Active => {
                format!("I {}", self.base)
            }
            Form::Past => format!("I {}", self.past()),
            Form::Future => format!("I will {}", self.base),
            Form::Progressive => format!("I am {}", self.gerund()),
            Form::Perfect => format!("I have {}", self.past_participle()),
            Form::PerfectProgressive => format!("I have been {}", self.gerund()),
            Form::Subjunctive => format!("I wish I {}", self.past()),
            Form::Conditional => format!("If I {}", self.base),
            Form::Imperative => title_case(&self.base),
            Form::Volitional => format!("Let's {}", self.base),
            Form::Potential => format!("I can {}", self.base),
            Form::Causative => format!("I make you {}", self.base),
            Form::Deontic => format!("I must {}", self.base),
            Form::Desire => format!("I want to {}", self.base),
            Form::Passive => format!("It is {} by me", self.past_participle()),
        }
    }
}

/// Generic phrases used when no definition is available. Never empty.
pub fn fallback_phrase(form: Form) -> &'static str {
    match form {
        Form::Present | Form::Simple | Form::Indicative | Form::Active => "I do",
        Form::Past => "I did",
        Form::Future => "I will do",
        Form::Progressive => "I am doing",
        Form::Perfect => "I have done",
        Form::PerfectProgressive => "I have been doing",
        Form::Subjunctive => "I wish I did",
        Form::Conditional => "If I do",
        Form::Imperative => "Do",
        Form::Volitional => "Let's do",
        Form::Potential => "I can do",
        Form::Causative => "I make you do",
        Form::Deontic => "I must do",
        Form::Desire => "I want to do",
        Form::Passive => "It is done by me",
    }
}

/// Negation patterns, tried in order; the first whose pattern occurs in the
/// phrase wins and is substituted once.
static NEGATIONS: &[(&str, &str)] = &[
    (" do", " don't"),
    (" did", " didn't"),
    (" will", " won't"),
    (" am", " am not"),
    (" have", " haven't"),
    (" can", " can't"),
    (" must", " must not"),
];

/// Rewrite an already-generated English phrase for the negative and polite
/// flags.
///
/// Negation is a naive first-match substring substitution and politeness a
/// `[Polite]` label, not a grammatical transformation. Kept coarse on
/// purpose; compatibility defines correctness here.
pub fn modify(phrase: &str, negative: bool, polite: bool) -> String {
    if phrase.is_empty() {
        return String::new();
    }

    let mut phrase = phrase.to_owned();
    let mut markers = Vec::new();

    if polite {
        markers.push("[Polite]");
    }

    if negative {
        let lower = phrase.to_lowercase();

        if let Some(&(pattern, replacement)) =
            NEGATIONS.iter().find(|&&(pattern, _)| lower.contains(pattern))
        {
            phrase = phrase.replacen(pattern, replacement, 1);
        } else if lower.starts_with("i ") {
            if let Some((subject, rest)) = phrase.split_once(' ') {
                phrase = format!("{subject} don't {rest}");
            }
        } else {
            markers.insert(0, "[Negative]");
        }
    }

    if markers.is_empty() {
        phrase
    } else {
        format!("{} {}", markers.join(" "), phrase)
    }
}

/// Extract the base verb token from a definition string.
///
/// The leading "a"/"the" rejection is a crude filter against noun-phrase
/// glosses; it also rejects genuine verbs that happen to start with the
/// letter a. Preserved as-is.
fn extract_base_verb(definition: &str) -> Option<String> {
    let first = definition.split(';').next()?.trim();
    let first = first.strip_prefix("to ").unwrap_or(first).trim();

    let first = match first.find('(') {
        Some(index) => first[..index].trim(),
        None => first,
    };

    let first = first.strip_prefix("be ").unwrap_or(first).trim();

    let word = first.split_whitespace().next()?.to_lowercase();

    if word.is_empty() || word.starts_with('a') || word.starts_with("the") {
        return None;
    }

    Some(word)
}

fn is_vowel(c: u8) -> bool {
    matches!(c | 0x20, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Length-based approximation of the stress rule for doubling a final
/// consonant. Not real syllable analysis.
fn should_double_consonant(verb: &str) -> bool {
    let bytes = verb.as_bytes();

    let Some(&last) = bytes.last() else {
        return false;
    };

    if bytes.len() < 2 || matches!(last, b'w' | b'x' | b'y') {
        return false;
    }

    bytes.len() <= 4
}

fn ends_in_doubling_position(verb: &str) -> bool {
    let bytes = verb.as_bytes();

    if bytes.len() < 2 {
        return false;
    }

    let last = bytes[bytes.len() - 1];
    let second_last = bytes[bytes.len() - 2];
    !is_vowel(last) && is_vowel(second_last) && should_double_consonant(verb)
}

fn ends_in_consonant_plus(verb: &str, suffix: char) -> bool {
    let bytes = verb.as_bytes();
    bytes.len() >= 2
        && bytes[bytes.len() - 1] == suffix as u8
        && !is_vowel(bytes[bytes.len() - 2])
}

fn regular_past(verb: &str) -> String {
    if verb.ends_with('e') {
        return format!("{verb}d");
    }

    if ends_in_consonant_plus(verb, 'y') {
        return format!("{}ied", &verb[..verb.len() - 1]);
    }

    if ends_in_doubling_position(verb) {
        let last = verb.as_bytes()[verb.len() - 1] as char;
        return format!("{verb}{last}ed");
    }

    format!("{verb}ed")
}

fn regular_present_third(verb: &str) -> String {
    if verb.ends_with('s')
        || verb.ends_with('z')
        || verb.ends_with('x')
        || verb.ends_with("ch")
        || verb.ends_with("sh")
    {
        return format!("{verb}es");
    }

    if ends_in_consonant_plus(verb, 'y') {
        return format!("{}ies", &verb[..verb.len() - 1]);
    }

    if ends_in_consonant_plus(verb, 'o') {
        return format!("{verb}es");
    }

    format!("{verb}s")
}

fn regular_gerund(verb: &str) -> String {
    if verb.ends_with("ie") {
        return format!("{}ying", &verb[..verb.len() - 2]);
    }

    if verb.ends_with('e') && !verb.ends_with("ee") && !verb.ends_with("ye") && !verb.ends_with("oe")
    {
        return format!("{}ing", &verb[..verb.len() - 1]);
    }

    if ends_in_doubling_position(verb) {
        let last = verb.as_bytes()[verb.len() - 1] as char;
        return format!("{verb}{last}ing");
    }

    format!("{verb}ing")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
