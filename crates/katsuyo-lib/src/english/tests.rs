use super::{fallback_phrase, modify, EnglishConjugator};
use crate::conjugate::Form;

fn conjugator(definition: &str) -> EnglishConjugator {
    EnglishConjugator::from_definition(definition).expect("no base verb extracted")
}

#[test]
fn extraction() {
    let ec = conjugator("to eat; to consume");
    assert_eq!(ec.base(), "eat");
    assert!(ec.is_irregular());

    let ec = conjugator("to walk");
    assert_eq!(ec.base(), "walk");
    assert!(!ec.is_irregular());

    // Only the first clause counts, and parentheticals are stripped.
    let ec = conjugator("to be surprised (at); to wonder");
    assert_eq!(ec.base(), "surprised");

    // First whitespace token only.
    let ec = conjugator("to give up hope");
    assert_eq!(ec.base(), "give");
    assert!(ec.is_irregular());
}

#[test]
fn extraction_rejects() {
    assert!(EnglishConjugator::from_definition("").is_none());
    assert!(EnglishConjugator::from_definition("   ").is_none());
    assert!(EnglishConjugator::from_definition("the end").is_none());
    // The crude prefix filter rejects any token starting with the letter a,
    // including genuine verbs. Pinned behavior.
    assert!(EnglishConjugator::from_definition("to ask").is_none());
    assert!(EnglishConjugator::from_definition("a cat").is_none());
}

#[test]
fn irregular_forms() {
    let ec = conjugator("to eat");
    assert_eq!(ec.past(), "ate");
    assert_eq!(ec.past_participle(), "eaten");
    assert_eq!(ec.present_third(), "eats");
    assert_eq!(ec.gerund(), "eating");

    let ec = conjugator("to run");
    assert_eq!(ec.past(), "ran");
    assert_eq!(ec.gerund(), "running");
}

#[test]
fn regular_past() {
    assert_eq!(conjugator("to walk").past(), "walked");
    // Trailing e elides.
    assert_eq!(conjugator("to live").past(), "lived");
    // Consonant + y becomes ied.
    assert_eq!(conjugator("to study").past(), "studied");
    // Vowel + y does not.
    assert_eq!(conjugator("to play").past(), "played");
    // Short verbs double the final consonant.
    assert_eq!(conjugator("to stop").past(), "stopped");
    // Longer verbs do not (the length heuristic, not real stress analysis).
    assert_eq!(conjugator("to visit").past(), "visited");
}

#[test]
fn regular_present_third() {
    assert_eq!(conjugator("to walk").present_third(), "walks");
    assert_eq!(conjugator("to watch").present_third(), "watches");
    assert_eq!(conjugator("to push").present_third(), "pushes");
    assert_eq!(conjugator("to fix").present_third(), "fixes");
    assert_eq!(conjugator("to study").present_third(), "studies");
    assert_eq!(conjugator("to echo").present_third(), "echoes");
}

#[test]
fn regular_gerund() {
    assert_eq!(conjugator("to walk").gerund(), "walking");
    // e drops.
    assert_eq!(conjugator("to live").gerund(), "living");
    // Except after ee, ye and oe.
    assert_eq!(conjugator("to flee").gerund(), "fleeing");
    assert_eq!(conjugator("to dye").gerund(), "dyeing");
    // ie becomes ying.
    assert_eq!(conjugator("to die").gerund(), "dying");
    // Doubling mirrors the past-tense rule.
    assert_eq!(conjugator("to stop").gerund(), "stopping");
    assert_eq!(conjugator("to visit").gerund(), "visiting");
}

#[test]
fn phrases() {
    let ec = conjugator("to eat");
    assert_eq!(ec.phrase(Form::Present), "I eat");
    assert_eq!(ec.phrase(Form::Past), "I ate");
    assert_eq!(ec.phrase(Form::Future), "I will eat");
    assert_eq!(ec.phrase(Form::Progressive), "I am eating");
    assert_eq!(ec.phrase(Form::Perfect), "I have eaten");
    assert_eq!(ec.phrase(Form::PerfectProgressive), "I have been eating");
    assert_eq!(ec.phrase(Form::Subjunctive), "I wish I ate");
    assert_eq!(ec.phrase(Form::Conditional), "If I eat");
    assert_eq!(ec.phrase(Form::Imperative), "Eat");
    assert_eq!(ec.phrase(Form::Volitional), "Let's eat");
    assert_eq!(ec.phrase(Form::Potential), "I can eat");
    assert_eq!(ec.phrase(Form::Causative), "I make you eat");
    assert_eq!(ec.phrase(Form::Deontic), "I must eat");
    assert_eq!(ec.phrase(Form::Desire), "I want to eat");
    assert_eq!(ec.phrase(Form::Passive), "It is eaten by me");
}

#[test]
fn fallback_phrases() {
    assert_eq!(fallback_phrase(Form::Present), "I do");
    assert_eq!(fallback_phrase(Form::Past), "I did");
    assert_eq!(fallback_phrase(Form::Imperative), "Do");
    assert_eq!(fallback_phrase(Form::Passive), "It is done by me");

    for form in Form::ALL {
        assert!(!fallback_phrase(form).is_empty());
    }
}

#[test]
fn negation() {
    assert_eq!(modify("I do", true, false), "I don't");
    assert_eq!(modify("I did", true, false), "I didn't");
    assert_eq!(modify("I wish I did", true, false), "I wish I didn't");
    assert_eq!(modify("I am eating", true, false), "I am not eating");
    assert_eq!(modify("I can eat", true, false), "I can't eat");
    assert_eq!(modify("I must eat", true, false), "I must not eat");
    assert_eq!(modify("I eat", true, false), "I don't eat");
    assert_eq!(modify("Do", true, false), "[Negative] Do");
}

#[test]
fn negation_is_naive_substring_substitution() {
    // The substitution list is tried in order against any occurrence, so
    // " do" fires inside "done" and "doing". Pinned, not fixed.
    assert_eq!(modify("It is done by me", true, false), "It is don'tne by me");
    assert_eq!(
        modify("I have been doing", true, false),
        "I have been don'ting"
    );
    assert_eq!(modify("I will do", true, false), "I will don't");
}

#[test]
fn politeness_is_a_label() {
    assert_eq!(modify("I eat", false, true), "[Polite] I eat");
    assert_eq!(modify("Do", true, true), "[Negative] [Polite] Do");
    assert_eq!(modify("I eat", true, true), "[Polite] I don't eat");
    assert_eq!(modify("", true, true), "");
}
