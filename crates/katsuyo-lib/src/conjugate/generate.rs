//! Base conjugation generator.

use crate::conjugate::godan::Godan;
use crate::conjugate::{ConjugationEntry, ConjugationTable, Form, VerbClass};
use crate::english::{self, EnglishConjugator};

use Form::*;

/// The computed stems of a regular verb.
///
/// Only meaningful for the ichidan and godan classes; irregular verbs go
/// through their own literal tables.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Stems<'a> {
    stem: &'a str,
    godan: &'static Godan,
    ichidan: bool,
}

impl<'a> Stems<'a> {
    pub(crate) fn new(verb: &'a str, class: VerbClass) -> Stems<'a> {
        let (stem, last) = split_last(verb);

        Stems {
            stem,
            godan: Godan::for_ending(last),
            ichidan: matches!(class, VerbClass::Ichidan),
        }
    }

    /// The 連用形 stem that ます attaches to.
    pub(crate) fn masu(&self) -> String {
        if self.ichidan {
            self.stem.to_owned()
        } else {
            format!("{}{}", self.stem, self.godan.i)
        }
    }

    /// The stem that ない attaches to.
    pub(crate) fn negative(&self) -> String {
        if self.ichidan {
            format!("{}な", self.stem)
        } else {
            format!("{}{}", self.stem, self.godan.a)
        }
    }

    /// Euphonic te-form.
    pub(crate) fn te(&self) -> String {
        if self.ichidan {
            format!("{}て", self.stem)
        } else {
            format!("{}{}", self.stem, self.godan.te)
        }
    }

    /// Euphonic plain past.
    pub(crate) fn past(&self) -> String {
        if self.ichidan {
            format!("{}た", self.stem)
        } else {
            format!("{}{}", self.stem, self.godan.past)
        }
    }

    fn conditional(&self) -> String {
        if self.ichidan {
            format!("{}れば", self.stem)
        } else {
            format!("{}{}ば", self.stem, self.godan.e)
        }
    }

    fn imperative(&self) -> String {
        if self.ichidan {
            format!("{}ろ", self.stem)
        } else {
            format!("{}{}", self.stem, self.godan.e)
        }
    }

    fn volitional(&self) -> String {
        if self.ichidan {
            format!("{}よう", self.stem)
        } else {
            format!("{}{}う", self.stem, self.godan.o)
        }
    }

    fn potential(&self) -> String {
        if self.ichidan {
            format!("{}られる", self.stem)
        } else {
            format!("{}{}る", self.stem, self.godan.e)
        }
    }

    fn causative(&self) -> String {
        if self.ichidan {
            format!("{}させる", self.stem)
        } else {
            format!("{}{}せる", self.stem, self.godan.a)
        }
    }

    fn passive(&self) -> String {
        if self.ichidan {
            format!("{}られた", self.stem)
        } else {
            format!("{}{}れた", self.stem, self.godan.a)
        }
    }
}

/// Split a word into everything up to its final character, and that final
/// character. The empty string yields a NUL ending, which maps to the
/// default godan row.
fn split_last(s: &str) -> (&str, char) {
    let mut it = s.chars();
    let last = it.next_back().unwrap_or('\0');
    (it.as_str(), last)
}

/// Generate the full base conjugation table for a classified verb.
pub fn generate(
    verb: &str,
    class: VerbClass,
    english: Option<&EnglishConjugator>,
) -> ConjugationTable {
    let phrase = |form: Form| -> String {
        match english {
            Some(conjugator) => conjugator.phrase(form),
            None => english::fallback_phrase(form).to_owned(),
        }
    };

    match class {
        VerbClass::IrregularSuru => suru_table(phrase),
        VerbClass::IrregularKuru => kuru_table(phrase),
        VerbClass::Ichidan | VerbClass::Godan => regular_table(verb, class, phrase),
    }
}

fn regular_table(verb: &str, class: VerbClass, phrase: impl Fn(Form) -> String) -> ConjugationTable {
    let stems = Stems::new(verb, class);
    let past = stems.past();
    let te = stems.te();

    let mut table = ConjugationTable::new();

    let mut insert = |form: Form, japanese: String| {
        table.insert(form, ConjugationEntry::new(phrase(form), japanese));
    };

    insert(Present, verb.to_owned());
    insert(Past, past.clone());
    insert(Future, verb.to_owned());

    insert(Simple, verb.to_owned());
    insert(Progressive, format!("{te}いる"));
    insert(Perfect, format!("{past}ばかり"));
    insert(PerfectProgressive, format!("{te}いる"));

    insert(Indicative, verb.to_owned());
    insert(Subjunctive, format!("{past}らいいのに"));
    insert(Imperative, stems.imperative());
    insert(Volitional, stems.volitional());

    insert(Potential, stems.potential());
    insert(Causative, stems.causative());
    insert(Deontic, format!("{}ければならない", stems.negative()));

    insert(Desire, format!("{}たい", stems.masu()));

    insert(Active, verb.to_owned());
    insert(Passive, stems.passive());

    table.insert(
        Conditional,
        ConjugationEntry::new(phrase(Conditional), stems.conditional())
            .with_alt(format!("{past}ら")),
    );

    table
}

fn suru_table(phrase: impl Fn(Form) -> String) -> ConjugationTable {
    let mut table = ConjugationTable::new();

    let mut insert = |form: Form, japanese: &str| {
        table.insert(form, ConjugationEntry::new(phrase(form), japanese));
    };

    insert(Present, "する");
    insert(Past, "した");
    insert(Future, "する");

    insert(Simple, "する");
    insert(Progressive, "している");
    insert(Perfect, "したばかり");
    insert(PerfectProgressive, "している");

    insert(Indicative, "する");
    insert(Subjunctive, "したらいいのに");
    insert(Volitional, "しよう");

    insert(Potential, "できる");
    insert(Causative, "させる");
    insert(Deontic, "しなければならない");

    insert(Desire, "したい");

    insert(Active, "する");
    insert(Passive, "された");

    table.insert(
        Conditional,
        ConjugationEntry::new(phrase(Conditional), "すれば").with_alt("したら"),
    );
    table.insert(
        Imperative,
        ConjugationEntry::new(phrase(Imperative), "しろ").with_alt("せよ"),
    );

    table
}

fn kuru_table(phrase: impl Fn(Form) -> String) -> ConjugationTable {
    let mut table = ConjugationTable::new();

    let mut insert = |form: Form, japanese: &str, alts: &[&str]| {
        let mut entry = ConjugationEntry::new(phrase(form), japanese);

        for alt in alts {
            entry = entry.with_alt(*alt);
        }

        table.insert(form, entry);
    };

    insert(Present, "来る", &["くる"]);
    insert(Past, "来た", &["きた"]);
    insert(Future, "来る", &["くる"]);

    insert(Simple, "来る", &["くる"]);
    insert(Progressive, "来ている", &["きている"]);
    insert(Perfect, "来たばかり", &[]);
    insert(PerfectProgressive, "来ている", &[]);

    insert(Indicative, "来る", &[]);
    insert(Subjunctive, "来たらいいのに", &[]);
    insert(Conditional, "来れば", &["来たら"]);
    insert(Imperative, "来い", &[]);
    insert(Volitional, "来よう", &[]);

    insert(Potential, "来られる", &[]);
    insert(Causative, "来させる", &[]);
    insert(Deontic, "来なければならない", &[]);

    insert(Desire, "来たい", &[]);

    insert(Active, "来る", &[]);
    insert(Passive, "来られた", &[]);

    table
}
