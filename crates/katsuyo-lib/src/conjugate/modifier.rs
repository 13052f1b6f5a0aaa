//! The modifier transducer.
//!
//! Negation and politeness are applied to an already-generated table by
//! inspecting each entry's Japanese surface string, not the category that
//! produced it. The family detection below is effectively a second, weaker
//! classifier: two categories whose base forms share a suffix receive the
//! same treatment. That property is intentional and pinned by tests.

use crate::conjugate::generate::Stems;
use crate::conjugate::{ConjugationEntry, ConjugationTable, VerbClass};
use crate::english;

/// The form family inferred from a base-form surface string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Past,
    Progressive,
    Conditional,
    Volitional,
    DerivedRu,
    Perfect,
    Deontic,
    Desire,
    Present,
}

/// Infer the family of a generated surface string. Ordered; first match
/// wins.
fn detect(surface: &str, dictionary: &str) -> Family {
    if surface.ends_with('た') || surface.ends_with('だ') {
        return Family::Past;
    }

    if surface.ends_with("ている") {
        return Family::Progressive;
    }

    if surface.ends_with('ば') {
        return Family::Conditional;
    }

    if surface.ends_with("よう") || surface.ends_with("おう") {
        return Family::Volitional;
    }

    // Catches the potential, causative and passive derivations, which are
    // る-verbs in their own right.
    if surface.ends_with("られる") || (surface.ends_with('る') && surface != dictionary) {
        return Family::DerivedRu;
    }

    if surface.contains("ばかり") {
        return Family::Perfect;
    }

    if surface.contains("ければならない") {
        return Family::Deontic;
    }

    if surface.contains("たい") {
        return Family::Desire;
    }

    Family::Present
}

/// Re-derive a modified surface string for a regular verb.
fn rewrite(surface: &str, dictionary: &str, stems: &Stems<'_>, negative: bool, polite: bool) -> String {
    match detect(surface, dictionary) {
        Family::Past => {
            if negative && polite {
                format!("{}ませんでした", stems.masu())
            } else if negative {
                format!("{}かった", stems.negative())
            } else {
                format!("{}ました", stems.masu())
            }
        }
        Family::Progressive => {
            let te = stems.te();

            if negative && polite {
                format!("{te}いません")
            } else if negative {
                format!("{te}いない")
            } else {
                format!("{te}います")
            }
        }
        Family::Conditional => {
            if negative {
                format!("{}ければ", stems.negative())
            } else {
                // Politeness is not distinctly marked on the conditional.
                surface.to_owned()
            }
        }
        Family::Volitional => {
            if negative && polite {
                format!("{}ません", stems.masu())
            } else if negative {
                format!("{}い", stems.negative())
            } else {
                format!("{}ましょう", stems.masu())
            }
        }
        Family::DerivedRu => {
            let mut stem = surface.to_owned();
            stem.pop();

            if negative && polite {
                format!("{stem}ません")
            } else if negative {
                format!("{stem}ない")
            } else {
                format!("{stem}ます")
            }
        }
        Family::Perfect => {
            if negative {
                format!("{}かったばかり", stems.negative())
            } else {
                format!("{}ましたばかり", stems.masu())
            }
        }
        Family::Deontic => {
            if negative && polite {
                format!("{}くてもいいです", stems.negative())
            } else if negative {
                format!("{}くてもいい", stems.negative())
            } else {
                format!("{}ければなりません", stems.negative())
            }
        }
        Family::Desire => {
            if negative && polite {
                format!("{}たくないです", stems.masu())
            } else if negative {
                format!("{}たくない", stems.masu())
            } else {
                format!("{}たいです", stems.masu())
            }
        }
        Family::Present => {
            if negative && polite {
                format!("{}ません", stems.masu())
            } else if negative {
                format!("{}い", stems.negative())
            } else {
                format!("{}ます", stems.masu())
            }
        }
    }
}

/// する mirrors the same families with literal strings.
fn rewrite_suru(surface: &str, negative: bool, polite: bool) -> String {
    let pick = |neg_pol: &str, neg: &str, pol: &str| -> String {
        if negative && polite {
            neg_pol.to_owned()
        } else if negative {
            neg.to_owned()
        } else {
            pol.to_owned()
        }
    };

    if surface.ends_with("した") {
        return pick("しませんでした", "しなかった", "しました");
    }

    if surface.ends_with("している") {
        return pick("していません", "していない", "しています");
    }

    if surface.ends_with("すれば") {
        if negative {
            return "しなければ".to_owned();
        }

        return surface.to_owned();
    }

    if surface.ends_with("しよう") {
        return pick("しません", "しない", "しましょう");
    }

    if surface.contains("ばかり") {
        return pick("しなかったばかり", "しなかったばかり", "しましたばかり");
    }

    if surface.contains("たい") {
        return pick("したくないです", "したくない", "したいです");
    }

    if surface.contains("ければならない") {
        return pick("しなくてもいいです", "しなくてもいい", "しなければなりません");
    }

    pick("しません", "しない", "します")
}

/// 来る mirrors the same families with literal strings. Detection here uses
/// containment rather than suffixes, so 来たばかり and 来たい are captured
/// by the past family first.
fn rewrite_kuru(surface: &str, negative: bool, polite: bool) -> String {
    let pick = |neg_pol: &str, neg: &str, pol: &str| -> String {
        if negative && polite {
            neg_pol.to_owned()
        } else if negative {
            neg.to_owned()
        } else {
            pol.to_owned()
        }
    };

    if surface.contains("来た") || surface.contains("きた") {
        return pick("来ませんでした", "来なかった", "来ました");
    }

    if surface.contains("来ている") || surface.contains("きている") {
        return pick("来ていません", "来ていない", "来ています");
    }

    if surface.contains("来れば") {
        if negative {
            return "来なければ".to_owned();
        }

        return surface.to_owned();
    }

    if surface.contains("来よう") {
        return pick("来ません", "来ない", "来ましょう");
    }

    if surface.contains("ばかり") {
        return pick("来なかったばかり", "来なかったばかり", "来ましたばかり");
    }

    if surface.contains("たい") {
        return pick("来たくないです", "来たくない", "来たいです");
    }

    if surface.contains("ければならない") {
        return pick("来なくてもいいです", "来なくてもいい", "来なければなりません");
    }

    pick("来ません", "来ない", "来ます")
}

/// Apply the negative and polite modifiers to every entry of a generated
/// table, producing a new table. With neither flag set the input table is
/// returned unchanged.
pub fn apply_modifiers(
    table: &ConjugationTable,
    verb: &str,
    class: VerbClass,
    negative: bool,
    polite: bool,
) -> ConjugationTable {
    if !negative && !polite {
        return table.clone();
    }

    let stems = Stems::new(verb, class);

    let rewrite_surface = |surface: &str| -> String {
        if surface.is_empty() {
            return String::new();
        }

        match class {
            VerbClass::IrregularSuru => rewrite_suru(surface, negative, polite),
            VerbClass::IrregularKuru => rewrite_kuru(surface, negative, polite),
            _ => rewrite(surface, verb, &stems, negative, polite),
        }
    };

    let mut out = ConjugationTable::new();

    for (form, entry) in table.iter() {
        out.insert(
            form,
            ConjugationEntry {
                english: english::modify(&entry.english, negative, polite),
                japanese: rewrite_surface(&entry.japanese),
                alts: entry.alts.iter().map(|alt| rewrite_surface(alt)).collect(),
            },
        );
    }

    out
}
