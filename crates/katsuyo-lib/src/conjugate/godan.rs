//! The five-vowel-row conversion tables for godan verbs.

#[derive(Debug, Clone, Copy)]
pub struct Godan {
    pub a: &'static str,
    pub i: &'static str,
    pub u: &'static str,
    pub e: &'static str,
    pub o: &'static str,
    pub te: &'static str,
    pub past: &'static str,
}

/// The U godan table.
pub static U: &Godan = &Godan {
    a: "わ",
    i: "い",
    u: "う",
    e: "え",
    o: "お",
    te: "って",
    past: "った",
};

/// The TSU godan table.
pub static TSU: &Godan = &Godan {
    a: "た",
    i: "ち",
    u: "つ",
    e: "て",
    o: "と",
    te: "って",
    past: "った",
};

/// The RU godan table.
pub static RU: &Godan = &Godan {
    a: "ら",
    i: "り",
    u: "る",
    e: "れ",
    o: "ろ",
    te: "って",
    past: "った",
};

/// The KU godan table.
pub static KU: &Godan = &Godan {
    a: "か",
    i: "き",
    u: "く",
    e: "け",
    o: "こ",
    te: "いて",
    past: "いた",
};

/// The GU godan table.
pub static GU: &Godan = &Godan {
    a: "が",
    i: "ぎ",
    u: "ぐ",
    e: "げ",
    o: "ご",
    te: "いで",
    past: "いだ",
};

/// The SU godan table.
pub static SU: &Godan = &Godan {
    a: "さ",
    i: "し",
    u: "す",
    e: "せ",
    o: "そ",
    te: "して",
    past: "した",
};

/// The NU godan table.
pub static NU: &Godan = &Godan {
    a: "な",
    i: "に",
    u: "ぬ",
    e: "ね",
    o: "の",
    te: "んで",
    past: "んだ",
};

/// The BU godan table.
pub static BU: &Godan = &Godan {
    a: "ば",
    i: "び",
    u: "ぶ",
    e: "べ",
    o: "ぼ",
    te: "んで",
    past: "んだ",
};

/// The MU godan table.
pub static MU: &Godan = &Godan {
    a: "ま",
    i: "み",
    u: "む",
    e: "め",
    o: "も",
    te: "んで",
    past: "んだ",
};

/// Fallback table for endings outside the u-row.
pub static DEFAULT: &Godan = &Godan {
    a: "あ",
    i: "い",
    u: "う",
    e: "え",
    o: "お",
    te: "て",
    past: "た",
};

impl Godan {
    /// Look up the row table for a dictionary-form ending.
    pub fn for_ending(c: char) -> &'static Godan {
        match c {
            'う' => U,
            'つ' => TSU,
            'る' => RU,
            'く' => KU,
            'ぐ' => GU,
            'す' => SU,
            'ぬ' => NU,
            'ぶ' => BU,
            'む' => MU,
            _ => DEFAULT,
        }
    }

    pub(crate) const ALL: &'static [&'static Godan] = &[U, TSU, RU, KU, GU, SU, NU, BU, MU, DEFAULT];
}
