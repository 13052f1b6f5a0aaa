//! Irregular English verb table.

/// The principal parts of an irregular English verb.
#[derive(Debug, Clone, Copy)]
pub struct IrregularVerb {
    pub base: &'static str,
    pub past: &'static str,
    pub past_participle: &'static str,
    pub present_third: &'static str,
    pub gerund: &'static str,
}

/// Look up an irregular verb by its lowercase base form.
pub fn lookup(base: &str) -> Option<&'static IrregularVerb> {
    let index = IRREGULAR.binary_search_by(|verb| verb.base.cmp(&base)).ok()?;
    Some(&IRREGULAR[index])
}

macro_rules! row {
    ($base:literal, $past:literal, $part:literal, $third:literal, $gerund:literal) => {
        IrregularVerb {
            base: $base,
            past: $past,
            past_participle: $part,
            present_third: $third,
            gerund: $gerund,
        }
    };
}

/// Sorted by base form for binary search.
#[rustfmt::skip]
static IRREGULAR: &[IrregularVerb] = &[
    row!("be", "was/were", "been", "is", "being"),
    row!("become", "became", "become", "becomes", "becoming"),
    row!("begin", "began", "begun", "begins", "beginning"),
    row!("break", "broke", "broken", "breaks", "breaking"),
    row!("bring", "brought", "brought", "brings", "bringing"),
    row!("build", "built", "built", "builds", "building"),
    row!("buy", "bought", "bought", "buys", "buying"),
    row!("catch", "caught", "caught", "catches", "catching"),
    row!("choose", "chose", "chosen", "chooses", "choosing"),
    row!("come", "came", "come", "comes", "coming"),
    row!("cost", "cost", "cost", "costs", "costing"),
    row!("cut", "cut", "cut", "cuts", "cutting"),
    row!("do", "did", "done", "does", "doing"),
    row!("draw", "drew", "drawn", "draws", "drawing"),
    row!("drink", "drank", "drunk", "drinks", "drinking"),
    row!("drive", "drove", "driven", "drives", "driving"),
    row!("eat", "ate", "eaten", "eats", "eating"),
    row!("fall", "fell", "fallen", "falls", "falling"),
    row!("feel", "felt", "felt", "feels", "feeling"),
    row!("find", "found", "found", "finds", "finding"),
    row!("fly", "flew", "flown", "flies", "flying"),
    row!("forget", "forgot", "forgotten", "forgets", "forgetting"),
    row!("get", "got", "gotten", "gets", "getting"),
    row!("give", "gave", "given", "gives", "giving"),
    row!("go", "went", "gone", "goes", "going"),
    row!("grow", "grew", "grown", "grows", "growing"),
    row!("have", "had", "had", "has", "having"),
    row!("hear", "heard", "heard", "hears", "hearing"),
    row!("hide", "hid", "hidden", "hides", "hiding"),
    row!("hit", "hit", "hit", "hits", "hitting"),
    row!("hold", "held", "held", "holds", "holding"),
    row!("keep", "kept", "kept", "keeps", "keeping"),
    row!("know", "knew", "known", "knows", "knowing"),
    row!("leave", "left", "left", "leaves", "leaving"),
    row!("lend", "lent", "lent", "lends", "lending"),
    row!("let", "let", "let", "lets", "letting"),
    row!("lose", "lost", "lost", "loses", "losing"),
    row!("make", "made", "made", "makes", "making"),
    row!("mean", "meant", "meant", "means", "meaning"),
    row!("meet", "met", "met", "meets", "meeting"),
    row!("pay", "paid", "paid", "pays", "paying"),
    row!("put", "put", "put", "puts", "putting"),
    row!("read", "read", "read", "reads", "reading"),
    row!("ride", "rode", "ridden", "rides", "riding"),
    row!("ring", "rang", "rung", "rings", "ringing"),
    row!("rise", "rose", "risen", "rises", "rising"),
    row!("run", "ran", "run", "runs", "running"),
    row!("say", "said", "said", "says", "saying"),
    row!("see", "saw", "seen", "sees", "seeing"),
    row!("sell", "sold", "sold", "sells", "selling"),
    row!("send", "sent", "sent", "sends", "sending"),
    row!("set", "set", "set", "sets", "setting"),
    row!("show", "showed", "shown", "shows", "showing"),
    row!("shut", "shut", "shut", "shuts", "shutting"),
    row!("sing", "sang", "sung", "sings", "singing"),
    row!("sit", "sat", "sat", "sits", "sitting"),
    row!("sleep", "slept", "slept", "sleeps", "sleeping"),
    row!("speak", "spoke", "spoken", "speaks", "speaking"),
    row!("spend", "spent", "spent", "spends", "spending"),
    row!("stand", "stood", "stood", "stands", "standing"),
    row!("swim", "swam", "swum", "swims", "swimming"),
    row!("take", "took", "taken", "takes", "taking"),
    row!("teach", "taught", "taught", "teaches", "teaching"),
    row!("tear", "tore", "torn", "tears", "tearing"),
    row!("tell", "told", "told", "tells", "telling"),
    row!("think", "thought", "thought", "thinks", "thinking"),
    row!("throw", "threw", "thrown", "throws", "throwing"),
    row!("understand", "understood", "understood", "understands", "understanding"),
    row!("wake", "woke", "woken", "wakes", "waking"),
    row!("wear", "wore", "worn", "wears", "wearing"),
    row!("win", "won", "won", "wins", "winning"),
    row!("write", "wrote", "written", "writes", "writing"),
];
