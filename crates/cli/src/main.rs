use anyhow::{bail, Result};
use clap::Parser;
use katsuyo_lib::api::{self, ConjugateRequest, Conjugations, MemoryWordStore};
use katsuyo_lib::ConjugationEntry;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// Dictionary-form verb to conjugate.
    verb: String,
    /// Apply the negative modifier to every form.
    #[arg(long)]
    negative: bool,
    /// Apply the polite modifier to every form.
    #[arg(long)]
    polite: bool,
    /// English definition of the verb, used to derive English phrasing.
    /// Without it the generic fallback phrases are used.
    #[arg(long)]
    definition: Option<String>,
    /// Print the raw response as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    let mut store = MemoryWordStore::new();

    if let Some(definition) = &args.definition {
        store.insert(args.verb.clone(), "verb", definition.clone());
    }

    let request = ConjugateRequest {
        verb: args.verb,
        negative: args.negative,
        polite: args.polite,
    };

    let response = api::handle(&store, &request);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if !response.valid {
        bail!("{}", response.error.as_deref().unwrap_or("invalid request"));
    }

    println!("{} ({})", response.verb, response.verb_type);

    let Some(conjugations) = &response.conjugations else {
        return Ok(());
    };

    print_conjugations(conjugations);
    Ok(())
}

fn print_conjugations(conjugations: &Conjugations) {
    let tenses = &conjugations.tenses;

    let sections: [(&str, Vec<(&str, &ConjugationEntry)>); 6] = [
        (
            "time",
            vec![
                ("present", &tenses.time.present),
                ("past", &tenses.time.past),
                ("future", &tenses.time.future),
            ],
        ),
        (
            "aspect",
            vec![
                ("simple", &tenses.aspect.simple),
                ("progressive", &tenses.aspect.progressive),
                ("perfect", &tenses.aspect.perfect),
                ("perfect progressive", &tenses.aspect.perfect_progressive),
            ],
        ),
        (
            "mood",
            vec![
                ("indicative", &tenses.mood.indicative),
                ("subjunctive", &tenses.mood.subjunctive),
                ("conditional", &tenses.mood.conditional),
                ("imperative", &tenses.mood.imperative),
                ("volitional", &tenses.mood.volitional),
            ],
        ),
        (
            "modals",
            vec![
                ("potential", &tenses.modals.potential),
                ("causative", &tenses.modals.causative),
                ("deontic", &tenses.modals.deontic),
            ],
        ),
        ("desire", vec![("subject", &tenses.desire.subject)]),
        (
            "voice",
            vec![
                ("active", &conjugations.voice.active),
                ("passive", &conjugations.voice.passive),
            ],
        ),
    ];

    for (section, forms) in sections {
        println!("{section}:");

        for (name, entry) in forms {
            if entry.alts.is_empty() {
                println!("  {name}: {} / {}", entry.japanese, entry.english);
            } else {
                println!(
                    "  {name}: {} ({}) / {}",
                    entry.japanese,
                    entry.alts.join(" / "),
                    entry.english
                );
            }
        }
    }
}
