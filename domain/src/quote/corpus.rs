//! Offline fallback corpus.
//!
//! A static, keyword-indexed set of curated quote/author pairs served when
//! every remote provider has failed. Lookup is a case-insensitive exact
//! match on the normalized keyword; anything unrecognized draws from the
//! default set. Pure and total — `pick` always returns an entry.

use crate::core::keyword::Keyword;
use crate::quote::entities::ParsedQuote;
use rand::Rng;

type Entry = (&'static str, &'static str);

const MOTIVATION: &[Entry] = &[
    (
        "The distance between who you are and who you want to be is paved with daily effort.",
        "Harlan Reyes",
    ),
    (
        "Momentum is built one unremarkable morning at a time.",
        "Petra Lindqvist",
    ),
    (
        "You do not need permission to begin.",
        "Ezra Whitfield",
    ),
    (
        "Discipline is remembering what you wanted before you were tired.",
        "Corinne Vale",
    ),
];

const SUCCESS: &[Entry] = &[
    (
        "Success is a ledger of small debts paid on time.",
        "Augustin Ferro",
    ),
    (
        "The summit never moves; only your excuses do.",
        "Lena Okafor",
    ),
    (
        "Win quietly, and let the work make the announcement.",
        "Theodore Marsh",
    ),
];

const LOVE: &[Entry] = &[
    (
        "Love is attention that forgot to check the clock.",
        "Isadora Quinn",
    ),
    (
        "We are never taller than when we bend toward each other.",
        "Rafael Montes",
    ),
    (
        "The heart keeps no maps, only well-worn roads.",
        "Celeste Aubert",
    ),
];

const HAPPINESS: &[Entry] = &[
    (
        "Happiness is the art of wanting the morning you already have.",
        "Juniper Hale",
    ),
    (
        "Joy rarely knocks; it is usually already inside, waiting to be noticed.",
        "Omar Castellane",
    ),
    (
        "A contented mind travels light.",
        "Birgit Sommer",
    ),
];

const COURAGE: &[Entry] = &[
    (
        "Courage is fear that finished counting to three.",
        "Silas Thornberry",
    ),
    (
        "The brave are not unshaken; they simply move while shaking.",
        "Amara Diallo",
    ),
    (
        "Every door looks locked until someone leans on it.",
        "Nikolai Vestergaard",
    ),
];

const DEFAULT: &[Entry] = &[
    (
        "Every ending is a beginning wearing a disguise.",
        "Marguerite Solano",
    ),
    (
        "The world rewards those who show up twice.",
        "Dorian Ashe",
    ),
    (
        "Tend your own garden before judging the view.",
        "Felix Nakamura",
    ),
    (
        "Time is generous to the patient and merciless to the hesitant.",
        "Vivienne Castor",
    ),
];

/// Static quote corpus used when the provider chain is exhausted.
pub struct FallbackCorpus;

impl FallbackCorpus {
    /// Pick an entry for the keyword: uniformly at random among its class's
    /// curated entries, or among the default set when the keyword matches
    /// no known class.
    pub fn pick(keyword: &Keyword) -> ParsedQuote {
        let entries =
            Self::entries_for_class(&keyword.normalized()).unwrap_or(DEFAULT);
        let (quote, author) = entries[rand::rng().random_range(0..entries.len())];
        ParsedQuote {
            quote: quote.to_string(),
            author: author.to_string(),
        }
    }

    /// Entries curated for a keyword class, if the class is known.
    pub fn entries_for_class(class: &str) -> Option<&'static [Entry]> {
        match class {
            "motivation" => Some(MOTIVATION),
            "success" => Some(SUCCESS),
            "love" => Some(LOVE),
            "happiness" => Some(HAPPINESS),
            "courage" => Some(COURAGE),
            _ => None,
        }
    }

    /// Entries used when the keyword matches no known class.
    pub fn default_entries() -> &'static [Entry] {
        DEFAULT
    }
}
