//! Synthetic identities and filler text for the seed tool.

use chrono::{NaiveDateTime, TimeDelta, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alex", "Amara", "Ben", "Bianca", "Casey", "Dana", "Elena", "Femi",
    "Grace", "Hugo", "Imani", "Jonas", "Kira", "Lars", "Maya", "Nadia",
    "Oscar", "Priya", "Quinn", "Rosa", "Sam", "Tariq", "Uma", "Viktor",
    "Wren", "Yusuf", "Zofia",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Baranov", "Calloway", "Duarte", "Eriksen", "Fontaine",
    "Gallagher", "Hargrove", "Ibarra", "Jensen", "Kowalski", "Lindqvist",
    "Moreau", "Nakamura", "Okafor", "Petrov", "Quintana", "Reyes",
    "Santiago", "Thorne", "Ueda", "Vasquez", "Whitfield", "Zhang",
];

const EMAIL_DOMAINS: &[&str] =
    &["example.com", "example.org", "example.net", "mail.test"];

const COMPANY_STEMS: &[&str] = &[
    "Ironwood", "Bluepeak", "Lanternfish", "Quartz", "Harborlight",
    "Foxglove", "Stonebridge", "Nightjar", "Copperline", "Willowmere",
    "Driftwood", "Emberfield",
];

const COMPANY_SUFFIXES: &[&str] = &[
    "Labs", "Collective", "Works", "Guild", "Studio", "Partners", "Union",
    "Foundry",
];

const BUZZ_ADJECTIVES: &[&str] = &[
    "Open", "Community", "Creative", "Collaborative", "Grassroots",
    "Seasonal", "Regional", "Annual",
];

const BUZZ_NOUNS: &[&str] = &[
    "Volunteer", "Outreach", "Art", "Game", "Charity", "Developer",
    "Neighborhood", "Maker",
];

const BUZZ_TAILS: &[&str] = &[
    "Meetup", "Jam", "Drive", "Workshop", "Showcase", "Night", "Summit",
    "Sprint",
];

const STREETS: &[&str] = &[
    "Maplewood Ave", "Cedar Hill Rd", "Juniper St", "Old Mill Ln",
    "Birchwood Dr", "Harbor View Blvd", "Foxtail Ct", "Larkspur Way",
];

const CITIES: &[&str] = &[
    "Riverton", "Ashford", "Lakewood", "Millbrook", "Fairview", "Oakhaven",
    "Brookfield", "Norwood",
];

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing",
    "elit", "sed", "do", "eiusmod", "tempor", "incididunt", "ut", "labore",
    "et", "dolore", "magna", "aliqua", "enim", "ad", "minim", "veniam",
    "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat",
];

/// An 18-digit discord-like identifier.
pub fn discord_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.random_range(100_000_000_000_000_000_u64..=999_999_999_999_999_999)
        .to_string()
}

pub fn name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {}",
        FIRST_NAMES.choose(rng).unwrap(),
        LAST_NAMES.choose(rng).unwrap()
    )
}

pub fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}.{}{}@{}",
        FIRST_NAMES.choose(rng).unwrap().to_lowercase(),
        LAST_NAMES.choose(rng).unwrap().to_lowercase(),
        rng.random_range(1..100),
        EMAIL_DOMAINS.choose(rng).unwrap()
    )
}

pub fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "({:03}) {:03}-{:04}",
        rng.random_range(200..1000),
        rng.random_range(200..1000),
        rng.random_range(0..10_000)
    )
}

pub fn company<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {}",
        COMPANY_STEMS.choose(rng).unwrap(),
        COMPANY_SUFFIXES.choose(rng).unwrap()
    )
}

/// Event-title style phrase, e.g. "Grassroots Art Jam".
pub fn catch_phrase<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        BUZZ_ADJECTIVES.choose(rng).unwrap(),
        BUZZ_NOUNS.choose(rng).unwrap(),
        BUZZ_TAILS.choose(rng).unwrap()
    )
}

pub fn address<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {}, {} {:05}",
        rng.random_range(1..1000),
        STREETS.choose(rng).unwrap(),
        CITIES.choose(rng).unwrap(),
        rng.random_range(10_000..100_000)
    )
}

/// A capitalized sentence of `words` lorem words.
pub fn sentence<R: Rng + ?Sized>(rng: &mut R, words: usize) -> String {
    let mut out = String::new();
    for i in 0..words {
        let word = LOREM.choose(rng).unwrap();
        if i == 0 {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.push_str(chars.as_str());
            }
        } else {
            out.push(' ');
            out.push_str(word);
        }
    }
    out.push('.');
    out
}

/// Filler text of at most `max_chars` characters.
pub fn text<R: Rng + ?Sized>(rng: &mut R, max_chars: usize) -> String {
    let mut out = String::new();
    loop {
        let word = LOREM.choose(rng).unwrap();
        if out.len() + word.len() + 1 > max_chars {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// A timestamp uniformly distributed within a year of now, either way.
pub fn date_time_within_year<R: Rng + ?Sized>(rng: &mut R) -> NaiveDateTime {
    let offset = rng.random_range(-31_536_000_i64..=31_536_000);
    Utc::now().naive_utc() + TimeDelta::seconds(offset)
}
