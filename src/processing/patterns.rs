// Ordered pattern tables for free-text field extraction.
// Each field gets a literal priority list of (regex, validator) pairs; the
// matcher walks them in order and the first accepted capture wins.

use lazy_static::lazy_static;
use regex::Regex;

/// A compiled pattern paired with the guard that accepts and shapes its capture.
pub struct FieldPattern {
    pub label: &'static str,
    pub regex: Regex,
    pub accept: fn(&str) -> Option<String>,
}

impl FieldPattern {
    fn new(label: &'static str, pattern: &str, accept: fn(&str) -> Option<String>) -> Self {
        Self {
            label,
            regex: Regex::new(pattern).unwrap(),
            accept,
        }
    }
}

lazy_static! {
    pub static ref PASSPORT_NUMBER_PATTERNS: Vec<FieldPattern> = vec![
        FieldPattern::new(
            "passport-no",
            r"(?i)passport\s*(?:no\.?|number|num\.?|#)\s*[:#.]?\s*([A-Z0-9](?:[ \-]?[A-Z0-9])*)",
            accept_passport_number,
        ),
        FieldPattern::new(
            "document-no",
            r"(?i)\b(?:document|doc\.?)\s*(?:no\.?|number|num\.?|#)\s*[:#.]?\s*([A-Z0-9](?:[ \-]?[A-Z0-9])*)",
            accept_passport_number,
        ),
        FieldPattern::new(
            "passport-colon",
            r"(?i)\bpassport\s*[:#]\s*([A-Z0-9](?:[ \-]?[A-Z0-9])*)",
            accept_passport_number,
        ),
        // Bare letter-prefixed numbers as printed next to the photo page
        FieldPattern::new(
            "bare-number",
            r"\b([A-Z]{1,2}[0-9]{6,9})\b",
            accept_passport_number,
        ),
    ];

    pub static ref NAME_PATTERNS: Vec<FieldPattern> = vec![
        FieldPattern::new(
            // Anchored so "Given Name:" / "Last Name:" fall through to the split strategy
            "name-label",
            r"(?im)^[ \t]*(?:full[ \t]+)?name[ \t]*[:\-]\s*([^\n]+)",
            accept_name,
        ),
        FieldPattern::new(
            "holder-label",
            r"(?i)\bholder\s*[:\-]\s*([^\n]+)",
            accept_name,
        ),
    ];

    pub static ref SURNAME_PATTERNS: Vec<FieldPattern> = vec![
        FieldPattern::new("surname", r"(?i)\bsurname\s*[:\-]?\s*([^\n]+)", accept_name_part),
        FieldPattern::new("family-name", r"(?i)\bfamily\s+name\s*[:\-]?\s*([^\n]+)", accept_name_part),
        FieldPattern::new("last-name", r"(?i)\blast\s+name\s*[:\-]?\s*([^\n]+)", accept_name_part),
    ];

    pub static ref GIVEN_NAME_PATTERNS: Vec<FieldPattern> = vec![
        FieldPattern::new("given-names", r"(?i)\bgiven\s+names?\s*[:\-]?\s*([^\n]+)", accept_name_part),
        FieldPattern::new("first-name", r"(?i)\bfirst\s+names?\s*[:\-]?\s*([^\n]+)", accept_name_part),
    ];

    // Lines made only of 2-4 upper-case words, as names are printed on the data page
    pub static ref UNLABELLED_NAME_PATTERNS: Vec<FieldPattern> = vec![
        FieldPattern::new(
            "upper-case-line",
            r"(?m)^[ \t]*(\p{Lu}[\p{Lu}'\-]+(?:[ \t]+\p{Lu}[\p{Lu}'\-]+){1,3})[ \t\r]*$",
            accept_name,
        ),
    ];

    pub static ref NATIONALITY_PATTERNS: Vec<FieldPattern> = vec![
        FieldPattern::new(
            "nationality",
            r"(?i)\bnationality\s*[:\-/]?\s*([\p{L}][\p{L} \t'\-]*)",
            accept_nationality,
        ),
        FieldPattern::new(
            "citizenship",
            r"(?i)\bcitizenship\s*[:\-/]?\s*([\p{L}][\p{L} \t'\-]*)",
            accept_nationality,
        ),
        FieldPattern::new(
            "citizen-of",
            r"(?i)\bcitizen\s+of\s+([\p{L}][\p{L} \t'\-]*)",
            accept_nationality,
        ),
        FieldPattern::new("nat-code", r"(?i)\bnat\.?\s*[:/]\s*([A-Z]{3})\b", accept_nationality),
    ];

    pub static ref PLACE_OF_BIRTH_PATTERNS: Vec<FieldPattern> = vec![
        FieldPattern::new(
            "place-of-birth",
            r"(?i)\bplace\s+of\s+birth\s*[:\-]?\s*([^\n]+)",
            accept_place,
        ),
        FieldPattern::new("birthplace", r"(?i)\bbirth\s*place\s*[:\-]?\s*([^\n]+)", accept_place),
        FieldPattern::new("pob", r"(?i)\bP\.?O\.?B\b\.?\s*[:\-]?\s*([^\n]+)", accept_place),
        FieldPattern::new("born-in", r"(?i)\bborn\s+(?:in|at)\s+([^\n,;]+)", accept_place),
    ];

    pub static ref SEX_PATTERNS: Vec<FieldPattern> = vec![
        FieldPattern::new(
            "sex",
            r"(?i)\b(?:sex|gender)\s*[:/\-]?\s*(male|female|m|f)\b",
            accept_sex,
        ),
        FieldPattern::new(
            "sex-multilingual",
            r"(?i)\b(?:sexe|sexo|geschlecht|genre)\s*[:/\-]?\s*(masculino|masculin|femenino|feminine|feminin|homme|femme|hombre|mujer|h|m|f)\b",
            accept_sex,
        ),
    ];

    /// Date-shaped substrings, in table priority order for overlap resolution.
    pub static ref DATE_PATTERNS: Vec<Regex> = vec![
        // 15/03/1985, 15.03.85, 15-3-1985
        Regex::new(r"\b(\d{1,2}[/.\-]\d{1,2}[/.\-](?:\d{4}|\d{2}))\b").unwrap(),
        // 1985-03-15
        Regex::new(r"\b(\d{4}[/.\-]\d{1,2}[/.\-]\d{1,2})\b").unwrap(),
        // 15 Mar 1985, 15-MAR-1985
        Regex::new(r"(?i)\b(\d{1,2}[ \t\-/]+(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?,?[ \t\-/]+\d{4})\b").unwrap(),
        // March 15, 1985
        Regex::new(r"(?i)\b((?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?[ \t]+\d{1,2},?[ \t]+\d{4})\b").unwrap(),
    ];
}

// Words that introduce a field rather than being a value.
const LABEL_WORDS: &[&str] = &[
    "NAME", "NAMES", "SURNAME", "GIVEN", "FIRST", "LAST", "DATE", "BIRTH", "PLACE", "SEX",
    "GENDER", "NATIONALITY", "CITIZENSHIP", "PASSPORT", "DOCUMENT", "ISSUE", "ISSUED",
    "EXPIRY", "EXPIRATION", "AUTHORITY", "SIGNATURE", "NUMBER", "NO", "DOB", "POB", "TYPE",
    "CODE", "VALID", "UNTIL", "HOLDER",
];

// Document header words that show up as upper-case lines but are never names.
const HEADER_WORDS: &[&str] = &[
    "PASSPORT", "PASSEPORT", "PASAPORTE", "REPUBLIC", "REPUBLIQUE", "KINGDOM", "UNITED",
    "STATES", "EMIRATES", "GOVERNMENT", "MINISTRY", "FEDERAL", "TRAVEL", "IDENTITY", "CARD",
    "VISA", "PERMIT", "RESIDENCE", "WORK", "MEDICAL", "CERTIFICATE",
];

fn bare_word(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_uppercase()
}

fn is_label_word(token: &str) -> bool {
    LABEL_WORDS.contains(&bare_word(token).as_str())
}

fn is_header_word(token: &str) -> bool {
    HEADER_WORDS.contains(&bare_word(token).as_str())
}

/// True when the value opens with a field label such as "Date of Birth:".
pub fn is_field_label(text: &str) -> bool {
    text.split_whitespace().next().map_or(false, is_label_word)
}

fn is_name_token(token: &str) -> bool {
    token.chars().count() >= 2
        && token.chars().any(|c| c.is_alphabetic())
        && token
            .chars()
            .all(|c| c.is_alphabetic() || c == '\'' || c == '-' || c == '.')
}

/// A space only continues the number when the next group holds a digit,
/// so "A 1234567" is one number but "123456789 Date" stops before "Date".
pub fn accept_passport_number(raw: &str) -> Option<String> {
    let mut groups = raw.split_whitespace();
    let first = groups.next()?;
    let joined: String = std::iter::once(first)
        .chain(groups.take_while(|g| g.chars().any(|c| c.is_ascii_digit())))
        .collect();
    let cleaned: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_uppercase();
    let len = cleaned.len();
    if (6..=12).contains(&len) && cleaned.chars().any(|c| c.is_ascii_digit()) {
        Some(cleaned)
    } else {
        None
    }
}

/// 2-4 tokens, each at least two letters, no digits, no header or label words.
pub fn accept_name(raw: &str) -> Option<String> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if !(2..=4).contains(&tokens.len()) {
        return None;
    }
    if tokens
        .iter()
        .all(|t| is_name_token(t) && !is_label_word(t) && !is_header_word(t))
    {
        Some(tokens.join(" "))
    } else {
        None
    }
}

/// One half of a split surname / given-names pair.
pub fn accept_name_part(raw: &str) -> Option<String> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.is_empty() || tokens.len() > 3 {
        return None;
    }
    if tokens.iter().all(|t| is_name_token(t) && !is_label_word(t)) {
        Some(tokens.join(" "))
    } else {
        None
    }
}

/// Keeps the words before any trailing field label on the same line.
pub fn accept_nationality(raw: &str) -> Option<String> {
    let kept: Vec<&str> = raw
        .split_whitespace()
        .take_while(|t| !is_label_word(t))
        .take(3)
        .collect();
    if kept.is_empty() || kept.iter().any(|t| !t.chars().all(|c| c.is_alphabetic() || c == '-' || c == '\'')) {
        return None;
    }
    let value = kept.join(" ");
    if value.chars().count() < 2 {
        return None;
    }
    Some(value)
}

pub fn accept_place(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || is_field_label(trimmed) {
        return None;
    }
    // A date on the same line ends the place ("London on 15/03/1985")
    let head = match trimmed.find(|c: char| c.is_ascii_digit()) {
        Some(pos) => &trimmed[..pos],
        None => trimmed,
    };
    let mut value = head
        .trim_end_matches(|c: char| !c.is_alphabetic())
        .to_string();
    for suffix in [" on", " ON", " On"] {
        if let Some(stripped) = value.strip_suffix(suffix) {
            value = stripped.trim_end().to_string();
        }
    }
    let len = value.chars().count();
    if len < 2 || len > 60 {
        return None;
    }
    Some(value)
}

pub fn accept_sex(raw: &str) -> Option<String> {
    match raw.trim().to_lowercase().as_str() {
        "m" | "h" | "male" | "masculin" | "masculino" | "homme" | "hombre" => Some("M".to_string()),
        "f" | "female" | "feminin" | "feminine" | "femenino" | "femme" | "mujer" => {
            Some("F".to_string())
        }
        _ => None,
    }
}
