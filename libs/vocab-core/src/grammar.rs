//! Grammar reference tables shown alongside the cards.
//!
//! Static data only: declension tables for articles and possessives, the
//! case notes, and the prepositions and verbs that always take a case.

/// Column headings shared by the gender tables.
pub const GENDER_COLUMNS: [&str; 4] = ["Maskulin", "Feminin", "Neutral", "Plural"];

/// One declension table: a label column followed by the four genders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub title: &'static str,
    pub label: &'static str,
    pub rows: &'static [(&'static str, [&'static str; 4])],
}

/// A titled list of words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordList {
    pub title: &'static str,
    pub words: &'static [&'static str],
}

/// A titled block of short explanatory lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const DEFINITE_ARTICLES: Table = Table {
    title: "Definite Articles",
    label: "Case",
    rows: &[
        ("Nominativ", ["der", "die", "das", "die"]),
        ("Akkusativ", ["den", "die", "das", "die"]),
        ("Dativ", ["dem", "der", "dem", "den"]),
    ],
};

pub const INDEFINITE_ARTICLES: Table = Table {
    title: "Indefinite Articles",
    label: "Case",
    rows: &[
        ("Nominativ", ["ein", "eine", "ein", "keine"]),
        ("Akkusativ", ["einen", "eine", "ein", "keine"]),
        ("Dativ", ["einem", "einer", "einem", "keinen"]),
    ],
};

/// Possessive pronouns in the dative.
pub const POSSESSIVES: Table = Table {
    title: "Possessivpronomen (Dativ)",
    label: "Person",
    rows: &[
        ("ich", ["meinem", "meiner", "meinem", "meinen"]),
        ("du", ["deinem", "deiner", "deinem", "deinen"]),
        ("er", ["seinem", "seiner", "seinem", "seinen"]),
        ("sie (Singular)", ["ihrem", "ihrer", "ihrem", "ihren"]),
        ("es", ["seinem", "seiner", "seinem", "seinen"]),
        ("wir", ["unserem", "unserer", "unserem", "unseren"]),
        ("ihr", ["eurem", "eurer", "eurem", "euren"]),
        ("sie (Plural)", ["ihrem", "ihrer", "ihrem", "ihren"]),
    ],
};

pub const CASE_NOTES: Note = Note {
    title: "Akkusativ & Dativ",
    lines: &[
        "Akkusativ (Wen-Fall): antwortet auf wen? oder was?",
        "  Ich sehe den Hund. -> Wen sehe ich? den Hund",
        "Dativ (Wem-Fall): antwortet auf wem?",
        "  Ich helfe dem Mann. -> Wem helfe ich? dem Mann",
        "Akkusativ = direkt betroffen",
        "Dativ = indirekt betroffen (Empfänger)",
    ],
};

pub const MOTION_NOTES: Note = Note {
    title: "Bewegung oder nicht?",
    lines: &[
        "Wo? -> Dativ (keine Bewegung): Das Buch liegt auf dem Tisch.",
        "Wohin? -> Akkusativ (Bewegung): Ich lege das Buch auf den Tisch.",
    ],
};

pub const ACCUSATIVE_PREPOSITIONS: WordList = WordList {
    title: "Präpositionen mit Akkusativ",
    words: &["durch", "für", "gegen", "ohne", "um", "bis", "entlang"],
};

pub const ACCUSATIVE_VERBS: WordList = WordList {
    title: "Verben mit Akkusativ",
    words: &[
        "sehen", "finden", "brauchen", "kaufen", "lieben", "mögen", "nehmen", "lesen",
        "trinken", "essen", "hören", "vergessen", "verstehen", "lernen", "öffnen",
        "schließen", "tragen", "suchen", "bekommen", "warten (auf)", "fragen", "besuchen",
        "spielen", "machen", "bauen", "putzen", "backen",
    ],
};

pub const DATIVE_PREPOSITIONS: WordList = WordList {
    title: "Präpositionen mit Dativ",
    words: &["aus", "bei", "mit", "nach", "seit", "von", "zu", "gegenüber"],
};

pub const DATIVE_VERBS: WordList = WordList {
    title: "Verben mit Dativ",
    words: &[
        "helfen", "danken", "gehören", "glauben", "folgen", "gefallen", "gratulieren",
        "vertrauen", "verzeihen", "antworten", "passen", "schmecken", "raten", "zuhören",
        "wehtun", "fehlen",
    ],
};

/// Declension tables in display order.
pub fn tables() -> [Table; 3] {
    [DEFINITE_ARTICLES, INDEFINITE_ARTICLES, POSSESSIVES]
}

pub fn notes() -> [Note; 2] {
    [CASE_NOTES, MOTION_NOTES]
}

pub fn word_lists() -> [WordList; 4] {
    [
        ACCUSATIVE_PREPOSITIONS,
        ACCUSATIVE_VERBS,
        DATIVE_PREPOSITIONS,
        DATIVE_VERBS,
    ]
}
