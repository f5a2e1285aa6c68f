//! Sample vocabulary files.

pub const EGP1: &str = "\
// Lektion 1
der Hund - the dog
die Katze - the cat
laufen - to run
";

pub const EGP2: &str = "\
der Hund - the hound
das Haus - the house
kaputt
";

pub const EGP10: &str = "\
schnell - fast
";

pub const BASIC: &str = "\
das Brot - the bread
die Milch - the milk
";

/// A file with only articled nouns, for the article quiz.
pub const NOUNS: &str = "\
die Katze - the cat
";
