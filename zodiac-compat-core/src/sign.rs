/// The twelve Chinese zodiac signs.
///
/// This enum is the single source of truth for the member set: the extractor
/// reads one page per variant and the generated TypeScript union type is
/// rendered from [`Sign::all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All sign variants in traditional cycle order.
const ALL_SIGNS: &[Sign] = &[
    Sign::Rat,
    Sign::Ox,
    Sign::Tiger,
    Sign::Rabbit,
    Sign::Dragon,
    Sign::Snake,
    Sign::Horse,
    Sign::Goat,
    Sign::Monkey,
    Sign::Rooster,
    Sign::Dog,
    Sign::Pig,
];

impl Sign {
    /// Display name, as it appears in page headings and pair keys.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    /// Lowercase directory name used for the sign's guide page.
    pub fn slug(&self) -> &'static str {
        self.aliases()[0]
    }

    /// All accepted names for this sign (case-insensitive matching).
    ///
    /// The first entry is always the slug.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Rat => &["rat", "mouse"],
            Self::Ox => &["ox", "buffalo", "cow"],
            Self::Tiger => &["tiger"],
            Self::Rabbit => &["rabbit", "hare", "cat"],
            Self::Dragon => &["dragon"],
            Self::Snake => &["snake"],
            Self::Horse => &["horse"],
            Self::Goat => &["goat", "sheep", "ram"],
            Self::Monkey => &["monkey"],
            Self::Rooster => &["rooster", "chicken", "cock"],
            Self::Dog => &["dog"],
            Self::Pig => &["pig", "boar"],
        }
    }

    /// All 12 sign variants.
    pub fn all() -> &'static [Sign] {
        ALL_SIGNS
    }

    /// Look up a sign by its exact display name.
    ///
    /// Unlike [`FromStr`](std::str::FromStr), aliases and other casings are
    /// rejected: only these spellings appear in pair keys the accessor builds.
    pub fn from_name(name: &str) -> Option<Sign> {
        ALL_SIGNS.iter().copied().find(|sign| sign.name() == name)
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string cannot be parsed into a `Sign`.
#[derive(Debug, Clone)]
pub struct SignParseError(pub String);

impl std::fmt::Display for SignParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown zodiac sign: '{}'", self.0)
    }
}

impl std::error::Error for SignParseError {}

impl std::str::FromStr for Sign {
    type Err = SignParseError;

    /// Parse a sign from its name or any alias (case-insensitive, trimmed).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_SIGNS
            .iter()
            .copied()
            .find(|sign| sign.aliases().contains(&lower.as_str()))
            .ok_or_else(|| SignParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/sign_tests.rs"]
mod tests;
