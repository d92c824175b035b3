//! Locale-aware ordering of person names.
//!
//! Ordering is driven by an explicit [`Locale`] rather than the host
//! environment, so listings sort identically on every deployment.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Locales the collator knows how to order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Brazilian Portuguese: accents and case only break ties between
    /// otherwise equal base letters.
    #[default]
    PtBr,
    /// Plain code-point ordering.
    Invariant,
}

impl Locale {
    /// Canonical language tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::Invariant => "invariant",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unsupported locale tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}', expected one of: pt-BR, invariant")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().replace('_', "-");
        if tag.eq_ignore_ascii_case("pt-BR") {
            Ok(Self::PtBr)
        } else if tag.eq_ignore_ascii_case("invariant") {
            Ok(Self::Invariant)
        } else {
            Err(UnsupportedLocale(s.to_string()))
        }
    }
}

/// String comparator bound to a [`Locale`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Collator {
    locale: Locale,
}

impl Collator {
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Compare two strings under this collator's locale.
    ///
    /// For [`Locale::PtBr`] the comparison runs in three passes: base
    /// letters ignoring accents and case, then accents, then case.
    #[must_use]
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self.locale {
            Locale::Invariant => a.cmp(b),
            Locale::PtBr => primary_key(a)
                .cmp(primary_key(b))
                .then_with(|| secondary_key(a).cmp(secondary_key(b)))
                .then_with(|| tertiary_key(a).cmp(tertiary_key(b))),
        }
    }
}

fn primary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase).map(fold_diacritic)
}

fn secondary_key(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

// Lowercase sorts before uppercase at the tertiary level.
fn tertiary_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

/// Map an accented lowercase Latin letter to its base letter.
fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' | 'ń' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' => 'u',
        'ý' | 'ÿ' => 'y',
        'š' | 'ś' => 's',
        'ž' | 'ź' | 'ż' => 'z',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(locale: Locale, names: &[&str]) -> Vec<String> {
        let collator = Collator::new(locale);
        let mut names: Vec<String> = names.iter().map(ToString::to_string).collect();
        names.sort_by(|a, b| collator.compare(a, b));
        names
    }

    #[test]
    fn should_sort_accented_names_as_base_letters() {
        let names = sorted(
            Locale::PtBr,
            &["Maria Santos", "José da Silva", "João Oliveira"],
        );
        assert_eq!(names, ["João Oliveira", "José da Silva", "Maria Santos"]);
    }

    #[test]
    fn should_ignore_case_at_primary_level() {
        let names = sorted(Locale::PtBr, &["beatriz", "Ana", "Álvaro", "carla"]);
        assert_eq!(names, ["Álvaro", "Ana", "beatriz", "carla"]);
    }

    #[test]
    fn should_break_ties_with_accent_then_case() {
        let collator = Collator::new(Locale::PtBr);
        assert_eq!(collator.compare("e", "é"), Ordering::Less);
        assert_eq!(collator.compare("e", "E"), Ordering::Less);
        assert_eq!(collator.compare("Éder", "Éder"), Ordering::Equal);
    }

    #[test]
    fn should_order_by_code_point_with_invariant_locale() {
        let names = sorted(Locale::Invariant, &["ana", "Bruno", "Ângela"]);
        assert_eq!(names, ["Bruno", "ana", "Ângela"]);
    }

    #[test]
    fn should_parse_locale_tags() {
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("pt_br".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("Invariant".parse::<Locale>().unwrap(), Locale::Invariant);
        assert!("en-US".parse::<Locale>().is_err());
    }
}
