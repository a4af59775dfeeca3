//! Locale-aware string ordering for category names.
//!
//! A small multi-level collation in the spirit of UCA:
//! 1. primary: base letters, case- and accent-insensitive (space < punctuation < digits < letters)
//! 2. secondary: accents
//! 3. tertiary: case, lowercase first
//!
//! Remaining ties fall back to code point order so the result is total.
//! Swedish tailoring sorts `å`, `ä`/`æ`, `ö`/`ø` as separate letters after `z`
//! and `ü` as `y`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collation {
    /// Swedish tailoring.
    #[default]
    Sv,
    /// Untailored ordering: accented letters sort with their base letter.
    Root,
}

impl FromStr for Collation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sv" | "sv-se" | "sv_se" => Ok(Collation::Sv),
            "root" | "und" | "" => Ok(Collation::Root),
            other => anyhow::bail!("unsupported collation locale: {other}"),
        }
    }
}

impl fmt::Display for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collation::Sv => write!(f, "sv"),
            Collation::Root => write!(f, "root"),
        }
    }
}

/// Per-character weights at each level.
#[derive(Debug, Clone, Copy)]
struct Weights {
    primary: u32,
    secondary: u8,
    tertiary: u8,
}

const CLASS_SPACE: u32 = 0;
const CLASS_PUNCT: u32 = 1 << 24;
const CLASS_DIGIT: u32 = 2 << 24;
const CLASS_LETTER: u32 = 3 << 24;

/// Letter slot after `z` for Swedish extra letters.
const AFTER_Z: u32 = 'z' as u32 + 1;

impl Collation {
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        let wa: Vec<Weights> = a.chars().map(|c| self.weights(c)).collect();
        let wb: Vec<Weights> = b.chars().map(|c| self.weights(c)).collect();

        let primary = |w: &Vec<Weights>| w.iter().map(|x| x.primary).collect::<Vec<_>>();
        let secondary = |w: &Vec<Weights>| w.iter().map(|x| x.secondary).collect::<Vec<_>>();
        let tertiary = |w: &Vec<Weights>| w.iter().map(|x| x.tertiary).collect::<Vec<_>>();

        primary(&wa)
            .cmp(&primary(&wb))
            .then_with(|| secondary(&wa).cmp(&secondary(&wb)))
            .then_with(|| tertiary(&wa).cmp(&tertiary(&wb)))
            .then_with(|| a.cmp(b))
    }

    /// Sort `items` in place by this collation.
    pub fn sort<S: AsRef<str>>(self, items: &mut [S]) {
        items.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }

    fn weights(self, c: char) -> Weights {
        let lower = c.to_lowercase().next().unwrap_or(c);
        let tertiary = if c != lower { 1 } else { 0 };

        if c.is_whitespace() {
            return Weights {
                primary: CLASS_SPACE,
                secondary: 0,
                tertiary,
            };
        }
        if let Some(d) = c.to_digit(10) {
            return Weights {
                primary: CLASS_DIGIT | d,
                secondary: 0,
                tertiary,
            };
        }
        if !c.is_alphabetic() {
            return Weights {
                primary: CLASS_PUNCT | c as u32,
                secondary: 0,
                tertiary,
            };
        }

        if self == Collation::Sv {
            let tailored = match lower {
                'å' => Some((AFTER_Z, 0)),
                'ä' => Some((AFTER_Z + 1, 0)),
                'æ' => Some((AFTER_Z + 1, 1)),
                'ö' => Some((AFTER_Z + 2, 0)),
                'ø' => Some((AFTER_Z + 2, 1)),
                'ü' => Some(('y' as u32, 1)),
                _ => None,
            };
            if let Some((base, secondary)) = tailored {
                return Weights {
                    primary: CLASS_LETTER | base,
                    secondary,
                    tertiary,
                };
            }
        }

        let (base, secondary) = fold_latin(lower);
        Weights {
            primary: CLASS_LETTER | base as u32,
            secondary,
            tertiary,
        }
    }
}

/// Base letter and accent rank for common Latin letters; others map to themselves.
fn fold_latin(c: char) -> (char, u8) {
    match c {
        'á' => ('a', 1),
        'à' => ('a', 2),
        'â' => ('a', 3),
        'ä' => ('a', 4),
        'ã' => ('a', 5),
        'å' => ('a', 6),
        'ā' => ('a', 7),
        'æ' => ('a', 8),
        'ç' => ('c', 1),
        'é' => ('e', 1),
        'è' => ('e', 2),
        'ê' => ('e', 3),
        'ë' => ('e', 4),
        'í' => ('i', 1),
        'ì' => ('i', 2),
        'î' => ('i', 3),
        'ï' => ('i', 4),
        'ñ' => ('n', 1),
        'ó' => ('o', 1),
        'ò' => ('o', 2),
        'ô' => ('o', 3),
        'ö' => ('o', 4),
        'õ' => ('o', 5),
        'ø' => ('o', 6),
        'ú' => ('u', 1),
        'ù' => ('u', 2),
        'û' => ('u', 3),
        'ü' => ('u', 4),
        'ý' => ('y', 1),
        'ÿ' => ('y', 2),
        'ß' => ('s', 1),
        other => (other, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(c: Collation, items: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        c.sort(&mut v);
        v
    }

    #[test]
    fn case_insensitive_primary_lowercase_first() {
        assert_eq!(
            sorted(Collation::Sv, &["Work", "News", "work"]),
            vec!["News", "work", "Work"]
        );
        assert_eq!(
            sorted(Collation::Sv, &["b", "A", "a", "B"]),
            vec!["a", "A", "b", "B"]
        );
    }

    #[test]
    fn swedish_letters_after_z() {
        assert_eq!(
            sorted(Collation::Sv, &["Ödla", "Zebra", "Äpple", "Åsna", "Apa"]),
            vec!["Apa", "Zebra", "Åsna", "Äpple", "Ödla"]
        );
    }

    #[test]
    fn root_folds_accents_into_base_letter() {
        assert_eq!(
            sorted(Collation::Root, &["Ödla", "Zebra", "Äpple", "Ost"]),
            vec!["Äpple", "Ödla", "Ost", "Zebra"]
        );
        assert_eq!(
            sorted(Collation::Root, &["résumé", "resume", "rest"]),
            vec!["rest", "resume", "résumé"]
        );
    }

    #[test]
    fn digits_before_letters_and_prefix_first() {
        assert_eq!(
            sorted(Collation::Sv, &["b", "2nd", "ab", "a"]),
            vec!["2nd", "a", "ab", "b"]
        );
    }

    #[test]
    fn equal_strings_compare_equal() {
        assert_eq!(Collation::Sv.compare("Work", "Work"), Ordering::Equal);
        assert_ne!(Collation::Sv.compare("Work", "work"), Ordering::Equal);
    }

    #[test]
    fn parse_locale_names() {
        assert_eq!("sv".parse::<Collation>().unwrap(), Collation::Sv);
        assert_eq!("SV-se".parse::<Collation>().unwrap(), Collation::Sv);
        assert_eq!("root".parse::<Collation>().unwrap(), Collation::Root);
        assert!("tlh".parse::<Collation>().is_err());
    }
}
