use itertools::Itertools;
use serde::Serialize;

use super::normalize::Tokens;
use crate::util::percentage;

/// Rows shown before the table has to be expanded.
pub const MAX_PREVIEW_ITEMS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityEntry {
    pub letter: char,
    pub count: u32,
    pub percentage: f64,
}

/// Letter frequencies ranked by count, highest first. Equal counts are
/// ordered alphabetically.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityTable {
    entries: Vec<DensityEntry>,
    total_letters: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Density {
    /// No A-Z letters in the input.
    Empty,
    Table(DensityTable),
}

impl Density {
    pub fn table(&self) -> Option<&DensityTable> {
        match self {
            Density::Empty => None,
            Density::Table(table) => Some(table),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Affordance {
    SeeMore,
    SeeLess,
}

/// The slice of a table that should be displayed for a given view state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityView<'a> {
    pub entries: &'a [DensityEntry],
    pub affordance: Option<Affordance>,
}

impl DensityTable {
    pub fn entries(&self) -> &[DensityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_letters(&self) -> u32 {
        self.total_letters
    }

    /// Preview or full slice. Never recomputes the table itself.
    pub fn view(&self, expanded: bool) -> DensityView<'_> {
        if self.entries.len() <= MAX_PREVIEW_ITEMS {
            return DensityView {
                entries: &self.entries,
                affordance: None,
            };
        }

        if expanded {
            DensityView {
                entries: &self.entries,
                affordance: Some(Affordance::SeeLess),
            }
        } else {
            DensityView {
                entries: &self.entries[..MAX_PREVIEW_ITEMS],
                affordance: Some(Affordance::SeeMore),
            }
        }
    }
}

pub fn compute_density(tokens: &Tokens) -> Density {
    let counts = tokens
        .iter()
        .copied()
        .filter(char::is_ascii_uppercase)
        .counts();

    if counts.is_empty() {
        return Density::Empty;
    }

    let total_letters: usize = counts.values().sum();
    let entries = counts
        .into_iter()
        .sorted_by(|(a_letter, a_count), (b_letter, b_count)| {
            b_count.cmp(a_count).then(a_letter.cmp(b_letter))
        })
        .map(|(letter, count)| DensityEntry {
            letter,
            count: u32::try_from(count).unwrap_or(u32::MAX),
            percentage: percentage(count, total_letters),
        })
        .collect();

    Density::Table(DensityTable {
        entries,
        total_letters: u32::try_from(total_letters).unwrap_or(u32::MAX),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalize::normalize;
    use assert_matches::assert_matches;

    fn table(text: &str) -> DensityTable {
        match compute_density(&normalize(text)) {
            Density::Table(t) => t,
            Density::Empty => panic!("expected a density table for {text:?}"),
        }
    }

    #[test]
    fn test_hi_hi_example() {
        let t = table("Hi. Hi!");
        assert_eq!(t.total_letters(), 4);
        assert_eq!(
            t.entries(),
            &[
                DensityEntry {
                    letter: 'H',
                    count: 2,
                    percentage: 50.0
                },
                DensityEntry {
                    letter: 'I',
                    count: 2,
                    percentage: 50.0
                },
            ]
        );
    }

    #[test]
    fn test_no_letters_is_empty() {
        assert_matches!(compute_density(&normalize("")), Density::Empty);
        assert_matches!(compute_density(&normalize("123 ?! --")), Density::Empty);
    }

    #[test]
    fn test_case_insensitive_and_letters_only() {
        let t = table("aA1 b!");
        assert_eq!(t.total_letters(), 3);
        assert_eq!(t.entries()[0].letter, 'A');
        assert_eq!(t.entries()[0].count, 2);
        assert_eq!(t.entries()[0].percentage, 66.67);
        assert_eq!(t.entries()[1].percentage, 33.33);
    }

    #[test]
    fn test_ties_are_alphabetical() {
        let t = table("zyx zyx a");
        let letters: Vec<char> = t.entries().iter().map(|e| e.letter).collect();
        assert_eq!(letters, vec!['X', 'Y', 'Z', 'A']);
    }

    #[test]
    fn test_non_ascii_letters_are_ignored() {
        let t = table("éa");
        assert_eq!(t.len(), 1);
        assert_eq!(t.entries()[0].percentage, 100.0);
    }

    #[test]
    fn test_preview_with_seven_letters() {
        let t = table("abcdefg");
        let preview = t.view(false);
        assert_eq!(preview.entries.len(), 5);
        assert_eq!(preview.affordance, Some(Affordance::SeeMore));

        let full = t.view(true);
        assert_eq!(full.entries.len(), 7);
        assert_eq!(full.affordance, Some(Affordance::SeeLess));
    }

    #[test]
    fn test_small_tables_have_no_affordance() {
        let t = table("abcde");
        assert_eq!(t.view(false).entries.len(), 5);
        assert_eq!(t.view(false).affordance, None);
        assert_eq!(t.view(true).affordance, None);
    }

    #[test]
    fn test_view_does_not_touch_table() {
        let t = table("the quick brown fox");
        let before = t.clone();
        let _ = t.view(true);
        let _ = t.view(false);
        assert_eq!(t, before);
    }
}
