//! Sort stage and value comparator.

use std::cmp::Ordering;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use unicode_normalization::UnicodeNormalization as _;
use unicode_normalization::char::is_combining_mark;

use crate::column::Column;
use crate::model::{TableRow, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Value for an `aria-sort` style attribute.
    pub fn aria_sort(self) -> &'static str {
        match self {
            Direction::Asc => "ascending",
            Direction::Desc => "descending",
        }
    }
}

/// Active sort: one column and a direction.
///
/// A table with no `SortState` is unsorted and keeps the filter stage's order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column_id: String,
    pub direction: Direction,
}

impl SortState {
    /// Ascending sort on a column.
    pub fn asc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: Direction::Asc,
        }
    }

    /// Descending sort on a column.
    pub fn desc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: Direction::Desc,
        }
    }
}

/// Precomputed comparison key, so each value is resolved and lower-cased once.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Missing,
    Bool(bool),
    Int(i64),
    Float(f64),
    DateTime(DateTime<Utc>),
    Text(TextKey),
}

/// Collation key for text.
///
/// The primary level ignores case and diacritics, so `"Émile"` sorts between
/// `"Adam"` and `"Zoe"`. The secondary level keeps the accents and only
/// breaks primary ties: `"resume"` sorts before `"résumé"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct TextKey {
    primary: String,
    secondary: String,
}

impl TextKey {
    fn new(text: &str) -> Self {
        let secondary: String = text.nfd().flat_map(char::to_lowercase).collect();
        let mut primary = String::with_capacity(secondary.len());
        for c in secondary.chars().filter(|c| !is_combining_mark(*c)) {
            match fold_letter(c) {
                Some(folded) => primary.push_str(folded),
                None => primary.push(c),
            }
        }
        Self { primary, secondary }
    }
}

/// Latin letters with no canonical decomposition, spelled out with their
/// base letters.
fn fold_letter(c: char) -> Option<&'static str> {
    match c {
        'ß' => Some("ss"),
        'æ' => Some("ae"),
        'œ' => Some("oe"),
        'ø' => Some("o"),
        'đ' | 'ð' => Some("d"),
        'ł' => Some("l"),
        'ı' => Some("i"),
        'þ' => Some("th"),
        _ => None,
    }
}

impl SortKey {
    /// Ordering between kinds when two values differ in type.
    fn rank(&self) -> u8 {
        match self {
            SortKey::Missing => u8::MAX,
            SortKey::Bool(_) => 0,
            SortKey::Int(_) | SortKey::Float(_) => 1,
            SortKey::DateTime(_) => 2,
            SortKey::Text(_) => 3,
        }
    }

    /// Compare two present keys in ascending order.
    fn cmp_present(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            (SortKey::Int(a), SortKey::Int(b)) => a.cmp(b),
            (SortKey::Int(a), SortKey::Float(b)) => (*a as f64).total_cmp(b),
            (SortKey::Float(a), SortKey::Int(b)) => a.total_cmp(&(*b as f64)),
            (SortKey::Float(a), SortKey::Float(b)) => a.total_cmp(b),
            (SortKey::DateTime(a), SortKey::DateTime(b)) => a.cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Compare with direction applied to present values only.
    ///
    /// Missing keys go last in both directions.
    fn cmp_directed(&self, other: &SortKey, direction: Direction) -> Ordering {
        match (self, other) {
            (SortKey::Missing, SortKey::Missing) => Ordering::Equal,
            (SortKey::Missing, _) => Ordering::Greater,
            (_, SortKey::Missing) => Ordering::Less,
            _ => {
                let ordering = self.cmp_present(other);
                match direction {
                    Direction::Asc => ordering,
                    Direction::Desc => ordering.reverse(),
                }
            }
        }
    }
}

impl From<&Value> for SortKey {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => SortKey::Missing,
            Value::Bool(b) => SortKey::Bool(*b),
            Value::Int(n) => SortKey::Int(*n),
            Value::Float(n) => SortKey::Float(*n),
            Value::DateTime(dt) => SortKey::DateTime(*dt),
            Value::String(s) => SortKey::Text(TextKey::new(s)),
            other => SortKey::Text(TextKey::new(&other.to_string())),
        }
    }
}

/// Compare two values in ascending order.
///
/// Numbers compare numerically (ints and floats mixed), strings
/// case-insensitively with accents folded onto their base letters, date-times chronologically and booleans false-first.
/// Values of different kinds order bool < number < date-time < text. Null
/// compares greater than everything.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    SortKey::from(a).cmp_directed(&SortKey::from(b), Direction::Asc)
}

/// Stable in-place sort of row positions.
///
/// `positions` index into `rows`. Nulls sort last in both directions, and
/// descending order flips the comparison rather than the output, so rows with
/// equal keys keep their relative order either way. No sort state, or a
/// column id that matches no column, leaves `positions` unchanged.
pub fn sort<T: TableRow>(
    rows: &[T],
    positions: &mut [usize],
    columns: &[Column<T>],
    sort: Option<&SortState>,
) {
    let Some(state) = sort else {
        return;
    };
    let Some(column) = columns.iter().find(|c| c.id() == state.column_id) else {
        log::debug!("Sort column '{}' not found, keeping order", state.column_id);
        return;
    };

    let mut keyed: Vec<(usize, SortKey)> = positions
        .iter()
        .map(|&position| (position, SortKey::from(&column.value(&rows[position]))))
        .collect();
    keyed.sort_by(|(_, a), (_, b)| a.cmp_directed(b, state.direction));

    for (slot, (position, _)) in positions.iter_mut().zip(keyed) {
        *slot = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{normalize, ColumnDef};
    use crate::model::Record;

    fn rows() -> Vec<Record> {
        vec![
            Record::new().set("name", "bob").set("age", 30i64).set("team", "b"),
            Record::new().set("name", "Alice").set("age", 25i64).set("team", "a"),
            Record::new().set("name", "carol").set("team", "a"),
            Record::new().set("name", "Dave").set("age", 25.5).set("team", "b"),
            Record::new().set("name", "eve").set("age", 25i64).set("team", "a"),
        ]
    }

    fn columns() -> Vec<Column<Record>> {
        normalize(vec![
            ColumnDef::accessor("name", "Name"),
            ColumnDef::accessor("age", "Age"),
            ColumnDef::accessor("team", "Team"),
        ])
        .unwrap()
    }

    fn sorted(state: Option<SortState>) -> Vec<usize> {
        let rows = rows();
        let mut positions: Vec<usize> = (0..rows.len()).collect();
        sort(&rows, &mut positions, &columns(), state.as_ref());
        positions
    }

    #[test]
    fn test_unsorted_keeps_order() {
        assert_eq!(sorted(None), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_unknown_column_keeps_order() {
        assert_eq!(sorted(Some(SortState::asc("salary"))), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_strings_case_insensitive() {
        assert_eq!(sorted(Some(SortState::asc("name"))), vec![1, 0, 2, 3, 4]);
        assert_eq!(sorted(Some(SortState::desc("name"))), vec![4, 3, 2, 0, 1]);
    }

    #[test]
    fn test_numbers_mixed_with_nulls_last() {
        // ages: 30, 25, null, 25.5, 25
        assert_eq!(sorted(Some(SortState::asc("age"))), vec![1, 4, 3, 0, 2]);
        assert_eq!(sorted(Some(SortState::desc("age"))), vec![0, 3, 1, 4, 2]);
    }

    #[test]
    fn test_desc_is_stable_not_reversed() {
        // team a: 1, 2, 4; team b: 0, 3 -- ties keep input order both ways
        assert_eq!(sorted(Some(SortState::asc("team"))), vec![1, 2, 4, 0, 3]);
        assert_eq!(sorted(Some(SortState::desc("team"))), vec![0, 3, 1, 2, 4]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let rows = rows();
        let state = SortState::desc("team");
        let mut once: Vec<usize> = (0..rows.len()).collect();
        sort(&rows, &mut once, &columns(), Some(&state));
        let mut twice = once.clone();
        sort(&rows, &mut twice, &columns(), Some(&state));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_accented_strings_sort_with_base_letter() {
        let rows = vec![
            Record::new().set("name", "Zoe"),
            Record::new().set("name", "Émile"),
            Record::new().set("name", "Adam"),
            Record::new().set("name", "élodie"),
            Record::new().set("name", "Øyvind"),
        ];
        let columns = normalize(vec![ColumnDef::accessor("name", "Name")]).unwrap();
        let mut positions: Vec<usize> = (0..rows.len()).collect();
        sort(&rows, &mut positions, &columns, Some(&SortState::asc("name")));
        assert_eq!(positions, vec![2, 3, 1, 4, 0]);
    }

    #[test]
    fn test_accents_only_break_ties() {
        let plain = Value::from("resume");
        let accented = Value::from("Résumé");
        assert_eq!(compare_values(&plain, &accented), Ordering::Less);
        assert_eq!(compare_values(&accented, &Value::from("retain")), Ordering::Less);
        assert_eq!(compare_values(&Value::from("Straße"), &Value::from("strasse")), Ordering::Greater);
        assert_eq!(compare_values(&Value::from("Straße"), &Value::from("strassf")), Ordering::Less);
    }

    #[test]
    fn test_compare_values_kinds() {
        assert_eq!(compare_values(&Value::from(2i64), &Value::from(10i64)), Ordering::Less);
        assert_eq!(compare_values(&Value::from("b"), &Value::from("A")), Ordering::Greater);
        assert_eq!(compare_values(&Value::from("a"), &Value::from("A")), Ordering::Equal);
        assert_eq!(compare_values(&Value::from(false), &Value::from(true)), Ordering::Less);
        assert_eq!(compare_values(&Value::from(1i64), &Value::from("1")), Ordering::Less);
        assert_eq!(compare_values(&Value::Null, &Value::from("a")), Ordering::Greater);
        assert_eq!(compare_values(&Value::Null, &Value::Null), Ordering::Equal);
    }
}
