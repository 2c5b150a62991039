use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::ValidationError;

/// The largest neighbor count a Moore neighborhood can produce.
pub const MAX_NEIGHBORS: usize = 8;

/// Display name of the catalog's custom slot.
pub const CUSTOM_RULE_NAME: &str = "Custom";

/// A set of neighbor counts, one flag per count in `0..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NeighborSet([bool; MAX_NEIGHBORS + 1]);

impl NeighborSet {
    pub const EMPTY: Self = Self([false; MAX_NEIGHBORS + 1]);
    pub const ALL: Self = Self([true; MAX_NEIGHBORS + 1]);

    pub const fn from_flags(flags: [bool; MAX_NEIGHBORS + 1]) -> Self {
        Self(flags)
    }

    /// Builds a set from trusted counts. Counts above 8 are ignored.
    pub const fn from_counts(counts: &[usize]) -> Self {
        let mut flags = [false; MAX_NEIGHBORS + 1];

        let mut i = 0;
        while i < counts.len() {
            if counts[i] <= MAX_NEIGHBORS {
                flags[counts[i]] = true;
            }
            i += 1;
        }

        Self(flags)
    }

    /// Parses user-entered digits, e.g. `"23"`.
    pub fn from_digits(digits: &str) -> Result<Self, ValidationError> {
        validate_digits(digits)
    }

    pub fn contains(&self, neighbor_count: usize) -> bool {
        self.0.get(neighbor_count).copied().unwrap_or(false)
    }

    pub fn flags(&self) -> [bool; MAX_NEIGHBORS + 1] {
        self.0
    }

    pub fn counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(count, &set)| set.then_some(count))
    }

    /// The ascending digit string for this set, the inverse of [`NeighborSet::from_digits`].
    pub fn digits(&self) -> String {
        self.counts()
            .map(|count| char::from(b'0' + count as u8))
            .collect()
    }
}

impl TryFrom<String> for NeighborSet {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_digits(&value)
    }
}

impl From<NeighborSet> for String {
    fn from(value: NeighborSet) -> Self {
        value.digits()
    }
}

/// Checks one survive or birth digit string and returns the set it names.
///
/// The string must hold between one and nine distinct digits from `0` to `8`.
pub fn validate_digits(digits: &str) -> Result<NeighborSet, ValidationError> {
    if digits.is_empty() {
        return Err(ValidationError::Empty);
    }

    let len = digits.chars().count();
    if len > MAX_NEIGHBORS + 1 {
        return Err(ValidationError::TooLong { len });
    }

    let mut flags = [false; MAX_NEIGHBORS + 1];
    for digit in digits.chars() {
        let count = digit
            .to_digit(10)
            .ok_or(ValidationError::NonDigit(digit))? as usize;

        let flag = flags
            .get_mut(count)
            .ok_or(ValidationError::DisallowedDigit(digit))?;

        if *flag {
            return Err(ValidationError::DuplicateDigit(digit));
        }
        *flag = true;
    }

    Ok(NeighborSet(flags))
}

/// The built-in rule table, in display order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Preset {
    #[strum(serialize = "Life")]
    #[serde(rename = "Life")]
    Life,

    #[strum(serialize = "Day & Night")]
    #[serde(rename = "Day & Night")]
    DayAndNight,

    #[strum(serialize = "Life without Death")]
    #[serde(rename = "Life without Death")]
    LifeWithoutDeath,

    #[strum(serialize = "HighLife")]
    #[serde(rename = "HighLife")]
    HighLife,

    #[strum(serialize = "Seeds")]
    #[serde(rename = "Seeds")]
    Seeds,

    #[strum(serialize = "Morley")]
    #[serde(rename = "Morley")]
    Morley,
}

impl Preset {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn all() -> impl Iterator<Item = Preset> {
        Self::iter()
    }

    pub fn survive(self) -> NeighborSet {
        match self {
            Preset::Life => NeighborSet::from_counts(&[2, 3]),
            Preset::DayAndNight => NeighborSet::from_counts(&[3, 4, 6, 7, 8]),
            Preset::LifeWithoutDeath => NeighborSet::ALL,
            Preset::HighLife => NeighborSet::from_counts(&[2, 3]),
            Preset::Seeds => NeighborSet::EMPTY,
            Preset::Morley => NeighborSet::from_counts(&[2, 4, 5]),
        }
    }

    pub fn birth(self) -> NeighborSet {
        match self {
            Preset::Life => NeighborSet::from_counts(&[3]),
            Preset::DayAndNight => NeighborSet::from_counts(&[3, 6, 7, 8]),
            Preset::LifeWithoutDeath => NeighborSet::from_counts(&[3]),
            Preset::HighLife => NeighborSet::from_counts(&[3, 6]),
            Preset::Seeds => NeighborSet::from_counts(&[2]),
            Preset::Morley => NeighborSet::from_counts(&[3, 6, 8]),
        }
    }
}

/// A transition rule: either a built-in preset or a user-supplied custom pair.
///
/// Rules are plain values. A [`crate::Game`] keeps its own copy, so editing the
/// catalog's custom slot never changes a running simulation behind its back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    Preset(Preset),
    Custom {
        survive: NeighborSet,
        birth: NeighborSet,
    },
}

impl Rule {
    pub fn custom(survive: NeighborSet, birth: NeighborSet) -> Self {
        Rule::Custom { survive, birth }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Preset(preset) => preset.name(),
            Rule::Custom { .. } => CUSTOM_RULE_NAME,
        }
    }

    pub fn survive(&self) -> NeighborSet {
        match self {
            Rule::Preset(preset) => preset.survive(),
            Rule::Custom { survive, .. } => *survive,
        }
    }

    pub fn birth(&self) -> NeighborSet {
        match self {
            Rule::Preset(preset) => preset.birth(),
            Rule::Custom { birth, .. } => *birth,
        }
    }

    /// Whether this rule behaves identically to `other`, regardless of name.
    pub fn same_behavior(&self, other: &Rule) -> bool {
        self.survive() == other.survive() && self.birth() == other.birth()
    }
}

impl Default for Rule {
    fn default() -> Self {
        Rule::Preset(Preset::Life)
    }
}

impl From<Preset> for Rule {
    fn from(value: Preset) -> Self {
        Rule::Preset(value)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (S{}/B{})",
            self.name(),
            self.survive().digits(),
            self.birth().digits()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_parse_into_flags() {
        let set = validate_digits("320").unwrap();
        assert!(set.contains(0));
        assert!(set.contains(2));
        assert!(set.contains(3));
        assert!(!set.contains(1));
        assert_eq!(set.digits(), "023");
    }

    #[test]
    fn all_nine_digits_are_accepted() {
        assert_eq!(validate_digits("876543210"), Ok(NeighborSet::ALL));
    }

    #[test]
    fn invalid_digit_strings_are_rejected() {
        assert_eq!(validate_digits(""), Err(ValidationError::Empty));
        assert_eq!(
            validate_digits("0123456780"),
            Err(ValidationError::TooLong { len: 10 })
        );
        assert_eq!(validate_digits("2a"), Err(ValidationError::NonDigit('a')));
        assert_eq!(validate_digits("-3"), Err(ValidationError::NonDigit('-')));
        assert_eq!(
            validate_digits("239"),
            Err(ValidationError::DisallowedDigit('9'))
        );
        assert_eq!(
            validate_digits("223"),
            Err(ValidationError::DuplicateDigit('2'))
        );
    }

    #[test]
    fn unicode_digits_are_not_neighbor_counts() {
        assert_eq!(validate_digits("٣"), Err(ValidationError::NonDigit('٣')));
    }

    #[test]
    fn out_of_range_counts_are_never_contained() {
        assert!(!NeighborSet::ALL.contains(9));
        assert_eq!(NeighborSet::from_counts(&[1, 12]).digits(), "1");
    }

    #[test]
    fn preset_table_matches_reference() {
        let table: Vec<_> = Preset::all()
            .map(|preset| {
                (
                    preset.name(),
                    preset.survive().digits(),
                    preset.birth().digits(),
                )
            })
            .collect();

        let expected = [
            ("Life", "23", "3"),
            ("Day & Night", "34678", "3678"),
            ("Life without Death", "012345678", "3"),
            ("HighLife", "23", "36"),
            ("Seeds", "", "2"),
            ("Morley", "245", "368"),
        ];

        assert_eq!(table.len(), expected.len());
        for ((name, survive, birth), (exp_name, exp_survive, exp_birth)) in
            table.iter().zip(expected)
        {
            assert_eq!(*name, exp_name);
            assert_eq!(survive, exp_survive);
            assert_eq!(birth, exp_birth);
        }
    }

    #[test]
    fn preset_names_parse_back() {
        for preset in Preset::all() {
            assert_eq!(preset.name().parse::<Preset>(), Ok(preset));
        }
        assert!("Custom".parse::<Preset>().is_err());
    }

    #[test]
    fn rule_display_shows_digits() {
        assert_eq!(Rule::from(Preset::HighLife).to_string(), "HighLife (S23/B36)");
        assert_eq!(
            Rule::custom(NeighborSet::EMPTY, NeighborSet::from_counts(&[1])).to_string(),
            "Custom (S/B1)"
        );
    }

    #[test]
    fn rules_serialize_with_digit_strings() {
        let rule = Rule::custom(
            NeighborSet::from_counts(&[2, 3]),
            NeighborSet::from_counts(&[3, 6]),
        );
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(json, r#"{"Custom":{"survive":"23","birth":"36"}}"#);

        let preset: Rule = serde_json::from_str(r#"{"Preset":"Day & Night"}"#).unwrap();
        assert_eq!(preset, Rule::Preset(Preset::DayAndNight));

        assert!(serde_json::from_str::<Rule>(r#"{"Custom":{"survive":"99","birth":"3"}}"#).is_err());
    }
}
