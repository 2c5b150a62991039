//! The rule catalog: built-in presets plus one custom slot fed from user text.

use crate::{
    error::{RuleError, UnknownPreset},
    rule::{CUSTOM_RULE_NAME, NeighborSet, Preset, Rule},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCatalog {
    custom_survive: NeighborSet,
    custom_birth: NeighborSet,
    active: Rule,
}

impl RuleCatalog {
    pub fn new() -> Self {
        Self {
            custom_survive: NeighborSet::EMPTY,
            custom_birth: NeighborSet::EMPTY,
            active: Rule::default(),
        }
    }

    /// Preset names in display order, with the custom slot last.
    pub fn preset_names(&self) -> Vec<&'static str> {
        Preset::all()
            .map(Preset::name)
            .chain([CUSTOM_RULE_NAME])
            .collect()
    }

    pub fn active(&self) -> Rule {
        self.active
    }

    /// The rule currently held by the custom slot.
    pub fn custom(&self) -> Rule {
        Rule::custom(self.custom_survive, self.custom_birth)
    }

    /// Makes the named entry active. Naming the custom slot selects whatever it last held.
    pub fn select_preset(&mut self, name: &str) -> Result<Rule, UnknownPreset> {
        let rule = if name == CUSTOM_RULE_NAME {
            self.custom()
        } else {
            let preset = name
                .parse::<Preset>()
                .map_err(|_| UnknownPreset(name.to_owned()))?;
            Rule::Preset(preset)
        };

        self.active = rule;
        Ok(rule)
    }

    /// Validates both digit strings, then stores them in the custom slot and activates it.
    ///
    /// Nothing changes unless both strings are valid.
    pub fn apply_custom_rule(
        &mut self,
        survive_digits: &str,
        birth_digits: &str,
    ) -> Result<Rule, RuleError> {
        let survive = NeighborSet::from_digits(survive_digits).map_err(RuleError::Survive)?;
        let birth = NeighborSet::from_digits(birth_digits).map_err(RuleError::Birth)?;

        self.custom_survive = survive;
        self.custom_birth = birth;
        self.active = self.custom();

        Ok(self.active)
    }

    /// The survive and birth digit strings for displaying `rule`.
    pub fn digits_for_rule(rule: &Rule) -> (String, String) {
        (rule.survive().digits(), rule.birth().digits())
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn names_end_with_custom_slot() {
        let catalog = RuleCatalog::new();
        assert_eq!(
            catalog.preset_names(),
            [
                "Life",
                "Day & Night",
                "Life without Death",
                "HighLife",
                "Seeds",
                "Morley",
                "Custom"
            ]
        );
    }

    #[test]
    fn selecting_presets_round_trips_digits() {
        let mut catalog = RuleCatalog::new();

        let life = catalog.select_preset("Life").unwrap();
        assert_eq!(
            RuleCatalog::digits_for_rule(&life),
            ("23".to_owned(), "3".to_owned())
        );

        let seeds = catalog.select_preset("Seeds").unwrap();
        assert_eq!(
            RuleCatalog::digits_for_rule(&seeds),
            (String::new(), "2".to_owned())
        );
        assert_eq!(catalog.active(), Rule::Preset(Preset::Seeds));
    }

    #[test]
    fn unknown_preset_keeps_active_rule() {
        let mut catalog = RuleCatalog::new();
        catalog.select_preset("Morley").unwrap();

        assert_eq!(
            catalog.select_preset("Brian's Brain"),
            Err(UnknownPreset("Brian's Brain".to_owned()))
        );
        assert_eq!(catalog.active(), Rule::Preset(Preset::Morley));
    }

    #[test]
    fn custom_rule_matching_life_behaves_like_life() {
        let mut catalog = RuleCatalog::new();
        let rule = catalog.apply_custom_rule("23", "3").unwrap();

        assert_eq!(rule.name(), "Custom");
        assert!(rule.same_behavior(&Rule::Preset(Preset::Life)));
        assert_eq!(catalog.active(), rule);
    }

    #[test]
    fn invalid_custom_rules_leave_catalog_untouched() {
        let mut catalog = RuleCatalog::new();
        catalog.apply_custom_rule("1", "2").unwrap();
        catalog.select_preset("HighLife").unwrap();
        let before = catalog.clone();

        assert_eq!(
            catalog.apply_custom_rule("239", "3"),
            Err(RuleError::Survive(ValidationError::DisallowedDigit('9')))
        );
        assert_eq!(
            catalog.apply_custom_rule("223", "3"),
            Err(RuleError::Survive(ValidationError::DuplicateDigit('2')))
        );
        assert_eq!(
            catalog.apply_custom_rule("", "3"),
            Err(RuleError::Survive(ValidationError::Empty))
        );
        assert_eq!(
            catalog.apply_custom_rule("23", "3x"),
            Err(RuleError::Birth(ValidationError::NonDigit('x')))
        );

        assert_eq!(catalog, before);
    }

    #[test]
    fn selecting_a_preset_keeps_custom_slot() {
        let mut catalog = RuleCatalog::new();
        let custom = catalog.apply_custom_rule("1357", "1357").unwrap();

        catalog.select_preset("Life").unwrap();
        assert_eq!(catalog.custom(), custom);

        assert_eq!(catalog.select_preset("Custom"), Ok(custom));
        assert_eq!(catalog.active(), custom);
    }

    #[test]
    fn fresh_custom_slot_is_empty() {
        let mut catalog = RuleCatalog::new();
        let rule = catalog.select_preset("Custom").unwrap();
        assert_eq!(
            RuleCatalog::digits_for_rule(&rule),
            (String::new(), String::new())
        );
    }
}
