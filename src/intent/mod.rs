//! Ordered intent table: the first rule with a satisfied trigger wins.

mod matcher;
pub mod rules;

pub use matcher::Trigger;

use crate::actions::Action;
use crate::config::CustomIntentConfig;
use crate::error::Result;
use crate::utterance::Utterance;

/// One entry in the intent table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentRule {
    /// Name used in logs.
    pub name: String,
    /// The rule fires when any trigger is satisfied.
    pub triggers: Vec<Trigger>,
    /// What to do when the rule fires.
    pub action: Action,
}

impl IntentRule {
    /// Whether any trigger is satisfied by `utterance`.
    pub fn matches(&self, utterance: &Utterance) -> bool {
        self.triggers.iter().any(|t| t.matches(utterance))
    }

    /// Rule for a user-configured intent. Call after validating the config.
    pub fn from_custom(custom: &CustomIntentConfig) -> Self {
        let response = custom
            .response
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_owned);
        let action = match (&custom.url, response) {
            (Some(url), announcement) => Action::OpenUrl {
                url: url.clone(),
                announcement,
            },
            (None, Some(text)) => Action::Reply(text),
            (None, None) => Action::Reply(String::new()),
        };
        Self {
            name: custom.label(),
            triggers: vec![Trigger::all_of(&custom.phrases)],
            action,
        }
    }
}

/// Immutable, ordered list of intent rules.
#[derive(Debug, Clone)]
pub struct IntentTable {
    rules: Vec<IntentRule>,
}

impl IntentTable {
    /// Table from an explicit rule list, kept in the given order.
    pub fn new(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    /// The built-in rules only.
    pub fn builtin() -> Self {
        Self::new(rules::builtin())
    }

    /// Built-in rules followed by validated custom intents.
    ///
    /// # Errors
    ///
    /// Returns a config error for the first invalid custom intent.
    pub fn with_custom(custom: &[CustomIntentConfig]) -> Result<Self> {
        let mut rules = rules::builtin();
        for intent in custom {
            intent.validate()?;
            rules.push(IntentRule::from_custom(intent));
        }
        Ok(Self::new(rules))
    }

    /// First rule matching `utterance`. `None` for the sentinel or no match.
    pub fn resolve(&self, utterance: &Utterance) -> Option<&IntentRule> {
        if utterance.text().is_none() {
            return None;
        }
        self.rules.iter().find(|rule| rule.matches(utterance))
    }

    /// Rules in priority order.
    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for IntentTable {
    fn default() -> Self {
        Self::builtin()
    }
}
