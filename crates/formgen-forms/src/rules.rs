//! Validation Rule Registry
//!
//! This module holds the fixed set of rules used to validate field values.
//! Each rule pairs a predicate with a message formatter:
//!
//! | rule | passes when | message |
//! |------|-------------|---------|
//! | `required` | the trimmed value is non-empty | `{label} is required` |
//! | `email` | the value looks like `local@domain.tld` | `Please enter a valid email address` |
//! | `minLength` | the value has at least `n` characters | `{label} must be at least {n} characters` |
//! | `maxLength` | the value has at most `n` characters | `{label} cannot exceed {n} characters` |
//!
//! Rule names form a closed set, so lookup through [`RuleRegistry::get`]
//! always succeeds.
//!
//! ## Example
//!
//! ```
//! use formgen_forms::rules::{RuleName, RuleRegistry};
//!
//! let rule = RuleRegistry::global().get(RuleName::MinLength);
//! assert!(!rule.validate("ab", Some(3)));
//! assert_eq!(rule.message("Name", Some(3)), "Name must be at least 3 characters");
//! ```

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// local@domain.tld with no whitespace and exactly one `@`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_PATTERN: invalid regex pattern")
});

static RULE_REGISTRY: LazyLock<RuleRegistry> = LazyLock::new(RuleRegistry::new);

/// Name of a built-in validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleName {
	/// Value must not be blank
	Required,
	/// Value must be shaped like an email address
	Email,
	/// Value must have at least `n` characters
	MinLength,
	/// Value must have at most `n` characters
	MaxLength,
}

impl RuleName {
	/// All rule names, in check order.
	pub const ALL: [RuleName; 4] = [
		RuleName::Required,
		RuleName::Email,
		RuleName::MinLength,
		RuleName::MaxLength,
	];

	/// Schema spelling of the rule name.
	pub fn as_str(&self) -> &'static str {
		match self {
			RuleName::Required => "required",
			RuleName::Email => "email",
			RuleName::MinLength => "minLength",
			RuleName::MaxLength => "maxLength",
		}
	}

	fn index(self) -> usize {
		match self {
			RuleName::Required => 0,
			RuleName::Email => 1,
			RuleName::MinLength => 2,
			RuleName::MaxLength => 3,
		}
	}
}

impl fmt::Display for RuleName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when parsing an unknown rule name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown validation rule '{0}'")]
pub struct UnknownRule(pub String);

impl FromStr for RuleName {
	type Err = UnknownRule;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		RuleName::ALL
			.into_iter()
			.find(|name| name.as_str() == s)
			.ok_or_else(|| UnknownRule(s.to_string()))
	}
}

type Predicate = fn(&str, Option<usize>) -> bool;
type MessageFormatter = fn(&str, Option<usize>) -> String;

/// A named predicate plus its message formatter.
#[derive(Clone, Copy)]
pub struct Rule {
	name: RuleName,
	predicate: Predicate,
	formatter: MessageFormatter,
}

impl Rule {
	/// Rule name
	pub fn name(&self) -> RuleName {
		self.name
	}

	/// Check a value, with an optional parameter such as a length bound.
	pub fn validate(&self, value: &str, param: Option<usize>) -> bool {
		(self.predicate)(value, param)
	}

	/// Build the user-facing failure message for a field label.
	pub fn message(&self, label: &str, param: Option<usize>) -> String {
		(self.formatter)(label, param)
	}
}

impl fmt::Debug for Rule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Rule").field("name", &self.name).finish()
	}
}

/// Rule registry, indexed by [`RuleName`].
#[derive(Debug)]
pub struct RuleRegistry {
	rules: [Rule; 4],
}

impl RuleRegistry {
	fn new() -> Self {
		Self {
			rules: [
				Rule {
					name: RuleName::Required,
					predicate: |value, _| !value.trim().is_empty(),
					formatter: |label, _| format!("{} is required", label),
				},
				Rule {
					name: RuleName::Email,
					predicate: |value, _| EMAIL_PATTERN.is_match(value),
					formatter: |_, _| "Please enter a valid email address".to_string(),
				},
				Rule {
					name: RuleName::MinLength,
					predicate: |value, min| min.is_none_or(|min| char_count(value) >= min),
					formatter: |label, min| {
						format!(
							"{} must be at least {} characters",
							label,
							min.unwrap_or_default()
						)
					},
				},
				Rule {
					name: RuleName::MaxLength,
					predicate: |value, max| max.is_none_or(|max| char_count(value) <= max),
					formatter: |label, max| {
						format!("{} cannot exceed {} characters", label, max.unwrap_or_default())
					},
				},
			],
		}
	}

	/// Get the process-wide registry
	pub fn global() -> &'static RuleRegistry {
		&RULE_REGISTRY
	}

	/// Get a rule by name
	pub fn get(&self, name: RuleName) -> &Rule {
		&self.rules[name.index()]
	}

	/// Iterate over all rules in check order.
	pub fn iter(&self) -> impl Iterator<Item = &Rule> {
		self.rules.iter()
	}
}

/// Length of a value as counted by the length rules.
pub fn char_count(value: &str) -> usize {
	value.chars().count()
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	fn rule(name: RuleName) -> &'static Rule {
		RuleRegistry::global().get(name)
	}

	#[rstest]
	#[case("Ada", true)]
	#[case(" x ", true)]
	#[case("", false)]
	#[case("   ", false)]
	#[case("\t\n", false)]
	fn test_required_rule(#[case] value: &str, #[case] expected: bool) {
		assert_eq!(rule(RuleName::Required).validate(value, None), expected);
	}

	#[rstest]
	#[case("a@b.co", true)]
	#[case("user@example.com", true)]
	#[case("first.last@sub.example.org", true)]
	#[case("abc", false)]
	#[case("a@b", false)]
	#[case("@example.com", false)]
	#[case("user@", false)]
	#[case("a b@c.d", false)]
	#[case("a@@b.c", false)]
	fn test_email_rule(#[case] value: &str, #[case] expected: bool) {
		assert_eq!(rule(RuleName::Email).validate(value, None), expected);
	}

	#[rstest]
	fn test_email_pattern_compiles() {
		assert!(LazyLock::force(&EMAIL_PATTERN).is_match("ada@example.com"));
	}

	#[rstest]
	fn test_min_length_boundary() {
		let min = rule(RuleName::MinLength);
		assert!(min.validate("abc", Some(3)));
		assert!(min.validate("abcd", Some(3)));
		assert!(!min.validate("ab", Some(3)));
		assert!(min.validate("", None));
	}

	#[rstest]
	fn test_max_length_boundary() {
		let max = rule(RuleName::MaxLength);
		assert!(max.validate("abc", Some(3)));
		assert!(!max.validate("abcd", Some(3)));
		assert!(max.validate("anything", None));
	}

	#[rstest]
	fn test_lengths_count_characters_not_bytes() {
		// 4 characters, 8 bytes
		assert!(rule(RuleName::MaxLength).validate("ääää", Some(4)));
		assert!(rule(RuleName::MinLength).validate("ääää", Some(4)));
	}

	#[rstest]
	#[case(RuleName::Required, None, "Name is required")]
	#[case(RuleName::Email, None, "Please enter a valid email address")]
	#[case(RuleName::MinLength, Some(2), "Name must be at least 2 characters")]
	#[case(RuleName::MaxLength, Some(50), "Name cannot exceed 50 characters")]
	fn test_rule_messages(
		#[case] name: RuleName,
		#[case] param: Option<usize>,
		#[case] expected: &str,
	) {
		assert_eq!(rule(name).message("Name", param), expected);
	}

	#[rstest]
	fn test_registry_lookup_matches_name() {
		for name in RuleName::ALL {
			assert_eq!(RuleRegistry::global().get(name).name(), name);
		}
		assert_eq!(RuleRegistry::global().iter().count(), 4);
	}

	#[rstest]
	#[case("required", RuleName::Required)]
	#[case("email", RuleName::Email)]
	#[case("minLength", RuleName::MinLength)]
	#[case("maxLength", RuleName::MaxLength)]
	fn test_rule_name_round_trip(#[case] raw: &str, #[case] name: RuleName) {
		assert_eq!(raw.parse::<RuleName>().unwrap(), name);
		assert_eq!(name.to_string(), raw);
	}

	#[rstest]
	fn test_unknown_rule_name() {
		let err = "min_length".parse::<RuleName>().unwrap_err();
		assert_eq!(err.to_string(), "unknown validation rule 'min_length'");
	}

	proptest! {
		#[test]
		fn prop_min_length_matches_char_count(s in ".{0,40}", n in 0usize..40) {
			prop_assert_eq!(
				rule(RuleName::MinLength).validate(&s, Some(n)),
				s.chars().count() >= n
			);
		}

		#[test]
		fn prop_max_length_matches_char_count(s in ".{0,40}", n in 0usize..40) {
			prop_assert_eq!(
				rule(RuleName::MaxLength).validate(&s, Some(n)),
				s.chars().count() <= n
			);
		}

		#[test]
		fn prop_email_without_at_is_rejected(s in "[^@]{0,30}") {
			prop_assert!(!rule(RuleName::Email).validate(&s, None));
		}

		#[test]
		fn prop_well_formed_email_is_accepted(
			local in "[a-z0-9._-]{1,12}",
			domain in "[a-z0-9-]{1,12}",
			tld in "[a-z]{2,6}",
		) {
			let email = format!("{}@{}.{}", local, domain, tld);
			prop_assert!(rule(RuleName::Email).validate(&email, None));
		}
	}
}
