//! Page settings
//!
//! Every key is optional; missing keys fall back to the defaults below.
//!
//! ```toml
//! submit_label = "Send"
//! success_message = "Thanks!"
//!
//! [notification]
//! show_delay_ms = 10
//! display_ms = 3000
//! fade_out_ms = 300
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings loading errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	/// The settings text is not valid TOML for these settings
	#[error("TOML parse error: {0}")]
	ParseError(#[from] toml::de::Error),
}

/// Notification timings, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
	/// Delay between inserting the element and revealing it
	pub show_delay_ms: u64,
	/// How long the notification stays revealed
	pub display_ms: u64,
	/// Fade-out time before the element is removed
	pub fade_out_ms: u64,
}

impl Default for NotificationSettings {
	fn default() -> Self {
		Self {
			show_delay_ms: 10,
			display_ms: 3000,
			fade_out_ms: 300,
		}
	}
}

impl NotificationSettings {
	/// Reveal delay
	pub fn show_delay(&self) -> Duration {
		Duration::from_millis(self.show_delay_ms)
	}

	/// Display time
	pub fn display(&self) -> Duration {
		Duration::from_millis(self.display_ms)
	}

	/// Fade-out time
	pub fn fade_out(&self) -> Duration {
		Duration::from_millis(self.fade_out_ms)
	}

	/// Time from request to removal
	pub fn total(&self) -> Duration {
		self.show_delay() + self.display() + self.fade_out()
	}
}

/// Settings for rendered forms and their notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesSettings {
	/// Text of the submit button
	pub submit_label: String,
	/// Notification shown after a successful submission
	pub success_message: String,
	/// Notification timings
	pub notification: NotificationSettings,
}

impl Default for PagesSettings {
	fn default() -> Self {
		Self {
			submit_label: "Submit Form".to_string(),
			success_message: "Form submitted successfully!".to_string(),
			notification: NotificationSettings::default(),
		}
	}
}

impl PagesSettings {
	/// Load settings from TOML text
	///
	/// # Examples
	///
	/// ```
	/// use formgen_pages::PagesSettings;
	///
	/// let settings = PagesSettings::from_toml_str("submit_label = \"Send\"").unwrap();
	/// assert_eq!(settings.submit_label, "Send");
	/// assert_eq!(settings.success_message, "Form submitted successfully!");
	/// ```
	pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(text)?)
	}

	/// Set the submit button label
	pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
		self.submit_label = label.into();
		self
	}

	/// Set the success notification text
	pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
		self.success_message = message.into();
		self
	}

	/// Set the notification timings
	pub fn with_notification(mut self, notification: NotificationSettings) -> Self {
		self.notification = notification;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let settings = PagesSettings::default();
		assert_eq!(settings.submit_label, "Submit Form");
		assert_eq!(settings.notification.total(), Duration::from_millis(3310));
	}

	#[rstest]
	fn test_partial_toml_keeps_defaults() {
		let settings = PagesSettings::from_toml_str(
			r#"
			success_message = "Saved"

			[notification]
			display_ms = 500
			"#,
		)
		.unwrap();

		assert_eq!(settings.submit_label, "Submit Form");
		assert_eq!(settings.success_message, "Saved");
		assert_eq!(settings.notification.display_ms, 500);
		assert_eq!(settings.notification.fade_out_ms, 300);
	}

	#[rstest]
	#[case("submit_label = ")]
	#[case("[notification]\ndisplay_ms = \"long\"")]
	fn test_invalid_toml_is_rejected(#[case] text: &str) {
		let err = PagesSettings::from_toml_str(text).unwrap_err();
		assert!(err.to_string().starts_with("TOML parse error"));
	}

	#[rstest]
	fn test_empty_toml_is_default() {
		assert_eq!(PagesSettings::from_toml_str("").unwrap(), PagesSettings::default());
	}
}
