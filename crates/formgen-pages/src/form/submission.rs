//! Submission handling

use crate::notification::Notifier;
use formgen_forms::SubmissionData;
use std::rc::Rc;

/// Receives the values of a form whose fields all passed validation.
pub type SubmitHandler = Rc<dyn Fn(SubmissionData)>;

/// Default submission handler.
///
/// Logs the data as JSON and shows `message` as a success notification.
/// Nothing is sent anywhere.
///
/// # Examples
///
/// ```
/// use formgen_forms::SubmissionData;
/// use formgen_pages::config::NotificationSettings;
/// use formgen_pages::dom::Element;
/// use formgen_pages::form::handle_submit;
/// use formgen_pages::notification::Notifier;
/// use formgen_pages::timer::ManualScheduler;
/// use std::rc::Rc;
///
/// let body = Element::new("body");
/// let notifier = Notifier::new(
///     body.clone(),
///     Rc::new(ManualScheduler::new()),
///     NotificationSettings::default(),
/// );
///
/// let mut data = SubmissionData::new();
/// data.insert("n".to_string(), "Ada".to_string());
/// handle_submit(&notifier, "Form submitted successfully!", &data);
///
/// assert_eq!(body.text_content(), "Form submitted successfully!");
/// ```
pub fn handle_submit(notifier: &Notifier, message: &str, data: &SubmissionData) {
	match serde_json::to_string(data) {
		Ok(json) => crate::info_log!("Form submitted: {}", json),
		Err(err) => crate::error_log!("Form submitted, data not printable: {}", err),
	}
	notifier.notify(message);
}

/// Handler used when the host installs none
pub(crate) fn default_handler(notifier: Notifier, message: String) -> SubmitHandler {
	Rc::new(move |data: SubmissionData| handle_submit(&notifier, &message, &data))
}
