//! Request-scoped error accumulator.
//!
//! A handler creates one [`Notifications`] per request and lends it mutably
//! to every service call. Services record business-rule failures here
//! instead of returning `Err`; the response helpers read it back when
//! building the envelope.

use serde::Serialize;
use std::fmt;

/// A single error message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    message: String,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Ordered list of notifications for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error message.
    pub fn add(&mut self, message: impl Into<String>) {
        let notification = Notification::new(message);
        tracing::debug!(message = %notification, "Notification recorded");
        self.items.push(notification);
    }

    pub fn has_errors(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Messages in insertion order, ready for the envelope's `errors` field.
    pub fn messages(&self) -> Vec<String> {
        self.items.iter().map(|n| n.message.clone()).collect()
    }

    pub fn into_messages(self) -> Vec<String> {
        self.items.into_iter().map(|n| n.message).collect()
    }
}

impl<S: Into<String>> Extend<S> for Notifications {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for message in iter {
            self.add(message);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Notifications {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut notifications = Self::new();
        notifications.extend(iter);
        notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut notes = Notifications::new();
        assert!(!notes.has_errors());

        notes.add("first");
        notes.add(String::from("second"));

        assert!(notes.has_errors());
        assert_eq!(notes.len(), 2);
        assert_eq!(notes.messages(), vec!["first", "second"]);
        assert_eq!(notes.iter().next().map(Notification::message), Some("first"));
    }

    #[test]
    fn test_collect_from_strings() {
        let notes: Notifications = ["a", "b"].into_iter().collect();
        assert_eq!(notes.into_messages(), vec!["a", "b"]);
    }
}
