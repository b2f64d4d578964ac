use chrono::Local;
use uuid::Uuid;

/// A complete plain-text email ready for submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestMessage {
    to: String,
    subject: String,
    body: String,
    date: String,
    message_id: String,
}

impl DigestMessage {
    /// Creates a message stamped with the current local time and a fresh
    /// Message-ID.
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            date: Local::now().to_rfc2822(),
            message_id: format!("<{}@heavens-digest>", Uuid::new_v4()),
        }
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Renders headers and body in the form `sendmail -t` reads from stdin
    pub fn to_rfc822(&self) -> String {
        let mut output = String::new();
        output.push_str("MIME-Version: 1.0\n");
        output.push_str("Content-Type: text/plain; charset=\"utf-8\"\n");
        output.push_str("Content-Transfer-Encoding: 8bit\n");
        output.push_str(&format!("Date: {}\n", self.date));
        output.push_str(&format!("Message-ID: {}\n", self.message_id));
        output.push_str(&format!("To: {}\n", self.to));
        output.push_str(&format!("Subject: {}\n", self.subject));
        output.push('\n');
        output.push_str(&self.body);
        if !self.body.ends_with('\n') {
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rfc822_headers_then_body() {
        let message = DigestMessage::new(
            "atl@jbcrawford.us",
            "Upcoming astronomical events",
            "Hello\n",
        );
        let rendered = message.to_rfc822();

        let (headers, body) = rendered.split_once("\n\n").unwrap();
        assert!(headers.contains("To: atl@jbcrawford.us"));
        assert!(headers.contains("Subject: Upcoming astronomical events"));
        assert!(headers.contains("Content-Type: text/plain; charset=\"utf-8\""));
        assert!(headers.contains("Date: "));
        assert!(headers.contains("Message-ID: <"));
        assert_eq!(body, "Hello\n");
    }

    #[test]
    fn test_to_rfc822_terminates_body() {
        let message = DigestMessage::new("a@b.c", "s", "no newline");
        assert!(message.to_rfc822().ends_with("no newline\n"));
    }

    #[test]
    fn test_to_rfc822_is_stable_per_message() {
        let message = DigestMessage::new("a@b.c", "s", "body");
        assert_eq!(message.to_rfc822(), message.to_rfc822());
    }

    #[test]
    fn test_message_ids_are_unique() {
        let first = DigestMessage::new("a@b.c", "s", "body");
        let second = DigestMessage::new("a@b.c", "s", "body");
        assert_ne!(first.message_id, second.message_id);
    }
}
