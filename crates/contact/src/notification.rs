use chrono::{DateTime, SecondsFormat, Utc};

use crate::Submission;

pub const NOTIFICATION_HEADER: &str = "NEW SIP & SLAY WEBSITE SUBMISSION";
pub const NAME_PLACEHOLDER: &str = "(not provided)";

/// Subject and plain-text body of the email sent for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub text: String,
}

impl Notification {
    pub fn compose(submission: &Submission, sent_at: DateTime<Utc>) -> Self {
        let subject = format!(
            "New Quote Request — {} ({})",
            submission.event_type, submission.date
        );

        let name = if submission.name.is_empty() {
            NAME_PLACEHOLDER
        } else {
            submission.name.as_str()
        };

        let text = [
            NOTIFICATION_HEADER.to_owned(),
            String::new(),
            format!("Name: {name}"),
            format!("Email: {}", submission.email),
            format!("Phone: {}", submission.phone),
            String::new(),
            format!("Date: {}", submission.date),
            format!("City: {}", submission.city),
            format!("Guest count: {}", submission.guest_count),
            format!("Event type: {}", submission.event_type),
            format!("Hours: {}", submission.hours),
            format!("Vibe/theme: {}", submission.vibe_theme),
            format!("Alcohol preference: {}", submission.alcohol_preference),
            String::new(),
            format!(
                "Sent: {}",
                sent_at.to_rfc3339_opts(SecondsFormat::Millis, true)
            ),
        ]
        .join("\n");

        Self { subject, text }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn submission() -> Submission {
        Submission {
            name: String::new(),
            email: "a@b.com".to_owned(),
            phone: "555".to_owned(),
            date: "1/1/2026".to_owned(),
            city: "Chicago".to_owned(),
            guest_count: "50".to_owned(),
            event_type: "Birthday".to_owned(),
            hours: "4".to_owned(),
            vibe_theme: "Gold".to_owned(),
            alcohol_preference: "Both".to_owned(),
            website: String::new(),
        }
    }

    #[test]
    fn subject_embeds_event_type_and_date() {
        let sent_at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let notification = Notification::compose(&submission(), sent_at);

        assert_eq!(notification.subject, "New Quote Request — Birthday (1/1/2026)");
    }

    #[test]
    fn body_layout() {
        let sent_at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let notification = Notification::compose(&submission(), sent_at);

        let expected = "NEW SIP & SLAY WEBSITE SUBMISSION\n\
            \n\
            Name: (not provided)\n\
            Email: a@b.com\n\
            Phone: 555\n\
            \n\
            Date: 1/1/2026\n\
            City: Chicago\n\
            Guest count: 50\n\
            Event type: Birthday\n\
            Hours: 4\n\
            Vibe/theme: Gold\n\
            Alcohol preference: Both\n\
            \n\
            Sent: 2026-01-02T03:04:05.000Z";

        assert_eq!(notification.text, expected);
    }

    #[test]
    fn provided_name_is_used() {
        let mut submission = submission();
        submission.name = "Jess".to_owned();

        let notification = Notification::compose(&submission, Utc::now());
        assert!(notification.text.contains("\nName: Jess\n"));
    }
}
