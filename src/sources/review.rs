//! Review records parsed from partition text.
use log::debug;

/// One review line: posting date, subject and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub date: String,
    pub subject: String,
    pub body: String,
}

impl Review {
    /// Parse one tab-separated `date \t subject \t body` line.
    ///
    /// Lines with fewer than three fields, or whose subject and body are
    /// both empty after trimming, are rejected. Content past the third field
    /// is dropped.
    pub fn parse(line: &str) -> Option<Self> {
        if line.trim().is_empty() {
            return None;
        }
        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() < 3 {
            return None;
        }
        let date = parts[0].trim();
        let subject = parts[1].trim();
        let body = parts[2].trim();
        if subject.is_empty() && body.is_empty() {
            return None;
        }
        Some(Self {
            date: date.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        })
    }

    /// Every well-formed review line of `text`, in order. Non-blank lines
    /// that do not parse are logged and dropped.
    pub fn parse_document(text: &str) -> Vec<Review> {
        let mut reviews = Vec::new();
        for (number, line) in text.lines().enumerate() {
            match Review::parse(line) {
                Some(review) => reviews.push(review),
                None => {
                    if !line.trim().is_empty() {
                        debug!("skipping unparseable review line {}", number + 1);
                    }
                }
            }
        }
        reviews
    }
}

#[cfg(test)]
mod tests {
    use super::Review;

    #[test]
    fn well_formed_line() {
        let review = Review::parse("Jan 2 2019\tGreat stay\tWould return.").unwrap();
        assert_eq!(review.date, "Jan 2 2019");
        assert_eq!(review.subject, "Great stay");
        assert_eq!(review.body, "Would return.");
    }

    #[test]
    fn fields_are_trimmed() {
        let review = Review::parse("  Jan 2 \t Great stay \t Would return. ").unwrap();
        assert_eq!(review.date, "Jan 2");
        assert_eq!(review.subject, "Great stay");
        assert_eq!(review.body, "Would return.");
    }

    #[test]
    fn extra_fields_dropped() {
        let review = Review::parse("d\ts\tbody text\tignored\tmore").unwrap();
        assert_eq!(review.body, "body text");
    }

    #[test]
    fn short_lines_rejected() {
        assert!(Review::parse("").is_none());
        assert!(Review::parse("   ").is_none());
        assert!(Review::parse("date only").is_none());
        assert!(Review::parse("d\ts").is_none());
    }

    #[test]
    fn blank_subject_and_body_rejected() {
        assert!(Review::parse("Jan 2\t\t").is_none());
        assert!(Review::parse("Jan 2\t \t  ").is_none());
        assert!(Review::parse("Jan 2\tSubject\t").is_some());
        assert!(Review::parse("Jan 2\t\tBody").is_some());
    }

    #[test]
    fn empty_date_is_acceptable() {
        let review = Review::parse("\tSubject\tBody").unwrap();
        assert_eq!(review.date, "");
    }

    #[test]
    fn document_parsing_keeps_order_and_skips_noise() {
        let text = "d1\ts1\tb1\n\nnot a review\nd2\ts2\tb2\r\nd3\t\t\n";
        let reviews = Review::parse_document(text);
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].subject, "s1");
        assert_eq!(reviews[1].subject, "s2");
    }
}
