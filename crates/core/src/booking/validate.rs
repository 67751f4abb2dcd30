//! Structural checks on a booking request.
//!
//! Every check is independent and side-effect free. The caller decides what
//! an invalid verdict means.

/// Verdicts for one candidate booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    pub name_valid: bool,
    pub email_valid: bool,
    pub tickets_valid: bool,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.name_valid && self.email_valid && self.tickets_valid
    }

    /// Human-readable reasons for each failed verdict.
    pub fn problems(&self) -> Vec<&'static str> {
        let mut problems = Vec::new();
        if !self.name_valid {
            problems.push("first name or last name you entered is empty");
        }
        if !self.email_valid {
            problems.push("email address you entered doesn't contain @ and .");
        }
        if !self.tickets_valid {
            problems.push("number of tickets you entered is invalid");
        }
        problems
    }
}

/// Check first name, last name, email and ticket count in one go.
pub fn validate_booking(
    first_name: &str,
    last_name: &str,
    email: &str,
    requested: u32,
    remaining: u32,
) -> ValidationReport {
    ValidationReport {
        name_valid: is_valid_name(first_name) && is_valid_name(last_name),
        email_valid: is_valid_email(email),
        tickets_valid: is_valid_ticket_count(requested, remaining),
    }
}

pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Substring check only, not an address grammar.
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

pub fn is_valid_ticket_count(requested: u32, remaining: u32) -> bool {
    requested >= 1 && requested <= remaining
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email(".@"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.b"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_ticket_count_bounds() {
        assert!(!is_valid_ticket_count(0, 50));
        assert!(is_valid_ticket_count(1, 50));
        assert!(is_valid_ticket_count(50, 50));
        assert!(!is_valid_ticket_count(51, 50));
        assert!(!is_valid_ticket_count(1, 0));
    }

    #[test]
    fn test_name() {
        assert!(is_valid_name("Ada"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("  "));
    }

    #[test]
    fn test_validate_booking_all_valid() {
        let report = validate_booking("Ada", "Lovelace", "ada@x.com", 3, 50);
        assert!(report.is_valid());
        assert!(report.problems().is_empty());
    }

    #[test]
    fn test_validate_booking_verdicts_are_independent() {
        let report = validate_booking("Ada", "", "ada@x.com", 51, 50);
        assert_eq!(
            report,
            ValidationReport {
                name_valid: false,
                email_valid: true,
                tickets_valid: false,
            }
        );
        assert!(!report.is_valid());
        assert_eq!(report.problems().len(), 2);
    }
}
