/// Line that opens and closes a rendered confirmation block
pub const CONFIRMATION_MARKER: &str = "##################";

/// Everything a confirmation needs to know about a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub tickets: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Confirmation {
    /// e.g. `3 tickets for Ada Lovelace`
    pub fn ticket_line(&self) -> String {
        format!(
            "{} tickets for {} {}",
            self.tickets, self.first_name, self.last_name
        )
    }
}

/// Render the confirmation block, marker lines included.
pub fn render_confirmation(confirmation: &Confirmation) -> String {
    format!(
        "{marker}\nSending ticket:\n {ticket}\n to email address {email}\n{marker}\n",
        marker = CONFIRMATION_MARKER,
        ticket = confirmation.ticket_line(),
        email = confirmation.email,
    )
}
