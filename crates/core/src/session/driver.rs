use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};

use super::{SessionError, TokenReader};
use crate::booking::{validate_booking, BookingLedger, BookingRecord};
use crate::config::Config;
use crate::notifier::{ConfirmationSink, DeferredNotifier};
use crate::sync::CompletionBarrier;

/// What a finished session booked.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub record: BookingRecord,
    pub remaining: u32,
    pub sold_out: bool,
}

/// Drives one booking from greeting to confirmation.
///
/// Owns all mutable state; the notifier only ever sees the immutable
/// confirmation fields of a record.
pub struct BookingSession<R, W> {
    config: Config,
    ledger: BookingLedger,
    barrier: CompletionBarrier,
    notifier: DeferredNotifier,
    input: TokenReader<R>,
    output: W,
}

impl<R, W> BookingSession<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(config: Config, sink: Arc<dyn ConfirmationSink>, input: R, output: W) -> Self {
        let ledger = BookingLedger::new(config.conference.total_tickets);
        let notifier = DeferredNotifier::new(config.notifier.delay(), sink);
        Self {
            config,
            ledger,
            barrier: CompletionBarrier::new(),
            notifier,
            input: TokenReader::new(input),
            output,
        }
    }

    pub fn ledger(&self) -> &BookingLedger {
        &self.ledger
    }

    /// Run the single-pass booking flow.
    ///
    /// Returns only after the confirmation task has finished.
    pub async fn run(&mut self) -> Result<SessionSummary, SessionError> {
        tracing::info!(
            conference = %self.config.conference.name,
            remaining = self.ledger.remaining(),
            "Booking session started"
        );

        self.greet().await?;

        let first_name = self.prompt("first name", "Enter your first name").await?;
        let last_name = self.prompt("last name", "Enter your last name").await?;
        let email = self.prompt("email", "Enter your email").await?;
        self.say("Enter number of tickets").await?;
        let tickets = self.input.next_ticket_count().await?;

        let report = validate_booking(
            &first_name,
            &last_name,
            &email,
            tickets,
            self.ledger.remaining(),
        );
        if !report.is_valid() {
            let problems = report.problems();
            tracing::warn!(?problems, "Booking input failed validation");

            if self.config.booking.enforce_validation {
                return Err(SessionError::InvalidInput { problems });
            }

            self.say("Please enter valid input!!").await?;
            for problem in problems {
                self.say(&format!("  - {}", problem)).await?;
            }
        }

        let booked = self
            .ledger
            .book(BookingRecord::new(first_name, last_name, email, tickets))
            .map(BookingRecord::clone);
        let record = match booked {
            Ok(record) => record,
            Err(e) => {
                self.say(&format!("Your booking could not be completed: {}", e))
                    .await?;
                return Err(e.into());
            }
        };

        self.say(&format!(
            "Thank you {} {} for purchasing {} tickets. You will receive a confirmation email at {}",
            record.first_name(),
            record.last_name(),
            record.tickets(),
            record.email()
        ))
        .await?;
        self.say(&format!(
            "There are {} tickets remaining for {}",
            self.ledger.remaining(),
            self.config.conference.name
        ))
        .await?;

        // Joined through the barrier below, not the handle.
        self.notifier.launch(record.confirmation(), &self.barrier);

        self.say(&format!(
            "The first names of bookings are: [{}]",
            self.ledger.first_names().join(" ")
        ))
        .await?;
        self.say(&format!("The list of bookings is: {}", self.ledger))
            .await?;

        let sold_out = self.ledger.is_sold_out();
        if sold_out {
            tracing::info!(conference = %self.config.conference.name, "Sold out");
            self.say("Booking full. Come back next year").await?;
        }

        tracing::debug!(
            outstanding = self.barrier.outstanding(),
            "Waiting for confirmations"
        );
        self.barrier.wait().await;
        tracing::info!("Booking session finished");

        Ok(SessionSummary {
            record,
            remaining: self.ledger.remaining(),
            sold_out,
        })
    }

    async fn greet(&mut self) -> Result<(), SessionError> {
        let greeting = format!(
            "Welcome to {} booking application\nTotal tickets are {} and tickets remaining are {}\nGet your tickets here!!",
            self.config.conference.name,
            self.ledger.total_capacity(),
            self.ledger.remaining()
        );
        self.say(&greeting).await
    }

    async fn prompt(&mut self, field: &'static str, text: &str) -> Result<String, SessionError> {
        self.say(text).await?;
        self.input.next_token(field).await
    }

    /// Write one line in a single call, so a confirmation printed from the
    /// notifier task can only land between lines.
    async fn say(&mut self, line: &str) -> Result<(), SessionError> {
        self.output
            .write_all(format!("{}\n", line).as_bytes())
            .await?;
        self.output.flush().await?;
        Ok(())
    }
}
