use std::collections::VecDeque;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::SessionError;

/// Reads whitespace-delimited tokens, one line at a time.
///
/// Several answers may share a line; blank lines are skipped.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: AsyncBufRead + Unpin> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `UnexpectedEof` naming the field being read.
    pub async fn next_token(&mut self, field: &'static str) -> Result<String, SessionError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line).await? == 0 {
                return Err(SessionError::UnexpectedEof { field });
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Next token parsed as a ticket count.
    pub async fn next_ticket_count(&mut self) -> Result<u32, SessionError> {
        let raw = self.next_token("number of tickets").await?;
        raw.parse::<u32>()
            .map_err(|_| SessionError::InvalidTicketCount { raw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_one_token_per_line() {
        let mut reader = TokenReader::new("Ada\nLovelace\n".as_bytes());
        assert_eq!(reader.next_token("first name").await.unwrap(), "Ada");
        assert_eq!(reader.next_token("last name").await.unwrap(), "Lovelace");
    }

    #[tokio::test]
    async fn test_tokens_sharing_a_line_and_blank_lines() {
        let mut reader = TokenReader::new("  Ada   Lovelace\n\n\nada@x.com 3".as_bytes());
        assert_eq!(reader.next_token("first name").await.unwrap(), "Ada");
        assert_eq!(reader.next_token("last name").await.unwrap(), "Lovelace");
        assert_eq!(reader.next_token("email").await.unwrap(), "ada@x.com");
        assert_eq!(reader.next_ticket_count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_eof_names_the_field() {
        let mut reader = TokenReader::new("Ada\n".as_bytes());
        reader.next_token("first name").await.unwrap();
        let err = reader.next_token("last name").await.unwrap_err();
        assert!(matches!(err, SessionError::UnexpectedEof { field: "last name" }));
    }

    #[tokio::test]
    async fn test_malformed_ticket_count() {
        for raw in ["three", "-1", "2.5"] {
            let mut reader = TokenReader::new(raw.as_bytes());
            let err = reader.next_ticket_count().await.unwrap_err();
            match err {
                SessionError::InvalidTicketCount { raw: got } => assert_eq!(got, raw),
                other => panic!("unexpected error: {other}"),
            }
        }
    }
}
