//! Delete Confirmation Flow state
//!
//! The dialog holds exactly one pending target. Nothing goes to the backend
//! until `confirm`, and a second confirm while the first is in flight is a
//! no-op.

use contracts::domain::common::Record;

use super::gateway::{GatewayError, Operation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTicket(u64);

/// What the list should do once the delete call returned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Deleted (or already gone): re-fetch the list
    Refresh,
    /// Keep the list, show the message
    Failed(String),
    /// Result of a call the gate no longer waits for
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteGate<T> {
    target: Option<T>,
    in_flight: bool,
    seq: u64,
}

impl<T> Default for DeleteGate<T> {
    fn default() -> Self {
        Self {
            target: None,
            in_flight: false,
            seq: 0,
        }
    }
}

impl<T: Record + Clone> DeleteGate<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for confirmation on `record`. Ignored while a delete is running.
    pub fn open(&mut self, record: T) {
        if self.in_flight {
            return;
        }
        self.target = Some(record);
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    pub fn title(&self) -> String {
        format!("Delete {}", T::element_name())
    }

    /// "Are you sure you want to delete Central?"
    pub fn message(&self) -> Option<String> {
        self.target
            .as_ref()
            .map(|t| format!("Are you sure you want to delete {}?", t.display_name()))
    }

    /// Close without touching the backend
    pub fn cancel(&mut self) {
        if !self.in_flight {
            self.target = None;
        }
    }

    /// User pressed the destructive button. Returns the ticket and the id to
    /// delete, or `None` when there is nothing to do.
    pub fn confirm(&mut self) -> Option<(DeleteTicket, String)> {
        if self.in_flight {
            return None;
        }
        let id = self.target.as_ref()?.id().to_string();
        self.in_flight = true;
        self.seq += 1;
        Some((DeleteTicket(self.seq), id))
    }

    /// The delete call returned; the dialog closes either way
    pub fn finish(&mut self, ticket: DeleteTicket, result: Result<(), GatewayError>) -> DeleteOutcome {
        if !self.in_flight || ticket.0 != self.seq {
            return DeleteOutcome::Ignored;
        }
        self.in_flight = false;
        let name = self
            .target
            .take()
            .map(|t| t.display_name().to_string())
            .unwrap_or_default();

        match result {
            Ok(()) => {
                log::info!("Deleted {} {}", T::message_noun(), name);
                DeleteOutcome::Refresh
            }
            Err(GatewayError::NotFound) => {
                log::warn!("{} {} was already gone", T::element_name(), name);
                DeleteOutcome::Refresh
            }
            Err(error) => {
                DeleteOutcome::Failed(error.user_message(Operation::Delete, T::message_noun()))
            }
        }
    }
}
