//! Ordering of graph fetches.
//!
//! Fetches are not cancelled when the subject changes, so responses can land
//! out of order. Every fetch carries a ticket; only the newest ticket may
//! replace the live data set.

use log::{debug, error};

use super::types::GraphData;
use crate::api::LoadError;

/// Identifies one fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
	generation: u64,
	subject: String,
}

impl LoadTicket {
	/// The subject this fetch is for.
	pub fn subject(&self) -> &str {
		&self.subject
	}
}

/// Issues tickets and tells whether a ticket is still the newest.
#[derive(Debug, Default)]
pub struct LoadSequence {
	generation: u64,
}

impl LoadSequence {
	/// A sequence with no fetch issued yet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a fetch for `subject`. A blank subject issues no fetch but
	/// still supersedes any fetch in flight.
	pub fn begin(&mut self, subject: &str) -> Option<LoadTicket> {
		self.generation += 1;
		let subject = subject.trim();
		if subject.is_empty() {
			return None;
		}
		Some(LoadTicket {
			generation: self.generation,
			subject: subject.to_owned(),
		})
	}

	/// True if no later fetch has begun since `ticket`.
	pub fn is_current(&self, ticket: &LoadTicket) -> bool {
		ticket.generation == self.generation
	}

	/// Resolves a finished fetch to the data set that should go live, if any.
	///
	/// Failures and stale responses are logged and yield `None`, leaving the
	/// live data set untouched.
	pub fn settle(&self, ticket: &LoadTicket, result: Result<GraphData, LoadError>) -> Option<GraphData> {
		if !self.is_current(ticket) {
			debug!("discarding stale graph response for {:?}", ticket.subject);
			return None;
		}
		match result {
			Ok(data) => Some(data),
			Err(e) => {
				error!("error fetching graph data for {:?}: {}", ticket.subject, e);
				None
			}
		}
	}
}
