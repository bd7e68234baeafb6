//! Session-local registration state.
//!
//! The book tracks which tournaments the current session has registered
//! for. Nothing is confirmed or persisted anywhere; the set dies with the
//! session.

use super::models::{Tournament, TournamentId};
use log::info;
use std::collections::HashSet;
use thiserror::Error;

/// Registration errors
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RegistrationError {
    #[error("Registration for {0} is closed")]
    Closed(String),

    #[error("{0} is full")]
    Full(String),
}

/// Outcome of a successful registration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Registered {
    /// The tournament was added to the session's set.
    New,
    /// Already in the set; registering again changes nothing.
    Already,
}

/// The session's registered-tournament set.
#[derive(Clone, Debug, Default)]
pub struct RegistrationBook {
    registered: HashSet<TournamentId>,
}

impl RegistrationBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register for a tournament. Idempotent: a second registration reports
    /// [`Registered::Already`] and has no further effect. Rejected while
    /// registration is closed or the tournament is full.
    pub fn register(&mut self, tournament: &Tournament) -> Result<Registered, RegistrationError> {
        if !tournament.registration_open {
            return Err(RegistrationError::Closed(tournament.name.clone()));
        }
        if tournament.is_full() {
            return Err(RegistrationError::Full(tournament.name.clone()));
        }

        if self.registered.insert(tournament.id.clone()) {
            info!("registered for tournament {}", tournament.id);
            Ok(Registered::New)
        } else {
            Ok(Registered::Already)
        }
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.registered.contains(id)
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }
}
