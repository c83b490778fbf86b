// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! An unpublished crate containing testing utilities for use within this repo.

use std::any::Any;
use std::env;

mod log;
mod macros;
mod recorder;

pub use log::*;
pub use recorder::Recorder;

/// Whether the process is running under cargo-mutants, as signaled by `MUTATION_TESTING=1`.
#[must_use]
pub fn is_mutation_testing() -> bool {
    env::var("MUTATION_TESTING").as_deref() == Ok("1")
}

/// Turns the payload of a caught panic into its message.
///
/// Panics raised with a literal carry a `&str`, formatted ones a `String`. Anything else
/// yields a placeholder, since there is no message to recover.
#[cfg_attr(test, mutants::skip)] // This is test logic - pointless to mutate.
#[must_use]
pub fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => payload
            .downcast_ref::<&str>()
            .map_or_else(|| "<non-string panic payload>".to_owned(), |message| (*message).to_owned()),
    }
}
