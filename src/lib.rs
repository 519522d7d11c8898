//! # confab
//!
//! confab is a friendly, interactive command-line assistant. It greets the
//! user by name, presents a fixed menu of commands, and loops on reading a
//! command, executing it, and reporting the result: quick binary
//! arithmetic, an adaptive number-guessing game, and a few small
//! diversions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io;

use crate::{error::SessionError, session::Session};

/// The arithmetic engine and its input validation.
///
/// This module groups the numeric-token lexer, the fixed set of binary
/// operations, and the result display rule. Everything here is a pure
/// function: raw operand tokens go in, a tagged value-or-error result
/// comes out.
///
/// # Responsibilities
/// - Decides whether a raw token is parseable as a real number.
/// - Evaluates the seven named operations with shared validation and
///   divide-by-zero handling.
/// - Formats numeric results for display.
pub mod calculator;
/// Best-effort console clearing.
///
/// A single collaborator that shells out to the platform's clear command.
/// On an unrecognized platform it exits the process, so callers treat it
/// as a call that may not return.
pub mod console;
/// Provides unified error types for the session.
///
/// This module defines all errors the crate surfaces as values: arithmetic
/// failures reported back to the user, and console-stream failures that
/// end the session.
///
/// # Responsibilities
/// - Defines error enums for the arithmetic engine and the session loop.
/// - Keeps user-facing failure text in one place.
/// - Supports integration with standard error handling traits.
pub mod error;
/// The non-arithmetic diversions.
///
/// Jokes, the echo chamber, and the inverted-triangle printer. Each is a
/// direct single-call collaborator with no state outliving its command.
pub mod extras;
/// The adaptive number-guessing game.
///
/// The only command with real iterative state: a hidden target that shifts
/// one step after every wrong guess, capped at fixed bounds.
pub mod game;
/// Orchestrates the interactive session.
///
/// This module ties together the command vocabulary, the prompt helpers,
/// and the dispatch loop that owns all session state.
///
/// # Responsibilities
/// - Collects the user's name and greets them once at startup.
/// - Reads, classifies, and routes command tokens until a confirmed quit.
/// - Recovers every user mistake locally by re-prompting.
pub mod session;

/// Runs an interactive session over standard input and output.
///
/// This is the binary's whole job: wire the locked standard streams into a
/// [`Session`] and drive it until a confirmed quit.
///
/// # Errors
/// Returns an error if reading from or writing to the standard streams
/// fails, including the input stream ending before the session was quit.
pub fn run() -> Result<(), SessionError> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run()
}
