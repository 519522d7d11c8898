/// The command vocabulary.
///
/// Defines the fixed, case-insensitive set of command names and the lookup
/// from a raw token to a [`Command`](command::Command). Alias names are
/// separate keys in the lookup resolving to one handler.
pub mod command;
/// The command dispatcher.
///
/// Owns the read-classify-route-continue loop and all session state: the
/// user's name and the terminate flag. Everything else the session touches
/// is either a pure function or transient per-command state.
pub mod dispatcher;
/// Blocking line prompts.
///
/// Small helpers that write a prompt, flush, and block on one line of
/// input, with the re-prompt-until-non-blank variant used by the name
/// collection and the echo chamber.
pub mod prompt;

pub use command::{Command, COMMAND_NAMES};
pub use dispatcher::Session;
