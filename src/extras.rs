/// The echo chamber.
///
/// Reads one non-blank line and repeats it back a fixed number of times.
pub mod echo;
/// The joke bank.
///
/// A fixed pool of one-liners and a uniform random picker over it.
pub mod jokes;
/// The inverted-triangle printer.
///
/// Consumes a raw row-count token, validates it, and renders a numeric
/// triangle pattern that shrinks one column per row.
pub mod triangle;
