// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive editor.
//
// Module responsibilities:
// - `validate`: Pure syntax checks for usernames and account identifiers.
// - `store`: The in-memory account collection and its persistence to the
//   launcher's accounts.json.
// - `ui`: Implements the terminal-based menus and delegates mutations to
//   `store`.
//
// Keeping this separation makes it easier to test the store and the
// validators without a terminal attached.
pub mod store;
pub mod ui;
pub mod validate;
