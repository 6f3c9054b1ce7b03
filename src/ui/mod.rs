//! Line-based interactive front end: input parsing, rendering, session loop

mod input;
mod render;
mod session;

pub use input::{EditorInput, HELP, Input, parse_command, parse_editor_line};
pub use render::{note_line, prompt, render};
pub use session::Session;
