pub mod note_body;
pub mod note_id;

pub use note_body::NoteBody;
pub use note_id::{NoteId, parse_note_id};
