//! UI components for Keepsake.

mod love_meter;
mod note_card;
mod password_gate;

pub mod anniversary;
pub mod overlays;

pub use love_meter::LoveMeter;
pub use note_card::NoteCard;
pub use password_gate::PasswordGate;
