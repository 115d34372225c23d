//! Hardcoded content tables: the daily notes, the sealed letters, and the
//! photo gallery. Everything here is data, not logic.

pub mod letters;
pub mod notes;
pub mod photos;
