//! Anniversary experience unlock state.
//!
//! Five sealed letters hang as stars in a constellation; opening a letter
//! unlocks two gallery photos. The state is persisted per device (see
//! [`crate::storage::Store`]) so progress survives restarts.

use serde::{Deserialize, Serialize};

use crate::content::letters::LETTER_COUNT;
use crate::content::photos::{PHOTOS, PHOTOS_PER_LETTER};

/// Persisted unlock state for the anniversary experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnniversaryState {
    pub opened_letters: [bool; LETTER_COUNT],
    /// Index of the letter opened most recently, -1 when none.
    pub last_letter_index: i32,
    pub audio_muted: bool,
    pub audio_volume: f32,
    pub has_completed_vows: bool,
    pub unlocked_photo_count: usize,
    pub heartbeat_mode: bool,
    pub has_seen_montage: bool,
}

impl Default for AnniversaryState {
    fn default() -> Self {
        Self {
            opened_letters: [false; LETTER_COUNT],
            last_letter_index: -1,
            audio_muted: false,
            audio_volume: 0.5,
            has_completed_vows: false,
            unlocked_photo_count: 0,
            heartbeat_mode: true,
            has_seen_montage: false,
        }
    }
}

impl AnniversaryState {
    /// Mark a letter opened and unlock its photos.
    ///
    /// Idempotent: reopening an already-open letter changes nothing.
    /// Returns `true` if the letter was newly opened.
    pub fn open_letter(&mut self, index: usize) -> bool {
        if index >= LETTER_COUNT || self.opened_letters[index] {
            return false;
        }
        self.opened_letters[index] = true;
        self.last_letter_index = index as i32;
        self.unlocked_photo_count =
            (self.unlocked_photo_count + PHOTOS_PER_LETTER).min(PHOTOS.len());
        true
    }

    pub fn all_letters_opened(&self) -> bool {
        self.opened_letters.iter().all(|&opened| opened)
    }

    pub fn opened_letter_count(&self) -> usize {
        self.opened_letters.iter().filter(|&&opened| opened).count()
    }

    pub fn complete_vows(&mut self) {
        self.has_completed_vows = true;
    }

    pub fn set_heartbeat_mode(&mut self, enabled: bool) {
        self.heartbeat_mode = enabled;
    }

    pub fn set_has_seen_montage(&mut self, seen: bool) {
        self.has_seen_montage = seen;
    }

    pub fn set_audio_settings(&mut self, muted: bool, volume: f32) {
        self.audio_muted = muted;
        self.audio_volume = volume.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_letter_unlocks_photos() {
        let mut state = AnniversaryState::default();
        assert!(state.open_letter(0));
        assert_eq!(state.unlocked_photo_count, 2);
        assert_eq!(state.last_letter_index, 0);
        assert_eq!(state.opened_letter_count(), 1);
    }

    #[test]
    fn test_open_letter_is_idempotent() {
        let mut state = AnniversaryState::default();
        assert!(state.open_letter(2));
        assert!(!state.open_letter(2));
        assert_eq!(state.unlocked_photo_count, 2);
    }

    #[test]
    fn test_photo_unlock_caps_at_photo_count() {
        let mut state = AnniversaryState::default();
        for i in 0..LETTER_COUNT {
            state.open_letter(i);
        }
        assert!(state.all_letters_opened());
        assert_eq!(state.unlocked_photo_count, PHOTOS.len());
    }

    #[test]
    fn test_out_of_range_letter_is_rejected() {
        let mut state = AnniversaryState::default();
        assert!(!state.open_letter(LETTER_COUNT));
        assert_eq!(state, AnniversaryState::default());
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut state = AnniversaryState::default();
        state.set_audio_settings(true, 2.5);
        assert!(state.audio_muted);
        assert_eq!(state.audio_volume, 1.0);
    }

    #[test]
    fn test_roundtrip_through_json() {
        let mut state = AnniversaryState::default();
        state.open_letter(1);
        state.complete_vows();
        let json = serde_json::to_string(&state).unwrap();
        let restored: AnniversaryState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, restored);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        // Older stores may not carry every field.
        let restored: AnniversaryState =
            serde_json::from_str(r#"{"opened_letters":[true,false,false,false,false]}"#).unwrap();
        assert_eq!(restored.opened_letter_count(), 1);
        assert!(restored.heartbeat_mode);
        assert_eq!(restored.audio_volume, 0.5);
    }
}
