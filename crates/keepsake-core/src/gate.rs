//! Riddle gate.
//!
//! Not an access-control boundary: the "password" is a shared riddle answer.
//! The answer is normalized (trimmed, lowercased), hashed with SHA-256, and
//! compared against a hardcoded digest so the plaintext never appears in the
//! binary. Wrong guesses rotate through playful micro-notes and emoji pairs,
//! throttled so rapid submissions don't spam effects.

use std::time::{Duration, Instant};

use rand::Rng;
use sha2::{Digest, Sha256};

/// The prompt shown above the input.
pub const RIDDLE: &str = "Where were we first gonna meet (or second)?";

/// SHA-256 digest of the normalized answer.
const ANSWER_DIGEST: &str = "8d7d5397f8842b4181d38bc57b85b9ff1860456f92872c43f991a904c45062d5";

/// How long the unlock animation plays before the gate hands over.
pub const UNLOCK_DELAY: Duration = Duration::from_millis(1500);

/// Minimum gap between wrong-guess effects.
pub const WRONG_GUESS_THROTTLE: Duration = Duration::from_millis(800);

pub const WRONG_NOTES: [&str; 12] = [
    "almost there, starlight ✨",
    "hmm… close, try that other thought 🌙",
    "the heart says you're near 💫",
    "one more nudge, wonder-girl 🌸",
    "not this one, beautiful—another guess?",
    "the lock is giggling… try again",
    "tiny detour—love is patient",
    "the key is a memory, not a password",
    "wrong door, right girl 💛",
    "close enough to count as cute",
    "psst… think of us, not words",
    "the right answer loves morning light 🌤️",
];

pub const WRONG_EMOJI_SETS: [[&str; 2]; 8] = [
    ["🥺", "✨"],
    ["🙈", "💫"],
    ["😅", "🌙"],
    ["🤍", "🔒"],
    ["🤞🏻", "⭐"],
    ["😌", "🍃"],
    ["🤍", "🗝️"],
    ["☺️", "🌠"],
];

/// Hex-encoded SHA-256 of the normalized answer.
pub fn answer_digest(answer: &str) -> String {
    let normalized = answer.trim().to_lowercase();
    hex::encode(Sha256::digest(normalized.as_bytes()))
}

/// Whether the guess unlocks the gate.
pub fn verify_answer(answer: &str) -> bool {
    answer_digest(answer) == ANSWER_DIGEST
}

/// One wrong-guess effect: a micro-note and a pair of floating emojis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrongGuessEffect {
    pub note: &'static str,
    pub emojis: [&'static str; 2],
}

/// Rotation state for wrong-guess effects.
///
/// Avoids repeating the previous note or emoji pair and swallows guesses
/// arriving within [`WRONG_GUESS_THROTTLE`] of the last effect.
#[derive(Debug, Default)]
pub struct WrongNoteRotation {
    last_effect_at: Option<Instant>,
    last_note_index: Option<usize>,
    last_emoji_index: Option<usize>,
}

impl WrongNoteRotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the next effect, or `None` while throttled.
    pub fn pick(&mut self, rng: &mut impl Rng, now: Instant) -> Option<WrongGuessEffect> {
        if let Some(last) = self.last_effect_at {
            if now.duration_since(last) < WRONG_GUESS_THROTTLE {
                return None;
            }
        }
        self.last_effect_at = Some(now);

        let mut note_index = rng.random_range(0..WRONG_NOTES.len());
        if Some(note_index) == self.last_note_index && WRONG_NOTES.len() > 1 {
            note_index = (note_index + 1) % WRONG_NOTES.len();
        }
        self.last_note_index = Some(note_index);

        let mut emoji_index = rng.random_range(0..WRONG_EMOJI_SETS.len());
        if Some(emoji_index) == self.last_emoji_index && WRONG_EMOJI_SETS.len() > 1 {
            emoji_index = (emoji_index + 1) % WRONG_EMOJI_SETS.len();
        }
        self.last_emoji_index = Some(emoji_index);

        Some(WrongGuessEffect {
            note: WRONG_NOTES[note_index],
            emojis: WRONG_EMOJI_SETS[emoji_index],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_answer_normalization() {
        assert_eq!(answer_digest("Turkey"), answer_digest("  turkey  "));
        assert_ne!(answer_digest("turkey"), answer_digest("istanbul"));
    }

    #[test]
    fn test_verify_answer_accepts_any_casing() {
        assert!(verify_answer("turkey"));
        assert!(verify_answer("TURKEY"));
        assert!(verify_answer(" Turkey "));
        assert!(!verify_answer("paris"));
        assert!(!verify_answer(""));
    }

    #[test]
    fn test_rotation_never_repeats_consecutively() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut rotation = WrongNoteRotation::new();
        let mut now = Instant::now();

        let mut previous: Option<&'static str> = None;
        for _ in 0..50 {
            let effect = rotation.pick(&mut rng, now).expect("not throttled");
            if let Some(prev) = previous {
                assert_ne!(prev, effect.note);
            }
            previous = Some(effect.note);
            now += WRONG_GUESS_THROTTLE;
        }
    }

    #[test]
    fn test_rotation_throttles_rapid_guesses() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut rotation = WrongNoteRotation::new();
        let start = Instant::now();

        assert!(rotation.pick(&mut rng, start).is_some());
        assert!(rotation
            .pick(&mut rng, start + Duration::from_millis(200))
            .is_none());
        assert!(rotation
            .pick(&mut rng, start + Duration::from_millis(799))
            .is_none());
        assert!(rotation
            .pick(&mut rng, start + Duration::from_millis(800))
            .is_some());
    }
}
