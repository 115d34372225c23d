//! Timeline reveal rules.
//!
//! The timeline is a static table of dated notes, each flagged blurred or
//! visible by hand. The reveal chain keeps the flags consistent: if any
//! later note is visible, every earlier note is treated as visible too.
//! "Today" is the last effectively-visible note; the love meter is derived
//! from the visible count.

use chrono::NaiveDate;

use crate::content::notes::{DEFAULT_LOCKED_MESSAGE, LOCKED_MESSAGES};

/// Date of the milestone (birthday) card, which gets the confetti burst.
pub const MILESTONE_DATE: &str = "2025-10-21";

/// How long the locked-card toast stays up.
pub const LOCK_TOAST_MS: u64 = 2500;

/// Embedded media attached to a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Audio,
    Youtube,
    Spotify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Media {
    pub kind: MediaKind,
    pub src: &'static str,
    pub alt: Option<&'static str>,
}

/// One entry of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayNote {
    /// `YYYY-MM-DD`.
    pub date: &'static str,
    pub title: Option<&'static str>,
    pub emoji: Option<&'static str>,
    pub content: &'static str,
    /// Hand-maintained lock flag; see [`effective_blurred`] for the rule
    /// actually applied.
    pub blurred: bool,
    pub media: Option<Media>,
}

impl DayNote {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    pub fn is_milestone(&self) -> bool {
        self.date == MILESTONE_DATE
    }
}

/// Reveal-chain rule: a note is blurred only if it and every later note are
/// flagged blurred. An unblurred note further down the timeline unlocks
/// everything before it.
pub fn effective_blurred(notes: &[DayNote], index: usize) -> bool {
    if index >= notes.len() {
        return false;
    }
    notes[index..].iter().all(|note| note.blurred)
}

/// Index of "today's" note: the last effectively-visible one.
pub fn today_note_index(notes: &[DayNote]) -> Option<usize> {
    (0..notes.len())
        .rev()
        .find(|&i| !effective_blurred(notes, i))
}

/// Number of effectively-visible notes.
pub fn visible_count(notes: &[DayNote]) -> usize {
    (0..notes.len())
        .filter(|&i| !effective_blurred(notes, i))
        .count()
}

/// Love meter fill, 5..=100 percent.
///
/// Scales the visible count across 95 points with a 5 point floor, so the
/// meter never reads empty once the first note is out.
pub fn love_meter_percent(notes: &[DayNote]) -> u8 {
    let total = notes.len();
    let visible = visible_count(notes);
    if total <= 1 || visible == 0 {
        return if visible > 0 { 100 } else { 5 };
    }
    let base = (visible as f64 - 1.0) / (total as f64 - 1.0) * 95.0;
    (base.round() as u8 + 5).min(100)
}

/// Whether the milestone card is currently visible (confetti trigger).
pub fn milestone_visible(notes: &[DayNote]) -> bool {
    notes
        .iter()
        .position(|n| n.is_milestone())
        .is_some_and(|i| !effective_blurred(notes, i))
}

/// Per-date lock caption shown inside a blurred card.
pub fn locked_caption(date: &str) -> &'static str {
    LOCKED_MESSAGES
        .iter()
        .find(|(d, _)| *d == date)
        .map(|(_, msg)| *msg)
        .unwrap_or(DEFAULT_LOCKED_MESSAGE)
}

/// Toast shown when a locked card is tapped.
pub fn lock_toast(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => format!(
            "This note updates on {} in the morning ✨",
            parsed.format("%B %-d")
        ),
        Err(_) => "This note updates in the morning ✨".to_string(),
    }
}

/// `October 1, 2025` style date line for a card header.
pub fn format_long_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(date: &'static str, blurred: bool) -> DayNote {
        DayNote {
            date,
            title: None,
            emoji: None,
            content: "",
            blurred,
            media: None,
        }
    }

    #[test]
    fn test_reveal_chain_unlocks_earlier_notes() {
        // Middle note flagged blurred, but a later note is visible.
        let notes = [
            note("2025-10-01", false),
            note("2025-10-02", true),
            note("2025-10-03", false),
            note("2025-10-04", true),
        ];
        assert!(!effective_blurred(&notes, 0));
        assert!(!effective_blurred(&notes, 1), "later visible note unlocks it");
        assert!(!effective_blurred(&notes, 2));
        assert!(effective_blurred(&notes, 3));
    }

    #[test]
    fn test_today_is_last_visible_note() {
        let notes = [
            note("2025-10-01", false),
            note("2025-10-02", false),
            note("2025-10-03", true),
        ];
        assert_eq!(today_note_index(&notes), Some(1));

        let all_blurred = [note("2025-10-01", true)];
        assert_eq!(today_note_index(&all_blurred), None);
    }

    #[test]
    fn test_love_meter_scale() {
        let mut notes = vec![note("2025-10-01", false)];
        for i in 2..=21 {
            let date: &'static str =
                Box::leak(format!("2025-10-{i:02}").into_boxed_str());
            notes.push(note(date, true));
        }
        // 1 of 21 visible: floor value
        assert_eq!(love_meter_percent(&notes), 5);

        for n in notes.iter_mut().take(11) {
            n.blurred = false;
        }
        // 11 of 21 visible: halfway up the 95-point scale
        assert_eq!(love_meter_percent(&notes), 53);

        for n in notes.iter_mut() {
            n.blurred = false;
        }
        assert_eq!(love_meter_percent(&notes), 100);
    }

    #[test]
    fn test_milestone_visibility_follows_chain() {
        let notes = [note("2025-10-20", false), note(MILESTONE_DATE, true)];
        assert!(!milestone_visible(&notes));

        let revealed = [note("2025-10-20", true), note(MILESTONE_DATE, false)];
        assert!(milestone_visible(&revealed));
    }

    #[test]
    fn test_lock_captions() {
        assert_eq!(
            locked_caption("2025-10-13"),
            "no peeking, see you in the morning 😉"
        );
        assert_eq!(locked_caption("1999-01-01"), DEFAULT_LOCKED_MESSAGE);
    }

    #[test]
    fn test_lock_toast_formats_date() {
        assert_eq!(
            lock_toast("2025-10-05"),
            "This note updates on October 5 in the morning ✨"
        );
    }

    #[test]
    fn test_real_notes_table_is_consistent() {
        let notes = crate::content::notes::NOTES;
        assert!(notes.iter().all(|n| n.parsed_date().is_some()));
        assert!(today_note_index(notes).is_some(), "at least one note visible");
        // Dates strictly ascending
        let dates: Vec<_> = notes.iter().filter_map(|n| n.parsed_date()).collect();
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }
}
