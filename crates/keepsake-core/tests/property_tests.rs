//! Property-based tests for timing invariants, payload bounds, and the
//! reveal rules.

use std::time::Duration;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use keepsake_core::profile::FAILSAFE_MARGIN;
use keepsake_core::timeline::{love_meter_percent, today_note_index, visible_count};
use keepsake_core::{
    ActivationProfile, DayNote, DeviceClass, MotionPreference, Origin, OverlayKind, OverlayTiming,
};

fn any_kind() -> impl Strategy<Value = OverlayKind> {
    prop_oneof![
        Just(OverlayKind::NightSky),
        Just(OverlayKind::BirdFlurry),
        Just(OverlayKind::LoveFlurry),
    ]
}

fn any_profile() -> impl Strategy<Value = ActivationProfile> {
    (any::<bool>(), any::<bool>()).prop_map(|(mobile, reduced)| {
        ActivationProfile::new(
            if mobile {
                DeviceClass::Mobile
            } else {
                DeviceClass::Desktop
            },
            if reduced {
                MotionPreference::Reduced
            } else {
                MotionPreference::Full
            },
        )
    })
}

fn blur_flags() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 1..40)
}

const TEST_DATES: [&str; 40] = [
    "2025-10-01", "2025-10-02", "2025-10-03", "2025-10-04", "2025-10-05",
    "2025-10-06", "2025-10-07", "2025-10-08", "2025-10-09", "2025-10-10",
    "2025-10-11", "2025-10-12", "2025-10-13", "2025-10-14", "2025-10-15",
    "2025-10-16", "2025-10-17", "2025-10-18", "2025-10-19", "2025-10-20",
    "2025-10-21", "2025-10-22", "2025-10-23", "2025-10-24", "2025-10-25",
    "2025-10-26", "2025-10-27", "2025-10-28", "2025-10-29", "2025-10-30",
    "2025-10-31", "2025-11-01", "2025-11-02", "2025-11-03", "2025-11-04",
    "2025-11-05", "2025-11-06", "2025-11-07", "2025-11-08", "2025-11-09",
];

fn notes_from_flags(flags: &[bool]) -> Vec<DayNote> {
    flags
        .iter()
        .enumerate()
        .map(|(i, &blurred)| DayNote {
            date: TEST_DATES[i],
            title: None,
            emoji: None,
            content: "",
            blurred,
            media: None,
        })
        .collect()
}

proptest! {
    /// The failsafe always trails the primary deadline by at least the
    /// margin, for every overlay kind and profile.
    #[test]
    fn failsafe_margin_holds_for_all_profiles(kind in any_kind(), profile in any_profile()) {
        let timing = OverlayTiming::for_kind(kind, profile);
        prop_assert!(timing.failsafe >= timing.primary + FAILSAFE_MARGIN);
    }

    /// The margin clamp holds for arbitrary constructed timings too.
    #[test]
    fn timing_constructor_enforces_margin(primary_ms in 0u64..600_000, floor_ms in 0u64..600_000) {
        let timing = OverlayTiming::new(
            Duration::from_millis(primary_ms),
            Duration::from_millis(floor_ms),
        );
        prop_assert!(timing.failsafe >= timing.primary + FAILSAFE_MARGIN);
        prop_assert!(timing.failsafe >= Duration::from_millis(floor_ms));
    }

    /// Flurry payloads stay within the documented bounds for any seed.
    #[test]
    fn flurry_payload_bounds(seed in any::<u64>(), profile in any_profile()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let origin = Origin::new(640.0, 400.0);

        let bird = keepsake_core::particles::bird_flurry(&mut rng, origin, profile);
        prop_assert!(bird.len() <= 6 + 15 + 6);
        prop_assert!(!bird.is_empty());

        let love = keepsake_core::particles::love_flurry(&mut rng, origin, profile);
        prop_assert!(love.len() <= 18 + 6 + 7);
        prop_assert!(!love.is_empty());

        for p in bird.iter().chain(love.iter()) {
            prop_assert!(p.duration_ms <= 2400);
            prop_assert!(p.delay_ms < 2000);
            prop_assert!(p.distance >= 0.0);
        }
    }

    /// The meter reads 5..=100 and never decreases as more notes unlock.
    #[test]
    fn love_meter_bounds_and_monotonicity(flags in blur_flags()) {
        let mut notes = notes_from_flags(&flags);
        let percent = love_meter_percent(&notes);
        prop_assert!((5..=100).contains(&percent));

        let before = visible_count(&notes);
        if let Some(locked) = notes.iter().position(|n| n.blurred) {
            notes[locked].blurred = false;
            let after_percent = love_meter_percent(&notes);
            prop_assert!(visible_count(&notes) >= before);
            prop_assert!(after_percent >= percent);
        }
    }

    /// Today's index, when present, is the last visible note and every
    /// earlier note is visible too (the reveal chain).
    #[test]
    fn today_index_is_reveal_chain_boundary(flags in blur_flags()) {
        let notes = notes_from_flags(&flags);
        match today_note_index(&notes) {
            Some(today) => {
                for i in 0..=today {
                    prop_assert!(!keepsake_core::timeline::effective_blurred(&notes, i));
                }
                for i in (today + 1)..notes.len() {
                    prop_assert!(keepsake_core::timeline::effective_blurred(&notes, i));
                }
            }
            None => {
                prop_assert_eq!(visible_count(&notes), 0);
            }
        }
    }

    /// Digest comparison is normalization-invariant.
    #[test]
    fn gate_digest_ignores_case_and_padding(answer in "[a-zA-Z ]{1,30}") {
        let padded = format!("  {}  ", answer.to_uppercase());
        prop_assert_eq!(
            keepsake_core::gate::answer_digest(&answer),
            keepsake_core::gate::answer_digest(&padded)
        );
    }
}
