//! Randomized particle payloads for the decorative overlays.
//!
//! Payloads are generated fresh on every activation, bounded by the
//! [`ActivationProfile`] captured at that moment, and live only for the
//! duration of the animation. Generators take `&mut impl Rng` so tests can
//! pass a seeded rng.

use std::f64::consts::PI;

use rand::Rng;

use crate::profile::ActivationProfile;

/// Colors cycled through by heart particles.
pub const HEART_COLORS: [&str; 3] = ["#f5e6c4", "#ff8fa3", "#ffd0d8"];

/// Colors cycled through by bird particles.
pub const BIRD_COLORS: [&str; 2] = ["#e7f5ff", "#c8e7ff"];

/// Phrases carried by floating text sprites.
pub const TEXT_SPRITES: [&str; 3] = ["i love you", "love you", "ily"];

/// Spawn-point jitter around the trigger element, in logical pixels.
const ORIGIN_JITTER: f64 = 24.0;

/// What a single overlay particle renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Bird,
    Heart,
    Text,
}

/// Where a flurry spawns from, usually the center of the clicked element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

impl Origin {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One decorative element of a flurry overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpec {
    pub kind: ParticleKind,
    /// Spawn position in logical pixels.
    pub x: f64,
    pub y: f64,
    /// Travel direction in radians (screen coordinates, y grows downward).
    pub angle: f64,
    /// Travel distance in logical pixels.
    pub distance: f64,
    pub delay_ms: u64,
    pub duration_ms: u64,
    pub scale: f64,
    /// Final rotation in degrees.
    pub rotation: f64,
    pub color: &'static str,
    pub text: Option<&'static str>,
}

impl ParticleSpec {
    /// Where the particle ends up when its travel completes.
    pub fn end_position(&self) -> (f64, f64) {
        (
            self.x + self.angle.cos() * self.distance,
            self.y + self.angle.sin() * self.distance,
        )
    }
}

fn jitter(rng: &mut impl Rng, center: f64) -> f64 {
    center + (rng.random::<f64>() - 0.5) * ORIGIN_JITTER
}

fn pick<const N: usize>(rng: &mut impl Rng, options: [&'static str; N]) -> &'static str {
    options[rng.random_range(0..N)]
}

/// Payload for the bird flurry: birds scatter down-right, hearts and text
/// drift upward from the trigger point.
pub fn bird_flurry(
    rng: &mut impl Rng,
    origin: Origin,
    profile: ActivationProfile,
) -> Vec<ParticleSpec> {
    let reduced = profile.is_reduced();
    let mobile = profile.is_mobile();

    let bird_count = if reduced { 1 } else if mobile { 4 } else { 6 };
    let heart_count = if reduced { 2 } else if mobile { 10 } else { 15 };
    let text_count = if reduced { 1 } else if mobile { 4 } else { 6 };

    let travel_ms = if reduced { 700 } else if mobile { 1800 } else { 2200 };
    let text_ms = if reduced { 700 } else if mobile { 1600 } else { 2000 };

    let mut particles = Vec::with_capacity(bird_count + heart_count + text_count);

    for i in 0..bird_count {
        let angle = PI / 3.0 + (rng.random::<f64>() - 0.5) * (PI / 2.0);
        let distance = if mobile {
            200.0 + rng.random::<f64>() * 100.0
        } else {
            280.0 + rng.random::<f64>() * 120.0
        };
        particles.push(ParticleSpec {
            kind: ParticleKind::Bird,
            x: jitter(rng, origin.x),
            y: jitter(rng, origin.y),
            angle,
            distance,
            delay_ms: if reduced { 0 } else { i as u64 * 100 },
            duration_ms: travel_ms,
            scale: 1.0,
            rotation: 0.0,
            color: BIRD_COLORS[i % BIRD_COLORS.len()],
            text: None,
        });
    }

    for i in 0..heart_count {
        let angle = -PI / 2.0 + (rng.random::<f64>() - 0.5) * (PI / 3.0);
        let distance = if mobile {
            180.0 + rng.random::<f64>() * 100.0
        } else {
            220.0 + rng.random::<f64>() * 80.0
        };
        particles.push(ParticleSpec {
            kind: ParticleKind::Heart,
            x: jitter(rng, origin.x),
            y: jitter(rng, origin.y),
            angle,
            distance,
            delay_ms: if reduced {
                0
            } else {
                50 + i as u64 * rng.random_range(50..120)
            },
            duration_ms: travel_ms,
            scale: 1.0,
            rotation: 0.0,
            color: pick(rng, HEART_COLORS),
            text: None,
        });
    }

    for i in 0..text_count {
        let angle = -PI / 2.0 + (rng.random::<f64>() - 0.5) * 0.4;
        let distance = if mobile {
            140.0 + rng.random::<f64>() * 60.0
        } else {
            170.0 + rng.random::<f64>() * 50.0
        };
        particles.push(ParticleSpec {
            kind: ParticleKind::Text,
            x: jitter(rng, origin.x),
            y: jitter(rng, origin.y),
            angle,
            distance,
            delay_ms: if reduced {
                0
            } else {
                80 + i as u64 * rng.random_range(80..120)
            },
            duration_ms: text_ms,
            scale: 1.0,
            rotation: 0.0,
            color: "#f5e6c4",
            text: Some(pick(rng, TEXT_SPRITES)),
        });
    }

    particles
}

/// Converts the love flurry's offset pairs into the shared angle/distance
/// representation.
fn offset_particle(
    kind: ParticleKind,
    x: f64,
    y: f64,
    dx: f64,
    dy: f64,
    delay_ms: u64,
    duration_ms: u64,
    scale: f64,
    rotation: f64,
    color: &'static str,
    text: Option<&'static str>,
) -> ParticleSpec {
    ParticleSpec {
        kind,
        x,
        y,
        angle: dy.atan2(dx),
        distance: dx.hypot(dy),
        delay_ms,
        duration_ms,
        scale,
        rotation,
        color,
        text,
    }
}

/// Payload for the love flurry: a dense upward burst of hearts, a handful of
/// birds, and floating phrases.
///
/// Reduced motion replaces the burst with a small static arrangement
/// (3 hearts, 1 bird, 1 phrase) that fades quickly.
pub fn love_flurry(
    rng: &mut impl Rng,
    origin: Origin,
    profile: ActivationProfile,
) -> Vec<ParticleSpec> {
    if profile.is_reduced() {
        return vec![
            offset_particle(
                ParticleKind::Heart, origin.x - 30.0, origin.y, 0.0, -50.0,
                0, 700, 1.0, 0.0, HEART_COLORS[0], None,
            ),
            offset_particle(
                ParticleKind::Heart, origin.x, origin.y, 0.0, -50.0,
                100, 700, 1.0, 0.0, HEART_COLORS[1], None,
            ),
            offset_particle(
                ParticleKind::Heart, origin.x + 30.0, origin.y, 0.0, -50.0,
                200, 700, 1.0, 0.0, HEART_COLORS[2], None,
            ),
            offset_particle(
                ParticleKind::Bird, origin.x, origin.y - 20.0, 40.0, -60.0,
                150, 700, 1.0, -5.0, BIRD_COLORS[0], None,
            ),
            offset_particle(
                ParticleKind::Text, origin.x, origin.y + 10.0, 0.0, -70.0,
                50, 700, 1.0, 0.0, "#f5e6c4", Some(TEXT_SPRITES[0]),
            ),
        ];
    }

    let mobile = profile.is_mobile();
    let heart_count = if mobile { 12 } else { 18 };
    let bird_count = if mobile { 4 } else { 6 };
    let text_count = if mobile { 5 } else { 7 };

    let mut particles = Vec::with_capacity(heart_count + bird_count + text_count);

    for _ in 0..heart_count {
        particles.push(offset_particle(
            ParticleKind::Heart,
            jitter(rng, origin.x),
            jitter(rng, origin.y),
            (rng.random::<f64>() - 0.5) * 240.0,
            -220.0 - rng.random::<f64>() * 80.0,
            rng.random_range(0..180),
            1800 + rng.random_range(0..600),
            0.8 + rng.random::<f64>() * 0.3,
            rng.random::<f64>() * 360.0,
            pick(rng, HEART_COLORS),
            None,
        ));
    }

    for _ in 0..bird_count {
        particles.push(offset_particle(
            ParticleKind::Bird,
            jitter(rng, origin.x),
            jitter(rng, origin.y),
            (rng.random::<f64>() - 0.5) * 200.0,
            -200.0 - rng.random::<f64>() * 100.0,
            rng.random_range(0..180),
            1900 + rng.random_range(0..500),
            0.85 + rng.random::<f64>() * 0.3,
            -8.0 + rng.random::<f64>() * 14.0,
            pick(rng, BIRD_COLORS),
            None,
        ));
    }

    for _ in 0..text_count {
        particles.push(offset_particle(
            ParticleKind::Text,
            jitter(rng, origin.x),
            jitter(rng, origin.y),
            (rng.random::<f64>() - 0.5) * 100.0,
            -140.0 - rng.random::<f64>() * 60.0,
            rng.random_range(0..180),
            1700 + rng.random_range(0..500),
            0.9 + rng.random::<f64>() * 0.2,
            0.0,
            "#f5e6c4",
            Some(pick(rng, TEXT_SPRITES)),
        ));
    }

    particles
}

/// A twinkling background star for the night sky, positioned in percent of
/// the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct StarSpec {
    pub x: f64,
    pub y: f64,
    /// Diameter in logical pixels.
    pub size: f64,
    pub delay_ms: u64,
}

/// Star field behind the constellation. Smaller and sparser on mobile.
pub fn night_sky_stars(rng: &mut impl Rng, profile: ActivationProfile) -> Vec<StarSpec> {
    let count = if profile.is_mobile() { 28 } else { 60 };
    (0..count)
        .map(|_| StarSpec {
            x: rng.random::<f64>() * 100.0,
            y: rng.random::<f64>() * 100.0,
            size: if profile.is_mobile() {
                rng.random::<f64>() * 1.5 + 0.5
            } else {
                rng.random::<f64>() * 2.0 + 1.0
            },
            delay_ms: rng.random_range(0..2000),
        })
        .collect()
}

/// The fixed "E + H" constellation figure, in percent of its viewbox.
#[derive(Debug, Clone, Copy)]
pub struct ConstellationFigure {
    pub points: &'static [(f64, f64)],
    pub lines: &'static [(f64, f64, f64, f64)],
    /// Dot radius in viewbox units.
    pub star_radius: f64,
    /// Line stroke width in viewbox units.
    pub stroke_width: f64,
}

const DESKTOP_POINTS: [(f64, f64); 9] = [
    // E
    (35.0, 42.0),
    (35.0, 50.0),
    (35.0, 58.0),
    (40.0, 50.0),
    // +
    (50.0, 50.0),
    // H
    (60.0, 42.0),
    (60.0, 50.0),
    (60.0, 58.0),
    (65.0, 50.0),
];

const DESKTOP_LINES: [(f64, f64, f64, f64); 9] = [
    // E
    (35.0, 42.0, 40.0, 42.0),
    (35.0, 50.0, 40.0, 50.0),
    (35.0, 58.0, 40.0, 58.0),
    (35.0, 42.0, 35.0, 58.0),
    // +
    (46.0, 50.0, 54.0, 50.0),
    (50.0, 46.0, 50.0, 54.0),
    // H
    (60.0, 42.0, 60.0, 58.0),
    (65.0, 42.0, 65.0, 58.0),
    (60.0, 50.0, 65.0, 50.0),
];

const MOBILE_POINTS: [(f64, f64); 9] = [
    // E
    (35.0, 45.0),
    (35.0, 55.0),
    (40.0, 45.0),
    (40.0, 55.0),
    // +
    (50.0, 50.0),
    // H
    (60.0, 45.0),
    (60.0, 55.0),
    (65.0, 45.0),
    (65.0, 55.0),
];

const MOBILE_LINES: [(f64, f64, f64, f64); 8] = [
    // E
    (35.0, 45.0, 40.0, 45.0),
    (35.0, 55.0, 40.0, 55.0),
    (35.0, 45.0, 35.0, 55.0),
    // +
    (46.0, 50.0, 54.0, 50.0),
    (50.0, 46.0, 50.0, 54.0),
    // H
    (60.0, 45.0, 60.0, 55.0),
    (65.0, 45.0, 65.0, 55.0),
    (60.0, 50.0, 65.0, 50.0),
];

/// Pick the constellation variant for the profile. Mobile uses fewer nodes
/// with thicker strokes.
pub fn constellation(profile: ActivationProfile) -> ConstellationFigure {
    if profile.is_mobile() {
        ConstellationFigure {
            points: &MOBILE_POINTS,
            lines: &MOBILE_LINES,
            star_radius: 3.5,
            stroke_width: 2.5,
        }
    } else {
        ConstellationFigure {
            points: &DESKTOP_POINTS,
            lines: &DESKTOP_LINES,
            star_radius: 2.5,
            stroke_width: 1.5,
        }
    }
}
