//! Color constants for the midnight keepsake palette.
//!
//! Deep night-sky backgrounds with warm candlelight accents.

#![allow(dead_code)]

// === MIDNIGHT (Backgrounds) ===
pub const MIDNIGHT: &str = "#0b1026";
pub const MIDNIGHT_DEEP: &str = "#070b1c";
pub const MIDNIGHT_BORDER: &str = "#1c2344";

// === GOLD (Candlelight, Titles, Stars) ===
pub const GOLD: &str = "#f5e6c4";
pub const GOLD_GLOW: &str = "rgba(245, 230, 196, 0.35)";

// === ROSE (Hearts, Accents) ===
pub const ROSE: &str = "#ff8fa3";
pub const ROSE_SOFT: &str = "#ffd0d8";
pub const ROSE_GLOW: &str = "rgba(255, 143, 163, 0.3)";

// === SKY (Birds, Links) ===
pub const SKY: &str = "#c8e7ff";
pub const SKY_GLOW: &str = "rgba(200, 231, 255, 0.3)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f7f3ea";
pub const TEXT_SECONDARY: &str = "rgba(247, 243, 234, 0.7)";
pub const TEXT_MUTED: &str = "rgba(247, 243, 234, 0.5)";
