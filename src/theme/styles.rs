//! Global CSS styles for Keepsake.
//!
//! Midnight-and-candlelight aesthetic; all animation keyframes live here so
//! the components only set per-particle custom properties.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* MIDNIGHT (Backgrounds) */
  --midnight: #0b1026;
  --midnight-deep: #070b1c;
  --midnight-border: #1c2344;

  /* GOLD (Candlelight, Titles, Stars) */
  --gold: #f5e6c4;
  --gold-glow: rgba(245, 230, 196, 0.35);

  /* ROSE (Hearts, Accents) */
  --rose: #ff8fa3;
  --rose-soft: #ffd0d8;
  --rose-glow: rgba(255, 143, 163, 0.3);

  /* SKY (Birds) */
  --sky: #c8e7ff;
  --sky-glow: rgba(200, 231, 255, 0.3);

  /* TEXT */
  --text-primary: #f7f3ea;
  --text-secondary: rgba(247, 243, 234, 0.7);
  --text-muted: rgba(247, 243, 234, 0.5);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Avenir Next', 'Segoe UI', system-ui, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 2.75rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: radial-gradient(ellipse at top, #121a3a 0%, var(--midnight) 55%, var(--midnight-deep) 100%);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

.page {
  min-height: 100vh;
  padding: 1.5rem;
  overflow-y: auto;
}

/* Scroll lock while an overlay is showing */
.page.no-scroll {
  overflow: hidden;
  height: 100vh;
}

.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 400;
  color: var(--gold);
  text-shadow: 0 0 30px var(--gold-glow);
  letter-spacing: 0.06em;
  text-align: center;
}

.subtitle {
  font-family: var(--font-serif);
  font-style: italic;
  color: var(--text-secondary);
  text-align: center;
}

button {
  font-family: inherit;
  cursor: pointer;
}

/* === Riddle Gate === */
.gate {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  gap: 1.5rem;
  text-align: center;
  position: relative;
}

.gate-riddle {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  color: var(--text-primary);
  max-width: 22rem;
}

.gate-input {
  font-size: var(--text-lg);
  padding: 0.75rem 1.25rem;
  border-radius: 2rem;
  border: 1px solid var(--midnight-border);
  background: rgba(255, 255, 255, 0.06);
  color: var(--text-primary);
  text-align: center;
  outline: none;
  width: 18rem;
  transition: border-color var(--transition-normal);
}

.gate-input:focus {
  border-color: var(--gold);
  box-shadow: 0 0 20px var(--gold-glow);
}

.gate-submit {
  font-size: var(--text-base);
  padding: 0.6rem 2.2rem;
  border-radius: 2rem;
  border: 1px solid var(--gold);
  background: transparent;
  color: var(--gold);
  letter-spacing: 0.12em;
  transition: all var(--transition-normal);
}

.gate-submit:hover {
  background: var(--gold);
  color: var(--midnight);
  box-shadow: 0 0 30px var(--gold-glow);
}

.gate-wrong-note {
  font-family: var(--font-serif);
  font-style: italic;
  color: var(--rose-soft);
  min-height: 1.5rem;
  animation: fade-up 400ms ease both;
}

.gate-wrong-emoji {
  position: absolute;
  font-size: 1.6rem;
  animation: emoji-float 1.6s ease-out both;
  pointer-events: none;
}

@keyframes emoji-float {
  from { opacity: 1; transform: translateY(0) scale(0.8); }
  to { opacity: 0; transform: translateY(-90px) scale(1.2); }
}

.gate.unlocking .gate-riddle,
.gate.unlocking .gate-input,
.gate.unlocking .gate-submit {
  animation: gate-open 1.4s ease forwards;
}

@keyframes gate-open {
  to { opacity: 0; transform: translateY(-24px); filter: blur(4px); }
}

.gate-unlock-heart {
  position: absolute;
  font-size: 2rem;
  animation: emoji-float 1.4s ease-out both;
  pointer-events: none;
}

@keyframes fade-up {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Love Meter === */
.love-meter {
  max-width: 26rem;
  margin: 1.5rem auto;
}

.love-meter-label {
  display: flex;
  justify-content: space-between;
  font-size: var(--text-sm);
  color: var(--text-secondary);
  margin-bottom: 0.4rem;
}

.love-meter-track {
  height: 0.7rem;
  border-radius: 1rem;
  background: rgba(255, 255, 255, 0.08);
  border: 1px solid var(--midnight-border);
  overflow: hidden;
}

.love-meter-fill {
  height: 100%;
  border-radius: 1rem;
  background: linear-gradient(90deg, var(--rose) 0%, var(--gold) 100%);
  box-shadow: 0 0 12px var(--rose-glow);
  transition: width var(--transition-slow);
}

/* === Timeline === */
.timeline {
  max-width: 28rem;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  padding-bottom: 4rem;
}

.note-card {
  border: 1px solid var(--midnight-border);
  border-radius: 1rem;
  padding: 1.25rem 1.4rem;
  background: rgba(255, 255, 255, 0.04);
  transition: border-color var(--transition-normal), box-shadow var(--transition-normal);
  cursor: pointer;
}

.note-card:hover {
  border-color: var(--gold);
}

.note-card.today {
  border-color: var(--gold);
  box-shadow: 0 0 24px var(--gold-glow);
}

.note-card.milestone {
  border-color: var(--rose);
  box-shadow: 0 0 28px var(--rose-glow);
}

.note-card-date {
  font-size: var(--text-xs);
  letter-spacing: 0.14em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.note-card-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  color: var(--gold);
  margin: 0.3rem 0 0.6rem;
}

.note-card-body p {
  margin-bottom: 0.8rem;
  color: var(--text-secondary);
}

.note-card.locked .note-card-body {
  filter: blur(7px);
  user-select: none;
  pointer-events: none;
}

.note-card-lock-caption {
  margin-top: 0.6rem;
  font-family: var(--font-serif);
  font-style: italic;
  font-size: var(--text-sm);
  color: var(--text-muted);
  text-align: center;
}

.toast {
  position: fixed;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  background: rgba(11, 16, 38, 0.95);
  border: 1px solid var(--gold);
  color: var(--gold);
  border-radius: 2rem;
  padding: 0.6rem 1.4rem;
  font-size: var(--text-sm);
  z-index: 300;
  animation: fade-up 250ms ease both;
}

.anniversary-link {
  display: block;
  margin: 2rem auto 0;
  font-size: var(--text-base);
  padding: 0.7rem 2rem;
  border-radius: 2rem;
  border: 1px solid var(--rose);
  background: transparent;
  color: var(--rose-soft);
  letter-spacing: 0.1em;
  animation: heartbeat 2.4s ease-in-out infinite;
}

/* === Confetti === */
.confetti-piece {
  position: fixed;
  top: -2vh;
  font-size: 1.1rem;
  z-index: 150;
  pointer-events: none;
  animation: confetti-fall linear both;
}

@keyframes confetti-fall {
  from { transform: translateY(0) rotate(0deg); opacity: 1; }
  to { transform: translateY(104vh) rotate(540deg); opacity: 0.6; }
}

/* === Overlays === */
.overlay {
  position: fixed;
  inset: 0;
  z-index: 200;
  overflow: hidden;
  outline: none;
}

.overlay.night-sky {
  background: radial-gradient(ellipse at 50% 30%, #182248 0%, var(--midnight-deep) 75%);
  animation: overlay-fade-in 600ms ease both;
}

.overlay.flurry {
  background: transparent;
}

@keyframes overlay-fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

.night-sky-star {
  position: absolute;
  border-radius: 50%;
  background: var(--gold);
  animation: twinkle 2s ease-in-out infinite both;
}

@keyframes twinkle {
  0%, 100% { opacity: 0.25; }
  50% { opacity: 1; }
}

.constellation {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
}

.constellation line {
  stroke: var(--gold);
  stroke-linecap: round;
  opacity: 0;
  animation: line-reveal 1.2s ease forwards;
  animation-delay: 800ms;
}

.constellation circle {
  fill: var(--gold);
  filter: drop-shadow(0 0 3px var(--gold-glow));
}

@keyframes line-reveal {
  to { opacity: 0.85; }
}

/* Particles travel from their spawn point by (--dx, --dy) */
.particle {
  position: fixed;
  z-index: 210;
  pointer-events: none;
  animation: particle-travel ease-out both;
}

@keyframes particle-travel {
  0% {
    transform: translate(0, 0) scale(var(--scale, 1)) rotate(0deg);
    opacity: 0;
  }
  12% { opacity: 1; }
  100% {
    transform: translate(var(--dx), var(--dy)) scale(var(--scale, 1)) rotate(var(--rot, 0deg));
    opacity: 0;
  }
}

.particle.bird { font-size: 1.5rem; }
.particle.heart { font-size: 1.3rem; }

.particle.text {
  font-family: var(--font-serif);
  font-style: italic;
  font-size: 1.05rem;
  white-space: nowrap;
}

/* === Anniversary === */
.cover-screen {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  gap: 1.6rem;
  text-align: center;
}

.cover-heart {
  font-size: 3.4rem;
}

.cover-heart.beating {
  animation: heartbeat 1.6s ease-in-out infinite;
}

@keyframes heartbeat {
  0%, 100% { transform: scale(1); }
  14% { transform: scale(1.12); }
  28% { transform: scale(1); }
  42% { transform: scale(1.1); }
}

.cover-enter {
  font-size: var(--text-base);
  padding: 0.7rem 2.4rem;
  border-radius: 2rem;
  border: 1px solid var(--gold);
  background: transparent;
  color: var(--gold);
  letter-spacing: 0.14em;
  transition: all var(--transition-normal);
}

.cover-enter:hover {
  background: var(--gold);
  color: var(--midnight);
}

.cover-toggles {
  display: flex;
  gap: 1rem;
}

.cover-toggle {
  font-size: var(--text-sm);
  padding: 0.4rem 1rem;
  border-radius: 2rem;
  border: 1px solid var(--midnight-border);
  background: transparent;
  color: var(--text-muted);
}

.cover-toggle.on {
  border-color: var(--rose);
  color: var(--rose-soft);
}

.constellation-map {
  max-width: 30rem;
  margin: 0 auto;
}

.constellation-map svg {
  width: 100%;
  height: auto;
}

/* All five letters open: the whole figure shimmers */
.constellation-map.complete svg {
  animation: shimmer 3s ease-in-out infinite;
}

@keyframes shimmer {
  0%, 100% { filter: drop-shadow(0 0 4px var(--gold-glow)); }
  50% { filter: drop-shadow(0 0 16px var(--gold)); }
}

.letter-star circle {
  fill: var(--text-muted);
  cursor: pointer;
  transition: fill var(--transition-normal);
}

.letter-star:hover circle {
  fill: var(--gold);
}

.letter-star.lit circle {
  fill: var(--gold);
  filter: drop-shadow(0 0 4px var(--gold-glow));
}

.letter-star text {
  fill: var(--midnight);
  font-size: 3px;
  pointer-events: none;
}

.map-line {
  stroke: var(--gold);
  stroke-width: 0.4;
  opacity: 0;
  transition: opacity 1s ease;
}

.map-line.lit {
  opacity: 0.7;
}

.map-progress {
  text-align: center;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  margin: 0.8rem 0;
}

.map-actions {
  display: flex;
  justify-content: center;
  gap: 1rem;
  margin-top: 1rem;
}

.map-action {
  font-size: var(--text-sm);
  padding: 0.5rem 1.4rem;
  border-radius: 2rem;
  border: 1px solid var(--midnight-border);
  background: transparent;
  color: var(--text-secondary);
  transition: all var(--transition-normal);
}

.map-action:enabled:hover {
  border-color: var(--gold);
  color: var(--gold);
}

.map-action:disabled {
  opacity: 0.4;
  cursor: default;
}

/* === Modals === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  background: rgba(7, 11, 28, 0.85);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 250;
  animation: overlay-fade-in 300ms ease both;
}

.modal {
  background: var(--midnight);
  border: 1px solid var(--gold);
  border-radius: 1rem;
  box-shadow: 0 0 40px var(--gold-glow);
  max-width: 26rem;
  width: calc(100% - 3rem);
  max-height: 80vh;
  overflow-y: auto;
  padding: 1.8rem;
}

.modal-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  color: var(--gold);
  margin-bottom: 1rem;
}

.modal-body p {
  margin-bottom: 0.9rem;
  color: var(--text-secondary);
}

.modal-footnote {
  font-size: var(--text-xs);
  color: var(--text-muted);
  font-style: italic;
  margin-top: 0.6rem;
}

.modal-nav {
  display: flex;
  justify-content: space-between;
  margin-top: 1rem;
}

.modal-close {
  display: block;
  margin: 1.2rem auto 0;
  font-size: var(--text-sm);
  padding: 0.5rem 1.6rem;
  border-radius: 2rem;
  border: 1px solid var(--gold);
  background: transparent;
  color: var(--gold);
}

/* === Gallery === */
.gallery-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 0.8rem;
}

.gallery-photo img {
  width: 100%;
  border-radius: 0.6rem;
  display: block;
}

.gallery-caption {
  font-size: var(--text-xs);
  color: var(--text-muted);
  text-align: center;
  margin-top: 0.3rem;
}

.gallery-locked {
  aspect-ratio: 1;
  border-radius: 0.6rem;
  border: 1px dashed var(--midnight-border);
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--text-muted);
}

/* === Vows === */
.vows {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  gap: 2rem;
  text-align: center;
  padding: 0 2rem;
}

.vow-text {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  color: var(--text-primary);
  max-width: 26rem;
  animation: fade-up 900ms ease both;
}

.vow-final {
  color: var(--gold);
  text-shadow: 0 0 24px var(--gold-glow);
}

/* === Montage === */
.montage {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  gap: 1.4rem;
}

.montage img {
  max-width: min(24rem, 80vw);
  border-radius: 1rem;
  box-shadow: 0 0 40px var(--gold-glow);
  animation: overlay-fade-in 800ms ease both;
}

.montage-caption {
  font-family: var(--font-serif);
  font-style: italic;
  color: var(--text-secondary);
}
"#;
