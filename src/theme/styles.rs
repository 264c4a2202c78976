//! Global CSS styles for Cosmic Bio.
//!
//! Liquid glass over deep space: frosted translucent panels, hairline
//! borders with an inset highlight, indigo/cyan/fuchsia gradients.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SPACE (Backgrounds) */
  --space: #0a0a0f;

  /* GLOW */
  --indigo: #818cf8;
  --indigo-glow: rgba(99, 102, 241, 0.55);
  --cyan: #22d3ee;
  --fuchsia: #e879f9;
  --emerald: #34d399;

  /* GLASS */
  --glass-fill: rgba(255, 255, 255, 0.10);
  --glass-fill-active: rgba(255, 255, 255, 0.20);
  --glass-border: rgba(255, 255, 255, 0.20);
  --glass-border-active: rgba(255, 255, 255, 0.30);
  --glass-shadow: inset 0 1px 0 rgba(255, 255, 255, 0.25), 0 20px 60px rgba(0, 0, 0, 0.35);

  /* TEXT */
  --text-primary: #ffffff;
  --text-secondary: rgba(255, 255, 255, 0.8);
  --text-muted: rgba(255, 255, 255, 0.6);

  /* Typography */
  --font-sans: -apple-system, 'SF Pro Display', 'Inter', system-ui, sans-serif;
  --font-mono: 'SF Mono', 'JetBrains Mono', 'Consolas', monospace;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  background: var(--space);
  color: var(--text-primary);
  font-family: var(--font-sans);
  overflow: hidden;
}

/* === Glass === */
.glass {
  position: relative;
  border-radius: 1.5rem;
  border: 1px solid var(--glass-border);
  background: var(--glass-fill);
  backdrop-filter: blur(40px);
  -webkit-backdrop-filter: blur(40px);
  box-shadow: var(--glass-shadow);
}

/* === Page === */
.cosmic {
  position: relative;
  min-height: 100vh;
  overflow: hidden;
}

.scene {
  position: absolute;
  inset: 0;
}

.backdrop__fade {
  pointer-events: none;
  position: absolute;
  inset: 0;
  background: linear-gradient(to bottom, rgba(0, 0, 0, 0.5), rgba(0, 0, 0, 0.1), rgba(0, 0, 0, 0.8));
}

.backdrop__glow {
  pointer-events: none;
  position: absolute;
  inset: 0;
  background: radial-gradient(120% 60% at 50% -10%, rgba(99, 102, 241, 0.25), rgba(0, 0, 0, 0) 60%);
}

.cosmic__main {
  position: relative;
  z-index: 10;
  display: flex;
  min-height: 100vh;
  align-items: center;
  justify-content: center;
  padding: 4rem 1.5rem;
}

.cosmic__section {
  width: 100%;
  max-width: 72rem;
}

.cosmic__header {
  margin-bottom: 2rem;
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.cosmic__footer {
  margin-top: 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  font-size: 0.75rem;
  color: var(--text-muted);
}

/* === Header chip === */
.header-chip {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.25rem 0.75rem;
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: rgba(255, 255, 255, 0.9);
}

.header-chip__dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 9999px;
  background: var(--indigo);
  box-shadow: 0 0 16px 6px var(--indigo-glow);
}

/* === Bio card === */
.bio-card {
  overflow: hidden;
  transition: transform 120ms ease-out;
  will-change: transform;
}

.bio-card__tint {
  pointer-events: none;
  position: absolute;
  inset: 0;
}

.bio-card__sweep {
  position: absolute;
  top: -50%;
  left: 0;
  right: 0;
  height: 140%;
  background: radial-gradient(80% 50% at 50% 0%, rgba(255, 255, 255, 0.25), rgba(255, 255, 255, 0) 70%);
}

.bio-card__wash {
  position: absolute;
  inset: 0;
  background: linear-gradient(120deg, rgba(99, 102, 241, 0.20), rgba(168, 85, 247, 0.16), rgba(56, 189, 248, 0.14));
  mix-blend-mode: screen;
}

.bio-card__grid {
  position: relative;
  display: grid;
  grid-template-columns: 1fr 1fr;
}

.bio-card__identity {
  padding: 3rem;
}

.bio-card__name {
  font-size: 3.75rem;
  font-weight: 800;
  letter-spacing: -0.025em;
}

.bio-card__tagline {
  margin-top: 1rem;
  max-width: 28rem;
  color: var(--text-secondary);
}

/* === UID bar === */
.uid-bar {
  margin-top: 1.5rem;
  display: inline-flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.5rem 1rem;
}

.uid-bar__text {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  letter-spacing: 0.1em;
  color: rgba(255, 255, 255, 0.9);
}

.uid-bar__controls {
  margin-left: auto;
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2rem;
  height: 2rem;
  border-radius: 0.75rem;
  color: var(--text-primary);
  cursor: pointer;
  transition: transform 150ms ease;
}

.icon-btn:active {
  transform: scale(0.95);
}

.icon.is-on {
  color: var(--emerald);
}

/* === Badges === */
.badge-row {
  margin-top: 1.5rem;
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.badge {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.375rem 0.75rem;
  font-size: 0.75rem;
  color: rgba(255, 255, 255, 0.9);
  outline: none;
  transition: background 150ms ease, border-color 150ms ease;
}

button.badge {
  cursor: pointer;
}

button.badge:focus-visible {
  box-shadow: var(--glass-shadow), 0 0 0 2px rgba(129, 140, 248, 0.4);
}

.badge__icon {
  display: inline-flex;
  color: var(--text-secondary);
}

.badge:hover .badge__icon,
.badge--active .badge__icon,
.badge--active .badge__label {
  color: var(--text-primary);
}

.badge--active {
  background: var(--glass-fill-active);
  border-color: var(--glass-border-active);
}

/* === Stats === */
.stat-grid {
  margin-top: 2rem;
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 0.75rem;
  max-width: 24rem;
}

.stat {
  padding: 0.75rem;
  text-align: center;
}

.stat__label {
  font-size: 10px;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: rgba(255, 255, 255, 0.7);
}

.stat__value {
  margin-top: 0.25rem;
  font-size: 1.125rem;
  font-weight: 600;
}

/* === Focus frame === */
.focus-frame-wrap {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 3rem;
}

.focus-frame {
  aspect-ratio: 1 / 1;
  width: 100%;
  max-width: 28rem;
  overflow: hidden;
  animation: frame-spin 16s linear infinite;
  transform-style: preserve-3d;
}

.focus-frame__shine {
  pointer-events: none;
  position: absolute;
  inset: 0;
  background: radial-gradient(60% 60% at 50% 50%, rgba(99, 102, 241, 0.20), rgba(0, 0, 0, 0) 60%);
}

.focus-frame__aura {
  pointer-events: none;
  position: absolute;
  inset: -4rem;
  border-radius: 40px;
  filter: blur(64px);
  opacity: 0.5;
  background: conic-gradient(from 0deg, rgba(99, 102, 241, 0.2), rgba(56, 189, 248, 0.15), rgba(168, 85, 247, 0.15), rgba(99, 102, 241, 0.2));
}

.focus-frame__caption {
  position: absolute;
  bottom: 0.75rem;
  right: 0.75rem;
  font-family: var(--font-mono);
  font-size: 10px;
  letter-spacing: 0.1em;
  color: rgba(255, 255, 255, 0.7);
}

/* === Orbs === */
.orb {
  position: absolute;
  transform-style: preserve-3d;
  animation: orb-pulse 6s ease-in-out infinite;
}

.orb__body {
  position: relative;
  border-radius: 9999px;
  opacity: 0.9;
}

.orb__specular {
  position: absolute;
  top: -0.5rem;
  left: -0.5rem;
  width: 4rem;
  height: 4rem;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.4);
  filter: blur(40px);
}

.orb__sheen {
  position: absolute;
  inset: 0;
  border-radius: 9999px;
  background: radial-gradient(50% 50% at 30% 30%, rgba(255, 255, 255, 0.35), rgba(255, 255, 255, 0) 60%);
}

.orb__shade {
  position: absolute;
  inset: 0;
  border-radius: 9999px;
  box-shadow: inset 0 -20px 40px rgba(0, 0, 0, 0.35);
}

.orb__body.hue-indigo { background: linear-gradient(to bottom right, var(--indigo), var(--fuchsia), var(--cyan)); }
.orb__body.hue-cyan { background: linear-gradient(to bottom right, var(--cyan), var(--indigo), var(--fuchsia)); }
.orb__body.hue-fuchsia { background: linear-gradient(to bottom right, var(--fuchsia), var(--cyan), var(--indigo)); }

/* === Floating chips === */
.floating-chip {
  pointer-events: none;
  position: absolute;
  animation: chip-float 8s ease-in-out infinite;
}

.floating-chip__tag {
  padding: 0.5rem 0.75rem;
  font-family: var(--font-mono);
  font-size: 10px;
  letter-spacing: 0.1em;
}

.floating-chip__bar {
  margin-top: 0.5rem;
  height: 0.25rem;
  width: 100%;
  border-radius: 9999px;
}

.floating-chip__bar.hue-indigo { background: linear-gradient(to right, rgba(129, 140, 248, 0.5), rgba(232, 121, 249, 0.4), rgba(34, 211, 238, 0.4)); }
.floating-chip__bar.hue-cyan { background: linear-gradient(to right, rgba(34, 211, 238, 0.5), rgba(129, 140, 248, 0.4), rgba(232, 121, 249, 0.4)); }
.floating-chip__bar.hue-fuchsia { background: linear-gradient(to right, rgba(232, 121, 249, 0.5), rgba(34, 211, 238, 0.4), rgba(129, 140, 248, 0.4)); }

/* === Motion === */
.enter {
  animation: enter 0.7s ease-out both;
}

.rise {
  animation: rise 0.5s ease-out both;
}

@keyframes enter {
  from { opacity: 0; transform: translateY(24px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes rise {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes frame-spin {
  from { transform: rotateY(0deg); }
  to { transform: rotateY(360deg); }
}

@keyframes orb-pulse {
  0%, 100% { transform: scale(1); }
  50% { transform: scale(1.05); }
}

@keyframes chip-float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-8px); }
}

/* === Narrow windows === */
@media (max-width: 768px) {
  .bio-card__grid {
    grid-template-columns: 1fr;
  }

  .bio-card__identity,
  .focus-frame-wrap {
    padding: 2rem;
  }

  .bio-card__name {
    font-size: 2.25rem;
  }
}
"#;
