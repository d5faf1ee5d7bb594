//! Global CSS styles for Valentine.
//!
//! Soft pink gradient, glass cards, glowing type.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PINKS */
  --hot-pink: #ff69b4;
  --deep-pink: #ff1493;
  --light-pink: #ffb6c1;
  --blush: #ffe4e1;
  --rose: #fb7185;
  --rose-deep: #be185d;

  /* ACCENTS */
  --gold: #ffd700;
  --white-glass: rgba(255, 255, 255, 0.55);
  --pink-border: rgba(251, 207, 232, 0.6);

  /* Typography */
  --font-script: 'Dancing Script', 'Brush Script MT', cursive;
  --font-body: 'Poppins', 'Segoe UI', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms ease-out;
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
  font-family: var(--font-body);
  color: var(--rose-deep);
  min-height: 100vh;
  overflow: hidden;
  user-select: none;
}

::selection {
  background: #fbcfe8;
}

/* === Layout === */
.app-shell {
  position: relative;
  min-height: 100vh;
  overflow: hidden;
  background: linear-gradient(135deg, #ffe4e1 0%, #ffc0cb 45%, #ffb6c1 70%, #fda4af 100%);
  background-size: 200% 200%;
  animation: gradient-shift 12s ease infinite;
}

.stage {
  position: relative;
  z-index: 10;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
}

.card {
  width: 100%;
  max-width: 26rem;
  padding: 2.5rem 2rem;
  border-radius: 2rem;
  background: var(--white-glass);
  backdrop-filter: blur(16px);
  border: 2px solid var(--pink-border);
  box-shadow: 0 25px 50px -12px rgba(244, 114, 182, 0.35);
  text-align: center;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.card-enter {
  animation: card-enter var(--transition-slow) both;
}

/* === Typography === */
.eyebrow {
  font-size: 1.1rem;
  font-weight: 600;
  color: var(--deep-pink);
}

.script-font,
.display-name,
.display-title,
.occasion {
  font-family: var(--font-script);
}

.display-name {
  font-size: 2.5rem;
  font-weight: 700;
  line-height: 1.2;
  color: var(--deep-pink);
}

.display-title {
  font-size: 2rem;
  font-weight: 700;
  color: var(--deep-pink);
}

.question-text {
  font-size: 1.5rem;
  font-weight: 600;
  line-height: 1.5;
  padding: 0 1rem;
}

.body-text {
  font-size: 1.2rem;
  line-height: 1.6;
}

.muted {
  opacity: 0.7;
}

.highlight {
  color: var(--hot-pink);
  font-weight: 700;
}

.text-glow {
  text-shadow: 0 0 12px rgba(255, 105, 180, 0.5), 0 0 24px rgba(255, 182, 193, 0.4);
}

.rainbow-glow {
  font-size: 3.5rem;
  animation: glow-pulse 2s ease-in-out infinite, rainbow-glow 3s ease-in-out infinite;
}

/* === Badges === */
.heart-badge {
  font-size: 4rem;
  line-height: 1;
}

.heart-badge.wiggle { animation: wiggle 2s ease-in-out infinite; }
.heart-badge.beat { animation: beat 1.4s ease-in-out infinite; }

.heart-pulse {
  margin-right: 0.5rem;
  animation: beat 1.4s ease-in-out infinite;
  display: inline-block;
}

/* === Buttons === */
button {
  font-family: var(--font-body);
  cursor: pointer;
  border: none;
}

.btn-romantic {
  height: 4rem;
  padding: 0 2rem;
  border-radius: 1.5rem;
  background: linear-gradient(90deg, #f472b6, #fb7185, #ec4899);
  color: #fff;
  font-size: 1.25rem;
  font-weight: 700;
  border: 2px solid rgba(255, 255, 255, 0.3);
  box-shadow: 0 20px 40px -10px rgba(249, 168, 212, 0.7);
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-romantic:hover {
  transform: scale(1.05);
  box-shadow: 0 24px 48px -10px rgba(236, 72, 153, 0.7);
}

.btn-romantic:active { transform: scale(0.95); }

.btn-soft {
  height: 4rem;
  padding: 0 2rem;
  border-radius: 1.5rem;
  background: rgba(255, 255, 255, 0.8);
  color: var(--deep-pink);
  font-size: 1.2rem;
  font-weight: 600;
  border: 2px solid var(--light-pink);
  transition: transform var(--transition-fast);
}

.btn-soft:hover { transform: scale(1.05); }

.btn-toggle {
  margin-top: 1.5rem;
  padding: 0.6rem 1.5rem;
  border-radius: 999px;
  background: rgba(255, 255, 255, 0.5);
  color: var(--hot-pink);
  border: 1px solid var(--light-pink);
  font-weight: 600;
}

.btn-toggle.active {
  background: var(--hot-pink);
  color: #fff;
}

.btn-decline {
  height: 3.5rem;
  padding: 0 2rem;
  border-radius: 1.5rem;
  background: #e5e7eb;
  color: #6b7280;
  font-size: 1.1rem;
  cursor: default;
}

.evasive-wrapper {
  display: inline-block;
  transition: transform 200ms cubic-bezier(0.34, 1.56, 0.64, 1);
}

.wide { width: 100%; }

.yes-button {
  height: 5rem;
  font-size: 1.6rem;
}

.shimmer {
  position: relative;
  overflow: hidden;
}

.shimmer::after {
  content: '';
  position: absolute;
  inset: 0;
  background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.35), transparent);
  animation: shimmer 3s linear infinite;
}

.answer-stack {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.answer-row {
  display: flex;
  gap: 1rem;
  align-items: center;
  justify-content: center;
}

/* === Love Meter === */
.love-meter {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  padding: 1.5rem;
  z-index: 50;
  animation: drop-in var(--transition-slow) both;
}

.love-meter-card {
  max-width: 28rem;
  margin: 0 auto;
  padding: 1rem;
  border-radius: 1.5rem;
  background: rgba(255, 255, 255, 0.3);
  backdrop-filter: blur(12px);
  border: 1px solid var(--pink-border);
}

.love-meter-labels {
  display: flex;
  justify-content: space-between;
  font-size: 0.875rem;
  font-weight: 600;
  color: var(--deep-pink);
  padding: 0 0.5rem 0.75rem;
}

.love-meter-track {
  position: relative;
  height: 0.75rem;
  border-radius: 999px;
  background: rgba(255, 228, 225, 0.8);
  overflow: hidden;
}

.love-meter-fill {
  height: 100%;
  border-radius: 999px;
  background: linear-gradient(90deg, var(--hot-pink), var(--rose));
  transition: width var(--transition-slow);
}

.love-meter-glow {
  position: absolute;
  inset: 0;
  filter: blur(8px);
  animation: glow-pulse 2s ease-in-out infinite;
}

/* === Reasons === */
.reason-panel {
  min-height: 9rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  animation: card-enter var(--transition-normal) both;
}

.reason-lead {
  font-size: 1.5rem;
  font-weight: 600;
  line-height: 1.5;
}

.reason-detail {
  font-size: 1.2rem;
  color: var(--deep-pink);
}

.reason-dots {
  display: flex;
  justify-content: center;
  gap: 1rem;
}

.reason-dot {
  width: 1rem;
  height: 1rem;
  border-radius: 999px;
  background: #f9a8d4;
  transition: all var(--transition-normal);
}

.reason-dot:hover { background: #f472b6; }

.reason-dot.selected {
  width: 2.5rem;
  background: #ec4899;
}

/* === Final screen === */
.final-wrap {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.final-card {
  transition: transform var(--transition-slow), background var(--transition-slow);
}

.final-card.status-mode {
  transform: scale(1.05);
  background: linear-gradient(135deg, rgba(253, 242, 248, 0.8), rgba(255, 228, 230, 0.8));
}

.final-names {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.occasion {
  font-size: 1.5rem;
  color: #f472b6;
}

.forever {
  font-size: 0.7rem;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: #f9a8d4;
}

.share-hints {
  display: flex;
  justify-content: center;
  gap: 2rem;
}

.share-hint {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.25rem;
}

.btn-share {
  padding: 0.5rem 1.25rem;
  border-radius: 999px;
  background: rgba(255, 255, 255, 0.7);
  color: var(--hot-pink);
  font-weight: 600;
  display: flex;
  gap: 0.4rem;
}

.share-label {
  font-size: 0.65rem;
  color: #f472b6;
}

.status-hint {
  margin-top: 1rem;
  text-align: center;
  font-size: 0.75rem;
  color: rgba(244, 114, 182, 0.6);
  animation: glow-pulse 2s ease-in-out infinite;
}

/* === Ambient layers === */
.heart-backdrop .floating-heart {
  position: absolute;
  bottom: -3rem;
  color: #fbcfe8;
  animation: float-up 9s linear infinite;
}

.confetti-layer {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
  z-index: 100;
}

.confetti {
  position: absolute;
  top: 70%;
  width: 0.6rem;
  height: 0.9rem;
  border-radius: 2px;
  animation: confetti-fly 2.5s cubic-bezier(0.2, 0.6, 0.4, 1) forwards;
}

/* === Keyframes === */
@keyframes gradient-shift {
  0%, 100% { background-position: 0% 50%; }
  50% { background-position: 100% 50%; }
}

@keyframes card-enter {
  from { opacity: 0; transform: scale(0.9) translateY(20px); }
  to { opacity: 1; transform: scale(1) translateY(0); }
}

@keyframes drop-in {
  from { opacity: 0; transform: translateY(-100px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes beat {
  0%, 100% { transform: scale(1); }
  50% { transform: scale(1.15); }
}

@keyframes wiggle {
  0%, 100% { transform: rotate(0deg) scale(1); }
  25% { transform: rotate(-10deg) scale(1.05); }
  75% { transform: rotate(10deg) scale(1.05); }
}

@keyframes glow-pulse {
  0%, 100% { opacity: 0.6; }
  50% { opacity: 1; }
}

@keyframes rainbow-glow {
  0%, 100% { text-shadow: 0 0 18px rgba(255, 105, 180, 0.8); }
  50% { text-shadow: 0 0 28px rgba(255, 215, 0, 0.8); }
}

@keyframes shimmer {
  from { transform: translateX(-100%); }
  to { transform: translateX(100%); }
}

@keyframes float-up {
  from { transform: translateY(0) rotate(0deg); opacity: 0; }
  10% { opacity: 1; }
  to { transform: translateY(-110vh) rotate(360deg); opacity: 0; }
}

@keyframes confetti-fly {
  0% { transform: translate(0, 0) rotate(0deg); opacity: 1; }
  55% { transform: translate(var(--dx), var(--dy)) rotate(calc(var(--spin) * 0.6)); opacity: 1; }
  100% { transform: translate(calc(var(--dx) * 1.25), calc(var(--dy) + 420px)) rotate(var(--spin)); opacity: 0; }
}
"#;
