//! Page-wide stylesheet, mounted once at start-up.

use stylist::GlobalStyle;

use crate::error::Result;

pub const GLOBAL_STYLES: &str = r#"
:root {
    --ink: #000000;
    --ink-90: rgba(0, 0, 0, 0.9);
    --ink-70: rgba(0, 0, 0, 0.7);
    --ink-60: rgba(0, 0, 0, 0.6);
    --ink-50: rgba(0, 0, 0, 0.5);
    --ink-10: rgba(0, 0, 0, 0.1);
    --paper: #ffffff;
    --logo-font: "Apple Symbols", sans-serif;
    --ease-out: cubic-bezier(0, 0, 0.2, 1);
}

*, *::before, *::after {
    box-sizing: border-box;
}

html, body {
    margin: 0;
    padding: 0;
    background: var(--paper);
    color: var(--ink);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    font-weight: 300;
    -webkit-font-smoothing: antialiased;
}

.site {
    min-height: 100vh;
    overflow-x: hidden;
    position: relative;
    background: transparent;
}

.layer {
    position: relative;
    z-index: 10;
}

.page-section {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 5rem 1.5rem;
    position: relative;
    z-index: 10;
}

.eyebrow {
    display: block;
    font-size: 0.875rem;
    text-transform: uppercase;
    letter-spacing: 0.3em;
    color: var(--ink-50);
    margin-bottom: 1rem;
}

.display {
    font-weight: 200;
    letter-spacing: -0.025em;
    line-height: 1;
    margin: 0;
    font-size: clamp(1.875rem, 6vw, 4.5rem);
}

.muted {
    color: var(--ink-60);
}

.enter {
    transition: all 1s var(--ease-out);
}

.enter.hidden-below {
    opacity: 0;
    transform: translateY(2.5rem);
}

.outline-button {
    position: relative;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.75rem;
    border: 2px solid var(--ink);
    background: transparent;
    color: var(--ink);
    padding: 1rem 2rem;
    font-size: 0.875rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    text-decoration: none;
    cursor: pointer;
    transition: all 0.5s ease;
}

.outline-button:hover {
    background: var(--ink);
    color: var(--paper);
}

.icon {
    width: 1.5rem;
    height: 1.5rem;
    fill: none;
    stroke: currentColor;
    stroke-width: 2;
    stroke-linecap: round;
    stroke-linejoin: round;
}

@keyframes float {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-10px); }
}

@media (prefers-reduced-motion: reduce) {
    *, *::before, *::after {
        animation: none;
        transition: none;
    }
}
"#;

/// Registers [`GLOBAL_STYLES`] in the document head.
pub fn mount_global_styles() -> Result<GlobalStyle> {
    Ok(GlobalStyle::new(GLOBAL_STYLES)?)
}
