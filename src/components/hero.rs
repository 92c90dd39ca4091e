use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::hooks::use_page_progress;
use crate::motion::present;

/// How long a clicked letter stays highlighted, in milliseconds.
const LETTER_HOLD_MS: u32 = 800;

struct Letter {
    glyph: &'static str,
    /// Tilt direction when active.
    tilt: &'static str,
    pad: &'static str,
    delay: f64,
}

const LETTERS: [Letter; 3] = [
    Letter { glyph: "Ο", tilt: "tilt-right", pad: "pad-right", delay: 0.0 },
    Letter { glyph: "ψ", tilt: "tilt-left", pad: "pad-mid", delay: 0.2 },
    Letter { glyph: "Σ", tilt: "tilt-right", pad: "pad-left", delay: 0.4 },
];

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let site = config::site();
    let is_loaded = use_state(|| false);
    let active_letter = use_state(|| None::<usize>);
    let release = use_mut_ref(|| None::<Timeout>);
    let progress = use_page_progress();

    {
        let is_loaded = is_loaded.clone();
        let release = release.clone();
        use_effect_with_deps(
            move |_| {
                is_loaded.set(true);
                // Drop the pending release timer with the component.
                move || {
                    release.borrow_mut().take();
                }
            },
            (),
        );
    }

    let logo_pose = present(*is_loaded, progress, 0, &site.effects.hero);
    let logo_style = format!(
        "{} transition-delay: {}s;",
        logo_pose.style(),
        site.effects.hero.transition_delay(0)
    );

    let explore = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit("sobre"))
    };

    let loaded_class = if *is_loaded { "" } else { "hidden-below" };

    html! {
        <section id="hero" class="hero">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        z-index: 10;
                        padding: 0 1.5rem;
                    }
                    .hero-inner {
                        text-align: center;
                        max-width: 64rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .hero-logo {
                        display: flex;
                        justify-content: center;
                        align-items: flex-end;
                        margin-bottom: 1.5rem;
                        transition: transform 1s var(--ease-out), opacity 1s var(--ease-out);
                    }
                    .hero-letter {
                        font-family: var(--logo-font);
                        font-size: clamp(5rem, 14vw, 11rem);
                        font-weight: 200;
                        line-height: 1;
                        cursor: pointer;
                        user-select: none;
                        transition: all 0.3s var(--ease-out);
                        animation: float 6s ease-in-out infinite;
                    }
                    .hero-letter.pad-right { padding-right: 10px; }
                    .hero-letter.pad-mid { padding: 0 4px 1rem; }
                    .hero-letter.pad-left { padding-left: 10px; }
                    .hero-letter.tilt-right:hover {
                        transform: scale(1.25) rotate(6deg) translateY(-10px);
                    }
                    .hero-letter.tilt-left:hover {
                        transform: scale(1.25) rotate(-6deg) translateY(-10px);
                    }
                    .hero-letter.active {
                        animation: none;
                        color: var(--ink-90);
                        filter: drop-shadow(0 0 20px rgba(0, 0, 0, 0.3));
                    }
                    .hero-letter.active.tilt-right {
                        transform: scale(1.4) rotate(12deg) translateY(-20px);
                    }
                    .hero-letter.active.tilt-left {
                        transform: scale(1.4) rotate(-12deg) translateY(-20px);
                    }
                    .hero-tagline {
                        font-size: clamp(1rem, 2.2vw, 1.5rem);
                        letter-spacing: 0.025em;
                        color: var(--ink-90);
                        margin: 0 0 1rem;
                    }
                    .hero-sub {
                        font-size: clamp(0.875rem, 1.8vw, 1.25rem);
                        color: var(--ink-60);
                        margin: 0;
                    }
                "#}
            </style>
            <div class="hero-inner">
                <div class="hero-logo" style={logo_style}>
                    { for LETTERS.iter().enumerate().map(|(index, letter)| {
                        let is_active = *active_letter == Some(index);
                        let onclick = {
                            let active_letter = active_letter.clone();
                            let release = release.clone();
                            Callback::from(move |_: MouseEvent| {
                                active_letter.set(Some(index));
                                let active_letter = active_letter.clone();
                                // Replacing the timer cancels the previous one.
                                *release.borrow_mut() = Some(Timeout::new(LETTER_HOLD_MS, move || {
                                    active_letter.set(None);
                                }));
                            })
                        };
                        let onmouseenter = {
                            let active_letter = active_letter.clone();
                            Callback::from(move |_: MouseEvent| {
                                if active_letter.is_none() {
                                    active_letter.set(Some(index));
                                }
                            })
                        };
                        let onmouseleave = {
                            let active_letter = active_letter.clone();
                            Callback::from(move |_: MouseEvent| {
                                if *active_letter == Some(index) {
                                    active_letter.set(None);
                                }
                            })
                        };
                        html! {
                            <span
                                class={classes!("hero-letter", letter.tilt, letter.pad, is_active.then(|| "active"))}
                                style={format!("animation-delay: {}s;", letter.delay)}
                                {onclick}
                                {onmouseenter}
                                {onmouseleave}
                            >
                                { letter.glyph }
                            </span>
                        }
                    }) }
                </div>
                <div class={classes!("enter", loaded_class)} style="transition-delay: 0.4s;">
                    <p class="hero-tagline">{ site.tagline.as_str() }</p>
                    <p class="hero-sub">{"Tecnologia que transforma."}</p>
                </div>
                <div class={classes!("enter", loaded_class)} style="transition-delay: 0.9s;">
                    <button class="outline-button" onclick={explore}>
                        {"Explorar"}
                    </button>
                </div>
            </div>
        </section>
    }
}
