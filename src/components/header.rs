use yew::prelude::*;

use crate::config;
use crate::hooks::use_scrolled_past;

const NAV_ITEMS: [(&str, &str); 3] = [
    ("sobre", "Sobre"),
    ("servicos", "Serviços"),
    ("contato", "Contato"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let is_scrolled = use_scrolled_past(config::site().header_scroll_offset);

    let go_top = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit("hero"))
    };

    html! {
        <header class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        transition: all 0.5s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.6);
                        backdrop-filter: blur(24px);
                        -webkit-backdrop-filter: blur(24px);
                        border-bottom: 1px solid rgba(0, 0, 0, 0.1);
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: flex-end;
                        background: none;
                        border: none;
                        padding: 0;
                        cursor: pointer;
                        font-family: var(--logo-font);
                        font-size: 1.5rem;
                        font-weight: 300;
                        color: var(--ink);
                        transition: opacity 0.5s ease;
                    }
                    .nav-logo:hover {
                        opacity: 0.7;
                    }
                    .nav-logo span {
                        transition: transform 0.3s ease;
                    }
                    .nav-logo:hover span {
                        transform: scale(1.1);
                    }
                    .nav-logo .mid {
                        padding: 0 1px 2px;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        position: relative;
                        background: none;
                        border: none;
                        padding: 0;
                        cursor: pointer;
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        color: var(--ink-70);
                        transition: color 0.3s ease;
                    }
                    .nav-link:hover {
                        color: var(--ink);
                    }
                    .nav-link::after {
                        content: '';
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        width: 0;
                        height: 1px;
                        background: var(--ink);
                        transition: width 0.3s ease;
                    }
                    .nav-link:hover::after {
                        width: 100%;
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            gap: 1rem;
                        }
                        .nav-link {
                            font-size: 0.75rem;
                        }
                    }
                "#}
            </style>
            <nav class="nav-content">
                <button class="nav-logo" onclick={go_top} aria-label="Ir para o topo">
                    <span>{"Ο"}</span>
                    <span class="mid">{"ψ"}</span>
                    <span>{"Σ"}</span>
                </button>
                <div class="nav-links">
                    { for NAV_ITEMS.iter().map(|&(id, label)| {
                        let on_navigate = props.on_navigate.clone();
                        html! {
                            <button class="nav-link" onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(id))}>
                                { label }
                            </button>
                        }
                    }) }
                </div>
            </nav>
        </header>
    }
}
