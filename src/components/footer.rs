use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let site = config::site();
    let year = Local::now().year();

    html! {
        <footer class="site-footer layer">
            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid var(--ink-10);
                        padding: 3rem 1.5rem;
                    }
                    .footer-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .footer-logo {
                        display: flex;
                        align-items: flex-end;
                        font-family: var(--logo-font);
                        font-size: 1.25rem;
                    }
                    .footer-logo .mid {
                        padding: 0 1px 2px;
                    }
                    .footer-note {
                        font-size: 0.875rem;
                        color: var(--ink-50);
                        letter-spacing: 0.05em;
                        text-align: center;
                        margin: 0;
                    }
                    @media (min-width: 768px) {
                        .footer-inner {
                            flex-direction: row;
                        }
                        .footer-note {
                            text-align: left;
                        }
                    }
                "#}
            </style>
            <div class="footer-inner">
                <div class="footer-logo">
                    <span>{"Ο"}</span>
                    <span class="mid">{"ψ"}</span>
                    <span>{"Σ"}</span>
                </div>
                <p class="footer-note">
                    { format!("© {} {} — {}", year, site.brand, site.tagline) }
                </p>
            </div>
        </footer>
    }
}
