use yew::prelude::*;

use crate::components::icons::Icon;
use crate::config;

/// Fixed WhatsApp shortcut in the bottom-right corner.
#[function_component(ContactButton)]
pub fn contact_button() -> Html {
    html! {
        <div class="contact-float">
            <style>
                {r#"
                    .contact-float {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 40;
                    }
                    .contact-float a {
                        width: 3.5rem;
                        height: 3.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: var(--ink);
                        border: 1px solid rgba(0, 0, 0, 0.3);
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(12px);
                        -webkit-backdrop-filter: blur(12px);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: all 0.5s ease;
                    }
                    .contact-float a:hover {
                        background: var(--ink);
                        color: var(--paper);
                    }
                    .contact-float .icon {
                        transition: transform 0.3s ease;
                    }
                    .contact-float a:hover .icon {
                        transform: scale(1.1);
                    }
                "#}
            </style>
            <a
                href={config::site().contact.whatsapp_url()}
                target="_blank"
                rel="noopener noreferrer"
                aria-label="Contato via WhatsApp"
            >
                { Icon::MessageSquare.render("") }
            </a>
        </div>
    }
}
