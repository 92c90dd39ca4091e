use yew::prelude::*;

use crate::components::icons::Icon;
use crate::config;
use crate::hooks::use_section_observation;
use crate::motion::present;

#[function_component(Contact)]
pub fn contact() -> Html {
    let site = config::site();
    let section_ref = use_node_ref();
    let observation = use_section_observation(section_ref.clone(), site.visibility_threshold);
    let effect = &site.effects.contact;

    let style = format!(
        "{} transition-delay: {}s;",
        present(observation.has_been_visible, observation.progress, 0, effect).style(),
        effect.transition_delay(0)
    );

    html! {
        <section ref={section_ref} id="contato" class="page-section contact">
            <style>
                {r#"
                    .contact-inner {
                        max-width: 56rem;
                        margin: 0 auto;
                        width: 100%;
                        text-align: center;
                    }
                    .contact-card {
                        transition: transform 1s var(--ease-out), opacity 1s var(--ease-out);
                    }
                    .contact-card .display {
                        font-size: clamp(1.875rem, 7vw, 4.5rem);
                        margin-bottom: 2rem;
                    }
                    .contact-copy {
                        font-size: clamp(1rem, 2.2vw, 1.5rem);
                        color: var(--ink-70);
                        max-width: 42rem;
                        margin: 0 auto 3rem;
                        padding: 0 1rem;
                    }
                    .contact-actions {
                        display: flex;
                        justify-content: center;
                        padding: 0 1rem;
                    }
                    .contact-actions .outline-button {
                        min-width: 200px;
                    }
                    .contact-actions .icon {
                        width: 1.25rem;
                        height: 1.25rem;
                        transition: transform 0.3s ease;
                    }
                    .contact-actions .outline-button:hover .icon.arrow {
                        transform: translateX(0.5rem);
                    }
                "#}
            </style>
            <div class="contact-inner">
                <div class="contact-card" {style}>
                    <span class="eyebrow">{"Vamos conversar"}</span>
                    <h2 class="display">
                        {"Tem uma ideia?"}<br />
                        <span class="muted">{"Deixe que traduzimos."}</span>
                    </h2>
                    <p class="contact-copy">
                        {"Transformamos conceitos em experiências digitais memoráveis."}
                    </p>
                    <div class="contact-actions">
                        <a
                            class="outline-button"
                            href={site.contact.whatsapp_url()}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            { Icon::MessageSquare.render("") }
                            <span>{"WhatsApp"}</span>
                            { Icon::ArrowRight.render("arrow") }
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
