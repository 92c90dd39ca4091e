use yew::prelude::*;

use crate::config;
use crate::hooks::use_section_observation;
use crate::motion::present;

const STATS: [(&str, &str); 4] = [
    ("100+", "Projetos"),
    ("50+", "Clientes"),
    ("10+", "Anos"),
    ("24/7", "Suporte"),
];

#[function_component(About)]
pub fn about() -> Html {
    let site = config::site();
    let section_ref = use_node_ref();
    let observation = use_section_observation(section_ref.clone(), site.visibility_threshold);
    let visible = observation.has_been_visible;
    let progress = observation.progress;

    let title = &site.effects.about_title;
    let body = &site.effects.about_body;
    let stats = &site.effects.about_stats;

    let title_style = format!(
        "{} transition-delay: {}s;",
        present(visible, progress, 0, title).style(),
        title.transition_delay(0)
    );
    let body_style = format!(
        "{} transition-delay: {}s;",
        present(visible, progress, 0, body).style(),
        body.transition_delay(0)
    );

    html! {
        <section ref={section_ref} id="sobre" class="page-section about">
            <style>
                {r#"
                    .about-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                        width: 100%;
                    }
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .about-column {
                        transition: transform 1s var(--ease-out), opacity 1s var(--ease-out);
                        perspective: 800px;
                    }
                    .about-body {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        font-size: clamp(1rem, 1.6vw, 1.25rem);
                        line-height: 1.625;
                        color: rgba(0, 0, 0, 0.8);
                    }
                    .about-body p {
                        margin: 0;
                    }
                    .about-body .lead {
                        border-left: 2px solid rgba(0, 0, 0, 0.2);
                        padding-left: 1.5rem;
                    }
                    .about-title:hover .display {
                        transform: translateX(0.5rem);
                    }
                    .about-title .display {
                        transition: transform 0.5s ease;
                    }
                    .about-stats {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                        margin-top: 5rem;
                        padding-top: 5rem;
                        border-top: 1px solid var(--ink-10);
                    }
                    .stat {
                        transition: transform 0.7s var(--ease-out), opacity 0.7s var(--ease-out);
                    }
                    .stat-number {
                        font-size: clamp(2.25rem, 4vw, 3rem);
                        font-weight: 200;
                        margin-bottom: 0.5rem;
                        transition: transform 0.5s ease;
                    }
                    .stat:hover .stat-number {
                        transform: scale(1.1);
                    }
                    .stat-label {
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        color: var(--ink-50);
                    }
                    @media (min-width: 768px) {
                        .about-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                        .about-stats {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }
                "#}
            </style>
            <div class="about-inner">
                <div class="about-grid">
                    <div class="about-column about-title" style={title_style}>
                        <span class="eyebrow">{"Sobre Nós"}</span>
                        <h2 class="display">
                            {"Criamos"}<br />
                            <span class="muted">{"Experiências"}</span><br />
                            {"Digitais"}
                        </h2>
                    </div>
                    <div class="about-column about-body" style={body_style}>
                        <p class="lead">
                            {"Somos uma agência que une criatividade visual e tecnologia de ponta."}
                        </p>
                        <p>
                            {"Exploramos formas, contrastes e movimento para dar identidade única a ideias. Desenvolvemos software e automações que transformam processos."}
                        </p>
                        <p>
                            {"Design e vídeo como extensão do olhar. Tecnologia como extensão da eficiência."}
                        </p>
                        <p class="muted" style="font-style: italic;">
                            {"Criamos soluções completas: do visual ao funcional, da identidade aos sistemas."}
                        </p>
                    </div>
                </div>
                <div class={classes!("about-stats", "enter", (!visible).then(|| "hidden-below"))} style="transition-delay: 0.7s;">
                    { for STATS.iter().enumerate().map(|(index, &(number, label))| {
                        let style = format!(
                            "{} transition-delay: {}s;",
                            present(visible, progress, index, stats).style(),
                            stats.transition_delay(index)
                        );
                        html! {
                            <div class="stat" key={label} {style}>
                                <div class="stat-number">{ number }</div>
                                <div class="stat-label">{ label }</div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
