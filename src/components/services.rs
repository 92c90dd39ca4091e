use yew::prelude::*;

use crate::components::icons::Icon;
use crate::config;
use crate::hooks::use_section_observation;
use crate::motion::present;

struct Service {
    title: &'static str,
    desc: &'static str,
    icon: Icon,
}

const SERVICES: [Service; 9] = [
    Service {
        title: "Desenvolvimento Web",
        desc: "Sites e aplicações web modernas, responsivas e de alta performance.",
        icon: Icon::Code,
    },
    Service {
        title: "Desenvolvimento Mobile",
        desc: "Apps iOS e Android nativos e multiplataforma para seu negócio.",
        icon: Icon::Smartphone,
    },
    Service {
        title: "Automação de Processos",
        desc: "Sistemas que otimizam processos, aumentam produtividade e reduzem custos.",
        icon: Icon::Zap,
    },
    Service {
        title: "Sistemas Integrados",
        desc: "Integração de sistemas e APIs para conectar sua infraestrutura tecnológica.",
        icon: Icon::Database,
    },
    Service {
        title: "Consultoria Tecnológica",
        desc: "Estratégia e planejamento para transformar seu negócio digitalmente.",
        icon: Icon::Settings,
    },
    Service {
        title: "Análise de Dados",
        desc: "Business intelligence e análise de dados para decisões estratégicas.",
        icon: Icon::BarChart,
    },
    Service {
        title: "Design Gráfico",
        desc: "Identidade visual, branding e comunicação que destaca sua marca.",
        icon: Icon::Palette,
    },
    Service {
        title: "UI/UX Design",
        desc: "Interfaces intuitivas e experiências digitais focadas no usuário.",
        icon: Icon::Brush,
    },
    Service {
        title: "Cloud & Infraestrutura",
        desc: "Soluções em nuvem e infraestrutura escalável para seu negócio.",
        icon: Icon::Cloud,
    },
];

/// Extra lift of a hovered card, in pixels.
const HOVER_LIFT: f64 = 10.0;
const HOVER_SCALE: f64 = 1.05;

#[function_component(Services)]
pub fn services() -> Html {
    let site = config::site();
    let section_ref = use_node_ref();
    let observation = use_section_observation(section_ref.clone(), site.visibility_threshold);
    let hovered = use_state(|| None::<usize>);
    let visible = observation.has_been_visible;
    let card = &site.effects.services_card;

    html! {
        <section ref={section_ref} id="servicos" class="page-section services">
            <style>
                {r#"
                    .services-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        width: 100%;
                    }
                    .services-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1rem;
                        perspective: 1000px;
                    }
                    .service-card {
                        position: relative;
                        overflow: hidden;
                        padding: 1.5rem;
                        background: var(--paper);
                        border: 1px solid var(--ink-10);
                        transition: transform 0.7s var(--ease-out), opacity 0.7s var(--ease-out), border-color 0.7s ease, background 0.7s ease;
                    }
                    .service-card:hover {
                        border-color: rgba(0, 0, 0, 0.3);
                        background: rgba(0, 0, 0, 0.05);
                    }
                    .service-card .icon {
                        width: 2rem;
                        height: 2rem;
                        color: var(--ink-70);
                        margin-bottom: 1.5rem;
                        transition: all 0.5s ease;
                    }
                    .service-card:hover .icon {
                        color: var(--ink);
                        transform: scale(1.1) rotate(6deg);
                    }
                    .service-card h3 {
                        font-size: 1.25rem;
                        font-weight: 300;
                        letter-spacing: 0.025em;
                        margin: 0 0 0.75rem;
                        transition: transform 0.5s ease;
                    }
                    .service-card:hover h3 {
                        transform: translateX(0.5rem);
                    }
                    .service-card p {
                        font-size: 0.875rem;
                        line-height: 1.625;
                        color: var(--ink-60);
                        margin: 0;
                        transition: color 0.3s ease;
                    }
                    .service-card:hover p {
                        color: rgba(0, 0, 0, 0.8);
                    }
                    .service-card .accent {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        height: 1px;
                        background: rgba(0, 0, 0, 0.3);
                        transform: scaleX(0);
                        transition: transform 0.5s ease;
                    }
                    .service-card:hover .accent {
                        transform: scaleX(1);
                    }
                    @media (min-width: 640px) {
                        .services-grid {
                            grid-template-columns: repeat(2, 1fr);
                            gap: 1.5rem;
                        }
                        .service-card {
                            padding: 2rem;
                        }
                    }
                    @media (min-width: 1024px) {
                        .services-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                "#}
            </style>
            <div class="services-inner">
                <div class={classes!("services-heading", "enter", (!visible).then(|| "hidden-below"))} style="transition-delay: 0.1s;">
                    <span class="eyebrow">{"O que fazemos"}</span>
                    <h2 class="display">{"Serviços"}</h2>
                </div>
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| {
                        let mut pose = present(visible, observation.progress, index, card);
                        if visible && *hovered == Some(index) {
                            pose.translate_y = card.stagger_offset(index) - HOVER_LIFT;
                            pose.scale = HOVER_SCALE;
                            pose.rotate_x = 0.0;
                        }
                        let style = format!(
                            "{} transition-delay: {}s;",
                            pose.style(),
                            card.transition_delay(index)
                        );
                        let onmouseenter = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                        };
                        let onmouseleave = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| {
                                if *hovered == Some(index) {
                                    hovered.set(None);
                                }
                            })
                        };
                        html! {
                            <div class="service-card" key={service.title} {style} {onmouseenter} {onmouseleave}>
                                { service.icon.render("") }
                                <h3>{ service.title }</h3>
                                <p>{ service.desc }</p>
                                <div class="accent" />
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
