use yew::prelude::*;

/// Line icons drawn on a 24x24 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    MessageSquare,
    ArrowRight,
    Code,
    Smartphone,
    Zap,
    Database,
    Settings,
    BarChart,
    Palette,
    Brush,
    Cloud,
}

impl Icon {
    pub fn render(self, class: &'static str) -> Html {
        let body = match self {
            Icon::MessageSquare => html! {
                <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" />
            },
            Icon::ArrowRight => html! {
                <>
                    <path d="M5 12h14" />
                    <path d="m12 5 7 7-7 7" />
                </>
            },
            Icon::Code => html! {
                <>
                    <polyline points="16 18 22 12 16 6" />
                    <polyline points="8 6 2 12 8 18" />
                </>
            },
            Icon::Smartphone => html! {
                <>
                    <rect width="14" height="20" x="5" y="2" rx="2" ry="2" />
                    <path d="M12 18h.01" />
                </>
            },
            Icon::Zap => html! {
                <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" />
            },
            Icon::Database => html! {
                <>
                    <ellipse cx="12" cy="5" rx="9" ry="3" />
                    <path d="M3 5v14a9 3 0 0 0 18 0V5" />
                    <path d="M3 12a9 3 0 0 0 18 0" />
                </>
            },
            Icon::Settings => html! {
                <>
                    <circle cx="12" cy="12" r="3" />
                    <path d="M12 2v3M12 19v3M4.9 4.9l2.1 2.1M17 17l2.1 2.1M2 12h3M19 12h3M4.9 19.1 7 17M17 7l2.1-2.1" />
                </>
            },
            Icon::BarChart => html! {
                <>
                    <path d="M3 3v18h18" />
                    <path d="M18 17V9" />
                    <path d="M13 17V5" />
                    <path d="M8 17v-3" />
                </>
            },
            Icon::Palette => html! {
                <>
                    <circle cx="13.5" cy="6.5" r="1" />
                    <circle cx="17.5" cy="10.5" r="1" />
                    <circle cx="8.5" cy="7.5" r="1" />
                    <circle cx="6.5" cy="12.5" r="1" />
                    <path d="M12 2a10 10 0 0 0 0 20c.9 0 1.7-.8 1.7-1.7 0-.4-.2-.8-.4-1.1-.3-.3-.4-.7-.4-1.1 0-.9.8-1.7 1.7-1.7h2A5.6 5.6 0 0 0 22 10.9C22 6 17.5 2 12 2z" />
                </>
            },
            Icon::Brush => html! {
                <>
                    <path d="m9.06 11.9 8.07-8.06a2.85 2.85 0 1 1 4.03 4.03l-8.06 8.08" />
                    <path d="M7.07 14.94c-1.66 0-3 1.35-3 3.02 0 1.33-2.5 1.52-2 2.02 1.08 1.1 2.49 2.02 4 2.02 2.2 0 4-1.8 4-4.04a3.01 3.01 0 0 0-3-3.02z" />
                </>
            },
            Icon::Cloud => html! {
                <path d="M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9z" />
            },
        };

        html! {
            <svg class={classes!("icon", class)} viewBox="0 0 24 24" aria-hidden="true">
                { body }
            </svg>
        }
    }
}
