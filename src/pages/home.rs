use log::{debug, warn};
use yew::prelude::*;

use crate::components::{
    about::About, backdrop::BackdropCanvas, contact::Contact, contact_button::ContactButton,
    footer::Footer, header::Header, hero::Hero, services::Services,
};
use crate::host::dom;

#[function_component(Home)]
pub fn home() -> Html {
    let on_navigate = Callback::from(|id: &'static str| {
        debug!("Scrolling to #{}", id);
        if let Err(e) = dom::scroll_to_section(id) {
            warn!("Could not scroll to #{}: {}", id, e);
        }
    });

    html! {
        <div class="site">
            <BackdropCanvas />
            <div class="layer">
                <Header on_navigate={on_navigate.clone()} />
            </div>
            <main class="layer">
                <Hero {on_navigate} />
                <About />
                <Services />
                <Contact />
            </main>
            <Footer />
            <ContactButton />
        </div>
    }
}
