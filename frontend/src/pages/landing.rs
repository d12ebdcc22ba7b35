use log::info;
use yew::prelude::*;

use crate::components::about::About;
use crate::components::contact::ContactSection;
use crate::components::cta::Cta;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::hooks::{use_anchor_navigation, AnchorContext};
use crate::contact::submit::SubmitterHandle;
use crate::theme::GlobalStyles;

/// The whole single-page site: header, then sections in fixed order.
#[function_component(Landing)]
pub fn landing() -> Html {
    let anchors = use_anchor_navigation();
    let submitter = use_memo(|_| SubmitterHandle::simulated(), ());

    use_effect_with_deps(
        |_| {
            info!("Landing page mounted");
            || info!("Landing page unmounted")
        },
        (),
    );

    html! {
        <ContextProvider<AnchorContext> context={anchors}>
            <GlobalStyles />
            <Header />
            <main class="landing-page">
                <Hero />
                <About />
                <Features />
                <Cta />
                <ContactSection submitter={(*submitter).clone()} />
            </main>
            <Footer />
        </ContextProvider<AnchorContext>>
    }
}
