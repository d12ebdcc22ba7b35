use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::config;
use crate::hooks::{current_scroll_offset, use_window_event, AnchorContext};
use crate::navigation::header::{is_scrolled, HeaderVariant};
use crate::navigation::sections::SectionId;

#[function_component(Header)]
pub fn header() -> Html {
    let scrolled = use_state_eq(|| is_scrolled(current_scroll_offset()));
    let anchors = use_context::<AnchorContext>();
    let menu_open = anchors.as_ref().map_or(false, |anchors| anchors.menu_open);

    {
        let scrolled = scrolled.clone();
        use_window_event("scroll", move || {
            scrolled.set(is_scrolled(current_scroll_offset()));
        });
    }

    let toggle_menu = {
        let toggle = anchors.map(|anchors| anchors.toggle_menu);
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(toggle) = &toggle {
                toggle.emit(());
            }
        })
    };

    let variant = HeaderVariant::from_scrolled(*scrolled);

    html! {
        <>
            <header class={variant.class()}>
                <div class="nav-container">
                    <AnchorLink to={SectionId::Home} class="nav-logo">
                        {config::BRAND}
                    </AnchorLink>
                    <nav class="nav-links">
                        { for SectionId::ALL.into_iter().map(|id| html! {
                            <AnchorLink to={id} class="nav-link">{id.label()}</AnchorLink>
                        }) }
                    </nav>
                    <button class="mobile-menu-button" onclick={toggle_menu}>
                        { if menu_open { "X" } else { "☰" } }
                    </button>
                </div>
            </header>

            <div class={classes!("mobile-menu", menu_open.then(|| "open"))}>
                <nav class="mobile-nav-links">
                    { for SectionId::ALL.into_iter().map(|id| html! {
                        <AnchorLink to={id} class="mobile-nav-link">
                            {id.label()}
                        </AnchorLink>
                    }) }
                </nav>
            </div>

            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        transition: var(--transition);
                        z-index: 100;
                    }

                    .site-header.spacious {
                        padding: 20px 0;
                        background-color: rgba(255, 255, 255, 0.9);
                        box-shadow: none;
                    }

                    .site-header.compact {
                        padding: 15px 0;
                        background-color: #fff;
                        box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
                    }

                    .nav-container {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        width: 100%;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 20px;
                    }

                    .nav-logo {
                        font-size: 1.8rem;
                        font-weight: 700;
                        color: var(--primary-color);
                        cursor: pointer;
                    }

                    .nav-links {
                        display: flex;
                        gap: 30px;
                    }

                    .nav-link,
                    .mobile-nav-link {
                        font-weight: 500;
                        color: var(--dark-color);
                        cursor: pointer;
                        transition: var(--transition);
                    }

                    .nav-link:hover,
                    .nav-link.active,
                    .mobile-nav-link:hover,
                    .mobile-nav-link.active {
                        color: var(--primary-color);
                    }

                    .mobile-menu-button {
                        display: none;
                        font-size: 1.5rem;
                        background: none;
                        color: var(--dark-color);
                        border: none;
                        cursor: pointer;
                    }

                    .mobile-menu {
                        position: fixed;
                        top: 70px;
                        left: 0;
                        width: 100%;
                        background-color: #fff;
                        padding: 20px;
                        box-shadow: 0 5px 10px rgba(0, 0, 0, 0.1);
                        transform: translateY(-100%);
                        opacity: 0;
                        pointer-events: none;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                        z-index: 99;
                        display: none;
                    }

                    .mobile-menu_open {
                        transform: translateY(0);
                        opacity: 1;
                        pointer-events: auto;
                    }

                    .mobile-nav-links {
                        display: flex;
                        flex-direction: column;
                        gap: 20px;
                    }

                    .mobile-nav-link {
                        font-size: 1.1rem;
                        padding: 10px 0;
                        border-bottom: 1px solid #eee;
                    }

                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }

                        .mobile-menu-button,
                        .mobile-menu {
                            display: block;
                        }
                    }
                "#}
            </style>
        </>
    }
}
