use chrono::{Datelike, Local, NaiveDate};
use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::config;
use crate::navigation::sections::SectionId;

const QUICK_LINKS: [(SectionId, &str); 4] = [
    (SectionId::Home, "Home"),
    (SectionId::About, "About Us"),
    (SectionId::Features, "Features"),
    (SectionId::Contact, "Contact Us"),
];

pub fn copyright_notice(today: &impl Datelike) -> String {
    format!("© {} {}. All rights reserved.", today.year(), config::BRAND)
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    /// Overrides the wall clock for the copyright year.
    #[prop_or_default]
    pub today: Option<NaiveDate>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let today = props.today.unwrap_or_else(|| Local::now().date_naive());

    html! {
        <footer class="site-footer">
            <div class="footer-container">
                <div class="footer-content">
                    <div class="footer-column">
                        <div class="footer-logo">{config::BRAND}</div>
                        <p class="footer-text">
                            {"Talko is an innovative educational technology platform designed for language schools and colleges, helping to enhance teaching quality, streamline management processes, and boost student engagement."}
                        </p>
                    </div>

                    <div class="footer-column">
                        <h3 class="footer-title">{"Quick Links"}</h3>
                        <ul class="footer-links">
                            { for QUICK_LINKS.iter().map(|(id, label)| html! {
                                <li key={id.as_str()}>
                                    <AnchorLink to={*id}>{*label}</AnchorLink>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h3 class="footer-title">{"Contact Info"}</h3>
                        <ul class="footer-links">
                            <li>
                                <AnchorLink to={SectionId::Contact}>{"✉️ Contact us through the form"}</AnchorLink>
                            </li>
                            <li><span>{"📍 Turkey"}</span></li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p class="footer-copyright">{copyright_notice(&today)}</p>
                    <AnchorLink to={SectionId::Home} class="scroll-top-button">{"↑"}</AnchorLink>
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        background-color: var(--dark-color);
                        color: #fff;
                        padding: 60px 0 20px;
                    }

                    .footer-container {
                        width: 100%;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 20px;
                    }

                    .footer-content {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 40px;
                        margin-bottom: 40px;
                    }

                    .footer-column {
                        display: flex;
                        flex-direction: column;
                    }

                    .footer-logo {
                        font-size: 1.8rem;
                        font-weight: 700;
                        margin-bottom: 20px;
                    }

                    .footer-text {
                        color: rgba(255, 255, 255, 0.7);
                        margin-bottom: 20px;
                        line-height: 1.6;
                    }

                    .footer-title {
                        font-size: 1.2rem;
                        font-weight: 600;
                        margin-bottom: 20px;
                        position: relative;
                    }

                    .footer-title::after {
                        content: '';
                        position: absolute;
                        bottom: -8px;
                        left: 0;
                        width: 40px;
                        height: 2px;
                        background-color: var(--primary-color);
                    }

                    .footer-links {
                        list-style: none;
                    }

                    .footer-links li {
                        margin-bottom: 10px;
                    }

                    .footer-links a,
                    .footer-links span {
                        color: rgba(255, 255, 255, 0.7);
                        transition: var(--transition);
                        cursor: pointer;
                        display: inline-flex;
                        align-items: center;
                        gap: 8px;
                    }

                    .footer-links a:hover {
                        color: #fff;
                        transform: translateX(5px);
                    }

                    .footer-bottom {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        padding-top: 20px;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }

                    .footer-copyright {
                        color: rgba(255, 255, 255, 0.7);
                        font-size: 0.9rem;
                    }

                    .scroll-top-button {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 40px;
                        height: 40px;
                        background-color: var(--primary-color);
                        color: #fff;
                        border-radius: 50%;
                        cursor: pointer;
                        transition: var(--transition);
                    }

                    .scroll-top-button:hover {
                        background-color: var(--accent-color);
                        transform: translateY(-3px);
                    }

                    @media (max-width: 768px) {
                        .footer-content {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (max-width: 576px) {
                        .footer-content {
                            grid-template-columns: 1fr;
                        }

                        .footer-bottom {
                            flex-direction: column;
                            gap: 10px;
                            text-align: center;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
