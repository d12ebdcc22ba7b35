use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::navigation::sections::SectionId;

#[function_component(Cta)]
pub fn cta() -> Html {
    html! {
        <section class="cta-section">
            <div class="cta-container">
                <h2>{"Ready to Transform Your Educational Experience?"}</h2>
                <p>
                    {"Join Talko to provide your language school or college with a modern educational technology platform. Our solutions will help you improve teaching efficiency, enhance student engagement, and streamline management processes."}
                </p>
                <AnchorLink to={SectionId::Contact} class="cta-button">
                    {"Contact Us Now"}
                </AnchorLink>
            </div>
            <style>
                {r#"
                    .cta-section {
                        padding: 80px 0;
                        background: linear-gradient(135deg, var(--primary-color) 0%, var(--accent-color) 100%);
                        color: #fff;
                        text-align: center;
                    }

                    .cta-container {
                        width: 100%;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 20px;
                    }

                    .cta-container h2 {
                        font-size: 2.5rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }

                    .cta-container p {
                        font-size: 1.2rem;
                        max-width: 700px;
                        margin: 0 auto 2.5rem;
                        opacity: 0.9;
                    }

                    .cta-button {
                        display: inline-block;
                        padding: 15px 40px;
                        background-color: #fff;
                        color: var(--primary-color);
                        border-radius: 5px;
                        font-weight: 600;
                        font-size: 1.1rem;
                        transition: var(--transition);
                        cursor: pointer;
                        box-shadow: 0 5px 15px rgba(0, 0, 0, 0.1);
                    }

                    .cta-button:hover {
                        transform: translateY(-5px);
                        box-shadow: 0 10px 20px rgba(0, 0, 0, 0.2);
                    }

                    @media (max-width: 768px) {
                        .cta-container h2 {
                            font-size: 2rem;
                        }

                        .cta-button {
                            padding: 12px 30px;
                            font-size: 1rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
