use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::config;
use crate::navigation::sections::SectionId;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id={SectionId::Home.as_str()} class="hero-section">
            <div class="hero-container">
                <div class="hero-content">
                    <h1 class="hero-title">
                        {"Changing the Future of Education "}
                        <span>{config::BRAND}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Talko is an innovative educational technology platform designed specifically for language schools and colleges, helping you enhance teaching quality, streamline administrative processes, and boost student engagement."}
                    </p>
                    <div class="hero-button-wrapper">
                        <AnchorLink to={SectionId::Contact} class="hero-button">
                            {"Get Started"}
                        </AnchorLink>
                    </div>
                </div>
                <div class="hero-image">
                    <img src="/hero-image.svg" alt="Talko - EdTech Platform" />
                </div>
            </div>
            <style>
                {r#"
                    .hero-section {
                        min-height: 60vh;
                        display: flex;
                        align-items: center;
                        background: linear-gradient(135deg, #f5f7fa 0%, #c3cfe2 100%);
                        position: relative;
                        padding-top: 70px;
                        padding-bottom: 50px;
                    }

                    .hero-section::before {
                        content: '';
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        background: url('/hero-pattern.svg');
                        opacity: 0.1;
                        z-index: 1;
                    }

                    .hero-container {
                        width: 100%;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 20px;
                        position: relative;
                        z-index: 2;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }

                    .hero-content {
                        max-width: 600px;
                    }

                    .hero-title {
                        font-size: 3.5rem;
                        font-weight: 700;
                        color: var(--dark-color);
                        margin-bottom: 1rem;
                        line-height: 1.2;
                    }

                    .hero-title span {
                        color: var(--primary-color);
                    }

                    .hero-subtitle {
                        font-size: 1.2rem;
                        color: var(--secondary-color);
                        margin-bottom: 2rem;
                        line-height: 1.6;
                    }

                    .hero-button {
                        display: inline-block;
                        padding: 12px 30px;
                        background-color: var(--primary-color);
                        color: white;
                        border-radius: 5px;
                        font-weight: 500;
                        transition: var(--transition);
                        cursor: pointer;
                        margin-bottom: 20px;
                    }

                    .hero-button:hover {
                        background-color: var(--accent-color);
                        transform: translateY(-3px);
                        box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1);
                    }

                    .hero-image {
                        width: 100%;
                        max-width: 500px;
                    }

                    .hero-image img {
                        width: 100%;
                        height: auto;
                        animation: float 3s ease-in-out infinite;
                    }

                    @keyframes float {
                        0% { transform: translateY(0px); }
                        50% { transform: translateY(-20px); }
                        100% { transform: translateY(0px); }
                    }

                    @media (max-width: 992px) {
                        .hero-container {
                            flex-direction: column;
                            gap: 40px;
                        }

                        .hero-content {
                            max-width: 100%;
                            margin-top: 30px;
                        }

                        .hero-image {
                            max-width: 80%;
                        }
                    }

                    @media (max-width: 768px) {
                        .hero-section {
                            padding-top: 100px;
                            padding-bottom: 70px;
                        }

                        .hero-title {
                            font-size: 2.5rem;
                        }

                        .hero-button-wrapper {
                            display: flex;
                            justify-content: center;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
