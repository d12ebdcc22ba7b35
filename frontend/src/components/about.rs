use yew::prelude::*;

use crate::components::features::Highlight;
use crate::navigation::sections::SectionId;

const VALUES: [Highlight; 3] = [
    Highlight {
        icon: "🚀",
        title: "Innovation Driven",
        description: "We constantly explore the frontiers of educational technology",
    },
    Highlight {
        icon: "👩‍🏫",
        title: "Education Centered",
        description: "All features are designed around educational outcomes",
    },
    Highlight {
        icon: "🌍",
        title: "Global Perspective",
        description: "Supporting multilingual teaching and international needs",
    },
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={SectionId::About.as_str()} class="about-section">
            <div class="about-container">
                <h2 class="section-title underlined">{"About Talko"}</h2>
                <p class="section-subtitle">
                    {"We are innovators in the field of educational technology, dedicated to providing the most advanced teaching solutions for language schools and colleges"}
                </p>

                <div class="about-content">
                    <div class="about-image">
                        <img src="/school.webp" alt="About Talko" loading="lazy" />
                    </div>
                    <div class="about-text">
                        <p class="about-description">
                            {"Talko is a comprehensive educational technology Platform-as-a-Service (PaaS) solution designed specifically for language education institutions. Our platform combines advanced technology with pedagogical principles to create a seamless learning experience for teachers and students."}
                        </p>
                        <p class="about-description">
                            {"Our mission is to empower education through technology, helping language schools improve teaching efficiency, enhance student engagement, and simplify management processes. The core value of the Talko platform lies in providing educators with the tools they need to focus on what matters most: teaching."}
                        </p>
                        <div class="about-values">
                            { for VALUES.iter().map(|value| html! {
                                <div class="value-item" key={value.title}>
                                    <div class="value-icon">{value.icon}</div>
                                    <div class="value-text">
                                        <h3>{value.title}</h3>
                                        <p>{value.description}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .about-section {
                        padding: 100px 0;
                        background-color: #fff;
                    }

                    .about-container {
                        width: 100%;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 20px;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }

                    .about-content {
                        display: flex;
                        align-items: center;
                        gap: 50px;
                    }

                    .about-image {
                        flex: 1;
                        max-width: 500px;
                    }

                    .about-image img {
                        width: 100%;
                        height: auto;
                    }

                    .about-text {
                        flex: 1;
                    }

                    .about-description {
                        font-size: 1.1rem;
                        line-height: 1.8;
                        color: var(--secondary-color);
                        margin-bottom: 2rem;
                    }

                    .about-values {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 20px;
                    }

                    .value-item {
                        display: flex;
                        align-items: flex-start;
                        gap: 15px;
                    }

                    .value-icon {
                        width: 50px;
                        height: 50px;
                        flex-shrink: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background-color: rgba(74, 109, 255, 0.1);
                        border-radius: 50%;
                        font-size: 1.5rem;
                    }

                    .value-text h3 {
                        font-size: 1.2rem;
                        font-weight: 600;
                        margin-bottom: 5px;
                        color: var(--dark-color);
                    }

                    .value-text p {
                        font-size: 0.9rem;
                        color: var(--secondary-color);
                    }

                    @media (max-width: 992px) {
                        .about-content {
                            flex-direction: column;
                        }

                        .about-image {
                            max-width: 80%;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
