use yew::prelude::*;

use crate::navigation::sections::SectionId;

/// One icon / title / description entry of a fixed content list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Highlight; 6] = [
    Highlight {
        icon: "💻",
        title: "Interactive Learning Platform",
        description: "Providing an immersive learning environment that enhances the learning experience through multimedia content, quizzes, and interactive exercises, encouraging active student participation.",
    },
    Highlight {
        icon: "📱",
        title: "Mobile Learning Support",
        description: "Accessible on any device, allowing students to learn anytime, anywhere, while teachers can answer questions and provide feedback on the go.",
    },
    Highlight {
        icon: "📈",
        title: "Data-Driven Teaching",
        description: "Through detailed learning analytics and reports, helping teachers understand student performance, identify areas for improvement, and adjust teaching methods accordingly.",
    },
    Highlight {
        icon: "🎓",
        title: "Personalized Learning Paths",
        description: "Tailoring learning materials and assignments to each student's abilities, progress, and learning style to ensure optimal learning outcomes.",
    },
    Highlight {
        icon: "📋",
        title: "Intelligent Assessment System",
        description: "Auto-graded exercises and tests with immediate feedback help students understand mistakes while saving teachers valuable time for more meaningful teaching activities.",
    },
    Highlight {
        icon: "🛠️",
        title: "Comprehensive Management Tools",
        description: "Simplifying administrative tasks such as student registration, course scheduling, and grade tracking, enabling schools to operate more efficiently with reduced administrative burden.",
    },
];

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id={SectionId::Features.as_str()} class="features-section">
            <div class="features-container">
                <h2 class="section-title">{"Platform Features"}</h2>
                <p class="section-subtitle">
                    {"Talko provides a comprehensive suite of features to help language education institutions achieve excellence in teaching"}
                </p>
                <div class="features-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card" key={feature.title}>
                            <div class="feature-card-icon">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .features-section {
                        padding: 100px 0;
                        background-color: var(--light-color);
                    }

                    .features-container {
                        width: 100%;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 20px;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }

                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 30px;
                        width: 100%;
                    }

                    .feature-card {
                        background-color: #fff;
                        border-radius: 10px;
                        padding: 30px;
                        box-shadow: 0 5px 15px rgba(0, 0, 0, 0.05);
                        transition: var(--transition);
                        display: flex;
                        flex-direction: column;
                    }

                    .feature-card:hover {
                        transform: translateY(-10px);
                        box-shadow: 0 15px 30px rgba(0, 0, 0, 0.1);
                    }

                    .feature-card-icon {
                        width: 70px;
                        height: 70px;
                        background-color: rgba(74, 109, 255, 0.1);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 10px;
                        margin-bottom: 20px;
                        font-size: 2rem;
                    }

                    .feature-card h3 {
                        font-size: 1.3rem;
                        font-weight: 600;
                        margin-bottom: 15px;
                        color: var(--dark-color);
                    }

                    .feature-card p {
                        color: var(--secondary-color);
                        line-height: 1.6;
                        flex-grow: 1;
                    }

                    @media (max-width: 992px) {
                        .features-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (max-width: 576px) {
                        .features-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_grid_keys_are_unique() {
        let mut titles: Vec<_> = FEATURES.iter().map(|feature| feature.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), FEATURES.len());
    }
}
