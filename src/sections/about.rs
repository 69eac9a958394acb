use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::icon::Icon;
use crate::content::{SectionId, STUDIO_VALUES};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={SectionId::About.anchor()} class="about page-section">
            <div class="container about-layout">
                <AnimatedSection>
                    <div class="about-visual">
                        <div class="about-photo">
                            <img
                                src="https://images.unsplash.com/photo-1497366216548-37526070297c?w=800&q=80"
                                alt="Office"
                            />
                            <div class="about-tint"></div>
                        </div>
                        <AnimatedSection delay={0.3} class={classes!("about-badge")}>
                            <div class="about-badge-value">{"12"}</div>
                            <div class="about-badge-caption">{"Лет на рынке"}</div>
                        </AnimatedSection>
                        <div class="about-outline"></div>
                    </div>
                </AnimatedSection>

                <div>
                    <AnimatedSection delay={0.2}>
                        <span class="section-kicker">{"О КОМПАНИИ"}</span>
                        <h2>{"МЫ СОЗДАЕМ "}<span class="accent">{"ПРОСТРАНСТВА"}</span></h2>
                    </AnimatedSection>

                    <AnimatedSection delay={0.3}>
                        <p class="about-text">
                            {"Architectura — это команда архитекторов, дизайнеров и инженеров, \
                              объединенных общей идеей создания уникальных пространств. \
                              Мы верим, что архитектура способна менять жизни людей к лучшему."}
                        </p>
                        <p class="about-text about-text-last">
                            {"Наш подход сочетает функциональность, эстетику и устойчивое развитие. \
                              Каждый проект — это результат глубокого анализа, творческого поиска \
                              и внимания к деталям."}
                        </p>
                    </AnimatedSection>

                    <div class="values-grid">
                        { for STUDIO_VALUES.iter().enumerate().map(|(index, value)| html! {
                            <AnimatedSection key={value.title} delay={0.4 + index as f64 * 0.1}>
                                <div class="value-card">
                                    <Icon name={value.icon} class={classes!("value-icon")} />
                                    <h4>{value.title}</h4>
                                    <p>{value.description}</p>
                                </div>
                            </AnimatedSection>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .about {
                    background: #0f172a;
                    position: relative;
                }
                .about-layout {
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }
                .about-visual {
                    position: relative;
                }
                .about-photo {
                    aspect-ratio: 3 / 4;
                    position: relative;
                    overflow: hidden;
                }
                .about-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: grayscale(100%);
                }
                .about-tint {
                    position: absolute;
                    inset: 0;
                    background: rgba(163, 230, 53, 0.1);
                    mix-blend-mode: multiply;
                }
                .about-badge {
                    position: absolute;
                    bottom: -1.5rem;
                    right: -1.5rem;
                    background: #a3e635;
                    color: #020617;
                    padding: 1.5rem;
                }
                .about-badge-value {
                    font-family: 'Bebas Neue', sans-serif;
                    font-size: 2.25rem;
                    font-weight: 900;
                }
                .about-badge-caption {
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .about-outline {
                    position: absolute;
                    top: -1rem;
                    left: -1rem;
                    width: 100%;
                    height: 100%;
                    border: 1px solid rgba(163, 230, 53, 0.3);
                    z-index: -10;
                }
                .about-text {
                    color: #94a3b8;
                    font-size: 1.125rem;
                    line-height: 1.625;
                    margin-bottom: 2rem;
                }
                .about-text-last {
                    margin-bottom: 3rem;
                }
                .values-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                }
                .value-card {
                    padding: 1rem;
                    border: 1px solid #1e293b;
                    background: rgba(2, 6, 23, 0.5);
                    transition: border-color 0.3s;
                }
                .value-card:hover {
                    border-color: rgba(163, 230, 53, 0.5);
                }
                .value-icon {
                    color: #a3e635;
                    margin-bottom: 0.75rem;
                    transition: transform 0.3s;
                }
                .value-card:hover .value-icon {
                    transform: scale(1.1);
                }
                .value-card h4 {
                    color: #ffffff;
                    font-family: 'Bebas Neue', sans-serif;
                    font-size: 1.25rem;
                    margin: 0 0 0.25rem;
                }
                .value-card p {
                    color: #64748b;
                    font-size: 0.875rem;
                    margin: 0;
                }
                @media (min-width: 1024px) {
                    .about-layout {
                        grid-template-columns: repeat(2, 1fr);
                        gap: 6rem;
                    }
                    .about-badge { padding: 2rem; }
                    .about-badge-value { font-size: 3.75rem; }
                }
                "#}
            </style>
        </section>
    }
}
