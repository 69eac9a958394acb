use yew::prelude::*;

use crate::components::icon::Icon;
use crate::content::{SectionId, HERO_STATS};
use crate::scroll::{parallax, use_scroll_offset};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<SectionId>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let scroll_y = use_scroll_offset();
    let content_shift = parallax(scroll_y, (0.0, 500.0), (0.0, 200.0));
    let indicator_shift = parallax(scroll_y, (0.0, 500.0), (0.0, -100.0));

    let to_portfolio = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(SectionId::Portfolio))
    };
    let to_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(SectionId::Contact))
    };

    html! {
        <section id={SectionId::Hero.anchor()} class="hero">
            <div class="hero-backdrop">
                <div class="hero-shade"></div>
                <img
                    src="https://images.unsplash.com/photo-1486718448742-163732cd1544?w=1920&q=80"
                    alt="Architecture"
                />
            </div>
            <div class="hero-grid"></div>

            <div class="hero-content container">
                <div class="hero-copy" style={format!("transform: translateY({}px);", content_shift)}>
                    <div class="hero-kicker enter-left" style="animation-delay: 0.2s;">
                        <div class="hero-rule"></div>
                        <span>{"АРХИТЕКТУРНАЯ СТУДИЯ"}</span>
                    </div>
                    <h1 class="enter-up" style="animation-delay: 0.4s;">
                        {"СОЗДАЕМ"}
                        <br />
                        <span class="accent-gradient">{"БУДУЩЕЕ"}</span>
                    </h1>
                    <p class="enter-up" style="animation-delay: 0.6s;">
                        {"Проектируем пространства, в которых хочется жить и работать. От концепции до реализации."}
                    </p>
                    <div class="hero-actions enter-up" style="animation-delay: 0.8s;">
                        <button class="btn-primary accent-glow" onclick={to_portfolio}>
                            {"Смотреть проекты"}
                            <Icon name="ArrowRight" size={20} class={classes!("nudge-right")} />
                        </button>
                        <button class="btn-outline" onclick={to_contact}>
                            {"Обсудить проект"}
                        </button>
                    </div>
                </div>
            </div>

            <div class="scroll-indicator" style={format!("transform: translate(-50%, {}px);", indicator_shift)}>
                <span>{"СКРОЛЛ"}</span>
                <div class="scroll-line"></div>
            </div>

            <div class="hero-stats enter-right" style="animation-delay: 1s;">
                { for HERO_STATS.iter().map(|(value, caption)| html! {
                    <div class="hero-stat" key={*caption}>
                        <div class="hero-stat-value">{*value}</div>
                        <div class="hero-stat-caption">{*caption}</div>
                    </div>
                }) }
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: #020617;
                }
                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }
                .hero-backdrop img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: grayscale(100%);
                }
                .hero-shade {
                    position: absolute;
                    inset: 0;
                    z-index: 10;
                    background: linear-gradient(to bottom, rgba(2, 6, 23, 0.8), rgba(2, 6, 23, 0.6), #020617);
                }
                .hero-grid {
                    position: absolute;
                    inset: 0;
                    z-index: 5;
                    opacity: 0.1;
                    background-image:
                        linear-gradient(rgba(163, 230, 53, 0.3) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(163, 230, 53, 0.3) 1px, transparent 1px);
                    background-size: 50px 50px;
                }
                .hero-content {
                    position: relative;
                    z-index: 20;
                }
                .hero-copy {
                    max-width: 56rem;
                }
                .hero-kicker {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                    color: #a3e635;
                    font-family: 'Bebas Neue', sans-serif;
                    letter-spacing: 0.1em;
                    font-size: 1.125rem;
                }
                .hero-rule {
                    height: 1px;
                    width: 3rem;
                    background: #a3e635;
                }
                .hero h1 {
                    font-family: 'Bebas Neue', sans-serif;
                    font-size: clamp(3.75rem, 10vw, 8rem);
                    line-height: 1;
                    color: #ffffff;
                    margin: 0 0 2rem;
                }
                .hero p {
                    font-size: 1.25rem;
                    color: #94a3b8;
                    max-width: 42rem;
                    margin-bottom: 3rem;
                    line-height: 1.625;
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .scroll-indicator {
                    position: absolute;
                    bottom: 3rem;
                    left: 50%;
                    z-index: 20;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    color: #64748b;
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                    font-family: 'Bebas Neue', sans-serif;
                }
                .scroll-line {
                    width: 1px;
                    height: 3rem;
                    background: linear-gradient(to bottom, #a3e635, transparent);
                    animation: bob 1.5s infinite;
                }
                .hero-stats {
                    position: absolute;
                    bottom: 3rem;
                    right: 1.5rem;
                    z-index: 20;
                    display: flex;
                    gap: 2rem;
                }
                .hero-stat {
                    text-align: right;
                }
                .hero-stat-value {
                    font-family: 'Bebas Neue', sans-serif;
                    font-size: 1.875rem;
                    color: #a3e635;
                }
                .hero-stat-caption {
                    color: #64748b;
                    font-size: 0.875rem;
                }
                @keyframes bob {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(10px); }
                }
                @media (min-width: 1024px) {
                    .hero-stats { right: 3rem; gap: 3rem; }
                    .hero-stat-value { font-size: 3rem; }
                }
                "#}
            </style>
        </section>
    }
}
