use log::debug;
use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::icon::Icon;
use crate::content::{SectionId, PROJECTS};
use crate::filter::{filter_projects, FilterSelection};

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let selection = use_state_eq(FilterSelection::default);
    let visible = filter_projects(PROJECTS, *selection);

    let tabs = FilterSelection::tabs().map(|tab| {
        let onclick = {
            let selection = selection.clone();
            Callback::from(move |_: MouseEvent| {
                debug!("Portfolio filter -> {}", tab.label());
                selection.set(tab);
            })
        };
        html! {
            <button
                key={tab.label()}
                onclick={onclick}
                class={classes!("filter-tab", (*selection == tab).then(|| "active"))}
            >
                {tab.label()}
            </button>
        }
    });

    let cards = visible.into_iter().enumerate().map(|(index, project)| html! {
        <div
            key={project.id.to_string()}
            class="project-card"
            style={format!("animation-delay: {}s;", index as f64 * 0.1)}
        >
            <img src={project.image} alt={project.title} />
            <div class="project-shade"></div>
            <div class="project-body">
                <div class="project-slide">
                    <span class="project-category">{project.category}</span>
                    <h3>{project.title}</h3>
                    <p>{project.description}</p>
                    <div class="project-meta">
                        <span>{project.year.to_string()}</span>
                        <button class="project-open accent-glow">
                            <Icon name="ArrowUpRight" size={20} />
                        </button>
                    </div>
                </div>
            </div>
            <div class="project-frame"></div>
        </div>
    });

    html! {
        <section id={SectionId::Portfolio.anchor()} class="portfolio page-section">
            <div class="portfolio-glow"></div>
            <div class="container">
                <AnimatedSection>
                    <div class="section-head">
                        <div>
                            <span class="section-kicker">{"ПОРТФОЛИО"}</span>
                            <h2>{"НАШИ "}<span class="accent">{"ПРОЕКТЫ"}</span></h2>
                        </div>
                        <div class="filter-tabs">
                            { for tabs }
                        </div>
                    </div>
                </AnimatedSection>

                <div class="project-grid">
                    { for cards }
                </div>

                <AnimatedSection delay={0.4} class={classes!("portfolio-more")}>
                    <button class="btn-ghost">
                        {"Все проекты"}
                        <Icon name="ArrowRight" size={20} class={classes!("nudge-right")} />
                    </button>
                </AnimatedSection>
            </div>

            <style>
                {r#"
                .portfolio {
                    background: #020617;
                    position: relative;
                    overflow: hidden;
                }
                .portfolio-glow {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 24rem;
                    height: 24rem;
                    background: rgba(163, 230, 53, 0.05);
                    border-radius: 9999px;
                    filter: blur(64px);
                }
                .filter-tabs {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .filter-tab {
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    background: transparent;
                    color: #94a3b8;
                    border: 1px solid #1e293b;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .filter-tab:hover {
                    border-color: #a3e635;
                    color: #a3e635;
                }
                .filter-tab.active {
                    background: #a3e635;
                    color: #020617;
                    border-color: #a3e635;
                }
                .project-grid {
                    display: grid;
                    gap: 1.5rem;
                }
                .project-card {
                    position: relative;
                    aspect-ratio: 4 / 5;
                    overflow: hidden;
                    background: #0f172a;
                    cursor: pointer;
                    opacity: 0;
                    animation: cardIn 0.4s ease-out forwards;
                }
                .project-card img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: grayscale(100%);
                    transition: all 0.7s;
                }
                .project-card:hover img {
                    filter: grayscale(0);
                    transform: scale(1.1);
                }
                .project-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #020617, rgba(2, 6, 23, 0.5), transparent);
                    opacity: 0.8;
                    transition: opacity 0.3s;
                }
                .project-card:hover .project-shade {
                    opacity: 0.9;
                }
                .project-body {
                    position: absolute;
                    inset: 0;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                }
                .project-slide {
                    transform: translateY(1rem);
                    transition: transform 0.5s;
                }
                .project-card:hover .project-slide {
                    transform: translateY(0);
                }
                .project-category {
                    display: block;
                    color: #a3e635;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }
                .project-card h3 {
                    font-family: 'Bebas Neue', sans-serif;
                    font-size: 1.875rem;
                    color: #ffffff;
                    margin: 0 0 0.5rem;
                }
                .project-card p {
                    color: #94a3b8;
                    font-size: 0.875rem;
                    margin-bottom: 1rem;
                    opacity: 0;
                    transition: opacity 0.5s 0.1s;
                }
                .project-card:hover p {
                    opacity: 1;
                }
                .project-meta {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    color: #64748b;
                    font-size: 0.875rem;
                }
                .project-open {
                    width: 2.5rem;
                    height: 2.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: #a3e635;
                    color: #020617;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    opacity: 0;
                    transition: all 0.5s;
                }
                .project-card:hover .project-open {
                    opacity: 1;
                }
                .project-frame {
                    position: absolute;
                    inset: 0;
                    border: 1px solid #1e293b;
                    pointer-events: none;
                    transition: border-color 0.5s;
                }
                .project-card:hover .project-frame {
                    border-color: rgba(163, 230, 53, 0.5);
                }
                .portfolio-more {
                    margin-top: 4rem;
                    text-align: center;
                }
                @keyframes cardIn {
                    from { opacity: 0; transform: scale(0.9); }
                    to { opacity: 1; transform: scale(1); }
                }
                @media (min-width: 768px) {
                    .project-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .project-grid { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
