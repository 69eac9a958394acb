use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::icon::Icon;
use crate::content::{SectionId, ARTICLES};

#[function_component(Blog)]
pub fn blog() -> Html {
    html! {
        <section id={SectionId::Blog.anchor()} class="blog page-section">
            <div class="container">
                <AnimatedSection>
                    <div class="section-head">
                        <div>
                            <span class="section-kicker">{"БЛОГ"}</span>
                            <h2>{"ИДЕИ И "}<span class="accent">{"ИНСАЙТЫ"}</span></h2>
                        </div>
                        <button class="link-button">
                            {"Все статьи"}
                            <Icon name="ArrowRight" size={20} class={classes!("nudge-right")} />
                        </button>
                    </div>
                </AnimatedSection>

                <div class="article-grid">
                    { for ARTICLES.iter().enumerate().map(|(index, article)| html! {
                        <AnimatedSection key={article.id.to_string()} delay={index as f64 * 0.1}>
                            <article class="article-card">
                                <div class="article-cover">
                                    <img src={article.image} alt={article.title} />
                                    <span class="article-tag">{article.category}</span>
                                </div>
                                <div class="article-date">
                                    <Icon name="Calendar" size={14} />
                                    {article.display_date()}
                                </div>
                                <h3>{article.title}</h3>
                                <p>{article.excerpt}</p>
                                <span class="article-more">
                                    {"Читать далее"}
                                    <Icon name="ArrowRight" size={16} />
                                </span>
                            </article>
                        </AnimatedSection>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .blog {
                    background: #020617;
                }
                .link-button {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: none;
                    border: none;
                    color: #a3e635;
                    font-weight: 500;
                    cursor: pointer;
                    transition: color 0.3s;
                }
                .link-button:hover {
                    color: #bef264;
                }
                .article-grid {
                    display: grid;
                    gap: 2rem;
                }
                .article-card {
                    cursor: pointer;
                }
                .article-cover {
                    position: relative;
                    aspect-ratio: 16 / 10;
                    overflow: hidden;
                    margin-bottom: 1.5rem;
                }
                .article-cover img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: grayscale(100%);
                    transition: all 0.5s;
                }
                .article-card:hover .article-cover img {
                    filter: grayscale(0);
                    transform: scale(1.05);
                }
                .article-tag {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    background: #a3e635;
                    color: #020617;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .article-date {
                    display: flex;
                    align-items: center;
                    gap: 0.25rem;
                    color: #64748b;
                    font-size: 0.875rem;
                    margin-bottom: 0.75rem;
                }
                .article-card h3 {
                    font-family: 'Bebas Neue', sans-serif;
                    font-size: 1.5rem;
                    color: #ffffff;
                    margin: 0 0 0.75rem;
                    transition: color 0.3s;
                }
                .article-card:hover h3 {
                    color: #a3e635;
                }
                .article-card p {
                    color: #94a3b8;
                    font-size: 0.875rem;
                    line-height: 1.625;
                    margin-bottom: 1rem;
                }
                .article-more {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #a3e635;
                    font-size: 0.875rem;
                    font-weight: 500;
                    opacity: 0;
                    transition: all 0.3s;
                }
                .article-card:hover .article-more {
                    opacity: 1;
                    transform: translateX(0.5rem);
                }
                @media (min-width: 768px) {
                    .article-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .article-grid { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
