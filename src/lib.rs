use log::info;
use yew::prelude::*;

pub mod components;
pub mod config;
pub mod contact;
pub mod content;
pub mod filter;
pub mod scroll;
pub mod sections;
pub mod visibility;

use components::menu::VerticalMenu;
use content::{SectionId, NAV_ENTRIES};
use scroll::use_active_section;
use sections::{
    about::About, blog::Blog, contact::Contact, footer::Footer, hero::Hero, portfolio::Portfolio,
};

#[function_component(App)]
pub fn app() -> Html {
    let active = use_active_section(NAV_ENTRIES);

    let on_navigate = Callback::from(|section: SectionId| {
        info!("Navigating to {}", section.anchor());
        scroll::navigate(section);
    });

    html! {
        <div class="site">
            <VerticalMenu active={active} on_navigate={on_navigate.clone()} />
            <main>
                <Hero on_navigate={on_navigate} />
                <Portfolio />
                <About />
                <Blog />
                <Contact />
            </main>
            <Footer />
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #020617;
                    font-family: 'Inter', sans-serif;
                }
                .site {
                    min-height: 100vh;
                    background: #020617;
                    color: #ffffff;
                }
                .container {
                    width: 100%;
                    box-sizing: border-box;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .page-section {
                    padding: 6rem 0;
                }
                .section-head {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    margin-bottom: 4rem;
                }
                .section-kicker {
                    display: block;
                    color: #a3e635;
                    font-family: 'Bebas Neue', sans-serif;
                    letter-spacing: 0.1em;
                    font-size: 1.125rem;
                    margin-bottom: 1rem;
                }
                .page-section h2 {
                    font-family: 'Bebas Neue', sans-serif;
                    font-size: 3rem;
                    color: #ffffff;
                    margin: 0 0 2rem;
                    line-height: 1;
                }
                .section-head h2 {
                    margin-bottom: 0;
                }
                .accent {
                    color: #a3e635;
                }
                .accent-gradient {
                    background: linear-gradient(to right, #a3e635, #bef264);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .accent-glow {
                    box-shadow: 0 0 30px rgba(163, 230, 53, 0.3);
                }
                .btn-primary,
                .btn-outline,
                .btn-ghost {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem 2rem;
                    font-weight: 700;
                    font-size: 1.125rem;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .btn-primary {
                    border: none;
                    background: #a3e635;
                    color: #020617;
                }
                .btn-primary:hover {
                    background: #bef264;
                    transform: scale(1.05);
                }
                .btn-outline {
                    background: transparent;
                    border: 2px solid rgba(255, 255, 255, 0.2);
                    color: #ffffff;
                }
                .btn-outline:hover {
                    border-color: #a3e635;
                    color: #a3e635;
                }
                .btn-ghost {
                    background: transparent;
                    border: 2px solid #a3e635;
                    color: #a3e635;
                }
                .btn-ghost:hover {
                    background: #a3e635;
                    color: #020617;
                }
                .icon {
                    transition: transform 0.3s;
                }
                button:hover .nudge-right {
                    transform: translateX(0.25rem);
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(50px);
                    transition-property: opacity, transform;
                    transition-duration: 0.8s;
                    transition-timing-function: cubic-bezier(0.22, 1, 0.36, 1);
                }
                .reveal.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
                .enter-up,
                .enter-left,
                .enter-right {
                    opacity: 0;
                    animation-duration: 0.8s;
                    animation-fill-mode: forwards;
                }
                .enter-up { animation-name: enterUp; }
                .enter-left { animation-name: enterLeft; }
                .enter-right { animation-name: enterRight; }
                @keyframes enterUp {
                    from { opacity: 0; transform: translateY(40px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes enterLeft {
                    from { opacity: 0; transform: translateX(-50px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes enterRight {
                    from { opacity: 0; transform: translateX(50px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @media (min-width: 1024px) {
                    .container { padding: 0 3rem; }
                    .page-section { padding: 8rem 0; }
                    .page-section h2 { font-size: 4.5rem; }
                    .section-head {
                        flex-direction: row;
                        align-items: flex-end;
                        justify-content: space-between;
                    }
                    main, .site-footer { padding-left: 6rem; }
                }
                "#}
            </style>
        </div>
    }
}
