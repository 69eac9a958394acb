use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::icon::Icon;
use crate::content::{SectionId, NAV_ENTRIES};

#[derive(Properties, PartialEq)]
pub struct MenuProps {
    pub active: SectionId,
    pub on_navigate: Callback<SectionId>,
}

/// Fixed rail on desktop, burger button plus full-screen overlay on mobile.
#[function_component(VerticalMenu)]
pub fn vertical_menu(props: &MenuProps) -> Html {
    let MenuProps { active, on_navigate } = props;
    let menu_open = use_bool_toggle(false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.toggle())
    };

    let rail_items = NAV_ENTRIES.iter().map(|entry| {
        let onclick = {
            let on_navigate = on_navigate.clone();
            let id = entry.id;
            Callback::from(move |_: MouseEvent| on_navigate.emit(id))
        };
        html! {
            <button
                key={entry.id.anchor()}
                onclick={onclick}
                class={classes!("rail-item", (*active == entry.id).then(|| "active"))}
            >
                <span class="rail-label vertical-text">{entry.label}</span>
                <span class="rail-hint">{entry.label}</span>
            </button>
        }
    });

    let overlay_items = NAV_ENTRIES.iter().enumerate().map(|(index, entry)| {
        let onclick = {
            let on_navigate = on_navigate.clone();
            let menu_open = menu_open.clone();
            let id = entry.id;
            Callback::from(move |_: MouseEvent| {
                on_navigate.emit(id);
                if *menu_open {
                    menu_open.toggle();
                }
            })
        };
        html! {
            <button
                key={entry.id.anchor()}
                onclick={onclick}
                class={classes!("overlay-item", (*active == entry.id).then(|| "active"))}
                style={format!("animation-delay: {}s;", index as f64 * 0.1)}
            >
                <span class="overlay-number">{entry.number}</span>
                {entry.label}
            </button>
        }
    });

    html! {
        <>
            <button class="menu-toggle" onclick={toggle_menu}>
                <Icon name={if *menu_open { "X" } else { "Menu" }} />
            </button>

            <nav class="side-rail">
                <div class="rail-logo"><span>{"A"}</span></div>
                <div class="rail-items">
                    { for rail_items }
                </div>
                <div class="rail-brand vertical-text">{"ARCHITECTURA"}</div>
            </nav>

            if *menu_open {
                <div class="menu-overlay">
                    <nav class="overlay-items">
                        { for overlay_items }
                    </nav>
                </div>
            }

            <style>
                {r#"
                .menu-toggle {
                    position: fixed;
                    top: 1.5rem;
                    right: 1.5rem;
                    z-index: 50;
                    width: 3rem;
                    height: 3rem;
                    border: none;
                    border-radius: 9999px;
                    background: #a3e635;
                    color: #020617;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 10px 15px rgba(163, 230, 53, 0.3);
                    cursor: pointer;
                }
                .side-rail {
                    position: fixed;
                    left: 0;
                    top: 0;
                    height: 100vh;
                    width: 6rem;
                    background: #020617;
                    border-right: 1px solid #0f172a;
                    z-index: 40;
                    display: none;
                    flex-direction: column;
                    align-items: center;
                    padding: 3rem 0;
                }
                .rail-logo {
                    width: 3rem;
                    height: 3rem;
                    margin-bottom: 3rem;
                    background: #a3e635;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #020617;
                    font-family: 'Bebas Neue', sans-serif;
                    font-weight: 900;
                    font-size: 1.25rem;
                }
                .rail-items {
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    gap: 2rem;
                }
                .rail-item {
                    position: relative;
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: none;
                    border-radius: 0.5rem;
                    background: transparent;
                    color: #64748b;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .rail-item:hover {
                    color: #a3e635;
                    background: #0f172a;
                }
                .rail-item.active {
                    background: #a3e635;
                    color: #020617;
                }
                .rail-label {
                    font-family: 'Bebas Neue', sans-serif;
                    font-size: 0.875rem;
                    letter-spacing: 0.05em;
                }
                .rail-hint {
                    position: absolute;
                    left: 100%;
                    margin-left: 0.5rem;
                    padding: 0.25rem 0.75rem;
                    background: #a3e635;
                    color: #020617;
                    font-size: 0.875rem;
                    border-radius: 0.25rem;
                    white-space: nowrap;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.2s;
                }
                .rail-item:hover .rail-hint {
                    opacity: 1;
                }
                .rail-brand {
                    color: #475569;
                    font-size: 0.75rem;
                    font-family: 'Bebas Neue', sans-serif;
                    letter-spacing: 0.1em;
                }
                .vertical-text {
                    writing-mode: vertical-rl;
                    transform: rotate(180deg);
                }
                .menu-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    background: #020617;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    animation: overlayIn 0.4s ease-out;
                }
                .overlay-items {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .overlay-item {
                    border: none;
                    background: none;
                    color: #ffffff;
                    font-family: 'Bebas Neue', sans-serif;
                    font-size: 2.25rem;
                    letter-spacing: 0.05em;
                    text-align: left;
                    cursor: pointer;
                    opacity: 0;
                    animation: overlayItemIn 0.4s ease-out forwards;
                }
                .overlay-item:hover,
                .overlay-item.active {
                    color: #a3e635;
                }
                .overlay-number {
                    color: #a3e635;
                    font-size: 1.125rem;
                    margin-right: 1rem;
                }
                @keyframes overlayIn {
                    from { opacity: 0; transform: translateX(100%); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes overlayItemIn {
                    from { opacity: 0; transform: translateX(50px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @media (min-width: 1024px) {
                    .menu-toggle { display: none; }
                    .side-rail { display: flex; }
                    .menu-overlay { display: none; }
                }
                "#}
            </style>
        </>
    }
}
