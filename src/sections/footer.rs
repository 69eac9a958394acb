use yew::prelude::*;

use crate::components::icon::Icon;
use crate::scroll::{scroll_to_top, BrowserViewport};

#[function_component(Footer)]
pub fn footer() -> Html {
    let back_to_top = Callback::from(|_: MouseEvent| {
        if let Some(viewport) = BrowserViewport::new() {
            scroll_to_top(&viewport);
        }
    });

    html! {
        <footer class="site-footer">
            <div class="container footer-row">
                <div class="footer-brand">
                    <div class="footer-logo"><span>{"A"}</span></div>
                    <span class="footer-name">{"ARCHITECTURA"}</span>
                </div>
                <div class="footer-copy">{"© 2024 Architectura. Все права защищены."}</div>
                <button class="footer-top" onclick={back_to_top}>
                    {"Наверх"}
                    <Icon name="ArrowUp" size={16} />
                </button>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #020617;
                    padding: 3rem 0;
                    border-top: 1px solid #0f172a;
                }
                .footer-row {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1.5rem;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .footer-logo {
                    width: 2.5rem;
                    height: 2.5rem;
                    background: #a3e635;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #020617;
                    font-weight: 900;
                    font-size: 1.125rem;
                    font-family: 'Bebas Neue', sans-serif;
                }
                .footer-name {
                    font-family: 'Bebas Neue', sans-serif;
                    font-size: 1.5rem;
                    color: #ffffff;
                    letter-spacing: 0.05em;
                }
                .footer-copy {
                    color: #475569;
                    font-size: 0.875rem;
                }
                .footer-top {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: none;
                    border: none;
                    color: #64748b;
                    cursor: pointer;
                    transition: color 0.3s;
                }
                .footer-top:hover {
                    color: #a3e635;
                }
                .footer-top:hover .icon {
                    transform: translateY(-0.25rem);
                }
                @media (min-width: 768px) {
                    .footer-row { flex-direction: row; }
                }
                "#}
            </style>
        </footer>
    }
}
