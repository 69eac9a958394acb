use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::icon::Icon;
use crate::config;
use crate::contact::{self, ContactSession, Field, SubmissionState, SubmitError, Web3FormsRelay};
use crate::content::{SectionId, CONTACT_DETAILS, SOCIAL_LINKS};

pub enum ContactMsg {
    Edit(Field, String),
    Submit(SubmitEvent),
    Finished(Result<(), SubmitError>),
    Reset,
}

pub struct Contact {
    session: ContactSession,
    relay: Web3FormsRelay,
}

impl Component for Contact {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: ContactSession::default(),
            relay: Web3FormsRelay::new(config::RELAY_ENDPOINT),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Edit(field, value) => {
                self.session.form.set(field, value);
                true
            }
            ContactMsg::Submit(event) => {
                event.prevent_default();
                let Some(form) = self.session.begin() else {
                    return false;
                };
                let relay = self.relay.clone();
                ctx.link().send_future(async move {
                    ContactMsg::Finished(contact::submit(&relay, &form, config::access_key()).await)
                });
                true
            }
            ContactMsg::Finished(outcome) => {
                self.session.finish(outcome);
                true
            }
            ContactMsg::Reset => {
                self.session.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let panel = if self.session.state == SubmissionState::Success {
            self.success_panel(ctx)
        } else {
            self.form(ctx)
        };

        html! {
            <section id={SectionId::Contact.anchor()} class="contact page-section">
                <div class="contact-rule"></div>
                <div class="container contact-layout">
                    <div>
                        <AnimatedSection>
                            <span class="section-kicker">{"КОНТАКТЫ"}</span>
                            <h2>
                                {"ДАВАЙТЕ "}<span class="accent">{"ОБСУДИМ"}</span>
                                <br />{"ВАШ ПРОЕКТ"}
                            </h2>
                            <p class="contact-intro">
                                {"Готовы начать работу над вашим проектом? \
                                  Свяжитесь с нами любым удобным способом или заполните форму."}
                            </p>
                        </AnimatedSection>

                        <div class="contact-details">
                            { for CONTACT_DETAILS.iter().enumerate().map(|(index, detail)| html! {
                                <AnimatedSection key={detail.label} delay={0.1 + index as f64 * 0.1}>
                                    <div class="contact-detail">
                                        <div class="contact-detail-icon">
                                            <Icon name={detail.icon} size={20} />
                                        </div>
                                        <div>
                                            <div class="contact-detail-label">{detail.label}</div>
                                            <div class="contact-detail-value">{detail.value}</div>
                                        </div>
                                    </div>
                                </AnimatedSection>
                            }) }
                        </div>

                        <AnimatedSection delay={0.5} class={classes!("contact-social")}>
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <button key={*social} class="social-button" title={*social}>
                                    <Icon name={*social} size={20} />
                                </button>
                            }) }
                        </AnimatedSection>
                    </div>

                    <AnimatedSection delay={0.3}>
                        <div class="form-card">
                            <div class="corner corner-tl"></div>
                            <div class="corner corner-tr"></div>
                            <div class="corner corner-bl"></div>
                            <div class="corner corner-br"></div>
                            { panel }
                        </div>
                    </AnimatedSection>
                </div>

                <style>{CONTACT_CSS}</style>
            </section>
        }
    }
}

impl Contact {
    fn form(&self, ctx: &Context<Self>) -> Html {
        let form = &self.session.form;
        let state = &self.session.state;

        let edit_input = |field: Field| {
            ctx.link().callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                ContactMsg::Edit(field, input.value())
            })
        };
        let edit_message = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::Edit(Field::Message, input.value())
        });

        html! {
            <form class="contact-form" onsubmit={ctx.link().callback(ContactMsg::Submit)}>
                <div class="form-row">
                    <div>
                        <label>{"Имя"}</label>
                        <input
                            type="text"
                            name="name"
                            required=true
                            placeholder="Ваше имя"
                            value={form.name.clone()}
                            oninput={edit_input(Field::Name)}
                        />
                    </div>
                    <div>
                        <label>{"Телефон"}</label>
                        <input
                            type="tel"
                            name="phone"
                            placeholder="+7 (___) ___-__-__"
                            value={form.phone.clone()}
                            oninput={edit_input(Field::Phone)}
                        />
                    </div>
                </div>

                <div>
                    <label>{"Email"}</label>
                    <input
                        type="email"
                        name="email"
                        required=true
                        placeholder="your@email.com"
                        value={form.email.clone()}
                        oninput={edit_input(Field::Email)}
                    />
                </div>

                <div>
                    <label>{"Сообщение"}</label>
                    <textarea
                        name="message"
                        rows="4"
                        required=true
                        placeholder="Расскажите о вашем проекте..."
                        value={form.message.clone()}
                        oninput={edit_message}
                    />
                </div>

                if let Some(message) = state.error_message() {
                    <div class="form-error">
                        <Icon name="AlertCircle" size={16} />
                        {message.to_string()}
                    </div>
                }

                <button type="submit" class="btn-submit accent-glow" disabled={state.is_submitting()}>
                    if state.is_submitting() {
                        <div class="spinner"></div>
                        {"Отправка..."}
                    } else {
                        <Icon name="Send" size={20} />
                        {"Отправить сообщение"}
                    }
                </button>
            </form>
        }
    }

    fn success_panel(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="form-success">
                <div class="form-success-badge">
                    <Icon name="CheckCircle" size={40} />
                </div>
                <h3>{"Сообщение отправлено!"}</h3>
                <p>{"Спасибо за обращение. Мы свяжемся с вами в ближайшее время."}</p>
                <button class="link-button" onclick={ctx.link().callback(|_| ContactMsg::Reset)}>
                    {"Отправить еще сообщение"}
                </button>
            </div>
        }
    }
}

const CONTACT_CSS: &str = r#"
.contact {
    background: #0f172a;
    position: relative;
    overflow: hidden;
}
.contact-rule {
    position: absolute;
    bottom: 0;
    left: 0;
    width: 100%;
    height: 1px;
    background: linear-gradient(to right, transparent, rgba(163, 230, 53, 0.5), transparent);
}
.contact-layout {
    display: grid;
    gap: 4rem;
}
.contact-intro {
    color: #94a3b8;
    font-size: 1.125rem;
    line-height: 1.625;
    margin-bottom: 3rem;
    max-width: 32rem;
}
.contact-details {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}
.contact-detail {
    display: flex;
    align-items: flex-start;
    gap: 1rem;
}
.contact-detail-icon {
    width: 3rem;
    height: 3rem;
    flex-shrink: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: #020617;
    border: 1px solid #1e293b;
    color: #a3e635;
    transition: border-color 0.3s;
}
.contact-detail:hover .contact-detail-icon {
    border-color: #a3e635;
}
.contact-detail-label {
    color: #64748b;
    font-size: 0.875rem;
    margin-bottom: 0.25rem;
}
.contact-detail-value {
    color: #ffffff;
    font-size: 1.125rem;
    font-weight: 500;
}
.contact-social {
    margin-top: 3rem;
    display: flex;
    gap: 1rem;
}
.social-button {
    width: 3rem;
    height: 3rem;
    display: flex;
    align-items: center;
    justify-content: center;
    background: transparent;
    border: 1px solid #1e293b;
    color: #94a3b8;
    cursor: pointer;
    transition: all 0.3s;
}
.social-button:hover {
    border-color: #a3e635;
    background: #a3e635;
    color: #020617;
}
.form-card {
    position: relative;
    background: #020617;
    border: 1px solid #1e293b;
    padding: 2rem;
}
.corner {
    position: absolute;
    width: 1rem;
    height: 1rem;
    border-color: #a3e635;
    border-style: solid;
    border-width: 0;
}
.corner-tl { top: 0; left: 0; border-top-width: 2px; border-left-width: 2px; }
.corner-tr { top: 0; right: 0; border-top-width: 2px; border-right-width: 2px; }
.corner-bl { bottom: 0; left: 0; border-bottom-width: 2px; border-left-width: 2px; }
.corner-br { bottom: 0; right: 0; border-bottom-width: 2px; border-right-width: 2px; }
.contact-form {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    animation: formIn 0.4s ease-out;
}
.form-row {
    display: grid;
    gap: 1.5rem;
}
.contact-form label {
    display: block;
    color: #64748b;
    font-size: 0.875rem;
    margin-bottom: 0.5rem;
}
.contact-form input,
.contact-form textarea {
    width: 100%;
    box-sizing: border-box;
    background: #0f172a;
    border: 1px solid #1e293b;
    padding: 0.75rem 1rem;
    color: #ffffff;
    font: inherit;
    transition: border-color 0.3s;
}
.contact-form textarea {
    resize: none;
}
.contact-form input::placeholder,
.contact-form textarea::placeholder {
    color: #475569;
}
.contact-form input:focus,
.contact-form textarea:focus {
    outline: none;
    border-color: #a3e635;
}
.form-error {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: #f87171;
    font-size: 0.875rem;
}
.btn-submit {
    width: 100%;
    padding: 1rem;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    border: none;
    background: #a3e635;
    color: #020617;
    font-weight: 700;
    cursor: pointer;
    transition: all 0.3s;
}
.btn-submit:hover {
    background: #bef264;
    transform: scale(1.02);
}
.btn-submit:disabled {
    background: #1e293b;
    cursor: not-allowed;
    transform: none;
}
.spinner {
    width: 1.25rem;
    height: 1.25rem;
    border: 2px solid rgba(2, 6, 23, 0.3);
    border-top-color: #020617;
    border-radius: 9999px;
    animation: spin 1s linear infinite;
}
.form-success {
    text-align: center;
    padding: 3rem 0;
    animation: successIn 0.4s ease-out;
}
.form-success-badge {
    width: 5rem;
    height: 5rem;
    margin: 0 auto 1.5rem;
    border-radius: 9999px;
    background: rgba(163, 230, 53, 0.2);
    color: #a3e635;
    display: flex;
    align-items: center;
    justify-content: center;
}
.form-success h3 {
    font-family: 'Bebas Neue', sans-serif;
    font-size: 1.875rem;
    color: #ffffff;
    margin: 0 0 1rem;
}
.form-success p {
    color: #94a3b8;
    margin-bottom: 2rem;
}
.form-success .link-button {
    margin: 0 auto;
}
@keyframes spin {
    to { transform: rotate(360deg); }
}
@keyframes formIn {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes successIn {
    from { opacity: 0; transform: scale(0.9); }
    to { opacity: 1; transform: scale(1); }
}
@media (min-width: 768px) {
    .form-row { grid-template-columns: repeat(2, 1fr); }
}
@media (min-width: 1024px) {
    .contact-layout { grid-template-columns: repeat(2, 1fr); }
    .form-card { padding: 3rem; }
}
"#;
