use log::{info, warn};
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::components::faq_item::FaqItem;
use crate::content;
use crate::faq::FaqToggleSet;
use crate::reveal::hook::use_reveal;
use crate::reveal::tracker::Region;

/// Smooth-scrolls the enrollment section to the top of the viewport.
pub fn scroll_to_enroll() {
    let target = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(content::ENROLL_SECTION_ID));
    let Some(target) = target else {
        warn!("#{} is not rendered, nothing to scroll to", content::ENROLL_SECTION_ID);
        return;
    };

    let mut options = ScrollIntoViewOptions::new();
    options
        .behavior(ScrollBehavior::Smooth)
        .block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Opens the external registration form in a new tab.
pub fn open_registration_form() {
    let Some(window) = window() else {
        return;
    };
    match window.open_with_url_and_target(content::REGISTRATION_FORM_URL, "_blank") {
        Ok(Some(_)) => info!("Opened registration form"),
        Ok(None) => warn!("Registration form popup was blocked"),
        Err(e) => warn!("Failed to open registration form: {:?}", e),
    }
}

fn bullet_list(items: &'static [&'static str]) -> Html {
    html! {
        <ul class="bullets">
            { for items.iter().map(|item| html! {
                <li><span class="dot">{"•"}</span><span>{*item}</span></li>
            }) }
        </ul>
    }
}

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let faqs = use_state(FaqToggleSet::new);

    let hero_ref = use_node_ref();
    let curriculum_ref = use_node_ref();
    let audience_ref = use_node_ref();
    let enroll_ref = use_node_ref();
    let faq_ref = use_node_ref();
    let footer_ref = use_node_ref();

    let reveal = use_reveal(vec![
        (Region::Hero, hero_ref.clone()),
        (Region::Curriculum, curriculum_ref.clone()),
        (Region::Audience, audience_ref.clone()),
        (Region::Enroll, enroll_ref.clone()),
        (Region::Faq, faq_ref.clone()),
        (Region::Footer, footer_ref.clone()),
    ]);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let on_toggle = {
        let faqs = faqs.clone();
        Callback::from(move |index: usize| {
            let mut next = (*faqs).clone();
            next.toggle(index);
            faqs.set(next);
        })
    };

    let collapse_all = {
        let faqs = faqs.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*faqs).clone();
            next.clear();
            faqs.set(next);
        })
    };

    let enroll_now = Callback::from(|_: MouseEvent| scroll_to_enroll());
    let open_form = Callback::from(|_: MouseEvent| open_registration_form());

    html! {
        <div class="landing-page">
            <section ref={hero_ref} class={classes!("hero", reveal.reveal_class(Region::Hero))}>
                <div class="hero-copy">
                    <h1>{content::TITLE}</h1>
                    <p class="hero-subtitle">{content::TAGLINE}</p>
                    <div class="badges">
                        { for content::BADGES.iter().map(|badge| html! {
                            <span class="badge">{*badge}</span>
                        }) }
                    </div>
                </div>
                <div class="price-card">
                    <p class="price-label">{content::PRICE_LABEL}</p>
                    <span class="price gradient-text">{content::PRICE}</span>
                    <button class="cta" onclick={enroll_now}>{"Enroll Now"}</button>
                    <p class="seat-notice">{content::SEAT_NOTICE}</p>
                </div>
            </section>

            <section ref={curriculum_ref} class={classes!("curriculum", reveal.reveal_class(Region::Curriculum))}>
                <h2>{"Curriculum & Schedule"}</h2>
                <div class="card-grid">
                    { for content::CURRICULUM.iter().map(|day| html! {
                        <div class="card">
                            <div class="card-header">
                                <h3>{day.title}</h3>
                                <span class="pill">{day.format}</span>
                            </div>
                            <h4 class="gradient-text">{day.theme}</h4>
                            { bullet_list(day.outcomes) }
                            <div class="sessions">
                                <p class="sessions-title">{"Sessions"}</p>
                                { for day.sessions.iter().map(|session| html! {
                                    <p class="session">{format!("• {}", session)}</p>
                                }) }
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section ref={audience_ref} class={classes!("audience", reveal.reveal_class(Region::Audience))}>
                <div class="card-grid">
                    <div class="card">
                        <h3>{"Who should join"}</h3>
                        { bullet_list(content::WHO_SHOULD_JOIN) }
                    </div>
                    <div class="card">
                        <h3>{"What you need"}</h3>
                        { bullet_list(content::WHAT_YOU_NEED) }
                    </div>
                </div>
            </section>

            <section
                ref={enroll_ref}
                id={content::ENROLL_SECTION_ID}
                class={classes!("enroll", reveal.reveal_class(Region::Enroll))}
            >
                <h2>{"Enroll Now"}</h2>
                <div class="card-grid">
                    <div class="card">
                        <h3>{"Step 1 — Pay via UPI"}</h3>
                        <p>{format!("Send {} to the UPI ID below or scan the QR code.", content::PRICE)}</p>
                        <div class="upi-box">
                            <p class="upi-label">{"UPI ID:"}</p>
                            <p class="upi-id">{content::UPI_ID}</p>
                        </div>
                        <img class="upi-qr" src={content::UPI_QR_SRC} alt="UPI QR Code for Payment" />
                        <p class="payment-note">{content::PAYMENT_NOTE}</p>
                    </div>
                    <div class="card">
                        <h3>{"Step 2 — Submit Google Form"}</h3>
                        <p>
                            {"Share your details & upload payment screenshot. You'll get the Zoom link on WhatsApp/email within a few hours."}
                        </p>
                        <button class="cta cta-large" onclick={open_form}>
                            {"Open Registration Form"}
                        </button>
                        { bullet_list(content::ENROLL_NOTES) }
                    </div>
                </div>
            </section>

            <section ref={faq_ref} class={classes!("faq", reveal.reveal_class(Region::Faq))}>
                <h2>{"FAQs"}</h2>
                <div class="faq-list">
                    { for content::FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| html! {
                        <FaqItem
                            key={index}
                            index={index}
                            question={entry.question}
                            answer={entry.answer}
                            expanded={faqs.is_expanded(index)}
                            on_toggle={on_toggle.clone()}
                        />
                    }) }
                </div>
                if !faqs.is_empty() {
                    <button class="collapse-all" onclick={collapse_all}>
                        {format!("Collapse all ({})", faqs.len())}
                    </button>
                }
            </section>

            <footer ref={footer_ref} class={classes!("footer", reveal.reveal_class(Region::Footer))}>
                <p class="copyright">{content::COPYRIGHT}</p>
                <div class="contacts">
                    <span>{"Connect with me:"}</span>
                    { for content::CONTACTS.iter().map(|contact| html! {
                        <a href={contact.href} target="_blank" rel="noopener noreferrer" class="gradient-text">
                            {contact.label}
                        </a>
                    }) }
                </div>
            </footer>

            <style>
                {r#"
                .landing-page {
                    padding-top: 80px;
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #f9fafb, #ffffff);
                    color: #111827;
                    font-family: system-ui, sans-serif;
                }

                .landing-page section,
                .landing-page .footer {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.7s ease-out, transform 0.7s ease-out;
                }

                .reveal.visible {
                    opacity: 1;
                    transform: none;
                }

                .gradient-text {
                    background: linear-gradient(to right, #60a5fa, #22d3ee, #4ade80);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                }

                .hero-copy {
                    flex: 1 1 420px;
                }

                .hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1rem;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #374151;
                    margin-bottom: 1.5rem;
                }

                .badges {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }

                .badge, .pill {
                    background: #eff6ff;
                    border-radius: 9999px;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.9rem;
                    color: #4b5563;
                }

                .price-card {
                    background: #fff;
                    border: 2px solid #22d3ee;
                    border-radius: 1rem;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    padding: 1.5rem;
                    max-width: 20rem;
                    text-align: center;
                }

                .price {
                    display: block;
                    font-size: 3rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .cta {
                    width: 100%;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    color: #fff;
                    font-weight: 700;
                    cursor: pointer;
                    background: linear-gradient(to right, #60a5fa, #22d3ee, #4ade80);
                    transition: transform 0.3s;
                }

                .cta:hover {
                    transform: scale(1.05);
                }

                .cta-large {
                    padding: 1rem 1.5rem;
                    font-size: 1.1rem;
                    margin: 1rem 0 1.5rem;
                }

                .seat-notice, .payment-note {
                    font-size: 0.8rem;
                    color: #6b7280;
                    margin-top: 0.75rem;
                }

                .landing-page h2 {
                    font-size: 2.25rem;
                    text-align: center;
                    margin-bottom: 2.5rem;
                }

                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                }

                .card {
                    background: #fff;
                    border-radius: 0.75rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    padding: 2rem;
                    transition: transform 0.3s, box-shadow 0.3s;
                }

                .card:hover {
                    transform: scale(1.03);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .card-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1.5rem;
                }

                .bullets {
                    list-style: none;
                    padding: 0;
                }

                .bullets li {
                    display: flex;
                    gap: 0.5rem;
                    margin-bottom: 0.75rem;
                    color: #374151;
                }

                .dot {
                    color: #22d3ee;
                }

                .sessions {
                    border-top: 1px solid #e5e7eb;
                    padding-top: 1rem;
                }

                .sessions-title {
                    font-weight: 600;
                }

                .session {
                    font-size: 0.9rem;
                    color: #374151;
                }

                .upi-box {
                    background: #f9fafb;
                    border-radius: 0.5rem;
                    padding: 1rem;
                    margin: 1.5rem 0;
                }

                .upi-id {
                    font-family: monospace;
                    font-size: 1.25rem;
                    color: #2563eb;
                    word-break: break-all;
                }

                .upi-qr {
                    display: block;
                    margin: 0 auto 1rem;
                    width: 100%;
                    max-width: 24rem;
                    object-fit: contain;
                }

                .faq {
                    max-width: 56rem;
                }

                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-item {
                    background: #fff;
                    border-radius: 0.75rem;
                    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                    overflow: hidden;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.5rem;
                    background: #f9fafb;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                }

                .faq-question h4 {
                    margin: 0;
                    font-size: 1.1rem;
                }

                .chevron {
                    font-size: 1.5rem;
                    color: #4b5563;
                    transition: transform 0.3s;
                }

                .chevron.rotated {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                }

                .faq-item.open .faq-answer {
                    max-height: 24rem;
                }

                .faq-answer p {
                    padding: 1rem 1.5rem 2rem;
                    margin: 0;
                    color: #374151;
                }

                .collapse-all {
                    display: block;
                    margin: 1.5rem auto 0;
                    background: none;
                    border: none;
                    color: #2563eb;
                    cursor: pointer;
                }

                .footer {
                    text-align: center;
                    font-size: 0.9rem;
                }

                .contacts {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }

                .contacts a {
                    text-decoration: none;
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.5rem;
                    }

                    .hero {
                        text-align: center;
                    }

                    .badges {
                        justify-content: center;
                    }

                    .price-card {
                        margin: 0 auto;
                    }
                }
                "#}
            </style>
        </div>
    }
}
