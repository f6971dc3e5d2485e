use yew::prelude::*;

use crate::components::sections::PageHero;
use crate::config;
use crate::forms::{self, bind_input, bind_textarea, ContactMessage};

struct ContactChannel {
    icon: &'static str,
    title: &'static str,
    details: &'static str,
    description: &'static str,
}

const CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "✉",
        title: "Email",
        details: config::CONTACT_EMAIL,
        description: "Send us an email anytime",
    },
    ContactChannel {
        icon: "☎",
        title: "Phone",
        details: config::CONTACT_PHONE,
        description: "Call us during business hours",
    },
    ContactChannel {
        icon: "⌖",
        title: "Location",
        details: config::CONTACT_LOCATION,
        description: "International Management Institute",
    },
    ContactChannel {
        icon: "💬",
        title: "Response Time",
        details: "24-48 hours",
        description: "We'll get back to you quickly",
    },
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactMessage::default);

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            forms::submit(&*form);
            form.set(ContactMessage::default());
        })
    };

    html! {
        <div class="page grey">
            <PageHero
                title="Get in Touch"
                subtitle="Let's empower the future together with SkillBridge's innovative approach to learning"
                theme={classes!("hero-purple")}
            />
            <section class="section">
                <div class="container">
                    <div class="card-grid four">
                        { for CHANNELS.iter().map(|channel| html! {
                            <div class="contact-card">
                                <div class="contact-icon">{channel.icon}</div>
                                <h3>{channel.title}</h3>
                                <p class="contact-details">{channel.details}</p>
                                <p class="muted">{channel.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section white">
                <div class="container narrow">
                    <div class="section-heading">
                        <h2>{"Send Us a Message"}</h2>
                        <p>
                            {"Whether you're interested in partnering with us, have questions about our platform, or want to learn more about our mission, we'd love to hear from you."}
                        </p>
                    </div>
                    <form class="contact-form" {onsubmit}>
                        <div class="form-row">
                            <div class="form-field">
                                <label for="name">{"Full Name *"}</label>
                                <input
                                    type="text"
                                    id="name"
                                    name="name"
                                    placeholder="Your full name"
                                    required={true}
                                    value={form.name.clone()}
                                    oninput={bind_input(&form, |f, v| f.name = v)}
                                />
                            </div>
                            <div class="form-field">
                                <label for="email">{"Email Address *"}</label>
                                <input
                                    type="email"
                                    id="email"
                                    name="email"
                                    placeholder="your.email@example.com"
                                    required={true}
                                    value={form.email.clone()}
                                    oninput={bind_input(&form, |f, v| f.email = v)}
                                />
                            </div>
                        </div>
                        <div class="form-field">
                            <label for="organization">{"Organization (Optional)"}</label>
                            <input
                                type="text"
                                id="organization"
                                name="organization"
                                placeholder="Your organization or company"
                                value={form.organization.clone()}
                                oninput={bind_input(&form, |f, v| f.organization = v)}
                            />
                        </div>
                        <div class="form-field">
                            <label for="message">{"Message *"}</label>
                            <textarea
                                id="message"
                                name="message"
                                rows="6"
                                placeholder="Tell us about your interest in SkillBridge, questions you have, or how we can help you..."
                                required={true}
                                value={form.message.clone()}
                                oninput={bind_textarea(&form, |f, v| f.message = v)}
                            />
                        </div>
                        <button type="submit" class="primary-button full-width">
                            {"➤ Send Message"}
                        </button>
                    </form>
                </div>
            </section>

            <section class="cta-section green">
                <div class="container narrow centered">
                    <h2>{"Our Mission"}</h2>
                    <p>
                        {"We believe that everyone deserves access to quality digital education, regardless of their location or economic circumstances. Through SkillBridge, we're working to bridge the digital divide and create opportunities for rural learners to thrive in the digital economy."}
                    </p>
                </div>
            </section>
            <style>
                {r#"
                .contact-card {
                    background: #fff;
                    border-radius: 16px;
                    padding: 1.5rem;
                    text-align: center;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
                }
                .contact-icon {
                    width: 3rem;
                    height: 3rem;
                    margin: 0 auto 1rem;
                    border-radius: 8px;
                    background: #f9fafb;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.4rem;
                }
                .contact-details {
                    font-weight: 500;
                    color: #111827;
                }
                .contact-form {
                    background: #f9fafb;
                    border-radius: 16px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
                }
                .form-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .form-field label {
                    font-size: 0.9rem;
                    font-weight: 500;
                    color: #374151;
                }
                .form-field input,
                .form-field textarea {
                    padding: 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    font-size: 1rem;
                    resize: none;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                    gap: 1.5rem;
                }
                "#}
            </style>
        </div>
    }
}
