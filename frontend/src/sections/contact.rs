use gloo_timers::future::TimeoutFuture;
use log::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::error::FormError;
use crate::forms::{send_inquiry, ContactInquiry, FormField, SendGeneration, SubmitStatus};
use crate::scroll::Section;
use crate::SiteContext;

const CONTACT_INFO: [(&str, &str, &str, Option<&str>); 4] = [
    ("📞", "Phone", "1-800-SAFE-FIN", Some("tel:1-800-723-3346")),
    ("✉", "Email", "info@safetyfinancial.ca", Some("mailto:info@safetyfinancial.ca")),
    ("📍", "Office", "Toronto, Ontario, Canada", None),
    ("🕘", "Hours", "Mon-Fri: 9AM-6PM EST", None),
];

const REASONS: [&str; 4] = [
    "Personalized service from licensed professionals",
    "Comprehensive Canadian financial solutions",
    "No-obligation consultations",
    "15+ years of trusted experience",
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let context = use_context::<SiteContext>();
    let inquiry = use_state(ContactInquiry::default);
    let status = use_state(|| SubmitStatus::Idle);
    let invalid = use_state(|| None::<String>);
    let generation = use_mut_ref(SendGeneration::default);

    let on_input = |field: FormField| {
        let inquiry = inquiry.clone();
        Callback::from(move |value: String| {
            let mut updated = (*inquiry).clone();
            updated.set(field, value);
            inquiry.set(updated);
        })
    };

    let onsubmit = {
        let inquiry = inquiry.clone();
        let status = status.clone();
        let invalid = invalid.clone();
        let generation = generation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == SubmitStatus::Sending {
                return;
            }
            let Some(context) = context.clone() else {
                return;
            };
            let inquiry = inquiry.clone();
            let status = status.clone();
            let invalid = invalid.clone();
            let generation = generation.clone();
            let token = generation.borrow_mut().begin();
            status.set(SubmitStatus::Sending);
            invalid.set(None);

            spawn_local(async move {
                match send_inquiry(&context.client, &inquiry).await {
                    Ok(()) => {
                        status.set(SubmitStatus::Success);
                        inquiry.set(ContactInquiry::default());
                        TimeoutFuture::new(config::CONTACT_STATUS_RESET_MS).await;
                        // A newer send owns the status now
                        if generation.borrow().is_current(token) {
                            status.set(SubmitStatus::Idle);
                        }
                    }
                    Err(FormError::Validation(e)) => {
                        invalid.set(Some(e.to_string()));
                        status.set(SubmitStatus::Idle);
                    }
                    Err(FormError::Submission(e)) => {
                        error!("Error submitting form: {}", e);
                        status.set(SubmitStatus::Error);
                    }
                }
            });
        })
    };

    let input = |field: FormField, label: &'static str, input_type: &'static str, placeholder: &'static str, required: bool| {
        let on_input = on_input(field);
        html! {
            <label class="contact-field">
                <span>{label}</span>
                <input
                    type={input_type}
                    {required}
                    placeholder={placeholder}
                    value={inquiry.get(field).to_string()}
                    oninput={Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_input.emit(input.value());
                    })}
                />
            </label>
        }
    };

    let on_message = on_input(FormField::Message);
    let sending = *status == SubmitStatus::Sending;

    html! {
        <section id={Section::Contact.id()} class="contact-section">
            <style>{CONTACT_CSS}</style>
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Get in "}<span class="gradient-text">{"Touch"}</span></h2>
                    <p>{"Have questions? We're here to help. Reach out to our team today."}</p>
                </div>

                <div class="contact-grid">
                    <div>
                        <h3>{"Contact Information"}</h3>
                        <div class="contact-info">
                            { for CONTACT_INFO.iter().map(|(icon, title, content, link)| html! {
                                <div class="contact-info-row">
                                    <span class="service-icon">{*icon}</span>
                                    <div>
                                        <div class="contact-info-title">{*title}</div>
                                        {
                                            match link {
                                                Some(href) => html! { <a href={*href}>{*content}</a> },
                                                None => html! { <div>{*content}</div> },
                                            }
                                        }
                                    </div>
                                </div>
                            }) }
                        </div>
                        <div class="contact-reasons">
                            <h4>{"Why Choose Safety Financial?"}</h4>
                            <ul>
                                { for REASONS.iter().map(|reason| html! { <li>{"✓ "}{*reason}</li> }) }
                            </ul>
                        </div>
                    </div>

                    <div>
                        <h3>{"Send Us a Message"}</h3>
                        <form class="contact-form" {onsubmit}>
                            { input(FormField::Name, "Name *", "text", "Your name", true) }
                            <div class="contact-pair">
                                { input(FormField::Email, "Email *", "email", "your@email.com", true) }
                                { input(FormField::Phone, "Phone", "tel", "(555) 123-4567", false) }
                            </div>
                            { input(FormField::Subject, "Subject *", "text", "How can we help?", true) }
                            <label class="contact-field">
                                <span>{"Message *"}</span>
                                <textarea
                                    required=true
                                    rows="5"
                                    placeholder="Tell us more about what you're looking for..."
                                    value={inquiry.message.clone()}
                                    oninput={Callback::from(move |e: InputEvent| {
                                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                                        on_message.emit(input.value());
                                    })}
                                />
                            </label>

                            if let Some(message) = &*invalid {
                                <div class="form-banner error">{message}</div>
                            }
                            {
                                match *status {
                                    SubmitStatus::Success => html! {
                                        <div class="form-banner success">
                                            {"Thank you! We'll get back to you within 24 hours."}
                                        </div>
                                    },
                                    SubmitStatus::Error => html! {
                                        <div class="form-banner error">
                                            {"Something went wrong. Please try again or contact us directly."}
                                        </div>
                                    },
                                    SubmitStatus::Idle | SubmitStatus::Sending => html! {},
                                }
                            }

                            <button type="submit" class="primary-button wide" disabled={sending}>
                                { if sending { "Sending..." } else { "Send Message" } }
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

const CONTACT_CSS: &str = r#"
.contact-section { padding: 5rem 2rem; background: #fff; }
.contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; }
.contact-grid h3 { font-size: 1.5rem; font-weight: 700; color: #111827; margin-bottom: 1.5rem; }
.contact-info { margin-bottom: 2.5rem; }
.contact-info-row { display: flex; gap: 1rem; margin-bottom: 1.5rem; color: #4b5563; }
.contact-info-row a { color: #4b5563; text-decoration: none; }
.contact-info-row a:hover { color: #16a34a; }
.contact-info-title { font-weight: 600; color: #111827; margin-bottom: 0.25rem; }
.contact-reasons { background: linear-gradient(to bottom right, #374151, #16a34a); border-radius: 16px; padding: 2rem; color: #fff; }
.contact-reasons h4 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.75rem; }
.contact-reasons ul { list-style: none; padding: 0; opacity: 0.9; }
.contact-reasons li { margin-bottom: 0.5rem; }
.contact-pair { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.contact-field { display: block; margin-bottom: 1.25rem; }
.contact-field span { display: block; font-size: 0.875rem; font-weight: 500; color: #374151; margin-bottom: 0.5rem; }
.contact-field input, .contact-field textarea { width: 100%; padding: 0.75rem 1rem; border: 1px solid #d1d5db; border-radius: 12px; resize: none; }
.form-banner { padding: 1rem; border-radius: 12px; margin-bottom: 1.25rem; }
.form-banner.success { background: #f0fdf4; border: 1px solid #bbf7d0; color: #15803d; }
.form-banner.error { background: #fef2f2; border: 1px solid #fecaca; color: #b91c1c; }
.primary-button:disabled { opacity: 0.5; cursor: not-allowed; }
@media (max-width: 1024px) {
    .contact-grid, .contact-pair { grid-template-columns: 1fr; }
}
"#;
