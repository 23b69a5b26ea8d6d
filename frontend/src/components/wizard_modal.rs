use gloo_timers::callback::Timeout;
use log::debug;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::error::{SinkError, WizardError, SUBMISSION_ERROR_MESSAGE};
use crate::forms::FormField;
use crate::supabase::{SubmissionSink, SupabaseClient};
use crate::wizard::{AnswerKey, Category, QuestionCatalog, Wizard, WizardKind, WizardStatus, WizardStep};

#[derive(Properties, PartialEq)]
pub struct WizardModalProps {
    pub kind: WizardKind,
    pub catalog: Rc<QuestionCatalog>,
    pub client: SupabaseClient,
    #[prop_or_default]
    pub preselected: Option<Category>,
    pub on_close: Callback<()>,
}

pub enum WizardMsg {
    Choose(AnswerKey, String),
    Advance(usize),
    Toggle(AnswerKey, String),
    Confirm(AnswerKey),
    Back,
    SetContact(FormField, String),
    Submit,
    Submitted(Result<(), SinkError>),
    DismissError,
    Close,
}

pub struct WizardModal {
    wizard: Wizard,
    error: Option<String>,
    pending_advance: Option<Timeout>,
    auto_close: Option<Timeout>,
}

impl Component for WizardModal {
    type Message = WizardMsg;
    type Properties = WizardModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let wizard = match props.kind {
            WizardKind::Lead => Wizard::lead(props.catalog.clone(), props.preselected),
            WizardKind::CreditRepair => Wizard::credit_repair(props.catalog.clone()),
        };

        Self {
            wizard,
            error: None,
            pending_advance: None,
            auto_close: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            WizardMsg::Choose(key, value) => {
                if !self.wizard.record_single(key, &value) {
                    return false;
                }
                // Leave the choice highlighted for a moment before moving on.
                let step = self.wizard.step();
                let link = ctx.link().clone();
                self.pending_advance = Some(Timeout::new(config::OPTION_ADVANCE_DELAY_MS, move || {
                    link.send_message(WizardMsg::Advance(step));
                }));
                true
            }
            WizardMsg::Advance(step) => {
                self.pending_advance = None;
                self.wizard.advance_from(step)
            }
            WizardMsg::Toggle(key, value) => self.wizard.toggle_multi(key, &value),
            WizardMsg::Confirm(key) => self.wizard.confirm_multi(key),
            WizardMsg::Back => {
                self.pending_advance = None;
                self.error = None;
                self.wizard.go_back()
            }
            WizardMsg::SetContact(field, value) => self.wizard.set_contact_field(field, value),
            WizardMsg::Submit => match self.wizard.begin_submit() {
                Ok(request) => {
                    self.error = None;
                    let client = ctx.props().client.clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = client.insert(request.table, request.record).await;
                        link.send_message(WizardMsg::Submitted(result));
                    });
                    true
                }
                Err(WizardError::Validation(e)) => {
                    self.error = Some(e.to_string());
                    true
                }
                Err(e) => {
                    debug!("Submit ignored: {}", e);
                    false
                }
            },
            WizardMsg::Submitted(result) => {
                match self.wizard.finish_submit(result) {
                    Ok(()) if self.wizard.status() == WizardStatus::Success => {
                        let on_close = ctx.props().on_close.clone();
                        self.auto_close = Some(Timeout::new(config::WIZARD_AUTO_CLOSE_MS, move || {
                            on_close.emit(());
                        }));
                    }
                    Ok(()) => {}
                    Err(_) => {
                        self.error = Some(SUBMISSION_ERROR_MESSAGE.to_string());
                    }
                }
                true
            }
            WizardMsg::DismissError => {
                self.error = None;
                true
            }
            WizardMsg::Close => {
                self.pending_advance = None;
                self.auto_close = None;
                self.wizard.close();
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let copy = ctx.props().catalog.copy(self.wizard.kind());

        if self.wizard.status() == WizardStatus::Success {
            return html! {
                <div class="wizard-overlay">
                    <style>{WIZARD_CSS}</style>
                    <div class="wizard-success">
                        <div class="wizard-success-icon">{"✓"}</div>
                        <h3>{&copy.success_heading}</h3>
                        <p>{&copy.success_message}</p>
                    </div>
                </div>
            };
        }

        let progress = format!("width: {:.1}%;", self.wizard.progress() * 100.0);

        html! {
            <div class="wizard-overlay">
                <style>{WIZARD_CSS}</style>
                <div class="wizard-dialog">
                    <div class="wizard-header">
                        <div class="wizard-heading">
                            <h2>{&copy.title}</h2>
                            <p class="wizard-step-count">
                                {format!("Step {} of {}", self.wizard.step(), self.wizard.total_steps())}
                            </p>
                        </div>
                        <button class="wizard-close" aria-label="Close"
                            onclick={ctx.link().callback(|_| WizardMsg::Close)}>
                            {"✕"}
                        </button>
                    </div>

                    <div class="wizard-progress">
                        <div class="wizard-progress-fill" style={progress}></div>
                    </div>

                    <div class="wizard-body">
                        if let Some(error) = &self.error {
                            <div class="wizard-error">
                                <span>{error}</span>
                                <button onclick={ctx.link().callback(|_| WizardMsg::DismissError)}>
                                    {"✕"}
                                </button>
                            </div>
                        }
                        { self.render_step(ctx) }
                    </div>

                    if self.wizard.can_go_back() {
                        <div class="wizard-footer">
                            <button class="wizard-back" onclick={ctx.link().callback(|_| WizardMsg::Back)}>
                                {"‹ Previous"}
                            </button>
                        </div>
                    }
                </div>
            </div>
        }
    }
}

impl WizardModal {
    fn render_step(&self, ctx: &Context<Self>) -> Html {
        let step = self.wizard.current_step();
        let heading = html! {
            <>
                <h3 class="wizard-prompt">{step.prompt()}</h3>
                if let Some(hint) = step.hint() {
                    <p class="wizard-hint">{hint}</p>
                }
            </>
        };

        match step {
            WizardStep::SingleChoice { options, target, .. } => {
                let target = *target;
                html! {
                    <div class="wizard-step" key={self.wizard.step()}>
                        {heading}
                        <div class="wizard-options">
                            { for options.iter().map(|option| {
                                let selected = self.wizard.answers().is_selected(target, option);
                                let value = option.clone();
                                html! {
                                    <button
                                        class={classes!("wizard-option", selected.then(|| "selected"))}
                                        onclick={ctx.link().callback(move |_| WizardMsg::Choose(target, value.clone()))}
                                    >
                                        <span>{option}</span>
                                        <span class="wizard-option-arrow">{"›"}</span>
                                    </button>
                                }
                            }) }
                        </div>
                    </div>
                }
            }
            WizardStep::MultiChoice { options, target, .. } => {
                let target = *target;
                let key = target;
                html! {
                    <div class="wizard-step" key={self.wizard.step()}>
                        {heading}
                        <div class="wizard-options">
                            { for options.iter().map(|option| {
                                let selected = self.wizard.answers().is_selected(target, option);
                                let value = option.clone();
                                html! {
                                    <button
                                        class={classes!("wizard-option", selected.then(|| "selected"))}
                                        onclick={ctx.link().callback(move |_| WizardMsg::Toggle(target, value.clone()))}
                                    >
                                        <span>{option}</span>
                                        if selected {
                                            <span class="wizard-option-check">{"✓"}</span>
                                        }
                                    </button>
                                }
                            }) }
                        </div>
                        <button
                            class="wizard-continue"
                            disabled={!self.wizard.can_confirm()}
                            onclick={ctx.link().callback(move |_| WizardMsg::Confirm(key))}
                        >
                            {format!("Continue ({} selected)", self.wizard.selected_count(key))}
                        </button>
                    </div>
                }
            }
            WizardStep::ContactForm { .. } => self.render_contact_form(ctx, heading),
        }
    }

    fn render_contact_form(&self, ctx: &Context<Self>, heading: Html) -> Html {
        let copy = ctx.props().catalog.copy(self.wizard.kind());
        let contact = self.wizard.contact();
        let submitting = self.wizard.is_submitting();

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            WizardMsg::Submit
        });

        html! {
            <form class="wizard-step wizard-contact" {onsubmit}>
                {heading}
                { self.contact_input(ctx, FormField::Name, "Full Name *", "text", "John Doe", &contact.name) }
                { self.contact_input(ctx, FormField::Email, "Email *", "email", "john@example.com", &contact.email) }
                { self.contact_input(ctx, FormField::Phone, "Phone Number *", "tel", "(555) 123-4567", &contact.phone) }
                <label class="wizard-field">
                    <span>{&copy.message_label}</span>
                    <textarea
                        rows="3"
                        placeholder={copy.message_placeholder.clone()}
                        value={contact.message.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            WizardMsg::SetContact(FormField::Message, input.value())
                        })}
                    />
                </label>
                <button type="submit" class="wizard-submit" disabled={submitting}>
                    { if submitting { "Submitting...".to_string() } else { copy.submit_label.clone() } }
                </button>
                <p class="wizard-disclaimer">{&copy.disclaimer}</p>
            </form>
        }
    }

    fn contact_input(
        &self,
        ctx: &Context<Self>,
        field: FormField,
        label: &'static str,
        input_type: &'static str,
        placeholder: &'static str,
        value: &str,
    ) -> Html {
        html! {
            <label class="wizard-field">
                <span>{label}</span>
                <input
                    type={input_type}
                    required=true
                    placeholder={placeholder}
                    value={value.to_string()}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        WizardMsg::SetContact(field, input.value())
                    })}
                />
            </label>
        }
    }
}

const WIZARD_CSS: &str = r#"
.wizard-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.5);
    backdrop-filter: blur(4px);
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
}
.wizard-dialog, .wizard-success {
    background: #fff;
    border-radius: 24px;
    width: 100%;
    max-width: 42rem;
    max-height: 90vh;
    display: flex;
    flex-direction: column;
    animation: wizard-slide-up 0.3s ease-out;
}
.wizard-success {
    max-width: 28rem;
    padding: 3rem;
    text-align: center;
}
.wizard-success-icon {
    width: 5rem;
    height: 5rem;
    margin: 0 auto 1.5rem;
    border-radius: 50%;
    background: #dcfce7;
    color: #16a34a;
    font-size: 2.5rem;
    line-height: 5rem;
}
.wizard-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1.5rem;
    border-bottom: 1px solid #e5e7eb;
}
.wizard-step-count { color: #6b7280; font-size: 0.875rem; margin-top: 0.25rem; }
.wizard-close, .wizard-error button {
    background: none;
    border: none;
    color: #9ca3af;
    font-size: 1.25rem;
    cursor: pointer;
}
.wizard-progress { height: 0.5rem; background: #f3f4f6; }
.wizard-progress-fill {
    height: 100%;
    background: linear-gradient(to right, #374151, #16a34a);
    transition: width 0.5s;
}
.wizard-body { padding: 2rem; overflow-y: auto; flex: 1; }
.wizard-step { animation: wizard-fade-in 0.4s ease-out; }
.wizard-prompt { font-size: 1.25rem; font-weight: 600; color: #111827; margin-bottom: 1.5rem; }
.wizard-hint { color: #6b7280; font-size: 0.875rem; margin: -1rem 0 1.5rem; }
.wizard-options { display: flex; flex-direction: column; gap: 0.75rem; margin-bottom: 1.5rem; }
.wizard-option {
    display: flex;
    justify-content: space-between;
    width: 100%;
    text-align: left;
    padding: 1rem;
    border-radius: 12px;
    border: 2px solid #e5e7eb;
    background: #fff;
    color: #374151;
    font-weight: 500;
    cursor: pointer;
}
.wizard-option:hover, .wizard-option.selected { border-color: #16a34a; background: #f0fdf4; color: #16a34a; }
.wizard-continue, .wizard-submit {
    width: 100%;
    padding: 1rem 1.5rem;
    border: none;
    border-radius: 12px;
    background: linear-gradient(to right, #374151, #16a34a);
    color: #fff;
    font-weight: 600;
    cursor: pointer;
}
.wizard-continue:disabled, .wizard-submit:disabled { opacity: 0.5; cursor: not-allowed; }
.wizard-field { display: block; margin-bottom: 1rem; }
.wizard-field span { display: block; font-size: 0.875rem; font-weight: 500; color: #374151; margin-bottom: 0.5rem; }
.wizard-field input, .wizard-field textarea {
    width: 100%;
    padding: 0.75rem 1rem;
    border: 1px solid #d1d5db;
    border-radius: 12px;
    resize: none;
}
.wizard-error {
    display: flex;
    justify-content: space-between;
    padding: 0.75rem 1rem;
    margin-bottom: 1rem;
    border-radius: 12px;
    background: #fef2f2;
    color: #b91c1c;
}
.wizard-disclaimer { font-size: 0.75rem; color: #6b7280; text-align: center; margin-top: 1rem; }
.wizard-footer { padding: 1.5rem; border-top: 1px solid #e5e7eb; }
.wizard-back { background: none; border: none; color: #4b5563; font-weight: 500; cursor: pointer; }
.wizard-back:hover { color: #16a34a; }
@keyframes wizard-slide-up {
    from { transform: translateY(20px); opacity: 0; }
    to { transform: translateY(0); opacity: 1; }
}
@keyframes wizard-fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}
"#;
