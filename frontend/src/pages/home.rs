use log::info;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::nav::Nav;
use crate::components::wizard_modal::WizardModal;
use crate::scroll::{active_section, is_scrolled, measure_sections, Section};
use crate::sections::{
    about::About, contact::Contact, credit_repair::CreditRepair, footer::Footer, hero::Hero,
    services::Services,
};
use crate::wizard::{Category, WizardKind};
use crate::SiteContext;

/// Which wizard is on screen, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
enum OpenWizard {
    Lead(Option<Category>),
    CreditRepair,
}

#[function_component(Home)]
pub fn home() -> Html {
    let context = use_context::<SiteContext>();
    let (_, scroll_y) = use_window_scroll();
    let current_section = use_state_eq(|| Section::Home);
    let open_wizard = use_state(|| None::<OpenWizard>);

    // Section offsets are read after layout, so spy from an effect
    {
        let current_section = current_section.clone();
        use_effect_with_deps(
            move |scroll_y: &f64| {
                if let Some(section) = active_section(*scroll_y, &measure_sections()) {
                    current_section.set(section);
                }
                || ()
            },
            scroll_y,
        );
    }

    let open_lead = {
        let open_wizard = open_wizard.clone();
        Callback::from(move |category: Option<Category>| {
            info!("Opening lead wizard with {:?}", category);
            open_wizard.set(Some(OpenWizard::Lead(category)));
        })
    };
    let open_generic = {
        let open_lead = open_lead.clone();
        Callback::from(move |_: ()| open_lead.emit(None))
    };
    let open_credit_repair = {
        let open_wizard = open_wizard.clone();
        Callback::from(move |_: ()| open_wizard.set(Some(OpenWizard::CreditRepair)))
    };
    let close_wizard = {
        let open_wizard = open_wizard.clone();
        Callback::from(move |_: ()| open_wizard.set(None))
    };

    let modal = match (context, *open_wizard) {
        (Some(context), Some(open)) => {
            let (kind, preselected) = match open {
                OpenWizard::Lead(category) => (WizardKind::Lead, category),
                OpenWizard::CreditRepair => (WizardKind::CreditRepair, None),
            };
            html! {
                <WizardModal
                    {kind}
                    catalog={context.catalog.clone()}
                    client={context.client.clone()}
                    {preselected}
                    on_close={close_wizard}
                />
            }
        }
        _ => html! {},
    };

    html! {
        <div class="site">
            <style>{SITE_CSS}</style>
            <Nav
                current_section={*current_section}
                is_scrolled={is_scrolled(scroll_y)}
                on_open_assessment={open_generic.clone()}
            />
            <Hero on_open_assessment={open_generic} />
            <Services on_open_assessment={open_lead} />
            <CreditRepair on_open_assessment={open_credit_repair} />
            <About />
            <Contact />
            <Footer />
            {modal}
        </div>
    }
}

const SITE_CSS: &str = r#"
* { box-sizing: border-box; margin: 0; }
body { font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif; }
.site { min-height: 100vh; background: linear-gradient(to bottom right, #f9fafb, #f0fdf4); }
.section-inner { max-width: 80rem; margin: 0 auto; }
.section-heading { text-align: center; margin-bottom: 4rem; }
.section-heading h2 { font-size: 3rem; font-weight: 700; margin: 1rem 0; }
.section-heading p { font-size: 1.25rem; color: #4b5563; max-width: 48rem; margin: 0 auto; }
.gradient-text {
    background-image: linear-gradient(to right, #374151, #16a34a);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.pill { display: inline-block; background: #dcfce7; color: #15803d; padding: 0.5rem 1rem; border-radius: 9999px; font-size: 0.875rem; font-weight: 500; }
.check { color: #16a34a; margin-right: 0.5rem; }
.primary-button, .outline-button, .light-button {
    padding: 1rem 2rem;
    border-radius: 9999px;
    font-weight: 600;
    cursor: pointer;
    transition: all 0.3s;
}
.primary-button { background: linear-gradient(to right, #374151, #16a34a); color: #fff; border: none; }
.outline-button { background: none; border: 2px solid #d1d5db; color: #374151; }
.outline-button:hover { border-color: #16a34a; color: #16a34a; }
.light-button { background: #fff; color: #111827; border: none; }
.primary-button:hover, .light-button:hover { transform: scale(1.05); box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25); }
.cta-banner { background: linear-gradient(to right, #374151, #16a34a); border-radius: 24px; padding: 3rem; text-align: center; color: #fff; }
.cta-banner h3 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1rem; }
.cta-banner p { font-size: 1.25rem; opacity: 0.9; margin-bottom: 2rem; }
.badges { display: flex; flex-wrap: wrap; gap: 0.75rem; }
.badge { background: rgba(34, 197, 94, 0.2); color: #4ade80; border: 1px solid rgba(34, 197, 94, 0.3); padding: 0.25rem 0.75rem; border-radius: 9999px; font-size: 0.875rem; }
.badge.blue { background: rgba(59, 130, 246, 0.2); color: #60a5fa; border-color: rgba(59, 130, 246, 0.3); }
@keyframes fade-in-up {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}
"#;
