use yew::prelude::*;

use crate::scroll::{scroll_to_section, use_reveal, Section};
use crate::wizard::Category;

struct Offering {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const INSURANCE: [Offering; 6] = [
    Offering {
        icon: "🛡",
        title: "Whole Life Insurance",
        description: "Permanent coverage with guaranteed cash value growth and lifelong protection for your loved ones.",
    },
    Offering {
        icon: "📈",
        title: "Universal Life",
        description: "Flexible premium payments with investment growth potential and adjustable coverage amounts.",
    },
    Offering {
        icon: "☂",
        title: "Term Insurance",
        description: "Affordable temporary coverage for specific periods, perfect for families and mortgage protection.",
    },
    Offering {
        icon: "🔒",
        title: "Guaranteed Insurance",
        description: "No medical exam required. Simplified approval process for peace of mind coverage.",
    },
    Offering {
        icon: "❤",
        title: "Critical Illness",
        description: "Lump-sum payment upon diagnosis of covered critical illnesses to focus on recovery.",
    },
    Offering {
        icon: "🩺",
        title: "Disability Insurance",
        description: "Income replacement if injury or illness prevents you from working. Protect your earning power.",
    },
];

const INVESTMENTS: [Offering; 4] = [
    Offering {
        icon: "🐷",
        title: "TFSA",
        description: "Tax-Free Savings Account for flexible, tax-free growth and withdrawals for any goal.",
    },
    Offering {
        icon: "📈",
        title: "RRSP",
        description: "Registered Retirement Savings Plan with tax-deferred growth to build your retirement nest egg.",
    },
    Offering {
        icon: "🎓",
        title: "RESP",
        description: "Registered Education Savings Plan with government grants to fund your child's education.",
    },
    Offering {
        icon: "🛡",
        title: "Segregated Funds",
        description: "Investment protection with insurance benefits, creditor protection, and estate planning advantages.",
    },
];

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    delay_ms: usize,
    #[prop_or_default]
    tint: Option<&'static str>,
    onclick: Callback<MouseEvent>,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    html! {
        <div
            ref={node}
            class={classes!("service-card", props.tint, visible.then(|| "visible"))}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
            onclick={props.onclick.clone()}
        >
            <div class="service-icon">{props.icon}</div>
            <h4>{props.title}</h4>
            <p>{props.description}</p>
            <div class="service-more">{"Learn More →"}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    /// Opens the lead wizard, optionally with the interest already chosen.
    pub on_open_assessment: Callback<Option<Category>>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let open_with = |category: Option<Category>| {
        let on_open_assessment = props.on_open_assessment.clone();
        Callback::from(move |_: MouseEvent| on_open_assessment.emit(category))
    };

    let credit_node = use_node_ref();
    let credit_visible = use_reveal(credit_node.clone());

    html! {
        <section id={Section::Services.id()} class="services-section">
            <style>{SERVICES_CSS}</style>
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Our "}<span class="gradient-text">{"Services"}</span></h2>
                    <p>{"Comprehensive financial solutions designed to protect your family and grow your wealth"}</p>
                </div>

                <div id="life-insurance" class="service-group">
                    <h3>{"🛡 Life Insurance Solutions"}</h3>
                    <div class="service-grid">
                        { for INSURANCE.iter().enumerate().map(|(i, offering)| html! {
                            <ServiceCard
                                icon={offering.icon}
                                title={offering.title}
                                description={offering.description}
                                delay_ms={i * 100}
                                onclick={open_with(Some(Category::LifeInsurance))}
                            />
                        }) }
                    </div>
                </div>

                <div id="investments" class="service-group">
                    <h3>{"📈 Investment Solutions"}</h3>
                    <div class="service-grid four">
                        { for INVESTMENTS.iter().enumerate().map(|(i, offering)| html! {
                            <ServiceCard
                                icon={offering.icon}
                                title={offering.title}
                                description={offering.description}
                                delay_ms={i * 100}
                                tint={Some("green")}
                                onclick={open_with(Some(Category::InvestmentSolutions))}
                            />
                        }) }
                    </div>
                </div>

                <div class="service-group">
                    <h3>{"💳 Credit Repair Services"}</h3>
                    <div
                        ref={credit_node}
                        class={classes!("service-card", "credit-card", credit_visible.then(|| "visible"))}
                        onclick={|_| scroll_to_section(Section::CreditRepair.id())}
                    >
                        <div class="credit-card-body">
                            <h4>{"Professional Credit Repair"}</h4>
                            <p>
                                {"Transform your credit score and unlock financial opportunities. Our proven process has helped \
                                  thousands of Canadians remove negative items, dispute errors, and rebuild their credit, no matter \
                                  how damaged. Average improvement: 150+ points."}
                            </p>
                            <div class="badges">
                                <span class="badge">{"98% Success Rate"}</span>
                                <span class="badge blue">{"Money-Back Guarantee"}</span>
                                <span class="badge">{"Free Analysis"}</span>
                            </div>
                        </div>
                        <div class="credit-card-stat">
                            <div class="muted">{"Average Improvement"}</div>
                            <div class="credit-card-figure">{"+150"}</div>
                            <div class="muted">{"Credit Points"}</div>
                            <div class="credit-card-link">{"View Credit Repair →"}</div>
                        </div>
                    </div>
                </div>

                <div class="cta-banner">
                    <h3>{"Ready to Secure Your Financial Future?"}</h3>
                    <p>{"Get a personalized assessment from our expert advisors"}</p>
                    <button class="light-button" onclick={open_with(None)}>
                        {"Schedule Your Free Consultation"}
                    </button>
                </div>
            </div>
        </section>
    }
}

const SERVICES_CSS: &str = r#"
.services-section { padding: 5rem 2rem; background: #fff; }
.service-group { margin-bottom: 5rem; scroll-margin-top: 6rem; }
.service-group h3 { font-size: 1.875rem; font-weight: 700; color: #111827; margin-bottom: 2rem; }
.service-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
.service-grid.four { grid-template-columns: repeat(4, 1fr); }
.service-card {
    background: linear-gradient(to bottom right, #f9fafb, #fff);
    border: 1px solid #e5e7eb;
    border-radius: 16px;
    padding: 1.5rem;
    cursor: pointer;
    opacity: 0;
    transform: translateY(3rem);
    transition: all 0.5s;
}
.service-card.green { background: linear-gradient(to bottom right, #f0fdf4, #fff); }
.service-card.visible { opacity: 1; transform: translateY(0); }
.service-card:hover { box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1); }
.service-card:hover h4 { color: #16a34a; }
.service-icon {
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 12px;
    background: linear-gradient(to bottom right, #4b5563, #16a34a);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    margin-bottom: 1rem;
}
.service-card h4 { font-size: 1.25rem; font-weight: 600; color: #111827; margin-bottom: 0.75rem; }
.service-card p { color: #4b5563; line-height: 1.6; }
.service-more { margin-top: 1rem; color: #16a34a; font-weight: 500; opacity: 0; transition: opacity 0.3s; }
.service-card:hover .service-more { opacity: 1; }
.credit-card {
    display: flex;
    justify-content: space-between;
    gap: 1.5rem;
    padding: 2rem;
    background: linear-gradient(to bottom right, #0f172a, #1e293b);
    border: 2px solid rgba(34, 197, 94, 0.2);
}
.credit-card h4 { color: #fff; font-size: 1.5rem; }
.credit-card p { color: #d1d5db; margin-bottom: 1rem; }
.credit-card-stat { text-align: right; }
.credit-card-figure { font-size: 2.25rem; font-weight: 700; color: #4ade80; }
.credit-card-link { margin-top: 1rem; color: #4ade80; font-weight: 500; }
.muted { color: #9ca3af; font-size: 0.875rem; }
@media (max-width: 1024px) {
    .service-grid, .service-grid.four { grid-template-columns: 1fr 1fr; }
    .credit-card { flex-direction: column; }
    .credit-card-stat { text-align: left; }
}
@media (max-width: 768px) {
    .service-grid, .service-grid.four { grid-template-columns: 1fr; }
}
"#;
