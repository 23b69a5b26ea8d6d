use yew::prelude::*;

use crate::scroll::{use_reveal, Section};
use crate::sections::testimonials::Testimonials;

const STATISTICS: [(&str, &str); 4] = [
    ("150+", "Average Point Increase"),
    ("6-12", "Months Average Timeline"),
    ("98%", "Success Rate"),
    ("5,000+", "Clients Helped"),
];

const PROBLEMS: [(&str, &str); 6] = [
    ("Late Payments", "Dispute & removal strategies"),
    ("Collections", "Negotiate & validate debts"),
    ("Charge-Offs", "Legal dispute process"),
    ("Bankruptcies", "Rebuild credit profile"),
    ("High Utilization", "Optimization strategies"),
    ("Credit Report Errors", "Bureau dispute system"),
];

const REASONS: [(&str, &str); 3] = [
    (
        "No Credit Too Damaged",
        "Whether you've faced bankruptcy, foreclosure, collections, or identity theft, we've successfully \
         helped clients in your exact situation. We specialize in the most challenging cases.",
    ),
    (
        "Proven Results",
        "Our clients see an average credit score increase of 150+ points. We use advanced dispute strategies, \
         legal compliance, and proven negotiation tactics to deliver real results.",
    ),
    (
        "Complete Transparency",
        "No hidden fees, no false promises. We provide a detailed action plan upfront and keep you updated \
         every step of the way through your personal client portal.",
    ),
];

const PROCESS: [(&str, &str); 4] = [
    ("Free Credit Analysis", "We review your complete credit report and identify all negative items"),
    ("Personalized Strategy", "Custom action plan targeting your specific credit issues"),
    ("Active Disputes & Negotiations", "We handle all communication with bureaus and creditors"),
    ("Credit Rebuilding", "Strategies to maintain and continue improving your score"),
];

const INCLUDED: [&str; 6] = [
    "Free credit report analysis",
    "Personalized repair strategy",
    "Direct bureau disputes",
    "Creditor negotiations",
    "Legal compliance guarantee",
    "24/7 client portal access",
];

#[derive(Properties, PartialEq)]
struct ProblemCardProps {
    problem: &'static str,
    solution: &'static str,
    index: usize,
}

#[function_component(ProblemCard)]
fn problem_card(props: &ProblemCardProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    html! {
        <div
            ref={node}
            class={classes!("problem-card", visible.then(|| "visible"))}
            style={format!("transition-delay: {}ms;", props.index * 100)}
        >
            <span class="problem-icon">{"✕"}</span>
            <div>
                <div class="problem-name">{props.problem}</div>
                <div class="problem-fix">{props.solution}</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CreditRepairProps {
    pub on_open_assessment: Callback<()>,
}

#[function_component(CreditRepair)]
pub fn credit_repair(props: &CreditRepairProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    let on_open = {
        let on_open_assessment = props.on_open_assessment.clone();
        Callback::from(move |_: MouseEvent| on_open_assessment.emit(()))
    };

    html! {
        <section
            id={Section::CreditRepair.id()}
            ref={node}
            class={classes!("credit-section", visible.then(|| "visible"))}
        >
            <style>{CREDIT_CSS}</style>
            <div class="section-inner">
                <div class="section-heading reveal">
                    <span class="pill dark">{"Transform Your Financial Future"}</span>
                    <h2>
                        {"Professional "}
                        <span class="gradient-text bright">{"Credit Repair"}</span>
                        {" Solutions"}
                    </h2>
                    <p>
                        {"No matter how damaged your credit is, we can help. Our proven process has helped thousands of \
                          Canadians rebuild their credit and unlock financial opportunities."}
                    </p>
                </div>

                <div class="stat-grid reveal">
                    { for STATISTICS.iter().map(|(figure, label)| html! {
                        <div class="glass stat">
                            <div class="stat-figure">{*figure}</div>
                            <div class="stat-label">{*label}</div>
                        </div>
                    }) }
                </div>

                <div class="two-column">
                    <div class="reveal">
                        <h3>{"Why Choose Our Credit Repair Service?"}</h3>
                        { for REASONS.iter().map(|(title, body)| html! {
                            <div class="glass reason">
                                <h4>{*title}</h4>
                                <p>{*body}</p>
                            </div>
                        }) }
                    </div>
                    <div class="reveal">
                        <h3>{"Credit Problems We Fix"}</h3>
                        <div class="problem-grid">
                            { for PROBLEMS.iter().enumerate().map(|(index, (problem, solution))| html! {
                                <ProblemCard problem={*problem} solution={*solution} {index} />
                            }) }
                        </div>
                    </div>
                </div>

                <div class="process-banner reveal">
                    <div>
                        <h3>{"Our 4-Step Credit Repair Process"}</h3>
                        <ol class="process-steps">
                            { for PROCESS.iter().enumerate().map(|(i, (title, body))| html! {
                                <li>
                                    <span class="process-number">{i + 1}</span>
                                    <div>
                                        <div class="process-title">{*title}</div>
                                        <div class="process-body">{*body}</div>
                                    </div>
                                </li>
                            }) }
                        </ol>
                    </div>
                    <div class="guarantee">
                        <h4>{"100% Money-Back Guarantee"}</h4>
                        <p>
                            {"If we don't remove at least one negative item from your credit report, you get a full refund. \
                              No questions asked."}
                        </p>
                        <button class="light-button" onclick={on_open.clone()}>{"Get Started Free"}</button>
                    </div>
                </div>

                <div class="glass included reveal">
                    <div>
                        <h3>{"What's Included"}</h3>
                        <ul class="included-list">
                            { for INCLUDED.iter().map(|item| html! { <li><span class="check">{"✓"}</span>{*item}</li> }) }
                        </ul>
                        <div class="offer">
                            <div class="offer-title">{"Limited Time: Free Credit Consultation"}</div>
                            <p>
                                {"Get a comprehensive credit analysis (worth $199) absolutely free. Discover exactly what's \
                                  holding your score back and how we can fix it."}
                            </p>
                        </div>
                    </div>
                    <div class="transform-card">
                        <h4>{"Transform Your Credit Score Today"}</h4>
                        <div class="transform-row">
                            <span>{"Current Average Credit:"}</span>
                            <span class="score before">{"580"}</span>
                        </div>
                        <div class="transform-row">
                            <span>{"After Credit Repair:"}</span>
                            <span class="score after">{"730+"}</span>
                        </div>
                        <button class="primary-button wide" onclick={on_open}>{"Start Your Free Assessment →"}</button>
                        <p class="fine-print">{"No credit card required • Takes only 2 minutes"}</p>
                    </div>
                </div>

                <Testimonials />
            </div>
        </section>
    }
}

const CREDIT_CSS: &str = r#"
.credit-section { padding: 5rem 2rem; background: linear-gradient(to bottom right, #0f172a, #1e293b, #0f172a); color: #fff; }
.credit-section .section-heading p { color: #d1d5db; }
.credit-section .reveal { opacity: 0; transform: translateY(3rem); transition: all 1s; }
.credit-section.visible .reveal { opacity: 1; transform: translateY(0); }
.pill.dark { background: rgba(34, 197, 94, 0.2); color: #4ade80; border: 1px solid rgba(34, 197, 94, 0.3); }
.gradient-text.bright { background-image: linear-gradient(to right, #4ade80, #60a5fa); }
.glass { background: rgba(255, 255, 255, 0.05); border: 1px solid rgba(255, 255, 255, 0.1); border-radius: 16px; padding: 1.5rem; }
.stat-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; margin-bottom: 4rem; }
.stat { text-align: center; }
.stat-figure { font-size: 2.25rem; font-weight: 700; color: #4ade80; margin-bottom: 0.5rem; }
.stat-label { color: #9ca3af; }
.two-column { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; margin-bottom: 4rem; }
.two-column h3, .process-banner h3, .included h3 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; }
.reason { margin-bottom: 1.5rem; }
.reason h4 { font-size: 1.25rem; color: #4ade80; margin-bottom: 0.75rem; }
.reason p { color: #d1d5db; line-height: 1.6; }
.problem-grid { display: grid; gap: 1rem; }
.problem-card {
    display: flex;
    gap: 1rem;
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 12px;
    padding: 1.25rem;
    opacity: 0;
    transform: translateX(3rem);
    transition: all 0.3s;
}
.problem-card.visible { opacity: 1; transform: translateX(0); }
.problem-icon { color: #f87171; }
.problem-name { font-weight: 600; margin-bottom: 0.25rem; }
.problem-fix { font-size: 0.875rem; color: #9ca3af; }
.process-banner {
    display: grid;
    grid-template-columns: 2fr 1fr;
    gap: 2rem;
    background: linear-gradient(to bottom right, #16a34a, #2563eb);
    border-radius: 24px;
    padding: 3rem;
    margin-bottom: 4rem;
}
.process-steps { list-style: none; padding: 0; }
.process-steps li { display: flex; gap: 1rem; margin-bottom: 0.75rem; }
.process-number { width: 2rem; height: 2rem; flex-shrink: 0; border-radius: 50%; background: #fff; color: #16a34a; font-weight: 700; text-align: center; line-height: 2rem; }
.process-title { font-weight: 600; }
.process-body { font-size: 0.875rem; opacity: 0.8; }
.guarantee { background: rgba(255, 255, 255, 0.1); border: 1px solid rgba(255, 255, 255, 0.2); border-radius: 16px; padding: 1.5rem; }
.guarantee h4 { font-size: 1.5rem; font-weight: 700; margin-bottom: 0.75rem; }
.guarantee p { opacity: 0.9; margin-bottom: 1.5rem; }
.included { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; padding: 3rem; border-radius: 24px; }
.included-list { list-style: none; padding: 0; display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; color: #d1d5db; }
.offer { margin-top: 2rem; padding: 1.5rem; background: rgba(34, 197, 94, 0.1); border: 1px solid rgba(34, 197, 94, 0.2); border-radius: 12px; }
.offer-title { font-weight: 600; color: #4ade80; margin-bottom: 0.5rem; }
.offer p { color: #d1d5db; font-size: 0.875rem; }
.transform-card { background: rgba(255, 255, 255, 0.08); border: 1px solid rgba(255, 255, 255, 0.2); border-radius: 16px; padding: 2rem; }
.transform-card h4 { font-size: 1.5rem; font-weight: 700; text-align: center; margin-bottom: 1.5rem; }
.transform-row { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; color: #9ca3af; }
.transform-row .score { font-size: 1.5rem; font-weight: 700; }
.transform-row .before { color: #f87171; }
.transform-row .after { color: #4ade80; }
.primary-button.wide { width: 100%; }
.fine-print { text-align: center; font-size: 0.75rem; color: #9ca3af; margin-top: 1rem; }
@media (max-width: 1024px) {
    .stat-grid { grid-template-columns: 1fr 1fr; }
    .two-column, .process-banner, .included { grid-template-columns: 1fr; }
}
"#;
