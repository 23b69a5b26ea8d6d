use yew::prelude::*;

use crate::scroll::{scroll_to_section, Section};

const BENEFITS: [&str; 4] = [
    "Personalized Financial Planning",
    "Expert Canadian Advisors",
    "Comprehensive Coverage Options",
    "Professional Credit Repair Services",
];

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("$2M+", "Coverage Secured"),
    ("1,500+", "Satisfied Clients"),
    ("15+ Years", "Industry Experience"),
];

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_open_assessment: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let on_open = {
        let on_open_assessment = props.on_open_assessment.clone();
        Callback::from(move |_: MouseEvent| on_open_assessment.emit(()))
    };

    html! {
        <section id={Section::Home.id()} class="hero-section">
            <style>{HERO_CSS}</style>
            <div class="section-inner hero-grid">
                <div class="hero-copy">
                    <span class="pill">{"Trusted Canadian Financial Services"}</span>
                    <h1>
                        {"Secure Your "}
                        <span class="gradient-text">{"Financial Future"}</span>
                    </h1>
                    <p class="hero-lead">
                        {"Comprehensive life insurance, investment solutions, and credit repair services tailored for Canadians. \
                          Protect what matters most, build lasting wealth, and transform your credit score."}
                    </p>
                    <ul class="hero-benefits">
                        { for BENEFITS.iter().enumerate().map(|(i, benefit)| html! {
                            <li style={format!("animation-delay: {:.1}s;", 0.2 + i as f64 * 0.1)}>
                                <span class="check">{"✓"}</span>
                                {*benefit}
                            </li>
                        }) }
                    </ul>
                    <div class="hero-actions">
                        <button class="primary-button" onclick={on_open}>
                            {"Start Your Free Assessment →"}
                        </button>
                        <button class="outline-button" onclick={|_| scroll_to_section(Section::Services.id())}>
                            {"Explore Services"}
                        </button>
                    </div>
                </div>

                <div class="hero-card">
                    { for HIGHLIGHTS.iter().map(|(figure, label)| html! {
                        <div class="hero-stat">
                            <div class="hero-stat-figure">{*figure}</div>
                            <div class="hero-stat-label">{*label}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

const HERO_CSS: &str = r#"
.hero-section { padding: 8rem 2rem 5rem; min-height: 100vh; display: flex; align-items: center; }
.hero-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
.hero-copy { animation: hero-slide-in 1s ease-out both; }
.hero-copy h1 { font-size: 3.75rem; font-weight: 700; color: #111827; line-height: 1.1; margin: 1rem 0 1.5rem; }
.hero-lead { font-size: 1.25rem; color: #4b5563; line-height: 1.6; margin-bottom: 2rem; }
.hero-benefits { list-style: none; padding: 0; margin-bottom: 2.5rem; }
.hero-benefits li { display: flex; gap: 0.75rem; margin-bottom: 0.75rem; color: #374151; animation: fade-in-up 0.6s ease-out both; }
.hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; }
.hero-card {
    background: #fff;
    border-radius: 24px;
    padding: 2rem;
    border: 1px solid #f3f4f6;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    transform: rotate(1deg);
    animation: hero-slide-in 1s ease-out 0.3s both;
}
.hero-stat { background: linear-gradient(to bottom right, #f9fafb, #f0fdf4); border-radius: 16px; padding: 1.5rem; margin-bottom: 1.5rem; }
.hero-stat:last-child { margin-bottom: 0; }
.hero-stat-figure { font-size: 1.875rem; font-weight: 700; color: #111827; margin-bottom: 0.5rem; }
.hero-stat-label { color: #4b5563; }
@media (max-width: 1024px) {
    .hero-grid { grid-template-columns: 1fr; }
}
@keyframes hero-slide-in {
    from { opacity: 0; transform: translateX(-3rem); }
    to { opacity: 1; transform: translateX(0); }
}
"#;
