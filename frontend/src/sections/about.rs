use yew::prelude::*;

use crate::scroll::{use_reveal, Section};

const STORY: [&str; 3] = [
    "At Safety Financial, we understand that financial planning is about more than just numbers. It's about \
     protecting your loved ones and achieving your dreams. For over 15 years, we've been helping Canadian \
     families navigate the complex world of insurance and investments.",
    "Our team of licensed advisors specializes in creating comprehensive financial strategies that provide \
     peace of mind today and security for tomorrow. We take the time to understand your unique situation, \
     goals, and concerns to develop personalized solutions that truly fit your needs.",
    "Whether you're looking to protect your family with life insurance, save for retirement, or build wealth \
     through smart investments, we're here to guide you every step of the way.",
];

const FIGURES: [(&str, &str); 4] = [
    ("15+", "Years Experience"),
    ("1,500+", "Happy Clients"),
    ("$2M+", "Coverage Secured"),
    ("98%", "Client Satisfaction"),
];

const VALUES: [(&str, &str, &str); 4] = [
    (
        "🛡",
        "Protection First",
        "Your family's security is our top priority. We help you build comprehensive protection plans.",
    ),
    ("👥", "Client-Centered", "Personalized solutions tailored to your unique needs and financial goals."),
    (
        "🎯",
        "Goal Focused",
        "Strategic planning to help you achieve your short-term and long-term financial objectives.",
    ),
    (
        "🏅",
        "Expert Guidance",
        "Licensed advisors with deep knowledge of Canadian financial regulations and products.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    html! {
        <section id={Section::About.id()} ref={node} class={classes!("about-section", visible.then(|| "visible"))}>
            <style>{ABOUT_CSS}</style>
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"About "}<span class="gradient-text">{"Safety Financial"}</span></h2>
                    <p>{"Trusted Canadian advisors helping families and individuals secure their financial future"}</p>
                </div>

                <div class="about-grid">
                    <div class="about-story">
                        <h3>{"Your Partner in Financial Security"}</h3>
                        { for STORY.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    </div>
                    <div class="about-figures">
                        { for FIGURES.iter().enumerate().map(|(i, (figure, label))| html! {
                            <div class={classes!("about-figure", (i % 2 == 1).then(|| "offset"))}>
                                <div class="about-figure-value">{*figure}</div>
                                <div>{*label}</div>
                            </div>
                        }) }
                    </div>
                </div>

                <h3 class="values-heading">{"Our Core Values"}</h3>
                <div class="values-grid">
                    { for VALUES.iter().enumerate().map(|(i, (icon, title, body))| html! {
                        <div class="value-card" style={format!("transition-delay: {}ms;", i * 100)}>
                            <div class="service-icon">{*icon}</div>
                            <h4>{*title}</h4>
                            <p>{*body}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

const ABOUT_CSS: &str = r#"
.about-section { padding: 5rem 2rem; background: linear-gradient(to bottom right, #f9fafb, #f0fdf4); }
.about-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; margin-bottom: 5rem; }
.about-story h3 { font-size: 1.875rem; font-weight: 700; color: #111827; margin-bottom: 1.5rem; }
.about-story p { color: #374151; line-height: 1.6; margin-bottom: 1rem; }
.about-figures { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.about-figure { background: #fff; border-radius: 16px; padding: 1.5rem; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); color: #374151; }
.about-figure.offset { margin-top: 2rem; }
.about-figure-value { font-size: 2.25rem; font-weight: 700; color: #16a34a; margin-bottom: 0.5rem; }
.values-heading { font-size: 1.875rem; font-weight: 700; color: #111827; text-align: center; margin-bottom: 3rem; }
.values-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; }
.value-card { background: #fff; border-radius: 16px; padding: 1.5rem; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); transition: all 0.5s; }
.value-card h4 { font-size: 1.25rem; font-weight: 600; color: #111827; margin-bottom: 0.75rem; }
.value-card p { color: #4b5563; line-height: 1.6; }
.about-section .about-story, .about-section .about-figures, .about-section .value-card { opacity: 0; transform: translateY(3rem); transition: all 1s; }
.about-section.visible .about-story, .about-section.visible .about-figures, .about-section.visible .value-card { opacity: 1; transform: translateY(0); }
@media (max-width: 1024px) {
    .about-grid { grid-template-columns: 1fr; }
    .values-grid { grid-template-columns: 1fr 1fr; }
}
"#;
