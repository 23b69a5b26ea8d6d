use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::scroll::use_reveal;
use crate::testimonials::{fetch_testimonials, split_featured, Testimonial};
use crate::SiteContext;

fn stars() -> Html {
    html! {
        <div class="stars">{ for (0..5).map(|_| html! { <span>{"★"}</span> }) }</div>
    }
}

fn location(testimonial: &Testimonial) -> Html {
    match testimonial.location() {
        Some(location) => html! { <div class="testimonial-location">{location}</div> },
        None => html! {},
    }
}

fn featured_card(testimonial: &Testimonial, index: usize) -> Html {
    html! {
        <div key={testimonial.id.clone()} class="testimonial featured"
            style={format!("transition-delay: {}ms;", index * 150)}>
            <div class="testimonial-top">
                <span class="quote-mark">{"“"}</span>
                {stars()}
            </div>
            <div class="score-change">
                <div>
                    <div class="score-label">{"Starting Score"}</div>
                    <div class="score before">{testimonial.starting_score}</div>
                </div>
                <span class="score-arrow">{"↗"}</span>
                <div>
                    <div class="score-label">{"Ending Score"}</div>
                    <div class="score after">{testimonial.ending_score}</div>
                </div>
            </div>
            <div class="score-summary">
                {format!("+{} points in {} months", testimonial.point_gain(), testimonial.timeframe_months)}
            </div>
            <p class="testimonial-text">{format!("\"{}\"", testimonial.testimonial_text)}</p>
            <div class="testimonial-author">
                <div class="testimonial-name">{&testimonial.client_name}</div>
                {location(testimonial)}
            </div>
        </div>
    }
}

fn regular_card(testimonial: &Testimonial, delay_index: usize) -> Html {
    html! {
        <div key={testimonial.id.clone()} class="testimonial"
            style={format!("transition-delay: {}ms;", delay_index * 100)}>
            <div class="testimonial-top">
                {stars()}
                <span class="points">{format!("+{} pts", testimonial.point_gain())}</span>
            </div>
            <div class="score-row">
                <div><div class="score-label">{"Before"}</div><div class="score before">{testimonial.starting_score}</div></div>
                <span class="score-arrow">{"→"}</span>
                <div><div class="score-label">{"After"}</div><div class="score after">{testimonial.ending_score}</div></div>
                <div><div class="score-label">{"Time"}</div><div class="score">{format!("{}m", testimonial.timeframe_months)}</div></div>
            </div>
            <p class="testimonial-text small">{format!("\"{}\"", testimonial.testimonial_text)}</p>
            <div class="testimonial-author">
                <div class="testimonial-name">{&testimonial.client_name}</div>
                {location(testimonial)}
            </div>
        </div>
    }
}

/// Client success stories. Renders nothing until rows arrive, or if there are none.
#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let context = use_context::<SiteContext>();
    let rows = use_state(|| None::<Vec<Testimonial>>);
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    {
        let rows = rows.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(context) = context {
                    spawn_local(async move {
                        match fetch_testimonials(&context.client).await {
                            Ok(fetched) => rows.set(Some(fetched)),
                            Err(e) => {
                                error!("Error fetching testimonials: {}", e);
                                rows.set(Some(Vec::new()));
                            }
                        }
                    });
                }
                || ()
            },
            (),
        );
    }

    let testimonials = match &*rows {
        Some(rows) if !rows.is_empty() => rows.clone(),
        _ => return html! {},
    };
    let (featured, regular) = split_featured(testimonials);
    let offset = featured.len();

    html! {
        <div id="testimonials" ref={node} class={classes!("testimonials", visible.then(|| "visible"))}>
            <style>{TESTIMONIALS_CSS}</style>
            <div class="section-heading">
                <h2>{"Real Results from "}<span class="gradient-text">{"Real People"}</span></h2>
                <p>{"See how we've helped thousands of Canadians transform their credit and change their lives"}</p>
            </div>

            if !featured.is_empty() {
                <div class="testimonial-grid">
                    { for featured.iter().enumerate().map(|(i, t)| featured_card(t, i)) }
                </div>
            }
            if !regular.is_empty() {
                <div class="testimonial-grid">
                    { for regular.iter().enumerate().map(|(i, t)| regular_card(t, offset + i)) }
                </div>
            }

            <div class="testimonials-cta">
                <h3>{"Ready to Write Your Success Story?"}</h3>
                <p>{"Join thousands of Canadians who have transformed their credit with Safety Financial"}</p>
                <p class="small">{"Average improvement: 150+ points • 98% success rate • Money-back guarantee"}</p>
            </div>
        </div>
    }
}

const TESTIMONIALS_CSS: &str = r#"
.testimonials { background: #fff; color: #111827; border-radius: 24px; padding: 3rem 2rem; margin-top: 4rem; }
.testimonials .testimonial, .testimonials .testimonials-cta { opacity: 0; transform: translateY(3rem); transition: all 1s; }
.testimonials.visible .testimonial, .testimonials.visible .testimonials-cta { opacity: 1; transform: translateY(0); }
.testimonial-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; margin-bottom: 3rem; }
.testimonial { background: #f9fafb; border: 1px solid #e5e7eb; border-radius: 12px; padding: 1.5rem; }
.testimonial.featured { background: linear-gradient(to bottom right, #f0fdf4, #eff6ff); border: 2px solid #bbf7d0; border-radius: 16px; padding: 2rem; }
.testimonial-top { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1.5rem; }
.quote-mark { font-size: 2.5rem; color: #16a34a; opacity: 0.5; }
.stars { color: #eab308; }
.points { color: #16a34a; font-weight: 600; font-size: 0.875rem; }
.score-change, .score-row { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
.score-row { background: #fff; border-radius: 8px; padding: 0.75rem; text-align: center; }
.score-label { font-size: 0.75rem; color: #4b5563; margin-bottom: 0.25rem; }
.score { font-size: 1.5rem; font-weight: 700; color: #374151; }
.score.before { color: #dc2626; }
.score.after { color: #16a34a; }
.score-arrow { color: #16a34a; font-size: 1.5rem; }
.score-summary { background: #fff; border-radius: 8px; padding: 0.5rem 0.75rem; text-align: center; font-size: 0.875rem; font-weight: 600; color: #374151; margin-bottom: 1.5rem; }
.testimonial-text { color: #374151; line-height: 1.6; font-style: italic; margin-bottom: 1.5rem; }
.testimonial-text.small { font-size: 0.875rem; font-style: normal; }
.testimonial-author { border-top: 1px solid #e5e7eb; padding-top: 1rem; }
.testimonial-name { font-weight: 600; color: #111827; }
.testimonial-location { font-size: 0.875rem; color: #4b5563; }
.testimonials-cta { background: linear-gradient(to right, #16a34a, #2563eb); border-radius: 24px; padding: 2rem; text-align: center; color: #fff; }
.testimonials-cta .small { font-size: 0.875rem; opacity: 0.8; }
@media (max-width: 1024px) {
    .testimonial-grid { grid-template-columns: 1fr; }
}
"#;
