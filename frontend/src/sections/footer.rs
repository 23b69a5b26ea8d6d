use chrono::{Datelike, Local};
use yew::prelude::*;

const SERVICE_LINKS: [&str; 9] = [
    "Life Insurance",
    "Universal Life",
    "Term Insurance",
    "Critical Illness",
    "Disability Insurance",
    "TFSA",
    "RRSP",
    "RESP",
    "Segregated Funds",
];
const COMPANY_LINKS: [&str; 5] = ["About Us", "Our Team", "Careers", "Blog", "News"];
const RESOURCE_LINKS: [&str; 5] = ["FAQ", "Financial Calculators", "Learning Center", "Client Portal", "Contact"];

fn link_column(title: &'static str, links: &[&'static str]) -> Html {
    html! {
        <div>
            <h4>{title}</h4>
            <ul>
                { for links.iter().map(|link| html! { <li><a href="#">{*link}</a></li> }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <style>{FOOTER_CSS}</style>
            <div class="section-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">{"🛡 Safety Financial"}</div>
                        <p>
                            {"Your trusted partner for comprehensive life insurance and investment solutions across Canada. \
                              Building secure financial futures since 2008."}
                        </p>
                        <div class="footer-social">
                            <a href="#" aria-label="Facebook">{"f"}</a>
                            <a href="#" aria-label="Twitter">{"𝕏"}</a>
                            <a href="#" aria-label="LinkedIn">{"in"}</a>
                            <a href="#" aria-label="Instagram">{"◎"}</a>
                        </div>
                    </div>
                    { link_column("Services", &SERVICE_LINKS) }
                    { link_column("Company", &COMPANY_LINKS) }
                    { link_column("Resources", &RESOURCE_LINKS) }
                </div>
                <div class="footer-bottom">
                    <div class="footer-legal">
                        <span>{format!("© {} Safety Financial. All rights reserved.", year)}</span>
                        <span class="footer-policies">
                            <a href="#">{"Privacy Policy"}</a>
                            <a href="#">{"Terms of Service"}</a>
                            <a href="#">{"Accessibility"}</a>
                        </span>
                    </div>
                    <p class="footer-disclaimer">
                        {"Safety Financial is a registered trade name. All insurance products and investment services are \
                          provided through licensed advisors in accordance with Canadian regulations."}
                    </p>
                </div>
            </div>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
.site-footer { background: linear-gradient(to bottom right, #1f2937, #111827); color: #fff; padding: 3rem 2rem; }
.footer-grid { display: grid; grid-template-columns: 2fr 1fr 1fr 1fr; gap: 2rem; margin-bottom: 2rem; }
.footer-logo { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }
.footer-brand p { color: #9ca3af; line-height: 1.6; margin-bottom: 1.5rem; }
.footer-social { display: flex; gap: 1rem; }
.footer-social a { width: 2.5rem; height: 2.5rem; border-radius: 8px; background: #374151; color: #fff; display: flex; align-items: center; justify-content: center; text-decoration: none; }
.footer-social a:hover { background: #16a34a; }
.site-footer h4 { font-weight: 600; font-size: 1.125rem; margin-bottom: 1rem; }
.site-footer ul { list-style: none; padding: 0; }
.site-footer li { margin-bottom: 0.5rem; }
.site-footer a { color: #9ca3af; text-decoration: none; }
.site-footer a:hover { color: #4ade80; }
.footer-bottom { border-top: 1px solid #374151; padding-top: 2rem; }
.footer-legal { display: flex; justify-content: space-between; flex-wrap: wrap; gap: 1rem; color: #9ca3af; font-size: 0.875rem; }
.footer-policies { display: flex; gap: 1.5rem; }
.footer-disclaimer { color: #6b7280; font-size: 0.75rem; margin-top: 1rem; }
@media (max-width: 1024px) {
    .footer-grid { grid-template-columns: 1fr 1fr; }
}
"#;
