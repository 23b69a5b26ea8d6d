use web_sys::MouseEvent;
use yew::prelude::*;

use crate::scroll::{scroll_to_section, Section};

const NAV_ITEMS: [(Section, &str); 4] = [
    (Section::Home, "Home"),
    (Section::Services, "Services"),
    (Section::About, "About Us"),
    (Section::Contact, "Contact"),
];

const SERVICE_LINKS: [(&str, &str); 4] = [
    ("services", "All Services"),
    ("life-insurance", "Life Insurance"),
    ("investments", "Investment Solutions"),
    ("credit-repair", "Credit Repair"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub current_section: Section,
    pub is_scrolled: bool,
    pub on_open_assessment: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { current_section, is_scrolled, on_open_assessment } = props;
    let menu_open = use_state(|| false);
    let dropdown_open = use_state(|| false);

    // Jumping anywhere closes both menus
    let go_to = {
        let menu_open = menu_open.clone();
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |id: &'static str| {
            scroll_to_section(id);
            menu_open.set(false);
            dropdown_open.set(false);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let open_assessment = {
        let menu_open = menu_open.clone();
        let on_open_assessment = on_open_assessment.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_open_assessment.emit(());
        })
    };

    let show_dropdown = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: MouseEvent| dropdown_open.set(true))
    };
    let hide_dropdown = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: MouseEvent| dropdown_open.set(false))
    };
    let toggle_dropdown = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: MouseEvent| dropdown_open.set(!*dropdown_open))
    };

    let service_links = |class: &'static str| {
        html! {
            for SERVICE_LINKS.iter().map(|&(id, label)| {
                let go_to = go_to.clone();
                html! {
                    <button class={class} onclick={move |_| go_to.emit(id)}>{label}</button>
                }
            })
        }
    };

    let chevron = html! {
        <span class={classes!("nav-chevron", (*dropdown_open).then(|| "open"))}>{"▾"}</span>
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <style>{NAV_CSS}</style>
            <div class="nav-content">
                <div class="nav-logo" onclick={
                    let go_to = go_to.clone();
                    move |_| go_to.emit(Section::Home.id())
                }>
                    <span class="nav-logo-mark">{"🛡"}</span>
                    <span class="nav-logo-text">{"Safety Financial"}</span>
                </div>

                <div class="nav-right">
                    {
                        for NAV_ITEMS.iter().map(|&(section, label)| {
                            let active = *current_section == section;
                            let go_to = go_to.clone();
                            let link = html! {
                                <button
                                    class={classes!("nav-link", active.then(|| "active"))}
                                    onclick={move |_| go_to.emit(section.id())}
                                >
                                    {label}
                                    if section == Section::Services {
                                        {chevron.clone()}
                                    }
                                </button>
                            };
                            if section == Section::Services {
                                html! {
                                    <div class="nav-dropdown"
                                        onmouseenter={show_dropdown.clone()}
                                        onmouseleave={hide_dropdown.clone()}>
                                        {link}
                                        if *dropdown_open {
                                            <div class="nav-dropdown-menu">
                                                { service_links("nav-dropdown-item") }
                                            </div>
                                        }
                                    </div>
                                }
                            } else {
                                link
                            }
                        })
                    }
                    <button class="nav-cta" onclick={open_assessment.clone()}>
                        {"Free Assessment"}
                    </button>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    {
                        for NAV_ITEMS.iter().map(|&(section, label)| {
                            let active = *current_section == section;
                            if section == Section::Services {
                                html! {
                                    <div>
                                        <button
                                            class={classes!("mobile-link", active.then(|| "active"))}
                                            onclick={toggle_dropdown.clone()}
                                        >
                                            <span>{label}</span>
                                            {chevron.clone()}
                                        </button>
                                        if *dropdown_open {
                                            <div class="mobile-sublinks">
                                                { service_links("mobile-sublink") }
                                            </div>
                                        }
                                    </div>
                                }
                            } else {
                                let go_to = go_to.clone();
                                html! {
                                    <button
                                        class={classes!("mobile-link", active.then(|| "active"))}
                                        onclick={move |_| go_to.emit(section.id())}
                                    >
                                        {label}
                                    </button>
                                }
                            }
                        })
                    }
                    <button class="nav-cta mobile-cta" onclick={open_assessment}>
                        {"Free Assessment"}
                    </button>
                </div>
            }
        </nav>
    }
}

const NAV_CSS: &str = r#"
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 40;
    background: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(4px);
    transition: all 0.3s;
}
.top-nav.scrolled {
    background: #fff;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}
.nav-content {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 2rem;
    height: 5rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.nav-logo { display: flex; align-items: center; gap: 0.5rem; cursor: pointer; }
.nav-logo-mark {
    background: linear-gradient(to bottom right, #374151, #16a34a);
    padding: 0.5rem;
    border-radius: 8px;
}
.nav-logo-text {
    font-size: 1.5rem;
    font-weight: 700;
    background: linear-gradient(to right, #1f2937, #15803d);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.nav-right { display: flex; align-items: center; gap: 2rem; }
.nav-link {
    background: none;
    border: none;
    border-bottom: 2px solid transparent;
    color: #4b5563;
    font-size: 0.875rem;
    font-weight: 500;
    cursor: pointer;
    padding: 0.25rem 0;
}
.nav-link:hover, .nav-link.active { color: #16a34a; }
.nav-link.active { border-bottom-color: #16a34a; }
.nav-chevron { display: inline-block; margin-left: 0.25rem; transition: transform 0.2s; }
.nav-chevron.open { transform: rotate(180deg); }
.nav-dropdown { position: relative; }
.nav-dropdown-menu {
    position: absolute;
    top: 100%;
    left: 0;
    width: 14rem;
    margin-top: 0.5rem;
    padding: 0.5rem 0;
    background: #fff;
    border: 1px solid #e5e7eb;
    border-radius: 12px;
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    animation: nav-fade-in 0.2s ease-out;
}
.nav-dropdown-item, .mobile-sublink {
    display: block;
    width: 100%;
    text-align: left;
    padding: 0.625rem 1rem;
    background: none;
    border: none;
    font-size: 0.875rem;
    color: #374151;
    cursor: pointer;
}
.nav-dropdown-item:hover, .mobile-sublink:hover { background: #f0fdf4; color: #16a34a; }
.nav-cta {
    background: linear-gradient(to right, #374151, #16a34a);
    color: #fff;
    border: none;
    padding: 0.625rem 1.5rem;
    border-radius: 9999px;
    font-weight: 500;
    cursor: pointer;
}
.burger-menu { display: none; background: none; border: none; font-size: 1.5rem; color: #4b5563; cursor: pointer; }
.mobile-menu { background: #fff; border-top: 1px solid #f3f4f6; padding: 1rem; }
.mobile-link {
    display: flex;
    justify-content: space-between;
    width: 100%;
    text-align: left;
    padding: 0.5rem 1rem;
    background: none;
    border: none;
    border-radius: 8px;
    color: #4b5563;
    cursor: pointer;
}
.mobile-link.active { background: #f0fdf4; color: #16a34a; font-weight: 500; }
.mobile-sublinks { margin: 0.5rem 0 0 1rem; }
.mobile-cta { width: 100%; margin-top: 0.75rem; padding: 0.75rem 1.5rem; }
@media (max-width: 768px) {
    .nav-right { display: none; }
    .burger-menu { display: block; }
}
@keyframes nav-fade-in {
    from { opacity: 0; transform: translateY(-10px); }
    to { opacity: 1; transform: translateY(0); }
}
"#;
