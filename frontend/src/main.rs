use log::{error, info, warn, Level};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod error;
mod forms;
mod scroll;
mod supabase;
mod testimonials;
mod wizard;
mod components {
    pub mod nav;
    pub mod wizard_modal;
}
mod pages {
    pub mod home;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod credit_repair;
    pub mod footer;
    pub mod hero;
    pub mod services;
    pub mod testimonials;
}

use pages::home::Home;
use supabase::SupabaseClient;
use wizard::QuestionCatalog;

/// Shared by every section: the question catalog and the data store client.
#[derive(Clone, PartialEq)]
pub struct SiteContext {
    pub catalog: Rc<QuestionCatalog>,
    pub client: SupabaseClient,
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    context: SiteContext,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<SiteContext> context={props.context.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SiteContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let catalog = match QuestionCatalog::builtin() {
        Ok(catalog) => Rc::new(catalog),
        Err(e) => {
            error!("Question catalog is invalid: {}", e);
            return;
        }
    };

    let client = SupabaseClient::from_config();
    if !client.is_configured() {
        warn!("SUPABASE_URL or SUPABASE_ANON_KEY not set, submissions will fail");
    }

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps {
        context: SiteContext { catalog, client },
    })
    .render();
}
