use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod motion {
    pub mod browser;
    pub mod engine;
    pub mod hooks;
    pub mod interpolate;
    pub mod range;
    pub mod reveal;
}
mod components {
    pub mod banner;
    pub mod benefits;
    pub mod footer;
    pub mod hero;
    pub mod nav;
    pub mod product_card;
    pub mod reveal;
    pub mod stats;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use content::SiteContent;
use pages::landing::Landing;

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
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let site = use_memo(
        |_| {
            content::load().map(Rc::new).map_err(|e| {
                error!("Failed to load site content: {}", e);
                e
            })
        },
        (),
    );

    let site = match &*site {
        Ok(site) => site.clone(),
        Err(_) => {
            return html! {
                <div class="content-error">
                    {"Sorry, this page could not be loaded. Please call us at the farm."}
                </div>
            };
        }
    };

    html! {
        <ContextProvider<Rc<SiteContent>> context={site.clone()}>
            <BrowserRouter>
                <Nav brand={site.brand.clone()} links={site.nav_links.clone()} />
                <Switch<Route> render={switch} />
            </BrowserRouter>
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }

                body {
                    margin: 0;
                    background: #052e16;
                    font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
                    -webkit-font-smoothing: antialiased;
                }

                ::selection {
                    background: #a3e635;
                    color: #052e16;
                }

                .accent {
                    color: #a3e635;
                }

                .landing-page {
                    min-height: 100vh;
                    background: #052e16;
                }
                "#}
            </style>
        </ContextProvider<Rc<SiteContent>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
