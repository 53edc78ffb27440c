mod components;
mod config;
mod error;
mod format;
mod pages;
mod router;
mod services;
mod session;
mod state;
#[cfg(test)]
mod testing;

use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::config::FrontendConfig;
use crate::router::{switch, Route};
use crate::session::Session;

#[function_component(App)]
fn app() -> Html {
    // identity and config are resolved once and shared through contexts
    let config = use_memo((), |_| FrontendConfig::from_build_env());
    let session = use_memo((), |_| Session::load());

    html! {
        <ContextProvider<FrontendConfig> context={(*config).clone()}>
            <ContextProvider<Session> context={(*session).clone()}>
                <BrowserRouter>
                    <div id="app">
                        <components::header::Header />
                        <yew_router::Switch<Route> render={switch} />
                    </div>
                </BrowserRouter>
            </ContextProvider<Session>>
        </ContextProvider<FrontendConfig>>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
