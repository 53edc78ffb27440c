use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session::Session;

#[function_component(Header)]
pub fn header() -> Html {
    let session = use_context::<Session>().unwrap_or_default();
    let greeting = session
        .identity()
        .ok()
        .and_then(|client| client.name.clone())
        .map(|name| format!("Hi, {}", name));

    html! {
        <header class="header">
            <div class="container">
                <h1>{ "Barbershop" }</h1>
                <nav>
                    <Link<Route> to={Route::Appointments}>{ "My Appointments" }</Link<Route>>
                </nav>
                if let Some(greeting) = greeting {
                    <span class="greeting">{ greeting }</span>
                }
            </div>
        </header>
    }
}
