use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{appointments::Appointments, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/appointments")]
    Appointments,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::Appointments => html! { <Appointments /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
