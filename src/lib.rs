//! InboxBully marketing frontend: the landing page with its interactive
//! before/after demo and feature dialogs, plus the signup, login and
//! dashboard placeholder routes.

use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod pages;
pub mod showcase;

use pages::dashboard::Dashboard;
use pages::landing::Landing;
use pages::login::Login;
use pages::signup::Signup;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/signup")]
    Signup,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::Signup => html! { <Signup /> },
        Route::Login => html! { <Login /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
