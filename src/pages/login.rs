use yew::prelude::*;
use yew_router::components::Link;

use crate::components::brand_header::BrandHeader;
use crate::pages::signup::AUTH_CSS;
use crate::Route;

#[function_component(Login)]
pub fn login() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="auth-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <BrandHeader />
            <div class="auth-card">
                <h1 class="auth-title">{"Welcome back"}</h1>
                <p class="auth-tagline">{"Your calm inbox is waiting."}</p>
                <div class="auth-fields">
                    <input type="email" placeholder="Email" aria-label="Email" />
                    <input type="password" placeholder="Password" aria-label="Password" />
                </div>
                <div class="auth-actions">
                    <Link<Route> to={Route::Dashboard} classes="forward-link">
                        <button class="auth-primary">
                            <i class="fas fa-right-to-bracket"></i>
                            {"Login"}
                        </button>
                    </Link<Route>>
                    <Link<Route> to={Route::Signup} classes="forward-link">
                        <button class="auth-secondary">
                            <i class="fas fa-user-plus"></i>
                            {"Create Free Account"}
                        </button>
                    </Link<Route>>
                </div>
                <p class="auth-consent">
                    {"No inbox access is ever taken without your permission. You stay in control at every step."}
                </p>
            </div>
            <style>{AUTH_CSS}</style>
        </div>
    }
}
