use yew::prelude::*;
use yew_router::components::Link;

use crate::components::brand_header::BrandHeader;
use crate::Route;

/// Stand-in screen behind the signup and login flows until the real
/// dashboard ships.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
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
        <div class="dashboard-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <BrandHeader />
            <div class="dashboard-card">
                <h1 class="dashboard-title">{"Dashboard Placeholder"}</h1>
                <p class="dashboard-tagline">{"You’re in the right place. The real dashboard is coming next."}</p>
                <div class="dashboard-soon">
                    <i class="fas fa-wand-magic-sparkles"></i>
                    <span>{"Coming Soon"}</span>
                </div>
                <p class="dashboard-note">{"This is a placeholder screen so navigation works while you move projects."}</p>
                <Link<Route> to={Route::Home} classes="dashboard-back">
                    {"Back to landing page"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .dashboard-page {
                    min-height: 100vh;
                    background: radial-gradient(circle at 50% 0%, rgba(109, 40, 217, 0.15), transparent 45%), #0b0a12;
                    color: #f4f2ff;
                    padding-bottom: 4rem;
                }
                .dashboard-card {
                    max-width: 42rem;
                    margin: 0 auto;
                    padding: 2.5rem;
                    border-radius: 20px;
                    border: 1px solid rgba(139, 92, 246, 0.15);
                    background: rgba(13, 11, 22, 0.85);
                    box-shadow: 0 0 60px rgba(139, 92, 246, 0.1);
                    text-align: center;
                }
                .dashboard-title {
                    font-size: 1.9rem;
                    letter-spacing: -0.02em;
                    margin: 0;
                }
                .dashboard-tagline {
                    color: #b7b0d4;
                    margin: 0.75rem 0 2rem;
                }
                .dashboard-soon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    color: #a78bfa;
                    font-size: 0.85rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.25em;
                    margin-bottom: 1.5rem;
                }
                .dashboard-note {
                    color: #b7b0d4;
                    margin: 0 0 2rem;
                }
                .dashboard-back {
                    display: inline-block;
                    padding: 0.75rem 1.8rem;
                    border-radius: 999px;
                    border: 1px solid rgba(139, 92, 246, 0.3);
                    color: #a78bfa;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .dashboard-back:hover {
                    background: rgba(139, 92, 246, 0.1);
                    border-color: rgba(139, 92, 246, 0.6);
                }
                @media (max-width: 768px) {
                    .dashboard-card {
                        margin: 0 1rem;
                        padding: 1.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
