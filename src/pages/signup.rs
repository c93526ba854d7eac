use yew::prelude::*;
use yew_router::components::Link;

use crate::components::brand_header::BrandHeader;
use crate::Route;

#[function_component(Signup)]
pub fn signup() -> Html {
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
                <h1 class="auth-title">{"Create your account"}</h1>
                <p class="auth-tagline">{"A calm inbox starts with a secure setup."}</p>
                <div class="auth-fields">
                    <input type="email" placeholder="Email" aria-label="Email" />
                    <input type="password" placeholder="Password" aria-label="Password" />
                </div>
                <div class="auth-actions">
                    <Link<Route> to={Route::Dashboard} classes="forward-link">
                        <button class="auth-primary">
                            <i class="fas fa-user-plus"></i>
                            {"Create Free Account"}
                        </button>
                    </Link<Route>>
                    <Link<Route> to={Route::Login} classes="forward-link">
                        <button class="auth-secondary">
                            <i class="fas fa-right-to-bracket"></i>
                            {"Login"}
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

pub(crate) const AUTH_CSS: &str = r#"
    .auth-page {
        min-height: 100vh;
        background: radial-gradient(circle at 50% 0%, rgba(109, 40, 217, 0.15), transparent 45%), #0b0a12;
        color: #f4f2ff;
        padding-bottom: 4rem;
    }
    .auth-card {
        max-width: 36rem;
        margin: 0 auto;
        padding: 2.5rem;
        border-radius: 20px;
        border: 1px solid rgba(139, 92, 246, 0.15);
        background: rgba(13, 11, 22, 0.85);
        box-shadow: 0 0 60px rgba(139, 92, 246, 0.1);
        text-align: center;
    }
    .auth-title {
        font-size: 1.9rem;
        letter-spacing: -0.02em;
        margin: 0;
    }
    .auth-tagline {
        color: #b7b0d4;
        margin: 0.75rem 0 2rem;
    }
    .auth-fields {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        max-width: 20rem;
        margin: 0 auto 1.5rem;
    }
    .auth-fields input {
        height: 3rem;
        padding: 0 1.25rem;
        border-radius: 999px;
        border: 1px solid rgba(139, 92, 246, 0.2);
        background: rgba(11, 10, 18, 0.9);
        color: #a78bfa;
        font-size: 0.95rem;
        outline: none;
    }
    .auth-fields input::placeholder {
        color: rgba(183, 176, 212, 0.6);
    }
    .auth-fields input:focus {
        border-color: rgba(139, 92, 246, 0.6);
    }
    .auth-actions {
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
        max-width: 20rem;
        margin: 0 auto 1.5rem;
    }
    .forward-link {
        text-decoration: none;
    }
    .auth-primary,
    .auth-secondary {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.6rem;
        width: 100%;
        height: 3rem;
        border-radius: 999px;
        font-size: 1rem;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .auth-primary {
        border: none;
        background: linear-gradient(135deg, #8b5cf6, #6d28d9);
        color: #fff;
        font-weight: 700;
        box-shadow: 0 0 25px rgba(139, 92, 246, 0.35);
    }
    .auth-primary:hover {
        box-shadow: 0 0 40px rgba(139, 92, 246, 0.6);
    }
    .auth-secondary {
        border: 1px solid rgba(139, 92, 246, 0.2);
        background: none;
        color: rgba(244, 242, 255, 0.8);
    }
    .auth-secondary:hover {
        border-color: rgba(139, 92, 246, 0.5);
    }
    .auth-consent {
        font-size: 0.75rem;
        color: rgba(183, 176, 212, 0.7);
        margin: 0;
    }
    @media (max-width: 768px) {
        .auth-card {
            margin: 0 1rem;
            padding: 1.5rem;
        }
    }
"#;
