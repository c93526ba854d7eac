use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

/// Three column header for the pages off the landing route: back link on
/// the left, brand mark in the middle, an empty right cell so the mark
/// stays centered.
#[function_component(BrandHeader)]
pub fn brand_header() -> Html {
    html! {
        <header class="brand-header">
            <Link<Route> to={Route::Home} classes="brand-back">
                <i class="fas fa-arrow-left"></i>
                {"Back to home"}
            </Link<Route>>
            <div class="brand-mark">
                <span class="brand-logo"><i class="fas fa-envelope-circle-check"></i></span>
                <span class="brand-name">{"InboxBully"}</span>
            </div>
            <div class="brand-spacer" aria-hidden="true"></div>
            <style>
                {r#"
                .brand-header {
                    display: grid;
                    grid-template-columns: 1fr auto 1fr;
                    align-items: center;
                    padding: 2.5rem 1rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .brand-back {
                    justify-self: start;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #b7b0d4;
                    text-decoration: none;
                    font-size: 0.95rem;
                    padding: 0.5rem 0.9rem;
                    border-radius: 10px;
                    transition: all 0.3s ease;
                }
                .brand-back:hover {
                    color: #a78bfa;
                    background: rgba(139, 92, 246, 0.1);
                }
                .brand-mark {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .brand-logo {
                    width: 2rem;
                    height: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 10px;
                    background: linear-gradient(135deg, #8b5cf6, #6d28d9);
                    color: #fff;
                    font-size: 0.95rem;
                    box-shadow: 0 0 20px rgba(139, 92, 246, 0.4);
                }
                .brand-name {
                    font-weight: 700;
                    font-size: 1.1rem;
                    background: linear-gradient(45deg, #f4f2ff, #a78bfa);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                "#}
            </style>
        </header>
    }
}
