//! Server side render checks for the routed pages.

use yew::html::BaseComponent;
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::{Routable, Router};

use inboxbully::pages::dashboard::Dashboard;
use inboxbully::pages::landing::Landing;
use inboxbully::pages::login::Login;
use inboxbully::pages::signup::Signup;
use inboxbully::Route;

#[derive(Properties, PartialEq)]
struct WrapProps {
    children: Children,
}

// Link needs a router context; MemoryHistory keeps the render off the
// browser APIs.
#[function_component(TestRouter)]
fn test_router(props: &WrapProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    html! {
        <Router history={history}>
            { for props.children.iter() }
        </Router>
    }
}

macro_rules! page_renderer {
    ($name:ident, $inner:ident, $page:ident) => {
        #[function_component($name)]
        fn $inner() -> Html {
            html! {
                <TestRouter>
                    <$page />
                </TestRouter>
            }
        }
    };
}

page_renderer!(LandingUnderRouter, landing_under_router, Landing);
page_renderer!(SignupUnderRouter, signup_under_router, Signup);
page_renderer!(LoginUnderRouter, login_under_router, Login);
page_renderer!(DashboardUnderRouter, dashboard_under_router, Dashboard);

// The renderer spawns its writer task on the current thread, so every
// render runs inside a LocalSet.
async fn render<C>() -> String
where
    C: BaseComponent,
    C::Properties: Default,
{
    let renderer = LocalServerRenderer::<C>::new().hydratable(false);
    tokio::task::LocalSet::new()
        .run_until(renderer.render())
        .await
}

#[test]
fn routes_map_to_expected_paths() {
    assert_eq!(Route::Home.to_path(), "/");
    assert_eq!(Route::Signup.to_path(), "/signup");
    assert_eq!(Route::Login.to_path(), "/login");
    assert_eq!(Route::Dashboard.to_path(), "/dashboard");
    assert_eq!(Route::recognize("/signup"), Some(Route::Signup));
    assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
}

#[tokio::test]
async fn landing_page_carries_every_section() {
    let html = render::<LandingUnderRouter>().await;
    assert!(html.contains("Protect your"));
    assert!(html.contains("nervous system."));
    assert!(html.contains("A Free Gift for BillBully Members"));
    assert!(html.contains("put you into fight-or-flight"));
    assert!(html.contains("No inbox access is ever taken without your permission."));
    assert!(html.contains("id=\"trust\""));
    assert!(html.contains("id=\"demo\""));
    assert!(html.contains("id=\"features\""));
    assert!(html.contains("id=\"testimonials\""));
    assert!(html.contains("id=\"privacy\""));
    assert!(html.contains("id=\"terms\""));
    assert!(html.contains("id=\"support\""));
    assert!(html.contains("See the Relief"));
    assert!(html.contains("Built for Humans"));
    assert!(html.contains("Member Stories"));
    assert!(html.contains("Honest relief."));
    assert!(html.contains("Privacy Policy"));
    assert!(html.contains("Terms of Service"));
    assert!(html.contains("© 2026 InboxBully. All rights reserved."));
}

#[tokio::test]
async fn landing_page_starts_with_demo_before_and_dialogs_closed() {
    let html = render::<LandingUnderRouter>().await;
    assert!(html.contains("FINAL WARNING: Account Suspension"));
    assert!(!html.contains("Inbox Protected"));
    assert_eq!(html.matches("Deep Dive").count(), 6);
    assert!(!html.contains("class=\"dialog-backdrop\""));
}

#[tokio::test]
async fn signup_page_renders_the_account_form() {
    let html = render::<SignupUnderRouter>().await;
    assert!(html.contains("Create your account"));
    assert!(html.contains("A calm inbox starts with a secure setup."));
    assert!(html.contains("Create Free Account"));
    assert!(html.contains("href=\"/dashboard\""));
    assert!(html.contains("href=\"/login\""));
    assert!(html.contains("Back to home"));
    assert!(html.contains("InboxBully"));
}

#[tokio::test]
async fn login_page_mirrors_the_signup_form() {
    let html = render::<LoginUnderRouter>().await;
    assert!(html.contains("Welcome back"));
    assert!(html.contains("Your calm inbox is waiting."));
    assert!(html.contains("href=\"/dashboard\""));
    assert!(html.contains("href=\"/signup\""));
}

#[tokio::test]
async fn dashboard_page_is_an_honest_placeholder() {
    let html = render::<DashboardUnderRouter>().await;
    assert!(html.contains("Dashboard Placeholder"));
    assert!(html.contains("in the right place. The real dashboard is coming next."));
    assert!(html.contains("Coming Soon"));
    assert!(html.contains("Back to landing page"));
    assert!(html.contains("href=\"/\""));
}
