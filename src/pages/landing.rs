use yew::prelude::*;
use yew_router::components::Link;

use crate::showcase::demo::DemoSection;
use crate::showcase::feature_card::FeatureGrid;
use crate::Route;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    content: &'static str,
    stars: usize,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah J.",
        role: "BillBully Member",
        content: "I used to wake up to 'Final Warning' emails that ruined my day before I even stood up. InboxBully caught them before I saw them. Honest relief.",
        stars: 5,
    },
    Testimonial {
        name: "Michael R.",
        role: "Early Adopter",
        content: "I didn’t realize how much my inbox was stressing me out until it stopped. The 'Handle When Ready' folder is my safe space.",
        stars: 5,
    },
    Testimonial {
        name: "Elena K.",
        role: "Stability Seeker",
        content: "This is the first tool that understands financial stress isn’t just numbers—it’s emotional pressure. It helped me breathe again.",
        stars: 5,
    },
];

struct PolicyEntry {
    heading: &'static str,
    body: &'static str,
}

const PRIVACY_POINTS: [PolicyEntry; 6] = [
    PolicyEntry {
        heading: "What we collect",
        body: "Account details (email, name) and the minimum metadata required to operate InboxBully. If you connect an email provider, we process message data only to deliver the features you request.",
    },
    PolicyEntry {
        heading: "How we use it",
        body: "To filter, organize, and protect your inbox, provide customer support, and improve product reliability. We do not sell, rent, or trade personal information.",
    },
    PolicyEntry {
        heading: "Sharing",
        body: "We share data only with trusted processors that help run the service (hosting, analytics, email delivery) under strict confidentiality obligations.",
    },
    PolicyEntry {
        heading: "Security",
        body: "We use encryption in transit, access controls, and audit logs. No system is perfect, but we build for safety first.",
    },
    PolicyEntry {
        heading: "Your choices",
        body: "You can request access, correction, export, or deletion of your data at any time. Disconnect your email account to stop processing.",
    },
    PolicyEntry {
        heading: "Contact",
        body: "Email us at support@inboxbully.com for privacy requests. We respond within a reasonable timeframe.",
    },
];

const TERMS_POINTS: [PolicyEntry; 8] = [
    PolicyEntry {
        heading: "Acceptance",
        body: "By using InboxBully, you agree to these terms and our Privacy Policy. If you don’t agree, do not use the service.",
    },
    PolicyEntry {
        heading: "Accounts",
        body: "You’re responsible for your account activity and for keeping access credentials secure.",
    },
    PolicyEntry {
        heading: "Acceptable use",
        body: "Don’t misuse the service, attempt to break it, or use it for unlawful or abusive purposes.",
    },
    PolicyEntry {
        heading: "Subscriptions",
        body: "Paid plans, if offered, renew until canceled. Pricing and features can change with prior notice.",
    },
    PolicyEntry {
        heading: "Service limits",
        body: "InboxBully depends on third-party email providers. We can’t guarantee uninterrupted access or provider availability.",
    },
    PolicyEntry {
        heading: "Disclaimers",
        body: "The service is provided “as is.” We don’t provide legal, financial, or medical advice.",
    },
    PolicyEntry {
        heading: "Termination",
        body: "You can stop using the service at any time. We may suspend accounts for violations of these terms.",
    },
    PolicyEntry {
        heading: "Contact",
        body: "Questions? Email support@inboxbully.com.",
    },
];

fn policy_section(
    id: &'static str,
    title: &'static str,
    tagline: &'static str,
    entries: &'static [PolicyEntry],
    footnote: &'static str,
) -> Html {
    html! {
        <section id={id} class="policy-section">
            <div class="policy-card">
                <h2 class="section-title">{title}</h2>
                <p class="section-tagline">{tagline}</p>
                <div class="policy-grid">
                    { for entries.iter().map(|entry| html! {
                        <div key={entry.heading} class="policy-entry">
                            <h3>{entry.heading}</h3>
                            <p>{entry.body}</p>
                        </div>
                    }) }
                </div>
                <div class="policy-footnote">{footnote}</div>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
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
        <div class="landing-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>

            <nav class="landing-nav">
                <div class="nav-inner">
                    <div class="nav-brand">
                        <span class="brand-logo"><i class="fas fa-envelope-circle-check"></i></span>
                        <span class="brand-name">{"InboxBully"}</span>
                    </div>
                    <div class="nav-anchors">
                        <a href="#features">{"Features"}</a>
                        <a href="#trust">{"Safety"}</a>
                        <a href="#demo">{"Demo"}</a>
                    </div>
                    <div class="nav-actions">
                        <Link<Route> to={Route::Login} classes="nav-login">{"Login"}</Link<Route>>
                        <Link<Route> to={Route::Signup} classes="nav-signup">{"Sign Up"}</Link<Route>>
                    </div>
                </div>
            </nav>

            <header class="hero">
                <div class="hero-glow"></div>
                <div class="hero-content">
                    <span class="hero-badge">{"A Free Gift for BillBully Members"}</span>
                    <h1 class="hero-title">
                        {"Protect your"}<br/>
                        <span class="gradient-text">{"nervous system."}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Email shouldn’t put you into fight-or-flight. InboxBully shields you from financial stress emails so you can breathe, think, and stay in control."}
                    </p>
                    <div class="hero-cta-group">
                        <Link<Route> to={Route::Signup} classes="forward-link">
                            <button class="cta-primary">
                                <i class="fas fa-user-plus"></i>
                                {"Create Free Account"}
                            </button>
                        </Link<Route>>
                        <Link<Route> to={Route::Login} classes="forward-link">
                            <button class="cta-secondary">
                                <i class="fas fa-right-to-bracket"></i>
                                {"Login"}
                            </button>
                        </Link<Route>>
                    </div>
                    <p class="hero-consent">
                        {"No inbox access is ever taken without your permission. You stay in control at every step."}
                    </p>
                    <div class="partner-strip">
                        <p class="partner-heading">{"Trusted by members from"}</p>
                        <div class="partner-marks">
                            <span class="partner-mark">{"BillBully"}</span>
                        </div>
                    </div>
                </div>
            </header>

            <section id="trust" class="trust-section">
                <div class="trust-grid">
                    <div class="trust-panel">
                        <div class="trust-icon"><i class="fas fa-user-shield"></i></div>
                        <h3>{"Absolute Privacy"}</h3>
                        <p>{"We don’t sell, rent, share, or trade your data—ever. Your financial life is personal, and we treat it with the dignity it deserves."}</p>
                    </div>
                    <div class="trust-panel">
                        <div class="trust-icon"><i class="fas fa-lock"></i></div>
                        <h3>{"Safety Guardrails"}</h3>
                        <p>{"InboxBully never deletes financial, government, legal, or identity documents without explicit confirmation. We only touch what you approve."}</p>
                    </div>
                    <div class="trust-panel">
                        <div class="trust-icon"><i class="fas fa-rotate-left"></i></div>
                        <h3>{"Total Control"}</h3>
                        <p>{"Undo is always available. Every action is logged in plain English so you always know exactly what happened and why."}</p>
                    </div>
                </div>
                <div class="trust-quote">
                    <p>{"\"Your inbox should be a tool for your life—not a weapon against your nervous system.\""}</p>
                </div>
            </section>

            <section id="demo" class="demo-section">
                <h2 class="section-title">{"See the Relief"}</h2>
                <p class="section-tagline">{"Experience the calm of an InboxBully-protected workspace."}</p>
                <DemoSection />
            </section>

            <section id="features" class="features-section">
                <h2 class="section-title">{"Built for Humans"}</h2>
                <p class="section-tagline">{"Thoughtful technology designed for your peace of mind."}</p>
                <FeatureGrid />
            </section>

            <section id="testimonials" class="testimonials-section">
                <h2 class="section-title">{"Member Stories"}</h2>
                <p class="section-tagline">{"Real experiences from the BillBully community."}</p>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().map(|entry| html! {
                        <div key={entry.name} class="testimonial-card">
                            <i class="fas fa-quote-right testimonial-quote-icon"></i>
                            <div class="testimonial-stars">
                                { for (0..entry.stars).map(|index| html! {
                                    <i key={index.to_string()} class="fas fa-star"></i>
                                }) }
                            </div>
                            <div class="testimonial-name">{entry.name}</div>
                            <div class="testimonial-role">{entry.role}</div>
                            <p class="testimonial-content">{format!("\"{}\"", entry.content)}</p>
                        </div>
                    }) }
                </div>
            </section>

            { policy_section(
                "privacy",
                "Privacy Policy",
                "Your inbox is personal. We treat it that way.",
                &PRIVACY_POINTS,
                "Effective date: January 1, 2026. We may update this policy with notice on this page.",
            ) }

            { policy_section(
                "terms",
                "Terms of Service",
                "Simple rules, clear boundaries.",
                &TERMS_POINTS,
                "Effective date: January 1, 2026. We may update these terms with notice on this page.",
            ) }

            <section id="support" class="support-section">
                <div class="support-card">
                    <h2 class="section-title">{"Support"}</h2>
                    <p class="section-tagline">{"Need help or have a privacy request? We’re here for you."}</p>
                    <a class="support-mail" href="mailto:support@inboxbully.com">{"Email support@inboxbully.com"}</a>
                </div>
            </section>

            <footer class="landing-footer">
                <div class="footer-brand">
                    <span class="brand-logo"><i class="fas fa-envelope-circle-check"></i></span>
                    <span class="brand-name">{"InboxBully"}</span>
                </div>
                <p class="footer-tagline">{"A free gift for the BillBully community. Built with care for your peace of mind."}</p>
                <div class="footer-links">
                    <a href="#privacy">{"Privacy"}</a>
                    <a href="#terms">{"Terms"}</a>
                    <a href="#support">{"Support"}</a>
                </div>
                <div class="footer-copyright">{"© 2026 InboxBully. All rights reserved."}</div>
            </footer>

            <style>
                {r#"
    .landing-page {
        min-height: 100vh;
        background: radial-gradient(circle at 20% 0%, rgba(109, 40, 217, 0.18), transparent 40%),
                    radial-gradient(circle at 80% 20%, rgba(139, 92, 246, 0.12), transparent 45%),
                    #0b0a12;
        color: #f4f2ff;
    }
    .landing-nav {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        z-index: 100;
        background: rgba(11, 10, 18, 0.8);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid rgba(139, 92, 246, 0.12);
    }
    .nav-inner {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1rem;
        height: 64px;
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
    }
    .nav-brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .brand-logo {
        width: 2.2rem;
        height: 2.2rem;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 10px;
        background: linear-gradient(135deg, #8b5cf6, #6d28d9);
        color: #fff;
        box-shadow: 0 0 20px rgba(139, 92, 246, 0.4);
    }
    .brand-name {
        font-weight: 700;
        font-size: 1.25rem;
        background: linear-gradient(45deg, #f4f2ff, #a78bfa);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .nav-anchors {
        display: flex;
        gap: 2rem;
        font-size: 0.9rem;
    }
    .nav-anchors a {
        color: #b7b0d4;
        text-decoration: none;
        transition: color 0.3s ease;
    }
    .nav-anchors a:hover {
        color: #a78bfa;
    }
    .nav-actions {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .nav-login {
        color: #b7b0d4;
        text-decoration: none;
        font-size: 0.9rem;
        padding: 0.5rem 1rem;
        border-radius: 10px;
        transition: all 0.3s ease;
    }
    .nav-login:hover {
        color: #a78bfa;
        background: rgba(139, 92, 246, 0.1);
    }
    .nav-signup {
        color: #fff;
        text-decoration: none;
        font-size: 0.9rem;
        font-weight: 600;
        padding: 0.5rem 1.5rem;
        border-radius: 999px;
        background: linear-gradient(135deg, #8b5cf6, #6d28d9);
        box-shadow: 0 0 20px rgba(139, 92, 246, 0.35);
        transition: box-shadow 0.3s ease;
    }
    .nav-signup:hover {
        box-shadow: 0 0 35px rgba(139, 92, 246, 0.6);
    }
    .forward-link {
        text-decoration: none;
    }
    .hero {
        position: relative;
        padding: 10rem 1rem 5rem;
        text-align: center;
        overflow: hidden;
    }
    .hero-glow {
        position: absolute;
        inset: 0;
        z-index: 0;
        background: radial-gradient(circle at 50% 20%, rgba(139, 92, 246, 0.25), transparent 55%);
        pointer-events: none;
    }
    .hero-content {
        position: relative;
        z-index: 1;
        max-width: 900px;
        margin: 0 auto;
    }
    .hero-badge {
        display: inline-block;
        padding: 0.35rem 1rem;
        border-radius: 999px;
        border: 1px solid rgba(139, 92, 246, 0.3);
        background: rgba(139, 92, 246, 0.05);
        color: #a78bfa;
        font-size: 0.85rem;
        margin-bottom: 1.5rem;
        animation: badge-pulse 3s ease-in-out infinite;
    }
    @keyframes badge-pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.6; }
    }
    .hero-title {
        font-size: clamp(3rem, 8vw, 5.5rem);
        line-height: 1.1;
        letter-spacing: -0.02em;
        margin: 0 0 1.5rem;
    }
    .gradient-text {
        background: linear-gradient(45deg, #a78bfa, #8b5cf6, #6d28d9);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        color: #b7b0d4;
        max-width: 42rem;
        margin: 0 auto 1.5rem;
        line-height: 1.6;
    }
    .hero-cta-group {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1rem;
        margin: 2.5rem 0 1rem;
    }
    .cta-primary,
    .cta-secondary {
        display: flex;
        align-items: center;
        gap: 0.6rem;
        padding: 0 2.5rem;
        height: 3.5rem;
        border-radius: 999px;
        font-size: 1.05rem;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .cta-primary {
        border: none;
        background: linear-gradient(135deg, #8b5cf6, #6d28d9);
        color: #fff;
        font-weight: 700;
        box-shadow: 0 0 30px rgba(139, 92, 246, 0.4);
    }
    .cta-primary:hover {
        box-shadow: 0 0 50px rgba(139, 92, 246, 0.7);
        transform: translateY(-2px);
    }
    .cta-secondary {
        border: 1px solid rgba(139, 92, 246, 0.2);
        background: rgba(20, 17, 34, 0.6);
        color: rgba(244, 242, 255, 0.8);
    }
    .cta-secondary:hover {
        border-color: rgba(139, 92, 246, 0.5);
    }
    .hero-consent {
        font-size: 0.85rem;
        color: rgba(183, 176, 212, 0.8);
        margin-bottom: 2.5rem;
    }
    .partner-strip {
        margin-top: 3rem;
        padding-top: 2rem;
        border-top: 1px solid rgba(139, 92, 246, 0.1);
    }
    .partner-heading {
        font-size: 0.7rem;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        color: rgba(183, 176, 212, 0.6);
        font-weight: 600;
        margin-bottom: 1.5rem;
    }
    .partner-marks {
        display: flex;
        justify-content: center;
        gap: 3rem;
        opacity: 0.4;
        transition: opacity 0.7s ease;
    }
    .partner-marks:hover {
        opacity: 1;
    }
    .partner-mark {
        font-size: 1.4rem;
        font-weight: 800;
        letter-spacing: -0.02em;
    }
    .trust-section {
        padding: 6rem 1rem;
        background: rgba(20, 17, 34, 0.3);
        border-top: 1px solid rgba(139, 92, 246, 0.08);
        border-bottom: 1px solid rgba(139, 92, 246, 0.08);
    }
    .trust-grid {
        max-width: 1000px;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 3rem;
    }
    .trust-panel {
        text-align: left;
    }
    .trust-icon {
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        background: rgba(139, 92, 246, 0.1);
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 1rem;
    }
    .trust-icon i {
        color: #a78bfa;
        font-size: 1.2rem;
    }
    .trust-panel h3 {
        font-size: 1.25rem;
        margin: 0 0 0.75rem;
    }
    .trust-panel p {
        color: #b7b0d4;
        line-height: 1.6;
        margin: 0;
    }
    .trust-quote {
        max-width: 1000px;
        margin: 4rem auto 0;
        padding: 1.5rem;
        border-radius: 16px;
        border: 1px solid rgba(139, 92, 246, 0.1);
        background: rgba(20, 17, 34, 0.5);
        text-align: center;
    }
    .trust-quote p {
        color: #a78bfa;
        font-style: italic;
        margin: 0;
    }
    .demo-section,
    .features-section,
    .testimonials-section {
        padding: 6rem 1rem;
    }
    .section-title {
        text-align: center;
        font-size: clamp(2.2rem, 5vw, 3.2rem);
        letter-spacing: -0.02em;
        margin: 0 0 0.75rem;
    }
    .section-tagline {
        text-align: center;
        color: #b7b0d4;
        font-size: 1.1rem;
        margin: 0 0 4rem;
    }
    .features-section {
        background: rgba(20, 17, 34, 0.3);
    }
    .testimonial-grid {
        max-width: 1200px;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
        gap: 2rem;
    }
    .testimonial-card {
        position: relative;
        padding: 2rem;
        border-radius: 20px;
        border: 1px solid rgba(139, 92, 246, 0.08);
        background: rgba(20, 17, 34, 0.6);
        transition: border-color 0.5s ease;
    }
    .testimonial-card:hover {
        border-color: rgba(139, 92, 246, 0.3);
    }
    .testimonial-quote-icon {
        position: absolute;
        top: 1.5rem;
        right: 1.5rem;
        font-size: 2.5rem;
        color: rgba(139, 92, 246, 0.08);
    }
    .testimonial-stars {
        display: flex;
        gap: 0.25rem;
        margin-bottom: 1rem;
    }
    .testimonial-stars i {
        color: #a78bfa;
        font-size: 0.85rem;
    }
    .testimonial-name {
        font-size: 1.2rem;
        font-weight: 700;
        color: #a78bfa;
    }
    .testimonial-role {
        font-size: 0.7rem;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        font-weight: 700;
        color: rgba(183, 176, 212, 0.7);
        margin-top: 0.25rem;
    }
    .testimonial-content {
        color: #b7b0d4;
        font-style: italic;
        font-size: 1.05rem;
        line-height: 1.7;
        margin: 1.25rem 0 0;
    }
    .policy-section {
        padding: 6rem 1rem;
        border-top: 1px solid rgba(139, 92, 246, 0.08);
        background: rgba(20, 17, 34, 0.2);
    }
    .policy-card {
        max-width: 1000px;
        margin: 0 auto;
        padding: 3rem;
        border-radius: 20px;
        border: 1px solid rgba(139, 92, 246, 0.1);
        background: rgba(13, 11, 22, 0.7);
    }
    .policy-card .section-tagline {
        margin-bottom: 2.5rem;
    }
    .policy-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
        gap: 1.5rem 2.5rem;
    }
    .policy-entry h3 {
        font-size: 1.1rem;
        margin: 0 0 0.5rem;
    }
    .policy-entry p {
        color: #b7b0d4;
        line-height: 1.6;
        font-size: 0.95rem;
        margin: 0;
    }
    .policy-footnote {
        margin-top: 2.5rem;
        text-align: center;
        font-size: 0.75rem;
        color: rgba(183, 176, 212, 0.6);
    }
    .support-section {
        padding: 5rem 1rem;
        border-top: 1px solid rgba(139, 92, 246, 0.08);
    }
    .support-card {
        max-width: 700px;
        margin: 0 auto;
        padding: 2.5rem;
        text-align: center;
        border-radius: 20px;
        border: 1px solid rgba(139, 92, 246, 0.1);
        background: rgba(13, 11, 22, 0.7);
    }
    .support-card .section-tagline {
        margin-bottom: 1.5rem;
    }
    .support-mail {
        display: inline-block;
        padding: 0.75rem 2rem;
        border-radius: 999px;
        border: 1px solid rgba(139, 92, 246, 0.3);
        color: #a78bfa;
        text-decoration: none;
        transition: all 0.3s ease;
    }
    .support-mail:hover {
        background: rgba(139, 92, 246, 0.1);
        border-color: rgba(139, 92, 246, 0.6);
    }
    .landing-footer {
        padding: 5rem 1rem;
        text-align: center;
        border-top: 1px solid rgba(139, 92, 246, 0.08);
        background: rgba(11, 10, 18, 0.6);
    }
    .footer-brand {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.6rem;
        margin-bottom: 2rem;
    }
    .footer-tagline {
        color: #b7b0d4;
        font-size: 1.05rem;
        max-width: 36rem;
        margin: 0 auto 2.5rem;
    }
    .footer-links {
        display: flex;
        justify-content: center;
        gap: 2.5rem;
        font-size: 0.8rem;
        font-weight: 700;
        text-transform: uppercase;
        letter-spacing: 0.15em;
        margin-bottom: 3rem;
    }
    .footer-links a {
        color: rgba(183, 176, 212, 0.6);
        text-decoration: none;
        transition: color 0.3s ease;
    }
    .footer-links a:hover {
        color: #a78bfa;
    }
    .footer-copyright {
        font-size: 0.75rem;
        color: rgba(183, 176, 212, 0.4);
    }
    @media (max-width: 768px) {
        .nav-anchors {
            display: none;
        }
        .hero {
            padding-top: 7rem;
        }
        .policy-card {
            padding: 1.5rem;
        }
        .footer-links {
            gap: 1.5rem;
        }
    }
                "#}
            </style>
        </div>
    }
}
