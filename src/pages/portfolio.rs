use log::{error, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::nav_bar::Nav;
use crate::components::notification::NotificationToast;
use crate::components::reveal::{Reveal, RevealVariant, REVEAL_CSS};
use crate::config::{self, SCHEDULING_URL, STATS_VISIBILITY_THRESHOLD, WHATSAPP_URL};
use crate::contact::{
    submit_contact, ContactForm, ContactMethod, Field, FormAction, ReferralSource,
};
use crate::content::{
    link_target, CONTACT_CHANNELS, PROCESS_STEPS, SERVICES, SOCIAL_LINKS, STATS,
};
use crate::counter::use_counter_tween;
use crate::format::counter_label;
use crate::nav::{scroll_to_section, MenuState, Section};
use crate::notification::{use_notification, NotificationKind, UseNotificationHandle};
use crate::scroll::{use_scroll_progress, ScrollProgress};
use crate::visibility::use_in_view_once;

const PAGE_CSS: &str = r#"
    .portfolio {
        min-height: 100vh;
        overflow-x: hidden;
    }
    .progress-bar {
        position: fixed;
        top: 0;
        left: 0;
        height: 4px;
        background: linear-gradient(to right, #3b82f6, #9333ea);
        z-index: 50;
    }
    .container {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 2rem;
        position: relative;
        z-index: 10;
    }
    .narrow {
        max-width: 56rem;
    }
    .section {
        padding: 5rem 0;
    }
    .section-muted {
        background: #f9fafb;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-heading h2 {
        font-size: 3rem;
        font-weight: 700;
        margin: 0 0 1.5rem;
    }
    .section-heading p {
        font-size: 1.25rem;
        color: #4b5563;
        max-width: 48rem;
        margin: 0 auto;
    }
    .gradient-text {
        background: linear-gradient(to right, #111827, #1e3a8a);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .accent-text {
        background: linear-gradient(to right, #2563eb, #9333ea);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
        font-weight: 700;
    }
    .btn-primary {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 1rem 2rem;
        background: linear-gradient(to right, #2563eb, #9333ea);
        color: #fff;
        font-weight: 600;
        border-radius: 9999px;
        text-decoration: none;
        box-shadow: 0 10px 15px -3px rgba(0,0,0,0.1);
        transition: transform 0.3s, box-shadow 0.3s;
    }
    .btn-primary:hover {
        transform: scale(1.05);
        box-shadow: 0 20px 40px rgba(0,0,0,0.15);
    }
    .btn-outline {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 1rem 2rem;
        border: 2px solid #2563eb;
        background: transparent;
        color: #2563eb;
        font-weight: 600;
        font-size: 1rem;
        border-radius: 9999px;
        cursor: pointer;
        transition: all 0.3s;
    }
    .btn-outline:hover {
        background: #2563eb;
        color: #fff;
        transform: scale(1.05);
    }

    /* Hero */
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        position: relative;
        overflow: hidden;
        padding-top: 5rem;
        background: linear-gradient(to bottom right, #eff6ff, #ffffff, #faf5ff);
    }
    .blob {
        position: absolute;
        border-radius: 9999px;
        filter: blur(64px);
        will-change: transform;
    }
    .blob-blue {
        top: 5rem;
        left: 5rem;
        width: 18rem;
        height: 18rem;
        background: rgba(96,165,250,0.2);
        animation: pulseA 8s ease-in-out infinite;
    }
    .blob-purple {
        bottom: 5rem;
        right: 5rem;
        width: 24rem;
        height: 24rem;
        background: rgba(192,132,252,0.2);
        animation: pulseB 10s ease-in-out 2s infinite;
    }
    @keyframes pulseA {
        0%, 100% { opacity: 0.3; }
        50% { opacity: 0.6; }
    }
    @keyframes pulseB {
        0%, 100% { opacity: 0.4; }
        50% { opacity: 0.7; }
    }
    .hero-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }
    .hero-badge {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.75rem 1.5rem;
        border-radius: 9999px;
        background: linear-gradient(to right, #2563eb, #9333ea);
        color: #fff;
        font-weight: 600;
        margin-bottom: 1.5rem;
    }
    .hero h1 {
        font-size: 3.75rem;
        font-weight: 700;
        line-height: 1.15;
        margin: 0 0 1.5rem;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        color: #4b5563;
        line-height: 1.6;
        max-width: 36rem;
        margin: 0 0 2rem;
    }
    .hero-actions {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        margin-bottom: 2rem;
    }
    .trust {
        display: flex;
        gap: 1.5rem;
        font-size: 0.875rem;
        color: #6b7280;
    }
    .profile-card {
        position: relative;
        background: linear-gradient(to bottom right, #111827, #374151);
        border-radius: 1.5rem;
        padding: 2rem;
        color: #fff;
        text-align: center;
        box-shadow: 0 25px 50px -12px rgba(0,0,0,0.25);
    }
    .profile-card::before {
        content: '';
        position: absolute;
        inset: 0;
        border-radius: 1.5rem;
        background: linear-gradient(to right, #60a5fa, #9333ea);
        transform: rotate(6deg) scale(1.05);
        z-index: -1;
    }
    .avatar {
        width: 8rem;
        height: 8rem;
        margin: 0 auto 1.5rem;
        border-radius: 9999px;
        background: linear-gradient(to bottom right, #3b82f6, #9333ea);
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 3.5rem;
    }
    .profile-card h3 {
        font-size: 1.5rem;
        margin: 0 0 0.5rem;
    }
    .profile-role {
        color: #bfdbfe;
        margin: 0 0 1rem;
    }
    .preview-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1rem;
        margin-top: 1.5rem;
    }
    .preview-tile {
        background: rgba(255,255,255,0.1);
        border-radius: 0.5rem;
        padding: 0.75rem;
    }
    .preview-value {
        font-size: 1.5rem;
        font-weight: 700;
    }
    .preview-label {
        font-size: 0.75rem;
        color: #d1d5db;
    }
    .scroll-indicator {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        transform: translateX(-50%);
        background: none;
        border: none;
        font-size: 2rem;
        color: #9ca3af;
        cursor: pointer;
        animation: bob 2s infinite;
    }
    @keyframes bob {
        0%, 100% { transform: translate(-50%, 0); }
        50% { transform: translate(-50%, 10px); }
    }

    /* Stats */
    .stats-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
    }
    .stat-card, .service-card {
        background: #fff;
        border-radius: 1.5rem;
        padding: 2rem;
        border: 1px solid #f3f4f6;
        box-shadow: 0 10px 15px -3px rgba(0,0,0,0.1);
        transition: transform 0.3s, box-shadow 0.3s;
        height: 100%;
    }
    .stat-card:hover, .service-card:hover {
        transform: translateY(-10px) scale(1.02);
        box-shadow: 0 20px 40px rgba(0,0,0,0.15);
    }
    .icon-tile {
        width: 4rem;
        height: 4rem;
        border-radius: 1rem;
        margin: 0 auto 1.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 2rem;
        color: #fff;
    }
    .stat-value {
        font-size: 2.25rem;
        font-weight: 700;
        text-align: center;
        margin-bottom: 0.5rem;
    }
    .stat-label {
        text-align: center;
        color: #4b5563;
        font-weight: 500;
        margin-bottom: 0.5rem;
    }
    .stat-growth {
        text-align: center;
        color: #16a34a;
        font-size: 0.875rem;
        font-weight: 600;
    }

    /* Services */
    .services-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .service-card h3 {
        font-size: 1.5rem;
        text-align: center;
        margin: 0 0 1rem;
    }
    .service-card p {
        color: #4b5563;
        line-height: 1.6;
        text-align: center;
        margin: 0 0 1.5rem;
    }
    .feature-list {
        list-style: none;
        padding: 0;
        margin: 0;
    }
    .feature-list li {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        color: #374151;
        padding: 0.25rem 0;
    }
    .feature-dot {
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 9999px;
        flex-shrink: 0;
    }

    /* About */
    .about-body {
        font-size: 1.125rem;
        color: #374151;
        line-height: 1.75;
    }
    .about-body p {
        margin: 0 0 2rem;
    }
    .highlight {
        font-weight: 700;
        color: #2563eb;
    }
    .mission {
        background: linear-gradient(to right, #eff6ff, #faf5ff);
        border-radius: 1rem;
        padding: 2rem;
        border-left: 4px solid #2563eb;
    }
    .mission h3 {
        text-align: center;
        font-size: 1.25rem;
        margin: 0 0 1rem;
    }
    .mission p {
        margin: 0;
    }

    /* Process */
    .process-grid {
        display: grid;
        grid-template-columns: repeat(5, 1fr);
        gap: 2rem;
    }
    .process-step {
        text-align: center;
    }
    .step-marker {
        position: relative;
        margin-bottom: 2rem;
    }
    .step-number {
        width: 5rem;
        height: 5rem;
        margin: 0 auto;
        border-radius: 9999px;
        background: linear-gradient(to right, #2563eb, #9333ea);
        color: #fff;
        font-size: 1.5rem;
        font-weight: 700;
        display: flex;
        align-items: center;
        justify-content: center;
        position: relative;
        z-index: 1;
        transition: transform 0.3s, box-shadow 0.3s;
    }
    .step-number:hover {
        transform: scale(1.1);
        box-shadow: 0 10px 30px rgba(59,130,246,0.3);
    }
    .step-line {
        position: absolute;
        top: 2.5rem;
        left: 50%;
        width: 100%;
        height: 2px;
        background: linear-gradient(to right, #bfdbfe, #e9d5ff);
    }
    .process-step h3 {
        font-size: 1.25rem;
        margin: 0 0 1rem;
    }
    .process-step p {
        color: #4b5563;
        font-size: 0.875rem;
        line-height: 1.6;
        margin: 0;
    }

    /* Contact */
    .contact {
        background: linear-gradient(to bottom right, #111827, #1e3a8a, #581c87);
        color: #fff;
        position: relative;
        overflow: hidden;
    }
    .contact-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
    }
    .contact h2 {
        font-size: 3rem;
        margin: 0 0 1.5rem;
    }
    .contact-intro {
        font-size: 1.25rem;
        color: #d1d5db;
        line-height: 1.6;
        margin: 0 0 2rem;
    }
    .channel {
        display: flex;
        align-items: center;
        gap: 1rem;
        padding: 1rem;
        margin-bottom: 1rem;
        border-radius: 1rem;
        background: rgba(255,255,255,0.1);
        color: #fff;
        text-decoration: none;
        transition: transform 0.3s, background 0.3s;
    }
    .channel:hover {
        transform: translateX(10px) scale(1.02);
        background: rgba(255,255,255,0.2);
    }
    .channel-icon {
        width: 3.5rem;
        height: 3.5rem;
        border-radius: 9999px;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.5rem;
    }
    .channel-label {
        font-weight: 600;
        font-size: 1.125rem;
    }
    .channel-value {
        color: #d1d5db;
    }
    .form-panel {
        background: rgba(255,255,255,0.1);
        backdrop-filter: blur(12px);
        border: 1px solid rgba(255,255,255,0.2);
        border-radius: 1.5rem;
        padding: 2rem;
    }
    .form-panel h3 {
        font-size: 1.5rem;
        margin: 0 0 1.5rem;
    }
    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .form-row {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1rem;
    }
    .form-control {
        width: 100%;
        padding: 0.75rem 1rem;
        border-radius: 0.75rem;
        background: rgba(255,255,255,0.1);
        border: 1px solid rgba(255,255,255,0.2);
        color: #fff;
        font-size: 1rem;
        font-family: inherit;
        resize: none;
        transition: transform 0.2s, box-shadow 0.2s;
    }
    .form-control::placeholder {
        color: #d1d5db;
    }
    .form-control:focus {
        outline: none;
        box-shadow: 0 0 0 2px #3b82f6;
        transform: scale(1.02);
    }
    .form-control option {
        color: #111827;
    }
    .submit-button {
        width: 100%;
        padding: 1rem;
        border: none;
        border-radius: 0.75rem;
        background: linear-gradient(to right, #2563eb, #9333ea);
        color: #fff;
        font-size: 1rem;
        font-weight: 600;
        cursor: pointer;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        transition: transform 0.3s, box-shadow 0.3s;
    }
    .submit-button:hover:not(:disabled) {
        transform: scale(1.02);
        box-shadow: 0 10px 30px rgba(0,0,0,0.3);
    }
    .submit-button:disabled {
        opacity: 0.5;
        cursor: not-allowed;
    }
    .spinner {
        width: 1.25rem;
        height: 1.25rem;
        border: 2px solid rgba(255,255,255,0.3);
        border-top-color: #fff;
        border-radius: 9999px;
        animation: spin 1s linear infinite;
    }
    @keyframes spin {
        to { transform: rotate(360deg); }
    }
    .direct {
        margin-top: 2rem;
        padding-top: 1.5rem;
        border-top: 1px solid rgba(255,255,255,0.2);
        text-align: center;
    }
    .direct p {
        color: #d1d5db;
        margin: 0 0 1rem;
    }
    .direct-links {
        display: flex;
        justify-content: center;
        gap: 1rem;
    }
    .direct-link {
        padding: 0.75rem 1.5rem;
        border-radius: 0.5rem;
        color: #fff;
        text-decoration: none;
        font-weight: 500;
        background: rgba(255,255,255,0.2);
        transition: background 0.2s, transform 0.2s;
    }
    .direct-link:hover {
        transform: scale(1.05);
    }
    .direct-link.whatsapp {
        background: #16a34a;
    }

    /* Footer */
    .footer {
        background: #000;
        color: #fff;
        padding: 3rem 0;
        text-align: center;
    }
    .footer-brand {
        font-size: 1.875rem;
        font-weight: 700;
        background: linear-gradient(to right, #60a5fa, #c084fc);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
        margin-bottom: 1rem;
    }
    .footer-tagline {
        color: #9ca3af;
        max-width: 28rem;
        margin: 0 auto 2rem;
    }
    .socials, .footer-links {
        display: flex;
        justify-content: center;
        gap: 1.5rem;
        margin-bottom: 2rem;
    }
    .social {
        width: 3rem;
        height: 3rem;
        border-radius: 9999px;
        background: #1f2937;
        color: #9ca3af;
        display: flex;
        align-items: center;
        justify-content: center;
        text-decoration: none;
        transition: all 0.3s;
    }
    .social:hover {
        color: #fff;
        background: #2563eb;
        transform: translateY(-2px) scale(1.1);
    }
    .footer-link {
        background: none;
        border: none;
        color: #9ca3af;
        font-size: 0.875rem;
        cursor: pointer;
    }
    .footer-link:hover {
        color: #fff;
    }
    .copyright {
        border-top: 1px solid #1f2937;
        padding-top: 2rem;
        color: #9ca3af;
        font-size: 0.875rem;
    }
    .copyright small {
        display: block;
        margin-top: 0.5rem;
        color: #6b7280;
        font-size: 0.75rem;
    }

    @media (max-width: 1024px) {
        .hero-grid, .contact-grid {
            grid-template-columns: 1fr;
        }
        .stats-grid {
            grid-template-columns: repeat(2, 1fr);
        }
        .services-grid {
            grid-template-columns: 1fr;
        }
        .process-grid {
            grid-template-columns: repeat(2, 1fr);
        }
        .step-line {
            display: none;
        }
        .hero h1 {
            font-size: 2.5rem;
        }
    }
    @media (max-width: 640px) {
        .stats-grid, .process-grid, .form-row {
            grid-template-columns: 1fr;
        }
    }
"#;

fn gradient(colors: (&str, &str)) -> String {
    format!(
        "background: linear-gradient(to right, {}, {});",
        colors.0, colors.1
    )
}

#[derive(Properties, PartialEq)]
struct ProgressBarProps {
    progress: ScrollProgress,
}

#[function_component(ProgressBar)]
fn progress_bar(props: &ProgressBarProps) -> Html {
    html! {
        <div
            class="progress-bar"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={format!("{:.0}", props.progress.percent())}
            style={format!("width: {}%;", props.progress.percent())}
        />
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    parallax_y: f64,
    on_navigate: Callback<Section>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let learn_more = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::About))
    };
    let to_stats = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::Stats))
    };
    let blob_style = format!("transform: translateY({}px);", props.parallax_y);

    html! {
        <section id={Section::Home.anchor()} class="hero">
            <div class="blob blob-blue" style={blob_style.clone()} />
            <div class="blob blob-purple" style={blob_style} />

            <div class="container hero-grid">
                <div>
                    <Reveal delay_ms={0}>
                        <div class="hero-badge">{"👥 Personal Branding Specialist"}</div>
                    </Reveal>
                    <Reveal delay_ms={100}>
                        <h1>
                            <span class="gradient-text">{"Build LinkedIn Authority"}</span>
                            <br />
                            <span class="accent-text">{"That Attracts Premium Opportunities"}</span>
                        </h1>
                    </Reveal>
                    <Reveal delay_ms={200}>
                        <p class="hero-subtitle">
                            {"Build Industry Recognition and Brand Authority to establish you as the industry leader. \
                              Done-for-you LinkedIn personal branding for founders, lawyers, law firms and legal tech companies."}
                        </p>
                    </Reveal>
                    <Reveal delay_ms={300}>
                        <div class="hero-actions">
                            <a
                                class="btn-primary"
                                href={SCHEDULING_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {"📅 Schedule a Free Branding Audit"}
                            </a>
                            <button class="btn-outline" onclick={learn_more}>
                                {"Learn More →"}
                            </button>
                        </div>
                    </Reveal>
                    <Reveal delay_ms={400}>
                        <div class="trust">
                            <span>{"⭐ Trusted by 100+ professionals"}</span>
                            <span>{"🏅 Industry recognized"}</span>
                        </div>
                    </Reveal>
                </div>

                <Reveal variant={RevealVariant::FadeRight} delay_ms={200}>
                    <div class="profile-card">
                        <div class="avatar">{"👤"}</div>
                        <h3>{"Shivam Roy"}</h3>
                        <p class="profile-role">{"Personal Branding Expert"}</p>
                        <div class="preview-grid">
                            <div class="preview-tile">
                                <div class="preview-value">{"50K+"}</div>
                                <div class="preview-label">{"Impressions"}</div>
                            </div>
                            <div class="preview-tile">
                                <div class="preview-value">{"846"}</div>
                                <div class="preview-label">{"Followers"}</div>
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>

            <button class="scroll-indicator" aria-label="Scroll to stats" onclick={to_stats}>
                {"⌄"}
            </button>
        </section>
    }
}

#[function_component(StatsSection)]
fn stats_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view_once(node.clone(), STATS_VISIBILITY_THRESHOLD);

    let values = [
        use_counter_tween(STATS[0].target, in_view),
        use_counter_tween(STATS[1].target, in_view),
        use_counter_tween(STATS[2].target, in_view),
        use_counter_tween(STATS[3].target, in_view),
    ];

    use_effect_with_deps(
        |&in_view| {
            if in_view {
                info!("Stats section visible, starting counters");
            }
            || ()
        },
        in_view,
    );

    html! {
        <section id={Section::Stats.anchor()} class="section" ref={node}>
            <div class="container stats-grid">
                { for STATS.iter().zip(values).enumerate().map(|(i, (stat, value))| html! {
                    <Reveal variant={RevealVariant::ScaleIn} delay_ms={i as u32 * 100}>
                        <div class="stat-card">
                            <div class="icon-tile" style={gradient(stat.gradient)}>{stat.icon}</div>
                            <div class="stat-value">{counter_label(value, stat.suffix)}</div>
                            <div class="stat-label">{stat.label}</div>
                            <div class="stat-growth">{format!("↗ {}", stat.growth)}</div>
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(ServicesSection)]
fn services_section() -> Html {
    html! {
        <section id={Section::Services.anchor()} class="section section-muted">
            <div class="container">
                <Reveal class="section-heading">
                    <h2><span class="gradient-text">{"What I Do"}</span></h2>
                    <p>{"Comprehensive LinkedIn personal branding solutions designed specifically for legal professionals and founders"}</p>
                </Reveal>
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <Reveal delay_ms={i as u32 * 100}>
                            <div class="service-card">
                                <div class="icon-tile" style={gradient(service.gradient)}>{service.icon}</div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                                <ul class="feature-list">
                                    { for service.features.iter().map(|feature| html! {
                                        <li>
                                            <span class="feature-dot" style={gradient(service.gradient)} />
                                            {*feature}
                                        </li>
                                    }) }
                                </ul>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    html! {
        <section id={Section::About.anchor()} class="section">
            <div class="container narrow">
                <Reveal class="section-heading">
                    <h2><span class="gradient-text">{"About Shivam Roy"}</span></h2>
                </Reveal>
                <div class="about-body">
                    <Reveal>
                        <p>
                            {"Hi, I'm "}<span class="accent-text">{"Shivam Roy"}</span>
                            {", a 19-year-old personal branding specialist who's passionate about helping Founders, Lawyers, \
                              Law Firms and Legal Tech Companies build the digital authority they deserve."}
                        </p>
                    </Reveal>
                    <Reveal>
                        <p>
                            {"I grew up surrounded by law and started my career at leading firms and innovative startups. \
                              Along the way, I kept meeting brilliant legal professionals and founders with powerful ideas. \
                              But too often, their voices went unheard beyond their immediate circles."}
                            <span class="highlight">{" That needed to change, and I made it my mission."}</span>
                        </p>
                    </Reveal>
                    <Reveal>
                        <p>
                            {"This unique background gave me front-row seats to a persistent problem: exceptional lawyers and \
                              founders with decades of expertise were invisible online, losing opportunities to less qualified \
                              but more visible competitors."}
                        </p>
                    </Reveal>
                    <Reveal>
                        <div class="mission">
                            <h3>{"⚡ My Mission"}</h3>
                            <p>
                                {"Every founder and lawyer has a story that deserves to shape the future of the industry. \
                                  My approach brings together their expertise, digital strategy, and branding to empower clients \
                                  to become trusted authorities—not just users of LinkedIn, but voices that drive change."}
                            </p>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[function_component(ProcessSection)]
fn process_section() -> Html {
    let last = PROCESS_STEPS.len() - 1;
    html! {
        <section class="section section-muted">
            <div class="container">
                <Reveal class="section-heading">
                    <h2><span class="gradient-text">{"My Process"}</span></h2>
                    <p>{"A proven 5-step approach to transform your LinkedIn presence and build industry authority"}</p>
                </Reveal>
                <div class="process-grid">
                    { for PROCESS_STEPS.iter().enumerate().map(|(i, step)| html! {
                        <Reveal class="process-step" delay_ms={i as u32 * 100}>
                            <div class="step-marker">
                                <div class="step-number">{step.number}</div>
                                if i < last {
                                    <div class="step-line" />
                                }
                            </div>
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ContactFormPanelProps {
    on_notify: Callback<(NotificationKind, String)>,
}

#[function_component(ContactFormPanel)]
fn contact_form_panel(props: &ContactFormPanelProps) -> Html {
    let form = use_reducer(ContactForm::default);
    let submitting = use_state_eq(|| false);

    let on_text = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Set(field, input.value()));
        })
    };
    let on_area = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Set(field, area.value()));
        })
    };
    let on_select = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(FormAction::Set(field, select.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let snapshot = (*form).clone();
            if !snapshot.is_complete() {
                warn!("Contact form submitted with missing fields: {:?}", snapshot.missing_required());
                return;
            }

            submitting.set(true);
            let form = form.clone();
            let submitting = submitting.clone();
            let on_notify = on_notify.clone();
            spawn_local(async move {
                let result = submit_contact(&snapshot, &config::submit_target()).await;
                submitting.set(false);
                match result {
                    Ok(()) => {
                        info!("Contact message delivered");
                        on_notify.emit((
                            NotificationKind::Success,
                            config::SUBMIT_SUCCESS_MESSAGE.to_string(),
                        ));
                        form.dispatch(FormAction::Reset);
                    }
                    Err(err) => {
                        error!("Contact submission failed: {err}");
                        on_notify.emit((NotificationKind::Error, err.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="form-panel">
            <h3>{"✈ Get In Touch"}</h3>
            <form class="contact-form" {onsubmit}>
                <div class="form-row">
                    <input
                        class="form-control"
                        type="text"
                        name={Field::FullName.name()}
                        placeholder="Full Name *"
                        required=true
                        value={form.value_of(Field::FullName)}
                        oninput={on_text(Field::FullName)}
                    />
                    <input
                        class="form-control"
                        type="email"
                        name={Field::Email.name()}
                        placeholder="Email Address *"
                        required=true
                        value={form.value_of(Field::Email)}
                        oninput={on_text(Field::Email)}
                    />
                </div>
                <input
                    class="form-control"
                    type="text"
                    name={Field::Location.name()}
                    placeholder="Location (City, Country) *"
                    required=true
                    value={form.value_of(Field::Location)}
                    oninput={on_text(Field::Location)}
                />
                <textarea
                    class="form-control"
                    name={Field::Challenge.name()}
                    placeholder="Current LinkedIn Challenge *"
                    rows="4"
                    required=true
                    value={form.value_of(Field::Challenge)}
                    oninput={on_area(Field::Challenge)}
                />
                <select
                    class="form-control"
                    name={Field::ContactMethod.name()}
                    required=true
                    onchange={on_select(Field::ContactMethod)}
                >
                    <option value="" selected={form.contact_method.is_none()}>
                        {"Preferred Contact Method *"}
                    </option>
                    { for ContactMethod::ALL.iter().map(|m| html! {
                        <option value={m.value()} selected={form.contact_method == Some(*m)}>
                            {m.label()}
                        </option>
                    }) }
                </select>
                <select
                    class="form-control"
                    name={Field::Referral.name()}
                    onchange={on_select(Field::Referral)}
                >
                    <option value="" selected={form.referral.is_none()}>
                        {"How did you hear about us?"}
                    </option>
                    { for ReferralSource::ALL.iter().map(|r| html! {
                        <option value={r.value()} selected={form.referral == Some(*r)}>
                            {r.label()}
                        </option>
                    }) }
                </select>
                <textarea
                    class="form-control"
                    name={Field::Message.name()}
                    placeholder="Additional Message (Optional)"
                    rows="3"
                    value={form.value_of(Field::Message)}
                    oninput={on_area(Field::Message)}
                />
                <button type="submit" class="submit-button" disabled={*submitting}>
                    if *submitting {
                        <span class="spinner" />
                        {"Sending..."}
                    } else {
                        {"✈ Send Message"}
                    }
                </button>
            </form>

            <div class="direct">
                <p>{"Prefer a direct approach?"}</p>
                <div class="direct-links">
                    <a class="direct-link" href={SCHEDULING_URL} target="_blank" rel="noopener noreferrer">
                        {"📅 Book a Call"}
                    </a>
                    <a class="direct-link whatsapp" href={WHATSAPP_URL} target="_blank" rel="noopener noreferrer">
                        {"💬 WhatsApp"}
                    </a>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ContactSectionProps {
    on_notify: Callback<(NotificationKind, String)>,
}

#[function_component(ContactSection)]
fn contact_section(props: &ContactSectionProps) -> Html {
    html! {
        <section id={Section::Contact.anchor()} class="section contact">
            <div class="container contact-grid">
                <div>
                    <Reveal variant={RevealVariant::FadeLeft}>
                        <h2>{"Let's Build Your Authority"}</h2>
                        <p class="contact-intro">
                            {"Ready to transform your LinkedIn presence and attract premium opportunities? \
                              Let's discuss how we can elevate your personal brand and establish you as an industry leader."}
                        </p>
                    </Reveal>
                    { for CONTACT_CHANNELS.iter().enumerate().map(|(i, channel)| {
                        let (target, rel) = link_target(channel.href);
                        html! {
                            <Reveal variant={RevealVariant::FadeLeft} delay_ms={i as u32 * 100}>
                                <a class="channel" href={channel.href} {target} {rel}>
                                    <div class="channel-icon" style={gradient(channel.gradient)}>{channel.icon}</div>
                                    <div>
                                        <div class="channel-label">{channel.label}</div>
                                        <div class="channel-value">{channel.value}</div>
                                    </div>
                                </a>
                            </Reveal>
                        }
                    }) }
                </div>
                <Reveal variant={RevealVariant::FadeRight}>
                    <ContactFormPanel on_notify={props.on_notify.clone()} />
                </Reveal>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    on_navigate: Callback<Section>,
}

#[function_component(Footer)]
fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">{"Shivam Roy"}</div>
                <p class="footer-tagline">
                    {"Personal Branding Specialist helping founders and legal professionals build LinkedIn authority"}
                </p>
                <div class="socials">
                    { for SOCIAL_LINKS.iter().map(|social| {
                        let (target, rel) = link_target(social.href);
                        html! {
                            <a class="social" href={social.href} {target} {rel} aria-label={social.label}>
                                {social.icon}
                            </a>
                        }
                    }) }
                </div>
                <div class="footer-links">
                    { for Section::MENU.iter().map(|&section| {
                        let on_navigate = props.on_navigate.clone();
                        html! {
                            <button
                                class="footer-link"
                                onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(section))}
                            >
                                {section.label()}
                            </button>
                        }
                    }) }
                </div>
                <div class="copyright">
                    {"© 2025 Shivam Roy. All rights reserved. | Personal Branding Specialist for Legal Professionals & Founders"}
                    <small>{"Designed and developed with ❤️ for building digital authority"}</small>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let progress = use_scroll_progress();
    let menu = use_state_eq(MenuState::default);
    let notification = use_notification();

    // Scroll ticks re-render this component; memoized callbacks keep the
    // sections that only take callbacks from re-rendering with it.
    let toggle_menu = use_callback(
        |_: (), menu: &UseStateHandle<MenuState>| menu.set(menu.toggled()),
        menu.clone(),
    );

    let navigate = use_callback(
        |section: Section, menu: &UseStateHandle<MenuState>| {
            let scrolled = scroll_to_section(section);
            menu.set(menu.after_navigation(scrolled));
        },
        menu.clone(),
    );

    let notify = use_callback(
        |(kind, message): (NotificationKind, String), notification: &UseNotificationHandle| {
            notification.show(kind, message);
        },
        notification.clone(),
    );

    let close_notification = use_callback(
        |_: (), notification: &UseNotificationHandle| notification.dismiss(),
        notification.clone(),
    );

    html! {
        <div class="portfolio">
            <style>{PAGE_CSS}</style>
            <style>{REVEAL_CSS}</style>
            <ProgressBar progress={progress} />
            <NotificationToast
                state={notification.state().clone()}
                on_close={close_notification}
            />
            <Nav
                menu_open={menu.open}
                on_toggle_menu={toggle_menu}
                on_navigate={navigate.clone()}
            />
            <Hero parallax_y={progress.parallax_y()} on_navigate={navigate.clone()} />
            <StatsSection />
            <ServicesSection />
            <AboutSection />
            <ProcessSection />
            <ContactSection on_notify={notify} />
            <Footer on_navigate={navigate} />
        </div>
    }
}
