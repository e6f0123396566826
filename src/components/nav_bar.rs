use yew::prelude::*;

use crate::nav::Section;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_navigate: Callback<Section>,
}

const NAV_CSS: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 40;
        background: rgba(255,255,255,0.95);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid #f3f4f6;
        box-shadow: 0 1px 2px rgba(0,0,0,0.05);
        animation: navDrop 0.5s ease-out;
    }
    @keyframes navDrop {
        from { transform: translateY(-100px); }
        to { transform: translateY(0); }
    }
    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 1rem 2rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .nav-logo {
        font-size: 1.5rem;
        font-weight: 700;
        background: linear-gradient(to right, #2563eb, #9333ea);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
        cursor: pointer;
        border: none;
        padding: 0;
        transition: transform 0.2s;
    }
    .nav-logo:hover {
        transform: scale(1.05);
    }
    .nav-links {
        display: flex;
        gap: 2rem;
    }
    .nav-link {
        position: relative;
        background: none;
        border: none;
        color: #374151;
        font-weight: 500;
        font-size: 1rem;
        cursor: pointer;
        padding: 0.25rem 0;
        transition: color 0.2s, transform 0.2s;
    }
    .nav-link:hover {
        color: #2563eb;
        transform: translateY(-2px);
    }
    .nav-link::after {
        content: '';
        position: absolute;
        bottom: 0;
        left: 0;
        width: 0;
        height: 2px;
        background: linear-gradient(to right, #2563eb, #9333ea);
        transition: width 0.3s;
    }
    .nav-link:hover::after {
        width: 100%;
    }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        padding: 0.5rem;
        border-radius: 0.5rem;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .burger-menu:hover {
        background: #f3f4f6;
    }
    .mobile-menu {
        display: none;
        border-top: 1px solid #f3f4f6;
        background: #fff;
        padding: 0.5rem 1rem;
    }
    .mobile-menu .nav-link {
        display: block;
        width: 100%;
        text-align: left;
        padding: 0.75rem 1rem;
        border-radius: 0.5rem;
    }
    .mobile-menu .nav-link:hover {
        background: #f9fafb;
        transform: translateX(10px);
    }
    @media (max-width: 768px) {
        .nav-links {
            display: none;
        }
        .burger-menu {
            display: block;
        }
        .mobile-menu.open {
            display: block;
        }
    }
"#;

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        menu_open,
        on_toggle_menu,
        on_navigate,
    } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let go_home = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::Home))
    };

    let links = |class: &'static str| -> Html {
        Section::MENU
            .iter()
            .map(|&section| {
                let on_navigate = on_navigate.clone();
                html! {
                    <button
                        key={section.label()}
                        class={class}
                        onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(section))}
                    >
                        {section.label()}
                    </button>
                }
            })
            .collect()
    };

    html! {
        <nav class="top-nav">
            <style>{NAV_CSS}</style>
            <div class="nav-content">
                <button class="nav-logo" onclick={go_home}>
                    {"Shivam Roy"}
                </button>
                <div class="nav-links">
                    { links("nav-link") }
                </div>
                <button
                    class="burger-menu"
                    aria-label="Toggle menu"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            <div class={classes!("mobile-menu", menu_open.then(|| "open"))}>
                { links("nav-link") }
            </div>
        </nav>
    }
}
