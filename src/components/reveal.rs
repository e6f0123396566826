use yew::prelude::*;

use crate::config::REVEAL_VISIBILITY_THRESHOLD;
use crate::visibility::use_in_view_once;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealVariant {
    #[default]
    FadeUp,
    FadeLeft,
    FadeRight,
    ScaleIn,
}

impl RevealVariant {
    fn class(self) -> &'static str {
        match self {
            RevealVariant::FadeUp => "reveal-up",
            RevealVariant::FadeLeft => "reveal-left",
            RevealVariant::FadeRight => "reveal-right",
            RevealVariant::ScaleIn => "reveal-scale",
        }
    }
}

pub const REVEAL_CSS: &str = r#"
    .reveal {
        opacity: 0;
        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    }
    .reveal-up { transform: translateY(60px); }
    .reveal-left { transform: translateX(-60px); }
    .reveal-right { transform: translateX(60px); }
    .reveal-scale { transform: scale(0.8); }
    .reveal.revealed {
        opacity: 1;
        transform: none;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub variant: RevealVariant,
    /// Extra transition delay in milliseconds, for staggering siblings.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view_once(node.clone(), REVEAL_VISIBILITY_THRESHOLD);

    html! {
        <div
            ref={node}
            class={classes!(
                "reveal",
                props.variant.class(),
                revealed.then_some("revealed"),
                props.class.clone()
            )}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
