use yew::prelude::*;

use crate::pages::portfolio::Portfolio;
use crate::shell::GlobalStyle;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <>
            <GlobalStyle />
            <Portfolio />
        </>
    }
}
