use yew::prelude::*;

use crate::motion::hooks::use_reveal;
use crate::motion::reveal::RevealFrom;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub from: RevealFrom,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Plays its entrance animation the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), revealed.then(|| "revealed"))}
            style={props.from.style(revealed, props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
