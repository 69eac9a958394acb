use yew::prelude::*;

use crate::visibility::use_reveal_once;

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Seconds before the entrance transition starts.
    #[prop_or(0.0)]
    pub delay: f64,
}

/// Fades and slides its children up the first time they scroll into view.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal_once(node.clone());

    html! {
        <div
            ref={node}
            class={classes!("reveal", revealed.then(|| "revealed"), props.class.clone())}
            style={format!("transition-delay: {}s;", props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}
