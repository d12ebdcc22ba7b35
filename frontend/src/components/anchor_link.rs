use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::AnchorContext;
use crate::navigation::sections::SectionId;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub to: SectionId,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let anchors = use_context::<AnchorContext>();
    let is_active = anchors
        .as_ref()
        .map_or(false, |anchors| anchors.active == Some(props.to));

    let onclick = {
        let to = props.to;
        let navigate = anchors.map(|anchors| anchors.navigate);
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            match &navigate {
                Some(navigate) => navigate.emit(to),
                None => warn!("Link to #{} rendered without anchor navigation", to),
            }
        })
    };

    html! {
        <a
            href={props.to.href()}
            class={classes!(props.class.clone(), is_active.then(|| "active"))}
            {onclick}
        >
            { for props.children.iter() }
        </a>
    }
}
