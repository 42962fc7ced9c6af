/// Reusable UI components

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <h2 class="section-title">
                <span class="gradient-text">{props.title.clone()}</span>
            </h2>
            if let Some(subtitle) = &props.subtitle {
                <p class="section-subtitle">{subtitle.clone()}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TagListProps {
    pub tags: Vec<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TagList)]
pub fn tag_list(props: &TagListProps) -> Html {
    if props.tags.is_empty() {
        return html! {};
    }

    html! {
        <ul class={classes!("tag-list", props.class.clone())}>
            {for props.tags.iter().map(|tag| html! {
                <li key={tag.to_string()} class="tag">{tag.clone()}</li>
            })}
        </ul>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExternalLinkProps {
    pub href: AttrValue,
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Link that opens in a new tab without handing over `window.opener`
#[function_component(ExternalLink)]
pub fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            class={props.class.clone()}
        >
            {props.children.clone()}
        </a>
    }
}

/// Convert static strings into tag props
pub fn tags(items: &[&'static str]) -> Vec<AttrValue> {
    items.iter().map(|s| AttrValue::from(*s)).collect()
}
