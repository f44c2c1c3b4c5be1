//! Icon placeholder component.
//!
//! Glyph artwork comes from the stylesheet; this only emits a sized element
//! carrying the glyph's class name.

use portfolio_types::FocusIcon;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    ArrowUpRight,
    Brain,
    ChevronDown,
    Close,
    Code,
    Database,
    ExternalLink,
    Github,
    Linkedin,
    Mail,
    Menu,
}

impl Glyph {
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::ArrowUpRight => "icon-arrow-up-right",
            Self::Brain => "icon-brain",
            Self::ChevronDown => "icon-chevron-down",
            Self::Close => "icon-x",
            Self::Code => "icon-code",
            Self::Database => "icon-database",
            Self::ExternalLink => "icon-external-link",
            Self::Github => "icon-github",
            Self::Linkedin => "icon-linkedin",
            Self::Mail => "icon-mail",
            Self::Menu => "icon-menu",
        }
    }
}

impl From<FocusIcon> for Glyph {
    fn from(icon: FocusIcon) -> Self {
        match icon {
            FocusIcon::Brain => Self::Brain,
            FocusIcon::Code => Self::Code,
            FocusIcon::Database => Self::Database,
        }
    }
}

/// Properties for Icon component.
#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub glyph: Glyph,
    #[prop_or(18)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Icon component.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let style = format!("width: {0}px; height: {0}px;", props.size);

    html! {
        <i
            class={classes!("icon", props.glyph.class_name(), props.class.clone())}
            style={style}
            aria-hidden="true"
        ></i>
    }
}
