//! Top navigation bar with the mobile menu panel.

use std::rc::Rc;

use portfolio_types::{MenuState, NAV_ITEMS, Portfolio};
use yew::prelude::*;

use crate::components::{Glyph, Icon};

/// Properties for Navigation component.
#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub content: Rc<Portfolio>,
    pub menu: MenuState,
    /// Menu button pressed.
    pub on_toggle: Callback<MouseEvent>,
    /// A link in the mobile panel was chosen.
    pub on_navigate: Callback<MouseEvent>,
}

/// Navigation bar component.
#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let profile = &props.content.profile;
    let (brand, brand_dim) = profile.brand();
    let menu_glyph = if props.menu.is_open() {
        Glyph::Close
    } else {
        Glyph::Menu
    };

    html! {
        <nav class="fixed top-0 w-full z-40 bg-black/80 backdrop-blur-xl border-b border-white/5">
            <div class="max-w-7xl mx-auto px-6 lg:px-12">
                <div class="flex justify-between items-center h-20">
                    <div class="text-2xl font-light tracking-tight text-white">
                        { brand }
                        <span class="text-white/40">{ brand_dim }</span>
                    </div>

                    <div class="nav-links hidden lg:flex items-center space-x-12">
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <a
                                key={item.anchor}
                                href={item.href()}
                                class="text-white/60 hover:text-white transition-all duration-500 text-sm tracking-wide uppercase font-light relative group"
                            >
                                { item.label }
                                <span class="absolute -bottom-1 left-0 w-0 h-px bg-white transition-all duration-300 group-hover:w-full"></span>
                            </a>
                        })}
                    </div>

                    <div class="hidden lg:flex items-center space-x-4">
                        <a href={profile.github_url.clone()} class="text-white/60 hover:text-white transition-colors">
                            <Icon glyph={Glyph::Github} />
                        </a>
                        <a href={profile.linkedin_url.clone()} class="text-white/60 hover:text-white transition-colors">
                            <Icon glyph={Glyph::Linkedin} />
                        </a>
                    </div>

                    <button class="menu-toggle lg:hidden text-white" onclick={props.on_toggle.clone()}>
                        <Icon glyph={menu_glyph} size={24} />
                    </button>
                </div>
            </div>

            if props.menu.is_open() {
                <div class="mobile-menu lg:hidden absolute top-full left-0 w-full bg-black/95 backdrop-blur-xl border-b border-white/5">
                    <div class="px-6 py-8 space-y-6">
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <a
                                key={item.anchor}
                                href={item.href()}
                                class="block text-white/60 hover:text-white transition-colors text-lg"
                                onclick={props.on_navigate.clone()}
                            >
                                { item.label }
                            </a>
                        })}
                    </div>
                </div>
            }
        </nav>
    }
}
