//! Page footer.

use std::rc::Rc;

use portfolio_types::Portfolio;
use yew::prelude::*;

use crate::components::{Glyph, Icon};

/// Properties for Footer component.
#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub content: Rc<Portfolio>,
}

/// Footer component.
#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let profile = &props.content.profile;

    html! {
        <footer class="bg-black border-t border-white/5 py-12 relative z-10">
            <div class="max-w-7xl mx-auto px-6 lg:px-12">
                <div class="flex flex-col md:flex-row justify-between items-start md:items-center gap-8">
                    <div class="space-y-2">
                        <p class="text-white/40 font-light">
                            { format!("© {} {}", profile.copyright_year, profile.full_name()) }
                        </p>
                        <p class="text-white/20 font-light text-sm">{ &profile.footer_note }</p>
                    </div>
                    <div class="flex items-center gap-6">
                        <a href={profile.github_url.clone()} class="text-white/40 hover:text-white transition-colors">
                            <Icon glyph={Glyph::Github} />
                        </a>
                        <a href={profile.linkedin_url.clone()} class="text-white/40 hover:text-white transition-colors">
                            <Icon glyph={Glyph::Linkedin} />
                        </a>
                        <a href={profile.mailto()} class="text-white/40 hover:text-white transition-colors">
                            <Icon glyph={Glyph::Mail} />
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
