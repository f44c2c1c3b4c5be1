//! Contact links.

use std::rc::Rc;

use portfolio_types::Portfolio;
use yew::prelude::*;

use crate::components::{Glyph, Icon};

/// Properties for ContactSection component.
#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub content: Rc<Portfolio>,
}

/// Contact section component.
#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let profile = &props.content.profile;
    let links = [
        (Glyph::Mail, profile.mailto(), profile.email.clone()),
        (Glyph::Github, profile.github_url.clone(), profile.github_handle.clone()),
        (Glyph::Linkedin, profile.linkedin_url.clone(), profile.linkedin_handle.clone()),
    ];

    html! {
        <section id="contact" class="py-32 px-6 lg:px-12 bg-black border-t border-white/5">
            <div class="max-w-7xl mx-auto">
                <div class="grid lg:grid-cols-12 gap-20">
                    <div class="lg:col-span-7 space-y-12">
                        <div>
                            <h2 class="text-6xl lg:text-7xl font-light text-white mb-8 tracking-tight">
                                {"Let's"}<br />
                                <span class="text-white/40">{"Connect"}</span>
                            </h2>
                            <p class="text-xl text-white/60 font-light leading-relaxed max-w-2xl">
                                {"I'm always open to discussing new opportunities, innovative projects, or simply having a conversation about the future of AI and technology."}
                            </p>
                        </div>

                        <div class="space-y-4">
                            <h3 class="text-white font-light text-lg">{"Get in touch"}</h3>
                            <div class="space-y-3">
                                { for links.into_iter().map(|(glyph, href, text)| html! {
                                    <a href={href} class="contact-link group flex items-center gap-3 text-white/60 hover:text-white transition-colors">
                                        <Icon glyph={glyph} />
                                        <span class="font-light">{ text }</span>
                                        <Icon glyph={Glyph::ArrowUpRight} size={14} />
                                    </a>
                                })}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
