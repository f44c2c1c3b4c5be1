//! About, education and location.

use std::rc::Rc;

use portfolio_types::Portfolio;
use yew::prelude::*;

/// Properties for AboutSection component.
#[derive(Properties, PartialEq)]
pub struct AboutSectionProps {
    pub content: Rc<Portfolio>,
}

/// About section component.
#[function_component(AboutSection)]
pub fn about_section(props: &AboutSectionProps) -> Html {
    let about = &props.content.about;
    let education = &about.education;
    let profile = &props.content.profile;

    html! {
        <section id="about" class="py-32 px-6 lg:px-12 bg-black border-t border-white/5">
            <div class="max-w-7xl mx-auto">
                <div class="grid lg:grid-cols-12 gap-20">
                    <div class="lg:col-span-7 space-y-12">
                        <h2 class="text-6xl lg:text-7xl font-light text-white mb-8 tracking-tight">
                            {"About"}<br />
                            <span class="text-white/40">{"Me"}</span>
                        </h2>

                        <div class="space-y-8 text-lg text-white/70 leading-relaxed font-light">
                            { for about.paragraphs.iter().map(|paragraph| html! { <p>{ paragraph }</p> }) }
                        </div>
                    </div>

                    <div class="lg:col-span-5 space-y-12">
                        <div class="space-y-6">
                            <h3 class="text-2xl font-light text-white">{"Education"}</h3>
                            <div class="p-8 bg-white/5 rounded-2xl border border-white/10">
                                <div class="space-y-4">
                                    <div class="flex justify-between items-start">
                                        <div>
                                            <h4 class="text-white font-medium">{ &education.degree }</h4>
                                            <p class="text-white/60 font-light">{ &education.institution }</p>
                                        </div>
                                        <span class="text-white/40 text-sm">{ &education.period }</span>
                                    </div>
                                    <p class="text-white/60 font-light text-sm">{ &education.focus }</p>
                                </div>
                            </div>
                        </div>

                        <div class="space-y-6">
                            <h3 class="text-2xl font-light text-white">{"Location"}</h3>
                            <div class="p-8 bg-white/5 rounded-2xl border border-white/10">
                                <p class="text-white/60 font-light">{ &profile.location }</p>
                                <p class="text-white/40 font-light text-sm mt-2">{ &profile.timezone }</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
