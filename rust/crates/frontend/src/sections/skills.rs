//! Skill bars and focus-area cards.

use std::rc::Rc;

use portfolio_types::Portfolio;
use yew::prelude::*;

use crate::components::{Glyph, Icon, SkillBar};

/// Properties for SkillsSection component.
#[derive(Properties, PartialEq)]
pub struct SkillsSectionProps {
    pub content: Rc<Portfolio>,
}

/// Skills section component.
#[function_component(SkillsSection)]
pub fn skills_section(props: &SkillsSectionProps) -> Html {
    let content = &props.content;

    html! {
        <section id="skills" class="py-32 px-6 lg:px-12 bg-black border-t border-white/5">
            <div class="max-w-7xl mx-auto">
                <div class="mb-20">
                    <h2 class="text-6xl lg:text-7xl font-light text-white mb-8 tracking-tight">
                        {"Skills &"}<br />
                        <span class="text-white/40">{"Expertise"}</span>
                    </h2>
                </div>

                <div class="grid lg:grid-cols-2 gap-16">
                    { for content.skills.iter().map(|skill| html! {
                        <SkillBar key={skill.name.clone()} skill={skill.clone()} />
                    })}
                </div>

                <div class="grid md:grid-cols-3 gap-8 mt-24">
                    { for content.focus_areas.iter().map(|area| html! {
                        <div class="focus-area p-8 bg-white/5 rounded-2xl border border-white/10 hover:bg-white/10 transition-all duration-500">
                            <Icon glyph={Glyph::from(area.icon)} size={32} class={classes!("mb-6", "text-white")} />
                            <h3 class="text-xl font-light text-white mb-4">{ &area.title }</h3>
                            <p class="text-white/60 font-light leading-relaxed">{ &area.blurb }</p>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}
