//! Skill progress bar component.

use portfolio_types::SkillEntry;
use yew::prelude::*;

/// Properties for SkillBar component.
#[derive(Properties, PartialEq)]
pub struct SkillBarProps {
    pub skill: SkillEntry,
}

/// Skill progress bar component.
#[function_component(SkillBar)]
pub fn skill_bar(props: &SkillBarProps) -> Html {
    let skill = &props.skill;

    html! {
        <div class="skill group relative">
            <div class="flex justify-between items-center mb-4">
                <div>
                    <h3 class="text-xl font-light text-white group-hover:text-white/80 transition-colors">
                        { &skill.name }
                    </h3>
                    <p class="text-white/40 font-light text-sm">{ &skill.category }</p>
                </div>
                <span class="text-white/60 font-light">{ format!("{}%", skill.bar_width()) }</span>
            </div>

            <div class="relative h-px bg-white/10 overflow-hidden">
                <div
                    class="skill-fill absolute left-0 top-0 h-full bg-gradient-to-r from-white to-white/60 transition-all duration-1000 ease-out"
                    style={skill.bar_style()}
                ></div>
            </div>
        </div>
    }
}
