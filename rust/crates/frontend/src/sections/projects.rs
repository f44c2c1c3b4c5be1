//! Selected work section.

use std::rc::Rc;

use portfolio_types::Portfolio;
use yew::prelude::*;

use crate::components::{Glyph, Icon, ProjectCard};

/// Properties for ProjectsSection component.
#[derive(Properties, PartialEq)]
pub struct ProjectsSectionProps {
    pub content: Rc<Portfolio>,
}

/// Projects section component.
#[function_component(ProjectsSection)]
pub fn projects_section(props: &ProjectsSectionProps) -> Html {
    let content = &props.content;

    html! {
        <section id="work" class="py-32 px-6 lg:px-12 bg-black">
            <div class="max-w-7xl mx-auto">
                <div class="mb-20">
                    <h2 class="text-6xl lg:text-7xl font-light text-white mb-8 tracking-tight">
                        {"Selected"}<br />
                        <span class="text-white/40">{"Work"}</span>
                    </h2>
                    <p class="text-xl text-white/60 font-light max-w-2xl">
                        {"A collection of projects showcasing expertise in AI/ML, backend development, and innovative problem-solving."}
                    </p>
                </div>

                <div class="space-y-32">
                    { for content.projects.iter().map(|project| html! {
                        <ProjectCard key={project.id.clone()} project={project.clone()} />
                    })}
                </div>

                <div class="text-center mt-24">
                    <a
                        href={content.profile.github_url.clone()}
                        class="group inline-flex items-center gap-2 text-white/60 hover:text-white transition-colors font-light text-lg"
                    >
                        <Icon glyph={Glyph::Github} size={20} />
                        {"View All Projects"}
                        <Icon glyph={Glyph::ArrowUpRight} size={16} />
                    </a>
                </div>
            </div>
        </section>
    }
}
