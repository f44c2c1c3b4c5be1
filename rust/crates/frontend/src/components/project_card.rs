//! Project showcase block.

use portfolio_types::ProjectEntry;
use yew::prelude::*;

use crate::components::{Glyph, Icon};

/// Properties for ProjectCard component.
#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: ProjectEntry,
}

/// Project block component.
#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let badge_class = classes!(
        "status-badge",
        "px-3",
        "py-1",
        "rounded-full",
        "text-xs",
        "font-medium",
        project.status.tone().classes()
    );

    html! {
        <div
            class={classes!("project", "group", "relative", project.featured.then_some("featured"))}
            data-project-id={project.id.clone()}
        >
            <div class="grid lg:grid-cols-12 gap-12 items-center">
                <div class="lg:col-span-7 space-y-8">
                    <div class="space-y-2">
                        <div class="flex items-center gap-4">
                            <span class="project-id text-white/40 text-sm font-light">{ &project.id }</span>
                            <span class="project-year text-white/40 text-sm font-light">{ &project.year }</span>
                            <span class={badge_class}>{ project.status.as_str() }</span>
                        </div>
                        <h3 class="text-4xl lg:text-5xl font-light text-white group-hover:text-white/80 transition-colors">
                            { &project.title }
                        </h3>
                        <p class="text-xl text-white/60 font-light">{ &project.subtitle }</p>
                    </div>

                    <p class="text-lg text-white/70 leading-relaxed font-light max-w-2xl">
                        { &project.description }
                    </p>
                </div>

                <div class="tech-list lg:col-span-5 flex flex-wrap gap-3 justify-center items-center">
                    { for project.tech.iter().map(|tech| html! {
                        <span class="tech px-6 py-4 bg-white/5 border border-white/10 rounded-2xl text-white/80 text-lg font-medium mb-2">
                            { tech }
                        </span>
                    })}
                </div>

                <div class="lg:col-span-5 flex justify-start mt-2">
                    <a
                        href={project.repository.clone()}
                        class="repo-link inline-flex items-center gap-2 text-white hover:text-white/70 transition-colors font-light px-5 py-2 rounded-full bg-white/5 border border-white/10 text-base"
                    >
                        <Icon glyph={Glyph::Github} size={16} />
                        {"View Code"}
                        <Icon glyph={Glyph::ArrowUpRight} size={13} />
                    </a>
                </div>
            </div>
        </div>
    }
}
