//! Hero banner with pointer parallax.

use std::rc::Rc;

use portfolio_types::{PointerPosition, Portfolio};
use yew::prelude::*;

use crate::components::{Glyph, Icon};

const GRID_BACKGROUND: &str = "background-image: \
    linear-gradient(rgba(255,255,255,0.1) 1px, transparent 1px), \
    linear-gradient(90deg, rgba(255,255,255,0.1) 1px, transparent 1px); \
    background-size: 50px 50px";

/// Properties for HeroSection component.
#[derive(Properties, PartialEq)]
pub struct HeroSectionProps {
    pub content: Rc<Portfolio>,
    pub pointer: PointerPosition,
}

/// Hero section component.
#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let profile = &props.content.profile;
    let pointer = props.pointer;

    let grid_style = format!("{GRID_BACKGROUND}; transform: {}", pointer.parallax(0.01));
    let leading_orb = format!("left: 10%; top: 20%; transform: {}", pointer.parallax(0.02));
    let trailing_orb = format!(
        "right: 10%; bottom: 20%; animation-delay: 1s; transform: {}",
        pointer.parallax(-0.02)
    );

    html! {
        <section class="hero min-h-screen flex items-center justify-center relative overflow-hidden bg-black">
            <div class="absolute inset-0 opacity-20">
                <div class="hero-grid absolute inset-0" style={grid_style}></div>
            </div>

            <div class="absolute inset-0 overflow-hidden">
                <div
                    class="hero-orb absolute w-96 h-96 bg-blue-500/10 rounded-full blur-3xl animate-pulse"
                    style={leading_orb}
                ></div>
                <div
                    class="hero-orb absolute w-80 h-80 bg-purple-500/10 rounded-full blur-3xl animate-pulse"
                    style={trailing_orb}
                ></div>
            </div>

            <div class="text-center z-10 max-w-6xl mx-auto px-6">
                <div class="space-y-8">
                    <div class="space-y-6">
                        <div class="inline-flex items-center gap-2 px-4 py-2 bg-white/5 rounded-full backdrop-blur-sm border border-white/10">
                            <div class="w-2 h-2 bg-green-400 rounded-full animate-pulse"></div>
                            <span class="text-white/60 text-sm font-light">{ &profile.availability }</span>
                        </div>

                        <h1 class="text-7xl lg:text-9xl font-light tracking-tight text-white leading-none">
                            { &profile.headline }
                            <br />
                            <span class="text-white/40">{ &profile.headline_accent }</span>
                        </h1>

                        <p class="text-xl lg:text-2xl text-white/60 font-light max-w-3xl mx-auto leading-relaxed">
                            { &profile.tagline }
                        </p>
                    </div>

                    <div class="flex flex-col sm:flex-row gap-6 justify-center items-center pt-8">
                        <a
                            href={profile.resume_url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="group relative bg-white text-black px-8 py-4 rounded-full font-medium transition-all duration-300 hover:bg-white/90 flex items-center gap-2"
                        >
                            <Icon glyph={Glyph::ExternalLink} size={20} />
                            {"View Resume"}
                            <Icon glyph={Glyph::ArrowUpRight} size={16} />
                        </a>

                        <a
                            href="#work"
                            class="group border border-white/20 text-white hover:bg-white/5 px-8 py-4 rounded-full font-medium transition-all duration-300 flex items-center gap-2"
                        >
                            {"View My Work"}
                            <Icon glyph={Glyph::ArrowUpRight} size={16} />
                        </a>
                    </div>
                </div>

                <div class="mt-24 animate-bounce">
                    <Icon glyph={Glyph::ChevronDown} size={24} class={classes!("text-white/40", "mx-auto")} />
                </div>
            </div>
        </section>
    }
}
