//! Certification card.

use std::rc::Rc;

use portfolio_types::Portfolio;
use yew::prelude::*;

use crate::components::{Glyph, Icon};

/// Properties for CertificationSection component.
#[derive(Properties, PartialEq)]
pub struct CertificationSectionProps {
    pub content: Rc<Portfolio>,
}

/// Certification section component.
#[function_component(CertificationSection)]
pub fn certification_section(props: &CertificationSectionProps) -> Html {
    let cert = &props.content.certification;

    html! {
        <section id="certifications" class="py-32 px-6 lg:px-12 bg-black border-t border-white/5">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-5xl lg:text-6xl font-light text-white mb-12 tracking-tight text-center">
                    {"Certifications"}
                </h2>
                <div class="bg-white/5 border border-white/10 rounded-2xl p-8 flex flex-col md:flex-row items-center gap-8 shadow-lg">
                    <div class="flex-shrink-0 flex flex-col items-center md:items-start">
                        <img
                            src={cert.issuer_logo_url.clone()}
                            alt={format!("{} Logo", cert.issuer)}
                            class="h-10 mb-4"
                            style="filter: invert(1)"
                        />
                        <span class="text-white/60 text-sm font-light mb-2">{ &cert.issuer }</span>
                        <span class="text-white/40 text-xs">{ &cert.issued_on }</span>
                    </div>
                    <div class="flex-1">
                        <h3 class="text-2xl font-semibold text-white mb-2">{ &cert.title }</h3>
                        <p class="text-white/60 font-light mb-4">{ &cert.provider_note }</p>
                        <a
                            href={cert.verify_url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-2 px-6 py-3 rounded-full bg-white text-black font-medium hover:bg-white/90 transition-all border border-white/10"
                        >
                            {"View Certificate"}
                            <Icon glyph={Glyph::ArrowUpRight} size={16} />
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
