//! Main application component.
//!
//! `App` owns the two pieces of interactive state, pointer position and the
//! mobile menu flag, and hands them to children as plain props.

use portfolio_types::{MenuState, Portfolio};
use yew::prelude::*;

use crate::components::{Cursor, Footer, Navigation};
use crate::hooks::use_pointer_position;
use crate::sections::{
    AboutSection, CertificationSection, ContactSection, HeroSection, ProjectsSection,
    SkillsSection,
};

/// Load the embedded content, logging problems instead of failing.
fn load_content() -> Portfolio {
    match Portfolio::builtin() {
        Ok(portfolio) => {
            for problem in portfolio.validate() {
                log::warn!("Content problem: {}", problem);
            }
            log::info!(
                "Loaded {} projects and {} skills",
                portfolio.projects.len(),
                portfolio.skills.len()
            );
            portfolio
        }
        Err(e) => {
            log::error!("Failed to load site content: {}", e);
            Portfolio::default()
        }
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let content = use_memo((), |_| load_content());
    let pointer = use_pointer_position();
    let menu = use_state(MenuState::default);

    let on_toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let next = menu.toggled();
            log::debug!("Menu open: {}", next.is_open());
            menu.set(next);
        })
    };

    let on_navigate = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.closed()))
    };

    html! {
        <div class="min-h-screen bg-black text-white overflow-x-hidden cursor-none">
            <Cursor position={pointer} />
            <Navigation
                content={content.clone()}
                menu={*menu}
                on_toggle={on_toggle}
                on_navigate={on_navigate}
            />
            <HeroSection content={content.clone()} pointer={pointer} />
            <ProjectsSection content={content.clone()} />
            <AboutSection content={content.clone()} />
            <SkillsSection content={content.clone()} />
            <CertificationSection content={content.clone()} />
            <ContactSection content={content.clone()} />
            <Footer content={content} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use yew::ServerRenderer;

    use super::*;
    use crate::components::NavigationProps;

    async fn render_app() -> String {
        ServerRenderer::<App>::new().hydratable(false).render().await
    }

    async fn render_navigation(menu: MenuState) -> String {
        ServerRenderer::<Navigation>::with_props(move || NavigationProps {
            content: Rc::new(load_content()),
            menu,
            on_toggle: Callback::from(|_: MouseEvent| ()),
            on_navigate: Callback::from(|_: MouseEvent| ()),
        })
        .hydratable(false)
        .render()
        .await
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("`{needle}` not rendered"))
    }

    #[test]
    fn test_load_content_uses_builtin() {
        let content = load_content();

        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.profile.first_name, "Arpan");
    }

    #[tokio::test]
    async fn test_renders_three_projects_in_order() {
        let html = render_app().await;

        assert_eq!(html.matches("data-project-id=").count(), 3);

        let first = position(&html, r#"data-project-id="01""#);
        let second = position(&html, r#"data-project-id="02""#);
        let third = position(&html, r#"data-project-id="03""#);
        assert!(first < second && second < third);
    }

    #[tokio::test]
    async fn test_project_blocks_show_their_details() {
        let html = render_app().await;
        let content = load_content();

        for project in &content.projects {
            let start = position(&html, &format!(r#"data-project-id="{}""#, project.id));
            let block = &html[start..];
            let block = match block[1..].find("data-project-id=") {
                Some(end) => &block[..end + 1],
                None => block,
            };

            assert!(block.contains(&project.year), "{}", project.id);
            assert!(block.contains(project.status.as_str()), "{}", project.id);
            assert!(block.contains(&project.title), "{}", project.id);
            assert!(block.contains(&project.repository), "{}", project.id);
            for tech in &project.tech {
                assert!(block.contains(tech.as_str()), "{} missing {}", project.id, tech);
            }
        }
    }

    #[tokio::test]
    async fn test_badges_follow_status() {
        let html = render_app().await;

        assert!(html.contains("bg-green-500/20"));
        assert!(html.contains("bg-blue-500/20"));
        assert!(html.contains("bg-orange-500/20"));
        assert!(!html.contains("bg-white/10 text-white/60"));
    }

    #[tokio::test]
    async fn test_sections_render_in_order() {
        let html = render_app().await;

        let anchors = [
            r#"id="work""#,
            r#"id="about""#,
            r#"id="skills""#,
            r#"id="certifications""#,
            r#"id="contact""#,
            "<footer",
        ];
        let mut last = position(&html, "hero");
        for anchor in anchors {
            let at = position(&html, anchor);
            assert!(at > last, "{anchor} out of order");
            last = at;
        }
    }

    #[tokio::test]
    async fn test_skill_bars_use_proficiency() {
        let html = render_app().await;

        assert_eq!(html.matches("skill-fill").count(), 8);
        assert!(html.contains("width: 95%"));
        assert!(html.contains("width: 78%"));
    }

    #[tokio::test]
    async fn test_initial_render_has_cursor_at_origin() {
        let html = render_app().await;

        assert!(html.contains("left: -12px; top: -12px"));
        assert!(html.contains("translate(0px, 0px)"));
    }

    #[tokio::test]
    async fn test_contact_links_pass_through() {
        let html = render_app().await;

        assert!(html.contains(r#"href="mailto:arpansharmauk07@gmail.com""#));
        assert!(html.contains("https://www.coursera.org/account/accomplishments/verify/X26GITC86AO5"));
        assert!(html.contains("© 2025 Arpan Sharma"));
    }

    #[tokio::test]
    async fn test_mobile_menu_hidden_when_closed() {
        let html = render_navigation(MenuState::default()).await;

        assert!(!html.contains("mobile-menu"));
        assert!(html.contains("icon-menu"));
    }

    #[tokio::test]
    async fn test_mobile_menu_lists_links_when_open() {
        let html = render_navigation(MenuState::default().toggled()).await;

        assert!(html.contains("mobile-menu"));
        assert!(html.contains("icon-x"));
        // desktop bar plus mobile panel
        assert_eq!(html.matches(r##"href="#contact""##).count(), 2);
    }
}
