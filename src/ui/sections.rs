/// Static page sections

use crate::content::{
    self, Milestone, Project, ABOUT_TEXT, AVATAR_URL, EDUCATION, EXPERIENCE, GITHUB_USER, HANDLE, HERO_LINKS,
    HERO_ROLES, MAP_EMBED_URL, OWNER, PROJECTS, RESUME_URL, SERVICES, SKILLS, SOCIAL_LINKS, TAGLINES,
    TAGLINE_INTERVAL_MS, TECH_STACK,
};
use crate::error::SiteError;
use crate::ui::components::{tags, ExternalLink, SectionHeading, TagList};
use gloo_timers::callback::Interval;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <p class="hero-greeting">{"Hi, I'm"}</p>
            <h1 class="hero-name">{OWNER}</h1>
            <p class="hero-roles">{HERO_ROLES.join(" · ")}</p>

            <div class="hero-links">
                {for HERO_LINKS.iter().map(|link| html! {
                    <ExternalLink key={link.label} href={link.href} class="hero-link">
                        {link.label}
                    </ExternalLink>
                })}
            </div>

            <div class="hero-actions">
                <ExternalLink href={RESUME_URL} class="button primary">{"Resume"}</ExternalLink>
                <a href="#contact" class="button secondary">{"Contact Me"}</a>
            </div>
        </section>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let [stats_url, langs_url] = content::github_stats_urls(GITHUB_USER);

    html! {
        <section id="about" class="about">
            <Terminal />

            <div class="about-grid">
                <div class="profile-card">
                    <img src={AVATAR_URL} alt="Avatar" class="avatar" loading="lazy" />
                    <div>
                        <p class="profile-name">{OWNER}</p>
                        <p class="profile-handle">{HANDLE}</p>
                    </div>
                </div>

                <div class="about-text">
                    <h2 class="section-title">{"We can make it together"}</h2>
                    <p>{ABOUT_TEXT}</p>
                    <TagList tags={tags(SKILLS)} class="skills" />
                </div>
            </div>

            <div class="github-stats">
                <img src={stats_url} alt="GitHub stats" loading="lazy" />
                <img src={langs_url} alt="Top languages" loading="lazy" />
            </div>
        </section>
    }
}

/// Prompt that cycles through the taglines
#[function_component(Terminal)]
pub fn terminal() -> Html {
    let index = use_state(|| 0usize);
    let counter = use_mut_ref(|| 0usize);

    {
        let index = index.setter();
        use_effect_with((), move |_| {
            let interval = Interval::new(TAGLINE_INTERVAL_MS, move || {
                let next = content::next_tagline(*counter.borrow());
                *counter.borrow_mut() = next;
                index.set(next);
            });
            move || drop(interval)
        });
    }

    html! {
        <div class="terminal">
            <span class="terminal-prompt">{"thavindu@portfolio:~$"}</span>
            <span class="terminal-line">{TAGLINES[*index]}</span>
            <span class="terminal-cursor">{"_"}</span>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let selected = use_state(|| None::<Project>);

    let on_select = {
        let selected = selected.clone();
        move |project: Project| {
            let selected = selected.clone();
            Callback::from(move |_: MouseEvent| selected.set(Some(project)))
        }
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    // Clicks inside the dialog must not reach the backdrop
    let on_dialog_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <section id="projects" class="projects">
            <SectionHeading title="Featured Projects" />

            <div class="project-grid">
                {for PROJECTS.iter().map(|project| html! {
                    <div key={project.title} class="project-card" onclick={on_select(*project)}>
                        <h3 class="project-title">{project.title}</h3>
                        <p class="project-description">{project.description}</p>
                        <TagList tags={tags(project.technologies)} />
                    </div>
                })}
            </div>

            if let Some(project) = *selected {
                <div class="modal-backdrop" onclick={on_close.clone()}>
                    <div class="modal" role="dialog" aria-modal="true" onclick={on_dialog_click}>
                        <button class="modal-close" aria-label="Close" onclick={on_close}>{"✕"}</button>
                        <h3 class="project-title">{project.title}</h3>
                        <p>{project.description}</p>
                        <TagList tags={tags(project.technologies)} />
                        <ExternalLink href={project.github} class="button primary">{"View on GitHub"}</ExternalLink>
                    </div>
                </div>
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct MilestoneCardProps {
    milestone: Milestone,
}

#[function_component(MilestoneCard)]
fn milestone_card(props: &MilestoneCardProps) -> Html {
    let m = &props.milestone;

    html! {
        <div class="milestone">
            <h4 class="milestone-title">{m.title}</h4>
            <p class="milestone-place">{m.place}</p>
            <p class="milestone-duration">{m.duration}</p>
            <ul class="milestone-details">
                {for m.details.iter().map(|d| html! { <li>{*d}</li> })}
            </ul>
        </div>
    }
}

#[function_component(Roadmap)]
pub fn roadmap() -> Html {
    let column = |title: &'static str, items: &'static [Milestone]| -> Html {
        html! {
            <div class="roadmap-column">
                <h3 class="roadmap-heading">{title}</h3>
                {for items.iter().map(|m| html! { <MilestoneCard key={m.title} milestone={*m} /> })}
            </div>
        }
    };

    html! {
        <section id="roadmap" class="roadmap">
            <SectionHeading title="Road Map" />
            <div class="roadmap-grid">
                {column("Education", EDUCATION)}
                {column("Professional Experience", EXPERIENCE)}
            </div>
        </section>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services">
            <SectionHeading title="Services" subtitle="What I can do for you" />

            <div class="service-grid">
                {for SERVICES.iter().map(|service| html! {
                    <div key={service.title} class="service-card">
                        <h3 class="service-title">{service.title}</h3>
                        <p class="service-description">{service.description}</p>
                    </div>
                })}
            </div>

            <h3 class="stack-heading">{"Tech Stack"}</h3>
            <TagList tags={tags(TECH_STACK)} class="tech-stack" />
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contact" class="contact">
            <SectionHeading title="Get in Touch" subtitle="Kandy, Sri Lanka" />
            <iframe
                class="map"
                title="Location"
                src={MAP_EMBED_URL}
                loading="lazy"
                referrerpolicy="no-referrer-when-downgrade"
            ></iframe>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let on_back_to_top = Callback::from(|_: MouseEvent| {
        if let Err(e) = scroll_to_top() {
            log::warn!("Could not scroll to top: {}", e);
        }
    });

    html! {
        <footer class="site-footer">
            <a href="/" class="footer-brand">{OWNER}</a>
            <div class="social-links">
                {for SOCIAL_LINKS.iter().map(|link| html! {
                    <ExternalLink key={link.label} href={link.href} class="social-link">
                        {link.label}
                    </ExternalLink>
                })}
            </div>
            <button class="back-to-top" aria-label="Back to top" onclick={on_back_to_top}>{"↑"}</button>
            <p class="copyright">{format!("© {} {}. All rights reserved.", current_year(), OWNER)}</p>
        </footer>
    }
}

/// Smoothly scroll the window back to the top of the page
pub fn scroll_to_top() -> Result<(), SiteError> {
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
