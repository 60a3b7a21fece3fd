use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::components::Link;

use crate::cms::client::media_url;
use crate::cms::queries::{get_project_by_slug, get_projects, ProjectFilter};
use crate::cms::types::ProjectData;
use crate::components::block_renderer::ContentBlockRenderer;
use crate::components::project_card::ProjectCard;
use crate::components::states::{EmptyState, LoadingSkeleton};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProjectPageProps {
    pub slug: String,
}

#[function_component(ProjectPage)]
pub fn project_page(props: &ProjectPageProps) -> Html {
    let project = use_state(|| None::<ProjectData>);
    let others = use_state(Vec::<ProjectData>::new);
    let loading = use_state(|| true);
    let error = use_state(|| false);
    let not_found = use_state(|| false);

    {
        let project = project.clone();
        let others = others.clone();
        let loading = loading.clone();
        let error = error.clone();
        let not_found = not_found.clone();
        use_effect_with_deps(
            move |slug: &String| {
                let alive = Rc::new(Cell::new(true));
                let alive_for_cleanup = alive.clone();
                let slug = slug.clone();

                loading.set(true);
                error.set(false);
                not_found.set(false);

                // Back to the top when navigating between detail pages.
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }

                spawn_local(async move {
                    let result = get_project_by_slug(&slug).await;
                    let others_result = get_projects(ProjectFilter {
                        limit: Some(7),
                        tag: None,
                    })
                    .await;
                    if !alive.get() {
                        return;
                    }

                    match result {
                        Ok(Some(data)) => project.set(Some(data)),
                        Ok(None) => not_found.set(true),
                        Err(e) => {
                            log::error!("failed to load project {slug}: {e}");
                            error.set(true);
                        }
                    }
                    if let Ok(data) = others_result {
                        others.set(
                            data.into_iter()
                                .filter(|other| other.slug != slug)
                                .take(6)
                                .collect(),
                        );
                    }
                    loading.set(false);
                });

                move || alive_for_cleanup.set(false)
            },
            props.slug.clone(),
        );
    }

    if *loading {
        return html! { <LoadingSkeleton /> };
    }
    if *not_found {
        return html! {
            <EmptyState
                title="Project not found"
                message="This project does not exist or has been unpublished."
            />
        };
    }

    let project_data = match (&*project, *error) {
        (Some(data), false) => data.clone(),
        _ => {
            return html! {
                <EmptyState title="Unable to load project" message="Please try again later." />
            }
        }
    };

    let date_label = project_data.date.format("%b %Y").to_string();

    html! {
        <article class="project-page">
            <Link<Route> to={Route::Projects} classes="project-back">
                {"\u{2190} Back"}
            </Link<Route>>

            <header class="project-header">
                <h1>{ project_data.title.clone() }</h1>
                if let Some(description) = &project_data.description {
                    <p class="project-lead">{ description.clone() }</p>
                }
                <p class="project-meta">
                    if let Some(client) = &project_data.project_client {
                        <span>{ client.clone() }</span>
                        <span>{"\u{2022}"}</span>
                    }
                    <time>{ date_label }</time>
                    if let Some(role) = &project_data.project_role {
                        <span>{"\u{2022}"}</span>
                        <span>{ role.clone() }</span>
                    }
                </p>
            </header>

            if let Some(thumb) = &project_data.project_thumb {
                <img
                    class="project-hero"
                    src={media_url(&thumb.url)}
                    alt={thumb.alternative_text.clone().unwrap_or_else(|| project_data.title.clone())}
                    draggable="false"
                />
            }

            <div class="project-body">
                <ContentBlockRenderer
                    blocks={project_data.body.clone()}
                    project_title={project_data.title.clone()}
                />
            </div>

            if !others.is_empty() {
                <section class="project-others">
                    <h2>{"Other projects"}</h2>
                    <div class="project-others-grid">
                        { for others.iter().map(|other| html! {
                            <ProjectCard key={other.id} project={other.clone()} />
                        }) }
                    </div>
                </section>
            }

            <style>
                {r#"
                .project-page { padding-top: 5rem; }
                .project-back {
                    position: fixed;
                    bottom: 2rem;
                    left: 2rem;
                    z-index: 20;
                    padding: 0.5rem 1rem;
                    border-radius: 8px;
                    background: rgba(26, 26, 26, 0.8);
                    color: #fff;
                    text-decoration: none;
                }
                .project-header {
                    min-height: 60vh;
                    max-width: 680px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    text-align: center;
                }
                .project-lead { font-size: 1.15rem; color: #999; }
                .project-meta { display: flex; gap: 0.5rem; flex-wrap: wrap; justify-content: center; color: #999; font-size: 0.9rem; }
                .project-hero {
                    display: block;
                    width: 100%;
                    max-width: 960px;
                    height: auto;
                    margin: 0 auto;
                    border-radius: 8px;
                }
                .project-body { display: flex; flex-direction: column; gap: 2rem; margin: 4rem 0; }
                .project-others { padding: 4rem 2rem; }
                .project-others h2 { text-align: center; margin-bottom: 2rem; }
                .project-others-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                    gap: 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                "#}
            </style>
        </article>
    }
}
