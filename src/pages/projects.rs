use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::cms::queries::{get_projects, ProjectFilter};
use crate::cms::types::ProjectData;
use crate::components::project_card::ProjectCard;
use crate::components::states::{EmptyState, LoadingSkeleton};

#[function_component(Projects)]
pub fn projects() -> Html {
    let tag = use_search_param("tag".to_string());
    let projects = use_state(Vec::<ProjectData>::new);
    let loading = use_state(|| true);
    let error = use_state(|| false);

    {
        let projects = projects.clone();
        let loading = loading.clone();
        let error = error.clone();
        let tag_filter = tag.clone();
        use_effect_with_deps(
            move |current_tag| {
                let alive = Rc::new(Cell::new(true));
                let alive_for_cleanup = alive.clone();
                let tag = current_tag.clone();

                loading.set(true);
                error.set(false);

                spawn_local(async move {
                    let result = get_projects(ProjectFilter { limit: None, tag }).await;
                    if !alive.get() {
                        return;
                    }
                    match result {
                        Ok(data) => projects.set(data),
                        Err(e) => {
                            log::error!("failed to load projects: {e}");
                            error.set(true);
                        }
                    }
                    loading.set(false);
                });

                move || alive_for_cleanup.set(false)
            },
            tag_filter,
        );
    }

    if *loading {
        return html! { <LoadingSkeleton /> };
    }
    if *error {
        return html! {
            <EmptyState title="Unable to load projects" message="Please try again later." />
        };
    }

    html! {
        <div class="projects-page">
            <header class="projects-header">
                <h1>{"Projects"}</h1>
                if let Some(tag) = &tag {
                    <p>{ format!("Filtered by \u{201C}{tag}\u{201D}") }</p>
                }
            </header>
            if projects.is_empty() {
                <EmptyState title="No projects yet" message="Check back soon." />
            } else {
                <div class="projects-grid">
                    { for projects.iter().map(|project| html! {
                        <ProjectCard key={project.id} project={project.clone()} />
                    }) }
                </div>
            }
            <style>
                {r#"
                .projects-page { max-width: 1100px; margin: 0 auto; padding: 7rem 2rem 4rem; }
                .projects-header { margin-bottom: 3rem; }
                .projects-header p { color: #999; }
                .projects-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .project-card {
                    display: flex;
                    flex-direction: column;
                    border: 1px solid rgba(128, 128, 128, 0.25);
                    border-radius: 12px;
                    overflow: hidden;
                    text-decoration: none;
                    color: inherit;
                    transition: transform 0.2s ease, border-color 0.2s ease;
                }
                .project-card:hover { transform: translateY(-4px); border-color: #7EB2FF; }
                .project-card-thumb { width: 100%; height: 180px; object-fit: cover; }
                .project-card-body { padding: 1.25rem; display: flex; flex-direction: column; gap: 0.4rem; }
                .project-card-meta { font-size: 0.8rem; color: #999; }
                .project-card-body p { color: #999; font-size: 0.95rem; }
                "#}
            </style>
        </div>
    }
}
