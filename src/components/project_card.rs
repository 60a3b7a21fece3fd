use yew::prelude::*;
use yew_router::components::Link;

use crate::cms::client::media_url;
use crate::cms::types::ProjectData;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: ProjectData,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let year = project.date.format("%Y").to_string();

    html! {
        <Link<Route>
            to={Route::Project { slug: project.slug.clone() }}
            classes="project-card"
        >
            if let Some(thumb) = &project.project_thumb {
                <img
                    class="project-card-thumb"
                    src={media_url(&thumb.url)}
                    alt={thumb.alternative_text.clone().unwrap_or_else(|| project.title.clone())}
                    loading="lazy"
                />
            }
            <div class="project-card-body">
                <span class="project-card-meta">
                    { year }
                    if let Some(tag) = project.primary_tag() {
                        { format!(" \u{00B7} {tag}") }
                    }
                </span>
                <h3>{ project.title.clone() }</h3>
                if let Some(description) = &project.description {
                    <p>{ description.clone() }</p>
                }
            </div>
        </Link<Route>>
    }
}
