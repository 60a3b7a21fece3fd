use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::components::Link;

use crate::cms::client::media_url;
use crate::cms::queries::{get_about, get_tools};
use crate::cms::types::{AboutData, LogoData};
use crate::components::states::{EmptyState, LoadingSkeleton};
use crate::components::themed_logo::ThemedLogo;
use crate::content::rich_text::{plain_text, RichTextNode};
use crate::effects::scroll_blur::ScrollBlurEffect;
use crate::Route;

fn find_node<'a>(nodes: &'a [RichTextNode], node_type: &str) -> Option<&'a RichTextNode> {
    nodes.iter().find(|node| node.node_type == node_type)
}

#[function_component(Home)]
pub fn home() -> Html {
    let about = use_state(|| None::<AboutData>);
    let tools = use_state(Vec::<LogoData>::new);
    let loading = use_state(|| true);
    let error = use_state(|| false);

    {
        let about = about.clone();
        let tools = tools.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                // Guards the state writes below against resolving after unmount.
                let alive = Rc::new(Cell::new(true));
                let alive_for_cleanup = alive.clone();

                spawn_local(async move {
                    let about_result = get_about().await;
                    let tools_result = get_tools().await;
                    if !alive.get() {
                        return;
                    }

                    match about_result {
                        Ok(data) => about.set(Some(data)),
                        Err(e) => {
                            log::error!("failed to load about page: {e}");
                            error.set(true);
                        }
                    }
                    match tools_result {
                        Ok(data) => tools.set(data),
                        Err(e) => {
                            // The tools grid degrades to empty; the page still renders.
                            log::error!("failed to load tools: {e}");
                        }
                    }
                    loading.set(false);
                });

                move || alive_for_cleanup.set(false)
            },
            (),
        );
    }

    if *loading {
        return html! { <LoadingSkeleton /> };
    }

    let about_data = match (&*about, *error) {
        (Some(data), false) => data.clone(),
        _ => {
            return html! {
                <EmptyState title="Unable to load page" message="Please try again later." />
            }
        }
    };

    let heading = find_node(&about_data.hero, "heading")
        .map(|node| plain_text(&node.children))
        .unwrap_or_default();
    let avatar = find_node(&about_data.hero, "image").and_then(|node| node.image.clone());
    let paragraphs: Vec<String> = about_data
        .hero
        .iter()
        .filter(|node| node.node_type == "paragraph")
        .map(|node| plain_text(&node.children))
        .collect();

    let contact_heading = find_node(&about_data.contact, "heading")
        .map(|node| plain_text(&node.children))
        .unwrap_or_default();
    let contact_lead = find_node(&about_data.contact, "paragraph")
        .map(|node| plain_text(&node.children))
        .unwrap_or_default();

    html! {
        <ScrollBlurEffect>
            <section class="home-hero">
                if let Some(avatar) = avatar {
                    <img
                        class="home-avatar"
                        src={media_url(&avatar.url)}
                        alt={avatar.alternative_text.clone().unwrap_or_else(|| "Profile photo".into())}
                    />
                }
                <h1>{ heading }</h1>
                { for paragraphs.iter().map(|para| html! { <p class="home-lead">{ para.clone() }</p> }) }
            </section>

            <section class="home-logos">
                <h2>{ about_data.heading_businesses.clone() }</h2>
                <div class="logo-grid wide">
                    { for about_data.businesses.iter().map(|business| html! {
                        <ThemedLogo key={business.id} data={business.clone()} />
                    }) }
                </div>
            </section>

            <section class="home-logos">
                <h2>{ about_data.heading_tools.clone() }</h2>
                <div class="logo-grid dense">
                    { for tools.iter().map(|tool| html! {
                        <ThemedLogo key={tool.id} data={tool.clone()} />
                    }) }
                </div>
            </section>

            <section class="home-contact">
                <h2>{ contact_heading }</h2>
                <p class="home-lead">{ contact_lead }</p>
                <Link<Route> to={Route::Contact} classes="cta-button">
                    {"Get in touch"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .home-hero, .home-logos, .home-contact {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    padding: 4rem 2rem;
                    text-align: center;
                }
                .home-avatar { width: 128px; height: 128px; border-radius: 50%; object-fit: cover; }
                .home-lead { max-width: 560px; color: #999; font-size: 1.15rem; }
                .logo-grid { display: grid; gap: 2rem; width: 100%; max-width: 960px; }
                .logo-grid.wide { grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); }
                .logo-grid.dense { grid-template-columns: repeat(auto-fit, minmax(96px, 1fr)); }
                .themed-logo {
                    aspect-ratio: 1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: 1px solid rgba(128, 128, 128, 0.25);
                    border-radius: 8px;
                    padding: 1rem;
                }
                .themed-logo img { max-width: 100%; max-height: 100%; object-fit: contain; }
                .cta-button {
                    padding: 0.9rem 2rem;
                    border-radius: 8px;
                    background: #7EB2FF;
                    color: #1a1a1a;
                    font-weight: 600;
                    text-decoration: none;
                }
                "#}
            </style>
        </ScrollBlurEffect>
    }
}
