use yew::prelude::*;

use crate::cms::client::media_url;
use crate::components::carousel::Carousel;
use crate::components::comparison_slider::ComparisonSlider;
use crate::components::stats::Stats;
use crate::components::video::Video;
use crate::content::blocks::{visible_blocks, ContentBlock, ImageBlock, ImageSize};
use crate::content::rich_text::render_rich_text;

#[derive(Properties, PartialEq)]
pub struct ContentBlockRendererProps {
    pub blocks: Vec<ContentBlock>,
    pub project_title: String,
}

/// Renders a project's body: one segment per recognized, non-empty block, in
/// input order. Everything else is skipped locally (unknown kinds with a
/// warning, inside `visible_blocks`) and never interrupts the sequence.
#[function_component(ContentBlockRenderer)]
pub fn content_block_renderer(props: &ContentBlockRendererProps) -> Html {
    let title = &props.project_title;

    html! {
        <>
            { for visible_blocks(&props.blocks).into_iter().map(|block| {
                let key = format!("{}-{}", block.component(), block.id());
                match block {
                    ContentBlock::RichText(rich) => html! {
                        <div key={key} class="rich-text-block">
                            { render_rich_text(&rich.content) }
                        </div>
                    },
                    ContentBlock::Image(image) => render_image(key, image, title),
                    ContentBlock::Carousel(carousel) => html! {
                        <Carousel key={key} block={carousel.clone()} project_title={title.clone()} />
                    },
                    ContentBlock::Video(video) => html! {
                        <Video key={key} block={video.clone()} />
                    },
                    ContentBlock::ComparisonSlider(slider) => html! {
                        <ComparisonSlider
                            key={key}
                            block={slider.clone()}
                            project_title={title.clone()}
                        />
                    },
                    ContentBlock::Stats(stats) => html! {
                        <Stats key={key} block={stats.clone()} />
                    },
                    // visible_blocks never yields these.
                    ContentBlock::Unknown { .. } => html! {},
                }
            }) }
            <style>
                {r#"
                .rich-text-block { max-width: 680px; margin: 0 auto; padding: 0 2rem; }
                .image-block { margin: 2rem auto; width: 100%; display: flex; flex-direction: column; align-items: center; gap: 1rem; }
                .image-block img { height: auto; border-radius: 8px; border: 1px solid rgba(128, 128, 128, 0.25); }
                .image-block.full img { width: 100%; }
                .image-block.contained img { max-width: min(100%, 720px); }
                .image-block.small img { max-width: min(100%, 448px); }
                .image-block figcaption { text-align: center; font-size: 0.9rem; color: #999; max-width: 680px; padding: 0 2rem; }
                "#}
            </style>
        </>
    }
}

fn render_image(key: String, block: &ImageBlock, project_title: &str) -> Html {
    let image = match &block.image {
        Some(image) => image,
        None => return html! {},
    };

    let size_class = match block.size {
        ImageSize::Full => "full",
        ImageSize::Contained => "contained",
        ImageSize::Small => "small",
    };

    html! {
        <figure key={key} class={classes!("image-block", size_class)}>
            <img
                src={media_url(&image.url)}
                alt={image.alternative_text.clone().unwrap_or_else(|| project_title.to_string())}
                width={image.width.map(|w| w.to_string())}
                height={image.height.map(|h| h.to_string())}
                loading="lazy"
                draggable="false"
            />
            if let Some(caption) = &block.caption {
                <figcaption>{ caption.clone() }</figcaption>
            }
        </figure>
    }
}
