use yew::prelude::*;

use crate::cms::client::media_url;
use crate::cms::types::CmsMedia;
use crate::content::blocks::CarouselBlock;

fn is_video(slide: &CmsMedia) -> bool {
    slide
        .mime
        .as_deref()
        .map(|mime| mime.starts_with("video/"))
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub block: CarouselBlock,
    pub project_title: String,
}

/// Horizontally-paged slides with looping navigation. A slide is a video
/// when its declared MIME type says so, otherwise an image.
#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let slides = &props.block.slides;
    if slides.is_empty() {
        return html! {};
    }

    let index = use_state(|| 0usize);
    let count = slides.len();

    let go_prev = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| {
            index.set((*index + count - 1) % count);
        })
    };

    let go_next = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| {
            index.set((*index + 1) % count);
        })
    };

    let track_style = format!(
        "display: flex; transition: transform 0.4s ease; transform: translateX(-{}%);",
        *index * 100
    );

    html! {
        <figure class="carousel">
            <div class="carousel-viewport">
                <div style={track_style}>
                    { for slides.iter().map(|slide| {
                        let url = media_url(&slide.url);
                        let alt = slide
                            .alternative_text
                            .clone()
                            .unwrap_or_else(|| props.project_title.clone());
                        html! {
                            <div class="carousel-slide">
                                if is_video(slide) {
                                    <video src={url} controls={true} playsinline=true>
                                        {"Your browser does not support the video tag."}
                                    </video>
                                } else {
                                    <img src={url} alt={alt} loading="lazy" />
                                }
                            </div>
                        }
                    }) }
                </div>
                <button class="carousel-nav prev" onclick={go_prev} aria-label="Previous slide">
                    {"\u{2039}"}
                </button>
                <button class="carousel-nav next" onclick={go_next} aria-label="Next slide">
                    {"\u{203A}"}
                </button>
            </div>
            <div class="carousel-dots">
                { for (0..count).map(|i| {
                    let class = if i == *index { "carousel-dot active" } else { "carousel-dot" };
                    let index = index.clone();
                    let onclick = Callback::from(move |_: MouseEvent| index.set(i));
                    html! {
                        <button class={class} onclick={onclick} aria-label={format!("Go to slide {}", i + 1)} />
                    }
                }) }
            </div>
            if let Some(caption) = &props.block.caption {
                <figcaption>{ caption.clone() }</figcaption>
            }
            <style>
                {r#"
                .carousel { margin: 2rem auto; width: 100%; max-width: 720px; padding: 0 2rem; }
                .carousel-viewport {
                    position: relative;
                    overflow: hidden;
                    border-radius: 8px;
                    border: 1px solid rgba(128, 128, 128, 0.25);
                }
                .carousel-slide { flex: 0 0 100%; }
                .carousel-slide img, .carousel-slide video { width: 100%; height: auto; display: block; }
                .carousel-nav {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(26, 26, 26, 0.6);
                    color: #fff;
                    font-size: 1.4rem;
                    cursor: pointer;
                }
                .carousel-nav.prev { left: 1rem; }
                .carousel-nav.next { right: 1rem; }
                .carousel-dots { display: flex; justify-content: center; gap: 0.5rem; margin-top: 1rem; }
                .carousel-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(128, 128, 128, 0.4);
                    cursor: pointer;
                }
                .carousel-dot.active { background: #7EB2FF; }
                .carousel figcaption { text-align: center; font-size: 0.9rem; color: #999; margin-top: 0.75rem; }
                "#}
            </style>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(mime: Option<&str>) -> CmsMedia {
        CmsMedia {
            id: 1,
            url: "/uploads/slide.bin".into(),
            alternative_text: None,
            width: None,
            height: None,
            mime: mime.map(str::to_string),
            ext: None,
        }
    }

    #[test]
    fn video_mime_prefix_selects_the_video_surface() {
        assert!(is_video(&slide(Some("video/mp4"))));
        assert!(!is_video(&slide(Some("image/webp"))));
        assert!(!is_video(&slide(None)));
    }
}
