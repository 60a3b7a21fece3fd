use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlVideoElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

use crate::cms::client::media_url;
use crate::content::blocks::VideoBlock;

/// Fraction of the element that must be visible before playback starts.
const PLAY_THRESHOLD: f64 = 0.5;

#[derive(Properties, PartialEq)]
pub struct VideoProps {
    pub block: VideoBlock,
}

/// Two mutually exclusive sub-modes: an embedded third-party player when the
/// block carries a URL, otherwise a self-hosted file that plays muted and
/// looping while at least half of it is on screen.
#[function_component(Video)]
pub fn video(props: &VideoProps) -> Html {
    let video_ref = use_node_ref();
    let has_file = props.block.file.is_some();

    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut observer_handle = None;
                let mut callback_handle = None;

                if has_file {
                    if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                        let target = video.clone();
                        let callback =
                            Closure::wrap(Box::new(move |entries: js_sys::Array| {
                                for entry in entries.iter() {
                                    let entry: IntersectionObserverEntry =
                                        entry.unchecked_into();
                                    if entry.is_intersecting() {
                                        // Playback can be refused before any
                                        // user gesture; that is fine.
                                        let _ = target.play();
                                    } else {
                                        let _ = target.pause();
                                    }
                                }
                            })
                                as Box<dyn FnMut(js_sys::Array)>);

                        let options = IntersectionObserverInit::new();
                        options.set_threshold(&JsValue::from_f64(PLAY_THRESHOLD));

                        if let Ok(observer) = IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            observer.observe(&video);
                            observer_handle = Some(observer);
                        }
                        callback_handle = Some(callback);
                    }
                }

                move || {
                    if let Some(observer) = observer_handle {
                        observer.disconnect();
                    }
                    drop(callback_handle);
                }
            },
            (),
        );
    }

    let caption = props.block.caption.as_ref().map(|caption| {
        html! { <figcaption>{ caption.clone() }</figcaption> }
    });

    // Embed URL wins when both are somehow present.
    if let Some(url) = &props.block.url {
        return html! {
            <figure class="video-block">
                <div class="video-embed">
                    <iframe
                        src={url.clone()}
                        title="Project video"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen={true}
                    />
                </div>
                { for caption }
                <style>{ VIDEO_CSS }</style>
            </figure>
        };
    }

    match &props.block.file {
        Some(file) => html! {
            <figure class="video-block">
                <video
                    ref={video_ref}
                    src={media_url(&file.url)}
                    muted={true}
                    loop={true}
                    playsinline=true
                >
                    {"Your browser does not support the video tag."}
                </video>
                { for caption }
                <style>{ VIDEO_CSS }</style>
            </figure>
        },
        None => html! {},
    }
}

const VIDEO_CSS: &str = r#"
.video-block { margin: 2rem auto; width: 100%; max-width: 720px; padding: 0 2rem; }
.video-block video { width: 100%; height: auto; border-radius: 8px; display: block; }
.video-embed { position: relative; width: 100%; aspect-ratio: 16 / 9; border-radius: 8px; overflow: hidden; }
.video-embed iframe { position: absolute; inset: 0; width: 100%; height: 100%; border: 0; }
.video-block figcaption { text-align: center; font-size: 0.9rem; color: #999; margin-top: 0.75rem; }
"#;
