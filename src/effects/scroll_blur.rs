use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

/// Blur radius applied when a section sits at either edge of the span.
pub const MAX_BLUR_PX: f64 = 15.0;
/// Width of the entry and exit fade zones, as a fraction of the span.
pub const FADE_ZONE: f64 = 0.1;

/// Three-zone piecewise treatment of a section's scroll progress.
///
/// Entry fade `[0, 0.1)`: blur falls 15 → 0 while opacity rises 0 → 1.
/// Clear zone `[0.1, 0.9]`: crisp and fully opaque.
/// Exit fade `(0.9, 1]`: the entry fade mirrored.
pub fn blur_and_opacity(progress: f64) -> (f64, f64) {
    if progress < FADE_ZONE {
        let local = progress / FADE_ZONE;
        (MAX_BLUR_PX * (1.0 - local), local)
    } else if progress > 1.0 - FADE_ZONE {
        let local = (progress - (1.0 - FADE_ZONE)) / FADE_ZONE;
        (MAX_BLUR_PX * local, 1.0 - local)
    } else {
        (0.0, 1.0)
    }
}

/// Progress of a section through the scroll-linked span: 0 when its vertical
/// center sits at the container's bottom edge, 1 when it reaches the top.
/// Clamped so the zone math never sees an out-of-range value.
pub fn section_progress(center_offset: f64, container_height: f64) -> f64 {
    if container_height <= 0.0 {
        return 0.0;
    }
    ((container_height - center_offset) / container_height).clamp(0.0, 1.0)
}

/// Instance-scoped scroll controller: owns its listener registration and the
/// set of tracked sections, discovered once at construction. No globals.
pub struct ScrollBlurController {
    container: HtmlElement,
    sections: Vec<HtmlElement>,
    on_scroll: Option<Closure<dyn FnMut()>>,
}

impl ScrollBlurController {
    pub fn new(container: HtmlElement, content: &Element) -> Self {
        let mut sections = Vec::new();
        if let Ok(nodes) = content.query_selector_all("section") {
            for i in 0..nodes.length() {
                if let Some(section) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok())
                {
                    sections.push(section);
                }
            }
        }
        Self {
            container,
            sections,
            on_scroll: None,
        }
    }

    /// Apply the treatment once so the initial state is correct, then listen
    /// for container scrolls. With no sections there is nothing to track and
    /// no listener is installed.
    pub fn attach(&mut self) {
        if self.sections.is_empty() || self.on_scroll.is_some() {
            return;
        }

        Self::apply(&self.container, &self.sections);

        let container = self.container.clone();
        let sections = self.sections.clone();
        let callback = Closure::wrap(Box::new(move || {
            Self::apply(&container, &sections);
        }) as Box<dyn FnMut()>);

        if self
            .container
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .is_ok()
        {
            self.on_scroll = Some(callback);
        }
    }

    /// Remove the listener and return every tracked section to its natural,
    /// unstyled state.
    pub fn detach(&mut self) {
        if let Some(callback) = self.on_scroll.take() {
            let _ = self
                .container
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        }
        for section in &self.sections {
            let style = section.style();
            let _ = style.remove_property("filter");
            let _ = style.remove_property("opacity");
        }
    }

    fn apply(container: &HtmlElement, sections: &[HtmlElement]) {
        let container_rect = container.get_bounding_client_rect();
        let height = container_rect.height();

        for section in sections {
            let rect = section.get_bounding_client_rect();
            let center = rect.top() - container_rect.top() + rect.height() / 2.0;
            let (blur, opacity) = blur_and_opacity(section_progress(center, height));

            let style = section.style();
            let _ = style.set_property("filter", &format!("blur({blur}px)"));
            let _ = style.set_property("opacity", &opacity.to_string());
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollBlurEffectProps {
    pub children: Children,
}

/// Scroll container that fades and blurs its `<section>` children as they
/// pass through the edges of the visible span.
#[function_component(ScrollBlurEffect)]
pub fn scroll_blur_effect(props: &ScrollBlurEffectProps) -> Html {
    let container_ref = use_node_ref();
    let content_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let content_ref = content_ref.clone();
        use_effect_with_deps(
            move |_| {
                let controller = match (
                    container_ref.cast::<HtmlElement>(),
                    content_ref.cast::<Element>(),
                ) {
                    (Some(container), Some(content)) => {
                        let mut controller = ScrollBlurController::new(container, &content);
                        controller.attach();
                        Some(controller)
                    }
                    _ => None,
                };

                move || {
                    if let Some(mut controller) = controller {
                        controller.detach();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={container_ref}
            class="scroll-blur-container"
            style="height: 100vh; overflow-y: auto; \
                   mask-image: linear-gradient(to bottom, transparent 0%, black 10%, black 90%, transparent 100%); \
                   -webkit-mask-image: linear-gradient(to bottom, transparent 0%, black 10%, black 90%, transparent 100%);"
        >
            <div ref={content_ref} style="width: 100%; margin: 0 auto;">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn continuous_at_zone_boundaries() {
        let (blur_before, opacity_before) = blur_and_opacity(FADE_ZONE - EPSILON);
        let (blur_at, opacity_at) = blur_and_opacity(FADE_ZONE);
        assert!(blur_before.abs() < 1e-6 && blur_at == 0.0);
        assert!((opacity_before - 1.0).abs() < 1e-6 && opacity_at == 1.0);

        let exit = 1.0 - FADE_ZONE;
        let (blur_at, opacity_at) = blur_and_opacity(exit);
        let (blur_after, opacity_after) = blur_and_opacity(exit + EPSILON);
        assert!(blur_at == 0.0 && blur_after.abs() < 1e-6);
        assert!(opacity_at == 1.0 && (opacity_after - 1.0).abs() < 1e-6);
    }

    #[test]
    fn blur_and_opacity_stay_in_range_across_the_span() {
        for step in 0..=1000 {
            let progress = step as f64 / 1000.0;
            let (blur, opacity) = blur_and_opacity(progress);
            assert!((0.0..=MAX_BLUR_PX).contains(&blur), "blur at {progress}");
            assert!((0.0..=1.0).contains(&opacity), "opacity at {progress}");
        }
    }

    #[test]
    fn edges_are_fully_hidden_and_center_is_clear() {
        assert_eq!(blur_and_opacity(0.0), (MAX_BLUR_PX, 0.0));
        assert_eq!(blur_and_opacity(0.5), (0.0, 1.0));
        assert_eq!(blur_and_opacity(1.0), (MAX_BLUR_PX, 0.0));
    }

    #[test]
    fn fades_move_inversely_within_the_zones() {
        let mut last = blur_and_opacity(0.0);
        for step in 1..=100 {
            let current = blur_and_opacity(step as f64 / 100.0 * FADE_ZONE);
            assert!(current.0 <= last.0);
            assert!(current.1 >= last.1);
            last = current;
        }
    }

    #[test]
    fn section_halfway_into_the_entry_fade() {
        // Container height 1000, section center 950px below the top edge.
        let progress = section_progress(950.0, 1000.0);
        assert!((progress - 0.05).abs() < EPSILON);

        let (blur, opacity) = blur_and_opacity(progress);
        assert!((blur - 7.5).abs() < 1e-6);
        assert!((opacity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn progress_is_clamped_to_the_span() {
        assert_eq!(section_progress(1500.0, 1000.0), 0.0);
        assert_eq!(section_progress(-200.0, 1000.0), 1.0);
        assert_eq!(section_progress(100.0, 0.0), 0.0);
    }
}
