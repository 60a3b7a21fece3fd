use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::cms::client::media_url;
use crate::content::blocks::ComparisonSliderBlock;

/// Horizontal split point for a pointer at `client_x`, clamped to [0, 100]
/// no matter how far outside the container the pointer travels.
pub fn slider_position(client_x: f64, rect_left: f64, rect_width: f64) -> f64 {
    if rect_width <= 0.0 {
        return 0.0;
    }
    ((client_x - rect_left) / rect_width * 100.0).clamp(0.0, 100.0)
}

#[derive(Properties, PartialEq)]
pub struct ComparisonSliderProps {
    pub block: ComparisonSliderBlock,
    pub project_title: String,
}

/// Before/after reveal: the "after" image is clipped at the slider position
/// and a drag handle moves the boundary.
#[function_component(ComparisonSlider)]
pub fn comparison_slider(props: &ComparisonSliderProps) -> Html {
    let (before, after) = match (&props.block.before_image, &props.block.after_image) {
        (Some(before), Some(after)) => (before, after),
        _ => return html! {},
    };

    let container_ref = use_node_ref();
    let position = use_state(|| 50.0f64);
    let dragging = use_mut_ref(|| false);

    let move_to = {
        let container_ref = container_ref.clone();
        let position = position.clone();
        Rc::new(move |client_x: f64| {
            if let Some(container) = container_ref.cast::<HtmlElement>() {
                let rect = container.get_bounding_client_rect();
                position.set(slider_position(client_x, rect.left(), rect.width()));
            }
        })
    };

    let on_mouse_down = {
        let dragging = dragging.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            *dragging.borrow_mut() = true;
        })
    };

    let on_mouse_up = {
        let dragging = dragging.clone();
        Callback::from(move |_: MouseEvent| {
            *dragging.borrow_mut() = false;
        })
    };

    let on_mouse_move = {
        let dragging = dragging.clone();
        let move_to = move_to.clone();
        Callback::from(move |e: MouseEvent| {
            if *dragging.borrow() {
                move_to(e.client_x() as f64);
            }
        })
    };

    let on_touch_start = {
        let dragging = dragging.clone();
        Callback::from(move |_: TouchEvent| {
            *dragging.borrow_mut() = true;
        })
    };

    let on_touch_end = {
        let dragging = dragging.clone();
        Callback::from(move |_: TouchEvent| {
            *dragging.borrow_mut() = false;
        })
    };

    let on_touch_move = {
        let move_to = move_to.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                move_to(touch.client_x() as f64);
            }
        })
    };

    let before_alt = props
        .block
        .before_label
        .clone()
        .unwrap_or_else(|| format!("{} before", props.project_title));
    let after_alt = props
        .block
        .after_label
        .clone()
        .unwrap_or_else(|| format!("{} after", props.project_title));

    let clip = format!("clip-path: inset(0 {}% 0 0);", 100.0 - *position);
    let handle_left = format!("left: {}%;", *position);

    html! {
        <figure class="comparison-slider">
            <div
                ref={container_ref}
                class="comparison-slider-frame"
                onmousemove={on_mouse_move}
                onmouseup={on_mouse_up.clone()}
                onmouseleave={on_mouse_up}
                ontouchmove={on_touch_move}
                ontouchend={on_touch_end}
            >
                <img
                    class="comparison-slider-before"
                    src={media_url(&before.url)}
                    alt={before_alt}
                    draggable="false"
                />
                <div class="comparison-slider-after" style={clip}>
                    <img src={media_url(&after.url)} alt={after_alt} draggable="false" />
                </div>
                <div
                    class="comparison-slider-handle"
                    style={handle_left}
                    onmousedown={on_mouse_down}
                    ontouchstart={on_touch_start}
                >
                    <span class="comparison-slider-grip">{"\u{2194}"}</span>
                </div>
                if let Some(label) = &props.block.before_label {
                    <span class="comparison-slider-label left">{ label.clone() }</span>
                }
                if let Some(label) = &props.block.after_label {
                    <span class="comparison-slider-label right">{ label.clone() }</span>
                }
            </div>
            <style>
                {r#"
                .comparison-slider { margin: 2rem auto; width: 100%; max-width: 720px; padding: 0 2rem; }
                .comparison-slider-frame {
                    position: relative;
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    border-radius: 8px;
                    overflow: hidden;
                    cursor: ew-resize;
                    user-select: none;
                }
                .comparison-slider-frame img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .comparison-slider-after { position: absolute; inset: 0; }
                .comparison-slider-handle {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 2px;
                    background: #fff;
                    cursor: ew-resize;
                }
                .comparison-slider-grip {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    width: 32px;
                    height: 32px;
                    border-radius: 50%;
                    background: #fff;
                    color: #1a1a1a;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 2px 8px rgba(0,0,0,0.4);
                }
                .comparison-slider-label {
                    position: absolute;
                    top: 1rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 6px;
                    background: rgba(26, 26, 26, 0.8);
                    color: #fff;
                    font-size: 0.85rem;
                }
                .comparison-slider-label.left { left: 1rem; }
                .comparison-slider-label.right { right: 1rem; }
                "#}
            </style>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_inside_maps_linearly() {
        assert_eq!(slider_position(500.0, 0.0, 1000.0), 50.0);
        assert_eq!(slider_position(250.0, 0.0, 1000.0), 25.0);
        assert_eq!(slider_position(350.0, 100.0, 1000.0), 25.0);
    }

    #[test]
    fn pointer_off_the_left_edge_clamps_to_zero() {
        assert_eq!(slider_position(-50.0, 0.0, 1000.0), 0.0);
    }

    #[test]
    fn pointer_far_off_either_edge_stays_in_range() {
        assert_eq!(slider_position(-10_000.0, 0.0, 800.0), 0.0);
        assert_eq!(slider_position(10_000.0, 0.0, 800.0), 100.0);
    }

    #[test]
    fn degenerate_container_yields_zero() {
        assert_eq!(slider_position(100.0, 0.0, 0.0), 0.0);
    }
}
