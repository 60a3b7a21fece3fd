use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MediaQueryList;
use yew::prelude::*;

/// App-wide theme handle: the resolved dark flag and the toggle the nav
/// exposes.
#[derive(Clone, PartialEq)]
pub struct Theme {
    pub is_dark: bool,
    pub toggle: Callback<MouseEvent>,
}

/// An explicit user choice wins; otherwise the system preference holds.
pub fn effective_dark(system: bool, choice: Option<bool>) -> bool {
    choice.unwrap_or(system)
}

/// One toggle press inverts whatever is currently showing.
pub fn toggled_choice(system: bool, choice: Option<bool>) -> Option<bool> {
    Some(!effective_dark(system, choice))
}

fn media_query() -> Option<MediaQueryList> {
    web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

/// Tracks `prefers-color-scheme` for as long as the app lives, so an OS
/// theme change mid-session re-resolves everything that consumes the
/// context. First paint renders light; the mount effect supplies the real
/// preference.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let system_dark = use_state(|| false);
    let choice = use_state(|| None::<bool>);

    {
        let system_dark = system_dark.clone();
        use_effect_with_deps(
            move |_| {
                let mql = media_query();
                let mut listener = None;

                if let Some(mql) = &mql {
                    system_dark.set(mql.matches());

                    let tracked = mql.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        system_dark.set(tracked.matches());
                    }) as Box<dyn FnMut()>);
                    if mql
                        .add_event_listener_with_callback(
                            "change",
                            callback.as_ref().unchecked_ref(),
                        )
                        .is_ok()
                    {
                        listener = Some(callback);
                    }
                }

                move || {
                    if let (Some(mql), Some(callback)) = (mql, listener) {
                        let _ = mql.remove_event_listener_with_callback(
                            "change",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let is_dark = effective_dark(*system_dark, *choice);

    {
        use_effect_with_deps(
            move |dark: &bool| {
                if let Some(root) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                {
                    let _ =
                        root.set_attribute("data-theme", if *dark { "dark" } else { "light" });
                }
                || ()
            },
            is_dark,
        );
    }

    let toggle = {
        let system_dark = system_dark.clone();
        let choice = choice.clone();
        Callback::from(move |_: MouseEvent| {
            choice.set(toggled_choice(*system_dark, *choice));
        })
    };

    html! {
        <ContextProvider<Theme> context={Theme { is_dark, toggle }}>
            { for props.children.iter() }
        </ContextProvider<Theme>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_preference_holds_until_the_user_chooses() {
        assert!(!effective_dark(false, None));
        assert!(effective_dark(true, None));
        assert!(effective_dark(false, Some(true)));
        assert!(!effective_dark(true, Some(false)));
    }

    #[test]
    fn toggling_always_inverts_the_visible_theme() {
        assert_eq!(toggled_choice(false, None), Some(true));
        assert_eq!(toggled_choice(true, None), Some(false));
        assert_eq!(toggled_choice(true, Some(false)), Some(true));
        assert_eq!(toggled_choice(false, Some(true)), Some(false));
    }
}
