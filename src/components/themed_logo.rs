use std::collections::BTreeMap;

use yew::prelude::*;

use crate::cms::client::media_url;
use crate::cms::types::LogoData;
use crate::theme::Theme;

/// Two-layer style resolution: base CSS variables, with the dark-theme
/// overrides layered on top only when `is_dark` is true. The flag comes from
/// the theme context, which starts light on first paint and follows both the
/// system preference and the nav toggle afterwards. No hidden "mounted"
/// state.
pub fn resolve_logo_style(
    base: Option<&BTreeMap<String, String>>,
    dark: Option<&BTreeMap<String, String>>,
    is_dark: bool,
) -> String {
    let mut merged: BTreeMap<&str, &str> = BTreeMap::new();
    if let Some(base) = base {
        for (key, value) in base {
            merged.insert(key, value);
        }
    }
    if is_dark {
        if let Some(dark) = dark {
            for (key, value) in dark {
                merged.insert(key, value);
            }
        }
    }
    merged
        .iter()
        .map(|(key, value)| format!("{key}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Properties, PartialEq)]
pub struct ThemedLogoProps {
    pub data: LogoData,
}

/// A business/tool logo tile themed by CMS-driven CSS variables.
#[function_component(ThemedLogo)]
pub fn themed_logo(props: &ThemedLogoProps) -> Html {
    let is_dark = use_context::<Theme>().map(|t| t.is_dark).unwrap_or(false);

    let image = match &props.data.image {
        Some(image) => image,
        None => return html! {},
    };

    let style = resolve_logo_style(
        props.data.css_variables.as_ref(),
        props.data.css_variables_dark.as_ref(),
        is_dark,
    );

    let aria_label = if props.data.aria_label.is_empty() {
        format!("Logo for {}", props.data.name)
    } else {
        props.data.aria_label.clone()
    };

    let img = html! {
        <img
            src={media_url(&image.url)}
            alt={image.alternative_text.clone().unwrap_or_else(|| props.data.name.clone())}
            width={props.data.image_width.map(|w| w.to_string())}
            loading="lazy"
        />
    };

    let class = classes!("themed-logo", props.data.classes.clone());

    html! {
        <div class={class} style={style} role="img" aria-label={aria_label} title={props.data.description.clone()}>
            if let Some(url) = &props.data.url {
                <a href={url.clone()} target="_blank" rel="noopener noreferrer">{ img }</a>
            } else {
                { img }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn base_variables_apply_in_light_mode() {
        let base = vars(&[("--logo-fill", "#111"), ("--logo-stroke", "#222")]);
        let dark = vars(&[("--logo-fill", "#eee")]);
        let style = resolve_logo_style(Some(&base), Some(&dark), false);
        assert_eq!(style, "--logo-fill: #111; --logo-stroke: #222;");
    }

    #[test]
    fn dark_overrides_win_only_in_dark_mode() {
        let base = vars(&[("--logo-fill", "#111"), ("--logo-stroke", "#222")]);
        let dark = vars(&[("--logo-fill", "#eee")]);
        let style = resolve_logo_style(Some(&base), Some(&dark), true);
        assert_eq!(style, "--logo-fill: #eee; --logo-stroke: #222;");
    }

    #[test]
    fn missing_layers_resolve_to_an_empty_style() {
        assert_eq!(resolve_logo_style(None, None, true), "");
    }

    #[test]
    fn dark_layer_alone_is_ignored_in_light_mode() {
        let dark = vars(&[("--logo-fill", "#eee")]);
        assert_eq!(resolve_logo_style(None, Some(&dark), false), "");
    }
}
