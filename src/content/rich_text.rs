use serde::Deserialize;
use yew::prelude::*;

use crate::cms::client::media_url;
use crate::cms::types::CmsMedia;

/// One node of the CMS rich-text tree. The editor emits a single node shape
/// for every type (paragraph, heading, list, list-item, quote, code, link,
/// image, text), so the struct carries the union of their fields and the
/// renderer matches on `node_type`.
#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct RichTextNode {
    #[serde(rename = "type", default)]
    pub node_type: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default)]
    pub level: Option<u8>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<CmsMedia>,
    #[serde(default)]
    pub children: Vec<RichTextNode>,
}

/// Inline mark wrappers for a text run, outermost first.
pub fn mark_tags(node: &RichTextNode) -> Vec<&'static str> {
    let mut tags = Vec::new();
    if node.bold {
        tags.push("strong");
    }
    if node.italic {
        tags.push("em");
    }
    if node.underline {
        tags.push("u");
    }
    if node.strikethrough {
        tags.push("s");
    }
    if node.code {
        tags.push("code");
    }
    tags
}

/// Concatenated text content of a subtree, in document order.
pub fn plain_text(nodes: &[RichTextNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        if let Some(text) = &node.text {
            out.push_str(text);
        }
        out.push_str(&plain_text(&node.children));
    }
    out
}

pub fn render_rich_text(nodes: &[RichTextNode]) -> Html {
    html! { <>{ for nodes.iter().map(render_node) }</> }
}

fn render_children(node: &RichTextNode) -> Html {
    html! { <>{ for node.children.iter().map(render_node) }</> }
}

fn render_node(node: &RichTextNode) -> Html {
    match node.node_type.as_str() {
        "text" => render_text(node),
        "paragraph" => html! { <p>{ render_children(node) }</p> },
        "heading" => render_heading(node),
        "list" => {
            if node.format.as_deref() == Some("ordered") {
                html! { <ol>{ render_children(node) }</ol> }
            } else {
                html! { <ul>{ render_children(node) }</ul> }
            }
        }
        "list-item" => html! { <li>{ render_children(node) }</li> },
        "quote" => html! { <blockquote>{ render_children(node) }</blockquote> },
        "code" => html! { <pre><code>{ render_children(node) }</code></pre> },
        "link" => {
            let href = node.url.clone().unwrap_or_default();
            html! {
                <a href={href} target="_blank" rel="noopener noreferrer">
                    { render_children(node) }
                </a>
            }
        }
        "image" => match &node.image {
            Some(image) => html! {
                <img
                    src={media_url(&image.url)}
                    alt={image.alternative_text.clone().unwrap_or_default()}
                    loading="lazy"
                />
            },
            None => html! {},
        },
        // Unknown node types degrade to a paragraph wrapper.
        _ => html! { <p>{ render_children(node) }</p> },
    }
}

fn render_heading(node: &RichTextNode) -> Html {
    let children = render_children(node);
    match node.level.unwrap_or(2) {
        1 => html! { <h1>{ children }</h1> },
        2 => html! { <h2>{ children }</h2> },
        3 => html! { <h3>{ children }</h3> },
        4 => html! { <h4>{ children }</h4> },
        5 => html! { <h5>{ children }</h5> },
        _ => html! { <h6>{ children }</h6> },
    }
}

fn render_text(node: &RichTextNode) -> Html {
    let mut content = html! { <>{ node.text.clone().unwrap_or_default() }</> };
    // Apply marks innermost-out so every mark wraps the full run.
    for tag in mark_tags(node).into_iter().rev() {
        content = match tag {
            "strong" => html! { <strong>{ content }</strong> },
            "em" => html! { <em>{ content }</em> },
            "u" => html! { <u>{ content }</u> },
            "s" => html! { <s>{ content }</s> },
            _ => html! { <code>{ content }</code> },
        };
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_node(text: &str) -> RichTextNode {
        RichTextNode {
            node_type: "text".into(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    #[test]
    fn bold_italic_runs_carry_both_marks() {
        let node = RichTextNode {
            bold: true,
            italic: true,
            ..text_node("emphasised")
        };
        let tags = mark_tags(&node);
        assert!(tags.contains(&"strong"));
        assert!(tags.contains(&"em"));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn unmarked_text_has_no_wrappers() {
        assert!(mark_tags(&text_node("plain")).is_empty());
    }

    #[test]
    fn plain_text_walks_nested_children() {
        let tree = vec![RichTextNode {
            node_type: "paragraph".into(),
            children: vec![
                text_node("Hello"),
                RichTextNode {
                    node_type: "link".into(),
                    url: Some("https://example.com".into()),
                    children: vec![text_node(" world")],
                    ..Default::default()
                },
            ],
            ..Default::default()
        }];
        assert_eq!(plain_text(&tree), "Hello world");
    }

    #[test]
    fn nodes_deserialize_from_cms_json() {
        let nodes: Vec<RichTextNode> = serde_json::from_value(serde_json::json!([
            {
                "type": "heading",
                "level": 3,
                "children": [{ "type": "text", "text": "Title", "bold": true }]
            },
            {
                "type": "list",
                "format": "ordered",
                "children": [
                    { "type": "list-item", "children": [{ "type": "text", "text": "one" }] }
                ]
            }
        ]))
        .unwrap();

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].level, Some(3));
        assert!(nodes[0].children[0].bold);
        assert_eq!(plain_text(&nodes[1].children), "one");
    }
}
