use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::cms::types::CmsMedia;
use crate::content::rich_text::RichTextNode;

// Block ids come off the wire as integers or as numeric strings, depending
// on the CMS revision that authored the entry.
fn block_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n,
        Raw::Text(s) => s.trim().parse().unwrap_or(0),
    })
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct RichTextBlock {
    #[serde(deserialize_with = "block_id", default)]
    pub id: i64,
    #[serde(default)]
    pub content: Vec<RichTextNode>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ImageSize {
    Full,
    #[default]
    Contained,
    Small,
}

impl<'de> Deserialize<'de> for ImageSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match String::deserialize(deserializer)?.as_str() {
            "full" => ImageSize::Full,
            "small" => ImageSize::Small,
            _ => ImageSize::Contained,
        })
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ImageBlock {
    #[serde(deserialize_with = "block_id", default)]
    pub id: i64,
    #[serde(default)]
    pub image: Option<CmsMedia>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub size: ImageSize,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct CarouselBlock {
    #[serde(deserialize_with = "block_id", default)]
    pub id: i64,
    #[serde(default)]
    pub slides: Vec<CmsMedia>,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct VideoBlock {
    #[serde(deserialize_with = "block_id", default)]
    pub id: i64,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub file: Option<CmsMedia>,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ComparisonSliderBlock {
    #[serde(deserialize_with = "block_id", default)]
    pub id: i64,
    #[serde(default)]
    pub before_image: Option<CmsMedia>,
    #[serde(default)]
    pub after_image: Option<CmsMedia>,
    #[serde(default)]
    pub before_label: Option<String>,
    #[serde(default)]
    pub after_label: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ChartType {
    #[default]
    NumberOnly,
    Bar,
    Line,
    Pie,
    Area,
    Radar,
    Radial,
    Unknown,
}

impl<'de> Deserialize<'de> for ChartType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match String::deserialize(deserializer)?.as_str() {
            "number-only" => ChartType::NumberOnly,
            "bar" => ChartType::Bar,
            "line" => ChartType::Line,
            "pie" => ChartType::Pie,
            "area" => ChartType::Area,
            "radar" => ChartType::Radar,
            "radial" => ChartType::Radial,
            _ => ChartType::Unknown,
        })
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct StatItem {
    #[serde(deserialize_with = "block_id", default)]
    pub id: i64,
    pub label: String,
    #[serde(deserialize_with = "stat_value", default)]
    pub value: f64,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

// The CMS has sent stat values both as numbers and as numeric strings.
fn stat_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n,
        Raw::Text(s) => s.trim().parse().unwrap_or(0.0),
    })
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct StatsBlock {
    #[serde(deserialize_with = "block_id", default)]
    pub id: i64,
    #[serde(default)]
    pub items: Vec<StatItem>,
    #[serde(default)]
    pub chart_type: ChartType,
    #[serde(default)]
    pub description: Option<String>,
}

/// One tagged unit of a project's body, discriminated on the wire by
/// `__component`. Unrecognized discriminants and malformed payloads land in
/// `Unknown` so a bad block never fails the whole document.
#[derive(Clone, PartialEq, Debug)]
pub enum ContentBlock {
    RichText(RichTextBlock),
    Image(ImageBlock),
    Carousel(CarouselBlock),
    Video(VideoBlock),
    ComparisonSlider(ComparisonSliderBlock),
    Stats(StatsBlock),
    Unknown { component: String },
}

impl ContentBlock {
    pub fn id(&self) -> i64 {
        match self {
            ContentBlock::RichText(b) => b.id,
            ContentBlock::Image(b) => b.id,
            ContentBlock::Carousel(b) => b.id,
            ContentBlock::Video(b) => b.id,
            ContentBlock::ComparisonSlider(b) => b.id,
            ContentBlock::Stats(b) => b.id,
            ContentBlock::Unknown { .. } => 0,
        }
    }

    pub fn component(&self) -> &str {
        match self {
            ContentBlock::RichText(_) => "project-blocks.rich-text",
            ContentBlock::Image(_) => "project-blocks.image",
            ContentBlock::Carousel(_) => "project-blocks.carousel",
            ContentBlock::Video(_) => "project-blocks.video",
            ContentBlock::ComparisonSlider(_) => "project-blocks.comparison-slider",
            ContentBlock::Stats(_) => "project-blocks.stats",
            ContentBlock::Unknown { component } => component,
        }
    }

    /// Per-kind emptiness: a block that would render nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            ContentBlock::RichText(b) => b.content.is_empty(),
            ContentBlock::Image(b) => b.image.is_none(),
            ContentBlock::Carousel(b) => b.slides.is_empty(),
            ContentBlock::Video(b) => b.url.is_none() && b.file.is_none(),
            ContentBlock::ComparisonSlider(b) => {
                b.before_image.is_none() || b.after_image.is_none()
            }
            ContentBlock::Stats(b) => b.items.is_empty(),
            ContentBlock::Unknown { .. } => true,
        }
    }
}

impl<'de> Deserialize<'de> for ContentBlock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let component = value
            .get("__component")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let parsed = match component.as_str() {
            "project-blocks.rich-text" => {
                serde_json::from_value(value).map(ContentBlock::RichText)
            }
            "project-blocks.image" => serde_json::from_value(value).map(ContentBlock::Image),
            "project-blocks.carousel" => {
                serde_json::from_value(value).map(ContentBlock::Carousel)
            }
            "project-blocks.video" => serde_json::from_value(value).map(ContentBlock::Video),
            "project-blocks.comparison-slider" => {
                serde_json::from_value(value).map(ContentBlock::ComparisonSlider)
            }
            "project-blocks.stats" => serde_json::from_value(value).map(ContentBlock::Stats),
            _ => return Ok(ContentBlock::Unknown { component }),
        };

        Ok(parsed.unwrap_or_else(|e| {
            log::warn!("malformed {} block: {}", component, e);
            ContentBlock::Unknown { component }
        }))
    }
}

/// The pure core of the block renderer: keep recognized, non-empty blocks in
/// input order; warn once per unrecognized block. Skipping is always local,
/// never fatal.
pub fn visible_blocks(blocks: &[ContentBlock]) -> Vec<&ContentBlock> {
    blocks
        .iter()
        .filter(|block| match block {
            ContentBlock::Unknown { component } => {
                log::warn!("unknown content block kind: {component}");
                false
            }
            other => !other.is_empty(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::rich_text::plain_text;
    use serde_json::json;

    fn parse(value: Value) -> Vec<ContentBlock> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_payloads_render_nothing() {
        let blocks = parse(json!([
            { "__component": "project-blocks.rich-text", "id": 1, "content": [] },
            { "__component": "project-blocks.image", "id": 2, "image": null },
            { "__component": "project-blocks.carousel", "id": 3, "slides": [] },
            { "__component": "project-blocks.video", "id": 4 },
            {
                "__component": "project-blocks.comparison-slider",
                "id": 5,
                "before_image": { "id": 1, "url": "/uploads/a.webp" },
                "after_image": null
            },
            { "__component": "project-blocks.stats", "id": 6, "items": [] }
        ]));
        assert!(blocks.iter().all(ContentBlock::is_empty));
        assert!(visible_blocks(&blocks).is_empty());
    }

    #[test]
    fn visible_blocks_preserve_input_order() {
        let blocks = parse(json!([
            { "__component": "project-blocks.image", "id": 10,
              "image": { "id": 1, "url": "/uploads/a.webp" } },
            { "__component": "project-blocks.image", "id": 11, "image": null },
            { "__component": "project-blocks.stats", "id": 12,
              "items": [{ "id": 1, "label": "Users", "value": 12000 }] },
            { "__component": "project-blocks.video", "id": 13,
              "url": "https://player.example.com/v/1" }
        ]));
        let visible = visible_blocks(&blocks);
        let ids: Vec<i64> = visible.iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec![10, 12, 13]);
    }

    #[test]
    fn unrecognized_kind_is_skipped_between_valid_blocks() {
        let blocks = parse(json!([
            { "__component": "project-blocks.image", "id": 1,
              "image": { "id": 1, "url": "/uploads/a.webp" } },
            { "__component": "project-blocks.hologram", "id": 2, "beam": true },
            { "__component": "project-blocks.stats", "id": 3,
              "items": [{ "id": 1, "label": "Uptime", "value": 99.9, "suffix": "%" }] }
        ]));
        assert!(matches!(&blocks[1], ContentBlock::Unknown { component }
            if component == "project-blocks.hologram"));

        let visible = visible_blocks(&blocks);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].id(), 1);
        assert_eq!(visible[1].id(), 3);
    }

    #[test]
    fn malformed_payload_degrades_to_unknown() {
        let blocks = parse(json!([
            { "__component": "project-blocks.stats", "id": 1, "items": "not-a-list" }
        ]));
        assert!(matches!(&blocks[0], ContentBlock::Unknown { .. }));
    }

    #[test]
    fn null_image_then_paragraph_yields_one_segment() {
        let blocks = parse(json!([
            { "__component": "project-blocks.image", "id": 1, "image": null },
            {
                "__component": "project-blocks.rich-text",
                "id": 2,
                "content": [{
                    "type": "paragraph",
                    "children": [{ "type": "text", "text": "Hello" }]
                }]
            }
        ]));
        let visible = visible_blocks(&blocks);
        assert_eq!(visible.len(), 1);
        match visible[0] {
            ContentBlock::RichText(rich) => assert_eq!(plain_text(&rich.content), "Hello"),
            other => panic!("expected rich text, got {}", other.component()),
        }
    }

    #[test]
    fn string_ids_do_not_drop_the_block() {
        let blocks = parse(json!([
            { "__component": "project-blocks.image", "id": "42",
              "image": { "id": 1, "url": "/uploads/a.webp" } },
            { "__component": "project-blocks.rich-text", "id": "a1",
              "content": [{ "type": "paragraph",
                            "children": [{ "type": "text", "text": "Hi" }] }] }
        ]));
        assert!(matches!(&blocks[0], ContentBlock::Image(b) if b.id == 42));
        assert!(matches!(&blocks[1], ContentBlock::RichText(_)));
        assert_eq!(visible_blocks(&blocks).len(), 2);
    }

    #[test]
    fn chart_type_decodes_with_fallbacks() {
        let block: StatsBlock = serde_json::from_value(json!({
            "id": 1,
            "items": [{ "id": 1, "label": "Score", "value": "87.5" }],
            "chart_type": "bar"
        }))
        .unwrap();
        assert_eq!(block.chart_type, ChartType::Bar);
        assert_eq!(block.items[0].value, 87.5);

        let block: StatsBlock = serde_json::from_value(json!({
            "id": 2,
            "items": [{ "id": 1, "label": "Score", "value": 1 }],
            "chart_type": "sparkline"
        }))
        .unwrap();
        assert_eq!(block.chart_type, ChartType::Unknown);

        let block: StatsBlock = serde_json::from_value(json!({
            "id": 3,
            "items": [{ "id": 1, "label": "Score", "value": 1 }]
        }))
        .unwrap();
        assert_eq!(block.chart_type, ChartType::NumberOnly);
    }
}
