use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::content::blocks::ContentBlock;
use crate::content::rich_text::RichTextNode;

/// A media reference as it appears nested inside documents. Paths may be
/// relative to the CMS host; resolve them with `client::media_url`.
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct CmsMedia {
    #[serde(default)]
    pub id: i64,
    pub url: String,
    #[serde(rename = "alternativeText", default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub mime: Option<String>,
    #[serde(default)]
    pub ext: Option<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ProjectTag {
    pub name: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ProjectData {
    pub id: i64,
    #[serde(rename = "documentId", default)]
    pub document_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub slug: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<ProjectTag>,
    #[serde(default)]
    pub project_thumb: Option<CmsMedia>,
    #[serde(default)]
    pub project_client: Option<String>,
    #[serde(default)]
    pub project_role: Option<String>,
    #[serde(default)]
    pub body: Vec<ContentBlock>,
}

impl ProjectData {
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(|t| t.name.as_str())
    }
}

/// Businesses and tools share one logo-item shape: an image plus optional
/// CSS-variable maps for the light and dark themes. `BTreeMap` keeps the
/// merged inline style deterministic.
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct LogoData {
    pub id: i64,
    pub name: String,
    #[serde(rename = "ariaLabel", default)]
    pub aria_label: String,
    #[serde(rename = "imageWidth", default)]
    pub image_width: Option<u32>,
    #[serde(default)]
    pub classes: Option<String>,
    #[serde(rename = "cssVariables", default)]
    pub css_variables: Option<BTreeMap<String, String>>,
    #[serde(rename = "cssVariablesDark", default)]
    pub css_variables_dark: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<CmsMedia>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct AboutData {
    pub id: i64,
    #[serde(default)]
    pub hero: Vec<RichTextNode>,
    #[serde(default)]
    pub heading_businesses: String,
    #[serde(default)]
    pub heading_tools: String,
    #[serde(default)]
    pub contact: Vec<RichTextNode>,
    #[serde(default)]
    pub businesses: Vec<LogoData>,
    #[serde(default)]
    pub tools: Vec<LogoData>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct CvLanguage {
    pub id: i64,
    pub region: String,
    pub level: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct CvPageData {
    pub id: i64,
    pub heading: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub description: Vec<RichTextNode>,
    #[serde(default)]
    pub avatar: Option<CmsMedia>,
    #[serde(default)]
    pub language: Vec<CvLanguage>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct CareerRole {
    pub id: i64,
    pub role: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub experience: Vec<RichTextNode>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct CareerChapterData {
    pub id: i64,
    pub business_name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub hybrid: bool,
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub description: String,
    // Capitalized on the wire; the CMS schema predates the lowercase
    // field-name migration for this one component.
    #[serde(rename = "Chapter", default)]
    pub chapters: Vec<CareerRole>,
    #[serde(default)]
    pub thumbnail: Option<CmsMedia>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct CertificateSupplier {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub thumbnail: Option<CmsMedia>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct CertificateData {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub certificate_supplier: Option<CertificateSupplier>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ContactInfoData {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(rename = "linkedinUrl", default)]
    pub linkedin_url: Option<String>,
    #[serde(rename = "githubUrl", default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn project_parses_canonical_lowercase_fields() {
        let project: ProjectData = serde_json::from_value(json!({
            "id": 7,
            "documentId": "abc123",
            "title": "Design system overhaul",
            "description": "A ground-up rebuild",
            "slug": "design-system-overhaul",
            "date": "2024-11-02",
            "tags": [{ "name": "Product design" }, { "name": "Web" }],
            "project_thumb": { "id": 1, "url": "/uploads/thumb.webp" },
            "project_client": "Acme",
            "body": [
                { "__component": "project-blocks.rich-text", "id": 1,
                  "content": [{ "type": "paragraph",
                                "children": [{ "type": "text", "text": "Intro" }] }] }
            ]
        }))
        .unwrap();

        assert_eq!(project.primary_tag(), Some("Product design"));
        assert_eq!(project.date.format("%Y").to_string(), "2024");
        assert_eq!(project.body.len(), 1);
        assert!(project.project_role.is_none());
    }

    #[test]
    fn career_chapter_accepts_capitalized_chapter_list() {
        let chapter: CareerChapterData = serde_json::from_value(json!({
            "id": 1,
            "business_name": "Studio North",
            "country": "UK",
            "city": "London",
            "hybrid": true,
            "remote": false,
            "description": "Brand and product studio",
            "Chapter": [{
                "id": 10,
                "role": "Senior Designer",
                "start_date": "2021-04-01",
                "end_date": null,
                "experience": []
            }]
        }))
        .unwrap();

        assert_eq!(chapter.chapters.len(), 1);
        assert!(chapter.chapters[0].end_date.is_none());
    }
}
