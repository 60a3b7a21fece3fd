use crate::cms::client::{fetch_api, CmsError};
use crate::cms::types::{
    AboutData, CareerChapterData, CertificateData, ContactInfoData, CvPageData, LogoData,
    ProjectData,
};

const PAGE_SIZE_ALL: &str = "1000";

fn thumb_fields() -> [(&'static str, String); 4] {
    [
        ("populate[project_thumb][fields][0]", "url".to_string()),
        (
            "populate[project_thumb][fields][1]",
            "alternativeText".to_string(),
        ),
        ("populate[project_thumb][fields][2]", "width".to_string()),
        ("populate[project_thumb][fields][3]", "height".to_string()),
    ]
}

pub async fn get_about() -> Result<AboutData, CmsError> {
    fetch_api("/about", &[("populate", "*".to_string())]).await
}

pub struct ProjectFilter {
    pub limit: Option<u32>,
    pub tag: Option<String>,
}

pub async fn get_projects(filter: ProjectFilter) -> Result<Vec<ProjectData>, CmsError> {
    let mut query = vec![("populate[body][populate]", "*".to_string())];
    query.extend(thumb_fields());
    query.push(("sort[0]", "date:desc".to_string()));

    if let Some(tag) = filter.tag {
        query.push(("filters[tags][name][$eq]", tag));
    }
    if let Some(limit) = filter.limit {
        query.push(("pagination[pageSize]", limit.to_string()));
    }

    fetch_api("/projects", &query).await
}

/// Slug lookups go through the collection filter; an empty result set is the
/// distinct not-found outcome, not an error.
pub async fn get_project_by_slug(slug: &str) -> Result<Option<ProjectData>, CmsError> {
    let mut query = vec![
        ("filters[slug][$eq]", slug.to_string()),
        ("populate[body][populate]", "*".to_string()),
    ];
    query.extend(thumb_fields());

    let mut projects: Vec<ProjectData> = fetch_api("/projects", &query).await?;
    if projects.is_empty() {
        Ok(None)
    } else {
        Ok(Some(projects.remove(0)))
    }
}

pub async fn get_tools() -> Result<Vec<LogoData>, CmsError> {
    fetch_api(
        "/tools",
        &[
            ("populate", "*".to_string()),
            ("pagination[pageSize]", PAGE_SIZE_ALL.to_string()),
        ],
    )
    .await
}

pub async fn get_businesses() -> Result<Vec<LogoData>, CmsError> {
    fetch_api(
        "/businesses",
        &[
            ("populate", "*".to_string()),
            ("pagination[pageSize]", PAGE_SIZE_ALL.to_string()),
        ],
    )
    .await
}

pub async fn get_cv_page() -> Result<CvPageData, CmsError> {
    fetch_api("/cv-page", &[("populate", "*".to_string())]).await
}

pub async fn get_career_chapters() -> Result<Vec<CareerChapterData>, CmsError> {
    fetch_api(
        "/career-chapters",
        &[
            ("populate", "*".to_string()),
            ("pagination[pageSize]", PAGE_SIZE_ALL.to_string()),
            ("sort[0]", "createdAt:asc".to_string()),
        ],
    )
    .await
}

pub async fn get_certificates() -> Result<Vec<CertificateData>, CmsError> {
    fetch_api(
        "/certificates",
        &[
            (
                "populate[certificate_supplier][populate]",
                "thumbnail".to_string(),
            ),
            ("pagination[pageSize]", PAGE_SIZE_ALL.to_string()),
        ],
    )
    .await
}

pub async fn get_contact_info() -> Result<ContactInfoData, CmsError> {
    fetch_api("/contact-info", &[]).await
}
