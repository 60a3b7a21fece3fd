use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::config;

/// Failures at the Content API boundary. Pages never propagate these;
/// they collapse into a loading/error/not-found view state.
#[derive(Debug, Error)]
pub enum CmsError {
    #[error("network error: {0}")]
    Network(String),
    #[error("cms returned status {0}")]
    Status(u16),
    #[error("could not decode cms response: {0}")]
    Decode(String),
}

/// Strapi wraps every document in a `data` envelope.
#[derive(Deserialize)]
struct CmsEnvelope<T> {
    data: T,
}

pub fn build_url(base: &str, endpoint: &str, query: &[(&str, String)]) -> String {
    let mut url = format!("{}/api{}", base, endpoint);
    if !query.is_empty() {
        let pairs: Vec<String> = query
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();
        url.push('?');
        url.push_str(&pairs.join("&"));
    }
    url
}

/// GET a collection or single type and unwrap the response envelope.
pub async fn fetch_api<T: DeserializeOwned>(
    endpoint: &str,
    query: &[(&str, String)],
) -> Result<T, CmsError> {
    let url = build_url(config::get_cms_url(), endpoint, query);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| CmsError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(CmsError::Status(response.status()));
    }

    let envelope: CmsEnvelope<T> = response
        .json()
        .await
        .map_err(|e| CmsError::Decode(e.to_string()))?;

    Ok(envelope.data)
}

/// Resolve a media reference against the CMS host. Absolute URLs pass
/// through unchanged; relative paths get the base prefixed.
pub fn media_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", config::get_cms_url(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_media_urls_pass_through() {
        let url = "https://media.example.com/uploads/thumb.webp";
        assert_eq!(media_url(url), url);
    }

    #[test]
    fn relative_media_urls_get_the_cms_base() {
        let resolved = media_url("/uploads/thumb.webp");
        assert!(resolved.starts_with(config::get_cms_url()));
        assert!(resolved.ends_with("/uploads/thumb.webp"));
    }

    #[test]
    fn build_url_without_query_has_no_question_mark() {
        let url = build_url("http://localhost:1337", "/about", &[]);
        assert_eq!(url, "http://localhost:1337/api/about");
    }

    #[test]
    fn build_url_encodes_query_values() {
        let url = build_url(
            "http://localhost:1337",
            "/projects",
            &[
                ("filters[slug][$eq]", "my project".to_string()),
                ("sort[0]", "date:desc".to_string()),
            ],
        );
        assert_eq!(
            url,
            "http://localhost:1337/api/projects?filters[slug][$eq]=my%20project&sort[0]=date%3Adesc"
        );
    }
}
