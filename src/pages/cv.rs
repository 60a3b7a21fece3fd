use std::cell::Cell;
use std::rc::Rc;

use chrono::NaiveDate;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::cms::client::media_url;
use crate::cms::queries::{get_career_chapters, get_certificates, get_cv_page};
use crate::cms::types::{CareerChapterData, CertificateData, CvPageData};
use crate::components::states::{EmptyState, LoadingSkeleton};
use crate::content::rich_text::render_rich_text;

/// "Apr 2021 – Present" style range for a role. An open end date means the
/// role is current.
fn format_date_range(start: NaiveDate, end: Option<NaiveDate>) -> String {
    let start_label = start.format("%b %Y").to_string();
    match end {
        Some(end) => format!("{start_label} \u{2013} {}", end.format("%b %Y")),
        None => format!("{start_label} \u{2013} Present"),
    }
}

fn location_label(chapter: &CareerChapterData) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if !chapter.city.is_empty() {
        parts.push(&chapter.city);
    }
    if !chapter.country.is_empty() {
        parts.push(&chapter.country);
    }
    let mut label = parts.join(", ");
    if chapter.remote {
        if label.is_empty() {
            label = "Remote".to_string();
        } else {
            label.push_str(" \u{2022} Remote");
        }
    } else if chapter.hybrid {
        label.push_str(" \u{2022} Hybrid");
    }
    label
}

#[function_component(Cv)]
pub fn cv() -> Html {
    let page = use_state(|| None::<CvPageData>);
    let chapters = use_state(Vec::<CareerChapterData>::new);
    let certificates = use_state(Vec::<CertificateData>::new);
    let loading = use_state(|| true);
    let error = use_state(|| false);

    {
        let page = page.clone();
        let chapters = chapters.clone();
        let certificates = certificates.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                let alive = Rc::new(Cell::new(true));
                let alive_for_cleanup = alive.clone();

                spawn_local(async move {
                    let page_result = get_cv_page().await;
                    let chapters_result = get_career_chapters().await;
                    let certificates_result = get_certificates().await;
                    if !alive.get() {
                        return;
                    }

                    match page_result {
                        Ok(data) => page.set(Some(data)),
                        Err(e) => {
                            log::error!("failed to load cv page: {e}");
                            error.set(true);
                        }
                    }
                    match chapters_result {
                        Ok(data) => chapters.set(data),
                        Err(e) => log::error!("failed to load career chapters: {e}"),
                    }
                    match certificates_result {
                        Ok(data) => certificates.set(data),
                        Err(e) => log::error!("failed to load certificates: {e}"),
                    }
                    loading.set(false);
                });

                move || alive_for_cleanup.set(false)
            },
            (),
        );
    }

    if *loading {
        return html! { <LoadingSkeleton /> };
    }

    let page_data = match (&*page, *error) {
        (Some(data), false) => data.clone(),
        _ => {
            return html! {
                <EmptyState title="Unable to load CV" message="Please try again later." />
            }
        }
    };

    // Both exports go through the browser's print dialog; "save as PDF" is
    // a destination every browser offers there.
    let on_print = Callback::from(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    });

    html! {
        <div class="cv-page">
            <div class="cv-export">
                <button onclick={on_print.clone()}>{"Save as PDF"}</button>
                <button onclick={on_print}>{"Print"}</button>
            </div>
            <header class="cv-header">
                if let Some(avatar) = &page_data.avatar {
                    <img
                        class="cv-avatar"
                        src={media_url(&avatar.url)}
                        alt={avatar.alternative_text.clone().unwrap_or_else(|| page_data.heading.clone())}
                    />
                }
                <div class="cv-identity">
                    <h1>{ page_data.heading.clone() }</h1>
                    <p class="cv-tagline">{ page_data.tagline.clone() }</p>
                    <ul class="cv-links">
                        if !page_data.email.is_empty() {
                            <li><a href={format!("mailto:{}", page_data.email)}>{ page_data.email.clone() }</a></li>
                        }
                        if !page_data.linkedin.is_empty() {
                            <li><a href={page_data.linkedin.clone()} target="_blank" rel="noopener">{"LinkedIn"}</a></li>
                        }
                        if !page_data.website.is_empty() {
                            <li><a href={page_data.website.clone()}>{ page_data.website.clone() }</a></li>
                        }
                    </ul>
                </div>
            </header>

            <section class="cv-section">
                { render_rich_text(&page_data.description) }
            </section>

            if !page_data.language.is_empty() {
                <section class="cv-section">
                    <h2>{"Languages"}</h2>
                    <ul class="cv-languages">
                        { for page_data.language.iter().map(|lang| html! {
                            <li key={lang.id}>
                                <span class="cv-language-region">{ lang.region.clone() }</span>
                                <span class="cv-language-level">{ lang.level.clone() }</span>
                            </li>
                        }) }
                    </ul>
                </section>
            }

            if !chapters.is_empty() {
                <section class="cv-section">
                    <h2>{"Experience"}</h2>
                    { for chapters.iter().map(render_chapter) }
                </section>
            }

            if !certificates.is_empty() {
                <section class="cv-section">
                    <h2>{"Certificates"}</h2>
                    <ul class="cv-certificates">
                        { for certificates.iter().map(render_certificate) }
                    </ul>
                </section>
            }

            <style>
                {r#"
                .cv-page { max-width: 760px; margin: 0 auto; padding: 7rem 2rem 4rem; display: flex; flex-direction: column; gap: 3rem; }
                .cv-export { position: fixed; top: 5rem; right: 2rem; z-index: 20; display: flex; gap: 0.5rem; }
                .cv-export button {
                    padding: 0.5rem 1rem;
                    border: 1px solid rgba(128, 128, 128, 0.35);
                    border-radius: 8px;
                    background: rgba(26, 26, 26, 0.8);
                    color: #fff;
                    cursor: pointer;
                }
                @media print {
                    .cv-export, .top-nav, .site-footer { display: none; }
                    .cv-page { padding: 0; }
                }
                .cv-header { display: flex; gap: 2rem; align-items: center; flex-wrap: wrap; }
                .cv-avatar { width: 112px; height: 112px; border-radius: 50%; object-fit: cover; }
                .cv-tagline { color: #999; margin-top: 0.25rem; }
                .cv-links { display: flex; gap: 1.25rem; flex-wrap: wrap; list-style: none; padding: 0; margin-top: 0.75rem; }
                .cv-links a { color: #7EB2FF; text-decoration: none; }
                .cv-section h2 { margin-bottom: 1.25rem; }
                .cv-languages { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.5rem; }
                .cv-languages li { display: flex; justify-content: space-between; border-bottom: 1px solid rgba(128, 128, 128, 0.25); padding-bottom: 0.5rem; }
                .cv-language-level { color: #999; }
                .cv-chapter { display: flex; gap: 1.5rem; padding: 1.5rem 0; border-bottom: 1px solid rgba(128, 128, 128, 0.25); }
                .cv-chapter-thumb { width: 56px; height: 56px; border-radius: 8px; object-fit: contain; flex-shrink: 0; }
                .cv-chapter-meta { color: #999; font-size: 0.9rem; }
                .cv-role { margin-top: 1.25rem; }
                .cv-role-dates { color: #999; font-size: 0.9rem; }
                .cv-certificates { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.75rem; }
                .cv-certificate { display: flex; align-items: center; gap: 1rem; }
                .cv-certificate img { width: 32px; height: 32px; object-fit: contain; }
                .cv-certificate a { color: inherit; }
                .cv-certificate-supplier { color: #999; font-size: 0.9rem; }
                "#}
            </style>
        </div>
    }
}

fn render_chapter(chapter: &CareerChapterData) -> Html {
    let location = location_label(chapter);

    html! {
        <article key={chapter.id} class="cv-chapter">
            if let Some(thumb) = &chapter.thumbnail {
                <img
                    class="cv-chapter-thumb"
                    src={media_url(&thumb.url)}
                    alt={thumb.alternative_text.clone().unwrap_or_else(|| chapter.business_name.clone())}
                />
            }
            <div>
                <h3>{ chapter.business_name.clone() }</h3>
                if !location.is_empty() {
                    <p class="cv-chapter-meta">{ location }</p>
                }
                if !chapter.description.is_empty() {
                    <p class="cv-chapter-meta">{ chapter.description.clone() }</p>
                }
                { for chapter.chapters.iter().map(|role| html! {
                    <div key={role.id} class="cv-role">
                        <h4>{ role.role.clone() }</h4>
                        <p class="cv-role-dates">
                            { format_date_range(role.start_date, role.end_date) }
                        </p>
                        { render_rich_text(&role.experience) }
                    </div>
                }) }
            </div>
        </article>
    }
}

fn render_certificate(certificate: &CertificateData) -> Html {
    html! {
        <li key={certificate.id} class="cv-certificate">
            if let Some(supplier) = &certificate.certificate_supplier {
                if let Some(thumb) = &supplier.thumbnail {
                    <img
                        src={media_url(&thumb.url)}
                        alt={thumb.alternative_text.clone().unwrap_or_else(|| supplier.name.clone())}
                    />
                }
            }
            <div>
                if certificate.url.is_empty() {
                    <span>{ certificate.name.clone() }</span>
                } else {
                    <a href={certificate.url.clone()} target="_blank" rel="noopener">
                        { certificate.name.clone() }
                    </a>
                }
                if let Some(supplier) = &certificate.certificate_supplier {
                    <p class="cv-certificate-supplier">{ supplier.name.clone() }</p>
                }
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn closed_range_shows_both_ends() {
        assert_eq!(
            format_date_range(date(2019, 4, 1), Some(date(2021, 9, 30))),
            "Apr 2019 \u{2013} Sep 2021"
        );
    }

    #[test]
    fn open_range_reads_present() {
        assert_eq!(
            format_date_range(date(2022, 1, 15), None),
            "Jan 2022 \u{2013} Present"
        );
    }

    #[test]
    fn location_combines_city_country_and_mode() {
        let chapter = CareerChapterData {
            id: 1,
            business_name: "Studio".into(),
            country: "UK".into(),
            city: "London".into(),
            hybrid: true,
            remote: false,
            description: String::new(),
            chapters: vec![],
            thumbnail: None,
        };
        assert_eq!(location_label(&chapter), "London, UK \u{2022} Hybrid");
    }

    #[test]
    fn fully_remote_chapter_without_location_reads_remote() {
        let chapter = CareerChapterData {
            id: 2,
            business_name: "Studio".into(),
            country: String::new(),
            city: String::new(),
            hybrid: false,
            remote: true,
            description: String::new(),
            chapters: vec![],
            thumbnail: None,
        };
        assert_eq!(location_label(&chapter), "Remote");
    }
}
