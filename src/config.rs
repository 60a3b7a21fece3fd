#[cfg(debug_assertions)]
pub fn get_cms_url() -> &'static str {
    "http://localhost:1337"  // Local Strapi instance when developing
}

#[cfg(not(debug_assertions))]
pub fn get_cms_url() -> &'static str {
    "https://cms.georgeyiakoumi.com"  // Production CMS
}

#[cfg(debug_assertions)]
pub fn get_forms_url() -> &'static str {
    "http://localhost:8788/forms/contact"
}

#[cfg(not(debug_assertions))]
pub fn get_forms_url() -> &'static str {
    "/forms/contact"  // Forms processor behind the production host
}
