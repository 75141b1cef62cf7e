//! Breadcrumb trails.

/// One breadcrumb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    /// Link target.
    pub href: String,
    /// Display label.
    pub label: String,
}

impl Breadcrumb {
    fn new(href: &str, label: &str) -> Self {
        Self {
            href: href.to_owned(),
            label: label.to_owned(),
        }
    }
}

/// Home → category.
#[must_use]
pub fn category_breadcrumbs(
    site_title: &str,
    category_slug: &str,
    category_title: &str,
) -> Vec<Breadcrumb> {
    vec![
        Breadcrumb::new("/", site_title),
        Breadcrumb::new(&format!("/{category_slug}"), category_title),
    ]
}

/// Home → category → article.
#[must_use]
pub fn article_breadcrumbs(
    site_title: &str,
    category_slug: &str,
    category_title: &str,
    article_slug: &str,
    article_title: &str,
) -> Vec<Breadcrumb> {
    let mut trail = category_breadcrumbs(site_title, category_slug, category_title);
    trail.push(Breadcrumb::new(
        &format!("/{category_slug}/{article_slug}"),
        article_title,
    ));
    trail
}

/// Home → privacy policy.
#[must_use]
pub fn privacy_policy_breadcrumbs(site_title: &str) -> Vec<Breadcrumb> {
    vec![
        Breadcrumb::new("/", site_title),
        Breadcrumb::new("/privacy-policy", "プライバシーポリシー"),
    ]
}
