//! Structural page shells.
//!
//! Deliberately minimal markup: the pages carry semantic structure
//! (nav, breadcrumbs, cards, article body) and nothing else. Styling is
//! out of scope.

use std::fmt::Write as _;

use vellum_richtext::escape_html;

use crate::article::ArticlePage;
use crate::breadcrumbs::Breadcrumb;
use crate::category::CategoryLink;
use crate::listing::{ArticleCard, CategoryGroup};

fn shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape_html(title)
    )
}

fn nav(categories: &[CategoryLink], logo_url: &str) -> String {
    let mut out = String::from("<header><nav>");
    if !logo_url.is_empty() {
        let _ = write!(
            out,
            r#"<a href="/"><img src="{}" alt="logo"></a>"#,
            escape_html(logo_url)
        );
    }
    out.push_str("<ul>");
    for category in categories {
        let _ = write!(
            out,
            r#"<li><a href="{}">{}</a></li>"#,
            escape_html(&category.path),
            escape_html(&category.title)
        );
    }
    out.push_str("</ul></nav></header>");
    out
}

fn breadcrumbs(trail: &[Breadcrumb]) -> String {
    let mut out = String::from(r#"<nav class="breadcrumbs">"#);
    for (index, crumb) in trail.iter().enumerate() {
        // The current page is text, not a link.
        if index + 1 == trail.len() {
            let _ = write!(out, "<span>{}</span>", escape_html(&crumb.label));
        } else {
            let _ = write!(
                out,
                r#"<a href="{}">{}</a>"#,
                escape_html(&crumb.href),
                escape_html(&crumb.label)
            );
        }
    }
    out.push_str("</nav>");
    out
}

fn category_list(categories: &[CategoryLink]) -> String {
    let mut out = String::from(r#"<aside><ul class="category-links">"#);
    for category in categories {
        let _ = write!(
            out,
            r#"<li><a href="{}">{} ({})</a></li>"#,
            escape_html(&category.path),
            escape_html(&category.title),
            category.count
        );
    }
    out.push_str("</ul></aside>");
    out
}

fn cards(items: &[ArticleCard]) -> String {
    let mut out = String::new();
    for card in items {
        let _ = write!(
            out,
            r#"<article class="article-card"><a href="{}"><img src="{}" alt="">"#,
            escape_html(&card.href),
            escape_html(&card.image_src)
        );
        let _ = write!(out, "<h3>{}</h3>", escape_html(&card.title));
        let _ = write!(out, "<time>{}</time>", escape_html(&card.date));
        if !card.excerpt.is_empty() {
            let _ = write!(out, "<p>{}</p>", escape_html(&card.excerpt));
        }
        out.push_str("</a></article>");
    }
    out
}

fn toc(page: &ArticlePage) -> String {
    if page.toc.is_empty() {
        return String::new();
    }
    let mut out = String::from(r#"<nav class="toc"><ul>"#);
    for entry in &page.toc {
        let _ = write!(
            out,
            r##"<li data-level="{}"><a href="#{}">{}</a></li>"##,
            entry.level,
            escape_html(&entry.anchor),
            escape_html(&entry.title)
        );
    }
    out.push_str("</ul></nav>");
    out
}

/// Home page: grouped article cards with a category sidebar.
#[must_use]
pub fn home_page(
    site_title: &str,
    groups: &[CategoryGroup],
    categories: &[CategoryLink],
    logo_url: &str,
) -> String {
    let mut body = nav(categories, logo_url);
    body.push_str("<main>");
    for group in groups {
        let _ = write!(
            body,
            r#"<section><h2><a href="{}">{}</a></h2>{}</section>"#,
            escape_html(&group.category.path),
            escape_html(&group.category.title),
            cards(&group.items)
        );
    }
    body.push_str("</main>");
    body.push_str(&category_list(categories));
    shell(site_title, &body)
}

/// Listing page for a category or the latest articles.
#[must_use]
pub fn listing_page(
    title: &str,
    trail: &[Breadcrumb],
    items: &[ArticleCard],
    categories: &[CategoryLink],
    logo_url: &str,
) -> String {
    let mut body = nav(categories, logo_url);
    body.push_str("<main>");
    if !trail.is_empty() {
        body.push_str(&breadcrumbs(trail));
    }
    let _ = write!(body, "<h1>{}</h1>", escape_html(title));
    body.push_str(&cards(items));
    body.push_str("</main>");
    body.push_str(&category_list(categories));
    shell(title, &body)
}

/// Article page: breadcrumbs, title, date, table of contents, body.
#[must_use]
pub fn article_page(page: &ArticlePage, categories: &[CategoryLink], logo_url: &str) -> String {
    let mut body = nav(categories, logo_url);
    body.push_str("<main><article>");
    body.push_str(&breadcrumbs(&page.breadcrumbs));
    let _ = write!(body, "<h1>{}</h1>", escape_html(&page.title));
    let _ = write!(body, "<time>{}</time>", escape_html(&page.date));
    body.push_str(&toc(page));
    body.push_str(&page.body_html);
    body.push_str("</article></main>");
    body.push_str(&category_list(categories));
    shell(&page.title, &body)
}

/// Standalone document page (privacy policy).
#[must_use]
pub fn document_page(
    title: &str,
    trail: &[Breadcrumb],
    body_html: &str,
    categories: &[CategoryLink],
    logo_url: &str,
) -> String {
    let mut body = nav(categories, logo_url);
    body.push_str("<main>");
    body.push_str(&breadcrumbs(trail));
    let _ = write!(body, "<h1>{}</h1>", escape_html(title));
    body.push_str(body_html);
    body.push_str("</main>");
    body.push_str(&category_list(categories));
    shell(title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link() -> CategoryLink {
        CategoryLink {
            id: "c1".to_owned(),
            title: "Rust".to_owned(),
            path: "/rust".to_owned(),
            count: 2,
        }
    }

    #[test]
    fn test_listing_page_escapes_titles() {
        let html = listing_page("A <b> title", &[], &[], &[link()], "");
        assert!(html.contains("<h1>A &lt;b&gt; title</h1>"));
        assert!(html.contains("<title>A &lt;b&gt; title</title>"));
    }

    #[test]
    fn test_nav_and_sidebar_list_categories() {
        let html = home_page("Blog", &[], &[link()], "https://example.com/logo.png");
        assert!(html.contains(r#"<li><a href="/rust">Rust</a></li>"#));
        assert!(html.contains(r#"<li><a href="/rust">Rust (2)</a></li>"#));
        assert!(html.contains(r#"<img src="https://example.com/logo.png" alt="logo">"#));
    }

    #[test]
    fn test_breadcrumbs_last_item_is_text() {
        let trail = vec![
            Breadcrumb {
                href: "/".to_owned(),
                label: "Blog".to_owned(),
            },
            Breadcrumb {
                href: "/rust".to_owned(),
                label: "Rust".to_owned(),
            },
        ];
        let rendered = breadcrumbs(&trail);
        assert!(rendered.contains(r#"<a href="/">Blog</a>"#));
        assert!(rendered.contains("<span>Rust</span>"));
        assert!(!rendered.contains(r#"<a href="/rust">"#));
    }
}
