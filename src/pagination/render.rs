use maud::{html, Markup, PreEscaped, Render};

use super::set::PageSet;

const PLACEHOLDER: &str = "%d";

/// Link list for a [`PageSet`], renderable inside any maud template.
///
/// `uri_template` must contain one `%d`, which is replaced with the page
/// number. The template is written out unescaped.
pub struct PageLinks<'a> {
    set: &'a PageSet,
    uri_template: &'a str,
}

impl<'a> PageLinks<'a> {
    fn href(&self, page: i64) -> PreEscaped<String> {
        PreEscaped(self.uri_template.replacen(PLACEHOLDER, &page.to_string(), 1))
    }
}

impl Render for PageLinks<'_> {
    fn render(&self) -> Markup {
        let set = self.set;

        html! {
            @if set.pin_first {
                a class="pg-page-first" href=(self.href(1)) { "1" } " "
                span class="pg-page-ellipsis-first" { "..." } " "
            }
            @for &page in &set.pages {
                @let class = if page == set.page { "pg-page pg-selected" } else { "pg-page" };
                a class=(class) href=(self.href(page)) { (page) } " "
            }
            @if set.pin_last {
                span class="pg-page-ellipsis-last" { "..." } " "
                a class="pg-page-last" href=(self.href(set.total_pages)) { (set.total_pages) } " "
            }
        }
    }
}

impl PageSet {
    pub fn links<'a>(&'a self, uri_template: &'a str) -> PageLinks<'a> {
        PageLinks {
            set: self,
            uri_template,
        }
    }

    /// Renders the page strip as an HTML fragment with no surrounding element.
    pub fn html(&self, uri_template: &str) -> String {
        self.links(uri_template).render().into_string()
    }
}
