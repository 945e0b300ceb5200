//! Request path classification.

use regex::Regex;
use std::sync::OnceLock;

/// Where a request path should be dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// `/{section}/{name}.md`, rendered through the slide templates
    Markdown { section: &'a str, filename: &'a str },
    /// `/wiki/{name}.wiki`
    Wiki { filename: &'a str },
    /// Anything else is a static file under the web root
    Static,
}

static WIKI_PATH: OnceLock<Regex> = OnceLock::new();
static MD_PATH: OnceLock<Regex> = OnceLock::new();

fn wiki_path() -> &'static Regex {
    WIKI_PATH.get_or_init(|| Regex::new(r"^/(wiki)/([.\-_:a-zA-Z0-9]+\.wiki)$").unwrap())
}

fn md_path() -> &'static Regex {
    MD_PATH.get_or_init(|| {
        Regex::new(r"^/(slides|menu1|menu2|menu3|plain|test)/([.\-_:a-zA-Z0-9]+\.md)$").unwrap()
    })
}

/// Classify a request path. File names never contain a slash.
pub fn classify_request(path: &str) -> Route<'_> {
    if let Some(caps) = wiki_path().captures(path) {
        if let Some(filename) = caps.get(2) {
            return Route::Wiki {
                filename: filename.as_str(),
            };
        }
    }

    if let Some(caps) = md_path().captures(path) {
        if let (Some(section), Some(filename)) = (caps.get(1), caps.get(2)) {
            return Route::Markdown {
                section: section.as_str(),
                filename: filename.as_str(),
            };
        }
    }

    Route::Static
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_routes() {
        assert_eq!(
            classify_request("/slides/intro-talk_v2.md"),
            Route::Markdown {
                section: "slides",
                filename: "intro-talk_v2.md"
            }
        );
        assert_eq!(
            classify_request("/menu3/a:b.md"),
            Route::Markdown {
                section: "menu3",
                filename: "a:b.md"
            }
        );
    }

    #[test]
    fn test_wiki_route() {
        assert_eq!(
            classify_request("/wiki/Home.wiki"),
            Route::Wiki {
                filename: "Home.wiki"
            }
        );
    }

    #[test]
    fn test_static_fallback() {
        assert_eq!(classify_request("/images/sphere.png"), Route::Static);
        assert_eq!(classify_request("/other/talk.md"), Route::Static);
        assert_eq!(classify_request("/slides/talk.wiki"), Route::Static);
        assert_eq!(classify_request("/slides/sub/talk.md"), Route::Static);
        assert_eq!(classify_request("/slides/talk.mdx"), Route::Static);
        assert_eq!(classify_request("/"), Route::Static);
    }
}
