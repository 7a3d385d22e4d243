use super::Inflections;
use std::fmt;
use std_util::str;

/// A model type name, possibly namespaced (`Admin::Post`).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    /// Namespace segments followed by the type name, as written.
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let parts = src
            .split("::")
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();
        Self { parts }
    }

    /// The type name without its namespace.
    pub fn base(&self) -> &str {
        self.parts.last().map(String::as_str).unwrap_or("")
    }

    /// `Admin::BlogPost` -> `admin/blog_post`
    pub fn underscore(&self) -> String {
        self.parts
            .iter()
            .map(|part| str::snake_case(part))
            .collect::<Vec<_>>()
            .join("/")
    }

    /// `Admin::BlogPost` -> `admin/blog_posts`
    ///
    /// Only the final segment is pluralized.
    pub fn tableize(&self, inflections: &Inflections) -> String {
        let underscored = self.underscore();
        match underscored.rsplit_once('/') {
            Some((namespace, base)) => format!("{namespace}/{}", inflections.pluralize(base)),
            None => inflections.pluralize(&underscored),
        }
    }

    /// `Admin::BlogPost` -> `Blog post`
    pub fn human(&self) -> String {
        str::humanize(&str::snake_case(self.base()))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts.join("::"))
    }
}

impl From<&str> for Name {
    fn from(src: &str) -> Self {
        Name::new(src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underscore_plain_and_namespaced() {
        assert_eq!(Name::new("Article").underscore(), "article");
        assert_eq!(Name::new("BlogPost").underscore(), "blog_post");
        assert_eq!(Name::new("Admin::BlogPost").underscore(), "admin/blog_post");
    }

    #[test]
    fn tableize_pluralizes_last_segment() {
        let inflections = Inflections::default();
        assert_eq!(Name::new("Article").tableize(&inflections), "articles");
        assert_eq!(Name::new("Category").tableize(&inflections), "categories");
        assert_eq!(
            Name::new("Admin::BlogPost").tableize(&inflections),
            "admin/blog_posts"
        );
    }

    #[test]
    fn tableize_uses_overrides() {
        let inflections = Inflections::default().irregular("cactus", "cactuses");
        assert_eq!(Name::new("Cactus").tableize(&inflections), "cactuses");
    }

    #[test]
    fn human_title() {
        assert_eq!(Name::new("Article").human(), "Article");
        assert_eq!(Name::new("Admin::BlogPost").human(), "Blog post");
    }

    #[test]
    fn display_round_trips_source() {
        assert_eq!(Name::new("Admin::Post").to_string(), "Admin::Post");
    }
}
