use heck::ToSnakeCase;

/// Converts `BlogPost` / `blogPost` / `blog-post` into `blog_post`.
pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

/// Pluralizes a single English word, preserving everything before the last
/// `_` so `blog_post` becomes `blog_posts`.
pub fn pluralize(word: &str) -> String {
    match word.rsplit_once('_') {
        Some((head, tail)) => format!("{head}_{}", pluralize(tail)),
        None if word.is_empty() => String::new(),
        None => pluralizer::pluralize(word, 2, false),
    }
}

/// `blog_post` -> `Blog post`
pub fn humanize(src: &str) -> String {
    let spaced = src.trim_end_matches("_id").replace('_', " ");
    let mut chars = spaced.trim().chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
