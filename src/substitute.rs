use std::sync::LazyLock;

use regex::{NoExpand, Regex};

static THEME_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new("(?i)mytheme").unwrap());
static AUTHOR_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new("(?i)your name").unwrap());

/// Replace every case-insensitive occurrence of the `mytheme` and `your name`
/// placeholder tokens with the given values, verbatim. Text without either
/// token is returned unchanged; the two passes never overlap so their order
/// does not matter.
pub fn substitute(body: &str, theme_name: &str, author_name: &str) -> String {
    let pass = THEME_TOKEN.replace_all(body, NoExpand(theme_name));
    AUTHOR_TOKEN
        .replace_all(&pass, NoExpand(author_name))
        .into_owned()
}
