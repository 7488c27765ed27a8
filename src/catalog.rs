use anyhow::{Context, Result, anyhow};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "templates"]
struct Assets;

/// One named unit of raw template text, not yet substituted.
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    /// Bare file name, no path separators.
    pub name: &'static str,
    pub body: String,
}

/// The full set of templates the generator can produce, grouped by
/// destination directory. Loaded once per run from the embedded assets.
#[derive(Debug)]
pub struct TemplateCatalog {
    pub root_entries: Vec<TemplateEntry>,
    pub part_entries: Vec<TemplateEntry>,
    pub include_entries: Vec<TemplateEntry>,
}

/// Files written directly into the theme directory, in write order.
pub const ROOT_NAMES: &[&str] = &[
    "functions.php",
    "header.php",
    "footer.php",
    "style.css",
    "theme.json",
    "__version__",
    "index.php",
    "home.php",
];

/// Files written under `template-parts/`.
pub const PART_NAMES: &[&str] = &["page.php", "single.php"];

/// Files written under `inc/`.
pub const INC_NAMES: &[&str] = &["custom-functions.php", "custom-templates.php"];

pub fn load() -> Result<TemplateCatalog> {
    Ok(TemplateCatalog {
        root_entries: load_group("", ROOT_NAMES)?,
        part_entries: load_group("template-parts/", PART_NAMES)?,
        include_entries: load_group("inc/", INC_NAMES)?,
    })
}

fn load_group(prefix: &str, names: &[&'static str]) -> Result<Vec<TemplateEntry>> {
    names
        .iter()
        .map(|&name| {
            let body = get_string(&format!("{prefix}{name}"))?;
            Ok(TemplateEntry { name, body })
        })
        .collect()
}

fn get_string(path: &str) -> Result<String> {
    let file = Assets::get(path).ok_or_else(|| anyhow!("embedded template `{}` missing", path))?;
    std::str::from_utf8(file.data.as_ref())
        .with_context(|| format!("decoding embedded template `{}`", path))
        .map(|value| value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_expected_group_sizes() {
        let catalog = load().unwrap();
        assert_eq!(catalog.root_entries.len(), 8);
        assert_eq!(catalog.part_entries.len(), 2);
        assert_eq!(catalog.include_entries.len(), 2);
    }

    #[test]
    fn entry_names_are_unique_within_each_group() {
        for group in [ROOT_NAMES, PART_NAMES, INC_NAMES] {
            let mut names: Vec<_> = group.to_vec();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), group.len());
        }
    }

    #[test]
    fn entry_names_carry_no_path_separators() {
        for group in [ROOT_NAMES, PART_NAMES, INC_NAMES] {
            for name in group {
                assert!(!name.contains(['/', '\\']), "bad entry name: {name}");
            }
        }
    }

    #[test]
    fn bodies_are_nonempty() {
        let catalog = load().unwrap();
        for entry in catalog
            .root_entries
            .iter()
            .chain(&catalog.part_entries)
            .chain(&catalog.include_entries)
        {
            assert!(!entry.body.is_empty(), "{} is empty", entry.name);
        }
    }

    #[test]
    fn theme_json_carries_both_placeholders() {
        let catalog = load().unwrap();
        let theme_json = catalog
            .root_entries
            .iter()
            .find(|entry| entry.name == "theme.json")
            .unwrap();
        assert!(theme_json.body.contains("MyTheme"));
        assert!(theme_json.body.contains("Your Name"));
    }
}
