//! Example bundle descriptions and display languages.

use std::collections::BTreeMap;

/// Extensions accepted as example bundles.
pub const EXAMPLE_EXTENSIONS: [&str; 2] = ["md", "txt"];

pub fn is_example_file(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) => !stem.is_empty() && EXAMPLE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

/// Pull per-file descriptions out of an `examples/README.md` index.
///
/// Recognizes list entries such as
/// `- [page.md](./page.md) - Basic page component`,
/// `- **page.md**: Basic page component` and
/// `` - `page.md` — Basic page component ``.
pub fn index_descriptions<'a>(index: &str, files: impl IntoIterator<Item = &'a str>) -> BTreeMap<String, String> {
    let mut found = BTreeMap::new();
    for file in files {
        let markers = [
            format!("({})", file),
            format!("(./{})", file),
            format!("**{}**", file),
            format!("`{}`", file),
            format!("[{}]", file),
        ];
        for line in index.lines() {
            let Some(end) = markers.iter().filter_map(|m| line.rfind(m.as_str()).map(|at| at + m.len())).max() else {
                continue;
            };
            let description = line[end..]
                .trim_start_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '–' | '—' | ':' | '|' | '*'))
                .trim();
            if !description.is_empty() {
                found.insert(file.to_string(), description.to_string());
                break;
            }
        }
    }
    found
}

/// First meaningful line of a snippet, used when the index says nothing.
pub fn fallback_description(body: &str) -> String {
    body.lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.starts_with('#') && !l.starts_with("```") && !l.starts_with("<!--"))
        .map(|l| l.trim_start_matches(['/', '*', '>', ' ']).trim().to_string())
        .unwrap_or_default()
}

/// Info string of the first fenced block, else a name derived from the extension.
pub fn display_language(filename: &str, body: &str) -> String {
    let fenced = body
        .lines()
        .filter_map(|l| l.trim_start().strip_prefix("```"))
        .map(|info| info.split_whitespace().next().unwrap_or_default())
        .find(|info| !info.is_empty());
    if let Some(info) = fenced {
        return info.to_string();
    }
    match filename.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()) {
        Some(ext) if ext == "md" => "markdown".to_string(),
        Some(ext) if ext == "txt" => "text".to_string(),
        Some(ext) => ext,
        None => "text".to_string(),
    }
}
