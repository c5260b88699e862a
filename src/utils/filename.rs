use crate::charts::ChartFormat;
use std::path::PathBuf;

/// File name for a report figure: `fig{NN}-{slug}.{ext}`.
pub fn figure_filename(number: u32, title: &str, format: ChartFormat) -> PathBuf {
    PathBuf::from(format!(
        "fig{:02}-{}.{}",
        number,
        slugify(title),
        format.extension()
    ))
}

/// Lowercase ASCII slug; runs of anything else collapse into one `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}
