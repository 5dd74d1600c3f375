use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("Invalid frontmatter format: {0}")]
    InvalidFormat(String),
    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Parse markdown content with YAML frontmatter into a raw `serde_yaml::Value`.
///
/// Returns the frontmatter, the title taken from the H1 heading right after
/// it (empty when there is none) and the remaining body.
///
/// # Format
/// ```markdown
/// ---
/// key: value
/// ---
/// # Title
///
/// Body content...
/// ```
pub fn parse_frontmatter_raw(
    content: &str,
) -> Result<(serde_yaml::Value, String, String), FrontmatterError> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.first() != Some(&"---") {
        return Err(FrontmatterError::InvalidFormat(
            "Content must start with '---'".to_string(),
        ));
    }

    let end_idx = lines
        .iter()
        .skip(1)
        .position(|&line| line == "---")
        .ok_or_else(|| {
            FrontmatterError::InvalidFormat("Missing closing '---' for frontmatter".to_string())
        })?;

    let frontmatter_yaml = lines.get(1..=end_idx).unwrap_or(&[]).join("\n");
    let value: serde_yaml::Value = serde_yaml::from_str(&frontmatter_yaml)?;

    // Skip the closing ---
    let body_start = end_idx.saturating_add(2);
    let body_lines: Vec<&str> = lines
        .get(body_start..)
        .unwrap_or(&[])
        .iter()
        .skip_while(|line| line.is_empty())
        .copied()
        .collect();

    let (title, body) = match body_lines.split_first() {
        Some((first, rest)) if first.starts_with("# ") => {
            let title = first.strip_prefix("# ").unwrap_or("").to_string();
            let body = rest
                .iter()
                .skip_while(|line| line.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join("\n")
                .trim_end()
                .to_string();
            (title, body)
        }
        _ => (String::new(), body_lines.join("\n").trim_end().to_string()),
    };

    Ok((value, title, body))
}

/// Generate markdown content with YAML frontmatter.
pub fn generate_frontmatter<T: Serialize>(
    metadata: &T,
    title: &str,
    body: &str,
) -> Result<String, FrontmatterError> {
    let yaml = serde_yaml::to_string(metadata)?;
    // serde_yaml adds a trailing newline
    let yaml = yaml.trim_end();

    if body.is_empty() {
        Ok(format!("---\n{yaml}\n---\n\n# {title}\n"))
    } else {
        Ok(format!("---\n{yaml}\n---\n\n# {title}\n\n{body}\n"))
    }
}
