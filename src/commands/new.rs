//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Blog;

const DEFAULT_SCAFFOLD: &str = r#"---
title: '{{ title }}'
date: '{{ date }}'
description: ''
---

"#;

/// Create a new post file, returning its path
///
/// `path` is the identifier of the new post; it defaults to the slugified title.
pub fn create_post(blog: &Blog, title: &str, path: Option<&str>) -> Result<PathBuf> {
    let now = chrono::Utc::now().with_timezone(&blog.tz);

    let id = match path {
        Some(p) => p.trim_matches('/').to_string(),
        None => slug::slugify(title),
    };
    if id.is_empty() {
        anyhow::bail!("Cannot derive a post identifier from {:?}", title);
    }

    let file_path = blog.content_dir.join(format!("{}.mdx", id));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let scaffold_path = blog.base_dir.join("scaffolds").join("post.mdx");
    let scaffold = if scaffold_path.exists() {
        fs::read_to_string(&scaffold_path)?
    } else {
        DEFAULT_SCAFFOLD.to_string()
    };

    let content = scaffold
        .replace("{{ title }}", &title.replace('\'', "''"))
        .replace("{{ date }}", &now.format("%Y-%m-%d").to_string());

    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;

    tracing::info!("Created post {:?} at {:?}", id, file_path);
    println!("Created: {:?}", file_path);

    Ok(file_path)
}
