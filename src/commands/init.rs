//! Initialize a new blog site

use anyhow::Result;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# inkwell configuration

# Site
site_url: https://example.com
title: My Blog
description: ''
author: John Doe
locale: en-US
social_banner: /static/images/banner.png
timezone: UTC

# Directory
content_dir: data/posts
public_dir: public
static_dir: static
file_path_patterns:
  - '**/*.md'
  - '**/*.mdx'

# Writing
render_drafts: false
highlight_theme: base16-ocean.dark
line_numbers: false

# Theme
default_theme: system
themes: [light, dark, system]
"#;

const POST_SCAFFOLD: &str = r#"---
title: '{{ title }}'
date: '{{ date }}'
description: ''
tags: []
draft: false
---

"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("{:?} already contains a _config.yml", target_dir);
    }

    fs::create_dir_all(target_dir.join("data/posts"))?;
    fs::create_dir_all(target_dir.join("static/images"))?;
    fs::create_dir_all(target_dir.join("scaffolds"))?;

    fs::write(&config_path, DEFAULT_CONFIG)?;
    fs::write(target_dir.join("scaffolds/post.mdx"), POST_SCAFFOLD)?;

    let today = chrono::Utc::now().format("%Y-%m-%d");
    let sample_post = format!(
        r#"---
title: Hello World
date: '{}'
description: The first post of this blog
---

Welcome! This post is written in MDX: plain markdown plus JSX where needed.

## Writing posts

```bash
$ inkwell new "My New Post"
```

## Previewing

```bash
$ inkwell server
```

## Publishing

```bash
$ inkwell generate
```
"#,
        today
    );

    fs::write(target_dir.join("data/posts/hello-world.mdx"), sample_post)?;

    Ok(())
}
