//! List site content

use anyhow::Result;

use crate::helpers::format_date;
use crate::page::DISPLAY_DATE_FORMAT;
use crate::Blog;

/// List every post identifier with its date and title
pub fn run(blog: &Blog) -> Result<()> {
    let collection = blog.load_content()?;

    println!("Posts ({}):", collection.len());
    for post in collection.posts() {
        println!(
            "  {} - {} [{}]{}",
            format_date(&post.date, DISPLAY_DATE_FORMAT, blog.tz),
            post.title,
            post.id,
            if post.draft { " (draft)" } else { "" }
        );
    }

    Ok(())
}
