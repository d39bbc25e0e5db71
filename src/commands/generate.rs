//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::Blog;

/// Load content and generate the static site
pub fn run(blog: &Blog) -> Result<()> {
    let start = std::time::Instant::now();

    let collection = blog.load_content()?;
    tracing::info!("Loaded {} posts", collection.len());

    let generator = Generator::new(blog)?;
    let count = generator.generate(&collection)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} post pages into {:?} in {:.2}s",
        count,
        blog.public_dir,
        duration.as_secs_f64()
    );

    Ok(())
}
