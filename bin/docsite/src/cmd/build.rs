//! Build command - exports the derived documents

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr, bail};
use docsite_core::Config;
use docsite_generator::Builder;

/// Run the build command.
///
/// Writes `sitemap.xml`, `llms.txt` and `llms-full.txt` into the output directory.
pub fn run(config_path: &Path, output: Option<&Path>, base_url: Option<&str>) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?output, ?base_url, "Starting build");

    let mut config =
        Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;

    if let Some(url) = base_url {
        if !url.starts_with("http") {
            bail!("--base-url should start with http:// or https://, got {url:?}");
        }
        tracing::info!(base_url = url, "Overriding site base_url from CLI");
        config.site.base_url = url.to_string();
    }

    let output_dir = output.map_or_else(|| config.build.output_dir.clone(), Path::to_path_buf);
    tracing::debug!(?config, "Loaded configuration");

    let builder = Builder::new(config, &output_dir);
    let stats = builder.build().wrap_err("Build failed")?;

    let duration = start.elapsed();

    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Pages:      {}", stats.pages);
    for document in &stats.documents {
        println!("  Wrote:      {}", document.display());
    }
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", output_dir.display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn site(dir: &Path) -> std::path::PathBuf {
        let content = dir.join("content");
        fs::create_dir_all(content.join("docs/installation")).unwrap();
        fs::write(content.join("page.md"), "---\ntitle: Home\n---\nHi").unwrap();
        fs::write(content.join("docs/installation/page.md"), "Install").unwrap();

        let config_path = dir.join("docsite.toml");
        fs::write(
            &config_path,
            format!(
                "[site]\ntitle = \"Nestled\"\nbase_url = \"https://nestledjs.com\"\n\n\
                 [content]\nroot = {:?}\n",
                content.display().to_string()
            ),
        )
        .unwrap();
        config_path
    }

    #[test]
    fn test_build_writes_documents() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = site(dir.path());
        let output = dir.path().join("public");

        run(&config_path, Some(&output), Some("https://docs.example.com")).unwrap();

        let digest = fs::read_to_string(output.join("llms.txt")).unwrap();
        assert!(digest.contains("- [Home](https://docs.example.com/)"));
        assert!(output.join("llms-full.txt").exists());
        assert!(output.join("sitemap.xml").exists());
    }

    #[test]
    fn test_build_rejects_bad_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = site(dir.path());

        let result = run(&config_path, Some(&dir.path().join("out")), Some("nestledjs.com"));

        assert!(result.is_err());
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_build_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        site(dir.path());
        let output = dir.path().join("public");

        let result = run(&dir.path().join("nope.toml"), Some(&output), None);

        let report = result.unwrap_err();
        assert!(report.chain().any(|cause| cause.to_string().contains("not found")));
        assert!(!output.exists());
    }
}
