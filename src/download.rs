//! Fetching matched images and writing them out as PNG files.

use std::path::PathBuf;

use image::ImageFormat;
use indicatif::ProgressBar;
use reqwest::Client;
use url::Url;

use crate::error::Error;

/// Download every wallpaper in the mapping into the current working
/// directory as `<name>.png`.
///
/// The source bytes are decoded and re-encoded, so the saved file is a PNG
/// regardless of the format the server returns. Downloads run one at a time
/// and the first failure aborts the rest of the batch. Existing files with
/// the same name are overwritten.
pub async fn save_wallpapers(
    client: &Client,
    links: &[(String, Url)],
) -> Result<Vec<PathBuf>, Error> {
    let progress = ProgressBar::new(links.len() as u64);
    let mut saved = Vec::with_capacity(links.len());

    for (name, url) in links {
        let bytes = client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::Request {
                url: url.clone(),
                source: e,
            })?
            .bytes()
            .await
            .map_err(|e| Error::Request {
                url: url.clone(),
                source: e,
            })?;

        let wallpaper = image::load_from_memory(&bytes).map_err(|e| Error::Decode {
            url: url.clone(),
            source: e,
        })?;

        let path = PathBuf::from(format!("{name}.png"));
        wallpaper
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|e| Error::Save {
                path: path.clone(),
                source: e,
            })?;

        tracing::debug!("saved {} from {url}", path.display());
        progress.inc(1);
        saved.push(path);
    }

    progress.finish_and_clear();
    Ok(saved)
}
