pub mod article;
pub mod download;
pub mod error;
pub mod extract;
pub mod opt;

use jiff::Zoned;
use reqwest::{Client, StatusCode};

pub use error::Error;
pub use opt::Opt;

/// Validate the request, fetch the article, extract the matching links, and
/// save every wallpaper into the current directory.
///
/// The run is a strict linear sequence with two terminal conditions (a date
/// out of range and a missing article page). A size string that matches
/// nothing is advisory only: a message goes to stderr and the run finishes
/// with zero downloads.
pub async fn run(opt: Opt) -> anyhow::Result<()> {
    article::check_year_and_month(opt.year, opt.month)?;

    let url = article::article_url(opt.year, opt.month);
    tracing::debug!("fetching article {url}");

    let client = Client::new();
    let response = client.get(url.clone()).send().await?;
    // Only 404 is terminal here; any other response is handed to the parser,
    // which simply finds no matching anchors in a non-article body.
    if response.status() == StatusCode::NOT_FOUND {
        return Err(Error::ArticleNotFound(url).into());
    }
    let body = response.text().await?;

    let links = extract::wallpaper_links(&body, &url, &opt.size, &Zoned::now())?;
    if links.is_empty() {
        eprintln!(
            "No wallpapers found. Check the size: it must match the link text exactly, \
             in the form <width>x<height> with a lowercase x, e.g. 320x480."
        );
    }

    let saved = download::save_wallpapers(&client, &links).await?;
    for path in saved {
        println!("{}", path.display());
    }

    Ok(())
}
