use std::path::PathBuf;

use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "check the year and month: the year must be 2010 or later and the month between 1 and 12 \
         (got year {year}, month {month})"
    )]
    DateOutOfRange { year: i16, month: i8 },

    /// The article page answered 404. Either no roundup exists for that month
    /// or it was not published under the usual URL pattern.
    #[error("no wallpaper article found at {0}")]
    ArticleNotFound(Url),

    #[error("error requesting {url}")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} did not return a decodable image")]
    Decode {
        url: Url,
        #[source]
        source: image::ImageError,
    },

    #[error("error saving {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("could not format a timestamp file name")]
    Timestamp(#[from] jiff::Error),
}
