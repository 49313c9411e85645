//! Validation of the requested date and construction of the article URL.

use url::Url;

use crate::error::Error;

const URL_BASE: &str = "https://www.smashingmagazine.com";

const MONTH_SLUGS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// The site started publishing these roundups in 2010; anything earlier has no
/// article to fetch.
pub fn check_year_and_month(year: i16, month: i8) -> Result<(), Error> {
    if year < 2010 || !(1..=12).contains(&month) {
        return Err(Error::DateOutOfRange { year, month });
    }
    Ok(())
}

/// Build the roundup article URL for the given calendar month.
///
/// The wallpapers for month M are published under the article path of month
/// M−1 (January wraps to December of the prior year), while the slug names the
/// requested month and year themselves.
///
/// Pure function: same input, same URL, no network access.
pub fn article_url(year: i16, month: i8) -> Url {
    let (path_year, path_month) = if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    };
    let slug = MONTH_SLUGS[month as usize - 1];

    Url::parse(&format!(
        "{URL_BASE}/{path_year}/{path_month:02}/desktop-wallpaper-calendars-{slug}-{year}"
    ))
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_deterministic() {
        assert_eq!(article_url(2023, 5), article_url(2023, 5));
    }

    #[test]
    fn january_wraps_to_previous_december() {
        insta::assert_snapshot!(
            article_url(2023, 1),
            @"https://www.smashingmagazine.com/2022/12/desktop-wallpaper-calendars-january-2023"
        );
    }

    #[test]
    fn path_month_is_zero_padded_previous_month() {
        insta::assert_snapshot!(
            article_url(2023, 5),
            @"https://www.smashingmagazine.com/2023/04/desktop-wallpaper-calendars-may-2023"
        );
    }

    #[test]
    fn december_stays_in_the_same_year() {
        insta::assert_snapshot!(
            article_url(2021, 12),
            @"https://www.smashingmagazine.com/2021/11/desktop-wallpaper-calendars-december-2021"
        );
    }

    #[test]
    fn rejects_years_before_2010() {
        assert!(matches!(
            check_year_and_month(2009, 5),
            Err(Error::DateOutOfRange {
                year: 2009,
                month: 5
            })
        ));
        assert!(check_year_and_month(2010, 5).is_ok());
    }

    #[test]
    fn rejects_months_outside_the_calendar() {
        assert!(check_year_and_month(2023, 0).is_err());
        assert!(check_year_and_month(2023, 13).is_err());
        assert!(check_year_and_month(2023, 1).is_ok());
        assert!(check_year_and_month(2023, 12).is_ok());
    }
}
