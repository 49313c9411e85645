use clap::Parser;

/// Download a month's desktop wallpaper calendars from Smashing Magazine.
///
/// Scrapes the roundup article for the given month and saves every wallpaper
/// offered at the requested size into the current directory as PNG files.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Opt {
    /// Wallpaper release year, 2010 or later
    pub year: i16,

    /// Wallpaper release month, 1 through 12
    pub month: i8,

    /// Wallpaper size exactly as it appears on the page, e.g. 320x480
    pub size: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn check_arg_sanity() {
        Opt::command().debug_assert();
    }

    #[test]
    fn parses_positional_args() {
        let opt = Opt::parse_from(["smashing-wallpaper", "2023", "6", "320x480"]);
        assert_eq!(opt.year, 2023);
        assert_eq!(opt.month, 6);
        assert_eq!(opt.size, "320x480");
    }

    #[test]
    fn size_is_kept_verbatim() {
        let opt = Opt::parse_from(["smashing-wallpaper", "2023", "6", " 320X480 "]);
        assert_eq!(opt.size, " 320X480 ");
    }
}
