use std::path::Path;

use account_model::SiteKeyMap;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Reads a site-key file of `SITE=ID` lines.
pub fn read_site_keys(path: &Path) -> Result<SiteKeyMap> {
    let contents = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_site_keys(&contents, path)
}

/// Parses `SITE=ID` lines. Blank lines are skipped; any other line must hold
/// exactly one `=` with non-empty text on both sides.
pub fn parse_site_keys(contents: &str, path: &Path) -> Result<SiteKeyMap> {
    let mut map = SiteKeyMap::new();
    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let malformed = || IngestError::MalformedSiteKey {
            path: path.to_path_buf(),
            line_number: index + 1,
            line: line.to_string(),
        };
        let (site, id) = line.split_once('=').ok_or_else(malformed)?;
        let (site, id) = (site.trim(), id.trim());
        if id.contains('=') || site.is_empty() || id.is_empty() {
            return Err(malformed());
        }
        if let Some(previous) = map.insert(site, id) {
            warn!(
                path = %path.display(),
                line_number = index + 1,
                site,
                previous = %previous,
                "duplicate site key, keeping the later entry"
            );
        }
    }

    if map.is_empty() {
        return Err(IngestError::EmptySiteKeys {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), sites = map.len(), "read site keys");
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_and_skips_blank_lines() {
        let map = parse_site_keys("NU=1\n\n UIC = 2 \n", Path::new("site.key")).expect("parse");
        assert_eq!(map.get("NU"), Some("1"));
        assert_eq!(map.get("UIC"), Some("2"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn later_duplicate_wins() {
        let map = parse_site_keys("NU=1\nNU=9\n", Path::new("site.key")).expect("parse");
        assert_eq!(map.get("NU"), Some("9"));
    }

    #[test]
    fn malformed_lines_report_their_number() {
        for (contents, line_number) in [("NU=1\nUIC\n", 2), ("=1\n", 1), ("NU=\n", 1), ("NU=1=2\n", 1)] {
            let err = parse_site_keys(contents, Path::new("site.key")).expect_err("malformed");
            match err {
                IngestError::MalformedSiteKey { line_number: found, .. } => {
                    assert_eq!(found, line_number, "{contents:?}");
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn empty_map_is_an_error() {
        let err = parse_site_keys("\n  \n", Path::new("site.key")).expect_err("empty");
        assert!(matches!(err, IngestError::EmptySiteKeys { .. }));
    }
}
