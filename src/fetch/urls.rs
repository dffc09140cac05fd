// src/fetch/urls.rs
use url::Url;

static SHEETS_BASE: &str = "https://docs.google.com/spreadsheets/d/";

/// CSV export endpoint for one sheet of a published Google spreadsheet.
///
/// The sheet name goes into the query string percent-encoded, so non-ASCII
/// names such as `결과` are safe.
pub fn sheet_csv_url(sheet_id: &str, sheet_name: &str) -> Result<Url, url::ParseError> {
    let base = Url::parse(SHEETS_BASE)?.join(&format!("{sheet_id}/gviz/query"))?;
    Url::parse_with_params(
        base.as_str(),
        &[("tqx", "out:csv"), ("sheet", sheet_name)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_SHEET_ID, DEFAULT_SHEET_NAME};

    #[test]
    fn builds_export_url() {
        let url = sheet_csv_url(DEFAULT_SHEET_ID, DEFAULT_SHEET_NAME).unwrap();
        assert_eq!(url.host_str(), Some("docs.google.com"));
        assert_eq!(
            url.path(),
            format!("/spreadsheets/d/{DEFAULT_SHEET_ID}/gviz/query")
        );

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("tqx".to_string(), "out:csv".to_string()),
                ("sheet".to_string(), "결과".to_string()),
            ]
        );
        // encoded on the wire
        assert!(!url.as_str().contains("결과"));
    }
}
