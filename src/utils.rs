use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;

/// Date format used for expense dates, e.g. `2025-12-14`.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns today's date in local time.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Write a file, replacing its contents.
pub(crate) async fn write(
    path: impl AsRef<Path>,
    contents: impl AsRef<[u8]>,
) -> std::io::Result<()> {
    tokio::fs::write(path.as_ref(), contents).await
}

/// Read a file to a `String`. Returns `Ok(None)` if the file does not exist.
pub(crate) async fn read_if_exists(path: &Path) -> std::io::Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Serialize `value` as JSON indented with four spaces.
pub(crate) fn to_json_pretty<T>(value: &T) -> serde_json::Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}
