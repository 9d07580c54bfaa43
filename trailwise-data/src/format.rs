//! File formats recognised by extension.

use camino::Utf8Path;

/// Encoding of a trail or weather file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// A JSON object wrapping a record array.
    Json,
}

impl DataFormat {
    /// Infer the format from the file extension, ignoring ASCII case.
    ///
    /// # Examples
    /// ```
    /// use camino::Utf8Path;
    /// use trailwise_data::DataFormat;
    ///
    /// assert_eq!(DataFormat::from_path(Utf8Path::new("trails.CSV")), Some(DataFormat::Csv));
    /// assert_eq!(DataFormat::from_path(Utf8Path::new("weather.json")), Some(DataFormat::Json));
    /// assert_eq!(DataFormat::from_path(Utf8Path::new("notes.txt")), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        let extension = path.extension()?;
        if extension.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}
