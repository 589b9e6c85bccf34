use std::borrow::Cow;
use std::path::Path;

use crate::features::regions::error::DatasetError;
use crate::features::regions::models::IdFormat;

/// A country dataset compiled into the binary
#[derive(Debug, Clone, Copy)]
pub struct DatasetSource {
    pub country: &'static str,
    pub id_format: IdFormat,
    pub embedded: &'static str,
}

/// Every country the service answers for
pub const DATASETS: &[DatasetSource] = &[
    // Japan Post postal-code data, ids assigned sequentially per level
    DatasetSource {
        country: "jp",
        id_format: IdFormat::Numeric,
        embedded: include_str!("../../../data/jp.csv"),
    },
    // 12-digit statistical division codes
    DatasetSource {
        country: "cn",
        id_format: IdFormat::Text,
        embedded: include_str!("../../../data/cn.csv"),
    },
];

impl DatasetSource {
    /// Raw CSV for this country, read from `data_dir` when one is configured
    pub fn read(&self, data_dir: Option<&Path>) -> Result<Cow<'static, str>, DatasetError> {
        let Some(dir) = data_dir else {
            return Ok(Cow::Borrowed(self.embedded));
        };

        let path = dir.join(format!("{}.csv", self.country));
        std::fs::read_to_string(&path)
            .map(Cow::Owned)
            .map_err(|source| DatasetError::Io {
                country: self.country.to_string(),
                path,
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_embedded_without_data_dir() {
        let raw = DATASETS[0].read(None).unwrap();
        assert!(matches!(raw, Cow::Borrowed(_)));
        assert!(!raw.trim().is_empty());
    }

    #[test]
    fn test_read_missing_override_is_io_error() {
        let dir = std::env::temp_dir().join("georegion-core-missing-data-dir");
        let err = DATASETS[0].read(Some(dir.as_path())).unwrap_err();
        assert!(matches!(err, DatasetError::Io { ref country, .. } if country == "jp"));
    }

    #[test]
    fn test_read_override_from_data_dir() {
        let dir = std::env::temp_dir().join(format!("georegion-core-data-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("cn.csv"), "1,,A,a,A,").unwrap();

        let source = DATASETS.iter().find(|d| d.country == "cn").unwrap();
        let raw = source.read(Some(dir.as_path())).unwrap();
        assert_eq!(raw, "1,,A,a,A,");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
