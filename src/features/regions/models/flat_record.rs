use std::borrow::Cow;
use std::str::FromStr;

use super::region_node::ROOT_ID;

/// One parsed dataset row, before it is linked into the hierarchy.
///
/// Ids are always held in the form produced by [`IdFormat::canonicalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRecord {
    pub id: String,
    pub parent_id: String,
    pub name: String,
    pub spell: String,
    pub address: String,
    pub postal_code: String,
}

/// How the id columns of a dataset are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdFormat {
    /// Opaque strings, kept verbatim (e.g. 12-digit administrative codes)
    #[default]
    Text,
    /// Unsigned integers; zero means "no parent"
    Numeric,
}

impl IdFormat {
    /// Canonical spelling of an id, the form stored in the index.
    ///
    /// `"0"` maps to the root in both formats, and so does an empty numeric
    /// id. Numeric ids are re-rendered in decimal, so `"007"` becomes `"7"`.
    /// Returns `None` for a numeric id that is not an unsigned integer.
    pub fn canonicalize(self, value: &str) -> Option<Cow<'_, str>> {
        match self {
            IdFormat::Text if value == "0" => Some(Cow::Borrowed(ROOT_ID)),
            IdFormat::Text => Some(Cow::Borrowed(value)),
            IdFormat::Numeric if value.is_empty() => Some(Cow::Borrowed(ROOT_ID)),
            IdFormat::Numeric => match value.parse::<u64>().ok()? {
                0 => Some(Cow::Borrowed(ROOT_ID)),
                n => Some(Cow::Owned(n.to_string())),
            },
        }
    }
}

/// What to do with a numeric id that does not parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// Abort loading the dataset
    #[default]
    Strict,
    /// Treat the value as zero, which attaches the record to the root
    Permissive,
}

impl FromStr for IdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(IdPolicy::Strict),
            "permissive" => Ok(IdPolicy::Permissive),
            other => Err(format!(
                "DATASET_ID_POLICY must be 'strict' or 'permissive', got '{}'",
                other
            )),
        }
    }
}
