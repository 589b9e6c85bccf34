use crate::features::regions::error::DatasetError;
use crate::features::regions::models::{FlatRecord, IdFormat, IdPolicy, ROOT_ID};

const FIELD_DELIMITER: char = ',';

/// Parse a dataset payload into flat records.
///
/// Each non-blank line must hold exactly six comma-separated fields:
/// `id, parent_id, name, spell, address, postcode`. Any other field count
/// fails the whole dataset, since the data ships with the binary.
pub fn parse_records(
    raw: &str,
    format: IdFormat,
    policy: IdPolicy,
) -> Result<Vec<FlatRecord>, DatasetError> {
    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_line(index + 1, line, format, policy))
        .collect()
}

fn parse_line(
    line_no: usize,
    line: &str,
    format: IdFormat,
    policy: IdPolicy,
) -> Result<FlatRecord, DatasetError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
    let [id, parent_id, name, spell, address, postal_code] = fields.as_slice() else {
        return Err(DatasetError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    };

    let id = canonical_id(line_no, "id", id, format, policy)?;
    let parent_id = canonical_id(line_no, "parent id", parent_id, format, policy)?;

    Ok(FlatRecord {
        id,
        parent_id,
        name: name.to_string(),
        spell: spell.to_string(),
        address: address.to_string(),
        postal_code: postal_code.to_string(),
    })
}

/// Canonical form of an id column; an unparseable numeric id is handled per `policy`.
fn canonical_id(
    line_no: usize,
    field: &'static str,
    value: &str,
    format: IdFormat,
    policy: IdPolicy,
) -> Result<String, DatasetError> {
    if let Some(id) = format.canonicalize(value) {
        return Ok(id.into_owned());
    }

    match policy {
        IdPolicy::Strict => Err(DatasetError::InvalidNumericId {
            line: line_no,
            field,
            value: value.to_string(),
        }),
        IdPolicy::Permissive => {
            tracing::debug!(
                "Line {}: treating invalid numeric {} '{}' as root",
                line_no,
                field,
                value
            );
            Ok(ROOT_ID.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_payload_and_fields() {
        let raw = "\n  1, 0 ,Tokyo,TOKYO, Tokyo-to ,100\n\n2,1,Chiyoda,CHIYODA,Tokyo-to Chiyoda-ku,100\r\n";
        let records = parse_records(raw, IdFormat::Numeric, IdPolicy::Strict).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            FlatRecord {
                id: "1".to_string(),
                parent_id: ROOT_ID.to_string(),
                name: "Tokyo".to_string(),
                spell: "TOKYO".to_string(),
                address: "Tokyo-to".to_string(),
                postal_code: "100".to_string(),
            }
        );
        assert_eq!(records[1].parent_id, "1");
        assert_eq!(records[1].postal_code, "100");
    }

    #[test]
    fn test_parse_keeps_empty_postcode() {
        let raw = "110000000000,,北京市,bei jing shi,北京市,";
        let records = parse_records(raw, IdFormat::Text, IdPolicy::Strict).unwrap();

        assert_eq!(records[0].id, "110000000000");
        assert_eq!(records[0].parent_id, ROOT_ID);
        assert_eq!(records[0].postal_code, "");
    }

    #[test]
    fn test_parse_rejects_short_line() {
        let raw = "1,0,Tokyo,TOKYO,Tokyo-to,100\n2,1,Chiyoda";
        let err = parse_records(raw, IdFormat::Numeric, IdPolicy::Strict).unwrap_err();

        assert!(matches!(err, DatasetError::FieldCount { line: 2, found: 3 }));
    }

    #[test]
    fn test_parse_rejects_long_line() {
        let raw = "1,0,Tokyo,TOKYO,Tokyo-to,100,extra";
        let err = parse_records(raw, IdFormat::Text, IdPolicy::Strict).unwrap_err();

        assert!(matches!(err, DatasetError::FieldCount { line: 1, found: 7 }));
    }

    #[test]
    fn test_numeric_ids_are_canonicalized() {
        let raw = "007,000,Tokyo,TOKYO,Tokyo-to,100";
        let records = parse_records(raw, IdFormat::Numeric, IdPolicy::Strict).unwrap();

        assert_eq!(records[0].id, "7");
        assert_eq!(records[0].parent_id, ROOT_ID);
    }

    #[test]
    fn test_strict_policy_rejects_invalid_numeric_id() {
        let raw = "1,0,Tokyo,TOKYO,Tokyo-to,100\n2,x1,Chiyoda,CHIYODA,Chiyoda-ku,100";
        let err = parse_records(raw, IdFormat::Numeric, IdPolicy::Strict).unwrap_err();

        match err {
            DatasetError::InvalidNumericId { line, field, value } => {
                assert_eq!(line, 2);
                assert_eq!(field, "parent id");
                assert_eq!(value, "x1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_permissive_policy_maps_invalid_numeric_id_to_root() {
        let raw = "2,x1,Chiyoda,CHIYODA,Chiyoda-ku,100";
        let records = parse_records(raw, IdFormat::Numeric, IdPolicy::Permissive).unwrap();

        assert_eq!(records[0].id, "2");
        assert_eq!(records[0].parent_id, ROOT_ID);
    }

    #[test]
    fn test_text_ids_are_verbatim_except_zero_parent() {
        let raw = "007,0,A,a,A,";
        let records = parse_records(raw, IdFormat::Text, IdPolicy::Strict).unwrap();

        assert_eq!(records[0].id, "007");
        assert_eq!(records[0].parent_id, ROOT_ID);
    }

    #[test]
    fn test_text_zero_id_is_root() {
        let raw = "0,,Bogus,bogus,Bogus,\n1,0,A,a,A,";
        let records = parse_records(raw, IdFormat::Text, IdPolicy::Strict).unwrap();

        assert_eq!(records[0].id, ROOT_ID);
        assert_eq!(records[1].parent_id, ROOT_ID);
    }

    #[test]
    fn test_error_line_numbers_count_leading_blank_lines() {
        let raw = "\n\n1,0,Tokyo,TOKYO,Tokyo-to,100\n\n2,1,Chiyoda";
        let err = parse_records(raw, IdFormat::Numeric, IdPolicy::Strict).unwrap_err();
        assert!(matches!(err, DatasetError::FieldCount { line: 5, found: 3 }));

        let raw = "\n  \nx,0,Tokyo,TOKYO,Tokyo-to,100";
        let err = parse_records(raw, IdFormat::Numeric, IdPolicy::Strict).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidNumericId { line: 3, .. }));
    }

    #[test]
    fn test_empty_payload_yields_no_records() {
        let records = parse_records("  \n \n", IdFormat::Text, IdPolicy::Strict).unwrap();
        assert!(records.is_empty());
    }
}
