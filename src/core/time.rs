use time::{format_description::well_known::Rfc3339, PrimitiveDateTime};

/// Renders a naive UTC timestamp column as RFC 3339 with a `Z` suffix.
pub(crate) fn format_primitive(value: PrimitiveDateTime) -> String {
    let utc = value.assume_utc();
    utc.format(&Rfc3339).unwrap_or_else(|_| utc.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn format_primitive_outputs_utc_z() {
        assert_eq!(format_primitive(datetime!(2025-01-02 10:20:30)), "2025-01-02T10:20:30Z");
    }

    #[test]
    fn format_primitive_keeps_fractional_seconds() {
        assert_eq!(
            format_primitive(datetime!(2024-06-30 23:59:59.25)),
            "2024-06-30T23:59:59.25Z"
        );
    }
}
