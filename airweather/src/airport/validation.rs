//! Pure validation of airport metadata.

use std::fmt;

use super::AirportRecord;

/// Allowed daylight saving categories.
pub const DST_CODES: [&str; 7] = ["E", "A", "S", "O", "Z", "N", "U"];

const MAX_IATA_LEN: usize = 3;
const MAX_ICAO_LEN: usize = 4;

/// Airport field named by a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirportField {
    Iata,
    Icao,
    Dst,
    Latitude,
    Longitude,
}

impl fmt::Display for AirportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AirportField::Iata => "IATA/FAA code",
            AirportField::Icao => "ICAO code",
            AirportField::Dst => "DST code",
            AirportField::Latitude => "latitude",
            AirportField::Longitude => "longitude",
        };
        f.write_str(name)
    }
}

/// A record field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field}: '{value}'")]
pub struct ValidationError {
    pub field: AirportField,
    pub value: String,
}

impl ValidationError {
    pub fn new(field: AirportField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Check a record's metadata without touching any store.
///
/// Fields are checked in order iata, icao, latitude, longitude, dst and the
/// first failure is returned.
pub fn validate(record: &AirportRecord) -> Result<(), ValidationError> {
    let iata = record.iata.trim();
    if iata.is_empty() || iata.chars().count() > MAX_IATA_LEN {
        return Err(ValidationError::new(AirportField::Iata, &record.iata));
    }

    if let Some(icao) = &record.icao {
        if icao.trim().chars().count() > MAX_ICAO_LEN {
            return Err(ValidationError::new(AirportField::Icao, icao));
        }
    }

    if !(-90.0..=90.0).contains(&record.lat) {
        return Err(ValidationError::new(
            AirportField::Latitude,
            record.lat.to_string(),
        ));
    }

    if !(-180.0..=180.0).contains(&record.lon) {
        return Err(ValidationError::new(
            AirportField::Longitude,
            record.lon.to_string(),
        ));
    }

    if let Some(dst) = &record.dst {
        let code = dst.trim();
        if !DST_CODES.iter().any(|allowed| allowed.eq_ignore_ascii_case(code)) {
            return Err(ValidationError::new(AirportField::Dst, dst));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bos() -> AirportRecord {
        AirportRecord::new("BOS", 42.364347, -71.005181)
    }

    #[test]
    fn test_valid_record_passes() {
        let record = bos().with_icao("KBOS").with_dst("a");
        assert!(validate(&record).is_ok());
    }

    #[test]
    fn test_iata_length() {
        let err = validate(&AirportRecord::new("BOST", 0.0, 0.0)).unwrap_err();
        assert_eq!(err, ValidationError::new(AirportField::Iata, "BOST"));

        // Surrounding whitespace does not count
        assert!(validate(&AirportRecord::new(" BOS ", 0.0, 0.0)).is_ok());
    }

    #[test]
    fn test_empty_iata_rejected() {
        let err = validate(&AirportRecord::new("  ", 0.0, 0.0)).unwrap_err();
        assert_eq!(err.field, AirportField::Iata);
    }

    #[test]
    fn test_icao_length() {
        let err = validate(&bos().with_icao("KBOSX")).unwrap_err();
        assert_eq!(err, ValidationError::new(AirportField::Icao, "KBOSX"));
    }

    #[test]
    fn test_coordinate_ranges() {
        assert!(validate(&AirportRecord::new("N", 90.0, 180.0)).is_ok());
        assert!(validate(&AirportRecord::new("S", -90.0, -180.0)).is_ok());

        let err = validate(&AirportRecord::new("BAD", 90.5, 0.0)).unwrap_err();
        assert_eq!(err, ValidationError::new(AirportField::Latitude, "90.5"));

        let err = validate(&AirportRecord::new("BAD", 0.0, -181.0)).unwrap_err();
        assert_eq!(err, ValidationError::new(AirportField::Longitude, "-181"));
    }

    #[test]
    fn test_nan_coordinates_rejected() {
        let err = validate(&AirportRecord::new("BAD", f64::NAN, 0.0)).unwrap_err();
        assert_eq!(err.field, AirportField::Latitude);
        let err = validate(&AirportRecord::new("BAD", 0.0, f64::NAN)).unwrap_err();
        assert_eq!(err.field, AirportField::Longitude);
    }

    #[test]
    fn test_dst_codes() {
        for code in DST_CODES {
            assert!(validate(&bos().with_dst(code.to_lowercase())).is_ok());
        }
        let err = validate(&bos().with_dst("X")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid DST code: 'X'");
    }
}
