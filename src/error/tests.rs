//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod etl_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let etl_error = EtlError::from(json_error);

        match etl_error {
            EtlError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let etl_error = EtlError::from(io_error);

        match etl_error {
            EtlError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_database_error_conversion() {
        let db_error = rusqlite::Error::QueryReturnedNoRows;
        let etl_error = EtlError::from(db_error);

        match etl_error {
            EtlError::Database(_) => (),
            _ => panic!("Expected Database error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let etl_error = EtlError::from(header_error);

        match etl_error {
            EtlError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_status_error_display_and_accessor() {
        let error = EtlError::Status {
            url: "http://localhost/v4/competitions/PL/teams".to_string(),
            status: 429,
        };

        assert_eq!(error.status(), Some(429));
        assert_eq!(
            error.to_string(),
            "API returned HTTP 429 for http://localhost/v4/competitions/PL/teams"
        );
    }

    #[test]
    fn test_status_accessor_on_other_variants() {
        let error = EtlError::NoDataDir;
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_missing_api_token_display() {
        let error = EtlError::MissingApiToken {
            env_var: "FOOTBALL_DATA_API_TOKEN".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "API token not provided and FOOTBALL_DATA_API_TOKEN environment variable not set"
        );
    }

    #[test]
    fn test_invalid_config_display() {
        let error = EtlError::InvalidConfig {
            key: "FOOTBALL_ETL_THROTTLE_SECS".to_string(),
            value: "soon".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for FOOTBALL_ETL_THROTTLE_SECS: soon"
        );
    }
}
