use crate::types::{ClassId, InstanceId};
use reqwest::StatusCode;
use std::fmt;

/// Any error that can occur while resolving, fetching, pricing or exporting an inventory.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid parameter: {}", .0)]
    Parameter(#[from] ParameterError),
    #[error("Request error: {}", .0)]
    Reqwest(#[from] reqwest::Error),
    #[error("Request middleware error: {}", .0)]
    ReqwestMiddleware(anyhow::Error),
    #[error("Error {}", .0)]
    Http(StatusCode),
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    #[error("Error parsing XML response: {}", .0)]
    Xml(#[from] quick_xml::de::DeError),
    #[error("Profile error: {}", .0)]
    Profile(String),
    #[error("Could not parse SteamID64 from profile")]
    MissingSteamId,
    #[error("Invalid SteamID64: {}", .0)]
    InvalidSteamId(String),
    #[error("Response unsuccessful")]
    ResponseUnsuccessful,
    #[error("{}", .0)]
    MissingClassInfo(#[from] MissingClassInfoError),
    #[error("Error writing CSV: {}", .0)]
    Csv(#[from] csv::Error),
    #[error("Filesystem error: {}", .0)]
    Io(#[from] std::io::Error),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Error {
        match error {
            reqwest_middleware::Error::Reqwest(e) => Error::Reqwest(e),
            reqwest_middleware::Error::Middleware(e) => Error::ReqwestMiddleware(e),
        }
    }
}

/// An invalid value supplied by the operator or the builder.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParameterError {
    #[error("Currency must be exactly 3 characters, got \"{}\"", .0)]
    InvalidCurrency(String),
    #[error("Invalid URL: {}", .0)]
    UrlParse(#[from] url::ParseError),
    #[error("URL cannot be used as a base: {}", .0)]
    UrlCannotBeABase(String),
}

/// An asset without a matching description in the inventory response.
#[derive(thiserror::Error, Debug)]
pub struct MissingClassInfoError {
    pub classid: ClassId,
    pub instanceid: InstanceId,
}

impl fmt::Display for MissingClassInfoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Could not find description for {}:{}",
            self.classid, self.instanceid.unwrap_or(0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_missing_classinfo_error() {
        let error = MissingClassInfoError {
            classid: 100,
            instanceid: None,
        };

        assert_eq!(error.to_string(), "Could not find description for 100:0");
    }

    #[test]
    fn displays_invalid_currency() {
        let error = Error::from(ParameterError::InvalidCurrency("US".into()));

        assert_eq!(
            error.to_string(),
            "Invalid parameter: Currency must be exactly 3 characters, got \"US\"",
        );
    }
}
