//! FileCloud server URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated FileCloud server base URL.
///
/// Must be an absolute `http` or `https` URL with a host. A trailing slash is
/// dropped so that endpoint paths can be appended directly.
///
/// # Example
///
/// ```
/// use fccloud_core::ServerUrl;
///
/// let server = ServerUrl::new("https://files.example.com/").unwrap();
/// assert_eq!(
///     server.endpoint("/core/loginguest"),
///     "https://files.example.com/core/loginguest"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServerUrl(Url);

impl ServerUrl {
    /// Create a new server URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse, is not http(s), or has no host.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ServerUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the full URL for an endpoint path such as `/core/getmetadatavalues`.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        if scheme != "https" && scheme != "http" {
            return Err(InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: "must use http or https".to_string(),
            }
            .into());
        }

        if url.host_str().is_none_or(str::is_empty) {
            return Err(InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: "must not carry a query or fragment".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_str().trim_end_matches('/'))
    }
}

impl FromStr for ServerUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ServerUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ServerUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ServerUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ServerUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let server = ServerUrl::new("https://fcapi.example.com").unwrap();
        assert_eq!(server.host(), Some("fcapi.example.com"));
    }

    #[test]
    fn plain_http_is_allowed() {
        let server = ServerUrl::new("http://10.0.0.4:8080").unwrap();
        assert_eq!(
            server.endpoint("/admin/index.php"),
            "http://10.0.0.4:8080/admin/index.php"
        );
    }

    #[test]
    fn endpoint_construction() {
        let server = ServerUrl::new("https://fcapi.example.com").unwrap();
        assert_eq!(
            server.endpoint("/core/getavailablemetadatasets"),
            "https://fcapi.example.com/core/getavailablemetadatasets"
        );
    }

    #[test]
    fn keeps_path_prefix() {
        let server = ServerUrl::new("https://example.com/filecloud/").unwrap();
        assert_eq!(
            server.endpoint("core/locksession"),
            "https://example.com/filecloud/core/locksession"
        );
        assert_eq!(server.to_string(), "https://example.com/filecloud");
    }

    #[test]
    fn invalid_scheme() {
        assert!(ServerUrl::new("ftp://example.com").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ServerUrl::new("/core/loginguest").is_err());
    }

    #[test]
    fn invalid_query() {
        assert!(ServerUrl::new("https://example.com/?op=adminlogin").is_err());
    }
}
