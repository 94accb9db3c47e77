use maxminddb::{MaxMindDbError, PathElement};
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why an address produced no country.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoLookupError {
    /// Syntactically valid address with no country entry in the database.
    #[error("the address {0} is not in the database")]
    NotFound(String),

    /// The address could not be parsed or the lookup itself failed.
    #[error("{ip}: {reason}")]
    Malformed { ip: String, reason: String },
}

#[derive(Debug, Error)]
#[error("{path}: {message}")]
pub struct GeoDbError {
    pub path: PathBuf,
    pub message: String,
}

/// Resolves a client address to a country name.
pub trait GeoResolver: Send + Sync {
    fn lookup(&self, ip: &str) -> Result<String, GeoLookupError>;
}

/// Country lookups backed by a MaxMind (GeoLite2/GeoIP2) country or city database.
pub struct MaxMindResolver {
    reader: maxminddb::Reader<maxminddb::Mmap>,
}

impl MaxMindResolver {
    pub fn open(path: &Path) -> Result<Self, GeoDbError> {
        // Safety note on the memory-mapped database...
        // - File is opened read-only
        // - Lifetime is bound to MaxMindResolver
        // - visitstat does not mutate the mmdb file
        let reader = unsafe { maxminddb::Reader::open_mmap(path) }.map_err(|e| GeoDbError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(Self { reader })
    }
}

impl GeoResolver for MaxMindResolver {
    fn lookup(&self, ip: &str) -> Result<String, GeoLookupError> {
        let addr: IpAddr = ip.parse().map_err(|e: std::net::AddrParseError| {
            GeoLookupError::Malformed {
                ip: ip.to_string(),
                reason: e.to_string(),
            }
        })?;

        let lookup = self
            .reader
            .lookup(addr)
            .map_err(|e| GeoLookupError::Malformed {
                ip: ip.to_string(),
                reason: e.to_string(),
            })?;

        let decoded = lookup.decode_path::<String>(&[
            PathElement::Key("country"),
            PathElement::Key("names"),
            PathElement::Key("en"),
        ]);

        country_name(ip, decoded)
    }
}

/// A decode failure is malformed data; no record or an empty name is a miss.
pub(crate) fn country_name(
    ip: &str,
    decoded: Result<Option<String>, MaxMindDbError>,
) -> Result<String, GeoLookupError> {
    let name = decoded.map_err(|e| GeoLookupError::Malformed {
        ip: ip.to_string(),
        reason: e.to_string(),
    })?;

    name.filter(|name| !name.is_empty())
        .ok_or_else(|| GeoLookupError::NotFound(ip.to_string()))
}
