//! ChEMBL web-services client.

use std::time::Duration;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::entity::{Assay, Bioactivity, Compound, Target};
use crate::error::{ChemblError, Result};
use crate::format;
use crate::id::{ChemblId, DataType};
use crate::record::Entity;

use super::resolver::Resolver;
use super::transport::{HttpTransport, Transport};

static INCHI_KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{14}-[A-Z]{10}-[A-Z]$").expect("valid InChIKey regex"));

static UNIPROT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([OPQ][0-9][A-Z0-9]{3}[0-9]|[A-NR-Z][0-9]([A-Z][A-Z0-9]{2}[0-9]){1,2})$")
        .expect("valid UniProt regex")
});

/// Default ChEMBL web-services endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.ebi.ac.uk/chemblws";

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the web services.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// User-Agent header sent with each request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("chembl-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Read overrides from `CHEMBL_BASE_URL` and `CHEMBL_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(base_url) = lookup("CHEMBL_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url.trim().to_string();
        }
        if let Some(secs) = lookup("CHEMBL_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ChemblError::Config(format!("CHEMBL_TIMEOUT_SECS must be whole seconds, got {:?}", secs))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Resolver backed by the ChEMBL web services.
#[derive(Debug)]
pub struct ChemblClient<T = HttpTransport> {
    transport: T,
}

impl ChemblClient<HttpTransport> {
    /// Create a client for the public endpoint.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::with_config(&config)?))
    }

    /// Create a client configured from the environment.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }
}

impl<T: Transport> ChemblClient<T> {
    /// Create a client over an arbitrary transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch and parse the record of type `E` identified by `id`.
    pub fn find<E: Entity>(&self, id: &ChemblId) -> Result<E> {
        let kind = E::KIND;
        match kind {
            DataType::Compound | DataType::Target | DataType::Assay => {}
            DataType::Document | DataType::Unknown => {
                return Err(ChemblError::Config(format!(
                    "<{}> records cannot be looked up by identifier",
                    E::ELEMENT
                )));
            }
        }

        let path = format!("{}/{}", kind.collection(), id);
        format::parse(&self.fetch(&path, kind, id.as_str())?)
    }

    /// Find a compound by its standard InChIKey.
    pub fn find_compound_by_inchi_key(&self, inchi_key: &str) -> Result<Compound> {
        check_key(&INCHI_KEY_PATTERN, "InChIKey", inchi_key)?;
        let path = format!("compounds/stdinchikey/{}", inchi_key);
        format::parse(&self.fetch(&path, DataType::Compound, inchi_key)?)
    }

    /// Find a target by its UniProt accession.
    pub fn find_target_by_uniprot(&self, accession: &str) -> Result<Target> {
        check_key(&UNIPROT_PATTERN, "UniProt accession", accession)?;
        let path = format!("targets/uniprot/{}", accession);
        format::parse(&self.fetch(&path, DataType::Target, accession)?)
    }

    fn fetch(&self, path: &str, kind: DataType, key: &str) -> Result<String> {
        self.transport
            .get(path)?
            .ok_or_else(|| ChemblError::NotFound {
                kind,
                id: key.to_string(),
            })
    }
}

// Keys are spliced into the request path, so they must not carry separators.
fn check_key(pattern: &Regex, kind: &'static str, key: &str) -> Result<()> {
    if pattern.is_match(key) {
        Ok(())
    } else {
        Err(ChemblError::InvalidLookupKey {
            kind,
            key: key.to_string(),
        })
    }
}

impl<T: Transport> Resolver for ChemblClient<T> {
    fn find_compound(&self, id: &ChemblId) -> Result<Compound> {
        self.find(id)
    }

    fn find_target(&self, id: &ChemblId) -> Result<Target> {
        self.find(id)
    }

    fn find_assay(&self, id: &ChemblId) -> Result<Assay> {
        self.find(id)
    }

    fn find_bioactivities(&self, kind: DataType, id: &ChemblId) -> Result<Vec<Bioactivity>> {
        match kind {
            DataType::Compound | DataType::Target | DataType::Assay => {}
            DataType::Document | DataType::Unknown => {
                return Err(ChemblError::Config(format!(
                    "{} records have no bioactivity listing",
                    kind
                )));
            }
        }

        let path = format!("{}/{}/bioactivities", kind.collection(), id);
        let activities: Vec<Bioactivity> = format::parse_list(&self.fetch(&path, kind, id.as_str())?)?;
        debug!("{} {} has {} bioactivities", kind, id, activities.len());
        Ok(activities)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("chembl-rs/"));
    }

    #[test]
    fn test_config_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("CHEMBL_BASE_URL", " http://localhost:9000/ws "),
            ("CHEMBL_TIMEOUT_SECS", "5"),
        ]
        .into_iter()
        .collect();
        let config =
            ClientConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/ws");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_config_from_empty_lookup_uses_defaults() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_lookup_key_patterns() {
        assert!(INCHI_KEY_PATTERN.is_match("QFFGVLORLPOAEC-SNVBAGLBSA-N"));
        assert!(!INCHI_KEY_PATTERN.is_match("QFFGVLORLPOAEC-SNVBAGLBSA"));
        assert!(!INCHI_KEY_PATTERN.is_match("../x"));
        assert!(UNIPROT_PATTERN.is_match("Q12809"));
        assert!(UNIPROT_PATTERN.is_match("A0A0A0ABC1"));
        assert!(!UNIPROT_PATTERN.is_match("a/b"));
        assert!(!UNIPROT_PATTERN.is_match("Q12809/bioactivities"));
    }

    #[test]
    fn test_config_rejects_bad_timeout() {
        let result = ClientConfig::from_lookup(|key| {
            (key == "CHEMBL_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert!(matches!(result, Err(ChemblError::Config(_))));
    }
}
