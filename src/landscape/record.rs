use serde::Deserialize;

/// One managed landscape as described by the configuration document.
///
/// Fields missing from the document decode as empty strings; unknown fields
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LandscapeRecord {
    #[serde(rename = "type")]
    pub landscape_type: String,
    pub description: String,
    pub owner: String,
    #[serde(rename = "jumpbox")]
    pub jumpbox_ip: String,
    #[serde(rename = "concourse")]
    pub concourse_ip: String,
    #[serde(rename = "director")]
    pub director_ip: String,
    pub domain: String,
}

impl LandscapeRecord {
    /// Cloud Foundry API endpoint of this landscape
    pub fn api_endpoint(&self) -> String {
        format!("https://api.cf.{}", self.domain)
    }
}
