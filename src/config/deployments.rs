//! Deployed contract addresses produced by the Hardhat deploy scripts
//!
//! Accepts either the `hardhat-deploy --export` layout
//! (`{ "chainId": .., "contracts": { "Name": { "address": .. } } }`)
//! or a flat `{ "Name": "0x.." }` map.

use alloy::primitives::Address;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;
use crate::errors::{ScaffoldError, ScaffoldResult};

#[derive(Debug, Deserialize)]
struct ExportedContract {
    address: Address,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DeploymentsFile {
    Exported {
        #[serde(rename = "chainId", default)]
        chain_id: Option<serde_json::Value>,
        contracts: BTreeMap<String, ExportedContract>,
    },
    Flat(BTreeMap<String, Address>),
}

#[derive(Debug, Clone, Default)]
pub struct Deployments {
    pub chain_id: Option<u64>,
    contracts: BTreeMap<String, Address>,
}

impl Deployments {
    pub fn from_json(json: &str) -> ScaffoldResult<Self> {
        let file: DeploymentsFile = serde_json::from_str(json).map_err(|e| ScaffoldError::DataParsing {
            context: "deployments file".to_string(),
            source: e.into(),
        })?;

        Ok(match file {
            DeploymentsFile::Exported { chain_id, contracts } => Self {
                chain_id: chain_id.and_then(|v| match v {
                    serde_json::Value::Number(n) => n.as_u64(),
                    serde_json::Value::String(s) => s.parse().ok(),
                    _ => None,
                }),
                contracts: contracts.into_iter().map(|(k, v)| (k, v.address)).collect(),
            },
            DeploymentsFile::Flat(contracts) => Self { chain_id: None, contracts },
        })
    }

    pub fn load(path: &Path) -> ScaffoldResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            ScaffoldError::Config(format!("cannot read deployments file {}: {}", path.display(), e))
        })?;
        let deployments = Self::from_json(&json)?;
        debug!("Loaded {} deployed contracts from {}", deployments.len(), path.display());
        Ok(deployments)
    }

    /// Exact name first, then a case-insensitive match.
    pub fn address_of(&self, name: &str) -> Option<Address> {
        self.contracts.get(name).copied().or_else(|| {
            self.contracts
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| *v)
        })
    }

    pub fn require(&self, name: &str) -> ScaffoldResult<Address> {
        self.address_of(name)
            .ok_or_else(|| ScaffoldError::Config(format!("no deployment named '{}'", name)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Address)> {
        self.contracts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

/// Parses a literal address, or looks the name up in the deployments.
pub fn resolve_address(input: &str, deployments: Option<&Deployments>) -> ScaffoldResult<Address> {
    if let Ok(address) = input.trim().parse::<Address>() {
        return Ok(address);
    }
    match deployments {
        Some(deployments) => deployments.require(input.trim()),
        None => Err(ScaffoldError::invalid(
            "address",
            format!("'{}' is not an address and no deployments file is loaded", input),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn reads_hardhat_export_layout() {
        let json = r#"{
            "name": "sepolia",
            "chainId": "11155111",
            "contracts": {
                "ConstantSumFactory": { "address": "0x1111111111111111111111111111111111111111", "abi": [] },
                "MockToken1": { "address": "0x2222222222222222222222222222222222222222", "abi": [] }
            }
        }"#;
        let deployments = Deployments::from_json(json).unwrap();
        assert_eq!(deployments.chain_id, Some(11155111));
        assert_eq!(deployments.len(), 2);
        assert_eq!(
            deployments.address_of("mocktoken1"),
            Some(address!("2222222222222222222222222222222222222222"))
        );
    }

    #[test]
    fn reads_flat_layout() {
        let json = r#"{ "Router": "0x3333333333333333333333333333333333333333" }"#;
        let deployments = Deployments::from_json(json).unwrap();
        assert_eq!(deployments.chain_id, None);
        assert_eq!(
            deployments.require("Router").unwrap(),
            address!("3333333333333333333333333333333333333333")
        );
        assert!(deployments.require("Vault").is_err());
    }

    #[test]
    fn resolves_names_and_literals() {
        let deployments = Deployments::from_json(
            r#"{ "ConstantSumPool": "0x4444444444444444444444444444444444444444" }"#,
        )
        .unwrap();
        let pool = address!("4444444444444444444444444444444444444444");
        assert_eq!(resolve_address("ConstantSumPool", Some(&deployments)).unwrap(), pool);
        assert_eq!(resolve_address("0x4444444444444444444444444444444444444444", None).unwrap(), pool);
        assert!(resolve_address("ConstantSumPool", None).is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(Deployments::from_json("[1, 2, 3]").is_err());
    }
}
