//! Pool hooks catalog entries

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookInfo {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub additional_link: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default, deserialize_with = "yes_no_or_bool")]
    pub audited: bool,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl HookInfo {
    pub fn in_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c.eq_ignore_ascii_case(category.trim()))
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("unexpected id {}", other))),
    }
}

fn yes_no_or_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Bool(b) => Ok(b),
        serde_json::Value::String(s) => Ok(matches!(s.trim().to_ascii_lowercase().as_str(), "yes" | "true")),
        serde_json::Value::Null => Ok(false),
        other => Err(serde::de::Error::custom(format!("unexpected audited value {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_catalog_entry_with_yes_no_audit() {
        let json = r#"{
            "id": 3,
            "title": "Exit Fee Hook",
            "source": "Balancer",
            "description": "Charges a fee on proportional exits",
            "github": "https://github.com/example/exit-fee",
            "additional_link": "",
            "created_by": "Balancer",
            "audited": "Yes",
            "categories": ["Fee", "Liquidity"],
            "extra": "ignored"
        }"#;
        let hook: HookInfo = serde_json::from_str(json).unwrap();
        assert_eq!(hook.id, "3");
        assert!(hook.audited);
        assert!(hook.in_category("fee"));
        assert!(!hook.in_category("Oracle"));
    }

    #[test]
    fn missing_optional_fields_default() {
        let hook: HookInfo = serde_json::from_str(r#"{ "id": "a", "title": "Bare" }"#).unwrap();
        assert!(!hook.audited);
        assert!(hook.categories.is_empty());
    }
}
