use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Professional,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Professional => "professional",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Role::Client),
            "professional" => Ok(Role::Professional),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// Chartered Accountant or Company Secretary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ProfessionalType {
    #[serde(rename = "CA")]
    Ca,
    #[serde(rename = "CS")]
    Cs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessStructure {
    PrivateLimited,
    Llp,
    Opc,
}

impl BusinessStructure {
    pub fn title(&self) -> &'static str {
        match self {
            BusinessStructure::PrivateLimited => "Private Limited Company",
            BusinessStructure::Llp => "Limited Liability Partnership",
            BusinessStructure::Opc => "One Person Company",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BusinessStructure::PrivateLimited => {
                "Best for startups and businesses planning to scale"
            }
            BusinessStructure::Llp => "Best for professional services and partnerships",
            BusinessStructure::Opc => "Best for solopreneurs and single ownership",
        }
    }

    pub fn recommended(&self) -> bool {
        matches!(self, BusinessStructure::PrivateLimited)
    }

    pub fn all() -> [BusinessStructure; 3] {
        [
            BusinessStructure::PrivateLimited,
            BusinessStructure::Llp,
            BusinessStructure::Opc,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_round_trip_through_their_wire_names() {
        assert_eq!("professional".parse::<Role>().unwrap(), Role::Professional);
        assert_eq!(Role::Client.to_string(), "client");
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn business_structures_use_kebab_case_ids() {
        let json = serde_json::to_string(&BusinessStructure::PrivateLimited).unwrap();
        assert_eq!(json, "\"private-limited\"");
        let parsed: BusinessStructure = serde_json::from_str("\"opc\"").unwrap();
        assert_eq!(parsed, BusinessStructure::Opc);
    }

    #[test]
    fn professional_types_are_upper_case() {
        assert_eq!(serde_json::to_string(&ProfessionalType::Cs).unwrap(), "\"CS\"");
    }
}
