use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use utoipa::ToSchema;

/// How a product participates in composition. Advisory metadata for
/// front-ends; all products share one shape regardless of type.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Simple,
    Set,
    Virtual,
    External,
    Ticket,
    Variable,
    Subscription,
    Person,
    Location,
    Service,
}

impl ProductType {
    pub const ALLOWED: [&'static str; 10] = [
        "simple",
        "set",
        "virtual",
        "external",
        "ticket",
        "variable",
        "subscription",
        "person",
        "location",
        "service",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Simple => "simple",
            ProductType::Set => "set",
            ProductType::Virtual => "virtual",
            ProductType::External => "external",
            ProductType::Ticket => "ticket",
            ProductType::Variable => "variable",
            ProductType::Subscription => "subscription",
            ProductType::Person => "person",
            ProductType::Location => "location",
            ProductType::Service => "service",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("choose one of {}, got '{got}'", ProductType::ALLOWED.join(", "))]
pub struct UnknownProductType {
    got: String,
}

impl FromStr for ProductType {
    type Err = UnknownProductType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(ProductType::Simple),
            "set" => Ok(ProductType::Set),
            "virtual" => Ok(ProductType::Virtual),
            "external" => Ok(ProductType::External),
            "ticket" => Ok(ProductType::Ticket),
            "variable" => Ok(ProductType::Variable),
            "subscription" => Ok(ProductType::Subscription),
            "person" => Ok(ProductType::Person),
            "location" => Ok(ProductType::Location),
            "service" => Ok(ProductType::Service),
            other => Err(UnknownProductType {
                got: other.to_owned(),
            }),
        }
    }
}

impl Display for ProductType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_allowed_name_parses() {
        for name in ProductType::ALLOWED {
            let ty: ProductType = name.parse().unwrap();
            assert_eq!(name, ty.as_str());
        }
    }

    #[test]
    fn unknown_type_error_names_the_allowed_set() {
        let err = "bundle".parse::<ProductType>().unwrap_err();
        let message = err.to_string();
        for name in ProductType::ALLOWED {
            assert!(message.contains(name), "{message} missing {name}");
        }
        assert!(message.contains("bundle"));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            "\"subscription\"",
            serde_json::to_string(&ProductType::Subscription).unwrap()
        );
    }
}
