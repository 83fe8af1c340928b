use super::Currency;

/// Everything collected from the operator for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct UserInput {
    /// Identifiers (vanity names) in the order they were entered.
    pub identifiers: Vec<String>,
    /// The currency for price lookups.
    pub currency: Currency,
}

impl UserInput {
    /// Expands the input into one [`UserRequest`] per identifier, in input order.
    pub fn requests(&self) -> Vec<UserRequest> {
        self.identifiers
            .iter()
            .map(|identifier| UserRequest {
                identifier: identifier.clone(),
                currency: self.currency.clone(),
            })
            .collect()
    }
}

/// A request to export the inventory of a single user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRequest {
    /// The human-readable identifier (the `/id/{identifier}` part of a profile URL).
    pub identifier: String,
    /// The currency for price lookups.
    pub currency: Currency,
}

/// Splits a comma-separated list of identifiers. Tokens are trimmed and empty tokens are
/// dropped. Order and duplicates are kept.
pub fn parse_ids(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_ids_in_order() {
        assert_eq!(parse_ids(" alice, bob ,,carol "), vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn keeps_duplicate_ids() {
        assert_eq!(parse_ids("alice,alice"), vec!["alice", "alice"]);
    }

    #[test]
    fn empty_input_has_no_ids() {
        assert!(parse_ids("").is_empty());
        assert!(parse_ids("   ").is_empty());
        assert!(parse_ids(" , ,").is_empty());
    }

    #[test]
    fn expands_input_into_requests() {
        let input = UserInput {
            identifiers: vec!["alice".into(), "bob".into()],
            currency: Currency::from_str("usd").unwrap(),
        };
        let requests = input.requests();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].identifier, "bob");
        assert_eq!(requests[1].currency.as_str(), "USD");
    }
}
