use serde_json::Value;

/// Read-only wrapper around the decoded `Account` envelope returned by
/// the resource-owner endpoint.
#[derive(Debug, Clone)]
pub struct LightspeedResourceOwner {
    response: Value,
}

impl LightspeedResourceOwner {
    #[must_use]
    pub fn new(response: Value) -> Self {
        Self { response }
    }

    /// Account ID, rendered as a string regardless of whether the vendor
    /// emitted it as a number or a string.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        match self.get("Account.accountID")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.get("Account.name")
            .and_then(Value::as_str)
            .map(str::to_owned)
    }

    /// Dotted-path lookup through the raw response. Any missing segment
    /// yields `None`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return Some(&self.response);
        }
        let mut current = &self.response;
        for key in path.split('.') {
            current = current.get(key)?;
        }
        Some(current)
    }

    /// Dotted-path lookup with a caller-supplied fallback.
    #[must_use]
    pub fn get_or<'a>(&'a self, path: &str, default: &'a Value) -> &'a Value {
        self.get(path).unwrap_or(default)
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.response
    }

    #[must_use]
    pub fn into_inner(self) -> Value {
        self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn owner() -> LightspeedResourceOwner {
        LightspeedResourceOwner::new(json!({
            "@attributes": { "count": 1 },
            "Account": {
                "accountID": 4333,
                "name": "Foo Name",
                "link": { "@attributes": { "href": "/API/Account/4333" } }
            }
        }))
    }

    #[test]
    fn resolves_id_and_name() {
        let owner = owner();
        assert_eq!(owner.id().as_deref(), Some("4333"));
        assert_eq!(owner.name().as_deref(), Some("Foo Name"));
    }

    #[test]
    fn id_accepts_string_encoding() {
        let owner = LightspeedResourceOwner::new(json!({
            "Account": { "accountID": "12345", "name": "Boo Name" }
        }));
        assert_eq!(owner.id().as_deref(), Some("12345"));
    }

    #[test]
    fn missing_path_returns_default() {
        let owner = owner();
        assert_eq!(owner.get("Account.missing"), None);
        let fallback = json!("fallback");
        assert_eq!(owner.get_or("Account.missing.deeper", &fallback), &fallback);
        assert_eq!(
            owner.get("Account.link.@attributes.href"),
            Some(&json!("/API/Account/4333"))
        );
    }

    #[test]
    fn whole_response_survives_round_trip() {
        let owner = owner();
        assert_eq!(owner.as_value()["@attributes"]["count"], json!(1));
    }
}
