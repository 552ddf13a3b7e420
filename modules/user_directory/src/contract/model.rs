use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A user record as served by the data source.
///
/// Every leaf is optional: a field that is absent or `null` loads as `None`
/// and is left out again when the record is serialized, so a sort on that
/// path sees it as missing. Top-level fields without a typed slot (`nat`,
/// `login`, `cell`, ...) are kept in `extra` and stay sortable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: Name,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<Dob>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<Picture>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<Street>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<Postcode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Postcodes arrive as numbers for some countries and strings for others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Postcode {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Response document of the data source: `{ "results": [User] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsersEnvelope {
    pub results: Vec<User>,
}

impl User {
    /// Searchable first name; empty when absent.
    pub fn first_name(&self) -> &str {
        self.name.first.as_deref().unwrap_or_default()
    }

    pub fn last_name(&self) -> &str {
        self.name.last.as_deref().unwrap_or_default()
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_and_null_leaves_load_as_none() {
        let user: User = serde_json::from_value(json!({
            "name": { "first": "Ada", "last": null },
            "phone": null,
            "dob": { "date": "1815-12-10" }
        }))
        .unwrap();

        assert_eq!(user.first_name(), "Ada");
        assert_eq!(user.name.last, None);
        assert_eq!(user.last_name(), "");
        assert_eq!(user.phone, None);
        assert_eq!(user.email, None);
        assert_eq!(user.dob.as_ref().and_then(|d| d.age), None);
    }

    #[test]
    fn null_name_is_an_empty_name() {
        let user: User = serde_json::from_value(json!({ "name": null })).unwrap();
        assert_eq!(user.name, Name::default());
    }

    #[test]
    fn missing_leaves_are_not_serialized() {
        let user: User = serde_json::from_value(json!({
            "name": { "first": "Ada" },
            "dob": { "date": "1815-12-10" }
        }))
        .unwrap();
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(value["name"], json!({ "first": "Ada" }));
        assert_eq!(value["dob"], json!({ "date": "1815-12-10" }));
        assert!(value.get("email").is_none());
        assert!(value.get("phone").is_none());
    }

    #[test]
    fn untyped_fields_survive_a_round_trip() {
        let user: User = serde_json::from_value(json!({
            "name": { "first": "Ada" },
            "nat": "GB",
            "login": { "username": "ada" }
        }))
        .unwrap();

        assert_eq!(user.extra["nat"], "GB");
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["login"]["username"], "ada");
    }
}
