//! Identity profile asserted to service providers.

use serde::{Deserialize, Serialize};

/// The subject an assertion is issued for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Subject name identifier, emitted as `NameID`.
    pub id: String,
    /// Email address.
    pub email: String,
    /// Login name.
    pub username: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Nickname.
    pub nick_name: String,
    /// Locale tag, e.g. `en`.
    pub locale: String,
}

impl Profile {
    /// Attribute names in the order they appear in the `AttributeStatement`.
    pub const ATTRIBUTE_NAMES: [&'static str; 6] =
        ["Email", "Username", "FirstName", "LastName", "NickName", "Locale"];

    /// Returns the asserted attributes as `(name, value)` pairs.
    #[must_use]
    pub fn attributes(&self) -> [(&'static str, &str); 6] {
        let [email, username, first_name, last_name, nick_name, locale] = Self::ATTRIBUTE_NAMES;
        [
            (email, self.email.as_str()),
            (username, self.username.as_str()),
            (first_name, self.first_name.as_str()),
            (last_name, self.last_name.as_str()),
            (nick_name, self.nick_name.as_str()),
            (locale, self.locale.as_str()),
        ]
    }
}
