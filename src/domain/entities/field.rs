//! Form field keys and the forms that own them.

use std::fmt;
use std::str::FromStr;

/// Stable identifier of a validated form field.
///
/// The string form matches the `name` attribute of the input in the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Username,
    Name,
    Email,
    Qq,
    Password,
    Code,
}

impl FieldKey {
    pub const ALL: [FieldKey; 6] = [
        FieldKey::Username,
        FieldKey::Name,
        FieldKey::Email,
        FieldKey::Qq,
        FieldKey::Password,
        FieldKey::Code,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Username => "username",
            FieldKey::Name => "name",
            FieldKey::Email => "email",
            FieldKey::Qq => "qq",
            FieldKey::Password => "password",
            FieldKey::Code => "code",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown form field `{s}`"))
    }
}

/// The two authentication forms served by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login,
    Register,
}

impl FormKind {
    /// Fields validated on submit, in the order they are checked.
    pub fn fields(self) -> &'static [FieldKey] {
        match self {
            FormKind::Login => &[FieldKey::Username, FieldKey::Password, FieldKey::Code],
            FormKind::Register => &[
                FieldKey::Name,
                FieldKey::Email,
                FieldKey::Password,
                FieldKey::Qq,
            ],
        }
    }

    /// Element id of the form in the page markup.
    pub fn form_id(self) -> &'static str {
        match self {
            FormKind::Login => "loginForm",
            FormKind::Register => "registerForm",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::Login => f.write_str("login"),
            FormKind::Register => f.write_str("register"),
        }
    }
}
