use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub text: String,

    /// Weak reference to `User::id`; the user may not exist.
    #[serde(rename = "userId")]
    pub user_id: String,
}

impl Tweet {
    pub fn new(id: impl Into<String>, text: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            user_id: user_id.into(),
        }
    }
}
