use serde::{Deserialize, Serialize};

/// A client testimonial shown on the home page.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Client {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub designation: String,
    pub image: String,
}
