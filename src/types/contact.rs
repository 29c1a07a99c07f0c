use serde::{Deserialize, Serialize};

/// A contact-form query. The same shape is sent on submit and returned on list.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Contact {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub city: String,
}
