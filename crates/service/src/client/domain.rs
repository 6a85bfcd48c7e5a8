use serde::{Deserialize, Serialize};

/// Input for creating a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Domain client (business view)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub client_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: Option<String>,
}

impl Client {
    pub fn from_input(client_id: i32, input: NewClient) -> Self {
        Self {
            client_id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            address: input.address,
        }
    }

    pub fn full_name(&self) -> String { format!("{} {}", self.first_name, self.last_name) }
}

impl From<models::client::Model> for Client {
    fn from(m: models::client::Model) -> Self {
        Self {
            client_id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            phone: m.phone,
            address: m.address,
        }
    }
}
