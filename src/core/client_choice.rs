use crate::models::Client;

/// What the user picked in the client field of a booking cell.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientChoice {
    /// A known client; its id is sent with the booking.
    Existing(Client),
    /// An unknown name the user asked to register first (admins only).
    AddNew { name: String },
    /// A plain name with no client record behind it.
    FreeText(String),
}

impl ClientChoice {
    /// Resolve typed input against the known clients.
    ///
    /// Exact name match wins, then a case-insensitive one. Unknown names
    /// become `AddNew` only for admins who opted in.
    pub fn resolve(input: &str, clients: &[Client], is_admin: bool, add_missing: bool) -> Self {
        let name = input.trim();

        if let Some(c) = clients.iter().find(|c| c.name == name) {
            return ClientChoice::Existing(c.clone());
        }

        if let Some(c) = clients
            .iter()
            .find(|c| c.name.trim().eq_ignore_ascii_case(name))
        {
            return ClientChoice::Existing(c.clone());
        }

        if is_admin && add_missing && !name.is_empty() {
            ClientChoice::AddNew {
                name: name.to_string(),
            }
        } else {
            ClientChoice::FreeText(name.to_string())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ClientChoice::Existing(c) => &c.name,
            ClientChoice::AddNew { name } => name,
            ClientChoice::FreeText(name) => name,
        }
    }

    pub fn client_id(&self) -> Option<&str> {
        match self {
            ClientChoice::Existing(c) => Some(&c.id),
            ClientChoice::AddNew { .. } | ClientChoice::FreeText(_) => None,
        }
    }

    /// Label shown when listing the option.
    pub fn label(&self) -> String {
        match self {
            ClientChoice::Existing(c) => c.name.clone(),
            ClientChoice::AddNew { name } => format!("Add \"{}\"", name),
            ClientChoice::FreeText(name) => name.clone(),
        }
    }
}
