use serde::{Deserialize, Serialize};

pub type ContactId = i64;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,

    #[serde(default, deserialize_with = "deserialize_notes")]
    pub notes: Option<String>,
}

/// A contact that has not been given an id yet.
///
/// Only the store turns a `NewContact` into a [`Contact`], so ids are never
/// chosen by callers.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,

    #[serde(default, deserialize_with = "deserialize_notes")]
    pub notes: Option<String>,
}

impl NewContact {
    pub fn with_id(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            city: self.city,
            state: self.state,
            zip: self.zip,
            notes: self.notes,
        }
    }
}

impl Contact {
    /// Drops the identity, keeping every descriptive field.
    pub fn to_draft(&self) -> NewContact {
        NewContact {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip: self.zip.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Bootstrap fixture used in absence of persistence.
pub fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: 1,
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            address: "123 Main St".to_string(),
            city: "Anytown".to_string(),
            state: "CA".to_string(),
            zip: "12345".to_string(),
            notes: Some("Work contact".to_string()),
        },
        Contact {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            phone: "(555) 987-6543".to_string(),
            address: "456 Oak Ave".to_string(),
            city: "Somewhere".to_string(),
            state: "NY".to_string(),
            zip: "67890".to_string(),
            notes: Some("Friend from college".to_string()),
        },
        Contact {
            id: 3,
            name: "Bob Johnson".to_string(),
            email: "bob.johnson@example.com".to_string(),
            phone: "(555) 555-5555".to_string(),
            address: "789 Pine Rd".to_string(),
            city: "Elsewhere".to_string(),
            state: "TX".to_string(),
            zip: "54321".to_string(),
            notes: Some("Family doctor".to_string()),
        },
    ]
}

// CSV writes `None` as an empty cell, read it back as `None` too.
fn deserialize_notes<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|notes| !notes.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_one_to_three() {
        let ids: Vec<ContactId> = seed_contacts().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn draft_keeps_fields_and_drops_id() {
        let contact = seed_contacts().remove(1);
        let draft = contact.to_draft();

        assert_eq!(draft.name, "Jane Smith");
        assert_eq!(draft.notes.as_deref(), Some("Friend from college"));
        assert_eq!(draft.with_id(2), contact);
    }

    #[test]
    fn blank_notes_deserialize_as_none() -> Result<(), serde_json::Error> {
        let json = r#"{"name":"A","email":"a@b.co","phone":"0123456789",
            "address":"x","city":"y","state":"z","zip":"12345","notes":"  "}"#;
        let draft: NewContact = serde_json::from_str(json)?;

        assert_eq!(draft.notes, None);
        Ok(())
    }
}
