//! The authoritative in-memory contact collection.
//!
//! [`ContactStore`] owns an ordered sequence of contacts and hands out
//! [`Snapshot`]s, never the sequence itself. Every mutation builds a fresh
//! collection, swaps it in, and fans the new snapshot out to every observer
//! registered with [`ContactStore::subscribe`], so a snapshot captured earlier
//! never changes under its reader.

pub mod storage_port;

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::contact::{Contact, ContactId, NewContact, seed_contacts};

/// Immutable view of the whole collection at one point in time.
pub type Snapshot = Arc<[Contact]>;

type Observer = Box<dyn FnMut(&Snapshot)>;

/// Handle returned by [`ContactStore::subscribe`], used to detach the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

pub struct ContactStore {
    contacts: Snapshot,
    observers: Vec<(Subscription, Observer)>,
    next_subscription: u64,
}

impl ContactStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::with_contacts(Vec::new())
    }

    /// A store holding the three bootstrap contacts (ids 1 to 3).
    pub fn seeded() -> Self {
        Self::with_contacts(seed_contacts())
    }

    fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: contacts.into(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn list(&self) -> Snapshot {
        Arc::clone(&self.contacts)
    }

    /// Returns `None` when no contact carries `id`.
    pub fn get(&self, id: ContactId) -> Option<Contact> {
        self.contacts.iter().find(|c| c.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Appends `draft` under id = (max existing id, or 0) + 1.
    pub fn add(&mut self, draft: NewContact) -> Contact {
        let id = self.contacts.iter().map(|c| c.id).fold(0, ContactId::max) + 1;
        let contact = draft.with_id(id);

        let mut next = Vec::with_capacity(self.contacts.len() + 1);
        next.extend(self.contacts.iter().cloned());
        next.push(contact.clone());

        debug!(id, "contact added");
        self.replace(next);
        contact
    }

    /// Replaces the contact sharing `contact.id`, keeping its position.
    ///
    /// An unknown id leaves the collection untouched, and the given contact is
    /// still returned. Observers are notified either way.
    pub fn update(&mut self, contact: Contact) -> Contact {
        if !self.contacts.iter().any(|c| c.id == contact.id) {
            warn!(id = contact.id, "update ignored, no contact with this id");
        } else {
            debug!(id = contact.id, "contact updated");
        }

        let next: Vec<Contact> = self
            .contacts
            .iter()
            .map(|c| {
                if c.id == contact.id {
                    contact.clone()
                } else {
                    c.clone()
                }
            })
            .collect();

        self.replace(next);
        contact
    }

    /// Removes the contact with `id`; an unknown id is a no-op.
    pub fn delete(&mut self, id: ContactId) {
        let next: Vec<Contact> = self
            .contacts
            .iter()
            .filter(|c| c.id != id)
            .cloned()
            .collect();

        if next.len() == self.contacts.len() {
            debug!(id, "delete found nothing to remove");
        } else {
            debug!(id, "contact deleted");
        }

        self.replace(next);
    }

    /// Registers `observer`, handing it the current snapshot right away and a
    /// new one after every mutation.
    pub fn subscribe<F>(&mut self, observer: F) -> Subscription
    where
        F: FnMut(&Snapshot) + 'static,
    {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;

        let mut observer: Observer = Box::new(observer);
        observer(&self.contacts);
        self.observers.push((subscription, observer));

        debug!(observers = self.observers.len(), "observer subscribed");
        subscription
    }

    /// Detaches an observer. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(s, _)| *s != subscription);
        before != self.observers.len()
    }

    fn replace(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts.into();
        self.publish();
    }

    fn publish(&mut self) {
        debug!(
            observers = self.observers.len(),
            contacts = self.contacts.len(),
            "publishing snapshot"
        );
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.contacts);
        }
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl fmt::Debug for ContactStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactStore")
            .field("contacts", &self.contacts)
            .field("observers", &self.observers.len())
            .finish()
    }
}
