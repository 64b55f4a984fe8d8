use std::cell::RefCell;
use std::fmt::Write;
use std::rc::Rc;

use crate::domain::contact::{Contact, ContactId};
use crate::routes::Route;
use crate::store::{ContactStore, Snapshot, Subscription};

/// The list page. Holds whatever snapshot the store last published to it.
pub struct AddressList {
    contacts: Rc<RefCell<Snapshot>>,
    subscription: Subscription,
}

impl AddressList {
    pub fn activate(store: &mut ContactStore) -> Self {
        let empty: Snapshot = Vec::<Contact>::new().into();
        let contacts = Rc::new(RefCell::new(empty));

        let latest = Rc::clone(&contacts);
        let subscription = store.subscribe(move |snapshot| {
            *latest.borrow_mut() = Snapshot::clone(snapshot);
        });

        Self {
            contacts,
            subscription,
        }
    }

    pub fn deactivate(self, store: &mut ContactStore) {
        store.unsubscribe(self.subscription);
    }

    pub fn contacts(&self) -> Snapshot {
        Snapshot::clone(&self.contacts.borrow())
    }

    pub fn find(&self, id: ContactId) -> Option<Contact> {
        self.contacts.borrow().iter().find(|c| c.id == id).cloned()
    }

    pub fn edit_route(id: ContactId) -> Route {
        Route::Edit(id)
    }

    /// Deletes `id` only once the user has confirmed.
    pub fn delete(&self, store: &mut ContactStore, id: ContactId, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        store.delete(id);
        true
    }

    pub fn render(&self) -> String {
        let contacts = self.contacts.borrow();
        if contacts.is_empty() {
            return "No contact yet".to_string();
        }

        let mut output = String::new();
        for c in contacts.iter() {
            let _ = writeln!(output, "{}", listing_line(c));
        }
        output
    }
}

pub fn listing_line(c: &Contact) -> String {
    format!(
        "{:>3}. {:<20} {:15} {:^30} {}, {}",
        c.id, c.name, c.phone, c.email, c.city, c.state
    )
}

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "Id: {}\n\
        Name: {}\n\
        Email: {}\n\
        Phone: {}\n\
        Address: {}\n\
        City: {}\n\
        State: {}\n\
        Zip: {}\n\
        Notes: {}",
        contact.id,
        contact.name,
        contact.email,
        contact.phone,
        contact.address,
        contact.city,
        contact.state,
        contact.zip,
        contact.notes.as_deref().unwrap_or_default()
    )
}
