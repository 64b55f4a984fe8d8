pub mod address_list;
pub mod contact_form;

pub use address_list::AddressList;
pub use contact_form::{ContactForm, FormMode};
