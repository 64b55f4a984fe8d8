pub use crate::cli::{Session, command, run_app};
pub use crate::config::AppConfig;
pub use crate::domain::contact::{self, Contact, ContactId, NewContact};
pub use crate::errors::AppError;
pub use crate::pages::{AddressList, ContactForm, FormMode};
pub use crate::routes::Route;
pub use crate::store::{self, ContactStore, Snapshot, Subscription};
pub use crate::validation::{Field, FieldError};
