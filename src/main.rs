use dotenv::dotenv;
use rusty_addressbook::prelude::{AppError, run_app};

fn main() -> Result<(), AppError> {
    dotenv().ok();
    run_app()
}
