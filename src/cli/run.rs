use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};

use crate::cli::command::{Cli, Commands, SHELL_HELP, ShellCommand};
use crate::config::AppConfig;
use crate::domain::contact::ContactId;
use crate::errors::AppError;
use crate::logger::init_logger;
use crate::pages::address_list::{display_contact, listing_line};
use crate::pages::{AddressList, ContactForm, FormMode};
use crate::routes::Route;
use crate::store::ContactStore;
use crate::store::storage_port::{export_contacts_to_csv, import_contacts_from_csv};
use crate::validation::{Field, validate_field};

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli);

    init_logger(config.log_filter.as_deref());

    let store = config.build_store();
    info!(contacts = store.len(), seeded = config.seed, "address book ready");

    match cli.command {
        None | Some(Commands::Shell) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Session::new(store, config, stdin.lock(), stdout.lock()).run()
        }

        Some(Commands::List { json }) => {
            let contacts = store.list();
            if json {
                println!("{}", serde_json::to_string_pretty(&*contacts)?);
                return Ok(());
            }
            if contacts.is_empty() {
                println!("No contact yet");
                return Ok(());
            }
            for c in contacts.iter() {
                println!("{}", listing_line(c));
            }
            Ok(())
        }

        Some(Commands::Export { des }) => {
            let des = des.unwrap_or(config.export_path);
            let (path, total) = export_contacts_to_csv(&store.list(), &des)?;

            println!("Successfully exported {} contacts to {:?}.", total, path);
            Ok(())
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// The interactive app: a router over the list page and the contact form,
/// reading commands from `input` and rendering to `output`.
pub struct Session<R, W> {
    store: ContactStore,
    config: AppConfig,
    list_page: AddressList,
    route: Route,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(mut store: ContactStore, config: AppConfig, input: R, output: W) -> Self {
        let list_page = AddressList::activate(&mut store);
        Self {
            store,
            config,
            list_page,
            route: Route::List,
            input,
            output,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn run(mut self) -> Result<(), AppError> {
        writeln!(self.output, "\n--- ADDRESS BOOK ---\n")?;
        self.show_list()?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_input()? else {
                break;
            };
            if line.is_empty() {
                continue;
            }

            let command = match line.parse::<ShellCommand>() {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "{e}\nType 'help' to see available commands")?;
                    continue;
                }
            };

            if let Flow::Exit = self.execute(command)? {
                break;
            }
        }

        writeln!(self.output, "\nBye!")?;
        self.list_page.deactivate(&mut self.store);
        Ok(())
    }

    fn execute(&mut self, command: ShellCommand) -> Result<Flow, AppError> {
        debug!(?command, route = %self.route, "executing");

        match command {
            ShellCommand::List => self.navigate(Route::List)?,
            ShellCommand::Add => self.navigate(Route::Create)?,
            ShellCommand::Edit(id) => self.navigate(AddressList::edit_route(id))?,
            ShellCommand::Open(path) => self.navigate(Route::parse(&path))?,
            ShellCommand::Show(id) => match self.store.get(id) {
                Some(contact) => writeln!(self.output, "{}", display_contact(&contact))?,
                None => writeln!(self.output, "{}", AppError::NotFound("Contact".to_string()))?,
            },
            ShellCommand::Delete(id) => self.delete(id)?,
            ShellCommand::Export(des) => self.export(des)?,
            ShellCommand::Import(src) => self.import(src)?,
            ShellCommand::Help => writeln!(self.output, "{SHELL_HELP}")?,
            ShellCommand::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn navigate(&mut self, route: Route) -> Result<(), AppError> {
        self.route = route;

        match route {
            Route::List => self.show_list(),
            Route::Create => self.fill_form(ContactForm::create()),
            Route::Edit(id) => match ContactForm::edit(&self.store, id) {
                Some(form) => self.fill_form(form),
                None => {
                    writeln!(
                        self.output,
                        "{}, back to the list",
                        AppError::NotFound("Contact".to_string())
                    )?;
                    self.route = Route::List;
                    self.show_list()
                }
            },
        }
    }

    fn show_list(&mut self) -> Result<(), AppError> {
        self.route = Route::List;
        write!(self.output, "{}", self.list_page.render())?;
        if self.list_page.contacts().is_empty() {
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn fill_form(&mut self, mut form: ContactForm) -> Result<(), AppError> {
        writeln!(self.output, "\n{}", form.title())?;
        if form.is_edit_mode() {
            writeln!(self.output, "Press enter to keep the current value.")?;
        }

        for field in Field::ALL {
            if !self.prompt_field(&mut form, field)? {
                writeln!(self.output, "Cancelled")?;
                return self.show_list();
            }
        }

        match form.submit(&mut self.store) {
            Ok(contact) => match form.mode() {
                FormMode::Create => writeln!(
                    self.output,
                    "Contact added successfully (id {})",
                    contact.id
                )?,
                FormMode::Edit(_) => writeln!(self.output, "Contact updated successfully")?,
            },
            Err(AppError::InvalidForm(errors)) => {
                for error in errors {
                    writeln!(self.output, "{}", error.message())?;
                }
            }
            Err(e) => return Err(e),
        }

        self.show_list()
    }

    /// Asks for one field until the answer passes. `false` means the user
    /// backed out (or input ended).
    fn prompt_field(&mut self, form: &mut ContactForm, field: Field) -> Result<bool, AppError> {
        loop {
            let current = form.value(field).to_string();
            let optional = if field.is_required() { "" } else { " (optional)" };

            if form.is_edit_mode() && !current.is_empty() {
                write!(self.output, "{}{} [{}]: ", field.label(), optional, current)?;
            } else {
                write!(self.output, "{}{}: ", field.label(), optional)?;
            }
            self.output.flush()?;

            let Some(answer) = self.read_input()? else {
                return Ok(false);
            };
            if answer == "*" {
                return Ok(false);
            }

            let value = if answer.is_empty() && form.is_edit_mode() {
                current
            } else if answer == "-" && !field.is_required() {
                String::new()
            } else {
                answer
            };

            match validate_field(field, &value)? {
                Some(error) => writeln!(self.output, "{}", error.message())?,
                None => {
                    form.set(field, &value);
                    return Ok(true);
                }
            }
        }
    }

    fn delete(&mut self, id: ContactId) -> Result<(), AppError> {
        let Some(contact) = self.list_page.find(id) else {
            writeln!(self.output, "{}", AppError::NotFound("Contact".to_string()))?;
            return Ok(());
        };

        writeln!(self.output, "{}", listing_line(&contact))?;
        let confirmed = self.confirm_action("delete this contact")?;

        if self.list_page.delete(&mut self.store, id, confirmed) {
            writeln!(self.output, "Contact deleted successfully")?;
        }
        self.show_list()
    }

    fn export(&mut self, des: Option<PathBuf>) -> Result<(), AppError> {
        let des = des.unwrap_or_else(|| self.config.export_path.clone());

        match export_contacts_to_csv(&self.list_page.contacts(), &des) {
            Ok((path, total)) => writeln!(
                self.output,
                "Successfully exported {} contacts to {:?}.",
                total, path
            )?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    fn import(&mut self, src: PathBuf) -> Result<(), AppError> {
        match import_contacts_from_csv(&mut self.store, &src) {
            Ok(summary) => {
                writeln!(
                    self.output,
                    "Successfully imported {} contacts from {:?} ({} skipped).",
                    summary.imported, src, summary.skipped
                )?;
                self.show_list()
            }
            Err(e) => {
                writeln!(self.output, "{e}")?;
                Ok(())
            }
        }
    }

    fn confirm_action(&mut self, action: &str) -> Result<bool, AppError> {
        write!(self.output, "Are you sure you want to {action}? (y/n) ")?;
        self.output.flush()?;

        let answer = self.read_input()?.unwrap_or_default();
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    fn read_input(&mut self) -> Result<Option<String>, AppError> {
        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }
}
