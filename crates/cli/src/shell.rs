//! Interactive menu loop. Collects input, calls the store, prints results.

use std::io::{self, BufRead, Write};

use custledger_core::{CoreError, Customer, CustomerFields, CustomerStore, SortKey};
use tracing::info;

use crate::{prompt::Prompter, render::Table};

const MENU: &str = "\
===============================
Customer Management System
===============================
1. Add New Customer
2. View All Customers
3. Search Customer
4. Find Customer by Id
5. Update Customer
6. Delete Customer
7. Sort Customers
8. Exit
===============================";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Unwraps a prompt answer, leaving the loop when input has run out.
macro_rules! or_exit {
    ($answer:expr) => {
        match $answer? {
            Some(value) => value,
            None => return Ok(Flow::Exit),
        }
    };
}

pub struct Shell<'a, S: ?Sized, R, W> {
    store: &'a S,
    prompter: Prompter<R, W>,
    table: Table,
}

impl<'a, S, R, W> Shell<'a, S, R, W>
where
    S: CustomerStore + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(store: &'a S, prompter: Prompter<R, W>, table: Table) -> Self {
        Self {
            store,
            prompter,
            table,
        }
    }

    /// Runs until the user confirms exit or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.prompter.say(MENU)?;
            let Some(choice) = self.prompter.ask_choice("Enter your choice: ", 1..=8)? else {
                break;
            };
            let flow = match choice {
                1 => self.add_customer()?,
                2 => self.view_customers()?,
                3 => self.search_customers()?,
                4 => self.find_customer()?,
                5 => self.update_customer()?,
                6 => self.delete_customer()?,
                7 => self.sort_customers()?,
                _ => self.exit_application()?,
            };
            if flow == Flow::Exit {
                break;
            }
        }
        info!(customers = self.store.len(), "shell finished");
        Ok(())
    }

    fn print_table(&mut self, customers: &[Customer]) -> io::Result<()> {
        let rendered = self.table.render(customers);
        self.prompter.say(rendered)
    }

    fn ask_id(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        self.prompter
            .ask_parsed(prompt, "Invalid input. Please enter a numeric CustomerId: ")
    }

    fn ask_fields(&mut self, label: &str) -> io::Result<Option<CustomerFields>> {
        let Some(name) = self
            .prompter
            .ask(&format!("Enter {label}Name (max 50 characters): "))?
        else {
            return Ok(None);
        };
        let Some(code) = self.prompter.ask(&format!(
            "Enter {label}Code (max 10 letters/digits, at least one of each): "
        ))?
        else {
            return Ok(None);
        };
        let Some(address) = self
            .prompter
            .ask(&format!("Enter {label}Address (max 200 characters, optional): "))?
        else {
            return Ok(None);
        };
        Ok(Some(CustomerFields::new(&name, &code, Some(&address))))
    }

    fn add_customer(&mut self) -> io::Result<Flow> {
        if self.store.len() >= self.store.capacity() {
            self.prompter.say("Maximum customer limit reached.")?;
            return Ok(Flow::Continue);
        }
        let id = or_exit!(self.ask_id("Enter CustomerId (numeric): "));
        if self.store.find_by_id(id).is_some() {
            self.prompter.say("CustomerId already exists. Try again.")?;
            return Ok(Flow::Continue);
        }
        let fields = or_exit!(self.ask_fields(""));
        let result = Customer::from_fields(id, &fields)
            .map_err(CoreError::from)
            .and_then(|customer| self.store.add(customer));
        match result {
            Ok(()) => self.prompter.say("Customer added successfully!")?,
            Err(e) => self.prompter.say(format!("Error: {e}"))?,
        }
        Ok(Flow::Continue)
    }

    fn view_customers(&mut self) -> io::Result<Flow> {
        let customers = self.store.all();
        if customers.is_empty() {
            self.prompter.say("No customers found.")?;
        } else {
            self.print_table(&customers)?;
        }
        Ok(Flow::Continue)
    }

    fn search_customers(&mut self) -> io::Result<Flow> {
        let term = or_exit!(self.prompter.ask("Enter Name or Code to search: "));
        let found = self.store.find_by_text(term.trim());
        if found.is_empty() {
            self.prompter.say("No matching customers found.")?;
        } else {
            self.print_table(&found)?;
        }
        Ok(Flow::Continue)
    }

    fn find_customer(&mut self) -> io::Result<Flow> {
        let id = or_exit!(self.ask_id("Enter CustomerId to find: "));
        match self.store.find_by_id(id) {
            Some(customer) => self.print_table(&[customer])?,
            None => self.prompter.say("Customer not found.")?,
        }
        Ok(Flow::Continue)
    }

    fn update_customer(&mut self) -> io::Result<Flow> {
        let id = or_exit!(self.ask_id("Enter CustomerId to update: "));
        let Some(current) = self.store.find_by_id(id) else {
            self.prompter.say("Customer not found.")?;
            return Ok(Flow::Continue);
        };
        self.print_table(&[current])?;
        let fields = or_exit!(self.ask_fields("new "));
        match self.store.update(id, &fields) {
            Ok(()) => self.prompter.say("Customer updated successfully!")?,
            Err(e) => self.prompter.say(format!("Error: {e}"))?,
        }
        Ok(Flow::Continue)
    }

    fn delete_customer(&mut self) -> io::Result<Flow> {
        let id = or_exit!(self.ask_id("Enter CustomerId to delete: "));
        if self.store.find_by_id(id).is_none() {
            self.prompter.say("Customer not found.")?;
            return Ok(Flow::Continue);
        }
        let confirmed = or_exit!(self.prompter.confirm(&format!(
            "Are you sure you want to delete Customer {id}? (Y/N): "
        )));
        if confirmed && self.store.delete(id) {
            self.prompter.say("Customer deleted successfully.")?;
        } else {
            self.prompter.say("Deletion cancelled.")?;
        }
        Ok(Flow::Continue)
    }

    fn sort_customers(&mut self) -> io::Result<Flow> {
        let key = match or_exit!(self
            .prompter
            .ask_choice("Sort by (1) Name or (2) Id: ", 1..=2))
        {
            1 => SortKey::Name,
            _ => SortKey::Id,
        };
        let ascending = or_exit!(self
            .prompter
            .ask_choice("Order (1) Ascending or (2) Descending: ", 1..=2))
            == 1;
        let sorted = self.store.sorted(key, ascending);
        if sorted.is_empty() {
            self.prompter.say("No customers found.")?;
        } else {
            self.print_table(&sorted)?;
        }
        Ok(Flow::Continue)
    }

    fn exit_application(&mut self) -> io::Result<Flow> {
        let confirmed = or_exit!(self
            .prompter
            .confirm("Are you sure you want to exit? (Y/N): "));
        if confirmed {
            self.prompter.say("Goodbye!")?;
            Ok(Flow::Exit)
        } else {
            Ok(Flow::Continue)
        }
    }

    #[cfg(test)]
    fn transcript(&self) -> String
    where
        W: AsRef<[u8]>,
    {
        String::from_utf8_lossy(self.prompter.output().as_ref()).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use custledger_storage_ephemeral::EphemeralStore;
    use std::io::Cursor;

    fn run(store: &EphemeralStore, script: &str) -> String {
        let prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let mut shell = Shell::new(store, prompter, Table::default());
        shell.run().unwrap();
        shell.transcript()
    }

    fn seeded() -> EphemeralStore {
        let store = EphemeralStore::new();
        store
            .add(Customer::new(101, "Alice Johnson", "AJ101", Some("123 Maple St.")).unwrap())
            .unwrap();
        store
            .add(Customer::new(102, "Bob Smith", "BS102", Some("456 Oak Ave.")).unwrap())
            .unwrap();
        store
    }

    #[test]
    fn add_flow_inserts_normalized_customer() {
        let store = EphemeralStore::new();
        let out = run(&store, "1\nabc\n7\n  Gina Lee \nGL7\n\n");
        assert!(out.contains("Invalid input. Please enter a numeric CustomerId: "));
        assert!(out.contains("Customer added successfully!"));
        let got = store.find_by_id(7).unwrap();
        assert_eq!(got.name(), "Gina Lee");
        assert_eq!(got.address(), None);
    }

    #[test]
    fn add_flow_reports_validation_errors() {
        let store = EphemeralStore::new();
        let out = run(&store, "1\n-1\nName\nAB1\n\n1\n5\nName\n12345\n\n");
        assert!(out.contains("Error: validation error: invalid id -1"));
        assert!(out.contains("Error: validation error: invalid code"));
        assert!(store.is_empty());
    }

    #[test]
    fn add_flow_rejects_duplicates_before_asking_fields() {
        let store = seeded();
        let out = run(&store, "1\n101\n");
        assert!(out.contains("CustomerId already exists. Try again."));
        assert!(!out.contains("Enter Name"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn add_flow_stops_when_full() {
        let store = EphemeralStore::with_capacity(1);
        store.add(Customer::new(1, "One", "O1", None).unwrap()).unwrap();
        let out = run(&store, "1\n");
        assert!(out.contains("Maximum customer limit reached."));
        assert!(!out.contains("Enter CustomerId"));
    }

    #[test]
    fn search_prints_matches_only() {
        let store = seeded();
        let out = run(&store, "3\nbob\n3\n   \n");
        assert!(out.contains("Bob Smith"));
        assert!(!out.contains("| Alice Johnson"));
        assert!(out.contains("No matching customers found."));
    }

    #[test]
    fn delete_requires_confirmation() {
        let store = seeded();
        let out = run(&store, "6\n101\nn\n6\n101\ny\n6\n999\n");
        assert!(out.contains("Deletion cancelled."));
        assert!(out.contains("Customer deleted successfully."));
        assert!(out.contains("Customer not found."));
        let ids: Vec<i64> = store.all().iter().map(Customer::id).collect();
        assert_eq!(ids, vec![102]);
    }

    #[test]
    fn update_flow_is_atomic_on_bad_input() {
        let store = seeded();
        let out = run(&store, "5\n102\nRobert Smith\nnodigits\nSomewhere\n");
        assert!(out.contains("Error: validation error: invalid code"));
        assert_eq!(store.find_by_id(102).unwrap().name(), "Bob Smith");

        let out = run(&store, "5\n102\nRobert Smith\nRS102\n\n");
        assert!(out.contains("Customer updated successfully!"));
        let bob = store.find_by_id(102).unwrap();
        assert_eq!(bob.name(), "Robert Smith");
        assert_eq!(bob.address(), None);
    }

    #[test]
    fn sort_by_id_descending() {
        let store = seeded();
        let out = run(&store, "7\n2\n2\n");
        let bob = out.find("Bob Smith").unwrap();
        let alice = out.find("Alice Johnson").unwrap();
        assert!(bob < alice);
    }

    #[test]
    fn exit_needs_yes() {
        let store = EphemeralStore::new();
        let out = run(&store, "8\nn\n8\ny\n2\n");
        assert_eq!(out.matches("Are you sure you want to exit?").count(), 2);
        assert!(out.contains("Goodbye!"));
        // the view after exit is never reached
        assert!(!out.contains("No customers found."));
    }
}
