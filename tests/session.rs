use assert_cmd::Command;
use predicates::prelude::*;

fn session(script: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .write_stdin(script)
        .assert()
        .success()
}

#[test]
fn seed_scenario_end_to_end() {
    let output = session(
        "add\n\
         X\nx@example.com\n0123456789\n1 Road\nTown\nST\n12345\n\n\
         delete 2\ny\n\
         edit 3\nY\n\n5555555555\n\n\n\n\n\n\
         show 2\n\
         show 3\n\
         list\n\
         exit\n",
    )
    .stdout(predicate::str::contains("Contact added successfully (id 4)"))
    .stdout(predicate::str::contains("Contact deleted successfully"))
    .stdout(predicate::str::contains("Contact updated successfully"))
    .stdout(predicate::str::contains("Contact Not found"))
    .stdout(predicate::str::contains("Name: Y\n"))
    .get_output()
    .stdout
    .clone();

    // Input is not echoed, so each "> " prompt starts a new screen. The
    // second to last one is what `list` printed, the last one is the goodbye.
    let output = String::from_utf8_lossy(&output);
    let screens: Vec<&str> = output.split("> ").collect();
    let last_listing: Vec<&str> = screens[screens.len() - 2]
        .lines()
        .filter(|line| line.starts_with("  "))
        .collect();

    assert_eq!(last_listing.len(), 3);
    assert!(last_listing[0].starts_with("  1. John Doe"));
    assert!(last_listing[1].starts_with("  3. Y"));
    assert!(last_listing[2].starts_with("  4. X"));
}

#[test]
fn form_rejects_invalid_fields() {
    session(
        "add\n\
         Alice 2\nAlice\n\
         not-an-email\nalice@example.com\n\
         555-1234\n5551234567\n\
         \n1 Road\nTown\nST\n\
         1234\n123456\n\
         met at the gym\n\
         exit\n",
    )
    .stdout(predicate::str::contains("Name may contain letters and spaces only"))
    .stdout(predicate::str::contains("Email must be a valid email address"))
    .stdout(predicate::str::contains("Phone must be exactly 10 digits"))
    .stdout(predicate::str::contains("Address is required"))
    .stdout(predicate::str::contains("Zip must be 5 or 6 digits"))
    .stdout(predicate::str::contains("Contact added successfully (id 4)"));
}

#[test]
fn unknown_routes_land_on_the_list() {
    session("open /nowhere\nopen /edit/77\nexit\n")
        .stdout(predicate::str::contains("Contact Not found, back to the list"))
        .stdout(predicate::str::contains("  2. Jane Smith").count(3));
}

#[test]
fn declined_delete_keeps_contact() {
    session("delete 1\nn\nshow 1\nexit\n")
        .stdout(predicate::str::contains("Are you sure you want to delete this contact? (y/n)"))
        .stdout(predicate::str::contains("Contact deleted successfully").not())
        .stdout(predicate::str::contains("Name: John Doe"));
}

#[test]
fn ids_are_assigned_after_the_highest_live_id() {
    session(
        "delete 3\ny\n\
         add\nAda\nada@example.com\n0123456789\n1 Road\nTown\nST\n12345\n\n\
         exit\n",
    )
    .stdout(predicate::str::contains("Contact added successfully (id 3)"));
}

#[test]
fn end_of_input_ends_the_session() {
    session("list\n").stdout(predicate::str::ends_with("Bye!\n"));
}
