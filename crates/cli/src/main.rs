use anyhow::Context;

use campus_core::StudentId;
use campus_people::{Student, print_id, print_name};

fn main() -> anyhow::Result<()> {
    campus_observability::init();

    let bob = Student::new("Robert", StudentId::new(12345));
    tracing::debug!(name = %bob.name(), id = %bob.id(), "printing student");

    print_name(&bob).context("failed to print student name")?;
    print_id(&bob).context("failed to print student id")?;

    Ok(())
}
