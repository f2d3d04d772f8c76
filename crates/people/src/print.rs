//! Accessor procedures: read one attribute off an entity and emit it as a
//! single line.
//!
//! `write_*` take any sink so callers (and tests) can capture output;
//! `print_*` target standard output and flush after every line.

use std::io::{self, Write};

use campus_core::{Identified, Named};

/// Writes the entity's name followed by a newline.
pub fn write_name<W, E>(out: &mut W, entity: &E) -> io::Result<()>
where
    W: Write + ?Sized,
    E: Named + ?Sized,
{
    let name = entity.name();
    tracing::debug!(name, "writing name");
    writeln!(out, "{name}")?;
    out.flush()
}

/// Writes the entity's identifier followed by a newline.
pub fn write_id<W, E>(out: &mut W, entity: &E) -> io::Result<()>
where
    W: Write + ?Sized,
    E: Identified + ?Sized,
{
    let id = entity.id();
    tracing::debug!(%id, "writing id");
    writeln!(out, "{id}")?;
    out.flush()
}

/// Prints the entity's name on its own line to standard output.
pub fn print_name<E: Named + ?Sized>(entity: &E) -> io::Result<()> {
    write_name(&mut io::stdout().lock(), entity)
}

/// Prints the entity's identifier on its own line to standard output.
pub fn print_id<E: Identified + ?Sized>(entity: &E) -> io::Result<()> {
    write_id(&mut io::stdout().lock(), entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Person, Student};
    use campus_core::StudentId;
    use proptest::prelude::*;

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn write_name_emits_exactly_one_line() {
        let bob = Student::new("Robert", StudentId::new(12345));
        assert_eq!(capture(|out| write_name(out, &bob)), "Robert\n");
    }

    #[test]
    fn write_id_emits_exactly_one_line() {
        let bob = Student::new("Robert", StudentId::new(12345));
        assert_eq!(capture(|out| write_id(out, &bob)), "12345\n");
    }

    #[test]
    fn name_then_id_produces_two_lines_in_order() {
        let bob = Student::new("Robert", StudentId::new(12345));
        let output = capture(|out| {
            write_name(out, &bob)?;
            write_id(out, &bob)
        });
        assert_eq!(output, "Robert\n12345\n");
    }

    #[test]
    fn write_name_accepts_any_named_entity() {
        let person = Person::new("Ada");
        assert_eq!(capture(|out| write_name(out, &person)), "Ada\n");

        let dynamic: &dyn Named = &person;
        assert_eq!(capture(|out| write_name(out, dynamic)), "Ada\n");
    }

    #[test]
    fn write_errors_propagate() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let bob = Student::new("Robert", StudentId::new(12345));
        let err = write_id(&mut Closed, &bob).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: each procedure writes the attribute and a single newline.
        #[test]
        fn writes_attribute_verbatim(name in "[^\n]*", id in any::<u64>()) {
            let student = Student::new(name.clone(), id);
            prop_assert_eq!(capture(|out| write_name(out, &student)), format!("{name}\n"));
            prop_assert_eq!(capture(|out| write_id(out, &student)), format!("{id}\n"));
        }
    }
}
