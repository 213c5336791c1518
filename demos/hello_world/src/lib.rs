//! Demo workspace member exercising flagpost end to end.
//!
//! Declares a handful of flags, builds a greeting from their current
//! values, and renders a listing of every flag linked into the binary.

use std::io::{self, Write};

flagpost::define_bool!(polite, true, "Prefix the greeting with a salutation");
flagpost::define_u32!(repeat, 1, "Number of times the greeting is printed");
flagpost::define_text!(recipient, "world", "Recipient named in the greeting");

/// Computed greeting ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingPlan {
    line: String,
    repeat: u32,
}

impl GreetingPlan {
    /// Returns the formatted greeting line.
    #[must_use]
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Returns how many times the line is printed.
    #[must_use]
    pub const fn repeat(&self) -> u32 {
        self.repeat
    }
}

/// Builds a [`GreetingPlan`] from the current flag values.
#[must_use]
pub fn build_plan() -> GreetingPlan {
    let recipient = FLAGS_recipient.get();
    let line = if FLAGS_polite.get() {
        format!("Good day, {recipient}!")
    } else {
        format!("{recipient}?")
    };
    GreetingPlan {
        line,
        repeat: FLAGS_repeat.get(),
    }
}

/// Prints the greeting to standard output.
///
/// # Errors
///
/// Returns an [`io::Error`] when writing to standard output fails.
pub fn print_plan(plan: &GreetingPlan) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_plan_to(&mut stdout, plan)
}

fn write_plan_to(writer: &mut impl Write, plan: &GreetingPlan) -> io::Result<()> {
    for _ in 0..plan.repeat() {
        writeln!(writer, "{}", plan.line())?;
    }
    Ok(())
}

/// Prints a listing of every flag linked into the binary.
///
/// # Errors
///
/// Returns an [`io::Error`] when writing to standard output fails.
pub fn print_flag_listing() -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_flag_listing_to(&mut stdout)
}

fn write_flag_listing_to(writer: &mut impl Write) -> io::Result<()> {
    for flag in flagpost::iter() {
        writeln!(
            writer,
            "--{} ({}) = {} [default {}] from {}",
            flag.name(),
            flag.type_tag(),
            flag.value(),
            flag.default_value(),
            flag.file(),
        )?;
    }
    Ok(())
}
