//! Dumps every flag linked into this example binary.

use std::io::{self, Write};

flagpost::define_bool!(color, true, "Colourise the dump output");
flagpost::define_u64!(cache_bytes, 64 * 1024 * 1024, "Cache capacity in bytes");
flagpost::define_text!(format, "table", "Output format for the dump");

fn main() -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    for flag in flagpost::iter() {
        writeln!(
            stdout,
            "--{} ({}) = {}{} [default {}] from {}",
            flag.name(),
            flag.type_tag(),
            flag.value(),
            if flag.is_default() { "" } else { " (set)" },
            flag.default_value(),
            flag.file(),
        )?;
    }
    Ok(())
}
