//! Demo entry point: greet according to the current flag values, then
//! list every flag linked into the binary.

use hello_world::{build_plan, print_flag_listing, print_plan};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let plan = build_plan();
    print_plan(&plan)?;
    print_flag_listing()?;
    Ok(())
}
