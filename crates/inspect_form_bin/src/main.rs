use env_logger::Env;
use form_inspector::{FormInspector, InspectError, Target};
use std::io;

fn main() -> Result<(), InspectError> {
    env_logger::init_from_env(Env::new().default_filter_or("warn"));

    let inspector = FormInspector::new(Target::default());
    inspector.run(&mut io::stdout().lock())
}
