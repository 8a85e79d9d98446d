use crate::cli::global::GlobalArgs;
use convert_d::{BUILTIN_FORMATS, FormatRegistry};

pub fn handle(global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let registry = FormatRegistry::from_descriptors(BUILTIN_FORMATS);
    let defects = registry.check();

    if defects.is_empty() {
        if !global.quiet {
            println!(
                "ok: {} input formats, {} output formats",
                registry.inputs().len(),
                registry.outputs().len()
            );
        }
        return Ok(());
    }

    for defect in &defects {
        println!("{}", defect);
    }
    Err(format!("{} registry defect(s) found", defects.len()).into())
}
