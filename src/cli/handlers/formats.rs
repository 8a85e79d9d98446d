use crate::cli::{args::FormatsArgs, global::GlobalArgs};
use convert_d::{FormatInfo, FormatRegistry};

pub fn handle(args: FormatsArgs, _global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let formats: Vec<FormatInfo> = FormatRegistry::builtin()
        .catalogue()
        .into_iter()
        .filter(|f| (!args.input || f.input) && (!args.output || f.output))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&formats)?);
        return Ok(());
    }

    for format in &formats {
        let roles = match (format.input, format.output) {
            (true, true) => "in/out",
            (true, false) => "in",
            _ => "out",
        };
        println!("  {:<14} {:<20} {}", format.id, format.name, roles);
    }

    Ok(())
}
