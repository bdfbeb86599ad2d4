use clap::Parser;
use vivarium::domain::ports::{ConfigProvider, DisplaySurface};
use vivarium::utils::{logger, validation::Validate};
use vivarium::{AppContext, CliConfig, FileConfig, FormInput, GridSurface, LivingRecord, RecordKind};

use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting vivarium");

    if let Some(path) = cli.config.clone() {
        let config = FileConfig::from_file(&path)?;
        if let Err(e) = config.validate() {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        let demo = config.demo();
        run(config, demo)
    } else {
        if let Err(e) = cli.validate() {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        let demo = cli.demo;
        run(cli, demo)
    }
}

fn demo_records() -> Vec<LivingRecord> {
    vec![
        LivingRecord::animal("Lion", 15, "Mammal", "Carnivore"),
        LivingRecord::animal("Parrot", 10, "Bird", "Herbivore"),
        LivingRecord::plant("Lotus", 8, "Broad", "Silver"),
        LivingRecord::plant("Aloe", 15, "Spiny", "Yellow"),
    ]
}

fn run<C: ConfigProvider>(config: C, demo: bool) -> anyhow::Result<()> {
    let records = if demo { demo_records() } else { Vec::new() };
    let mut context = AppContext::with_records(config, records);
    let mut surface = GridSurface::new();
    context.show_hint(&mut surface);

    if demo {
        for line in context.feeding_summary() {
            println!("{line}");
        }
        context.save_report()?;
    }

    println!("vivarium - register of living records");
    print_help();

    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let command = line.trim().to_lowercase();

        match command.as_str() {
            "animal" => create(&mut context, &mut surface, RecordKind::Animal)?,
            "plant" => create(&mut context, &mut surface, RecordKind::Plant)?,
            "names" => {
                let active = context.toggle_listing(&mut surface);
                println!("{}", surface.to_text());
                tracing::debug!("Listing active: {}", active);
            }
            "feed" => {
                for line in context.feeding_summary() {
                    println!("{line}");
                }
            }
            "export" => println!("{}", context.export_json()?),
            "help" => print_help(),
            "quit" | "exit" => break,
            "" => {}
            other => println!("Unknown command '{other}'. Type 'help' for the command list."),
        }
    }

    tracing::info!("Exiting vivarium");
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  animal  create an animal record");
    println!("  plant   create a plant record");
    println!("  names   show or hide the name listing");
    println!("  feed    print the feeding description of every record");
    println!("  export  print the register as JSON");
    println!("  quit    leave");
}

/// Prompts for each field of the selected variant and runs the creation
/// workflow. Validation errors are printed and the loop continues; I/O
/// errors propagate and end the program.
fn create(
    context: &mut AppContext<impl ConfigProvider>,
    surface: &mut dyn DisplaySurface,
    kind: RecordKind,
) -> anyhow::Result<()> {
    let mut form = FormInput::new(kind);
    for field in FormInput::required_fields(kind) {
        form.set_field(field, prompt(field_label(field))?);
    }

    match context.create_record(form, surface) {
        Ok(()) => println!("Created the {kind} record."),
        Err(e) if e.is_validation() => eprintln!("Error: {e}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn field_label(field: &str) -> &str {
    match field {
        "name" => "Name",
        "age" => "Age",
        "species" => "Species",
        "food" => "Food",
        "leaf_type" => "Leaf type",
        "flower_color" => "Flower color",
        other => other,
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim_end_matches(['\r', '\n']).to_string())
}
