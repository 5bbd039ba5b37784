use clap::Parser;
use department_json::config::Command;
use department_json::utils::logger::{self, LogFormat};
use department_json::{
    CliConfig, Department, DepartmentService, DtoError, SerdeJsonCodec, TracingSink,
};

fn main() {
    let config = CliConfig::parse();

    let settings = match config.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    };

    let format: LogFormat = config
        .log_format
        .map(Into::into)
        .unwrap_or_else(|| settings.log_format());
    logger::init_cli_logger(config.verbose, format, settings.log_filter());

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let service = DepartmentService::with_settings(
        SerdeJsonCodec::new(),
        TracingSink,
        settings.describe_settings(),
    );

    if let Err(e) = run(&service, config.command) {
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(
    service: &DepartmentService<SerdeJsonCodec, TracingSink>,
    command: Command,
) -> Result<(), DtoError> {
    match command {
        Command::Build { name, head } => {
            println!("{}", service.build_department_json(&name, head.as_deref())?);
        }
        Command::Matches { json, json2 } => {
            println!("{}", service.deserialized_department_json_matches(&json, &json2)?);
        }
        Command::Describe { name, head, vacant } => {
            let summary = if vacant {
                service.describe_department(&Department::new(name, None))
            } else if let Some(head) = head {
                service.describe_department(&Department::with_head_name(name, Some(&head)))
            } else {
                service.describe_head(&name)
            };
            println!("{}", summary);
        }
    }
    Ok(())
}
