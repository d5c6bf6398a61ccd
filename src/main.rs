use anyhow::Context;
use auto_tools::utils::logger;
use auto_tools::{
    compute_pay_rate, estimate_delivery, sync_mileage, CliConfig, CustomerFields, PayFields,
    TemplateEngine, TemplateFile, TemplateSet,
};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting auto-tools CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let templates = match &config.templates {
        Some(path) => TemplateFile::from_file(path)
            .with_context(|| format!("Failed to load templates from {}", path))?
            .into_template_set(),
        None => TemplateSet::builtin(),
    };
    let engine = TemplateEngine::new(templates);

    if config.list_templates {
        let mut names: Vec<&str> = engine.templates().names().collect();
        names.sort_unstable();
        for name in names {
            println!("{}", name);
        }
        return Ok(());
    }

    if let Some(template) = &config.template {
        let fields = CustomerFields {
            first_name: config.first_name.clone(),
            car: config.car.clone(),
            total_price: config.total_price.clone(),
        };
        match engine.render(template, &fields) {
            Some(message) => println!("{}\n", message),
            None => {
                tracing::error!("Unknown template: {}", template);
                eprintln!("Unknown template '{}' (see --list-templates)", template);
                std::process::exit(1);
            }
        }
    }

    match (&config.miles, &config.pay) {
        (Some(miles), Some(pay)) => {
            // Same wiring as the dashboard: the estimator's mileage feeds
            // the pay calculator.
            let mut fields = PayFields {
                pay: pay.clone(),
                miles: String::new(),
            };
            let outcome = sync_mileage(miles, &mut fields);
            println!("Delivery: {}", outcome.delivery_display);
            println!("Rate: {}", outcome.rate_display);
        }
        (Some(miles), None) => {
            println!("Delivery: {}", estimate_delivery(miles).display);
        }
        (None, Some(pay)) => {
            println!("Rate: {}", compute_pay_rate(pay, ""));
        }
        (None, None) => {}
    }

    Ok(())
}
