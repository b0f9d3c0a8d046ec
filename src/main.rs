use clap::Parser;
use std::sync::Arc;
use web_quoter::config::{Command, SelectionArgs};
use web_quoter::core::format::{format_price, format_price_with_code};
use web_quoter::core::ConfigProvider;
use web_quoter::utils::error::ErrorSeverity;
use web_quoter::utils::{logger, validation::Validate};
use web_quoter::{
    load_catalog, Catalog, CliConfig, Currency, LocalStorage, PdfRenderer, QuotationExporter,
    QuotationSession, QuoteError, TomlConfig,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!(
            "quoter failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

async fn run(cli: CliConfig) -> web_quoter::Result<()> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };

    if let Some(catalog) = &cli.catalog {
        config.set_catalog_path(catalog.clone());
    }
    if let Some(output) = &cli.output {
        config.set_output_path(output.clone());
    }
    config.validate()?;

    let catalog = Arc::new(load_catalog(&config)?);
    let customer = cli.command.customer();

    match cli.command {
        Command::Services { currency } => {
            print_services(&catalog, currency.unwrap_or(catalog.default_currency()))
        }
        Command::Options { service, currency } => {
            print_options(&catalog, &service, currency.unwrap_or(catalog.default_currency()))
        }
        Command::Total(selection) => {
            let currency = selection.currency_or(catalog.default_currency());
            let total = catalog.total_price(&selection.service, &selection.options, currency);
            println!("{}", format_price(total, currency));
        }
        Command::Summary(selection) => print_summary(&catalog, &selection),
        Command::Convert { amount, from } => {
            let to = match from {
                Currency::Usd => Currency::Mxn,
                Currency::Mxn => Currency::Usd,
            };
            let converted = catalog.convert(amount, from, to);
            println!(
                "{} = {}",
                format_price_with_code(amount, from),
                format_price_with_code(converted, to)
            );
        }
        Command::Export { selection, .. } => {
            let mut session = QuotationSession::new(catalog.clone());
            session.select_service(selection.service.clone());
            for option in &selection.options {
                if !session.toggle_option(option) {
                    tracing::warn!("Option '{}' ignored for '{}'", option, selection.service);
                }
            }
            session.set_currency(selection.currency_or(catalog.default_currency()));
            session.advance()?;

            if let Some(customer) = customer {
                session.submit_contact(customer)?;
            }
            session.advance()?;

            let exporter = QuotationExporter::new(
                LocalStorage::new(config.output_path()),
                PdfRenderer::new(config.template()),
                catalog.clone(),
            )
            .with_file_prefix(config.file_prefix());

            let path = exporter.export(&session.quotation()).await?;
            println!("✅ Quotation exported: {}", format_price(session.total(), session.currency()));
            println!("📁 Output saved to: {}", path);
        }
        Command::Snapshot { image, file } => {
            let bytes = tokio::fs::read(&image).await.map_err(QuoteError::IoError)?;
            let exporter = QuotationExporter::new(
                LocalStorage::new(config.output_path()),
                PdfRenderer::new(config.template()),
                catalog.clone(),
            )
            .with_band_height(config.snapshot_band_height_mm());

            let path = exporter.export_snapshot(bytes, &file).await?;
            println!("📁 Output saved to: {}", path);
        }
    }

    Ok(())
}

fn print_services(catalog: &Catalog, currency: Currency) {
    for service in catalog.services() {
        println!(
            "{:<20} {:<24} {:>12}",
            service.id,
            service.name,
            format_price(service.base_price.in_currency(currency), currency)
        );
    }
}

fn print_options(catalog: &Catalog, service_id: &str, currency: Currency) {
    let options = catalog.service_options(service_id);
    if options.is_empty() {
        println!("No options for '{}'", service_id);
        return;
    }
    for option in options {
        println!(
            "{:<20} {:<30} +{}",
            option.id,
            option.name,
            format_price(option.price.in_currency(currency), currency)
        );
        if let Some(description) = &option.description {
            println!("{:<20} {}", "", description);
        }
    }
}

fn print_summary(catalog: &Catalog, selection: &SelectionArgs) {
    let currency = selection.currency_or(catalog.default_currency());
    let Some(summary) = catalog.service_summary(&selection.service, &selection.options, currency)
    else {
        println!("Unknown service '{}'", selection.service);
        println!("Total: {}", format_price(0, currency));
        return;
    };

    let currency = summary.currency;
    println!("📋 {}", summary.service.name);
    println!("  {}", summary.service.description);
    println!("  Base price: {}", format_price(summary.base_price, currency));
    for option in &summary.selected_options {
        println!(
            "  - {}: +{}",
            option.name,
            format_price(option.price.in_currency(currency), currency)
        );
    }
    println!(
        "  {} option(s) selected, {}",
        summary.selected_options.len(),
        format_price(summary.options_total, currency)
    );
    println!("Total: {}", format_price_with_code(summary.total, currency));
}
