use gotohell::{build_decorator_stack, AppConfig, AppError, SportsCalculator};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gotohell=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        error!(error = %e, "gotohell failed");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let rates = config.load_rates()?;
    let preferences = config.load_preferences()?;

    let stack = build_decorator_stack(&rates, &preferences, &config.game, &config.multiplier_mode);
    info!(
        game = %config.game,
        sport = %config.sport,
        mode = %config.multiplier_mode,
        layers = ?stack.layer_names(),
        "Calculator stack ready"
    );

    println!("deaths\tamount\tdeaths_back");
    for deaths in 0..=preferences.max_deaths {
        let amount = stack.calculate_amount(&config.sport, &config.game, deaths as f64);
        let back = stack.calculate_deaths(&config.sport, &config.game, amount as f64);
        println!("{deaths}\t{amount}\t{back}");
    }

    let breakdown = stack.breakdown(&config.sport, &config.game, preferences.max_deaths as f64);
    println!("{}", serde_json::to_string_pretty(&breakdown)?);
    Ok(())
}
