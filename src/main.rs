use std::process::ExitCode;

use dotenvy::dotenv;
use order_pricing::config::{order_from_env, Settings};
use order_pricing::errors::AppError;
use order_pricing::build_service;

fn run() -> Result<(), AppError> {
    let settings = Settings::from_env()?;
    let service = build_service(&settings)?;
    let output = service.place_order(order_from_env()?)?;

    println!("code:    {}", output.code);
    println!("freight: {}", output.freight);
    println!("total:   {}", output.total);
    Ok(())
}

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
