include!("../../lib.rs");
use std::io;
use std::process::ExitCode;
use crate::catalog::controller::MenuController;
use crate::catalog::factory::create_catalog_service;
use crate::core::controller::AppState;
use crate::utils::logging::setup_tracing;

fn main() -> ExitCode {
    let state = AppState::from_env();
    setup_tracing(state.config.log_level.as_str());

    let mut catalog_svc = create_catalog_service(&state.config, state.store);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let res = MenuController::new(catalog_svc.as_mut(), stdin.lock(), stdout.lock()).run();
    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("menu aborted: {}", err);
            ExitCode::FAILURE
        }
    }
}
