use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn main() -> std::process::ExitCode {
    // 提前加载 .env，使得 RUST_LOG / DATABASE_URL 等环境变量生效
    dotenv().ok();
    let cfg = configs::AppConfig::load_or_env();
    let log_format = cfg.as_ref().map(|c| c.logging.format.clone()).unwrap_or_else(|_| "compact".into());
    common::utils::logging::init_logging_with_format(&log_format);
    info!(service = "smogit", event = "logger_init", format = %log_format, "tracing subscriber initialized");

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service = "smogit", event = "panic", %service_id, pid, message = %info, "unhandled panic occurred");
    }));

    // 线程数：优先 config.toml，其次环境变量 TOKIO_WORKER_THREADS
    let worker_threads = match &cfg {
        Ok(cfg) => cfg.server.worker_threads,
        Err(e) => {
            error!(service = "smogit", event = "config_invalid", error = %e, "configuration rejected");
            return std::process::ExitCode::FAILURE;
        }
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "smogit", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "smogit",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "shop backend starting"
    );

    rt.block_on(async move {
        let server_task = tokio::spawn(async move {
            let res = server::run().await;
            if let Err(e) = &res {
                error!(service = "smogit", event = "run_failed", error = %e, "server::run returned error");
            }
            res
        });

        tokio::select! {
            res = server_task => match res {
                Ok(Ok(())) => {
                    info!(service = "smogit", event = "stop", %service_id, pid, "server stopped normally");
                    std::process::ExitCode::SUCCESS
                }
                // already logged inside the task
                Ok(Err(_)) => std::process::ExitCode::FAILURE,
                Err(e) => {
                    error!(service = "smogit", event = "task_join_error", error = %e, "server task join error");
                    std::process::ExitCode::FAILURE
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!(service = "smogit", event = "shutdown_signal", %service_id, pid, "received Ctrl+C, shutting down");
                std::process::ExitCode::SUCCESS
            }
        }
    })
}
