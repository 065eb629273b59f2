use purgesign_core::{Context, OsEnv};
use purgesign_file_read_tokio::TokioFileRead;
use purgesign_http_send_reqwest::ReqwestHttpSend;

/// Create a context reading files with tokio, sending requests with reqwest
/// and reading the process environment.
pub fn default_context() -> Context {
    Context::new()
        .with_file_read(TokioFileRead)
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}
