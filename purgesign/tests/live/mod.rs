use log::warn;
use purgesign::{default_context, CcuV3Client, PurgeRequest, Result};
use std::env;

fn init_client() -> Option<CcuV3Client> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("PURGESIGN_CCU_TEST").ok().as_deref() != Some("on") {
        return None;
    }

    Some(CcuV3Client::from_context(default_context()))
}

#[tokio::test]
async fn test_live_purge_by_url() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("PURGESIGN_CCU_TEST is not set, skipped");
        return Ok(());
    };

    let url = env::var("PURGESIGN_CCU_URL").expect("env PURGESIGN_CCU_URL must set");
    let resp = client.purge_by_url(&PurgeRequest::new([url])).await?;
    assert_eq!(resp.http_status.as_deref(), Some("201"));
    Ok(())
}

#[tokio::test]
async fn test_live_purge_by_cpcode() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("PURGESIGN_CCU_TEST is not set, skipped");
        return Ok(());
    };

    let cpcode: i64 = env::var("PURGESIGN_CCU_CPCODE")
        .expect("env PURGESIGN_CCU_CPCODE must set")
        .parse()
        .expect("env PURGESIGN_CCU_CPCODE must be a number");
    let resp = client.purge_by_cpcode(&PurgeRequest::new([cpcode])).await?;
    assert_eq!(resp.http_status.as_deref(), Some("201"));
    Ok(())
}
