//! Example sending a verification code through Aliyun Dysms.
//!
//! ```bash
//! export ALIBABA_CLOUD_ACCESS_KEY_ID=your-access-key-id
//! export ALIBABA_CLOUD_ACCESS_KEY_SECRET=your-access-key-secret
//! cargo run --example send_sms -- 15300000001 "阿里云短信测试" SMS_71390007
//! ```

use reqsms_aliyun_dysms::{Config, MessageSender, SendSmsRequest};
use reqsms_core::{Context, OsEnv};
use reqsms_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(phone_numbers), Some(sign_name), Some(template_code)) =
        (args.next(), args.next(), args.next())
    else {
        anyhow::bail!("usage: send_sms <phone_numbers> <sign_name> <template_code>");
    };

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::default().from_env(&ctx);
    println!("Using config: {config:?}");

    let sender = MessageSender::new(ctx, config);
    let req = SendSmsRequest::new(&phone_numbers, &sign_name, &template_code)
        .with_template_param([("code", "1234")]);

    let resp = sender.send(&req).await?;
    if resp.is_ok() {
        println!("Message accepted, biz id: {}", resp.biz_id);
    } else {
        println!("Message rejected: {resp}");
    }

    Ok(())
}
