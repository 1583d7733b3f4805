// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Aliyun Dysms service support with convenience APIs.

pub use reqsms_aliyun_dysms::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Signer};

/// Default Aliyun Dysms signer type.
#[cfg(feature = "default-context")]
pub type DefaultSigner = Signer<Credential>;

/// Create a default Aliyun Dysms signer.
///
/// The signer uses the [`default_context`] and loads credential from the
/// `ALIBABA_CLOUD_*` environment variables.
#[cfg(feature = "default-context")]
pub fn default_signer() -> DefaultSigner {
    let ctx = default_context();
    let config = Config::default().from_env(&ctx);
    let provider = DefaultCredentialProvider::new(config.into());
    Signer::new(ctx, provider, RequestSigner::new())
}

/// Create a default Aliyun Dysms sender.
///
/// Fields left unset on `config` are loaded from the environment.
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> reqsms_core::Result<()> {
/// use reqsms::aliyun::{Config, SendSmsRequest};
///
/// let mut config = Config::default();
/// config.protocol = "https".to_string();
/// let sender = reqsms::aliyun::default_sender(config);
///
/// let resp = sender
///     .send(&SendSmsRequest::new("15300000001", "阿里云短信测试", "SMS_71390007"))
///     .await?;
/// assert!(resp.is_ok());
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_sender(config: Config) -> MessageSender {
    let ctx = default_context();
    let config = config.from_env(&ctx);
    MessageSender::new(ctx, config)
}
