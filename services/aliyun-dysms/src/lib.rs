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

//! Aliyun Dysms (short message service) support for reqsms.
//!
//! This crate composes and signs `SendSms` calls with the Aliyun POP RPC
//! `HMAC-SHA1` signature, and sends them through the http client carried by a
//! [`Context`](reqsms_core::Context).
//!
//! ## Quick Start
//!
//! ```no_run
//! use reqsms_aliyun_dysms::{Config, MessageSender, SendSmsRequest};
//! use reqsms_core::{Context, OsEnv, Result};
//! use reqsms_http_send_reqwest::ReqwestHttpSend;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new()
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!
//!     let mut config = Config::default().from_env(&ctx);
//!     config.protocol = "https".to_string();
//!
//!     let sender = MessageSender::new(ctx, config);
//!     let req = SendSmsRequest::new("15300000001", "阿里云短信测试", "SMS_71390007")
//!         .with_template_param([("code", "1234")]);
//!
//!     let resp = sender.send(&req).await?;
//!     println!("{resp}");
//!     Ok(())
//! }
//! ```
//!
//! ## Signing only
//!
//! [`SendSmsRequest::build`] returns the unsigned request, which can be signed
//! with a [`Signer`](reqsms_core::Signer) and sent by any client:
//!
//! ```no_run
//! use reqsms_aliyun_dysms::{Config, RequestSigner, SendSmsRequest, StaticCredentialProvider};
//! use reqsms_core::{Context, Result, Signer};
//!
//! # async fn sign() -> Result<()> {
//! let signer = Signer::new(
//!     Context::new(),
//!     StaticCredentialProvider::new("access_key_id", "access_key_secret"),
//!     RequestSigner::new(),
//! );
//!
//! let req = SendSmsRequest::new("15300000001", "阿里云短信测试", "SMS_71390007")
//!     .build(&Config::default())?;
//! let (mut parts, _) = req.into_parts();
//! signer.sign(&mut parts).await?;
//! println!("{}", parts.uri);
//! # Ok(())
//! # }
//! ```
//!
//! ## Credential Sources
//!
//! ```bash
//! export ALIBABA_CLOUD_ACCESS_KEY_ID=your-access-key-id
//! export ALIBABA_CLOUD_ACCESS_KEY_SECRET=your-access-key-secret
//! export ALIBABA_CLOUD_SECURITY_TOKEN=your-sts-token  # Optional, for STS
//! ```

#![warn(missing_docs)]

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod encode;
pub use encode::{canonical_query_string, percent_encode};

mod params;
pub use params::ParameterSet;

mod request;
pub use request::SendSmsRequest;

mod sign_request;
pub use sign_request::{build_string_to_sign, sign, RequestSigner};

mod response;
pub use response::SendSmsResponse;

mod sender;
pub use sender::MessageSender;

mod provide_credential;
pub use provide_credential::*;
