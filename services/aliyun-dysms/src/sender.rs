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

use crate::{
    Config, Credential, DefaultCredentialProvider, RequestSigner, SendSmsRequest, SendSmsResponse,
};
use reqsms_core::{Context, Error, ProvideCredential, Result, Signer};
use std::sync::Arc;

/// MessageSender sends SMS through Aliyun Dysms.
///
/// It composes the unsigned request, signs it with the cached credential and sends
/// it through the http client of the [`Context`]. A sender is cheap to clone and
/// can be shared across tasks.
#[derive(Clone, Debug)]
pub struct MessageSender {
    ctx: Context,
    config: Arc<Config>,
    signer: Signer<Credential>,
}

impl MessageSender {
    /// Create a sender that loads credential via [`DefaultCredentialProvider`].
    pub fn new(ctx: Context, config: Config) -> Self {
        let config = Arc::new(config);
        let loader = DefaultCredentialProvider::new(config.clone());
        Self::with_credential_provider(ctx, config, loader)
    }

    /// Create a sender with a custom credential provider.
    pub fn with_credential_provider(
        ctx: Context,
        config: Arc<Config>,
        loader: impl ProvideCredential<Credential = Credential>,
    ) -> Self {
        let signer = Signer::new(ctx.clone(), loader, RequestSigner::new());
        Self::with_signer(ctx, config, signer)
    }

    /// Create a sender with a prepared signer.
    pub fn with_signer(ctx: Context, config: Arc<Config>, signer: Signer<Credential>) -> Self {
        Self {
            ctx,
            config,
            signer,
        }
    }

    /// Config used by this sender.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Send a message and return the service response.
    ///
    /// A response is returned whenever the service answered with a parseable
    /// document, even if it rejected the message. Check [`SendSmsResponse::is_ok`]
    /// to tell them apart.
    pub async fn send(&self, req: &SendSmsRequest) -> Result<SendSmsResponse> {
        let (mut parts, body) = req.build(&self.config)?.into_parts();
        self.signer.sign(&mut parts).await?;
        let req = http::Request::from_parts(parts, body);

        let resp = self.ctx.http_send(req).await?;
        let status = resp.status();
        let resp = SendSmsResponse::parse(resp.body()).map_err(|e| {
            if status.is_success() {
                e
            } else {
                Error::response_invalid(format!("dysms responded with unexpected status {status}"))
                    .with_source(e)
            }
        })?;

        if resp.is_ok() {
            log::debug!("dysms accepted message: {resp}");
        } else {
            log::warn!("dysms rejected message: {resp}");
        }
        Ok(resp)
    }
}
