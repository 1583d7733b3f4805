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

use crate::constants::*;
use reqsms_core::utils::Redact;
use reqsms_core::{Context, Error, Result};
use std::fmt::{Debug, Formatter};

/// Config carries all the configuration for sending SMS through Aliyun Dysms.
///
/// A config is built once and then shared read-only, usually behind an `Arc`,
/// by every request sent with it.
#[derive(Clone)]
pub struct Config {
    /// `protocol` used to reach the endpoint, either `http` or `https`.
    ///
    /// - default to `http`
    pub protocol: String,
    /// `domain` of the Dysms endpoint will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ALIBABA_CLOUD_DYSMS_ENDPOINT`]
    /// - default to `dysmsapi.aliyuncs.com`
    pub domain: Option<String>,
    /// `region_id` used when a request does not carry its own will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ALIBABA_CLOUD_REGION_ID`]
    /// - default to `cn-hangzhou`
    pub region_id: Option<String>,
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ALIBABA_CLOUD_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `access_key_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ALIBABA_CLOUD_ACCESS_KEY_SECRET`]
    pub access_key_secret: Option<String>,
    /// `security_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`ALIBABA_CLOUD_SECURITY_TOKEN`]
    pub security_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            domain: None,
            region_id: None,
            access_key_id: None,
            access_key_secret: None,
            security_token: None,
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("protocol", &self.protocol)
            .field("domain", &self.domain)
            .field("region_id", &self.region_id)
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("access_key_secret", &Redact::from(&self.access_key_secret))
            .field("security_token", &Redact::from(&self.security_token))
            .finish()
    }
}

impl Config {
    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(ALIBABA_CLOUD_DYSMS_ENDPOINT) {
            self.domain.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ALIBABA_CLOUD_REGION_ID) {
            self.region_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ALIBABA_CLOUD_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ALIBABA_CLOUD_ACCESS_KEY_SECRET) {
            self.access_key_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(ALIBABA_CLOUD_SECURITY_TOKEN) {
            self.security_token.get_or_insert(v);
        }

        self
    }

    /// Domain of the endpoint, falling back to the public Dysms endpoint.
    pub fn domain(&self) -> &str {
        self.domain.as_deref().unwrap_or(DEFAULT_DOMAIN)
    }

    /// Region used for requests that don't specify one.
    ///
    /// Empty or whitespace-only values fall back to the default region.
    pub fn region_id(&self) -> &str {
        match self.region_id.as_deref() {
            Some(v) if !v.trim().is_empty() => v,
            _ => DEFAULT_REGION_ID,
        }
    }

    /// Base url of the endpoint, for example `http://dysmsapi.aliyuncs.com/`.
    pub fn endpoint(&self) -> Result<String> {
        self.validate()?;
        Ok(format!("{}://{}/", self.protocol, self.domain()))
    }

    /// Check that the endpoint part of this config is usable.
    pub fn validate(&self) -> Result<()> {
        if self.protocol != "http" && self.protocol != "https" {
            return Err(Error::config_invalid(format!(
                "protocol must be http or https, got {:?}",
                self.protocol
            )));
        }
        let domain = self.domain();
        if domain.trim().is_empty() || domain.contains('/') {
            return Err(Error::config_invalid(format!(
                "domain must be a bare host name, got {domain:?}"
            )));
        }
        Ok(())
    }
}
