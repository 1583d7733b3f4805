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
use crate::{Config, ParameterSet};
use bytes::Bytes;
use reqsms_core::{Error, Result};
use std::collections::BTreeMap;

/// SendSmsRequest carries the business inputs of a `SendSms` call.
///
/// ```
/// use reqsms_aliyun_dysms::SendSmsRequest;
///
/// let req = SendSmsRequest::new("15300000001", "阿里云短信测试", "SMS_71390007")
///     .with_template_param([("code", "1234")])
///     .with_out_id("order-42");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendSmsRequest {
    /// Receiving phone numbers, comma separated for batch sending.
    pub phone_numbers: String,
    /// Approved signature name shown to the receiver.
    pub sign_name: String,
    /// Approved template code.
    pub template_code: String,
    /// Variables of the template, sent as a JSON object.
    pub template_param: Option<BTreeMap<String, String>>,
    /// Caller side serial number echoed back in receipts.
    pub out_id: Option<String>,
    /// Upstream extension code.
    pub sms_up_extend_code: Option<String>,
    /// Region of this request, overriding the region of the [`Config`].
    pub region_id: Option<String>,
}

impl SendSmsRequest {
    /// Create a request with the required business inputs.
    pub fn new(phone_numbers: &str, sign_name: &str, template_code: &str) -> Self {
        Self {
            phone_numbers: phone_numbers.to_string(),
            sign_name: sign_name.to_string(),
            template_code: template_code.to_string(),
            ..Default::default()
        }
    }

    /// Set the template variables.
    pub fn with_template_param<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.template_param = Some(
            params
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Set the out id.
    pub fn with_out_id(mut self, out_id: &str) -> Self {
        self.out_id = Some(out_id.to_string());
        self
    }

    /// Set the upstream extension code.
    pub fn with_sms_up_extend_code(mut self, code: &str) -> Self {
        self.sms_up_extend_code = Some(code.to_string());
        self
    }

    /// Set the region of this request.
    pub fn with_region_id(mut self, region_id: &str) -> Self {
        self.region_id = Some(region_id.to_string());
        self
    }

    /// Build the business parameters of this request.
    ///
    /// The request region wins over `default_region` unless it is empty or only
    /// whitespace. A blank `default_region` falls back to `cn-hangzhou`.
    pub fn business_params(&self, default_region: &str) -> Result<ParameterSet> {
        let region_id = [self.region_id.as_deref(), Some(default_region)]
            .into_iter()
            .flatten()
            .find(|v| !v.trim().is_empty())
            .unwrap_or(DEFAULT_REGION_ID);

        let mut params = ParameterSet::from_iter([
            (KEY_ACTION, ACTION_SEND_SMS),
            (KEY_VERSION, API_VERSION),
            (KEY_REGION_ID, region_id),
            (KEY_PHONE_NUMBERS, self.phone_numbers.as_str()),
            (KEY_SIGN_NAME, self.sign_name.as_str()),
            (KEY_TEMPLATE_CODE, self.template_code.as_str()),
        ]);

        if let Some(template_param) = &self.template_param {
            let value = serde_json::to_string(template_param).map_err(|e| {
                Error::serialization("failed to serialize template param").with_source(e)
            })?;
            params.insert(KEY_TEMPLATE_PARAM, value);
        }
        if let Some(out_id) = self.out_id.as_deref().filter(|v| !v.is_empty()) {
            params.insert(KEY_OUT_ID, out_id);
        }
        if let Some(code) = self.sms_up_extend_code.as_deref().filter(|v| !v.is_empty()) {
            params.insert(KEY_SMS_UP_EXTEND_CODE, code);
        }

        Ok(params)
    }

    /// Build the unsigned `GET` request for `config`'s endpoint.
    ///
    /// The request still needs to be signed by [`RequestSigner`](crate::RequestSigner)
    /// before it can be sent.
    pub fn build(&self, config: &Config) -> Result<http::Request<Bytes>> {
        let endpoint = config.endpoint()?;
        let params = self.business_params(config.region_id())?;
        let query = params.canonical_query_string();

        Ok(http::Request::get(format!("{endpoint}?{query}")).body(Bytes::new())?)
    }
}
