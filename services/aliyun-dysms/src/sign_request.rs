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
use crate::encode::percent_encode;
use crate::{Credential, ParameterSet};
use async_trait::async_trait;
use reqsms_core::hash::base64_hmac_sha1;
use reqsms_core::time::{now, DateTime};
use reqsms_core::{Context, Error, Result, SignRequest, SigningCredential};

/// RequestSigner signs Dysms requests with the RPC `HMAC-SHA1` signature.
///
/// The signer accepts an unsigned `GET` request carrying the business parameters
/// in its query, adds the system parameters, and rewrites the query into the
/// final signed form ending with `&Signature=...`.
#[derive(Debug, Default)]
pub struct RequestSigner {
    nonce: Option<String>,
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signature nonce.
    ///
    /// # Note
    ///
    /// Every request should carry a fresh nonce, otherwise the service rejects
    /// it as a replay. Only use this function for testing.
    pub fn with_nonce(mut self, nonce: &str) -> Self {
        self.nonce = Some(nonce.to_string());
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    fn get_nonce(&self) -> String {
        self.nonce
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
    }

    fn get_time(&self) -> DateTime {
        self.time.unwrap_or_else(now)
    }
}

/// Build the string to sign from a canonical query string.
pub fn build_string_to_sign(canonical_query: &str) -> String {
    format!(
        "{HTTP_METHOD}&{}&{}",
        percent_encode("/"),
        percent_encode(canonical_query)
    )
}

/// Compute the encoded signature of `string_to_sign`.
///
/// The HMAC key is the access key secret followed by `&`. The base64 digest is
/// percent encoded so it can be appended to the query as is.
pub fn sign(access_key_secret: &str, string_to_sign: &str) -> String {
    let key = format!("{access_key_secret}&");
    let digest = base64_hmac_sha1(key.as_bytes(), string_to_sign.as_bytes());
    percent_encode(&digest)
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential.filter(|c| c.is_valid()) else {
            return Err(Error::config_invalid(
                "access key id and access key secret are required to sign dysms requests",
            ));
        };

        if req.method != http::Method::GET {
            return Err(Error::request_invalid(format!(
                "dysms requests must use GET, got {}",
                req.method
            )));
        }

        if req.uri.authority().is_none() {
            return Err(Error::request_invalid(
                "dysms request uri must contain scheme and host",
            ));
        }

        if req.uri.path() != "/" {
            return Err(Error::request_invalid(format!(
                "dysms requests must target the root path, got {}",
                req.uri.path()
            )));
        }

        let params = ParameterSet::from_query(req.uri.query().unwrap_or_default())
            .with_system_params(cred, &self.get_nonce(), self.get_time());
        let canonical_query = params.canonical_query_string();
        let string_to_sign = build_string_to_sign(&canonical_query);
        let signature = sign(&cred.access_key_secret, &string_to_sign);
        log::debug!("calculated string to sign: {string_to_sign}");

        let mut parts = req.uri.clone().into_parts();
        let path_and_query = format!("/?{canonical_query}&{KEY_SIGNATURE}={signature}");
        parts.path_and_query = Some(path_and_query.try_into()?);
        req.uri = http::Uri::from_parts(parts)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, SendSmsRequest};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use reqsms_core::ErrorKind;

    const NONCE: &str = "45e25e9b-0a6f-4070-8c85-2956eda1b466";

    fn signing_time() -> DateTime {
        Utc.with_ymd_and_hms(2017, 7, 12, 2, 42, 19).unwrap()
    }

    fn signer() -> RequestSigner {
        RequestSigner::new()
            .with_nonce(NONCE)
            .with_time(signing_time())
    }

    fn unsigned_request() -> http::request::Parts {
        let req = SendSmsRequest::new("15300000001", "阿里云短信测试专用", "SMS_71390007")
            .with_template_param([("customer", "test")])
            .with_out_id("123")
            .build(&Config::default())
            .expect("request must be built");
        req.into_parts().0
    }

    #[test]
    fn test_sign_known_vector() {
        assert_eq!(
            sign("testsecret", "GET&%2F&AccessKeyId%3DABC"),
            "qS33JyMyWzYE9GRvK1BH2aZLsYQ%3D"
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let sts = build_string_to_sign("AccessKeyId=ABC&Action=SendSMS");
        assert_eq!(sign("secret", &sts), sign("secret", &sts));
        assert_ne!(sign("secret", &sts), sign("other", &sts));
    }

    #[test]
    fn test_build_string_to_sign() {
        assert_eq!(
            build_string_to_sign("AccessKeyId=ABC"),
            "GET&%2F&AccessKeyId%3DABC"
        );
        assert_eq!(
            build_string_to_sign("Timestamp=2017-07-12T02%3A42%3A19Z"),
            "GET&%2F&Timestamp%3D2017-07-12T02%253A42%253A19Z"
        );
        assert_eq!(build_string_to_sign(""), "GET&%2F&");
    }

    #[tokio::test]
    async fn test_sign_request() -> anyhow::Result<()> {
        let mut parts = unsigned_request();
        let cred = Credential::new("testId", "testSecret");

        signer()
            .sign_request(&Context::new(), &mut parts, Some(&cred))
            .await?;

        assert_eq!(
            parts.uri.to_string(),
            "http://dysmsapi.aliyuncs.com/?AccessKeyId=testId&Action=SendSMS&Format=XML&OutId=123&PhoneNumbers=15300000001&RegionId=cn-hangzhou&SignName=%E9%98%BF%E9%87%8C%E4%BA%91%E7%9F%AD%E4%BF%A1%E6%B5%8B%E8%AF%95%E4%B8%93%E7%94%A8&SignatureMethod=HMAC-SHA1&SignatureNonce=45e25e9b-0a6f-4070-8c85-2956eda1b466&SignatureVersion=1.0&TemplateCode=SMS_71390007&TemplateParam=%7B%22customer%22%3A%22test%22%7D&Timestamp=2017-07-12T02%3A42%3A19Z&Version=2017-05-25&Signature=3pPbC9ECVGTAD%2BKHeoluaqyGDcE%3D"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_request_with_security_token() -> anyhow::Result<()> {
        let mut parts = unsigned_request();
        let mut cred = Credential::new("testId", "testSecret");
        cred.security_token = Some("sts-token".to_string());

        signer()
            .sign_request(&Context::new(), &mut parts, Some(&cred))
            .await?;

        let query = parts.uri.query().expect("query must exist");
        assert!(query.contains("&SecurityToken=sts-token&"));
        assert!(query.ends_with("&Signature=IGZirTdOKN3l7iP2ar6dh4FgWpE%3D"));
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_request_drops_existing_signature() -> anyhow::Result<()> {
        let mut parts = unsigned_request();
        parts.uri = format!("{}&Signature=forged", parts.uri).parse()?;
        let cred = Credential::new("testId", "testSecret");

        signer()
            .sign_request(&Context::new(), &mut parts, Some(&cred))
            .await?;

        let query = parts.uri.query().expect("query must exist");
        assert_eq!(query.matches("Signature=").count(), 1);
        assert!(query.ends_with("&Signature=3pPbC9ECVGTAD%2BKHeoluaqyGDcE%3D"));
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_request_uses_fresh_nonce() -> anyhow::Result<()> {
        let signer = RequestSigner::new().with_time(signing_time());
        let cred = Credential::new("testId", "testSecret");

        let mut first = unsigned_request();
        signer
            .sign_request(&Context::new(), &mut first, Some(&cred))
            .await?;
        let mut second = unsigned_request();
        signer
            .sign_request(&Context::new(), &mut second, Some(&cred))
            .await?;

        let nonce = |parts: &http::request::Parts| {
            ParameterSet::from_query(parts.uri.query().unwrap_or_default())
                .get(KEY_SIGNATURE_NONCE)
                .map(|v| v.to_string())
        };
        assert!(nonce(&first).is_some());
        assert_ne!(nonce(&first), nonce(&second));
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_request_requires_credential() {
        let mut parts = unsigned_request();

        let err = signer()
            .sign_request(&Context::new(), &mut parts, None)
            .await
            .expect_err("missing credential must fail");
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);

        let cred = Credential::new("", "sk");
        let err = signer()
            .sign_request(&Context::new(), &mut parts, Some(&cred))
            .await
            .expect_err("empty access key id must fail");
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[tokio::test]
    async fn test_sign_request_rejects_non_get() {
        let mut parts = unsigned_request();
        parts.method = http::Method::POST;

        let cred = Credential::new("ak", "sk");
        let err = signer()
            .sign_request(&Context::new(), &mut parts, Some(&cred))
            .await
            .expect_err("POST must fail");
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }

    #[tokio::test]
    async fn test_sign_request_rejects_non_root_path() {
        let mut parts = unsigned_request();
        parts.uri = http::Uri::from_static("http://dysmsapi.aliyuncs.com/v1/sms?Action=SendSMS");
        let cred = Credential::new("ak", "sk");

        let err = signer()
            .sign_request(&Context::new(), &mut parts, Some(&cred))
            .await
            .expect_err("non root path must fail");
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        assert_eq!(parts.uri.path(), "/v1/sms");
    }

    #[tokio::test]
    async fn test_sign_request_requires_authority() {
        let (mut parts, _) = http::Request::get("/?Action=SendSMS")
            .body(())
            .unwrap()
            .into_parts();

        let cred = Credential::new("ak", "sk");
        let err = signer()
            .sign_request(&Context::new(), &mut parts, Some(&cred))
            .await
            .expect_err("relative uri must fail");
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }
}
