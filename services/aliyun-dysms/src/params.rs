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
use crate::encode::canonical_query_string;
use crate::{Credential, SendSmsRequest};
use reqsms_core::time::{format_iso8601, DateTime};
use reqsms_core::Result;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// ParameterSet is the full set of request parameters that takes part in the signature.
///
/// Names are unique and iterated in byte-wise ascending order, which is the order
/// the canonical query string requires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    params: BTreeMap<String, String>,
}

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble the complete parameter set for a `SendSms` call.
    ///
    /// This merges the business parameters of `req` with the system parameters
    /// derived from `cred`, `nonce` and `timestamp`. `default_region` is used when
    /// the request carries no usable region of its own.
    pub fn assemble(
        req: &SendSmsRequest,
        default_region: &str,
        cred: &Credential,
        nonce: &str,
        timestamp: DateTime,
    ) -> Result<Self> {
        Ok(req
            .business_params(default_region)?
            .with_system_params(cred, nonce, timestamp))
    }

    /// Parse an already encoded query string, such as the query of an unsigned request.
    pub fn from_query(query: &str) -> Self {
        form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// Add the system parameters required by the RPC signature.
    ///
    /// Existing values under the same names are replaced. Any `Signature` entry is
    /// dropped so that it can never become part of its own signing input.
    pub fn with_system_params(
        mut self,
        cred: &Credential,
        nonce: &str,
        timestamp: DateTime,
    ) -> Self {
        self.insert(KEY_SIGNATURE_METHOD, SIGNATURE_METHOD);
        self.insert(KEY_SIGNATURE_NONCE, nonce);
        self.insert(KEY_ACCESS_KEY_ID, cred.access_key_id.as_str());
        self.insert(KEY_SIGNATURE_VERSION, SIGNATURE_VERSION);
        self.insert(KEY_FORMAT, FORMAT);
        self.insert(KEY_TIMESTAMP, format_iso8601(timestamp));
        if let Some(token) = &cred.security_token {
            self.insert(KEY_SECURITY_TOKEN, token.as_str());
        }

        if self.remove(KEY_SIGNATURE).is_some() {
            log::debug!("dropped reserved parameter {KEY_SIGNATURE} before signing");
        }
        self
    }

    /// Insert a parameter, returning the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.params.insert(key.into(), value.into())
    }

    /// Get the value of a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Remove a parameter, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.params.remove(key)
    }

    /// Returns true if the set contains the parameter.
    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if the set contains no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over `(name, value)` pairs in byte-wise ascending order of names.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.params.iter(),
        }
    }

    /// Build the canonical query string of this set.
    pub fn canonical_query_string(&self) -> String {
        canonical_query_string(self)
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Iterator over the parameters of a [`ParameterSet`].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn fixed_time() -> DateTime {
        chrono::Utc
            .with_ymd_and_hms(2017, 7, 12, 2, 42, 19)
            .single()
            .expect("valid time")
    }

    #[test]
    fn test_with_system_params() {
        let cred = Credential::new("testId", "testSecret");
        let params = ParameterSet::new().with_system_params(
            &cred,
            "45e25e9b-0a6f-4070-8c85-2956eda1b466",
            fixed_time(),
        );

        assert_eq!(params.get(KEY_SIGNATURE_METHOD), Some("HMAC-SHA1"));
        assert_eq!(
            params.get(KEY_SIGNATURE_NONCE),
            Some("45e25e9b-0a6f-4070-8c85-2956eda1b466")
        );
        assert_eq!(params.get(KEY_ACCESS_KEY_ID), Some("testId"));
        assert_eq!(params.get(KEY_SIGNATURE_VERSION), Some("1.0"));
        assert_eq!(params.get(KEY_FORMAT), Some("XML"));
        assert_eq!(params.get(KEY_TIMESTAMP), Some("2017-07-12T02:42:19Z"));
        assert!(!params.contains_key(KEY_SECURITY_TOKEN));
        assert_eq!(params.len(), 6);
    }

    #[test]
    fn test_assemble() -> Result<()> {
        let req = SendSmsRequest::new("15300000001", "sign", "SMS_1")
            .with_template_param([("code", "1234")])
            .with_out_id("123");
        let cred = Credential::new("testId", "testSecret");

        let params = ParameterSet::assemble(&req, "", &cred, "nonce", fixed_time())?;

        assert_eq!(params.get(KEY_ACTION), Some("SendSMS"));
        assert_eq!(params.get(KEY_REGION_ID), Some("cn-hangzhou"));
        assert_eq!(params.get(KEY_TEMPLATE_PARAM), Some(r#"{"code":"1234"}"#));
        assert_eq!(params.get(KEY_OUT_ID), Some("123"));
        assert_eq!(params.get(KEY_ACCESS_KEY_ID), Some("testId"));
        assert_eq!(params.get(KEY_SIGNATURE_NONCE), Some("nonce"));
        assert_eq!(params.len(), 14);
        Ok(())
    }

    #[test]
    fn test_with_system_params_adds_security_token() {
        let mut cred = Credential::new("testId", "testSecret");
        cred.security_token = Some("sts-token".to_string());

        let params = ParameterSet::new().with_system_params(&cred, "nonce", fixed_time());
        assert_eq!(params.get(KEY_SECURITY_TOKEN), Some("sts-token"));
    }

    #[test]
    fn test_signature_is_never_kept() {
        let cred = Credential::new("testId", "testSecret");
        let params = ParameterSet::from_iter([(KEY_SIGNATURE, "forged"), ("PhoneNumbers", "1")])
            .with_system_params(&cred, "nonce", fixed_time());

        assert!(!params.contains_key(KEY_SIGNATURE));
        assert!(!params.canonical_query_string().contains("Signature="));
        assert_eq!(params.get("PhoneNumbers"), Some("1"));
    }

    #[test]
    fn test_system_params_override_caller_values() {
        let cred = Credential::new("testId", "testSecret");
        let params = ParameterSet::from_iter([(KEY_ACCESS_KEY_ID, "other"), (KEY_FORMAT, "JSON")])
            .with_system_params(&cred, "nonce", fixed_time());

        assert_eq!(params.get(KEY_ACCESS_KEY_ID), Some("testId"));
        assert_eq!(params.get(KEY_FORMAT), Some("XML"));
    }

    #[test]
    fn test_from_query_decodes_canonical_encoding() {
        let params = ParameterSet::from_query(
            "SignName=%E9%98%BF%E9%87%8C&TemplateParam=%7B%22a%22%3A%22x%20y%22%7D",
        );

        assert_eq!(params.get("SignName"), Some("阿里"));
        assert_eq!(params.get("TemplateParam"), Some("{\"a\":\"x y\"}"));
    }

    #[test]
    fn test_from_query_round_trips_canonical_query_string() {
        let params = ParameterSet::from_iter([("OutId", "a+b*c~d e"), ("SignName", "阿里云短信测试")]);

        assert_eq!(
            ParameterSet::from_query(&params.canonical_query_string()),
            params
        );
    }

    #[test]
    fn test_iter_is_sorted() {
        let params = ParameterSet::from_iter([
            ("Timestamp", "t"),
            ("Action", "a"),
            ("Format", "f"),
        ]);
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Action", "Format", "Timestamp"]);
    }
}
