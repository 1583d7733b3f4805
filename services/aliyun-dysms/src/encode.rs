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

//! Canonical percent-encoding used by the Aliyun POP RPC signature.

use crate::ParameterSet;

/// Percent-encode a value the way Aliyun POP RPC signatures expect.
///
/// The value is first serialized as `application/x-www-form-urlencoded`, then
/// three substitutions are applied on the output:
///
/// - `+` becomes `%20`
/// - `*` becomes `%2A`
/// - `%7E` becomes `~`
///
/// The result only leaves `A-Z a-z 0-9 - _ . ~` unescaped and uses upper case hex
/// digits. Every place that encodes something for the signature (query names and
/// values, the path, the string to sign and the signature itself) goes through here.
pub fn percent_encode(value: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(value.as_bytes()).collect();
    encoded
        .replace('+', "%20")
        .replace('*', "%2A")
        .replace("%7E", "~")
}

/// Build the canonical query string of a parameter set.
///
/// Pairs are emitted in byte-wise ascending order of their raw names as
/// `name=value` with both sides encoded by [`percent_encode`], then joined by `&`.
/// An empty set yields an empty string.
pub fn canonical_query_string(params: &ParameterSet) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
