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

// Env values used in aliyun services.
pub const ALIBABA_CLOUD_ACCESS_KEY_ID: &str = "ALIBABA_CLOUD_ACCESS_KEY_ID";
pub const ALIBABA_CLOUD_ACCESS_KEY_SECRET: &str = "ALIBABA_CLOUD_ACCESS_KEY_SECRET";
pub const ALIBABA_CLOUD_SECURITY_TOKEN: &str = "ALIBABA_CLOUD_SECURITY_TOKEN";
pub const ALIBABA_CLOUD_REGION_ID: &str = "ALIBABA_CLOUD_REGION_ID";
pub const ALIBABA_CLOUD_DYSMS_ENDPOINT: &str = "ALIBABA_CLOUD_DYSMS_ENDPOINT";

// System parameter keys.
pub const KEY_SIGNATURE_METHOD: &str = "SignatureMethod";
pub const KEY_SIGNATURE_NONCE: &str = "SignatureNonce";
pub const KEY_ACCESS_KEY_ID: &str = "AccessKeyId";
pub const KEY_SIGNATURE_VERSION: &str = "SignatureVersion";
pub const KEY_TIMESTAMP: &str = "Timestamp";
pub const KEY_FORMAT: &str = "Format";
pub const KEY_SECURITY_TOKEN: &str = "SecurityToken";

// Business parameter keys.
pub const KEY_ACTION: &str = "Action";
pub const KEY_VERSION: &str = "Version";
pub const KEY_REGION_ID: &str = "RegionId";
pub const KEY_PHONE_NUMBERS: &str = "PhoneNumbers";
pub const KEY_SIGN_NAME: &str = "SignName";
pub const KEY_TEMPLATE_CODE: &str = "TemplateCode";
pub const KEY_TEMPLATE_PARAM: &str = "TemplateParam";
pub const KEY_OUT_ID: &str = "OutId";
pub const KEY_SMS_UP_EXTEND_CODE: &str = "SmsUpExtendCode";

/// Reserved key that must never take part in its own signing input.
pub const KEY_SIGNATURE: &str = "Signature";

pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
pub const SIGNATURE_VERSION: &str = "1.0";
pub const FORMAT: &str = "XML";
pub const ACTION_SEND_SMS: &str = "SendSMS";
pub const API_VERSION: &str = "2017-05-25";

/// The only method the RPC signature is computed for.
pub const HTTP_METHOD: &str = "GET";

pub const DEFAULT_REGION_ID: &str = "cn-hangzhou";
pub const DEFAULT_DOMAIN: &str = "dysmsapi.aliyuncs.com";
pub const DEFAULT_PROTOCOL: &str = "http";
