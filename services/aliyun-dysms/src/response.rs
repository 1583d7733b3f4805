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

use quick_xml::de;
use reqsms_core::{Error, Result};
use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// Response returned by a `SendSms` call.
///
/// Dysms answers both accepted and rejected calls with an XML document.
/// Accepted calls carry `Code` `OK` and a `BizId`, rejected ones carry the
/// error code, message and a `Recommend` link for diagnosis.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SendSmsResponse {
    /// Id of this request assigned by the service.
    pub request_id: String,
    /// Receipt id for querying the delivery status.
    pub biz_id: String,
    /// Result code, `OK` on success.
    pub code: String,
    /// Human readable result message.
    pub message: String,
    /// Host that served this request, only set on errors.
    pub host_id: String,
    /// Diagnosis link, only set on errors.
    pub recommend: String,
}

impl SendSmsResponse {
    /// Parse a response body.
    pub fn parse(body: &[u8]) -> Result<Self> {
        let content = std::str::from_utf8(body).map_err(|e| {
            Error::response_invalid("dysms response is not valid utf-8").with_source(e)
        })?;
        if content.trim().is_empty() {
            return Err(Error::response_invalid("dysms response is empty"));
        }

        let resp = de::from_str(content).map_err(|e| {
            Error::response_invalid("failed to parse dysms response").with_source(e)
        })?;
        Ok(resp)
    }

    /// Check if the message has been accepted by the service.
    pub fn is_ok(&self) -> bool {
        self.code == "OK"
    }
}

impl Display for SendSmsResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "code: {}, message: {}, request_id: {}, biz_id: {}, host_id: {}, recommend: {}",
            self.code, self.message, self.request_id, self.biz_id, self.host_id, self.recommend
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reqsms_core::ErrorKind;

    #[test]
    fn test_parse_accepted_response() -> Result<()> {
        let content = r#"<?xml version='1.0' encoding='UTF-8'?>
<SendSmsResponse>
    <Message>OK</Message>
    <RequestId>F655A8D5-B967-440B-8683-DAD6FF8DE990</RequestId>
    <Code>OK</Code>
    <BizId>900619746936498440^0</BizId>
</SendSmsResponse>"#;

        let resp = SendSmsResponse::parse(content.as_bytes())?;

        assert!(resp.is_ok());
        assert_eq!(resp.request_id, "F655A8D5-B967-440B-8683-DAD6FF8DE990");
        assert_eq!(resp.biz_id, "900619746936498440^0");
        assert_eq!(resp.message, "OK");
        assert_eq!(resp.host_id, "");
        assert_eq!(
            resp.to_string(),
            "code: OK, message: OK, request_id: F655A8D5-B967-440B-8683-DAD6FF8DE990, biz_id: 900619746936498440^0, host_id: , recommend: "
        );
        Ok(())
    }

    #[test]
    fn test_parse_rejected_response() -> Result<()> {
        let content = r#"<Error>
    <RequestId>8906582E-6722-4B7F-B2A6-B6C2B86A4F67</RequestId>
    <HostId>dysmsapi.aliyuncs.com</HostId>
    <Code>SignatureDoesNotMatch</Code>
    <Message>Specified signature is not matched with our calculation.</Message>
    <Recommend>https://error-center.aliyun.com/status/search?Keyword=SignatureDoesNotMatch</Recommend>
</Error>"#;

        let resp = SendSmsResponse::parse(content.as_bytes())?;

        assert!(!resp.is_ok());
        assert_eq!(resp.code, "SignatureDoesNotMatch");
        assert_eq!(resp.host_id, "dysmsapi.aliyuncs.com");
        assert_eq!(resp.biz_id, "");
        assert_eq!(
            resp.recommend,
            "https://error-center.aliyun.com/status/search?Keyword=SignatureDoesNotMatch"
        );
        Ok(())
    }

    #[test]
    fn test_parse_invalid_response() {
        let bodies: [&[u8]; 4] = [
            b"",
            b"  \n",
            b"\xff\xfe",
            b"<SendSmsResponse><Code>OK</Message>",
        ];
        for body in bodies {
            let err = SendSmsResponse::parse(body).expect_err("invalid body must fail");
            assert_eq!(err.kind(), ErrorKind::ResponseInvalid);
        }
    }
}
