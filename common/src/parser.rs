//! APIレスポンスパーサー
//!
//! 解析サーバーのJSONレスポンスを設定されたスキーマで読み、
//! `SummaryPayload` に正規化する。

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::config::ResponseSchema;
use crate::error::{Error, Result};
use crate::types::{SummaryEntry, SummaryPayload};

/// 現在サポートしているcanonicalスキーマのバージョン
pub const SCHEMA_VERSION: u32 = 1;

/// `{ label: text }` を出現順のまま読むためのラッパー
#[derive(Debug, Default)]
struct OrderedEntries(Vec<SummaryEntry>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of label to summary text")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((label, text)) = map.next_entry::<String, String>()? {
                    entries.push(SummaryEntry { label, text });
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[derive(Deserialize)]
struct CanonicalResponse {
    schema_version: Option<u32>,
    final_summary: Option<String>,
    section_summaries: Option<OrderedEntries>,
    image_summaries: Option<OrderedEntries>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LegacyBody {
    Text(String),
    Sections(OrderedEntries),
}

#[derive(Deserialize)]
struct LegacyResponse {
    summaries: Option<LegacyBody>,
    summary: Option<LegacyBody>,
}

/// レスポンス本文をパース
///
/// # Arguments
/// * `body` - レスポンス本文（JSON）
/// * `schema` - 設定されたスキーマ
///
/// # Returns
/// * `Ok(SummaryPayload)` - パース成功
/// * `Err` - JSONが不正、必須フィールドがない、または未対応のバージョン
///
/// # Examples
/// ```
/// use paper_summary_common::{parse_response, ResponseSchema};
///
/// let body = r#"{"final_summary": "A short paper."}"#;
/// let payload = parse_response(body, ResponseSchema::Canonical).unwrap();
/// assert_eq!(payload.final_summary.as_deref(), Some("A short paper."));
/// ```
pub fn parse_response(body: &str, schema: ResponseSchema) -> Result<SummaryPayload> {
    match schema {
        ResponseSchema::Canonical => parse_canonical(body),
        ResponseSchema::Legacy => parse_legacy(body),
    }
}

fn parse_canonical(body: &str) -> Result<SummaryPayload> {
    let response: CanonicalResponse = serde_json::from_str(body.trim())
        .map_err(|e| Error::Parse(format!("canonical response: {}", e)))?;

    let version = response.schema_version.unwrap_or(SCHEMA_VERSION);
    if version != SCHEMA_VERSION {
        return Err(Error::UnsupportedSchema(version));
    }

    Ok(SummaryPayload {
        final_summary: response.final_summary,
        section_summaries: response.section_summaries.unwrap_or_default().0,
        image_summaries: response.image_summaries.unwrap_or_default().0,
    })
}

fn parse_legacy(body: &str) -> Result<SummaryPayload> {
    let response: LegacyResponse = serde_json::from_str(body.trim())
        .map_err(|e| Error::Parse(format!("legacy response: {}", e)))?;

    // `summaries` が後期の形式
    let body = response
        .summaries
        .or(response.summary)
        .ok_or_else(|| Error::Parse("legacy response: missing `summaries`".into()))?;

    Ok(match body {
        LegacyBody::Text(text) => SummaryPayload {
            final_summary: Some(text),
            ..Default::default()
        },
        LegacyBody::Sections(entries) => SummaryPayload {
            section_summaries: entries.0,
            ..Default::default()
        },
    })
}
