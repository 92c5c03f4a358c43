/// Implementation of `cdpart dump`.
///
/// Serialises the decoded parts as a JSON array, one object per part:
///
/// ```json
/// [
///   { "type": "HOSTNAME", "code": 0, "length": 14, "text": "localhost" },
///   { "type": "TIME_HR", "code": 8, "length": 12, "number": 1419765641 },
///   { "type": "VALUES", "code": 6, "length": 15,
///     "values": [ { "kind": "derive", "value": 1024.0 } ] }
/// ]
/// ```
use anyhow::{Context, Result};
use collectd_types::{Part, Value};
use serde::Serialize;

use crate::{DumpArgs, Options};

#[derive(Serialize)]
struct PartRecord<'a> {
    #[serde(rename = "type")]
    part_type: &'static str,
    code: u16,
    length: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<Vec<ValueRecord>>,
}

#[derive(Serialize)]
struct ValueRecord {
    kind: &'static str,
    value: f64,
}

impl<'a> From<&'a Part> for PartRecord<'a> {
    fn from(part: &'a Part) -> Self {
        let header = part.header();
        let mut record = Self {
            part_type: part.part_type().label(),
            code: header.type_code,
            length: header.length,
            text: None,
            number: None,
            values: None,
        };
        match part {
            Part::Text(p) => record.text = Some(p.text.as_str()),
            Part::Number(p) => record.number = Some(p.value),
            Part::HighResNumber(p) => record.number = Some(p.value),
            Part::ValueList(p) => {
                record.values = Some(p.values.iter().map(ValueRecord::from).collect());
            }
        }
        record
    }
}

impl From<&Value> for ValueRecord {
    fn from(value: &Value) -> Self {
        Self {
            kind: value.kind().label(),
            value: value.as_f64(),
        }
    }
}

pub fn run(args: &DumpArgs, options: &Options) -> Result<()> {
    let (_, parts) = options.load(&args.file)?;
    let records: Vec<PartRecord<'_>> = parts.iter().map(PartRecord::from).collect();

    let json = if args.pretty {
        serde_json::to_string_pretty(&records)
    } else {
        serde_json::to_string(&records)
    }
    .context("failed to serialise parts")?;

    println!("{json}");
    Ok(())
}
