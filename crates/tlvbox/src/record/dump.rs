//! Human-readable renderings of a [`RecordView`], for debugging only.

use std::fmt::{self, Display};

use serde_json::{json, Value};
use tlvbox_buffers::print_octets_default;

use crate::error::Result;
use crate::record::view::RecordView;

const INDENT: &str = "    ";

fn field<T: Display>(value: Result<Option<T>>) -> String {
    match value {
        Ok(Some(value)) => value.to_string(),
        Ok(None) => "<none>".to_owned(),
        Err(err) => format!("<error: {err}>"),
    }
}

fn json_field<T: Into<Value>>(value: Result<Option<T>>) -> Value {
    match value {
        Ok(value) => value.map_or(Value::Null, Into::into),
        Err(err) => json!({ "error": err.to_string() }),
    }
}

impl RecordView {
    /// Indented multi-line rendering of every field, recursing into nested
    /// records.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.write_dump(&mut out, "");
        out
    }

    fn write_dump(&self, out: &mut String, prefix: &str) {
        let length = self.pic_data().map(<[u8]>::len);
        out.push_str(&format!("{prefix}length: {}\n", field(Ok(length))));
        out.push_str(&format!("{prefix}pixel: {}\n", field(self.pixel_format())));
        out.push_str(&format!("{prefix}time: {}\n", field(self.pic_time())));
        out.push_str(&format!("{prefix}url: {}\n", field(self.play_url())));
        out.push_str(&format!("{prefix}alias: {}\n", field(self.play_alias())));
        out.push_str(&format!("{prefix}channel: {}\n", field(self.play_channel())));
        out.push_str(&format!("{prefix}name: {}\n", field(self.person_name())));
        out.push_str(&format!("{prefix}id: {}\n", field(self.person_id())));
        out.push_str(&format!("{prefix}score: {}\n", field(self.person_score())));

        match self.rects() {
            Ok(rects) if rects.is_empty() => {
                out.push_str(&format!("{prefix}rectangles: <empty>\n"));
            }
            Ok(rects) => {
                out.push_str(&format!("{prefix}rectangles:\n"));
                for r in rects {
                    out.push_str(&format!(
                        "{prefix}  - x={}, y={}, w={}, h={}\n",
                        r.x, r.y, r.w, r.h
                    ));
                }
            }
            Err(err) => out.push_str(&format!("{prefix}rectangles: <error: {err}>\n")),
        }

        match self.recognitions() {
            Ok(children) if children.is_empty() => {
                out.push_str(&format!("{prefix}recognizes: <empty>\n"));
            }
            Ok(children) => {
                out.push_str(&format!("{prefix}recognizes:\n"));
                let nested = format!("{prefix}{INDENT}");
                for child in &children {
                    child.write_dump(out, &nested);
                }
            }
            Err(err) => out.push_str(&format!("{prefix}recognizes: <error: {err}>\n")),
        }
    }

    /// Structured rendering of the same fields as [`dump`](Self::dump).
    ///
    /// Picture data is summarised as its length and a hex preview. Fields
    /// that fail to decode become `{"error": "..."}`.
    pub fn to_json(&self) -> Value {
        let pic_data = self.pic_data().map_or(Value::Null, |data| {
            json!({ "len": data.len(), "preview": print_octets_default(data) })
        });
        let rects = match self.rects() {
            Ok(rects) => json!(rects),
            Err(err) => json!({ "error": err.to_string() }),
        };
        let recognitions = match self.recognitions() {
            Ok(children) => Value::Array(children.iter().map(RecordView::to_json).collect()),
            Err(err) => json!({ "error": err.to_string() }),
        };
        json!({
            "pic_data": pic_data,
            "pixel_format": json_field(self.pixel_format()),
            "pic_time": json_field(self.pic_time()),
            "play_url": json_field(self.play_url()),
            "play_alias": json_field(self.play_alias()),
            "play_channel": json_field(self.play_channel()),
            "person_name": json_field(self.person_name()),
            "person_id": json_field(self.person_id()),
            "person_score": json_field(self.person_score()),
            "rects": rects,
            "recognitions": recognitions,
        })
    }
}

impl Display for RecordView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}
