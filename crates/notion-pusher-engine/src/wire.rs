//! Serialization of parsed blocks into the block-document API shape.
//!
//! Every block becomes `{"object": "block", "type": <kind>, <kind>: {...}}`.
//! Runs are flattened: decorations turn into `annotations` flags on each text
//! object beneath them, and only set flags are written.

use serde::{
    Serialize, Serializer,
    ser::{SerializeMap, SerializeSeq},
};
use serde_json::Value;

use crate::parsing::{
    blocks::{Block, HeadingLevel, Row, Table},
    inline::Run,
};

/// Serializes a block list as one JSON array.
pub fn to_json(blocks: &[Block]) -> serde_json::Result<Value> {
    serde_json::to_value(blocks)
}

/// Serializes each top-level block separately, ready for batching.
pub fn to_values(blocks: &[Block]) -> serde_json::Result<Vec<Value>> {
    blocks.iter().map(serde_json::to_value).collect()
}

impl Block {
    /// The block's `type` discriminator.
    pub fn wire_type(&self) -> &'static str {
        match self {
            Block::Heading { level, .. } => match level {
                HeadingLevel::H1 => "heading_1",
                HeadingLevel::H2 => "heading_2",
                HeadingLevel::H3 => "heading_3",
            },
            Block::Paragraph { .. } => "paragraph",
            Block::BulletItem { .. } => "bulleted_list_item",
            Block::NumberedItem { .. } => "numbered_list_item",
            Block::Quote { .. } => "quote",
            Block::Divider => "divider",
            Block::CodeBlock { .. } => "code",
            Block::EquationBlock { .. } => "equation",
            Block::ImageBlock { .. } => "image",
            Block::Table(_) => "table",
        }
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let kind = self.wire_type();
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("object", "block")?;
        map.serialize_entry("type", kind)?;

        match self {
            Block::Heading { runs, .. } | Block::Paragraph { runs } | Block::Quote { runs } => {
                map.serialize_entry(
                    kind,
                    &TextPayload {
                        rich_text: RichText(runs),
                    },
                )?;
            }
            Block::BulletItem { runs, children } | Block::NumberedItem { runs, children } => {
                map.serialize_entry(
                    kind,
                    &ListPayload {
                        rich_text: RichText(runs),
                        children: (!children.is_empty()).then_some(children.as_slice()),
                    },
                )?;
            }
            Block::Divider => map.serialize_entry(kind, &Empty {})?,
            Block::CodeBlock { language, content } => {
                map.serialize_entry(
                    kind,
                    &CodePayload {
                        language,
                        rich_text: [WireRun::text(content, None, Annotations::default())],
                    },
                )?;
            }
            Block::EquationBlock { expression } => {
                map.serialize_entry(kind, &Expression { expression })?
            }
            Block::ImageBlock { url } => {
                map.serialize_entry(
                    kind,
                    &ImagePayload {
                        source: "external",
                        external: Url { url },
                    },
                )?;
            }
            Block::Table(table) => map.serialize_entry(kind, &TablePayload::new(table))?,
        }

        map.end()
    }
}

/// A run list in `rich_text` form.
pub struct RichText<'a>(pub &'a [Run]);

impl Serialize for RichText<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut flat = Vec::with_capacity(self.0.len());
        flatten(self.0, Annotations::default(), &mut flat);

        let mut seq = serializer.serialize_seq(Some(flat.len()))?;
        for run in &flat {
            seq.serialize_element(run)?;
        }
        seq.end()
    }
}

fn flatten<'a>(runs: &'a [Run], deco: Annotations, out: &mut Vec<WireRun<'a>>) {
    for run in runs {
        match run {
            Run::Text(text) => out.push(WireRun::text(text, None, deco)),
            Run::Code(code) => out.push(WireRun::text(
                code,
                None,
                Annotations {
                    code: true,
                    ..deco
                },
            )),
            Run::Link { text, url } => {
                let url = (!url.is_empty()).then_some(url.as_str());
                out.push(WireRun::text(text, url, deco));
            }
            // Equations cannot carry annotations.
            Run::Equation(expression) => out.push(WireRun::Equation {
                equation: Expression { expression },
            }),
            Run::Bold(inner) => flatten(
                inner,
                Annotations {
                    bold: true,
                    ..deco
                },
                out,
            ),
            Run::Italic(inner) => flatten(
                inner,
                Annotations {
                    italic: true,
                    ..deco
                },
                out,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
struct Annotations {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    bold: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    italic: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    code: bool,
}

impl Annotations {
    fn is_plain(&self) -> bool {
        *self == Annotations::default()
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WireRun<'a> {
    Text {
        text: TextContent<'a>,
        #[serde(skip_serializing_if = "Annotations::is_plain")]
        annotations: Annotations,
    },
    Equation {
        equation: Expression<'a>,
    },
}

impl<'a> WireRun<'a> {
    fn text(content: &'a str, link: Option<&'a str>, annotations: Annotations) -> Self {
        WireRun::Text {
            text: TextContent {
                content,
                link: link.map(|url| Url { url }),
            },
            annotations,
        }
    }
}

#[derive(Serialize)]
struct TextContent<'a> {
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<Url<'a>>,
}

#[derive(Serialize)]
struct Url<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct Expression<'a> {
    expression: &'a str,
}

#[derive(Serialize)]
struct Empty {}

#[derive(Serialize)]
struct TextPayload<'a> {
    rich_text: RichText<'a>,
}

#[derive(Serialize)]
struct ListPayload<'a> {
    rich_text: RichText<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<&'a [Block]>,
}

#[derive(Serialize)]
struct CodePayload<'a> {
    language: &'a str,
    rich_text: [WireRun<'a>; 1],
}

#[derive(Serialize)]
struct ImagePayload<'a> {
    #[serde(rename = "type")]
    source: &'static str,
    external: Url<'a>,
}

#[derive(Serialize)]
struct TablePayload<'a> {
    table_width: usize,
    has_column_header: bool,
    has_row_header: bool,
    children: Vec<TableRow<'a>>,
}

impl<'a> TablePayload<'a> {
    fn new(table: &'a Table) -> Self {
        Self {
            table_width: table.column_count,
            has_column_header: false,
            has_row_header: false,
            children: table.rows.iter().map(TableRow).collect(),
        }
    }
}

struct TableRow<'a>(&'a Row);

impl Serialize for TableRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Cells<'a> {
            cells: Vec<RichText<'a>>,
        }

        let cells = self.0.cells.iter().map(|c| RichText(c.as_slice())).collect();
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("object", "block")?;
        map.serialize_entry("type", "table_row")?;
        map.serialize_entry("table_row", &Cells { cells })?;
        map.end()
    }
}
