//! Integration tests for the parsing module.
//!
//! Fixtures (.md) live in `fixtures/` and are checked against the output
//! invariants plus a few structural expectations.


use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::{Block, HeadingLevel},
    diagnostics::DiagnosticKind,
    inline::{Run, tokenize},
    parse_document, parse_lines, split_lines,
};

fn text(s: &str) -> Run {
    Run::text(s)
}

fn load_fixture(name: &str) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap()
}

// Scenarios

#[test]
fn heading_and_inline_paragraph() {
    let doc = parse_document("# Title\n\nSome **bold** and $x^2$ text.");
    insta::assert_debug_snapshot!(doc.blocks, @r#"
    [
        Heading {
            level: H1,
            runs: [
                Text(
                    "Title",
                ),
            ],
        },
        Paragraph {
            runs: [
                Text(
                    "Some ",
                ),
                Bold(
                    [
                        Text(
                            "bold",
                        ),
                    ],
                ),
                Text(
                    " and ",
                ),
                Equation(
                    "x^2",
                ),
                Text(
                    " text.",
                ),
            ],
        },
    ]
    "#);
}

#[test]
fn table_separator_row_dropped() {
    let doc = parse_document("| A | B |\n|---|---|\n| 1 | 2 |");
    assert_eq!(doc.blocks.len(), 1);
    let Block::Table(table) = &doc.blocks[0] else {
        panic!("expected table, got {:?}", doc.blocks[0]);
    };
    assert_eq!(table.column_count, 2);
    let cells: Vec<Vec<Vec<Run>>> = table.rows.iter().map(|r| r.cells.clone()).collect();
    assert_eq!(
        cells,
        vec![
            vec![vec![text("A")], vec![text("B")]],
            vec![vec![text("1")], vec![text("2")]],
        ]
    );
}

#[test]
fn fenced_code_with_language() {
    let doc = parse_document("```python\nprint(1)\n```");
    assert_eq!(
        doc.blocks,
        vec![Block::CodeBlock {
            language: "python".into(),
            content: "print(1)".into()
        }]
    );
}

#[test]
fn indented_bullet_nests() {
    let doc = parse_document("- Item\n  - Child");
    assert_eq!(
        doc.blocks,
        vec![Block::BulletItem {
            runs: vec![text("Item")],
            children: vec![Block::BulletItem {
                runs: vec![text("Child")],
                children: vec![]
            }]
        }]
    );
}

#[test]
fn table_at_end_of_input_is_flushed() {
    let doc = parse_document("Intro\n| a | b |\n| c | d |");
    assert_eq!(doc.blocks.len(), 2);
    assert!(matches!(
        &doc.blocks[1],
        Block::Table(t) if t.rows.len() == 2
    ));
    assert!(doc.diagnostics.is_empty());
}

// Properties

#[test]
fn parsing_is_deterministic() {
    let md = load_fixture("research_report");
    assert_eq!(parse_document(&md), parse_document(&md));
}

#[test]
fn heading_level_is_depth_capped_at_three() {
    for depth in 1..=8 {
        let line = format!("{} Heading", "#".repeat(depth));
        let doc = parse_lines(&[line]);
        let Block::Heading { level, runs } = &doc.blocks[0] else {
            panic!("depth {depth} did not produce a heading");
        };
        assert_eq!(level.depth() as usize, depth.min(3));
        assert_eq!(runs, &vec![text("Heading")]);
    }
}

#[test]
fn code_span_content_is_preserved() {
    for inner in ["$x$", "[a](b)", "**b**", "_i_", "a | b", " spaced "] {
        let runs = tokenize(&format!("`{inner}`"));
        assert_eq!(runs, vec![Run::Code(inner.to_string())], "inner: {inner:?}");
    }
}

#[test]
fn bold_plain_text_is_verbatim() {
    for inner in ["x", "two words", "a-b_c", "数式"] {
        let runs = tokenize(&format!("**{inner}**"));
        assert_eq!(runs, vec![Run::Bold(vec![text(inner)])], "inner: {inner:?}");
    }
}

#[test]
fn table_width_is_widest_row() {
    let doc = parse_document("| a |\n| b | c | d |\n| e | f |");
    let Block::Table(table) = &doc.blocks[0] else {
        panic!("expected table");
    };
    assert_eq!(table.column_count, 3);
    invariants::check(&doc);
}

// Whole documents

#[test]
fn fixture_research_report() {
    let doc = parse_document(&load_fixture("research_report"));
    invariants::check(&doc);

    let kinds: Vec<&str> = doc
        .blocks
        .iter()
        .map(|b| match b {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::BulletItem { .. } => "bullet",
            Block::NumberedItem { .. } => "numbered",
            Block::Quote { .. } => "quote",
            Block::Divider => "divider",
            Block::CodeBlock { .. } => "code",
            Block::EquationBlock { .. } => "equation",
            Block::ImageBlock { .. } => "image",
            Block::Table(_) => "table",
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            "heading", "paragraph", "heading", "table", "heading", "numbered", "numbered",
            "equation", "quote", "image", "code", "divider", "heading", "paragraph",
        ]
    );

    let Block::Table(table) = &doc.blocks[3] else {
        panic!("expected table");
    };
    assert_eq!(table.column_count, 3);
    assert_eq!(table.rows.len(), 4);
    assert_eq!(table.rows[3].cells[0], vec![text("Users")]);

    assert_eq!(doc.blocks[5].children().len(), 1);
    assert_eq!(doc.blocks[6].children().len(), 2);
    assert_eq!(
        doc.blocks[7],
        Block::EquationBlock {
            expression: r"\hat{\beta} = (X^T X)^{-1} X^T y".into()
        }
    );
    assert_eq!(
        doc.blocks[12],
        Block::Heading {
            level: HeadingLevel::H3,
            runs: vec![text("Appendix")]
        }
    );

    let noise: Vec<_> = doc
        .diagnostics
        .iter()
        .filter(|d| d.kind == DiagnosticKind::NoiseRemoved)
        .collect();
    assert_eq!(noise.len(), 1);
    assert_eq!(noise[0].line, 15);
}

#[test]
fn first_numbered_item_has_noise_removed() {
    let doc = parse_document(&load_fixture("research_report"));
    assert_eq!(
        doc.blocks[5].runs(),
        Some(&[text("Collect samples")][..])
    );
}

// Edge cases

#[test]
fn empty_document() {
    assert!(parse_document("").is_empty());
}

#[test]
fn blank_lines_only() {
    let doc = parse_document("\n\n   \n\t\n");
    assert!(doc.blocks.is_empty());
    assert!(doc.diagnostics.is_empty());
}

#[test]
fn crlf_line_endings() {
    let doc = parse_document("# A\r\n\r\ntext\r\n");
    assert_eq!(doc.blocks.len(), 2);
    assert_eq!(
        doc.blocks[1],
        Block::Paragraph {
            runs: vec![text("text")]
        }
    );
}

#[test]
fn split_lines_keeps_empty_lines() {
    assert_eq!(split_lines("a\r\n\nb"), vec!["a", "", "b"]);
}

#[test]
fn empty_quote_lines_are_skipped() {
    let doc = parse_document("> Quote\n>\n> \nNormal text");
    assert_eq!(
        doc.blocks,
        vec![
            Block::Quote {
                runs: vec![text("Quote")]
            },
            Block::Paragraph {
                runs: vec![text("Normal text")]
            },
        ]
    );
}

#[test]
fn zero_width_spaces_removed_from_paragraph() {
    let doc = parse_document("Text with\u{200B} zero width space");
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph {
            runs: vec![text("Text with zero width space")]
        }]
    );
}

#[test]
fn mixed_noise_cleaned() {
    let doc = parse_document("Value: 1111\n｜ A ｜ B ｜\n\u{200B}Text");
    assert_eq!(
        doc.blocks[0],
        Block::Paragraph {
            runs: vec![text("Value:")]
        }
    );
    assert!(matches!(
        &doc.blocks[1],
        Block::Table(t) if t.column_count == 2
    ));
    assert_eq!(
        doc.blocks[2],
        Block::Paragraph {
            runs: vec![text("Text")]
        }
    );
    assert_eq!(doc.diagnostics.len(), 1);
    assert_eq!(
        doc.diagnostics[0].message,
        "removed noise '1111' from line: 'Value: 1111...'"
    );
}

#[test]
fn inline_image_in_paragraph_stays_text() {
    let doc = parse_document("See ![x](u) here");
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph {
            runs: vec![text("See "), text("![x](u)"), text(" here")]
        }]
    );
}

#[test]
fn unterminated_constructs_report_opening_line() {
    let doc = parse_document("a\n\n$$\nx + y");
    assert_eq!(doc.diagnostics.len(), 1);
    assert_eq!(
        doc.diagnostics[0].kind,
        DiagnosticKind::UnterminatedEquation
    );
    assert_eq!(doc.diagnostics[0].line, 3);
}
