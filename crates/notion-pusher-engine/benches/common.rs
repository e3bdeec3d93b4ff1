// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_report(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str(
            "Findings with **bold claims**, `inline code`, the model $y = ax + b$ and a [source](https://example.com).\n\n",
        );
        for i in 0..3 {
            content.push_str(&format!("- Point {i} with _emphasis_\n  - Detail {i}\n"));
        }
        content.push('\n');
        content.push_str("| Metric | Value | Delta |\n|---|---:|---:|\n");
        for row in 0..5 {
            content.push_str(&format!("| m{row} | {row}.5 | $+{row}$ |\n"));
        }
        content.push('\n');
        if section % 3 == 0 {
            content.push_str(
                "```python\ndef fit(x):\n    return x * 2\n```\n\n$$\n\\sum_i x_i\n$$\n\n",
            );
        }
    }

    content
}

#[allow(dead_code)]
pub fn generate_inline_heavy(repeat: usize) -> String {
    "Text **bold _nested_ $x^2$** and `code $y$` then [link](u) plus ![img](v) end. ".repeat(repeat)
}
