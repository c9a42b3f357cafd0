//! Regex fallback aligner
//!
//! When no syntax tree is available, declarations are still aligned
//! line-by-line: each line is classified by a leading-keyword pattern and
//! rebuilt field-by-field against the same `Config` columns the tree
//! formatter uses. Comment, blank and control-keyword lines pass through
//! unchanged, as does any line the patterns fail to parse. This path never
//! errors.

use regex::Captures;

use crate::compile;
use crate::config::Config;
use crate::formatting::layout::{self, LineBuilder};

const SKIP: &str = r"^\s*($|//|/\*|\*|\)|`|(?:module|endmodule|begin|end|else|if|for|while|case|casex|casez|endcase|always|initial|function|endfunction|task|endtask|generate|endgenerate)\b)";

const PORT: &str = r"^\s*(input|output|inout)\b\s*(?:(wire|reg|logic|tri)\s+)?(?:(signed|unsigned)\s+)?(?:(\[[^\]]*\])\s*)?([A-Za-z_$][\w$]*(?:\s*,\s*[A-Za-z_$][\w$]*)*)\s*([;,])?\s*((?://|/\*).*)?$";

const SIGNAL: &str = r"^\s*(wire|reg|integer|logic|tri0|tri1|tri)\b\s*(?:(signed|unsigned)\s+)?(?:(\[[^\]]*\])\s*)?([A-Za-z_$][\w$]*(?:\s*,\s*[A-Za-z_$][\w$]*)*)\s*([;,])?\s*((?://|/\*).*)?$";

const PARAMETER: &str = r"^\s*(parameter|localparam)\b\s*(?:(signed|unsigned)\s+)?(?:(\[[^\]]*\])\s*)?([A-Za-z_$][\w$]*)\s*=\s*(.*?)\s*([;,])?\s*((?://|/\*).*)?$";

const ASSIGN: &str =
    r"^\s*assign\b\s+([A-Za-z_$][\w$\[\]\.\s,{}]*?)\s*=\s*(.+?)\s*;\s*((?://|/\*).*)?$";

const RANGE: &str = r"^\[\s*([^:\]]+?)\s*:\s*([^\]]+?)\s*\]$";

/// Align a whole buffer line by line.
pub fn align(input: &str, config: &Config) -> String {
    let aligned: Vec<String> = input
        .lines()
        .map(|line| align_line(line, config))
        .collect();

    let mut output = aligned.join("\n");
    if input.ends_with('\n') {
        output.push('\n');
    }
    output
}

/// Align one line, or return it unchanged when it is not a declaration the
/// patterns recognize.
pub fn align_line(line: &str, config: &Config) -> String {
    if compile!(SKIP).is_match(line) {
        return line.to_string();
    }
    if let Some(captures) = compile!(PORT).captures(line) {
        return rebuild_port(&captures, config);
    }
    if let Some(captures) = compile!(SIGNAL).captures(line) {
        return rebuild_signal(&captures, config);
    }
    if let Some(captures) = compile!(PARAMETER).captures(line) {
        return rebuild_parameter(&captures, config);
    }
    if let Some(captures) = compile!(ASSIGN).captures(line) {
        return rebuild_assign(&captures, config);
    }
    line.to_string()
}

fn rebuild_port(captures: &Captures, config: &Config) -> String {
    let mut line = LineBuilder::new(0);
    line.field(config.port_num1, &captures[1]);
    if let Some(net) = captures.get(2) {
        line.space();
        line.push(net.as_str());
    }
    if let Some(sign) = captures.get(3) {
        line.field(config.port_num2, sign.as_str());
    }
    if let Some(range) = captures.get(4) {
        line.field(config.port_num3, &rebuild_range(range.as_str(), config));
    }
    line.field(config.port_num4, &normalize_names(&captures[5]));
    match captures
        .get(6)
        .map(|m| m.as_str())
    {
        Some(";") => line.field(config.port_num5, ";"),
        Some(",") => line.push(","),
        _ => {}
    }
    finish(line, captures.get(7))
}

fn rebuild_signal(captures: &Captures, config: &Config) -> String {
    let mut line = LineBuilder::new(0);
    line.field(config.signal_num1, &captures[1]);
    if let Some(sign) = captures.get(2) {
        line.field(config.signal_num2, sign.as_str());
    }
    if let Some(range) = captures.get(3) {
        line.field(config.signal_num3, &rebuild_range(range.as_str(), config));
    }
    line.field(config.signal_num4, &normalize_names(&captures[4]));
    match captures
        .get(5)
        .map(|m| m.as_str())
    {
        Some(";") => line.field(config.signal_num5, ";"),
        Some(",") => line.push(","),
        _ => {}
    }
    finish(line, captures.get(6))
}

fn rebuild_parameter(captures: &Captures, config: &Config) -> String {
    let mut line = LineBuilder::new(0);
    line.field(config.param_num1, &captures[1]);
    if let Some(sign) = captures.get(2) {
        line.space();
        line.push(sign.as_str());
    }
    if let Some(range) = captures.get(3) {
        line.space();
        line.push(&rebuild_range(range.as_str(), config));
    }
    line.field(config.param_num2, &captures[4]);
    line.field(config.param_num3, "=");
    let value = &captures[5];
    if !value.is_empty() {
        line.push(" ");
        line.push(value);
    }
    match captures
        .get(6)
        .map(|m| m.as_str())
    {
        Some(";") => line.field(config.param_num4, ";"),
        Some(",") => line.push(","),
        _ => {}
    }
    finish(line, captures.get(7))
}

fn rebuild_assign(captures: &Captures, config: &Config) -> String {
    let mut line = LineBuilder::new(0);
    line.field(config.assign_num1, "assign");
    line.field(config.assign_num2, &captures[1]);
    line.push(" = ");
    line.push(&captures[2]);
    line.push(";");
    finish(line, captures.get(3))
}

fn finish(line: LineBuilder, comment: Option<regex::Match>) -> String {
    let mut output = line.into_string();
    if let Some(comment) = comment {
        output.push(' ');
        output.push_str(
            comment
                .as_str()
                .trim_end(),
        );
    }
    output
}

/// Re-apply the bit-range sub-layout so fallback and tree mode agree.
fn rebuild_range(text: &str, config: &Config) -> String {
    match compile!(RANGE).captures(text) {
        Some(captures) => layout::format_range(&captures[1], &captures[2], config),
        None => text.to_string(),
    }
}

fn normalize_names(names: &str) -> String {
    names
        .split(',')
        .map(str::trim)
        .collect::<Vec<&str>>()
        .join(", ")
}
