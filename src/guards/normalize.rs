/// Normalize free text while keeping its line structure.
///
/// The steps run in this order:
/// 1. `\r\n` and lone `\r` become `\n`
/// 2. the whole value is trimmed
/// 3. runs of whitespace other than `\n` become a single space
/// 4. runs of blank lines collapse into one line break
/// 5. every line is trimmed
///
/// Callers must have checked the encoding already; the field pipelines take
/// raw bytes and only call this once they hold a `&str`.
pub fn normalize(raw: &str) -> String {
    let unified = unify_line_breaks(raw);
    let trimmed = unified.trim();

    let mut lines: Vec<String> = Vec::new();
    for line in trimmed.split('\n') {
        let collapsed = collapse_inline_whitespace(line);
        let line = collapsed.trim();
        // a whitespace-only line is blank; dropping it merges the run of
        // breaks around it into one
        if line.is_empty() {
            continue;
        }
        lines.push(line.to_string());
    }

    lines.join("\n")
}

fn unify_line_breaks(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n")
}

fn collapse_inline_whitespace(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_run = false;
    for c in line.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}
