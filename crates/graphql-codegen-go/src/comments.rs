pub(crate) const INDENT: &str = "\t";

/// Indents every non-empty line of `text` by `level` tabs.
pub fn indent(text: &str, level: usize) -> String {
    let prefix = INDENT.repeat(level);
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a GraphQL description as a block of Go line comments, one per
/// description line, terminated by a newline. Missing or blank descriptions
/// render as the empty string.
pub fn transform_comment(description: Option<&str>, indent_level: usize) -> String {
    let description = match description.map(str::trim) {
        Some(desc) if !desc.is_empty() => desc,
        _ => return String::new(),
    };

    let prefix = INDENT.repeat(indent_level);
    let mut comment = String::new();
    for line in description.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            comment.push_str(&format!("{prefix}//\n"));
        } else {
            comment.push_str(&format!("{prefix}// {line}\n"));
        }
    }
    comment
}
