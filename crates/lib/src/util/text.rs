//! Text normalization for embedded templates.
//!
//! Templates are authored indented inside raw string literals, so they carry a
//! shared left margin and a leading newline. `normalize_template` removes both.

/// Remove the common leading whitespace from every line.
///
/// Lines made only of spaces and tabs do not contribute to the margin and are
/// emitted as empty lines. Line terminators are preserved. Tabs and spaces are
/// not considered equivalent.
pub fn dedent(text: &str) -> String {
  let margin = common_margin(text);
  let mut out = String::with_capacity(text.len());

  for line in text.split_inclusive('\n') {
    let (body, ending) = split_ending(line);
    if is_blank(body) {
      out.push_str(ending);
    } else {
      out.push_str(body.strip_prefix(margin).unwrap_or(body));
      out.push_str(ending);
    }
  }

  out
}

/// Dedent a template and drop any newlines before its first line.
pub fn normalize_template(raw: &str) -> String {
  dedent(raw).trim_start_matches('\n').to_string()
}

fn common_margin(text: &str) -> &str {
  let mut margin: Option<&str> = None;

  for line in text.split_inclusive('\n') {
    let (body, _) = split_ending(line);
    if is_blank(body) {
      continue;
    }
    let indent = leading_whitespace(body);
    margin = Some(match margin {
      None => indent,
      Some(current) => common_prefix(current, indent),
    });
  }

  margin.unwrap_or("")
}

fn split_ending(line: &str) -> (&str, &str) {
  match line.strip_suffix('\n') {
    Some(body) => (body, "\n"),
    None => (line, ""),
  }
}

fn is_blank(line: &str) -> bool {
  line.chars().all(|c| c == ' ' || c == '\t')
}

fn leading_whitespace(line: &str) -> &str {
  let end = line.find(|c: char| c != ' ' && c != '\t').unwrap_or(line.len());
  &line[..end]
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
  // Margins only contain single-byte ASCII whitespace.
  let len = a.bytes().zip(b.bytes()).take_while(|(x, y)| x == y).count();
  &a[..len]
}
