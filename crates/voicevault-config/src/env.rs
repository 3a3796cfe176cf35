use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// Matches `{{ env.VAR }}` and `{{ env.VAR | default("fallback") }}`
///
/// Group 1: the key (e.g. `env.VAR_NAME`)
/// Group 2: optional default value inside default("...")
fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#).expect("must be valid regex")
    })
}

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// Supports an optional default via `{{ env.VAR | default("fallback") }}`;
/// when the variable is unset the default is substituted instead of
/// returning an error. Operating on the raw config text before
/// deserialization keeps the config structs plain String/SecretString.
/// Lines starting with `#` (TOML comments) are passed through unchanged.
pub fn expand_env(input: &str) -> Result<String, String> {
    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
        } else {
            output.push_str(&expand_line(line)?);
        }
    }

    // Preserve trailing newline if present
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn expand_line(line: &str) -> Result<Cow<'_, str>, String> {
    let mut result = String::new();
    let mut last_end = 0;

    for captures in placeholder().captures_iter(line) {
        let overall = captures.get(0).expect("capture 0 always present");
        let key = captures.get(1).expect("key group always present").as_str();
        let default_value = captures.get(2).map(|m| m.as_str());

        result.push_str(&line[last_end..overall.start()]);
        result.push_str(&resolve(key, default_value)?);
        last_end = overall.end();
    }

    if last_end == 0 {
        return Ok(Cow::Borrowed(line));
    }

    result.push_str(&line[last_end..]);
    Ok(Cow::Owned(result))
}

fn resolve(key: &str, default_value: Option<&str>) -> Result<String, String> {
    let var_name = match key.strip_prefix("env.") {
        Some(rest) if !rest.contains('.') => rest,
        _ => {
            return Err(format!("only variables scoped with 'env.' are supported: `{key}`"));
        }
    };

    match std::env::var(var_name) {
        Ok(value) => Ok(value),
        Err(_) => default_value.map_or_else(
            || Err(format!("environment variable not found: `{var_name}`")),
            |default| Ok(default.to_string()),
        ),
    }
}
