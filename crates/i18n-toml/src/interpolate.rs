//! Named placeholder substitution for looked-up strings.
//!
//! Resource values carry placeholders like `{username}`. The accessor returns
//! them verbatim; callers fill them in with [`interpolate`].

/// Replace `{name}` placeholders in `template` with values from `args`.
///
/// Placeholders without a matching argument are kept as written. `{{` and
/// `}}` produce literal braces.
///
/// ```rust
/// use i18n_toml::interpolate;
///
/// let text = interpolate("Welcome, {username}!", &[("username", "Alice")]);
/// assert_eq!(text, "Welcome, Alice!");
/// ```
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        output.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            output.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }

        if tail.starts_with('}') {
            output.push('}');
            rest = &tail[1..];
            continue;
        }

        match tail[1..].find(['{', '}']) {
            Some(end) if tail[1..].as_bytes()[end] == b'}' => {
                let name = &tail[1..=end];
                match args.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => output.push_str(value),
                    None => output.push_str(&tail[..end + 2]),
                }
                rest = &tail[end + 2..];
            }
            _ => {
                output.push('{');
                rest = &tail[1..];
            }
        }
    }

    output.push_str(rest);
    output
}
