//! Line-oriented parsers for raw override strings

use crate::domain::{EnvironmentFile, EnvironmentVariable, StringMap};
use crate::error::{RenderError, Result};

/// Trimmed, non-blank lines of a multiline input.
fn lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Parse `NAME=value` lines into environment entries, keeping input order.
///
/// The value is everything after the first `=`, so values may themselves
/// contain `=`.
pub fn parse_environment(raw: &str) -> Result<Vec<EnvironmentVariable>> {
    lines(raw)
        .map(|line| {
            line.split_once('=')
                .map(|(name, value)| EnvironmentVariable::new(name, value))
                .ok_or_else(|| RenderError::EnvironmentParse(line.to_string()))
        })
        .collect()
}

/// Parse `key=value` lines into an ordered mapping.
///
/// Used for both log driver options and docker labels; a repeated key keeps
/// its first position and takes the last value.
pub fn parse_key_values(raw: &str) -> Result<StringMap> {
    let mut map = StringMap::new();
    for line in lines(raw) {
        let Some((key, value)) = line.split_once('=') else {
            return Err(RenderError::LogOptionParse(line.to_string()));
        };
        map.insert(key.to_string(), value.to_string());
    }
    Ok(map)
}

/// Split a command string on whitespace runs. Quotes are not interpreted.
pub fn parse_command(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// Wrap each environment file reference as an S3 entry.
pub fn parse_environment_files(raw: &str) -> Vec<EnvironmentFile> {
    lines(raw).map(EnvironmentFile::s3).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_preserves_order_and_splits_on_first_equals() {
        let vars = parse_environment("FOO=bar\nHELLO=world\nURL=a=b").expect("parse");
        assert_eq!(
            vars,
            vec![
                EnvironmentVariable::new("FOO", "bar"),
                EnvironmentVariable::new("HELLO", "world"),
                EnvironmentVariable::new("URL", "a=b"),
            ]
        );
    }

    #[test]
    fn environment_skips_blank_lines_and_trims() {
        let vars = parse_environment("\n  FOO=bar  \n\n").expect("parse");
        assert_eq!(vars, vec![EnvironmentVariable::new("FOO", "bar")]);
        assert!(parse_environment("").expect("empty").is_empty());
    }

    #[test]
    fn environment_rejects_line_without_separator() {
        let err = parse_environment("FOO=bar\nBROKEN").expect_err("should fail");
        assert_eq!(
            err.to_string(),
            "Cannot parse the environment variable 'BROKEN'. Environment variable pairs must be of the form NAME=value."
        );
    }

    #[test]
    fn key_values_error_names_offending_token() {
        let err = parse_key_values("key1=update_value1\nkey2\nkey3=value3").expect_err("fail");
        assert_eq!(
            err.to_string(),
            "Can't parse logConfiguration option key2. Must be in key=value format, one per line"
        );
    }

    #[test]
    fn key_values_keep_insertion_order() {
        let map = parse_key_values(
            "awslogs-create-group=true\nawslogs-group=/ecs/web\nawslogs-region=us-east-1",
        )
        .expect("parse");
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["awslogs-create-group", "awslogs-group", "awslogs-region"]);
        assert_eq!(map["awslogs-group"], "/ecs/web");
    }

    #[test]
    fn key_values_repeated_key_keeps_first_position() {
        let map = parse_key_values("a=1\nb=2\na=3").expect("parse");
        let pairs: Vec<(&str, &str)> =
            map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(pairs, [("a", "3"), ("b", "2")]);
    }

    #[test]
    fn command_splits_on_whitespace_runs() {
        assert_eq!(
            parse_command("npm start  --nice\t--please"),
            ["npm", "start", "--nice", "--please"]
        );
        assert_eq!(parse_command("echo \"a b\""), ["echo", "\"a", "b\""]);
    }

    #[test]
    fn environment_files_are_s3_entries() {
        let files = parse_environment_files("arn:aws:s3:::bucket/one.env");
        assert_eq!(files, vec![EnvironmentFile::s3("arn:aws:s3:::bucket/one.env")]);

        let files = parse_environment_files("arn:aws:s3:::bucket/one.env\n\narn:aws:s3:::bucket/two.env\n");
        assert_eq!(files.len(), 2);
        assert_eq!(files[1].kind, "s3");
    }
}
