//! Parser for the `--custom` level list, e.g. `tangle=20,prowler=7`.

use night_core::ActorId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CustomSpecError {
    #[error("invalid entry `{0}`: expected actor=level")]
    InvalidEntry(String),
    #[error("unknown actor `{0}`")]
    UnknownActor(String),
    #[error("invalid level `{0}`: expected an integer")]
    InvalidLevel(String),
}

pub fn parse_custom_spec(spec: &str) -> Result<Vec<(ActorId, i32)>, CustomSpecError> {
    spec.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (name, level) = entry
                .split_once('=')
                .ok_or_else(|| CustomSpecError::InvalidEntry(entry.to_string()))?;
            let id = ActorId::from_slug(name.trim())
                .ok_or_else(|| CustomSpecError::UnknownActor(name.trim().to_string()))?;
            let level = level
                .trim()
                .parse::<i32>()
                .map_err(|_| CustomSpecError::InvalidLevel(level.trim().to_string()))?;
            Ok((id, level))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_comma_separated_list() {
        let levels = parse_custom_spec("tangle=20, prowler=7,marionette=10").unwrap();
        assert_eq!(
            levels,
            vec![
                (ActorId::Tangle, 20),
                (ActorId::Prowler, 7),
                (ActorId::Marionette, 10),
            ]
        );
    }

    #[test]
    fn empty_spec_parses_to_nothing() {
        assert_eq!(parse_custom_spec(""), Ok(vec![]));
        assert_eq!(parse_custom_spec(" , "), Ok(vec![]));
    }

    #[test]
    fn rejects_malformed_entries() {
        assert_eq!(
            parse_custom_spec("tangle"),
            Err(CustomSpecError::InvalidEntry("tangle".to_string()))
        );
        assert_eq!(
            parse_custom_spec("ghost=4"),
            Err(CustomSpecError::UnknownActor("ghost".to_string()))
        );
        assert_eq!(
            parse_custom_spec("tangle=loud"),
            Err(CustomSpecError::InvalidLevel("loud".to_string()))
        );
    }
}
