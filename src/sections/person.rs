use crate::errors::ExtractError;
use crate::types::PersonReference;

const HOUSE_MARKER: &str = "Rep.";

/// Parse `"<Name> [<Party>-<State>]"` or, for House members,
/// `"<Name> [<Party>-<State>-<District>]"`.
///
/// Anything after the closing bracket (such as an introduction date) is
/// ignored.
pub fn parse_person_reference(raw: &str) -> Result<PersonReference, ExtractError> {
    let malformed = || ExtractError::MalformedPersonReference {
        raw: raw.to_string(),
    };

    let raw_trimmed = raw.trim();
    let (name, bracket) = raw_trimmed.split_once(" [").ok_or_else(malformed)?;
    let parts = bracket.split('-').collect::<Vec<_>>();
    if parts.len() < 2 {
        return Err(malformed());
    }

    let name = name.trim();
    let party = parts[0].trim();

    let (state, district) = if name.contains(HOUSE_MARKER) {
        let district = parts.get(2).map(|part| strip_bracket_suffix(part));
        let Some(district) = district else {
            return Err(malformed());
        };
        (parts[1].trim().to_string(), Some(district))
    } else {
        (strip_bracket_suffix(parts[1]), None)
    };

    if name.is_empty() || party.is_empty() || state.is_empty() {
        return Err(malformed());
    }

    Ok(PersonReference {
        name: name.to_string(),
        party: party.to_string(),
        state,
        district,
    })
}

fn strip_bracket_suffix(segment: &str) -> String {
    segment
        .split(']')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}
