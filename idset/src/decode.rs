//! Range-notation parsing.

use alloc::string::ToString;
use core::str::FromStr;

use crate::error::Result;
use crate::{Error, IdSet};

impl IdSet {
    /// Parse range-notation text into a new autogrowing set.
    ///
    /// At most one leading `[` and one trailing `]` are stripped first
    /// (either may be absent, so `"[1-3"` and `"1-3]"` both parse). What
    /// remains must be empty, a decimal id, or a comma-separated list of
    /// ids and inclusive `first-second` ranges; anything else fails with
    /// [`Error::InvalidSyntax`] and no set is produced.
    ///
    /// A backwards range such as `"7-3"` is accepted and contributes no
    /// members, so it decodes to the empty set rather than an error.
    ///
    /// ```
    /// use idset::IdSet;
    ///
    /// let set = IdSet::decode("[1-3,7,9-10]")?;
    /// assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2, 3, 7, 9, 10]);
    /// # Ok::<(), idset::Error>(())
    /// ```
    ///
    /// # Errors
    /// Fails with [`Error::InvalidSyntax`] on any token outside the
    /// grammar, or [`Error::CapacityOverflow`] if an id is too large for
    /// the set to grow over.
    pub fn decode(notation: &str) -> Result<IdSet> {
        let body = trim_brackets(notation);
        let mut set = IdSet::new();
        if body.is_empty() {
            return Ok(set);
        }
        for token in body.split(',') {
            let (first, second) = parse_token(token)?;
            // Highest first, so a range pays for at most one growth.
            for id in (first..=second).rev() {
                set.insert(id)?;
            }
        }
        Ok(set)
    }
}

impl FromStr for IdSet {
    type Err = Error;

    #[inline]
    fn from_str(notation: &str) -> Result<IdSet> {
        IdSet::decode(notation)
    }
}

/// Strip at most one leading `[` and one trailing `]`.
fn trim_brackets(notation: &str) -> &str {
    let notation = notation.strip_prefix('[').unwrap_or(notation);
    notation.strip_suffix(']').unwrap_or(notation)
}

/// Split a token into its inclusive `(first, second)` endpoints; a plain
/// id stands for the one-id range `(id, id)`.
fn parse_token(token: &str) -> Result<(usize, usize)> {
    if let Some((first, second)) = token.split_once('-') {
        Ok((parse_id(token, first)?, parse_id(token, second)?))
    } else {
        let id = parse_id(token, token)?;
        Ok((id, id))
    }
}

/// Parse one endpoint: decimal ASCII digits only, so signs, whitespace,
/// and empty endpoints are all rejected.
fn parse_id(token: &str, digits: &str) -> Result<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidSyntax {
            token: token.to_string(),
            problem: "expected a decimal id or a 'first-second' id range".to_string(),
        });
    }
    digits.parse().map_err(|inner| Error::InvalidSyntax {
        token: token.to_string(),
        problem: format!("id could not be parsed as an integer: {inner}"),
    })
}
