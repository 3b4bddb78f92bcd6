//! Range-notation output.

use alloc::string::{String, ToString};

use itertools::Itertools;

use crate::IdSet;

/// Output knobs for [`IdSet::encode`].
///
/// The default is the plainest form: every member spelled out, no
/// brackets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Wrap the output in `[` and `]`.
    ///
    /// Sets with fewer than two members always print bare, so a lone id
    /// (or the empty string) never picks up brackets.
    pub brackets: bool,
    /// Compress consecutive runs of ids into `lo-hi` tokens.
    pub range: bool,
}

impl IdSet {
    /// Serialize the members, ascending, to range-notation text.
    ///
    /// The empty set always encodes to `""`.
    ///
    /// ```
    /// use idset::{EncodeOptions, IdSet};
    ///
    /// let set: IdSet = [1, 2, 3, 7, 9, 10].into_iter().collect();
    /// assert_eq!(set.encode(EncodeOptions::default()), "1,2,3,7,9,10");
    /// assert_eq!(
    ///     set.encode(EncodeOptions { brackets: true, range: true }),
    ///     "[1-3,7,9-10]",
    /// );
    /// ```
    pub fn encode(&self, options: EncodeOptions) -> String {
        let body = if options.range {
            self.encode_ranged()
        } else {
            self.encode_simple()
        };
        if options.brackets && self.len() > 1 {
            format!("[{body}]")
        } else {
            body
        }
    }

    /// Comma-joined decimal ids, one token per member.
    fn encode_simple(&self) -> String {
        self.iter().join(",")
    }

    /// Members coalesced into `lo-hi` runs; a run of one is a bare id.
    fn encode_ranged(&self) -> String {
        let mut result = String::new();
        let mut members = self.iter();
        let Some(first) = members.next() else {
            return result;
        };
        let mut lo = first;
        let mut hi = first;
        for id in members {
            if id == hi + 1 {
                hi = id;
            } else {
                push_run(&mut result, lo, hi);
                result.push(',');
                lo = id;
                hi = id;
            }
        }
        push_run(&mut result, lo, hi);
        result
    }
}

/// Append one closed run, collapsing a singleton run to a bare id.
fn push_run(result: &mut String, lo: usize, hi: usize) {
    result.push_str(&lo.to_string());
    if hi > lo {
        result.push('-');
        result.push_str(&hi.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_all(ids: &[usize], options: EncodeOptions) -> String {
        ids.iter().collect::<IdSet>().encode(options)
    }

    #[test]
    fn ranged_smoke_test() {
        let ranged = EncodeOptions {
            brackets: false,
            range: true,
        };
        assert_eq!(encode_all(&[], ranged), "");
        assert_eq!(encode_all(&[555], ranged), "555");
        assert_eq!(encode_all(&[555, 666], ranged), "555,666");
        assert_eq!(encode_all(&[0, 1, 2, 3], ranged), "0-3");
        assert_eq!(encode_all(&[4, 5], ranged), "4-5");
        assert_eq!(
            encode_all(&[0, 1, 2, 3, 6, 7, 8, 11, 12, 13], ranged),
            "0-3,6-8,11-13"
        );
        assert_eq!(encode_all(&[0, 3, 5, 6], ranged), "0,3,5-6");
    }

    #[test]
    fn bracket_suppression() {
        let full = EncodeOptions {
            brackets: true,
            range: true,
        };
        assert_eq!(encode_all(&[], full), "");
        assert_eq!(encode_all(&[7], full), "7");
        assert_eq!(encode_all(&[1, 2, 3, 7, 9, 10], full), "[1-3,7,9-10]");
        // two members are enough to earn brackets
        assert_eq!(encode_all(&[4, 5], full), "[4-5]");
    }

    #[test]
    fn plain_listing() {
        assert_eq!(
            encode_all(&[1, 2, 3], EncodeOptions::default()),
            "1,2,3"
        );
        let bracketed = EncodeOptions {
            brackets: true,
            range: false,
        };
        assert_eq!(encode_all(&[1, 2, 3], bracketed), "[1,2,3]");
        assert_eq!(encode_all(&[9], bracketed), "9");
    }
}
