//! Query plan parameters: output format and detail options.
//!
//! The plan media type carries a result format (`+json` or `+text`) and an
//! `options=a|b|c` parameter. Options form a set that is always rendered in
//! the canonical order of [`PlanOption::ALL`].

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Output format of a rendered query plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlanFormat {
    Json,
    Text,
}

impl PlanFormat {
    /// Returns the media type suffix for this format.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgrst_media::PlanFormat;
    ///
    /// assert_eq!(PlanFormat::Json.as_str(), "json");
    /// assert_eq!(PlanFormat::Text.as_str(), "text");
    /// ```
    pub const fn as_str(&self) -> &'static str {
        match self {
            PlanFormat::Json => "json",
            PlanFormat::Text => "text",
        }
    }
}

impl fmt::Display for PlanFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(PlanFormat::Json),
            "text" => Ok(PlanFormat::Text),
            other => Err(Error::UnknownPlanFormat(other.to_string())),
        }
    }
}

/// A detail option requested for a query plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlanOption {
    Analyze,
    Verbose,
    Settings,
    Buffers,
    Wal,
}

impl PlanOption {
    /// Every option, in canonical order.
    pub const ALL: [PlanOption; 5] = [
        PlanOption::Analyze,
        PlanOption::Verbose,
        PlanOption::Settings,
        PlanOption::Buffers,
        PlanOption::Wal,
    ];

    /// Returns the wire name of this option.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PlanOption::Analyze => "analyze",
            PlanOption::Verbose => "verbose",
            PlanOption::Settings => "settings",
            PlanOption::Buffers => "buffers",
            PlanOption::Wal => "wal",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for PlanOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PlanOption::ALL
            .into_iter()
            .find(|opt| opt.as_str() == s)
            .ok_or_else(|| Error::UnknownPlanOption(s.to_string()))
    }
}

/// A set of [`PlanOption`]s.
///
/// Duplicates collapse and iteration always follows the canonical order,
/// whatever order the options were inserted in.
///
/// # Examples
///
/// ```
/// use pgrst_media::{PlanOption, PlanOptions};
///
/// let opts: PlanOptions = [PlanOption::Wal, PlanOption::Analyze, PlanOption::Wal]
///     .into_iter()
///     .collect();
/// assert_eq!(opts.len(), 2);
/// assert_eq!(opts.to_string(), "analyze|wal");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PlanOptions {
    bits: u8,
}

impl PlanOptions {
    /// Creates an empty option set.
    pub const fn new() -> Self {
        PlanOptions { bits: 0 }
    }

    /// Adds an option. Returns `false` if it was already present.
    pub fn insert(&mut self, opt: PlanOption) -> bool {
        let present = self.contains(opt);
        self.bits |= opt.bit();
        !present
    }

    /// Removes an option. Returns `true` if it was present.
    pub fn remove(&mut self, opt: PlanOption) -> bool {
        let present = self.contains(opt);
        self.bits &= !opt.bit();
        present
    }

    pub const fn contains(&self, opt: PlanOption) -> bool {
        self.bits & opt.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterates over the options in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = PlanOption> + '_ {
        PlanOption::ALL.into_iter().filter(move |opt| self.contains(*opt))
    }
}

impl FromIterator<PlanOption> for PlanOptions {
    fn from_iter<I: IntoIterator<Item = PlanOption>>(iter: I) -> Self {
        let mut opts = PlanOptions::new();
        opts.extend(iter);
        opts
    }
}

impl Extend<PlanOption> for PlanOptions {
    fn extend<I: IntoIterator<Item = PlanOption>>(&mut self, iter: I) {
        for opt in iter {
            self.insert(opt);
        }
    }
}

impl fmt::Debug for PlanOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the set as `a|b|c`; an empty set renders as the empty string.
impl fmt::Display for PlanOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, opt) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            f.write_str(opt.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_format_from_str() {
        assert_eq!("json".parse::<PlanFormat>(), Ok(PlanFormat::Json));
        assert_eq!("text".parse::<PlanFormat>(), Ok(PlanFormat::Text));
        assert_eq!(
            "JSON".parse::<PlanFormat>(),
            Err(Error::UnknownPlanFormat("JSON".to_string()))
        );
    }

    #[test]
    fn test_plan_option_from_str() {
        for opt in PlanOption::ALL {
            assert_eq!(opt.as_str().parse::<PlanOption>(), Ok(opt));
        }
        assert_eq!(
            "costs".parse::<PlanOption>(),
            Err(Error::UnknownPlanOption("costs".to_string()))
        );
        assert!("Analyze".parse::<PlanOption>().is_err());
    }

    #[test]
    fn test_plan_option_canonical_order() {
        let mut sorted = PlanOption::ALL;
        sorted.sort();
        assert_eq!(sorted, PlanOption::ALL);
    }

    #[test]
    fn test_plan_options_insert_remove() {
        let mut opts = PlanOptions::new();
        assert!(opts.is_empty());

        assert!(opts.insert(PlanOption::Buffers));
        assert!(!opts.insert(PlanOption::Buffers));
        assert!(opts.contains(PlanOption::Buffers));
        assert!(!opts.contains(PlanOption::Wal));
        assert_eq!(opts.len(), 1);

        assert!(opts.remove(PlanOption::Buffers));
        assert!(!opts.remove(PlanOption::Buffers));
        assert!(opts.is_empty());
    }

    #[test]
    fn test_plan_options_iter_order() {
        let opts: PlanOptions = [
            PlanOption::Wal,
            PlanOption::Settings,
            PlanOption::Analyze,
            PlanOption::Verbose,
        ]
        .into_iter()
        .collect();

        let order: Vec<_> = opts.iter().collect();
        assert_eq!(
            order,
            vec![
                PlanOption::Analyze,
                PlanOption::Verbose,
                PlanOption::Settings,
                PlanOption::Wal,
            ]
        );
    }

    #[test]
    fn test_plan_options_display() {
        assert_eq!(PlanOptions::new().to_string(), "");

        let all: PlanOptions = PlanOption::ALL.into_iter().rev().collect();
        assert_eq!(all.to_string(), "analyze|verbose|settings|buffers|wal");
    }

    #[test]
    fn test_plan_options_debug() {
        let opts: PlanOptions = [PlanOption::Wal, PlanOption::Analyze].into_iter().collect();
        assert_eq!(format!("{:?}", opts), "{Analyze, Wal}");
    }
}
