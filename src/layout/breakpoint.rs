//! Responsive breakpoints
//!
//! Named viewport-width thresholds and the observer contract used to pick
//! between the static and the collapsible layout.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Named minimum viewport width, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Breakpoint {
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    /// All breakpoints, narrowest first
    pub fn all() -> &'static [Breakpoint] {
        &[
            Breakpoint::Sm,
            Breakpoint::Md,
            Breakpoint::Lg,
            Breakpoint::Xl,
            Breakpoint::Xxl,
        ]
    }

    /// Minimum viewport width for this breakpoint
    pub fn min_width(self) -> u32 {
        match self {
            Breakpoint::Sm => 640,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 1024,
            Breakpoint::Xl => 1280,
            Breakpoint::Xxl => 1536,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Breakpoint {
    type Err = BreakpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Breakpoint::all()
            .iter()
            .copied()
            .find(|bp| bp.name() == s)
            .ok_or_else(|| BreakpointError::Unknown(s.to_string()))
    }
}

/// Breakpoint configuration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BreakpointError {
    #[error("Unknown breakpoint '{0}' (expected one of sm, md, lg, xl, 2xl)")]
    Unknown(String),
}

/// Reports whether the viewport reaches a breakpoint
pub trait BreakpointObserver {
    fn is_at_least(&self, breakpoint: Breakpoint) -> bool;
}

/// A viewport of known width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Parse a width hint such as a `Sec-CH-Viewport-Width` header value
    ///
    /// Fractional widths are truncated; negative or non-numeric values are
    /// rejected.
    pub fn parse_width(value: &str) -> Option<u32> {
        let width: f64 = value.trim().parse().ok()?;
        if width.is_finite() && width >= 0.0 {
            Some(width.min(u32::MAX as f64) as u32)
        } else {
            None
        }
    }
}

impl BreakpointObserver for Viewport {
    fn is_at_least(&self, breakpoint: Breakpoint) -> bool {
        self.width >= breakpoint.min_width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("sm".parse::<Breakpoint>().unwrap(), Breakpoint::Sm);
        assert_eq!("2xl".parse::<Breakpoint>().unwrap(), Breakpoint::Xxl);
        assert_eq!(
            "huge".parse::<Breakpoint>(),
            Err(BreakpointError::Unknown("huge".to_string()))
        );
        assert!("SM".parse::<Breakpoint>().is_err());
    }

    #[test]
    fn test_widths_ascend() {
        let widths: Vec<u32> = Breakpoint::all().iter().map(|bp| bp.min_width()).collect();
        let mut sorted = widths.clone();
        sorted.sort_unstable();
        assert_eq!(widths, sorted);
    }

    #[test]
    fn test_viewport_threshold_is_inclusive() {
        assert!(Viewport::new(640).is_at_least(Breakpoint::Sm));
        assert!(!Viewport::new(639).is_at_least(Breakpoint::Sm));
        assert!(Viewport::new(1024).is_at_least(Breakpoint::Md));
        assert!(!Viewport::new(1024).is_at_least(Breakpoint::Xl));
    }

    #[test]
    fn test_parse_width_hint() {
        assert_eq!(Viewport::parse_width("1280"), Some(1280));
        assert_eq!(Viewport::parse_width(" 812.5 "), Some(812));
        assert_eq!(Viewport::parse_width("-1"), None);
        assert_eq!(Viewport::parse_width("wide"), None);
    }

    #[test]
    fn test_serde_names() {
        let bp: Breakpoint = serde_json::from_str(r#""2xl""#).unwrap();
        assert_eq!(bp, Breakpoint::Xxl);
        assert_eq!(serde_json::to_string(&Breakpoint::Md).unwrap(), r#""md""#);
    }
}
