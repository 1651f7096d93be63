//! Text and styling hints for the result screen.

use super::values::{Afterlife, Severity};

/// Fine print shown under every diagnosis.
pub const DISCLAIMER: &str =
    "*This diagnosis is 100% accurate and scientifically verified by our team of imaginary doctors.";

/// Badge tone for a severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityTone {
    Warning,
    Danger,
    Death,
    GradientDeath,
}

impl From<Severity> for SeverityTone {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Critical => SeverityTone::Warning,
            Severity::Terminal => SeverityTone::Danger,
            Severity::Fatal => SeverityTone::Death,
            Severity::Catastrophic => SeverityTone::GradientDeath,
        }
    }
}

impl SeverityTone {
    /// ANSI SGR parameters for terminals that render color.
    pub fn ansi_code(&self) -> &'static str {
        match self {
            SeverityTone::Warning => "33",
            SeverityTone::Danger => "31",
            SeverityTone::Death => "1;31",
            SeverityTone::GradientDeath => "1;37;41",
        }
    }
}

pub fn afterlife_headline(afterlife: Afterlife) -> &'static str {
    match afterlife {
        Afterlife::Heaven => "Congratulations! You're going to Heaven!",
        Afterlife::Hell => "Welcome to Eternal Damnation!",
    }
}

pub fn afterlife_blurb(afterlife: Afterlife) -> &'static str {
    match afterlife {
        Afterlife::Heaven => {
            "Despite your terrible fate, your pure heart has earned you eternal bliss."
        }
        Afterlife::Hell => {
            "Your symptoms were clearly caused by your sinful lifestyle. Enjoy the flames!"
        }
    }
}
