use std::fmt;

/// Qualitative bucket for the final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Excellent,
    Good,
    Passed,
    Failed,
}

impl Verdict {
    /// Lower bounds are inclusive: 90.0 is `Excellent`, 89.9 is `Good`.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Verdict::Excellent
        } else if percentage >= 70.0 {
            Verdict::Good
        } else if percentage >= 50.0 {
            Verdict::Passed
        } else {
            Verdict::Failed
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Verdict::Excellent => "🏆 EXZELLENT!  Du bist bestens vorbereitet!",
            Verdict::Good      => "✅ GUT! Mit etwas mehr Übung bist du perfekt vorbereitet.",
            Verdict::Passed    => "⚠️  BESTANDEN, aber Luft nach oben.  Weiter üben!",
            Verdict::Failed    => "❌ NICHT BESTANDEN. Wiederhole die Labs und versuche es erneut.",
        }
    }
}

/// Final tally of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizReport {
    pub score: u32,
    pub total: u32,
}

impl QuizReport {
    /// `100 * score / total`, or 0 when nothing was asked.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.total) * 100.0
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_percentage(self.percentage())
    }
}

impl fmt::Display for QuizReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "  ENDERGEBNIS")?;
        writeln!(f, "{rule}")?;
        writeln!(f)?;
        writeln!(f, "Richtige Antworten: {} / {}", self.score, self.total)?;
        writeln!(f, "Prozent: {:.1}%", self.percentage())?;
        writeln!(f)?;
        write!(f, "{}", self.verdict().message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_is_zero_without_questions() {
        let r = QuizReport { score: 0, total: 0 };
        assert_eq!(r.percentage(), 0.0);
        assert_eq!(r.verdict(), Verdict::Failed);
    }

    #[test]
    fn percentage_is_score_over_total() {
        let r = QuizReport { score: 1, total: 4 };
        assert!((r.percentage() - 25.0).abs() < 1e-9);
        let r = QuizReport { score: 2, total: 3 };
        assert!((r.percentage() - 66.666_666).abs() < 1e-3);
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(Verdict::from_percentage(100.0), Verdict::Excellent);
        assert_eq!(Verdict::from_percentage(90.0), Verdict::Excellent);
        assert_eq!(Verdict::from_percentage(89.9), Verdict::Good);
        assert_eq!(Verdict::from_percentage(70.0), Verdict::Good);
        assert_eq!(Verdict::from_percentage(69.9), Verdict::Passed);
        assert_eq!(Verdict::from_percentage(50.0), Verdict::Passed);
        assert_eq!(Verdict::from_percentage(49.9), Verdict::Failed);
        assert_eq!(Verdict::from_percentage(0.0), Verdict::Failed);
    }

    #[test]
    fn exact_fractions_hit_their_tier() {
        assert_eq!(QuizReport { score: 9, total: 10 }.verdict(), Verdict::Excellent);
        assert_eq!(QuizReport { score: 7, total: 10 }.verdict(), Verdict::Good);
        assert_eq!(QuizReport { score: 1, total: 2 }.verdict(), Verdict::Passed);
        assert_eq!(QuizReport { score: 4, total: 9 }.verdict(), Verdict::Failed);
    }

    #[test]
    fn display_shows_score_percentage_and_verdict() {
        let text = QuizReport { score: 2, total: 3 }.to_string();
        assert!(text.contains("Richtige Antworten: 2 / 3"));
        assert!(text.contains("Prozent: 66.7%"));
        assert!(text.ends_with(Verdict::Passed.message()));
    }
}
