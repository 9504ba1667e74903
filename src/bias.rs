/// Bias score presentation helpers

/// Scores further than this from zero are shown as leaning
pub const NEUTRAL_BAND: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiasIndicator {
    Left,
    Neutral,
    Right,
}

impl BiasIndicator {
    pub fn from_score(score: f64) -> Self {
        if score < -NEUTRAL_BAND {
            BiasIndicator::Left
        } else if score > NEUTRAL_BAND {
            BiasIndicator::Right
        } else {
            BiasIndicator::Neutral
        }
    }

    /// (fill, border) colors of the slider knob
    pub fn colors(&self) -> (&'static str, &'static str) {
        match self {
            BiasIndicator::Left => ("#3b82f6", "#1d4ed8"),
            BiasIndicator::Neutral => ("#6b7280", "#374151"),
            BiasIndicator::Right => ("#ef4444", "#b91c1c"),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BiasIndicator::Left => "bias-knob bias-left",
            BiasIndicator::Neutral => "bias-knob bias-neutral",
            BiasIndicator::Right => "bias-knob bias-right",
        }
    }
}

/// Horizontal knob position on the slider, in percent
pub fn slider_position(score: f64) -> f64 {
    ((score + 100.0) / 2.0).clamp(0.0, 100.0)
}

/// Tooltip text: the score rounded to a whole number
pub fn score_label(score: f64) -> String {
    format!("{:.0}", score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_thresholds() {
        assert_eq!(BiasIndicator::from_score(-100.0), BiasIndicator::Left);
        assert_eq!(BiasIndicator::from_score(-15.1), BiasIndicator::Left);
        assert_eq!(BiasIndicator::from_score(-15.0), BiasIndicator::Neutral);
        assert_eq!(BiasIndicator::from_score(0.0), BiasIndicator::Neutral);
        assert_eq!(BiasIndicator::from_score(15.0), BiasIndicator::Neutral);
        assert_eq!(BiasIndicator::from_score(15.1), BiasIndicator::Right);
        assert_eq!(BiasIndicator::from_score(100.0), BiasIndicator::Right);
    }

    #[test]
    fn test_colors_differ_per_side() {
        assert_ne!(BiasIndicator::Left.colors(), BiasIndicator::Right.colors());
        assert_ne!(BiasIndicator::Left.colors(), BiasIndicator::Neutral.colors());
    }

    #[test]
    fn test_slider_position() {
        assert_eq!(slider_position(-100.0), 0.0);
        assert_eq!(slider_position(0.0), 50.0);
        assert_eq!(slider_position(100.0), 100.0);
        assert_eq!(slider_position(-40.0), 30.0);
        assert_eq!(slider_position(500.0), 100.0);
    }

    #[test]
    fn test_score_label() {
        assert_eq!(score_label(42.4), "42");
        assert_eq!(score_label(-7.6), "-8");
    }
}
