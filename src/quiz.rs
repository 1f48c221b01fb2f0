//! Color-fit questionnaire mapping answers to a seasonal palette.
//!
//! Eight fixed questions about skin tone, sun reaction, jewelry, and
//! similar traits. Answers tally toward warm or cool, and the sun
//! question splits each side into two seasons.

use crate::color::Rgb;

/// One quiz question with its fixed answer options.
#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    /// The question shown to the user.
    pub prompt: &'static str,
    /// Answer options, one of which is expected back in `evaluate`.
    pub options: &'static [&'static str],
}

/// Seasonal color palettes the quiz can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteSeason {
    /// Warm undertones, rich features
    Autumn,
    /// Warm undertones, bright features
    Spring,
    /// Cool undertones, high contrast
    Winter,
    /// Cool undertones, muted features
    Summer,
}

/// The quiz outcome: a season with its palette and description.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteProfile {
    /// The matched season.
    pub season: PaletteSeason,
    /// Recommended colors for the season.
    pub palette: Vec<Rgb>,
    /// Human-readable summary of the match.
    pub description: &'static str,
}

/// Answers that count toward a warm undertone.
const WARM_ANSWERS: &[&str] = &[
    "Warm undertones",
    "Warm, golden undertone",
    "Gold and rose gold",
    "Green",
];

/// Answers that count toward a cool undertone.
const COOL_ANSWERS: &[&str] = &[
    "Light undertone, cool",
    "Cool or olive undertone",
    "Silver",
    "Blue",
];

/// The sun-reaction answer that deepens the palette on either side.
const BURNS_EASILY: &str = "Burns Easily, rarely or only slightly tans";

const QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        prompt: "What color is your skin tone?",
        options: &[
            "Warm undertones",
            "Light undertone, cool",
            "Warm, golden undertone",
            "Cool or olive undertone",
        ],
    },
    QuizQuestion {
        prompt: "What's your choice in lip color?",
        options: &["Light pink", "Pink", "Reddish pink", "Not applicable"],
    },
    QuizQuestion {
        prompt: "How does your skin react to sunlight?",
        options: &[
            "Burns Easily, rarely or only slightly tans",
            "Burns Moderately, tans gradually over time",
            "Rarely burns, tans easily",
            "Never or rarely ever burns, tans darkly",
        ],
    },
    QuizQuestion {
        prompt: "What colors do you typically wear and feel confident in?",
        options: &[
            "Cool Tones like blues, greens and violets",
            "Red Tones like reds, oranges and yellows",
            "Neutrals like blacks, whites, beige and grays",
            "Earth Tones like browns, greens and yellows",
        ],
    },
    QuizQuestion {
        prompt: "What color of jewelry do you prefer to wear?",
        options: &["Gold and rose gold", "Silver", "Not applicable"],
    },
    QuizQuestion {
        prompt: "Look closely at your veins by your wrist. Are they blue or green?",
        options: &["Blue", "Green"],
    },
    QuizQuestion {
        prompt: "What color are your eyes?",
        options: &[
            "Light brown, green or blue/gray",
            "Bright green, blue or light brown",
            "Dark brown or black",
            "Blue/green or hazel",
        ],
    },
    QuizQuestion {
        prompt: "What color is your hair?",
        options: &[
            "Light blond, strawberry, light brown",
            "Dirty blond, medium brown, or ashy color",
            "Medium/darker brown or deeper red",
            "Black or dark brown",
        ],
    },
];

impl PaletteSeason {
    /// Get the display name for this season.
    pub fn name(&self) -> &'static str {
        match self {
            PaletteSeason::Autumn => "Autumn",
            PaletteSeason::Spring => "Spring",
            PaletteSeason::Winter => "Winter",
            PaletteSeason::Summer => "Summer",
        }
    }

    /// The season's recommended colors.
    pub fn palette(&self) -> [Rgb; 3] {
        match self {
            PaletteSeason::Autumn => [
                Rgb::new(0xFF, 0x7F, 0x50),
                Rgb::new(0xFF, 0xD7, 0x00),
                Rgb::new(0x8B, 0x45, 0x13),
            ],
            PaletteSeason::Spring => [
                Rgb::new(0xFF, 0xDA, 0xB9),
                Rgb::new(0xFF, 0xA0, 0x7A),
                Rgb::new(0xFF, 0xE4, 0xB5),
            ],
            PaletteSeason::Winter => [
                Rgb::new(0x87, 0xCE, 0xEB),
                Rgb::new(0x46, 0x82, 0xB4),
                Rgb::new(0xB0, 0xE0, 0xE6),
            ],
            PaletteSeason::Summer => [
                Rgb::new(0xE6, 0xE6, 0xFA),
                Rgb::new(0xD8, 0xBF, 0xD8),
                Rgb::new(0xB0, 0xC4, 0xDE),
            ],
        }
    }

    /// Human-readable summary of the season's palette.
    pub fn description(&self) -> &'static str {
        match self {
            PaletteSeason::Autumn => {
                "You have warm undertones with rich, earthy features. Your palette embraces warm, deep colors like olive green, burnt orange, and chocolate brown."
            }
            PaletteSeason::Spring => {
                "You have warm undertones with clear, bright features. Your palette features warm, light colors such as peach, coral, and sunny yellow."
            }
            PaletteSeason::Winter => {
                "You have cool undertones with high contrast between your skin, hair, and eyes. Your palette includes bold, cool colors like icy blues, stark blacks, and bright jewel tones."
            }
            PaletteSeason::Summer => {
                "You have cool undertones with softer, muted features. Your palette includes cool, pastel shades like lavender, soft pink, and powder blue."
            }
        }
    }
}

impl PaletteProfile {
    /// Build the profile for a season.
    pub fn for_season(season: PaletteSeason) -> Self {
        Self {
            season,
            palette: season.palette().to_vec(),
            description: season.description(),
        }
    }
}

/// The fixed questionnaire, in presentation order.
pub fn questions() -> &'static [QuizQuestion] {
    QUESTIONS
}

/// Score a full set of answers into a palette profile.
///
/// `answers` holds one entry per question; unanswered questions may be
/// empty strings and count toward neither side. Fewer answers than
/// questions yields `None`. Warm-leaning answers against cool-leaning
/// answers pick the side (ties go cool), and the burns-easily answer
/// picks the deeper palette within it.
pub fn evaluate(answers: &[&str]) -> Option<PaletteProfile> {
    if answers.len() < QUESTIONS.len() {
        return None;
    }

    let warm = answers
        .iter()
        .filter(|answer| WARM_ANSWERS.contains(*answer))
        .count();
    let cool = answers
        .iter()
        .filter(|answer| COOL_ANSWERS.contains(*answer))
        .count();
    let burns_easily = answers.contains(&BURNS_EASILY);

    let season = if warm > cool {
        if burns_easily {
            PaletteSeason::Autumn
        } else {
            PaletteSeason::Spring
        }
    } else if burns_easily {
        PaletteSeason::Winter
    } else {
        PaletteSeason::Summer
    };

    log::debug!("Quiz scored warm={warm} cool={cool} -> {}", season.name());
    Some(PaletteProfile::for_season(season))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_answers() -> Vec<&'static str> {
        vec![""; questions().len()]
    }

    #[test]
    fn test_eight_questions() {
        assert_eq!(questions().len(), 8);
    }

    #[test]
    fn test_too_few_answers_is_none() {
        assert!(evaluate(&["Warm undertones"]).is_none());
    }

    #[test]
    fn test_warm_burning_skin_is_autumn() {
        let mut answers = blank_answers();
        answers[0] = "Warm undertones";
        answers[2] = BURNS_EASILY;
        answers[4] = "Gold and rose gold";
        let profile = evaluate(&answers).unwrap();
        assert_eq!(profile.season, PaletteSeason::Autumn);
        assert_eq!(
            profile.palette,
            vec![
                Rgb::new(255, 127, 80),
                Rgb::new(255, 215, 0),
                Rgb::new(139, 69, 19)
            ]
        );
    }

    #[test]
    fn test_warm_tanning_skin_is_spring() {
        let mut answers = blank_answers();
        answers[0] = "Warm, golden undertone";
        answers[2] = "Rarely burns, tans easily";
        answers[5] = "Green";
        let profile = evaluate(&answers).unwrap();
        assert_eq!(profile.season, PaletteSeason::Spring);
    }

    #[test]
    fn test_cool_burning_skin_is_winter() {
        let mut answers = blank_answers();
        answers[0] = "Cool or olive undertone";
        answers[2] = BURNS_EASILY;
        answers[4] = "Silver";
        let profile = evaluate(&answers).unwrap();
        assert_eq!(profile.season, PaletteSeason::Winter);
    }

    #[test]
    fn test_cool_tanning_skin_is_summer() {
        let mut answers = blank_answers();
        answers[0] = "Light undertone, cool";
        answers[5] = "Blue";
        let profile = evaluate(&answers).unwrap();
        assert_eq!(profile.season, PaletteSeason::Summer);
    }

    #[test]
    fn test_tie_goes_cool() {
        let mut answers = blank_answers();
        answers[0] = "Warm undertones";
        answers[4] = "Silver";
        let profile = evaluate(&answers).unwrap();
        assert_eq!(profile.season, PaletteSeason::Summer);
    }

    #[test]
    fn test_quiz_answers_exist_in_questions() {
        // Every scoring answer must be offered by some question.
        let all_options: Vec<&str> = questions()
            .iter()
            .flat_map(|q| q.options.iter().copied())
            .collect();
        for answer in WARM_ANSWERS.iter().chain(COOL_ANSWERS.iter()) {
            assert!(all_options.contains(answer), "{answer}");
        }
        assert!(all_options.contains(&BURNS_EASILY));
    }
}
