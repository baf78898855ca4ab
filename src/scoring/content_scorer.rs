//! Rubric-based content scorer
//!
//! Turns `Metrics` into a `ScoreBreakdown` by walking fixed threshold
//! ladders for each component and adding the uncapped bonus terms.

use crate::config::ScoringConfig;
use crate::models::{grade_from_score, Metrics};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Upper bound of the composite total
pub const MAX_TOTAL: u32 = 100;

/// Ladders are walked top-down; the first satisfied threshold wins.
pub const CONTENT_LENGTH_LADDER: &[(usize, u32)] =
    &[(800, 25), (500, 20), (300, 15), (150, 10), (50, 5)];
pub const READABILITY_LADDER: &[(f64, u32)] =
    &[(80.0, 25), (70.0, 20), (60.0, 15), (50.0, 10), (30.0, 5)];
pub const KEYWORD_COUNT_LADDER: &[(usize, u32)] = &[(5, 12), (3, 10), (1, 6)];
pub const PARAGRAPH_LADDER: &[(usize, u32)] = &[(3, 3), (1, 2)];

const MAX_OPTIMAL_DENSITY: f64 = 5.0;

/// Points for the first rung `value` reaches, or 0
pub fn climb<T: PartialOrd + Copy>(value: T, ladder: &[(T, u32)]) -> u32 {
    ladder
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

/// Complete score breakdown for transparency
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// 0-25
    pub content_length: u32,
    /// 0-25
    pub readability: u32,
    /// 0-20
    pub keywords: u32,
    /// 0-15
    pub headings: u32,
    /// 0-15
    pub meta_tags: u32,
    pub structure_bonus: u32,
    /// 0-10
    pub technical_bonus: u32,
    pub volume_bonus: u32,
    /// Saturating sum of everything above, 0-100
    pub total: u32,
}

impl ScoreBreakdown {
    /// Letter grade
    pub fn grade(&self) -> &'static str {
        grade_from_score(self.total)
    }

    /// Sum of components before the final cap
    pub fn uncapped_sum(&self) -> u32 {
        self.content_length
            + self.readability
            + self.keywords
            + self.headings
            + self.meta_tags
            + self.structure_bonus
            + self.technical_bonus
            + self.volume_bonus
    }

    /// Named components in display order with their caps (None = uncapped)
    pub fn components(&self) -> [(&'static str, u32, Option<u32>); 8] {
        [
            ("Content length", self.content_length, Some(25)),
            ("Readability", self.readability, Some(25)),
            ("Keywords", self.keywords, Some(20)),
            ("Headings", self.headings, Some(15)),
            ("Meta tags", self.meta_tags, Some(15)),
            ("Structure bonus", self.structure_bonus, None),
            ("Technical bonus", self.technical_bonus, Some(10)),
            ("Volume bonus", self.volume_bonus, None),
        ]
    }
}

/// Rubric scorer
#[derive(Debug, Clone)]
pub struct ContentScorer {
    technical_bonus: u32,
}

impl Default for ContentScorer {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

impl ContentScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            technical_bonus: config.effective_technical_bonus(),
        }
    }

    /// Calculate the composite score with breakdown
    pub fn score(&self, metrics: &Metrics) -> ScoreBreakdown {
        // Empty content is a rubric override, not a computed minimum
        if metrics.word_count == 0 {
            debug!("No words, short-circuiting score to 0");
            return ScoreBreakdown::default();
        }

        let mut breakdown = ScoreBreakdown {
            content_length: climb(metrics.word_count, CONTENT_LENGTH_LADDER),
            readability: climb(metrics.readability_index, READABILITY_LADDER),
            keywords: self.keyword_points(metrics),
            headings: self.heading_points(metrics),
            meta_tags: self.meta_tag_points(metrics),
            structure_bonus: self.structure_bonus(metrics),
            technical_bonus: self.technical_bonus,
            volume_bonus: self.volume_bonus(metrics),
            total: 0,
        };
        breakdown.total = breakdown.uncapped_sum().min(MAX_TOTAL);

        debug!(
            "Components: length={} readability={} keywords={} headings={} meta={} structure=+{} technical=+{} volume=+{}",
            breakdown.content_length,
            breakdown.readability,
            breakdown.keywords,
            breakdown.headings,
            breakdown.meta_tags,
            breakdown.structure_bonus,
            breakdown.technical_bonus,
            breakdown.volume_bonus
        );
        debug!("Content score: {} ({})", breakdown.total, breakdown.grade());

        breakdown
    }

    /// Up to 12 for keyword count plus up to 8 for density
    fn keyword_points(&self, metrics: &Metrics) -> u32 {
        let count = climb(metrics.keyword_count, KEYWORD_COUNT_LADDER);
        let density = metrics.keyword_density_percent;
        let density_points = if density > 0.0 && density <= MAX_OPTIMAL_DENSITY {
            8
        } else if density > 0.0 {
            5
        } else {
            0
        };
        count + density_points
    }

    /// Partial credit for h1 as soon as there is any content
    fn heading_points(&self, metrics: &Metrics) -> u32 {
        let h = &metrics.heading_counts;
        let h1 = if h.h1 >= 1 { 8 } else { 3 };
        let h2 = if h.h2 >= 2 {
            4
        } else if h.h2 >= 1 {
            2
        } else {
            0
        };
        let h3 = if h.h3 >= 1 { 3 } else { 0 };
        h1 + h2 + h3
    }

    fn meta_tag_points(&self, metrics: &Metrics) -> u32 {
        let title = match metrics.title_length {
            20..=70 => 10,
            n if n >= 10 => 6,
            n if n > 0 => 3,
            _ => 0,
        };
        let description = match metrics.description_length {
            100..=180 => 5,
            n if n >= 50 => 3,
            n if n > 0 => 1,
            _ => 0,
        };
        title + description
    }

    fn structure_bonus(&self, metrics: &Metrics) -> u32 {
        let s = &metrics.structure_counts;
        let mut bonus = climb(s.paragraphs, PARAGRAPH_LADDER);
        if s.lists > 0 {
            bonus += 3;
        }
        if s.links > 0 {
            bonus += 2;
        }
        if s.images > 0 {
            bonus += 2;
        }
        bonus
    }

    fn volume_bonus(&self, metrics: &Metrics) -> u32 {
        let mut bonus = 0;
        if metrics.word_count >= 1000 {
            bonus += 5;
        }
        if metrics.keyword_count >= 8 {
            bonus += 3;
        }
        if metrics.structure_counts.lists >= 3 {
            bonus += 2;
        }
        bonus
    }

    /// Generate human-readable explanation of the score
    pub fn explain(&self, metrics: &Metrics, breakdown: &ScoreBreakdown) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "# Content Score: {} ({})\n",
            breakdown.total,
            breakdown.grade()
        ));

        lines.push("## Scoring Formula\n".to_string());
        lines.push("```".to_string());
        lines.push(
            "Total = min(100, Length + Readability + Keywords + Headings + Meta + bonuses)"
                .to_string(),
        );
        lines.push("Each component walks its threshold ladder top-down; first match wins".to_string());
        lines.push("```\n".to_string());

        lines.push("## Measurements\n".to_string());
        lines.push(format!("- **Words**: {}", metrics.word_count));
        lines.push(format!(
            "- **Unique words**: {:.1}%",
            metrics.unique_word_ratio * 100.0
        ));
        lines.push(format!("- **Readability index**: {:.1}", metrics.readability_index));
        lines.push(format!(
            "- **Keywords**: {} at {:.2}% density",
            metrics.keyword_count, metrics.keyword_density_percent
        ));
        let h = &metrics.heading_counts;
        lines.push(format!("- **Headings**: h1={} h2={} h3={}", h.h1, h.h2, h.h3));
        let s = &metrics.structure_counts;
        lines.push(format!(
            "- **Elements**: {} paragraphs, {} lists, {} links, {} images",
            s.paragraphs, s.lists, s.links, s.images
        ));
        lines.push(format!(
            "- **Title**: {} chars{}",
            metrics.title_length,
            if metrics.title_optimal { " (optimal)" } else { "" }
        ));
        lines.push(format!(
            "- **Description**: {} chars{}\n",
            metrics.description_length,
            if metrics.description_optimal { " (optimal)" } else { "" }
        ));

        lines.push("## Components\n".to_string());
        if metrics.word_count == 0 {
            lines.push("- No content: every component is 0".to_string());
        }
        for (name, points, cap) in breakdown.components() {
            match cap {
                Some(cap) => lines.push(format!("- {}: {}/{}", name, points, cap)),
                None => lines.push(format!("- {}: +{}", name, points)),
            }
        }
        let uncapped = breakdown.uncapped_sum();
        if uncapped > MAX_TOTAL {
            lines.push(format!("\nSum {} capped at {}", uncapped, MAX_TOTAL));
        }

        lines.join("\n")
    }
}
