//! Composite Content Scoring
//!
//! Combines the extracted metrics into a bounded 0-100 score.
//!
//! # Scoring Formula
//!
//! ```text
//! Total = min(100, ContentLength + Readability + Keywords + Headings + MetaTags
//!                  + StructureBonus + TechnicalBonus + VolumeBonus)
//! ```
//!
//! Each capped component walks a threshold ladder top-down and takes the
//! first rung the metric reaches:
//!
//! - **Content length** (0-25): words `≥800→25, ≥500→20, ≥300→15, ≥150→10, ≥50→5`
//! - **Readability** (0-25): index `≥80→25, ≥70→20, ≥60→15, ≥50→10, ≥30→5`
//! - **Keywords** (0-20): count `≥5→12, ≥3→10, ≥1→6` plus density `(0,5]→8, >5→5`
//! - **Headings** (0-15): h1 `8` (else `3`), h2 `≥2→4, ≥1→2`, h3 `≥1→3`
//! - **Meta tags** (0-15): title `[20,70]→10, ≥10→6, >0→3`;
//!   description `[100,180]→5, ≥50→3, >0→1`
//!
//! # Bonuses (uncapped individually)
//!
//! - **Structure**: paragraphs `≥3→3, ≥1→2`, `+3` list, `+2` link, `+2` image
//! - **Technical**: fixed configurable contribution, at most 10
//! - **Volume**: `+5` for 1000+ words, `+3` for 8+ keywords, `+2` for 3+ lists
//!
//! A document with no words scores 0 across the board.

mod content_scorer;

pub use content_scorer::{
    climb, ContentScorer, ScoreBreakdown, CONTENT_LENGTH_LADDER, KEYWORD_COUNT_LADDER, MAX_TOTAL,
    PARAGRAPH_LADDER, READABILITY_LADDER,
};
