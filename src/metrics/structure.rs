//! Structural analyzer: heading/element counts and meta-tag length windows

use crate::markup::NormalizedMarkup;
use crate::models::{ContentDocument, HeadingCounts, StructureCounts};
use std::ops::RangeInclusive;

/// Title lengths search engines display without truncation
pub const OPTIMAL_TITLE: RangeInclusive<usize> = 30..=60;
/// Description lengths search engines display without truncation
pub const OPTIMAL_DESCRIPTION: RangeInclusive<usize> = 120..=160;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuralReport {
    pub headings: HeadingCounts,
    pub structure: StructureCounts,
    pub title_length: usize,
    pub description_length: usize,
    pub title_optimal: bool,
    pub description_optimal: bool,
}

pub fn title_optimal(length: usize) -> bool {
    OPTIMAL_TITLE.contains(&length)
}

pub fn description_optimal(length: usize) -> bool {
    OPTIMAL_DESCRIPTION.contains(&length)
}

pub fn analyze_structure(document: &ContentDocument, markup: &NormalizedMarkup) -> StructuralReport {
    let title_length = document.title_length();
    let description_length = document.description_length();
    StructuralReport {
        headings: markup.headings,
        structure: markup.structure,
        title_length,
        description_length,
        title_optimal: title_optimal(title_length),
        description_optimal: description_optimal(description_length),
    }
}
