//! Template registry
//!
//! Remediation text is data, keyed by the suggestion kind it fixes.
//! Templates use a `{subject}` placeholder for the topic of the document.
//! Body templates are written with short sentences and short, common
//! words so appended text never drags readability down.

use crate::models::SuggestionKind;
use std::collections::HashMap;

/// Placeholder replaced by the document subject
pub const SUBJECT: &str = "{subject}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    /// One line of plain text. `filler` is appended while the line is
    /// shorter than the target length.
    Line { text: String, filler: String },
    /// Markup blocks appended to the body one at a time, in order
    Sections(Vec<String>),
}

impl Template {
    pub fn line(text: impl Into<String>, filler: impl Into<String>) -> Self {
        Template::Line {
            text: text.into(),
            filler: filler.into(),
        }
    }

    pub fn sections<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Template::Sections(sections.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRegistry {
    templates: HashMap<SuggestionKind, Template>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateRegistry {
    /// Registry with no templates; every transform that needs one is a no-op
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(
            SuggestionKind::MissingTitle,
            Template::line(TITLE, TITLE_FILLER),
        );
        registry.register(
            SuggestionKind::ShortDescription,
            Template::line(DESCRIPTION, DESCRIPTION_FILLER),
        );
        registry.register(
            SuggestionKind::ShortContent,
            Template::sections(CONTENT_SECTIONS.iter().copied()),
        );
        registry.register(
            SuggestionKind::WeakHeadings,
            Template::sections(HEADING_SECTIONS.iter().copied()),
        );
        registry.register(
            SuggestionKind::NoLists,
            Template::sections([CHECKLIST]),
        );
        registry.register(
            SuggestionKind::LowReadability,
            Template::sections(CONTENT_SECTIONS.iter().copied()),
        );
        registry
    }

    /// Add or replace the template for `kind`, returning the old one
    pub fn register(&mut self, kind: SuggestionKind, template: Template) -> Option<Template> {
        self.templates.insert(kind, template)
    }

    pub fn with(mut self, kind: SuggestionKind, template: Template) -> Self {
        self.register(kind, template);
        self
    }

    pub fn get(&self, kind: SuggestionKind) -> Option<&Template> {
        self.templates.get(&kind)
    }

    /// Text and filler of a `Line` template
    pub fn line(&self, kind: SuggestionKind) -> Option<(&str, &str)> {
        match self.get(kind)? {
            Template::Line { text, filler } => Some((text.as_str(), filler.as_str())),
            Template::Sections(_) => None,
        }
    }

    /// Blocks of a `Sections` template, empty if absent
    pub fn sections(&self, kind: SuggestionKind) -> &[String] {
        match self.get(kind) {
            Some(Template::Sections(sections)) => sections,
            _ => &[],
        }
    }
}

/// Substitute the subject into plain-text templates
pub fn render(template: &str, subject: &str) -> String {
    template.replace(SUBJECT, subject)
}

/// Substitute the subject into markup templates
pub fn render_markup(template: &str, subject: &str) -> String {
    template.replace(SUBJECT, &escape_markup(subject))
}

fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const TITLE: &str = "{subject}: The Complete Guide";
const TITLE_FILLER: &str = " | Tips and Best Practices";

const DESCRIPTION: &str = "Learn all about {subject} in one simple guide. We cover the key steps, \
best tips and common mistakes, so you can get better results fast.";
const DESCRIPTION_FILLER: &str = " Start today.";

const CONTENT_SECTIONS: &[&str] = &[
    "<h2>What Is {subject}?</h2>\
<p>{subject} is a topic that a lot of people want to know more about. It can seem hard at first. \
It is not. With a few clear steps, you can learn the basics in a short time. This guide will show \
you what to do, one step at a time. We keep each part short and to the point. You do not need any \
past skill to start. All you need is a bit of time and the will to try. Read each part, then try \
it out for yourself.</p>\
<ul><li>Learn the key terms first.</li><li>Start with small goals.</li>\
<li>Check your work as you go.</li></ul>\
<p>Once you know the basics, the rest will feel much more clear. Take it slow and you will do \
well.</p>",
    "<h2>How to Get Started</h2>\
<p>The best way to start is to keep it simple. Pick one thing to work on. Do it well, then move on \
to the next. Many people try to do it all at once and give up. You do not have to. Set a time each \
day, even if it is just ten minutes. Small steps add up fast. Keep notes on what works and what does \
not. Your notes will help you see how far you have come.</p>\
<ul><li>Pick one clear goal.</li><li>Set aside time each day.</li>\
<li>Write down what you learn.</li><li>Ask for help when you need it.</li></ul>\
<p>These steps work for those who are new and for those who have done this for years.</p>",
    "<h2>Tips for Better Results</h2>\
<p>Good results come from good habits. Here are some tips that help most people. First, plan your \
work before you begin. A plan saves time and stops you from going off track. Next, test your ideas \
on a small scale. If they work, do more of the same. If not, change one thing and try again. Last, \
share what you do with others. They can spot things you miss and give you new ideas.</p>\
<ul><li>Plan first, then act.</li><li>Test on a small scale.</li>\
<li>Change one thing at a time.</li><li>Share your work and ask for tips.</li></ul>\
<p>None of these tips take much time. Each one makes the next step a bit more smooth.</p>",
    "<h2>Common Mistakes to Avoid</h2>\
<p>Most mistakes with {subject} are easy to fix once you know them. The first is to rush. Going too \
fast leads to gaps in what you know. The second is to skip the basics. The basics are what all the \
rest is built on. The third is to work alone for too long. A friend or a group can keep you on \
track. The last is to stop when things get hard. Hard parts are where you learn the most.</p>\
<ul><li>Do not rush.</li><li>Do not skip the basics.</li>\
<li>Do not work alone for too long.</li><li>Do not quit when it gets hard.</li></ul>\
<p>Keep these in mind and you will miss most of the traps that slow people down.</p>",
    "<h2>Your Next Steps</h2>\
<p>Now you know the basics of {subject}. The next step is to put them to use. Start small and build \
up over time. Look back at this guide when you get stuck. Each time you read it, you will pick up \
something new.</p>\
<h3>Keep Learning</h3>\
<p>There is always more to learn. Read, ask, and try new things. The more you do, the better you \
get. Good luck, and have fun with it.</p>",
];

const HEADING_SECTIONS: &[&str] = &[
    "<h2>Key Points About {subject}</h2>\
<p>Here are the main things to know. Keep them in mind as you read on.</p>",
    "<h2>Why {subject} Matters</h2>\
<p>It can save you time and help you get good results. That is why it is worth a look.</p>",
    "<h2>Quick Tips</h2>\
<p>Start small. Stay with it. Ask for help when you need it.</p>",
];

const CHECKLIST: &str = "<p>Quick checklist.</p>\
<ul><li>Start with the basics of {subject}.</li><li>Set one clear goal at a time.</li>\
<li>Check how you are doing each week.</li><li>Ask for help when you get stuck.</li></ul>";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{count_tags, strip_tags};
    use crate::metrics::{readability, word_count};

    #[test]
    fn test_builtin_has_every_auto_kind() {
        let registry = TemplateRegistry::builtin();
        assert!(registry.line(SuggestionKind::MissingTitle).is_some());
        assert!(registry.line(SuggestionKind::ShortDescription).is_some());
        assert!(!registry.sections(SuggestionKind::ShortContent).is_empty());
        assert!(!registry.sections(SuggestionKind::WeakHeadings).is_empty());
        assert!(!registry.sections(SuggestionKind::NoLists).is_empty());
        assert!(!registry.sections(SuggestionKind::LowReadability).is_empty());
        assert!(registry.get(SuggestionKind::KeywordStuffing).is_none());
    }

    #[test]
    fn test_content_sections_are_readable() {
        let body = CONTENT_SECTIONS
            .iter()
            .map(|s| render_markup(s, "home coffee"))
            .collect::<String>();
        let text = strip_tags(&body);
        assert!(word_count(&text) >= 500, "only {} words", word_count(&text));
        assert!(readability(&text) >= 80.0);

        let (headings, structure) = count_tags(&body);
        assert!(headings.h2 >= 3);
        assert!(headings.h3 >= 1);
        assert!(structure.lists >= 3);
    }

    #[test]
    fn test_render_markup_escapes_subject() {
        assert_eq!(
            render_markup("<h2>{subject}</h2>", "A<B"),
            "<h2>A&lt;B</h2>"
        );
        assert_eq!(render("{subject} guide", "A<B"), "A<B guide");
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = TemplateRegistry::builtin();
        let old = registry.register(
            SuggestionKind::NoLists,
            Template::sections(["<ol><li>One.</li></ol>"]),
        );
        assert!(old.is_some());
        assert_eq!(registry.sections(SuggestionKind::NoLists).len(), 1);
        assert!(registry.line(SuggestionKind::NoLists).is_none());
    }
}
