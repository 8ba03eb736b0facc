//! Presentation attributes for each item kind.

use crate::item::ItemKind;

/// Palette shared by every front-end; each renders it with its own color type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindColor {
    Blue,
    Red,
    Green,
    Gray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindStyle {
    /// Legend label
    pub label: &'static str,
    pub color: KindColor,
    /// Badge marker shown before the kind name in lists
    pub icon: char,
}

pub const ASSIGNMENT_STYLE: KindStyle = KindStyle {
    label: "Assignment",
    color: KindColor::Blue,
    icon: '●',
};

pub const EXAM_STYLE: KindStyle = KindStyle {
    label: "Exam",
    color: KindColor::Red,
    icon: '●',
};

pub const READING_STYLE: KindStyle = KindStyle {
    label: "Reading",
    color: KindColor::Green,
    icon: '●',
};

/// Style for kinds outside the closed enumeration.
pub const FALLBACK_STYLE: KindStyle = KindStyle {
    label: "Other",
    color: KindColor::Gray,
    icon: '●',
};

/// Known kinds in legend order.
const LEGEND: [&KindStyle; 3] = [&ASSIGNMENT_STYLE, &EXAM_STYLE, &READING_STYLE];

pub fn style_for(kind: &ItemKind) -> &'static KindStyle {
    match kind {
        ItemKind::Assignment => &ASSIGNMENT_STYLE,
        ItemKind::Exam => &EXAM_STYLE,
        ItemKind::Reading => &READING_STYLE,
        ItemKind::Other(_) => &FALLBACK_STYLE,
    }
}

/// Legend entries for the known kinds, in display order.
pub fn legend() -> impl Iterator<Item = &'static KindStyle> {
    LEGEND.into_iter()
}
