use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Visual treatment of a badge. Mirrors the variants of the portal's badge component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayVariant {
    Default,
    Warning,
    Secondary,
    Destructive,
    Outline,
}

impl DisplayVariant {
    /// CSS modifier used by the badge component
    pub fn css_class(&self) -> &'static str {
        match self {
            DisplayVariant::Default => "badge--default",
            DisplayVariant::Warning => "badge--warning",
            DisplayVariant::Secondary => "badge--secondary",
            DisplayVariant::Destructive => "badge--destructive",
            DisplayVariant::Outline => "badge--outline",
        }
    }
}

/// Icons a badge or card may carry. The frontend maps each kind to an SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    CheckCircle,
    Clock,
    AlertCircle,
    AlertTriangle,
    XCircle,
    Search,
    User,
    UserCheck,
    UserX,
    MapPin,
    Bell,
    MailOpen,
    Phone,
    Shield,
    Flame,
    Heart,
    Building,
    Users,
    FileText,
    DollarSign,
    Lightbulb,
    Car,
}

impl IconKind {
    /// Icon name understood by `icons::icon` on the frontend
    pub fn name(&self) -> &'static str {
        match self {
            IconKind::CheckCircle => "check-circle",
            IconKind::Clock => "clock",
            IconKind::AlertCircle => "alert-circle",
            IconKind::AlertTriangle => "alert-triangle",
            IconKind::XCircle => "x-circle",
            IconKind::Search => "search",
            IconKind::User => "user",
            IconKind::UserCheck => "user-check",
            IconKind::UserX => "user-x",
            IconKind::MapPin => "map-pin",
            IconKind::Bell => "bell",
            IconKind::MailOpen => "mail-open",
            IconKind::Phone => "phone",
            IconKind::Shield => "shield",
            IconKind::Flame => "flame",
            IconKind::Heart => "heart",
            IconKind::Building => "building",
            IconKind::Users => "users",
            IconKind::FileText => "file-text",
            IconKind::DollarSign => "dollar-sign",
            IconKind::Lightbulb => "lightbulb",
            IconKind::Car => "car",
        }
    }
}

/// Display treatment of a single status or priority value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BadgeSpec {
    pub variant: DisplayVariant,
    pub icon: IconKind,
}

impl BadgeSpec {
    pub const fn new(variant: DisplayVariant, icon: IconKind) -> Self {
        Self { variant, icon }
    }
}

/// A closed set of labels (statuses or priorities) with a badge for each.
///
/// Implementors carry an `Unrecognized(String)` arm so that parsing a label
/// never fails; [`Taxonomy::badge`] maps that arm to the fallback badge.
pub trait Taxonomy: Clone + PartialEq + Eq + Hash + Sized {
    /// Every recognized value, in display order
    fn all() -> Vec<Self>;

    /// Human-readable label, exactly as it appears in fixtures
    fn label(&self) -> &str;

    /// Badge for this value. Must be total.
    fn badge(&self) -> BadgeSpec;

    /// Badge used for values outside [`Taxonomy::all`]
    fn fallback() -> BadgeSpec;

    /// Parse a label, falling back to the unrecognized arm
    fn from_label(label: &str) -> Self;

    fn is_recognized(&self) -> bool {
        Self::all().contains(self)
    }
}
