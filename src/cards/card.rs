use bevy_egui::egui::Color32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::theme;

/// A card's declared size preference.
///
/// Absent tokens default to `Medium`; a stored string that names no known
/// token parses to `Small` so that bad data shrinks a card instead of
/// breaking the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeToken {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizeToken {
    /// Parse a stored token string. Unknown values fall back to `Small`.
    pub fn parse(value: &str) -> Self {
        match value {
            "small" => SizeToken::Small,
            "medium" => SizeToken::Medium,
            "large" => SizeToken::Large,
            _ => SizeToken::Small,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeToken::Small => "small",
            SizeToken::Medium => "medium",
            SizeToken::Large => "large",
        }
    }
}

impl Serialize for SizeToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SizeToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(SizeToken::parse(&value))
    }
}

/// The (row span, column span) cell rectangle a card occupies in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    pub row_span: usize,
    pub col_span: usize,
}

impl Footprint {
    pub const fn new(row_span: usize, col_span: usize) -> Self {
        Self { row_span, col_span }
    }

    /// Correct non-positive spans to 1. The solver assumes this has run.
    pub fn normalized(self) -> Self {
        Self {
            row_span: self.row_span.max(1),
            col_span: self.col_span.max(1),
        }
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// The device/entity family a card represents.
///
/// Kinds only classify the tile for sizing and styling; entity state and
/// service calls live with the automation backend, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Light,
    Switch,
    Climate,
    MediaPlayer,
    Camera,
    Calendar,
    Todo,
    Vacuum,
    Energy,
    Sensor,
}

impl CardKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            CardKind::Light => "Light",
            CardKind::Switch => "Switch",
            CardKind::Climate => "Climate",
            CardKind::MediaPlayer => "Media Player",
            CardKind::Camera => "Camera",
            CardKind::Calendar => "Calendar",
            CardKind::Todo => "Todo",
            CardKind::Vacuum => "Vacuum",
            CardKind::Energy => "Energy",
            CardKind::Sensor => "Sensor",
        }
    }

    /// Calendar and todo cards grow by rows rather than columns.
    pub fn is_schedule(&self) -> bool {
        matches!(self, CardKind::Calendar | CardKind::Todo)
    }

    pub fn accent_color(&self) -> Color32 {
        match self {
            CardKind::Light | CardKind::Switch => theme::ACCENT_LIGHT,
            CardKind::Climate => theme::ACCENT_CLIMATE,
            CardKind::MediaPlayer => theme::ACCENT_MEDIA,
            CardKind::Camera => theme::ACCENT_CAMERA,
            CardKind::Calendar | CardKind::Todo => theme::ACCENT_SCHEDULE,
            CardKind::Vacuum => theme::ACCENT_VACUUM,
            CardKind::Energy => theme::ACCENT_ENERGY,
            CardKind::Sensor => theme::ACCENT_SENSOR,
        }
    }
}

/// Resolve a card's occupied footprint from its size preference.
///
/// An explicit span override always wins over the token. Schedule-family
/// cards (calendar, todo) map small/medium/large to 1/2/4 rows at one column;
/// every other family stays one row tall and goes wide at `large`.
pub fn footprint_for(
    kind: CardKind,
    token: Option<SizeToken>,
    span_override: Option<Footprint>,
) -> Footprint {
    if let Some(span) = span_override {
        return span.normalized();
    }

    let token = token.unwrap_or_default();
    if kind.is_schedule() {
        match token {
            SizeToken::Small => Footprint::new(1, 1),
            SizeToken::Medium => Footprint::new(2, 1),
            SizeToken::Large => Footprint::new(4, 1),
        }
    } else {
        match token {
            SizeToken::Small | SizeToken::Medium => Footprint::new(1, 1),
            SizeToken::Large => Footprint::new(1, 2),
        }
    }
}

/// A single placeable dashboard tile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDef {
    /// Stable unique identifier within the page.
    pub id: String,
    pub kind: CardKind,
    pub title: String,
    /// Size preference; absent means the family default (medium).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeToken>,
    /// Explicit footprint override; wins over `size` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Footprint>,
}

impl CardDef {
    pub fn new(id: impl Into<String>, kind: CardKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            size: None,
            span: None,
        }
    }

    pub fn with_size(mut self, size: SizeToken) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_span(mut self, row_span: usize, col_span: usize) -> Self {
        self.span = Some(Footprint::new(row_span, col_span));
        self
    }

    /// The footprint this card requests from the solver.
    pub fn footprint(&self) -> Footprint {
        footprint_for(self.kind, self.size, self.span)
    }
}
