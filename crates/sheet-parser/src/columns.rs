//! Header and column inference for point tables.
//!
//! Point tables come in two layouts. The two-row layout has "Left"/"Right"
//! anchors in the first header row and X/Y/Z labels underneath them. The
//! single-row layout has only the anchors, with coordinates in the three
//! columns following each anchor. Which columns hold which axis is decided
//! by an ordered list of [`AxisRule`]s; the first rule that yields a column
//! wins.

use susp_types::Row;

use crate::blocks::{header_texts, POINT_NAME};

/// Fallback index of the name column when "Point Name" is absent.
pub const DEFAULT_NAME_COLUMN: usize = 1;

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    /// Position within an X/Y/Z triple.
    pub fn offset(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// The one or two header rows at the top of a block.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderFrame {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    /// The second row carries all of "X", "Y" and "Z".
    pub has_subheader: bool,
}

impl HeaderFrame {
    pub fn from_rows(rows: &[Row]) -> Self {
        let primary = rows.first().map(|r| header_texts(r)).unwrap_or_default();
        let secondary = rows.get(1).map(|r| header_texts(r)).unwrap_or_default();
        let has_subheader = ["X", "Y", "Z"]
            .iter()
            .all(|label| secondary.iter().any(|h| h == label));
        Self {
            primary,
            secondary,
            has_subheader,
        }
    }

    /// Index of an exact label in the primary header row.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.primary.iter().position(|h| h == label)
    }

    pub fn name_column(&self) -> usize {
        self.position(POINT_NAME).unwrap_or(DEFAULT_NAME_COLUMN)
    }

    /// Block-relative row index of the first data row.
    pub fn data_start(&self) -> usize {
        if self.has_subheader {
            2
        } else {
            1
        }
    }

    fn secondary_label(&self, label: &str, from: usize, to: usize) -> Option<usize> {
        (from..to).find(|&j| self.secondary.get(j).is_some_and(|h| h == label))
    }
}

/// A single column-resolution rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisRule {
    /// Literal axis label in the subheader, inside the anchor's span. Y and
    /// Z are searched after the X column when X was found.
    SubheaderLabel,
    /// Y and Z immediately follow X.
    ContiguousAfterX,
    /// Single-row layout: X, Y, Z sit at anchor+1, anchor+2, anchor+3.
    AnchorOffset,
}

/// Rules tried, in order, when a subheader is present.
pub const SUBHEADER_RULES: &[AxisRule] = &[AxisRule::SubheaderLabel, AxisRule::ContiguousAfterX];

/// Rules tried, in order, for the single-row layout.
pub const SINGLE_ROW_RULES: &[AxisRule] = &[AxisRule::AnchorOffset];

/// Everything a rule needs to resolve one axis of one side.
#[derive(Debug, Clone, Copy)]
pub struct AxisContext<'a> {
    pub frame: &'a HeaderFrame,
    pub anchor: usize,
    /// Exclusive end of the anchor's span in the subheader.
    pub span_end: usize,
    /// Already-resolved X column, if any.
    pub x: Option<usize>,
}

impl AxisRule {
    pub fn apply(self, ctx: &AxisContext<'_>, axis: Axis) -> Option<usize> {
        match self {
            AxisRule::SubheaderLabel => {
                let from = match axis {
                    Axis::X => ctx.anchor,
                    Axis::Y | Axis::Z => ctx.x.map_or(ctx.anchor, |x| x + 1),
                };
                ctx.frame.secondary_label(axis.label(), from, ctx.span_end)
            }
            AxisRule::ContiguousAfterX => match axis {
                Axis::X => None,
                Axis::Y | Axis::Z => ctx.x.map(|x| x + axis.offset()),
            },
            AxisRule::AnchorOffset => Some(ctx.anchor + 1 + axis.offset()),
        }
    }
}

/// First column produced by `rules`, in order.
pub fn resolve(rules: &[AxisRule], ctx: &AxisContext<'_>, axis: Axis) -> Option<usize> {
    rules.iter().find_map(|rule| rule.apply(ctx, axis))
}

/// Resolved coordinate columns for one side of a point table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisColumns {
    pub x: Option<usize>,
    pub y: Option<usize>,
    pub z: Option<usize>,
}

impl AxisColumns {
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }

    pub fn get(&self, axis: Axis) -> Option<usize> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Resolve the X/Y/Z columns for the side anchored at `anchor`.
///
/// `stop` is the next anchor; the span ends there when it lies after
/// `anchor`, otherwise at the end of the subheader. No anchor means the
/// side has no columns at all.
pub fn axis_columns(frame: &HeaderFrame, anchor: Option<usize>, stop: Option<usize>) -> AxisColumns {
    let Some(anchor) = anchor else {
        return AxisColumns::default();
    };

    let rules = if frame.has_subheader {
        SUBHEADER_RULES
    } else {
        SINGLE_ROW_RULES
    };
    let span_end = match stop {
        Some(stop) if stop > anchor => stop,
        _ => frame.secondary.len(),
    };

    let mut ctx = AxisContext {
        frame,
        anchor,
        span_end,
        x: None,
    };
    let x = resolve(rules, &ctx, Axis::X);
    ctx.x = x;
    AxisColumns {
        x,
        y: resolve(rules, &ctx, Axis::Y),
        z: resolve(rules, &ctx, Axis::Z),
    }
}

/// Column layout of a point table.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLayout {
    pub name: usize,
    pub left: AxisColumns,
    pub right: AxisColumns,
    pub data_start: usize,
}

impl PointLayout {
    pub fn infer(frame: &HeaderFrame) -> Self {
        let left_anchor = frame.position("Left");
        let right_anchor = frame.position("Right");
        Self {
            name: frame.name_column(),
            left: axis_columns(frame, left_anchor, right_anchor),
            right: axis_columns(frame, right_anchor, None),
            data_start: frame.data_start(),
        }
    }
}
