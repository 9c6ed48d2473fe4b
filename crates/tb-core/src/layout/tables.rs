//! Static piece tables
//!
//! Origins are `[spacing, X, Y, Z]` coefficients. Sides are listed top,
//! right, bottom, left: `TJ` tabs, `HJ` holes, `TP`/`HP` plain sides whose
//! joint only decides which corners are inset.

use super::Axis::{X, Y, Z};
use super::PieceRole::{Floor, LongWall, ShortWall};
use super::{
    Axis, BoxType, Edge, Joint, LayoutStyle, PieceDescriptor, PieceRole, Placement, SideSpec,
    Sides,
};

const TJ: SideSpec = SideSpec::new(Joint::Tab, Edge::Jointed);
const HJ: SideSpec = SideSpec::new(Joint::Hole, Edge::Jointed);
const TP: SideSpec = SideSpec::new(Joint::Tab, Edge::Plain);
const HP: SideSpec = SideSpec::new(Joint::Hole, Edge::Plain);

const fn piece(
    x: [i8; 4],
    y: [i8; 4],
    width: Axis,
    height: Axis,
    sides: [SideSpec; 4],
    role: PieceRole,
) -> PieceDescriptor {
    PieceDescriptor {
        origin: [Placement::new(x), Placement::new(y)],
        width,
        height,
        sides: Sides::new(sides),
        role,
    }
}

pub(super) fn lookup(box_type: BoxType, layout: LayoutStyle) -> &'static [PieceDescriptor] {
    use LayoutStyle::{Diagrammatic, DiagrammaticAlt, InlineCompact, ThreePiece};

    match (box_type, layout) {
        (BoxType::FullyEnclosed, Diagrammatic) => FULLY_ENCLOSED_DIAGRAMMATIC,
        (BoxType::FullyEnclosed, ThreePiece) => FULLY_ENCLOSED_THREE_PIECE,
        (BoxType::FullyEnclosed, InlineCompact) => FULLY_ENCLOSED_INLINE,
        (BoxType::FullyEnclosed, DiagrammaticAlt) => FULLY_ENCLOSED_DIAGRAMMATIC_ALT,
        (BoxType::OneOpen, Diagrammatic) => ONE_OPEN_DIAGRAMMATIC,
        (BoxType::OneOpen, ThreePiece) => ONE_OPEN_THREE_PIECE,
        (BoxType::OneOpen, InlineCompact) => ONE_OPEN_INLINE,
        (BoxType::OneOpen, DiagrammaticAlt) => ONE_OPEN_DIAGRAMMATIC_ALT,
        (BoxType::TwoOpenAdjacent, Diagrammatic) => TWO_OPEN_DIAGRAMMATIC,
        (BoxType::TwoOpenAdjacent, ThreePiece) => TWO_OPEN_THREE_PIECE,
        (BoxType::TwoOpenAdjacent, InlineCompact) => TWO_OPEN_INLINE,
        (BoxType::TwoOpenAdjacent, DiagrammaticAlt) => TWO_OPEN_DIAGRAMMATIC_ALT,
        (BoxType::ThreeOpen, ThreePiece) => THREE_OPEN_THREE_PIECE,
        (BoxType::ThreeOpen, Diagrammatic | InlineCompact | DiagrammaticAlt) => THREE_OPEN_SPREAD,
        (BoxType::OppositeOpen, Diagrammatic) => OPPOSITE_OPEN_DIAGRAMMATIC,
        (BoxType::OppositeOpen, ThreePiece) => OPPOSITE_OPEN_TWO_PIECE,
        (BoxType::OppositeOpen, InlineCompact) => OPPOSITE_OPEN_INLINE,
        (BoxType::OppositeOpen, DiagrammaticAlt) => OPPOSITE_OPEN_DIAGRAMMATIC_ALT,
        (BoxType::TwoJoined, _) => TWO_JOINED_ALL,
    }
}

static FULLY_ENCLOSED_DIAGRAMMATIC: &[PieceDescriptor] = &[
    piece([2, 0, 0, 1], [3, 0, 1, 1], X, Z, [TJ, HJ, TJ, HJ], LongWall),
    piece([1, 0, 0, 0], [2, 0, 0, 1], Z, Y, [TJ, TJ, TJ, TJ], ShortWall),
    piece([2, 0, 0, 1], [2, 0, 0, 1], X, Y, [HJ, HJ, HJ, HJ], Floor),
    piece([3, 1, 0, 1], [2, 0, 0, 1], Z, Y, [TJ, TJ, TJ, TJ], ShortWall),
    piece([4, 1, 0, 2], [2, 0, 0, 1], X, Y, [HJ, HJ, HJ, HJ], Floor),
    piece([2, 0, 0, 1], [1, 0, 0, 0], X, Z, [TJ, HJ, TJ, HJ], LongWall),
];

static FULLY_ENCLOSED_THREE_PIECE: &[PieceDescriptor] = &[
    piece([2, 0, 0, 1], [2, 0, 1, 0], X, Z, [TJ, HJ, TJ, HJ], LongWall),
    piece([1, 0, 0, 0], [1, 0, 0, 0], Z, Y, [TJ, TJ, TJ, TJ], ShortWall),
    piece([2, 0, 0, 1], [1, 0, 0, 0], X, Y, [HJ, HJ, HJ, HJ], Floor),
];

static FULLY_ENCLOSED_INLINE: &[PieceDescriptor] = &[
    piece([5, 2, 0, 2], [1, 0, 0, 0], X, Z, [TJ, TJ, TJ, TJ], LongWall),
    piece([3, 2, 0, 0], [1, 0, 0, 0], Z, Y, [HJ, TJ, HJ, TJ], ShortWall),
    piece([6, 3, 0, 2], [1, 0, 0, 0], X, Z, [TJ, TJ, TJ, TJ], LongWall),
    piece([4, 2, 0, 1], [1, 0, 0, 0], Z, Y, [HJ, TJ, HJ, TJ], ShortWall),
    piece([2, 1, 0, 0], [1, 0, 0, 0], X, Y, [HJ, HJ, HJ, HJ], Floor),
    piece([1, 0, 0, 0], [1, 0, 0, 0], X, Y, [HJ, HJ, HJ, HJ], Floor),
];

static FULLY_ENCLOSED_DIAGRAMMATIC_ALT: &[PieceDescriptor] = &[
    piece([2, 0, 0, 1], [3, 0, 1, 1], X, Z, [TJ, HJ, HJ, TJ], LongWall),
    piece([1, 0, 0, 0], [2, 0, 0, 1], Z, Y, [TJ, TJ, HJ, HJ], ShortWall),
    piece([2, 0, 0, 1], [2, 0, 0, 1], X, Y, [TJ, TJ, HJ, HJ], Floor),
    piece([3, 1, 0, 1], [2, 0, 0, 1], Z, Y, [HJ, TJ, TJ, HJ], ShortWall),
    piece([4, 1, 0, 2], [2, 0, 0, 1], X, Y, [HJ, TJ, TJ, HJ], Floor),
    piece([2, 0, 0, 1], [1, 0, 0, 0], X, Z, [TJ, TJ, HJ, HJ], LongWall),
];

static ONE_OPEN_DIAGRAMMATIC: &[PieceDescriptor] = &[
    piece([2, 0, 0, 1], [3, 0, 1, 1], X, Z, [TJ, HJ, TP, HJ], LongWall),
    piece([1, 0, 0, 0], [2, 0, 0, 1], Z, Y, [TJ, TJ, TJ, TP], ShortWall),
    piece([2, 0, 0, 1], [2, 0, 0, 1], X, Y, [HJ, HJ, HJ, HJ], Floor),
    piece([3, 1, 0, 1], [2, 0, 0, 1], Z, Y, [TJ, TP, TJ, TJ], ShortWall),
    piece([2, 0, 0, 1], [1, 0, 0, 0], X, Z, [TP, HJ, TJ, HJ], LongWall),
];

static ONE_OPEN_THREE_PIECE: &[PieceDescriptor] = &[
    piece([2, 0, 0, 1], [2, 0, 1, 0], X, Z, [TJ, HJ, TP, HJ], LongWall),
    piece([1, 0, 0, 0], [1, 0, 0, 0], Z, Y, [TJ, TJ, TJ, TP], ShortWall),
    piece([2, 0, 0, 1], [1, 0, 0, 0], X, Y, [HJ, HJ, HJ, HJ], Floor),
];

static ONE_OPEN_INLINE: &[PieceDescriptor] = &[
    piece([5, 2, 0, 2], [1, 0, 0, 0], X, Z, [TJ, TJ, TP, TJ], LongWall),
    piece([3, 2, 0, 0], [1, 0, 0, 0], Z, Y, [HJ, TJ, HJ, TP], ShortWall),
    piece([4, 2, 0, 1], [1, 0, 0, 0], Z, Y, [HJ, TP, HJ, TJ], ShortWall),
    piece([2, 1, 0, 0], [1, 0, 0, 0], X, Y, [HJ, HJ, HJ, HJ], Floor),
    piece([6, 3, 0, 2], [1, 0, 0, 0], X, Z, [TP, TJ, TJ, TJ], LongWall),
];

static ONE_OPEN_DIAGRAMMATIC_ALT: &[PieceDescriptor] = &[
    piece([2, 0, 0, 1], [3, 0, 1, 1], X, Z, [TJ, HJ, HP, TJ], LongWall),
    piece([1, 0, 0, 0], [2, 0, 0, 1], Z, Y, [TJ, TJ, HJ, HP], ShortWall),
    piece([2, 0, 0, 1], [2, 0, 0, 1], X, Y, [TJ, TJ, HJ, HJ], Floor),
    piece([3, 1, 0, 1], [2, 0, 0, 1], Z, Y, [HJ, TP, TJ, HJ], ShortWall),
    piece([4, 1, 0, 2], [2, 0, 0, 1], X, Y, [HP, TP, TP, HP], Floor),
    piece([2, 0, 0, 1], [1, 0, 0, 0], X, Z, [TP, TJ, HJ, HJ], LongWall),
];

static TWO_OPEN_DIAGRAMMATIC: &[PieceDescriptor] = &[
    piece([2, 0, 0, 1], [1, 0, 0, 0], X, Z, [TP, HJ, TJ, HJ], LongWall),
    piece([1, 0, 0, 0], [2, 0, 0, 1], Z, Y, [TJ, TJ, TP, TP], ShortWall),
    piece([2, 0, 0, 1], [2, 0, 0, 1], X, Y, [HJ, HJ, TP, HJ], Floor),
    piece([3, 1, 0, 1], [2, 0, 0, 1], Z, Y, [TJ, TP, TP, TJ], ShortWall),
];

static TWO_OPEN_THREE_PIECE: &[PieceDescriptor] = &[
    piece([2, 0, 0, 1], [1, 0, 0, 0], X, Z, [TP, HJ, TJ, HJ], LongWall),
    piece([1, 0, 0, 0], [2, 0, 0, 1], Z, Y, [TJ, TJ, TP, TP], ShortWall),
    piece([2, 0, 0, 1], [2, 0, 0, 1], X, Y, [HJ, HJ, TP, HJ], Floor),
];

static TWO_OPEN_INLINE: &[PieceDescriptor] = &[
    piece([2, 2, 0, 2], [1, 0, 0, 0], X, Z, [TP, HJ, TJ, HJ], LongWall),
    piece([3, 2, 0, 0], [1, 0, 0, 0], Z, Y, [TJ, TJ, TP, TP], ShortWall),
    piece([2, 1, 0, 0], [1, 0, 0, 0], X, Y, [HJ, HJ, TP, HJ], Floor),
    piece([4, 2, 0, 1], [1, 0, 0, 0], Z, Y, [TJ, TP, TP, TJ], ShortWall),
];

static TWO_OPEN_DIAGRAMMATIC_ALT: &[PieceDescriptor] = &[
    piece([2, 0, 0, 1], [1, 0, 0, 0], X, Z, [TP, TJ, HJ, HJ], LongWall),
    piece([1, 0, 0, 0], [2, 0, 0, 1], Z, Y, [TJ, TJ, TP, TP], ShortWall),
    piece([2, 0, 0, 1], [2, 0, 0, 1], X, Y, [TJ, TJ, TP, HJ], Floor),
    piece([3, 1, 0, 1], [2, 0, 0, 1], Z, Y, [HJ, TP, TP, HJ], ShortWall),
];

static THREE_OPEN_THREE_PIECE: &[PieceDescriptor] = &[
    piece([2, 2, 0, 0], [2, 0, 1, 0], X, Z, [TJ, TP, TP, TJ], LongWall),
    piece([1, 0, 0, 0], [1, 0, 0, 0], Z, Y, [TP, TJ, TJ, TP], ShortWall),
    piece([2, 2, 0, 0], [1, 0, 0, 0], X, Y, [TP, TP, HJ, HJ], Floor),
];

static THREE_OPEN_SPREAD: &[PieceDescriptor] = &[
    piece([3, 3, 0, 0], [1, 0, 0, 0], X, Z, [TJ, TP, TP, HJ], LongWall),
    piece([1, 0, 0, 0], [1, 0, 0, 0], Z, Y, [TP, TJ, TJ, TP], ShortWall),
    piece([2, 2, 0, 0], [1, 0, 0, 0], X, Y, [TP, TP, HJ, HJ], Floor),
];

static OPPOSITE_OPEN_DIAGRAMMATIC: &[PieceDescriptor] = &[
    piece([2, 0, 0, 1], [3, 0, 1, 1], X, Z, [TP, HJ, TP, HJ], LongWall),
    piece([3, 1, 0, 1], [2, 0, 0, 1], Z, Y, [TJ, TP, TJ, TP], ShortWall),
    piece([2, 0, 0, 1], [1, 0, 0, 0], X, Z, [TP, HJ, TP, HJ], LongWall),
    piece([1, 0, 0, 0], [2, 0, 0, 1], Z, Y, [TJ, TP, TJ, TP], ShortWall),
];

static OPPOSITE_OPEN_TWO_PIECE: &[PieceDescriptor] = &[
    piece([1, 0, 0, 1], [1, 0, 1, 1], X, Z, [TP, HJ, TP, HJ], LongWall),
    piece([2, 1, 0, 1], [1, 0, 0, 1], Z, Y, [TJ, TP, TJ, TP], ShortWall),
];

static OPPOSITE_OPEN_INLINE: &[PieceDescriptor] = &[
    piece([1, 0, 0, 0], [1, 0, 0, 0], X, Z, [TP, HJ, TP, HJ], LongWall),
    piece([3, 2, 0, 0], [1, 0, 0, 0], Z, Y, [TJ, TP, TJ, TP], ShortWall),
    piece([2, 1, 0, 0], [1, 0, 0, 0], X, Z, [TP, HJ, TP, HJ], LongWall),
    piece([4, 2, 0, 1], [2, 0, 0, 0], Z, Y, [TJ, TP, TJ, TP], ShortWall),
];

static OPPOSITE_OPEN_DIAGRAMMATIC_ALT: &[PieceDescriptor] = &[
    piece([2, 0, 0, 1], [3, 0, 1, 1], X, Z, [TP, HJ, TP, TJ], LongWall),
    piece([3, 1, 0, 1], [2, 0, 0, 1], Z, Y, [HJ, TP, TJ, TP], ShortWall),
    piece([2, 0, 0, 1], [1, 0, 0, 0], X, Z, [TP, TJ, TP, HJ], LongWall),
    piece([1, 0, 0, 0], [2, 0, 0, 1], Z, Y, [TJ, TP, HJ, TP], ShortWall),
];

static TWO_JOINED_ALL: &[PieceDescriptor] = &[
    piece([1, 0, 0, 0], [1, 0, 0, 0], X, Y, [TP, HJ, TP, TP], Floor),
    piece([2, 1, 0, 0], [1, 0, 0, 0], Z, Y, [TP, TP, TP, TJ], ShortWall),
];

