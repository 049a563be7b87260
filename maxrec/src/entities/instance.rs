use crate::PackingError;
use crate::entities::{Piece, Sheet, Spacing};

/// A single packing problem: as many copies of `piece` as possible on `sheet`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackingInput {
    pub sheet: Sheet,
    pub piece: Piece,
    pub spacing: Spacing,
    /// Border kept free along all four edges of the sheet
    pub margin: f64,
}

impl PackingInput {
    pub fn new(sheet: Sheet, piece: Piece) -> Self {
        Self {
            sheet,
            piece,
            spacing: Spacing::default(),
            margin: 0.0,
        }
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Checks every dimension, in the order they appear in the external representation.
    pub fn validate(&self) -> Result<(), PackingError> {
        let strictly_positive = [
            ("sheetWidth", self.sheet.width),
            ("sheetHeight", self.sheet.height),
            ("pieceWidth", self.piece.width),
            ("pieceHeight", self.piece.height),
        ];
        let non_negative = [
            ("spacingX", self.spacing.x),
            ("spacingY", self.spacing.y),
            ("margin", self.margin),
        ];

        for (field, value) in strictly_positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PackingError::InvalidDimension { field, value });
            }
        }
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(PackingError::InvalidDimension { field, value });
            }
        }
        Ok(())
    }

    /// Width of the sheet left after removing the margin on both sides, can be negative
    pub fn usable_width(&self) -> f64 {
        self.sheet.width - 2.0 * self.margin
    }

    /// Height of the sheet left after removing the margin on both sides, can be negative
    pub fn usable_height(&self) -> f64 {
        self.sheet.height - 2.0 * self.margin
    }
}
