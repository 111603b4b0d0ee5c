//! Layout primitives for consistent spacing and dimensions
//!
//! This module provides the spacing scale and the four-sided [`Edges`] value
//! used for padding, borders, and margins throughout the box model.

use serde::{Deserialize, Serialize};

// ============================================================================
// Spacing
// ============================================================================

/// Standard spacing scale for consistent layout
///
/// Use these values for margins, padding, and offsets between sibling
/// controls to keep a regular visual rhythm across the interface.
///
/// # Examples
///
/// ```ignore
/// // Use spacing for padding
/// Edges::all(Spacing::default().medium)
///
/// // Or access directly
/// let gap = Spacing::default().large;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    /// Minimal spacing (2px) - for tight elements or fine adjustments
    pub tiny: u32,

    /// Small spacing (4px) - for compact layouts
    pub small: u32,

    /// Medium spacing (8px) - standard spacing for most elements
    pub medium: u32,

    /// Large spacing (16px) - for major sections or breathing room
    pub large: u32,

    /// Extra large spacing (24px) - for page-level separation
    pub xlarge: u32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            tiny: 2,
            small: 4,
            medium: 8,
            large: 16,
            xlarge: 24,
        }
    }
}

// ============================================================================
// Edges
// ============================================================================

/// Four-sided spacing value (top, right, bottom, left)
///
/// The same type describes padding, border widths, and margins. All sides
/// are unsigned pixel counts, so a negative edge cannot be expressed.
///
/// # Examples
///
/// ```ignore
/// // Equal spacing on all sides (8px)
/// let e = Edges::all(8);
///
/// // Different vertical (12px) and horizontal (16px)
/// let e = Edges::symmetric(12, 16);
///
/// // Individual control: top=8, right=16, bottom=8, left=16
/// let e = Edges::new(8, 16, 8, 16);
///
/// // Calculate total space consumed
/// let total_width = e.horizontal();  // left + right
/// let total_height = e.vertical();   // top + bottom
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Edges {
    /// Top edge (pixels)
    pub top: u32,

    /// Right edge (pixels)
    pub right: u32,

    /// Bottom edge (pixels)
    pub bottom: u32,

    /// Left edge (pixels)
    pub left: u32,
}

impl Edges {
    /// Edges with every side set to zero.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates equal spacing on all sides
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let e = Edges::all(8);  // 8px on all sides
    /// ```
    pub const fn all(value: u32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Creates symmetric spacing (vertical and horizontal)
    ///
    /// # Arguments
    /// * `vertical` - Spacing for top and bottom (pixels)
    /// * `horizontal` - Spacing for left and right (pixels)
    pub const fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Creates edges with individual control for each side
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Returns total horizontal spacing (left + right), saturating
    pub const fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Returns total vertical spacing (top + bottom), saturating
    pub const fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }

    /// Side-by-side sum of two edge values, saturating at `u32::MAX`.
    pub const fn combine(&self, other: Edges) -> Edges {
        Edges::new(
            self.top.saturating_add(other.top),
            self.right.saturating_add(other.right),
            self.bottom.saturating_add(other.bottom),
            self.left.saturating_add(other.left),
        )
    }

    /// True when every side is zero.
    pub const fn is_zero(&self) -> bool {
        self.top == 0 && self.right == 0 && self.bottom == 0 && self.left == 0
    }
}
