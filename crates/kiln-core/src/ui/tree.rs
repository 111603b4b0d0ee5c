// src/ui/tree.rs
//! Control tree: ownership, coordinates, and per-frame traversal
//!
//! Nodes live in an arena keyed by generational [`WidgetId`] handles. Each
//! node is owned by the tree and referenced from exactly one parent's child
//! list; the parent link is a plain handle, so a destroyed node can never be
//! reached through a stale reference.

use alloc::vec;
use alloc::vec::Vec;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::debug;
use slotmap::{SlotMap, new_key_type};
use thiserror_no_std::Error;

use crate::ui::components::{Button, Label, Panel, Widget};
use crate::ui::core::{Drawable, PointerState, UpdateContext};

new_key_type! {
    /// Stable handle to a node in a [`WidgetTree`]
    pub struct WidgetId;
}

/// Errors from tree mutations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The handle does not name a live node
    #[error("Widget {0:?} is not in the tree")]
    UnknownWidget(WidgetId),

    /// The child exists but hangs under a different parent (or is the root)
    #[error("Widget {child:?} is not a child of {parent:?}")]
    NotAChild {
        /// Parent the caller named
        parent: WidgetId,
        /// Child the caller named
        child: WidgetId,
    },
}

/// Result type for tree operations
pub type TreeResult<T> = Result<T, TreeError>;

/// A control: position, flags, tree links, and the widget it carries
#[derive(Debug, Clone)]
pub struct Node {
    position: Point,
    visible: bool,
    enabled: bool,
    parent: Option<WidgetId>,
    children: Vec<WidgetId>,
    widget: Widget,
}

impl Node {
    fn new(widget: Widget, parent: Option<WidgetId>) -> Self {
        Self {
            position: Point::zero(),
            visible: true,
            enabled: true,
            parent,
            children: Vec::new(),
            widget,
        }
    }

    /// Offset from the parent's world position.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    /// Children in update/draw order.
    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }
}

/// Flags and origin a node passes down to its children during update.
#[derive(Debug, Clone, Copy)]
struct Inherited {
    origin: Point,
    visible: bool,
    enabled: bool,
}

/// Retained widget tree
///
/// The host builds the tree once, mutates it through setters, and once per
/// frame calls [`WidgetTree::update`] then [`WidgetTree::draw`]. Both walk
/// the tree depth-first in insertion order starting at the root.
///
/// # Examples
/// ```ignore
/// let mut tree = WidgetTree::new(Panel::new(Size::new(320, 240)));
/// let ok = tree.attach_at(tree.root(), Point::new(20, 20), Button::new("OK"))?;
///
/// loop {
///     pointer = pointer.advance(cursor, mouse_down);
///     tree.update(&pointer);
///     tree.draw(&mut display)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct WidgetTree {
    nodes: SlotMap<WidgetId, Node>,
    root: WidgetId,
}

impl WidgetTree {
    /// Create a tree whose root carries `root`.
    pub fn new(root: impl Into<Widget>) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new(root.into(), None));
        Self { nodes, root }
    }

    /// Create a tree with a bare control at the root.
    pub fn with_control_root() -> Self {
        Self::new(Widget::Control)
    }

    pub fn root(&self) -> WidgetId {
        self.root
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: WidgetId) -> Option<&Node> {
        self.nodes.get(id)
    }

    fn node_mut(&mut self, id: WidgetId) -> TreeResult<&mut Node> {
        self.nodes.get_mut(id).ok_or(TreeError::UnknownWidget(id))
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Move `widget` into the tree as the last child of `parent`.
    pub fn attach(&mut self, parent: WidgetId, widget: impl Into<Widget>) -> TreeResult<WidgetId> {
        if !self.nodes.contains_key(parent) {
            return Err(TreeError::UnknownWidget(parent));
        }

        let child = self.nodes.insert(Node::new(widget.into(), Some(parent)));
        self.node_mut(parent)?.children.push(child);
        debug!("Attached {:?} under {:?}", child, parent);
        Ok(child)
    }

    /// [`WidgetTree::attach`] and set the local position in one step.
    pub fn attach_at(
        &mut self,
        parent: WidgetId,
        position: Point,
        widget: impl Into<Widget>,
    ) -> TreeResult<WidgetId> {
        let child = self.attach(parent, widget)?;
        self.node_mut(child)?.position = position;
        Ok(child)
    }

    /// Remove `child` from `parent` and destroy it with all descendants.
    ///
    /// Returns the number of destroyed nodes. On error the tree is left
    /// untouched.
    pub fn detach(&mut self, parent: WidgetId, child: WidgetId) -> TreeResult<usize> {
        let node = self.nodes.get(child).ok_or(TreeError::UnknownWidget(child))?;
        if node.parent != Some(parent) {
            return Err(TreeError::NotAChild { parent, child });
        }

        self.node_mut(parent)?.children.retain(|&id| id != child);
        let removed = self.destroy(child);
        debug!("Detached {:?} from {:?} ({} nodes dropped)", child, parent, removed);
        Ok(removed)
    }

    /// Destroy every child of `parent`, returning the number of dropped nodes.
    pub fn clear(&mut self, parent: WidgetId) -> TreeResult<usize> {
        let children = core::mem::take(&mut self.node_mut(parent)?.children);
        let removed: usize = children.into_iter().map(|child| self.destroy(child)).sum();
        debug!("Cleared {:?} ({} nodes dropped)", parent, removed);
        Ok(removed)
    }

    /// Drop a subtree from the arena. The caller unlinks it from its parent.
    fn destroy(&mut self, id: WidgetId) -> usize {
        let mut stack = vec![id];
        let mut removed = 0;
        while let Some(id) = stack.pop() {
            if let Some(mut node) = self.nodes.remove(id) {
                node.parent = None;
                stack.append(&mut node.children);
                removed += 1;
            }
        }
        removed
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    /// Children of `id` in order; empty for unknown handles.
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    // ------------------------------------------------------------------
    // Coordinates and flags
    // ------------------------------------------------------------------

    pub fn position(&self, id: WidgetId) -> Option<Point> {
        self.nodes.get(id).map(|node| node.position)
    }

    pub fn set_position(&mut self, id: WidgetId, position: Point) -> TreeResult<()> {
        self.node_mut(id)?.position = position;
        Ok(())
    }

    /// Local position summed with every ancestor's local position.
    pub fn world_position(&self, id: WidgetId) -> Option<Point> {
        let mut node = self.nodes.get(id)?;
        let mut world = node.position;
        while let Some(parent) = node.parent {
            node = self.nodes.get(parent)?;
            world += node.position;
        }
        Some(world)
    }

    pub fn is_visible(&self, id: WidgetId) -> Option<bool> {
        self.nodes.get(id).map(|node| node.visible)
    }

    pub fn set_visible(&mut self, id: WidgetId, visible: bool) -> TreeResult<()> {
        self.node_mut(id)?.visible = visible;
        Ok(())
    }

    pub fn is_enabled(&self, id: WidgetId) -> Option<bool> {
        self.nodes.get(id).map(|node| node.enabled)
    }

    pub fn set_enabled(&mut self, id: WidgetId, enabled: bool) -> TreeResult<()> {
        self.node_mut(id)?.enabled = enabled;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Widget access
    // ------------------------------------------------------------------

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.nodes.get(id).map(|node| &node.widget)
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.nodes.get_mut(id).map(|node| &mut node.widget)
    }

    pub fn panel(&self, id: WidgetId) -> Option<&Panel> {
        self.widget(id).and_then(Widget::as_panel)
    }

    pub fn panel_mut(&mut self, id: WidgetId) -> Option<&mut Panel> {
        self.widget_mut(id).and_then(Widget::as_panel_mut)
    }

    pub fn label(&self, id: WidgetId) -> Option<&Label> {
        self.widget(id).and_then(Widget::as_label)
    }

    pub fn label_mut(&mut self, id: WidgetId) -> Option<&mut Label> {
        self.widget_mut(id).and_then(Widget::as_label_mut)
    }

    pub fn button(&self, id: WidgetId) -> Option<&Button> {
        self.widget(id).and_then(Widget::as_button)
    }

    pub fn button_mut(&mut self, id: WidgetId) -> Option<&mut Button> {
        self.widget_mut(id).and_then(Widget::as_button_mut)
    }

    /// Top-most visible sized widget whose outer rect contains `point`.
    ///
    /// "Top-most" is the last one in draw order. Hidden subtrees are skipped.
    pub fn widget_at(&self, point: Point) -> Option<WidgetId> {
        let mut hit = None;
        let mut stack = vec![(self.root, Point::zero())];
        while let Some((id, parent_origin)) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            if !node.visible {
                continue;
            }

            let origin = parent_origin + node.position;
            if let Some(sized) = node.widget.as_sizable()
                && sized.outer_rect(origin).contains(point)
            {
                hit = Some(id);
            }

            // Reversed so the first child is popped first, matching draw order.
            stack.extend(node.children.iter().rev().map(|&child| (child, origin)));
        }
        hit
    }

    // ------------------------------------------------------------------
    // Frame traversal
    // ------------------------------------------------------------------

    /// Run one update tick over the whole tree.
    pub fn update(&mut self, pointer: &PointerState) {
        let top = Inherited {
            origin: Point::zero(),
            visible: true,
            enabled: true,
        };
        let mut stack = vec![(self.root, top)];
        while let Some((id, parent)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(id) else {
                continue;
            };

            let inherited = Inherited {
                origin: parent.origin + node.position,
                visible: parent.visible && node.visible,
                enabled: parent.enabled && node.enabled,
            };
            node.widget.update(&UpdateContext {
                origin: inherited.origin,
                visible: inherited.visible,
                enabled: inherited.enabled,
                pointer,
            });

            stack.extend(node.children.iter().rev().map(|&child| (child, inherited)));
        }
    }

    /// Paint the whole tree. Hidden nodes skip their entire subtree.
    pub fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let mut stack = vec![(self.root, Point::zero())];
        while let Some((id, parent_origin)) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            if !node.visible {
                continue;
            }

            let origin = parent_origin + node.position;
            node.widget.draw(origin, display)?;
            stack.extend(node.children.iter().rev().map(|&child| (child, origin)));
        }
        Ok(())
    }
}
