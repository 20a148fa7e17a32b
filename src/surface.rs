//! The abstract rendering surface the windowing core draws against.
//!
//! The core never talks to a concrete rendering technology. Everything it
//! needs is the narrow capability set below: create an element, mutate its
//! geometry/visibility/stacking, play an exit transition, remove it, and
//! query the container's bounding box. Pointer and resize events are pushed
//! *into* the core by whoever owns the real event source (see the terminal
//! driver in `main.rs`), so the trait stays a pure sink plus one geometry
//! query.

use std::collections::BTreeMap;

use crate::geometry::Rect;

/// Opaque handle to a surface element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// What a surface element represents. Backends may use this to pick styling;
/// the core only cares about the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    WindowFrame,
    TaskButton,
    StatusSection,
}

/// Exit transitions are surface policy: an animated backend can play them,
/// a terminal backend treats them as immediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Minimize,
    Close,
    TaskRemove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// The pointer left the tracked surface or the surface lost focus while a
    /// gesture might be in flight. Treated as a defensive release.
    Cancel,
}

/// A pointer event in surface-global coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: i32,
    pub y: i32,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, x: i32, y: i32) -> Self {
        Self { phase, x, y }
    }
}

pub trait Surface {
    fn create_node(&mut self, kind: NodeKind) -> NodeId;
    fn set_rect(&mut self, node: NodeId, rect: Rect);
    fn set_visible(&mut self, node: NodeId, visible: bool);
    fn set_stacking(&mut self, node: NodeId, stacking: i64);
    fn set_label(&mut self, node: NodeId, label: &str);
    fn play_transition(&mut self, node: NodeId, transition: Transition);
    fn remove_node(&mut self, node: NodeId);

    /// Re-read the container's bounding box. Callers must not assume the
    /// result is stable between calls; the container can resize at any time.
    fn container_bounds(&mut self) -> Rect;
}

/// Recorded state of a [`HeadlessSurface`] node.
#[derive(Debug, Clone)]
pub struct NodeState {
    pub kind: NodeKind,
    pub rect: Rect,
    pub visible: bool,
    pub stacking: i64,
    pub label: String,
}

/// In-memory surface with settable container bounds.
///
/// This is a complete backend, not a test stub: it records every mutation so
/// embedders (and this crate's tests) can observe exactly what the core would
/// have drawn.
#[derive(Debug)]
pub struct HeadlessSurface {
    next_node: u64,
    nodes: BTreeMap<NodeId, NodeState>,
    bounds: Rect,
    transitions: Vec<(NodeId, Transition)>,
}

impl HeadlessSurface {
    pub fn new(bounds: Rect) -> Self {
        Self {
            next_node: 0,
            nodes: BTreeMap::new(),
            bounds,
            transitions: Vec::new(),
        }
    }

    pub fn set_container_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn node(&self, node: NodeId) -> Option<&NodeState> {
        self.nodes.get(&node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All transitions played so far, in order.
    pub fn transitions(&self) -> &[(NodeId, Transition)] {
        &self.transitions
    }
}

impl Surface for HeadlessSurface {
    fn create_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        self.nodes.insert(
            id,
            NodeState {
                kind,
                rect: Rect::ZERO,
                visible: true,
                stacking: 0,
                label: String::new(),
            },
        );
        id
    }

    fn set_rect(&mut self, node: NodeId, rect: Rect) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.rect = rect;
        }
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.visible = visible;
        }
    }

    fn set_stacking(&mut self, node: NodeId, stacking: i64) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.stacking = stacking;
        }
    }

    fn set_label(&mut self, node: NodeId, label: &str) {
        if let Some(state) = self.nodes.get_mut(&node) {
            state.label = label.to_string();
        }
    }

    fn play_transition(&mut self, node: NodeId, transition: Transition) {
        self.transitions.push((node, transition));
    }

    fn remove_node(&mut self, node: NodeId) {
        self.nodes.remove(&node);
    }

    fn container_bounds(&mut self) -> Rect {
        self.bounds
    }
}
