//! Assignment trace.
//!
//! When enabled, every assignment is recorded with its position in the frame
//! of the invocation that made it. Frames form a tree mirroring the call
//! structure, rooted at the top-level scope. Frames live in an arena and
//! refer to each other by index.

use std::fmt::Write as _;

use pseudo_ir::{Position, Value};

/// Index of a frame in the recorder's arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(usize);

impl FrameId {
    pub const ROOT: FrameId = FrameId(0);
}

/// One recorded assignment.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceEntry {
    pub pos: Position,
    pub name: String,
    pub value: Value,
}

/// Something that happened inside a frame, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceEvent {
    Assign(TraceEntry),
    Call(FrameId),
}

/// Record of one program or module invocation.
#[derive(Clone, Debug)]
pub struct TraceFrame {
    pub name: String,
    pub events: Vec<TraceEvent>,
    parent: Option<FrameId>,
}

impl TraceFrame {
    /// Assignments made directly in this frame.
    pub fn entries(&self) -> impl Iterator<Item = &TraceEntry> {
        self.events.iter().filter_map(|e| match e {
            TraceEvent::Assign(entry) => Some(entry),
            TraceEvent::Call(_) => None,
        })
    }

    /// Invocations made from this frame.
    pub fn children(&self) -> impl Iterator<Item = FrameId> + '_ {
        self.events.iter().filter_map(|e| match e {
            TraceEvent::Call(id) => Some(*id),
            TraceEvent::Assign(_) => None,
        })
    }
}

/// Builds the trace tree as the interpreter runs.
#[derive(Clone, Debug)]
pub struct TraceRecorder {
    frames: Vec<TraceFrame>,
    current: FrameId,
}

/// Name of the root frame.
pub const ROOT_NAME: &str = "<top level>";

impl TraceRecorder {
    pub fn new() -> Self {
        TraceRecorder {
            frames: vec![TraceFrame {
                name: ROOT_NAME.to_string(),
                events: Vec::new(),
                parent: None,
            }],
            current: FrameId::ROOT,
        }
    }

    /// Open a child frame of the current one and make it current.
    pub fn enter(&mut self, name: &str) -> FrameId {
        let id = FrameId(self.frames.len());
        self.frames.push(TraceFrame {
            name: name.to_string(),
            events: Vec::new(),
            parent: Some(self.current),
        });
        self.frames[self.current.0].events.push(TraceEvent::Call(id));
        self.current = id;
        id
    }

    /// Return to the parent of the current frame. No-op at the root.
    pub fn exit(&mut self) {
        if let Some(parent) = self.frames[self.current.0].parent {
            self.current = parent;
        }
    }

    pub fn record(&mut self, pos: Position, name: &str, value: &Value) {
        self.frames[self.current.0]
            .events
            .push(TraceEvent::Assign(TraceEntry {
                pos,
                name: name.to_string(),
                value: value.clone(),
            }));
    }

    pub fn root(&self) -> &TraceFrame {
        &self.frames[FrameId::ROOT.0]
    }

    pub fn frame(&self, id: FrameId) -> &TraceFrame {
        &self.frames[id.0]
    }

    pub fn current(&self) -> FrameId {
        self.current
    }

    /// Plain indented listing, two spaces per call level.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_frame(FrameId::ROOT, 0, &mut out);
        out
    }

    fn render_frame(&self, id: FrameId, depth: usize, out: &mut String) {
        let frame = self.frame(id);
        let indent = "  ".repeat(depth);
        let _ = writeln!(out, "{indent}{}", frame.name);
        for event in &frame.events {
            match event {
                TraceEvent::Assign(entry) => {
                    let value = match &entry.value {
                        Value::Str(s) => format!("{s:?}"),
                        other => other.to_string(),
                    };
                    let _ = writeln!(out, "{indent}  {} {} = {value}", entry.pos, entry.name);
                }
                TraceEvent::Call(child) => self.render_frame(*child, depth + 1, out),
            }
        }
    }
}

impl Default for TraceRecorder {
    fn default() -> Self {
        Self::new()
    }
}
