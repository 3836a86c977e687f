//! Structured program emission.
//!
//! The generator performs the branching walk: a depth-first recursion over
//! the graph that, unlike the flat motion order, follows the tagged handles
//! of `ifBranch`/`loop`/`forEach` and emits every kind, not just motion. The
//! output is op-mode source for the robot controller runtime; users diff and
//! version these files outside this system, so emission order and formatting
//! are deterministic down to the byte.

mod preamble;
mod templates;

pub use preamble::HardwareConfig;

use crate::error::CompileError;
use crate::graph::{Graph, Handle, NodeId, NodeKind};
use crate::resolver;
use ahash::AHashSet;
use itertools::Itertools;
use templates::statement_for;
use tracing::debug;

const INDENT: &str = "    ";

/// Recursive code generator over an immutable graph snapshot.
pub struct CodeGenerator<'a> {
    graph: &'a Graph,
    hardware: &'a HardwareConfig,
    class_name: String,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(graph: &'a Graph, hardware: &'a HardwareConfig) -> Self {
        Self {
            graph,
            hardware,
            class_name: "AutonomousProgram".to_string(),
        }
    }

    pub fn with_class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = name.into();
        self
    }

    /// Compiles the graph into a complete op-mode source file.
    ///
    /// The body is produced by [`emit`](Self::emit) starting from the start
    /// node's successors; when no node on any path produces an action, the
    /// start gate and body wrapper are omitted and only the declaration
    /// preamble remains.
    pub fn generate(&self) -> Result<String, CompileError> {
        let start = resolver::single_start(self.graph)?;
        self.check_devices()?;
        debug!(nodes = self.graph.node_count(), "generating program");

        let visited = AHashSet::new();
        let (body, has_action) = self.emit_continuations(&start.id, &visited, 2);

        let mut out = String::new();
        out.push_str(&format!("public class {} extends LinearOpMode {{\n", self.class_name));

        if !self.hardware.is_empty() {
            out.push('\n');
            for line in self.hardware.declarations() {
                out.push_str(&indented(1, &line));
            }
        }

        out.push('\n');
        out.push_str(&indented(1, "@Override"));
        out.push_str(&indented(1, "public void runOpMode() {"));

        if !self.hardware.is_empty() {
            for line in self.hardware.initializers() {
                out.push_str(&indented(2, &line));
            }
            out.push('\n');
        }

        if has_action {
            out.push_str(&indented(2, "waitForStart();"));
            out.push_str(&indented(2, "if (!opModeIsActive()) {"));
            out.push_str(&indented(3, "return;"));
            out.push_str(&indented(2, "}"));
            out.push('\n');
            out.push_str(&body);
        }

        out.push_str(&indented(1, "}"));
        out.push_str("}\n");
        Ok(out)
    }

    /// Emits the statement block for one node and everything downstream of
    /// it, returning the text and whether any emitted node was an action.
    ///
    /// The visited set is copied per recursive branch, so diamonds that
    /// re-converge emit their shared tail once per path while a revisit
    /// within a single path stops with a cycle-guard comment. The validator
    /// already rejects true cycles; this is defense in depth for graphs that
    /// bypassed it.
    pub fn emit(&self, id: &str, visited: &AHashSet<NodeId>, indent: usize) -> (String, bool) {
        if visited.contains(id) {
            return (
                indented(indent, &format!("// cycle guard: '{id}' already emitted on this path")),
                false,
            );
        }
        let Some(node) = self.graph.node(id) else {
            // Dangling target mid-delete; this branch of the walk ends here.
            return (String::new(), false);
        };

        let mut visited = visited.clone();
        visited.insert(id.to_string());

        match &node.kind {
            NodeKind::IfBranch { condition } => {
                let mut out = indented(indent, &format!("if ({condition}) {{"));
                let mut has_action = false;
                if let Some(target) = self.graph.handle_successor(id, Handle::True) {
                    let (text, action) = self.emit(target, &visited, indent + 1);
                    out.push_str(&text);
                    has_action |= action;
                }
                if let Some(target) = self.graph.handle_successor(id, Handle::False) {
                    out.push_str(&indented(indent, "} else {"));
                    let (text, action) = self.emit(target, &visited, indent + 1);
                    out.push_str(&text);
                    has_action |= action;
                }
                out.push_str(&indented(indent, "}"));

                let (text, action) = self.emit_continuations(id, &visited, indent);
                out.push_str(&text);
                (out, has_action | action)
            }
            NodeKind::Loop { count } => {
                let var = format!("i{}", indent.saturating_sub(2));
                let mut out = indented(
                    indent,
                    &format!("for (int {var} = 0; {var} < {count}; {var}++) {{"),
                );
                let (body, mut has_action) = self.emit_handle(id, Handle::Loop, &visited, indent + 1);
                out.push_str(&body);
                out.push_str(&indented(indent, "}"));

                let (text, action) = self.emit_handle(id, Handle::Next, &visited, indent);
                out.push_str(&text);
                has_action |= action;
                (out, has_action)
            }
            NodeKind::ForEach { collection } => {
                let mut out = indented(indent, &format!("for (Object item : {collection}) {{"));
                let (body, mut has_action) = self.emit_handle(id, Handle::Loop, &visited, indent + 1);
                out.push_str(&body);
                out.push_str(&indented(indent, "}"));

                let (text, action) = self.emit_handle(id, Handle::Next, &visited, indent);
                out.push_str(&text);
                has_action |= action;
                (out, has_action)
            }
            NodeKind::Parallel => self.emit_continuations(id, &visited, indent),
            kind => {
                let mut out = String::new();
                let mut has_action = false;
                if let Some(lines) = statement_for(kind) {
                    for line in lines {
                        out.push_str(&indented(indent, &line));
                    }
                    // Stopping the op mode is bookkeeping, not an action the
                    // trajectory wrapper needs to exist for.
                    has_action = !matches!(kind, NodeKind::End);
                }
                let (text, action) = self.emit_continuations(id, &visited, indent);
                out.push_str(&text);
                (out, has_action | action)
            }
        }
    }

    /// Emits the untagged successors of a node: one in sequence, several as
    /// logically concurrent blocks in connection order. The generator never
    /// interleaves concurrent statements; it only marks the blocks.
    fn emit_continuations(
        &self,
        id: &str,
        visited: &AHashSet<NodeId>,
        indent: usize,
    ) -> (String, bool) {
        let successors: Vec<&NodeId> = self.graph.untagged_successors(id).collect();
        match successors.as_slice() {
            [] => (String::new(), false),
            [only] => self.emit(only.as_str(), visited, indent),
            many => {
                let mut out = String::new();
                let mut has_action = false;
                for (index, target) in many.iter().enumerate() {
                    out.push_str(&indented(indent, &format!("// concurrent block {}", index + 1)));
                    let (text, action) = self.emit(target.as_str(), visited, indent);
                    out.push_str(&text);
                    has_action |= action;
                }
                (out, has_action)
            }
        }
    }

    fn emit_handle(
        &self,
        id: &str,
        handle: Handle,
        visited: &AHashSet<NodeId>,
        indent: usize,
    ) -> (String, bool) {
        match self.graph.handle_successor(id, handle) {
            Some(target) => self.emit(target, visited, indent),
            None => (String::new(), false),
        }
    }

    /// Rejects references to devices absent from the hardware configuration
    /// before any text is produced, in stable node-id order.
    fn check_devices(&self) -> Result<(), CompileError> {
        for node in self.graph.nodes().sorted_by_key(|n| n.id.clone()) {
            let missing = match &node.kind {
                NodeKind::SetServo { servo, .. } if !self.hardware.has_servo(servo) => {
                    Some(servo.clone())
                }
                NodeKind::RunMotor { motor, .. } | NodeKind::StopMotor { motor }
                    if !self.hardware.has_motor(motor) =>
                {
                    Some(motor.clone())
                }
                _ => None,
            };
            if let Some(device) = missing {
                return Err(CompileError::UnknownDevice {
                    node_id: node.id.clone(),
                    device,
                });
            }
        }
        Ok(())
    }
}

fn indented(level: usize, text: &str) -> String {
    if text.is_empty() {
        return "\n".to_string();
    }
    format!("{}{}\n", INDENT.repeat(level), text)
}
