// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Native object registry

use std::collections::HashMap;
use uilib_core::toolkit::Construct;
use uilib_core::{Handle, WindowFlags, WindowRequest};

/// Largest entry length limit the toolkit supports
pub(crate) const MAX_ENTRY_LENGTH: usize = 65535;

// Handles look like aligned addresses but are never dereferenced.
const FIRST_ADDRESS: usize = 0x1000;
const ADDRESS_STEP: usize = 16;

fn handle_at(addr: usize) -> Handle {
    Handle::from_ptr(std::ptr::without_provenance_mut(addr))
}

/// A native object
pub(crate) struct Node {
    pub class: &'static str,
    pub construct: Option<Construct>,
    pub window: Option<WindowRequest>,
    pub text: String,
    pub visible: bool,
}

/// All live objects
///
/// Destroyed objects are removed. Handle values come from a counter and are
/// never reused while the toolkit lives, thus a stale handle never resolves.
pub(crate) struct Registry {
    nodes: HashMap<usize, Node>,
    next_address: usize,
}

impl Default for Registry {
    fn default() -> Self {
        Registry {
            nodes: HashMap::new(),
            next_address: FIRST_ADDRESS,
        }
    }
}

impl Registry {
    pub fn add(
        &mut self,
        class: &'static str,
        construct: Option<Construct>,
        window: Option<WindowRequest>,
    ) -> Handle {
        let text = match (&construct, &window) {
            (Some(Construct::Button { label: Some(label) }), _)
            | (Some(Construct::CheckButton { label }), _)
            | (Some(Construct::Label { label }), _)
            | (Some(Construct::MenuItem { label, .. }), _) => label.clone(),
            (_, Some(request)) => request.title.clone(),
            _ => String::new(),
        };

        let addr = self.next_address;
        self.next_address += ADDRESS_STEP;
        self.nodes.insert(
            addr,
            Node {
                class,
                construct,
                window,
                text,
                visible: false,
            },
        );
        handle_at(addr)
    }

    /// A live node
    pub fn live(&self, handle: Handle) -> Option<&Node> {
        self.nodes.get(&handle.addr())
    }

    /// A live node, mutably
    pub fn live_mut(&mut self, handle: Handle) -> Option<&mut Node> {
        self.nodes.get_mut(&handle.addr())
    }

    /// Remove `window` and the windows destroyed with it
    ///
    /// Returns the handles removed.
    pub fn destroy(&mut self, window: Handle) -> Vec<Handle> {
        let mut destroyed = Vec::new();
        let mut pending = vec![window];
        while let Some(handle) = pending.pop() {
            if self.nodes.remove(&handle.addr()).is_none() {
                continue;
            }
            destroyed.push(handle);

            pending.extend(
                self.nodes
                    .iter()
                    .filter(|(_, node)| {
                        node.window.as_ref().is_some_and(|req| {
                            req.parent == handle
                                && req.flags.contains(WindowFlags::DESTROY_WITH_PARENT)
                        })
                    })
                    .map(|(addr, _)| handle_at(*addr)),
            );
        }
        destroyed
    }

    pub fn live_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Normalise construction parameters the way the native toolkit would
pub(crate) fn normalise(what: Construct) -> Construct {
    match what {
        Construct::Adjustment {
            value,
            lower,
            upper,
            step_increment,
            page_increment,
            page_size,
        } => {
            let value = if value < lower {
                lower
            } else if value > upper {
                upper.max(lower)
            } else {
                value
            };
            Construct::Adjustment {
                value,
                lower,
                upper,
                step_increment,
                page_increment,
                page_size,
            }
        }
        Construct::Entry {
            max_length: Some(n),
        } => Construct::Entry {
            max_length: Some(n.min(MAX_ENTRY_LENGTH)),
        },
        other => other,
    }
}
