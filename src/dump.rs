// Text dumps of a queue's heap buffer.
//
// Presentation only: these read the entries and write to a sink, with no say
// in the heap order itself.

use std::fmt::Display;
use std::io;
use std::io::Write;

use crate::heap_index::index_depth;
use crate::heap_index::index_left_child;
use crate::heap_index::index_right_child;
use crate::pqueue::Entry;
use crate::pqueue::PQueue;
use crate::priority::Priority;

/// Writes the heap as an indented outline, one node per line.
///
/// The right subtree comes first and each node is indented three columns per
/// tree depth, so the outline reads as the tree rotated a quarter turn:
///
/// ```text
///    C(1)
/// B(10)
///    A(5)
/// ```
///
/// An optional `message` line comes first; an empty queue prints `(EMPTY)`.
pub fn write_tree<W, V, P>(w: &mut W, queue: &PQueue<V, P>, message: Option<&str>) -> io::Result<()>
where
    W: Write,
    V: Display,
    P: Priority + Display,
{
    if let Some(message) = message {
        writeln!(w, "{message}")?;
    }

    let entries = queue.as_slice();
    if entries.is_empty() {
        return writeln!(w, "(EMPTY)");
    }
    write_subtree(w, entries, 0)
}

fn write_subtree<W, V, P>(w: &mut W, entries: &[Entry<V, P>], i: usize) -> io::Result<()>
where
    W: Write,
    V: Display,
    P: Priority + Display,
{
    let right = index_right_child(i);
    if right < entries.len() {
        write_subtree(w, entries, right)?;
    }

    writeln!(w, "{:indent$}{}", "", entries[i], indent = 3 * index_depth(i))?;

    let left = index_left_child(i);
    if left < entries.len() {
        write_subtree(w, entries, left)?;
    }
    Ok(())
}

/// Writes every value on one line, in buffer order, space-separated.
///
/// An optional `message` line comes first; an empty queue prints `(EMPTY)`.
pub fn write_array<W, V, P>(
    w: &mut W,
    queue: &PQueue<V, P>,
    message: Option<&str>,
) -> io::Result<()>
where
    W: Write,
    V: Display,
    P: Priority,
{
    if let Some(message) = message {
        writeln!(w, "{message}")?;
    }

    let entries = queue.as_slice();
    if entries.is_empty() {
        return writeln!(w, "(EMPTY)");
    }
    for entry in entries {
        write!(w, "{} ", entry.value)?;
    }
    Ok(())
}
