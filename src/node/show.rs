//! Textual renderings of a subtree: traversal listings and Graphviz
//! descriptions, written to any `io::Write` sink.

use std::fmt::Display;
use std::io::{self, Write};

use super::Link;

pub(crate) fn write_in_order<T, W>(link: &Link<T>, sink: &mut W) -> io::Result<()>
    where T: Display, W: Write {

    if let Some(ref node) = *link {
        write_in_order(&node.left, sink)?;
        writeln!(sink, "{} ({}/{})", node.item, node.balance, node.count)?;
        write_in_order(&node.right, sink)?;
    }

    Ok(())
}

pub(crate) fn write_pre_order<T, W>(link: &Link<T>, sink: &mut W) -> io::Result<()>
    where T: Display, W: Write {

    if let Some(ref node) = *link {
        writeln!(sink, "{} ({}/{})", node.item, node.balance, node.count)?;
        write_pre_order(&node.left, sink)?;
        write_pre_order(&node.right, sink)?;
    }

    Ok(())
}

pub(crate) fn write_post_order<T, W>(link: &Link<T>, sink: &mut W) -> io::Result<()>
    where T: Display, W: Write {

    if let Some(ref node) = *link {
        write_post_order(&node.left, sink)?;
        write_post_order(&node.right, sink)?;
        writeln!(sink, "{} ({}/{})", node.item, node.balance, node.count)?;
    }

    Ok(())
}

// A Graphviz digraph: every node identity first, then every parent-child
// edge, so an external renderer can draw the tree in one pass.
pub(crate) fn write_graph<T, W>(link: &Link<T>, sink: &mut W) -> io::Result<()>
    where T: Display, W: Write {

    writeln!(sink, "digraph {{")?;
    write_ids(link, sink)?;
    write_edges(link, sink)?;
    writeln!(sink, "}}")
}

fn write_ids<T, W>(link: &Link<T>, sink: &mut W) -> io::Result<()>
    where T: Display, W: Write {

    if let Some(ref node) = *link {
        write_ids(&node.left, sink)?;
        writeln!(sink, "    node{} [label=\"{} ({}/{})\"];",
                 node.item, node.item, node.balance, node.count)?;
        write_ids(&node.right, sink)?;
    }

    Ok(())
}

fn write_edges<T, W>(link: &Link<T>, sink: &mut W) -> io::Result<()>
    where T: Display, W: Write {

    if let Some(ref node) = *link {
        if let Some(ref left) = node.left {
            writeln!(sink, "    node{} -> node{};", node.item, left.item)?;
        }
        if let Some(ref right) = node.right {
            writeln!(sink, "    node{} -> node{};", node.item, right.item)?;
        }
        write_edges(&node.left, sink)?;
        write_edges(&node.right, sink)?;
    }

    Ok(())
}
