use std::fmt::Write;
use std::io::Write as _;

use colored::Colorize as _;

use crate::{node::Node, Tree};

/// Renders a tree sideways, one node per line, using box drawing characters.
///
/// ```text
/// ┏ 5
/// ┣L 3
/// ┃ ┣L 1
/// ┃ ┗R 4
/// ┗R 8
/// ```
pub struct TreeDisplay;

impl TreeDisplay {
    pub fn format<T, W, F>(root: Option<&Node<T>>, out: &mut W, data_format: F) -> std::fmt::Result
    where
        W: Write,
        F: Fn(&T, &mut W) -> std::fmt::Result,
    {
        let Some(root) = root else {
            return out.write_str("(empty)\n");
        };

        if root.is_leaf() {
            out.write_str("━ ")?;
        } else {
            out.write_str("┏ ")?;
        }
        data_format(root.elem(), out)?;
        out.write_char('\n')?;

        let mut prefix = String::new();
        Self::format_children(root, &mut prefix, out, &data_format)
    }

    fn format_children<T, W, F>(
        node: &Node<T>,
        prefix: &mut String,
        out: &mut W,
        data_format: &F,
    ) -> std::fmt::Result
    where
        W: Write,
        F: Fn(&T, &mut W) -> std::fmt::Result,
    {
        let children: Vec<(char, &Node<T>)> = [('L', node.left()), ('R', node.right())]
            .into_iter()
            .filter_map(|(side, child)| child.map(|c| (side, c)))
            .collect();

        let count = children.len();
        for (i, (side, child)) in children.into_iter().enumerate() {
            let last = i + 1 == count;

            out.write_str(prefix)?;
            out.write_char(if last { '┗' } else { '┣' })?;
            out.write_char(side)?;
            out.write_char(' ')?;
            data_format(child.elem(), out)?;
            out.write_char('\n')?;

            let restore = prefix.len();
            prefix.push_str(if last { "  " } else { "┃ " });
            Self::format_children(child, prefix, out, data_format)?;
            prefix.truncate(restore);
        }

        Ok(())
    }
}

impl<T, R> Tree<T, R>
where
    T: std::fmt::Display,
{
    /// Print the tree diagram to stdout with highlighted values
    pub fn print(&self) -> std::io::Result<()> {
        let mut out = String::new();
        TreeDisplay::format(self.root(), &mut out, |elem, f| {
            write!(f, "{}", elem.to_string().bright_green())
        })
        .map_err(std::io::Error::other)?;
        std::io::stdout().lock().write_all(out.as_bytes())
    }
}

impl<T, R> std::fmt::Display for Tree<T, R>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        TreeDisplay::format(self.root(), f, |elem, f| write!(f, "{}", elem))
    }
}

impl<T, R> std::fmt::Debug for Tree<T, R>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('\n')?;
        TreeDisplay::format(self.root(), f, |elem, f| write!(f, "{:?}", elem))
    }
}
